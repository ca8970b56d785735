//! Shared fixtures: a wiremock-backed mod portal and an event recorder.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use modfetch_download::{
    Credentials, FetchConfig, FetchEvent, FetchEventEmitterPort, FetchOrchestrator,
};
use modfetch_registry::{DefaultRegistryClient, RegistryClientConfig};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const USERNAME: &str = "engineer";
pub const TOKEN: &str = "tok-3f9a-secret";

pub fn credentials() -> Credentials {
    Credentials::new(USERNAME, TOKEN)
}

/// Deterministic archive body for a mod/version pair.
pub fn archive_bytes(name: &str, version: &str, len: usize) -> Vec<u8> {
    let seed = format!("PK{name}{version}");
    seed.bytes().cycle().take(len).collect()
}

/// A fake mod portal.
pub struct Portal {
    pub server: MockServer,
}

impl Portal {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Serve metadata listing `versions` in the given order.
    pub async fn mod_info(&self, name: &str, versions: &[&str]) {
        let releases: Vec<_> = versions
            .iter()
            .map(|v| {
                json!({
                    "version": v,
                    "download_url": format!("/download/{name}/{v}"),
                    "file_name": format!("{name}_{v}.zip"),
                })
            })
            .collect();

        Mock::given(method("GET"))
            .and(path(format!("/api/mods/{name}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": name,
                "releases": releases,
            })))
            .mount(&self.server)
            .await;
    }

    /// Serve the archive for one release, requiring the test credentials.
    pub async fn archive(&self, name: &str, version: &str, body: Vec<u8>, delay: Duration) {
        Mock::given(method("GET"))
            .and(path(format!("/download/{name}/{version}")))
            .and(query_param("username", USERNAME))
            .and(query_param("token", TOKEN))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(body, "application/zip")
                    .set_delay(delay),
            )
            .mount(&self.server)
            .await;
    }

    /// Serve an arbitrary response on the download path of one release.
    pub async fn archive_response(&self, name: &str, version: &str, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path(format!("/download/{name}/{version}")))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    pub async fn missing(&self, name: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/api/mods/{name}")))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "message": "Mod not found"
            })))
            .mount(&self.server)
            .await;
    }

    /// Number of requests that hit a download path.
    pub async fn download_requests(&self) -> usize {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|r| r.url.path().starts_with("/download/"))
            .count()
    }

    pub fn orchestrator(&self, emitter: Arc<RecordingEmitter>, jobs: usize) -> FetchOrchestrator {
        let config = RegistryClientConfig::new().with_base_url(self.server.uri());
        let registry = DefaultRegistryClient::new(&config).unwrap();
        FetchOrchestrator::new(
            Arc::new(registry),
            emitter,
            FetchConfig::new().with_max_concurrent(jobs),
        )
    }
}

#[derive(Default)]
pub struct RecordingEmitter {
    events: Mutex<Vec<FetchEvent>>,
}

impl RecordingEmitter {
    pub fn events(&self) -> Vec<FetchEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl FetchEventEmitterPort for RecordingEmitter {
    fn emit(&self, event: FetchEvent) {
        self.events.lock().unwrap().push(event);
    }
}

/// Sorted file names in `dir`.
pub fn dir_entries(dir: &std::path::Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
