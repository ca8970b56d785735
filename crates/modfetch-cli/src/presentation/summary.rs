//! Batch summary rendering.

use std::time::Duration;

use modfetch_core::{BatchSummary, format_kib, kib_per_sec};

/// `{prefix} (X KiB in Y s; Z KiB/s)` with one decimal for time and rate.
pub fn rate_line(prefix: &str, bytes: u64, elapsed: Duration) -> String {
    format!(
        "{prefix} ({} KiB in {:.1} s; {:.1} KiB/s)",
        format_kib(bytes),
        elapsed.as_secs_f64(),
        kib_per_sec(bytes, elapsed)
    )
}

/// One line per failed artifact, then the totals line.
///
/// The totals count every artifact that is now present on disk, whether it
/// was downloaded by this run or already there.
pub fn render_summary(summary: &BatchSummary) -> Vec<String> {
    let mut lines: Vec<String> = summary
        .failed()
        .filter_map(|result| {
            result
                .error()
                .map(|error| format!("Failed {}: [{}] {error}", result.name, error.kind()))
        })
        .collect();

    let present = summary.count() - summary.failure_count();
    lines.push(rate_line(
        &format!("Downloaded {present} mods"),
        summary.total_bytes(),
        summary.elapsed(),
    ));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use modfetch_core::{ArtifactName, FetchError, TransferResult};
    use std::path::PathBuf;

    #[test]
    fn rate_line_rounds_to_one_decimal() {
        let line = rate_line("Downloaded alpha", 1_536_000, Duration::from_millis(2_340));
        assert_eq!(line, "Downloaded alpha (1500 KiB in 2.3 s; 641.0 KiB/s)");
    }

    #[test]
    fn rate_line_with_zero_time_has_zero_rate() {
        let line = rate_line("Downloaded 0 mods", 0, Duration::ZERO);
        assert_eq!(line, "Downloaded 0 mods (0 KiB in 0.0 s; 0.0 KiB/s)");
    }

    #[test]
    fn summary_lists_failures_before_totals() {
        let mut summary = BatchSummary::new(3);
        summary.record(TransferResult::downloaded(
            ArtifactName::from("beta"),
            "2.0.0",
            PathBuf::from("beta_2.0.0.zip"),
            2048,
            Duration::from_secs(1),
        ));
        summary.record(TransferResult::skipped(
            ArtifactName::from("alpha"),
            "1.0.0",
            PathBuf::from("alpha_1.0.0.zip"),
        ));
        summary.record(TransferResult::failed(
            ArtifactName::from("ghost"),
            None,
            FetchError::not_found("ghost"),
        ));
        summary.finish(Duration::from_secs(2));

        let lines = render_summary(&summary);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Failed ghost: [not_found]"));
        assert!(lines[0].contains("ghost"));
        assert_eq!(lines[1], "Downloaded 2 mods (2 KiB in 2.0 s; 1.0 KiB/s)");
    }
}
