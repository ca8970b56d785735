//! Inputs read from the user's Factorio installation.

pub mod credentials;
pub mod mod_list;

pub use credentials::{CredentialsError, PLAYER_DATA_FILE, load_credentials};
pub use mod_list::{ModListError, parse_mod_names, read_mod_list};
