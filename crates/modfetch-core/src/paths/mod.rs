//! Path utilities for destination directories and the Factorio home.
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - adapters handle user prompts separately
//! - OS-specific logic is kept private in `platform`

mod ensure;
mod error;
mod factorio;
mod platform;

pub use ensure::check_output_directory;
pub use error::PathError;
pub use factorio::{
    FACTORIO_HOME_ENV, FactorioHomeResolution, FactorioHomeSource, default_factorio_home,
    resolve_factorio_home,
};
pub use platform::normalize_user_path;
