pub mod config;
pub mod confirm;
pub mod dates;
pub mod error;
pub mod fs;
pub mod materialize;
pub mod open;
pub mod templates;
pub mod weekly;

pub use error::{Result, TidyError};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
