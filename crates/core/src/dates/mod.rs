//! Date resolution: the Tuesday of a reference week and reference-date parsing.

pub mod reference;
pub mod tuesday;

pub use reference::{DateError, parse_reference_date};
pub use tuesday::{ISO_DATE, current_tuesday, current_tuesday_of, default_file_name};
