//! Project file structures

mod error;
mod format;
mod repr;


pub use error::{Error, Result};
pub use format::OutputFormat;
pub use repr::Project;
