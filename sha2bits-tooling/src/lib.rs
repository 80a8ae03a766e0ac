#![deny(clippy::all, clippy::perf, clippy::correctness, rust_2018_idioms)]
#![warn(clippy::unwrap_used)]

pub mod message;
pub mod report;
pub mod settings;

pub use message::{load_message, trim_message};
pub use report::{verify, Report};
pub use settings::{OutputFormat, Settings, SETTINGS};
