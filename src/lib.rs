pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{ShortCablePolicy, SplitterConfig};
pub use crate::core::splitter::Splitter;
pub use crate::domain::model::Cable;
pub use crate::utils::error::{Result, SplitError};
