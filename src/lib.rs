pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{FileDocumentSource, HttpDocumentSource};
pub use config::{PickupSettings, SiteConfig};
pub use crate::core::{loader::PickupLoader, page::HomePage};
pub use domain::model::{PageContext, PickupOutcome};
pub use utils::error::{PickupError, Result};
