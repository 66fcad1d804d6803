#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::SiteConfig;

use crate::domain::ports::ConfigProvider;
use crate::domain::model::{
    DEFAULT_CARD_SELECTOR, DEFAULT_CONTAINER_ID, DEFAULT_LISTING_PATH, DEFAULT_PICKUP_COUNT,
};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

/// Where the pickups go, where they come from, and how many.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickupSettings {
    pub container_id: String,
    pub listing_path: String,
    pub card_selector: String,
    pub pickup_count: usize,
}

impl Default for PickupSettings {
    fn default() -> Self {
        Self {
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            listing_path: DEFAULT_LISTING_PATH.to_string(),
            card_selector: DEFAULT_CARD_SELECTOR.to_string(),
            pickup_count: DEFAULT_PICKUP_COUNT,
        }
    }
}

impl ConfigProvider for PickupSettings {
    fn container_id(&self) -> &str {
        &self.container_id
    }

    fn listing_path(&self) -> &str {
        &self.listing_path
    }

    fn card_selector(&self) -> &str {
        &self.card_selector
    }

    fn pickup_count(&self) -> usize {
        self.pickup_count
    }
}

impl Validate for PickupSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_element_id("pickup.container_id", &self.container_id)?;
        validation::validate_relative_path("pickup.listing_path", &self.listing_path)?;
        validation::validate_non_empty_string("pickup.card_selector", &self.card_selector)?;
        validation::validate_positive_number("pickup.pickup_count", self.pickup_count, 1)?;
        Ok(())
    }
}
