use crate::config::{PickupSettings, SiteConfig};
use crate::utils::error::{PickupError, Result};
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "bean-pickup")]
#[command(about = "Prerender random product pickups into a shop home page")]
pub struct CliConfig {
    /// URL the home page is viewed at (http, https or file)
    #[arg(long)]
    pub location: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Id of the element that receives the pickups
    #[arg(long)]
    pub container_id: Option<String>,

    /// Listing page, relative to the home page
    #[arg(long)]
    pub listing_path: Option<String>,

    /// CSS selector matching one product card
    #[arg(long)]
    pub card_selector: Option<String>,

    /// Number of cards to pick
    #[arg(long)]
    pub count: Option<usize>,

    /// Seed for reproducible sampling
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the rendered page here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the load outcome as JSON on stderr
    #[arg(long)]
    pub report: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

/// Everything the binary needs after flags and the config file are merged.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub site_name: Option<String>,
    pub location: Url,
    pub settings: PickupSettings,
    pub output: Option<PathBuf>,
}

impl CliConfig {
    /// Flags win over the config file, the config file wins over defaults.
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        let file = match &self.config {
            Some(path) => SiteConfig::from_file(path)?,
            None => SiteConfig::default(),
        };
        file.validate()?;

        let location = self
            .location
            .clone()
            .or(file.site.location)
            .ok_or_else(|| PickupError::MissingConfigError {
                field: "location".to_string(),
            })?;
        let location = validation::validate_location("location", &location)?;

        let mut settings = file.pickup;
        if let Some(id) = &self.container_id {
            settings.container_id = id.clone();
        }
        if let Some(path) = &self.listing_path {
            settings.listing_path = path.clone();
        }
        if let Some(selector) = &self.card_selector {
            settings.card_selector = selector.clone();
        }
        if let Some(count) = self.count {
            settings.pickup_count = count;
        }
        settings.validate()?;

        let output = self
            .output
            .clone()
            .or_else(|| file.site.output_path.map(PathBuf::from));

        Ok(ResolvedConfig {
            site_name: file.site.name,
            location,
            settings,
            output,
        })
    }
}
