use crate::core::listing::{CardSelector, Listing};
use crate::core::page::{ContainerId, HomePage};
use crate::core::sampler::sample;
use crate::domain::model::{Fallback, PickupOutcome};
use crate::domain::ports::{ConfigProvider, DocumentSource};
use crate::utils::error::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Fills the pickup container with randomly chosen cards from the listing page.
pub struct PickupLoader<S: DocumentSource> {
    source: S,
    container_id: String,
    listing_path: String,
    selector: CardSelector,
    pickup_count: usize,
    rng: StdRng,
}

impl<S: DocumentSource> PickupLoader<S> {
    pub fn new<C: ConfigProvider>(source: S, config: &C) -> Result<Self> {
        Ok(Self {
            source,
            container_id: config.container_id().to_string(),
            listing_path: config.listing_path().to_string(),
            selector: CardSelector::parse(config.card_selector())?,
            pickup_count: config.pickup_count(),
            rng: StdRng::from_entropy(),
        })
    }

    /// Makes the sampling reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Entry point for the hosting environment, called once the page is ready.
    ///
    /// Pages without the container are left untouched.
    pub async fn init_site(&mut self, page: &mut HomePage) -> PickupOutcome {
        tracing::info!("Bean Shop Site Loaded");

        match page.find_container(&self.container_id) {
            Some(container) => self.load(page, container).await,
            None => {
                tracing::debug!("No #{} on this page, pickups disabled", self.container_id);
                PickupOutcome::Inert
            }
        }
    }

    /// Replaces the container's content with sampled cards or a fallback message.
    ///
    /// Never fails: every problem ends up as a fallback in the container.
    pub async fn load(&mut self, page: &mut HomePage, container: ContainerId) -> PickupOutcome {
        let outcome = if page.context().is_local_file() {
            tracing::error!(
                "Fetch is blocked on the file:// protocol. Please use a local server to view dynamic content."
            );
            PickupOutcome::LocalFileNotice
        } else {
            match self.try_load(page, container).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::error!("❌ Error loading pickups: {} (category: {:?})", e, e.category());
                    PickupOutcome::Failed {
                        reason: e.to_string(),
                    }
                }
            }
        };

        if let Some(fallback) = outcome.fallback() {
            render_fallback(page, container, fallback);
        }
        outcome
    }

    async fn try_load(&mut self, page: &mut HomePage, container: ContainerId) -> Result<PickupOutcome> {
        let url = page.context().resolve(&self.listing_path)?;
        let markup = self.source.fetch_document(&url).await?;

        let listing = Listing::parse(&markup, &self.selector);
        tracing::debug!(
            "Found {} cards matching '{}' in {}",
            listing.len(),
            self.selector.as_str(),
            url
        );

        if listing.is_empty() {
            tracing::warn!("⚠️ No products found in {}", url);
            return Ok(PickupOutcome::NoProducts);
        }

        let selected = sample(listing.card_ids().to_vec(), self.pickup_count, &mut self.rng);

        page.clear(container)?;
        for id in &selected {
            if let Some(card) = listing.card(*id) {
                page.append_clone(container, card)?;
            }
        }

        tracing::info!("✅ Rendered {} of {} pickups", selected.len(), listing.len());
        Ok(PickupOutcome::Rendered {
            count: selected.len(),
        })
    }
}

fn render_fallback(page: &mut HomePage, container: ContainerId, fallback: Fallback) {
    if let Err(e) = page.replace_with_markup(container, &fallback.markup()) {
        tracing::warn!("Could not render fallback message: {}", e);
    }
}
