use serde::{Deserialize, Serialize};
use url::Url;

pub const DEFAULT_CONTAINER_ID: &str = "pickup-container";
pub const DEFAULT_LISTING_PATH: &str = "products.html";
pub const DEFAULT_CARD_SELECTOR: &str = ".card";
pub const DEFAULT_PICKUP_COUNT: usize = 3;

pub const LOCAL_FILE_NOTICE: &str = "ローカルファイルとして閲覧中。動的コンテンツ（商品のランダム表示）を確認するには、VSCode の 「Live Server」 拡張機能などをご利用ください。";
pub const NO_PRODUCTS_MESSAGE: &str = "No products found.";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load pickups.";

/// Where the home page is being viewed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    location: Url,
}

impl PageContext {
    pub fn new(location: Url) -> Self {
        Self { location }
    }

    pub fn location(&self) -> &Url {
        &self.location
    }

    /// Pages opened straight from disk cannot fetch sibling documents.
    pub fn is_local_file(&self) -> bool {
        self.location.scheme() == "file"
    }

    pub fn resolve(&self, relative: &str) -> crate::utils::error::Result<Url> {
        Ok(self.location.join(relative)?)
    }
}

/// The substitute content rendered into the container instead of cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    LocalFile,
    NoProducts,
    LoadFailed,
}

impl Fallback {
    pub fn message(&self) -> &'static str {
        match self {
            Fallback::LocalFile => LOCAL_FILE_NOTICE,
            Fallback::NoProducts => NO_PRODUCTS_MESSAGE,
            Fallback::LoadFailed => LOAD_FAILED_MESSAGE,
        }
    }

    fn style(&self) -> &'static str {
        match self {
            Fallback::LocalFile => {
                "grid-column: 1 / -1; color: var(--text-muted); font-size: 0.9rem;"
            }
            Fallback::NoProducts => "grid-column: 1 / -1;",
            Fallback::LoadFailed => "grid-column: 1 / -1; color: var(--text-muted);",
        }
    }

    /// Markup for a full-width paragraph inside the card grid.
    pub fn markup(&self) -> String {
        format!(
            r#"<p class="text-center" style="{}">{}</p>"#,
            self.style(),
            self.message()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PickupOutcome {
    Rendered { count: usize },
    NoProducts,
    LocalFileNotice,
    Failed { reason: String },
    /// The page has no container, nothing was touched.
    Inert,
}

impl PickupOutcome {
    pub fn fallback(&self) -> Option<Fallback> {
        match self {
            PickupOutcome::NoProducts => Some(Fallback::NoProducts),
            PickupOutcome::LocalFileNotice => Some(Fallback::LocalFile),
            PickupOutcome::Failed { .. } => Some(Fallback::LoadFailed),
            PickupOutcome::Rendered { .. } | PickupOutcome::Inert => None,
        }
    }
}
