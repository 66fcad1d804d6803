use crate::utils::error::{PickupError, Result};
use ego_tree::{NodeId, NodeRef};
use scraper::{Html, Node, Selector};

/// A parsed CSS selector for product cards, e.g. `.card`.
#[derive(Debug, Clone)]
pub struct CardSelector {
    source: String,
    selector: Selector,
}

impl CardSelector {
    pub fn parse(selector: &str) -> Result<Self> {
        let parsed = Selector::parse(selector).map_err(|e| PickupError::SelectorError {
            selector: selector.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            source: selector.to_string(),
            selector: parsed,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

/// The product listing document and the cards found in it, in document order.
pub struct Listing {
    document: Html,
    cards: Vec<NodeId>,
}

impl Listing {
    pub fn parse(markup: &str, selector: &CardSelector) -> Self {
        let document = Html::parse_document(markup);
        let cards = document
            .select(&selector.selector)
            .map(|card| card.id())
            .collect();
        Self { document, cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn card_ids(&self) -> &[NodeId] {
        &self.cards
    }

    pub fn card(&self, id: NodeId) -> Option<NodeRef<'_, Node>> {
        self.document.tree.get(id)
    }
}
