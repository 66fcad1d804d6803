use crate::domain::model::PageContext;
use crate::utils::error::{PickupError, Result};
use ego_tree::{NodeId, NodeRef, Tree};
use scraper::{ElementRef, Html, Node};

/// Handle to the mount point inside a [`HomePage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerId(NodeId);

/// The home page being augmented, held as a mutable document tree.
pub struct HomePage {
    document: Html,
    context: PageContext,
}

impl HomePage {
    pub fn parse(markup: &str, context: PageContext) -> Self {
        Self {
            document: Html::parse_document(markup),
            context,
        }
    }

    pub fn context(&self) -> &PageContext {
        &self.context
    }

    /// Looks up the element carrying `id`. The first match wins.
    pub fn find_container(&self, id: &str) -> Option<ContainerId> {
        self.document
            .tree
            .root()
            .descendants()
            .find(|node| matches!(node.value(), Node::Element(el) if el.id() == Some(id)))
            .map(|node| ContainerId(node.id()))
    }

    /// Detaches every child of the container.
    ///
    /// Detached nodes stay in the tree's arena until the page is dropped, so a
    /// host that reloads the same `HomePage` many times keeps growing it.
    /// Re-parse the page instead when that matters.
    pub fn clear(&mut self, container: ContainerId) -> Result<()> {
        let children: Vec<NodeId> = self
            .container_node(container)?
            .children()
            .map(|child| child.id())
            .collect();

        for id in children {
            if let Some(mut child) = self.document.tree.get_mut(id) {
                child.detach();
            }
        }
        Ok(())
    }

    /// Appends a deep copy of `source` (from any tree) as the container's last child.
    pub fn append_clone(&mut self, container: ContainerId, source: NodeRef<'_, Node>) -> Result<()> {
        graft(&mut self.document.tree, container.0, source).ok_or_else(|| container_gone(container))?;
        Ok(())
    }

    /// Clears the container and fills it with the parsed `markup` fragment.
    pub fn replace_with_markup(&mut self, container: ContainerId, markup: &str) -> Result<()> {
        self.clear(container)?;

        let fragment = Html::parse_fragment(markup);
        // 片段解析後的節點都掛在 <html> 之下
        let wrapper: NodeRef<'_, Node> = *fragment.root_element();
        for child in wrapper.children() {
            self.append_clone(container, child)?;
        }
        Ok(())
    }

    /// Outer HTML of each element child of the container, in order.
    pub fn container_children_html(&self, container: ContainerId) -> Vec<String> {
        self.document
            .tree
            .get(container.0)
            .map(|node| {
                node.children()
                    .filter_map(ElementRef::wrap)
                    .map(|el| el.html())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn container_text(&self, container: ContainerId) -> String {
        self.document
            .tree
            .get(container.0)
            .and_then(ElementRef::wrap)
            .map(|el| el.text().collect::<String>())
            .unwrap_or_default()
    }

    /// Serializes the whole page back to markup.
    pub fn html(&self) -> String {
        self.document.html()
    }

    fn container_node(&self, container: ContainerId) -> Result<NodeRef<'_, Node>> {
        self.document
            .tree
            .get(container.0)
            .ok_or_else(|| container_gone(container))
    }
}

fn container_gone(container: ContainerId) -> PickupError {
    PickupError::PageError {
        message: format!("container node {:?} is not part of the page", container.0),
    }
}

/// Copies `source` and its whole subtree under `parent` in `dest`.
fn graft(dest: &mut Tree<Node>, parent: NodeId, source: NodeRef<'_, Node>) -> Option<NodeId> {
    let id = dest.get_mut(parent)?.append(source.value().clone()).id();
    for child in source.children() {
        graft(dest, id, child)?;
    }
    Some(id)
}
