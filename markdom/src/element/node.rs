use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// A node in the markup tree.
///
/// Elements are built with a consuming builder API and mutated in place
/// through the accessor methods. Every element gets a unique generated id
/// unless one is assigned explicitly; ids are how handles into a rendered
/// subtree are kept.
#[derive(Debug, Clone)]
pub struct Element {
    // Identity
    pub id: String,

    /// Markup tag name ("div", "span", "a", ...).
    pub tag: String,

    /// CSS classes, in declaration order.
    pub classes: Vec<String>,

    /// Plain attributes (href, title, ...), excluding `data-*`.
    pub attrs: HashMap<String, String>,

    /// Custom data attributes, serialized as `data-<key>`.
    pub data: HashMap<String, String>,

    /// Whether pointer events target this element.
    pub clickable: bool,

    pub content: Content,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: "div".to_string(),
            classes: Vec::new(),
            attrs: HashMap::new(),
            data: HashMap::new(),
            clickable: false,
            content: Content::None,
        }
    }
}

impl Element {
    pub fn div() -> Self {
        Self {
            id: generate_id("div"),
            ..Default::default()
        }
    }

    pub fn span() -> Self {
        Self {
            id: generate_id("span"),
            tag: "span".to_string(),
            ..Default::default()
        }
    }

    pub fn anchor(href: impl Into<String>) -> Self {
        let mut attrs = HashMap::new();
        attrs.insert("href".to_string(), href.into());
        Self {
            id: generate_id("a"),
            tag: "a".to_string(),
            attrs,
            ..Default::default()
        }
    }

    /// Create a `span` holding plain text.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            tag: "span".to_string(),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    /// Replace the content with plain text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            Content::None => self.content = Content::Children(vec![child]),
            _ => {
                self.content = Content::Children(vec![child]);
            }
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            Content::None => self.content = Content::Children(new_children.into_iter().collect()),
            _ => {
                self.content = Content::Children(new_children.into_iter().collect());
            }
        }
        self
    }

    // -------------------------------------------------------------------
    // In-place accessors (used when patching a rendered subtree)
    // -------------------------------------------------------------------

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    pub fn has_data(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    pub fn set_data(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.data.insert(key.into(), value.into());
    }

    pub fn remove_data(&mut self, key: &str) -> Option<String> {
        self.data.remove(key)
    }

    /// The child elements, empty for text or childless nodes.
    pub fn child_slice(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Element>> {
        match &mut self.content {
            Content::Children(children) => Some(children),
            _ => None,
        }
    }

    /// Replace all children, leaving siblings of `self` untouched.
    pub fn set_children(&mut self, children: Vec<Element>) {
        self.content = Content::Children(children);
    }

    pub fn push_child(&mut self, child: Element) {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
    }

    /// Find the first direct child matching the predicate, mutably.
    pub fn find_child_mut(
        &mut self,
        mut pred: impl FnMut(&Element) -> bool,
    ) -> Option<&mut Element> {
        self.children_mut()?.iter_mut().find(|c| pred(c))
    }

    /// Detach and return the first direct child matching the predicate.
    pub fn detach_child(&mut self, mut pred: impl FnMut(&Element) -> bool) -> Option<Element> {
        let children = self.children_mut()?;
        let index = children.iter().position(|c| pred(c))?;
        Some(children.remove(index))
    }
}
