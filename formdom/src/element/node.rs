use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// An owned markup element.
///
/// Elements are built bottom-up with the builder methods and handed to
/// [`crate::Document::from_root`], which records the parent links needed
/// for upward traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: String,

    // Content
    pub content: Content,

    // Markup attributes (name, type, input-field, ...)
    pub attrs: HashMap<String, String>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self {
            id: generate_id(&tag.to_ascii_lowercase()),
            tag,
            content: Content::None,
            attrs: HashMap::new(),
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn span(text: impl Into<String>) -> Self {
        Self::new("span").text(text)
    }

    pub fn form(name: impl Into<String>) -> Self {
        Self::new("form").attr("name", name)
    }

    pub fn input(name: impl Into<String>) -> Self {
        Self::new("input").attr("name", name)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    // Content
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    /// Append a child. Replaces text content if any was set.
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        for child in children {
            self = self.child(child);
        }
        self
    }

    /// Case-insensitive tag comparison, the way markup tag names compare.
    pub fn is_tag(&self, tag: &str) -> bool {
        self.tag.eq_ignore_ascii_case(tag)
    }
}
