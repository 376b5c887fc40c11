use thiserror::Error;

/// Errors raised while navigating a node tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// No enclosing element with the requested tag was found.
    /// `steps` is the number of parent hops taken before giving up.
    #[error("Parent element '{tag}' not found within {steps} iterations")]
    AncestorNotFound { tag: String, steps: usize },
}

impl TreeError {
    pub fn ancestor_not_found(tag: impl Into<String>, steps: usize) -> Self {
        Self::AncestorNotFound {
            tag: tag.into(),
            steps,
        }
    }
}
