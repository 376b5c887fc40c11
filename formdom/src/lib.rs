pub mod ancestor;
pub mod document;
pub mod element;
pub mod error;

pub use ancestor::{find_ancestor, find_ancestor_with_depth, TreeNode, MAX_ANCESTOR_STEPS};
pub use document::{Document, NodeId, NodeRef};
pub use element::Element;
pub use error::TreeError;
