//! Upward search for an enclosing element.

use crate::document::NodeRef;
use crate::error::TreeError;

/// Upper bound on parent hops before giving up.
pub const MAX_ANCESTOR_STEPS: usize = 100;

/// A node that knows its tag and can reach its parent.
///
/// Anything that can answer those two questions can be searched with
/// [`find_ancestor`]: a [`crate::Document`] node, a host toolkit's own
/// element handle, or a test double.
pub trait TreeNode: Sized {
    fn tag_name(&self) -> &str;
    fn parent(&self) -> Option<Self>;
}

impl TreeNode for NodeRef<'_> {
    fn tag_name(&self) -> &str {
        NodeRef::tag_name(self)
    }

    fn parent(&self) -> Option<Self> {
        NodeRef::parent(self)
    }
}

/// Find the nearest node, starting with `node` itself, whose tag matches
/// `tag` (ASCII case-insensitive).
pub fn find_ancestor<N: TreeNode>(node: N, tag: &str) -> Result<N, TreeError> {
    find_ancestor_with_depth(node, tag).map(|(found, _)| found)
}

/// Like [`find_ancestor`], also returning how many parent hops were taken.
///
/// Fails with [`TreeError::AncestorNotFound`] when the root is passed
/// without a match or after [`MAX_ANCESTOR_STEPS`] hops.
pub fn find_ancestor_with_depth<N: TreeNode>(
    node: N,
    tag: &str,
) -> Result<(N, usize), TreeError> {
    let mut current = node;
    let mut steps = 0;

    loop {
        if current.tag_name().eq_ignore_ascii_case(tag) {
            log::trace!("[find_ancestor] found <{tag}> after {steps} steps");
            return Ok((current, steps));
        }

        let Some(parent) = current.parent() else {
            log::warn!("[find_ancestor] reached root after {steps} steps without finding <{tag}>");
            return Err(TreeError::ancestor_not_found(tag, steps));
        };
        current = parent;
        steps += 1;

        if steps == MAX_ANCESTOR_STEPS {
            log::warn!("[find_ancestor] <{tag}> not found within {MAX_ANCESTOR_STEPS} steps");
            return Err(TreeError::ancestor_not_found(tag, MAX_ANCESTOR_STEPS));
        }
    }
}
