//! Leaf depth extraction.
//!
//! The depth of a leaf is the length of its codeword. Traversals use an
//! explicit stack: trees over many zero or tiny weights can be as deep as
//! they are wide.

use crate::tree::{CodeTree, Node, NodeId};

/// Depths of the leaves below `id`, offset by `start_depth`, in left-to-right
/// leaf order.
///
/// A leaf yields `[start_depth]`; an internal node yields its children's
/// depths at `start_depth + 1`.
pub fn depths(tree: &CodeTree<'_>, id: NodeId, start_depth: u32) -> Vec<u32> {
    let mut out = Vec::new();
    walk(tree, id, start_depth, |_, depth| out.push(depth));
    out
}

/// Depth of every leaf of the finished tree, indexed by sorted position.
///
/// Returns an empty vector for a tree without root.
pub fn depths_by_position(tree: &CodeTree<'_>) -> Vec<u32> {
    let Some(root) = tree.root() else {
        return Vec::new();
    };
    let mut out = vec![0; tree.array().len()];
    walk(tree, root, 0, |position, depth| out[position] = depth);
    out
}

/// Code length of every symbol of the finished tree, in input order.
pub fn code_lengths(tree: &CodeTree<'_>) -> Vec<u32> {
    let array = tree.array();
    let by_position = depths_by_position(tree);
    let mut lengths = vec![0; by_position.len()];
    for (position, &depth) in by_position.iter().enumerate() {
        lengths[array.original_index(position)] = depth;
    }
    lengths
}

fn walk(tree: &CodeTree<'_>, id: NodeId, start_depth: u32, mut visit: impl FnMut(usize, u32)) {
    let mut stack = vec![(id, start_depth)];
    while let Some((top, depth)) = stack.pop() {
        match tree.node(top) {
            Node::External { position } => visit(position, depth),
            Node::Internal { left, right, .. } => {
                stack.push((right, depth + 1));
                stack.push((left, depth + 1));
            }
        }
    }
}
