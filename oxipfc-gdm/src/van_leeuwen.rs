//! Van Leeuwen's two-queue construction.
//!
//! Leaves are consumed in sorted order and every merge result is appended to
//! a second queue, which stays sorted on its own. Each step compares the next
//! leaf with the smallest internal node; ties go to the leaf.

use crate::depths;
use crate::tree::{CodeTree, NodeId};
use oxipfc_core::error::Result;
use oxipfc_core::{PartiallySortedArray, Weight};
use std::collections::VecDeque;

/// Kind of node picked by a merge step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choice {
    /// A leaf.
    External,
    /// An internal node.
    Internal,
}

impl Choice {
    /// `'E'` or `'I'`.
    pub fn as_char(self) -> char {
        match self {
            Choice::External => 'E',
            Choice::Internal => 'I',
        }
    }
}

struct Merger<'a> {
    tree: CodeTree<'a>,
    internals: VecDeque<NodeId>,
    next: usize,
}

impl<'a> Merger<'a> {
    fn roots(&self) -> usize {
        self.tree.array().len() - self.next + self.internals.len()
    }

    fn pick(&mut self, observe: &mut impl FnMut(Choice)) -> Option<NodeId> {
        let array = self.tree.array();
        let leaf_left = self.next < array.len();
        let take_leaf = match self.internals.front() {
            None => leaf_left,
            Some(&front) => leaf_left && array.select(self.next) <= self.tree.weight(front),
        };

        if take_leaf {
            observe(Choice::External);
            let leaf = self.tree.external(self.next);
            self.next += 1;
            Some(leaf)
        } else {
            let node = self.internals.pop_front()?;
            observe(Choice::Internal);
            Some(node)
        }
    }
}

/// Build an optimal code tree, reporting the kind of every node picked.
///
/// After the merges, the kind of the root is reported as well: `Internal`
/// when there are two or more weights, `External` for a single weight.
pub fn build_with<'a>(
    array: &'a PartiallySortedArray,
    mut observe: impl FnMut(Choice),
) -> CodeTree<'a> {
    let mut merger = Merger {
        tree: CodeTree::new(array),
        internals: VecDeque::with_capacity(array.len() / 2 + 1),
        next: 0,
    };

    while merger.roots() > 1 {
        let (Some(left), Some(right)) = (merger.pick(&mut observe), merger.pick(&mut observe))
        else {
            break;
        };
        let node = merger.tree.internal(left, right);
        merger.internals.push_back(node);
    }

    let mut tree = merger.tree;
    if let Some(root) = merger.internals.pop_front() {
        observe(Choice::Internal);
        tree.set_root(root);
    } else if array.len() == 1 {
        observe(Choice::External);
        let leaf = tree.external(0);
        tree.set_root(leaf);
    }
    tree
}

/// Build an optimal code tree.
pub fn build(array: &PartiallySortedArray) -> CodeTree<'_> {
    build_with(array, |_| {})
}

/// Optimal code lengths for `weights`, in input order.
///
/// ```
/// use oxipfc_gdm::van_leeuwen::code_lengths;
///
/// assert_eq!(code_lengths(&[1, 1, 4]).unwrap(), vec![2, 2, 1]);
/// ```
pub fn code_lengths(weights: &[Weight]) -> Result<Vec<u32>> {
    let array = PartiallySortedArray::new(weights)?;
    let tree = build(&array);
    Ok(depths::code_lengths(&tree))
}
