//! Group-Dock-Merge construction of optimal code trees.
//!
//! The builder simulates Huffman's algorithm over a [`PartiallySortedArray`]
//! but merges whole batches of nodes whenever their order is already known,
//! so that inputs whose weights grow quickly cost few comparisons.
//!
//! ## State
//!
//! - `internals`: internal nodes not yet merged, in nondecreasing weight order
//!   (every merge combines the two smallest roots, so merge results only grow
//!   and can be appended at the back).
//! - `processed`: number of sorted positions already turned into leaves. The
//!   unprocessed positions form the implicit external queue; leaves are only
//!   created when they are merged.
//!
//! ## Cycle
//!
//! 1. **Group**: every unprocessed leaf no heavier than the smallest internal
//!    node is paired with its sorted neighbour. An odd leftover is merged
//!    with the smallest internal node.
//! 2. **Dock**: while the heaviest internal node is no heavier than the next
//!    leaf, internal nodes are paired front to front.
//! 3. **Mix**: the two smallest roots, taken from either queue, are merged.
//!
//! Once every leaf is processed, the wrap-up phase pairs internal nodes front
//! to front until a single root remains.

use crate::config::GdmConfig;
use crate::tree::{CodeTree, NodeId};
use oxipfc_core::error::{PfcError, Result};
use oxipfc_core::{PartiallySortedArray, Weight};
use std::collections::VecDeque;
use std::fmt;

/// Builder phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Pairing of leaves lighter than the smallest internal node.
    Group,
    /// Pairing of internal nodes lighter than the next leaf.
    Dock,
    /// Single merge of the two smallest roots.
    Mix,
    /// Pairing of the remaining internal nodes.
    WrapUp,
}

impl Phase {
    /// Phase name used in logs and errors.
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Group => "group",
            Phase::Dock => "dock",
            Phase::Mix => "mix",
            Phase::WrapUp => "wrap-up",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counters collected while building one tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Group-Dock-Mix cycles run.
    pub cycles: usize,
    /// Internal nodes created by the group phase (including the first pair).
    pub group_nodes: usize,
    /// Internal nodes created by the dock phase.
    pub dock_nodes: usize,
    /// Internal nodes created by the mix phase.
    pub mix_nodes: usize,
    /// Internal nodes created by the wrap-up phase.
    pub wrapup_nodes: usize,
    /// Weight comparisons between an internal node and a leaf.
    pub comparisons: usize,
    /// Rank queries issued to the array.
    pub rank_queries: usize,
}

impl BuildStats {
    /// Total number of internal nodes created.
    pub fn internal_nodes(&self) -> usize {
        self.group_nodes + self.dock_nodes + self.mix_nodes + self.wrapup_nodes
    }
}

/// Group-Dock-Merge tree builder.
///
/// # Example
///
/// ```rust
/// use oxipfc_core::PartiallySortedArray;
/// use oxipfc_gdm::depths::code_lengths;
/// use oxipfc_gdm::gdm::GdmBuilder;
///
/// let array = PartiallySortedArray::new(&[1, 2, 4, 8]).unwrap();
/// let (tree, stats) = GdmBuilder::new(&array).build().unwrap();
/// assert_eq!(code_lengths(&tree), vec![3, 3, 2, 1]);
/// assert_eq!(stats.internal_nodes(), 3);
/// ```
#[derive(Debug)]
pub struct GdmBuilder<'a> {
    tree: CodeTree<'a>,
    internals: VecDeque<NodeId>,
    processed: usize,
    config: GdmConfig,
    stats: BuildStats,
}

impl<'a> GdmBuilder<'a> {
    /// Create a builder with the default configuration.
    pub fn new(array: &'a PartiallySortedArray) -> Self {
        Self::with_config(array, GdmConfig::default())
    }

    /// Create a builder with a custom configuration.
    pub fn with_config(array: &'a PartiallySortedArray, config: GdmConfig) -> Self {
        Self {
            tree: CodeTree::new(array),
            internals: VecDeque::new(),
            processed: 0,
            config,
            stats: BuildStats::default(),
        }
    }

    fn len(&self) -> usize {
        self.tree.array().len()
    }

    /// Build the tree. Its root is set unless the array is empty.
    pub fn build(mut self) -> Result<(CodeTree<'a>, BuildStats)> {
        let n = self.len();
        let _span = tracing::debug_span!("gdm_build", n).entered();

        match n {
            0 => return Ok((self.tree, self.stats)),
            1 => {
                let leaf = self.tree.external(0);
                self.tree.set_root(leaf);
                return Ok((self.tree, self.stats));
            }
            _ => {}
        }

        let first = self.tree.external(0);
        let second = self.tree.external(1);
        let seed = self.tree.internal(first, second);
        self.internals.push_back(seed);
        self.processed = 2;
        self.stats.group_nodes += 1;

        while self.processed < n {
            self.stats.cycles += 1;
            self.group()?;
            self.dock()?;
            self.mix()?;
            tracing::trace!(
                cycle = self.stats.cycles,
                processed = self.processed,
                internals = self.internals.len(),
                "cycle complete"
            );
        }
        self.wrap_up()?;

        let root = match (self.internals.pop_front(), self.internals.is_empty()) {
            (Some(root), true) => root,
            _ => {
                return Err(PfcError::invariant(
                    Phase::WrapUp.as_str(),
                    "expected exactly one root",
                ));
            }
        };
        self.tree.set_root(root);
        if self.config.verify_invariants {
            self.verify_root(root)?;
        }

        tracing::debug!(
            cycles = self.stats.cycles,
            group = self.stats.group_nodes,
            dock = self.stats.dock_nodes,
            mix = self.stats.mix_nodes,
            wrapup = self.stats.wrapup_nodes,
            comparisons = self.stats.comparisons,
            "GDM build complete"
        );
        Ok((self.tree, self.stats))
    }

    /// Pair the leaves no heavier than the smallest internal node.
    fn group(&mut self) -> Result<()> {
        let Some(&front) = self.internals.front() else {
            return Ok(());
        };
        let smallest = self.tree.weight(front);
        self.stats.rank_queries += 1;
        let end = self.tree.array().rank_right(smallest).max(self.processed);

        let mut p = self.processed;
        while p + 1 < end {
            let left = self.tree.external(p);
            let right = self.tree.external(p + 1);
            let node = self.tree.internal(left, right);
            self.internals.push_back(node);
            self.stats.group_nodes += 1;
            p += 2;
        }
        if p < end {
            // pairs were appended at the back, so `front` is still the smallest
            self.internals.pop_front();
            let leaf = self.tree.external(p);
            let node = self.combine(front, leaf);
            self.internals.push_back(node);
            self.stats.group_nodes += 1;
            p += 1;
        }
        self.processed = p;
        self.check_order(Phase::Group)
    }

    /// Pair internal nodes while all of them are lighter than the next leaf.
    fn dock(&mut self) -> Result<()> {
        let n = self.len();
        while self.processed < n && self.internals.len() > 1 {
            let Some(&back) = self.internals.back() else {
                break;
            };
            let next_leaf = self.tree.array().select(self.processed);
            self.stats.comparisons += 1;
            if self.tree.weight(back) > next_leaf {
                break;
            }
            self.stats.dock_nodes += self.pair_pass();
        }
        self.check_order(Phase::Dock)
    }

    /// Merge the two smallest roots.
    fn mix(&mut self) -> Result<()> {
        if self.processed >= self.len() {
            return Ok(());
        }
        let (Some(first), Some(second)) = (self.take_smallest(), self.take_smallest()) else {
            return Err(PfcError::invariant(
                Phase::Mix.as_str(),
                "fewer than two roots left to merge",
            ));
        };
        let node = self.combine(first, second);
        self.internals.push_back(node);
        self.stats.mix_nodes += 1;
        self.check_order(Phase::Mix)
    }

    /// Pair the remaining internal nodes until one is left.
    fn wrap_up(&mut self) -> Result<()> {
        while self.internals.len() > 1 {
            if self.internals.len() % 2 == 1 {
                // the trailing node sits out this pass
                let trailing = self.internals[self.internals.len() - 1];
                self.tree.weight(trailing);
            }
            self.stats.wrapup_nodes += self.pair_pass();
            self.check_order(Phase::WrapUp)?;
        }
        Ok(())
    }

    /// One pass of front-to-front pairing over the current internal nodes.
    /// An odd node out ends up at the front.
    fn pair_pass(&mut self) -> usize {
        let pairs = self.internals.len() / 2;
        for _ in 0..pairs {
            if let (Some(a), Some(b)) = (self.internals.pop_front(), self.internals.pop_front()) {
                let node = self.combine(a, b);
                self.internals.push_back(node);
            }
        }
        pairs
    }

    /// Remove and return the lighter of the smallest internal node and the
    /// next leaf.
    fn take_smallest(&mut self) -> Option<NodeId> {
        let leaf_left = self.processed < self.len();
        match (self.internals.front().copied(), leaf_left) {
            (Some(front), true) => {
                let internal = self.tree.weight(front);
                let external = self.tree.array().select(self.processed);
                self.stats.comparisons += 1;
                if self.config.tie_break.takes_internal(internal, external) {
                    self.internals.pop_front()
                } else {
                    Some(self.take_leaf())
                }
            }
            (Some(_), false) => self.internals.pop_front(),
            (None, true) => Some(self.take_leaf()),
            (None, false) => None,
        }
    }

    fn take_leaf(&mut self) -> NodeId {
        let leaf = self.tree.external(self.processed);
        self.processed += 1;
        leaf
    }

    /// Merge two roots, ordering the children so that adjacent sorted
    /// ranges are recorded as one interval.
    fn combine(&mut self, a: NodeId, b: NodeId) -> NodeId {
        match (self.tree.interval(a), self.tree.interval(b)) {
            (Some(x), Some(y)) if y.hi == x.lo => self.tree.internal(b, a),
            _ => self.tree.internal(a, b),
        }
    }

    fn check_order(&self, phase: Phase) -> Result<()> {
        if !self.config.verify_invariants {
            return Ok(());
        }
        let mut previous: Option<Weight> = None;
        for (i, &id) in self.internals.iter().enumerate() {
            let w = self.tree.weight(id);
            if let Some(p) = previous.filter(|&p| p > w) {
                return Err(PfcError::invariant(
                    phase.as_str(),
                    format!("internal node {i} has weight {w}, below its predecessor {p}"),
                ));
            }
            previous = Some(w);
        }
        Ok(())
    }

    fn verify_root(&self, root: NodeId) -> Result<()> {
        let array = self.tree.array();
        let weight = self.tree.weight(root);
        if weight != array.total() {
            return Err(PfcError::invariant(
                Phase::WrapUp.as_str(),
                format!("root weight {weight} differs from total {}", array.total()),
            ));
        }
        let leaves = self.tree.leaf_count(root);
        if leaves != array.len() {
            return Err(PfcError::invariant(
                Phase::WrapUp.as_str(),
                format!("tree has {leaves} leaves for {} weights", array.len()),
            ));
        }
        Ok(())
    }
}
