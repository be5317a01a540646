//! Code trees with lazily evaluated node weights.
//!
//! A code tree is stored as an arena of nodes indexed by [`NodeId`]. Nodes
//! come in two variants:
//!
//! - **External**: a leaf referencing one position of the
//!   [`PartiallySortedArray`]; its weight is `select(position)`.
//! - **Internal**: owns two children. When the leaves below it are exactly
//!   the sorted positions `lo..hi`, the node records that interval and its
//!   weight is a single `range_sum(lo, hi)` query instead of a walk.
//!
//! Weights are computed on first request and memoized; nodes never change
//! after creation apart from that one-time cache fill.

use oxipfc_core::{PartiallySortedArray, Weight};
use std::cell::OnceCell;

/// Index of a node in a [`CodeTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in the arena (creation order).
    pub fn index(self) -> usize {
        self.0
    }
}

/// Contiguous range `lo..hi` of sorted positions covered by a subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    /// First sorted position (inclusive).
    pub lo: usize,
    /// Last sorted position (exclusive).
    pub hi: usize,
}

/// A code tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    /// Leaf for the weight at a sorted position.
    External {
        /// Sorted position of the leaf's weight.
        position: usize,
    },
    /// Parent of two subtrees.
    Internal {
        /// Left child.
        left: NodeId,
        /// Right child.
        right: NodeId,
        /// Sorted positions covered, when they form one contiguous run.
        interval: Option<Interval>,
    },
}

/// Arena holding the nodes of one code tree built over a weight array.
#[derive(Debug)]
pub struct CodeTree<'a> {
    array: &'a PartiallySortedArray,
    nodes: Vec<Node>,
    weights: Vec<OnceCell<Weight>>,
    root: Option<NodeId>,
}

impl<'a> CodeTree<'a> {
    /// Create an empty arena over `array`.
    pub fn new(array: &'a PartiallySortedArray) -> Self {
        let capacity = (2 * array.len()).saturating_sub(1);
        Self {
            array,
            nodes: Vec::with_capacity(capacity),
            weights: Vec::with_capacity(capacity),
            root: None,
        }
    }

    /// The weight array the leaves refer to.
    pub fn array(&self) -> &'a PartiallySortedArray {
        self.array
    }

    /// Root of the finished tree, if any node was designated as root.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Designate the root of the tree.
    pub fn set_root(&mut self, root: NodeId) {
        self.root = Some(root);
    }

    /// Number of nodes created so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no node was created yet.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The node stored under `id`.
    pub fn node(&self, id: NodeId) -> Node {
        self.nodes[id.0]
    }

    /// Create a leaf for sorted position `position`. The weight is not
    /// queried until requested.
    pub fn external(&mut self, position: usize) -> NodeId {
        debug_assert!(position < self.array.len(), "leaf position out of range");
        self.push(Node::External { position }, OnceCell::new())
    }

    /// Create the parent of `left` and `right`.
    ///
    /// The interval is recorded when `left` covers the sorted positions
    /// immediately before those of `right`. If both children already know
    /// their weight, the parent's weight is filled in right away.
    pub fn internal(&mut self, left: NodeId, right: NodeId) -> NodeId {
        let interval = match (self.interval(left), self.interval(right)) {
            (Some(l), Some(r)) if l.hi == r.lo => Some(Interval { lo: l.lo, hi: r.hi }),
            _ => None,
        };

        let cell = OnceCell::new();
        if let (Some(&l), Some(&r)) = (self.weights[left.0].get(), self.weights[right.0].get()) {
            let _ = cell.set(l + r);
        }

        self.push(
            Node::Internal {
                left,
                right,
                interval,
            },
            cell,
        )
    }

    fn push(&mut self, node: Node, weight: OnceCell<Weight>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        self.weights.push(weight);
        id
    }

    /// Sorted positions covered by the subtree, if contiguous.
    pub fn interval(&self, id: NodeId) -> Option<Interval> {
        match self.nodes[id.0] {
            Node::External { position } => Some(Interval {
                lo: position,
                hi: position + 1,
            }),
            Node::Internal { interval, .. } => interval,
        }
    }

    /// The cached weight of `id`, without computing it.
    pub fn cached_weight(&self, id: NodeId) -> Option<Weight> {
        self.weights[id.0].get().copied()
    }

    /// Weight of the subtree rooted at `id`, computed at most once.
    ///
    /// Leaves use a `select` query and contiguous subtrees a `range_sum`
    /// query; other internal nodes add up their children, evaluating any
    /// uncached descendants first.
    pub fn weight(&self, id: NodeId) -> Weight {
        if let Some(&w) = self.weights[id.0].get() {
            return w;
        }

        let mut stack = vec![id];
        while let Some(&top) = stack.last() {
            if self.weights[top.0].get().is_some() {
                stack.pop();
                continue;
            }
            let computed = match self.nodes[top.0] {
                Node::External { position } => Some(self.array.select(position)),
                Node::Internal {
                    interval: Some(Interval { lo, hi }),
                    ..
                } => Some(self.array.range_sum(lo, hi)),
                Node::Internal { left, right, .. } => {
                    match (self.weights[left.0].get(), self.weights[right.0].get()) {
                        (Some(&l), Some(&r)) => Some(l + r),
                        (l, r) => {
                            if l.is_none() {
                                stack.push(left);
                            }
                            if r.is_none() {
                                stack.push(right);
                            }
                            None
                        }
                    }
                }
            };
            if let Some(w) = computed {
                let _ = self.weights[top.0].set(w);
                stack.pop();
            }
        }

        self.weights[id.0].get().copied().unwrap_or_default()
    }

    /// Number of leaves below `id`.
    pub fn leaf_count(&self, id: NodeId) -> usize {
        if let Some(Interval { lo, hi }) = self.interval(id) {
            return hi - lo;
        }
        let mut count = 0;
        let mut stack = vec![id];
        while let Some(top) = stack.pop() {
            match self.nodes[top.0] {
                Node::External { .. } => count += 1,
                Node::Internal {
                    interval: Some(Interval { lo, hi }),
                    ..
                } => count += hi - lo,
                Node::Internal { left, right, .. } => {
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
        count
    }

    /// Render the subtree rooted at `id`, showing known weights and the
    /// query that would produce unknown ones.
    ///
    /// ```text
    /// (30,[10],(20,[select(0)],[select(1)]))
    /// ```
    pub fn render(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.render_into(id, &mut out);
        out
    }

    fn render_into(&self, id: NodeId, out: &mut String) {
        let cached = self.cached_weight(id);
        match self.nodes[id.0] {
            Node::External { position } => match cached {
                Some(w) => out.push_str(&format!("[{w}]")),
                None => out.push_str(&format!("[select({position})]")),
            },
            Node::Internal {
                left,
                right,
                interval,
            } => {
                match (cached, interval) {
                    (Some(w), _) => out.push_str(&format!("({w},")),
                    (None, Some(Interval { lo, hi })) => {
                        out.push_str(&format!("(rangeSum({lo},{hi}),"))
                    }
                    (None, None) => out.push_str("(?,"),
                }
                self.render_into(left, out);
                out.push(',');
                self.render_into(right, out);
                out.push(')');
            }
        }
    }

    /// Render the subtree rooted at `id` after computing every weight in it.
    pub fn render_weights(&self, id: NodeId) -> String {
        let mut stack = vec![id];
        while let Some(top) = stack.pop() {
            self.weight(top);
            if let Node::Internal { left, right, .. } = self.nodes[top.0] {
                stack.push(left);
                stack.push(right);
            }
        }
        self.render(id)
    }
}
