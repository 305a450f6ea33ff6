/// Bvh — dynamic bounding volume hierarchy over axis-aligned boxes.
///
/// The tree is insertion-only and meant to be rebuilt from scratch every
/// frame: `reset()` then one `insert()` per object. There is no removal and
/// no refit of existing entries.
///
/// Insertion picks the sibling that minimizes the surface-area cost of the
/// resulting tree (exact branch-and-bound over every node, leaves and
/// internal nodes alike), creates a new parent for the pair and re-fits the
/// ancestors. No rotations or other rebalancing.
///
/// Nodes live in a flat arena addressed by index. `reset()` clears the
/// arena in bulk and keeps its allocation for the next rebuild.

use crate::bounds::AABB;
use super::node::{BvhNode, NodeIndex, NodeKind};

/// Construction parameters for a `Bvh`.
#[derive(Debug, Clone)]
pub struct BvhConfig {
    /// Node slots reserved up front. A tree of `n` leaves uses `2n - 1` nodes.
    pub initial_capacity: usize,
    /// Appended to the log source, e.g. `galaxy3d::Bvh[shadow]`
    pub label: String,
}

impl Default for BvhConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            label: "bvh".to_string(),
        }
    }
}

impl BvhConfig {
    /// Config sized for an expected number of leaves.
    pub fn for_leaf_count(label: &str, leaf_count: usize) -> Self {
        Self {
            initial_capacity: leaf_count.saturating_mul(2).saturating_sub(1),
            label: label.to_string(),
        }
    }
}

/// Dynamic AABB tree keyed by an opaque payload.
#[derive(Debug, Clone)]
pub struct Bvh<T> {
    /// Node arena. Leaves and internal nodes are interleaved in insertion order.
    pub(super) nodes: Vec<BvhNode<T>>,
    pub(super) root: Option<NodeIndex>,
    leaf_count: usize,
    log_source: String,
}

impl<T> Default for Bvh<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Bvh<T> {
    /// Create an empty tree with the default config.
    pub fn new() -> Self {
        Self::with_config(BvhConfig::default())
    }

    /// Create an empty tree.
    pub fn with_config(config: BvhConfig) -> Self {
        Self {
            nodes: Vec::with_capacity(config.initial_capacity),
            root: None,
            leaf_count: 0,
            log_source: format!("galaxy3d::Bvh[{}]", config.label),
        }
    }

    // ===== MUTATION =====

    /// Insert a box with its payload.
    ///
    /// The first insertion becomes the root. Later insertions pair the new
    /// leaf with the cheapest sibling under a fresh internal node, then
    /// re-fit every ancestor up to the root.
    pub fn insert(&mut self, aabb: AABB, payload: T) {
        let leaf = self.push_node(BvhNode::leaf(aabb, payload));
        self.leaf_count += 1;

        let Some(root) = self.root else {
            self.root = Some(leaf);
            crate::bvh_trace!(&self.log_source, "Leaf {} inserted as root", leaf);
            return;
        };

        let sibling = self.find_best_sibling(root, &aabb);
        let old_parent = self.nodes[sibling].parent;

        let new_parent = self.push_node(BvhNode {
            bounds: aabb.union(&self.nodes[sibling].bounds),
            parent: old_parent,
            kind: NodeKind::Internal([leaf, sibling]),
        });
        self.nodes[leaf].parent = Some(new_parent);
        self.nodes[sibling].parent = Some(new_parent);

        match old_parent {
            None => self.root = Some(new_parent),
            Some(parent) => {
                if let NodeKind::Internal(children) = &mut self.nodes[parent].kind {
                    let slot = if children[0] == sibling { 0 } else { 1 };
                    children[slot] = new_parent;
                }
            }
        }

        self.refit_ancestors(old_parent);

        crate::bvh_trace!(
            &self.log_source,
            "Leaf {} paired with node {} under new parent {}",
            leaf, sibling, new_parent
        );
    }

    /// Drop every node, returning the tree to empty.
    ///
    /// The arena keeps its capacity, so a rebuild of similar size does not
    /// reallocate.
    pub fn reset(&mut self) {
        if self.root.is_some() {
            crate::bvh_debug!(
                &self.log_source,
                "Reset: {} leaves, {} nodes, height {}, SAH cost {:.2}",
                self.leaf_count,
                self.nodes.len(),
                self.height(),
                self.sah_cost()
            );
        }

        self.nodes.clear();
        self.root = None;
        self.leaf_count = 0;
    }

    // ===== INTROSPECTION =====

    /// Number of inserted payloads since the last reset.
    pub fn len(&self) -> usize {
        self.leaf_count
    }

    /// Whether the tree holds no payloads.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes (leaves + internal). Always `2 * len() - 1` when non-empty.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Bounds of the root node, i.e. the box around everything inserted.
    pub fn root_bounds(&self) -> Option<&AABB> {
        self.root.map(|root| &self.nodes[root].bounds)
    }

    /// Number of levels: 0 for an empty tree, 1 for a lone leaf.
    pub fn height(&self) -> usize {
        let Some(root) = self.root else {
            return 0;
        };

        let mut height = 0;
        let mut stack = vec![(root, 1usize)];
        while let Some((index, level)) = stack.pop() {
            height = height.max(level);
            if let Some([c0, c1]) = self.nodes[index].children() {
                stack.push((c0, level + 1));
                stack.push((c1, level + 1));
            }
        }
        height
    }

    /// Sum of internal node surface areas, the usual tree quality metric.
    /// Lower is better.
    pub fn sah_cost(&self) -> f32 {
        self.nodes
            .iter()
            .filter(|node| !node.is_leaf())
            .map(|node| node.bounds.surface_area())
            .sum()
    }

    /// All leaves as `(bounds, payload)`, in insertion order.
    pub fn leaves(&self) -> impl Iterator<Item = (&AABB, &T)> {
        self.nodes.iter().filter_map(|node| match &node.kind {
            NodeKind::Leaf(payload) => Some((&node.bounds, payload)),
            NodeKind::Internal(_) => None,
        })
    }

    // ===== INTERNAL =====

    fn push_node(&mut self, node: BvhNode<T>) -> NodeIndex {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Find the node that, paired with a new leaf of bounds `leaf`, adds the
    /// least surface area to the tree.
    ///
    /// Cost of pairing with node X is `SA(leaf ∪ X)` plus the growth of every
    /// strict ancestor A of X, `SA(leaf ∪ A) - SA(A)`. Nothing below X can
    /// cost less than `SA(leaf)` plus the growth of X and its ancestors, so a
    /// subtree whose bound is not below the best cost is skipped. The result
    /// is the same as testing every node; on ties the first node in
    /// pre-order (node, child 0, child 1) wins.
    pub(super) fn find_best_sibling(&self, root: NodeIndex, leaf: &AABB) -> NodeIndex {
        let leaf_area = leaf.surface_area();

        let mut best = root;
        let mut best_cost = f32::INFINITY;

        // (node, growth of its strict ancestors)
        let mut stack: Vec<(NodeIndex, f32)> = vec![(root, 0.0)];
        while let Some((index, inherited)) = stack.pop() {
            let node = &self.nodes[index];
            let direct = leaf.union(&node.bounds).surface_area();

            let cost = direct + inherited;
            if cost < best_cost {
                best_cost = cost;
                best = index;
            }

            if let Some([c0, c1]) = node.children() {
                let child_inherited = inherited + (direct - node.bounds.surface_area());
                if leaf_area + child_inherited < best_cost {
                    stack.push((c1, child_inherited));
                    stack.push((c0, child_inherited));
                }
            }
        }

        best
    }

    /// Recompute bounds from `start` up to the root.
    fn refit_ancestors(&mut self, start: Option<NodeIndex>) {
        let mut current = start;
        while let Some(index) = current {
            if let Some([c0, c1]) = self.nodes[index].children() {
                self.nodes[index].bounds = self.nodes[c0].bounds.union(&self.nodes[c1].bounds);
            }
            current = self.nodes[index].parent;
        }
    }
}

#[cfg(test)]
#[path = "bvh_tests.rs"]
mod tests;
