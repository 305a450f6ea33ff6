/// Arena node of the BVH.
///
/// Links are indices into the owning `Bvh`'s node vector. `parent` is a
/// back-reference used only to walk ancestors while re-fitting.

use crate::bounds::AABB;

/// Index of a node in the BVH arena.
pub(crate) type NodeIndex = usize;

/// Leaf or internal node. An internal node always has exactly two children.
#[derive(Debug, Clone)]
pub(crate) enum NodeKind<T> {
    Leaf(T),
    Internal([NodeIndex; 2]),
}

#[derive(Debug, Clone)]
pub(crate) struct BvhNode<T> {
    /// Leaf: the inserted box. Internal: union of both children.
    pub(crate) bounds: AABB,
    pub(crate) parent: Option<NodeIndex>,
    pub(crate) kind: NodeKind<T>,
}

impl<T> BvhNode<T> {
    pub(crate) fn leaf(bounds: AABB, payload: T) -> Self {
        Self {
            bounds,
            parent: None,
            kind: NodeKind::Leaf(payload),
        }
    }

    #[inline]
    pub(crate) fn children(&self) -> Option<[NodeIndex; 2]> {
        match self.kind {
            NodeKind::Internal(children) => Some(children),
            NodeKind::Leaf(_) => None,
        }
    }

    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf(_))
    }
}
