/// Frustum culling over a `Bvh`.
///
/// The descent carries a `PlaneMask` of planes not yet proven to contain the
/// current node. A node outside any active plane is dropped with its whole
/// subtree. A node inside a plane clears that plane for its subtree, so once
/// the mask is empty the remaining descent is a plain walk with no plane
/// tests at all.

use crate::bounds::PlaneTest;
use crate::camera::{Frustum, PlaneMask};
use super::bvh::Bvh;
use super::node::{NodeIndex, NodeKind};

impl<T> Bvh<T> {
    /// Invoke `visitor` once for every payload whose box is at least
    /// partially inside `frustum`, or for every payload when `frustum` is
    /// `None`. No ordering guarantee.
    ///
    /// The tree cannot be mutated while the visitor runs; collect what needs
    /// to change and apply it after the traversal.
    pub fn for_each_visible<F>(&self, frustum: Option<&Frustum>, mut visitor: F)
    where
        F: FnMut(&T),
    {
        let Some(root) = self.root else {
            return;
        };

        match frustum {
            None => {
                for (_, payload) in self.leaves() {
                    visitor(payload);
                }
            }
            Some(frustum) => self.visit_culled(root, frustum, &mut visitor),
        }
    }

    /// Append every visible payload to `results`.
    pub fn collect_visible(&self, frustum: Option<&Frustum>, results: &mut Vec<T>)
    where
        T: Clone,
    {
        self.for_each_visible(frustum, |payload| results.push(payload.clone()));
    }

    fn visit_culled<F>(&self, root: NodeIndex, frustum: &Frustum, visitor: &mut F)
    where
        F: FnMut(&T),
    {
        let mut stack: Vec<(NodeIndex, PlaneMask)> = vec![(root, PlaneMask::ALL)];

        'nodes: while let Some((index, mut mask)) = stack.pop() {
            let node = &self.nodes[index];

            for plane in mask.plane_indices() {
                match node.bounds.test_plane(frustum.plane(plane)) {
                    PlaneTest::Outside => continue 'nodes,
                    PlaneTest::Inside => mask.remove(PlaneMask::plane(plane)),
                    PlaneTest::Intersecting => {}
                }
            }

            match &node.kind {
                NodeKind::Leaf(payload) => visitor(payload),
                NodeKind::Internal([c0, c1]) => {
                    stack.push((*c1, mask));
                    stack.push((*c0, mask));
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "culling_tests.rs"]
mod tests;
