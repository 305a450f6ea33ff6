//! Debug visualization of the tree levels.
//!
//! An external debug renderer draws the boxes as wireframes; the layout is
//! `#[repr(C)]` and `Pod` so the slice can be uploaded with
//! `bytemuck::cast_slice` as-is.

use bytemuck::{Pod, Zeroable};
use super::bvh::Bvh;

/// One node's bounds, tagged with its depth (root = 0).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct DebugBox {
    /// Minimum corner
    pub min: [f32; 3],
    /// Depth of the node in the tree
    pub depth: u32,
    /// Maximum corner
    pub max: [f32; 3],
    /// 1 for leaves, 0 for internal nodes
    pub is_leaf: u32,
}

impl<T> Bvh<T> {
    /// Bounds of every node with depth `<= vis_level`, parents before
    /// children.
    pub fn debug_boxes(&self, vis_level: u32) -> Vec<DebugBox> {
        let mut boxes = Vec::new();
        let Some(root) = self.root else {
            return boxes;
        };

        let mut stack = vec![(root, 0u32)];
        while let Some((index, depth)) = stack.pop() {
            let node = &self.nodes[index];
            boxes.push(DebugBox {
                min: node.bounds.min().to_array(),
                depth,
                max: node.bounds.max().to_array(),
                is_leaf: node.is_leaf() as u32,
            });

            if depth < vis_level {
                if let Some([c0, c1]) = node.children() {
                    stack.push((c1, depth + 1));
                    stack.push((c0, depth + 1));
                }
            }
        }

        boxes
    }
}
