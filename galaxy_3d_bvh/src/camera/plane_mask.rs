/// Plane mask — which frustum planes still need testing during a descent.
///
/// A node proven fully inside a plane clears that plane's bit for its whole
/// subtree, so the mask only ever shrinks on the way down.

use super::frustum::PLANE_COUNT;

bitflags::bitflags! {
    /// One bit per frustum plane, in `PLANE_*` index order.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PlaneMask: u8 {
        /// Left plane
        const LEFT   = 1 << 0;
        /// Right plane
        const RIGHT  = 1 << 1;
        /// Top plane
        const TOP    = 1 << 2;
        /// Bottom plane
        const BOTTOM = 1 << 3;
        /// Near plane
        const NEAR   = 1 << 4;
        /// Far plane
        const FAR    = 1 << 5;
        /// All six planes
        const ALL = Self::LEFT.bits() | Self::RIGHT.bits() | Self::TOP.bits()
            | Self::BOTTOM.bits() | Self::NEAR.bits() | Self::FAR.bits();
    }
}

impl Default for PlaneMask {
    fn default() -> Self {
        Self::ALL
    }
}

impl PlaneMask {
    /// Bit for a `PLANE_*` index; empty for an index `>= PLANE_COUNT`.
    #[inline]
    pub fn plane(index: usize) -> Self {
        if index < PLANE_COUNT {
            Self::from_bits_truncate(1 << index)
        } else {
            Self::empty()
        }
    }

    /// Plane indices whose bits are set, in ascending order.
    pub fn plane_indices(self) -> impl Iterator<Item = usize> {
        (0..PLANE_COUNT).filter(move |&i| self.contains(Self::plane(i)))
    }
}
