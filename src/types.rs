/// A successful placement reported by `Packer::pack`.
///
/// The position is the origin corner of the placed rectangle in bin
/// coordinates. When `flipped` is true, the rectangle was rotated 90°
/// before placement, so the occupied footprint has its width and height
/// swapped relative to the requested size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement<T> {
    pub(crate) pos: (T, T),
    pub(crate) flipped: bool,
}

impl<T: Copy> Placement<T> {
    #[inline]
    pub fn position(&self) -> (T, T) {
        self.pos
    }

    #[inline]
    pub fn flipped(&self) -> bool {
        self.flipped
    }
}
