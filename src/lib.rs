//! Packbin is a small library for packing rectangles into a fixed-size bin,
//! one rectangle at a time. It was built for texture atlas workflows where
//! sprites and glyphs arrive incrementally and the full set of rectangles
//! isn't known up front.
//!
//! The packer tracks the unoccupied parts of the bin as a list of free
//! rectangles. Each [`Packer::pack`][pack] call picks the free rectangle
//! that fits the request most snugly (optionally rotating the request 90°),
//! carves the placement out of it, and returns where the rectangle landed.
//! When nothing fits, `pack` reports failure instead of panicking.
//!
//! For best results, sort your rectangles from largest to smallest before
//! packing them. This is not a requirement, just a quality improvement.
//!
//! ## Example
//! ```
//! use packbin::Packer;
//!
//! // The bin extent is fixed at construction time.
//! let mut packer = Packer::new((512u32, 512));
//!
//! // Rectangles are placed one call at a time. Each placement reports
//! // where the rectangle ended up and whether it was rotated.
//! let placement = packer.pack((128, 64)).unwrap();
//! assert_eq!(placement.position(), (0, 0));
//! assert!(!placement.flipped());
//!
//! // A rectangle larger than the remaining space is rejected.
//! assert!(packer.pack((1024, 1024)).is_none());
//! ```
//!
//! [pack]: struct.Packer.html#method.pack

mod geometry;
mod packer;
mod scorer;
mod types;

pub use geometry::*;
pub use packer::*;
pub use scorer::*;
pub use types::*;
