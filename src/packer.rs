use std::fmt;

use num_traits::{Bounded, Num};

use crate::{geometry::Rect, scorer::snug_fit, types::Placement};

/// A free rectangle, plus the index of the sibling remainder it was split
/// alongside while that sibling is still live.
///
/// Two linked free rectangles overlap in one shared corner, following this
/// pattern:
///
/// ```text
/// XXXAAA
/// XXXAAA
/// BBB***
/// ```
///
/// `X` is the placed rectangle, `A` and `B` are the right and bottom
/// remainders, and the `*` region belongs to both. Whichever of the pair is
/// used first claims the shared corner as its own; the other is shrunk
/// around it and the link is cleared on both sides.
#[derive(Debug, Clone, Copy)]
struct FreeRect<T> {
    rect: Rect<T>,
    counterpart: Option<usize>,
}

/// An incremental rectangle packer over a fixed-size bin.
///
/// Rectangles are submitted one at a time through [`pack`](#method.pack);
/// the packer never needs the whole set up front. Each call scans the
/// current free rectangles for the snuggest fit, in the requested
/// orientation or rotated 90°, and splits the chosen free rectangle into
/// up to two remainders.
pub struct Packer<T> {
    bin_size: (T, T),
    free_rects: Vec<FreeRect<T>>,
}

impl<T> Packer<T>
where
    T: Num + Bounded + PartialOrd + Copy + fmt::Debug,
{
    /// Constructs a packer over an empty bin of the given extent.
    pub fn new(bin_size: (T, T)) -> Self {
        Self::with_capacity(bin_size, 0)
    }

    /// Like [`new`](#method.new), but pre-sizes the free-list storage for
    /// callers that know roughly how fragmented the bin will get.
    pub fn with_capacity(bin_size: (T, T), capacity: usize) -> Self {
        let mut packer = Self {
            bin_size,
            free_rects: Vec::with_capacity(capacity),
        };

        // A bin with a zero extent has no free space at all; the free list
        // only ever holds rectangles with positive area.
        packer.add_free_rect((T::zero(), T::zero()), bin_size);

        packer
    }

    #[inline]
    pub fn bin_size(&self) -> (T, T) {
        self.bin_size
    }

    /// The currently unoccupied regions of the bin.
    ///
    /// Remainder pairs from the same split overlap in their shared corner
    /// until one of them is consumed, so the summed area of these
    /// rectangles can exceed the actual free area.
    pub fn free_rects(&self) -> impl Iterator<Item = Rect<T>> + '_ {
        self.free_rects.iter().map(|free| free.rect)
    }

    /// Tries to place a rectangle of the given size, in that orientation
    /// or rotated 90°.
    ///
    /// Returns where the rectangle landed, or `None` if no free rectangle
    /// can hold it in either orientation. A failed call leaves the bin
    /// untouched.
    pub fn pack(&mut self, rect_size: (T, T)) -> Option<Placement<T>> {
        self.pack_with(rect_size, snug_fit)
    }

    /// Like [`pack`](#method.pack), with a caller-supplied scorer.
    ///
    /// The scorer is called as `scorer(candidate_size, container_size)`
    /// for each orientation that fits, and the candidate with the lowest
    /// score across all free rectangles wins. Scores must stay below the
    /// coordinate type's maximum value, which is reserved to mean "does
    /// not fit".
    pub fn pack_with<S>(&mut self, rect_size: (T, T), scorer: S) -> Option<Placement<T>>
    where
        S: Fn((T, T), (T, T)) -> T,
    {
        log::trace!("Packing rect of size {:?}", rect_size);

        if rect_size.0 == T::zero() || rect_size.1 == T::zero() {
            // A zero-area rectangle occupies nothing and consumes nothing.
            // It still needs somewhere to sit, so it reports the first
            // free rectangle's origin and leaves the bin untouched.
            return self.free_rects.first().map(|free| Placement {
                pos: free.rect.pos,
                flipped: false,
            });
        }

        let (chosen, flipped) = match self.choose_slot(rect_size, &scorer) {
            Some(choice) => choice,
            None => {
                log::trace!("No fit for {:?}", rect_size);
                return None;
            }
        };

        let destination = self.free_rects[chosen].rect;
        self.remove_free_rect(chosen);

        let placed = if flipped {
            (rect_size.1, rect_size.0)
        } else {
            rect_size
        };

        log::trace!(
            "Fit {:?} at {:?} (flipped: {})",
            placed,
            destination.pos,
            flipped
        );

        let right_added = self.add_free_rect(
            (destination.pos.0 + placed.0, destination.pos.1),
            (destination.size.0 - placed.0, destination.size.1),
        );
        let bottom_added = self.add_free_rect(
            (destination.pos.0, destination.pos.1 + placed.1),
            (destination.size.0, destination.size.1 - placed.1),
        );

        // The two remainders overlap in the corner past the placed
        // rectangle, so they are linked and the first one consumed claims
        // it.
        if right_added && bottom_added {
            let last = self.free_rects.len() - 1;
            self.free_rects[last].counterpart = Some(last - 1);
            self.free_rects[last - 1].counterpart = Some(last);
        }

        Some(Placement {
            pos: destination.pos,
            flipped,
        })
    }

    /// Registers extra free space, for callers that have externally freed
    /// a previously packed region.
    ///
    /// The caller is responsible for keeping the new rectangle clear of
    /// the existing free rectangles; nothing is validated here. Returns
    /// whether the rectangle was actually stored. Rectangles with a zero
    /// extent in either dimension are dropped.
    pub fn add_free_rect(&mut self, pos: (T, T), size: (T, T)) -> bool {
        if size.0 > T::zero() && size.1 > T::zero() {
            self.free_rects.push(FreeRect {
                rect: Rect::new(pos, size),
                counterpart: None,
            });
            true
        } else {
            false
        }
    }

    /// Scans the free list for the best candidate and orientation.
    fn choose_slot<S>(&self, rect_size: (T, T), scorer: &S) -> Option<(usize, bool)>
    where
        S: Fn((T, T), (T, T)) -> T,
    {
        let no_fit = T::max_value();
        let flipped_size = (rect_size.1, rect_size.0);

        let mut best_score = no_fit;
        let mut best = None;

        for (index, free) in self.free_rects.iter().enumerate() {
            // An exact fit beats any scored candidate; stop scanning.
            if rect_size == free.rect.size {
                return Some((index, false));
            }

            if flipped_size == free.rect.size {
                return Some((index, true));
            }

            let score = if free.rect.accommodates(rect_size) {
                scorer(rect_size, free.rect.size)
            } else {
                no_fit
            };
            let flipped_score = if free.rect.accommodates(flipped_size) {
                scorer(flipped_size, free.rect.size)
            } else {
                no_fit
            };

            // Strict comparisons: on a tie the earlier candidate keeps the
            // slot, and the un-flipped orientation beats the flipped one.
            if score < best_score {
                best = Some((index, false));
                best_score = score;
            }

            if flipped_score < best_score {
                best = Some((index, true));
                best_score = flipped_score;
            }
        }

        best
    }

    /// Excises a free rectangle that is about to receive a placement.
    ///
    /// If the target has a live counterpart, the counterpart loses its
    /// claim on their shared corner: a counterpart positioned to the left
    /// of the target is the bottom piece of the original split and gets
    /// its width truncated, otherwise it is the right piece and gets its
    /// height truncated.
    fn remove_free_rect(&mut self, target: usize) {
        if let Some(cp_index) = self.free_rects[target].counterpart {
            let target_pos = self.free_rects[target].rect.pos;
            let counterpart = &mut self.free_rects[cp_index];

            debug_assert_eq!(counterpart.counterpart, Some(target));

            if counterpart.rect.pos.0 < target_pos.0 {
                counterpart.rect.size.0 = target_pos.0 - counterpart.rect.pos.0;
            } else {
                debug_assert!(counterpart.rect.pos.1 < target_pos.1);
                counterpart.rect.size.1 = target_pos.1 - counterpart.rect.pos.1;
            }

            counterpart.counterpart = None;
        }

        self.free_rects.swap_remove(target);

        // The element moved into the vacated slot needs its partner's
        // link re-aimed at the new index.
        if let Some(moved) = self.free_rects.get(target) {
            if let Some(cp_index) = moved.counterpart {
                self.free_rects[cp_index].counterpart = Some(target);
            }
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Packer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Bin: {:?}", self.bin_size)?;
        writeln!(f, "Free rects:")?;

        for free in &self.free_rects {
            writeln!(f, "    {:?} {:?}", free.rect.pos, free.rect.size)?;
        }

        Ok(())
    }
}
