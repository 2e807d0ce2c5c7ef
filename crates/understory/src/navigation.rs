//! Movement over sequences of items that may be disabled.
//!
//! These helpers back cursor movement in list-like widgets. Indices are
//! positions in the candidate slice; `None` means there is no suitable item.

/// An item that can be skipped by navigation.
pub trait Disableable {
    /// Is this item disabled?
    fn disabled(&self) -> bool;
}

impl<T: Disableable> Disableable for &T {
    fn disabled(&self) -> bool {
        (**self).disabled()
    }
}

impl Disableable for bool {
    fn disabled(&self) -> bool {
        *self
    }
}

/// Direction of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards index 0.
    Backward,
    /// Towards the end.
    Forward,
}

impl Direction {
    /// The index delta for one step.
    pub fn step(self) -> isize {
        match self {
            Self::Backward => -1,
            Self::Forward => 1,
        }
    }
}

/// Index of the first enabled candidate.
pub fn find_first_enabled<T: Disableable>(candidates: &[T]) -> Option<usize> {
    candidates.iter().position(|c| !c.disabled())
}

/// Index of the last enabled candidate.
pub fn find_last_enabled<T: Disableable>(candidates: &[T]) -> Option<usize> {
    candidates.iter().rposition(|c| !c.disabled())
}

/// Starting point for a search with no anchor.
fn from_edge<T: Disableable>(candidates: &[T], direction: Direction) -> Option<usize> {
    match direction {
        Direction::Forward => find_first_enabled(candidates),
        Direction::Backward => find_last_enabled(candidates),
    }
}

/// Find the next enabled candidate from `anchor`, wrapping around the ends.
///
/// The search starts one step past the anchor, so the anchor itself is
/// considered last. With `with_anchor` the anchor is considered first. With
/// no anchor the search starts at the edge the direction points away from.
/// Returns `None` if every candidate is disabled.
pub fn find_next_enabled<T: Disableable>(
    candidates: &[T],
    anchor: Option<usize>,
    direction: Direction,
    with_anchor: bool,
) -> Option<usize> {
    let Some(anchor) = anchor else {
        return from_edge(candidates, direction);
    };
    let n = candidates.len() as isize;
    if n == 0 {
        return None;
    }
    let step = direction.step();
    let start = if with_anchor {
        anchor as isize
    } else {
        anchor as isize + step
    };
    (0..n)
        .map(|i| (start + i * step).rem_euclid(n) as usize)
        .find(|&i| !candidates[i].disabled())
}

/// Find the next enabled candidate from `anchor` without wrapping past the
/// ends of the slice.
pub fn find_next_enabled_no_wrap<T: Disableable>(
    candidates: &[T],
    anchor: Option<usize>,
    direction: Direction,
    with_anchor: bool,
) -> Option<usize> {
    let Some(anchor) = anchor else {
        return from_edge(candidates, direction);
    };
    let start = if with_anchor {
        Some(anchor)
    } else {
        anchor.checked_add_signed(direction.step())
    };
    let start = start.filter(|s| *s < candidates.len())?;
    match direction {
        Direction::Forward => (start..candidates.len()).find(|&i| !candidates[i].disabled()),
        Direction::Backward => (0..=start).rev().find(|&i| !candidates[i].disabled()),
    }
}
