#![forbid(unsafe_code)]

//! Constraint-based layout solving.
//!
//! [`split`] turns an ordered list of [`Constraint`]s plus a
//! [`Direction`] into disjoint rectangles that exactly tile the
//! post-margin interior of a parent area. The solver is a pure
//! function: no state, no I/O, same inputs, same output.
//!
//! # Tie-break policies
//!
//! These are deliberate and load-bearing; callers may rely on them:
//!
//! - Fixed demands are served left to right in declaration order. Under
//!   overflow, later constraints clamp toward zero; first-declared
//!   constraints win.
//! - Leftover cells from integer division go one at a time to the
//!   earliest flexible constraints in declaration order.
//! - `Max` caps apply after proportional distribution; a capped entry
//!   leaves the pool and its unused share is redistributed.
//! - Extent still unassigned once the pool drains (fixed-only lists, or
//!   every `Max` capped) is absorbed by the last rectangle. The tiling
//!   invariant - produced extents sum exactly to the available extent -
//!   holds for every constraint combination.
//!
//! # Example
//!
//! ```
//! use cadence_layout::{split, Constraint, Direction};
//! use cadence_core::Rect;
//!
//! let rects = split(
//!     Rect::from_size(80, 24),
//!     Direction::Vertical,
//!     0,
//!     &[Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)],
//! );
//! assert_eq!(rects[0].height, 3);
//! assert_eq!(rects[1].height, 20);
//! assert_eq!(rects[2].height, 1);
//! ```

pub use cadence_core::geometry::{Rect, Sides};

/// A sizing rule along the split axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constraint {
    /// Exactly this many cells.
    Length(u16),
    /// A percentage of the post-margin available extent, clamped to
    /// 0..=100.
    Percentage(u16),
    /// A `num / den` fraction of the post-margin available extent.
    /// A zero denominator resolves to zero cells.
    Ratio(u32, u32),
    /// At least this many cells; absorbs leftover space in equal shares
    /// with the other flexible constraints.
    Min(u16),
    /// At most this many cells; flexible but capped.
    Max(u16),
}

/// The axis along which constraints are laid out.
///
/// The orthogonal axis is filled entirely by every produced rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Top to bottom.
    #[default]
    Vertical,
    /// Left to right.
    Horizontal,
}

/// A reusable layout specification.
///
/// Order is significant: the i-th constraint produces the i-th
/// rectangle, in scan order along the axis, with no gaps. Nested
/// layouts are built by splitting a previously produced rectangle; no
/// constraint propagates across calls.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    direction: Direction,
    margin: Sides,
    constraints: Vec<Constraint>,
}

impl Layout {
    /// Create a vertical layout.
    #[must_use]
    pub fn vertical() -> Self {
        Self {
            direction: Direction::Vertical,
            ..Default::default()
        }
    }

    /// Create a horizontal layout.
    #[must_use]
    pub fn horizontal() -> Self {
        Self {
            direction: Direction::Horizontal,
            ..Default::default()
        }
    }

    /// Set the split direction.
    #[must_use]
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set the margin applied as an inset before splitting.
    #[must_use]
    pub fn margin(mut self, margin: impl Into<Sides>) -> Self {
        self.margin = margin.into();
        self
    }

    /// Set the ordered constraint list.
    #[must_use]
    pub fn constraints(mut self, constraints: impl IntoIterator<Item = Constraint>) -> Self {
        self.constraints = constraints.into_iter().collect();
        self
    }

    /// Split `area` into one rectangle per constraint.
    ///
    /// Degenerate input (zero-size areas, over-subscribed constraints,
    /// margins larger than the area) is resolved by clamping, never by
    /// panicking: a UI must not crash because the terminal is small.
    pub fn split(&self, area: Rect) -> Vec<Rect> {
        if self.constraints.is_empty() {
            return Vec::new();
        }

        let inner = area.inner(self.margin);
        let available = match self.direction {
            Direction::Horizontal => inner.width,
            Direction::Vertical => inner.height,
        };

        let extents = solve(&self.constraints, available);

        let mut rects = Vec::with_capacity(extents.len());
        let mut offset = match self.direction {
            Direction::Horizontal => inner.x,
            Direction::Vertical => inner.y,
        };
        for &extent in &extents {
            let rect = match self.direction {
                Direction::Horizontal => Rect::new(offset, inner.y, extent, inner.height),
                Direction::Vertical => Rect::new(inner.x, offset, inner.width, extent),
            };
            rects.push(rect);
            offset = offset.saturating_add(extent);
        }
        rects
    }
}

/// Split `area` along `direction` with a symmetric `margin`.
///
/// Convenience entry point over [`Layout`]; usable independently of the
/// event loop, including from tests.
pub fn split(
    area: Rect,
    direction: Direction,
    margin: u16,
    constraints: &[Constraint],
) -> Vec<Rect> {
    Layout {
        direction,
        margin: Sides::all(margin),
        constraints: constraints.to_vec(),
    }
    .split(area)
}

/// Resolve constraint extents along one axis.
///
/// Two passes: fixed demands consume from `available` in declaration
/// order, then the remainder is distributed over the flexible pool in
/// equal integer shares with the division remainder going to the
/// earliest pool members. `Max` caps are enforced iteratively; capped
/// entries leave the pool and their unused share is redistributed.
fn solve(constraints: &[Constraint], available: u16) -> Vec<u16> {
    let mut sizes = vec![0u16; constraints.len()];
    let mut remaining = available;
    let mut pool: Vec<usize> = Vec::new();

    for (i, &constraint) in constraints.iter().enumerate() {
        match constraint {
            Constraint::Length(want) => {
                let take = want.min(remaining);
                sizes[i] = take;
                remaining -= take;
            }
            Constraint::Percentage(percent) => {
                let want = (available as u32 * percent.min(100) as u32 / 100) as u16;
                let take = want.min(remaining);
                sizes[i] = take;
                remaining -= take;
            }
            Constraint::Ratio(num, den) => {
                let want = if den == 0 {
                    0
                } else {
                    ((available as u64 * num as u64) / den as u64).min(u16::MAX as u64) as u16
                };
                let take = want.min(remaining);
                sizes[i] = take;
                remaining -= take;
            }
            Constraint::Min(floor) => {
                // The floor is consumed up front, so a later Max cap can
                // never push this entry below its minimum.
                let take = floor.min(remaining);
                sizes[i] = take;
                remaining -= take;
                pool.push(i);
            }
            Constraint::Max(_) => {
                pool.push(i);
            }
        }
    }

    while remaining > 0 && !pool.is_empty() {
        let members = pool.len() as u16;
        let share = remaining / members;
        let extra = (remaining % members) as usize;

        // Proposed grant for pool position `idx`: the equal share, plus
        // one remainder cell for the earliest `extra` members.
        let capped: Vec<usize> = pool
            .iter()
            .enumerate()
            .filter(|&(idx, &i)| {
                let grant = share + u16::from(idx < extra);
                matches!(constraints[i], Constraint::Max(cap)
                    if sizes[i].saturating_add(grant) > cap)
            })
            .map(|(_, &i)| i)
            .collect();

        if capped.is_empty() {
            for (idx, &i) in pool.iter().enumerate() {
                let grant = share + u16::from(idx < extra);
                sizes[i] = sizes[i].saturating_add(grant);
                remaining -= grant;
            }
            break;
        }

        for i in capped {
            if let Constraint::Max(cap) = constraints[i] {
                let grant = cap.saturating_sub(sizes[i]).min(remaining);
                sizes[i] = sizes[i].saturating_add(grant);
                remaining -= grant;
                pool.retain(|&member| member != i);
            }
        }
    }

    // Fixed-only lists or fully capped pools leave a tail. The last
    // rect absorbs it so the tiling invariant holds unconditionally.
    if remaining > 0
        && let Some(last) = sizes.last_mut()
    {
        *last = last.saturating_add(remaining);
    }

    sizes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extents(rects: &[Rect], direction: Direction) -> Vec<u16> {
        rects
            .iter()
            .map(|r| match direction {
                Direction::Horizontal => r.width,
                Direction::Vertical => r.height,
            })
            .collect()
    }

    #[test]
    fn lengths_tile_in_order() {
        let rects = split(
            Rect::from_size(10, 4),
            Direction::Horizontal,
            0,
            &[
                Constraint::Length(3),
                Constraint::Length(4),
                Constraint::Length(3),
            ],
        );
        assert_eq!(extents(&rects, Direction::Horizontal), vec![3, 4, 3]);
        assert_eq!(rects[0].x, 0);
        assert_eq!(rects[1].x, 3);
        assert_eq!(rects[2].x, 7);
    }

    #[test]
    fn overflow_honors_first_declared() {
        let rects = split(
            Rect::from_size(10, 1),
            Direction::Horizontal,
            0,
            &[Constraint::Length(8), Constraint::Length(8)],
        );
        assert_eq!(extents(&rects, Direction::Horizontal), vec![8, 2]);
    }

    #[test]
    fn severe_overflow_clamps_trailing_to_zero() {
        let rects = split(
            Rect::from_size(5, 1),
            Direction::Horizontal,
            0,
            &[
                Constraint::Length(9),
                Constraint::Length(9),
                Constraint::Length(9),
            ],
        );
        assert_eq!(extents(&rects, Direction::Horizontal), vec![5, 0, 0]);
    }

    #[test]
    fn min_absorbs_leftover() {
        let rects = split(
            Rect::from_size(10, 1),
            Direction::Horizontal,
            0,
            &[Constraint::Length(3), Constraint::Min(1)],
        );
        assert_eq!(extents(&rects, Direction::Horizontal), vec![3, 7]);
    }

    #[test]
    fn mins_share_equally_with_earliest_remainder() {
        // 11 cells over three Min(0): 4 + 4 + 3, remainder to the front.
        let rects = split(
            Rect::from_size(11, 1),
            Direction::Horizontal,
            0,
            &[Constraint::Min(0), Constraint::Min(0), Constraint::Min(0)],
        );
        assert_eq!(extents(&rects, Direction::Horizontal), vec![4, 4, 3]);
    }

    #[test]
    fn percentage_rounding_conserves_total() {
        let rects = split(
            Rect::from_size(100, 1),
            Direction::Horizontal,
            0,
            &[
                Constraint::Percentage(33),
                Constraint::Percentage(33),
                Constraint::Percentage(33),
            ],
        );
        // The single leftover cell lands on the last rect.
        assert_eq!(extents(&rects, Direction::Horizontal), vec![33, 33, 34]);
    }

    #[test]
    fn percentage_clamps_above_hundred() {
        let rects = split(
            Rect::from_size(50, 1),
            Direction::Horizontal,
            0,
            &[Constraint::Percentage(250)],
        );
        assert_eq!(extents(&rects, Direction::Horizontal), vec![50]);
    }

    #[test]
    fn ratio_resolves_against_available_extent() {
        let rects = split(
            Rect::from_size(100, 1),
            Direction::Horizontal,
            0,
            &[Constraint::Ratio(1, 4), Constraint::Min(0)],
        );
        assert_eq!(extents(&rects, Direction::Horizontal), vec![25, 75]);
    }

    #[test]
    fn ratio_zero_denominator_is_zero() {
        let rects = split(
            Rect::from_size(100, 1),
            Direction::Horizontal,
            0,
            &[Constraint::Ratio(1, 0), Constraint::Min(0)],
        );
        assert_eq!(extents(&rects, Direction::Horizontal), vec![0, 100]);
    }

    #[test]
    fn max_caps_after_distribution() {
        let rects = split(
            Rect::from_size(10, 1),
            Direction::Horizontal,
            0,
            &[Constraint::Max(4), Constraint::Min(0)],
        );
        assert_eq!(extents(&rects, Direction::Horizontal), vec![4, 6]);
    }

    #[test]
    fn max_within_share_keeps_share() {
        let rects = split(
            Rect::from_size(10, 1),
            Direction::Horizontal,
            0,
            &[Constraint::Max(8), Constraint::Min(0)],
        );
        // 10 / 2 = 5 each; 5 <= 8 so the cap never bites.
        assert_eq!(extents(&rects, Direction::Horizontal), vec![5, 5]);
    }

    #[test]
    fn fully_capped_pool_overflows_into_last() {
        // Tiling completeness outranks the caps once nothing can grow.
        let rects = split(
            Rect::from_size(10, 1),
            Direction::Horizontal,
            0,
            &[Constraint::Max(2), Constraint::Max(2)],
        );
        assert_eq!(extents(&rects, Direction::Horizontal), vec![2, 8]);
    }

    #[test]
    fn min_floor_survives_conflicting_max() {
        // Min(6) consumes its floor before Max(2) is ever considered.
        let rects = split(
            Rect::from_size(10, 1),
            Direction::Horizontal,
            0,
            &[Constraint::Min(6), Constraint::Max(2)],
        );
        assert_eq!(extents(&rects, Direction::Horizontal), vec![8, 2]);
    }

    #[test]
    fn fixed_only_underfill_stretches_last() {
        let rects = split(
            Rect::from_size(10, 1),
            Direction::Horizontal,
            0,
            &[Constraint::Length(2), Constraint::Length(3)],
        );
        assert_eq!(extents(&rects, Direction::Horizontal), vec![2, 8]);
    }

    #[test]
    fn margin_insets_all_sides() {
        let rects = split(
            Rect::from_size(20, 10),
            Direction::Vertical,
            2,
            &[Constraint::Min(0)],
        );
        assert_eq!(rects, vec![Rect::new(2, 2, 16, 6)]);
    }

    #[test]
    fn margin_larger_than_area_degenerates() {
        let rects = split(
            Rect::from_size(4, 4),
            Direction::Vertical,
            10,
            &[Constraint::Length(2), Constraint::Min(1)],
        );
        assert_eq!(rects.len(), 2);
        for rect in &rects {
            assert_eq!(rect.area(), 0);
        }
    }

    #[test]
    fn zero_width_area_yields_zero_width_rects() {
        let rects = split(
            Rect::from_size(0, 24),
            Direction::Horizontal,
            0,
            &[
                Constraint::Percentage(50),
                Constraint::Min(5),
                Constraint::Length(3),
            ],
        );
        assert_eq!(rects.len(), 3);
        for rect in &rects {
            assert_eq!(rect.width, 0);
            assert_eq!(rect.height, 24);
        }
    }

    #[test]
    fn empty_constraints_yield_no_rects() {
        assert!(split(Rect::from_size(10, 10), Direction::Vertical, 0, &[]).is_empty());
    }

    #[test]
    fn vertical_split_fills_width() {
        let rects = split(
            Rect::new(5, 3, 30, 20),
            Direction::Vertical,
            0,
            &[Constraint::Length(4), Constraint::Min(0)],
        );
        assert_eq!(rects[0], Rect::new(5, 3, 30, 4));
        assert_eq!(rects[1], Rect::new(5, 7, 30, 16));
    }

    #[test]
    fn nested_splits_compose() {
        let outer = split(
            Rect::from_size(80, 24),
            Direction::Horizontal,
            0,
            &[Constraint::Percentage(30), Constraint::Percentage(70)],
        );
        let inner = split(
            outer[0],
            Direction::Vertical,
            0,
            &[Constraint::Percentage(50), Constraint::Percentage(50)],
        );
        assert_eq!(inner[0], Rect::new(0, 0, 24, 12));
        assert_eq!(inner[1], Rect::new(0, 12, 24, 12));
    }

    #[test]
    fn builder_and_free_function_agree() {
        let area = Rect::from_size(60, 20);
        let constraints = [
            Constraint::Length(5),
            Constraint::Min(3),
            Constraint::Percentage(25),
        ];
        let from_builder = Layout::horizontal()
            .margin(1)
            .constraints(constraints)
            .split(area);
        let from_fn = split(area, Direction::Horizontal, 1, &constraints);
        assert_eq!(from_builder, from_fn);
    }
}
