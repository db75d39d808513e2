// Copyright 2026 the Pillbar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A per-call snapshot of the container's horizontal layout.
///
/// The control never caches geometry: hosts read `left` and `width` from
/// fresh layout and pass a `Geometry` into every operation that needs one,
/// so a container that resized between events can never be consulted stale.
///
/// All slot math is guarded against degenerate layouts: zero segments or a
/// non-positive width yield `0.0` widths and slot `0` rather than `NaN` or
/// a panic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    /// The container's left edge in the pointer event coordinate space.
    pub left: f64,
    /// The container's width in pixels.
    pub width: f64,
}

impl Geometry {
    /// Creates a snapshot from the container's left edge and width.
    #[must_use]
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    /// Width of one slot: `width / count`, or `0.0` for degenerate layouts.
    #[must_use]
    pub fn slot_width(&self, count: usize) -> f64 {
        if count == 0 || self.width <= 0.0 {
            return 0.0;
        }
        self.width / count as f64
    }

    /// The largest valid indicator offset, `(count - 1) * slot_width`.
    #[must_use]
    pub fn max_offset(&self, count: usize) -> f64 {
        match count {
            0 => 0.0,
            n => (n - 1) as f64 * self.slot_width(n),
        }
    }

    /// The slot under an absolute pointer X coordinate, clamped into
    /// `[0, count - 1]`. Returns `0` for degenerate layouts.
    #[must_use]
    pub fn slot_at(&self, x: f64, count: usize) -> usize {
        self.slot_for_offset(x - self.left, count)
    }

    /// The slot containing a container-relative X offset, clamped into
    /// `[0, count - 1]`. Returns `0` for degenerate layouts.
    #[must_use]
    pub fn slot_for_offset(&self, offset: f64, count: usize) -> usize {
        let slot = self.slot_width(count);
        if count == 0 || slot <= 0.0 {
            return 0;
        }
        // Truncation is floor here: the operand is clamped non-negative.
        #[expect(
            clippy::cast_possible_truncation,
            reason = "clamped ratio is non-negative and bounded by count"
        )]
        let index = (offset.max(0.0) / slot) as usize;
        index.min(count - 1)
    }
}
