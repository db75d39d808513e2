// Copyright 2026 the Pillbar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pillbar Toggle: headless segmented toggle with a sliding indicator.
//!
//! A segmented toggle is a row of options with a pill that slides to the
//! active one. This crate owns the interaction core: the selection, the
//! indicator offset, and the arbitration between the three ways the pill
//! can move — programmatic activation, tap, and drag. Everything visual
//! stays with the host: it lays out the options, reads the pill offset
//! after each event or frame, and applies its own styling when an
//! [`Activation`] is returned.
//!
//! The three interaction modes reduce to one rule: exactly one controller
//! drives the offset at a time. A pointer-down cancels any in-flight
//! settle and opens a drag session; resolving a drag (or any activation)
//! replaces the session with a new settle. The control's internal phase is
//! a tagged state — idle, dragging, or animating — so a frame where both a
//! drag and an animation write the offset cannot be expressed.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use pillbar_toggle::{Geometry, SegmentedToggle};
//!
//! let mut toggle = SegmentedToggle::new(["Income", "Expense"]);
//!
//! // Host reads fresh layout before every event.
//! let geom = Geometry::new(0.0, 300.0);
//!
//! // A short press-release inside the second option is a tap.
//! toggle.pointer_down(Point::new(200.0, 12.0), 0.0);
//! let activation = toggle.pointer_up(Point::new(202.0, 12.0), geom, 16.0).unwrap();
//! assert_eq!(activation.index, 1);
//!
//! // The host's frame loop drives the settle.
//! while toggle.needs_frame() {
//!     let offset = toggle.tick(500.0).unwrap();
//!     // apply `offset` to the pill's transform...
//!     # let _ = offset;
//! }
//! assert_eq!(toggle.offset(), 150.0);
//! ```
//!
//! ## Integration notes
//!
//! - Geometry is a per-call snapshot ([`Geometry`]); the control never
//!   caches it, so layout may change between any two events.
//! - Timestamps are `f64` milliseconds from any monotonic origin the host
//!   likes; animation progress is elapsed-time based, so throttled or
//!   paused frame delivery cannot corrupt a settle.
//! - The activation callback and value sink (see
//!   [`SegmentedToggle::on_activate`] and
//!   [`SegmentedToggle::with_value_sink`]) fire synchronously on every
//!   activation, whatever triggered it.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod geometry;
mod segment;
mod toggle;

pub use geometry::Geometry;
pub use segment::Segment;
pub use toggle::{
    ActivateFn, Activation, DEFAULT_PILL_INSET, SegmentedToggle, Transition, ValueSink,
};
