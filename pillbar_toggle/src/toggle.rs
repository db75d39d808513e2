// Copyright 2026 the Pillbar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::mem;

use kurbo::Point;
use pillbar_gesture::slide::{SlideEnd, SlideState};
use pillbar_motion::{DIRECT_MS, Easing, SPRING_MS, Tween};

use crate::geometry::Geometry;
use crate::segment::Segment;

/// Default gap, in pixels, between the slot width and the drawn pill width.
pub const DEFAULT_PILL_INSET: f64 = 8.0;

/// Callback invoked after every successful activation with the resolved
/// index and value.
pub type ActivateFn = Box<dyn FnMut(usize, &str)>;

/// Sink receiving the active segment's value on every activation, typically
/// backing a hidden form field.
pub type ValueSink = Box<dyn FnMut(&str)>;

/// How an activation moves the indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Spring-style settle: 300 ms cubic ease-out. Used for taps and
    /// drag releases.
    Spring,
    /// Direct slide: 250 ms smoothstep. Used for per-option clicks.
    Direct,
}

/// What happened when a segment was activated.
///
/// Returned so hosts can toggle their active styling and, if they drive
/// their own transition system instead of [`SegmentedToggle::tick`], start
/// a move from `from` to `to`.
#[derive(Clone, Debug, PartialEq)]
pub struct Activation {
    /// The resolved (clamped) segment index.
    pub index: usize,
    /// The resolved value of that segment.
    pub value: String,
    /// Indicator offset when the activation was requested.
    pub from: f64,
    /// Indicator offset the activation settles on.
    pub to: f64,
}

/// Which controller currently drives the indicator offset.
///
/// Dragging and animating are structurally exclusive: replacing the phase
/// drops the previous session, which is how one controller cancels the
/// other.
#[derive(Debug)]
enum Phase {
    Idle,
    Dragging(SlideState),
    Animating(Tween),
}

/// A segmented toggle: a row of segments with a sliding indicator that
/// settles on the active one.
///
/// The control is headless. It owns the selection, the indicator offset,
/// and the arbitration between the three ways the indicator can move
/// (programmatic activation, tap, drag); the host owns layout, rendering,
/// and the frame loop. Hosts feed in pointer events with fresh
/// [`Geometry`] snapshots and call [`SegmentedToggle::tick`] once per frame
/// while [`SegmentedToggle::needs_frame`] holds.
///
/// ## Minimal example
///
/// ```
/// use pillbar_toggle::{Geometry, SegmentedToggle, Transition};
///
/// let mut toggle = SegmentedToggle::new(["Income", "Expense", "Transfer"]);
/// let geom = Geometry::new(0.0, 300.0);
///
/// let activation = toggle.activate(2, geom, 0.0, Transition::Spring).unwrap();
/// assert_eq!(activation.to, 200.0);
/// assert_eq!(toggle.active_index(), 2);
///
/// // Drive the settle from the host's frame clock.
/// while toggle.needs_frame() {
///     toggle.tick(1_000.0); // any time past the duration finishes it
/// }
/// assert_eq!(toggle.offset(), 200.0);
/// ```
pub struct SegmentedToggle {
    segments: Vec<Segment>,
    active: usize,
    offset: f64,
    pill_inset: f64,
    phase: Phase,
    on_activate: Option<ActivateFn>,
    value_sink: Option<ValueSink>,
}

impl fmt::Debug for SegmentedToggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SegmentedToggle")
            .field("segments", &self.segments)
            .field("active", &self.active)
            .field("offset", &self.offset)
            .field("pill_inset", &self.pill_inset)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

impl SegmentedToggle {
    /// Creates a toggle with one segment per label. Segment 0 starts active
    /// with the indicator at rest on it.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: labels.into_iter().map(Segment::new).collect(),
            active: 0,
            offset: 0.0,
            pill_inset: DEFAULT_PILL_INSET,
            phase: Phase::Idle,
            on_activate: None,
            value_sink: None,
        }
    }

    /// Sets explicit values for the leading segments (overlapping prefix).
    #[must_use]
    pub fn with_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.revalue(values);
        self
    }

    /// Overrides the gap between slot width and pill width.
    #[must_use]
    pub fn with_pill_inset(mut self, inset: f64) -> Self {
        self.pill_inset = inset;
        self
    }

    /// Registers the activation callback, invoked synchronously at the end
    /// of every successful activation with `(index, value)`.
    #[must_use]
    pub fn on_activate(mut self, callback: impl FnMut(usize, &str) + 'static) -> Self {
        self.on_activate = Some(Box::new(callback));
        self
    }

    /// Registers the linked value sink, which receives the active segment's
    /// value on every activation.
    #[must_use]
    pub fn with_value_sink(mut self, sink: impl FnMut(&str) + 'static) -> Self {
        self.value_sink = Some(Box::new(sink));
        self
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` when the control has no segments. Such a control is
    /// inert: no activation is possible and all operations are no-ops.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The active segment's index.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Returns `true` exactly for the active segment's index.
    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        !self.segments.is_empty() && index == self.active
    }

    /// The indicator's current left offset within the container.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// The display label of segment `index`, if it exists.
    #[must_use]
    pub fn label(&self, index: usize) -> Option<&str> {
        self.segments.get(index).map(Segment::label)
    }

    /// The value of segment `index`, if it exists.
    #[must_use]
    pub fn value(&self, index: usize) -> Option<&str> {
        self.segments.get(index).map(Segment::value)
    }

    /// The semantic tags attached to segment `index`, if it exists.
    #[must_use]
    pub fn tags(&self, index: usize) -> Option<&[String]> {
        self.segments.get(index).map(Segment::tags)
    }

    /// Width of one slot under the given geometry.
    #[must_use]
    pub fn slot_width(&self, geom: Geometry) -> f64 {
        geom.slot_width(self.segments.len())
    }

    /// Drawn width of the pill: the slot width minus the configured inset,
    /// floored at zero.
    #[must_use]
    pub fn pill_width(&self, geom: Geometry) -> f64 {
        (self.slot_width(geom) - self.pill_inset).max(0.0)
    }

    /// Returns `true` while a drag session is open.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging(_))
    }

    /// Returns `true` while a settle animation is in flight; the host
    /// should keep scheduling frames and calling [`Self::tick`].
    #[must_use]
    pub fn needs_frame(&self) -> bool {
        matches!(self.phase, Phase::Animating(_))
    }

    /// Activates the segment at `index`, moving the indicator there.
    ///
    /// Out-of-range indices are clamped to the last segment, never
    /// rejected. Replaces any in-flight drag or animation session with a
    /// new settle from the current offset to the target slot. The value
    /// sink and activation callback fire synchronously, after the selection
    /// updates and before the first animation frame.
    ///
    /// Returns `None` only when the control has no segments; repeating the
    /// same activation converges on the same offset and marking.
    pub fn activate(
        &mut self,
        index: usize,
        geom: Geometry,
        now_ms: f64,
        transition: Transition,
    ) -> Option<Activation> {
        if self.segments.is_empty() {
            return None;
        }
        let index = index.min(self.segments.len() - 1);
        self.active = index;

        let from = self.offset;
        let to = index as f64 * self.slot_width(geom);
        self.phase = Phase::Animating(match transition {
            Transition::Spring => Tween::new(from, to, now_ms, SPRING_MS, Easing::CubicOut),
            Transition::Direct => Tween::new(from, to, now_ms, DIRECT_MS, Easing::Smoothstep),
        });

        let value = self.segments[index].value().to_string();
        if let Some(sink) = self.value_sink.as_mut() {
            sink(&value);
        }
        if let Some(callback) = self.on_activate.as_mut() {
            callback(index, &value);
        }

        Some(Activation {
            index,
            value,
            from,
            to,
        })
    }

    /// The per-option click path: activates `index` with the direct
    /// (non-spring) transition.
    pub fn click(&mut self, index: usize, geom: Geometry, now_ms: f64) -> Option<Activation> {
        self.activate(index, geom, now_ms, Transition::Direct)
    }

    /// Opens a drag session at pointer-down.
    ///
    /// Any in-flight animation is sampled at `now_ms` and cancelled, so the
    /// indicator is grabbed exactly where it currently sits and tracks the
    /// pointer 1:1 from here on.
    pub fn pointer_down(&mut self, pointer: Point, now_ms: f64) {
        if let Phase::Animating(tween) = &self.phase {
            let (value, _) = tween.sample(now_ms);
            self.offset = value;
        }
        self.phase = Phase::Dragging(SlideState::begin(pointer, self.offset));
    }

    /// Feeds a pointer-move into an open drag session.
    ///
    /// Returns the clamped live offset once displacement has exceeded the
    /// tap slop; `Some` is also the host's cue to suppress default pointer
    /// behavior (scrolling, text selection). Returns `None` while the
    /// gesture is still tap-sized or when no session is open.
    pub fn pointer_move(&mut self, pointer: Point, geom: Geometry) -> Option<f64> {
        let max_offset = geom.max_offset(self.segments.len());
        match &mut self.phase {
            Phase::Dragging(slide) => {
                let live = slide.update(pointer, max_offset)?;
                self.offset = live;
                Some(live)
            }
            _ => None,
        }
    }

    /// Closes the drag session at pointer-up and resolves it.
    ///
    /// A tap-sized session activates the slot under the release coordinate;
    /// a swipe activates the slot containing the pill's center. Both settle
    /// with the spring transition. A pointer-up with no open session (a
    /// duplicate or out-of-order event) is a no-op returning `None`.
    pub fn pointer_up(&mut self, pointer: Point, geom: Geometry, now_ms: f64) -> Option<Activation> {
        let slide = match mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Dragging(slide) => slide,
            other => {
                self.phase = other;
                return None;
            }
        };
        let count = self.segments.len();
        let index = match slide.release(pointer) {
            SlideEnd::Tap { x } => geom.slot_at(x, count),
            SlideEnd::Swipe { offset } => {
                geom.slot_for_offset(offset + self.pill_width(geom) / 2.0, count)
            }
        };
        self.activate(index, geom, now_ms, Transition::Spring)
    }

    /// Advances an in-flight settle animation to `now_ms`.
    ///
    /// Returns the offset written this frame, or `None` when nothing is
    /// animating. On completion the offset lands exactly on the target and
    /// the control returns to idle.
    pub fn tick(&mut self, now_ms: f64) -> Option<f64> {
        let Phase::Animating(tween) = &self.phase else {
            return None;
        };
        let (value, done) = tween.sample(now_ms);
        self.offset = value;
        if done {
            self.phase = Phase::Idle;
        }
        Some(value)
    }

    /// Re-snaps the indicator after a container resize.
    ///
    /// When the control is at rest this recomputes the active slot's offset
    /// under the new geometry and jumps there without animation (the
    /// geometry changed, not the selection). An open drag or in-flight
    /// settle is left alone; both re-read geometry when they resolve.
    pub fn on_resize(&mut self, geom: Geometry) {
        if matches!(self.phase, Phase::Idle) {
            self.offset = self.active as f64 * self.slot_width(geom);
        }
    }

    /// Overwrites display labels in order. A sequence shorter or longer
    /// than the segment count updates the overlapping prefix and ignores
    /// the rest; the segment count never changes.
    pub fn relabel<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for (segment, label) in self.segments.iter_mut().zip(labels) {
            segment.set_label(label);
        }
    }

    /// Overwrites segment values in order, with the same overlapping-prefix
    /// contract as [`Self::relabel`].
    pub fn revalue<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for (segment, value) in self.segments.iter_mut().zip(values) {
            segment.set_value(value);
        }
    }

    /// Attaches a semantic tag to segment `index`. Out-of-range indices are
    /// ignored.
    pub fn tag(&mut self, index: usize, tag: impl Into<String>) {
        if let Some(segment) = self.segments.get_mut(index) {
            segment.push_tag(tag);
        }
    }

    /// Clears every segment's transient semantic tags, leaving labels,
    /// values, and the active marking untouched. Used when the control is
    /// reused for a different semantic domain.
    pub fn clear_dynamic_tags(&mut self) {
        for segment in &mut self.segments {
            segment.clear_tags();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geom() -> Geometry {
        Geometry::new(0.0, 300.0)
    }

    fn toggle() -> SegmentedToggle {
        SegmentedToggle::new(["A", "B", "C"])
    }

    #[test]
    fn starts_at_rest_on_segment_zero() {
        let toggle = toggle();
        assert_eq!(toggle.active_index(), 0);
        assert_eq!(toggle.offset(), 0.0);
        assert!(!toggle.needs_frame());
        assert!(!toggle.is_dragging());
    }

    #[test]
    fn activate_moves_selection_and_targets_slot() {
        let mut toggle = toggle();
        let activation = toggle
            .activate(2, geom(), 0.0, Transition::Spring)
            .expect("non-empty toggle activates");
        assert_eq!(activation.index, 2);
        assert_eq!(activation.from, 0.0);
        assert_eq!(activation.to, 200.0);
        assert_eq!(toggle.active_index(), 2);
        assert!(toggle.needs_frame());
    }

    #[test]
    fn exactly_one_segment_is_marked_active() {
        let mut toggle = toggle();
        toggle.activate(1, geom(), 0.0, Transition::Spring);
        let marked: Vec<usize> = (0..toggle.len()).filter(|&i| toggle.is_active(i)).collect();
        assert_eq!(marked, [1]);
    }

    #[test]
    fn out_of_range_activation_clamps_to_last() {
        let mut toggle = toggle();
        let activation = toggle
            .activate(99, geom(), 0.0, Transition::Spring)
            .expect("clamped, not rejected");
        assert_eq!(activation.index, 2);
        assert_eq!(toggle.active_index(), 2);
    }

    #[test]
    fn activation_is_idempotent_in_final_state() {
        let mut toggle = toggle();
        toggle.activate(1, geom(), 0.0, Transition::Spring);
        while toggle.needs_frame() {
            toggle.tick(1_000.0);
        }
        let settled_once = toggle.offset();

        toggle.activate(1, geom(), 2_000.0, Transition::Spring);
        while toggle.needs_frame() {
            toggle.tick(3_000.0);
        }
        assert_eq!(toggle.offset(), settled_once);
        assert_eq!(toggle.active_index(), 1);
    }

    #[test]
    fn tick_lands_exactly_on_target_and_goes_idle() {
        let mut toggle = toggle();
        toggle.activate(2, geom(), 0.0, Transition::Spring);

        let mid = toggle.tick(150.0).expect("animating");
        assert!(mid > 0.0 && mid < 200.0);

        let end = toggle.tick(300.0).expect("final frame");
        assert_eq!(end, 200.0);
        assert!(!toggle.needs_frame());
        assert_eq!(toggle.tick(316.0), None);
    }

    #[test]
    fn direct_transition_uses_shorter_duration() {
        let mut toggle = toggle();
        toggle.click(2, geom(), 0.0);
        let end = toggle.tick(250.0).expect("final frame");
        assert_eq!(end, 200.0);
        assert!(!toggle.needs_frame());
    }

    #[test]
    fn empty_toggle_is_inert() {
        let mut toggle = SegmentedToggle::new(Vec::<String>::new());
        assert!(toggle.is_empty());
        assert_eq!(toggle.activate(0, geom(), 0.0, Transition::Spring), None);
        assert_eq!(toggle.pointer_move(Point::new(50.0, 0.0), geom()), None);
        toggle.on_resize(geom());
        assert_eq!(toggle.offset(), 0.0);
    }

    #[test]
    fn zero_width_container_produces_no_nan() {
        let mut toggle = toggle();
        let flat = Geometry::new(0.0, 0.0);
        let activation = toggle
            .activate(2, flat, 0.0, Transition::Spring)
            .expect("activation still resolves");
        assert_eq!(activation.to, 0.0);
        assert!(toggle.offset().is_finite());
    }

    #[test]
    fn pointer_down_cancels_animation_at_sampled_offset() {
        let mut toggle = toggle();
        toggle.activate(2, geom(), 0.0, Transition::Spring);
        toggle.tick(100.0);

        toggle.pointer_down(Point::new(80.0, 10.0), 150.0);
        assert!(toggle.is_dragging());
        assert!(!toggle.needs_frame());
        let frozen = toggle.offset();
        assert!(frozen > 0.0 && frozen < 200.0);
        assert_eq!(toggle.tick(300.0), None);
        assert_eq!(toggle.offset(), frozen);
    }

    #[test]
    fn tap_sized_gesture_resolves_from_release_position() {
        let mut toggle = toggle();
        toggle.activate(2, geom(), 0.0, Transition::Spring);
        toggle.tick(1_000.0);

        // Down at x=50, up at x=52: Δ=2 stays under the slop, so this is a
        // tap inside slot 0 regardless of where the indicator sits.
        toggle.pointer_down(Point::new(50.0, 10.0), 1_000.0);
        assert_eq!(toggle.pointer_move(Point::new(52.0, 10.0), geom()), None);
        let activation = toggle
            .pointer_up(Point::new(52.0, 10.0), geom(), 1_000.0)
            .expect("tap activates");
        assert_eq!(activation.index, 0);
        assert_eq!(toggle.active_index(), 0);
        assert!(toggle.needs_frame());
    }

    #[test]
    fn swipe_resolves_from_pill_center() {
        let mut toggle = toggle();

        // Down at x=10 with the pill at offset 0, drag to x=140: the live
        // offset is 130 and the pill center (130 + 92/2 = 176) lands in
        // slot 1's span (100..200).
        toggle.pointer_down(Point::new(10.0, 10.0), 0.0);
        assert_eq!(toggle.pointer_move(Point::new(140.0, 10.0), geom()), Some(130.0));
        let activation = toggle
            .pointer_up(Point::new(140.0, 10.0), geom(), 16.0)
            .expect("swipe activates");
        assert_eq!(activation.index, 1);
        assert_eq!(activation.from, 130.0);
        assert_eq!(activation.to, 100.0);
    }

    #[test]
    fn drag_offset_stays_clamped() {
        let mut toggle = toggle();
        toggle.pointer_down(Point::new(10.0, 10.0), 0.0);
        assert_eq!(toggle.pointer_move(Point::new(5_000.0, 10.0), geom()), Some(200.0));
        assert_eq!(toggle.pointer_move(Point::new(-5_000.0, 10.0), geom()), Some(0.0));
    }

    #[test]
    fn stale_pointer_up_is_a_no_op() {
        let mut toggle = toggle();
        assert_eq!(toggle.pointer_up(Point::new(150.0, 10.0), geom(), 0.0), None);
        assert_eq!(toggle.active_index(), 0);

        // A second up after a resolved gesture is equally stale.
        toggle.pointer_down(Point::new(50.0, 10.0), 0.0);
        toggle.pointer_up(Point::new(52.0, 10.0), geom(), 16.0);
        let again = toggle.pointer_up(Point::new(250.0, 10.0), geom(), 32.0);
        assert_eq!(again, None);
    }

    #[test]
    fn pointer_move_without_session_is_a_no_op() {
        let mut toggle = toggle();
        assert_eq!(toggle.pointer_move(Point::new(150.0, 10.0), geom()), None);
        assert_eq!(toggle.offset(), 0.0);
    }

    #[test]
    fn resize_resnaps_only_at_rest() {
        let mut toggle = toggle();
        toggle.activate(1, geom(), 0.0, Transition::Spring);
        while toggle.needs_frame() {
            toggle.tick(1_000.0);
        }
        assert_eq!(toggle.offset(), 100.0);

        // Container doubled: re-snap to the new slot position, no animation.
        toggle.on_resize(Geometry::new(0.0, 600.0));
        assert_eq!(toggle.offset(), 200.0);
        assert_eq!(toggle.active_index(), 1);
        assert!(!toggle.needs_frame());

        // During a drag the resize leaves the live offset alone.
        toggle.pointer_down(Point::new(210.0, 10.0), 2_000.0);
        toggle.pointer_move(Point::new(260.0, 10.0), Geometry::new(0.0, 600.0));
        let live = toggle.offset();
        toggle.on_resize(Geometry::new(0.0, 300.0));
        assert_eq!(toggle.offset(), live);
    }

    #[test]
    fn relabel_and_revalue_apply_overlapping_prefix() {
        let mut toggle = toggle();
        toggle.relabel(["One", "Two"]);
        assert_eq!(toggle.label(0), Some("One"));
        assert_eq!(toggle.label(1), Some("Two"));
        assert_eq!(toggle.label(2), Some("C"));

        toggle.revalue(["1", "2", "3", "4"]);
        assert_eq!(toggle.value(2), Some("3"));
        assert_eq!(toggle.len(), 3);
    }

    #[test]
    fn value_falls_back_to_label_until_revalued() {
        let mut toggle = toggle();
        assert_eq!(toggle.value(1), Some("B"));
        toggle.revalue(["a", "b"]);
        assert_eq!(toggle.value(1), Some("b"));
    }

    #[test]
    fn clear_dynamic_tags_spares_structure() {
        let mut toggle = toggle();
        toggle.tag(0, "income");
        toggle.tag(1, "expense");
        toggle.tag(99, "ignored");
        assert_eq!(toggle.tags(0), Some(&["income".to_string()][..]));

        toggle.clear_dynamic_tags();
        assert!(toggle.tags(0).is_some_and(<[String]>::is_empty));
        assert_eq!(toggle.label(0), Some("A"));
        assert_eq!(toggle.active_index(), 0);
    }

    #[test]
    fn pill_width_subtracts_inset() {
        let toggle = toggle();
        assert_eq!(toggle.pill_width(geom()), 92.0);

        let narrow = SegmentedToggle::new(["A", "B", "C"]).with_pill_inset(200.0);
        assert_eq!(narrow.pill_width(geom()), 0.0);
    }
}
