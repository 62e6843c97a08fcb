//! Drag/swipe carousel state machine for the forecast day cards.
//!
//! The carousel owns paging state over a fixed, ordered set of rendered
//! day cards. Card geometry is supplied by the render layer; rendering is a
//! pure projection of [`Carousel`], so any frontend (mouse, touch, keys)
//! drives the same transitions and the machine is unit-testable without
//! simulating real pointer events.
//!
//! # Phases
//!
//! - `Idle`: no pointer engaged; the offset sits at the current index's rest
//!   position.
//! - `Dragging`: a pointer is down; the offset follows it continuously, with
//!   rubber-band resistance past either boundary.
//! - `Settling`: a short animation back to a snapped rest offset after
//!   release or a bounce.
//! - `Bouncing`: the boundary affordance — the strip holds briefly past the
//!   rest position before springing back. Paging past the first or last card
//!   is not an error.
//!
//! Animations advance via [`Carousel::tick`], driven by the frontend's
//! event-loop cadence, so every transition is deterministic under test.

use std::time::Duration;

/// Divisor applied to drag excess beyond either boundary (rubber band).
const RESISTANCE: f32 = 3.0;

/// Fraction of the card stride a drag must cover to commit a page turn.
const SNAP_DIVISOR: f32 = 3.0;

/// How far past rest a boundary bounce travels, in layout pixels (columns).
const BOUNCE_OVERSHOOT: f32 = 20.0;

/// How long the bounce holds at its peak before springing back.
const BOUNCE_HOLD: Duration = Duration::from_millis(150);

/// Duration of the settle animation back to a rest offset.
const SETTLE_DURATION: Duration = Duration::from_millis(200);

/// Resize quiescence window before card geometry is recomputed.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(100);

/// Card width and inter-card gap, in layout pixels (terminal columns).
///
/// Owned by the render layer and handed to the carousel; the carousel never
/// measures anything itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardGeometry {
    /// Width of one day card.
    pub card_width: f32,
    /// Horizontal gap between adjacent cards.
    pub gap: f32,
}

impl CardGeometry {
    /// Distance between the left edges of two adjacent cards.
    #[must_use]
    pub fn stride(&self) -> f32 {
        self.card_width + self.gap
    }
}

/// Interaction phase of the carousel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// At rest on the current index.
    Idle,
    /// A pointer is down and moving the strip.
    Dragging {
        /// Pointer x-coordinate at pointer-down.
        start_x: f32,
        /// Strip offset at pointer-down.
        start_offset: f32,
    },
    /// Animating toward a snapped rest offset.
    Settling {
        /// Offset when the animation started.
        from: f32,
        /// Rest offset being animated to.
        target: f32,
        /// Time spent animating so far.
        elapsed: Duration,
    },
    /// Holding past a boundary before springing back to rest.
    Bouncing {
        /// Rest offset to spring back to.
        rest: f32,
        /// Time spent at the peak so far.
        held: Duration,
    },
}

/// Paging/drag state over a fixed set of rendered day cards.
///
/// Guarantees: the current index is always within `[0, card_count - 1]`
/// whenever there are cards, and outside of `Dragging`/`Settling`/`Bouncing`
/// the offset equals `current_index × stride` exactly.
#[derive(Debug, Clone)]
pub struct Carousel {
    card_count: usize,
    current_index: usize,
    offset: f32,
    geometry: CardGeometry,
    phase: Phase,
}

impl Carousel {
    /// Create a carousel over `card_count` cards, at rest on the first one.
    #[must_use]
    pub fn new(card_count: usize, geometry: CardGeometry) -> Self {
        Self {
            card_count,
            current_index: 0,
            offset: 0.0,
            geometry,
            phase: Phase::Idle,
        }
    }

    /// Replace the card set wholesale (a new search completed).
    ///
    /// Resets to `Idle` at index 0; nothing carries over from the previous
    /// card set.
    pub fn replace_cards(&mut self, card_count: usize, geometry: CardGeometry) {
        *self = Self::new(card_count, geometry);
    }

    /// Apply new card geometry after a viewport resize.
    ///
    /// Snaps instantly to the current index's rest position under the new
    /// geometry — no animation, index unchanged. Any in-flight drag or
    /// animation is dropped.
    pub fn reflow(&mut self, geometry: CardGeometry) {
        self.geometry = geometry;
        self.offset = self.rest_offset(self.current_index);
        self.phase = Phase::Idle;
    }

    /// Number of cards.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.card_count
    }

    /// Current committed index, or `None` when there are no cards.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        (self.card_count > 0).then_some(self.current_index)
    }

    /// Continuous strip offset in layout pixels.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Card geometry currently in effect.
    #[must_use]
    pub fn geometry(&self) -> CardGeometry {
        self.geometry
    }

    /// Current interaction phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a pointer is currently dragging the strip.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    /// Rest offset for a card index.
    #[must_use]
    pub fn rest_offset(&self, index: usize) -> f32 {
        index as f32 * self.geometry.stride()
    }

    /// Rest offset of the last card — the far scroll boundary.
    fn max_offset(&self) -> f32 {
        match self.card_count {
            0 => 0.0,
            n => self.rest_offset(n - 1),
        }
    }

    /// Pointer down at `x`: start a drag from the current offset.
    ///
    /// Grabbing a settling or bouncing strip captures it wherever it is.
    pub fn pointer_down(&mut self, x: f32) {
        if self.card_count == 0 {
            return;
        }
        self.phase = Phase::Dragging {
            start_x: x,
            start_offset: self.offset,
        };
    }

    /// Pointer moved to `x` while dragging.
    ///
    /// The offset is the pre-drag offset minus the pointer delta (dragging
    /// the strip left advances toward later days). Offset excess beyond
    /// either boundary is scaled by 1/3.
    pub fn pointer_move(&mut self, x: f32) {
        let Phase::Dragging {
            start_x,
            start_offset,
        } = self.phase
        else {
            return;
        };
        let raw = start_offset - (x - start_x);
        self.offset = self.resist(raw);
    }

    /// Pointer released (or the drag was cancelled): snap to an index.
    ///
    /// A net drag beyond a third of the stride commits a page turn in the
    /// dragged direction, clamped to the card range; anything shorter snaps
    /// back to the unchanged index.
    pub fn pointer_up(&mut self) {
        if !self.is_dragging() {
            return;
        }
        let net = self.offset - self.rest_offset(self.current_index);
        let threshold = self.geometry.stride() / SNAP_DIVISOR;

        if net > threshold && self.current_index + 1 < self.card_count {
            self.current_index += 1;
        } else if net < -threshold && self.current_index > 0 {
            self.current_index -= 1;
        }

        self.begin_settle(self.rest_offset(self.current_index));
    }

    /// Page forward to the next card, bouncing at the last one.
    pub fn next(&mut self) {
        self.page(1);
    }

    /// Page back to the previous card, bouncing at the first one.
    pub fn previous(&mut self) {
        self.page(-1);
    }

    fn page(&mut self, direction: i64) {
        if self.card_count == 0 || self.phase != Phase::Idle {
            return;
        }
        let target = self.current_index as i64 + direction;
        if (0..self.card_count as i64).contains(&target) {
            self.current_index = target as usize;
            self.begin_settle(self.rest_offset(self.current_index));
        } else {
            // Boundary affordance: hold 20px past rest, then spring back.
            let rest = self.rest_offset(self.current_index);
            self.offset = rest + direction as f32 * BOUNCE_OVERSHOOT;
            self.phase = Phase::Bouncing {
                rest,
                held: Duration::ZERO,
            };
        }
    }

    /// Advance animations by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        match self.phase {
            Phase::Settling {
                from,
                target,
                elapsed,
            } => {
                let elapsed = elapsed + dt;
                if elapsed >= SETTLE_DURATION {
                    self.offset = target;
                    self.phase = Phase::Idle;
                } else {
                    let t = elapsed.as_secs_f32() / SETTLE_DURATION.as_secs_f32();
                    self.offset = from + (target - from) * t;
                    self.phase = Phase::Settling {
                        from,
                        target,
                        elapsed,
                    };
                }
            }
            Phase::Bouncing { rest, held } => {
                let held = held + dt;
                if held >= BOUNCE_HOLD {
                    self.begin_settle(rest);
                } else {
                    self.phase = Phase::Bouncing { rest, held };
                }
            }
            Phase::Idle | Phase::Dragging { .. } => {}
        }
    }

    fn begin_settle(&mut self, target: f32) {
        if (self.offset - target).abs() < f32::EPSILON {
            self.offset = target;
            self.phase = Phase::Idle;
        } else {
            self.phase = Phase::Settling {
                from: self.offset,
                target,
                elapsed: Duration::ZERO,
            };
        }
    }

    /// Rubber-band the raw drag offset: excess beyond either boundary is
    /// scaled by 1/3.
    fn resist(&self, raw: f32) -> f32 {
        let max = self.max_offset();
        if raw < 0.0 {
            raw / RESISTANCE
        } else if raw > max {
            max + (raw - max) / RESISTANCE
        } else {
            raw
        }
    }
}

/// Debouncer for viewport resizes.
///
/// Resize events arrive in bursts while the user drags the terminal edge;
/// geometry recomputation runs once per quiescent window instead of per
/// event. Time advances through [`ResizeDebouncer::tick`], on the same
/// cadence as the carousel animations.
#[derive(Debug, Default)]
pub struct ResizeDebouncer {
    pending: Option<(u16, u16)>,
    quiet: Duration,
}

impl ResizeDebouncer {
    /// Note a resize event, restarting the quiescence window.
    pub fn note(&mut self, width: u16, height: u16) {
        self.pending = Some((width, height));
        self.quiet = Duration::ZERO;
    }

    /// Advance time; returns the coalesced size once the window has been
    /// quiet for [`RESIZE_DEBOUNCE`].
    pub fn tick(&mut self, dt: Duration) -> Option<(u16, u16)> {
        self.pending?;
        self.quiet += dt;
        if self.quiet >= RESIZE_DEBOUNCE {
            self.pending.take()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const GEOMETRY: CardGeometry = CardGeometry {
        card_width: 28.0,
        gap: 2.0,
    };

    /// Tick in small steps until the carousel is idle.
    fn settle(carousel: &mut Carousel) {
        for _ in 0..100 {
            if carousel.phase() == Phase::Idle {
                return;
            }
            carousel.tick(Duration::from_millis(50));
        }
        panic!("carousel did not settle: {:?}", carousel.phase());
    }

    #[test]
    fn test_new_carousel_rests_on_first_card() {
        let carousel = Carousel::new(5, GEOMETRY);
        assert_eq!(carousel.current_index(), Some(0));
        assert_eq!(carousel.offset(), 0.0);
        assert_eq!(carousel.phase(), Phase::Idle);
    }

    #[test]
    fn test_empty_carousel_has_no_index_and_ignores_input() {
        let mut carousel = Carousel::new(0, GEOMETRY);
        assert_eq!(carousel.current_index(), None);

        carousel.pointer_down(10.0);
        carousel.pointer_move(50.0);
        carousel.pointer_up();
        carousel.next();
        carousel.previous();
        settle(&mut carousel);

        assert_eq!(carousel.current_index(), None);
        assert_eq!(carousel.offset(), 0.0);
    }

    // ========================================================================
    // Dragging
    // ========================================================================

    #[test]
    fn test_drag_follows_pointer_within_bounds() {
        let mut carousel = Carousel::new(5, GEOMETRY);
        carousel.pointer_down(100.0);
        carousel.pointer_move(88.0);
        // Strip dragged 12px left -> offset advances 12px.
        assert_eq!(carousel.offset(), 12.0);
        assert!(carousel.is_dragging());
    }

    #[test]
    fn test_short_drag_snaps_back_to_same_index() {
        let mut carousel = Carousel::new(5, GEOMETRY);
        carousel.pointer_down(100.0);
        carousel.pointer_move(95.0); // 5px < stride/3 = 10px
        carousel.pointer_up();
        settle(&mut carousel);

        assert_eq!(carousel.current_index(), Some(0));
        assert_eq!(carousel.offset(), 0.0);
    }

    #[test]
    fn test_long_drag_commits_a_page_turn() {
        let mut carousel = Carousel::new(5, GEOMETRY);
        carousel.pointer_down(100.0);
        carousel.pointer_move(85.0); // 15px > stride/3 = 10px
        carousel.pointer_up();
        settle(&mut carousel);

        assert_eq!(carousel.current_index(), Some(1));
        assert_eq!(carousel.offset(), carousel.rest_offset(1));
    }

    #[test]
    fn test_drag_back_retreats_one_index() {
        let mut carousel = Carousel::new(5, GEOMETRY);
        carousel.next();
        settle(&mut carousel);
        assert_eq!(carousel.current_index(), Some(1));

        carousel.pointer_down(100.0);
        carousel.pointer_move(115.0);
        carousel.pointer_up();
        settle(&mut carousel);
        assert_eq!(carousel.current_index(), Some(0));
    }

    #[test]
    fn test_drag_past_last_card_is_clamped() {
        let mut carousel = Carousel::new(2, GEOMETRY);
        carousel.next();
        settle(&mut carousel);
        assert_eq!(carousel.current_index(), Some(1));

        // A huge drag forward cannot advance past the last card.
        carousel.pointer_down(200.0);
        carousel.pointer_move(0.0);
        carousel.pointer_up();
        settle(&mut carousel);

        assert_eq!(carousel.current_index(), Some(1));
        assert_eq!(carousel.offset(), carousel.rest_offset(1));
    }

    #[test]
    fn test_rubber_band_resistance_before_first_card() {
        let mut carousel = Carousel::new(5, GEOMETRY);
        carousel.pointer_down(100.0);
        carousel.pointer_move(130.0);
        // Raw offset would be -30; the full excess is damped to a third.
        assert_eq!(carousel.offset(), -10.0);
    }

    #[test]
    fn test_rubber_band_resistance_past_last_card() {
        let mut carousel = Carousel::new(2, GEOMETRY);
        carousel.next();
        settle(&mut carousel);

        let max = carousel.rest_offset(1);
        carousel.pointer_down(100.0);
        carousel.pointer_move(70.0);
        // Raw offset would be max + 30; excess damped to a third.
        assert_eq!(carousel.offset(), max + 10.0);
    }

    #[test]
    fn test_pointer_down_captures_a_settling_strip() {
        let mut carousel = Carousel::new(5, GEOMETRY);
        carousel.next();
        carousel.tick(Duration::from_millis(100)); // mid-settle
        let mid = carousel.offset();
        assert!(mid > 0.0 && mid < carousel.rest_offset(1));

        carousel.pointer_down(50.0);
        carousel.pointer_move(50.0);
        assert_eq!(carousel.offset(), mid);
    }

    // ========================================================================
    // Programmatic paging and bounce
    // ========================================================================

    #[test]
    fn test_next_and_previous_page_within_bounds() {
        let mut carousel = Carousel::new(3, GEOMETRY);
        carousel.next();
        settle(&mut carousel);
        carousel.next();
        settle(&mut carousel);
        assert_eq!(carousel.current_index(), Some(2));
        assert_eq!(carousel.offset(), carousel.rest_offset(2));

        carousel.previous();
        settle(&mut carousel);
        assert_eq!(carousel.current_index(), Some(1));
    }

    #[test]
    fn test_previous_at_first_card_bounces() {
        let mut carousel = Carousel::new(5, GEOMETRY);
        carousel.previous();

        assert_eq!(carousel.current_index(), Some(0));
        assert_eq!(carousel.offset(), -20.0);
        assert!(matches!(carousel.phase(), Phase::Bouncing { .. }));

        settle(&mut carousel);
        assert_eq!(carousel.current_index(), Some(0));
        assert_eq!(carousel.offset(), 0.0);
    }

    #[test]
    fn test_next_at_last_card_bounces() {
        let mut carousel = Carousel::new(2, GEOMETRY);
        carousel.next();
        settle(&mut carousel);

        let rest = carousel.rest_offset(1);
        carousel.next();
        assert_eq!(carousel.offset(), rest + 20.0);

        // Holds at the peak for the bounce delay, then springs back.
        carousel.tick(Duration::from_millis(100));
        assert_eq!(carousel.offset(), rest + 20.0);
        settle(&mut carousel);
        assert_eq!(carousel.current_index(), Some(1));
        assert_eq!(carousel.offset(), rest);
    }

    #[test]
    fn test_paging_is_ignored_while_animating() {
        let mut carousel = Carousel::new(5, GEOMETRY);
        carousel.next();
        assert!(matches!(carousel.phase(), Phase::Settling { .. }));
        carousel.next();
        settle(&mut carousel);
        // Only the first command took effect.
        assert_eq!(carousel.current_index(), Some(1));
    }

    // ========================================================================
    // Card-set replacement and reflow
    // ========================================================================

    #[test]
    fn test_replace_cards_resets_to_first_card() {
        let mut carousel = Carousel::new(5, GEOMETRY);
        carousel.next();
        settle(&mut carousel);
        assert_eq!(carousel.current_index(), Some(1));

        let narrow = CardGeometry {
            card_width: 20.0,
            gap: 1.0,
        };
        carousel.replace_cards(3, narrow);
        assert_eq!(carousel.current_index(), Some(0));
        assert_eq!(carousel.offset(), 0.0);
        assert_eq!(carousel.phase(), Phase::Idle);
        assert_eq!(carousel.geometry(), narrow);
    }

    #[test]
    fn test_reflow_keeps_index_and_snaps_instantly() {
        let mut carousel = Carousel::new(5, GEOMETRY);
        carousel.next();
        settle(&mut carousel);

        let wide = CardGeometry {
            card_width: 40.0,
            gap: 4.0,
        };
        carousel.reflow(wide);
        assert_eq!(carousel.current_index(), Some(1));
        assert_eq!(carousel.offset(), 44.0);
        assert_eq!(carousel.phase(), Phase::Idle);
    }

    // ========================================================================
    // Resize debouncer
    // ========================================================================

    #[test]
    fn test_debouncer_fires_after_quiescence() {
        let mut debouncer = ResizeDebouncer::default();
        debouncer.note(120, 40);
        assert_eq!(debouncer.tick(Duration::from_millis(50)), None);
        assert_eq!(debouncer.tick(Duration::from_millis(60)), Some((120, 40)));
        // Consumed; does not fire again.
        assert_eq!(debouncer.tick(Duration::from_millis(200)), None);
    }

    #[test]
    fn test_debouncer_restarts_on_new_event() {
        let mut debouncer = ResizeDebouncer::default();
        debouncer.note(120, 40);
        assert_eq!(debouncer.tick(Duration::from_millis(90)), None);
        debouncer.note(100, 30);
        assert_eq!(debouncer.tick(Duration::from_millis(90)), None);
        assert_eq!(debouncer.tick(Duration::from_millis(20)), Some((100, 30)));
    }

    // ========================================================================
    // Property tests
    // ========================================================================

    #[derive(Debug, Clone)]
    enum Op {
        PointerDown(f32),
        PointerMove(f32),
        PointerUp,
        Next,
        Previous,
        Tick(u64),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (-200.0f32..200.0).prop_map(Op::PointerDown),
            (-200.0f32..200.0).prop_map(Op::PointerMove),
            Just(Op::PointerUp),
            Just(Op::Next),
            Just(Op::Previous),
            (0u64..300).prop_map(Op::Tick),
        ]
    }

    proptest! {
        #[test]
        fn prop_index_stays_in_bounds(
            card_count in 1usize..8,
            ops in prop::collection::vec(op_strategy(), 0..64),
        ) {
            let mut carousel = Carousel::new(card_count, GEOMETRY);
            for op in ops {
                match op {
                    Op::PointerDown(x) => carousel.pointer_down(x),
                    Op::PointerMove(x) => carousel.pointer_move(x),
                    Op::PointerUp => carousel.pointer_up(),
                    Op::Next => carousel.next(),
                    Op::Previous => carousel.previous(),
                    Op::Tick(ms) => carousel.tick(Duration::from_millis(ms)),
                }
                let index = carousel.current_index().unwrap();
                prop_assert!(index < card_count);
            }
        }

        #[test]
        fn prop_idle_offset_is_exact_rest_position(
            card_count in 1usize..8,
            ops in prop::collection::vec(op_strategy(), 0..64),
        ) {
            let mut carousel = Carousel::new(card_count, GEOMETRY);
            for op in ops {
                match op {
                    Op::PointerDown(x) => carousel.pointer_down(x),
                    Op::PointerMove(x) => carousel.pointer_move(x),
                    Op::PointerUp => carousel.pointer_up(),
                    Op::Next => carousel.next(),
                    Op::Previous => carousel.previous(),
                    Op::Tick(ms) => carousel.tick(Duration::from_millis(ms)),
                }
            }
            carousel.pointer_up(); // release any in-flight drag
            settle(&mut carousel);
            let index = carousel.current_index().unwrap();
            prop_assert_eq!(carousel.offset(), carousel.rest_offset(index));
        }
    }
}
