//! Hero slider state machine
//!
//! Owns the authoritative slide cursor and reconciles every navigation
//! source (autoplay ticks, arrow/dot clicks, pointer drags, hover) into
//! index changes. Rendering-free: the view reads `projection()` and the
//! subscription reads `autoplay_*()`, so the whole machine is driven by
//! synthetic events in tests.

use std::time::Duration;

/// Interval between automatic advances
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(4800);

/// Minimum horizontal displacement (px) for a gesture to count as a swipe
pub const SWIPE_THRESHOLD: f32 = 30.0;

/// One pointer/touch gesture, from contact to release.
///
/// Tracks origin and displacement only; the cursor never moves until the
/// gesture ends. A second contact while a session is open is ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    origin_x: f32,
    delta_x: f32,
}

/// Autoplay timer handle.
///
/// The timer itself lives in the iced subscription; this records whether it
/// should exist and, via `epoch`, *which* one should exist. Bumping the epoch
/// changes the subscription identity, which tears down the old interval
/// stream before the new one starts (at most one live timer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Autoplay {
    running: bool,
    epoch: u64,
}

/// Pure render projection of the slider state.
///
/// `track_offset_pct` is the horizontal translation of the slide track as a
/// percentage of its full width. Recomputing it with an unchanged cursor
/// yields an identical value, so rendering is idempotent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub track_offset_pct: f32,
    pub active: usize,
    pub len: usize,
}

impl Projection {
    /// Whether the indicator at `index` should be highlighted
    pub fn is_active(&self, index: usize) -> bool {
        index == self.active
    }
}

/// Carousel controller state
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    len: usize,
    cursor: usize,
    autoplay: Autoplay,
    drag: Option<DragSession>,
    hovered: bool,
}

impl Carousel {
    /// Create a controller over `len` slides, autoplay running.
    ///
    /// Returns `None` for an empty slide set: the slider simply does not
    /// mount and the rest of the page stays usable.
    pub fn new(len: usize) -> Option<Self> {
        if len == 0 {
            tracing::debug!("hero slider has no slides, not mounting");
            return None;
        }
        let mut carousel = Self {
            len,
            cursor: 0,
            autoplay: Autoplay {
                running: false,
                epoch: 0,
            },
            drag: None,
            hovered: false,
        };
        carousel.start();
        Some(carousel)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Jump to `target`, wrapping into `[0, len)`.
    ///
    /// Out-of-range targets are always normalized, never rejected. A
    /// user-initiated jump also resets the autoplay clock so the next
    /// automatic advance happens a full interval later.
    pub fn go_to(&mut self, target: i64, user_initiated: bool) {
        let len = self.len as i64;
        self.cursor = ((target % len + len) % len) as usize;
        if user_initiated {
            self.restart();
        }
    }

    /// Advance one slide (autoplay semantics, clock untouched)
    pub fn next(&mut self) {
        self.go_to(self.cursor as i64 + 1, false);
    }

    /// Go back one slide (autoplay semantics, clock untouched)
    pub fn prev(&mut self) {
        self.go_to(self.cursor as i64 - 1, false);
    }

    /// Start autoplay. No-op if already running.
    pub fn start(&mut self) {
        if !self.autoplay.running {
            self.autoplay.running = true;
            self.autoplay.epoch += 1;
        }
    }

    /// Stop autoplay. No-op if already stopped. Never moves the cursor.
    pub fn stop(&mut self) {
        self.autoplay.running = false;
    }

    /// Reset the autoplay clock: stop, then start with a fresh epoch
    pub fn restart(&mut self) {
        self.stop();
        self.start();
    }

    /// Whether the autoplay subscription should exist
    pub fn autoplay_running(&self) -> bool {
        self.autoplay.running
    }

    /// Identity of the current timer; changes whenever the clock resets
    pub fn autoplay_epoch(&self) -> u64 {
        self.autoplay.epoch
    }

    /// Autoplay timer fired
    pub fn tick(&mut self) {
        self.next();
    }

    /// Pointer or finger made contact at `x`.
    ///
    /// Opens a drag session and suspends autoplay so the timer cannot fight
    /// the gesture. Ignored if a session is already open (first contact
    /// wins).
    pub fn drag_start(&mut self, x: f32) {
        if self.drag.is_some() {
            return;
        }
        self.drag = Some(DragSession {
            origin_x: x,
            delta_x: 0.0,
        });
        self.stop();
    }

    /// Pointer or finger moved to `x`.
    ///
    /// Only the displacement is tracked; the cursor does not follow the
    /// pointer mid-gesture. No-op outside a session.
    pub fn drag_move(&mut self, x: f32) {
        if let Some(drag) = &mut self.drag {
            drag.delta_x = x - drag.origin_x;
        }
    }

    /// Pointer or finger released.
    ///
    /// Past the swipe threshold the gesture navigates (leftward drag means
    /// next) with user semantics, resetting the autoplay clock, and the step
    /// taken is returned so the caller can animate in the right direction
    /// even where wrapping makes both neighbors the same index. Below the
    /// threshold the gesture was a tap or jitter: the track snaps back via
    /// the unchanged projection, autoplay resumes, and `None` is returned.
    /// The session closes either way.
    pub fn drag_end(&mut self) -> Option<i32> {
        let drag = self.drag.take()?;
        if drag.delta_x.abs() > SWIPE_THRESHOLD {
            let step = if drag.delta_x < 0.0 { 1 } else { -1 };
            self.go_to(self.cursor as i64 + i64::from(step), true);
            Some(step)
        } else {
            self.start();
            None
        }
    }

    /// Gesture cancelled by the system; discard it and resume autoplay
    pub fn drag_cancel(&mut self) {
        if self.drag.take().is_some() {
            self.start();
        }
    }

    /// Whether a drag session is open
    pub fn dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Current gesture displacement, if any
    #[allow(dead_code)]
    pub fn drag_delta(&self) -> Option<f32> {
        self.drag.map(|d| d.delta_x)
    }

    /// Pointer or keyboard focus entered the slider region
    pub fn hover_enter(&mut self) {
        self.hovered = true;
        self.stop();
    }

    /// Pointer or keyboard focus left the slider region
    pub fn hover_leave(&mut self) {
        self.hovered = false;
        self.start();
    }

    #[allow(dead_code)]
    pub fn hovered(&self) -> bool {
        self.hovered
    }

    /// Project the current state for rendering.
    ///
    /// Pure and callable at any time (layout changes included); the output
    /// depends on the cursor alone.
    pub fn projection(&self) -> Projection {
        Projection {
            track_offset_pct: -(self.cursor as f32) * 100.0 / self.len as f32,
            active: self.cursor,
            len: self.len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(len: usize) -> Carousel {
        Carousel::new(len).expect("non-empty slide set must mount")
    }

    mod property_cursor_wrap {
        use super::*;

        #[test]
        fn go_to_normalizes_any_integer() {
            let mut c = carousel(3);
            for target in [-7i64, -3, -1, 0, 1, 2, 3, 5, 300] {
                c.go_to(target, false);
                let expected = ((target % 3 + 3) % 3) as usize;
                assert_eq!(
                    c.cursor(),
                    expected,
                    "go_to({}) must wrap into [0, 3)",
                    target
                );
            }
        }

        #[test]
        fn next_wraps_forward() {
            let mut c = carousel(3);
            assert_eq!(c.cursor(), 0);
            c.next();
            assert_eq!(c.cursor(), 1);
            c.next();
            assert_eq!(c.cursor(), 2);
            c.next();
            assert_eq!(c.cursor(), 0, "next past the last slide wraps to 0");
        }

        #[test]
        fn prev_wraps_backward() {
            let mut c = carousel(3);
            c.prev();
            assert_eq!(c.cursor(), 2, "prev from 0 wraps to the last slide");
        }

        #[test]
        fn single_slide_always_stays_put() {
            let mut c = carousel(1);
            c.next();
            c.prev();
            c.go_to(-42, true);
            assert_eq!(c.cursor(), 0);
        }

        #[test]
        fn empty_slide_set_does_not_mount() {
            assert!(
                Carousel::new(0).is_none(),
                "an empty slide set must degrade silently, not panic"
            );
        }
    }

    mod property_autoplay_timer {
        use super::*;

        #[test]
        fn mounts_with_autoplay_running() {
            let c = carousel(3);
            assert!(c.autoplay_running());
        }

        #[test]
        fn start_is_idempotent() {
            let mut c = carousel(3);
            let epoch = c.autoplay_epoch();
            c.start();
            assert_eq!(
                c.autoplay_epoch(),
                epoch,
                "a second start must not schedule a second timer"
            );
            assert!(c.autoplay_running());
        }

        #[test]
        fn stop_is_idempotent_and_keeps_cursor() {
            let mut c = carousel(3);
            c.next();
            c.stop();
            c.stop();
            assert!(!c.autoplay_running());
            assert_eq!(c.cursor(), 1, "stop never mutates position");
            assert_eq!(c.projection().track_offset_pct, -100.0 / 3.0);
        }

        #[test]
        fn restart_resets_the_clock() {
            let mut c = carousel(3);
            let epoch = c.autoplay_epoch();
            c.restart();
            assert!(c.autoplay_running());
            assert!(
                c.autoplay_epoch() > epoch,
                "restart must replace the timer so its phase resets"
            );
        }

        #[test]
        fn user_navigation_resets_the_clock() {
            let mut c = carousel(3);
            let epoch = c.autoplay_epoch();
            c.go_to(2, true);
            assert!(c.autoplay_epoch() > epoch);

            // Autoplay-driven navigation must not touch the clock
            let epoch = c.autoplay_epoch();
            c.tick();
            assert_eq!(c.autoplay_epoch(), epoch);
        }

        #[test]
        fn tick_advances_one_slide() {
            let mut c = carousel(3);
            c.tick();
            assert_eq!(c.cursor(), 1);
        }
    }

    mod property_drag_reconciliation {
        use super::*;

        #[test]
        fn drag_start_suspends_autoplay() {
            let mut c = carousel(3);
            c.drag_start(100.0);
            assert!(!c.autoplay_running(), "autoplay must not fight a drag");
            assert!(c.dragging());
        }

        #[test]
        fn drag_move_tracks_delta_without_moving_cursor() {
            let mut c = carousel(3);
            c.drag_start(100.0);
            c.drag_move(60.0);
            assert_eq!(c.drag_delta(), Some(-40.0));
            assert_eq!(c.cursor(), 0, "the cursor never follows a live drag");
        }

        #[test]
        fn swipe_left_past_threshold_navigates_next_and_resets_clock() {
            let mut c = carousel(3);
            let epoch = c.autoplay_epoch();
            c.drag_start(100.0);
            c.drag_move(60.0); // delta -40, threshold 30
            c.drag_end();
            assert_eq!(c.cursor(), 1, "a -40 px swipe is exactly one next()");
            assert!(c.autoplay_running());
            assert!(
                c.autoplay_epoch() > epoch,
                "the next automatic advance must be a full interval away"
            );
            assert!(!c.dragging());
        }

        #[test]
        fn swipe_right_past_threshold_navigates_prev() {
            let mut c = carousel(3);
            c.drag_start(100.0);
            c.drag_move(150.0);
            c.drag_end();
            assert_eq!(c.cursor(), 2);
        }

        #[test]
        fn below_threshold_release_snaps_back_and_resumes() {
            let mut c = carousel(3);
            c.drag_start(100.0);
            c.drag_move(110.0); // delta +10, below threshold
            c.drag_end();
            assert_eq!(c.cursor(), 0, "a tap or jitter must not navigate");
            assert!(c.autoplay_running(), "autoplay resumes after a non-swipe");
        }

        #[test]
        fn threshold_is_exclusive() {
            let mut c = carousel(3);
            c.drag_start(0.0);
            c.drag_move(-SWIPE_THRESHOLD);
            c.drag_end();
            assert_eq!(c.cursor(), 0, "exactly the threshold is not a swipe");
        }

        #[test]
        fn release_reports_the_swipe_direction() {
            // With two slides both neighbors wrap to the same index, so the
            // cursor alone cannot tell a prev-swipe from a next-swipe
            let mut c = carousel(2);
            c.drag_start(100.0);
            c.drag_move(150.0);
            assert_eq!(c.drag_end(), Some(-1), "rightward swipe steps backward");
            assert_eq!(c.cursor(), 1);

            c.drag_start(100.0);
            c.drag_move(60.0);
            assert_eq!(c.drag_end(), Some(1), "leftward swipe steps forward");
            assert_eq!(c.cursor(), 0);

            c.drag_start(100.0);
            c.drag_move(110.0);
            assert_eq!(c.drag_end(), None, "a non-swipe release navigates nowhere");
        }

        #[test]
        fn release_without_session_is_a_noop() {
            let mut c = carousel(3);
            c.stop();
            c.drag_end();
            assert_eq!(c.cursor(), 0);
            assert!(!c.autoplay_running(), "a stray release must change nothing");
        }

        #[test]
        fn second_contact_is_ignored() {
            let mut c = carousel(3);
            c.drag_start(100.0);
            c.drag_move(60.0);
            c.drag_start(500.0); // second finger: first contact wins
            c.drag_move(460.0);
            c.drag_end();
            assert_eq!(c.cursor(), 1, "delta stays relative to the first origin");
        }

        #[test]
        fn cancel_discards_the_gesture() {
            let mut c = carousel(3);
            c.drag_start(100.0);
            c.drag_move(0.0);
            c.drag_cancel();
            assert_eq!(c.cursor(), 0);
            assert!(c.autoplay_running());
            assert!(!c.dragging());
        }
    }

    mod property_hover_suspension {
        use super::*;

        #[test]
        fn hover_enter_stops_and_leave_restarts() {
            let mut c = carousel(3);
            c.hover_enter();
            assert!(!c.autoplay_running(), "no advance while hovered");
            assert_eq!(c.cursor(), 0);
            c.hover_leave();
            assert!(c.autoplay_running());
        }

        #[test]
        fn hover_leave_after_manual_stop_resumes() {
            // start() inside hover_leave is the same idempotent start
            let mut c = carousel(3);
            c.hover_enter();
            c.hover_enter();
            c.hover_leave();
            assert!(c.autoplay_running());
        }
    }

    mod property_render_projection {
        use super::*;

        #[test]
        fn offset_is_proportional_to_cursor() {
            let mut c = carousel(4);
            assert_eq!(c.projection().track_offset_pct, 0.0);
            c.next();
            assert_eq!(c.projection().track_offset_pct, -25.0);
            c.go_to(3, false);
            assert_eq!(c.projection().track_offset_pct, -75.0);
        }

        #[test]
        fn projection_is_idempotent() {
            let mut c = carousel(3);
            c.go_to(2, true);
            let first = c.projection();
            let second = c.projection();
            assert_eq!(
                first, second,
                "rendering twice with no state change must be identical"
            );
        }

        #[test]
        fn exactly_one_indicator_active() {
            let mut c = carousel(5);
            c.go_to(3, false);
            let p = c.projection();
            let active = (0..p.len).filter(|&i| p.is_active(i)).count();
            assert_eq!(active, 1);
            assert!(p.is_active(3));
        }
    }
}
