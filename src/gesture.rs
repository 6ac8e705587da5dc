//! Double-tap seek gesture.
//!
//! Two presses on a video surface within [`DOUBLE_TAP_WINDOW`] seek by
//! [`SEEK_STEP`]: backwards when the press lands on the left half of the
//! surface, forwards otherwise. Every press refreshes the stored timestamp,
//! so a third quick press seeks again.

use std::time::{Duration, Instant};

use crate::config::{DOUBLE_TAP_WINDOW, SEEK_STEP};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekDirection {
    Backward,
    Forward,
}

impl SeekDirection {
    /// Direction for a press at `x` on a surface `width` wide.
    pub fn from_position(x: f32, width: f32) -> Self {
        if x < width / 2.0 {
            SeekDirection::Backward
        } else {
            SeekDirection::Forward
        }
    }
}

/// Per-cell memory of the previous press.
#[derive(Debug, Default)]
pub struct DoubleTap {
    last_tap: Option<Instant>,
}

impl DoubleTap {
    #[cfg(test)]
    pub fn last_tap(&self) -> Option<Instant> {
        self.last_tap
    }

    /// Record a press at `now`; returns whether it completes a double tap.
    pub fn register(&mut self, now: Instant) -> bool {
        let is_double = self
            .last_tap
            .and_then(|last| now.checked_duration_since(last))
            .is_some_and(|since| since > Duration::ZERO && since < DOUBLE_TAP_WINDOW);
        self.last_tap = Some(now);
        is_double
    }

    /// Record a press and compute the seek target if it was a double tap.
    ///
    /// A `duration` of zero means the length is unknown and forward seeks are
    /// not clamped.
    pub fn tap(
        &mut self,
        now: Instant,
        x: f32,
        width: f32,
        position: Duration,
        duration: Duration,
    ) -> Option<Duration> {
        if !self.register(now) {
            return None;
        }
        Some(seek_target(
            SeekDirection::from_position(x, width),
            position,
            duration,
        ))
    }
}

/// Position after stepping from `position` in `direction`, kept within the media.
pub fn seek_target(direction: SeekDirection, position: Duration, duration: Duration) -> Duration {
    match direction {
        SeekDirection::Backward => position.saturating_sub(SEEK_STEP),
        SeekDirection::Forward => {
            let target = position.saturating_add(SEEK_STEP);
            if duration.is_zero() {
                target
            } else {
                target.min(duration)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f32 = 320.0;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn single_tap_only_records_time() {
        let mut gesture = DoubleTap::default();
        let t = Instant::now();
        assert_eq!(gesture.tap(t, 10.0, WIDTH, ms(20_000), ms(60_000)), None);
        assert_eq!(gesture.last_tap(), Some(t));
    }

    #[test]
    fn quick_left_double_tap_seeks_back() {
        let mut gesture = DoubleTap::default();
        let t = Instant::now();
        gesture.tap(t, 10.0, WIDTH, ms(20_000), ms(60_000));
        let target = gesture.tap(t + ms(250), 10.0, WIDTH, ms(20_000), ms(60_000));
        assert_eq!(target, Some(ms(15_000)));
    }

    #[test]
    fn back_seek_stops_at_zero() {
        let mut gesture = DoubleTap::default();
        let t = Instant::now();
        gesture.tap(t, 0.0, WIDTH, ms(3_000), ms(60_000));
        let target = gesture.tap(t + ms(250), 0.0, WIDTH, ms(3_000), ms(60_000));
        assert_eq!(target, Some(Duration::ZERO));
    }

    #[test]
    fn right_double_tap_seeks_forward_clamped() {
        let mut gesture = DoubleTap::default();
        let t = Instant::now();
        gesture.tap(t, 300.0, WIDTH, ms(57_000), ms(60_000));
        let target = gesture.tap(t + ms(100), 300.0, WIDTH, ms(57_000), ms(60_000));
        assert_eq!(target, Some(ms(60_000)));
    }

    #[test]
    fn midpoint_counts_as_right_half() {
        assert_eq!(
            SeekDirection::from_position(WIDTH / 2.0, WIDTH),
            SeekDirection::Forward
        );
        assert_eq!(
            SeekDirection::from_position(WIDTH / 2.0 - 0.5, WIDTH),
            SeekDirection::Backward
        );
    }

    #[test]
    fn slow_second_tap_does_not_seek_but_updates_time() {
        let mut gesture = DoubleTap::default();
        let t = Instant::now();
        gesture.tap(t, 10.0, WIDTH, ms(20_000), ms(60_000));
        let later = t + ms(400);
        assert_eq!(gesture.tap(later, 10.0, WIDTH, ms(20_000), ms(60_000)), None);
        assert_eq!(gesture.last_tap(), Some(later));
    }

    #[test]
    fn window_boundary_is_exclusive() {
        let mut gesture = DoubleTap::default();
        let t = Instant::now();
        assert!(!gesture.register(t));
        assert!(!gesture.register(t + DOUBLE_TAP_WINDOW));
    }

    #[test]
    fn simultaneous_taps_are_not_double() {
        let mut gesture = DoubleTap::default();
        let t = Instant::now();
        gesture.register(t);
        assert!(!gesture.register(t));
    }

    #[test]
    fn third_quick_tap_seeks_again() {
        let mut gesture = DoubleTap::default();
        let t = Instant::now();
        assert!(!gesture.register(t));
        assert!(gesture.register(t + ms(200)));
        assert!(gesture.register(t + ms(400)));
    }

    #[test]
    fn unknown_duration_does_not_clamp_forward() {
        assert_eq!(
            seek_target(SeekDirection::Forward, ms(2_000), Duration::ZERO),
            ms(7_000)
        );
    }
}
