// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Row animator: one scroll offset per logical row, advanced by exactly one
//! column each time more than `step_interval` ms of *running* time passed.
//!
//! While a row is paused or the host is hidden the offset is frozen but
//! `last_tick` keeps following the clock, so resuming never replays the
//! pent-up time as a jump.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowAnimState {
    /// scroll phase in columns, always < total width once advanced
    pub offset: u32,
    /// timestamp (ms) of the last accepted advance
    pub last_tick: u64,
}

impl RowAnimState {
    pub fn new(now: u64) -> Self {
        Self {
            offset: 0,
            last_tick: now,
        }
    }

    /// Re-wraps the offset after the row content changed width.
    pub fn rewrap(&mut self, total_width: u32) {
        self.offset = if total_width == 0 {
            0
        } else {
            self.offset % total_width
        };
    }
}

/// Advances `state` by at most one column.
/// Returns true when the offset moved.
pub fn advance(
    state: &mut RowAnimState,
    now: u64,
    step_interval: u64,
    total_width: u32,
    running: bool,
) -> bool {
    if !running {
        state.last_tick = now;
        return false;
    }
    if now.saturating_sub(state.last_tick) > step_interval {
        state.offset = if total_width == 0 {
            0
        } else {
            (state.offset + 1) % total_width
        };
        state.last_tick = now;
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn steps_once_after_interval() {
        let mut s = RowAnimState::new(0);
        assert!(!advance(&mut s, 50, 50, 23, true));
        assert_eq!(s.offset, 0);
        assert!(advance(&mut s, 51, 50, 23, true));
        assert_eq!(s.offset, 1);
        assert_eq!(s.last_tick, 51);
    }

    #[test]
    fn catch_up_is_bounded() {
        let mut s = RowAnimState::new(0);
        // ten intervals elapsed, still only one column
        assert!(advance(&mut s, 1000, 50, 23, true));
        assert_eq!(s.offset, 1);
    }

    #[test]
    fn wraps_at_total_width() {
        let mut s = RowAnimState {
            offset: 22,
            last_tick: 0,
        };
        advance(&mut s, 100, 10, 23, true);
        assert_eq!(s.offset, 0);
    }

    #[test]
    fn zero_width_stays_put() {
        let mut s = RowAnimState::new(0);
        advance(&mut s, 100, 10, 0, true);
        assert_eq!(s.offset, 0);
        s.offset = 7;
        s.rewrap(0);
        assert_eq!(s.offset, 0);
    }

    #[test]
    fn resume_does_not_jump() {
        let mut s = RowAnimState::new(0);
        // hidden for a long time
        advance(&mut s, 10_000, 50, 23, false);
        assert_eq!(s.last_tick, 10_000);
        // first visible frame shortly after: no step yet
        assert!(!advance(&mut s, 10_016, 50, 23, true));
        assert_eq!(s.offset, 0);
    }

    #[test]
    fn rewrap_keeps_phase_inside_new_width() {
        let mut s = RowAnimState {
            offset: 40,
            last_tick: 0,
        };
        s.rewrap(23);
        assert_eq!(s.offset, 17);
    }

    proptest! {
        #[test]
        fn paused_never_moves(start in 0u32..50, ticks in proptest::collection::vec(0u64..100_000, 1..40)) {
            let mut s = RowAnimState { offset: start, last_tick: 0 };
            for t in ticks {
                advance(&mut s, t, 1, 50, false);
                prop_assert_eq!(s.offset, start);
                prop_assert_eq!(s.last_tick, t);
            }
        }
    }
}
