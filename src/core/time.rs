//! Millisecond time representation for UI-driven animation.
//! The animation clock is advanced by a fixed tick, never by measured wall time.

use std::time::Duration;

/// Time in milliseconds
pub type Millis = u32;

/// Nominal interval between two animation ticks (~60 fps)
pub const TICK_INTERVAL_MS: Millis = 16;

/// Convert milliseconds to a `Duration`
#[inline]
pub fn to_duration(millis: Millis) -> Duration {
    Duration::from_millis(u64::from(millis))
}

/// Number of whole ticks needed to cover `millis`
#[inline]
pub fn ticks_for(millis: Millis, tick: Millis) -> u32 {
    if tick == 0 {
        return 0;
    }
    millis.div_ceil(tick)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_conversion() {
        assert_eq!(to_duration(TICK_INTERVAL_MS), Duration::from_millis(16));
        assert_eq!(to_duration(2000), Duration::from_secs(2));
    }

    #[test]
    fn test_ticks_for() {
        // 125 ticks of 16ms cover exactly two seconds
        assert_eq!(ticks_for(2000, 16), 125);
        assert_eq!(ticks_for(2001, 16), 126);
        assert_eq!(ticks_for(0, 16), 0);
        assert_eq!(ticks_for(100, 0), 0);
    }
}
