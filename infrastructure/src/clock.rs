//! Wall clock adapter with a fixed UTC offset.

use chrono::{DateTime, FixedOffset, Offset, Utc};
use study_application::Clock;

/// Pakistan Standard Time, UTC+05:00, in minutes. Asia/Karachi observes no DST.
pub const PKT_OFFSET_MINUTES: i32 = 5 * 60;

/// [`Clock`] reading the system time and shifting it to a fixed offset.
#[derive(Debug, Clone, Copy)]
pub struct FixedOffsetClock {
    offset: FixedOffset,
}

impl FixedOffsetClock {
    /// Clock at the given offset east of UTC. `None` if out of range.
    pub fn from_minutes(minutes: i32) -> Option<Self> {
        FixedOffset::east_opt(minutes.checked_mul(60)?).map(|offset| Self { offset })
    }

    /// Clock in Pakistan Standard Time.
    pub fn pakistan() -> Self {
        Self {
            offset: FixedOffset::east_opt(PKT_OFFSET_MINUTES * 60)
                .unwrap_or_else(|| Utc.fix()),
        }
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }
}

impl Default for FixedOffsetClock {
    fn default() -> Self {
        Self::pakistan()
    }
}

impl Clock for FixedOffsetClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.offset)
    }
}
