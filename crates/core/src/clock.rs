//! Time source abstraction
//!
//! The greeting depends on the local hour, and every message carries a
//! timestamp. Both go through [`Clock`] so the engine stays deterministic
//! under test.

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Timelike, Utc};

/// Source of "now"
pub trait Clock: Send + Sync {
    /// Current instant, used for message timestamps
    fn now_utc(&self) -> DateTime<Utc>;

    /// Hour of day (0-23) in the user's local time, used for greetings
    fn local_hour(&self) -> u32;
}

/// Wall clock of the host machine
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn local_hour(&self) -> u32 {
        chrono::Local::now().hour()
    }
}

/// Clock frozen at a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<FixedOffset>,
}

impl FixedClock {
    pub fn new(instant: DateTime<FixedOffset>) -> Self {
        Self { instant }
    }

    /// Clock frozen at `hour`:00 UTC on a fixed date. Hours above 23 clamp to 23.
    pub fn at_hour(hour: u32) -> Self {
        let naive = NaiveDate::from_ymd_opt(2024, 1, 15)
            .and_then(|date| date.and_hms_opt(hour.min(23), 0, 0))
            .unwrap_or_default();
        Self::new(Utc.from_utc_datetime(&naive).fixed_offset())
    }
}

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.instant.with_timezone(&Utc)
    }

    fn local_hour(&self) -> u32 {
        self.instant.hour()
    }
}
