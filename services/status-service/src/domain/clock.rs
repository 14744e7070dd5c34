use chrono::Local;
use chrono::Utc;
use std::sync::atomic::AtomicI64;
use std::sync::atomic::Ordering;

/// Wall-clock source for the status endpoints.
///
/// Millisecond readings follow the system clock but never go below the
/// highest value already handed out, so a clock stepped backwards holds the
/// last reading until real time catches up.
#[derive(Debug, Default)]
pub struct StatusClock {
    last_millis: AtomicI64,
}

impl StatusClock {
    const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub const fn new() -> Self {
        Self {
            last_millis: AtomicI64::new(0),
        }
    }

    pub fn now_millis(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let previous = self.last_millis.fetch_max(now, Ordering::Relaxed);

        previous.max(now)
    }

    /// Current local time as `yyyy-MM-dd HH:mm:ss`.
    pub fn now_display(&self) -> String {
        Local::now().format(Self::DISPLAY_FORMAT).to_string()
    }
}
