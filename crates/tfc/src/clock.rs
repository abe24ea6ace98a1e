//! Time source for relative timestamps.

use chrono::{DateTime, Utc};
use tfc_render::text::relative_time_ago;

/// Where "now" comes from when rendering `*_AT` columns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Clock {
    /// The system clock.
    #[default]
    System,
    /// A fixed instant, for tests.
    Frozen(DateTime<Utc>),
}

impl Clock {
    pub fn system() -> Self {
        Clock::System
    }

    pub fn frozen(now: DateTime<Utc>) -> Self {
        Clock::Frozen(now)
    }

    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Frozen(now) => *now,
        }
    }

    /// `then` relative to [`now`](Clock::now), e.g. `"about 2 days ago"`.
    pub fn since(&self, then: DateTime<Utc>) -> String {
        relative_time_ago(self.now(), then)
    }
}
