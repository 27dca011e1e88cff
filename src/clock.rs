//! Time source for the ledger
//!
//! Budgets are stamped with the local calendar month and expenses with a UTC
//! timestamp; both come from a [`Clock`] so tests can pin the date.

use chrono::{DateTime, Local, NaiveDate, Utc};

/// Clock abstracts access to the current time so the ledger stays deterministic in tests.
pub trait Clock {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;

    /// Returns today's date in the local calendar. Budgets are stamped with this.
    fn today(&self) -> NaiveDate {
        self.now().with_timezone(&Local).date_naive()
    }
}

/// Real-time clock backed by the system time source.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a fixed instant and calendar date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
    today: NaiveDate,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>, today: NaiveDate) -> Self {
        Self { now, today }
    }

    /// Noon UTC on the given day, with `today` set to that same day.
    pub fn on(year: i32, month: u32, day: u32) -> Option<Self> {
        let today = NaiveDate::from_ymd_opt(year, month, day)?;
        let now = today.and_hms_opt(12, 0, 0)?.and_utc();
        Some(Self { now, today })
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn today(&self) -> NaiveDate {
        self.today
    }
}
