use chrono::{DateTime, Utc};

/// `Clock` supplies the instant a [`DataProcessor`](crate::DataProcessor)
/// records as its creation time. It is consulted once at construction.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// `SystemClock` reads the wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// `FixedClock` always answers with the same instant, letting tests pin
/// creation times without touching the wall clock.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Returns `None` when `seconds` is outside chrono's representable range.
    #[must_use]
    pub fn from_timestamp(seconds: i64) -> Option<Self> {
        DateTime::from_timestamp(seconds, 0).map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
