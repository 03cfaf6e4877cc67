//! Clock abstraction for time queries.
//!
//! The `date` command reads the clock through this trait so tests can
//! inject a fixed timestamp.

/// Source of the current wall-clock time, pre-formatted for display.
pub trait Clock {
    /// Current local date and time as a display string.
    fn now(&self) -> String;
}

/// System clock backed by the local timezone.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> String {
        chrono::Local::now()
            .format("%a %b %e %Y %H:%M:%S %z")
            .to_string()
    }
}

/// Clock that always reports the same instant. For tests and demos.
pub struct FixedClock(pub String);

impl Clock for FixedClock {
    fn now(&self) -> String {
        self.0.clone()
    }
}
