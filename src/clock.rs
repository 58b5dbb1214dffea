use chrono::{DateTime, FixedOffset, Local};

/// Source of the timestamp a formatter samples on every call.
///
/// Production code uses [`WallClock`]; tests substitute a frozen reading to
/// get deterministic lines.
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Reads the local wall clock.
#[derive(Copy, Clone, Debug, Default)]
pub struct WallClock;

impl Clock for WallClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wall_clock_advances() {
        let first = WallClock.now();
        let second = WallClock.now();
        assert!(second >= first);
    }
}
