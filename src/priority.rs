use std::fmt::{self, Display};

use crate::{Error, Facility, Severity};

/// Encoded syslog priority, `facility * 8 + severity` on the wire.
///
/// Raw integers are accepted unvalidated, negative ones included; the
/// formatters render whatever value they are handed and leave range policy to
/// the caller.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Priority(i32);

impl Priority {
    pub const fn new(facility: Facility, severity: Severity) -> Self {
        Priority(((facility as i32) << 3) | severity as i32)
    }

    /// The raw encoded value
    pub const fn value(self) -> i32 {
        self.0
    }

    pub fn facility(self) -> Result<Facility, Error> {
        Facility::try_from(self.0 >> 3)
    }

    pub fn severity(self) -> Result<Severity, Error> {
        Severity::try_from(self.0 & 0x7)
    }
}

impl From<i32> for Priority {
    fn from(value: i32) -> Self {
        Priority(value)
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode() {
        let pri = Priority::new(Facility::USER, Severity::INFO);
        assert_eq!(pri.value(), 14);
        assert_eq!(pri.to_string(), "14");

        let pri = Priority::new(Facility::LOCAL7, Severity::DEBUG);
        assert_eq!(pri.value(), 191);
    }

    #[test]
    fn decode() {
        let pri = Priority::from(165);
        assert_eq!(pri.facility().unwrap(), Facility::LOCAL4);
        assert_eq!(pri.severity().unwrap(), Severity::NOTICE);
    }

    #[test]
    fn raw_values_pass_through() {
        let pri = Priority::from(-3);
        assert_eq!(pri.to_string(), "-3");
        assert!(pri.facility().is_err());

        assert_eq!(Priority::from(200).to_string(), "200");
    }
}
