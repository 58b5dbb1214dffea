//! The four line-rendering conventions.
//!
//! All of them are total: inputs are passed through verbatim with no escaping
//! or range checks, and the result never carries a trailing line terminator.

use chrono::{DateTime, FixedOffset, SecondsFormat};

use crate::clock::{Clock, WallClock};
use crate::process::{truncate_start, CurrentProcess, ProcessIdentity, APP_NAME_MAX};
use crate::Priority;

// VERSION field, RFC 5424 section 6.2.2
const RFC5424_VERSION: u8 = 1;

/// Wire conventions a [`Formatter`] can render.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Format {
    /// `<PRI> TIMESTAMP HOSTNAME TAG[PID]: CONTENT` with an RFC 3339
    /// timestamp. Compliant with neither RFC; an amalgamation intended to be
    /// accepted by as many receivers as possible.
    Default,
    /// `<PRI>TIMESTAMP TAG[PID]: CONTENT`, no hostname. For messages consumed
    /// on the host that produced them.
    Local,
    /// `<PRI>TIMESTAMP HOSTNAME TAG[PID]: CONTENT`, the BSD syslog format of
    /// RFC 3164.
    Rfc3164,
    /// `<PRI>1 TIMESTAMP HOSTNAME APPNAME PID TAG CONTENT` per RFC 5424.
    Rfc5424,
}

/// Renders log lines for one convention.
///
/// The timestamp and the process identity are sampled from the collaborators
/// on every call, so two calls with the same arguments normally produce
/// different lines.
#[derive(Clone, Debug)]
pub struct Formatter<C = WallClock, P = CurrentProcess> {
    format: Format,
    clock: C,
    process: P,
}

impl Formatter {
    /// A formatter backed by the wall clock and the live process.
    pub fn new(format: Format) -> Self {
        Formatter {
            format,
            clock: WallClock,
            process: CurrentProcess,
        }
    }
}

impl<C: Clock, P: ProcessIdentity> Formatter<C, P> {
    /// A formatter with explicit time and process sources, for callers and
    /// tests that need deterministic output.
    pub fn with_env(format: Format, clock: C, process: P) -> Self {
        Formatter {
            format,
            clock,
            process,
        }
    }

    /// Render one line.
    pub fn format(&self, priority: Priority, hostname: &str, tag: &str, content: &str) -> String {
        let now = self.clock.now();
        let pid = self.process.pid();

        match self.format {
            Format::Default => format!(
                "<{}> {} {} {}[{}]: {}",
                priority,
                rfc3339(&now),
                hostname,
                tag,
                pid,
                content
            ),
            Format::Local => format!("<{}>{} {}[{}]: {}", priority, stamp(&now), tag, pid, content),
            Format::Rfc3164 => format!(
                "<{}>{} {} {}[{}]: {}",
                priority,
                stamp(&now),
                hostname,
                tag,
                pid,
                content
            ),
            Format::Rfc5424 => {
                let app_name = self.process.app_name();
                format!(
                    "<{}>{} {} {} {} {} {} {}",
                    priority,
                    RFC5424_VERSION,
                    rfc3339_subsec(&now),
                    hostname,
                    truncate_start(&app_name, APP_NAME_MAX),
                    pid,
                    tag,
                    content
                )
            }
        }
    }
}

// Seconds precision, `Z` for a zero offset
fn rfc3339(datetime: &DateTime<FixedOffset>) -> String {
    datetime.to_rfc3339_opts(SecondsFormat::Secs, true)
}

// Sub-second digits only when the reading carries them
fn rfc3339_subsec(datetime: &DateTime<FixedOffset>) -> String {
    datetime.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

// BSD `Mmm dd HH:MM:SS`, day of month space padded, no year, no zone
fn stamp(datetime: &DateTime<FixedOffset>) -> String {
    datetime.format("%b %e %H:%M:%S").to_string()
}

/// `<PRI> TIMESTAMP HOSTNAME TAG[PID]: CONTENT` against the live environment.
pub fn default_format(priority: Priority, hostname: &str, tag: &str, content: &str) -> String {
    Formatter::new(Format::Default).format(priority, hostname, tag, content)
}

/// `<PRI>TIMESTAMP TAG[PID]: CONTENT` against the live environment. The
/// hostname is ignored.
pub fn local_format(priority: Priority, hostname: &str, tag: &str, content: &str) -> String {
    Formatter::new(Format::Local).format(priority, hostname, tag, content)
}

/// `<PRI>TIMESTAMP HOSTNAME TAG[PID]: CONTENT` against the live environment.
pub fn rfc3164_format(priority: Priority, hostname: &str, tag: &str, content: &str) -> String {
    Formatter::new(Format::Rfc3164).format(priority, hostname, tag, content)
}

/// `<PRI>1 TIMESTAMP HOSTNAME APPNAME PID TAG CONTENT` against the live
/// environment.
pub fn rfc5424_format(priority: Priority, hostname: &str, tag: &str, content: &str) -> String {
    Formatter::new(Format::Rfc5424).format(priority, hostname, tag, content)
}
