//! Message formatting for syslog clients: render a complete log line from a
//! priority, a hostname, a tag and message content, per [RFC 5424] or the
//! older [RFC 3164] BSD format, plus two looser conventions that predate
//! strict compliance.
//!
//! Rendering is pure string building. Transport, retries and delivery belong
//! to whatever writer the line is handed to, and no trailing line terminator
//! is appended. The timestamp and the process identity (pid, plus the
//! executable name used for the RFC 5424 APPNAME field) are sampled when a
//! line is rendered, so two calls with the same arguments normally differ in
//! the timestamp. Substitute the [`Clock`] and [`ProcessIdentity`]
//! collaborators on a [`Formatter`] to pin them down.
//!
//! # Example
//!
//! ```
//! use syslog_format::{rfc3164_format, Facility, Priority, Severity};
//!
//! let pri = Priority::new(Facility::USER, Severity::INFO);
//! let line = rfc3164_format(pri, "myhost", "myapp", "hello");
//! assert!(line.starts_with("<14>"));
//! ```
//!
//! Inputs are trusted: the priority is not range checked and tag and content
//! are not escaped. An embedded newline reaches the wire verbatim.
//!
//! [RFC 5424]: https://tools.ietf.org/html/rfc5424
//! [RFC 3164]: https://tools.ietf.org/html/rfc3164

mod clock;
mod error;
mod facility;
mod formatter;
mod priority;
mod process;
mod severity;

pub use clock::{Clock, WallClock};
pub use error::Error;
pub use facility::Facility;
pub use formatter::{
    default_format, local_format, rfc3164_format, rfc5424_format, Format, Formatter,
};
pub use priority::Priority;
pub use process::{CurrentProcess, ProcessIdentity, APP_NAME_MAX};
pub use severity::Severity;
