use std::path::Path;

/// APPNAME is limited to 48 characters, RFC 5424 section 6.2.5
pub const APP_NAME_MAX: usize = 48;

/// Identity of the emitting process, sampled on every call so a line always
/// reflects the current process.
pub trait ProcessIdentity {
    fn pid(&self) -> u32;

    /// Base name of the running executable, used for the RFC 5424 APPNAME
    /// field. Returned untruncated; the formatter applies [`APP_NAME_MAX`].
    fn app_name(&self) -> String;
}

/// The live process: `std::process::id()` and argv[0]'s base name.
#[derive(Copy, Clone, Debug, Default)]
pub struct CurrentProcess;

impl ProcessIdentity for CurrentProcess {
    fn pid(&self) -> u32 {
        std::process::id()
    }

    fn app_name(&self) -> String {
        std::env::args_os()
            .next()
            .and_then(|arg| {
                Path::new(&arg)
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
            })
            .unwrap_or_default()
    }
}

/// If the string is longer than `max` characters, keep the LAST `max`.
///
/// Counts characters, not bytes, so a multibyte name never gets split in the
/// middle of a code point.
pub(crate) fn truncate_start(s: &str, max: usize) -> &str {
    if max == 0 {
        return "";
    }

    // nth(max - 1) lands on the max-th character from the end; index 0 means
    // the string is at most max characters long already
    match s.char_indices().rev().nth(max - 1) {
        Some((idx, _)) => &s[idx..],
        None => s,
    }
}
