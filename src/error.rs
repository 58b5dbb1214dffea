use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    BadFacility,
    BadSeverity,
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::BadFacility => f.write_str("facility out of range"),
            Error::BadSeverity => f.write_str("severity out of range"),
        }
    }
}
