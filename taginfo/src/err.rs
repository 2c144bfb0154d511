use lofty::error::LoftyError;
use std::error;
use std::fmt::{self, Display, Formatter};
use std::io;

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    IsDirectory,
    Unreadable(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Io(err) => write![f, "{}", err],
            Self::IsDirectory => write![f, "is a directory"],
            Self::Unreadable(reason) => write![f, "{}", reason],
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(other: io::Error) -> Self {
        Self::Io(other)
    }
}

impl From<LoftyError> for Error {
    fn from(other: LoftyError) -> Self {
        // Lofty's error kinds are mostly format-specific, the message is all we show.
        Self::Unreadable(other.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
