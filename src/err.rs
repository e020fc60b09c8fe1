use std::convert::From;
use std::error;
use std::fmt;
use std::io;

use serde_json;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum SysErr {
    UnknownSink,
    InvalidConfig,
}

impl error::Error for SysErr {}

impl fmt::Display for SysErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            SysErr::UnknownSink => write!(f, "unknown sink"),
            SysErr::InvalidConfig => write!(f, "invalid configuration"),
        }
    }
}

/// Rejections raised while turning a timeline event into a wire message.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum EncodeErr {
    InvalidChannel(u8),
    InvalidData(u8),
    TempoOutOfRange(u32),
}

impl error::Error for EncodeErr {}

impl fmt::Display for EncodeErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            EncodeErr::InvalidChannel(chan) => {
                write!(f, "channel {} outside of 0-15", chan)
            }
            EncodeErr::InvalidData(val) => {
                write!(f, "data byte {} outside of 0-127", val)
            }
            EncodeErr::TempoOutOfRange(mpq) => {
                write!(f, "tempo of {} microseconds does not fit 3 bytes", mpq)
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Error {
    Encode(EncodeErr),
    Sys(SysErr),
    Io(String),
    Json(String),
}

impl From<EncodeErr> for Error {
    fn from(err: EncodeErr) -> Error {
        Error::Encode(err)
    }
}

impl From<SysErr> for Error {
    fn from(err: SysErr) -> Error {
        Error::Sys(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Io(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::Json(err.to_string())
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::Encode(ref err) => Some(err),
            Error::Sys(ref err) => Some(err),
            Error::Io(_) | Error::Json(_) => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Encode(ref err) => write!(f, "Encoding error {}", err),
            Error::Sys(ref err) => write!(f, "System error {}", err),
            Error::Io(ref msg) => write!(f, "IO error {}", msg),
            Error::Json(ref msg) => write!(f, "JSON error {}", msg),
        }
    }
}
