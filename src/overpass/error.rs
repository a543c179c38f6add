use std::convert::From;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
    JSONParseError(serde_json::Error),
    NotOverpassOutput,
    InvalidJSONType(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::IOError(ref e) => write!(f, "{}", e),
            Error::JSONParseError(ref e) => write!(f, "invalid JSON: {}", e),
            Error::NotOverpassOutput => {
                write!(f, "'elements' key not found, input does not look like Overpass output")
            }
            Error::InvalidJSONType(expected) => write!(f, "invalid JSON type, expected {}", expected),
        }
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::IOError(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::JSONParseError(e)
    }
}
