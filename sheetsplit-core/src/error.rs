//
// Copyright (c) Denis Kotov. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Error types shared by all splitter components

use sheet_grid::UnsupportedScale;
use std::error;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum Error {
    /// Scale denominator outside {1000000, 100000, 50000, 25000}
    UnsupportedScale(u32),
    /// Output root missing or not a directory
    InvalidOutputPath(String),
    /// Source dataset could not be opened
    DatasetOpen { path: String, message: String },
    /// Layer geometry type outside the supported set
    UnsupportedGeometryType(String),
    /// Configuration file unreadable or invalid
    Config(String),
    /// Datasource read or write failure
    Datasource(String),
    Io(io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedScale(denom) => write!(
                f,
                "unsupported scale denominator {} (supported: 1000000, 100000, 50000, 25000)",
                denom
            ),
            Error::InvalidOutputPath(path) => {
                write!(f, "output path '{}' is not an existing directory", path)
            }
            Error::DatasetOpen { path, message } => {
                write!(f, "cannot open dataset '{}': {}", path, message)
            }
            Error::UnsupportedGeometryType(name) => {
                write!(f, "unsupported geometry type {}", name)
            }
            Error::Config(message) => write!(f, "configuration error: {}", message),
            Error::Datasource(message) => write!(f, "datasource error: {}", message),
            Error::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<UnsupportedScale> for Error {
    fn from(err: UnsupportedScale) -> Error {
        Error::UnsupportedScale(err.0)
    }
}
