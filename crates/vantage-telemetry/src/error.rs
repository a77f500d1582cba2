// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error types for the diagnostics overlay.
//!
//! Sampling itself cannot fail; errors only come from loading or validating
//! configuration.

use std::fmt::{self, Display};

/// A specialized `Result` type for overlay operations.
pub type OverlayResult<T> = Result<T, OverlayError>;

/// An error that can occur while configuring the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayError {
    /// Reading or writing a configuration file failed.
    Io(String),
    /// A configuration document could not be parsed or serialized.
    Parse(String),
    /// A configuration value is out of its accepted range.
    InvalidConfig(String),
}

impl Display for OverlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverlayError::Io(msg) => write!(f, "I/O error: {msg}"),
            OverlayError::Parse(msg) => write!(f, "Parse error: {msg}"),
            OverlayError::InvalidConfig(msg) => write!(f, "Invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for OverlayError {}

impl From<std::io::Error> for OverlayError {
    fn from(err: std::io::Error) -> Self {
        OverlayError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for OverlayError {
    fn from(err: serde_json::Error) -> Self {
        OverlayError::Parse(err.to_string())
    }
}
