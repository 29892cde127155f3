//! Error types for the backend
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and polling operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during `init`/`update`/`changed`/`get_report`
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level pin read errors
//!
//! A missing controller is not an error: every line floats high through its
//! pull-up and the pad reads as "all released".
//!
//! ## Example
//!
//! ```
//! use snes_pad::{Builder, BuilderError};
//!
//! // Missing mode
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingMode)));
//! ```

use crate::interface::PadInterface;

/// Number of lines on the extra bus (four SNES buttons plus Home)
pub const EXTRA_LINES: u8 = 5;

/// Errors that can occur while polling the controller
///
/// Generic over the interface type to preserve the specific error type.
pub enum Error<I: PadInterface> {
    /// Interface error (GPIO)
    ///
    /// Wraps the underlying hardware error from the [`PadInterface`] implementation.
    Interface(I::Error),
    /// `update`, `changed` or `get_report` was called before `init`
    NotInitialized,
}

impl<I: PadInterface> core::fmt::Debug for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Interface(e) => f.debug_tuple("Interface").field(e).finish(),
            Error::NotInitialized => write!(f, "NotInitialized"),
        }
    }
}

impl<I: PadInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Interface(e) => write!(f, "Interface error: {e:?}"),
            Error::NotInitialized => write!(f, "Gamepad used before init"),
        }
    }
}

impl<I: PadInterface> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderError {
    /// Mode was not specified
    ///
    /// [`Builder::mode()`](crate::config::Builder::mode) must be called before building.
    MissingMode,
    /// Primary bit map is not a permutation of the eight bus bits
    InvalidPrimaryMap {
        /// The rejected map (`map[logical] = physical`)
        map: [u8; 8],
    },
    /// Home line is outside the extra bus
    InvalidHomeLine {
        /// Line index requested
        line: u8,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BuilderError::MissingMode => write!(f, "Mode must be specified"),
            BuilderError::InvalidPrimaryMap { map } => {
                write!(f, "Primary bit map {map:?} is not a permutation of 0..8")
            }
            BuilderError::InvalidHomeLine { line } => write!(
                f,
                "Invalid home line {line} (extra bus has {EXTRA_LINES} lines)"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}
