//! NES/SNES controller backend for embedded-hal v1.0
//!
//! Samples the digital lines of a NES or SNES pad wired straight to GPIO and
//! turns them into a stable, deduplicated 16-bit button report for a host
//! dispatch loop.
//!
//! ## Polling
//!
//! ```rust,ignore
//! use snes_pad::{Builder, Gamepad, GamepadReport, Interface, Mode, SnesPad};
//!
//! let config = Builder::new().mode(Mode::Snes12ButtonHome).build()?;
//! let mut pad = SnesPad::new(Interface::new(primary_pins, extra_pins), config);
//!
//! pad.init()?;
//! let mut report = GamepadReport::new(config.mode().pad_type());
//! loop {
//!     pad.update()?;
//!     if pad.changed()? {
//!         pad.get_report(Some(&mut report))?;
//!         forward(&report);
//!     }
//! }
//! ```
//!
//! Reads run inside [`critical_section::with`]; the final binary must link a
//! `critical-section` implementation for its target.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod dpad;
pub mod error;
pub mod gamepad;
pub mod interface;
pub mod mapper;
pub mod pad;
pub mod report;
pub mod sampler;
pub mod snapshot;

pub use config::{Builder, Config, Mode, PadType, Wiring};
pub use error::{BuilderError, Error};
pub use gamepad::Gamepad;
pub use interface::{Interface, InterfaceError, LineConfig, PadInterface, RawLevels};
pub use pad::SnesPad;
pub use report::{Button, GamepadReport};
pub use snapshot::PinSnapshot;
