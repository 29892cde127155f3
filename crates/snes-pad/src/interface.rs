//! Hardware interface abstraction
//!
//! This module provides the [`PadInterface`] trait and the [`Interface`] struct
//! for reading the controller lines.
//!
//! ## Hardware Requirements
//!
//! The adapter board wires:
//! - **Primary bus**: 8 input pins, the NES buttons or the SNES B/Y/Select/Start + dpad
//! - **Extra bus**: up to 5 input pins, the SNES A/X/L/R buttons and the Home button
//!
//! Every line is pulled high and a pressed button pulls it low.
//!
//! ## Example
//!
//! ```rust,ignore
//! use snes_pad::{Interface, LineConfig, PadInterface};
//!
//! // Pins must already be configured as pull-up inputs by the HAL
//! let mut interface = Interface::new(primary_pins, extra_pins);
//!
//! interface.configure(LineConfig { extra_mask: 0b1_1111 })?;
//! let levels = interface.read_levels()?;
//! ```

use core::fmt::Debug;
use embedded_hal::digital::InputPin;

/// Electrical levels of both buses for one read
///
/// A set bit means the line is high, i.e. the button is released.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawLevels {
    /// Primary bus, one bit per pin
    pub primary: u8,
    /// Extra bus in bits 0..=4
    pub extra: u8,
}

impl RawLevels {
    /// Levels of a bus with nothing plugged in
    pub const IDLE: RawLevels = RawLevels {
        primary: 0xFF,
        extra: 0x1F,
    };
}

/// Which lines the current wiring mode uses
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineConfig {
    /// Extra bus lines to read; the rest must read as high
    pub extra_mask: u8,
}

/// Trait for hardware access to the controller lines
///
/// This trait abstracts over different hardware implementations, allowing
/// [`SnesPad`](crate::SnesPad) to work with individual embedded-hal pins or
/// with whole-port register reads.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. A port-based
/// implementation can read both buses with two register loads.
pub trait PadInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Prepare the lines for the wiring mode
    ///
    /// Called once from `init`, before the first read.
    ///
    /// # Errors
    ///
    /// Returns an error if GPIO configuration fails.
    fn configure(&mut self, lines: LineConfig) -> Result<(), Self::Error>;

    /// Read both buses
    ///
    /// Called inside a critical section so both buses reflect the same instant.
    /// Must not block.
    ///
    /// # Errors
    ///
    /// Returns an error if a pin read fails.
    fn read_levels(&mut self) -> Result<RawLevels, Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over the primary and extra pin error types.
#[derive(Debug)]
pub enum InterfaceError<PrimaryErr, ExtraErr> {
    /// Primary bus pin error
    Primary(PrimaryErr),
    /// Extra bus pin error
    Extra(ExtraErr),
}

impl<PrimaryErr: Debug, ExtraErr: Debug> core::fmt::Display
    for InterfaceError<PrimaryErr, ExtraErr>
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InterfaceError::Primary(e) => write!(f, "Primary bus pin error: {e:?}"),
            InterfaceError::Extra(e) => write!(f, "Extra bus pin error: {e:?}"),
        }
    }
}

impl<PrimaryErr: Debug, ExtraErr: Debug> core::error::Error
    for InterfaceError<PrimaryErr, ExtraErr>
{
}

/// Pin-per-line interface implementation
///
/// Implements [`PadInterface`] for embedded-hal v1.0 [`InputPin`]s.
///
/// ## Type Parameters
///
/// * `P` - Primary bus pin implementing [`InputPin`]
/// * `E` - Extra bus pin implementing [`InputPin`]
///
/// Pins are indexed by bus bit: `primary[3]` is physical bit 3.
pub struct Interface<P, E> {
    /// Primary bus pins
    primary: [P; 8],
    /// Extra bus pins
    extra: [E; 5],
    /// Extra lines read by `read_levels`
    extra_mask: u8,
}

impl<P, E> Interface<P, E>
where
    P: InputPin,
    E: InputPin,
{
    /// Create a new Interface
    ///
    /// The pins must already be pull-up inputs; embedded-hal leaves pin
    /// mode to the HAL's type state.
    pub fn new(primary: [P; 8], extra: [E; 5]) -> Self {
        Self {
            primary,
            extra,
            extra_mask: 0,
        }
    }

    /// Return the pins
    pub fn release(self) -> ([P; 8], [E; 5]) {
        (self.primary, self.extra)
    }
}

impl<P, E> PadInterface for Interface<P, E>
where
    P: InputPin,
    E: InputPin,
{
    type Error = InterfaceError<P::Error, E::Error>;

    fn configure(&mut self, lines: LineConfig) -> Result<(), Self::Error> {
        self.extra_mask = lines.extra_mask;
        Ok(())
    }

    fn read_levels(&mut self) -> Result<RawLevels, Self::Error> {
        let mut levels = RawLevels::IDLE;

        for (bit, pin) in self.primary.iter_mut().enumerate() {
            if pin.is_low().map_err(InterfaceError::Primary)? {
                levels.primary &= !(1 << bit);
            }
        }

        for (bit, pin) in self.extra.iter_mut().enumerate() {
            if self.extra_mask & (1 << bit) == 0 {
                continue;
            }
            if pin.is_low().map_err(InterfaceError::Extra)? {
                levels.extra &= !(1 << bit);
            }
        }

        Ok(levels)
    }
}
