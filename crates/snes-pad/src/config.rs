//! Wiring configuration types and builder

pub use crate::error::{BuilderError, EXTRA_LINES};

/// Controller family the board is wired for
///
/// Fixed for the lifetime of a [`SnesPad`](crate::SnesPad). Selects which
/// extra lines are read, the default [`Wiring`] and the reported [`PadType`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// NES pad: eight buttons on the primary bus, Home on one extra line
    Nes8Button,
    /// SNES pad: twelve buttons across both buses, plus Home
    Snes12ButtonHome,
}

impl Mode {
    /// Pad type tag carried by every report produced in this mode
    pub fn pad_type(self) -> PadType {
        match self {
            Mode::Nes8Button => PadType::Nes,
            Mode::Snes12ButtonHome => PadType::Snes,
        }
    }
}

/// Pad type tag of a [`GamepadReport`](crate::GamepadReport)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PadType {
    Nes,
    Snes,
}

/// Hardware revision constants
///
/// Two board revisions disagree on where lines land, so neither is baked in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Wiring {
    /// `primary_map[logical] = physical` bit on the primary bus
    pub primary_map: [u8; 8],
    /// Extra bus line carrying the Home button
    pub home_line: u8,
}

impl Wiring {
    /// NES board: A and B are crossed with Left and Right on the primary bus
    pub const NES_DEFAULT: Wiring = Wiring {
        primary_map: [7, 6, 2, 3, 4, 5, 1, 0],
        home_line: 4,
    };

    /// SNES board: the primary bus is already in report order
    pub const SNES_DEFAULT: Wiring = Wiring {
        primary_map: [0, 1, 2, 3, 4, 5, 6, 7],
        home_line: 4,
    };

    /// Default wiring for a mode
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Nes8Button => Self::NES_DEFAULT,
            Mode::Snes12ButtonHome => Self::SNES_DEFAULT,
        }
    }

    /// Extra lines carrying A, X, L and R, in that order
    ///
    /// Every line except the Home line, in ascending order. A Home line
    /// outside the extra bus leaves R on line 3.
    pub fn snes_button_lines(&self) -> [u8; 4] {
        let mut lines = [0u8; 4];
        let mut next = 0;
        for line in 0..EXTRA_LINES {
            if line != self.home_line && next < lines.len() {
                lines[next] = line;
                next += 1;
            }
        }
        lines
    }

    fn validate(&self) -> Result<(), BuilderError> {
        let mut seen = 0u8;
        for &physical in &self.primary_map {
            if physical > 7 || seen & (1 << physical) != 0 {
                return Err(BuilderError::InvalidPrimaryMap {
                    map: self.primary_map,
                });
            }
            seen |= 1 << physical;
        }
        if self.home_line >= EXTRA_LINES {
            return Err(BuilderError::InvalidHomeLine {
                line: self.home_line,
            });
        }
        Ok(())
    }
}

/// Backend configuration
///
/// Use `Builder` to create a Config; the fields are private so every
/// Config in circulation has passed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Controller family
    mode: Mode,
    /// Revision-specific bit positions
    wiring: Wiring,
}

impl Config {
    /// Controller family
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Validated wiring table
    pub fn wiring(&self) -> &Wiring {
        &self.wiring
    }

    /// Mask of extra lines wired in this mode
    pub fn extra_line_mask(&self) -> u8 {
        match self.mode {
            Mode::Nes8Button => 1 << self.wiring.home_line,
            Mode::Snes12ButtonHome => (1 << EXTRA_LINES) - 1,
        }
    }
}

/// Builder for constructing backend configuration
///
/// # Example
///
/// ```
/// use snes_pad::{Builder, Mode};
///
/// let config = Builder::new()
///     .mode(Mode::Nes8Button)
///     .home_line(3)
///     .build()
///     .expect("valid configuration");
/// assert_eq!(config.wiring().home_line, 3);
/// ```
#[derive(Default)]
pub struct Builder {
    /// Controller family (required)
    mode: Option<Mode>,
    /// Full wiring override
    wiring: Option<Wiring>,
    /// Primary bus map override
    primary_map: Option<[u8; 8]>,
    /// Home line override
    home_line: Option<u8>,
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set controller family (required)
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Replace the whole wiring table
    pub fn wiring(mut self, wiring: Wiring) -> Self {
        self.wiring = Some(wiring);
        self
    }

    /// Set the primary bus map (`map[logical] = physical`)
    pub fn primary_map(mut self, map: [u8; 8]) -> Self {
        self.primary_map = Some(map);
        self
    }

    /// Set the extra bus line carrying Home
    pub fn home_line(mut self, line: u8) -> Self {
        self.home_line = Some(line);
        self
    }

    /// Build the configuration
    ///
    /// Individual overrides win over [`wiring()`](Self::wiring), which wins
    /// over the mode's default.
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingMode` if the mode was not set, or a
    /// validation error for an impossible wiring.
    pub fn build(self) -> Result<Config, BuilderError> {
        let mode = self.mode.ok_or(BuilderError::MissingMode)?;
        let mut wiring = self.wiring.unwrap_or_else(|| Wiring::for_mode(mode));
        if let Some(map) = self.primary_map {
            wiring.primary_map = map;
        }
        if let Some(line) = self.home_line {
            wiring.home_line = line;
        }
        wiring.validate()?;
        Ok(Config { mode, wiring })
    }
}
