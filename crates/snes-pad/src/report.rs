//! Reports handed to the host
//!
//! The 16-bit button layout is a wire contract with the downstream protocol:
//!
//! | bit | button              |
//! |-----|---------------------|
//! | 0   | B                   |
//! | 1   | Y (A on NES)        |
//! | 2   | Select              |
//! | 3   | Start               |
//! | 4   | Up                  |
//! | 5   | Down                |
//! | 6   | Left                |
//! | 7   | Right               |
//! | 8   | A                   |
//! | 9   | X                   |
//! | 10  | L                   |
//! | 11  | R                   |
//! | 12  | Home                |
//! | 13-15 | unused, always 0  |

use crate::config::PadType;
use crate::snapshot::{PinSnapshot, SNAPSHOT_BYTES};

/// A button in the report layout
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Button {
    B = 0,
    /// A on an NES pad
    Y = 1,
    Select = 2,
    Start = 3,
    Up = 4,
    Down = 5,
    Left = 6,
    Right = 7,
    A = 8,
    X = 9,
    L = 10,
    R = 11,
    Home = 12,
}

impl Button {
    pub const ALL: [Button; 13] = [
        Button::B,
        Button::Y,
        Button::Select,
        Button::Start,
        Button::Up,
        Button::Down,
        Button::Left,
        Button::Right,
        Button::A,
        Button::X,
        Button::L,
        Button::R,
        Button::Home,
    ];

    /// Mask of this button in [`GamepadReport::buttons`]
    pub fn bit(self) -> u16 {
        1 << self as u8
    }
}

/// A report as consumed by the host dispatch loop
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GamepadReport {
    /// Controller family the report came from
    pub pad_type: PadType,
    /// Pressed buttons, one bit per [`Button`]
    pub buttons: u16,
    /// The two report bytes the mask was packed from
    pub raw_data: [u8; SNAPSHOT_BYTES],
}

impl GamepadReport {
    /// Create an all-released report
    pub fn new(pad_type: PadType) -> Self {
        Self {
            pad_type,
            buttons: 0,
            raw_data: [0; SNAPSHOT_BYTES],
        }
    }

    /// Overwrite this report with a snapshot
    pub fn fill(&mut self, pad_type: PadType, snapshot: &PinSnapshot) {
        self.pad_type = pad_type;
        self.buttons = snapshot.buttons();
        self.raw_data = snapshot.bytes();
    }

    pub fn is_pressed(&self, button: Button) -> bool {
        self.buttons & button.bit() != 0
    }

    /// Iterate over pressed buttons in bit order
    pub fn pressed(&self) -> impl Iterator<Item = Button> + '_ {
        Button::ALL.into_iter().filter(|b| self.is_pressed(*b))
    }
}
