//! Physical bus bits to report bits
//!
//! Both boards shipped with lines on the wrong pins. The fixes are driven by
//! the [`Wiring`] tables in [`Config`], never recomputed here.

use crate::config::{Config, Mode, Wiring};

/// Report byte 1 bit of the Home button (button bit 12)
pub const HOME_DATA_BIT: u8 = 1 << 4;

/// Report byte 1 bits that can ever be set (button bits 8..=12)
pub const EXTRA_DATA_MASK: u8 = 0x1F;

/// Move active-high primary bus bits to their report positions
pub fn remap_primary(wiring: &Wiring, physical: u8) -> u8 {
    wiring
        .primary_map
        .iter()
        .enumerate()
        .fold(0, |logical, (bit, &source)| {
            logical | (((physical >> (source & 7)) & 1) << bit)
        })
}

/// Build report byte 1 from the active-high extra bus
pub fn remap_extra(config: &Config, extra: u8) -> u8 {
    let wiring = config.wiring();
    let mut logical = 0;

    if extra & (1 << wiring.home_line) != 0 {
        logical |= HOME_DATA_BIT;
    }

    if config.mode() == Mode::Snes12ButtonHome {
        for (bit, line) in wiring.snes_button_lines().into_iter().enumerate() {
            if extra & (1 << line) != 0 {
                logical |= 1 << bit;
            }
        }
    }

    logical & EXTRA_DATA_MASK
}

/// Remap one sample into the two report bytes
///
/// Inputs are active-high (pressed = 1).
pub fn remap(config: &Config, primary: u8, extra: u8) -> [u8; 2] {
    [
        remap_primary(config.wiring(), primary),
        remap_extra(config, extra),
    ]
}
