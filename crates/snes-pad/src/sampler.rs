//! Bus sampling
//!
//! Reads both buses in one critical section, inverts the pull-up polarity,
//! then remaps and resolves the dpad.

use crate::config::Config;
use crate::dpad;
use crate::interface::{PadInterface, RawLevels};
use crate::mapper;
use crate::snapshot::PinSnapshot;

/// Bit offset of the `{Up, Down, Left, Right}` field in report byte 0
pub const DPAD_SHIFT: u8 = 4;

/// Read both buses so dpad and button bits come from the same instant
pub fn read_atomic<I: PadInterface>(interface: &mut I) -> Result<RawLevels, I::Error> {
    critical_section::with(|_cs| interface.read_levels())
}

/// Turn electrical levels into a report snapshot
pub fn decode(config: &Config, levels: RawLevels) -> PinSnapshot {
    let pressed_primary = !levels.primary;
    let pressed_extra = !levels.extra & config.extra_line_mask();

    let [mut low, high] = mapper::remap(config, pressed_primary, pressed_extra);

    let dpad = dpad::resolve(low >> DPAD_SHIFT);
    low = (low & 0x0F) | (dpad << DPAD_SHIFT);

    PinSnapshot::new(low, high)
}

/// Sample the controller once
pub fn sample<I: PadInterface>(
    config: &Config,
    interface: &mut I,
) -> Result<PinSnapshot, I::Error> {
    let levels = read_atomic(interface)?;
    Ok(decode(config, levels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Builder, Mode};

    fn levels(pressed_primary: u8, pressed_extra: u8) -> RawLevels {
        RawLevels {
            primary: !pressed_primary,
            extra: !pressed_extra & 0x1F,
        }
    }

    #[test]
    fn idle_bus_is_all_released() {
        for mode in [Mode::Nes8Button, Mode::Snes12ButtonHome] {
            let config = Builder::new().mode(mode).build().unwrap();
            assert_eq!(decode(&config, RawLevels::IDLE), PinSnapshot::RELEASED);
        }
    }

    #[test]
    fn snes_opposite_directions_resolve() {
        let config = Builder::new().mode(Mode::Snes12ButtonHome).build().unwrap();
        // B plus all four directions
        let snapshot = decode(&config, levels(0xF1, 0));
        assert_eq!(snapshot, PinSnapshot::new(0b1001_0001, 0));
    }

    #[test]
    fn nes_left_right_resolve_after_swap() {
        let config = Builder::new().mode(Mode::Nes8Button).build().unwrap();
        // physical 0 and 1 carry Right and Left on the NES board, 4 and 5 Up and Down
        let snapshot = decode(&config, levels(0b0011_0011, 0));
        assert_eq!(snapshot.bytes()[0], 0b1001_0000);
    }

    #[test]
    fn nes_unwired_extra_lines_are_masked() {
        let config = Builder::new().mode(Mode::Nes8Button).build().unwrap();
        let snapshot = decode(&config, RawLevels { primary: 0xFF, extra: 0x00 });
        assert_eq!(snapshot, PinSnapshot::new(0, mapper::HOME_DATA_BIT));
    }
}
