//! Dpad conflict resolution
//!
//! Worn pads and third-party controllers can report opposite directions at
//! once. Right wins over Left and Up wins over Down.

/// Up bit of the 4-bit dpad field
pub const UP: u8 = 1 << 0;
/// Down bit of the 4-bit dpad field
pub const DOWN: u8 = 1 << 1;
/// Left bit of the 4-bit dpad field
pub const LEFT: u8 = 1 << 2;
/// Right bit of the 4-bit dpad field
pub const RIGHT: u8 = 1 << 3;

/// Resolved value for every raw `{Up, Down, Left, Right}` pattern
pub const DPAD_MAP: [u8; 16] = build_map();

const fn resolve_slow(raw: u8) -> u8 {
    let mut out = raw & 0x0F;
    if out & (LEFT | RIGHT) == LEFT | RIGHT {
        out &= !LEFT;
    }
    if out & (UP | DOWN) == UP | DOWN {
        out &= !DOWN;
    }
    out
}

const fn build_map() -> [u8; 16] {
    let mut map = [0u8; 16];
    let mut i = 0;
    while i < 16 {
        map[i] = resolve_slow(i as u8);
        i += 1;
    }
    map
}

/// Resolve a raw 4-bit dpad pattern
///
/// Bits above the low nibble are ignored.
#[inline]
pub fn resolve(raw: u8) -> u8 {
    DPAD_MAP[(raw & 0x0F) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_reference_values() {
        assert_eq!(DPAD_MAP, [0, 1, 2, 1, 4, 5, 6, 5, 8, 9, 10, 9, 8, 9, 10, 9]);
    }

    #[test]
    fn resolve_agrees_with_table() {
        for raw in 0..16u8 {
            assert_eq!(resolve(raw), DPAD_MAP[raw as usize]);
        }
    }

    #[test]
    fn up_wins_over_down() {
        assert_eq!(resolve(UP | DOWN), UP);
        assert_eq!(resolve(UP | DOWN | LEFT), UP | LEFT);
    }

    #[test]
    fn right_wins_over_left() {
        assert_eq!(resolve(LEFT | RIGHT), RIGHT);
        assert_eq!(resolve(UP | DOWN | LEFT | RIGHT), UP | RIGHT);
    }

    #[test]
    fn diagonals_pass_through() {
        assert_eq!(resolve(DOWN | LEFT), DOWN | LEFT);
        assert_eq!(resolve(UP | RIGHT), UP | RIGHT);
    }

    #[test]
    fn ignores_high_nibble() {
        assert_eq!(resolve(0xF0 | LEFT), LEFT);
    }
}
