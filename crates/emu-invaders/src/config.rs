//! Machine configuration.

use crate::rom::RomSet;

/// Ship count selected by DIP switches 1-2.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShipCount {
    #[default]
    Three,
    Four,
    Five,
    Six,
}

impl ShipCount {
    /// The two DIP bits as wired to device 2 bits 0-1.
    #[must_use]
    pub fn bits(self) -> u8 {
        match self {
            Self::Three => 0b00,
            Self::Four => 0b01,
            Self::Five => 0b10,
            Self::Six => 0b11,
        }
    }
}

/// Cabinet DIP switch settings. Fixed at setup; nothing mutates them
/// during play.
#[derive(Debug, Clone, Copy, Default)]
pub struct DipSwitches {
    pub ships: ShipCount,
    /// Extra ship at 1000 points instead of 1500.
    pub extra_ship: bool,
    /// Show coin info on the demo screen.
    pub display_coin: bool,
}

/// Configuration for creating an Invaders machine.
pub struct InvadersConfig {
    /// The assembled game ROM.
    pub rom: RomSet,
    pub dips: DipSwitches,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ship_count_bits_match_dip_wiring() {
        assert_eq!(ShipCount::Three.bits(), 0b00);
        assert_eq!(ShipCount::Four.bits(), 0b01);
        assert_eq!(ShipCount::Five.bits(), 0b10);
        assert_eq!(ShipCount::Six.bits(), 0b11);
    }
}
