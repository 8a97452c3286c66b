//! The discrete shift-register sprite scaler.
//!
//! A 16-bit shifter built from two latched bytes, used by the game to
//! position sprites at sub-byte horizontal offsets. The CPU feeds bytes in
//! through device 4, sets a 3-bit window offset through device 2, and
//! reads an 8-bit window back through device 3.

/// 16-bit shift register with a configurable 8-bit read window.
#[derive(Debug, Default)]
pub struct ShiftRegister {
    low: u8,
    high: u8,
    /// Window offset from the top of the 16-bit word, always 0-7.
    offset: u8,
}

impl ShiftRegister {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shift a new byte in: the old high byte drops to low.
    pub fn shift(&mut self, value: u8) {
        self.low = self.high;
        self.high = value;
    }

    /// Set the read window offset. Only the low 3 bits are wired.
    pub fn set_offset(&mut self, value: u8) {
        self.offset = value & 0x07;
    }

    /// The 8 bits starting `offset` bits from the top of `{high,low}`.
    ///
    /// Offset 0 returns the high byte; offset 7 returns a window shifted
    /// almost a full byte toward the low byte.
    #[must_use]
    pub fn read(&self) -> u8 {
        let word = u16::from(self.high) << 8 | u16::from(self.low);
        (word >> (8 - self.offset)) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_zero_reads_high_byte() {
        let mut shifter = ShiftRegister::new();
        shifter.shift(0x12);
        shifter.shift(0x34);
        assert_eq!(shifter.read(), 0x34);
    }

    #[test]
    fn shift_moves_high_to_low() {
        let mut shifter = ShiftRegister::new();
        shifter.shift(0xFF);
        shifter.shift(0x00);
        shifter.set_offset(4);
        // Word is $00FF; 8 bits starting 4 from the top = $0F
        assert_eq!(shifter.read(), 0x0F);
    }

    #[test]
    fn offset_is_masked_to_three_bits() {
        let mut shifter = ShiftRegister::new();
        shifter.shift(0xAB);
        shifter.set_offset(0xF8); // low 3 bits are 0
        assert_eq!(shifter.read(), 0xAB);
    }

    #[test]
    fn offset_seven_windows_into_low_byte() {
        let mut shifter = ShiftRegister::new();
        shifter.shift(0b1010_1010);
        shifter.shift(0b0000_0001);
        shifter.set_offset(7);
        // Word is $01AA; bits 8..1 = $D5
        assert_eq!(shifter.read(), 0b1101_0101);
    }
}
