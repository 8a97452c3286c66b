//! Memory and I/O bus interface.

/// Memory and I/O bus interface.
///
/// Components access memory and peripherals through this trait. The bus
/// handles address decoding and routing to the appropriate device.
///
/// CPUs with port instructions (8080 IN/OUT, Z80 equivalents) address
/// peripherals through a device number space separate from memory; the
/// `read_device`/`write_device` pair covers it.
pub trait Bus {
    /// Read a byte from the given memory address.
    fn read(&mut self, address: u16) -> u8;

    /// Write a byte to the given memory address.
    fn write(&mut self, address: u16, value: u8);

    /// Read a byte from the given I/O device.
    fn read_device(&mut self, device: u8) -> u8;

    /// Write a byte to the given I/O device.
    fn write_device(&mut self, device: u8, value: u8);
}
