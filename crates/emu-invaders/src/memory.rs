//! Invaders memory subsystem.
//!
//! The board decodes 16 KiB of address space and mirrors its RAM half into
//! the next 8 KiB:
//! - $0000-$1FFF: ROM (writes ignored)
//! - $2000-$23FF: work RAM
//! - $2400-$3FFF: video RAM (1 bit per pixel)
//! - $4000-$5FFF: mirror of $2000-$3FFF
//!
//! Anything above $5FFF is not decoded at all. The real board would put
//! garbage on the bus; the emulation no-ops instead so runs stay
//! deterministic, and logs a warning so buggy instruction streams show up
//! in diagnostics.

use crate::rom::RomSet;

/// Size of the backing store (ROM + RAM, before mirroring).
pub const MEMORY_SIZE: usize = 0x4000;

/// First work RAM address; everything below is ROM.
pub const WORK_RAM_START: u16 = 0x2000;

/// First video RAM address.
pub const VIDEO_RAM_START: u16 = 0x2400;

/// First address of the RAM mirror.
pub const MIRROR_START: u16 = 0x4000;

/// Last decoded address; beyond this the bus is open.
pub const MIRROR_END: u16 = 0x5FFF;

/// Invaders memory: 8 KiB ROM + 8 KiB RAM with the upper mirror.
///
/// The mirror is resolved before indexing, so the backing array is never
/// touched above $3FFF.
pub struct Memory {
    bytes: Box<[u8; MEMORY_SIZE]>,
}

impl Memory {
    /// Create the memory subsystem with the given ROM set in place.
    #[must_use]
    pub fn new(rom: &RomSet) -> Self {
        let mut bytes = Box::new([0u8; MEMORY_SIZE]);
        bytes[..rom.bytes().len()].copy_from_slice(rom.bytes());
        Self { bytes }
    }

    /// Read a byte. Out-of-bounds reads return 0.
    #[must_use]
    pub fn read(&self, addr: u16) -> u8 {
        if addr > MIRROR_END {
            log::warn!("memory read beyond decoded range: ${addr:04X}");
            return 0;
        }
        self.bytes[Self::decode(addr)]
    }

    /// Write a byte. Out-of-bounds and ROM writes are dropped.
    pub fn write(&mut self, addr: u16, value: u8) {
        if addr > MIRROR_END {
            log::warn!("memory write beyond decoded range: ${addr:04X}");
            return;
        }
        if addr < WORK_RAM_START {
            log::warn!("memory write to ROM region: ${addr:04X}");
            return;
        }
        self.bytes[Self::decode(addr)] = value;
    }

    /// The video RAM region ($2400-$3FFF), for the frame converter.
    #[must_use]
    pub fn vram(&self) -> &[u8] {
        &self.bytes[VIDEO_RAM_START as usize..]
    }

    /// Full backing store, for state comparison in tests and debuggers.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..]
    }

    /// Resolve the mirror: $4000-$5FFF aliases $2000-$3FFF.
    fn decode(addr: u16) -> usize {
        if addr >= MIRROR_START {
            (addr - 0x2000) as usize
        } else {
            addr as usize
        }
    }
}
