//! Core traits and types for cycle-accurate emulation.
//!
//! Everything counts cycles of the master crystal. All component timing
//! derives from this. No exceptions.

mod bus;
mod clock;
mod cpu;
mod ticks;

pub use bus::Bus;
pub use clock::MasterClock;
pub use cpu::Cpu;
pub use ticks::Ticks;
