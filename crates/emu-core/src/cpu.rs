//! CPU core trait.

use crate::{Bus, Ticks};

/// A CPU core.
///
/// CPUs execute instructions and access memory and peripherals through a
/// bus. The bus is passed in, not owned, so the machine can route accesses
/// through its own address decoding.
pub trait Cpu<B: Bus> {
    /// Execute one instruction. Returns the cycle cost.
    ///
    /// Instructions are not interruptible mid-execution; callers that
    /// budget cycles must tolerate one instruction of overshoot.
    fn step(&mut self, bus: &mut B) -> Ticks;

    /// Latch a maskable interrupt with the given vector byte.
    ///
    /// On the 8080 the interrupting device jams an opcode onto the data
    /// bus, conventionally an RST instruction (e.g. `0xCF` = RST 1).
    /// Returns true if the interrupt was accepted.
    fn interrupt(&mut self, vector: u8) -> bool;

    /// Returns the current program counter.
    fn pc(&self) -> u16;

    /// Returns true if the CPU is halted.
    fn is_halted(&self) -> bool;

    /// Reset the CPU to its initial state.
    fn reset(&mut self);
}
