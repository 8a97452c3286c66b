//! Space Invaders (Taito/Midway 8080) arcade machine emulator.
//!
//! Emulates the logic board as seen from the CPU bus: the 16 KiB memory
//! map with its mirrored RAM region, the memory-mapped input ports and DIP
//! switches, the discrete shift-register sprite scaler, the edge-triggered
//! sound cue outputs, and the two scanline-timed interrupts. The 8080 core
//! itself is an external collaborator supplied through [`emu_core::Cpu`];
//! rendering and audio playback consume the frame buffer and sound command
//! queue after each tick.
//!
//! The board runs a 2 MHz crystal and produces 60 frames per second, so
//! one `tick` is a 33,333-cycle time slice.

mod bus;
mod config;
mod input;
mod machine;
mod memory;
mod rom;
mod scheduler;
mod shifter;
mod sound;
mod video;

pub use bus::InvadersBus;
pub use config::{DipSwitches, InvadersConfig, ShipCount};
pub use input::{Button, InputSnapshot};
pub use machine::Invaders;
pub use memory::Memory;
pub use rom::{RomError, RomSet};
pub use scheduler::{Crossings, FrameScheduler, CYCLES_PER_TICK};
pub use shifter::ShiftRegister;
pub use sound::{EdgeDetector, Edges, Sound, SoundCommand};
pub use video::{FrameBuffer, DISPLAY_HEIGHT, DISPLAY_WIDTH};
