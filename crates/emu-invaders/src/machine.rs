//! Top-level Invaders machine.
//!
//! Owns the CPU, bus, scheduler, and frame buffer; no ambient state, so
//! any number of machines can coexist (parallel tests, head-to-head
//! cabinets). The platform layer drives it with one `tick` per emulated
//! 1/60 s slice, then reads the frame buffer and drains the sound queue.
//!
//! # Tick loop
//!
//! `tick` steps the CPU until the 33,333-cycle budget is exceeded. The
//! scheduler reports the two threshold crossings; the machine maps the
//! mid-frame crossing to RST 1 and the end-frame crossing to RST 2 plus a
//! frame buffer refresh. The final instruction may overshoot the budget;
//! the overshoot is carried into the next tick.

use emu_core::{Cpu, Ticks};

use crate::bus::InvadersBus;
use crate::config::InvadersConfig;
use crate::input::InputSnapshot;
use crate::memory::Memory;
use crate::scheduler::FrameScheduler;
use crate::sound::SoundCommand;
use crate::video::FrameBuffer;

/// Interrupt vector for the mid-frame interrupt (RST 1).
const MID_FRAME_VECTOR: u8 = 0xCF;

/// Interrupt vector for the end-frame interrupt (RST 2).
const END_FRAME_VECTOR: u8 = 0xD7;

/// Space Invaders arcade machine.
///
/// Generic over the external 8080 core; the machine supplies the bus and
/// the interrupt timing, the core supplies instruction semantics.
pub struct Invaders<C> {
    cpu: C,
    bus: InvadersBus,
    scheduler: FrameScheduler,
    frame: FrameBuffer,
    /// Completed frame counter.
    frame_count: u64,
    /// While set, `tick` is a no-op.
    paused: bool,
}

impl<C: Cpu<InvadersBus>> Invaders<C> {
    /// Create a machine from the given CPU core and configuration.
    #[must_use]
    pub fn new(cpu: C, config: &InvadersConfig) -> Self {
        let memory = Memory::new(&config.rom);
        Self {
            cpu,
            bus: InvadersBus::new(memory, config.dips),
            scheduler: FrameScheduler::new(),
            frame: FrameBuffer::new(),
            frame_count: 0,
            paused: false,
        }
    }

    /// Run one 1/60 s time slice.
    ///
    /// Returns the number of cycles executed, zero while paused.
    pub fn tick(&mut self, input: InputSnapshot) -> u64 {
        if self.paused {
            return 0;
        }

        self.bus.set_input(input);
        self.scheduler.begin_tick();

        let mut executed = Ticks::ZERO;
        while !self.scheduler.budget_exhausted() {
            let cost = self.cpu.step(&mut self.bus);
            executed += cost;

            let crossings = self.scheduler.advance(cost);
            if crossings.mid_frame {
                self.cpu.interrupt(MID_FRAME_VECTOR);
            }
            if crossings.end_frame {
                // Two independent effects of the same crossing: the
                // vblank interrupt and the display refresh.
                self.cpu.interrupt(END_FRAME_VECTOR);
                self.frame.refresh(self.bus.memory.vram());
                self.frame_count += 1;
            }
        }
        self.scheduler.finish_tick();

        executed.get()
    }

    /// Is the machine paused?
    #[must_use]
    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Pause or resume. A paused machine ignores `tick` entirely.
    pub fn set_pause(&mut self, pause: bool) {
        self.paused = pause;
    }

    /// The display pixels (ARGB32, 256×224, row-major).
    ///
    /// Refreshed once per frame at the end-frame crossing. The borrow
    /// keeps the renderer read-only and serialized against `tick`.
    #[must_use]
    pub fn framebuffer(&self) -> &[u32] {
        self.frame.pixels()
    }

    /// Framebuffer width in pixels.
    #[must_use]
    pub fn framebuffer_width(&self) -> u32 {
        self.frame.width()
    }

    /// Framebuffer height in pixels.
    #[must_use]
    pub fn framebuffer_height(&self) -> u32 {
        self.frame.height()
    }

    /// Drain the sound commands issued since the last call.
    pub fn take_sound_commands(&mut self) -> Vec<SoundCommand> {
        self.bus.take_sound_commands()
    }

    /// Completed frame count.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Reference to the CPU.
    #[must_use]
    pub fn cpu(&self) -> &C {
        &self.cpu
    }

    /// Mutable reference to the CPU.
    pub fn cpu_mut(&mut self) -> &mut C {
        &mut self.cpu
    }

    /// Reference to the bus.
    #[must_use]
    pub fn bus(&self) -> &InvadersBus {
        &self.bus
    }

    /// Mutable reference to the bus.
    pub fn bus_mut(&mut self) -> &mut InvadersBus {
        &mut self.bus
    }
}
