//! Per-tick cycle budget and frame event detection.
//!
//! The original hardware raised two interrupts per frame from beam
//! position: one as the beam crossed mid-screen, one at vertical blank.
//! Here the scheduler's only job is threshold detection: it accumulates
//! instruction costs and reports, once per tick each, when the mid-frame
//! and end-frame cycle offsets are crossed. What happens at a crossing
//! (interrupt vectors, frame conversion) is the machine's mapping.
//!
//! Cycles run past the budget carry into the next tick, so the long-run
//! average rate stays at exactly the crystal rate; the residue is bounded
//! by one instruction's cost.

use emu_core::{MasterClock, Ticks};

/// The 2 MHz crystal on the logic board.
const CRYSTAL: MasterClock = MasterClock::new(2_000_000);

/// Cycle budget for one 1/60 s tick (33,333).
pub const CYCLES_PER_TICK: Ticks = CRYSTAL.ticks_per_frame(60);

/// Cycles per scanline group (224 visible lines).
const CYCLES_PER_SCANLINE: u64 = CYCLES_PER_TICK.get() / 224;

/// Mid-frame interrupt offset: beam at scanline 112.
const MID_FRAME_CYCLES: u64 = CYCLES_PER_SCANLINE * 112;

/// End-frame interrupt offset: beam entering vertical blank.
const END_FRAME_CYCLES: u64 = CYCLES_PER_SCANLINE * 224;

/// Threshold crossings reported by one [`FrameScheduler::advance`] call.
#[derive(Debug, Clone, Copy, Default)]
pub struct Crossings {
    pub mid_frame: bool,
    pub end_frame: bool,
}

/// Accumulates executed cycles within a tick and detects the two frame
/// thresholds, each at most once per tick.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    /// Cycles accumulated this tick, pre-loaded with last tick's overshoot.
    cycles_this_tick: Ticks,
    mid_frame_fired: bool,
    end_frame_fired: bool,
}

impl FrameScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the fired flags for a new tick. The cycle counter keeps the
    /// carried-over overshoot.
    pub fn begin_tick(&mut self) {
        self.mid_frame_fired = false;
        self.end_frame_fired = false;
    }

    /// Account for one executed instruction and report threshold
    /// crossings.
    pub fn advance(&mut self, cost: Ticks) -> Crossings {
        self.cycles_this_tick += cost;

        let mut crossings = Crossings::default();
        if self.cycles_this_tick.get() >= MID_FRAME_CYCLES && !self.mid_frame_fired {
            self.mid_frame_fired = true;
            crossings.mid_frame = true;
        }
        if self.cycles_this_tick.get() >= END_FRAME_CYCLES && !self.end_frame_fired {
            self.end_frame_fired = true;
            crossings.end_frame = true;
        }
        crossings
    }

    /// Has the tick's cycle budget been exceeded?
    ///
    /// The loop keeps stepping while the counter is at or below the
    /// budget; the final instruction may overshoot.
    #[must_use]
    pub fn budget_exhausted(&self) -> bool {
        self.cycles_this_tick.get() > CYCLES_PER_TICK.get()
    }

    /// End the tick, carrying the overshoot into the next one.
    pub fn finish_tick(&mut self) {
        if self.cycles_this_tick.get() >= CYCLES_PER_TICK.get() {
            self.cycles_this_tick -= CYCLES_PER_TICK;
        }
    }

    /// Cycles accumulated so far this tick.
    #[must_use]
    pub fn cycles_this_tick(&self) -> Ticks {
        self.cycles_this_tick
    }
}
