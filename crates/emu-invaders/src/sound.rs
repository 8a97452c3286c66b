//! Sound cue triggering.
//!
//! The board has no sound data bus; it has discrete analog circuits keyed
//! by bits of output devices 3 and 5. A cue starts when its bit goes 0→1.
//! The UFO hover cue is the only continuous one: it loops while bit 0 of
//! device 3 stays high and stops on the 1→0 edge. Steady-state bits do
//! nothing, so the game can rewrite a port without retriggering cues.

/// The ten sound cues wired to the output ports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    /// UFO hover drone. The only looping cue.
    Ufo,
    UfoHit,
    Fire,
    Explosion,
    InvaderDie,
    FleetMove1,
    FleetMove2,
    FleetMove3,
    FleetMove4,
    CoinInserted,
}

/// A command for the external audio collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCommand {
    Play { sound: Sound, looped: bool },
    Stop { sound: Sound },
}

/// Bit transitions between two successive byte values.
#[derive(Debug, Clone, Copy)]
pub struct Edges {
    rising: u8,
    falling: u8,
}

impl Edges {
    /// Did the given bit go 0→1?
    #[must_use]
    pub fn rose(self, bit: u8) -> bool {
        self.rising & (1 << bit) != 0
    }

    /// Did the given bit go 1→0?
    #[must_use]
    pub fn fell(self, bit: u8) -> bool {
        self.falling & (1 << bit) != 0
    }
}

/// Latches the last value written to a port and reports bit transitions.
///
/// The latch updates unconditionally on every call, so repeated identical
/// writes are idempotent: they report no edges and leave the latch as-is.
#[derive(Debug, Default)]
pub struct EdgeDetector {
    last: u8,
}

impl EdgeDetector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare `value` against the latched byte, then latch `value`.
    pub fn update(&mut self, value: u8) -> Edges {
        let edges = Edges {
            rising: value & !self.last,
            falling: self.last & !value,
        };
        self.last = value;
        edges
    }
}

/// Map a device 3 write to sound commands.
///
/// Bit 0 is the looping UFO hover cue; bits 1-3 are one-shots.
pub(crate) fn device3_commands(edges: Edges, queue: &mut Vec<SoundCommand>) {
    if edges.rose(0) {
        queue.push(SoundCommand::Play {
            sound: Sound::Ufo,
            looped: true,
        });
    }
    if edges.fell(0) {
        queue.push(SoundCommand::Stop { sound: Sound::Ufo });
    }
    for (bit, sound) in [
        (1, Sound::Fire),
        (2, Sound::Explosion),
        (3, Sound::InvaderDie),
    ] {
        if edges.rose(bit) {
            queue.push(SoundCommand::Play {
                sound,
                looped: false,
            });
        }
    }
}

/// Map a device 5 write to sound commands. All one-shots.
pub(crate) fn device5_commands(edges: Edges, queue: &mut Vec<SoundCommand>) {
    for (bit, sound) in [
        (0, Sound::FleetMove1),
        (1, Sound::FleetMove2),
        (2, Sound::FleetMove3),
        (3, Sound::FleetMove4),
        (4, Sound::UfoHit),
    ] {
        if edges.rose(bit) {
            queue.push(SoundCommand::Play {
                sound,
                looped: false,
            });
        }
    }
}
