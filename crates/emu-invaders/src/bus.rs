//! Invaders bus: memory and device routing.
//!
//! The bus connects the 8080 to memory, the input ports, the shift
//! register, and the sound trigger latches. Device numbers come from the
//! 8080's IN/OUT instructions:
//!
//! | Device | In                              | Out                      |
//! |--------|---------------------------------|--------------------------|
//! | 0      | hardware status word            | —                        |
//! | 1      | player 1 controls + credit      | —                        |
//! | 2      | DIP switches + player 2 wiring  | shift window offset      |
//! | 3      | shift register window           | UFO/fire/explosion cues  |
//! | 4      | —                               | shift a byte in          |
//! | 5      | —                               | fleet-move/UFO-hit cues  |
//!
//! Unmapped devices read as 0 and swallow writes; the game never touches
//! them, so this is not worth a diagnostic.

use emu_core::Bus;

use crate::config::DipSwitches;
use crate::input::{Button, InputSnapshot};
use crate::memory::Memory;
use crate::shifter::ShiftRegister;
use crate::sound::{device3_commands, device5_commands, EdgeDetector, Sound, SoundCommand};

/// The Invaders bus, implementing `emu_core::Bus`.
///
/// Owns everything the CPU can reach: memory, the shift register, the DIP
/// switches, the current input snapshot, and the sound trigger latches.
pub struct InvadersBus {
    pub memory: Memory,
    pub shifter: ShiftRegister,
    dips: DipSwitches,
    /// Snapshot for the current tick, installed by the machine.
    input: InputSnapshot,
    /// Edge detection across successive device 1 reads (coin insertion).
    credit_latch: EdgeDetector,
    /// Edge detection for the two sound-bearing output ports.
    port3_latch: EdgeDetector,
    port5_latch: EdgeDetector,
    /// Commands queued for the audio collaborator, drained per tick.
    sound_queue: Vec<SoundCommand>,
}

impl InvadersBus {
    #[must_use]
    pub fn new(memory: Memory, dips: DipSwitches) -> Self {
        Self {
            memory,
            shifter: ShiftRegister::new(),
            dips,
            input: InputSnapshot::new(),
            credit_latch: EdgeDetector::new(),
            port3_latch: EdgeDetector::new(),
            port5_latch: EdgeDetector::new(),
            sound_queue: Vec::new(),
        }
    }

    /// Install the input snapshot for the current tick.
    pub fn set_input(&mut self, input: InputSnapshot) {
        self.input = input;
    }

    /// Drain the sound commands issued since the last call.
    pub fn take_sound_commands(&mut self) -> Vec<SoundCommand> {
        std::mem::take(&mut self.sound_queue)
    }

    /// Device 1: player 1 controls.
    ///
    /// Reading this port is also where the coin circuit lives: a 0→1 edge
    /// of the credit bit across successive reads rings the coin chime.
    fn read_controls(&mut self) -> u8 {
        let input = self.input;
        let mut value = input.bit(Button::InsertCredit);
        value |= input.bit(Button::Start2P) << 1;
        value |= input.bit(Button::Start1P) << 2;
        value |= 1 << 3; // always high on this board
        value |= input.bit(Button::Fire) << 4;
        value |= input.bit(Button::Left) << 5;
        value |= input.bit(Button::Right) << 6;

        if self.credit_latch.update(value).rose(0) {
            self.sound_queue.push(SoundCommand::Play {
                sound: Sound::CoinInserted,
                looped: false,
            });
        }
        value
    }

    /// Device 2: DIP switches, tilt, and the player 2 control wiring
    /// (fire/left/right are shared between both ports on this cabinet).
    fn read_dips(&self) -> u8 {
        let input = self.input;
        let mut value = self.dips.ships.bits();
        value |= input.bit(Button::Tilt) << 2;
        value |= u8::from(self.dips.extra_ship) << 3;
        value |= input.bit(Button::Fire) << 4;
        value |= input.bit(Button::Left) << 5;
        value |= input.bit(Button::Right) << 6;
        value |= u8::from(self.dips.display_coin) << 7;
        value
    }
}

impl Bus for InvadersBus {
    fn read(&mut self, address: u16) -> u8 {
        self.memory.read(address)
    }

    fn write(&mut self, address: u16, value: u8) {
        self.memory.write(address, value);
    }

    fn read_device(&mut self, device: u8) -> u8 {
        match device {
            0 => 0x70,
            1 => self.read_controls(),
            2 => self.read_dips(),
            3 => self.shifter.read(),
            _ => 0,
        }
    }

    fn write_device(&mut self, device: u8, value: u8) {
        match device {
            2 => self.shifter.set_offset(value),
            4 => self.shifter.shift(value),
            3 => {
                let edges = self.port3_latch.update(value);
                device3_commands(edges, &mut self.sound_queue);
            }
            5 => {
                let edges = self.port5_latch.update(value);
                device5_commands(edges, &mut self.sound_queue);
            }
            _ => {}
        }
    }
}
