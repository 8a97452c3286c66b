//! Cabinet input snapshot.
//!
//! The platform layer polls its input devices once per tick and hands the
//! machine an immutable snapshot. The machine never polls; it only decodes
//! the snapshot into port bits when the game reads devices 1 and 2.

/// The seven cabinet buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Left = 0,
    Right = 1,
    Fire = 2,
    Start1P = 3,
    Start2P = 4,
    InsertCredit = 5,
    Tilt = 6,
}

/// Immutable per-tick snapshot of cabinet button state.
///
/// One bit per [`Button`], indexed by the enum discriminant, set while the
/// button is held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    buttons: u8,
}

impl InputSnapshot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Is the button currently held?
    #[must_use]
    pub fn is_down(self, button: Button) -> bool {
        self.buttons & (1 << button as u8) != 0
    }

    /// The button's state as a port bit (1 = held).
    #[must_use]
    pub fn bit(self, button: Button) -> u8 {
        u8::from(self.is_down(button))
    }

    /// Set or clear a button.
    pub fn set(&mut self, button: Button, down: bool) {
        if down {
            self.buttons |= 1 << button as u8;
        } else {
            self.buttons &= !(1 << button as u8);
        }
    }

    /// Builder form of [`set`](Self::set), for tests and scripted input.
    #[must_use]
    pub fn with(mut self, button: Button) -> Self {
        self.set(button, true);
        self
    }
}
