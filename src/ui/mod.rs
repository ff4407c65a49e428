//! User interface subsystem - 16×2 LCD screens + interaction states.
//!
//! The state machine cycles forever between three screens:
//!
//! - **ModeSelect**: main menu; digit keys pick a parameter, `#` prices.
//! - **InputParam**: live edit of one parameter with the rotary encoder;
//!   `*` cycles the step size, `C` commits, `#` discards and prices.
//! - **DisplayResult**: model price, market quote and percent difference,
//!   with the LED bar showing the percent magnitude until any key.

pub mod screens;

use crate::config::{DEFAULT_STEP_INDEX, STEP_SIZES};
use crate::params::Parameter;

/// Interaction states. No terminal state - the machine cycles indefinitely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UiState {
    ModeSelect,
    InputParam,
    DisplayResult,
}

/// Transient state of one parameter edit.
///
/// Created on entering `InputParam`, seeded from the committed value;
/// dropped on commit or on the `#` discard path. The in-progress value is
/// kept clamped to `[0, max]` by the caller before every redisplay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditSession {
    pub param: Parameter,
    pub value: f32,
    step_idx: usize,
}

impl EditSession {
    pub fn new(param: Parameter, committed: f32) -> Self {
        EditSession {
            param,
            value: committed,
            step_idx: DEFAULT_STEP_INDEX,
        }
    }

    /// Current step size applied per encoder detent edge.
    pub fn step_size(&self) -> f32 {
        STEP_SIZES[self.step_idx]
    }

    /// Index into the step table (for the on-screen indicator).
    pub fn step_index(&self) -> usize {
        self.step_idx
    }

    /// Advance to the next step size, wrapping. Does not touch `value`.
    pub fn cycle_step(&mut self) {
        self.step_idx = (self.step_idx + 1) % STEP_SIZES.len();
    }
}
