//! The interaction state machine.
//!
//! [`App::tick`] is one iteration of the calculator's poll loop: drain
//! the encoder, poll the keypad, advance the UI state, and push any
//! display updates out through the sinks. The owner (the embedded main,
//! or a test harness) calls it forever - nothing here is fatal and the
//! machine has no terminal state.

use crate::bar::BarGraph;
use crate::encoder::QuadCounter;
use crate::error::Error;
use crate::hal::{Keypad, Lcd, LedBar};
use crate::keys::Key;
use crate::params::{ParamStore, Parameter};
use crate::pricing::PricingResult;
use crate::ui::{screens, EditSession, UiState};

pub struct App<'a, L, B, K> {
    lcd: L,
    bar: B,
    keys: K,
    quad: &'a QuadCounter,
    params: ParamStore,
    patterns: BarGraph,
    state: UiState,
    edit: Option<EditSession>,
    result: Option<PricingResult>,
}

impl<'a, L, B, K> App<'a, L, B, K>
where
    L: Lcd,
    B: LedBar,
    K: Keypad,
{
    pub fn new(lcd: L, bar: B, keys: K, quad: &'a QuadCounter) -> Self {
        App {
            lcd,
            bar,
            keys,
            quad,
            params: ParamStore::new(),
            patterns: BarGraph::new(),
            state: UiState::ModeSelect,
            edit: None,
            result: None,
        }
    }

    /// Draw the main menu and blank the bar; call once before ticking.
    pub fn start(&mut self) -> Result<(), Error> {
        self.patterns.clear();
        self.bar.write_mask(self.patterns.compute_mask())?;
        screens::draw_menu(&mut self.lcd)
    }

    pub fn state(&self) -> UiState {
        self.state
    }

    /// Committed parameter values (read-only; tests and diagnostics).
    pub fn params(&self) -> &ParamStore {
        &self.params
    }

    /// Result of the last pricing pass, if a result screen was entered.
    pub fn last_result(&self) -> Option<&PricingResult> {
        self.result.as_ref()
    }

    /// One poll-loop iteration.
    pub fn tick(&mut self) -> Result<(), Error> {
        match self.state {
            UiState::ModeSelect => {
                if let Some(key) = self.keys.poll_key() {
                    self.on_menu_key(key)?;
                }
            }
            UiState::InputParam => {
                let delta = self.quad.drain();
                if delta != 0 {
                    self.on_encoder_delta(delta)?;
                }
                if let Some(key) = self.keys.poll_key() {
                    self.on_edit_key(key)?;
                }
            }
            UiState::DisplayResult => {
                // Keep the bar live while waiting for any key.
                self.bar.write_mask(self.patterns.compute_mask())?;
                if self.keys.poll_key().is_some() {
                    self.enter_mode_select()?;
                }
            }
        }
        Ok(())
    }

    fn on_menu_key(&mut self, key: Key) -> Result<(), Error> {
        match key {
            Key::Digit(d) => {
                if let Some(param) = Parameter::from_digit(d) {
                    self.enter_input(param)?;
                }
                // Other digits: ignored, state unchanged.
            }
            Key::Hash => self.enter_result()?,
            _ => {}
        }
        Ok(())
    }

    fn on_encoder_delta(&mut self, delta: i32) -> Result<(), Error> {
        let edit = match self.edit.as_mut() {
            Some(e) => e,
            None => return Ok(()),
        };
        let max = edit.param.max_value();
        edit.value = (edit.value + delta as f32 * edit.step_size()).clamp(0.0, max);
        let (value, step_idx) = (edit.value, edit.step_index());
        screens::draw_value_line(&mut self.lcd, value, step_idx)
    }

    fn on_edit_key(&mut self, key: Key) -> Result<(), Error> {
        match key {
            Key::Star => {
                if let Some(edit) = self.edit.as_mut() {
                    edit.cycle_step();
                    let (value, step_idx) = (edit.value, edit.step_index());
                    screens::draw_value_line(&mut self.lcd, value, step_idx)?;
                }
            }
            Key::Confirm => {
                if let Some(edit) = self.edit.take() {
                    // Value is already clamped on every step.
                    self.params.commit(edit.param, edit.value);
                }
                self.enter_mode_select()?;
            }
            // "Go" shortcut straight from edit mode: the in-progress
            // value is dropped without commit (matches the original
            // firmware; asymmetric with `C` on purpose).
            Key::Hash => {
                self.edit = None;
                self.enter_result()?;
            }
            Key::Digit(_) => {}
        }
        Ok(())
    }

    fn enter_mode_select(&mut self) -> Result<(), Error> {
        self.state = UiState::ModeSelect;
        self.patterns.clear();
        self.bar.write_mask(self.patterns.compute_mask())?;
        screens::draw_menu(&mut self.lcd)
    }

    fn enter_input(&mut self, param: Parameter) -> Result<(), Error> {
        let edit = EditSession::new(param, self.params.get(param));
        self.state = UiState::InputParam;
        screens::draw_prompt(&mut self.lcd, param)?;
        screens::draw_value_line(&mut self.lcd, edit.value, edit.step_index())?;
        self.edit = Some(edit);
        // Stale rotation from before the edit opened must not move the value.
        self.quad.drain();
        Ok(())
    }

    fn enter_result(&mut self) -> Result<(), Error> {
        let result = PricingResult::compute(&self.params.snapshot());
        self.state = UiState::DisplayResult;
        self.patterns.set_magnitude(result.percent_diff);
        screens::draw_result(&mut self.lcd, &result)?;
        self.bar.write_mask(self.patterns.compute_mask())?;
        self.result = Some(result);
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn keys_mut(&mut self) -> &mut K {
        &mut self.keys
    }

    #[cfg(test)]
    pub(crate) fn lcd_ref(&self) -> &L {
        &self.lcd
    }

    #[cfg(test)]
    pub(crate) fn bar_ref(&self) -> &B {
        &self.bar
    }
}
