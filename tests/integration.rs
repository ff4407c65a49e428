//! Integration tests: a full scripted session against mock peripherals.
//!
//! These drive the public API only - the same surface the embedded main
//! uses - with mocks that expose their state through shared handles.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use bscalc::bar::magnitude_mask;
use bscalc::encoder::{QuadCounter, QuadDecoder};
use bscalc::error::Error;
use bscalc::hal::{Keypad, Lcd, LedBar};
use bscalc::params::Parameter;
use bscalc::pricing::black_scholes_call;
use bscalc::ui::UiState;
use bscalc::{App, Key};

#[derive(Default)]
struct Screen {
    rows: [String; 2],
    cursor: (usize, usize),
}

impl Screen {
    fn new() -> Self {
        Screen {
            rows: [" ".repeat(16), " ".repeat(16)],
            cursor: (0, 0),
        }
    }
}

#[derive(Clone)]
struct SharedLcd(Rc<RefCell<Screen>>);

impl SharedLcd {
    fn new() -> Self {
        SharedLcd(Rc::new(RefCell::new(Screen::new())))
    }

    fn row(&self, r: usize) -> String {
        self.0.borrow().rows[r].clone()
    }
}

impl Lcd for SharedLcd {
    fn clear(&mut self) -> Result<(), Error> {
        *self.0.borrow_mut() = Screen::new();
        Ok(())
    }

    fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), Error> {
        self.0.borrow_mut().cursor = (row as usize, col as usize);
        Ok(())
    }

    fn write_str(&mut self, s: &str) -> Result<(), Error> {
        let mut screen = self.0.borrow_mut();
        let (row, mut col) = screen.cursor;
        let mut chars: Vec<char> = screen.rows[row].chars().collect();
        for c in s.chars() {
            if col < 16 {
                chars[col] = c;
                col += 1;
            }
        }
        screen.rows[row] = chars.into_iter().collect();
        screen.cursor = (row, col);
        Ok(())
    }
}

#[derive(Clone)]
struct SharedBar(Rc<RefCell<Vec<u8>>>);

impl SharedBar {
    fn new() -> Self {
        SharedBar(Rc::new(RefCell::new(Vec::new())))
    }

    fn last(&self) -> Option<u8> {
        self.0.borrow().last().copied()
    }
}

impl LedBar for SharedBar {
    fn write_mask(&mut self, mask: u8) -> Result<(), Error> {
        self.0.borrow_mut().push(mask);
        Ok(())
    }
}

#[derive(Clone)]
struct SharedKeys(Rc<RefCell<VecDeque<Key>>>);

impl SharedKeys {
    fn new() -> Self {
        SharedKeys(Rc::new(RefCell::new(VecDeque::new())))
    }

    fn press(&self, key: Key) {
        self.0.borrow_mut().push_back(key);
    }
}

impl Keypad for SharedKeys {
    fn poll_key(&mut self) -> Option<Key> {
        self.0.borrow_mut().pop_front()
    }
}

struct Rig<'a> {
    app: App<'a, SharedLcd, SharedBar, SharedKeys>,
    lcd: SharedLcd,
    bar: SharedBar,
    keys: SharedKeys,
}

impl<'a> Rig<'a> {
    fn new(quad: &'a QuadCounter) -> Self {
        let lcd = SharedLcd::new();
        let bar = SharedBar::new();
        let keys = SharedKeys::new();
        let mut app = App::new(lcd.clone(), bar.clone(), keys.clone(), quad);
        app.start().unwrap();
        Rig {
            app,
            lcd,
            bar,
            keys,
        }
    }

    fn press(&mut self, key: Key) {
        self.keys.press(key);
        self.app.tick().unwrap();
    }

    fn tick(&mut self) {
        self.app.tick().unwrap();
    }
}

#[test]
fn full_session_edit_price_and_return() {
    let quad = QuadCounter::new();
    let mut rig = Rig::new(&quad);

    // Boot: main menu, dark bar.
    assert_eq!(rig.lcd.row(0), "1:S 2:K 3:T 6:M ");
    assert_eq!(rig.bar.last(), Some(0));

    // Edit volatility: 0.20 + 3 detent edges at the default 0.1 step.
    rig.press(Key::Digit(4));
    assert_eq!(rig.lcd.row(0), "Set Volatility: ");
    quad.add(3);
    rig.tick();
    assert_eq!(rig.lcd.row(1), "0.50        x0.1");
    rig.press(Key::Confirm);
    assert_eq!(rig.app.state(), UiState::ModeSelect);

    // Price it.
    rig.press(Key::Hash);
    assert_eq!(rig.app.state(), UiState::DisplayResult);

    let result = *rig.app.last_result().unwrap();
    let expected = black_scholes_call(100.0, 100.0, 0.5, 0.05, 0.5);
    assert_eq!(result.price, expected);
    // Market quote is still 0, so the quote sits 100% under the model.
    assert_eq!(result.percent_diff, -100.0);
    assert_eq!(rig.lcd.row(1), "Diff -100.0%    ");
    assert_eq!(rig.bar.last(), Some(magnitude_mask(-100.0)));

    // The bar stays live while we wait...
    let writes = rig.bar.0.borrow().len();
    rig.tick();
    rig.tick();
    assert_eq!(rig.bar.0.borrow().len(), writes + 2);

    // ...until any key brings the menu back.
    rig.press(Key::Digit(0));
    assert_eq!(rig.app.state(), UiState::ModeSelect);
    assert_eq!(rig.lcd.row(0), "1:S 2:K 3:T 6:M ");
    assert_eq!(rig.bar.last(), Some(0));

    // The committed volatility survived the round trip.
    assert_eq!(rig.app.params().get(Parameter::Volatility), 0.5);
}

#[test]
fn hardware_style_encoder_feed_moves_the_value() {
    // Same flow, but the delta comes from raw quadrature edges instead
    // of a bare counter bump - the path the GPIO task exercises.
    let quad = QuadCounter::new();
    let mut rig = Rig::new(&quad);

    rig.press(Key::Digit(2)); // strike, 100.00, step 0.1

    let mut decoder = QuadDecoder::new(0b00);
    // One full clockwise detent: 4 valid edges.
    for phase in [0b01, 0b11, 0b10, 0b00] {
        decoder.on_edge(phase, &quad);
    }
    rig.tick();
    assert_eq!(rig.lcd.row(1), "100.40      x0.1");

    // One full counter-clockwise detent takes it back.
    for phase in [0b10, 0b11, 0b01, 0b00] {
        decoder.on_edge(phase, &quad);
    }
    rig.tick();
    assert_eq!(rig.lcd.row(1), "100.00      x0.1");
}

#[test]
fn discard_shortcut_prices_with_committed_values() {
    let quad = QuadCounter::new();
    let mut rig = Rig::new(&quad);

    rig.press(Key::Digit(1)); // underlying
    quad.add(7); // 100 -> 100.7, uncommitted
    rig.tick();
    assert_eq!(rig.lcd.row(1), "100.70      x0.1");

    // `#` straight from edit mode drops the edit and prices.
    rig.press(Key::Hash);
    assert_eq!(rig.app.state(), UiState::DisplayResult);
    assert_eq!(rig.app.params().get(Parameter::UnderlyingPrice), 100.0);
    let expected = black_scholes_call(100.0, 100.0, 0.5, 0.05, 0.2);
    assert_eq!(rig.app.last_result().unwrap().price, expected);
}
