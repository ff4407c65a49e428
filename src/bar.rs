//! LED bar-graph pattern engine.
//!
//! Produces the 8-bit mask for the external LED bar (bit 7 = leftmost
//! segment). Two mutually exclusive families:
//!
//! - **Animation**: four canned sequences, each with its own step cursor.
//!   Reset happens on selection; advancement happens on each
//!   [`BarGraph::compute_mask`] call.
//! - **Magnitude**: a percent value mapped to a count of contiguous
//!   segments lit from the left.

/// What the bar is currently showing.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BarMode {
    /// All segments dark.
    Off,
    /// Animation family, index 0..=3.
    Animation(usize),
    /// Magnitude family: percent difference to display.
    Magnitude(f32),
}

/// Number of animation sequences.
pub const ANIMATION_COUNT: usize = 4;

const SEQ_STEADY: [u8; 1] = [0b1010_1010];
const SEQ_ALTERNATE: [u8; 4] = [0b1010_1010, 0b1010_1010, 0b0101_0101, 0b0101_0101];
const SEQ_BOUNCE: [u8; 6] = [
    0b0001_1000,
    0b0010_0100,
    0b0100_0010,
    0b1000_0001,
    0b0100_0010,
    0b0010_0100,
];

/// Map a percent difference to a magnitude mask.
///
/// `|pct|` is clamped to `[0, 100]` and mapped to `floor(pct/10)` bars,
/// clamped to `[1, 8]` - any nonzero percent lights at least one bar,
/// exactly zero lights none. Bars fill from the most-significant bit.
pub fn magnitude_mask(pct: f32) -> u8 {
    let mag = if pct < 0.0 { -pct } else { pct };
    if mag == 0.0 {
        return 0;
    }
    let clamped = if mag > 100.0 { 100.0 } else { mag };
    let bars = ((clamped / 10.0) as u32).clamp(1, 8);
    0xFFu8 << (8 - bars)
}

/// Pattern engine state: active mode plus one step cursor per animation.
pub struct BarGraph {
    mode: BarMode,
    steps: [usize; ANIMATION_COUNT],
}

impl BarGraph {
    pub fn new() -> Self {
        BarGraph {
            mode: BarMode::Off,
            steps: [0; ANIMATION_COUNT],
        }
    }

    pub fn mode(&self) -> BarMode {
        self.mode
    }

    /// Switch to an animation. Re-selecting the active index resets its
    /// cursor to 0; other cursors are never touched. Out-of-range
    /// indexes are ignored.
    pub fn select_animation(&mut self, index: usize) {
        if index >= ANIMATION_COUNT {
            return;
        }
        if self.mode == BarMode::Animation(index) {
            self.steps[index] = 0;
        }
        self.mode = BarMode::Animation(index);
    }

    /// Switch to magnitude mode showing `pct`.
    pub fn set_magnitude(&mut self, pct: f32) {
        self.mode = BarMode::Magnitude(pct);
    }

    /// Turn the bar off.
    pub fn clear(&mut self) {
        self.mode = BarMode::Off;
    }

    /// Current output mask. Animation cursors advance by one (wrapping
    /// modulo their own sequence length) on every call; magnitude and
    /// off modes are pure.
    pub fn compute_mask(&mut self) -> u8 {
        match self.mode {
            BarMode::Off => 0,
            BarMode::Magnitude(pct) => magnitude_mask(pct),
            BarMode::Animation(0) => SEQ_STEADY[self.advance(0, SEQ_STEADY.len())],
            BarMode::Animation(1) => SEQ_ALTERNATE[self.advance(1, SEQ_ALTERNATE.len())],
            // Free-running counter: the cursor value itself is the mask.
            BarMode::Animation(2) => self.advance(2, 255) as u8,
            BarMode::Animation(3) => SEQ_BOUNCE[self.advance(3, SEQ_BOUNCE.len())],
            BarMode::Animation(_) => 0,
        }
    }

    fn advance(&mut self, index: usize, len: usize) -> usize {
        let step = self.steps[index];
        self.steps[index] = (step + 1) % len;
        step
    }
}

impl Default for BarGraph {
    fn default() -> Self {
        Self::new()
    }
}
