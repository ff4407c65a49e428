//! Rotary encoder edge task.
//!
//! The two phase lines are watched with GPIOTE; every edge on either
//! line re-samples both and feeds the transition to the decoder, which
//! bumps the shared [`QuadCounter`]. The main loop drains the counter
//! once per poll - that swap is the only synchronization between this
//! task and the UI.

use defmt::debug;
use embassy_futures::select::{select, Either};
use embassy_nrf::gpio::Input;

use crate::encoder::{QuadCounter, QuadDecoder};

fn sample(a: &Input<'_>, b: &Input<'_>) -> u8 {
    ((a.is_high() as u8) << 1) | (b.is_high() as u8)
}

/// Run the encoder edge loop forever.
pub async fn encoder_task(mut a: Input<'static>, mut b: Input<'static>, counter: &'static QuadCounter) -> ! {
    let mut decoder = QuadDecoder::new(sample(&a, &b));
    debug!("encoder: initial phase {=u8:b}", decoder.phase());

    loop {
        match select(a.wait_for_any_edge(), b.wait_for_any_edge()).await {
            Either::First(()) | Either::Second(()) => {
                decoder.on_edge(sample(&a, &b), counter);
            }
        }
    }
}
