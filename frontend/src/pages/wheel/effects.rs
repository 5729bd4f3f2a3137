use shared::catalog::PrizeTier;
use shared::constants::{
    SOUND_CONSOLATION_PRIZE, SOUND_GRAND_PRIZE, SOUND_NO_PRIZE, SOUND_SECOND_PRIZE,
};
use web_sys::HtmlAudioElement;

use crate::config::get_asset_url;

/// Plays the celebration sound for a won tier. `None`-tier prizes stay
/// silent, matching the effect table the catalog was designed around.
pub fn play_tier_sound(tier: PrizeTier) {
    let path = match tier {
        PrizeTier::Grand => SOUND_GRAND_PRIZE,
        PrizeTier::Secondary => SOUND_SECOND_PRIZE,
        PrizeTier::Consolation => SOUND_CONSOLATION_PRIZE,
        PrizeTier::None => return,
    };
    play(path);
}

pub fn play_no_prize_sound() {
    play(SOUND_NO_PRIZE);
}

fn play(path: &str) {
    match HtmlAudioElement::new_with_src(&get_asset_url(path)) {
        // Playback can be blocked until the user interacts with the page;
        // the returned promise is dropped on purpose.
        Ok(audio) => {
            let _ = audio.play();
        }
        Err(err) => log::error!("failed to create audio element: {:?}", err),
    }
}
