use ggez::audio::{self, SoundSource};
use ggez::graphics::Image;
use ggez::Context;
use log::{info, warn};

use crate::session::Effect;

pub const FOOD_IMAGE: &str = "/images/food.png";
pub const SCORE_SOUND: &str = "/sounds/sfx_score.ogg";
pub const DIE_SOUND: &str = "/sounds/sfx_die.ogg";

/// Sprite and sounds. Anything that fails to load stays `None`: the food
/// is drawn as a plain square and the sound is skipped.
pub struct Assets {
    pub food: Option<Image>,
    scored: Option<audio::Source>,
    died: Option<audio::Source>,
}

impl Assets {
    pub fn load(ctx: &mut Context) -> Self {
        let food = match Image::from_path(ctx, FOOD_IMAGE) {
            Ok(image) => Some(image),
            Err(e) => {
                warn!("failed to load {}: {}; drawing placeholder", FOOD_IMAGE, e);
                None
            }
        };
        let assets = Assets {
            food,
            scored: load_sound(ctx, SCORE_SOUND),
            died: load_sound(ctx, DIE_SOUND),
        };
        info!(
            "assets loaded: image {}, sounds {}/2",
            assets.food.is_some(),
            assets.scored.is_some() as u8 + assets.died.is_some() as u8
        );
        assets
    }

    /// Fire and forget. `play` rewinds a source that is already playing.
    pub fn play(&mut self, ctx: &mut Context, effect: Effect) {
        let source = match effect {
            Effect::Scored => self.scored.as_mut(),
            Effect::Died => self.died.as_mut(),
        };
        if let Some(source) = source {
            if let Err(e) = source.play(ctx) {
                warn!("failed to play {:?} sound: {}", effect, e);
            }
        }
    }
}

fn load_sound(ctx: &mut Context, path: &str) -> Option<audio::Source> {
    match audio::Source::new(ctx, path) {
        Ok(source) => Some(source),
        Err(e) => {
            warn!("failed to load {}: {}; playing silence", path, e);
            None
        }
    }
}
