//! Demo content
//!
//! Templates the demo registers at startup:
//! - `DCL_BLOOD_1..16` over the `blood25` sheet
//! - `eff_spark` particle burst
//! - `eff_test` effect that dies on spawn

pub mod blood;
pub mod spark;
pub mod stillborn;

pub use blood::{BLOOD_SPRITE, BLOOD_VARIANTS, blood_decal_name};
pub use spark::{SPARK_NAME, Spark};
pub use stillborn::{STILLBORN_NAME, Stillborn};

use crate::asset::AssetLoader;
use crate::game::Engine;

/// Template indices handed back by [`register_all`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentIndex {
    /// Successfully registered blood decals, in registration order
    pub blood: Vec<usize>,
    pub spark: usize,
    pub stillborn: usize,
}

pub fn register_all<L>(engine: &mut Engine<L>) -> ContentIndex
where
    L: AssetLoader,
    L::Texture: 'static,
{
    let blood = (0..BLOOD_VARIANTS)
        .filter_map(|frame| {
            engine.register_decal(&blood_decal_name(frame + 1), BLOOD_SPRITE, frame)
        })
        .collect::<Vec<_>>();
    if blood.is_empty() {
        tracing::warn!(sprite = BLOOD_SPRITE, "no blood decals available");
    }

    ContentIndex {
        blood,
        spark: engine.register_default::<Spark>(SPARK_NAME),
        stillborn: engine.register_default::<Stillborn>(STILLBORN_NAME),
    }
}
