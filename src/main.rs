//! Krystal demo
//!
//! - left click: spark burst at the cursor (with a sound when one is found)
//! - right click: random blood splatter under the cursor
//! - arrow keys: pan the view
//! - Esc: quit (unless disabled in the config)

use krystal::asset::SoundHandle;
use krystal::backend::{MqAssetLoader, MqRenderer};
use krystal::clock::SystemClock;
use krystal::config::EngineConfig;
use krystal::content::{self, ContentIndex};
use krystal::geom::Point;
use krystal::{Engine, VERSION, logger};
use macroquad::audio::{play_sound_once, Sound};
use macroquad::prelude::*;
use ::rand::seq::SliceRandom;

/// Pixels the view moves per frame while an arrow key is held
const SCROLL_SPEED: i32 = 4;

/// Layer for blood decals (drawn under effects)
const DECAL_LAYER: u32 = 0;
const EFFECT_LAYER: u32 = 1;

/// Sound played with every spark burst
const SPARK_SOUND: &str = "boing_x";

fn load_config() -> EngineConfig {
    EngineConfig::default_path()
        .map(|path| EngineConfig::load_or_default(&path))
        .unwrap_or_default()
}

fn window_conf() -> Conf {
    let config = load_config();
    Conf {
        window_title: format!("{} v{}", config.window.title, VERSION),
        window_width: config.window.width as i32,
        window_height: config.window.height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    if let Err(e) = run().await {
        tracing::error!(error = %e, "demo stopped");
    }
}

async fn run() -> anyhow::Result<()> {
    let config = load_config();
    logger::init(config.log_filter.as_deref())?;
    tracing::info!(version = VERSION, sprite_dir = %config.sprite_dir.display(), "starting");

    let loader = MqAssetLoader::new(&config.sprite_dir, &config.sound_dir);
    let mut engine = Engine::from_config(loader, Box::new(SystemClock::new()), &config);
    let content = content::register_all(&mut engine);
    // without the clip sparks stay silent
    let spark_sound = engine.acquire_sound(SPARK_SOUND).ok();
    let mut renderer = MqRenderer;

    loop {
        if config.window.escape_closes && is_key_pressed(KeyCode::Escape) {
            break;
        }

        handle_input(&mut engine, &content, spark_sound.as_ref());

        engine.update();
        clear_background(BLACK);
        engine.draw(&mut renderer);

        next_frame().await;
    }

    engine.shutdown();
    Ok(())
}

fn handle_input(
    engine: &mut Engine<MqAssetLoader>,
    content: &ContentIndex,
    spark_sound: Option<&SoundHandle<Sound>>,
) {
    let mut scroll = Point::ZERO;
    if is_key_down(KeyCode::Left) {
        scroll.x -= SCROLL_SPEED;
    }
    if is_key_down(KeyCode::Right) {
        scroll.x += SCROLL_SPEED;
    }
    if is_key_down(KeyCode::Up) {
        scroll.y -= SCROLL_SPEED;
    }
    if is_key_down(KeyCode::Down) {
        scroll.y += SCROLL_SPEED;
    }
    if scroll != Point::ZERO {
        engine.view_mut().scroll(scroll);
    }

    let (mx, my) = mouse_position();
    let cursor = engine.view().to_world(Point::new(mx as i32, my as i32));

    if is_mouse_button_pressed(MouseButton::Left) {
        if engine.spawn_effect(content.spark, cursor, EFFECT_LAYER).is_some() {
            if let Some(sound) = spark_sound {
                play_sound_once(sound.audio());
            }
        }
    }

    if is_mouse_button_pressed(MouseButton::Right) {
        if let Some(&index) = content.blood.choose(&mut ::rand::thread_rng()) {
            // decal origin is its top-left corner; center the 25x25 splat on the cursor
            engine.spawn_decal(index, cursor - Point::new(12, 12), DECAL_LAYER);
        }
    }
}
