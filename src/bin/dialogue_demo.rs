//! Plays `assets/dialogues/example.json` in a window and exits when it ends

use rocket_clash::assets::AssetRegistry;
use rocket_clash::audio::AudioContext;
use rocket_clash::config::{GameConfig, CONFIG_PATH};
use rocket_clash::director::Director;
use rocket_clash::platform::{calculate_window_scale, init_logging, SdlBackend};
use rocket_clash::scene::{SceneKind, Services};
use rocket_clash::scenes::DialogueScene;
use rocket_clash::settings::SettingsStore;
use rocket_clash::surface::SdlSurface;

const SCRIPT: &str = "dialogues/example.json";

fn main() -> Result<(), String> {
    init_logging();

    let config = GameConfig::load_or_default(CONFIG_PATH);
    let script_path = config.asset_path(SCRIPT);
    let scene = DialogueScene::from_file(&script_path)
        .map_err(|e| format!("Failed to load {}: {}", script_path.display(), e))?;

    let settings = SettingsStore::new(config.settings_file());
    let volume = settings.get_volume();

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let audio_subsystem = sdl_context.audio()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window_scale =
        calculate_window_scale(&video_subsystem, config.screen_width, config.screen_height);
    let window = video_subsystem
        .window(
            "Rocket Clash - Dialogue",
            config.screen_width * window_scale,
            config.screen_height * window_scale,
        )
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    canvas
        .set_logical_size(config.screen_width, config.screen_height)
        .map_err(|e| e.to_string())?;

    let texture_creator = canvas.texture_creator();
    let mut assets = AssetRegistry::new(&texture_creator, config.assets_dir.clone());
    let audio = AudioContext::open(&audio_subsystem, &config.assets_dir, volume);
    let event_pump = sdl_context.event_pump()?;

    let mut director = Director::accepting(&[SceneKind::Dialogue]);
    director.push(Box::new(scene)).map_err(|e| e.to_string())?;

    let mut services = Services::new(audio, settings, config);
    let mut backend = SdlBackend::new(event_pump, SdlSurface::new(&mut canvas, &mut assets));
    director
        .run(&mut backend, &mut services)
        .map_err(|e| e.to_string())?;

    Ok(())
}
