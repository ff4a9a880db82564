use rocket_clash::assets::{AssetRegistry, MAIN_MENU_BACKGROUND};
use rocket_clash::audio::AudioContext;
use rocket_clash::config::{GameConfig, CONFIG_PATH};
use rocket_clash::director::Director;
use rocket_clash::platform::{calculate_window_scale, init_logging, SdlBackend};
use rocket_clash::scene::Services;
use rocket_clash::scenes::MenuScene;
use rocket_clash::settings::SettingsStore;
use rocket_clash::surface::SdlSurface;

fn main() -> Result<(), String> {
    init_logging();

    let config = GameConfig::load_or_default(CONFIG_PATH);
    let settings = SettingsStore::new(config.settings_file());
    let volume = settings.get_volume();
    log::info!(
        "Settings: {} (volume {:.1})",
        settings.path().display(),
        volume
    );

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let audio_subsystem = sdl_context.audio()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    // Calculate window scale based on monitor size
    let window_scale =
        calculate_window_scale(&video_subsystem, config.screen_width, config.screen_height);
    let window_width = config.screen_width * window_scale;
    let window_height = config.screen_height * window_scale;
    log::info!(
        "Monitor scale: {}x (window: {}x{})",
        window_scale,
        window_width,
        window_height
    );

    let window = video_subsystem
        .window(&config.window_title, window_width, window_height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

    // Logical size keeps layout and pointer coordinates resolution-independent
    canvas
        .set_logical_size(config.screen_width, config.screen_height)
        .map_err(|e| e.to_string())?;

    let texture_creator = canvas.texture_creator();
    let mut assets = AssetRegistry::new(&texture_creator, config.assets_dir.clone());
    assets.preload(&[MAIN_MENU_BACKGROUND]);

    let audio = AudioContext::open(&audio_subsystem, &config.assets_dir, volume);
    let event_pump = sdl_context.event_pump()?;

    let mut director = Director::new();
    director
        .push(Box::new(MenuScene::new(&config)))
        .map_err(|e| e.to_string())?;

    let mut services = Services::new(audio, settings, config);
    let mut backend = SdlBackend::new(event_pump, SdlSurface::new(&mut canvas, &mut assets));

    director
        .run(&mut backend, &mut services)
        .map_err(|e| e.to_string())?;

    log::info!("Shutting down");
    Ok(())
}
