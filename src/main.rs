use amphibians::client::config::ClientConfig;
use amphibians::client::gui::app::AmphibiansApp;
use iced::Application;

fn main() -> anyhow::Result<()> {
    // load environment from .env (optional)
    let _ = dotenvy::dotenv();
    let config = ClientConfig::from_env();

    std::env::set_var("RUST_LOG", &config.log_level);
    env_logger::init();
    log::info!("Starting Amphibians, endpoint {}", config.base_url);

    let mut settings = iced::Settings::with_flags(config.clone());
    settings.window.size = iced::Size::new(config.window_width, config.window_height);
    AmphibiansApp::run(settings).map_err(|e| anyhow::anyhow!("GUI terminated with error: {}", e))?;
    Ok(())
}
