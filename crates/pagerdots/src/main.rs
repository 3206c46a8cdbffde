use pagerdots::config;
use pagerdots::gui::app::AppModel;
use pagerdots::gui::strip::State;
use pagerdots::sys::runtime;
use relm4::prelude::*;

fn main() {
    env_logger::init();

    if let Err(e) = config::write_default_config() {
        log::warn!("Failed to write the default config: {}", e);
    }
    let config = config::load_or_default();
    let state = State::new(&config);

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx);

    let app = RelmApp::new("dev.pagerdots.PagerDots");

    app.run::<AppModel>((state, rx));
}
