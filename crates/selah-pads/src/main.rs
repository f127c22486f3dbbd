//! Selah - worship pads player
//!
//! This is the main entry point for the GUI application. It:
//! 1. Starts the playback engine in a background thread
//! 2. Wires the session, the preset bus, and the config layer together
//! 3. Launches the iced GUI application

mod audio;
mod config;
mod ui;

use std::cell::RefCell;

use iced::{Size, Task};

use selah_core::bus::preset_channel;
use selah_core::engine::command_channel;
use selah_core::session::PadSession;
use selah_core::setlist::load_setlist_or_default;
use ui::{app::PadsApp, message::Message};

fn main() -> iced::Result {
    // Initialize logger - set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("selah-pads starting up");

    let config_path = config::default_config_path();
    let cfg = config::load_config(&config_path);
    let setlist = load_setlist_or_default(&config::default_setlist_path());

    // Engine command queue and background engine thread
    let (cmd_tx, cmd_rx) = command_channel();
    let (engine_handle, engine_events) = audio::start_engine(cmd_rx);

    // Session: attach the engine first so the restored cut positions
    // reach it as the first commands
    let mut session = PadSession::new();
    session.attach_engine(cmd_tx);
    session.set_low_cut(cfg.audio.low_cut_hz);
    session.set_high_cut(cfg.audio.high_cut_hz);

    let (preset_publisher, preset_rx) = preset_channel();

    // Wrap the app in a cell so the boot closure can be Fn (required by
    // iced; the boot function is only called once)
    let app_cell = RefCell::new(Some(PadsApp::new(
        cfg,
        config_path,
        session,
        setlist,
        preset_publisher,
        preset_rx,
        Some(engine_events),
    )));

    let result = iced::application(
        move || {
            let app = app_cell.borrow_mut().take().expect("app already taken");
            (app, Task::none())
        },
        update,
        view,
    )
    .subscription(subscription)
    .theme(theme)
    .title("Selah")
    .window_size(Size::new(480.0, 860.0))
    .run();

    // Keep the engine thread alive until the GUI is done
    drop(engine_handle);
    log::info!("selah-pads stopped");

    result
}

/// Update function for iced
fn update(app: &mut PadsApp, message: Message) -> Task<Message> {
    app.update(message)
}

/// View function for iced
fn view(app: &PadsApp) -> iced::Element<'_, Message> {
    app.view()
}

/// Subscription function for iced
fn subscription(app: &PadsApp) -> iced::Subscription<Message> {
    app.subscription()
}

/// Theme function for iced
fn theme(app: &PadsApp) -> iced::Theme {
    app.theme()
}
