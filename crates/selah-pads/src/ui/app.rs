//! Main iced application for Selah
//!
//! Owns the playback session, the selection visuals, and the screen
//! state (active view, held preset, upsell modal), and dispatches
//! messages to the feature handlers.

use std::path::PathBuf;
use std::sync::mpsc::Receiver;
use std::sync::{Arc, Mutex};

use iced::widget::{button, column, container, text, Space};
use iced::{Element, Length, Subscription, Task, Theme};

use selah_core::bus::PresetPublisher;
use selah_core::engine::EngineEvent;
use selah_core::entitlement::Entitlements;
use selah_core::session::PadSession;
use selah_core::setlist::SetlistItem;
use selah_widgets::mpsc_subscription;
use selah_widgets::theme::BACKGROUND;

use crate::config::PadsConfig;

use super::handlers;
use super::message::Message;
use super::state::{SelectionVisuals, View};
use super::{pad_view, premium_modal, setlist_view};

/// Application state
pub struct PadsApp {
    /// Playback session (selection state + engine forwarding)
    pub(crate) session: PadSession,
    /// Per-control visual state reconciled from session notifications
    pub(crate) visuals: SelectionVisuals,
    /// Premium entitlement, re-checked on every pad tap
    pub(crate) entitlements: Entitlements,
    /// Saved presets shown on the setlist screen
    pub(crate) setlist: Vec<SetlistItem>,
    /// Sending half of the preset bus (used by the setlist screen)
    pub(crate) preset_publisher: PresetPublisher,
    /// Receiving half of the preset bus, polled by the subscription
    preset_rx: Arc<Mutex<Receiver<SetlistItem>>>,
    /// Engine lifecycle events, when an engine thread is running
    engine_events: Option<Arc<Mutex<Receiver<EngineEvent>>>>,
    /// Active view
    pub(crate) current_view: View,
    /// Preset held while the pad screen is not visible (last one wins)
    pub(crate) pending_preset: Option<SetlistItem>,
    /// Whether the premium upsell modal is showing
    pub(crate) premium_modal_open: bool,
    /// Loaded configuration (persisted on unlock)
    pub(crate) config: PadsConfig,
    pub(crate) config_path: PathBuf,
}

impl PadsApp {
    /// Create the application state
    ///
    /// The session arrives fully wired (engine attached, cut positions
    /// restored); this constructor only takes ownership.
    pub fn new(
        config: PadsConfig,
        config_path: PathBuf,
        session: PadSession,
        setlist: Vec<SetlistItem>,
        preset_publisher: PresetPublisher,
        preset_rx: Receiver<SetlistItem>,
        engine_events: Option<Receiver<EngineEvent>>,
    ) -> Self {
        let entitlements = Entitlements::new(config.premium_unlocked);
        Self {
            session,
            visuals: SelectionVisuals::new(),
            entitlements,
            setlist,
            preset_publisher,
            preset_rx: Arc::new(Mutex::new(preset_rx)),
            engine_events: engine_events.map(|rx| Arc::new(Mutex::new(rx))),
            current_view: View::Pads,
            pending_preset: None,
            premium_modal_open: false,
            config,
            config_path,
        }
    }

    /// Whether the pad screen is currently showing
    ///
    /// This is the visibility check gating immediate preset application.
    pub fn is_pad_view_active(&self) -> bool {
        self.current_view == View::Pads
    }

    /// Update application state
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SwitchView(view) => handlers::lifecycle::handle_switch_view(self, view),
            Message::ToneSelected(tone) => handlers::pads::handle_tone_selected(self, tone),
            Message::PadSelected(style) => handlers::pads::handle_pad_selected(self, style),
            Message::LowCutChanged(hz) => handlers::pads::handle_low_cut_changed(self, hz),
            Message::HighCutChanged(hz) => handlers::pads::handle_high_cut_changed(self, hz),
            Message::StopTapped => handlers::pads::handle_stop(self),
            Message::SetlistEntryChosen(index) => {
                handlers::presets::handle_setlist_entry_chosen(self, index)
            }
            Message::PresetDelivered(preset) => {
                handlers::presets::handle_preset_delivered(self, preset)
            }
            Message::ClosePremiumModal => handlers::pads::handle_close_premium_modal(self),
            Message::UnlockPremium => handlers::pads::handle_unlock_premium(self),
            Message::WindowFocused => handlers::lifecycle::handle_window_focused(self),
            Message::Engine(event) => handlers::lifecycle::handle_engine_event(self, event),
        }
    }

    /// Render the application
    pub fn view(&self) -> Element<'_, Message> {
        let body = match self.current_view {
            View::Pads => pad_view::view(self),
            View::Setlist => setlist_view::view(self),
        };

        let base: Element<'_, Message> = container(column![self.view_header(), body].spacing(16))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(16)
            .style(|_theme| container::Style {
                background: Some(BACKGROUND.into()),
                ..Default::default()
            })
            .into();

        if self.premium_modal_open {
            premium_modal::with_modal_overlay(base, premium_modal::view(), Message::ClosePremiumModal)
        } else {
            base
        }
    }

    /// View header with navigation tabs
    fn view_header(&self) -> Element<'_, Message> {
        let pads_btn = button(text("Pads"))
            .on_press(Message::SwitchView(View::Pads))
            .style(if self.current_view == View::Pads {
                button::primary
            } else {
                button::secondary
            });

        let setlist_btn = button(text("Setlist"))
            .on_press(Message::SwitchView(View::Setlist))
            .style(if self.current_view == View::Setlist {
                button::primary
            } else {
                button::secondary
            });

        iced::widget::row![
            text("selah").size(24),
            Space::new().width(Length::Fill),
            pads_btn,
            setlist_btn,
        ]
        .spacing(8)
        .into()
    }

    /// Subscriptions: preset bus, engine events, window focus
    pub fn subscription(&self) -> Subscription<Message> {
        let mut subs = vec![
            mpsc_subscription(self.preset_rx.clone()).map(Message::PresetDelivered),
            iced::event::listen_with(|event, _status, _window| match event {
                iced::Event::Window(iced::window::Event::Focused) => Some(Message::WindowFocused),
                _ => None,
            }),
        ];

        if let Some(events) = &self.engine_events {
            subs.push(mpsc_subscription(events.clone()).map(Message::Engine));
        }

        Subscription::batch(subs)
    }

    /// Theme function for iced
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

#[cfg(test)]
impl PadsApp {
    /// App wired for handler tests: in-memory bus, no engine thread
    pub(crate) fn for_tests() -> Self {
        Self::for_tests_with_session(PadSession::new())
    }

    pub(crate) fn for_tests_with_session(session: PadSession) -> Self {
        let (publisher, rx) = selah_core::bus::preset_channel();
        Self::new(
            PadsConfig::default(),
            std::env::temp_dir().join("selah-test").join("config.yaml"),
            session,
            selah_core::setlist::default_setlist(),
            publisher,
            rx,
            None,
        )
    }

    /// Pop one preset off the bus, if any (test-only)
    pub(crate) fn try_recv_preset(&self) -> Option<SetlistItem> {
        self.preset_rx.lock().ok().and_then(|rx| rx.try_recv().ok())
    }
}
