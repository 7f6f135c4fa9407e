use std::sync::Arc;

use iced::{keyboard, Subscription, Task};
use kiibord_ui::{theme::Theme, widget::Element};
use tracing::{info, warn};

use crate::{
    config::FlowConfig,
    router::{Router, Screen},
    services::{OtpIssuer, OtpVerifier, ThemeMode, ThemeStore},
    views::{login_view, otp_view, register_view},
};
pub use message::{Message, Msg};

pub mod message;
pub mod update;
pub mod views;

/// Generation of the mounted view. Bumped on every screen change, results of async work
/// started under an older generation are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Epoch(u64);

/// Injected collaborators.
#[derive(Clone)]
pub struct Services {
    pub issuer: Arc<dyn OtpIssuer>,
    pub verifier: Arc<dyn OtpVerifier>,
    pub theme_store: Arc<dyn ThemeStore>,
}

/// Main application state
pub struct State {
    pub router: Router,
    pub views: views::ViewsState,
    pub theme: ThemeMode,
    pub config: FlowConfig,
    epoch: Epoch,
    services: Services,
}

impl State {
    pub fn new(config: FlowConfig, services: Services) -> (Self, Task<Msg>) {
        let theme = services.theme_store.load().unwrap_or_default();
        info!("starting sign-in flow, theme: {:?}", theme);
        let state = Self {
            router: Router::new(),
            views: views::ViewsState::default(),
            theme,
            config,
            epoch: Epoch::default(),
            services,
        };
        let focus = crate::views::focus_screen(state.router.screen());
        (state, focus)
    }

    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    pub fn title(&self) -> String {
        "KIIBORD".to_string()
    }

    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    /// Backspace is only listened to while a code is entered: a text input cannot report a key
    /// press that leaves its contents unchanged, as on an empty slot.
    pub fn subscription(&self) -> Subscription<Msg> {
        if matches!(self.router.screen(), Screen::Otp { .. }) {
            iced::event::listen_with(|event, _status, _window| match event {
                iced::Event::Keyboard(keyboard::Event::KeyPressed {
                    key: keyboard::Key::Named(keyboard::key::Named::Backspace),
                    ..
                }) => Some(Msg::OtpBackspace),
                _ => None,
            })
        } else {
            Subscription::none()
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        match self.router.screen() {
            Screen::Login => login_view(self),
            Screen::Register => register_view(self),
            Screen::Otp { email, flow } => otp_view(self, email, *flow),
        }
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        if let Err(e) = self.services.theme_store.store(self.theme) {
            warn!("Failed to persist theme preference: {}", e);
        }
    }
}
