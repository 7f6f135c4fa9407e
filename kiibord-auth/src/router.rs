//! Screen routing between the login, registration and code verification screens.

use serde::{Deserialize, Serialize};
use tracing::info;

/// Screen that requested the one-time code currently being entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowContext {
    Login,
    Register,
}

impl FlowContext {
    /// Screen the user returns to when leaving code verification.
    pub fn origin(&self) -> Screen {
        match self {
            Self::Login => Screen::Login,
            Self::Register => Screen::Register,
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Login => "AUTHORIZE",
            Self::Register => "ACTIVATE",
        }
    }
}

impl std::fmt::Display for FlowContext {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Login => write!(f, "login"),
            Self::Register => write!(f, "register"),
        }
    }
}

/// The code verification screen always carries the email the code was sent to and the
/// flow that led there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Login,
    Register,
    Otp { email: String, flow: FlowContext },
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Register => "register",
            Self::Otp { .. } => "otp",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    screen: Screen,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    pub fn new() -> Self {
        Self {
            screen: Screen::Login,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn pending_email(&self) -> Option<&str> {
        match &self.screen {
            Screen::Otp { email, .. } => Some(email),
            _ => None,
        }
    }

    pub fn flow(&self) -> Option<FlowContext> {
        match &self.screen {
            Screen::Otp { flow, .. } => Some(*flow),
            _ => None,
        }
    }

    /// The email must already be validated by the caller.
    pub fn request_otp_from_login(&mut self, email: String) {
        self.request_otp(email, FlowContext::Login);
    }

    /// The email must already be validated by the caller.
    pub fn request_otp_from_register(&mut self, email: String) {
        self.request_otp(email, FlowContext::Register);
    }

    fn request_otp(&mut self, email: String, flow: FlowContext) {
        info!("{} flow: code verification for {}", flow, email);
        self.set(Screen::Otp { email, flow });
    }

    pub fn go_to_register(&mut self) {
        self.set(Screen::Register);
    }

    pub fn go_to_login(&mut self) {
        self.set(Screen::Login);
    }

    /// Does nothing outside of the code verification screen.
    pub fn back_from_otp(&mut self) {
        if let Some(flow) = self.flow() {
            self.set(flow.origin());
        }
    }

    fn set(&mut self, screen: Screen) {
        tracing::debug!("screen {} -> {}", self.screen.name(), screen.name());
        self.screen = screen;
    }
}
