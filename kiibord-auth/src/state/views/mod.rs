pub mod field;
pub mod login;
pub mod otp;
pub mod register;

pub use field::Field;
pub use login::LoginForm;
pub use otp::{OtpEntry, OtpForm, ResendTicket};
pub use register::{RegisterField, RegisterForm, Registration};

use crate::router::Screen;

/// Per screen form state.
#[derive(Debug, Clone, Default)]
pub struct ViewsState {
    pub login: LoginForm,
    pub register: RegisterForm,
    pub otp: OtpForm,
}

impl ViewsState {
    /// Resets the state of the screen being displayed, the way a freshly mounted view starts.
    pub fn mount(&mut self, screen: &Screen) {
        match screen {
            Screen::Login => self.login = LoginForm::default(),
            Screen::Register => self.register = RegisterForm::default(),
            Screen::Otp { .. } => self.otp = OtpForm::default(),
        }
    }
}
