use super::{views::ResendTicket, Epoch};
use crate::services::{OtpRequest, ServiceError};

/// All application messages
#[derive(Debug, Clone)]
pub enum Msg {
    // Login
    LoginUpdateEmail(String),
    LoginSubmit,
    LoginSwitchToRegister,

    // Registration
    RegisterUpdateUsername(String),
    RegisterUpdateEmail(String),
    RegisterSubmit,
    RegisterSwitchToLogin,

    // Code issuance, answers a login or registration submit
    CodeRequested(Epoch, OtpRequest, Result<(), ServiceError>),

    // Code verification
    OtpUpdateDigit(usize, String),
    OtpBackspace,
    OtpSubmit,
    OtpResend,
    OtpResent(Epoch, ResendTicket, Result<(), ServiceError>),
    OtpVerified(Epoch, Result<(), ServiceError>),
    OtpBack,

    ThemeToggle,
}

/// Type alias for Msg (used in views)
pub type Message = Msg;
