use std::time::Duration;

/// Number of digits of a one-time code.
pub const OTP_LENGTH: usize = 6;

/// Minimum number of characters of a battle tag, after trimming.
pub const USERNAME_MIN_LEN: usize = 2;

pub const DEFAULT_RESEND_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowConfig {
    /// Minimum time the resend control stays busy after being pressed.
    pub resend_delay: Duration,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            resend_delay: DEFAULT_RESEND_DELAY,
        }
    }
}
