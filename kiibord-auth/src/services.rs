//! Collaborators the sign-in flow delegates to: one-time code issuance and verification,
//! and persistence of the theme preference.

use std::sync::Mutex;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::router::FlowContext;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OtpRequest {
    pub email: String,
    pub flow: FlowContext,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OtpVerification {
    pub email: String,
    pub flow: FlowContext,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error("Failed to deliver the verification code: {0}")]
    DeliveryFailed(String),
    #[error("Invalid verification code")]
    InvalidCode,
    #[error("Verification code expired, request a new one")]
    ExpiredCode,
    #[error("Too many attempts, try again later")]
    RateLimited,
    #[error("Service unavailable: {0}")]
    Unavailable(String),
}

/// Delivers a one-time code to an email address.
#[async_trait]
pub trait OtpIssuer: Send + Sync {
    /// Resolves once the code is dispatched.
    async fn send_code(&self, request: &OtpRequest) -> Result<(), ServiceError>;
}

/// Checks a one-time code. Expiry, lockout and attempt limits are the verifier's policy.
#[async_trait]
pub trait OtpVerifier: Send + Sync {
    async fn verify(&self, verification: &OtpVerification) -> Result<(), ServiceError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn theme(self) -> kiibord_ui::theme::Theme {
        match self {
            Self::Light => kiibord_ui::theme::Theme::light(),
            Self::Dark => kiibord_ui::theme::Theme::dark(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ThemeStoreError {
    #[error("Theme store io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Theme store format error: {0}")]
    Format(String),
}

/// Key-value persistence of the user's theme preference.
pub trait ThemeStore: Send + Sync {
    fn load(&self) -> Option<ThemeMode>;
    fn store(&self, mode: ThemeMode) -> Result<(), ThemeStoreError>;
}

/// Stand-in for a real delivery and verification backend: requests are only logged.
/// Without an accepted code every well-formed code is accepted.
#[derive(Debug, Clone, Default)]
pub struct DebugOtpService {
    accepted_code: Option<String>,
}

impl DebugOtpService {
    pub fn new(accepted_code: Option<String>) -> Self {
        Self { accepted_code }
    }
}

#[async_trait]
impl OtpIssuer for DebugOtpService {
    async fn send_code(&self, request: &OtpRequest) -> Result<(), ServiceError> {
        info!("debug: code requested for {} ({})", request.email, request.flow);
        Ok(())
    }
}

#[async_trait]
impl OtpVerifier for DebugOtpService {
    async fn verify(&self, verification: &OtpVerification) -> Result<(), ServiceError> {
        debug!(
            "debug: verifying code for {} ({})",
            verification.email, verification.flow
        );
        match &self.accepted_code {
            Some(code) if code != &verification.code => {
                warn!("debug: rejected code for {}", verification.email);
                Err(ServiceError::InvalidCode)
            }
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    mode: Mutex<Option<ThemeMode>>,
}

impl MemoryThemeStore {
    pub fn new(mode: Option<ThemeMode>) -> Self {
        Self {
            mode: Mutex::new(mode),
        }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Option<ThemeMode> {
        self.mode.lock().ok().and_then(|mode| *mode)
    }

    fn store(&self, mode: ThemeMode) -> Result<(), ThemeStoreError> {
        let mut guard = self
            .mode
            .lock()
            .map_err(|e| ThemeStoreError::Format(e.to_string()))?;
        *guard = Some(mode);
        Ok(())
    }
}
