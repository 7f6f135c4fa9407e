use std::{sync::Arc, time::Duration};

use iced::Task;
use tracing::{debug, info, trace, warn};

use super::{message::Msg, views::ResendTicket, Epoch, State};
use crate::{
    router::{FlowContext, Router},
    services::{OtpIssuer, OtpRequest, OtpVerification, ServiceError},
    views::{focus_digit, focus_screen},
};

// Update routing logic
impl State {
    #[rustfmt::skip]
    pub fn update(&mut self, message: Msg) -> Task<Msg> {
        trace!("received message: {:?}", message);
        match message {
            // Login
            Msg::LoginUpdateEmail(email) => self.views.login.on_update_email(email),
            Msg::LoginSubmit => return self.on_login_submit(),
            Msg::LoginSwitchToRegister => return self.navigate(Router::go_to_register),

            // Registration
            Msg::RegisterUpdateUsername(username) => self.views.register.on_update_username(username),
            Msg::RegisterUpdateEmail(email) => self.views.register.on_update_email(email),
            Msg::RegisterSubmit => return self.on_register_submit(),
            Msg::RegisterSwitchToLogin => return self.navigate(Router::go_to_login),

            Msg::CodeRequested(epoch, request, res) => return self.on_code_requested(epoch, request, res),

            // Code verification
            Msg::OtpUpdateDigit(slot, value) => return self.on_otp_update_digit(slot, value),
            Msg::OtpBackspace => return self.on_otp_backspace(),
            Msg::OtpSubmit => return self.on_otp_submit(),
            Msg::OtpResend => return self.on_otp_resend(),
            Msg::OtpResent(epoch, ticket, res) => self.on_otp_resent(epoch, ticket, res),
            Msg::OtpVerified(epoch, res) => self.on_otp_verified(epoch, res),
            Msg::OtpBack => return self.navigate(Router::back_from_otp),

            Msg::ThemeToggle => self.toggle_theme(),
        }
        Task::none()
    }

    /// Applies a router transition. The view being left is torn down: its pending async
    /// results become stale, and the destination view starts from a fresh state.
    fn navigate(&mut self, transition: impl FnOnce(&mut Router)) -> Task<Msg> {
        let previous = self.router.screen().clone();
        transition(&mut self.router);
        if self.router.screen() == &previous {
            return Task::none();
        }
        self.epoch = Epoch(self.epoch.0 + 1);
        self.views.mount(self.router.screen());
        focus_screen(self.router.screen())
    }

    fn is_current(&self, epoch: Epoch) -> bool {
        if epoch != self.epoch {
            debug!("dropping result of a torn down view");
            return false;
        }
        true
    }
}

// Login and registration
impl State {
    fn on_login_submit(&mut self) -> Task<Msg> {
        match self.views.login.submit() {
            Some(email) => self.request_code(OtpRequest {
                email,
                flow: FlowContext::Login,
            }),
            None => Task::none(),
        }
    }

    fn on_register_submit(&mut self) -> Task<Msg> {
        match self.views.register.submit() {
            Some(registration) => {
                info!("registration requested for {}", registration.username);
                self.request_code(OtpRequest {
                    email: registration.email,
                    flow: FlowContext::Register,
                })
            }
            None => Task::none(),
        }
    }

    fn request_code(&self, request: OtpRequest) -> Task<Msg> {
        debug!("requesting code for {} ({})", request.email, request.flow);
        let issuer = self.services.issuer.clone();
        let epoch = self.epoch;
        Task::perform(
            async move {
                let res = issuer.send_code(&request).await;
                (request, res)
            },
            move |(request, res)| Msg::CodeRequested(epoch, request, res),
        )
    }

    fn on_code_requested(
        &mut self,
        epoch: Epoch,
        request: OtpRequest,
        res: Result<(), ServiceError>,
    ) -> Task<Msg> {
        if !self.is_current(epoch) {
            return Task::none();
        }
        match (res, request.flow) {
            (Ok(()), FlowContext::Login) => {
                self.navigate(move |r| r.request_otp_from_login(request.email))
            }
            (Ok(()), FlowContext::Register) => {
                self.navigate(move |r| r.request_otp_from_register(request.email))
            }
            (Err(e), FlowContext::Login) => {
                warn!("Failed to request a code for {}: {}", request.email, e);
                self.views.login.on_code_request_failed(&e);
                Task::none()
            }
            (Err(e), FlowContext::Register) => {
                warn!("Failed to request a code for {}: {}", request.email, e);
                self.views.register.on_code_request_failed(&e);
                Task::none()
            }
        }
    }
}

// Code verification
impl State {
    fn on_otp_update_digit(&mut self, slot: usize, value: String) -> Task<Msg> {
        match self.views.otp.on_update_digit(slot, &value) {
            Some(next) => focus_digit(next),
            None => Task::none(),
        }
    }

    fn on_otp_backspace(&mut self) -> Task<Msg> {
        match self.views.otp.on_backspace() {
            Some(previous) => focus_digit(previous),
            None => Task::none(),
        }
    }

    fn on_otp_submit(&mut self) -> Task<Msg> {
        let (Some(email), Some(flow)) = (self.router.pending_email(), self.router.flow()) else {
            return Task::none();
        };
        let Some(code) = self.views.otp.submit() else {
            debug!("otp: submit blocked, code incomplete");
            return Task::none();
        };
        let verification = OtpVerification {
            email: email.to_string(),
            flow,
            code,
        };
        info!("verifying code for {} ({})", verification.email, flow);
        let verifier = self.services.verifier.clone();
        let epoch = self.epoch;
        Task::perform(
            async move { verifier.verify(&verification).await },
            move |res| Msg::OtpVerified(epoch, res),
        )
    }

    fn on_otp_verified(&mut self, epoch: Epoch, res: Result<(), ServiceError>) {
        if !self.is_current(epoch) {
            return;
        }
        match &res {
            Ok(()) => info!(
                "code verified for {}",
                self.router.pending_email().unwrap_or_default()
            ),
            Err(e) => warn!("code verification failed: {}", e),
        }
        self.views.otp.on_verified(res);
    }

    fn on_otp_resend(&mut self) -> Task<Msg> {
        let (Some(email), Some(flow)) = (self.router.pending_email(), self.router.flow()) else {
            return Task::none();
        };
        let Some(ticket) = self.views.otp.begin_resend() else {
            debug!("otp: resend ignored, previous one still pending");
            return Task::none();
        };
        let request = OtpRequest {
            email: email.to_string(),
            flow,
        };
        let issuer = self.services.issuer.clone();
        let delay = self.config.resend_delay;
        let epoch = self.epoch;
        Task::perform(resend_code(issuer, request, delay), move |res| {
            Msg::OtpResent(epoch, ticket, res)
        })
    }

    fn on_otp_resent(&mut self, epoch: Epoch, ticket: ResendTicket, res: Result<(), ServiceError>) {
        if !self.is_current(epoch) {
            return;
        }
        if let Err(e) = &res {
            warn!("Failed to resend code: {}", e);
        }
        if self.views.otp.finish_resend(ticket, res) {
            info!("code resent to {}", self.router.pending_email().unwrap_or_default());
        }
    }
}

/// Requests a new code, resolving no sooner than `delay`.
pub(crate) async fn resend_code(
    issuer: Arc<dyn OtpIssuer>,
    request: OtpRequest,
    delay: Duration,
) -> Result<(), ServiceError> {
    let (res, ()) = tokio::join!(issuer.send_code(&request), tokio::time::sleep(delay));
    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::FlowConfig,
        router::Screen,
        services::{DebugOtpService, MemoryThemeStore, ThemeMode, ThemeStore},
        state::Services,
        validation::ValidationError,
    };
    use async_trait::async_trait;
    use tokio::time::Instant;

    struct FailingIssuer;

    #[async_trait]
    impl OtpIssuer for FailingIssuer {
        async fn send_code(&self, _request: &OtpRequest) -> Result<(), ServiceError> {
            Err(ServiceError::DeliveryFailed("smtp down".to_string()))
        }
    }

    struct SlowIssuer(Duration);

    #[async_trait]
    impl OtpIssuer for SlowIssuer {
        async fn send_code(&self, _request: &OtpRequest) -> Result<(), ServiceError> {
            tokio::time::sleep(self.0).await;
            Ok(())
        }
    }

    fn state() -> State {
        let debug = Arc::new(DebugOtpService::default());
        State::new(
            FlowConfig::default(),
            Services {
                issuer: debug.clone(),
                verifier: debug,
                theme_store: Arc::new(MemoryThemeStore::default()),
            },
        )
        .0
    }

    fn request(email: &str, flow: FlowContext) -> OtpRequest {
        OtpRequest {
            email: email.to_string(),
            flow,
        }
    }

    #[test]
    fn login_submit_reaches_otp_after_issuance() {
        let mut state = state();
        let _ = state.update(Msg::LoginUpdateEmail("warrior@kiibord.gg".to_string()));
        let _ = state.update(Msg::LoginSubmit);
        assert!(state.views.login.processing);
        assert_eq!(state.router.screen(), &Screen::Login);

        let epoch = state.epoch();
        let _ = state.update(Msg::CodeRequested(
            epoch,
            request("warrior@kiibord.gg", FlowContext::Login),
            Ok(()),
        ));
        assert_eq!(
            state.router.screen(),
            &Screen::Otp {
                email: "warrior@kiibord.gg".to_string(),
                flow: FlowContext::Login,
            }
        );
        assert_ne!(state.epoch(), epoch);
    }

    #[test]
    fn invalid_login_email_stays_on_login() {
        let mut state = state();
        let _ = state.update(Msg::LoginUpdateEmail("not-an-email".to_string()));
        let _ = state.update(Msg::LoginSubmit);
        assert_eq!(state.router.screen(), &Screen::Login);
        assert!(!state.views.login.processing);
        assert_eq!(
            state.views.login.email.error,
            Some(ValidationError::EmailInvalid)
        );
    }

    #[test]
    fn issuance_failure_is_a_form_error() {
        let mut state = state();
        let _ = state.update(Msg::RegisterSwitchToLogin);
        let _ = state.update(Msg::LoginSwitchToRegister);
        let _ = state.update(Msg::RegisterUpdateUsername("APEX".to_string()));
        let _ = state.update(Msg::RegisterUpdateEmail("champion@kiibord.gg".to_string()));
        let _ = state.update(Msg::RegisterSubmit);
        assert!(state.views.register.processing);
        let _ = state.update(Msg::CodeRequested(
            state.epoch(),
            request("champion@kiibord.gg", FlowContext::Register),
            Err(ServiceError::DeliveryFailed("smtp down".to_string())),
        ));
        assert_eq!(state.router.screen(), &Screen::Register);
        assert!(!state.views.register.processing);
        assert_eq!(
            state.views.register.error.as_deref(),
            Some("Failed to deliver the verification code: smtp down")
        );
        assert_eq!(state.views.register.email.error, None);
    }

    #[test]
    fn back_from_otp_after_register() {
        let mut state = state();
        let _ = state.update(Msg::LoginSwitchToRegister);
        let _ = state.update(Msg::RegisterSwitchToLogin);
        let _ = state.update(Msg::LoginSwitchToRegister);
        let _ = state.update(Msg::CodeRequested(
            state.epoch(),
            request("champion@kiibord.gg", FlowContext::Register),
            Ok(()),
        ));
        assert_eq!(state.router.flow(), Some(FlowContext::Register));
        let _ = state.update(Msg::OtpBack);
        assert_eq!(state.router.screen(), &Screen::Register);
        // The registration view is mounted again from scratch.
        assert_eq!(state.views.register.email.value, "");
    }

    #[test]
    fn stale_results_are_dropped() {
        let mut state = state();
        let _ = state.update(Msg::LoginUpdateEmail("warrior@kiibord.gg".to_string()));
        let _ = state.update(Msg::LoginSubmit);
        let stale = state.epoch();
        let _ = state.update(Msg::LoginSwitchToRegister);
        let _ = state.update(Msg::CodeRequested(
            stale,
            request("warrior@kiibord.gg", FlowContext::Login),
            Ok(()),
        ));
        assert_eq!(state.router.screen(), &Screen::Register);
    }

    fn on_otp(state: &mut State) {
        let _ = state.update(Msg::CodeRequested(
            state.epoch(),
            request("warrior@kiibord.gg", FlowContext::Login),
            Ok(()),
        ));
    }

    #[test]
    fn resend_completion_after_teardown_is_ignored() {
        let mut state = state();
        on_otp(&mut state);
        let _ = state.update(Msg::OtpResend);
        let ticket = state.views.otp.pending_resend().unwrap();
        let torn_down = state.epoch();

        let _ = state.update(Msg::OtpBack);
        on_otp(&mut state);
        assert!(!state.views.otp.is_resending());

        let _ = state.update(Msg::OtpResend);
        // The fresh view hands out the same ticket number, only the epoch tells them apart.
        assert_eq!(state.views.otp.pending_resend(), Some(ticket));
        let _ = state.update(Msg::OtpResent(torn_down, ticket, Ok(())));
        assert!(state.views.otp.is_resending());

        // Second press while pending is rejected.
        let _ = state.update(Msg::OtpResend);
        assert_eq!(state.views.otp.pending_resend(), Some(ticket));

        let _ = state.update(Msg::OtpResent(state.epoch(), ticket, Ok(())));
        assert!(!state.views.otp.is_resending());
    }

    #[test]
    fn otp_submit_and_verification() {
        let mut state = state();
        on_otp(&mut state);
        for (i, d) in "12345".chars().enumerate() {
            let _ = state.update(Msg::OtpUpdateDigit(i, d.to_string()));
        }
        let _ = state.update(Msg::OtpSubmit);
        assert!(!state.views.otp.processing);

        let _ = state.update(Msg::OtpUpdateDigit(5, "a".to_string()));
        assert!(!state.views.otp.is_complete());
        let _ = state.update(Msg::OtpUpdateDigit(5, "6".to_string()));
        assert!(state.views.otp.can_submit());
        let _ = state.update(Msg::OtpSubmit);
        assert!(state.views.otp.processing);

        let _ = state.update(Msg::OtpVerified(
            Epoch(state.epoch().0 + 1),
            Err(ServiceError::InvalidCode),
        ));
        assert!(state.views.otp.processing);

        let _ = state.update(Msg::OtpVerified(state.epoch(), Err(ServiceError::ExpiredCode)));
        assert!(!state.views.otp.processing);
        assert_eq!(
            state.views.otp.error.as_deref(),
            Some("Verification code expired, request a new one")
        );
        let _ = state.update(Msg::OtpSubmit);
        let _ = state.update(Msg::OtpVerified(state.epoch(), Ok(())));
        assert!(state.views.otp.verified);
    }

    #[test]
    fn backspace_moves_focus_back() {
        let mut state = state();
        on_otp(&mut state);
        let _ = state.update(Msg::OtpUpdateDigit(0, "1".to_string()));
        assert_eq!(state.views.otp.entry.focus(), 1);
        let _ = state.update(Msg::OtpBackspace);
        assert_eq!(state.views.otp.entry.focus(), 0);
        assert_eq!(state.views.otp.entry.digit(0), Some("1"));
    }

    #[test]
    fn theme_toggle_is_persisted() {
        let store = Arc::new(MemoryThemeStore::new(Some(ThemeMode::Light)));
        let debug = Arc::new(DebugOtpService::default());
        let (mut state, _) = State::new(
            FlowConfig::default(),
            Services {
                issuer: debug.clone(),
                verifier: debug,
                theme_store: store.clone(),
            },
        );
        assert_eq!(state.theme, ThemeMode::Light);
        let _ = state.update(Msg::ThemeToggle);
        assert_eq!(state.theme, ThemeMode::Dark);
        assert_eq!(store.load(), Some(ThemeMode::Dark));
        assert!(state.theme().is_dark());
    }

    #[tokio::test(start_paused = true)]
    async fn resend_lasts_exactly_the_configured_delay() {
        let delay = FlowConfig::default().resend_delay;
        let start = Instant::now();
        let res = resend_code(
            Arc::new(DebugOtpService::default()),
            request("warrior@kiibord.gg", FlowContext::Login),
            delay,
        )
        .await;
        assert!(res.is_ok());
        assert_eq!(start.elapsed(), Duration::from_millis(2000));
    }

    #[tokio::test(start_paused = true)]
    async fn resend_waits_for_a_slow_issuer() {
        let start = Instant::now();
        let res = resend_code(
            Arc::new(SlowIssuer(Duration::from_millis(3500))),
            request("warrior@kiibord.gg", FlowContext::Register),
            Duration::from_millis(2000),
        )
        .await;
        assert!(res.is_ok());
        assert_eq!(start.elapsed(), Duration::from_millis(3500));
    }

    #[tokio::test(start_paused = true)]
    async fn resend_reports_delivery_failure() {
        let res = resend_code(
            Arc::new(FailingIssuer),
            request("warrior@kiibord.gg", FlowContext::Login),
            Duration::from_millis(10),
        )
        .await;
        assert_eq!(
            res,
            Err(ServiceError::DeliveryFailed("smtp down".to_string()))
        );
    }
}
