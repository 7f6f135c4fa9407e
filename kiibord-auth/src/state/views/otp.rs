use crate::{
    config::OTP_LENGTH,
    services::ServiceError,
    validation::{validate_digit, validate_otp, ValidationError},
};

/// Digit slots of the verification code and the slot holding input focus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OtpEntry {
    digits: [String; OTP_LENGTH],
    focus: usize,
    // Set when the last edit emptied the focused slot: the Backspace key event that caused it
    // reaches us after the input change and must not move focus.
    cleared: bool,
}

impl OtpEntry {
    pub fn digits(&self) -> &[String] {
        &self.digits
    }

    pub fn digit(&self, slot: usize) -> Option<&str> {
        self.digits.get(slot).map(String::as_str)
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Applies a change of the slot content, returns the slot that must receive focus.
    pub fn input(&mut self, slot: usize, value: &str) -> Option<usize> {
        if self.apply(slot, value) {
            self.advance(slot)
        } else {
            None
        }
    }

    /// Stores the first character of `value` in the slot. False if the edit was rejected or
    /// left the slot unchanged.
    fn apply(&mut self, slot: usize, value: &str) -> bool {
        if slot >= OTP_LENGTH {
            return false;
        }
        self.focus = slot;
        let raw_len = value.chars().count();
        let value: String = value.chars().take(1).collect();
        if !value.is_empty() && validate_digit(&value).is_err() {
            return false;
        }
        // A keystroke appended to a filled slot.
        if raw_len > 1 && value == self.digits[slot] {
            return false;
        }
        self.cleared = value.is_empty() && !self.digits[slot].is_empty();
        self.digits[slot] = value;
        true
    }

    fn advance(&mut self, slot: usize) -> Option<usize> {
        if !self.digits[slot].is_empty() && slot + 1 < OTP_LENGTH {
            self.focus = slot + 1;
            Some(self.focus)
        } else {
            None
        }
    }

    /// Backspace on an empty slot moves focus to the previous one without touching its value.
    pub fn backspace(&mut self) -> Option<usize> {
        if std::mem::take(&mut self.cleared) {
            return None;
        }
        if self.digits[self.focus].is_empty() && self.focus > 0 {
            self.focus -= 1;
            Some(self.focus)
        } else {
            None
        }
    }

    pub fn is_complete(&self) -> bool {
        self.digits.iter().all(|d| !d.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResendTicket(u64);

#[derive(Debug, Clone, Default)]
pub struct OtpForm {
    pub entry: OtpEntry,
    pub errors: [Option<ValidationError>; OTP_LENGTH],
    /// Whole code error, set on submit.
    pub code_error: Option<ValidationError>,
    /// Form level error returned by the verification or delivery service.
    pub error: Option<String>,
    pub notice: Option<&'static str>,
    pub processing: bool,
    pub verified: bool,
    resending: Option<ResendTicket>,
    last_ticket: u64,
}

impl OtpForm {
    /// Every change re-validates the edited slot.
    pub fn on_update_digit(&mut self, slot: usize, value: &str) -> Option<usize> {
        if self.processing || self.verified {
            return None;
        }
        if !self.entry.apply(slot, value) {
            return None;
        }
        self.errors[slot] = validate_digit(&self.entry.digits[slot]).err();
        if self.code_error.is_some() && self.entry.is_complete() {
            self.code_error = None;
        }
        self.error = None;
        self.entry.advance(slot)
    }

    pub fn on_backspace(&mut self) -> Option<usize> {
        if self.processing || self.verified {
            return None;
        }
        self.entry.backspace()
    }

    pub fn is_complete(&self) -> bool {
        self.entry.is_complete()
    }

    pub fn can_submit(&self) -> bool {
        self.is_complete() && !self.processing && !self.verified
    }

    /// Validates the whole code, returns it when it can be handed to the verifier.
    pub fn submit(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        match validate_otp(self.entry.digits()) {
            Ok(code) => {
                self.processing = true;
                self.error = None;
                self.notice = None;
                self.code_error = None;
                Some(code)
            }
            Err(e) => {
                for (slot, digit) in self.entry.digits().iter().enumerate() {
                    self.errors[slot] = validate_digit(digit).err();
                }
                self.code_error = Some(e);
                None
            }
        }
    }

    pub fn on_verified(&mut self, res: Result<(), ServiceError>) {
        self.processing = false;
        match res {
            Ok(()) => {
                self.verified = true;
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub fn is_resending(&self) -> bool {
        self.resending.is_some()
    }

    pub fn pending_resend(&self) -> Option<ResendTicket> {
        self.resending
    }

    /// Resend is rejected while a previous one is still pending.
    pub fn begin_resend(&mut self) -> Option<ResendTicket> {
        if self.resending.is_some() || self.verified {
            return None;
        }
        self.last_ticket += 1;
        let ticket = ResendTicket(self.last_ticket);
        self.resending = Some(ticket);
        self.notice = None;
        self.error = None;
        Some(ticket)
    }

    /// Returns false if the ticket is not the pending one, the result is then ignored.
    pub fn finish_resend(&mut self, ticket: ResendTicket, res: Result<(), ServiceError>) -> bool {
        if self.resending != Some(ticket) {
            return false;
        }
        self.resending = None;
        match res {
            Ok(()) => self.notice = Some("A new code has been deployed"),
            Err(e) => self.error = Some(e.to_string()),
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(code: &str) -> OtpEntry {
        let mut entry = OtpEntry::default();
        for (i, c) in code.chars().enumerate() {
            entry.input(i, &c.to_string());
        }
        entry
    }

    #[test]
    fn typing_a_digit_advances_focus() {
        let mut entry = OtpEntry::default();
        assert_eq!(entry.input(0, "4"), Some(1));
        assert_eq!(entry.focus(), 1);
        assert_eq!(entry.input(1, "2"), Some(2));
        assert_eq!(entry.digit(0), Some("4"));
        // Last slot does not advance.
        assert_eq!(entry.input(5, "9"), None);
        assert_eq!(entry.focus(), 5);
    }

    #[test]
    fn non_digit_is_rejected() {
        let mut entry = OtpEntry::default();
        entry.input(0, "1");
        entry.input(1, "2");
        assert_eq!(entry.focus(), 2);
        assert_eq!(entry.input(2, "a"), None);
        assert_eq!(entry.digit(2), Some(""));
        assert_eq!(entry.focus(), 2);

        assert_eq!(entry.input(1, "x"), None);
        assert_eq!(entry.digit(1), Some("2"));
    }

    #[test]
    fn only_first_character_is_kept() {
        let mut entry = OtpEntry::default();
        assert_eq!(entry.input(0, "123456"), Some(1));
        assert_eq!(entry.digit(0), Some("1"));
        assert_eq!(entry.digit(1), Some(""));
        assert_eq!(entry.input(1, "a1"), None);
        assert_eq!(entry.digit(1), Some(""));
        assert_eq!(entry.input(7, "1"), None);
    }

    #[test]
    fn keystroke_into_filled_slot_is_ignored() {
        let mut entry = filled("5");
        assert_eq!(entry.focus(), 1);
        // The text input appends the keystroke to the stored digit.
        assert_eq!(entry.input(0, "57"), None);
        assert_eq!(entry.digit(0), Some("5"));
        assert_eq!(entry.focus(), 0);
        assert_eq!(entry.digit(1), Some(""));
        // Once cleared the slot takes a new digit.
        assert_eq!(entry.input(0, ""), None);
        assert_eq!(entry.input(0, "7"), Some(1));
        assert_eq!(entry.digit(0), Some("7"));
    }

    #[test]
    fn backspace_on_empty_slot_moves_back() {
        let mut entry = filled("12");
        assert_eq!(entry.focus(), 2);
        assert_eq!(entry.backspace(), Some(1));
        assert_eq!(entry.digit(1), Some("2"));
        // Slot 1 holds a digit, the text input deletes it, then the key event arrives.
        assert_eq!(entry.input(1, ""), None);
        assert_eq!(entry.backspace(), None);
        assert_eq!(entry.focus(), 1);
        assert_eq!(entry.backspace(), Some(0));
        assert_eq!(entry.digit(0), Some("1"));
        // First slot never moves further.
        entry.input(0, "");
        entry.backspace();
        assert_eq!(entry.backspace(), None);
        assert_eq!(entry.focus(), 0);
    }

    #[test]
    fn completion_ignores_digit_values() {
        let mut entry = OtpEntry::default();
        for i in 0..OTP_LENGTH - 1 {
            entry.input(i, "0");
            assert!(!entry.is_complete());
        }
        entry.input(OTP_LENGTH - 1, "0");
        assert!(entry.is_complete());
        assert_eq!(validate_otp(entry.digits()), Ok("000000".to_string()));
        entry.input(3, "");
        assert!(!entry.is_complete());
    }

    #[test]
    fn submit_enabled_only_when_complete() {
        let mut form = OtpForm::default();
        assert!(!form.can_submit());
        assert_eq!(form.submit(), None);
        for (i, d) in ["1", "2", "3", "4", "5"].iter().enumerate() {
            form.on_update_digit(i, d);
            assert!(!form.can_submit());
        }
        form.on_update_digit(5, "6");
        assert!(form.can_submit());
        assert_eq!(form.submit(), Some("123456".to_string()));
        assert!(form.processing);
        assert!(!form.can_submit());
        // Digits are locked while the code is verified.
        assert_eq!(form.on_update_digit(0, "9"), None);
        assert_eq!(form.entry.digit(0), Some("1"));
    }

    #[test]
    fn clearing_a_slot_reports_required() {
        let mut form = OtpForm::default();
        form.on_update_digit(0, "1");
        assert_eq!(form.errors[0], None);
        form.on_update_digit(0, "");
        assert_eq!(form.errors[0], Some(ValidationError::DigitRequired));
    }

    #[test]
    fn rejected_keystroke_leaves_slot_errors_untouched() {
        let mut form = OtpForm::default();
        assert_eq!(form.on_update_digit(0, "a"), None);
        assert_eq!(form.errors[0], None);
        assert_eq!(form.entry.digit(0), Some(""));

        assert_eq!(form.on_update_digit(0, "4"), Some(1));
        assert_eq!(form.on_update_digit(0, "4x"), None);
        assert_eq!(form.errors[0], None);
        assert_eq!(form.entry.focus(), 0);
    }

    #[test]
    fn verification_outcome() {
        let mut form = OtpForm {
            entry: filled("123456"),
            ..Default::default()
        };
        form.submit();
        form.on_verified(Err(ServiceError::InvalidCode));
        assert!(!form.processing);
        assert!(!form.verified);
        assert_eq!(form.error.as_deref(), Some("Invalid verification code"));
        // Invalid code is not a field error.
        assert!(form.errors.iter().all(Option::is_none));

        assert_eq!(form.submit(), Some("123456".to_string()));
        form.on_verified(Ok(()));
        assert!(form.verified);
        assert_eq!(form.error, None);
        assert!(!form.can_submit());
    }

    #[test]
    fn resend_is_rejected_while_pending() {
        let mut form = OtpForm::default();
        let ticket = form.begin_resend().unwrap();
        assert!(form.is_resending());
        assert_eq!(form.begin_resend(), None);
        assert!(form.finish_resend(ticket, Ok(())));
        assert!(!form.is_resending());
        assert_eq!(form.notice, Some("A new code has been deployed"));
        // A second completion for the same ticket is a no-op.
        assert!(!form.finish_resend(ticket, Ok(())));

        let second = form.begin_resend().unwrap();
        assert_ne!(ticket, second);
        assert!(!form.finish_resend(ticket, Ok(())));
        assert!(form.is_resending());
        assert!(form.finish_resend(second, Err(ServiceError::RateLimited)));
        assert_eq!(
            form.error.as_deref(),
            Some("Too many attempts, try again later")
        );
    }

    #[test]
    fn resend_does_not_touch_digits() {
        let mut form = OtpForm {
            entry: filled("12"),
            ..Default::default()
        };
        let ticket = form.begin_resend().unwrap();
        assert_eq!(form.on_update_digit(2, "3"), Some(3));
        form.finish_resend(ticket, Ok(()));
        assert_eq!(form.entry.digits().concat(), "123");
    }
}
