//! Contact form validation and the simulated submit flow.
//!
//! No request is ever sent: a valid submission shows a sending state and
//! completes after [`ContactForm::SEND_DELAY`].

use regex::Regex;
use std::time::Duration;

/// Fields of the contact form, keyed by element id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactField {
    /// `#firstName`, required.
    FirstName,
    /// `#lastName`, optional and never validated.
    LastName,
    /// `#email`, must look like an address.
    Email,
    /// `#message`, required.
    Message,
}

impl ContactField {
    /// Fields checked on blur, input and submit, in focus order.
    pub const VALIDATED: [ContactField; 3] = [
        ContactField::FirstName,
        ContactField::Email,
        ContactField::Message,
    ];

    /// Element id of the field.
    pub fn element_id(self) -> &'static str {
        match self {
            ContactField::FirstName => "firstName",
            ContactField::LastName => "lastName",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }

    /// Checks `value` for this field.
    pub fn validate(self, value: &str) -> FieldState {
        let filled = !value.trim().is_empty();
        let ok = match self {
            ContactField::FirstName | ContactField::Message => filled,
            ContactField::Email => is_plausible_email(&value.to_lowercase()),
            ContactField::LastName => true,
        };
        match (ok, filled) {
            (false, _) => FieldState::Invalid,
            (true, true) => FieldState::Valid,
            (true, false) => FieldState::Untouched,
        }
    }
}

/// Validation result, mapped onto the `valid` / `invalid` classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldState {
    /// Passes and has content: `valid`.
    Valid,
    /// Fails: `invalid`.
    Invalid,
    /// Passes but is blank: neither class.
    Untouched,
}

impl FieldState {
    /// Whether the field passes validation.
    pub fn is_ok(self) -> bool {
        self != FieldState::Invalid
    }

    /// Whether the `valid` class is present.
    pub fn has_valid_class(self) -> bool {
        self == FieldState::Valid
    }

    /// Whether the `invalid` class is present.
    pub fn has_invalid_class(self) -> bool {
        self == FieldState::Invalid
    }
}

/// Whether a field wrapper gets the `has-value` class.
pub fn has_value(value: &str) -> bool {
    !value.trim().is_empty()
}

/// One run of characters that are neither `@` nor JavaScript whitespace.
///
/// JavaScript's `\s` adds U+FEFF to Unicode `White_Space` and leaves out
/// U+0085.
macro_rules! email_part {
    () => {
        r"(?:[^\s\x{FEFF}@]|\x{85})+"
    };
}

lazy_static::lazy_static! {
    static ref EMAIL_PATTERN: Regex =
        Regex::new(concat!(email_part!(), "@", email_part!(), r"\.", email_part!()))
            .expect("email pattern compiles");
}

/// Loose address check: somewhere in `value` there is `local@domain.tld`,
/// each part a non-empty run of characters that are neither whitespace nor
/// `@`.
pub fn is_plausible_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Styling of the `.form-hint` element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HintKind {
    /// Validation failed.
    Error,
    /// Message accepted.
    Success,
}

impl HintKind {
    /// Class applied to the hint.
    pub fn class_name(self) -> &'static str {
        match self {
            HintKind::Error => "error",
            HintKind::Success => "success",
        }
    }

    /// Every hint class, removed before a new one is applied.
    pub const ALL: [HintKind; 2] = [HintKind::Error, HintKind::Success];
}

/// Text and style for the `.form-hint` element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormHint {
    /// Text content.
    pub text: &'static str,
    /// Optional style class.
    pub kind: Option<HintKind>,
}

impl FormHint {
    /// Shown when a required field is missing or the email is malformed.
    pub const INCOMPLETE: FormHint = FormHint {
        text: "Please provide your first name, a valid email, and a brief message.",
        kind: Some(HintKind::Error),
    };

    /// Shown while the simulated send is pending.
    pub const SENDING: FormHint = FormHint {
        text: "Sending…",
        kind: None,
    };

    /// Shown once the simulated send completes.
    pub const SENT: FormHint = FormHint {
        text: "Thank you for your message! We will get back to you soon.",
        kind: Some(HintKind::Success),
    };
}

/// Result of a submit attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// At least one field failed. Focus `first_invalid` if present.
    Rejected {
        /// First failing field in focus order.
        first_invalid: Option<ContactField>,
    },
    /// Accepted; call [`ContactForm::complete`] after [`ContactForm::SEND_DELAY`].
    Sending,
    /// A previous submission is still pending.
    Busy,
}

/// Submit-flow state for one contact form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    sending: bool,
}

impl ContactForm {
    /// Delay before a simulated send completes.
    pub const SEND_DELAY: Duration = Duration::from_millis(500);

    /// Submit button label while sending.
    pub const SENDING_BUTTON_HTML: &'static str =
        "<i class=\"fas fa-paper-plane\"></i> Sending…";

    /// A form with nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a simulated send is pending.
    pub fn is_sending(&self) -> bool {
        self.sending
    }

    /// Validates every required field. `value_of` returns `None` for fields
    /// missing from the page; those pass.
    pub fn submit(&mut self, value_of: impl Fn(ContactField) -> Option<String>) -> SubmitOutcome {
        if self.sending {
            return SubmitOutcome::Busy;
        }

        let first_invalid = ContactField::VALIDATED.into_iter().find(|&field| {
            value_of(field).is_some_and(|value| !field.validate(&value).is_ok())
        });

        match first_invalid {
            Some(field) => {
                log::debug!("contact form rejected: `{}` invalid", field.element_id());
                SubmitOutcome::Rejected {
                    first_invalid: Some(field),
                }
            }
            None => {
                self.sending = true;
                SubmitOutcome::Sending
            }
        }
    }

    /// Finishes the simulated send.
    pub fn complete(&mut self) -> FormHint {
        self.sending = false;
        FormHint::SENT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_check_matches_loose_pattern() {
        assert!(is_plausible_email("jane@example.com"));
        assert!(is_plausible_email("a@b.c"));
        assert!(is_plausible_email("reach me at jane@mail.example.org today"));
        assert!(is_plausible_email("x@@a@b.co"));
        assert!(!is_plausible_email(""));
        assert!(!is_plausible_email("jane@example"));
        assert!(!is_plausible_email("@example.com"));
        assert!(!is_plausible_email("jane@.com"));
        assert!(!is_plausible_email("jane@example."));
        assert!(!is_plausible_email("jane @ example.com"));
        assert!(!is_plausible_email("\u{FEFF}@b.c"));
        assert!(!is_plausible_email("jane@\u{00A0}example.com"));
        assert!(is_plausible_email("\u{85}@b.c"));
    }

    #[test]
    fn field_states() {
        assert_eq!(ContactField::FirstName.validate("  "), FieldState::Invalid);
        assert_eq!(ContactField::FirstName.validate("Ada"), FieldState::Valid);
        assert_eq!(ContactField::Email.validate("ADA@EXAMPLE.COM"), FieldState::Valid);
        assert_eq!(ContactField::Email.validate(""), FieldState::Invalid);
        assert_eq!(ContactField::LastName.validate(""), FieldState::Untouched);
        assert_eq!(ContactField::Message.validate("\n"), FieldState::Invalid);
    }

    #[test]
    fn submit_reports_first_invalid_in_focus_order() {
        let mut form = ContactForm::new();
        let outcome = form.submit(|field| match field {
            ContactField::FirstName => Some("Ada".into()),
            ContactField::Email => Some("nope".into()),
            _ => Some(String::new()),
        });
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                first_invalid: Some(ContactField::Email)
            }
        );
        assert!(!form.is_sending());
    }

    #[test]
    fn missing_fields_pass() {
        let mut form = ContactForm::new();
        assert_eq!(form.submit(|_| None), SubmitOutcome::Sending);
    }

    #[test]
    fn send_cycle() {
        let mut form = ContactForm::new();
        let values = |field: ContactField| {
            Some(match field {
                ContactField::FirstName => "Ada".to_string(),
                ContactField::Email => "ada@example.com".to_string(),
                ContactField::Message => "Hello".to_string(),
                ContactField::LastName => String::new(),
            })
        };
        assert_eq!(form.submit(values), SubmitOutcome::Sending);
        assert_eq!(form.submit(values), SubmitOutcome::Busy);
        assert_eq!(form.complete(), FormHint::SENT);
        assert_eq!(form.submit(values), SubmitOutcome::Sending);
    }

    #[test]
    fn has_value_ignores_whitespace() {
        assert!(!has_value("   "));
        assert!(has_value(" a "));
    }
}
