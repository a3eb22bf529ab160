//! Waitlist form state machine
//!
//! A form starts in [`FormPhase::Editing`] and moves to
//! [`FormPhase::Submitted`] once a submission passes validation. Submitted is
//! terminal: a new form has to be mounted to capture another address.

use serde::Serialize;

use super::validation::{WaitlistError, validate_email, validate_name};

/// Which inputs the form shows
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WaitlistFields {
    /// Email address only
    #[default]
    EmailOnly,
    /// Name and email address, both required
    NameAndEmail,
}

impl WaitlistFields {
    pub fn has_name(&self) -> bool {
        matches!(self, WaitlistFields::NameAndEmail)
    }
}

/// Lifecycle of a mounted form
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitted,
}

/// Validated waitlist entry, shaped like the payload a submission endpoint
/// would accept
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WaitlistEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub email: String,
}

/// Local state of one waitlist form
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct WaitlistState {
    fields: WaitlistFields,
    name: String,
    email: String,
    phase: FormPhase,
}

impl WaitlistState {
    pub fn new(fields: WaitlistFields) -> Self {
        Self {
            fields,
            ..Self::default()
        }
    }

    pub fn fields(&self) -> WaitlistFields {
        self.fields
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == FormPhase::Submitted
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Keystroke update for the name input. No-op once submitted.
    pub fn set_name(&mut self, value: impl Into<String>) {
        if !self.is_submitted() {
            self.name = value.into();
        }
    }

    /// Keystroke update for the email input. No-op once submitted.
    pub fn set_email(&mut self, value: impl Into<String>) {
        if !self.is_submitted() {
            self.email = value.into();
        }
    }

    /// Attempts the Editing -> Submitted transition.
    ///
    /// On failure the state is left untouched, inputs included.
    pub fn submit(&mut self) -> Result<WaitlistEntry, WaitlistError> {
        if self.is_submitted() {
            return Err(WaitlistError::AlreadySubmitted);
        }

        let name = if self.fields.has_name() {
            Some(validate_name(&self.name)?)
        } else {
            None
        };
        let email = validate_email(&self.email)?;

        self.name.clear();
        self.email.clear();
        self.phase = FormPhase::Submitted;

        Ok(WaitlistEntry { name, email })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(fields: WaitlistFields, name: &str, email: &str) -> WaitlistState {
        let mut state = WaitlistState::new(fields);
        state.set_name(name);
        state.set_email(email);
        state
    }

    #[test]
    fn test_new_form_is_editing_and_empty() {
        let state = WaitlistState::new(WaitlistFields::NameAndEmail);
        assert_eq!(state.phase(), FormPhase::Editing);
        assert_eq!(state.name(), "");
        assert_eq!(state.email(), "");
    }

    #[test]
    fn test_submit_success_clears_fields() {
        let mut state = filled(WaitlistFields::NameAndEmail, "Jo", "jo@example.com");

        let entry = state.submit().expect("valid submission");

        assert_eq!(entry.name.as_deref(), Some("Jo"));
        assert_eq!(entry.email, "jo@example.com");
        assert!(state.is_submitted());
        assert_eq!(state.name(), "");
        assert_eq!(state.email(), "");
    }

    #[test]
    fn test_blank_name_keeps_editing() {
        let mut state = filled(WaitlistFields::NameAndEmail, "", "a@b.com");

        assert_eq!(state.submit(), Err(WaitlistError::BlankName));
        assert_eq!(state.phase(), FormPhase::Editing);
        assert_eq!(state.email(), "a@b.com");
    }

    #[test]
    fn test_blank_email_preserves_name() {
        let mut state = filled(WaitlistFields::NameAndEmail, "Jo", "   ");

        assert_eq!(state.submit(), Err(WaitlistError::BlankEmail));
        assert!(!state.is_submitted());
        assert_eq!(state.name(), "Jo");
        assert_eq!(state.email(), "   ");
    }

    #[test]
    fn test_email_only_ignores_name() {
        let mut state = filled(WaitlistFields::EmailOnly, "", " a@b.com ");

        let entry = state.submit().expect("name is not required");
        assert_eq!(entry.name, None);
        assert_eq!(entry.email, "a@b.com");
    }

    #[test]
    fn test_submitted_is_terminal() {
        let mut state = filled(WaitlistFields::EmailOnly, "", "a@b.com");
        state.submit().expect("valid submission");

        state.set_email("again@b.com");
        state.set_name("Late");
        assert_eq!(state.email(), "");
        assert_eq!(state.name(), "");

        assert_eq!(state.submit(), Err(WaitlistError::AlreadySubmitted));
        assert_eq!(state.phase(), FormPhase::Submitted);
    }

    #[test]
    fn test_invalid_email_keeps_editing() {
        let mut state = filled(WaitlistFields::EmailOnly, "", "not-an-email");

        assert_eq!(state.submit(), Err(WaitlistError::InvalidEmail));
        assert_eq!(state.email(), "not-an-email");
    }

    #[test]
    fn test_entry_payload_shape() {
        let entry = WaitlistEntry {
            name: None,
            email: "a@b.com".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            serde_json::json!({ "email": "a@b.com" })
        );

        let entry = WaitlistEntry {
            name: Some("Jo".to_string()),
            email: "jo@example.com".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            serde_json::json!({ "name": "Jo", "email": "jo@example.com" })
        );
    }
}
