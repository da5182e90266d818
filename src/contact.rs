use std::sync::Mutex;
use std::time::Duration;
use thiserror::Error;

/// How long the "message sent" confirmation stays up before the form clears.
pub const RESET_DELAY: Duration = Duration::from_secs(3);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    Required(FormField),
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Message => "message",
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Message => "Message",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        for field in [FormField::Name, FormField::Email, FormField::Message] {
            if self.get(field).trim().is_empty() {
                return Err(ContactError::Required(field));
            }
        }
        let email = self.email.trim();
        match email.split_once('@') {
            Some((local, domain))
                if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
            {
                Ok(())
            }
            _ => Err(ContactError::InvalidEmail(email.to_string())),
        }
    }
}

/// Local-only contact form: nothing leaves the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactState {
    pub form: ContactForm,
    pub submitted: bool,
}

impl ContactState {
    /// Validates and marks the form as sent, returning the payload.
    pub fn submit(&mut self) -> Result<ContactForm, ContactError> {
        self.form.validate()?;
        self.submitted = true;
        Ok(self.form.clone())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A scheduled callback that can be called off before it fires.
pub trait CancelHandle {
    fn cancel(self);
}

/// Holds at most one scheduled form reset.
///
/// Scheduling a new reset cancels the previous one, and whatever is still
/// pending is cancelled when the owner is torn down or the slot is dropped.
#[derive(Debug)]
pub struct PendingReset<H: CancelHandle> {
    handle: Mutex<Option<H>>,
}

impl<H: CancelHandle> Default for PendingReset<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: CancelHandle> PendingReset<H> {
    pub fn new() -> Self {
        Self {
            handle: Mutex::new(None),
        }
    }

    pub fn replace(&self, handle: H) {
        let previous = match self.handle.lock() {
            Ok(mut slot) => slot.replace(handle),
            Err(poisoned) => poisoned.into_inner().replace(handle),
        };
        if let Some(previous) = previous {
            previous.cancel();
        }
    }

    pub fn cancel(&self) {
        let pending = match self.handle.lock() {
            Ok(mut slot) => slot.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        if let Some(pending) = pending {
            pending.cancel();
        }
    }

    /// Forget the handle without cancelling it, once its callback has run.
    pub fn clear(&self) {
        match self.handle.lock() {
            Ok(mut slot) => *slot = None,
            Err(poisoned) => *poisoned.into_inner() = None,
        }
    }

    pub fn is_pending(&self) -> bool {
        match self.handle.lock() {
            Ok(slot) => slot.is_some(),
            Err(poisoned) => poisoned.into_inner().is_some(),
        }
    }
}

impl<H: CancelHandle> Drop for PendingReset<H> {
    fn drop(&mut self) {
        let slot = match self.handle.get_mut() {
            Ok(slot) => slot,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(pending) = slot.take() {
            pending.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn test_set_and_get() {
        let mut form = ContactForm::default();
        form.set(FormField::Name, "Ada");
        form.set(FormField::Email, "ada@example.com".to_string());
        form.set(FormField::Message, "Hi");
        assert_eq!(form.get(FormField::Name), "Ada");
        assert_eq!(form.get(FormField::Email), "ada@example.com");
        assert_eq!(form.get(FormField::Message), "Hi");
    }

    #[test]
    fn test_required_fields() {
        let mut form = filled();
        form.message = "   ".to_string();
        assert_eq!(form.validate(), Err(ContactError::Required(FormField::Message)));

        form.name.clear();
        let err = form.validate().unwrap_err();
        assert_eq!(err, ContactError::Required(FormField::Name));
        assert_eq!(err.to_string(), "Name is required");
    }

    #[test]
    fn test_invalid_email() {
        let mut form = filled();
        for bad in ["no-at-sign", "@example.com", "ada@", "a@b@c"] {
            form.email = bad.to_string();
            assert!(
                matches!(form.validate(), Err(ContactError::InvalidEmail(_))),
                "{bad} should be rejected"
            );
        }
        form.email = " ada@example.com ".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_submit_sets_flag_and_returns_payload() {
        let mut state = ContactState {
            form: filled(),
            submitted: false,
        };
        let payload = state.submit().expect("valid form should submit");
        assert_eq!(payload, filled());
        assert!(state.submitted);
    }

    #[test]
    fn test_submit_invalid_keeps_state() {
        let mut state = ContactState::default();
        assert!(state.submit().is_err());
        assert!(!state.submitted);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state = ContactState {
            form: filled(),
            submitted: false,
        };
        state.submit().unwrap();
        state.reset();
        assert_eq!(state, ContactState::default());
        assert!(!state.submitted);
        assert!(state.form.name.is_empty());
    }

    #[test]
    fn test_reset_delay() {
        assert_eq!(RESET_DELAY, Duration::from_secs(3));
    }

    #[derive(Debug)]
    struct FakeTimer {
        id: usize,
        cancelled: Arc<Mutex<Vec<usize>>>,
    }

    impl CancelHandle for FakeTimer {
        fn cancel(self) {
            self.cancelled.lock().unwrap().push(self.id);
        }
    }

    fn timer(id: usize, cancelled: &Arc<Mutex<Vec<usize>>>) -> FakeTimer {
        FakeTimer {
            id,
            cancelled: cancelled.clone(),
        }
    }

    #[test]
    fn test_pending_reset_replace_cancels_previous() {
        let cancelled = Arc::new(Mutex::new(Vec::new()));
        let pending = PendingReset::new();
        pending.replace(timer(1, &cancelled));
        assert!(cancelled.lock().unwrap().is_empty());

        pending.replace(timer(2, &cancelled));
        assert_eq!(*cancelled.lock().unwrap(), vec![1]);
        assert!(pending.is_pending());
    }

    #[test]
    fn test_pending_reset_cancelled_on_teardown() {
        let cancelled = Arc::new(Mutex::new(Vec::new()));
        let pending = PendingReset::new();
        pending.replace(timer(7, &cancelled));

        pending.cancel();
        assert_eq!(*cancelled.lock().unwrap(), vec![7]);
        assert!(!pending.is_pending());

        // a second teardown has nothing left to cancel
        pending.cancel();
        assert_eq!(cancelled.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_pending_reset_cancelled_on_drop() {
        let cancelled = Arc::new(Mutex::new(Vec::new()));
        {
            let pending = PendingReset::new();
            pending.replace(timer(3, &cancelled));
        }
        assert_eq!(*cancelled.lock().unwrap(), vec![3]);
    }

    #[test]
    fn test_pending_reset_clear_after_fire() {
        let cancelled = Arc::new(Mutex::new(Vec::new()));
        let pending = PendingReset::new();
        pending.replace(timer(5, &cancelled));

        // the timer already ran, so the slot is emptied without cancelling
        pending.clear();
        assert!(!pending.is_pending());
        drop(pending);
        assert!(cancelled.lock().unwrap().is_empty());
    }
}
