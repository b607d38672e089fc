use std::time::{Duration, Instant};

use tracing::{debug, info};

use super::{
    message::{DeepLink, Submission},
    validate::{ContactFormInput, Field, FormErrors},
};

/// How long the success notice stays up before the form clears itself.
pub const DEFAULT_RESET_DELAY: Duration = Duration::from_secs(5);

/// Where the form is in its submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Accepting input; errors from the last attempt may be showing.
    Editing,
    /// A message was handed off; the form clears once the timer fires.
    Submitted,
}

/// One-shot deadline that can be re-armed or cancelled before it fires.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResetTimer {
    deadline: Option<Instant>,
}

impl ResetTimer {
    /// Schedule the reset for `at`, replacing any pending one.
    pub fn arm(&mut self, at: Instant) {
        self.deadline = Some(at);
    }

    /// Drop the pending reset. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left before the reset, if one is pending.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Disarm and report `true` once `now` has reached the deadline.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Contact form state: values, inline errors, phase, and the pending reset.
#[derive(Debug, Clone)]
pub struct ContactForm {
    input: ContactFormInput,
    errors: FormErrors,
    phase: FormPhase,
    timer: ResetTimer,
    reset_delay: Duration,
    last_submission: Option<Submission>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(DEFAULT_RESET_DELAY)
    }
}

impl ContactForm {
    /// Empty form that clears itself `reset_delay` after a submission.
    pub fn new(reset_delay: Duration) -> Self {
        Self {
            input: ContactFormInput::default(),
            errors: FormErrors::default(),
            phase: FormPhase::Editing,
            timer: ResetTimer::default(),
            reset_delay,
            last_submission: None,
        }
    }

    pub fn input(&self) -> &ContactFormInput {
        &self.input
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn reset_delay(&self) -> Duration {
        self.reset_delay
    }

    /// Most recent successful submission, until the form is cleared.
    pub fn last_submission(&self) -> Option<&Submission> {
        self.last_submission.as_ref()
    }

    /// Time left on the pending reset.
    pub fn reset_remaining(&self, now: Instant) -> Option<Duration> {
        self.timer.remaining(now)
    }

    /// Replace the value of `field`.
    ///
    /// Clears that field's error. Editing a submitted form cancels the pending
    /// reset and keeps the values for further editing.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.touch(field);
        *self.input.get_mut(field) = value.into();
    }

    /// Apply an in-place edit to `field`, with the same effects as
    /// [`ContactForm::set_field`].
    pub fn edit_field(&mut self, field: Field, edit: impl FnOnce(&mut String)) {
        self.touch(field);
        edit(self.input.get_mut(field));
    }

    fn touch(&mut self, field: Field) {
        if self.phase == FormPhase::Submitted {
            self.timer.cancel();
            self.phase = FormPhase::Editing;
            debug!("Pending form reset cancelled by edit");
        }
        self.errors.clear(field);
    }

    /// Validate and, on success, compose the outgoing message.
    ///
    /// Failures leave the form in [`FormPhase::Editing`] with the errors
    /// recorded. Success moves to [`FormPhase::Submitted`] and arms the reset
    /// for `now + reset_delay`, replacing any earlier deadline.
    pub fn submit(
        &mut self,
        site_name: &str,
        link: &DeepLink,
        now: Instant,
    ) -> Result<Submission, FormErrors> {
        match self.input.validate() {
            Ok(payload) => {
                let submission = Submission::compose(site_name, link, payload);
                self.errors.clear_all();
                self.phase = FormPhase::Submitted;
                self.timer.arm(now + self.reset_delay);
                self.last_submission = Some(submission.clone());
                info!(
                    subject = %submission.payload.subject_key,
                    "Contact form submitted"
                );
                Ok(submission)
            }
            Err(errors) => {
                debug!(fields = errors.len(), "Contact form rejected");
                self.errors = errors.clone();
                self.phase = FormPhase::Editing;
                Err(errors)
            }
        }
    }

    /// Run the pending reset if it is due. Returns whether it ran.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.timer.fire_if_due(now) {
            self.clear();
            debug!("Contact form reset after submission");
            true
        } else {
            false
        }
    }

    /// Back to an empty form in [`FormPhase::Editing`]. Idempotent.
    pub fn clear(&mut self) {
        self.timer.cancel();
        self.input.clear();
        self.errors.clear_all();
        self.phase = FormPhase::Editing;
        self.last_submission = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link() -> DeepLink {
        DeepLink::with_recipient("918228822825")
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set_field(Field::Name, "Jane Doe");
        form.set_field(Field::Email, "jane@example.com");
        form.set_field(Field::Subject, "general");
        form.set_field(Field::Message, "Hello, I need help.");
        form
    }

    #[test]
    fn rejected_submit_keeps_values_and_errors() {
        let mut form = ContactForm::default();
        form.set_field(Field::Name, "A");
        let errors = form.submit("WinZones", &link(), Instant::now()).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.errors(), &errors);
        assert_eq!(form.input().name, "A");
        assert!(form.reset_remaining(Instant::now()).is_none());
    }

    #[test]
    fn editing_clears_only_that_field_error() {
        let mut form = ContactForm::default();
        let _ = form.submit("WinZones", &link(), Instant::now());
        form.edit_field(Field::Email, |value| value.push('j'));
        assert_eq!(form.errors().get(Field::Email), None);
        assert_eq!(form.errors().get(Field::Name), Some("Name is required"));
        assert_eq!(form.input().email, "j");
    }

    #[test]
    fn reset_fires_after_delay() {
        let mut form = filled();
        let start = Instant::now();
        let submission = form.submit("WinZones", &link(), start).expect("valid");
        assert!(submission.url.starts_with("https://wa.me/918228822825?text="));
        assert_eq!(form.phase(), FormPhase::Submitted);
        assert_eq!(
            form.reset_remaining(start + Duration::from_secs(2)),
            Some(Duration::from_secs(3))
        );

        assert!(!form.tick(start + Duration::from_secs(4)));
        assert_eq!(form.input().name, "Jane Doe");

        assert!(form.tick(start + DEFAULT_RESET_DELAY));
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.input(), &ContactFormInput::default());
        assert!(form.last_submission().is_none());
        assert!(!form.tick(start + Duration::from_secs(60)));
    }

    #[test]
    fn edit_before_expiry_cancels_reset() {
        let mut form = filled();
        let start = Instant::now();
        form.submit("WinZones", &link(), start).expect("valid");
        form.edit_field(Field::Message, |value| value.push_str(" Thanks!"));
        assert_eq!(form.phase(), FormPhase::Editing);
        assert!(!form.tick(start + Duration::from_secs(30)));
        assert_eq!(form.input().message, "Hello, I need help. Thanks!");
    }

    #[test]
    fn resubmit_replaces_deadline() {
        let mut form = ContactForm::new(Duration::from_secs(5));
        form.set_field(Field::Name, "Jane Doe");
        form.set_field(Field::Email, "jane@example.com");
        form.set_field(Field::Subject, "support");
        form.set_field(Field::Message, "Hello, I need help.");
        let start = Instant::now();
        form.submit("WinZones", &link(), start).expect("valid");
        form.submit("WinZones", &link(), start + Duration::from_secs(3))
            .expect("still valid");
        assert!(!form.tick(start + Duration::from_secs(6)));
        assert!(form.tick(start + Duration::from_secs(8)));
    }

    #[test]
    fn clear_is_idempotent() {
        let mut form = filled();
        form.submit("WinZones", &link(), Instant::now()).expect("valid");
        form.clear();
        let once = (form.input().clone(), form.errors().clone(), form.phase());
        form.clear();
        assert_eq!(
            (form.input().clone(), form.errors().clone(), form.phase()),
            once
        );
        assert_eq!(form.phase(), FormPhase::Editing);
        assert!(form.reset_remaining(Instant::now()).is_none());
    }

    #[test]
    fn timer_reports_cancellation() {
        let mut timer = ResetTimer::default();
        assert!(!timer.cancel());
        let now = Instant::now();
        timer.arm(now);
        assert!(timer.is_armed());
        assert!(timer.cancel());
        assert!(!timer.fire_if_due(now));
    }
}
