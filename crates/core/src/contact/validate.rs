use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Subject keys offered by the form, with their display labels.
pub const SUBJECTS: [(&str, &str); 5] = [
    ("general", "General Inquiry"),
    ("support", "Technical Support"),
    ("payment", "Payment Issue"),
    ("feedback", "Feedback"),
    ("partnership", "Partnership"),
];

const MIN_NAME_LEN: usize = 2;
const MIN_MESSAGE_LEN: usize = 10;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("invalid email regex"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9\s-]{10,}$").expect("invalid phone regex"));

/// Resolve a subject key to its label, falling back to the key itself.
pub fn subject_label(key: &str) -> &str {
    SUBJECTS
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, label)| *label)
        .unwrap_or(key)
}

/// The five inputs of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

impl Field {
    /// Every field in form order.
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Subject,
        Field::Message,
    ];

    /// Label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Email => "Email Address",
            Field::Phone => "Phone Number",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    /// Whether the field must be filled in.
    pub fn required(self) -> bool {
        !matches!(self, Field::Phone)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Subject => "subject",
            Field::Message => "message",
        };
        f.write_str(key)
    }
}

/// Raw form values as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// One of the [`SUBJECTS`] keys, or empty when nothing is selected.
    pub subject: String,
    pub message: String,
}

impl ContactFormInput {
    /// Current value of `field`.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    /// Mutable access to the value of `field`.
    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    /// Empty every field.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Check every field.
    pub fn validate(&self) -> ValidationResult {
        validate(self)
    }
}

/// At most one message per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    slots: [Option<&'static str>; 5],
}

impl FormErrors {
    /// Message recorded for `field`, if any.
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.slots[field.index()]
    }

    /// Record `message` for `field`, replacing any earlier one.
    pub fn set(&mut self, field: Field, message: &'static str) {
        self.slots[field.index()] = Some(message);
    }

    /// Drop the message for `field`. Returns whether one was present.
    pub fn clear(&mut self, field: Field) -> bool {
        self.slots[field.index()].take().is_some()
    }

    /// Drop every message.
    pub fn clear_all(&mut self) {
        self.slots = Default::default();
    }

    /// Number of fields with a message.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// True when no field has a message.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// `(field, message)` pairs in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        Field::ALL
            .iter()
            .filter_map(|field| self.get(*field).map(|message| (*field, message)))
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Trimmed, checked form values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    /// `None` when the optional phone was left blank.
    pub phone: Option<String>,
    pub subject_key: String,
    pub subject_label: String,
    pub message: String,
}

/// Either the payload ready to send or the per-field messages.
pub type ValidationResult = Result<ContactPayload, FormErrors>;

/// Check all five fields. Every failing field is reported, each with the
/// message of its first failing rule.
pub fn validate(input: &ContactFormInput) -> ValidationResult {
    let mut errors = FormErrors::default();

    let name = input.name.trim();
    if name.is_empty() {
        errors.set(Field::Name, "Name is required");
    } else if name.chars().count() < MIN_NAME_LEN {
        errors.set(Field::Name, "Name must be at least 2 characters");
    }

    // The pattern runs against the raw value, so padded addresses are rejected.
    let email = input.email.trim();
    if email.is_empty() {
        errors.set(Field::Email, "Email is required");
    } else if !EMAIL_RE.is_match(&input.email) {
        errors.set(Field::Email, "Please enter a valid email address");
    }

    let phone = input.phone.trim();
    if !phone.is_empty() {
        let compact: String = phone.chars().filter(|ch| !ch.is_whitespace()).collect();
        if !PHONE_RE.is_match(&compact) {
            errors.set(Field::Phone, "Please enter a valid phone number");
        }
    }

    let subject = input.subject.trim();
    if subject.is_empty() {
        errors.set(Field::Subject, "Please select a subject");
    }

    let message = input.message.trim();
    if message.is_empty() {
        errors.set(Field::Message, "Message is required");
    } else if message.chars().count() < MIN_MESSAGE_LEN {
        errors.set(Field::Message, "Message must be at least 10 characters");
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ContactPayload {
        name: name.to_string(),
        email: email.to_string(),
        phone: Some(phone.to_string()).filter(|value| !value.is_empty()),
        subject_key: subject.to_string(),
        subject_label: subject_label(subject).to_string(),
        message: message.to_string(),
    })
}
