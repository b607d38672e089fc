use serde::{Deserialize, Serialize};

use super::validate::ContactPayload;

/// Messaging service used when no other base is configured.
pub const DEFAULT_MESSAGING_BASE: &str = "https://wa.me";

/// Shown in place of a phone number the sender left blank.
pub const NOT_PROVIDED: &str = "Not provided";

/// Deep-link template: `<base>/<recipient>?text=<encoded>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeepLink {
    base: String,
    recipient: String,
}

impl DeepLink {
    /// Build a template. Trailing slashes on `base` and a leading `+` on
    /// `recipient` are dropped.
    pub fn new(base: impl AsRef<str>, recipient: impl AsRef<str>) -> Self {
        Self {
            base: base.as_ref().trim().trim_end_matches('/').to_string(),
            recipient: recipient.as_ref().trim().trim_start_matches('+').to_string(),
        }
    }

    /// Template pointing at the default messaging service.
    pub fn with_recipient(recipient: impl AsRef<str>) -> Self {
        Self::new(DEFAULT_MESSAGING_BASE, recipient)
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Link that opens a chat with the recipient and no prefilled text.
    pub fn chat_url(&self) -> String {
        format!("{}/{}", self.base, self.recipient)
    }

    /// Link that opens a chat prefilled with `text`.
    pub fn url_for(&self, text: &str) -> String {
        format!("{}?text={}", self.chat_url(), urlencoding::encode(text))
    }

    /// Recover the prefilled text from a link built by [`DeepLink::url_for`].
    pub fn decode_text(url: &str) -> Option<String> {
        let (_, query) = url.split_once("?text=")?;
        urlencoding::decode(query).ok().map(|text| text.into_owned())
    }
}

/// A validated message, rendered and ready for the link opener.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub payload: ContactPayload,
    /// The formatted message block.
    pub text: String,
    /// Deep link carrying `text`.
    pub url: String,
}

impl Submission {
    /// Render `payload` for `site_name` and wrap it in `link`.
    pub fn compose(site_name: &str, link: &DeepLink, payload: ContactPayload) -> Self {
        let text = format_message(site_name, &payload);
        let url = link.url_for(&text);
        Self { payload, text, url }
    }
}

/// Render the message block sent through the messaging service.
pub fn format_message(site_name: &str, payload: &ContactPayload) -> String {
    let phone = payload.phone.as_deref().unwrap_or(NOT_PROVIDED);
    format!(
        "🎮 *New Contact Form Submission - {site}*\n\
         \n\
         👤 *Name:* {name}\n\
         📧 *Email:* {email}\n\
         📱 *Phone:* {phone}\n\
         📋 *Subject:* {subject}\n\
         \n\
         💬 *Message:*\n\
         {message}\n\
         \n\
         ---\n\
         Sent from {site} Website",
        site = site_name,
        name = payload.name,
        email = payload.email,
        phone = phone,
        subject = payload.subject_label,
        message = payload.message,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(phone: Option<&str>) -> ContactPayload {
        ContactPayload {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone: phone.map(String::from),
            subject_key: "general".into(),
            subject_label: "General Inquiry".into(),
            message: "Hello, I need help.".into(),
        }
    }

    #[test]
    fn formats_full_block() {
        let text = format_message("WinZones", &payload(None));
        let expected = "🎮 *New Contact Form Submission - WinZones*\n\
\n\
👤 *Name:* Jane Doe\n\
📧 *Email:* jane@example.com\n\
📱 *Phone:* Not provided\n\
📋 *Subject:* General Inquiry\n\
\n\
💬 *Message:*\n\
Hello, I need help.\n\
\n\
---\n\
Sent from WinZones Website";
        assert_eq!(text, expected);
    }

    #[test]
    fn includes_phone_when_present() {
        let text = format_message("WinZones", &payload(Some("+91 98765 43210")));
        assert!(text.contains("📱 *Phone:* +91 98765 43210\n"));
        assert!(!text.contains(NOT_PROVIDED));
    }

    #[test]
    fn link_normalizes_parts() {
        let link = DeepLink::new("https://wa.me/", "+918228822825");
        assert_eq!(link.chat_url(), "https://wa.me/918228822825");
        assert_eq!(
            link.url_for("hi there & bye"),
            "https://wa.me/918228822825?text=hi%20there%20%26%20bye"
        );
    }

    #[test]
    fn encoded_text_has_no_raw_separators() {
        let link = DeepLink::with_recipient("918228822825");
        let submission = Submission::compose("WinZones", &link, payload(None));
        let (_, query) = submission.url.split_once("?text=").expect("query present");
        assert!(!query.contains(&['\n', ' ', '&', '#', '?'][..]));
        assert_eq!(
            DeepLink::decode_text(&submission.url).as_deref(),
            Some(submission.text.as_str())
        );
    }

    #[test]
    fn decode_requires_text_parameter() {
        assert_eq!(DeepLink::decode_text("https://wa.me/1"), None);
    }
}
