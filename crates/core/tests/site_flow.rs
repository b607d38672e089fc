use std::time::{Duration, Instant};

use winzones_core::{
    catalog::{featured, FEATURED_LIMIT},
    contact::{FormPhase, Submission, NOT_PROVIDED},
    filter, validate, AppConfig, ContactForm, ContactFormInput, DeepLink, Field, SiteContent,
    ALL_GAMES,
};

fn form_input(name: &str, email: &str, phone: &str, subject: &str, message: &str) -> ContactFormInput {
    ContactFormInput {
        name: name.into(),
        email: email.into(),
        phone: phone.into(),
        subject: subject.into(),
        message: message.into(),
    }
}

#[test]
fn invalid_form_reports_four_fields() {
    let errors = validate(&form_input("A", "bad", "", "", "hi")).unwrap_err();
    let fields: Vec<Field> = errors.iter().map(|(field, _)| field).collect();
    assert_eq!(
        fields,
        [Field::Name, Field::Email, Field::Subject, Field::Message]
    );
}

#[test]
fn submission_text_round_trips_through_the_link() {
    let content = SiteContent::builtin();
    let link = AppConfig::default().deep_link(&content);
    let input = form_input(
        "Jane Doe",
        "jane@example.com",
        "",
        "general",
        "Hello, I need help.",
    );
    let payload = validate(&input).expect("valid form");
    let submission =
        Submission::compose(&content.site.name, &link, payload);

    assert!(submission
        .url
        .starts_with("https://wa.me/918228822825?text="));
    let decoded = DeepLink::decode_text(&submission.url).expect("text parameter");
    assert_eq!(decoded, submission.text);
    let phone_line = format!("*Phone:* {NOT_PROVIDED}");
    for expected in [
        "*Name:* Jane Doe",
        "*Email:* jane@example.com",
        phone_line.as_str(),
        "*Subject:* General Inquiry",
        "Hello, I need help.",
        "Sent from WinZones Website",
    ] {
        assert!(decoded.contains(expected), "missing {expected:?}");
    }
}

#[test]
fn round_trip_keeps_special_characters() {
    let link = DeepLink::with_recipient("918228822825");
    let input = form_input(
        "Zoë O'Brien",
        "zoe+test@example.co.in",
        "+91 98765-43210",
        "payment",
        "Paid ₹500 & got 100% nothing? #help",
    );
    let payload = validate(&input).expect("valid form");
    let submission = Submission::compose("WinZones", &link, payload);
    let decoded = DeepLink::decode_text(&submission.url).expect("text parameter");
    assert!(decoded.contains("*Name:* Zoë O'Brien\n"));
    assert!(decoded.contains("*Phone:* +91 98765-43210\n"));
    assert!(decoded.contains("*Subject:* Payment Issue\n"));
    assert!(decoded.contains("Paid ₹500 & got 100% nothing? #help\n"));
}

#[test]
fn catalog_views_for_the_standard_site() {
    let content = SiteContent::builtin();

    let everything = filter(&content.games, ALL_GAMES, "");
    assert_eq!(everything.available.len(), 6);
    assert_eq!(everything.coming_soon.len(), 2);

    let cards = filter(&content.games, "Card Games", "");
    assert!(cards
        .available
        .iter()
        .chain(cards.coming_soon.iter())
        .all(|game| game.category == "Card Games"));
    assert_eq!(cards.len(), 3);

    for category in &content.categories {
        let view = filter(&content.games, category, "");
        assert!(view.available.iter().all(|game| !game.coming_soon));
        assert!(view.coming_soon.iter().all(|game| game.coming_soon));
    }

    let home = featured(&content.games, FEATURED_LIMIT);
    let ids: Vec<u32> = home.iter().map(|game| game.id).collect();
    assert_eq!(ids, [1, 2, 3, 4]);
}

#[test]
fn form_lifecycle_clears_after_delay() {
    let content = SiteContent::builtin();
    let config = AppConfig::default();
    let link = config.deep_link(&content);
    let mut form = ContactForm::new(config.reset_delay());

    form.set_field(Field::Name, "Jane Doe");
    form.set_field(Field::Email, "jane@example.com");
    form.set_field(Field::Subject, "feedback");
    form.set_field(Field::Message, "Love the new Ludo tables!");

    let start = Instant::now();
    let submission = form
        .submit(&content.site.name, &link, start)
        .expect("valid form");
    assert_eq!(submission.payload.subject_label, "Feedback");
    assert_eq!(form.phase(), FormPhase::Submitted);

    assert!(!form.tick(start + Duration::from_millis(4_999)));
    assert!(form.tick(start + Duration::from_secs(5)));
    assert_eq!(form.input(), &ContactFormInput::default());
}
