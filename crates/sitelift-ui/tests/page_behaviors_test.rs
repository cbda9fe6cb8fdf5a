//! Peripheral page behaviors driven the way the browser wiring drives them.

use sitelift_ui::prelude::*;
use std::time::Duration;

#[test]
fn in_page_navigation_closes_open_menu() {
    let hints = vec![AnchorHint::new(
        "#services",
        "in-view",
        Duration::from_millis(250),
    )];
    let mut menu = MenuState::new();
    menu.toggle();

    let plan = ScrollPlan::for_href("#services", &hints).expect("scrolls");
    if plan.close_menu {
        menu.close();
    }
    assert_eq!(menu.aria_expanded(), "false");
    assert_eq!(plan.hint.map(|hint| hint.delay), Some(Duration::from_millis(250)));

    assert!(ScrollPlan::for_href("#", &hints).is_none());
}

#[test]
fn contact_form_round_trip() {
    let mut form = ContactForm::new();

    let rejected = form.submit(|field| match field {
        ContactField::FirstName => Some(String::new()),
        ContactField::Email => Some("ada@example.com".into()),
        ContactField::Message => Some("Hi".into()),
        ContactField::LastName => None,
    });
    assert_eq!(
        rejected,
        SubmitOutcome::Rejected {
            first_invalid: Some(ContactField::FirstName)
        }
    );
    assert_eq!(FormHint::INCOMPLETE.kind, Some(HintKind::Error));

    let accepted = form.submit(|field| match field {
        ContactField::FirstName => Some("Ada".into()),
        ContactField::Email => Some("ada@example.com".into()),
        ContactField::Message => Some("Hi".into()),
        ContactField::LastName => None,
    });
    assert_eq!(accepted, SubmitOutcome::Sending);
    assert_eq!(FormHint::SENDING.kind, None);
    assert_eq!(ContactForm::SEND_DELAY, Duration::from_millis(500));

    let done = form.complete();
    assert_eq!(done.kind.map(HintKind::class_name), Some("success"));
    assert!(!form.is_sending());
}

#[test]
fn modal_escape_restores_focus() {
    let mut modal = ModalState::new("privacy");
    modal.open(Some("privacy-link"));
    assert!(modal.closes_on_key("Escape"));
    let dismissal = modal.close().expect("was open");
    assert_eq!(dismissal.return_focus, Some("privacy-link"));
    assert!(!modal.closes_on_key("Escape"));
}

#[test]
fn footer_reveal_keeps_observing() {
    let policy = RevealPolicy::new(".site-footer", 0.2, false);
    let mut state = RevealState::default();
    match policy.start(false, true) {
        RevealStart::Observe { threshold } => assert_eq!(threshold, 0.2),
        RevealStart::Immediate => panic!("observer is available"),
    }
    assert_eq!(state.on_intersection(true, policy.once), RevealAction::Reveal);
}
