mod common;

use assert_matches::assert_matches;
use serde_json::json;

use common::Harness;
use tc_client::error::ClientError;
use tc_client::pages::{ContactFormState, ContactPage, HomePage, PendingAttachment};
use tc_core::content::{SECTION_CONTACT_INFO, SECTION_HOME_ADVANTAGE, SECTION_HOME_HERO};
use tc_core::geo::{GeoPoint, DEFAULT_CENTER};
use tc_core::inquiry::ContactForm;

fn filled_form() -> ContactForm {
    ContactForm {
        name: "Li Wei".into(),
        phone: "13800000000".into(),
        email: Some("li.wei@example.com".into()),
        content: "Quote for 500 flanges".into(),
        attachment: None,
    }
}

#[tokio::test]
async fn contact_form_submits_exactly_once_and_resets() {
    let h = Harness::start().await;
    let mut state = ContactFormState {
        form: filled_form(),
        attachment: None,
    };

    state.submit(&h.gateway).await.unwrap();

    let server = h.state();
    assert_eq!(server.count_calls("POST /api/contact"), 1);
    assert_eq!(server.contacts.len(), 1);
    assert_eq!(server.contacts[0]["name"], "Li Wei");
    assert_eq!(state.form, ContactForm::default());
}

#[tokio::test]
async fn contact_form_missing_phone_sends_nothing() {
    let h = Harness::start().await;
    let mut state = ContactFormState {
        form: ContactForm {
            phone: "  ".into(),
            ..filled_form()
        },
        attachment: None,
    };

    let err = state.submit(&h.gateway).await.unwrap_err();

    assert_matches!(err, ClientError::Validation(_));
    assert!(h.state().calls.is_empty());
    assert_eq!(state.form.name, "Li Wei");
}

#[tokio::test]
async fn attachment_is_uploaded_before_submission() {
    let h = Harness::start().await;
    let mut state = ContactFormState {
        form: filled_form(),
        attachment: Some(PendingAttachment {
            file_name: "drawing.pdf".into(),
            bytes: b"%PDF-1.4".to_vec(),
        }),
    };

    state.submit(&h.gateway).await.unwrap();

    let server = h.state();
    assert_eq!(
        server.calls,
        vec!["POST /api/file/upload".to_string(), "POST /api/contact".to_string()]
    );
    assert_eq!(server.contacts[0]["attachment"], json!(server.uploads[0]));
    assert!(state.attachment.is_none());
}

#[tokio::test]
async fn home_page_shows_hero_advantages_and_featured_products() {
    let h = Harness::start().await;
    {
        let mut server = h.state();
        server.seed_content(json!({ "section": SECTION_HOME_HERO, "title": "Precision parts" }));
        server.seed_content(json!({ "section": SECTION_HOME_ADVANTAGE, "title": "B", "sortOrder": 2 }));
        server.seed_content(json!({ "section": SECTION_HOME_ADVANTAGE, "title": "A", "sortOrder": 1 }));
        server.products.push(json!({ "id": 1, "name": "Flange", "isFeatured": true }));
        server.products.push(json!({ "id": 2, "name": "Bolt", "isFeatured": false }));
    }

    let home = HomePage::load(&h.gateway).await.unwrap();

    assert_eq!(home.hero.map(|hero| hero.title_str().to_string()).as_deref(), Some("Precision parts"));
    let advantages: Vec<&str> = home.advantages.iter().map(|a| a.title_str()).collect();
    assert_eq!(advantages, ["A", "B"]);
    assert_eq!(home.featured.len(), 1);
    assert_eq!(home.featured[0].name, "Flange");
}

#[tokio::test]
async fn contact_page_centres_map_on_the_address() {
    let h = Harness::start().await;
    h.state().seed_content(json!({
        "section": SECTION_CONTACT_INFO,
        "title": "Address",
        "location": { "lat": 31.2, "lng": 120.5 },
    }));

    let page = ContactPage::load(&h.gateway).await.unwrap();

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.map_center, GeoPoint::new(31.2, 120.5).unwrap());
}

#[tokio::test]
async fn contact_page_without_location_uses_default_centre() {
    let h = Harness::start().await;

    let page = ContactPage::load(&h.gateway).await.unwrap();

    assert!(page.items.is_empty());
    assert_eq!(page.map_center, DEFAULT_CENTER);
}
