mod common;

use assert_matches::assert_matches;
use serde_json::json;

use common::Harness;
use tc_client::dashboard::DashboardView;
use tc_client::editor::{ContentEditor, EditState};
use tc_client::error::ClientError;
use tc_client::inquiries::InquiryDesk;
use tc_client::inventory::Inventory;
use tc_client::models::Product;
use tc_client::notify::ToastKind;
use tc_client::pages::{resolve_layout, Layout};
use tc_client::site_mode;
use tc_core::content::{SECTION_CONTACT_INFO, SECTION_HOME_HERO, SECTION_SYSTEM_CONFIG};
use tc_core::inquiry::InquiryStatus;
use tc_core::site::SiteMode;
use tc_core::types::DbId;

// ---------------------------------------------------------------------------
// Inventory
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_category_is_created_before_the_product() {
    let h = Harness::logged_in().await;
    h.state().seed_category("Bearings");
    let mut inventory = Inventory::new(h.ctx(true));
    inventory.refresh().await.unwrap();

    let product = Product {
        name: "Flange".into(),
        category: Some("  Machined   parts ".into()),
        ..Product::default()
    };
    inventory.save_product(product).await.unwrap();

    {
        let state = h.state();
        let category_at = state.calls.iter().position(|c| c == "POST /api/categories");
        let product_at = state.calls.iter().position(|c| c == "POST /api/products");
        assert!(category_at.is_some());
        assert!(category_at < product_at);
        assert_eq!(state.products[0]["category"], "Machined parts");
    }
    let names: Vec<&str> = inventory.categories().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Bearings", "Machined parts"]);
    assert_eq!(inventory.products().len(), 1);
    assert_eq!(h.notifier.last(), Some((ToastKind::Success, "Saved".to_string())));
}

#[tokio::test]
async fn known_category_is_not_created_again() {
    let h = Harness::logged_in().await;
    h.state().seed_category("Bearings");
    let mut inventory = Inventory::new(h.ctx(true));
    inventory.refresh().await.unwrap();

    let product = Product {
        name: "Ball bearing".into(),
        category: Some("Bearings".into()),
        ..Product::default()
    };
    inventory.save_product(product).await.unwrap();

    assert_eq!(h.state().count_calls("POST /api/categories"), 0);
    assert_eq!(h.state().count_calls("POST /api/products"), 1);
}

#[tokio::test]
async fn nameless_product_is_rejected_locally() {
    let h = Harness::logged_in().await;
    let mut inventory = Inventory::new(h.ctx(true));

    let err = inventory.save_product(Product::default()).await.unwrap_err();

    assert_matches!(err, ClientError::Validation(_));
    assert_eq!(h.state().count_calls("POST /api/products"), 0);
    assert_eq!(h.notifier.count(ToastKind::Error), 1);
}

#[tokio::test]
async fn cancelled_product_delete_sends_nothing() {
    let h = Harness::logged_in().await;
    h.state().products.push(json!({ "id": 7, "name": "Flange" }));
    let mut inventory = Inventory::new(h.ctx(false));
    inventory.refresh().await.unwrap();

    assert!(!inventory.delete_product(7).await.unwrap());
    assert_eq!(h.state().count_calls("DELETE /api/products/7"), 0);
    assert_eq!(inventory.products().len(), 1);
}

#[tokio::test]
async fn confirmed_deletes_report_success() {
    let h = Harness::logged_in().await;
    h.state().products.push(json!({ "id": 7, "name": "Flange" }));
    let category = h.state().seed_category("Bearings");
    let mut inventory = Inventory::new(h.ctx(true));
    inventory.refresh().await.unwrap();

    assert!(inventory.delete_product(7).await.unwrap());
    assert_eq!(h.notifier.last(), Some((ToastKind::Success, "Deleted".to_string())));
    assert!(inventory.products().is_empty());

    assert!(inventory.delete_category(category).await.unwrap());
    assert_eq!(h.notifier.count(ToastKind::Success), 2);
    assert!(inventory.categories().is_empty());
}

#[tokio::test]
async fn export_writes_loaded_products() {
    let h = Harness::logged_in().await;
    h.state().products.push(json!({ "id": 7, "name": "Flange", "price": 12.5 }));
    let mut inventory = Inventory::new(h.ctx(true));
    inventory.refresh().await.unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("products.json");

    inventory.export_to(&path).await.unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written[0]["name"], "Flange");
    assert_eq!(written[0]["price"], 12.5);
}

// ---------------------------------------------------------------------------
// Inquiries
// ---------------------------------------------------------------------------

#[tokio::test]
async fn inquiry_delete_requires_confirmation() {
    let h = Harness::logged_in().await;
    let id = h.state().seed_inquiry("Li Wei", "unread");
    let delete_call = format!("DELETE /api/inquiries/{id}");

    let mut cancelled = InquiryDesk::new(h.ctx(false));
    cancelled.refresh().await.unwrap();
    assert!(!cancelled.delete(id).await.unwrap());
    assert_eq!(h.state().count_calls(&delete_call), 0);

    let mut confirmed = InquiryDesk::new(h.ctx(true));
    confirmed.refresh().await.unwrap();
    assert!(confirmed.delete(id).await.unwrap());
    assert_eq!(h.state().count_calls(&delete_call), 1);
    assert!(confirmed.inquiries().is_empty());
}

#[tokio::test]
async fn toggle_read_flips_status() {
    let h = Harness::logged_in().await;
    let unread = h.state().seed_inquiry("Li Wei", "unread");
    let processed = h.state().seed_inquiry("Zhang San", "processed");
    let mut desk = InquiryDesk::new(h.ctx(true));
    desk.refresh().await.unwrap();
    assert_eq!(desk.unread(), 1);

    desk.toggle_read(unread).await.unwrap();
    desk.toggle_read(processed).await.unwrap();

    let status_of = |id: DbId| desk.inquiries().iter().find(|i| i.id == id).map(|i| i.status);
    assert_eq!(status_of(unread), Some(InquiryStatus::Read));
    assert_eq!(status_of(processed), Some(InquiryStatus::Unread));
    assert_eq!(desk.unread(), 1);
}

// ---------------------------------------------------------------------------
// Content editor
// ---------------------------------------------------------------------------

fn address_item() -> serde_json::Value {
    json!({
        "section": SECTION_CONTACT_INFO,
        "title": "公司地址",
        "icon": "location_on",
        "sortOrder": 0,
    })
}

#[tokio::test]
async fn case_delete_requires_confirmation() {
    let h = Harness::logged_in().await;
    let id = h.state().seed_case("Plant retrofit");
    let delete_call = format!("DELETE /api/cases/{id}");

    let mut editor = ContentEditor::new(h.ctx(false), Some("cases"));
    editor.refresh().await.unwrap();
    assert!(!editor.delete_case(id).await.unwrap());
    assert_eq!(h.state().count_calls(&delete_call), 0);
    assert_eq!(editor.cases().len(), 1);

    let mut editor = ContentEditor::new(h.ctx(true), Some("cases"));
    editor.refresh().await.unwrap();
    assert!(editor.delete_case(id).await.unwrap());
    assert_eq!(h.state().count_calls(&delete_call), 1);
    assert!(editor.cases().is_empty());
}

#[tokio::test]
async fn coordinates_are_parsed_into_location_on_save() {
    let h = Harness::logged_in().await;
    let id = h.state().seed_content(address_item());
    let mut editor = ContentEditor::new(h.ctx(true), Some("contact"));
    editor.refresh().await.unwrap();

    assert!(editor.begin_edit(id));
    editor.draft_mut().unwrap().coordinates = "31.3, 120.6".into();
    editor.save().await.unwrap();

    assert_matches!(editor.edit_state(), EditState::Idle);
    let stored = h.state().content[0].clone();
    assert_eq!(stored["location"], json!({ "lat": 31.3, "lng": 120.6 }));
}

#[tokio::test]
async fn malformed_coordinates_block_the_save() {
    let h = Harness::logged_in().await;
    let id = h.state().seed_content(address_item());
    let mut editor = ContentEditor::new(h.ctx(true), Some("contact"));
    editor.refresh().await.unwrap();

    assert!(editor.begin_edit(id));
    editor.draft_mut().unwrap().coordinates = "north of the river".into();
    let err = editor.save().await.unwrap_err();

    assert_matches!(err, ClientError::Validation(_));
    assert_eq!(h.state().count_calls("POST /api/content"), 0);
    assert!(editor.edit_state().is_editing());
    assert_eq!(h.notifier.count(ToastKind::Error), 1);
}

#[tokio::test]
async fn failed_save_keeps_the_draft() {
    let h = Harness::logged_in().await;
    let id = h.state().seed_content(json!({ "section": SECTION_HOME_HERO, "title": "Old" }));
    h.state().fail_content_save = true;
    let mut editor = ContentEditor::new(h.ctx(true), None);
    editor.refresh().await.unwrap();

    assert!(editor.begin_edit(id));
    editor.draft_mut().unwrap().item.title = Some("New".into());
    let err = editor.save().await.unwrap_err();

    assert_matches!(err, ClientError::Rejected { code: 500, .. });
    let draft = editor.edit_state().draft().unwrap();
    assert_eq!(draft.item.title.as_deref(), Some("New"));
    assert_eq!(h.state().content[0]["title"], "Old");
}

#[tokio::test]
async fn uploaded_image_lands_in_the_draft() {
    let h = Harness::logged_in().await;
    let mut editor = ContentEditor::new(h.ctx(true), None);
    editor.refresh().await.unwrap();
    editor.begin_new(SECTION_HOME_HERO);

    let url = editor.upload_image("hero.png", vec![0x89, b'P', b'N', b'G']).await.unwrap();

    assert!(url.starts_with("/uploads/"));
    let draft = editor.edit_state().draft().unwrap();
    assert_eq!(draft.item.image.as_deref(), Some(url.as_str()));
    assert_eq!(h.state().uploads, vec![url]);
}

#[tokio::test]
async fn failed_upload_leaves_the_image_alone() {
    let h = Harness::logged_in().await;
    h.state().fail_upload = true;
    let mut editor = ContentEditor::new(h.ctx(true), None);
    editor.refresh().await.unwrap();
    editor.begin_new(SECTION_HOME_HERO);

    assert!(editor.upload_image("hero.png", vec![1, 2, 3]).await.is_err());

    assert_eq!(editor.edit_state().draft().unwrap().item.image, None);
    assert_eq!(h.notifier.count(ToastKind::Error), 1);
}

// ---------------------------------------------------------------------------
// Site mode and dashboard
// ---------------------------------------------------------------------------

#[tokio::test]
async fn toggling_to_blog_persists_and_switches_layout() {
    let h = Harness::logged_in().await;
    assert_eq!(resolve_layout(&h.gateway).await, Layout::Marketing);

    let mode = site_mode::toggle(&h.gateway).await.unwrap();

    assert_eq!(mode, SiteMode::Blog);
    {
        let state = h.state();
        let configs: Vec<_> = state
            .content
            .iter()
            .filter(|c| c["section"] == SECTION_SYSTEM_CONFIG)
            .collect();
        assert_eq!(configs.len(), 1);
        assert_eq!(configs[0]["description"], "blog");
    }
    assert_eq!(resolve_layout(&h.gateway).await, Layout::Blog);

    assert_eq!(site_mode::toggle(&h.gateway).await.unwrap(), SiteMode::Default);
    assert_eq!(h.state().content.len(), 1);
    assert_eq!(resolve_layout(&h.gateway).await, Layout::Marketing);
}

#[tokio::test]
async fn dashboard_combines_stats_and_trend() {
    let h = Harness::logged_in().await;
    h.state().seed_inquiry("Li Wei", "unread");

    let view = DashboardView::load(&h.gateway).await.unwrap();

    assert_eq!(view.stats.inquiry_count, 1);
    assert_eq!(view.trend.len(), 7);
    assert_eq!(view.visits_this_week(), 12);
    assert_eq!(view.top_location().map(|g| g.name.as_str()), Some("Jiangsu"));
}
