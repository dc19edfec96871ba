//! Content console: per-tab editing of content items and customer cases.
//!
//! One unit is edited at a time: `Idle -> Editing(draft) -> Idle`. Save
//! persists the draft, returns to idle and refetches everything; cancel
//! discards the draft. A failed save leaves the draft open. Every outcome
//! is reported through the notifier.

use tc_core::content::{editor_fields, EditorFields, EditorTab, Section};
use tc_core::geo::GeoPoint;
use tc_core::types::DbId;

use crate::context::AdminContext;
use crate::error::{ClientError, ClientResult};
use crate::geo::PickedLocation;
use crate::models::{ContentItem, CustomerCase};
use crate::resources::{CaseApi, ContentApi, FileApi, PageQuery};

/// Cases are listed in one page this large.
pub const CASE_LIST_SIZE: i64 = 100;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditState<T> {
    #[default]
    Idle,
    Editing(T),
}

impl<T> EditState<T> {
    pub fn is_editing(&self) -> bool {
        matches!(self, EditState::Editing(_))
    }

    pub fn draft(&self) -> Option<&T> {
        match self {
            EditState::Editing(draft) => Some(draft),
            EditState::Idle => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut T> {
        match self {
            EditState::Editing(draft) => Some(draft),
            EditState::Idle => None,
        }
    }
}

/// Local copy of an item being edited. `coordinates` is the text of the
/// coordinate field, parsed into `location` on save.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft {
    pub item: ContentItem,
    pub coordinates: String,
}

impl ItemDraft {
    fn from_item(item: ContentItem) -> Self {
        let coordinates = item
            .location
            .map(|p| p.to_pair_string())
            .unwrap_or_default();
        Self { item, coordinates }
    }

    /// Which inputs the form shows for this draft.
    pub fn fields(&self) -> EditorFields {
        editor_fields(
            &Section::parse(&self.item.section),
            self.item.title_str(),
            self.item.icon.as_deref(),
        )
    }
}

pub struct ContentEditor {
    ctx: AdminContext,
    tab: EditorTab,
    items: Vec<ContentItem>,
    cases: Vec<CustomerCase>,
    item_edit: EditState<ItemDraft>,
    case_edit: EditState<CustomerCase>,
}

impl ContentEditor {
    /// `tab_query` is the raw `?tab=` value; unknown values open `home`.
    pub fn new(ctx: AdminContext, tab_query: Option<&str>) -> Self {
        Self {
            ctx,
            tab: tab_query
                .and_then(EditorTab::from_query)
                .unwrap_or(EditorTab::Home),
            items: Vec::new(),
            cases: Vec::new(),
            item_edit: EditState::Idle,
            case_edit: EditState::Idle,
        }
    }

    pub fn tab(&self) -> EditorTab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: EditorTab) {
        self.tab = tab;
    }

    /// Fetch all content items and the case list.
    pub async fn refresh(&mut self) -> ClientResult<()> {
        let gateway = &self.ctx.gateway;
        let case_query = PageQuery::sized(CASE_LIST_SIZE);
        let fetched = tokio::try_join!(
            ContentApi::list_all(gateway),
            CaseApi::list(gateway, &case_query),
        );
        match fetched {
            Ok((items, cases)) => {
                self.items = items;
                self.cases = cases.records;
                Ok(())
            }
            Err(e) => {
                self.ctx.notifier.error(&format!("Failed to load content: {e}"));
                Err(e)
            }
        }
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    /// Items edited on `tab`, ordered by section then sort order.
    pub fn items_on(&self, tab: EditorTab) -> Vec<&ContentItem> {
        let mut items: Vec<&ContentItem> = self
            .items
            .iter()
            .filter(|item| Section::parse(&item.section).tab() == Some(tab))
            .collect();
        items.sort_by(|a, b| {
            a.section
                .cmp(&b.section)
                .then(a.sort_order.cmp(&b.sort_order))
        });
        items
    }

    pub fn cases(&self) -> &[CustomerCase] {
        &self.cases
    }

    // ---- content items ----

    /// Start editing an existing item. Returns `false` if it is not loaded.
    pub fn begin_edit(&mut self, id: DbId) -> bool {
        match self.items.iter().find(|item| item.id == Some(id)) {
            Some(item) => {
                self.item_edit = EditState::Editing(ItemDraft::from_item(item.clone()));
                true
            }
            None => false,
        }
    }

    /// Start a new item in `section`, placed after the existing ones.
    pub fn begin_new(&mut self, section: &str) {
        let next_order = self
            .items
            .iter()
            .filter(|item| item.section == section)
            .map(|item| item.sort_order + 1)
            .max()
            .unwrap_or(0);
        self.item_edit = EditState::Editing(ItemDraft::from_item(ContentItem {
            section: section.to_string(),
            sort_order: next_order,
            ..ContentItem::default()
        }));
    }

    pub fn edit_state(&self) -> &EditState<ItemDraft> {
        &self.item_edit
    }

    pub fn draft_mut(&mut self) -> Option<&mut ItemDraft> {
        self.item_edit.draft_mut()
    }

    pub fn cancel(&mut self) {
        self.item_edit = EditState::Idle;
    }

    /// Write a picker result into the draft's coordinate field.
    pub fn apply_picked_location(&mut self, picked: &PickedLocation) -> bool {
        match self.item_edit.draft_mut() {
            Some(draft) => {
                draft.coordinates = picked.pair_string();
                true
            }
            None => false,
        }
    }

    /// Upload a file and use its URL as the draft image. A failed upload
    /// leaves the draft unchanged.
    pub async fn upload_image(&mut self, file_name: &str, bytes: Vec<u8>) -> ClientResult<String> {
        if !self.item_edit.is_editing() {
            return Err(ClientError::Validation("Nothing is being edited".into()));
        }
        match FileApi::upload(&self.ctx.gateway, file_name, bytes).await {
            Ok(url) => {
                if let Some(draft) = self.item_edit.draft_mut() {
                    draft.item.image = Some(url.clone());
                }
                self.ctx.notifier.success("Image uploaded");
                Ok(url)
            }
            Err(e) => {
                self.ctx.notifier.error(&format!("Upload failed: {e}"));
                Err(e)
            }
        }
    }

    /// Persist the draft, then refetch. On failure the draft stays open.
    pub async fn save(&mut self) -> ClientResult<()> {
        let Some(draft) = self.item_edit.draft() else {
            return Err(ClientError::Validation("Nothing is being edited".into()));
        };

        let mut item = draft.item.clone();
        if draft.fields().coordinates {
            match parse_coordinates(&draft.coordinates) {
                Ok(location) => item.location = location,
                Err(e) => {
                    self.ctx.notifier.error(&e.to_string());
                    return Err(e);
                }
            }
        }

        if let Err(e) = ContentApi::save(&self.ctx.gateway, &item).await {
            self.ctx.notifier.error(&format!("Save failed: {e}"));
            return Err(e);
        }

        tracing::info!(id = ?item.id, section = %item.section, "Content item saved");
        self.ctx.notifier.success("Saved");
        self.item_edit = EditState::Idle;
        self.refresh().await
    }

    // ---- customer cases ----

    pub fn begin_case_edit(&mut self, id: DbId) -> bool {
        match self.cases.iter().find(|case| case.id == Some(id)) {
            Some(case) => {
                self.case_edit = EditState::Editing(case.clone());
                true
            }
            None => false,
        }
    }

    pub fn begin_new_case(&mut self) {
        self.case_edit = EditState::Editing(CustomerCase::default());
    }

    pub fn case_state(&self) -> &EditState<CustomerCase> {
        &self.case_edit
    }

    pub fn case_draft_mut(&mut self) -> Option<&mut CustomerCase> {
        self.case_edit.draft_mut()
    }

    pub fn cancel_case(&mut self) {
        self.case_edit = EditState::Idle;
    }

    pub async fn save_case(&mut self) -> ClientResult<()> {
        let Some(case) = self.case_edit.draft().cloned() else {
            return Err(ClientError::Validation("Nothing is being edited".into()));
        };
        if case.title.trim().is_empty() {
            let err = ClientError::Validation("Case title is required".into());
            self.ctx.notifier.error(&err.to_string());
            return Err(err);
        }

        if let Err(e) = CaseApi::save(&self.ctx.gateway, &case).await {
            self.ctx.notifier.error(&format!("Save failed: {e}"));
            return Err(e);
        }

        self.ctx.notifier.success("Saved");
        self.case_edit = EditState::Idle;
        self.refresh().await
    }

    /// Delete a case after confirmation. Returns `false` when cancelled.
    pub async fn delete_case(&mut self, id: DbId) -> ClientResult<bool> {
        if !self.ctx.confirm.confirm("Delete this case?").await {
            return Ok(false);
        }
        if let Err(e) = CaseApi::delete(&self.ctx.gateway, id).await {
            self.ctx.notifier.error(&format!("Delete failed: {e}"));
            return Err(e);
        }
        tracing::info!(id, "Case deleted");
        self.ctx.notifier.success("Deleted");
        self.refresh().await?;
        Ok(true)
    }
}

/// Blank clears the location; anything else must be a `"lat,lng"` pair.
fn parse_coordinates(raw: &str) -> ClientResult<Option<GeoPoint>> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    GeoPoint::parse_pair(raw)
        .map(Some)
        .map_err(|_| ClientError::Validation(format!("Invalid coordinates '{raw}', expected \"lat,lng\"")))
}
