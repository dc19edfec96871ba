//! Handlers for the `/content` resource.

use axum::extract::{Path, State};
use axum::Json;
use tc_core::content::Section;
use tc_core::error::CoreError;
use tc_core::geo::{is_coordinate_pair, GeoPoint};
use tc_db::models::content_item::{ContentItem, SaveContentItem};
use tc_db::repositories::ContentItemRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::require_text;
use crate::middleware::auth::AuthUser;
use crate::response::{ok_true, ApiResponse};
use crate::state::AppState;

/// GET /api/content/all
pub async fn list_all(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<ContentItem>>>> {
    let items = ContentItemRepo::list_all(&state.pool).await?;
    tracing::debug!(count = items.len(), "Fetched all content items");
    Ok(ApiResponse::ok(items))
}

/// GET /api/content/{section}
pub async fn list_by_section(
    State(state): State<AppState>,
    Path(section): Path<String>,
) -> AppResult<Json<ApiResponse<Vec<ContentItem>>>> {
    let items = ContentItemRepo::list_by_section(&state.pool, &section).await?;
    Ok(ApiResponse::ok(items))
}

/// POST /api/content
///
/// Creates the item when `id` is absent, otherwise replaces it. A second
/// item in a singleton section is rejected with 409.
pub async fn save(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<SaveContentItem>,
) -> AppResult<Json<ApiResponse<bool>>> {
    require_text("section", &input.section)?;
    let input = migrate_legacy_location(input);
    let section = Section::parse(&input.section);

    match input.id {
        Some(id) => {
            ContentItemRepo::update(&state.pool, id, &input)
                .await?
                .ok_or(AppError::Core(CoreError::NotFound {
                    entity: "ContentItem",
                    id,
                }))?;
            tracing::info!(user_id = auth.user_id, id, section = %section, "Content item updated");
        }
        None => {
            if section.is_singleton()
                && ContentItemRepo::count_in_section(&state.pool, section.as_str()).await? > 0
            {
                return Err(AppError::Core(CoreError::Conflict(format!(
                    "Section '{section}' already has an item"
                ))));
            }
            let item = ContentItemRepo::create(&state.pool, &input).await?;
            tracing::info!(user_id = auth.user_id, id = item.id, section = %section, "Content item created");
        }
    }

    Ok(ok_true())
}

/// Older clients put the `"lat,lng"` pair in `image`. Move it to `location`
/// so `image` only ever holds an image URL.
fn migrate_legacy_location(mut input: SaveContentItem) -> SaveContentItem {
    if input.location.is_some() {
        return input;
    }
    let legacy = input
        .image
        .as_deref()
        .filter(|raw| is_coordinate_pair(raw.trim()))
        .and_then(|raw| GeoPoint::parse_pair(raw).ok());
    if let Some(point) = legacy {
        input.location = Some(point);
        input.image = None;
    }
    input
}
