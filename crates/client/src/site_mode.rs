//! Switching the public site between the marketing and blog layouts.
//!
//! The mode lives in the description of the `system_config` content item.

use tc_core::content::SECTION_SYSTEM_CONFIG;
use tc_core::site::SiteMode;

use crate::error::ClientResult;
use crate::gateway::Gateway;
use crate::models::ContentItem;
use crate::resources::ContentApi;

/// Title given to the `system_config` item when none exists yet.
const SYSTEM_CONFIG_TITLE: &str = "Site mode";

pub async fn current_mode(gateway: &Gateway) -> ClientResult<SiteMode> {
    let items = ContentApi::system_config(gateway).await?;
    Ok(SiteMode::from_description(
        items.first().and_then(|item| item.description.as_deref()),
    ))
}

/// Persist `mode`, creating the `system_config` item if it is missing.
pub async fn set_mode(gateway: &Gateway, mode: SiteMode) -> ClientResult<()> {
    let items = ContentApi::system_config(gateway).await?;
    let item = match items.into_iter().next() {
        Some(existing) => ContentItem {
            description: Some(mode.as_str().to_string()),
            ..existing
        },
        None => ContentItem {
            section: SECTION_SYSTEM_CONFIG.to_string(),
            title: Some(SYSTEM_CONFIG_TITLE.to_string()),
            description: Some(mode.as_str().to_string()),
            ..ContentItem::default()
        },
    };
    ContentApi::save(gateway, &item).await?;
    tracing::info!(mode = mode.as_str(), "Site mode changed");
    Ok(())
}

/// Flip the mode and return the new one.
pub async fn toggle(gateway: &Gateway) -> ClientResult<SiteMode> {
    let next = current_mode(gateway).await?.toggled();
    set_mode(gateway, next).await?;
    Ok(next)
}
