//! View models for the public screens.

use tc_core::blog::{self, BlogPost, BlogProfile, BlogProject};
use tc_core::content::{
    is_address_item, SECTION_ABOUT_HERO, SECTION_ABOUT_INTRO, SECTION_CONTACT_INFO,
    SECTION_HOME_ADVANTAGE, SECTION_HOME_HERO,
};
use tc_core::geo::{GeoPoint, DEFAULT_CENTER};
use tc_core::inquiry::ContactForm;
use tc_core::paging::Page;
use tc_core::site::SiteMode;
use tc_core::types::DbId;

use crate::error::ClientResult;
use crate::gateway::Gateway;
use crate::models::{Category, ContentItem, CustomerCase, Product};
use crate::resources::products::ProductQuery;
use crate::resources::{CaseApi, CategoryApi, ContactApi, ContentApi, FileApi, PageQuery, ProductApi};
use crate::site_mode;

/// Featured products shown on the home page.
pub const FEATURED_LIMIT: i64 = 4;

fn sorted(mut items: Vec<ContentItem>) -> Vec<ContentItem> {
    items.sort_by_key(|item| item.sort_order);
    items
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Marketing,
    Blog,
}

/// Pick the public layout from the stored site mode. An unreachable API
/// falls back to the marketing layout.
pub async fn resolve_layout(gateway: &Gateway) -> Layout {
    match site_mode::current_mode(gateway).await {
        Ok(SiteMode::Blog) => Layout::Blog,
        Ok(SiteMode::Default) => Layout::Marketing,
        Err(e) => {
            tracing::warn!(error = %e, "Site mode unavailable, using marketing layout");
            Layout::Marketing
        }
    }
}

// ---------------------------------------------------------------------------
// Marketing pages
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct HomePage {
    pub hero: Option<ContentItem>,
    pub advantages: Vec<ContentItem>,
    pub featured: Vec<Product>,
}

impl HomePage {
    pub async fn load(gateway: &Gateway) -> ClientResult<Self> {
        let featured_query = ProductQuery {
            size: Some(FEATURED_LIMIT),
            featured: Some(true),
            ..ProductQuery::default()
        };
        let (hero, advantages, featured) = tokio::try_join!(
            ContentApi::list_by_section(gateway, SECTION_HOME_HERO),
            ContentApi::list_by_section(gateway, SECTION_HOME_ADVANTAGE),
            ProductApi::list(gateway, &featured_query),
        )?;
        Ok(Self {
            hero: hero.into_iter().next(),
            advantages: sorted(advantages),
            featured: featured.records,
        })
    }
}

#[derive(Debug, Clone)]
pub struct AboutPage {
    pub hero: Option<ContentItem>,
    pub intro: Option<ContentItem>,
}

impl AboutPage {
    pub async fn load(gateway: &Gateway) -> ClientResult<Self> {
        let (hero, intro) = tokio::try_join!(
            ContentApi::list_by_section(gateway, SECTION_ABOUT_HERO),
            ContentApi::list_by_section(gateway, SECTION_ABOUT_INTRO),
        )?;
        Ok(Self {
            hero: hero.into_iter().next(),
            intro: intro.into_iter().next(),
        })
    }
}

/// Product center: category filter, search and paging.
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    pub categories: Vec<Category>,
    pub page: Page<Product>,
}

impl ProductCatalog {
    /// Categories are fetched before products so the filter renders first.
    pub async fn load(gateway: &Gateway, query: &ProductQuery) -> ClientResult<Self> {
        let categories = CategoryApi::list(gateway).await?;
        let page = ProductApi::list(gateway, query).await?;
        Ok(Self { categories, page })
    }
}

pub async fn product_detail(gateway: &Gateway, id: DbId) -> ClientResult<Product> {
    ProductApi::get(gateway, id).await
}

pub async fn cases(gateway: &Gateway, query: &PageQuery) -> ClientResult<Page<CustomerCase>> {
    CaseApi::list(gateway, query).await
}

// ---------------------------------------------------------------------------
// Contact
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct ContactPage {
    pub items: Vec<ContentItem>,
    pub map_center: GeoPoint,
}

impl ContactPage {
    pub async fn load(gateway: &Gateway) -> ClientResult<Self> {
        let items = sorted(ContentApi::list_by_section(gateway, SECTION_CONTACT_INFO).await?);
        let map_center = map_center(&items);
        Ok(Self { items, map_center })
    }
}

/// Location of the first address item that has one, else the default.
pub fn map_center(items: &[ContentItem]) -> GeoPoint {
    items
        .iter()
        .filter(|item| is_address_item(item.title_str(), item.icon.as_deref()))
        .find_map(|item| item.location)
        .unwrap_or(DEFAULT_CENTER)
}

/// An attachment picked but not yet uploaded.
#[derive(Debug, Clone)]
pub struct PendingAttachment {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// The public inquiry form.
#[derive(Debug, Clone, Default)]
pub struct ContactFormState {
    pub form: ContactForm,
    pub attachment: Option<PendingAttachment>,
}

impl ContactFormState {
    /// Validate, upload the attachment if any, then submit once. Invalid
    /// input sends nothing. The form is cleared after success.
    pub async fn submit(&mut self, gateway: &Gateway) -> ClientResult<()> {
        let mut form = self.form.clone().validated()?;

        if let Some(attachment) = &self.attachment {
            let url =
                FileApi::upload(gateway, &attachment.file_name, attachment.bytes.clone()).await?;
            form.attachment = Some(url);
        }

        ContactApi::submit(gateway, &form).await?;
        tracing::info!("Inquiry submitted");
        *self = Self::default();
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Blog
// ---------------------------------------------------------------------------

/// Blog layout data. Static, so nothing is fetched.
#[derive(Debug, Clone)]
pub struct BlogHome {
    pub profile: &'static BlogProfile,
    pub posts: Vec<&'static BlogPost>,
    pub projects: &'static [BlogProject],
}

impl BlogHome {
    pub fn load() -> Self {
        Self {
            profile: blog::profile(),
            posts: blog::posts(),
            projects: blog::projects(),
        }
    }

    pub fn post(&self, id: DbId) -> Option<&'static BlogPost> {
        blog::post(id)
    }
}
