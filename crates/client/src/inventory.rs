//! Inventory: products and categories.

use std::path::Path;

use tc_core::catalog::{category_exists, normalize_category_name};
use tc_core::types::DbId;

use crate::context::AdminContext;
use crate::error::{ClientError, ClientResult};
use crate::models::{Category, Product};
use crate::resources::products::ProductQuery;
use crate::resources::{CategoryApi, ProductApi};

/// Products are listed in one page this large.
pub const PRODUCT_LIST_SIZE: i64 = 100;

/// File name the product export is offered under.
pub const EXPORT_FILE_NAME: &str = "products.json";

pub struct Inventory {
    ctx: AdminContext,
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl Inventory {
    pub fn new(ctx: AdminContext) -> Self {
        Self {
            ctx,
            products: Vec::new(),
            categories: Vec::new(),
        }
    }

    pub async fn refresh(&mut self) -> ClientResult<()> {
        let gateway = &self.ctx.gateway;
        let query = ProductQuery {
            size: Some(PRODUCT_LIST_SIZE),
            ..ProductQuery::default()
        };
        match tokio::try_join!(ProductApi::list(gateway, &query), CategoryApi::list(gateway)) {
            Ok((products, categories)) => {
                self.products = products.records;
                self.categories = categories;
                Ok(())
            }
            Err(e) => {
                self.ctx.notifier.error(&format!("Failed to load inventory: {e}"));
                Err(e)
            }
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    // ---- products ----

    /// Save a product. A category name not in the loaded list is created
    /// first so the product never references a missing category.
    pub async fn save_product(&mut self, mut product: Product) -> ClientResult<()> {
        if product.name.trim().is_empty() {
            let err = ClientError::Validation("Product name is required".into());
            self.ctx.notifier.error(&err.to_string());
            return Err(err);
        }
        product.category = product
            .category
            .as_deref()
            .map(normalize_category_name)
            .filter(|name| !name.is_empty());

        if let Some(name) = product.category.clone() {
            if let Err(e) = self.ensure_category(&name).await {
                self.ctx.notifier.error(&format!("Failed to create category: {e}"));
                return Err(e);
            }
        }

        if let Err(e) = ProductApi::save(&self.ctx.gateway, &product).await {
            self.ctx.notifier.error(&format!("Save failed: {e}"));
            return Err(e);
        }
        tracing::info!(id = ?product.id, name = %product.name, "Product saved");
        self.ctx.notifier.success("Saved");
        self.refresh().await
    }

    async fn ensure_category(&mut self, name: &str) -> ClientResult<()> {
        if category_exists(name, self.categories.iter().map(|c| c.name.as_str())) {
            return Ok(());
        }
        let category = Category {
            name: name.to_string(),
            sort_order: self.categories.len() as i32,
            ..Category::default()
        };
        CategoryApi::save(&self.ctx.gateway, &category).await?;
        tracing::info!(name, "Category created for product");
        self.categories.push(category);
        Ok(())
    }

    /// Delete a product after confirmation. Returns `false` when cancelled.
    pub async fn delete_product(&mut self, id: DbId) -> ClientResult<bool> {
        if !self.ctx.confirm.confirm("Delete this product?").await {
            return Ok(false);
        }
        if let Err(e) = ProductApi::delete(&self.ctx.gateway, id).await {
            self.ctx.notifier.error(&format!("Delete failed: {e}"));
            return Err(e);
        }
        tracing::info!(id, "Product deleted");
        self.ctx.notifier.success("Deleted");
        self.refresh().await?;
        Ok(true)
    }

    // ---- categories ----

    pub async fn save_category(&mut self, mut category: Category) -> ClientResult<()> {
        category.name = normalize_category_name(&category.name);
        if category.name.is_empty() {
            let err = ClientError::Validation("Category name is required".into());
            self.ctx.notifier.error(&err.to_string());
            return Err(err);
        }
        if let Err(e) = CategoryApi::save(&self.ctx.gateway, &category).await {
            self.ctx.notifier.error(&format!("Save failed: {e}"));
            return Err(e);
        }
        self.ctx.notifier.success("Saved");
        self.refresh().await
    }

    pub async fn delete_category(&mut self, id: DbId) -> ClientResult<bool> {
        if !self.ctx.confirm.confirm("Delete this category?").await {
            return Ok(false);
        }
        if let Err(e) = CategoryApi::delete(&self.ctx.gateway, id).await {
            self.ctx.notifier.error(&format!("Delete failed: {e}"));
            return Err(e);
        }
        self.ctx.notifier.success("Deleted");
        self.refresh().await?;
        Ok(true)
    }

    // ---- export ----

    /// The loaded product list as pretty-printed JSON.
    pub fn export_json(&self) -> ClientResult<String> {
        Ok(serde_json::to_string_pretty(&self.products)?)
    }

    pub async fn export_to(&self, path: &Path) -> ClientResult<()> {
        tokio::fs::write(path, self.export_json()?).await?;
        tracing::info!(path = %path.display(), count = self.products.len(), "Products exported");
        Ok(())
    }
}
