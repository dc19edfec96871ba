//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row and a `Deserialize` save DTO. Save DTOs carry an optional
//! `id`: absent means insert, present means full replacement of that row.
//! Entities serialize with camelCase field names.

pub mod category;
pub mod content_item;
pub mod customer_case;
pub mod dashboard;
pub mod inquiry;
pub mod product;
pub mod user;
pub mod visit_log;
