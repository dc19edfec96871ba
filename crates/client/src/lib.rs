//! Client side of the site: a gateway to the REST API, typed resource
//! clients, and the admin workflows built on them (content editor,
//! inventory, inquiry desk, dashboard, site mode), plus the coordinate
//! picker, route guard and public page view models.
//!
//! Workflows talk to the operator only through [`notify::Notifier`] and
//! [`notify::Confirm`], so the same code drives the `tc-admin` CLI and tests.

pub mod config;
pub mod context;
pub mod dashboard;
pub mod editor;
pub mod error;
pub mod gateway;
pub mod geo;
pub mod guard;
pub mod inquiries;
pub mod inventory;
pub mod models;
pub mod notify;
pub mod pages;
pub mod poller;
pub mod resources;
pub mod session;
pub mod site_mode;
