//! Domain types and rules shared by the content service and its clients.
//!
//! Nothing in this crate performs I/O. The server (`tc-api`) and the admin
//! client (`tc-client`) both depend on it so section rules, coordinate
//! parsing and validation behave identically on either side of the wire.

pub mod blog;
pub mod catalog;
pub mod content;
pub mod error;
pub mod geo;
pub mod inquiry;
pub mod paging;
pub mod site;
pub mod types;
