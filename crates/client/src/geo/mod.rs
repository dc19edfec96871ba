//! Geocoding and the map coordinate picker.

pub mod amap;
pub mod picker;

use async_trait::async_trait;
use tc_core::geo::GeoPoint;

use crate::error::ClientResult;

pub use amap::AmapGeocoder;
pub use picker::{LocationPicker, PickedLocation};

/// Forward and reverse geocoding.
///
/// `Ok(None)` means the provider answered but found nothing; `Err` means
/// the provider could not be asked or refused.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(&self, address: &str) -> ClientResult<Option<GeoPoint>>;

    async fn reverse(&self, point: GeoPoint) -> ClientResult<Option<String>>;
}
