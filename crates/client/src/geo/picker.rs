//! Map coordinate picker.
//!
//! The operator selects a point (click or drag) or searches an address.
//! Each selected point is reverse-geocoded for display. Confirm stays
//! disabled until a point is selected; an initial location counts as
//! selected, the default centre does not. Geocoding failures only set an
//! inline message, so the operator can always fall back to typing
//! coordinates.

use std::fmt;
use std::sync::Arc;

use tc_core::geo::{GeoPoint, DEFAULT_CENTER};

use super::Geocoder;

pub const ADDRESS_UNAVAILABLE: &str = "address unavailable";
pub const NO_MATCH: &str = "no match";

/// The confirmed point and the address shown for it.
#[derive(Debug, Clone, PartialEq)]
pub struct PickedLocation {
    pub lat: f64,
    pub lng: f64,
    pub address: String,
}

impl PickedLocation {
    pub fn point(&self) -> GeoPoint {
        GeoPoint {
            lat: self.lat,
            lng: self.lng,
        }
    }

    /// `"lat,lng"` with six decimals, as the coordinate field stores it.
    pub fn pair_string(&self) -> String {
        self.point().to_pair_string()
    }
}

pub struct LocationPicker {
    geocoder: Arc<dyn Geocoder>,
    center: GeoPoint,
    selected: Option<GeoPoint>,
    address: Option<String>,
    message: Option<&'static str>,
}

impl fmt::Debug for LocationPicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocationPicker")
            .field("center", &self.center)
            .field("selected", &self.selected)
            .field("address", &self.address)
            .field("message", &self.message)
            .finish()
    }
}

impl LocationPicker {
    pub fn new(geocoder: Arc<dyn Geocoder>, initial: Option<GeoPoint>) -> Self {
        Self {
            geocoder,
            center: initial.unwrap_or(DEFAULT_CENTER),
            selected: initial,
            address: None,
            message: None,
        }
    }

    /// Resolve the address of the starting point.
    pub async fn open(&mut self) {
        let point = self.selected.unwrap_or(self.center);
        self.resolve_address(point).await;
    }

    /// A point clicked on the map or the marker dropped after a drag.
    pub async fn select(&mut self, point: GeoPoint) {
        self.selected = Some(point);
        self.resolve_address(point).await;
    }

    /// Forward-geocode `text` and select the first match. Returns whether
    /// a point was found.
    pub async fn search(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        match self.geocoder.geocode(text).await {
            Ok(Some(point)) => {
                self.center = point;
                self.select(point).await;
                true
            }
            Ok(None) => {
                self.message = Some(NO_MATCH);
                false
            }
            Err(e) => {
                tracing::warn!(error = %e, query = text, "Address search failed");
                self.message = Some(NO_MATCH);
                false
            }
        }
    }

    pub fn can_confirm(&self) -> bool {
        self.selected.is_some()
    }

    /// The picked location, or `None` while confirm is disabled.
    pub fn confirm(&self) -> Option<PickedLocation> {
        let point = self.selected?;
        Some(PickedLocation {
            lat: point.lat,
            lng: point.lng,
            address: self.address.clone().unwrap_or_default(),
        })
    }

    pub fn center(&self) -> GeoPoint {
        self.center
    }

    pub fn selected(&self) -> Option<GeoPoint> {
        self.selected
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Inline message under the map, if any.
    pub fn message(&self) -> Option<&'static str> {
        self.message
    }

    async fn resolve_address(&mut self, point: GeoPoint) {
        match self.geocoder.reverse(point).await {
            Ok(Some(address)) => {
                self.address = Some(address);
                self.message = None;
            }
            Ok(None) => {
                self.address = None;
                self.message = Some(ADDRESS_UNAVAILABLE);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Reverse geocoding failed");
                self.address = None;
                self.message = Some(ADDRESS_UNAVAILABLE);
            }
        }
    }
}
