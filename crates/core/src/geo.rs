//! Geographic coordinates attached to content items.
//!
//! Coordinates travel in two shapes: the typed [`GeoPoint`] stored on a
//! content item, and the `"lat,lng"` text form the editor's coordinate field
//! holds (typed by hand or produced by the map picker).

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Pattern every serialized coordinate pair matches.
pub const COORDINATE_PAIR_PATTERN: &str = r"^-?\d+(\.\d+)?,-?\d+(\.\d+)?$";

static COORDINATE_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(COORDINATE_PAIR_PATTERN).expect("pattern is valid"));

/// Decimal places written when serializing a pair.
const PAIR_PRECISION: usize = 6;

/// Map centre used when no address location has been recorded (Suzhou).
pub const DEFAULT_CENTER: GeoPoint = GeoPoint {
    lat: 31.365372,
    lng: 120.782874,
};

/// A WGS-84 / GCJ-02 latitude-longitude pair. Deserialization applies the
/// same range checks as [`GeoPoint::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGeoPoint")]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Deserialize)]
struct RawGeoPoint {
    lat: f64,
    lng: f64,
}

impl TryFrom<RawGeoPoint> for GeoPoint {
    type Error = CoreError;

    fn try_from(raw: RawGeoPoint) -> Result<Self, Self::Error> {
        GeoPoint::new(raw.lat, raw.lng)
    }
}

impl GeoPoint {
    /// Build a point, rejecting out-of-range or non-finite values.
    pub fn new(lat: f64, lng: f64) -> Result<Self, CoreError> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(CoreError::Validation(format!(
                "Latitude {lat} is outside -90..=90"
            )));
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(CoreError::Validation(format!(
                "Longitude {lng} is outside -180..=180"
            )));
        }
        Ok(Self { lat, lng })
    }

    /// Parse the `"lat,lng"` text form. Whitespace around either number is
    /// tolerated since operators type this by hand.
    pub fn parse_pair(raw: &str) -> Result<Self, CoreError> {
        let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        if !COORDINATE_PAIR.is_match(&compact) {
            return Err(CoreError::Validation(format!(
                "'{raw}' is not a \"lat,lng\" coordinate pair"
            )));
        }
        let (lat, lng) = compact
            .split_once(',')
            .ok_or_else(|| CoreError::Validation(format!("'{raw}' has no comma")))?;
        let lat: f64 = lat
            .parse()
            .map_err(|_| CoreError::Validation(format!("Invalid latitude '{lat}'")))?;
        let lng: f64 = lng
            .parse()
            .map_err(|_| CoreError::Validation(format!("Invalid longitude '{lng}'")))?;
        Self::new(lat, lng)
    }

    /// Parse a geocoding provider's `"lng,lat"` location string.
    pub fn parse_lng_lat(raw: &str) -> Result<Self, CoreError> {
        let (lng, lat) = raw
            .split_once(',')
            .ok_or_else(|| CoreError::Validation(format!("'{raw}' has no comma")))?;
        let lng: f64 = lng
            .trim()
            .parse()
            .map_err(|_| CoreError::Validation(format!("Invalid longitude '{lng}'")))?;
        let lat: f64 = lat
            .trim()
            .parse()
            .map_err(|_| CoreError::Validation(format!("Invalid latitude '{lat}'")))?;
        Self::new(lat, lng)
    }

    /// Serialize as `"lat,lng"` with six decimals.
    pub fn to_pair_string(&self) -> String {
        format!(
            "{:.prec$},{:.prec$}",
            self.lat,
            self.lng,
            prec = PAIR_PRECISION
        )
    }

    /// Provider order, `"lng,lat"`.
    pub fn to_lng_lat_string(&self) -> String {
        format!(
            "{:.prec$},{:.prec$}",
            self.lng,
            self.lat,
            prec = PAIR_PRECISION
        )
    }
}

/// Whether `raw` is a well-formed serialized pair.
pub fn is_coordinate_pair(raw: &str) -> bool {
    COORDINATE_PAIR.is_match(raw)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn deserialization_checks_ranges() {
        let point: GeoPoint = serde_json::from_str(r#"{"lat":31.3,"lng":120.6}"#).unwrap();
        assert_eq!(point, GeoPoint::new(31.3, 120.6).unwrap());
        assert!(serde_json::from_str::<GeoPoint>(r#"{"lat":999,"lng":0}"#).is_err());
        assert!(serde_json::from_str::<GeoPoint>(r#"{"lat":0,"lng":-181}"#).is_err());
    }

    #[test]
    fn pair_string_matches_the_published_pattern() {
        let point = GeoPoint::new(-33.8688, 151.2093).unwrap();
        let pair = point.to_pair_string();
        assert_eq!(pair, "-33.868800,151.209300");
        assert!(is_coordinate_pair(&pair));
    }

    #[test]
    fn parses_hand_typed_pairs_with_spaces() {
        let point = GeoPoint::parse_pair(" 31.365372 , 120.782874 ").unwrap();
        assert_eq!(point, DEFAULT_CENTER);
    }

    #[test]
    fn rejects_garbage_and_out_of_range() {
        assert_matches!(GeoPoint::parse_pair("north"), Err(CoreError::Validation(_)));
        assert_matches!(GeoPoint::parse_pair("31.3;120.7"), Err(CoreError::Validation(_)));
        assert_matches!(GeoPoint::parse_pair("91,10"), Err(CoreError::Validation(_)));
        assert_matches!(GeoPoint::parse_pair("10,181"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn provider_order_is_lng_first() {
        let point = GeoPoint::parse_lng_lat("120.782874,31.365372").unwrap();
        assert_eq!(point, DEFAULT_CENTER);
        assert_eq!(point.to_lng_lat_string(), "120.782874,31.365372");
    }
}
