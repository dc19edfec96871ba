//! AMap web-service geocoder (`/v3/geocode/geo`, `/v3/geocode/regeo`).

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tc_core::geo::GeoPoint;

use super::Geocoder;
use crate::config::AmapConfig;
use crate::error::{ClientError, ClientResult};

const STATUS_OK: &str = "1";

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    info: String,
    #[serde(default)]
    geocodes: Vec<Geocode>,
}

#[derive(Debug, Deserialize)]
struct Geocode {
    /// `"lng,lat"`.
    location: String,
}

#[derive(Debug, Deserialize)]
struct RegeoResponse {
    status: String,
    #[serde(default)]
    info: String,
    regeocode: Option<Regeocode>,
}

#[derive(Debug, Deserialize)]
struct Regeocode {
    /// A string, or `[]` when AMap has no address for the point.
    #[serde(default)]
    formatted_address: serde_json::Value,
}

pub struct AmapGeocoder {
    client: reqwest::Client,
    base_url: String,
    key: String,
}

impl AmapGeocoder {
    pub fn new(base_url: impl Into<String>, key: impl Into<String>) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            key: key.into(),
        })
    }

    /// Build from configuration. Fails when no key is configured.
    pub fn from_config(config: &AmapConfig) -> ClientResult<Self> {
        let key = config
            .key
            .clone()
            .ok_or_else(|| ClientError::Config("AMAP_KEY is not set".into()))?;
        Self::new(config.base_url.clone(), key)
    }

    fn ensure_ok(status: &str, info: &str) -> ClientResult<()> {
        if status == STATUS_OK {
            Ok(())
        } else {
            Err(ClientError::Geocoding(format!("AMap status {status}: {info}")))
        }
    }
}

#[async_trait]
impl Geocoder for AmapGeocoder {
    async fn geocode(&self, address: &str) -> ClientResult<Option<GeoPoint>> {
        let response: GeocodeResponse = self
            .client
            .get(format!("{}/v3/geocode/geo", self.base_url))
            .query(&[("address", address), ("output", "JSON"), ("key", self.key.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Self::ensure_ok(&response.status, &response.info)?;

        match response.geocodes.first() {
            Some(geocode) => Ok(Some(GeoPoint::parse_lng_lat(&geocode.location)?)),
            None => Ok(None),
        }
    }

    async fn reverse(&self, point: GeoPoint) -> ClientResult<Option<String>> {
        let location = point.to_lng_lat_string();
        let response: RegeoResponse = self
            .client
            .get(format!("{}/v3/geocode/regeo", self.base_url))
            .query(&[
                ("location", location.as_str()),
                ("output", "JSON"),
                ("key", self.key.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Self::ensure_ok(&response.status, &response.info)?;

        Ok(response
            .regeocode
            .and_then(|r| r.formatted_address.as_str().map(str::to_string))
            .filter(|a| !a.trim().is_empty()))
    }
}
