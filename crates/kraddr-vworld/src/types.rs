//! `VWorld` geocoding request options and response types.
//!
//! Every response is wrapped in `{"response": {...}}`. Which optional
//! members are present depends on `status`:
//!
//! - `OK`: `input`, `refined`, `result`
//! - `NOT_FOUND`: `record`, `page`
//! - `ERROR`: `error`
//!
//! That correlation belongs to the service and is not enforced here.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Which address system the query text is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AddressType {
    /// Lot-number (jibun) address.
    Parcel,
    /// Road-name address.
    Road,
}

impl AddressType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Parcel => "PARCEL",
            Self::Road => "ROAD",
        }
    }
}

/// Options for a single coordinate lookup.
///
/// Only `key` is required. Unset options are left out of the query so the
/// service applies its own defaults.
#[derive(Clone, PartialEq, Eq)]
pub struct GeocodeOptions {
    pub key: String,
    pub version: Option<String>,
    /// Coordinate reference system, e.g. `"epsg:4326"`.
    pub crs: Option<String>,
    pub refine: Option<bool>,
    pub simple: Option<bool>,
    /// `"json"` or `"xml"`.
    pub format: Option<String>,
    pub address_type: Option<AddressType>,
}

impl GeocodeOptions {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            version: None,
            crs: None,
            refine: None,
            simple: None,
            format: None,
            address_type: None,
        }
    }

    #[must_use]
    pub fn with_address_type(mut self, address_type: AddressType) -> Self {
        self.address_type = Some(address_type);
        self
    }

    /// Optional query parameters in request order, skipping unset ones.
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(version) = &self.version {
            pairs.push(("version", version.clone()));
        }
        if let Some(crs) = &self.crs {
            pairs.push(("crs", crs.clone()));
        }
        if let Some(refine) = self.refine {
            pairs.push(("refine", refine.to_string()));
        }
        if let Some(simple) = self.simple {
            pairs.push(("simple", simple.to_string()));
        }
        if let Some(format) = &self.format {
            pairs.push(("format", format.clone()));
        }
        if let Some(address_type) = self.address_type {
            pairs.push(("type", address_type.as_str().to_string()));
        }
        pairs
    }
}

impl fmt::Debug for GeocodeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeocodeOptions")
            .field("key", &"[redacted]")
            .field("version", &self.version)
            .field("crs", &self.crs)
            .field("refine", &self.refine)
            .field("simple", &self.simple)
            .field("format", &self.format)
            .field("address_type", &self.address_type)
            .finish()
    }
}

/// Top-level envelope: `{ "response": { ... } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResponse {
    pub response: ResponseBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseBody {
    pub service: ServiceInfo,
    pub status: GeocodeStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ServiceError>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<RequestInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refined: Option<Refined>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record: Option<RecordInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<PageInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<GeocodeResult>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GeocodeStatus {
    Ok,
    NotFound,
    Error,
}

/// Echo of the service call, e.g. `{"name": "address", "operation": "getCoord", "time": "31(ms)"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub operation: String,
    pub time: String,
}

/// Application-level failure such as `INVALID_KEY`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceError {
    #[serde(deserialize_with = "string_or_number")]
    pub level: String,
    pub code: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestInput {
    #[serde(rename = "type")]
    pub address_type: String,
    pub address: String,
}

/// The address as the service understood it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Refined {
    pub text: String,
    /// Administrative breakdown (`level0` … `level5`, `detail`). Passed through.
    #[serde(default)]
    pub structure: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordInfo {
    pub total: String,
    pub current: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageInfo {
    pub total: String,
    pub current: String,
    pub size: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResult {
    pub crs: String,
    pub point: Point,
}

/// Coordinates as sent (`"126.978346780"`), so no precision is lost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    #[serde(deserialize_with = "string_or_number")]
    pub x: String,
    #[serde(deserialize_with = "string_or_number")]
    pub y: String,
}

impl Point {
    /// Parses `(x, y)`; in EPSG:4326 that is `(longitude, latitude)`.
    #[must_use]
    pub fn parse(&self) -> Option<(f64, f64)> {
        let x = self.x.trim().parse().ok()?;
        let y = self.y.trim().parse().ok()?;
        Some((x, y))
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}
