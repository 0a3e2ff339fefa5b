//! Juso request options and response types.
//!
//! The service wraps every response in `{"results": {"common": {...}, "juso": [...]}}`.
//! The paging counters in `common` arrive as numeric strings; [`RawCommon`]
//! keeps them that way, [`Common`] carries them as [`SummaryNumber`]s.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Options for a single address-search request.
#[derive(Clone, PartialEq, Eq)]
pub struct SearchOptions {
    pub count_per_page: u32,
    pub current_page: u32,
    /// `"json"` or `"xml"`. Forwarded as-is.
    pub result_type: String,
    pub confirm_key: Option<String>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            count_per_page: 10,
            current_page: 1,
            result_type: "json".to_string(),
            confirm_key: None,
        }
    }
}

impl SearchOptions {
    #[must_use]
    pub fn with_confirm_key(mut self, confirm_key: impl Into<String>) -> Self {
        self.confirm_key = Some(confirm_key.into());
        self
    }
}

impl fmt::Debug for SearchOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchOptions")
            .field("count_per_page", &self.count_per_page)
            .field("current_page", &self.current_page)
            .field("result_type", &self.result_type)
            .field(
                "confirm_key",
                &self.confirm_key.as_ref().map(|_| "[redacted]"),
            )
            .finish()
    }
}

/// A paging counter converted from its wire string.
///
/// A value that does not convert stays [`SummaryNumber::NaN`] rather than
/// collapsing to zero, so callers can tell "no results" from "garbage".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryNumber {
    Int(i64),
    NaN,
}

impl SummaryNumber {
    #[must_use]
    pub fn as_i64(self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(n),
            Self::NaN => None,
        }
    }

    #[must_use]
    pub fn is_nan(self) -> bool {
        matches!(self, Self::NaN)
    }
}

impl PartialEq<i64> for SummaryNumber {
    fn eq(&self, other: &i64) -> bool {
        self.as_i64() == Some(*other)
    }
}

impl fmt::Display for SummaryNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::NaN => f.write_str("NaN"),
        }
    }
}

/// JSON has no NaN, so it is written as `null`.
impl Serialize for SummaryNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Int(n) => serializer.serialize_i64(*n),
            Self::NaN => serializer.serialize_none(),
        }
    }
}

/// One matched address, passed through untouched.
///
/// The service sends roughly two dozen string fields per match (`roadAddr`,
/// `jibunAddr`, `engAddr`, `zipNo`, administrative codes, ...). None are
/// interpreted; the accessors below are read-only conveniences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressRecord(Map<String, Value>);

impl AddressRecord {
    /// Returns a field's value when it is a string.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    #[must_use]
    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }

    /// Full road-name address, e.g. `서울특별시 강남구 도산대로 317 (신사동)`.
    #[must_use]
    pub fn road_addr(&self) -> Option<&str> {
        self.get("roadAddr")
    }

    /// Lot-number (jibun) address.
    #[must_use]
    pub fn jibun_addr(&self) -> Option<&str> {
        self.get("jibunAddr")
    }

    #[must_use]
    pub fn eng_addr(&self) -> Option<&str> {
        self.get("engAddr")
    }

    #[must_use]
    pub fn zip_no(&self) -> Option<&str> {
        self.get("zipNo")
    }

    #[must_use]
    pub fn building_name(&self) -> Option<&str> {
        self.get("bdNm")
    }

    #[must_use]
    pub fn adm_cd(&self) -> Option<&str> {
        self.get("admCd")
    }
}

// ---------------------------------------------------------------------------
// Normalized (search)
// ---------------------------------------------------------------------------

/// Normalized search response returned by [`crate::JusoClient::search`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResponse {
    pub results: SearchResults,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults {
    pub common: Common,
    pub juso: Vec<AddressRecord>,
}

/// Result summary with paging counters converted to numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Common {
    /// `"0"` on success; any other code is a service-side failure.
    pub error_code: String,
    pub error_message: String,
    pub count_per_page: SummaryNumber,
    pub total_count: SummaryNumber,
    pub current_page: SummaryNumber,
    /// Any other summary fields the service sent.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ---------------------------------------------------------------------------
// Raw (find)
// ---------------------------------------------------------------------------

/// Body shape of the response handed back by [`crate::JusoClient::find`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSearchResponse {
    pub results: RawSearchResults,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSearchResults {
    pub common: RawCommon,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub juso: Vec<AddressRecord>,
}

/// Result summary exactly as sent, counters still strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCommon {
    #[serde(default)]
    pub error_code: String,
    #[serde(default)]
    pub error_message: String,
    #[serde(default)]
    pub count_per_page: String,
    #[serde(default)]
    pub total_count: String,
    #[serde(default)]
    pub current_page: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The service sends `"juso": null` when the search itself failed.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<AddressRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<AddressRecord>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_options_defaults() {
        let options = SearchOptions::default();
        assert_eq!(options.count_per_page, 10);
        assert_eq!(options.current_page, 1);
        assert_eq!(options.result_type, "json");
        assert!(options.confirm_key.is_none());
    }

    #[test]
    fn search_options_debug_redacts_confirm_key() {
        let options = SearchOptions::default().with_confirm_key("secret-key");
        let rendered = format!("{options:?}");
        assert!(!rendered.contains("secret-key"));
        assert!(rendered.contains("[redacted]"));
    }

    #[test]
    fn summary_number_serializes_nan_as_null() {
        assert_eq!(serde_json::to_value(SummaryNumber::Int(7)).unwrap(), 7);
        assert_eq!(
            serde_json::to_value(SummaryNumber::NaN).unwrap(),
            Value::Null
        );
    }

    #[test]
    fn summary_number_compares_with_integers() {
        assert_eq!(SummaryNumber::Int(2), 2);
        assert_ne!(SummaryNumber::NaN, 0);
        assert!(SummaryNumber::NaN.is_nan());
    }

    #[test]
    fn raw_results_accept_null_juso() {
        let body = serde_json::json!({
            "results": {
                "common": {
                    "errorMessage": "승인되지 않은 KEY 입니다.",
                    "countPerPage": "",
                    "totalCount": "",
                    "errorCode": "E0001",
                    "currentPage": ""
                },
                "juso": null
            }
        });
        let raw: RawSearchResponse = serde_json::from_value(body).unwrap();
        assert_eq!(raw.results.common.error_code, "E0001");
        assert!(raw.results.juso.is_empty());
    }

    #[test]
    fn address_record_exposes_string_fields_only() {
        let record: AddressRecord = serde_json::from_value(serde_json::json!({
            "roadAddr": "서울특별시 강남구 도산대로 317 (신사동)",
            "jibunAddr": "서울특별시 강남구 신사동 651-24 호림아트센터 1빌딩",
            "engAddr": "317 Dosan-daero, Gangnam-gu, Seoul",
            "zipNo": "06021",
            "bdNm": "호림아트센터 1빌딩",
            "admCd": "1168010700",
            "odd": 5
        }))
        .unwrap();
        assert_eq!(
            record.road_addr(),
            Some("서울특별시 강남구 도산대로 317 (신사동)")
        );
        assert_eq!(
            record.jibun_addr(),
            Some("서울특별시 강남구 신사동 651-24 호림아트센터 1빌딩")
        );
        assert_eq!(record.eng_addr(), Some("317 Dosan-daero, Gangnam-gu, Seoul"));
        assert_eq!(record.zip_no(), Some("06021"));
        assert_eq!(record.building_name(), Some("호림아트센터 1빌딩"));
        assert_eq!(record.adm_cd(), Some("1168010700"));
        assert_eq!(record.get("odd"), None);
        assert_eq!(record.get("missing"), None);
        assert_eq!(record.fields().len(), 7);

        let fields = record.into_fields();
        assert_eq!(fields.get("odd"), Some(&serde_json::json!(5)));
    }
}
