//! Normalization of a raw Juso response body into a [`SearchResponse`].
//!
//! Only the three paging counters in `common` are touched. They are
//! converted the way the service's own front end does it: base-10, blank
//! means zero, anything unconvertible is kept as [`SummaryNumber::NaN`].

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::types::{
    null_as_empty, AddressRecord, Common, SearchResponse, SearchResults, SummaryNumber,
};

/// Largest integer an IEEE double holds exactly (2^53).
const MAX_EXACT_FLOAT_INT: f64 = 9_007_199_254_740_992.0;

#[derive(Deserialize)]
struct Envelope {
    results: WireResults,
}

#[derive(Deserialize)]
struct WireResults {
    #[serde(default)]
    common: Option<Map<String, Value>>,
    #[serde(default, deserialize_with = "null_as_empty")]
    juso: Vec<AddressRecord>,
}

/// Converts a decoded response body into a [`SearchResponse`].
///
/// `common.currentPage`, `common.countPerPage` and `common.totalCount` become
/// [`SummaryNumber`]s; every other field passes through unchanged. A missing
/// `common` object yields NaN counters and empty message fields.
///
/// # Errors
///
/// Returns the `serde_json::Error` if the body has no `results` object or
/// `juso` is not a list of objects.
pub fn normalize_search_response(body: Value) -> Result<SearchResponse, serde_json::Error> {
    let envelope: Envelope = serde_json::from_value(body)?;
    let mut common = envelope.results.common.unwrap_or_default();

    let current_page = take_counter(&mut common, "currentPage");
    let count_per_page = take_counter(&mut common, "countPerPage");
    let total_count = take_counter(&mut common, "totalCount");
    let error_code = take_string(&mut common, "errorCode");
    let error_message = take_string(&mut common, "errorMessage");

    Ok(SearchResponse {
        results: SearchResults {
            common: Common {
                error_code,
                error_message,
                count_per_page,
                total_count,
                current_page,
                extra: common,
            },
            juso: envelope.results.juso,
        },
    })
}

fn take_counter(common: &mut Map<String, Value>, field: &str) -> SummaryNumber {
    let raw = common.remove(field);
    let number = coerce_number(raw.as_ref());
    if number.is_nan() {
        tracing::warn!(field, value = ?raw, "juso summary counter is not numeric");
    }
    number
}

fn take_string(common: &mut Map<String, Value>, field: &str) -> String {
    match common.remove(field) {
        Some(Value::String(s)) => s,
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// Converts one wire value to a [`SummaryNumber`].
///
/// - numeric strings (surrounding whitespace ignored) → integer
/// - blank strings and `null` → 0
/// - booleans → 0 / 1
/// - integral JSON numbers → integer
/// - missing, fractional, or anything else → NaN
#[must_use]
pub fn coerce_number(value: Option<&Value>) -> SummaryNumber {
    match value {
        Some(Value::Null) => SummaryNumber::Int(0),
        Some(Value::Bool(b)) => SummaryNumber::Int(i64::from(*b)),
        Some(Value::Number(n)) => n
            .as_i64()
            .map_or_else(|| n.as_f64().map_or(SummaryNumber::NaN, integral), SummaryNumber::Int),
        Some(Value::String(s)) => parse_numeric_str(s),
        Some(Value::Array(_) | Value::Object(_)) | None => SummaryNumber::NaN,
    }
}

fn parse_numeric_str(s: &str) -> SummaryNumber {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return SummaryNumber::Int(0);
    }
    if let Ok(n) = trimmed.parse::<i64>() {
        return SummaryNumber::Int(n);
    }
    // "10.0" and "1e2" are still integers in decimal notation.
    match trimmed.parse::<f64>() {
        Ok(f) if trimmed.bytes().all(|b| b.is_ascii_digit() || b"+-.eE".contains(&b)) => {
            integral(f)
        }
        _ => SummaryNumber::NaN,
    }
}

#[allow(clippy::cast_possible_truncation)]
fn integral(f: f64) -> SummaryNumber {
    if f.is_finite() && f.fract() == 0.0 && f.abs() <= MAX_EXACT_FLOAT_INT {
        SummaryNumber::Int(f as i64)
    } else {
        SummaryNumber::NaN
    }
}
