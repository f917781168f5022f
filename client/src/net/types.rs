//! Shared content-service DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the CMS collection schemas. The server decodes content
//! service records into them and re-serializes them for the browser, so serde
//! round-trips must stay lossless. Every field besides the identity is
//! optional: a missing key, JSON `null`, and a blank string all decode to
//! `None`. Integer fields also accept integral floats and numeric strings;
//! anything else that does not fit degrades to `None` instead of failing the
//! whole record.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

// =============================================================================
// COLLECTIONS
// =============================================================================

/// A named content-service collection recognized by the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Collection {
    /// Event photos shown on the gallery page.
    EventGallery,
    /// Event configuration; only the first record is used.
    HackathonEvents,
}

impl Collection {
    pub const ALL: [Self; 2] = [Self::EventGallery, Self::HackathonEvents];

    /// The external collection identifier.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EventGallery => "eventgallery",
            Self::HackathonEvents => "hackathonevents",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a collection name is not one the site knows about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownCollection(pub String);

impl fmt::Display for UnknownCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown collection: {}", self.0)
    }
}

impl std::error::Error for UnknownCollection {}

impl FromStr for Collection {
    type Err = UnknownCollection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCollection(s.to_owned()))
    }
}

/// Body of a collection query: `{ "items": [...] }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemsResponse<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// Take the single configuration record out of a record set.
///
/// Records after the first are ignored.
pub fn first_record<T>(records: Vec<T>) -> Option<T> {
    records.into_iter().next()
}

// =============================================================================
// RECORDS
// =============================================================================

/// One photo in the `eventgallery` collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    /// Opaque CMS identifier.
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_createdDate", default, deserialize_with = "deserialize_optional_date", skip_serializing_if = "Option::is_none")]
    pub created_date: Option<CmsDate>,
    #[serde(rename = "_updatedDate", default, deserialize_with = "deserialize_optional_date", skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<CmsDate>,
    /// Image URL.
    #[serde(default, deserialize_with = "deserialize_optional_text", skip_serializing_if = "Option::is_none")]
    pub gallery_image: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text", skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_date", skip_serializing_if = "Option::is_none")]
    pub date_taken: Option<CmsDate>,
    #[serde(default, deserialize_with = "deserialize_optional_text", skip_serializing_if = "Option::is_none")]
    pub photographer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text", skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
    /// Sort priority; lower values first, absent values last.
    #[serde(default, deserialize_with = "deserialize_optional_i64", skip_serializing_if = "Option::is_none")]
    pub display_order: Option<i64>,
}

/// The event description record in the `hackathonevents` collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventInfo {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_createdDate", default, deserialize_with = "deserialize_optional_date", skip_serializing_if = "Option::is_none")]
    pub created_date: Option<CmsDate>,
    #[serde(rename = "_updatedDate", default, deserialize_with = "deserialize_optional_date", skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<CmsDate>,
    #[serde(default, deserialize_with = "deserialize_optional_text", skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_date", skip_serializing_if = "Option::is_none")]
    pub event_date: Option<CmsDate>,
    #[serde(default, deserialize_with = "deserialize_optional_text", skip_serializing_if = "Option::is_none")]
    pub event_location: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text", skip_serializing_if = "Option::is_none")]
    pub event_description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text", skip_serializing_if = "Option::is_none")]
    pub event_theme: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_u32", skip_serializing_if = "Option::is_none")]
    pub number_of_participants: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_optional_text", skip_serializing_if = "Option::is_none")]
    pub prize_pool: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text", skip_serializing_if = "Option::is_none")]
    pub registration_fee: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_u32", skip_serializing_if = "Option::is_none")]
    pub max_team_size: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_optional_bool", skip_serializing_if = "Option::is_none")]
    pub lunch_included: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_optional_text", skip_serializing_if = "Option::is_none")]
    pub prizes_and_perks: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text", skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text", skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text", skip_serializing_if = "Option::is_none")]
    pub instagram_handle: Option<String>,
}

// =============================================================================
// DATES
// =============================================================================

/// A CMS date value: either a real timestamp or text the author pre-formatted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CmsDate {
    Timestamp(OffsetDateTime),
    Text(String),
}

impl CmsDate {
    /// Decode any accepted wire form. Returns `None` for values that carry no date.
    ///
    /// Accepted forms: RFC 3339 strings, `YYYY-MM-DD` strings (midnight UTC),
    /// integer milliseconds since the Unix epoch, and `{"$date": ...}` wrappers
    /// around any of those. Other non-blank strings are kept verbatim.
    #[must_use]
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::String(raw) => Self::parse_str(raw),
            serde_json::Value::Number(number) => number
                .as_i64()
                .and_then(timestamp_from_unix_millis)
                .map(Self::Timestamp),
            serde_json::Value::Object(map) => map.get("$date").and_then(Self::from_value),
            _ => None,
        }
    }

    /// Parse a string date, falling back to pre-formatted text.
    #[must_use]
    pub fn parse_str(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        let parsed = OffsetDateTime::parse(raw, &Rfc3339)
            .ok()
            .or_else(|| {
                Date::parse(raw, format_description!("[year]-[month]-[day]"))
                    .ok()
                    .map(|date| date.midnight().assume_utc())
            })
            .filter(is_wire_representable);
        Some(parsed.map_or_else(|| Self::Text(raw.to_owned()), Self::Timestamp))
    }

    /// Card label, e.g. `Oct 9, 2025`.
    #[must_use]
    pub fn short_label(&self) -> String {
        match self {
            Self::Timestamp(ts) => ts
                .format(format_description!("[month repr:short] [day padding:none], [year]"))
                .unwrap_or_else(|_| ts.date().to_string()),
            Self::Text(text) => text.clone(),
        }
    }

    /// Lightbox label, e.g. `October 9, 2025`.
    #[must_use]
    pub fn long_label(&self) -> String {
        match self {
            Self::Timestamp(ts) => ts
                .format(format_description!("[month repr:long] [day padding:none], [year]"))
                .unwrap_or_else(|_| ts.date().to_string()),
            Self::Text(text) => text.clone(),
        }
    }
}

impl Serialize for CmsDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Timestamp(ts) => {
                let formatted = ts.format(&Rfc3339).map_err(<S::Error as serde::ser::Error>::custom)?;
                serializer.serialize_str(&formatted)
            }
            Self::Text(text) => serializer.serialize_str(text),
        }
    }
}

impl<'de> Deserialize<'de> for CmsDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Self::from_value(&value).ok_or_else(|| D::Error::custom("expected a date"))
    }
}

fn timestamp_from_unix_millis(millis: i64) -> Option<OffsetDateTime> {
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000)
        .ok()
        .filter(is_wire_representable)
}

/// RFC 3339 only covers years 0000 through 9999; a timestamp outside that
/// range could never be re-serialized for the browser.
fn is_wire_representable(ts: &OffsetDateTime) -> bool {
    (0..=9999).contains(&ts.year())
}

// =============================================================================
// LENIENT FIELD DECODERS
// =============================================================================

fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<CmsDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(CmsDate::from_value(&value))
}

fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(text) => {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_owned())
        }
        serde_json::Value::Number(number) => Some(number.to_string()),
        _ => None,
    })
}

fn deserialize_optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(integer_from_value(&value))
}

fn deserialize_optional_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(integer_from_value(&value).and_then(|int| u32::try_from(int).ok()))
}

fn deserialize_optional_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Bool(flag) => Some(flag),
        serde_json::Value::String(text) => match text.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" => Some(true),
            "false" | "no" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

fn integer_from_value(value: &serde_json::Value) -> Option<i64> {
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Some(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Some(float as i64);
            }
            None
        }
        serde_json::Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    }
}
