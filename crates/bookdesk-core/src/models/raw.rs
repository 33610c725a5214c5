use chrono::{DateTime, Datelike, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{BookdeskError, Result};
use crate::models::{BookRecord, BookStatus, new_book_id};

/// Loosely-typed book as returned by an external source. Every field is
/// optional and may hold any JSON value; `normalize` coerces what it can
/// and fills the gaps so downstream code only ever sees well-formed
/// `BookRecord`s.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBook {
    #[serde(rename = "_id", default)]
    pub underscore_id: Option<Value>,
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub author: Option<Value>,
    #[serde(default)]
    pub genre: Option<Value>,
    #[serde(default)]
    pub published_year: Option<Value>,
    #[serde(default)]
    pub status: Option<Value>,
    #[serde(default)]
    pub created_at: Option<Value>,
    #[serde(default)]
    pub updated_at: Option<Value>,
}

impl RawBook {
    /// Fill missing or unusable fields with defaults:
    /// fresh id, empty text, current year, `Available`, and "now" for timestamps.
    pub fn normalize(self) -> BookRecord {
        let now = Utc::now();
        let id = text(self.underscore_id.as_ref())
            .or_else(|| text(self.id.as_ref()))
            .filter(|id| !id.is_empty())
            .unwrap_or_else(new_book_id);

        BookRecord {
            id,
            title: text(self.title.as_ref()).unwrap_or_default(),
            author: text(self.author.as_ref()).unwrap_or_default(),
            genre: text(self.genre.as_ref()).unwrap_or_default(),
            published_year: year(self.published_year.as_ref()).unwrap_or_else(|| now.year()),
            status: self
                .status
                .as_ref()
                .and_then(Value::as_str)
                .and_then(|s| s.parse::<BookStatus>().ok())
                .unwrap_or_default(),
            created_at: timestamp(self.created_at.as_ref()).unwrap_or(now),
            updated_at: timestamp(self.updated_at.as_ref()).unwrap_or(now),
        }
    }
}

/// Strings as-is, numbers and booleans in their JSON spelling.
fn text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Integral numbers (`1999`, `1999.0`) and numeric strings (`"1999"`).
fn year(value: Option<&Value>) -> Option<i32> {
    let number = match value? {
        Value::Number(n) => match n.as_i64() {
            Some(i) => i as f64,
            None => n.as_f64()?,
        },
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if number.fract() != 0.0 || number < f64::from(i32::MIN) || number > f64::from(i32::MAX) {
        return None;
    }
    Some(number as i32)
}

fn timestamp(value: Option<&Value>) -> Option<DateTime<Utc>> {
    value
        .and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

/// Normalize an arbitrary JSON value into a record. Fails only when the
/// value is not an object.
pub fn normalize_value(value: Value) -> Result<BookRecord> {
    if !value.is_object() {
        return Err(BookdeskError::ValidationError(format!(
            "expected a book object, found {}",
            kind(&value)
        )));
    }
    let raw: RawBook = serde_json::from_value(value)?;
    Ok(raw.normalize())
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
