use crate::domain::fields::{Field, FieldAliases};
use crate::domain::model::Campsite;
use serde_json::{Map, Value};
use std::borrow::Cow;

/// 將 `{"result": {"records": [...]}}` 文件轉成營地清單。
///
/// Never fails: missing containers give an empty list, non-object entries are
/// skipped and missing or malformed fields fall back to `""` / `0`.
#[derive(Debug, Clone, Default)]
pub struct RecordExtractor {
    aliases: FieldAliases,
}

impl RecordExtractor {
    pub fn new(aliases: FieldAliases) -> Self {
        Self { aliases }
    }

    pub fn extract(&self, document: &Value) -> Vec<Campsite> {
        let Some(entries) = document
            .get("result")
            .and_then(Value::as_object)
            .and_then(|result| result.get("records"))
            .and_then(Value::as_array)
        else {
            tracing::debug!("Document has no result.records array, nothing to extract");
            return Vec::new();
        };

        let campsites: Vec<Campsite> = entries
            .iter()
            .filter_map(Value::as_object)
            .map(|item| self.extract_one(item))
            .collect();

        tracing::debug!(
            "Extracted {} campsites from {} entries ({} skipped)",
            campsites.len(),
            entries.len(),
            entries.len() - campsites.len()
        );

        campsites
    }

    fn extract_one(&self, item: &Map<String, Value>) -> Campsite {
        Campsite {
            name: self.text(item, Field::Name),
            municipality: self.text(item, Field::Municipality),
            province: self.text(item, Field::Province),
            category: self.text(item, Field::Category),
            places: self.integer(item, Field::Places),
            address: self.text(item, Field::Address),
        }
    }

    fn text(&self, item: &Map<String, Value>, field: Field) -> String {
        first_text(item, self.aliases.keys(field))
    }

    fn integer(&self, item: &Map<String, Value>, field: Field) -> i64 {
        first_integer(item, self.aliases.keys(field))
    }
}

/// First variant whose trimmed text is non-empty, or `""`.
pub fn first_text(item: &Map<String, Value>, keys: &[String]) -> String {
    for key in keys {
        if let Some(value) = item.get(key) {
            let text = text_form(value);
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                return trimmed.to_string();
            }
        }
    }
    String::new()
}

/// First variant that yields an integer, or `0`.
///
/// Each key is tried completely (numeric reading, then its text parsed as an
/// integer) before moving on to the next one. Null counts as absent.
pub fn first_integer(item: &Map<String, Value>, keys: &[String]) -> i64 {
    for key in keys {
        let value = match item.get(key) {
            None | Some(Value::Null) => continue,
            Some(value) => value,
        };

        if let Some(number) = numeric_value(value) {
            return number;
        }

        if let Ok(number) = text_form(value).trim().parse::<i64>() {
            return number;
        }
    }
    0
}

/// 字串原樣使用；其他值（含 null、陣列、物件）取其 JSON 文字
fn text_form(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}

fn numeric_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(truncate)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(truncate))
        }
        _ => None,
    }
}

fn truncate(value: f64) -> Option<i64> {
    // `as` truncates toward zero, maps NaN to 0 and saturates at the i64 bounds
    Some(value as i64)
}
