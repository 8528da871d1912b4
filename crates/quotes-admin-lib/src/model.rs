use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::upload::MediaKind;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryInput {
    pub name: String,
    pub icon: String,
}

/// Category as embedded in a fetched quote.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CategoryRef {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub audio_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_category")]
    pub category: Option<CategoryRef>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// An unpopulated category arrives as its bare id; any other shape that is
/// not a category object reads as no category.
fn lenient_category<'de, D>(deserializer: D) -> Result<Option<CategoryRef>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(id) => Some(CategoryRef {
            id,
            name: "".to_string(),
        }),
        value @ Value::Object(_) => serde_json::from_value(value).ok(),
        _ => None,
    })
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl Quote {
    pub fn text(&self) -> Option<&str> {
        non_empty(&self.text)
    }

    pub fn media(&self, kind: MediaKind) -> Option<&str> {
        match kind {
            MediaKind::Image => non_empty(&self.image_url),
            MediaKind::Video => non_empty(&self.video_url),
            MediaKind::Audio => non_empty(&self.audio_url),
        }
    }

    pub fn media_kinds(&self) -> Vec<MediaKind> {
        MediaKind::ALL
            .into_iter()
            .filter(|kind| self.media(*kind).is_some())
            .collect()
    }

    pub fn category_name(&self) -> &str {
        self.category.as_ref().map(|c| c.name.as_str()).unwrap_or("")
    }
}

/// Body of `POST /quotes`. Unset media slots are sent as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteInput {
    pub text: String,
    pub author: String,
    pub category: String,
    pub image_url: String,
    pub video_url: String,
    pub audio_url: String,
}

impl QuoteInput {
    pub fn has_content(&self) -> bool {
        [&self.text, &self.image_url, &self.video_url, &self.audio_url]
            .iter()
            .any(|field| !field.is_empty())
    }
}

fn collect_valid<T: DeserializeOwned>(items: Vec<Value>, what: &str) -> Vec<T> {
    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!("dropping malformed {what}: {e}");
                None
            }
        })
        .collect()
}

/// Payload of `GET /categories`. Anything but an array is treated as empty.
pub fn categories_from(value: Value) -> Vec<Category> {
    match value {
        Value::Array(items) => collect_valid(items, "category"),
        other => {
            if !other.is_null() {
                warn!("expected category list, got {other}");
            }
            vec![]
        }
    }
}

/// Payload of `GET /quotes`, an object carrying the list under `quotes`.
pub fn quotes_from(value: Value) -> Vec<Quote> {
    match value {
        Value::Object(mut map) => match map.remove("quotes") {
            Some(Value::Array(items)) => collect_valid(items, "quote"),
            _ => {
                warn!("quote response has no quotes list");
                vec![]
            }
        },
        other => {
            if !other.is_null() {
                warn!("expected quote envelope, got {other}");
            }
            vec![]
        }
    }
}
