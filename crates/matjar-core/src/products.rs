//! The shared catalog entry type.
//!
//! ## Observed shape of `products-template.json`
//!
//! The feed is a JSON array of flat objects keyed by Arabic display labels,
//! e.g. `{"العنوان": "هاتف ذكي", "السعر": "10 KWD", ...}`. Older exports use
//! English spreadsheet headers (`title`, `price`, `image_link`) instead, and
//! prices/ids sometimes arrive as JSON numbers rather than strings. Every key
//! variant is resolved here, once, so nothing downstream looks at raw keys.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::price::parse_price;

const TITLE_KEYS: &[&str] = &["العنوان", "عنوان", "title", "name"];
const DESCRIPTION_KEYS: &[&str] = &["الوصف", "description", "desc"];
const IMAGE_KEYS: &[&str] = &["رابط الصورة", "الصورة", "image", "image_link", "image_url"];
const LINK_KEYS: &[&str] = &["الرابط", "رابط المنتج", "link", "url", "original_link"];
const PRICE_KEYS: &[&str] = &["السعر", "price"];
const DISCOUNTED_PRICE_KEYS: &[&str] = &[
    "السعر بعد الخصم",
    "سعر الخصم",
    "sale_price",
    "discounted_price",
];
const SKU_KEYS: &[&str] = &["المعرّف", "sku", "id"];
const AVAILABILITY_KEYS: &[&str] = &["مدى التوفّر", "التوفر", "availability"];

/// One entry of the storefront catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Product {
    /// Display title; also the source of the product's slug.
    pub title: String,
    /// Free text, may contain line breaks.
    pub description: String,
    pub image_url: String,
    /// Link to the listing the product was sourced from.
    pub original_link: String,
    /// Regular price as the feed states it, e.g. `"10 KWD"` or `"12.5"`.
    pub price: Option<String>,
    /// Sale price, present only when the item is discounted.
    pub discounted_price: Option<String>,
    pub sku: Option<String>,
    /// Free-text stock state, e.g. `"متوفر"`.
    pub availability: Option<String>,
}

impl Product {
    /// Builds a product from one raw feed object, taking the first present,
    /// non-blank value for each field.
    #[must_use]
    pub fn from_fields(fields: &Map<String, Value>) -> Self {
        Self {
            title: first_text(fields, TITLE_KEYS).unwrap_or_default(),
            description: first_text(fields, DESCRIPTION_KEYS).unwrap_or_default(),
            image_url: first_text(fields, IMAGE_KEYS).unwrap_or_default(),
            original_link: first_text(fields, LINK_KEYS).unwrap_or_default(),
            price: first_text(fields, PRICE_KEYS),
            discounted_price: first_text(fields, DISCOUNTED_PRICE_KEYS),
            sku: first_text(fields, SKU_KEYS),
            availability: first_text(fields, AVAILABILITY_KEYS),
        }
    }

    /// Returns `true` when a sale price is set.
    #[must_use]
    pub fn is_discounted(&self) -> bool {
        self.discounted_price.is_some()
    }

    /// The price a customer pays: the sale price when it parses, otherwise
    /// the regular price.
    #[must_use]
    pub fn effective_price(&self) -> Option<Decimal> {
        self.discounted_price
            .as_deref()
            .and_then(parse_price)
            .or_else(|| self.price.as_deref().and_then(parse_price))
    }
}

impl<'de> Deserialize<'de> for Product {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields = Map::<String, Value>::deserialize(deserializer)?;
        Ok(Self::from_fields(&fields))
    }
}

fn first_text(fields: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| fields.get(*key))
        .find_map(value_text)
}

/// Strings are trimmed; numbers keep their JSON text. Blank strings, `null`,
/// booleans and nested values count as absent.
fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_owned())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
