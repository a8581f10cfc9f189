//! Google Merchant RSS 2.0 feed for the storefront catalog.
//!
//! Each product becomes an `<item>` in the `g:` namespace, linking to the
//! static product page generated for it under `{store}/products/{slug}.html`.

use chrono::{DateTime, Utc};
use matjar_core::feed_slug;
use matjar_core::price::{format_kwd, parse_price};
use matjar_core::Product;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::FeedError;

const GOOGLE_NS: &str = "http://base.google.com/ns/1.0";
const PRODUCT_PAGES_DIR: &str = "products";
const SHIPPING_COUNTRY: &str = "KW";
const SHIPPING_SERVICE: &str = "Standard";
const SHIPPING_PRICE: &str = "0.000 KWD";

/// Title given to catalog entries that have none ("product").
pub const FALLBACK_TITLE: &str = "منتج";

/// Channel-level metadata for the feed.
#[derive(Debug, Clone)]
pub struct FeedChannel {
    pub title: String,
    /// Public root of the storefront; item links are built under it.
    pub link: String,
    pub description: String,
    pub brand: String,
}

impl FeedChannel {
    /// Channel metadata for the Matjar Kuwait storefront at `store_base_url`.
    #[must_use]
    pub fn matjar(store_base_url: &str) -> Self {
        Self {
            title: "Matjar Kuwait - Products".to_owned(),
            link: store_base_url.to_owned(),
            description: "Latest products from Matjar Kuwait".to_owned(),
            brand: "Matjar Kuwait".to_owned(),
        }
    }
}

/// A rendered feed and how many catalog entries made it in.
#[derive(Debug, Clone)]
pub struct RenderedFeed {
    pub xml: String,
    pub item_count: usize,
    /// Products left out because they have no parseable price.
    pub skipped: usize,
}

/// Maps free-text stock labels to Merchant availability values.
///
/// Unknown or missing labels count as in stock.
#[must_use]
pub fn map_availability(raw: Option<&str>) -> &'static str {
    let Some(raw) = raw else {
        return "in stock";
    };
    let label = raw.trim().to_lowercase().replace('_', " ");
    match label.as_str() {
        "غير متوفر" | "نفذ" | "نفدت الكمية" | "out of stock" => "out of stock",
        "طلب مسبق" | "preorder" | "pre-order" => "preorder",
        _ => "in stock",
    }
}

/// Renders `products` as a Merchant RSS feed.
///
/// Products without a parseable price are skipped with a warning, since
/// Merchant rejects items that lack `g:price`.
///
/// # Errors
///
/// Returns [`FeedError`] if the XML writer fails.
pub fn render_feed(
    channel: &FeedChannel,
    products: &[Product],
    built_at: DateTime<Utc>,
) -> Result<RenderedFeed, FeedError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(
        BytesStart::new("rss").with_attributes([("xmlns:g", GOOGLE_NS), ("version", "2.0")]),
    ))?;
    writer.write_event(Event::Start(BytesStart::new("channel")))?;
    text_element(&mut writer, "title", &channel.title)?;
    text_element(&mut writer, "link", &channel.link)?;
    text_element(&mut writer, "description", &channel.description)?;
    text_element(&mut writer, "lastBuildDate", &built_at.to_rfc2822())?;

    let base = channel.link.trim_end_matches('/');
    let mut item_count = 0usize;
    let mut skipped = 0usize;

    for product in products {
        let Some(price) = product.price.as_deref().and_then(parse_price) else {
            tracing::warn!(title = %product.title, "skipping feed item without a price");
            skipped += 1;
            continue;
        };

        let title = if product.title.trim().is_empty() {
            FALLBACK_TITLE
        } else {
            product.title.as_str()
        };
        let slug = feed_slug(title);
        let id = product
            .sku
            .clone()
            .unwrap_or_else(|| slug.to_uppercase());

        writer.write_event(Event::Start(BytesStart::new("item")))?;
        text_element(&mut writer, "g:id", &id)?;
        text_element(&mut writer, "g:title", title)?;
        text_element(&mut writer, "g:description", &product.description)?;
        text_element(
            &mut writer,
            "g:link",
            &format!("{base}/{PRODUCT_PAGES_DIR}/{slug}.html"),
        )?;
        text_element(&mut writer, "g:image_link", &product.image_url)?;
        text_element(
            &mut writer,
            "g:availability",
            map_availability(product.availability.as_deref()),
        )?;
        text_element(&mut writer, "g:condition", "new")?;
        text_element(&mut writer, "g:price", &format_kwd(price))?;
        if let Some(sale) = product.discounted_price.as_deref().and_then(parse_price) {
            text_element(&mut writer, "g:sale_price", &format_kwd(sale))?;
        }
        text_element(&mut writer, "g:brand", &channel.brand)?;
        text_element(&mut writer, "g:identifier_exists", "no")?;

        writer.write_event(Event::Start(BytesStart::new("g:shipping")))?;
        text_element(&mut writer, "g:country", SHIPPING_COUNTRY)?;
        text_element(&mut writer, "g:service", SHIPPING_SERVICE)?;
        text_element(&mut writer, "g:price", SHIPPING_PRICE)?;
        writer.write_event(Event::End(BytesEnd::new("g:shipping")))?;

        writer.write_event(Event::End(BytesEnd::new("item")))?;
        item_count += 1;
    }

    writer.write_event(Event::End(BytesEnd::new("channel")))?;
    writer.write_event(Event::End(BytesEnd::new("rss")))?;

    let xml = String::from_utf8(writer.into_inner())?;
    Ok(RenderedFeed {
        xml,
        item_count,
        skipped,
    })
}

fn text_element(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> Result<(), FeedError> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
