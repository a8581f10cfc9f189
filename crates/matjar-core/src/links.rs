//! Outbound links built from resolved products.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::price::format_kwd;
use crate::products::Product;

/// Characters left unescaped in a query component, matching the browser's
/// `encodeURIComponent` unreserved set minus `!*'()`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Relative link from the storefront index to a product's detail page.
#[must_use]
pub fn product_page_href(slug: &str) -> String {
    format!("./product.html?name={}", utf8_percent_encode(slug, COMPONENT))
}

/// Builds the order message sent over WhatsApp for `product`.
///
/// The price line uses the sale price when one is set and is omitted when the
/// product has no parseable price.
#[must_use]
pub fn order_message(product: &Product) -> String {
    let mut message = format!("مرحباً، أرغب في طلب المنتج: {}", product.title);
    if let Some(price) = product.effective_price() {
        message.push_str("\nالسعر: ");
        message.push_str(&format_kwd(price));
    }
    message
}

/// Returns a `wa.me` deep link that opens a chat with `phone` prefilled with
/// [`order_message`].
///
/// `phone` may contain spaces, `+` or dashes; only its digits are used.
/// Returns `None` when it has no digits at all.
#[must_use]
pub fn whatsapp_order_link(phone: &str, product: &Product) -> Option<String> {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    let text = order_message(product);
    Some(format!(
        "https://wa.me/{digits}?text={}",
        utf8_percent_encode(&text, COMPONENT)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone_product() -> Product {
        Product {
            title: "هاتف ذكي".to_owned(),
            price: Some("10 KWD".to_owned()),
            discounted_price: Some("8.5".to_owned()),
            ..Product::default()
        }
    }

    #[test]
    fn product_page_href_keeps_hyphens_and_encodes_arabic() {
        assert_eq!(
            product_page_href("smart-watch"),
            "./product.html?name=smart-watch"
        );
        assert_eq!(
            product_page_href("هاتف"),
            "./product.html?name=%D9%87%D8%A7%D8%AA%D9%81"
        );
    }

    #[test]
    fn order_message_uses_discounted_price() {
        let message = order_message(&phone_product());
        assert!(message.contains("هاتف ذكي"));
        assert!(message.ends_with("8.500 KWD"));
    }

    #[test]
    fn order_message_omits_price_when_unknown() {
        let product = Product {
            title: "Lamp".to_owned(),
            ..Product::default()
        };
        assert!(!order_message(&product).contains("KWD"));
    }

    #[test]
    fn whatsapp_link_strips_phone_formatting() {
        let link = whatsapp_order_link("+965 5555-1234", &phone_product())
            .expect("expected a link");
        assert!(link.starts_with("https://wa.me/96555551234?text="));
        assert!(!link.contains(' '));
    }

    #[test]
    fn whatsapp_link_none_without_digits() {
        assert!(whatsapp_order_link("n/a", &phone_product()).is_none());
    }
}
