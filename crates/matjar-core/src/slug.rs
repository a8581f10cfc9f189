//! Title → slug normalization.
//!
//! A slug keeps Arabic letters (U+0600..=U+06FF), ASCII lowercase letters,
//! digits and `-`. Whitespace runs become a single `-`, everything else is
//! dropped, and repeated `-` collapse to one. The detail page and the search
//! widget must agree on this function exactly, so both go through here.

/// Upper bound on feed slugs, in characters.
const FEED_SLUG_MAX_CHARS: usize = 80;

/// Slug used by the merchant feed when a title normalizes to nothing.
pub const FALLBACK_FEED_SLUG: &str = "product";

/// Normalizes an optional title into a slug.
///
/// `None` and titles with no allowed characters both yield `""`, which
/// callers must treat as "no valid slug".
#[must_use]
pub fn normalize(title: Option<&str>) -> String {
    title.map_or_else(String::new, slugify)
}

/// Normalizes a title into a slug. See the module docs for the rules.
#[must_use]
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_whitespace = false;

    for ch in title.to_lowercase().trim_matches(is_space).chars() {
        if is_space(ch) {
            in_whitespace = true;
            continue;
        }
        if in_whitespace {
            push_hyphen(&mut slug);
            in_whitespace = false;
        }
        if ch == '-' {
            push_hyphen(&mut slug);
        } else if is_slug_char(ch) {
            slug.push(ch);
        }
    }

    slug
}

/// Slug variant used for static product pages and feed ids: no leading or
/// trailing `-`, capped at 80 characters, and never empty.
#[must_use]
pub fn feed_slug(title: &str) -> String {
    let slug = slugify(title);
    let capped: String = slug
        .trim_matches('-')
        .chars()
        .take(FEED_SLUG_MAX_CHARS)
        .collect();
    if capped.is_empty() {
        FALLBACK_FEED_SLUG.to_owned()
    } else {
        capped
    }
}

fn push_hyphen(slug: &mut String) {
    if !slug.ends_with('-') {
        slug.push('-');
    }
}

/// Unicode whitespace plus U+FEFF, which browsers' `\s` also matches.
fn is_space(ch: char) -> bool {
    ch.is_whitespace() || ch == '\u{FEFF}'
}

fn is_slug_char(ch: char) -> bool {
    ch.is_ascii_lowercase() || ch.is_ascii_digit() || ('\u{0600}'..='\u{06FF}').contains(&ch)
}

#[cfg(test)]
#[path = "slug_test.rs"]
mod tests;
