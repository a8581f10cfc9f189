//! Detail-page and search-widget flows over one shared catalog loader.

use matjar_core::links::product_page_href;
use matjar_core::{filter_suggestions, resolve, slugify, AppConfig, Product};
use reqwest::Url;

use crate::client::CatalogClient;
use crate::error::{CatalogError, CatalogUnavailable, LookupError};
use crate::loader::CatalogLoader;

/// Query-string parameter that carries the product slug on the detail page.
pub const SLUG_PARAM: &str = "name";

/// Terminal state of the product-detail page once loading finishes.
#[derive(Debug, Clone)]
pub enum DetailView {
    Resolved(Product),
    NotFound { slug: String },
    Unavailable(CatalogUnavailable),
}

/// One entry of the live-search dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub title: String,
    pub slug: String,
    /// Relative link to the detail page.
    pub href: String,
}

/// What the search widget shows after a keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchView {
    /// Blank query; the dropdown is closed.
    Hidden,
    Suggestions(Vec<Suggestion>),
    /// The "no matching products" row.
    NoResults,
}

/// Owns the session's catalog and serves both storefront views from it.
pub struct Storefront {
    loader: CatalogLoader,
    suggestion_limit: usize,
}

impl Storefront {
    #[must_use]
    pub fn new(loader: CatalogLoader, suggestion_limit: usize) -> Self {
        Self {
            loader,
            suggestion_limit,
        }
    }

    /// Builds a storefront with an HTTP loader configured from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, CatalogError> {
        let client = CatalogClient::new(config.request_timeout_secs, &config.user_agent)?;
        let loader = CatalogLoader::new(client, config.catalog_url.clone());
        Ok(Self::new(loader, config.suggestion_limit))
    }

    #[must_use]
    pub fn loader(&self) -> &CatalogLoader {
        &self.loader
    }

    /// Warms the catalog cache ahead of the first query. Failures are logged
    /// and otherwise ignored; the next query retries.
    pub async fn prefetch(&self) {
        if let Err(e) = self.loader.load().await {
            tracing::warn!(error = %e, "catalog prefetch failed");
        }
    }

    /// Resolves the product named by a detail-page URL or query string.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::InvalidSlugInput`] when the `name` parameter is
    /// missing or blank. Catalog failures are reported as
    /// [`DetailView::Unavailable`], not as errors.
    pub async fn product_detail(&self, page: &str) -> Result<DetailView, LookupError> {
        let slug = slug_from_page(page)?;

        let catalog = match self.loader.load().await {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::error!(slug = %slug, error = %e, "could not load catalog for product page");
                return Ok(DetailView::Unavailable(e));
            }
        };

        Ok(match resolve(&catalog, &slug) {
            Some(product) => DetailView::Resolved(product.clone()),
            None => {
                tracing::info!(slug = %slug, "no product matches slug");
                DetailView::NotFound { slug }
            }
        })
    }

    /// Returns the suggestions for one search-box value.
    ///
    /// A blank query closes the dropdown without touching the catalog. A
    /// catalog failure degrades to [`SearchView::NoResults`].
    pub async fn suggest(&self, query: &str) -> SearchView {
        if query.trim().is_empty() {
            return SearchView::Hidden;
        }

        let catalog = match self.loader.load().await {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::warn!(error = %e, "search catalog unavailable");
                return SearchView::NoResults;
            }
        };

        let suggestions: Vec<Suggestion> =
            filter_suggestions(&catalog, query, self.suggestion_limit)
                .into_iter()
                .map(|product| {
                    let slug = slugify(&product.title);
                    Suggestion {
                        title: product.title.clone(),
                        href: product_page_href(&slug),
                        slug,
                    }
                })
                .collect();

        if suggestions.is_empty() {
            SearchView::NoResults
        } else {
            SearchView::Suggestions(suggestions)
        }
    }
}

/// Base that relative detail-page inputs are resolved against.
const PAGE_BASE: &str = "http://localhost/product.html";

/// Extracts the slug from a detail-page URL (`https://…/product.html?name=…`),
/// a bare query string (`?name=…`), or `name=…`.
///
/// Decoding follows form rules: `+` is a space and `%XX` escapes are decoded.
/// The first `name` parameter wins.
///
/// # Errors
///
/// Returns [`LookupError::InvalidSlugInput`] when no non-blank `name`
/// parameter is present.
pub fn slug_from_page(page: &str) -> Result<String, LookupError> {
    let url = page_url(page)?;

    let slug = url
        .query_pairs()
        .find_map(|(key, value)| (key == SLUG_PARAM).then(|| value.into_owned()))
        .ok_or_else(|| LookupError::InvalidSlugInput {
            reason: format!("missing \"{SLUG_PARAM}\" parameter"),
        })?;

    if slug.trim().is_empty() {
        return Err(LookupError::InvalidSlugInput {
            reason: format!("empty \"{SLUG_PARAM}\" parameter"),
        });
    }

    Ok(slug)
}

/// Absolute URLs are used as-is and relative links are resolved against the
/// detail page. Input without a `?` is taken to be the query itself.
fn page_url(page: &str) -> Result<Url, LookupError> {
    if let Ok(url) = Url::parse(page) {
        return Ok(url);
    }

    let relative = if page.contains('?') {
        page.to_owned()
    } else {
        format!("?{page}")
    };

    Url::parse(PAGE_BASE)
        .and_then(|base| base.join(&relative))
        .map_err(|e| LookupError::InvalidSlugInput {
            reason: format!("unparseable page link: {e}"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_from_full_page_url() {
        assert_eq!(
            slug_from_page("https://shop.example/product.html?name=smart-watch").unwrap(),
            "smart-watch"
        );
    }

    #[test]
    fn slug_from_bare_query_string() {
        assert_eq!(slug_from_page("?name=lamp").unwrap(), "lamp");
        assert_eq!(slug_from_page("name=lamp").unwrap(), "lamp");
    }

    #[test]
    fn slug_is_percent_decoded() {
        assert_eq!(
            slug_from_page("?name=%D9%87%D8%A7%D8%AA%D9%81-%D8%B0%D9%83%D9%8A").unwrap(),
            "هاتف-ذكي"
        );
    }

    #[test]
    fn unescaped_arabic_in_full_url() {
        assert_eq!(
            slug_from_page("https://shop.example/product.html?name=هاتف-ذكي").unwrap(),
            "هاتف-ذكي"
        );
    }

    #[test]
    fn relative_page_link() {
        assert_eq!(slug_from_page("./product.html?name=lamp").unwrap(), "lamp");
        assert_eq!(slug_from_page("product.html?name=lamp&x=1").unwrap(), "lamp");
    }

    #[test]
    fn plus_decodes_to_space() {
        assert_eq!(slug_from_page("?name=a+b").unwrap(), "a b");
    }

    #[test]
    fn first_name_parameter_wins_and_others_are_ignored() {
        assert_eq!(
            slug_from_page("?utm_source=wa&name=first&name=second").unwrap(),
            "first"
        );
    }

    #[test]
    fn fragment_is_ignored() {
        assert_eq!(slug_from_page("?name=lamp#reviews").unwrap(), "lamp");
    }

    #[test]
    fn missing_name_is_invalid_input() {
        let err = slug_from_page("https://shop.example/product.html?id=3").unwrap_err();
        assert!(matches!(err, LookupError::InvalidSlugInput { ref reason } if reason.contains("missing")));
    }

    #[test]
    fn page_without_query_is_invalid_input() {
        assert!(slug_from_page("https://shop.example/product.html").is_err());
        assert!(slug_from_page("").is_err());
    }

    #[test]
    fn blank_name_is_invalid_input() {
        let err = slug_from_page("?name=").unwrap_err();
        assert!(matches!(err, LookupError::InvalidSlugInput { ref reason } if reason.contains("empty")));
        assert!(slug_from_page("?name=++").is_err());
    }
}
