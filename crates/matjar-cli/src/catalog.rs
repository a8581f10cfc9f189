//! Detail-page and search command handlers for the CLI.
//!
//! Catalog and lookup failures are terminal view states, not process
//! errors: they are printed for the user and the command returns `Ok`.

use matjar_catalog::{DetailView, LookupError, SearchView, Storefront};
use matjar_core::links::whatsapp_order_link;
use matjar_core::price::display_price;
use matjar_core::{AppConfig, Product};

/// Resolve a detail-page link and print the product it names.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or JSON output fails.
pub(crate) async fn run_product(config: &AppConfig, link: &str, json: bool) -> anyhow::Result<()> {
    let storefront = Storefront::from_config(config)?;

    match storefront.product_detail(link).await {
        Ok(DetailView::Resolved(product)) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&product)?);
            } else {
                print_product(&product, config.whatsapp_number.as_deref());
            }
        }
        Ok(DetailView::NotFound { slug }) => {
            println!("product not found: {slug}");
        }
        Ok(DetailView::Unavailable(e)) => {
            eprintln!("error: could not load product details: {e}");
        }
        Err(LookupError::InvalidSlugInput { reason }) => {
            eprintln!("error: invalid product link ({reason})");
        }
    }

    Ok(())
}

/// Print live-search suggestions for `query`, one per line.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
pub(crate) async fn run_search(config: &AppConfig, query: &str) -> anyhow::Result<()> {
    let storefront = Storefront::from_config(config)?;

    match storefront.suggest(query).await {
        SearchView::Hidden => {}
        SearchView::NoResults => println!("no matching products"),
        SearchView::Suggestions(suggestions) => {
            for suggestion in suggestions {
                println!("{}\t{}", suggestion.title, suggestion.href);
            }
        }
    }

    Ok(())
}

pub(crate) fn run_slug(title: &str) {
    println!("{}", matjar_core::slugify(title));
}

fn print_product(product: &Product, whatsapp_number: Option<&str>) {
    println!("{}", product.title);

    let regular = product.price.as_deref().map(|raw| {
        display_price(raw).unwrap_or_else(|| raw.to_owned())
    });
    let sale = product.discounted_price.as_deref().and_then(display_price);
    match (regular, sale) {
        (Some(regular), Some(sale)) => println!("price: {sale} (was {regular})"),
        (Some(regular), None) => println!("price: {regular}"),
        (None, Some(sale)) => println!("price: {sale}"),
        (None, None) => println!("price: unavailable"),
    }

    if !product.description.is_empty() {
        println!();
        println!("{}", product.description);
        println!();
    }
    if !product.image_url.is_empty() {
        println!("image: {}", product.image_url);
    }
    if !product.original_link.is_empty() {
        println!("listing: {}", product.original_link);
    }
    if let Some(link) = whatsapp_number.and_then(|phone| whatsapp_order_link(phone, product)) {
        println!("order: {link}");
    }
}
