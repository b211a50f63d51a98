//! Text and JSON presentation of result pages.
//!
//! Text output goes through minijinja templates. A `style` filter maps
//! semantic names (`title`, `name`, `price`, `dim`) to terminal styles, or
//! leaves text untouched when color is off.

use console::Style;
use minijinja::{Environment, Value};
use serde::Serialize;
use shopfront_query::{Product, QueryParams, ResultPage};
use thiserror::Error;

const PAGE_TEMPLATE: &str = include_str!("../templates/page.jinja");
const CATEGORIES_TEMPLATE: &str = include_str!("../templates/categories.jinja");

/// Errors that can occur while rendering output.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// One product card.
#[derive(Debug, Serialize)]
struct CardView<'a> {
    id: String,
    name: &'a str,
    category: &'a str,
    price: String,
    rating: String,
    image: Option<&'a str>,
}

impl<'a> From<&'a Product> for CardView<'a> {
    fn from(product: &'a Product) -> Self {
        CardView {
            id: product.id.to_string(),
            name: &product.name,
            category: &product.category,
            price: format!("${}", product.price),
            rating: product.rating.to_string(),
            image: product.image.as_deref(),
        }
    }
}

#[derive(Debug, Serialize)]
struct PageView<'a> {
    cards: Vec<CardView<'a>>,
    search: &'a str,
    category: &'a str,
    sort: &'static str,
    pages: Vec<usize>,
    current: usize,
    total: usize,
    beyond_range: bool,
}

/// JSON shape of `browse --format json`.
#[derive(Debug, Serialize)]
struct BrowseOutput<'p, 'a> {
    params: &'p QueryParams,
    #[serde(flatten)]
    page: &'p ResultPage<'a>,
}

/// Renders pages and category lists as styled or plain text.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// Creates a renderer. With `color` off the `style` filter is a no-op.
    pub fn new(color: bool) -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);

        env.add_filter("style", move |value: Value, name: String| -> String {
            let text = value.to_string();
            if !color {
                return text;
            }
            style_for(&name).force_styling(true).apply_to(text).to_string()
        });

        env.add_template("page", PAGE_TEMPLATE)?;
        env.add_template("categories", CATEGORIES_TEMPLATE)?;

        Ok(Renderer { env })
    }

    /// Renders product cards followed by the page selector.
    pub fn page(&self, page: &ResultPage<'_>, params: &QueryParams) -> Result<String, RenderError> {
        let view = PageView {
            cards: page.iter().map(CardView::from).collect(),
            search: &params.search_text,
            category: params.category().unwrap_or("All Categories"),
            sort: params.sort_key.as_str(),
            pages: page.page_numbers().collect(),
            current: page.page_number,
            total: page.total_matches,
            beyond_range: page.is_beyond_range(),
        };

        let rendered = self.env.get_template("page")?.render(&view)?;
        Ok(rendered.trim_end().to_string())
    }

    /// Renders the category selector options.
    pub fn categories(&self, categories: &[&str]) -> Result<String, RenderError> {
        let rendered = self
            .env
            .get_template("categories")?
            .render(minijinja::context! { categories => categories })?;
        Ok(rendered.trim_end().to_string())
    }
}

fn style_for(name: &str) -> Style {
    match name {
        "title" => Style::new().bold().cyan(),
        "name" => Style::new().bold(),
        "price" => Style::new().green(),
        "dim" => Style::new().dim(),
        _ => Style::new(),
    }
}

/// Serializes a page together with the parameters that produced it.
pub fn page_json(page: &ResultPage<'_>, params: &QueryParams) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(&BrowseOutput { params, page })?)
}

pub fn categories_json(categories: &[&str]) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(categories)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_query::{Catalog, SortKey};

    fn render(params: &QueryParams, color: bool) -> String {
        let catalog = Catalog::sample();
        let page = catalog.query(params);
        Renderer::new(color).unwrap().page(&page, params).unwrap()
    }

    #[test]
    fn renders_cards_in_page_order() {
        let output = render(&QueryParams::new(), false);

        let shoes = output.find("Shoes").unwrap();
        let watch = output.find("Watch").unwrap();
        assert!(shoes < watch);
        assert!(!output.contains("Laptop"));
        assert!(output.contains("  Fashion"));
        assert!(output.contains("  $100"));
        assert!(output.contains("⭐ 4.2"));
        assert!(output.contains("#3"));
    }

    #[test]
    fn renders_page_selector() {
        let output = render(&QueryParams::new().with_page(2), false);

        assert!(output.contains("Pages: 1 [2]"));
        assert!(output.contains("4 matching products"));
    }

    #[test]
    fn header_describes_the_query() {
        let params = QueryParams::new()
            .with_search("ph")
            .with_category("Electronics")
            .with_sort(SortKey::ByRating);
        let output = render(&params, false);

        assert!(output.starts_with("Product Catalog\n"));
        assert!(output.contains("Search: \"ph\" | Category: Electronics | Sort by rating"));
        assert!(output.contains("1 matching product\n") || output.ends_with("1 matching product"));
    }

    #[test]
    fn default_header_shows_all_categories() {
        let output = render(&QueryParams::new(), false);
        assert!(output.contains("Search: (none) | Category: All Categories | Sort by price"));
    }

    #[test]
    fn empty_results() {
        let output = render(&QueryParams::new().with_search("toaster"), false);

        assert!(output.contains("No products match."));
        assert!(!output.contains("Pages:"));
    }

    #[test]
    fn page_past_the_end() {
        let output = render(&QueryParams::new().with_page(99), false);

        assert!(output.contains("Page 99 is past the last page."));
        assert!(output.contains("Pages: 1 2"));
    }

    #[test]
    fn color_adds_escape_codes_only_when_enabled() {
        assert!(!render(&QueryParams::new(), false).contains('\u{1b}'));
        assert!(render(&QueryParams::new(), true).contains('\u{1b}'));
    }

    #[test]
    fn categories_list_starts_with_all() {
        let renderer = Renderer::new(false).unwrap();
        let output = renderer.categories(&["Electronics", "Fashion"]).unwrap();

        assert_eq!(output, "Categories\n  All Categories\n  Electronics\n  Fashion");
    }

    #[test]
    fn page_json_includes_params_and_page() {
        let catalog = Catalog::sample();
        let params = QueryParams::new();
        let page = catalog.query(&params);

        let json: serde_json::Value = serde_json::from_str(&page_json(&page, &params).unwrap()).unwrap();
        assert_eq!(json["params"]["sort_key"], "price");
        assert_eq!(json["page_count"], 2);
        assert_eq!(json["items"][0]["name"], "Shoes");
    }
}
