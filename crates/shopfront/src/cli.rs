//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use shopfront_query::{QueryParams, SortKey, DEFAULT_PAGE_SIZE};

/// Browse a product catalog: search, filter by category, sort and page.
#[derive(Debug, Parser)]
#[command(name = "shopfront")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Always emit styled output, even when stdout is not a terminal
    #[arg(long, global = true)]
    pub color: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show one page of products
    Browse(BrowseArgs),

    /// List the category labels present in the catalog
    Categories(CategoriesArgs),
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// Product cards and a page selector
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

#[derive(Debug, Args)]
pub struct CatalogSource {
    /// JSON catalog file; the built-in demo catalog is used when omitted
    #[arg(long, env = "SHOPFRONT_CATALOG")]
    pub catalog: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct BrowseArgs {
    #[command(flatten)]
    pub source: CatalogSource,

    /// Case-insensitive text to look for in product names
    #[arg(long, short, default_value = "")]
    pub search: String,

    /// Only show this category (exact label); empty shows all
    #[arg(long, short = 'c', default_value = "")]
    pub category: String,

    /// Sort order: "price" (cheapest first) or "rating" (best first).
    /// Anything else sorts by price.
    #[arg(long, default_value = "price")]
    pub sort: String,

    /// 1-based page number; values below 1 show the first page
    #[arg(long, short, default_value_t = 1, allow_negative_numbers = true)]
    pub page: i64,

    /// Products per page; values below 1 show one per page
    #[arg(
        long,
        env = "SHOPFRONT_PAGE_SIZE",
        default_value_t = DEFAULT_PAGE_SIZE as i64,
        allow_negative_numbers = true
    )]
    pub page_size: i64,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

impl BrowseArgs {
    /// The query parameters these arguments select.
    pub fn params(&self) -> QueryParams {
        QueryParams::new()
            .with_search(self.search.as_str())
            .with_category(self.category.as_str())
            .with_sort(SortKey::parse_lenient(&self.sort))
            .with_page(at_least_one(self.page))
            .with_page_size(at_least_one(self.page_size))
    }
}

fn at_least_one(n: i64) -> usize {
    usize::try_from(n.max(1)).unwrap_or(usize::MAX)
}

#[derive(Debug, Args)]
pub struct CategoriesArgs {
    #[command(flatten)]
    pub source: CatalogSource,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn browse(args: &[&str]) -> BrowseArgs {
        let argv = ["shopfront", "browse"].iter().chain(args);
        match Cli::try_parse_from(argv).unwrap().command {
            Command::Browse(args) => args,
            other => panic!("expected browse, got {other:?}"),
        }
    }

    #[test]
    fn defaults_match_query_defaults() {
        let args = browse(&[]);
        assert_eq!(args.format, Format::Text);
        assert!(args.source.catalog.is_none());
        assert_eq!(args.params(), QueryParams::default());
    }

    #[test]
    fn flags_map_to_params() {
        let args = browse(&[
            "--search", "ph", "-c", "Electronics", "--sort", "rating", "-p", "3", "--page-size", "5",
        ]);
        let params = args.params();

        assert_eq!(params.search_text, "ph");
        assert_eq!(params.category(), Some("Electronics"));
        assert_eq!(params.sort_key, SortKey::ByRating);
        assert_eq!(params.page_number, 3);
        assert_eq!(params.page_size, 5);
    }

    #[test]
    fn unknown_sort_falls_back_to_price() {
        assert_eq!(browse(&["--sort", "popularity"]).params().sort_key, SortKey::ByPrice);
    }

    #[test]
    fn non_positive_pages_are_clamped() {
        let params = browse(&["--page=-1", "--page-size=-3"]).params();
        assert_eq!(params.page_number, 1);
        assert_eq!(params.page_size, 1);

        let params = browse(&["-p", "-4", "--page-size", "0"]).params();
        assert_eq!(params.page_number, 1);
        assert_eq!(params.page_size, 1);
    }

    #[test]
    fn format_flag() {
        assert_eq!(browse(&["--format", "json"]).format, Format::Json);
        assert!(Cli::try_parse_from(["shopfront", "browse", "--format", "xml"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["shopfront", "categories", "-v", "--color"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.color);
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
