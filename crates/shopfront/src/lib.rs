//! Terminal front end for the shopfront query engine.
//!
//! The binary is a thin presentation layer: it turns command-line flags into
//! [`QueryParams`](shopfront_query::QueryParams), asks a
//! [`QuerySession`](shopfront_query::QuerySession) for the current page and
//! renders it. [`run`] returns the rendered output instead of printing it so
//! it can be tested in-process.

pub mod cli;
pub mod logging;
pub mod render;

use anyhow::{Context, Result};
use shopfront_query::{Catalog, QuerySession};

pub use cli::{BrowseArgs, CatalogSource, CategoriesArgs, Cli, Command, Format};
pub use render::{RenderError, Renderer};

/// Executes a parsed command and returns what should be printed.
///
/// `color` enables terminal styles in text output.
pub fn run(cli: &Cli, color: bool) -> Result<String> {
    match &cli.command {
        Command::Browse(args) => browse(args, color),
        Command::Categories(args) => categories(args, color),
    }
}

fn load_catalog(source: &CatalogSource) -> Result<Catalog> {
    match &source.catalog {
        Some(path) => Catalog::load(path).context("could not load catalog"),
        None => Ok(Catalog::sample()),
    }
}

fn browse(args: &BrowseArgs, color: bool) -> Result<String> {
    let catalog = load_catalog(&args.source)?;
    let session = QuerySession::with_params(&catalog, args.params());
    tracing::debug!(params = ?session.params(), "browsing catalog");

    let page = session.current_page();
    let output = match args.format {
        Format::Text => Renderer::new(color)?.page(&page, session.params())?,
        Format::Json => render::page_json(&page, session.params())?,
    };
    Ok(output)
}

fn categories(args: &CategoriesArgs, color: bool) -> Result<String> {
    let catalog = load_catalog(&args.source)?;
    let categories = catalog.categories();

    let output = match args.format {
        Format::Text => Renderer::new(color)?.categories(&categories)?,
        Format::Json => render::categories_json(&categories)?,
    };
    Ok(output)
}
