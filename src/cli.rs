// src/cli.rs
//
// Headless run of the catalog pipeline: same loader, grouping, pools and
// filters as the GUI, printed as CSV/TSV. A missing or broken cache still
// prints an empty page.

use std::{
    io::{self, Write},
    path::PathBuf,
};

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};

use crate::{
    affiliate::AffiliateLinker,
    catalog::{self, CategoryPools, GroupedCatalog, group_by_name},
    config::{
        consts::{AFFILIATE_ID_ENV, AFFILIATE_PLACEHOLDER, CATALOG_PATH_ENV, DEFAULT_CATALOG_PATH},
        state::{ShellState, Tab},
    },
    csv::{self, ExportFormat},
    filter::{FilterState, PlatformFilter, PriceRange, SortMode},
    shell::Shell,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Tsv,
}

impl From<Format> for ExportFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Csv => ExportFormat::Csv,
            Format::Tsv => ExportFormat::Tsv,
        }
    }
}

/// Browse the scraped catalog from the terminal.
#[derive(Debug, Parser)]
#[command(name = "cli", version, about)]
pub struct Args {
    /// Catalog cache written by the scraper
    #[arg(long, env = CATALOG_PATH_ENV, default_value = DEFAULT_CATALOG_PATH)]
    pub cache: PathBuf,

    /// cursos | productos
    #[arg(long, default_value = "cursos")]
    pub tab: Tab,

    /// Case-insensitive title substring
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// all | udemy | coursera | producto
    #[arg(long, default_value = "all")]
    pub platform: PlatformFilter,

    /// all | inclusive price ceiling
    #[arg(long = "max-price", default_value = "all")]
    pub max_price: PriceRange,

    /// recommended | price-asc | price-desc
    #[arg(long, default_value = "recommended")]
    pub sort: SortMode,

    /// 1-based page number
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    #[arg(long, value_enum, default_value_t = Format::Csv)]
    pub format: Format,

    /// Emit a header line
    #[arg(long = "headers")]
    pub include_headers: bool,

    /// Value substituted for the affiliate placeholder in links
    #[arg(long = "affiliate-id", env = AFFILIATE_ID_ENV, default_value = AFFILIATE_PLACEHOLDER)]
    pub affiliate_id: String,

    /// List names offered more than once, with the cheapest offer, instead of a page
    #[arg(long)]
    pub compare: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn filters(&self) -> FilterState {
        FilterState { price_range: self.max_price, platform: self.platform, sort: self.sort }
    }

    /// Shell state equivalent to these flags; `--page 0` reads as page 1.
    pub fn shell_state(&self) -> ShellState {
        ShellState {
            active_tab: self.tab,
            current_page: self.page.max(1),
            filters: self.filters(),
            search_query: self.query.clone(),
        }
    }
}

pub fn run(args: Args) -> Result<()> {
    let items = catalog::load(&args.cache);
    let grouped = group_by_name(&items);
    let linker = AffiliateLinker::new(args.affiliate_id.clone());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.compare {
        write_comparisons(&mut out, &grouped, &linker).wrap_err("writing comparisons")?;
        return out.flush().wrap_err("flushing stdout");
    }

    let shell = Shell::with_state(CategoryPools::from_grouped(&grouped), args.shell_state());
    let page = shell.page();

    csv::write_items(
        &mut out,
        page.items.iter().copied(),
        args.include_headers,
        args.format.into(),
        &linker,
    )
    .wrap_err("writing page")?;
    out.flush().wrap_err("flushing stdout")?;

    eprintln!("{} ({} resultados)", page.readout(), page.total_items);
    Ok(())
}

fn write_comparisons<W: Write>(mut w: W, grouped: &GroupedCatalog, linker: &AffiliateLinker) -> io::Result<()> {
    for cmp in grouped.comparisons() {
        let offers = cmp
            .items
            .iter()
            .map(|it| format!("{} {}", it.kind.map_or("?", |k| k.platform_label()), it.price))
            .collect::<Vec<_>>()
            .join(" | ");
        let best = cmp
            .cheapest
            .map(|it| linker.link(&it.affiliate).into_owned())
            .unwrap_or_default();
        csv::write_row(&mut w, &[cmp.key, offers.as_str(), best.as_str()], ',')?;
    }
    Ok(())
}
