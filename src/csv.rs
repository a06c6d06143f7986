// src/csv.rs
use std::io::{self, Write};

use crate::affiliate::AffiliateLinker;
use crate::catalog::CatalogItem;

pub const HEADERS: [&str; 4] = ["Title", "Price", "Platform", "Link"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn delim(self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// One output row: title, display price, platform, affiliate link (id filled in).
pub fn item_row(item: &CatalogItem, linker: &AffiliateLinker) -> [String; 4] {
    let platform = item.kind.map_or("", |k| k.platform_label());
    [
        item.title.clone(),
        item.price.clone(),
        s!(platform),
        linker.link(&item.affiliate).into_owned(),
    ]
}

/// Write items (optionally with a header line) to any writer.
pub fn write_items<'a, W, I>(
    mut w: W,
    items: I,
    include_headers: bool,
    format: ExportFormat,
    linker: &AffiliateLinker,
) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a CatalogItem>,
{
    let sep = format.delim();
    if include_headers {
        write_row(&mut w, &HEADERS, sep)?;
    }
    for item in items {
        write_row(&mut w, &item_row(item, linker), sep)?;
    }
    Ok(())
}
