//! Directory listing page parser.

use crate::consts;
use crate::error::{ErrorKind, Result};
use crate::models::{DirEntry, FileEntry, Listing};
use crate::paths;
use exn::OptionExt;
use scraper::{ElementRef, Html};
use std::collections::HashMap;

#[derive(Debug)]
pub struct ListingPage {
    document: Html,
}

impl ListingPage {
    pub fn from_html(html: &str) -> Self {
        Self { document: Html::parse_document(html) }
    }

    /// Partitions every non-header row of the listing table into directories
    /// and files, preserving row order on both sides.
    ///
    /// `dir_path` is the absolute path the page represents; rows only carry
    /// relative link targets, so each one is resolved against it.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::MissingElement`] if the page has no listing
    /// table. Everything else degrades per field: a row with no anchor still
    /// comes out, with `None` for name and path.
    pub fn entries(&self, dir_path: &str) -> Result<Listing> {
        let table = self
            .document
            .select(&consts::LISTING_TABLE_SELECTOR)
            .next()
            .ok_or_raise(|| ErrorKind::MissingElement("listing table"))?;
        let side_table = self.external_space_info();

        let mut listing = Listing::default();
        for row in table.select(&consts::ROW_SELECTOR).skip(1) {
            let cells: Vec<ElementRef<'_>> = row.select(&consts::CELL_SELECTOR).collect();
            let [name_cell, kind_cell, date_cell, ..] = cells.as_slice() else {
                continue;
            };

            let anchor = name_cell.select(&consts::ANCHOR_SELECTOR).next();
            let name = anchor.map(|a| a.text().collect::<String>());
            let href = anchor.and_then(|a| a.value().attr("href")).map(str::to_string);
            let path = href.as_deref().map(|href| paths::join(dir_path, href));
            let modified = date_cell.text().collect::<String>().trim().to_string();

            let kind_text = kind_cell.text().collect::<String>();
            let widget = kind_cell.select(&consts::DIV_SELECTOR).next();
            if kind_text.contains(consts::DIR_MARKER) || widget.is_some() {
                let space = Self::inline_space(widget).or_else(|| {
                    // Out-of-band annotation, keyed by the raw link target.
                    href.as_deref()
                        .and_then(|href| side_table.get(href))
                        .map(|value| format!("Free: {value}"))
                });
                listing.directories.push(DirEntry { name, path, space, modified });
            } else {
                // The size string in this row is truncated by the firmware;
                // it comes from the per-file metadata page instead.
                listing.files.push(FileEntry { name, path, modified });
            }
        }
        Ok(listing)
    }

    /// Newer firmware puts a space widget inside the row; its anchor's title
    /// reads `"<free> <unit> / <total> <unit>"`.
    fn inline_space(widget: Option<ElementRef<'_>>) -> Option<String> {
        let title = widget?.select(&consts::ANCHOR_SELECTOR).next()?.value().attr("title")?;
        let (free, total) = title.split_once(" / ")?;
        let free = Self::amount(free)?;
        let total = Self::amount(total)?;
        Some(format!("Free: {free} / Total: {total}"))
    }

    fn amount(side: &str) -> Option<String> {
        let captures = consts::SPACE_PART_REGEX.captures(side.trim())?;
        Some(format!("{} {}", &captures[1], &captures[2]))
    }

    /// Older firmware prints space annotations outside the table, as bold
    /// `"<label>: <value> free"` lines each wrapping an anchor. Keyed by the
    /// anchor's link target.
    fn external_space_info(&self) -> HashMap<String, String> {
        let mut info = HashMap::new();
        for bold in self.document.select(&consts::BOLD_SELECTOR) {
            let Some(anchor) = bold.select(&consts::ANCHOR_SELECTOR).next() else {
                continue;
            };
            let Some(href) = anchor.value().attr("href") else {
                continue;
            };
            let text = bold.text().collect::<String>();
            let Some(value) = text.split(": ").nth(1) else {
                continue;
            };
            let value = value.split(" free").next().unwrap_or_default();
            info.insert(href.to_string(), value.to_string());
        }
        info
    }
}
