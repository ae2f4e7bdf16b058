//! Per-file metadata page parser.
//!
//! The firmware renders a file's checksum and exact size on a dedicated page
//! (`/md5.ps3` + the file's path) as labelled paragraphs. Both fields are
//! optional; a missing label is an absent value, not a failure.

use crate::consts;
use scraper::Html;

#[derive(Debug)]
pub struct MetaPage {
    document: Html,
}

impl MetaPage {
    pub fn from_html(html: &str) -> Self {
        Self { document: Html::parse_document(html) }
    }

    /// MD5 checksum, from the first paragraph labelled `MD5:`.
    pub fn md5(&self) -> Option<String> {
        self.labelled("MD5:")
    }

    /// Human-readable size string, from the first paragraph labelled `Size:`.
    pub fn size(&self) -> Option<String> {
        self.labelled("Size:")
    }

    fn labelled(&self, label: &str) -> Option<String> {
        self.document.select(&consts::PARAGRAPH_SELECTOR).find_map(|paragraph| {
            let text = paragraph.text().collect::<String>();
            text.trim().strip_prefix(label).map(|rest| rest.trim().to_string())
        })
    }
}
