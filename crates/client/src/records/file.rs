use crate::error::{ErrorKind, Result};
use crate::session::{METADATA_PREFIX, Session};
use exn::OptionExt;
use std::sync::OnceLock;
use webmanrc_scrape::models::FileEntry;
use webmanrc_scrape::{MetaPage, paths};

/// One file on the console filesystem.
///
/// Size and checksum are not read from the listing row (the firmware
/// truncates them there); they live on a dedicated metadata page fetched
/// lazily on the first [`md5`](Self::md5) or [`size`](Self::size) call and
/// memoized for the record's lifetime.
#[derive(Debug)]
pub struct FileRecord<'s> {
    session: &'s Session,
    name: Option<String>,
    path: Option<String>,
    modified: Option<String>,
    metadata: OnceLock<String>,
}

impl<'s> FileRecord<'s> {
    pub(crate) fn from_entry(session: &'s Session, entry: FileEntry) -> Self {
        Self {
            session,
            name: entry.name,
            path: entry.path,
            modified: Some(entry.modified),
            metadata: OnceLock::new(),
        }
    }

    /// An icon resource from the catalogue page. Never checked for
    /// existence.
    pub(crate) fn icon(session: &'s Session, src: String) -> Self {
        Self {
            session,
            name: Some(paths::basename(&src).to_string()),
            path: Some(src),
            modified: None,
            metadata: OnceLock::new(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Absolute, forward-slash path. Only absent for records built from
    /// malformed listing rows.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Free-text modification label from the listing row.
    pub fn modified(&self) -> Option<&str> {
        self.modified.as_deref()
    }

    /// Direct download URL for this file, built against the session's base
    /// URL.
    pub fn url(&self) -> Result<String> {
        let path = self.path.as_deref().ok_or_raise(|| ErrorKind::MissingElement("path"))?;
        Ok(format!("{}{}", self.session.base_url(), path))
    }

    fn metadata_markup(&self) -> Result<&str> {
        if let Some(html) = self.metadata.get() {
            return Ok(html);
        }
        let path = self.path.as_deref().ok_or_raise(|| ErrorKind::MissingElement("path"))?;
        let html = self.session.fetch(&format!("{METADATA_PREFIX}{path}"))?;
        Ok(self.metadata.get_or_init(|| html))
    }

    /// MD5 checksum as reported by the console's metadata page, if present.
    pub fn md5(&self) -> Result<Option<String>> {
        Ok(MetaPage::from_html(self.metadata_markup()?).md5())
    }

    /// Human-readable size string from the metadata page, if present.
    pub fn size(&self) -> Result<Option<String>> {
        Ok(MetaPage::from_html(self.metadata_markup()?).size())
    }
}
