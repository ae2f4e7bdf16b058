use crate::error::{ErrorKind, Result};
use crate::records::FileRecord;
use crate::session::Session;
use exn::OptionExt;
use std::sync::OnceLock;
use webmanrc_scrape::models::{DirEntry, Listing};
use webmanrc_scrape::{ListingPage, paths};

/// One directory on the console filesystem.
///
/// The listing markup is fetched once and kept for the record's lifetime
/// (or supplied at construction, for a directory the session already
/// fetched); the listing itself is re-parsed from it on every call.
#[derive(Debug)]
pub struct DirectoryRecord<'s> {
    session: &'s Session,
    name: Option<String>,
    path: Option<String>,
    space: Option<String>,
    modified: Option<String>,
    markup: OnceLock<String>,
}

impl<'s> DirectoryRecord<'s> {
    /// A directory whose markup the session has already fetched; the first
    /// listing call parses without a network round-trip.
    pub(crate) fn with_markup(session: &'s Session, path: String, markup: String) -> Self {
        let cell = OnceLock::new();
        let _ = cell.set(markup);
        Self {
            session,
            name: Some(paths::basename(&path).to_string()),
            path: Some(path),
            space: None,
            modified: None,
            markup: cell,
        }
    }

    pub(crate) fn from_entry(session: &'s Session, entry: DirEntry) -> Self {
        Self {
            session,
            name: entry.name,
            path: entry.path,
            space: entry.space,
            modified: Some(entry.modified),
            markup: OnceLock::new(),
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

    /// Space annotation from the listing this record came from, e.g.
    /// `"Free: 12 GB / Total: 50 GB"`. Not every page exposes one.
    pub fn space(&self) -> Option<&str> {
        self.space.as_deref()
    }

    /// Free-text modification label from the listing row.
    pub fn modified(&self) -> Option<&str> {
        self.modified.as_deref()
    }

    fn markup(&self) -> Result<&str> {
        if let Some(html) = self.markup.get() {
            return Ok(html);
        }
        let path = self.path.as_deref().ok_or_raise(|| ErrorKind::MissingElement("path"))?;
        let html = self.session.fetch(path)?;
        Ok(self.markup.get_or_init(|| html))
    }

    fn parse(&self) -> Result<Listing> {
        let path = self.path.as_deref().ok_or_raise(|| ErrorKind::MissingElement("path"))?;
        ListingPage::from_html(self.markup()?).entries(path).map_err(ErrorKind::scrape)
    }

    /// Subdirectories, in listing order.
    pub fn directories(&self) -> Result<Vec<DirectoryRecord<'s>>> {
        Ok(self
            .parse()?
            .directories
            .into_iter()
            .map(|entry| DirectoryRecord::from_entry(self.session, entry))
            .collect())
    }

    /// Files, in listing order.
    pub fn files(&self) -> Result<Vec<FileRecord<'s>>> {
        Ok(self
            .parse()?
            .files
            .into_iter()
            .map(|entry| FileRecord::from_entry(self.session, entry))
            .collect())
    }

    /// Directories then files, in listing order.
    pub fn listing(&self) -> Result<(Vec<DirectoryRecord<'s>>, Vec<FileRecord<'s>>)> {
        Ok((self.directories()?, self.files()?))
    }

    /// Looks a subdirectory up by name.
    pub fn subdirectory(&self, name: &str) -> Result<Option<DirectoryRecord<'s>>> {
        Ok(self.directories()?.into_iter().find(|dir| dir.name() == Some(name)))
    }

    /// Looks a file up by name.
    pub fn file(&self, name: &str) -> Result<Option<FileRecord<'s>>> {
        Ok(self.files()?.into_iter().find(|file| file.name() == Some(name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockTransport;
    use std::sync::Arc;

    const LISTING: &str = concat!(
        "<html><body><table id='files'>",
        "<tr><th>Name</th><th>Size</th><th>Date</th></tr>",
        "<tr><td><a href='GAMES'>GAMES</a></td>",
        "<td><div><a title='12 GB / 50 GB'>usage</a></div></td>",
        "<td>2024-01-01</td></tr>",
        "<tr><td><a href='boot.bin'>boot.bin</a></td><td>62 KB</td><td>2024-01-02</td></tr>",
        "</table></body></html>",
    );

    fn session_with(
        routes: impl IntoIterator<Item = (&'static str, &'static str)>,
    ) -> (Session, Arc<MockTransport>) {
        let transport = Arc::new(MockTransport::with_routes(routes));
        (Session::with_transport(Arc::clone(&transport)), transport)
    }

    #[test]
    fn supplied_markup_avoids_a_second_fetch() {
        let (session, transport) = session_with([("/dev_hdd0", LISTING)]);
        let root = session.directory("/dev_hdd0").unwrap();
        let (dirs, files) = root.listing().unwrap();
        assert_eq!(dirs.len(), 1);
        assert_eq!(files.len(), 1);
        // One fetch at construction, none for the listing itself.
        assert_eq!(transport.hits("/dev_hdd0"), 1);
    }

    #[test]
    fn space_and_size_end_to_end() {
        let (session, _) = session_with([("/dev_hdd0", LISTING)]);
        let root = session.directory("/dev_hdd0").unwrap();
        let dirs = root.directories().unwrap();
        assert_eq!(dirs[0].space(), Some("Free: 12 GB / Total: 50 GB"));
        assert_eq!(dirs[0].path(), Some("/dev_hdd0/GAMES"));
        // The file record carries no size; that comes from the metadata page.
        let files = root.files().unwrap();
        assert_eq!(files[0].name(), Some("boot.bin"));
        assert_eq!(files[0].modified(), Some("2024-01-02"));
    }

    #[test]
    fn subdirectory_listing_is_fetched_lazily_and_kept() {
        let (session, transport) = session_with([
            ("/dev_hdd0", LISTING),
            ("/dev_hdd0/GAMES", "<html><body><table id='files'><tr><th></th></tr></table></body></html>"),
        ]);
        let root = session.directory("/dev_hdd0").unwrap();
        let games = root.subdirectory("GAMES").unwrap().unwrap();
        assert_eq!(transport.hits("/dev_hdd0/GAMES"), 0);
        assert!(games.files().unwrap().is_empty());
        assert!(games.directories().unwrap().is_empty());
        // Markup fetched once, re-parsed on each call.
        assert_eq!(transport.hits("/dev_hdd0/GAMES"), 1);
    }

    #[test]
    fn lookup_helpers_find_by_name() {
        let (session, _) = session_with([("/dev_hdd0", LISTING)]);
        let root = session.directory("/dev_hdd0").unwrap();
        assert!(root.file("boot.bin").unwrap().is_some());
        assert!(root.file("missing.bin").unwrap().is_none());
        assert!(root.subdirectory("GAMES").unwrap().is_some());
        assert!(root.subdirectory("PKG").unwrap().is_none());
    }

    #[test]
    fn root_record_is_named_after_its_final_segment() {
        let (session, _) = session_with([("/dev_hdd0", LISTING)]);
        let root = session.directory("/dev_hdd0").unwrap();
        assert_eq!(root.name(), Some("dev_hdd0"));
        assert_eq!(root.space(), None);
        assert_eq!(root.modified(), None);
    }
}
