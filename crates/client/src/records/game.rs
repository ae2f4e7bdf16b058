use crate::error::Result;
use crate::records::{DirectoryRecord, FileRecord};
use crate::session::{MOUNT_PREFIX, Session};
use webmanrc_scrape::models::GameEntry;

/// One installed title from the catalogue.
#[derive(Debug)]
pub struct GameRecord<'s> {
    session: &'s Session,
    title: String,
    path: String,
    icon: Option<FileRecord<'s>>,
}

impl<'s> GameRecord<'s> {
    pub(crate) fn new(session: &'s Session, entry: GameEntry) -> Self {
        let icon = entry.icon.map(|src| FileRecord::icon(session, src));
        Self { session, title: entry.title, path: entry.path, icon }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// The title's mount directory on the device.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The title's icon resource, if the catalogue page showed one.
    pub fn icon(&self) -> Option<&FileRecord<'s>> {
        self.icon.as_ref()
    }

    /// Asks the console to mount this title. Fire and forget: the response
    /// body is ignored and the mount is never confirmed.
    pub fn mount(&self) -> Result<()> {
        self.session.fetch(&format!("{MOUNT_PREFIX}{}", self.path))?;
        Ok(())
    }

    /// Fetches the title's directory listing.
    pub fn directory(&self) -> Result<DirectoryRecord<'s>> {
        self.session.directory(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockTransport;
    use std::sync::Arc;

    const CATALOGUE: &str = concat!(
        "<html><body>",
        "<div class='ic'><img class='gi' src='/icons/foo.png'></div>",
        "<div class='gn'><a href='/games/foo'>Foo</a></div>",
        "<div class='gn'><a href='/mount/x'>Mount X</a></div>",
        "</body></html>",
    );

    fn session_with(
        routes: impl IntoIterator<Item = (&'static str, &'static str)>,
    ) -> (Session, Arc<MockTransport>) {
        let transport = Arc::new(MockTransport::with_routes(routes));
        (Session::with_transport(Arc::clone(&transport)), transport)
    }

    #[test]
    fn catalogue_excludes_mount_action_links() {
        let (session, _) = session_with([("/sman.ps3?", CATALOGUE)]);
        let games = session.games().unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].title(), "Foo");
        assert_eq!(games[0].path(), "/games/foo");
    }

    #[test]
    fn icon_becomes_a_file_record() {
        let (session, _) = session_with([("/sman.ps3?", CATALOGUE)]);
        let games = session.games().unwrap();
        let icon = games[0].icon().unwrap();
        assert_eq!(icon.name(), Some("foo.png"));
        assert_eq!(icon.path(), Some("/icons/foo.png"));
        assert_eq!(icon.modified(), None);
    }

    #[test]
    fn mount_is_fire_and_forget() {
        let (session, transport) =
            session_with([("/sman.ps3?", CATALOGUE), ("/mount.ps3/games/foo", "")]);
        let games = session.games().unwrap();
        games[0].mount().unwrap();
        assert_eq!(transport.hits("/mount.ps3/games/foo"), 1);
    }
}
