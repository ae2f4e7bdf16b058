//! Game catalogue page parser.

use crate::consts;
use crate::models::GameEntry;
use scraper::Html;

#[derive(Debug)]
pub struct CataloguePage {
    document: Html,
}

impl CataloguePage {
    pub fn from_html(html: &str) -> Self {
        Self { document: Html::parse_document(html) }
    }

    /// Installed titles, in document order.
    ///
    /// Entries whose link target is a mount action (prefix `/mount`) or is
    /// not an absolute device path are skipped: they are not navigable
    /// directories. Each accepted entry carries the `src` of the nearest
    /// preceding icon image, if one has appeared.
    pub fn games(&self) -> Vec<GameEntry> {
        let mut games = Vec::new();
        let mut last_icon: Option<String> = None;
        for element in self.document.select(&consts::GAME_OR_ICON_SELECTOR) {
            if element.value().name() == "img" {
                last_icon = element.value().attr("src").map(str::to_string);
                continue;
            }
            let Some(anchor) = element.select(&consts::ANCHOR_SELECTOR).next() else {
                continue;
            };
            let Some(href) = anchor.value().attr("href") else {
                continue;
            };
            if !href.starts_with('/') || href.starts_with("/mount") {
                continue;
            }
            games.push(GameEntry {
                title: anchor.text().collect::<String>().trim().to_string(),
                path: href.to_string(),
                icon: last_icon.clone(),
            });
        }
        games
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mount_action_links_are_excluded() {
        let page = CataloguePage::from_html(concat!(
            "<html><body>",
            "<div class='gn'><a href='/mount/x'>Mount X</a></div>",
            "<div class='gn'><a href='/games/foo'>Foo</a></div>",
            "</body></html>",
        ));
        let games = page.games();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].title, "Foo");
        assert_eq!(games[0].path, "/games/foo");
    }

    #[test]
    fn entries_pair_with_the_nearest_preceding_icon() {
        let page = CataloguePage::from_html(concat!(
            "<html><body>",
            "<div class='ic'><img class='gi' src='/icons/foo.png'></div>",
            "<div class='gn'><a href='/games/foo'> Foo </a></div>",
            "<div class='ic'><img class='gi' src='/icons/bar.png'></div>",
            "<div class='gn'><a href='/games/bar'>Bar</a></div>",
            "</body></html>",
        ));
        let games = page.games();
        assert_eq!(games.len(), 2);
        assert_eq!(games[0].title, "Foo");
        assert_eq!(games[0].icon.as_deref(), Some("/icons/foo.png"));
        assert_eq!(games[1].icon.as_deref(), Some("/icons/bar.png"));
    }

    #[test]
    fn entry_without_a_preceding_icon_has_none() {
        let page = CataloguePage::from_html(
            "<html><body><div class='gn'><a href='/games/foo'>Foo</a></div></body></html>",
        );
        assert_eq!(page.games()[0].icon, None);
    }

    #[test]
    fn relative_targets_are_skipped() {
        let page = CataloguePage::from_html(
            "<html><body><div class='gn'><a href='games/foo'>Foo</a></div></body></html>",
        );
        assert!(page.games().is_empty());
    }

    #[test]
    fn order_mirrors_the_page() {
        let page = CataloguePage::from_html(concat!(
            "<html><body>",
            "<div class='gn'><a href='/games/zzz'>Zzz</a></div>",
            "<div class='gn'><a href='/games/aaa'>Aaa</a></div>",
            "</body></html>",
        ));
        let titles: Vec<_> = page.games().into_iter().map(|g| g.title).collect();
        assert_eq!(titles, ["Zzz", "Aaa"]);
    }
}
