/// One installed title from the catalogue page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEntry {
    /// Trimmed link text of the entry.
    pub title: String,
    /// The entry's mount directory (the anchor's link target).
    pub path: String,
    /// `src` of the nearest preceding icon image, if any. Never checked for
    /// existence.
    pub icon: Option<String>,
}
