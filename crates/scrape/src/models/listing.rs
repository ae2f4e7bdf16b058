/// One directory row from a listing page.
///
/// `name` and `path` are only absent for malformed rows whose first cell
/// carries no anchor; such rows are still emitted so the caller sees the
/// anomaly instead of silence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Link text from the first cell.
    pub name: Option<String>,
    /// Absolute, forward-slash path resolved against the listing's own path.
    pub path: Option<String>,
    /// Space annotation, either `"Free: <free> <unit> / Total: <total> <unit>"`
    /// from the inline widget or `"Free: <value>"` from the out-of-band scan.
    pub space: Option<String>,
    /// Free-text modification label; the firmware's format is inconsistent,
    /// so no timestamp parsing is attempted.
    pub modified: String,
}

/// One file row from a listing page.
///
/// The size string visible in the listing is deliberately not captured: it is
/// truncated by the firmware, the authoritative value comes from the per-file
/// metadata page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Link text from the first cell.
    pub name: Option<String>,
    /// Absolute, forward-slash path resolved against the listing's own path.
    pub path: Option<String>,
    /// Free-text modification label.
    pub modified: String,
}

/// A parsed listing page: every non-header row, partitioned into directories
/// and files, each side in the order the rows appear in the source table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Listing {
    pub directories: Vec<DirEntry>,
    pub files: Vec<FileEntry>,
}

impl Listing {
    /// Total number of rows across both partitions.
    pub fn len(&self) -> usize {
        self.directories.len() + self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directories.is_empty() && self.files.is_empty()
    }
}
