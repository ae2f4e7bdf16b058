use regex::Regex;
use scraper::Selector;
use std::sync::LazyLock;

macro_rules! selector {
    ($name:ident, $css:expr) => {
        pub(crate) static $name: LazyLock<Selector> = LazyLock::new(|| Selector::parse($css).unwrap());
    };
}

macro_rules! regex {
    ($name:ident, $regex:expr) => {
        pub(crate) static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($regex).unwrap());
    };
}

// Anchors on the live status fragment. The firmware keys each readout by the
// widget its anchor links to, not by class or id.
selector!(TEMPERATURE_ANCHOR_SELECTOR, "a[href='/cpursx.ps3']");
selector!(FAN_ANCHOR_SELECTOR, "a[href='/cpursx.ps3?mode']");
selector!(HDD_ANCHOR_SELECTOR, "a[href='/dev_hdd0']");

selector!(LISTING_TABLE_SELECTOR, "table#files");
selector!(ROW_SELECTOR, "tr");
selector!(CELL_SELECTOR, "td");
selector!(ANCHOR_SELECTOR, "a");
selector!(DIV_SELECTOR, "div");
selector!(BOLD_SELECTOR, "b");
selector!(PARAGRAPH_SELECTOR, "p");

// Catalogue entries and icon containers, matched together so they come out
// in document order.
selector!(GAME_OR_ICON_SELECTOR, "div.gn, div.ic img.gi");

regex!(INTEGER_REGEX, r"\d+");
// Leading numeric+unit portion of one side of a "12 GB / 50 GB" annotation.
regex!(SPACE_PART_REGEX, r"^([\d.,]+)\s*([A-Za-z]+)");

/// Marker text the listing uses in the size column of directory rows.
pub(crate) const DIR_MARKER: &str = "<dir>";
