mod game;
mod listing;

pub use self::game::GameEntry;
pub use self::listing::{DirEntry, FileEntry, Listing};
