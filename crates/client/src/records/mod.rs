//! Domain records returned by [`Session`](crate::Session) operations.
//!
//! Each record keeps a non-owning reference to its session for on-demand
//! follow-up fetches. Records are transient values: parse operations build
//! them, nothing persists them, and apart from the lazily-fetched markup
//! caches they are immutable.

mod directory;
mod file;
mod game;

pub use self::directory::DirectoryRecord;
pub use self::file::FileRecord;
pub use self::game::GameRecord;
