mod catalogue;
mod consts;
pub mod error;
mod listing;
mod meta;
pub mod models;
pub mod paths;
mod status;

pub use crate::catalogue::CataloguePage;
pub use crate::listing::ListingPage;
pub use crate::meta::MetaPage;
pub use crate::status::StatusPage;
