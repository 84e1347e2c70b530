/// Bootanim shared crate: catalog, domain types, source classification,
/// and the error taxonomy used by the downloader.
pub mod catalog;
pub mod errors;
pub mod models;
pub mod source;
