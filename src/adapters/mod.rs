// Adapters layer: concrete document sources for the outside world.

pub mod file;
pub mod http;

pub use file::FileDocumentSource;
pub use http::HttpDocumentSource;
