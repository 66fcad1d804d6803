pub mod listing;
pub mod loader;
pub mod page;
pub mod sampler;
