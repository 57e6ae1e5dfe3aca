pub mod model;

pub use model::{load_listing, Image};
