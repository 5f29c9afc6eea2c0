//! Catalog import helpers.

pub mod loaders;


pub use loaders::{load_restaurants_csv, load_restaurants_from_reader, CatalogLoadResult};
