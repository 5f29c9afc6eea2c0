use anyhow::{Context, Result};
use log::{info, warn};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::models::NewRestaurant;

/// Restaurants read from a catalog file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogLoadResult {
    pub restaurants: Vec<NewRestaurant>,
    /// Rows dropped for missing columns or a blank name
    pub skipped_rows: usize,
}

impl CatalogLoadResult {
    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }
}

/// Load a `name,hours` CSV file.
///
/// Quoted fields may contain commas, so an hours string such as
/// `"Mon-Thu, Sun 11:30 am - 10 pm"` survives intact.
pub fn load_restaurants_csv(path: &Path, has_header: bool) -> Result<CatalogLoadResult> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open catalog file: {}", path.display()))?;

    let result = load_restaurants_from_reader(file, has_header)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

    info!(
        "Loaded {} restaurants from {}",
        result.len(),
        path.display()
    );
    Ok(result)
}

/// Load `name,hours` rows from any reader.
///
/// Only the first two columns are used. Fields are stored exactly as written,
/// since names are what a search returns. Rows with fewer columns or a name
/// that is empty or all whitespace are skipped and counted; malformed CSV
/// (e.g. invalid UTF-8) is an error.
pub fn load_restaurants_from_reader<R: Read>(reader: R, has_header: bool) -> Result<CatalogLoadResult> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(has_header)
        .flexible(true)
        .trim(csv::Trim::None)
        .from_reader(reader);

    let mut result = CatalogLoadResult::default();

    for (row, record) in csv_reader.records().enumerate() {
        let record = record.with_context(|| format!("Malformed CSV record at row {}", row + 1))?;

        match (record.get(0), record.get(1)) {
            (Some(name), Some(hours)) if !name.trim().is_empty() => {
                result.restaurants.push(NewRestaurant::new(name, hours));
            }
            _ => {
                warn!("Skipping catalog row {}: {:?}", row + 1, record);
                result.skipped_rows += 1;
            }
        }
    }

    Ok(result)
}
