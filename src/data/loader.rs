//! Player CSV Loader Module
//! Reads the player table with Polars and projects the scouting columns.

use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const NAME_COL: &str = "Name";
pub const WAGE_COL: &str = "Wage";
pub const VALUE_COL: &str = "Value";

/// Columns kept from the input file, in output order.
pub const PLAYER_COLUMNS: [&str; 3] = [NAME_COL, WAGE_COL, VALUE_COL];

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Input file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("Missing required column '{0}'")]
    MissingColumn(String),
}

/// Loads the player table from a CSV file.
pub struct PlayerLoader;

impl PlayerLoader {
    /// Load a CSV file and keep only the `Name`, `Wage` and `Value` columns.
    pub fn load_csv(file_path: &Path) -> Result<DataFrame, LoaderError> {
        if !file_path.is_file() {
            return Err(LoaderError::FileNotFound(file_path.to_path_buf()));
        }

        let mut lazy = LazyCsvReader::new(file_path)
            .with_has_header(true)
            .with_infer_schema_length(Some(10000))
            .with_ignore_errors(true)
            .finish()?;

        let schema = lazy.collect_schema()?;
        for name in PLAYER_COLUMNS {
            if !schema.contains(name) {
                return Err(LoaderError::MissingColumn(name.to_string()));
            }
        }

        let projection: Vec<Expr> = PLAYER_COLUMNS.iter().map(|name| col(*name)).collect();
        let df = lazy.select(projection).collect()?;

        tracing::info!(
            path = %file_path.display(),
            rows = df.height(),
            "loaded player table"
        );
        Ok(df)
    }
}
