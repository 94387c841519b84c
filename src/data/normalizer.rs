//! Monetary Normalizer Module
//! Converts suffixed money strings ("€1.5M") into plain numbers.

use polars::prelude::*;
use thiserror::Error;

/// Currency symbol stripped before suffix matching.
pub const CURRENCY_SYMBOL: char = '€';

/// Magnitude suffixes, checked in this order. The first suffix contained in
/// the string wins, even if a later one is also present.
pub const SUFFIX_MULTIPLIERS: [(char, f64); 3] = [
    ('K', 1_000.0),
    ('M', 1_000_000.0),
    ('B', 1_000_000_000.0),
];

#[derive(Error, Debug)]
pub enum NormalizerError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("Column '{column}' has unsupported type {dtype} for money values")]
    UnsupportedColumnType { column: String, dtype: DataType },
}

/// A single monetary cell as it comes out of the table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoneyCell<'a> {
    Number(f64),
    Text(&'a str),
    Missing,
}

/// Normalize one cell. Numbers pass through untouched, NaN included; anything
/// that cannot be read as a suffixed amount becomes zero.
pub fn normalize(cell: MoneyCell<'_>) -> f64 {
    match cell {
        MoneyCell::Number(value) => value,
        MoneyCell::Text(text) => parse_money(text),
        MoneyCell::Missing => 0.0,
    }
}

/// Parse a suffixed money string such as "€2.5M".
///
/// A string without a `K`, `M` or `B` suffix yields `0.0`, as does a
/// remainder that is not a finite, non-negative decimal.
pub fn parse_money(text: &str) -> f64 {
    let stripped = text.replace(CURRENCY_SYMBOL, "");

    for (suffix, multiplier) in SUFFIX_MULTIPLIERS {
        if stripped.contains(suffix) {
            return stripped
                .replace(suffix, "")
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|amount| amount.is_finite() && *amount >= 0.0)
                .map(|amount| amount * multiplier)
                .unwrap_or(0.0);
        }
    }

    0.0
}

/// Handles conversion of monetary columns in the player table.
pub struct MoneyNormalizer;

impl MoneyNormalizer {
    /// Replace column `name` with its normalized `Float64` form.
    ///
    /// String columns are parsed cell by cell, numeric columns are cast and
    /// kept as they are, and an all-null column becomes zeros. Row count is
    /// unchanged.
    pub fn normalize_column(df: &mut DataFrame, name: &str) -> Result<(), NormalizerError> {
        let column = df.column(name)?;
        let height = column.len();

        let values: Vec<f64> = match column.dtype() {
            DataType::String => column
                .as_materialized_series()
                .str()?
                .into_iter()
                .map(|cell| normalize(cell.map_or(MoneyCell::Missing, MoneyCell::Text)))
                .collect(),
            DataType::Float32
            | DataType::Float64
            | DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64 => {
                let as_f64 = column.cast(&DataType::Float64)?;
                as_f64
                    .f64()?
                    .into_iter()
                    .map(|cell| normalize(cell.map_or(MoneyCell::Missing, MoneyCell::Number)))
                    .collect()
            }
            DataType::Null => vec![0.0; height],
            other => {
                return Err(NormalizerError::UnsupportedColumnType {
                    column: name.to_string(),
                    dtype: other.clone(),
                })
            }
        };

        let zeros = values.iter().filter(|v| **v == 0.0).count();
        tracing::debug!(column = name, rows = height, zeros, "normalized money column");

        df.with_column(Column::new(name.into(), values))?;
        Ok(())
    }

    /// Normalize every listed column in place.
    pub fn normalize_columns(df: &mut DataFrame, names: &[&str]) -> Result<(), NormalizerError> {
        for name in names {
            Self::normalize_column(df, name)?;
        }
        Ok(())
    }
}
