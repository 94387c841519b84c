//! Ranker Module
//! Adds the value-minus-wage difference and orders players by it.

use crate::data::loader::{VALUE_COL, WAGE_COL};
use polars::prelude::*;
use thiserror::Error;

pub const DIFFERENCE_COL: &str = "difference";

#[derive(Error, Debug)]
pub enum RankerError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// Orders the normalized player table by `Value - Wage`.
pub struct DifferenceRanker;

impl DifferenceRanker {
    /// Add the `difference` column and sort every row by it, highest first.
    ///
    /// The sort is stable: rows with equal differences keep file order. A NaN
    /// difference (from a NaN numeric cell) is stored as null and ranks last.
    pub fn rank(df: &DataFrame) -> Result<DataFrame, RankerError> {
        let ranked = df
            .clone()
            .lazy()
            .with_column(
                (col(VALUE_COL) - col(WAGE_COL))
                    .fill_nan(lit(NULL))
                    .alias(DIFFERENCE_COL),
            )
            .sort(
                [DIFFERENCE_COL],
                SortMultipleOptions::default()
                    .with_order_descending(true)
                    .with_nulls_last(true)
                    .with_maintain_order(true),
            )
            .collect()?;

        tracing::info!(rows = ranked.height(), "ranked players by difference");
        Ok(ranked)
    }
}
