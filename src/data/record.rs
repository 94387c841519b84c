//! Typed player rows pulled out of the ranked DataFrame for the charts.

use crate::data::loader::{NAME_COL, VALUE_COL, WAGE_COL};
use crate::data::ranker::DIFFERENCE_COL;
use polars::prelude::*;

/// One ranked player.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    /// 0-based position after ranking
    pub rank: usize,
    pub name: String,
    pub wage: f64,
    pub value: f64,
    pub difference: f64,
}

impl PlayerRecord {
    /// Extract all rows of a ranked frame, keeping row order.
    pub fn from_ranked_frame(df: &DataFrame) -> PolarsResult<Vec<PlayerRecord>> {
        let names = df.column(NAME_COL)?.cast(&DataType::String)?;
        let names = names.as_materialized_series().str()?;
        let wages = df.column(WAGE_COL)?.cast(&DataType::Float64)?;
        let wages = wages.f64()?;
        let values = df.column(VALUE_COL)?.cast(&DataType::Float64)?;
        let values = values.f64()?;
        let diffs = df.column(DIFFERENCE_COL)?.cast(&DataType::Float64)?;
        let diffs = diffs.f64()?;

        let records = names
            .into_iter()
            .zip(wages)
            .zip(values)
            .zip(diffs)
            .enumerate()
            .map(|(rank, (((name, wage), value), difference))| PlayerRecord {
                rank,
                name: name.unwrap_or_default().to_string(),
                wage: wage.unwrap_or(0.0),
                value: value.unwrap_or(0.0),
                difference: difference.unwrap_or(f64::NAN),
            })
            .collect();

        Ok(records)
    }
}

/// First `n` ranked players (all of them if there are fewer).
pub fn top_n(records: &[PlayerRecord], n: usize) -> &[PlayerRecord] {
    &records[..n.min(records.len())]
}
