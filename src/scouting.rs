//! Scouting pipeline: load → normalize → rank → typed records.

use crate::data::{
    DifferenceRanker, LoaderError, MoneyNormalizer, NormalizerError, PlayerLoader, PlayerRecord,
    RankerError, VALUE_COL, WAGE_COL,
};
use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoutingError {
    #[error(transparent)]
    Loader(#[from] LoaderError),
    #[error(transparent)]
    Normalizer(#[from] NormalizerError),
    #[error(transparent)]
    Ranker(#[from] RankerError),
    #[error("Failed to extract player rows: {0}")]
    Extract(#[from] PolarsError),
}

/// Ranked players ready for presentation.
#[derive(Debug, Clone)]
pub struct ScoutingReport {
    pub source: PathBuf,
    pub records: Vec<PlayerRecord>,
}

impl ScoutingReport {
    /// Run the whole pipeline on a CSV file.
    pub fn from_csv(path: &Path) -> Result<Self, ScoutingError> {
        let df = PlayerLoader::load_csv(path)?;
        let records = Self::rank_frame(df)?;
        Ok(Self {
            source: path.to_path_buf(),
            records,
        })
    }

    /// Normalize the money columns of a projected player frame and rank it.
    pub fn rank_frame(mut df: DataFrame) -> Result<Vec<PlayerRecord>, ScoutingError> {
        MoneyNormalizer::normalize_columns(&mut df, &[WAGE_COL, VALUE_COL])?;
        let ranked = DifferenceRanker::rank(&df)?;
        Ok(PlayerRecord::from_ranked_frame(&ranked)?)
    }

    pub fn row_count(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_two_player_example() {
        let df = df!(
            "Name" => ["A", "B"],
            "Wage" => ["€1K", "€10M"],
            "Value" => ["€5K", "€1M"]
        )
        .unwrap();

        let records = ScoutingReport::rank_frame(df).unwrap();

        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(records[0].wage, 1000.0);
        assert_eq!(records[0].value, 5000.0);
        assert_eq!(records[0].difference, 4000.0);
        assert_eq!(records[1].wage, 10_000_000.0);
        assert_eq!(records[1].value, 1_000_000.0);
        assert_eq!(records[1].difference, -9_000_000.0);
    }

    #[test]
    fn test_from_csv_end_to_end() {
        let path = std::env::temp_dir().join(format!(
            "superstar_scout_pipeline_{}.csv",
            std::process::id()
        ));
        fs::write(
            &path,
            "Name,Club,Wage,Value\n\
             Cheap Star,X,€1K,€50M\n\
             Unknown,Y,,\n\
             Expensive,Z,€500K,€2M\n\
             Bargain,W,€2K,€40M\n",
        )
        .unwrap();

        let report = ScoutingReport::from_csv(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(report.row_count(), 4);
        let names: Vec<&str> = report.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Cheap Star", "Bargain", "Expensive", "Unknown"]);
        assert!(report
            .records
            .windows(2)
            .all(|pair| pair[0].difference >= pair[1].difference));
        assert!(report
            .records
            .iter()
            .all(|r| r.wage >= 0.0 && r.value >= 0.0));
        let ranks: Vec<usize> = report.records.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3]);
    }
}
