//! Data module - CSV loading, money normalization and ranking

mod loader;
mod normalizer;
mod ranker;
mod record;

pub use loader::{LoaderError, PlayerLoader, VALUE_COL, WAGE_COL};
pub use normalizer::{MoneyNormalizer, NormalizerError, CURRENCY_SYMBOL, SUFFIX_MULTIPLIERS};
pub use ranker::{DifferenceRanker, RankerError};
pub use record::{top_n, PlayerRecord};
