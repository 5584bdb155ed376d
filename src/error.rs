use thiserror::Error;

use crate::core::SeriesGroup;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("palette exhausted for {group} series: requested={requested}, capacity={capacity}")]
    PaletteExhausted {
        group: SeriesGroup,
        requested: usize,
        capacity: usize,
    },

    #[error("duplicate series code: `{0}`")]
    DuplicateSeriesCode(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("unknown series code: `{0}`")]
    UnknownSeries(String),

    #[error("active sample index out of range: index={index}, len={len}")]
    ActiveIndexOutOfRange { index: usize, len: usize },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
