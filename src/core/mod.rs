pub mod catalog;
pub mod generator;
pub mod random;
pub mod sample;
pub mod types;

pub use catalog::{
    CatalogConfig, PRIMARY_PALETTE, RETIRED_PALETTE, Series, SeriesCatalog, build_catalog,
    palette_for,
};
pub use generator::{
    DecayThresholds, GenerationTrace, GeneratorConfig, GroupDynamics, MAX_SAMPLES, MAX_STEPS_PER_YEAR,
    StepTrace, TimeWindow, ValueBand, generate, generate_with_trace,
};
pub use random::{ConstantUnitSource, RngUnitSource, SequenceUnitSource, UnitSource};
pub use sample::{Sample, SampleMatrix, fractional_year};
pub use types::{SeriesCode, SeriesGroup};
