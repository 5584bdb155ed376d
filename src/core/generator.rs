use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ChartError, ChartResult};

use super::sample::fractional_year;
use super::{Sample, SampleMatrix, SeriesCatalog, SeriesCode, SeriesGroup, UnitSource};

const WINDOW_EPSILON: f64 = 1e-9;

/// Finest supported cadence: one sample per day.
pub const MAX_STEPS_PER_YEAR: u32 = 366;
/// Upper bound on `years * steps_per_year` for one generated matrix.
pub const MAX_SAMPLES: u64 = 1_000_000;

/// Inclusive `[min, max]` clamp range for one group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueBand {
    pub min: f64,
    pub max: f64,
}

impl ValueBand {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn clamp(self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Rounds `value` to the nearest integer that still lies inside the band.
    #[must_use]
    pub fn clamp_rounded(self, value: f64) -> f64 {
        value.round().clamp(self.min.ceil(), self.max.floor())
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Starting range and clamp band of one group's random walk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupDynamics {
    pub initial_min: f64,
    pub initial_max: f64,
    pub band: ValueBand,
}

impl GroupDynamics {
    #[must_use]
    pub const fn new(initial_min: f64, initial_max: f64, band: ValueBand) -> Self {
        Self {
            initial_min,
            initial_max,
            band,
        }
    }
}

/// Half-open `[start, end)` span of the fractional-year axis with a per-step multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: f64,
    pub end: f64,
    pub multiplier: f64,
}

impl TimeWindow {
    /// Window covering whole months, `first` and `last` inclusive and 1-based.
    #[must_use]
    pub fn months(year: i32, first: u32, last: u32, multiplier: f64) -> Self {
        Self::span((year, first), (year, last), multiplier)
    }

    /// Window from the start of `from` to the end of `through`, both `(year, month)`.
    #[must_use]
    pub fn span(from: (i32, u32), through: (i32, u32), multiplier: f64) -> Self {
        Self {
            start: fractional_year(from.0, from.1.saturating_sub(1), 12),
            end: fractional_year(through.0, through.1, 12),
            multiplier,
        }
    }

    #[must_use]
    pub fn contains(self, time: f64) -> bool {
        time >= self.start - WINDOW_EPSILON && time < self.end - WINDOW_EPSILON
    }
}

/// Compounding per-step decay applied to retired series once time passes each threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecayThresholds {
    pub first_year: f64,
    pub first_multiplier: f64,
    pub second_year: f64,
    pub second_multiplier: f64,
}

impl Default for DecayThresholds {
    fn default() -> Self {
        Self {
            first_year: 2018.0,
            first_multiplier: 0.99,
            second_year: 2022.0,
            second_multiplier: 0.98,
        }
    }
}

/// Parameters of the bounded random-walk generator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub start_year: i32,
    pub years: u32,
    pub steps_per_year: u32,
    /// Upper bound of one step's perturbation relative to the previous value.
    pub max_variation_fraction: f64,
    pub primary: GroupDynamics,
    pub retired: GroupDynamics,
    /// Downward shock applied to primary series.
    pub shock: TimeWindow,
    /// Upward recovery applied to primary series.
    pub recovery: TimeWindow,
    pub retired_decay: DecayThresholds,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            start_year: 2015,
            years: 10,
            steps_per_year: 12,
            max_variation_fraction: 0.08,
            primary: GroupDynamics::new(60.0, 120.0, ValueBand::new(20.0, 200.0)),
            retired: GroupDynamics::new(15.0, 40.0, ValueBand::new(2.0, 60.0)),
            shock: TimeWindow::months(2020, 3, 5, 0.85),
            recovery: TimeWindow::span((2020, 6), (2021, 6), 1.04),
            retired_decay: DecayThresholds::default(),
        }
    }
}

impl GeneratorConfig {
    #[must_use]
    pub fn with_years(mut self, start_year: i32, years: u32) -> Self {
        self.start_year = start_year;
        self.years = years;
        self
    }

    #[must_use]
    pub fn with_steps_per_year(mut self, steps_per_year: u32) -> Self {
        self.steps_per_year = steps_per_year;
        self
    }

    #[must_use]
    pub fn with_max_variation_fraction(mut self, fraction: f64) -> Self {
        self.max_variation_fraction = fraction;
        self
    }

    #[must_use]
    pub fn with_dynamics(mut self, group: SeriesGroup, dynamics: GroupDynamics) -> Self {
        match group {
            SeriesGroup::Primary => self.primary = dynamics,
            SeriesGroup::Retired => self.retired = dynamics,
        }
        self
    }

    #[must_use]
    pub fn with_shock(mut self, shock: TimeWindow) -> Self {
        self.shock = shock;
        self
    }

    #[must_use]
    pub fn with_recovery(mut self, recovery: TimeWindow) -> Self {
        self.recovery = recovery;
        self
    }

    #[must_use]
    pub fn with_retired_decay(mut self, decay: DecayThresholds) -> Self {
        self.retired_decay = decay;
        self
    }

    #[must_use]
    pub fn dynamics(&self, group: SeriesGroup) -> GroupDynamics {
        match group {
            SeriesGroup::Primary => self.primary,
            SeriesGroup::Retired => self.retired,
        }
    }

    /// Matrix length: `years * steps_per_year`.
    #[must_use]
    pub fn total_steps(&self) -> usize {
        self.years as usize * self.steps_per_year as usize
    }

    /// Product of every date-conditioned multiplier active for `group` at `time`.
    #[must_use]
    pub fn multiplier_at(&self, group: SeriesGroup, time: f64) -> f64 {
        let mut multiplier = 1.0;
        match group {
            SeriesGroup::Primary => {
                if self.shock.contains(time) {
                    multiplier *= self.shock.multiplier;
                }
                if self.recovery.contains(time) {
                    multiplier *= self.recovery.multiplier;
                }
            }
            SeriesGroup::Retired => {
                if time > self.retired_decay.first_year {
                    multiplier *= self.retired_decay.first_multiplier;
                }
                if time > self.retired_decay.second_year {
                    multiplier *= self.retired_decay.second_multiplier;
                }
            }
        }
        multiplier
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.years == 0 {
            return Err(ChartError::InvalidConfig(
                "generator year range must cover at least one year".to_owned(),
            ));
        }
        if self.steps_per_year == 0 || self.steps_per_year > MAX_STEPS_PER_YEAR {
            return Err(ChartError::InvalidConfig(format!(
                "generator steps_per_year must be in 1..={MAX_STEPS_PER_YEAR}"
            )));
        }
        let samples = u64::from(self.years) * u64::from(self.steps_per_year);
        if samples > MAX_SAMPLES {
            return Err(ChartError::InvalidConfig(format!(
                "generator would produce {samples} samples, limit is {MAX_SAMPLES}"
            )));
        }
        let last_year = i64::from(self.start_year) + i64::from(self.years) - 1;
        if !(-9_999..=9_999).contains(&i64::from(self.start_year)) || last_year > 9_999 {
            return Err(ChartError::InvalidConfig(
                "generator years must stay within -9999..=9999".to_owned(),
            ));
        }
        if !self.max_variation_fraction.is_finite()
            || !(0.0..1.0).contains(&self.max_variation_fraction)
        {
            return Err(ChartError::InvalidConfig(
                "max_variation_fraction must be finite and in [0, 1)".to_owned(),
            ));
        }
        for group in SeriesGroup::ALL {
            validate_dynamics(group, self.dynamics(group))?;
        }
        for (name, window) in [("shock", self.shock), ("recovery", self.recovery)] {
            if !window.start.is_finite() || !window.end.is_finite() || window.start > window.end {
                return Err(ChartError::InvalidConfig(format!(
                    "{name} window must be finite with start <= end"
                )));
            }
            validate_multiplier(name, window.multiplier)?;
        }
        let decay = self.retired_decay;
        if !decay.first_year.is_finite()
            || !decay.second_year.is_finite()
            || decay.first_year > decay.second_year
        {
            return Err(ChartError::InvalidConfig(
                "retired decay thresholds must be finite with first_year <= second_year"
                    .to_owned(),
            ));
        }
        validate_multiplier("first retired decay", decay.first_multiplier)?;
        validate_multiplier("second retired decay", decay.second_multiplier)?;
        Ok(())
    }
}

fn validate_dynamics(group: SeriesGroup, dynamics: GroupDynamics) -> ChartResult<()> {
    let GroupDynamics {
        initial_min,
        initial_max,
        band,
    } = dynamics;
    if !initial_min.is_finite() || !initial_max.is_finite() || initial_min > initial_max {
        return Err(ChartError::InvalidConfig(format!(
            "{group} initial range must be finite with min <= max"
        )));
    }
    if !band.min.is_finite() || !band.max.is_finite() || band.min < 0.0 {
        return Err(ChartError::InvalidConfig(format!(
            "{group} band must be finite and non-negative"
        )));
    }
    if band.min.ceil() > band.max.floor() || band.max > f64::from(u32::MAX) {
        return Err(ChartError::InvalidConfig(format!(
            "{group} band must contain an integer value representable as u32"
        )));
    }
    Ok(())
}

fn validate_multiplier(name: &str, multiplier: f64) -> ChartResult<()> {
    if !multiplier.is_finite() || multiplier <= 0.0 {
        return Err(ChartError::InvalidConfig(format!(
            "{name} multiplier must be finite and > 0"
        )));
    }
    Ok(())
}

/// Per-series record of one generation step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepTrace {
    pub index: usize,
    pub code: SeriesCode,
    pub previous: f64,
    /// `previous` plus the bounded random perturbation.
    pub perturbed: f64,
    pub multiplier: f64,
    /// `perturbed * multiplier`, before clamping.
    pub adjusted: f64,
    /// `adjusted` fell outside the group band.
    pub clamped: bool,
    pub value: u32,
}

/// Diagnostics captured alongside a generated matrix.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GenerationTrace {
    pub steps: Vec<StepTrace>,
}

impl GenerationTrace {
    pub fn for_series<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a StepTrace> + 'a {
        self.steps
            .iter()
            .filter(move |step| step.code.as_str() == code)
    }
}

/// Generates the sample matrix for `catalog`.
///
/// Every series advances in lockstep over the shared time axis so
/// date-conditioned multipliers land on the same time coordinate for all of
/// them. Draw order is fixed: one draw per series (catalog order) for the
/// initial values, then one per series per subsequent step.
pub fn generate<S: UnitSource>(
    catalog: &SeriesCatalog,
    config: &GeneratorConfig,
    source: &mut S,
) -> ChartResult<SampleMatrix> {
    run_generation(catalog, config, source, None)
}

/// Same as [`generate`], also returning the per-step trace.
pub fn generate_with_trace<S: UnitSource>(
    catalog: &SeriesCatalog,
    config: &GeneratorConfig,
    source: &mut S,
) -> ChartResult<(SampleMatrix, GenerationTrace)> {
    let mut trace = GenerationTrace::default();
    let matrix = run_generation(catalog, config, source, Some(&mut trace))?;
    Ok((matrix, trace))
}

fn run_generation<S: UnitSource>(
    catalog: &SeriesCatalog,
    config: &GeneratorConfig,
    source: &mut S,
    mut trace: Option<&mut GenerationTrace>,
) -> ChartResult<SampleMatrix> {
    config.validate()?;

    let total = config.total_steps();
    let steps_per_year = config.steps_per_year;

    let mut last: Vec<f64> = catalog
        .iter()
        .map(|series| {
            let dynamics = config.dynamics(series.group());
            let initial = source.next_in(dynamics.initial_min, dynamics.initial_max);
            dynamics.band.clamp_rounded(dynamics.band.clamp(initial))
        })
        .collect();

    let mut samples = Vec::with_capacity(total);
    samples.push(Sample::new(
        config.start_year,
        0,
        steps_per_year,
        snapshot_values(catalog, &last),
    ));

    for index in 1..total {
        let year = config.start_year + (index / steps_per_year as usize) as i32;
        let step = (index % steps_per_year as usize) as u32;
        let time = fractional_year(year, step, steps_per_year);

        for (position, series) in catalog.iter().enumerate() {
            let band = config.dynamics(series.group()).band;
            let previous = last[position];
            let delta = source.next_signed() * config.max_variation_fraction * previous;
            let perturbed = previous + delta;
            let multiplier = config.multiplier_at(series.group(), time);
            let adjusted = perturbed * multiplier;
            let value = band.clamp_rounded(band.clamp(adjusted));
            last[position] = value;

            if let Some(trace) = trace.as_deref_mut() {
                trace.steps.push(StepTrace {
                    index,
                    code: series.code().clone(),
                    previous,
                    perturbed,
                    multiplier,
                    adjusted,
                    clamped: !band.contains(adjusted),
                    value: value as u32,
                });
            }
        }

        samples.push(Sample::new(
            year,
            step,
            steps_per_year,
            snapshot_values(catalog, &last),
        ));
    }

    debug!(
        samples = samples.len(),
        series = catalog.len(),
        start_year = config.start_year,
        "generated sample matrix"
    );
    Ok(SampleMatrix::new(config.start_year, steps_per_year, samples))
}

fn snapshot_values(catalog: &SeriesCatalog, last: &[f64]) -> IndexMap<SeriesCode, u32> {
    catalog
        .iter()
        .zip(last)
        .map(|(series, value)| (series.code().clone(), *value as u32))
        .collect()
}
