use chrono::{Datelike, NaiveDate};
use indexmap::IndexMap;
use serde::Serialize;

use super::SeriesCode;

/// One time step carrying a value for every series in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sample {
    time: f64,
    year: i32,
    step: u32,
    steps_per_year: u32,
    values: IndexMap<SeriesCode, u32>,
}

impl Sample {
    pub(crate) fn new(
        year: i32,
        step: u32,
        steps_per_year: u32,
        values: IndexMap<SeriesCode, u32>,
    ) -> Self {
        Self {
            time: fractional_year(year, step, steps_per_year),
            year,
            step,
            steps_per_year,
            values,
        }
    }

    /// Fractional-year time coordinate (`year + step / steps_per_year`).
    #[must_use]
    pub fn time(&self) -> f64 {
        self.time
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based step within the year.
    #[must_use]
    pub fn step(&self) -> u32 {
        self.step
    }

    #[must_use]
    pub fn value(&self, code: &str) -> Option<u32> {
        self.values.get(code).copied()
    }

    /// Values in catalog order.
    #[must_use]
    pub fn values(&self) -> &IndexMap<SeriesCode, u32> {
        &self.values
    }

    /// Calendar date at the start of this step.
    ///
    /// Monthly steps land on the first of the month; other cadences land on
    /// the proportional day of the year.
    #[must_use]
    pub fn date(&self) -> Option<NaiveDate> {
        if self.steps_per_year == 12 {
            return NaiveDate::from_ymd_opt(self.year, self.step + 1, 1);
        }
        let days_in_year = u64::from(NaiveDate::from_ymd_opt(self.year, 12, 31)?.ordinal());
        let ordinal = u64::from(self.step) * days_in_year / u64::from(self.steps_per_year.max(1));
        NaiveDate::from_yo_opt(self.year, u32::try_from(ordinal).ok()? + 1)
    }

    /// `YYYY-MM` label used by tooltips.
    #[must_use]
    pub fn label(&self) -> String {
        match self.date() {
            Some(date) => format!("{:04}-{:02}", date.year(), date.month()),
            None => format!("{:.3}", self.time),
        }
    }
}

#[must_use]
pub fn fractional_year(year: i32, step: u32, steps_per_year: u32) -> f64 {
    f64::from(year) + f64::from(step) / f64::from(steps_per_year.max(1))
}

/// Generated sample matrix. Read-only once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleMatrix {
    start_year: i32,
    steps_per_year: u32,
    samples: Vec<Sample>,
}

impl SampleMatrix {
    pub(crate) fn new(start_year: i32, steps_per_year: u32, samples: Vec<Sample>) -> Self {
        Self {
            start_year,
            steps_per_year,
            samples,
        }
    }

    #[must_use]
    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    #[must_use]
    pub fn steps_per_year(&self) -> u32 {
        self.steps_per_year
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Sample> {
        self.samples.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    #[must_use]
    pub fn value_at(&self, index: usize, code: &str) -> Option<u32> {
        self.get(index).and_then(|sample| sample.value(code))
    }

    /// Values of one series across the whole time axis.
    #[must_use]
    pub fn series_values(&self, code: &str) -> Option<Vec<u32>> {
        self.samples.iter().map(|sample| sample.value(code)).collect()
    }

    /// Index of the sample whose time is closest to `time`.
    ///
    /// Ties resolve to the earlier sample. Returns `None` for an empty matrix
    /// or a non-finite `time`.
    #[must_use]
    pub fn nearest_index(&self, time: f64) -> Option<usize> {
        if self.samples.is_empty() || !time.is_finite() {
            return None;
        }
        let upper = self.samples.partition_point(|sample| sample.time < time);
        if upper == 0 {
            return Some(0);
        }
        if upper == self.samples.len() {
            return Some(upper - 1);
        }
        let before = time - self.samples[upper - 1].time;
        let after = self.samples[upper].time - time;
        if after < before {
            Some(upper)
        } else {
            Some(upper - 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::{Sample, SampleMatrix};

    fn matrix(len: u32) -> SampleMatrix {
        let samples = (0..len)
            .map(|step| Sample::new(2020, step, 12, IndexMap::new()))
            .collect();
        SampleMatrix::new(2020, 12, samples)
    }

    #[test]
    fn monthly_label_uses_year_and_month() {
        let sample = Sample::new(2020, 2, 12, IndexMap::new());
        assert_eq!(sample.label(), "2020-03");
    }

    #[test]
    fn quarterly_date_lands_on_proportional_day() {
        let sample = Sample::new(2021, 2, 4, IndexMap::new());
        assert_eq!(sample.label(), "2021-07");
    }

    #[test]
    fn nearest_index_clamps_to_the_time_axis() {
        let matrix = matrix(12);
        assert_eq!(matrix.nearest_index(1990.0), Some(0));
        assert_eq!(matrix.nearest_index(2030.0), Some(11));
        assert_eq!(matrix.nearest_index(2020.0 + 0.4 / 12.0), Some(0));
        assert_eq!(matrix.nearest_index(2020.0 + 0.9 / 12.0), Some(1));
        assert_eq!(matrix.nearest_index(f64::NAN), None);
    }
}
