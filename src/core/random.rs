use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of uniform draws in `[0, 1)` consumed by the series generator.
///
/// Hosts normally use [`RngUnitSource`]; tests inject fixed sources so the
/// generated matrix is reproducible.
pub trait UnitSource {
    fn next_unit(&mut self) -> f64;

    /// Uniform draw in `[low, high)`.
    fn next_in(&mut self, low: f64, high: f64) -> f64 {
        low + self.next_unit() * (high - low)
    }

    /// Uniform draw in `[-1, 1)`.
    fn next_signed(&mut self) -> f64 {
        self.next_in(-1.0, 1.0)
    }
}

impl<S: UnitSource + ?Sized> UnitSource for &mut S {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Adapter exposing any `rand` generator as a [`UnitSource`].
#[derive(Debug, Clone)]
pub struct RngUnitSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngUnitSource<R> {
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngUnitSource<ThreadRng> {
    /// Unseeded source backed by the thread-local generator.
    #[must_use]
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl RngUnitSource<StdRng> {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> UnitSource for RngUnitSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }
}

/// Source that returns the same draw forever.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantUnitSource {
    value: f64,
}

impl ConstantUnitSource {
    /// `value` is clamped into `[0, 1)`.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value: clamp_unit(value),
        }
    }

    /// Draw that maps to a zero perturbation.
    #[must_use]
    pub fn midpoint() -> Self {
        Self::new(0.5)
    }
}

impl UnitSource for ConstantUnitSource {
    fn next_unit(&mut self) -> f64 {
        self.value
    }
}

/// Source cycling through a fixed list of draws.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceUnitSource {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceUnitSource {
    /// An empty list behaves like [`ConstantUnitSource::midpoint`].
    #[must_use]
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values.into_iter().map(clamp_unit).collect(),
            cursor: 0,
        }
    }

    /// Number of draws handed out so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl UnitSource for SequenceUnitSource {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            self.cursor += 1;
            return 0.5;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        return 0.5;
    }
    value.clamp(0.0, 1.0 - f64::EPSILON)
}

#[cfg(test)]
mod tests {
    use super::{ConstantUnitSource, RngUnitSource, SequenceUnitSource, UnitSource};

    #[test]
    fn midpoint_maps_to_zero_signed_draw() {
        let mut source = ConstantUnitSource::midpoint();
        assert_eq!(source.next_signed(), 0.0);
    }

    #[test]
    fn sequence_cycles_and_counts_draws() {
        let mut source = SequenceUnitSource::new([0.0, 0.25]);
        assert_eq!(source.next_unit(), 0.0);
        assert_eq!(source.next_unit(), 0.25);
        assert_eq!(source.next_unit(), 0.0);
        assert_eq!(source.draws(), 3);
    }

    #[test]
    fn seeded_sources_repeat() {
        let mut a = RngUnitSource::seeded(7);
        let mut b = RngUnitSource::seeded(7);
        for _ in 0..16 {
            let draw = a.next_unit();
            assert!((0.0..1.0).contains(&draw));
            assert_eq!(draw, b.next_unit());
        }
    }
}
