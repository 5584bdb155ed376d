use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LineStrokeStyle};

use super::{SeriesCode, SeriesGroup};

/// Fixed palette for primary series, assigned by position.
pub const PRIMARY_PALETTE: [Color; 8] = [
    Color::from_hex(0x1f77b4),
    Color::from_hex(0xff7f0e),
    Color::from_hex(0x2ca02c),
    Color::from_hex(0xd62728),
    Color::from_hex(0x9467bd),
    Color::from_hex(0x8c564b),
    Color::from_hex(0xe377c2),
    Color::from_hex(0x17becf),
];

/// Fixed palette for retired series, assigned by position.
pub const RETIRED_PALETTE: [Color; 8] = [
    Color::from_hex(0x7f7f7f),
    Color::from_hex(0xa0a0a0),
    Color::from_hex(0xbcbd22),
    Color::from_hex(0x8d99ae),
    Color::from_hex(0xb08968),
    Color::from_hex(0x6d6875),
    Color::from_hex(0x9a8c98),
    Color::from_hex(0x84a59d),
];

#[must_use]
pub fn palette_for(group: SeriesGroup) -> &'static [Color] {
    match group {
        SeriesGroup::Primary => &PRIMARY_PALETTE,
        SeriesGroup::Retired => &RETIRED_PALETTE,
    }
}

/// One tracked entity plotted over time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    code: SeriesCode,
    group: SeriesGroup,
    palette_index: usize,
    color: Color,
}

impl Series {
    #[must_use]
    pub fn code(&self) -> &SeriesCode {
        &self.code
    }

    #[must_use]
    pub fn group(&self) -> SeriesGroup {
        self.group
    }

    #[must_use]
    pub fn palette_index(&self) -> usize {
        self.palette_index
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn stroke_style(&self) -> LineStrokeStyle {
        if self.group.is_dashed() {
            LineStrokeStyle::DEFAULT_DASHED
        } else {
            LineStrokeStyle::Solid
        }
    }
}

/// Series codes per group, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub primary_codes: Vec<String>,
    pub retired_codes: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new(
            ["BA", "LX", "LH", "AF", "KL", "IB"],
            ["SR", "AB", "MA", "JK", "BD", "AZ"],
        )
    }
}

impl CatalogConfig {
    #[must_use]
    pub fn new<P, R>(primary_codes: P, retired_codes: R) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self {
            primary_codes: primary_codes.into_iter().map(Into::into).collect(),
            retired_codes: retired_codes.into_iter().map(Into::into).collect(),
        }
    }

    fn codes(&self, group: SeriesGroup) -> &[String] {
        match group {
            SeriesGroup::Primary => &self.primary_codes,
            SeriesGroup::Retired => &self.retired_codes,
        }
    }
}

/// Ordered, immutable set of series: all primary series first, then retired.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesCatalog {
    series: Vec<Series>,
    #[serde(skip)]
    index: IndexMap<SeriesCode, usize>,
}

impl SeriesCatalog {
    /// Builds the catalog deterministically from per-group code lists.
    ///
    /// Colors are assigned by position into the group's fixed palette. Fails
    /// when a group asks for more series than its palette holds, or when a
    /// code is empty or repeated anywhere in the catalog.
    pub fn build(config: &CatalogConfig) -> ChartResult<Self> {
        let mut series = Vec::with_capacity(config.primary_codes.len() + config.retired_codes.len());
        let mut index = IndexMap::with_capacity(series.capacity());

        for group in SeriesGroup::ALL {
            let codes = config.codes(group);
            let palette = palette_for(group);
            if codes.len() > palette.len() {
                return Err(ChartError::PaletteExhausted {
                    group,
                    requested: codes.len(),
                    capacity: palette.len(),
                });
            }

            for (palette_index, raw) in codes.iter().enumerate() {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Err(ChartError::InvalidConfig(format!(
                        "{group} series code at position {palette_index} is empty"
                    )));
                }
                let code = SeriesCode::new(trimmed);
                if index.contains_key(&code) {
                    return Err(ChartError::DuplicateSeriesCode(code.to_string()));
                }
                index.insert(code.clone(), series.len());
                series.push(Series {
                    code,
                    group,
                    palette_index,
                    color: palette[palette_index],
                });
            }
        }

        debug!(
            primary = config.primary_codes.len(),
            retired = config.retired_codes.len(),
            "built series catalog"
        );
        Ok(Self { series, index })
    }

    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Series> {
        self.series.iter()
    }

    #[must_use]
    pub fn get(&self, code: &str) -> Option<&Series> {
        self.position(code).map(|position| &self.series[position])
    }

    /// Catalog position of `code`.
    #[must_use]
    pub fn position(&self, code: &str) -> Option<usize> {
        self.index.get(code).copied()
    }

    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    pub fn in_group(&self, group: SeriesGroup) -> impl Iterator<Item = &Series> {
        self.series.iter().filter(move |series| series.group == group)
    }
}

/// Builds the default catalog (6 primary + 6 retired series).
pub fn build_catalog() -> ChartResult<SeriesCatalog> {
    SeriesCatalog::build(&CatalogConfig::default())
}
