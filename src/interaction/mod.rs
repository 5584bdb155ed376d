mod throttle;

pub use throttle::{DEFAULT_POINTER_THROTTLE, PointerThrottle};

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::core::{Series, SeriesCatalog, SeriesCode, SeriesGroup};
use crate::error::{ChartError, ChartResult};

/// Two independent hide sets consulted together at read time.
///
/// Hiding a group never touches the individually hidden codes, so un-hiding
/// the group restores exactly the previous per-series choices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityState {
    hidden_series: IndexSet<SeriesCode>,
    hidden_groups: IndexSet<SeriesGroup>,
}

impl VisibilityState {
    #[must_use]
    pub fn is_series_hidden(&self, code: &str) -> bool {
        self.hidden_series.contains(code)
    }

    #[must_use]
    pub fn is_group_hidden(&self, group: SeriesGroup) -> bool {
        self.hidden_groups.contains(&group)
    }

    /// A series is displayed iff neither its group nor its code is hidden.
    #[must_use]
    pub fn is_visible(&self, series: &Series) -> bool {
        !self.is_group_hidden(series.group()) && !self.is_series_hidden(series.code().as_str())
    }

    #[must_use]
    pub fn hidden_series(&self) -> &IndexSet<SeriesCode> {
        &self.hidden_series
    }

    #[must_use]
    pub fn hidden_groups(&self) -> &IndexSet<SeriesGroup> {
        &self.hidden_groups
    }
}

/// Hovered series and active sample index, set independently of each other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoverState {
    hovered: Option<SeriesCode>,
    active_index: Option<usize>,
}

impl HoverState {
    #[must_use]
    pub fn hovered(&self) -> Option<&SeriesCode> {
        self.hovered.as_ref()
    }

    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    #[must_use]
    pub fn is_hovered(&self, code: &str) -> bool {
        self.hovered.as_ref().is_some_and(|hovered| hovered.as_str() == code)
    }
}

/// Owner of visibility and hover state.
///
/// Only the four mutating operations change state; everything else reads.
/// Unknown codes and out-of-range indices are contract violations: they are
/// rejected with an error and leave state untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionState {
    groups: IndexMap<SeriesCode, SeriesGroup>,
    sample_count: usize,
    visibility: VisibilityState,
    hover: HoverState,
}

impl InteractionState {
    #[must_use]
    pub fn new(catalog: &SeriesCatalog, sample_count: usize) -> Self {
        Self {
            groups: catalog
                .iter()
                .map(|series| (series.code().clone(), series.group()))
                .collect(),
            sample_count,
            visibility: VisibilityState::default(),
            hover: HoverState::default(),
        }
    }

    #[must_use]
    pub fn visibility(&self) -> &VisibilityState {
        &self.visibility
    }

    #[must_use]
    pub fn hover(&self) -> &HoverState {
        &self.hover
    }

    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Flips `code` in the individually hidden set.
    ///
    /// Returns whether the code is individually hidden afterwards.
    pub fn toggle_series(&mut self, code: &str) -> ChartResult<bool> {
        self.ensure_known(code)?;
        let hidden = if self.visibility.hidden_series.shift_remove(code) {
            false
        } else {
            self.visibility.hidden_series.insert(SeriesCode::new(code));
            true
        };
        trace!(code, hidden, "toggle series");
        Ok(hidden)
    }

    /// Flips `group` in the hidden-group set.
    ///
    /// Returns whether the group is hidden afterwards.
    pub fn toggle_group(&mut self, group: SeriesGroup) -> bool {
        let hidden = if self.visibility.hidden_groups.shift_remove(&group) {
            false
        } else {
            self.visibility.hidden_groups.insert(group);
            true
        };
        trace!(%group, hidden, "toggle group");
        hidden
    }

    /// Replaces the hovered series. Last writer wins.
    pub fn set_hover(&mut self, code: Option<&str>) -> ChartResult<()> {
        if let Some(code) = code {
            self.ensure_known(code)?;
        }
        self.hover.hovered = code.map(SeriesCode::new);
        trace!(hovered = ?code, "set hover");
        Ok(())
    }

    /// Replaces the active sample index.
    pub fn set_active_index(&mut self, index: Option<usize>) -> ChartResult<()> {
        if let Some(index) = index {
            if index >= self.sample_count {
                warn!(
                    index,
                    len = self.sample_count,
                    "rejecting out-of-range active index"
                );
                return Err(ChartError::ActiveIndexOutOfRange {
                    index,
                    len: self.sample_count,
                });
            }
        }
        self.hover.active_index = index;
        trace!(active_index = ?index, "set active index");
        Ok(())
    }

    #[must_use]
    pub fn is_visible(&self, series: &Series) -> bool {
        self.visibility.is_visible(series)
    }

    /// Visibility by code. Unknown codes are never visible.
    #[must_use]
    pub fn is_code_visible(&self, code: &str) -> bool {
        match self.groups.get(code) {
            Some(group) => {
                !self.visibility.is_group_hidden(*group) && !self.visibility.is_series_hidden(code)
            }
            None => false,
        }
    }

    fn ensure_known(&self, code: &str) -> ChartResult<()> {
        if self.groups.contains_key(code) {
            return Ok(());
        }
        warn!(code, "rejecting unknown series code");
        Err(ChartError::UnknownSeries(code.to_owned()))
    }
}
