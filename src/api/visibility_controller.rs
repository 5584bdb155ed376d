use crate::core::SeriesGroup;
use crate::error::ChartResult;
use crate::render::Renderer;

use super::HighlightEngine;

impl<R: Renderer> HighlightEngine<R> {
    /// Legend click on a series. Returns whether the code is individually hidden afterwards.
    pub fn toggle_series(&mut self, code: &str) -> ChartResult<bool> {
        let hidden = self.core.interaction.toggle_series(code)?;
        self.commit()?;
        Ok(hidden)
    }

    /// Legend click on a group header. Returns whether the group is hidden afterwards.
    pub fn toggle_group(&mut self, group: SeriesGroup) -> ChartResult<bool> {
        let hidden = self.core.interaction.toggle_group(group);
        self.commit()?;
        Ok(hidden)
    }

    #[must_use]
    pub fn is_visible(&self, code: &str) -> bool {
        self.core.interaction.is_code_visible(code)
    }
}
