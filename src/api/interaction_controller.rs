use std::time::Instant;

use tracing::{trace, warn};

use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{EventOutcome, HighlightEngine, HighlightMode};

impl<R: Renderer> HighlightEngine<R> {
    /// Handles pointer movement over the plot with the nearest sample index.
    ///
    /// Moves arriving within the throttle interval of the last accepted move
    /// are dropped without touching state.
    pub fn pointer_move(&mut self, index: usize, at: Instant) -> ChartResult<EventOutcome> {
        let len = self.core.matrix.len();
        if index >= len {
            warn!(index, len, "rejecting pointer move outside the time axis");
            return Err(ChartError::ActiveIndexOutOfRange { index, len });
        }
        if !self.core.throttle.accept(at) {
            trace!(index, "dropping throttled pointer move");
            return Ok(EventOutcome::Dropped);
        }
        self.core.interaction.set_active_index(Some(index))?;
        self.commit()
    }

    /// Pointer move expressed as a fractional-year time coordinate.
    pub fn pointer_move_at_time(&mut self, time: f64, at: Instant) -> ChartResult<EventOutcome> {
        let index = self.core.matrix.nearest_index(time).ok_or_else(|| {
            ChartError::InvalidData("pointer time must be finite on a non-empty matrix".to_owned())
        })?;
        self.pointer_move(index, at)
    }

    /// Marks the pointer as outside the plot area.
    pub fn pointer_leave(&mut self) -> ChartResult<EventOutcome> {
        self.core.throttle.reset();
        self.core.interaction.set_active_index(None)?;
        self.commit()
    }

    /// Pointer entered a series line or its legend item.
    pub fn series_enter(&mut self, code: &str) -> ChartResult<EventOutcome> {
        self.core.interaction.set_hover(Some(code))?;
        self.commit()
    }

    /// Pointer left the hovered line or legend item.
    pub fn series_leave(&mut self) -> ChartResult<EventOutcome> {
        self.core.interaction.set_hover(None)?;
        self.commit()
    }

    /// Switches presentation semantics. Visibility, hover and the matrix are untouched.
    pub fn set_mode(&mut self, mode: HighlightMode) -> ChartResult<EventOutcome> {
        if self.core.mode == mode {
            return Ok(EventOutcome::Unchanged);
        }
        self.core.mode = mode;
        trace!(?mode, "set highlight mode");
        self.commit()
    }

    pub fn set_single_series_mode(&mut self, single_series: bool) -> ChartResult<EventOutcome> {
        self.set_mode(HighlightMode::from_single_series(single_series))
    }

    pub(super) fn commit(&mut self) -> ChartResult<EventOutcome> {
        self.render()?;
        Ok(EventOutcome::Rendered)
    }
}
