mod frame;
mod null_renderer;
mod primitives;

pub use frame::{
    ActivePointMarker, PresentationFrame, SeriesRenderAttributes, TooltipEntry, TooltipPayload,
};
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LineStrokeStyle};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully resolved `PresentationFrame` so drawing code
/// (axes, lines, legend markup, tooltip styling) stays isolated from the
/// highlighting state machine.
pub trait Renderer {
    fn render(&mut self, frame: &PresentationFrame) -> ChartResult<()>;
}
