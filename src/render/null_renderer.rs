use crate::error::ChartResult;
use crate::render::{PresentationFrame, Renderer};

/// No-op renderer used by tests and headless hosts.
///
/// It still validates frame content and keeps the last frame so tests can
/// inspect exactly what a real backend would have received.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_frame: Option<PresentationFrame>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &PresentationFrame) -> ChartResult<()> {
        frame.validate()?;
        self.render_count += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
