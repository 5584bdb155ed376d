use crate::error::{ChartError, ChartResult};

use super::PresentationConfig;

pub(super) fn validate_presentation_config(
    config: PresentationConfig,
) -> ChartResult<PresentationConfig> {
    if !config.faded_opacity.is_finite() || config.faded_opacity <= 0.0 || config.faded_opacity >= 1.0
    {
        return Err(ChartError::InvalidConfig(
            "faded_opacity must be finite and in (0, 1)".to_owned(),
        ));
    }
    for (name, value) in [
        ("base_width", config.base_width),
        ("hovered_width", config.hovered_width),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "{name} must be finite and > 0"
            )));
        }
    }
    if config.hovered_width < config.base_width {
        return Err(ChartError::InvalidConfig(
            "hovered_width must be >= base_width".to_owned(),
        ));
    }
    Ok(config)
}
