use approx::assert_relative_eq;
use series_highlight::api::{
    ActivePointStrategy, HighlightMode, PresentationConfig, PresentationResolver,
};
use series_highlight::core::{
    CatalogConfig, GeneratorConfig, RngUnitSource, SampleMatrix, SeriesCatalog, SeriesGroup,
    generate,
};
use series_highlight::interaction::InteractionState;
use series_highlight::render::TooltipPayload;

struct Fixture {
    catalog: SeriesCatalog,
    matrix: SampleMatrix,
}

impl Fixture {
    fn new() -> Self {
        let catalog = SeriesCatalog::build(&CatalogConfig::default()).expect("catalog");
        let matrix = generate(
            &catalog,
            &GeneratorConfig::default().with_years(2015, 2),
            &mut RngUnitSource::seeded(3),
        )
        .expect("matrix");
        Self { catalog, matrix }
    }

    fn state(&self) -> InteractionState {
        InteractionState::new(&self.catalog, self.matrix.len())
    }

    fn resolver(&self, config: PresentationConfig) -> PresentationResolver<'_> {
        PresentationResolver::new(&self.catalog, &self.matrix, config)
    }
}

#[test]
fn classic_mode_without_hover_is_uniform() {
    let fixture = Fixture::new();
    let resolver = fixture.resolver(PresentationConfig::default());
    let frame = resolver.resolve_state(&fixture.state(), HighlightMode::Classic);

    assert_eq!(frame.series.len(), fixture.catalog.len());
    for (position, attrs) in frame.series.iter().enumerate() {
        assert_relative_eq!(attrs.opacity, 1.0);
        assert_relative_eq!(attrs.stroke_width, 2.0);
        assert_eq!(attrs.z_order, position);
        assert_eq!(&attrs.code, fixture.catalog.series()[position].code());
        assert!(!attrs.show_active_point);
        assert_eq!(attrs.dashed, attrs.group == SeriesGroup::Retired);
    }
    assert!(frame.tooltip.is_none());
    assert!(frame.validate().is_ok());
}

#[test]
fn single_series_mode_fades_everything_but_the_hovered_series() {
    let fixture = Fixture::new();
    let resolver = fixture.resolver(PresentationConfig::default());
    let mut state = fixture.state();
    state.set_hover(Some("LX")).expect("known");

    let frame = resolver.resolve_state(&state, HighlightMode::SingleSeries);
    for attrs in &frame.series {
        if attrs.code.as_str() == "LX" {
            assert_relative_eq!(attrs.opacity, 1.0);
            assert_relative_eq!(attrs.stroke_width, 3.5);
        } else {
            assert_relative_eq!(attrs.opacity, 0.08);
            assert_relative_eq!(attrs.stroke_width, 2.0);
        }
    }
}

#[test]
fn single_series_mode_without_hover_keeps_full_opacity() {
    let fixture = Fixture::new();
    let resolver = fixture.resolver(PresentationConfig::soft_fade());
    let frame = resolver.resolve_state(&fixture.state(), HighlightMode::SingleSeries);
    assert!(frame.series.iter().all(|attrs| attrs.opacity == 1.0));
}

#[test]
fn hidden_series_are_fully_transparent_in_every_mode() {
    let fixture = Fixture::new();
    let resolver = fixture.resolver(PresentationConfig::default());
    let mut state = fixture.state();
    state.toggle_series("BA").expect("known");
    state.toggle_group(SeriesGroup::Retired);
    state.set_hover(Some("BA")).expect("known");

    for mode in [HighlightMode::Classic, HighlightMode::SingleSeries] {
        let frame = resolver.resolve_state(&state, mode);
        let ba = frame.attributes("BA").expect("BA");
        assert_eq!(ba.opacity, 0.0);
        assert!(!ba.visible);
        for series in fixture.catalog.in_group(SeriesGroup::Retired) {
            let attrs = frame.attributes(series.code().as_str()).expect("retired");
            assert_eq!(attrs.opacity, 0.0);
        }
    }
}

#[test]
fn hovered_series_is_painted_last_and_others_keep_catalog_order() {
    let fixture = Fixture::new();
    let resolver = fixture.resolver(PresentationConfig::default());
    let mut state = fixture.state();
    state.set_hover(Some("BA")).expect("known");

    for mode in [HighlightMode::Classic, HighlightMode::SingleSeries] {
        let frame = resolver.resolve_state(&state, mode);
        assert_eq!(frame.topmost().map(|attrs| attrs.code.as_str()), Some("BA"));

        let rest: Vec<&str> = frame.series[..frame.series.len() - 1]
            .iter()
            .map(|attrs| attrs.code.as_str())
            .collect();
        let expected: Vec<&str> = fixture
            .catalog
            .iter()
            .map(|series| series.code().as_str())
            .filter(|code| *code != "BA")
            .collect();
        assert_eq!(rest, expected);
        assert!(frame.validate().is_ok());
    }
}

#[test]
fn active_point_follows_mode_rules() {
    let fixture = Fixture::new();
    let resolver = fixture.resolver(PresentationConfig::default());
    let mut state = fixture.state();
    state.toggle_series("LH").expect("known");
    state.set_active_index(Some(7)).expect("in range");
    state.set_hover(Some("LX")).expect("known");

    let single = resolver.resolve_state(&state, HighlightMode::SingleSeries);
    let with_point: Vec<&str> = single
        .series
        .iter()
        .filter(|attrs| attrs.show_active_point)
        .map(|attrs| attrs.code.as_str())
        .collect();
    assert_eq!(with_point, vec!["LX"]);

    let classic = resolver.resolve_state(&state, HighlightMode::Classic);
    for attrs in &classic.series {
        assert_eq!(attrs.show_active_point, attrs.code.as_str() != "LH");
    }
}

#[test]
fn single_series_tooltip_reads_the_hovered_value() {
    let fixture = Fixture::new();
    let resolver = fixture.resolver(PresentationConfig::default());
    let mut state = fixture.state();
    state.set_hover(Some("LX")).expect("known");
    state.set_active_index(Some(5)).expect("in range");

    let sample = fixture.matrix.get(5).expect("sample");
    let frame = resolver.resolve_state(&state, HighlightMode::SingleSeries);
    assert_eq!(
        frame.tooltip,
        Some(TooltipPayload::Single {
            code: "LX".into(),
            time: sample.time(),
            label: "2015-06".to_owned(),
            value: sample.value("LX").expect("LX"),
        })
    );

    state.set_hover(None).expect("clear");
    let frame = resolver.resolve_state(&state, HighlightMode::SingleSeries);
    assert!(frame.tooltip.is_none());

    state.set_hover(Some("LX")).expect("known");
    state.set_active_index(None).expect("clear");
    let frame = resolver.resolve_state(&state, HighlightMode::SingleSeries);
    assert!(frame.tooltip.is_none());
}

#[test]
fn classic_tooltip_lists_visible_series_in_catalog_order() {
    let fixture = Fixture::new();
    let resolver = fixture.resolver(PresentationConfig::default());
    let mut state = fixture.state();
    state.toggle_group(SeriesGroup::Retired);
    state.toggle_series("LX").expect("known");
    state.set_active_index(Some(13)).expect("in range");

    let frame = resolver.resolve_state(&state, HighlightMode::Classic);
    let Some(TooltipPayload::Multi {
        time,
        label,
        entries,
    }) = frame.tooltip
    else {
        panic!("expected multi-series tooltip, got {:?}", frame.tooltip);
    };

    let sample = fixture.matrix.get(13).expect("sample");
    assert_relative_eq!(time, sample.time());
    assert_eq!(label, "2016-02");
    let codes: Vec<&str> = entries.iter().map(|entry| entry.code.as_str()).collect();
    assert_eq!(codes, vec!["BA", "LH", "AF", "KL", "IB"]);
    for entry in &entries {
        assert_eq!(Some(entry.value), sample.value(entry.code.as_str()));
    }
}

#[test]
fn classic_tooltip_is_empty_without_active_index_or_visible_series() {
    let fixture = Fixture::new();
    let resolver = fixture.resolver(PresentationConfig::default());
    let mut state = fixture.state();
    assert!(resolver.tooltip(state.visibility(), state.hover(), HighlightMode::Classic).is_none());

    state.set_active_index(Some(0)).expect("in range");
    state.toggle_group(SeriesGroup::Primary);
    state.toggle_group(SeriesGroup::Retired);
    assert!(resolver.tooltip(state.visibility(), state.hover(), HighlightMode::Classic).is_none());
}

#[test]
fn mode_flip_changes_only_presentation_fields() {
    let fixture = Fixture::new();
    let resolver = fixture.resolver(PresentationConfig::default());
    let mut state = fixture.state();
    state.toggle_series("AF").expect("known");
    state.set_hover(Some("KL")).expect("known");
    state.set_active_index(Some(2)).expect("in range");
    let state_before = state.clone();
    let matrix_before = fixture.matrix.clone();

    let classic = resolver.resolve_state(&state, HighlightMode::Classic);
    let single = resolver.resolve_state(&state, HighlightMode::SingleSeries);
    let classic_again = resolver.resolve_state(&state, HighlightMode::Classic);

    assert_eq!(classic, classic_again);
    assert_eq!(state, state_before);
    assert_eq!(fixture.matrix, matrix_before);
    for (a, b) in classic.series.iter().zip(&single.series) {
        assert_eq!(a.code, b.code);
        assert_eq!(a.visible, b.visible);
        assert_eq!(a.stroke_width, b.stroke_width);
        assert_eq!(a.z_order, b.z_order);
        assert_eq!(a.dashed, b.dashed);
        assert_eq!(a.color, b.color);
    }
    assert_ne!(classic.tooltip, single.tooltip);
}

#[test]
fn overlay_strategy_materializes_active_point_markers() {
    let fixture = Fixture::new();
    let mut state = fixture.state();
    state.set_active_index(Some(9)).expect("in range");
    state.toggle_series("IB").expect("known");

    let inline = fixture
        .resolver(PresentationConfig::default())
        .resolve_state(&state, HighlightMode::Classic);
    assert!(inline.active_points.is_empty());

    let overlay = fixture
        .resolver(PresentationConfig::default().with_active_point_strategy(ActivePointStrategy::Overlay))
        .resolve_state(&state, HighlightMode::Classic);
    assert_eq!(overlay.active_points.len(), fixture.catalog.len() - 1);
    let sample = fixture.matrix.get(9).expect("sample");
    for marker in &overlay.active_points {
        assert_eq!(marker.index, 9);
        assert_eq!(Some(marker.value), sample.value(marker.code.as_str()));
        assert_ne!(marker.code.as_str(), "IB");
    }
}

#[test]
fn faded_opacity_is_configurable() {
    let fixture = Fixture::new();
    let mut state = fixture.state();
    state.set_hover(Some("BA")).expect("known");

    let frame = fixture
        .resolver(PresentationConfig::soft_fade())
        .resolve_state(&state, HighlightMode::SingleSeries);
    let faded: Vec<f64> = frame
        .series
        .iter()
        .filter(|attrs| attrs.code.as_str() != "BA")
        .map(|attrs| attrs.opacity)
        .collect();
    assert!(faded.iter().all(|opacity| *opacity == 0.15));
}
