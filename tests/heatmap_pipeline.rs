use scm_heatmap::{
    HeatmapLayout, MarketItem, PipelineInput, ViewportSize,
    analysis::{ColorScale, build_hierarchy, normalize_items},
    compute_layout,
    config::{AreaExponent, ColorMode, GroupingMode, Timeframe},
    data::DemoData,
    models::{ColorBand, WeightedNode},
};

const TOLERANCE: f64 = 1e-6;

fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol * a.abs().max(b.abs()).max(1.0)
}

fn row(name: &str, category: &str, current: &str, past: &str, supply: &str) -> MarketItem {
    MarketItem {
        name: name.into(),
        category: category.into(),
        current_price: current.into(),
        price_24h_ago: past.into(),
        supply: supply.into(),
        ..Default::default()
    }
}

fn run(items: &[MarketItem], grouping: GroupingMode, exponent: AreaExponent) -> HeatmapLayout {
    compute_layout(&PipelineInput {
        items,
        loading: false,
        timeframe: Timeframe::H24,
        grouping,
        area_exponent: exponent,
        color_mode: ColorMode::Bands,
        viewport: ViewportSize::new(1000.0, 500.0),
    })
}

fn check_weights(node: &WeightedNode) {
    assert!(node.weight() >= 0.0);
    if let WeightedNode::Group { children, weight, .. } = node {
        let sum: f64 = children.iter().map(|c| c.weight()).sum();
        assert!(approx_eq(sum, *weight, TOLERANCE), "{} != {}", sum, weight);
        children.iter().for_each(check_weights);
    }
}

#[test]
fn group_weights_are_the_sum_of_their_children() {
    let items = DemoData::load().unwrap();
    for exponent in [AreaExponent::UNIFIED, AreaExponent::new(0.5), AreaExponent::REALISTIC] {
        for grouping in [GroupingMode::Divided, GroupingMode::Combined] {
            let root = build_hierarchy(normalize_items(&items, Timeframe::D7), grouping, exponent);
            check_weights(&root);
        }
    }
}

#[test]
fn demo_tiles_never_overlap_and_stay_inside_their_group() {
    let items = DemoData::load().unwrap();
    let layout = run(&items, GroupingMode::Divided, AreaExponent::default());
    assert!(!layout.leaves.is_empty());

    let viewport = scm_heatmap::domain::Rect::from_viewport(layout.viewport);
    for (i, a) in layout.leaves.iter().enumerate() {
        assert!(viewport.contains_rect(&a.rect, TOLERANCE));
        for b in &layout.leaves[i + 1..] {
            assert!(
                a.rect.overlap_area(&b.rect) < TOLERANCE,
                "{} overlaps {}",
                a.name,
                b.name
            );
        }
        let group = layout
            .groups
            .iter()
            .find(|g| g.label == a.category)
            .unwrap();
        assert!(group.rect.contains_rect(&a.rect, TOLERANCE));
    }
}

#[test]
fn best_band_for_a_twenty_percent_gain() {
    let items = vec![row("Winner", "Case", "120", "100", "1000")];
    let layout = run(&items, GroupingMode::Combined, AreaExponent::REALISTIC);
    let leaf = &layout.leaves[0];
    assert_eq!(leaf.percent_change, Some(20.0));
    assert_eq!(leaf.band, ColorBand::Best);
    assert!(20.0 >= layout.legend.thresholds.positive_66);
}

#[test]
fn case_and_skin_groups_split_three_to_seven() {
    let items = vec![
        row("Case A", "Case", "1", "1", "10"),
        row("Case B", "Case", "1", "1", "20"),
        row("Skin A", "Skin", "1", "1", "70"),
    ];
    let layout = run(&items, GroupingMode::Divided, AreaExponent::REALISTIC);
    let area = |label: &str| {
        layout
            .groups
            .iter()
            .find(|g| g.label == label)
            .map(|g| g.rect.area())
            .unwrap()
    };
    let ratio = area("Case") / area("Skin");
    assert!((ratio - 3.0 / 7.0).abs() < 0.02, "ratio {}", ratio);
}

#[test]
fn unified_scale_gives_equal_areas() {
    let items = vec![
        row("Huge", "Case", "1", "1", "1000000"),
        row("Big", "Case", "1", "1", "10000"),
        row("Small", "Case", "1", "1", "100"),
        row("Tiny", "Case", "1", "1", "1"),
    ];
    let layout = run(&items, GroupingMode::Combined, AreaExponent::UNIFIED);
    assert_eq!(layout.leaves.len(), 4);
    let first = layout.leaves[0].rect.area();
    for leaf in &layout.leaves {
        assert!(approx_eq(leaf.rect.area(), first, TOLERANCE));
    }
}

#[test]
fn zero_past_price_is_neutral_not_infinite() {
    let items = vec![row("Fresh listing", "Case", "5", "0", "1000")];
    let metrics = normalize_items(&items, Timeframe::H24);
    assert_eq!(metrics[0].percent_change, None);
    assert_eq!(metrics[0].clamped_change, 0.0);
    assert_eq!(
        ColorScale::for_timeframe(Timeframe::H24).band(metrics[0].percent_change),
        ColorBand::Neutral
    );
}

#[test]
fn bands_are_monotonic_in_change() {
    let scale = ColorScale::for_timeframe(Timeframe::D3);
    let mut previous = ColorBand::Worst;
    for step in -400..=400 {
        let band = scale.band(Some(step as f64 / 10.0));
        assert!(band >= previous);
        previous = band;
    }
}

#[test]
fn identical_inputs_give_identical_rectangles() {
    let items = DemoData::load().unwrap();
    let a = run(&items, GroupingMode::Divided, AreaExponent::default());
    let b = run(&items, GroupingMode::Divided, AreaExponent::default());
    assert_eq!(a, b);
}

#[test]
fn loading_or_empty_viewport_renders_nothing() {
    let items = DemoData::load().unwrap();
    let loading = compute_layout(&PipelineInput {
        items: &items,
        loading: true,
        timeframe: Timeframe::H6,
        grouping: GroupingMode::Divided,
        area_exponent: AreaExponent::default(),
        color_mode: ColorMode::Gradient,
        viewport: ViewportSize::new(800.0, 600.0),
    });
    assert!(loading.is_empty());

    let squashed = compute_layout(&PipelineInput {
        items: &items,
        loading: false,
        timeframe: Timeframe::H6,
        grouping: GroupingMode::Divided,
        area_exponent: AreaExponent::default(),
        color_mode: ColorMode::Bands,
        viewport: ViewportSize::new(800.0, 0.0),
    });
    assert!(squashed.is_empty());
}
