use std::cmp::Ordering;

use itertools::Itertools;

use crate::{
    config::{AreaExponent, GroupingMode},
    models::{NormalizedMetric, WeightedNode},
};

/// `market_cap ^ exponent`, or 0 when the cap is not a positive finite number.
pub fn leaf_weight(market_cap: f64, exponent: AreaExponent) -> f64 {
    if !(market_cap.is_finite() && market_cap > 0.0) {
        return 0.0;
    }
    let weight = market_cap.powf(exponent.value());
    if weight.is_finite() { weight } else { 0.0 }
}

/// Descending by market cap; unusable caps sink to the end. Stable.
fn by_market_cap_desc(a: &NormalizedMetric, b: &NormalizedMetric) -> Ordering {
    let key = |m: &NormalizedMetric| {
        if m.market_cap.is_nan() {
            f64::NEG_INFINITY
        } else {
            m.market_cap
        }
    };
    key(b).total_cmp(&key(a))
}

/// Builds the root group. Leaves are sorted by descending market cap first, so
/// category groups keep the order in which their biggest item appears.
pub fn build_hierarchy(
    metrics: Vec<NormalizedMetric>,
    mode: GroupingMode,
    exponent: AreaExponent,
) -> WeightedNode {
    let sorted = metrics.into_iter().sorted_by(by_market_cap_desc);
    let to_leaf = |metric: NormalizedMetric| WeightedNode::Leaf {
        weight: leaf_weight(metric.market_cap, exponent),
        metric,
    };

    match mode {
        GroupingMode::Combined => WeightedNode::group(None, sorted.map(to_leaf).collect()),
        GroupingMode::Divided => {
            let mut categories: Vec<(String, Vec<WeightedNode>)> = Vec::new();
            for metric in sorted {
                match categories.iter().position(|(c, _)| *c == metric.category) {
                    Some(idx) => categories[idx].1.push(to_leaf(metric)),
                    None => categories.push((metric.category.clone(), vec![to_leaf(metric)])),
                }
            }
            let groups = categories
                .into_iter()
                .map(|(label, members)| WeightedNode::group(Some(label), members))
                .collect();
            WeightedNode::group(None, groups)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric(name: &str, category: &str, market_cap: f64) -> NormalizedMetric {
        NormalizedMetric {
            name: name.into(),
            category: category.into(),
            current_price: 1.0,
            past_price: 1.0,
            supply: market_cap,
            market_cap,
            percent_change: Some(0.0),
            clamped_change: 0.0,
        }
    }

    fn assert_weights_sum(node: &WeightedNode) {
        if let WeightedNode::Group {
            children, weight, ..
        } = node
        {
            let sum: f64 = children.iter().map(WeightedNode::weight).sum();
            assert!((sum - weight).abs() <= 1e-9 * weight.max(1.0));
            children.iter().for_each(assert_weights_sum);
        }
        assert!(node.weight() >= 0.0);
    }

    #[test]
    fn exponent_shapes_the_weight() {
        assert_eq!(leaf_weight(100.0, AreaExponent::REALISTIC), 100.0);
        assert_eq!(leaf_weight(100.0, AreaExponent::UNIFIED), 1.0);
        assert!((leaf_weight(100.0, AreaExponent::new(0.5)) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn bad_caps_get_zero_weight() {
        assert_eq!(leaf_weight(0.0, AreaExponent::UNIFIED), 0.0);
        assert_eq!(leaf_weight(-5.0, AreaExponent::REALISTIC), 0.0);
        assert_eq!(leaf_weight(f64::NAN, AreaExponent::new(0.3)), 0.0);
        assert_eq!(leaf_weight(f64::INFINITY, AreaExponent::REALISTIC), 0.0);
    }

    #[test]
    fn combined_mode_is_one_flat_group_sorted_by_cap() {
        let root = build_hierarchy(
            vec![
                metric("small", "Skin", 10.0),
                metric("broken", "Skin", f64::NAN),
                metric("big", "Case", 50.0),
                metric("mid", "Case", 20.0),
            ],
            GroupingMode::Combined,
            AreaExponent::REALISTIC,
        );
        assert_eq!(root.label(), None);
        let names: Vec<&str> = root.children().iter().filter_map(|c| c.label()).collect();
        assert_eq!(names, vec!["big", "mid", "small", "broken"]);
        assert!(root.children().iter().all(WeightedNode::is_leaf));
        assert_eq!(root.weight(), 80.0);
        assert_weights_sum(&root);
    }

    #[test]
    fn divided_mode_groups_by_first_seen_category() {
        let root = build_hierarchy(
            vec![
                metric("s1", "Skin", 5.0),
                metric("c1", "Case", 40.0),
                metric("s2", "Skin", 30.0),
                metric("c2", "Case", 1.0),
            ],
            GroupingMode::Divided,
            AreaExponent::REALISTIC,
        );
        let groups: Vec<&str> = root.children().iter().filter_map(|c| c.label()).collect();
        assert_eq!(groups, vec!["Case", "Skin"]);
        assert_eq!(root.children()[0].weight(), 41.0);
        assert_eq!(root.children()[1].weight(), 35.0);
        let skins: Vec<&str> = root.children()[1]
            .children()
            .iter()
            .filter_map(|c| c.label())
            .collect();
        assert_eq!(skins, vec!["s2", "s1"]);
        assert_weights_sum(&root);
    }

    #[test]
    fn unified_scale_gives_equal_weights() {
        let root = build_hierarchy(
            vec![metric("a", "Case", 1e6), metric("b", "Case", 3.0)],
            GroupingMode::Combined,
            AreaExponent::UNIFIED,
        );
        let weights: Vec<f64> = root.children().iter().map(WeightedNode::weight).collect();
        assert_eq!(weights, vec![1.0, 1.0]);
    }

    #[test]
    fn empty_input_is_an_empty_root() {
        let root = build_hierarchy(Vec::new(), GroupingMode::Divided, AreaExponent::default());
        assert!(root.children().is_empty());
        assert_eq!(root.weight(), 0.0);
    }
}
