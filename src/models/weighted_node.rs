use crate::models::NormalizedMetric;

/// Node of the two-level layout tree. The root is always an unlabelled `Group`.
#[derive(Debug, Clone, PartialEq)]
pub enum WeightedNode {
    Leaf {
        metric: NormalizedMetric,
        weight: f64,
    },
    Group {
        label: Option<String>,
        children: Vec<WeightedNode>,
        weight: f64,
    },
}

impl WeightedNode {
    /// Builds a group whose weight is the sum of its children's.
    pub fn group(label: Option<String>, children: Vec<WeightedNode>) -> Self {
        let weight = children.iter().map(WeightedNode::weight).sum();
        Self::Group {
            label,
            children,
            weight,
        }
    }

    #[inline]
    pub fn weight(&self) -> f64 {
        match self {
            Self::Leaf { weight, .. } | Self::Group { weight, .. } => *weight,
        }
    }

    pub fn children(&self) -> &[WeightedNode] {
        match self {
            Self::Leaf { .. } => &[],
            Self::Group { children, .. } => children,
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Leaf { metric, .. } => Some(&metric.name),
            Self::Group { label, .. } => label.as_deref(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    /// Depth-first leaves in child order.
    pub fn leaves(&self) -> Vec<(&NormalizedMetric, f64)> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<(&'a NormalizedMetric, f64)>) {
        match self {
            Self::Leaf { metric, weight } => out.push((metric, *weight)),
            Self::Group { children, .. } => {
                for child in children {
                    child.collect_leaves(out);
                }
            }
        }
    }
}
