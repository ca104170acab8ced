//! Recursive-bisection treemap.
//!
//! Every group's children are ordered by descending weight (stable), then the
//! group's inner rectangle is cut along its longer side at the prefix whose
//! weight is closest to half the total. Each half recurses until one child is
//! left. Two siblings therefore split their parent's area exactly by weight.
//!
//! Padding follows the d3 convention: a node with children reserves its outer
//! gutters (top gutter taller, for the title) and every child is inset by half
//! the inner gap, so adjacent siblings end up `inner` pixels apart.

use crate::{
    config::TreemapPadding,
    domain::{Rect, ViewportSize},
    models::WeightedNode,
};

/// A node with its final rectangle. `depth` 0 is the root.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedNode<'a> {
    pub node: &'a WeightedNode,
    pub rect: Rect,
    pub depth: u16,
}

/// Edge-based working rectangle; lets collapsed sides meet in the middle.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Bounds {
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
}

impl Bounds {
    fn from_rect(r: Rect) -> Self {
        Self {
            x0: r.x,
            y0: r.y,
            x1: r.right(),
            y1: r.bottom(),
        }
    }

    /// Shrink each side independently; a side pair that crosses collapses to its midpoint.
    fn inset(self, left: f64, top: f64, right: f64, bottom: f64) -> Self {
        let (mut x0, mut y0) = (self.x0 + left, self.y0 + top);
        let (mut x1, mut y1) = (self.x1 - right, self.y1 - bottom);
        if x1 < x0 {
            x0 = (x0 + x1) / 2.0;
            x1 = x0;
        }
        if y1 < y0 {
            y0 = (y0 + y1) / 2.0;
            y1 = y0;
        }
        Self { x0, y0, x1, y1 }
    }

    fn to_rect(self) -> Rect {
        Rect::new(self.x0, self.y0, self.x1 - self.x0, self.y1 - self.y0)
    }
}

pub struct TreemapPartitioner {
    padding: TreemapPadding,
}

impl TreemapPartitioner {
    pub fn new(padding: TreemapPadding) -> Self {
        Self { padding }
    }

    /// Places every node of `root` (pre-order, groups before their children).
    /// Empty output for a degenerate viewport or zero total weight; nodes whose
    /// rectangle ends up with no area are skipped along with their subtree.
    pub fn partition<'a>(
        &self,
        root: &'a WeightedNode,
        viewport: ViewportSize,
    ) -> Vec<PlacedNode<'a>> {
        let total = root.weight();
        if viewport.is_degenerate() || !(total.is_finite() && total > 0.0) {
            return Vec::new();
        }

        let mut placed = Vec::new();
        self.place(
            root,
            Bounds::from_rect(Rect::from_viewport(viewport)),
            0.0,
            0,
            &mut placed,
        );
        placed
    }

    fn place<'a>(
        &self,
        node: &'a WeightedNode,
        outer: Bounds,
        half_gap: f64,
        depth: u16,
        out: &mut Vec<PlacedNode<'a>>,
    ) {
        let own = outer.inset(half_gap, half_gap, half_gap, half_gap);
        let rect = own.to_rect();
        if rect.is_empty() {
            return;
        }
        out.push(PlacedNode { node, rect, depth });

        let children = node.children();
        if children.is_empty() {
            return;
        }

        let p = self.padding.inner / 2.0;
        let inner = own.inset(
            self.padding.left - p,
            self.padding.top - p,
            self.padding.right - p,
            self.padding.bottom - p,
        );

        let mut order: Vec<usize> = (0..children.len()).collect();
        order.sort_by(|&a, &b| children[b].weight().total_cmp(&children[a].weight()));
        let weights: Vec<f64> = order.iter().map(|&i| sanitize(children[i].weight())).collect();

        for (slot, bounds) in bisect(&weights, inner).into_iter().enumerate() {
            self.place(&children[order[slot]], bounds, p, depth + 1, out);
        }
    }
}

impl Default for TreemapPartitioner {
    fn default() -> Self {
        Self::new(TreemapPadding::default())
    }
}

fn sanitize(weight: f64) -> f64 {
    if weight.is_finite() && weight > 0.0 { weight } else { 0.0 }
}

/// Tiles `bounds` with one rectangle per weight, in input order.
fn bisect(weights: &[f64], bounds: Bounds) -> Vec<Bounds> {
    let mut sums = Vec::with_capacity(weights.len() + 1);
    sums.push(0.0);
    for w in weights {
        sums.push(sums[sums.len() - 1] + w);
    }

    let mut out = vec![bounds; weights.len()];
    if !weights.is_empty() {
        split(&sums, 0, weights.len(), sums[weights.len()], bounds, &mut out);
    }
    out
}

fn split(sums: &[f64], i: usize, j: usize, value: f64, b: Bounds, out: &mut [Bounds]) {
    if i + 1 >= j {
        out[i] = b;
        return;
    }

    let offset = sums[i];
    let target = value / 2.0 + offset;

    // First prefix end whose sum reaches the halfway target...
    let mut k = i + 1;
    let mut hi = j - 1;
    while k < hi {
        let mid = (k + hi) / 2;
        if sums[mid] < target {
            k = mid + 1;
        } else {
            hi = mid;
        }
    }
    // ...or the one before it when that is strictly closer (never leaving the left side empty)
    if target - sums[k - 1] < sums[k] - target && i + 1 < k {
        k -= 1;
    }

    let left = sums[k] - offset;
    let right = value - left;

    if b.x1 - b.x0 > b.y1 - b.y0 {
        let xk = if value > 0.0 {
            (b.x0 * right + b.x1 * left) / value
        } else {
            b.x1
        };
        split(sums, i, k, left, Bounds { x1: xk, ..b }, out);
        split(sums, k, j, right, Bounds { x0: xk, ..b }, out);
    } else {
        let yk = if value > 0.0 {
            (b.y0 * right + b.y1 * left) / value
        } else {
            b.y1
        };
        split(sums, i, k, left, Bounds { y1: yk, ..b }, out);
        split(sums, k, j, right, Bounds { y0: yk, ..b }, out);
    }
}
