use gridwalk_core::Point;

/// Remaining-distance estimate used to order the best-first frontier.
///
/// The search result is a shortest path only when the estimate never
/// overestimates the true remaining distance and is consistent
/// (`estimate(a, t) <= 1 + estimate(b, t)` for adjacent `a`, `b`).
/// [`Manhattan`] satisfies both on 4-connected grid graphs indexed by
/// [`Point`]; other index shapes need their own estimate.
pub trait Heuristic<I> {
    fn estimate(&self, from: &I, to: &I) -> i32;
}

impl<I, F> Heuristic<I> for F
where
    F: Fn(&I, &I) -> i32,
{
    fn estimate(&self, from: &I, to: &I) -> i32 {
        self(from, to)
    }
}

/// Manhattan (L1) distance between grid points.
#[derive(Debug, Clone, Copy, Default)]
pub struct Manhattan;

impl Heuristic<Point> for Manhattan {
    #[inline]
    fn estimate(&self, from: &Point, to: &Point) -> i32 {
        manhattan(*from, *to)
    }
}

/// Always zero: best-first search degrades to uniform-cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct Zero;

impl<I> Heuristic<I> for Zero {
    #[inline]
    fn estimate(&self, _from: &I, _to: &I) -> i32 {
        0
    }
}

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
