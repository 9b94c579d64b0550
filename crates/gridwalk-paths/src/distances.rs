use std::collections::HashMap;
use std::hash::Hash;

/// Sentinel distance meaning "not reached (yet)".
pub const UNREACHABLE: i32 = i32::MAX;

/// Best known distance from the search start, per node index.
///
/// Indices never written read as [`UNREACHABLE`], so the map starts out
/// "infinite everywhere" without touching every node of the graph.
#[derive(Debug, Clone)]
pub struct DistanceMap<I> {
    dist: HashMap<I, i32>,
}

impl<I: Clone + Eq + Hash> DistanceMap<I> {
    /// A map where `start` is at distance 0 and everything else is unreached.
    pub fn from_start(start: I) -> Self {
        let mut dist = HashMap::new();
        dist.insert(start, 0);
        Self { dist }
    }

    #[inline]
    pub fn get(&self, index: &I) -> i32 {
        self.dist.get(index).copied().unwrap_or(UNREACHABLE)
    }

    #[inline]
    pub fn set(&mut self, index: I, d: i32) {
        self.dist.insert(index, d);
    }

    /// Lower the distance of `index` to `d` if that is an improvement.
    /// Returns whether the map changed.
    pub fn relax(&mut self, index: &I, d: i32) -> bool {
        if d >= self.get(index) {
            return false;
        }
        self.dist.insert(index.clone(), d);
        true
    }

    #[inline]
    pub fn is_reachable(&self, index: &I) -> bool {
        self.get(index) != UNREACHABLE
    }

    /// Number of nodes with a finite distance.
    pub fn len(&self) -> usize {
        self.dist.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dist.is_empty()
    }

    /// Reached nodes and their distances, in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&I, i32)> {
        self.dist.iter().map(|(i, &d)| (i, d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_reads_unreachable() {
        let m = DistanceMap::from_start('s');
        assert_eq!(m.get(&'s'), 0);
        assert_eq!(m.get(&'x'), UNREACHABLE);
        assert!(!m.is_reachable(&'x'));
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn relax_only_lowers() {
        let mut m = DistanceMap::from_start(0u8);
        assert!(m.relax(&1, 5));
        assert!(!m.relax(&1, 5));
        assert!(!m.relax(&1, 7));
        assert!(m.relax(&1, 2));
        assert_eq!(m.get(&1), 2);
    }
}
