//! Memoization grid for nearest-color lookups.

use super::nearest::nearest;
use super::palette::Palette256;

/// Cells per axis; reduced red and green each span `0..64`.
const GRID_DIM: usize = 64;

/// One memoized result: the blue component that completes the cell's key,
/// and the palette index the full reduced color maps to.
#[derive(Debug, Clone, Copy)]
struct CacheNode {
    blue: u8,
    index: u8,
}

/// A 64×64 grid of blue-sorted runs memoizing nearest-palette lookups.
///
/// The grid is indexed by the reduced (red, green) pair; each cell holds the
/// blue values observed for that pair, sorted ascending, so a repeated color
/// costs a binary search instead of a 256-entry scan. A given reduced color
/// is stored at most once, and a stored index always came from
/// [`nearest`], so the cache can never answer with an index that differs
/// from the uncached search.
///
/// A cache lives for exactly one quantization run. It is created fresh at
/// the start and dropped with all its nodes when the run ends, whether the
/// run succeeded or not.
#[derive(Debug)]
pub(crate) struct ColorCache {
    cells: Vec<Vec<CacheNode>>,
}

impl ColorCache {
    pub fn new() -> Self {
        Self {
            cells: vec![Vec::new(); GRID_DIM * GRID_DIM],
        }
    }

    /// Number of memoized colors across all cells.
    pub fn len(&self) -> usize {
        self.cells.iter().map(Vec::len).sum()
    }

    /// Palette index for a reduced color, memoizing the result on a miss.
    ///
    /// If the cell cannot grow, the index is computed directly and returned
    /// without caching: the cache is an optimization, never a correctness
    /// requirement, so a miss that cannot be stored must not change the
    /// answer.
    pub fn index_of(&mut self, palette: &Palette256, r6: u8, g6: u8, b6: u8) -> u8 {
        let cell = &mut self.cells[usize::from(r6) * GRID_DIM + usize::from(g6)];
        match cell.binary_search_by_key(&b6, |node| node.blue) {
            Ok(at) => cell[at].index,
            Err(at) => {
                let index = nearest(palette, r6, g6, b6);
                if cell.try_reserve(1).is_ok() {
                    cell.insert(at, CacheNode { blue: b6, index });
                }
                index
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rgb::RGB8;

    fn grey_palette() -> Palette256 {
        let entries: Vec<RGB8> = (0u8..=255).map(|v| RGB8::new(v, v, v)).collect();
        Palette256::new(&entries).unwrap()
    }

    #[test]
    fn test_cache_agrees_with_uncached_search() {
        let palette = grey_palette();
        let mut cache = ColorCache::new();

        for r6 in (0..64).step_by(7) {
            for g6 in (0..64).step_by(5) {
                for b6 in (0..64).step_by(3) {
                    let cached = cache.index_of(&palette, r6, g6, b6);
                    let direct = nearest(&palette, r6, g6, b6);
                    assert_eq!(
                        cached, direct,
                        "Cache diverged from search at ({}, {}, {})",
                        r6, g6, b6
                    );
                }
            }
        }
    }

    #[test]
    fn test_hit_does_not_grow_cache() {
        let palette = grey_palette();
        let mut cache = ColorCache::new();

        let first = cache.index_of(&palette, 10, 20, 30);
        assert_eq!(cache.len(), 1);

        let second = cache.index_of(&palette, 10, 20, 30);
        assert_eq!(first, second);
        assert_eq!(cache.len(), 1, "A repeated color must not add a node");
    }

    #[test]
    fn test_one_node_per_distinct_color() {
        let palette = grey_palette();
        let mut cache = ColorCache::new();

        // Same cell, three distinct blues, queried out of order and twice.
        for b6 in [40u8, 5, 22, 5, 40, 22] {
            cache.index_of(&palette, 12, 12, b6);
        }
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn test_interleaved_hits_and_misses_stay_consistent() {
        let palette = grey_palette();
        let mut cache = ColorCache::new();
        let colors = [(1u8, 2u8, 3u8), (1, 2, 4), (1, 2, 3), (60, 60, 60), (1, 2, 4)];

        for &(r6, g6, b6) in &colors {
            assert_eq!(
                cache.index_of(&palette, r6, g6, b6),
                nearest(&palette, r6, g6, b6)
            );
        }
    }
}
