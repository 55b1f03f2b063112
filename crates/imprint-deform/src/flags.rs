//! The collision flag set.
//!
//! Vertices displaced during one evaluation, by the direct pass or the
//! bulge pass. Rebuilt from scratch every evaluation.

/// Dense bitmap of displaced vertices with an insertion count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollisionFlags {
    flagged: Vec<bool>,
    count: usize,
}

impl CollisionFlags {
    /// An empty set over `vertex_count` vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            flagged: vec![false; vertex_count],
            count: 0,
        }
    }

    /// Flag vertex `i`. Returns true if it was not flagged before.
    ///
    /// Out-of-range indices are ignored.
    pub fn insert(&mut self, i: usize) -> bool {
        match self.flagged.get_mut(i) {
            Some(slot) if !*slot => {
                *slot = true;
                self.count += 1;
                true
            }
            _ => false,
        }
    }

    #[inline]
    pub fn contains(&self, i: usize) -> bool {
        self.flagged.get(i).copied().unwrap_or(false)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Flagged vertex indices, ascending.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.flagged
            .iter()
            .enumerate()
            .filter_map(|(i, &f)| f.then_some(i))
    }
}
