// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Fixed-width vertex sets.
//!
//! `VertexSet` packs up to `MAX_VERTICES` vertex indices into a single `u64`.
//! All graph algorithms in the workspace operate on these words: adjacency rows,
//! remaining sets during search, color classes and chain covers. Set algebra is
//! therefore a handful of bit operations and iteration walks the set bits in
//! ascending order.

/// The largest vertex count representable by a `VertexSet`.
pub const MAX_VERTICES: usize = 64;

/// Returns the single-bit mask of vertex `v`.
#[inline(always)]
pub const fn bit(v: usize) -> u64 {
    1u64 << v
}

/// Returns the mask with the lowest `n` bits set.
#[inline(always)]
pub const fn low_bits(n: usize) -> u64 {
    if n >= MAX_VERTICES {
        u64::MAX
    } else {
        (1u64 << n) - 1
    }
}

/// A set of vertex indices in `0..64`, stored as a bitmask.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct VertexSet(u64);

impl VertexSet {
    /// The empty set.
    pub const EMPTY: VertexSet = VertexSet(0);

    /// Creates an empty set.
    #[inline(always)]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Creates the set `{0, 1, ..., n - 1}`.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `n > MAX_VERTICES`.
    #[inline(always)]
    pub const fn full(n: usize) -> Self {
        debug_assert!(
            n <= MAX_VERTICES,
            "called `VertexSet::full` with more than 64 vertices"
        );
        Self(low_bits(n))
    }

    /// Creates the set `{v}`.
    #[inline(always)]
    pub const fn singleton(v: usize) -> Self {
        debug_assert!(
            v < MAX_VERTICES,
            "called `VertexSet::singleton` with a vertex index out of range"
        );
        Self(bit(v))
    }

    /// Wraps a raw bitmask.
    #[inline(always)]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Returns the raw bitmask.
    #[inline(always)]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Returns the number of vertices in the set.
    #[inline(always)]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set contains no vertices.
    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if `v` is a member of the set.
    #[inline(always)]
    pub const fn contains(self, v: usize) -> bool {
        v < MAX_VERTICES && self.0 & bit(v) != 0
    }

    /// Adds `v` to the set. Returns `true` if it was not present.
    #[inline(always)]
    pub fn insert(&mut self, v: usize) -> bool {
        debug_assert!(
            v < MAX_VERTICES,
            "called `VertexSet::insert` with vertex {} out of range",
            v
        );
        let fresh = self.0 & bit(v) == 0;
        self.0 |= bit(v);
        fresh
    }

    /// Removes `v` from the set. Returns `true` if it was present.
    #[inline(always)]
    pub fn remove(&mut self, v: usize) -> bool {
        debug_assert!(
            v < MAX_VERTICES,
            "called `VertexSet::remove` with vertex {} out of range",
            v
        );
        let present = self.0 & bit(v) != 0;
        self.0 &= !bit(v);
        present
    }

    /// Returns a copy of the set with `v` added.
    #[inline(always)]
    pub const fn with(self, v: usize) -> Self {
        Self(self.0 | bit(v))
    }

    /// Returns a copy of the set with `v` removed.
    #[inline(always)]
    pub const fn without(self, v: usize) -> Self {
        Self(self.0 & !bit(v))
    }

    #[inline(always)]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline(always)]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    #[inline(always)]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns `true` if every member of `self` is a member of `other`.
    #[inline(always)]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Returns `true` if the two sets share at least one vertex.
    #[inline(always)]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Returns the smallest vertex in the set.
    #[inline(always)]
    pub const fn first(self) -> Option<usize> {
        if self.0 == 0 {
            None
        } else {
            Some(self.0.trailing_zeros() as usize)
        }
    }

    /// Removes and returns the smallest vertex in the set.
    #[inline(always)]
    pub fn pop_first(&mut self) -> Option<usize> {
        let v = self.first()?;
        self.0 &= self.0 - 1;
        Some(v)
    }

    /// Returns the smallest index that is *not* a member of the set.
    ///
    /// This is the minimum excluded value of the set viewed as a set of
    /// integers. A full set yields `MAX_VERTICES`.
    #[inline(always)]
    pub const fn first_absent(self) -> usize {
        (!self.0).trailing_zeros() as usize
    }

    /// Iterates the members in ascending order.
    #[inline(always)]
    pub fn iter(self) -> VertexSetIter {
        VertexSetIter(self.0)
    }
}

/// Ascending iterator over the members of a `VertexSet`.
#[derive(Clone, Debug)]
pub struct VertexSetIter(u64);

impl Iterator for VertexSetIter {
    type Item = usize;

    #[inline(always)]
    fn next(&mut self) -> Option<usize> {
        if self.0 == 0 {
            return None;
        }
        let v = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Some(v)
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for VertexSetIter {}

impl IntoIterator for VertexSet {
    type Item = usize;
    type IntoIter = VertexSetIter;

    #[inline(always)]
    fn into_iter(self) -> VertexSetIter {
        self.iter()
    }
}

impl FromIterator<usize> for VertexSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = VertexSet::new();
        for v in iter {
            set.insert(v);
        }
        set
    }
}

impl Extend<usize> for VertexSet {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        for v in iter {
            self.insert(v);
        }
    }
}

impl std::ops::BitOr for VertexSet {
    type Output = VertexSet;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl std::ops::BitOrAssign for VertexSet {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl std::ops::BitAnd for VertexSet {
    type Output = VertexSet;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl std::ops::BitAndAssign for VertexSet {
    #[inline(always)]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl std::ops::Sub for VertexSet {
    type Output = VertexSet;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        self.difference(rhs)
    }
}

impl std::ops::SubAssign for VertexSet {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 &= !rhs.0;
    }
}

impl std::fmt::Debug for VertexSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl std::fmt::Display for VertexSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, v) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_bits_edges() {
        assert_eq!(low_bits(0), 0);
        assert_eq!(low_bits(1), 1);
        assert_eq!(low_bits(5), 0b11111);
        assert_eq!(low_bits(64), u64::MAX);
    }

    #[test]
    fn test_insert_remove_and_membership() {
        let mut s = VertexSet::new();
        assert!(s.is_empty());
        assert!(s.insert(3));
        assert!(!s.insert(3));
        assert!(s.insert(63));
        assert!(s.contains(3));
        assert!(s.contains(63));
        assert!(!s.contains(4));
        assert!(!s.contains(64));
        assert_eq!(s.len(), 2);
        assert!(s.remove(3));
        assert!(!s.remove(3));
        assert_eq!(s, VertexSet::singleton(63));
    }

    #[test]
    fn test_set_algebra() {
        let a: VertexSet = [0, 1, 2, 5].into_iter().collect();
        let b: VertexSet = [2, 3, 5].into_iter().collect();

        assert_eq!((a | b).iter().collect::<Vec<_>>(), vec![0, 1, 2, 3, 5]);
        assert_eq!((a & b).iter().collect::<Vec<_>>(), vec![2, 5]);
        assert_eq!((a - b).iter().collect::<Vec<_>>(), vec![0, 1]);
        assert!((a & b).is_subset(a));
        assert!(!a.is_subset(b));
        assert!(a.intersects(b));
        assert!(!(a - b).intersects(b));
    }

    #[test]
    fn test_iteration_is_ascending_and_exact_size() {
        let s: VertexSet = [9, 1, 40, 7].into_iter().collect();
        let it = s.iter();
        assert_eq!(it.len(), 4);
        assert_eq!(it.collect::<Vec<_>>(), vec![1, 7, 9, 40]);
    }

    #[test]
    fn test_first_and_pop_first() {
        let mut s: VertexSet = [4, 2, 8].into_iter().collect();
        assert_eq!(s.first(), Some(2));
        assert_eq!(s.pop_first(), Some(2));
        assert_eq!(s.pop_first(), Some(4));
        assert_eq!(s.pop_first(), Some(8));
        assert_eq!(s.pop_first(), None);
        assert_eq!(s.first(), None);
    }

    #[test]
    fn test_first_absent_is_mex() {
        assert_eq!(VertexSet::EMPTY.first_absent(), 0);
        let s: VertexSet = [0, 1, 3].into_iter().collect();
        assert_eq!(s.first_absent(), 2);
        assert_eq!(VertexSet::full(5).first_absent(), 5);
        assert_eq!(VertexSet::full(64).first_absent(), 64);
    }

    #[test]
    fn test_display_and_debug() {
        let s: VertexSet = [0, 2, 5].into_iter().collect();
        assert_eq!(format!("{}", s), "{0, 2, 5}");
        assert_eq!(format!("{:?}", s), "{0, 2, 5}");
        assert_eq!(format!("{}", VertexSet::EMPTY), "{}");
    }
}
