//! Fixed-capacity bitset over option indices.

/// A set of option indices in `0..capacity`.
///
/// Capacity is fixed at construction; every set in one grid shares it.
/// Operations between sets of different capacity are a logic error.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OptionSet {
    bits: Vec<u64>,
    capacity: usize,
}

impl OptionSet {
    const BITS_PER_WORD: usize = 64;

    fn words(capacity: usize) -> usize {
        capacity.div_ceil(Self::BITS_PER_WORD)
    }

    /// The empty set.
    pub fn empty(capacity: usize) -> Self {
        Self {
            bits: vec![0; Self::words(capacity)],
            capacity,
        }
    }

    /// The set of every index in `0..capacity`.
    pub fn full(capacity: usize) -> Self {
        let mut bits = vec![u64::MAX; Self::words(capacity)];
        let tail = capacity % Self::BITS_PER_WORD;
        if tail != 0 {
            if let Some(last) = bits.last_mut() {
                *last = (1u64 << tail) - 1;
            }
        }
        Self { bits, capacity }
    }

    /// The set containing only `index`.
    pub fn singleton(capacity: usize, index: usize) -> Self {
        let mut set = Self::empty(capacity);
        set.insert(index);
        set
    }

    /// Upper bound (exclusive) on indices.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Add `index`. Returns `true` if it was not already present.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity`.
    pub fn insert(&mut self, index: usize) -> bool {
        assert!(index < self.capacity, "option {index} out of capacity {}", self.capacity);
        let (w, b) = (index / Self::BITS_PER_WORD, index % Self::BITS_PER_WORD);
        let fresh = self.bits[w] & (1u64 << b) == 0;
        self.bits[w] |= 1u64 << b;
        fresh
    }

    /// Remove `index`. Returns `true` if it was present.
    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.capacity {
            return false;
        }
        let (w, b) = (index / Self::BITS_PER_WORD, index % Self::BITS_PER_WORD);
        let present = self.bits[w] & (1u64 << b) != 0;
        self.bits[w] &= !(1u64 << b);
        present
    }

    /// Membership test.
    pub fn contains(&self, index: usize) -> bool {
        if index >= self.capacity {
            return false;
        }
        let (w, b) = (index / Self::BITS_PER_WORD, index % Self::BITS_PER_WORD);
        self.bits[w] & (1u64 << b) != 0
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Whether the set has no members.
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&w| w == 0)
    }

    /// The only member, if there is exactly one.
    pub fn single(&self) -> Option<usize> {
        let mut it = self.iter();
        let first = it.next()?;
        it.next().is_none().then_some(first)
    }

    /// Remove every member.
    pub fn clear(&mut self) {
        self.bits.fill(0);
    }

    /// Keep only members for which `keep` returns `true`. Returns whether
    /// anything was removed.
    pub fn retain(&mut self, mut keep: impl FnMut(usize) -> bool) -> bool {
        let mut changed = false;
        for (w, word) in self.bits.iter_mut().enumerate() {
            let mut rest = *word;
            while rest != 0 {
                let b = rest.trailing_zeros() as usize;
                rest &= rest - 1;
                if !keep(w * Self::BITS_PER_WORD + b) {
                    *word &= !(1u64 << b);
                    changed = true;
                }
            }
        }
        changed
    }

    /// `self &= other`. Returns whether anything was removed.
    pub fn intersect_with(&mut self, other: &OptionSet) -> bool {
        let mut changed = false;
        for (a, b) in self.bits.iter_mut().zip(&other.bits) {
            let next = *a & *b;
            changed |= next != *a;
            *a = next;
        }
        changed
    }

    /// `self |= other`.
    pub fn union_with(&mut self, other: &OptionSet) {
        for (a, b) in self.bits.iter_mut().zip(&other.bits) {
            *a |= *b;
        }
    }

    /// Whether every member of `self` is in `other`.
    pub fn is_subset(&self, other: &OptionSet) -> bool {
        self.bits
            .iter()
            .zip(&other.bits)
            .all(|(a, b)| a & !b == 0)
    }

    /// Members in ascending order.
    pub fn iter(&self) -> OptionSetIter<'_> {
        OptionSetIter {
            bits: &self.bits,
            word_idx: 0,
            current: self.bits.first().copied().unwrap_or(0),
        }
    }
}

impl<'a> IntoIterator for &'a OptionSet {
    type Item = usize;
    type IntoIter = OptionSetIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the members of an [`OptionSet`], ascending.
pub struct OptionSetIter<'a> {
    bits: &'a [u64],
    word_idx: usize,
    current: u64,
}

impl Iterator for OptionSetIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        loop {
            if self.current != 0 {
                let b = self.current.trailing_zeros() as usize;
                self.current &= self.current - 1;
                return Some(self.word_idx * OptionSet::BITS_PER_WORD + b);
            }
            self.word_idx += 1;
            self.current = *self.bits.get(self.word_idx)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const CAP: usize = 150;

    fn arb_set() -> impl Strategy<Value = OptionSet> {
        prop::collection::vec(0usize..CAP, 0..40).prop_map(|ids| {
            let mut s = OptionSet::empty(CAP);
            for i in ids {
                s.insert(i);
            }
            s
        })
    }

    #[test]
    fn full_respects_capacity() {
        for cap in [0, 1, 63, 64, 65, 128, 130] {
            let s = OptionSet::full(cap);
            assert_eq!(s.len(), cap);
            assert_eq!(s.iter().collect::<Vec<_>>(), (0..cap).collect::<Vec<_>>());
        }
    }

    #[test]
    fn single_and_singleton() {
        let s = OptionSet::singleton(100, 70);
        assert_eq!(s.single(), Some(70));
        assert_eq!(OptionSet::empty(100).single(), None);
        assert_eq!(OptionSet::full(3).single(), None);
    }

    #[test]
    fn remove_out_of_capacity_is_noop() {
        let mut s = OptionSet::full(10);
        assert!(!s.remove(10));
        assert!(s.remove(9));
        assert!(!s.contains(9));
        assert_eq!(s.len(), 9);
    }

    proptest! {
        #[test]
        fn retain_reports_change(a in arb_set(), cut in 0usize..CAP) {
            let mut b = a.clone();
            let changed = b.retain(|i| i < cut);
            prop_assert_eq!(changed, a.iter().any(|i| i >= cut));
            prop_assert!(b.is_subset(&a));
            prop_assert!(b.iter().all(|i| i < cut));
        }

        #[test]
        fn intersect_is_subset_of_both(a in arb_set(), b in arb_set()) {
            let mut c = a.clone();
            let changed = c.intersect_with(&b);
            prop_assert!(c.is_subset(&a));
            prop_assert!(c.is_subset(&b));
            prop_assert_eq!(changed, c != a);
        }

        #[test]
        fn union_is_superset(a in arb_set(), b in arb_set()) {
            let mut c = a.clone();
            c.union_with(&b);
            prop_assert!(a.is_subset(&c));
            prop_assert!(b.is_subset(&c));
            prop_assert!(c.len() <= a.len() + b.len());
        }

        #[test]
        fn iter_matches_contains(a in arb_set()) {
            let members: Vec<_> = a.iter().collect();
            prop_assert_eq!(members.len(), a.len());
            prop_assert!(members.windows(2).all(|w| w[0] < w[1]));
            for i in 0..CAP {
                prop_assert_eq!(a.contains(i), members.contains(&i));
            }
        }
    }
}
