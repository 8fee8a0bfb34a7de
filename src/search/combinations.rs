//! Fixed-size subset enumeration.
//!
//! Subsets come out in lexicographic order of pool positions, so the
//! sequence is fully determined by the pool order. Every call builds a
//! fresh iterator; nothing is shared between enumerations.

/// Lazy iterator over every `k`-element subset of a pool.
///
/// Yields `C(n, k)` subsets for `k <= n`, exactly one empty subset for
/// `k == 0`, and nothing when `k > n`.
///
/// # Examples
///
/// ```
/// use formulab::search::Combinations;
///
/// let pool = ['a', 'b', 'c'];
/// let pairs: Vec<Vec<char>> = Combinations::new(&pool, 2).collect();
/// assert_eq!(pairs, vec![vec!['a', 'b'], vec!['a', 'c'], vec!['b', 'c']]);
/// ```
#[derive(Debug, Clone)]
pub struct Combinations<'a, T> {
    pool: &'a [T],
    indices: Vec<usize>,
    started: bool,
    exhausted: bool,
}

impl<'a, T: Clone> Combinations<'a, T> {
    /// Creates an enumeration of `k`-subsets of `pool`.
    pub fn new(pool: &'a [T], k: usize) -> Self {
        Self {
            pool,
            indices: (0..k).collect(),
            started: false,
            exhausted: k > pool.len(),
        }
    }

    fn current(&self) -> Vec<T> {
        self.indices.iter().map(|&i| self.pool[i].clone()).collect()
    }

    /// Moves `indices` to the next subset in lexicographic order.
    fn advance(&mut self) -> bool {
        let n = self.pool.len();
        let k = self.indices.len();
        // Rightmost position that has not reached its maximum value.
        let Some(i) = (0..k).rev().find(|&i| self.indices[i] != i + n - k) else {
            return false;
        };
        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        true
    }
}

impl<T: Clone> Iterator for Combinations<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.exhausted {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.current());
        }
        if self.advance() {
            Some(self.current())
        } else {
            self.exhausted = true;
            None
        }
    }
}

/// Cross product of a `ka`-subset enumeration of `a` with a `kb`-subset
/// enumeration of `b`.
///
/// The inner enumeration restarts for every outer subset. If either side
/// has no subsets the product is empty.
pub fn pairs<'p, A, B>(
    a: &'p [A],
    ka: usize,
    b: &'p [B],
    kb: usize,
) -> impl Iterator<Item = (Vec<A>, Vec<B>)> + 'p
where
    A: Clone + 'p,
    B: Clone + 'p,
{
    Combinations::new(a, ka)
        .flat_map(move |left| Combinations::new(b, kb).map(move |right| (left.clone(), right)))
}

/// Binomial coefficient `C(n, k)`, saturating at `u64::MAX`.
pub fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        acc = acc * (n - i) as u128 / (i + 1) as u128;
        if acc > u64::MAX as u128 {
            return u64::MAX;
        }
    }
    acc as u64
}
