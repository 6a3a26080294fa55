use std::cmp::min;

use super::Metric;

/// Unit-cost edit distance (insert, delete, substitute).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Levenshtein;

impl Metric for Levenshtein {
    fn distance(&self, a: &str, b: &str) -> u32 {
        levenshtein(a, b)
    }
}

/// Edit distance between `a` and `b`, counted over Unicode scalar values.
///
/// Wagner-Fischer dynamic programming, keeping a single row sized by the
/// shorter input.
///
/// ```
/// use bk_index::metric::levenshtein;
///
/// assert_eq!(levenshtein("cat", "bat"), 1);
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// ```
pub fn levenshtein(a: &str, b: &str) -> u32 {
    if a == b {
        return 0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    if short.is_empty() {
        return long.len() as u32;
    }

    // row[j] = cost of turning the first j chars of `short` into the prefix of `long` seen so far
    let mut row: Vec<u32> = (0..=short.len() as u32).collect();

    for (i, &lc) in long.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i as u32 + 1;
        for (j, &sc) in short.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if lc == sc {
                diagonal
            } else {
                1 + min(min(diagonal, row[j]), above)
            };
            diagonal = above;
        }
    }

    row[short.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn random_word(rng: &mut SmallRng) -> String {
        let len = rng.gen_range(0..7);
        (0..len)
            .map(|_| ['a', 'b', 'c', 'd'][rng.gen_range(0..4)])
            .collect()
    }

    // Full (|b|+1) x (|a|+1) table, used to check the single-row version.
    fn table_distance(a: &str, b: &str) -> u32 {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let mut cost = vec![vec![0u32; a.len() + 1]; b.len() + 1];
        for j in 0..=a.len() {
            cost[0][j] = j as u32;
        }
        for i in 0..=b.len() {
            cost[i][0] = i as u32;
        }
        for i in 1..=b.len() {
            for j in 1..=a.len() {
                cost[i][j] = if b[i - 1] == a[j - 1] {
                    cost[i - 1][j - 1]
                } else {
                    1 + cost[i - 1][j - 1].min(cost[i][j - 1]).min(cost[i - 1][j])
                };
            }
        }
        cost[b.len()][a.len()]
    }

    #[test]
    fn test_known_distances() {
        assert_eq!(levenshtein("cat", "cats"), 1);
        assert_eq!(levenshtein("cat", "bat"), 1);
        assert_eq!(levenshtein("cat", "bad"), 2);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("flaw", "lawn"), 2);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("", ""), 0);
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(levenshtein("Cat", "cat"), 1);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        assert_eq!(levenshtein("año", "ano"), 1);
        assert_eq!(levenshtein("日本", "日本語"), 1);
    }

    #[test]
    fn test_matches_full_table() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..500 {
            let a = random_word(&mut rng);
            let b = random_word(&mut rng);
            assert_eq!(levenshtein(&a, &b), table_distance(&a, &b), "{a:?} {b:?}");
        }
    }

    #[test]
    fn test_metric_properties() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..500 {
            let a = random_word(&mut rng);
            let b = random_word(&mut rng);
            let c = random_word(&mut rng);

            assert_eq!(levenshtein(&a, &b), levenshtein(&b, &a));
            assert_eq!(levenshtein(&a, &a), 0);
            assert_eq!(levenshtein(&a, &b) == 0, a == b);
            assert!(levenshtein(&a, &c) <= levenshtein(&a, &b) + levenshtein(&b, &c));
        }
    }

    #[test]
    fn test_closure_implements_metric() {
        let by_length = |a: &str, b: &str| a.len().abs_diff(b.len()) as u32;
        assert_eq!(by_length.distance("ab", "abcd"), 2);
        assert_eq!(Levenshtein.distance("ab", "abcd"), 2);
    }
}
