use rand::seq::SliceRandom;
use rand::Rng;

/// Uniformly shuffles `items` and keeps the first `count`.
///
/// Sampling is without replacement, so the result never repeats an item and
/// holds `min(count, items.len())` entries.
pub fn sample<T, R: Rng + ?Sized>(mut items: Vec<T>, count: usize, rng: &mut R) -> Vec<T> {
    items.shuffle(rng);
    items.truncate(count);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::{HashMap, HashSet};

    #[test]
    fn test_takes_three_distinct() {
        let mut rng = StdRng::seed_from_u64(42);
        let picked = sample(vec!['A', 'B', 'C', 'D', 'E'], 3, &mut rng);

        assert_eq!(picked.len(), 3);
        let unique: HashSet<char> = picked.iter().copied().collect();
        assert_eq!(unique.len(), 3);
        assert!(picked.iter().all(|c| "ABCDE".contains(*c)));
    }

    #[test]
    fn test_fewer_items_than_count() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut picked = sample(vec![1, 2], 3, &mut rng);
        picked.sort();
        assert_eq!(picked, vec![1, 2]);

        assert!(sample(Vec::<u8>::new(), 3, &mut rng).is_empty());
    }

    #[test]
    fn test_same_seed_same_sample() {
        let a = sample((0..10).collect(), 3, &mut StdRng::seed_from_u64(1));
        let b = sample((0..10).collect(), 3, &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }

    #[test]
    fn test_membership_varies_across_runs() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            let mut picked = sample(vec!['A', 'B', 'C', 'D', 'E'], 3, &mut rng);
            picked.sort();
            seen.insert(picked);
        }
        // C(5,3) = 10 個組合都應該出現
        assert_eq!(seen.len(), 10);
    }

    #[test]
    fn test_permutations_are_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut counts: HashMap<Vec<u8>, usize> = HashMap::new();
        let runs = 6000;
        for _ in 0..runs {
            *counts.entry(sample(vec![1, 2, 3], 3, &mut rng)).or_default() += 1;
        }

        assert_eq!(counts.len(), 6);
        for (perm, n) in counts {
            assert!((800..=1200).contains(&n), "permutation {perm:?} seen {n} times");
        }
    }
}
