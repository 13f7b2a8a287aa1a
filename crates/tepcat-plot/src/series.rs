use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

/// Same values in a reproducible random order.
pub fn shuffled(values: &[f64], seed: u64) -> Vec<f64> {
    let mut rng = ChaChaRng::seed_from_u64(seed);
    let mut out = values.to_vec();
    out.shuffle(&mut rng);
    out
}

pub fn sorted(values: &[f64]) -> Vec<f64> {
    let mut out = values.to_vec();
    out.sort_by(f64::total_cmp);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shuffle_is_a_seeded_permutation() {
        let values: Vec<f64> = (0..100).map(f64::from).collect();
        let first = shuffled(&values, 7);
        assert_eq!(first, shuffled(&values, 7));
        assert_ne!(first, values);
        assert_eq!(sorted(&first), values);
    }

    #[test]
    fn sorted_is_ascending_and_leaves_input() {
        let values = vec![3.5, 0.8, 12.0, 1.2];
        assert_eq!(sorted(&values), vec![0.8, 1.2, 3.5, 12.0]);
        assert_eq!(values, vec![3.5, 0.8, 12.0, 1.2]);
    }
}
