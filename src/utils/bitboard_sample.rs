use rand::{rngs::StdRng, Rng, SeedableRng};

/// Draw `count` bitboards from a generator seeded with `seed`.
///
/// Each value is the AND of two draws, which gives roughly quarter-density
/// boards that read more like real occupancy than uniform noise does.
pub fn sample_bitboards(count: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| rng.random::<u64>() & rng.random::<u64>())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::sample_bitboards;

    #[test]
    fn same_seed_gives_same_boards() {
        let first = sample_bitboards(16, 1234);
        assert_eq!(first.len(), 16);
        assert_eq!(first, sample_bitboards(16, 1234));
        assert_ne!(first, sample_bitboards(16, 1235));
    }

    #[test]
    fn zero_count_is_empty() {
        assert!(sample_bitboards(0, 7).is_empty());
    }
}
