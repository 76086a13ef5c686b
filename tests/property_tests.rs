use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sainome::{
    mask_with_count, next_biased_long_in, next_binomial, next_int_in, next_long_in,
    next_windowed_pair, next_windowed_triple, sample_into, sample_with_probability,
    RandError, SampleAlgorithm, SamplingThresholds,
};

fn distinct(v: &[usize]) -> bool {
    let mut s = v.to_vec();
    s.sort_unstable();
    s.dedup();
    s.len() == v.len()
}

proptest! {
    #[test]
    fn prop_bounded_ints_stay_in_range(
        seed in any::<u64>(),
        origin in any::<i32>(),
        width in 1u32..=u32::MAX,
    ) {
        let bound = (i64::from(origin) + i64::from(width)).min(i64::from(i32::MAX)) as i32;
        prop_assume!(origin < bound);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for _ in 0..8 {
            let x = next_int_in(origin, bound, &mut rng).unwrap();
            prop_assert!(origin <= x && x < bound);
        }
    }

    #[test]
    fn prop_bounded_longs_stay_in_range(
        seed in any::<u64>(),
        a in any::<i64>(),
        b in any::<i64>(),
    ) {
        prop_assume!(a != b);
        let (origin, bound) = if a < b { (a, b) } else { (b, a) };
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let x = next_long_in(origin, bound, &mut rng).unwrap();
        prop_assert!(origin <= x && x < bound);
        let y = next_biased_long_in(origin, bound, &mut rng).unwrap();
        prop_assert!(origin <= y && y < bound);
    }

    #[test]
    fn prop_empty_range_is_rejected(origin in any::<i32>(), below in 0i32..1000) {
        let bound = origin.saturating_sub(below);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        prop_assert_eq!(
            next_int_in(origin, bound, &mut rng),
            Err(RandError::InvalidBound { origin: origin.into(), bound: bound.into() })
        );
    }
}

proptest! {
    #[test]
    fn prop_windowed_pairs_respect_the_window(
        seed in any::<u64>(),
        bound in 2u32..10_000,
        window_frac in 0.0f64..1.0,
    ) {
        let window = 1 + ((bound - 2) as f64 * window_frac) as u32;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let [a, b] = next_windowed_pair(bound, window, &mut rng).unwrap();
        prop_assert!(a != b);
        prop_assert!(a < bound && b < bound);
        prop_assert!(a.abs_diff(b) <= window);
    }

    #[test]
    fn prop_windowed_triples_respect_the_window(
        seed in any::<u64>(),
        bound in 3u32..10_000,
        window_frac in 0.0f64..1.0,
    ) {
        let window = 2 + ((bound - 3) as f64 * window_frac) as u32;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let t = next_windowed_triple(bound, window, &mut rng).unwrap();
        let mut s = t;
        s.sort_unstable();
        prop_assert!(s[0] < s[1] && s[1] < s[2]);
        prop_assert!(s[2] < bound);
        prop_assert!(s[2] - s[0] <= window);
    }
}

proptest! {
    #[test]
    fn prop_every_algorithm_samples_k_distinct(
        seed in any::<u64>(),
        n in 0usize..300,
        k_frac in 0.0f64..=1.0,
    ) {
        let k = (n as f64 * k_frac) as usize;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for algorithm in [
            SampleAlgorithm::Reservoir,
            SampleAlgorithm::Pool,
            SampleAlgorithm::Insertion,
            SampleAlgorithm::Auto,
        ] {
            let s = algorithm.sample(n, k, &mut rng).unwrap();
            prop_assert_eq!(s.len(), k);
            prop_assert!(s.iter().all(|&x| x < n));
            prop_assert!(distinct(&s));
        }
    }

    #[test]
    fn prop_into_returns_the_same_buffer(seed in any::<u64>(), n in 0usize..200, k in 0usize..50) {
        prop_assume!(k <= n);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut buf = vec![usize::MAX; k];
        let ptr = buf.as_ptr();
        let out = sample_into(n, &mut buf, &mut rng).unwrap();
        prop_assert_eq!(out.as_ptr(), ptr);
        prop_assert!(distinct(out));
    }

    #[test]
    fn prop_oversized_request_fails_before_writing(
        seed in any::<u64>(),
        n in 0usize..100,
        extra in 1usize..10,
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let before = rng.clone();
        let mut buf = vec![7usize; n + extra];
        prop_assert_eq!(
            sample_into(n, &mut buf, &mut rng),
            Err(RandError::InvalidSampleSize { n, k: n + extra })
        );
        prop_assert!(buf.iter().all(|&x| x == 7));
        prop_assert_eq!(rng, before);
    }

    #[test]
    fn prop_selection_never_returns_auto(
        n in 0usize..1_000_000,
        k_frac in 0.0f64..=1.0,
        factor in 0.0f64..100.0,
        fraction in 0.0f64..=1.0,
    ) {
        let k = (n as f64 * k_frac) as usize;
        let t = SamplingThresholds::default()
            .with_insertion_factor(factor)
            .with_pool_fraction(fraction);
        prop_assert_ne!(t.select(n, k), SampleAlgorithm::Auto);
    }
}

proptest! {
    #[test]
    fn prop_binomial_within_support(seed in any::<u64>(), n in 0u64..5_000, p in 0.0f64..=1.0) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let x = next_binomial(n, p, &mut rng).unwrap();
        prop_assert!(x <= n);
    }

    #[test]
    fn prop_probability_sampling_is_distinct(seed in any::<u64>(), n in 0usize..500, p in 0.0f64..=1.0) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let s = sample_with_probability(n, p, &mut rng).unwrap();
        prop_assert!(s.len() <= n);
        prop_assert!(s.iter().all(|&x| x < n));
        prop_assert!(distinct(&s));
    }

    #[test]
    fn prop_count_mask_has_k_trues(seed in any::<u64>(), n in 0usize..300, k_frac in 0.0f64..=1.0) {
        let k = (n as f64 * k_frac) as usize;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let m = mask_with_count(n, k, &mut rng).unwrap();
        prop_assert_eq!(m.len(), n);
        prop_assert_eq!(m.iter().filter(|&&b| b).count(), k);
    }
}
