use proptest::{collection::vec, prelude::*};
use rotsort::radix::{float_from_key, float_key, signed_from_key, signed_key};
use rotsort::{
    binary_search, heap_sort, heapify, intro_sort, is_heap, is_sorted, is_sorted_by_key,
    lower_bound, merge_by_key, radix_sort_32, rotate, stable_sort, stable_sort_by_key,
    upper_bound,
};

prop_compose! {
    fn short_vec()(batch in vec(any::<u32>(), 0..30)) -> Vec<u32> {
        batch
    }
}

prop_compose! {
    fn long_vec()(batch in vec(any::<u32>(), 0..300)) -> Vec<u32> {
        batch
    }
}

// Few distinct keys so that stability is actually exercised.
prop_compose! {
    fn keyed_vec()(keys in vec(0u8..6, 0..200)) -> Vec<(u8, usize)> {
        keys.into_iter().enumerate().map(|(i, k)| (k, i)).collect()
    }
}

prop_compose! {
    fn rotation()(len in 0usize..64)
        (v in vec(any::<i16>(), len), from in 0..=len, to in 0..=len, amount in 0..=len)
        -> (Vec<i16>, usize, usize, usize) {
        let (from, to) = if from <= to { (from, to) } else { (to, from) };
        let count = to - from;
        (v, from, to, if count == 0 { 0 } else { amount % count })
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(10000))]

    #[test]
    fn stable_sort_small_proptest(mut v in short_vec()) {
        let mut expected = v.clone();
        expected.sort();

        stable_sort(&mut v);
        prop_assert_eq!(v, expected);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn stable_sort_large_proptest(mut v in long_vec()) {
        let mut expected = v.clone();
        expected.sort();

        stable_sort(&mut v);
        prop_assert!(is_sorted(&v));
        prop_assert_eq!(v, expected);
    }

    #[test]
    fn stable_sort_keeps_equal_keys_in_order(mut v in keyed_vec()) {
        stable_sort_by_key(&mut v, |p| p.0);

        prop_assert!(is_sorted_by_key(&v, |p| p.0));
        for pair in v.windows(2) {
            if pair[0].0 == pair[1].0 {
                prop_assert!(pair[0].1 < pair[1].1, "{:?} overtook {:?}", pair[1], pair[0]);
            }
        }
    }

    #[test]
    fn merge_of_sorted_runs(mut left in keyed_vec(), mut right in keyed_vec()) {
        left.sort_by_key(|p| p.0);
        right.sort_by_key(|p| p.0);
        let mid = left.len();

        // Tag each element with its run so ties can be checked.
        let mut v: Vec<(u8, usize, bool)> = left
            .iter()
            .map(|&(k, i)| (k, i, false))
            .chain(right.iter().map(|&(k, i)| (k, i, true)))
            .collect();
        let mut expected = v.clone();
        expected.sort_by_key(|p| p.0);

        merge_by_key(&mut v, mid, |p| p.0);
        prop_assert_eq!(v, expected);
    }

    #[test]
    fn bounds_count_smaller_elements(
        mut v in long_vec(),
        probe in any::<u32>(),
        pick in any::<prop::sample::Index>()
    ) {
        v.sort();
        let value = if v.is_empty() || probe % 2 == 0 { probe } else { v[pick.index(v.len())] };

        prop_assert_eq!(lower_bound(&v, &value), v.iter().filter(|&&x| x < value).count());
        prop_assert_eq!(upper_bound(&v, &value), v.iter().filter(|&&x| x <= value).count());
        match binary_search(&v, &value) {
            Some(index) => prop_assert_eq!(v[index], value),
            None => prop_assert!(!v.contains(&value)),
        }
    }

    #[test]
    fn rotate_then_inverse_restores((mut v, from, to, amount) in rotation()) {
        let original = v.clone();
        let count = to - from;

        rotate(&mut v, from, to, amount);
        let mut expected = original.clone();
        expected[from..to].rotate_left(amount);
        prop_assert_eq!(&v, &expected);

        let inverse = if count == 0 { 0 } else { (count - amount) % count };
        rotate(&mut v, from, to, inverse);
        prop_assert_eq!(v, original);
    }

    #[test]
    fn radix_sort_agrees_with_stable_sort(v in long_vec()) {
        let mut src = v.clone();
        let mut dst = vec![0u32; v.len()];
        radix_sort_32(&mut dst, &mut src, |&x| x);

        let mut expected = v;
        stable_sort(&mut expected);
        prop_assert_eq!(dst, expected);
    }

    #[test]
    fn radix_sort_signed_and_float_keys(v in vec(any::<i32>(), 0..200)) {
        let mut src = v.clone();
        let mut dst = vec![0i32; v.len()];
        radix_sort_32(&mut dst, &mut src, |&x| signed_key(x));

        let mut expected = v.clone();
        expected.sort();
        prop_assert_eq!(&dst, &expected);

        let floats: Vec<f32> = v.iter().map(|&x| x as f32 / 7.0).collect();
        let mut src = floats.clone();
        let mut dst = vec![0f32; floats.len()];
        radix_sort_32(&mut dst, &mut src, |&x| float_key(x));

        let mut expected = floats;
        expected.sort_by(|a, b| a.total_cmp(b));
        prop_assert_eq!(dst, expected);
    }

    #[test]
    fn key_adapters_round_trip(x in any::<i32>(), f in any::<f32>()) {
        prop_assert_eq!(signed_from_key(signed_key(x)), x);
        prop_assert_eq!(float_from_key(float_key(f)).to_bits(), f.to_bits());
    }

    #[test]
    fn unstable_sorts_permute_into_order(v in long_vec()) {
        let mut expected = v.clone();
        expected.sort();

        let mut intro = v.clone();
        intro_sort(&mut intro);
        prop_assert!(is_sorted(&intro));
        prop_assert_eq!(&intro, &expected);

        let mut heap = v.clone();
        heap_sort(&mut heap);
        prop_assert_eq!(&heap, &expected);

        let mut heaped = v;
        heapify(&mut heaped);
        prop_assert!(is_heap(&heaped));
    }
}
