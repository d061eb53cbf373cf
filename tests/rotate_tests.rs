use rotsort::rotate;

#[test]
fn test_rotate_every_count_and_amount() {
    for count in 0..=40usize {
        for amount in 0..count.max(1) {
            let mut input: Vec<usize> = (0..count).collect();
            rotate(&mut input, 0, count, amount);

            let expected: Vec<usize> = (0..count).map(|i| (i + amount) % count).collect();
            assert_eq!(input, expected, "count {count}, amount {amount}");
        }
    }
}

#[test]
fn test_rotate_inverse_restores_range() {
    let original: Vec<u32> = (0..64).map(|i| i * 7 + 3).collect();

    for from in [0usize, 1, 13] {
        for to in [from, from + 1, 40, 64] {
            let count = to - from;
            for amount in 0..count.max(1) {
                let mut input = original.clone();
                rotate(&mut input, from, to, amount);
                rotate(&mut input, from, to, (count - amount) % count.max(1));
                assert_eq!(input, original, "range {from}..{to}, amount {amount}");
            }
        }
    }
}

#[test]
fn test_rotate_leaves_outside_untouched() {
    let mut input: Vec<i32> = (0..20).collect();
    rotate(&mut input, 5, 15, 4);

    assert_eq!(&input[..5], &[0, 1, 2, 3, 4]);
    assert_eq!(&input[5..15], &[9, 10, 11, 12, 13, 14, 5, 6, 7, 8]);
    assert_eq!(&input[15..], &[15, 16, 17, 18, 19]);
}

#[test]
fn test_rotate_boxed_values() {
    // Every element is moved exactly once per cycle; a double move would double-free.
    for (count, amount) in [(12usize, 8usize), (9, 6), (7, 3), (30, 1), (30, 29)] {
        let mut input: Vec<Box<usize>> = (0..count).map(Box::new).collect();
        rotate(&mut input, 0, count, amount);

        let values: Vec<usize> = input.iter().map(|b| **b).collect();
        let expected: Vec<usize> = (0..count).map(|i| (i + amount) % count).collect();
        assert_eq!(values, expected);
    }
}
