/// Checks whether `needle` is contained in `haystack` counting repetitions.
/// For example, `[2, 2, 3]` is contained in `[1, 2, 5, 2, 3, 1]` but not in
/// `[1, 2, 4, 3, 1]`.
pub fn is_sub_multiset(needle: &[i64], haystack: &[i64]) -> bool {
    let mut remaining = haystack.to_vec();

    for &num in needle {
        match remaining.iter().position(|&n| n == num) {
            Some(idx) => {
                remaining.swap_remove(idx);
            }
            None => return false,
        }
    }

    true
}
