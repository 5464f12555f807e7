use proptest::prelude::*;
use serde_json::{Value, json};

use coursecheck::course::conventions::{IndexSequence, check_index_sequence};

fn indices(values: &[Value]) -> Vec<Option<&Value>> {
    values.iter().map(Some).collect()
}

proptest! {
    #[test]
    fn test_one_based_indices_are_sequential(n in 1usize..40) {
        let values: Vec<Value> = (1..=n).map(|i| json!(i)).collect();
        prop_assert_eq!(check_index_sequence(&indices(&values)), IndexSequence::Sequential);
    }

    #[test]
    fn test_swapping_two_indices_breaks_sequence(n in 2usize..40, a in 0usize..40, b in 0usize..40) {
        let (a, b) = (a % n, b % n);
        prop_assume!(a != b);

        let mut values: Vec<Value> = (1..=n).map(|i| json!(i)).collect();
        values.swap(a, b);

        let outcome = check_index_sequence(&indices(&values));
        let is_out_of_order = matches!(outcome, IndexSequence::OutOfOrder { .. });
        prop_assert!(is_out_of_order);
    }

    #[test]
    fn test_any_missing_index_is_undeclared(n in 1usize..20, missing in 0usize..20) {
        let values: Vec<Value> = (1..=n).map(|i| json!(i)).collect();
        let mut declared = indices(&values);
        declared[missing % n] = None;
        prop_assert_eq!(check_index_sequence(&declared), IndexSequence::Undeclared);
    }
}
