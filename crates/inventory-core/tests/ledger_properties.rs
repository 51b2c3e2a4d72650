use std::collections::BTreeMap;

use inventory_core::{ErrorKind, InventoryLedger};
use proptest::prelude::*;

fn item_name() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["apple", "banana", "cherry", "date"]).prop_map(String::from)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Property: final stock per name equals the sum of quantities added under it.
    #[test]
    fn stock_equals_sum_of_adds(
        adds in prop::collection::vec((item_name(), 0i64..10_000), 0..50)
    ) {
        let mut ledger = InventoryLedger::new();
        let mut expected: BTreeMap<String, u64> = BTreeMap::new();

        for (name, qty) in &adds {
            ledger.add_item(name, *qty).unwrap();
            *expected.entry(name.clone()).or_insert(0) += *qty as u64;
        }

        prop_assert_eq!(ledger.stock(), &expected);
        prop_assert_eq!(ledger.log().len(), adds.len());
    }

    /// Property: a removal either subtracts exactly or fails leaving stock unchanged.
    #[test]
    fn removal_subtracts_or_rejects(initial in 0i64..1_000, remove in 0i64..2_000) {
        let mut ledger = InventoryLedger::new();
        ledger.add_item("apple", initial).unwrap();
        let previous = ledger.get_quantity("apple").unwrap();

        match ledger.remove_item("apple", remove) {
            Ok(_) => {
                prop_assert!(remove as u64 <= previous);
                prop_assert_eq!(ledger.get_quantity("apple").unwrap(), previous - remove as u64);
                prop_assert_eq!(ledger.log().len(), 2);
            }
            Err(err) => {
                prop_assert!(remove as u64 > previous);
                prop_assert_eq!(err.kind(), ErrorKind::Value);
                prop_assert_eq!(ledger.get_quantity("apple").unwrap(), previous);
                prop_assert_eq!(ledger.log().len(), 1);
            }
        }
    }

    /// Property: negative quantities never change stock or log.
    #[test]
    fn negative_quantities_are_rejected(qty in i64::MIN..0) {
        let mut ledger = InventoryLedger::new();
        ledger.add_item("apple", 5).unwrap();
        let before = ledger.clone();

        prop_assert_eq!(ledger.add_item("apple", qty).unwrap_err().kind(), ErrorKind::Value);
        prop_assert_eq!(ledger.remove_item("apple", qty).unwrap_err().kind(), ErrorKind::Value);
        prop_assert_eq!(ledger, before);
    }
}

#[test]
fn test_mutating_one_ledger_leaves_another_untouched() {
    let mut first = InventoryLedger::new();
    let mut second = InventoryLedger::new();
    second.add_item("pear", 2).unwrap();
    let snapshot = second.clone();

    first.add_item("apple", 10).unwrap();
    first.remove_item("apple", 4).unwrap();
    let _ = first.remove_item("pear", 1);

    assert_eq!(second, snapshot);
    assert_eq!(second.log().len(), 1);
    assert!(!first.contains("pear"));
}

#[test]
fn test_failed_query_does_not_touch_stock() {
    let mut ledger = InventoryLedger::new();
    ledger.add_item("apple", 1).unwrap();

    let err = ledger.get_quantity("ghost").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Key);
    assert!(err.to_string().contains("ghost"));
    assert_eq!(ledger.len(), 1);
    assert!(!ledger.contains("ghost"));
}
