//! Register store properties

use proptest::prelude::*;
use urm_spec::RegisterStore;

#[derive(Debug, Clone)]
enum Access {
    Read(u64),
    Write(u64, u64),
}

fn arb_access() -> impl Strategy<Value = Access> {
    prop_oneof![
        (0u64..32).prop_map(Access::Read),
        (0u64..32, any::<u64>()).prop_map(|(index, value)| Access::Write(index, value)),
    ]
}

proptest! {
    #[test]
    fn test_every_accessed_register_is_dumped(accesses in proptest::collection::vec(arb_access(), 0..64)) {
        let mut store = RegisterStore::new();
        let mut touched = std::collections::BTreeSet::new();

        for access in &accesses {
            match *access {
                Access::Read(index) => {
                    store.read(index);
                    touched.insert(index);
                }
                Access::Write(index, value) => {
                    store.write(index, value);
                    touched.insert(index);
                }
            }
        }

        let dumped: Vec<u64> = store.iter().map(|(index, _)| index).collect();
        prop_assert_eq!(dumped, touched.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_read_returns_last_write(index in any::<u64>(), values in proptest::collection::vec(any::<u64>(), 1..8)) {
        let mut store = RegisterStore::new();
        for value in &values {
            store.write(index, *value);
        }
        prop_assert_eq!(store.read(index), *values.last().unwrap());
    }

    #[test]
    fn test_unwritten_registers_read_zero(index in any::<u64>()) {
        let mut store = RegisterStore::new();
        prop_assert_eq!(store.read(index), 0);
        prop_assert_eq!(store.get(index), Some(0));
    }
}
