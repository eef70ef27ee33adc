//! Property-based tests for the catalog and transactional insert
//!
//! These tests verify that:
//! - Table enumeration is a stable, repeatable snapshot
//! - Every committed insert with a fresh id adds exactly one row
//! - A rejected insert leaves the table exactly as it was

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use std::collections::BTreeSet;
    use tempfile::TempDir;

    use dbsession::core::db::{
        count_rows, create_table, fetch_person, insert_row, list_tables, ConnectionPool, Person,
        TxState, TEST_TABLE, TEST_TABLE_DDL,
    };
    use dbsession::{DatabaseConfig, SessionError};

    fn fresh_pool(dir: &TempDir) -> ConnectionPool {
        let pool =
            ConnectionPool::connect(&DatabaseConfig::with_path(dir.path().join("prop.sqlite")))
                .unwrap();
        create_table(&pool, TEST_TABLE_DDL).unwrap();
        pool
    }

    fn arb_person(id: i64) -> impl Strategy<Value = Person> {
        (
            "[A-Za-z]{1,25}",
            "[A-Za-z]{1,25}",
            "[0-9]{1,3} [A-Za-z ]{1,40}",
            "[a-z ]{0,200}",
        )
            .prop_map(move |(fname, lname, address, bio)| Person {
                id,
                fname,
                lname,
                address,
                bio,
            })
    }

    fn arb_table_names() -> impl Strategy<Value = BTreeSet<String>> {
        prop::collection::btree_set("t_[a-z]{1,12}", 0..6)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn list_tables_is_idempotent(names in arb_table_names()) {
            let dir = TempDir::new().unwrap();
            let pool = fresh_pool(&dir);
            for name in &names {
                create_table(&pool, &format!("CREATE TABLE {}(id INTEGER)", name)).unwrap();
            }

            let first = list_tables(&pool).unwrap();
            let second = list_tables(&pool).unwrap();
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first.len(), names.len() + 1);
            prop_assert_eq!(first[0].as_str(), TEST_TABLE);
            // Catalog order follows creation order
            let created: Vec<String> = names.iter().cloned().collect();
            prop_assert_eq!(&first[1..], &created[..]);
        }

        #[test]
        fn distinct_ids_each_add_one_row(ids in prop::collection::btree_set(any::<i64>(), 1..12)) {
            let dir = TempDir::new().unwrap();
            let pool = fresh_pool(&dir);

            for (n, id) in ids.iter().enumerate() {
                let person = Person::new(*id, "Humfried", "Ritelli", "6 Center Road", "bio");
                prop_assert_eq!(insert_row(&pool, &person).unwrap(), TxState::Committed);
                prop_assert_eq!(count_rows(&pool, TEST_TABLE).unwrap(), n as i64 + 1);
            }
        }

        #[test]
        fn duplicate_id_leaves_table_unchanged(
            original in arb_person(42),
            duplicate in arb_person(42),
        ) {
            let dir = TempDir::new().unwrap();
            let pool = fresh_pool(&dir);
            insert_row(&pool, &original).unwrap();

            let result = insert_row(&pool, &duplicate);
            prop_assert!(matches!(result, Err(SessionError::InsertRolledBack(_))));
            prop_assert_eq!(count_rows(&pool, TEST_TABLE).unwrap(), 1);
            prop_assert_eq!(fetch_person(&pool, 42).unwrap(), Some(original));
        }
    }
}
