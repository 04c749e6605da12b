// Tablet Pruning Scenario Tests
// End-to-end checks of hash-distribution pruning against the storage
// layer's reference workload: a 300-bucket table distributed by five
// columns, filtered by a mix of equality and IN predicates.

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, HashMap};

    use crate::metadata::{ColumnDef, DataType, TabletAssignment};
    use crate::planner::column_filter::{ColumnFilter, LiteralValue, PredicateOperand};
    use crate::planner::distribution_pruner::HashDistributionPruner;
    use crate::planner::hash_key::HashDistributionKey;

    const CEILING: usize = 100;

    fn string_value(s: &str) -> LiteralValue {
        LiteralValue::String(s.to_string())
    }

    fn string_values(values: &[&str]) -> Vec<LiteralValue> {
        values.iter().map(|s| string_value(s)).collect()
    }

    fn reference_columns() -> Vec<ColumnDef> {
        vec![
            ColumnDef::new("dealDate".to_string(), DataType::Date).not_null(),
            ColumnDef::new("main_brand_id".to_string(), DataType::Char { length: 16 }).not_null(),
            ColumnDef::new("item_third_cate_id".to_string(), DataType::Char { length: 16 })
                .not_null(),
            ColumnDef::new("channel".to_string(), DataType::Char { length: 16 }).not_null(),
            ColumnDef::new("shop_type".to_string(), DataType::Char { length: 16 }).not_null(),
        ]
    }

    fn reference_filters(shop_types: &[&str]) -> HashMap<String, ColumnFilter> {
        let mut filters = HashMap::new();
        filters.insert(
            "dealDate".to_string(),
            ColumnFilter::equal_to("dealDate", string_value("2019-08-22")),
        );
        filters.insert(
            "main_brand_id".to_string(),
            ColumnFilter::in_list(
                "main_brand_id",
                string_values(&["1323", "2528", "9610", "3893", "6121"]),
            ),
        );
        filters.insert(
            "item_third_cate_id".to_string(),
            ColumnFilter::in_list("item_third_cate_id", string_values(&["9719", "11163"])),
        );
        filters.insert(
            "channel".to_string(),
            ColumnFilter::in_list("channel", string_values(&["1", "3"])),
        );
        filters.insert(
            "shop_type".to_string(),
            ColumnFilter::in_list("shop_type", string_values(shop_types)),
        );
        filters
    }

    fn reference_assignment() -> TabletAssignment {
        TabletAssignment::from_tablet_ids((0..300).collect()).unwrap()
    }

    #[test]
    fn test_twenty_combinations_hit_twenty_tablets() {
        let columns = reference_columns();
        let assignment = reference_assignment();
        // 20 = 1 * 5 * 2 * 2 * 1 combinations, no collisions at 300 buckets
        let filters = reference_filters(&["2"]);

        let pruner = HashDistributionPruner::new(&columns, &filters, &assignment, CEILING);
        assert_eq!(pruner.prune().len(), 20);
    }

    #[test]
    fn test_forty_combinations_collide_to_thirty_nine() {
        let columns = reference_columns();
        let assignment = reference_assignment();
        // 40 = 1 * 5 * 2 * 2 * 2 combinations; one pair of combinations
        // hashes to the same bucket at this bucket count
        let filters = reference_filters(&["2", "4"]);

        let pruner = HashDistributionPruner::new(&columns, &filters, &assignment, CEILING);
        assert_eq!(pruner.prune().len(), 39);
    }

    #[test]
    fn test_over_ceiling_falls_back_to_all_tablets() {
        let columns = reference_columns();
        let assignment = reference_assignment();
        // 120 = 1 * 5 * 2 * 2 * 6 combinations > 100
        let filters = reference_filters(&["2", "4", "5", "6", "7", "8"]);

        let pruner = HashDistributionPruner::new(&columns, &filters, &assignment, CEILING);
        assert_eq!(pruner.prune().len(), 300);
    }

    #[test]
    fn test_widening_membership_never_shrinks_result() {
        let columns = reference_columns();
        let assignment = reference_assignment();

        let narrow = HashDistributionPruner::new(
            &columns,
            &reference_filters(&["2"]),
            &assignment,
            CEILING,
        )
        .prune();
        let wide = HashDistributionPruner::new(
            &columns,
            &reference_filters(&["2", "4"]),
            &assignment,
            CEILING,
        )
        .prune();

        assert!(narrow.is_subset(&wide));
        assert!(wide.len() <= 40);
        assert!(wide.len() <= assignment.tablet_count());
    }

    #[test]
    fn test_function_wrapped_filter_cannot_prune() {
        let columns = reference_columns();
        let assignment = reference_assignment();

        // abs(main_brand_id) IN (...) on an otherwise unconstrained table:
        // the operand is not a bare column, so nothing can be pruned
        let mut filters = HashMap::new();
        filters.insert(
            "main_brand_id".to_string(),
            ColumnFilter::In {
                operand: PredicateOperand::Function {
                    name: "abs".to_string(),
                    column: "main_brand_id".to_string(),
                },
                values: string_values(&["1323", "2528", "9610", "3893", "6121"]),
            },
        );

        let pruner = HashDistributionPruner::new(&columns, &filters, &assignment, CEILING);
        assert_eq!(pruner.prune().len(), 300);
    }

    #[test]
    fn test_all_singletons_enumerate_one_combination() {
        let columns = reference_columns();
        let assignment = reference_assignment();

        let mut filters = HashMap::new();
        for (column, value) in [
            ("dealDate", "2019-08-22"),
            ("main_brand_id", "1323"),
            ("item_third_cate_id", "9719"),
            ("channel", "1"),
            ("shop_type", "2"),
        ] {
            filters.insert(
                column.to_string(),
                ColumnFilter::equal_to(column, string_value(value)),
            );
        }

        let pruner = HashDistributionPruner::new(&columns, &filters, &assignment, CEILING);
        let result = pruner.prune();
        assert_eq!(result.len(), 1);
        // this exact combination hashes to bucket 200 under contract v1
        assert_eq!(result.into_iter().next(), Some(200));
    }

    // Cross-check the pruner against a hand-rolled nested-loop enumeration
    // of the same combinations, the way the storage layer would place them.
    #[test]
    fn test_enumeration_matches_manual_hash_walk() {
        let columns = reference_columns();
        let assignment = reference_assignment();
        let shop_types = ["2", "4"];

        let pruned = HashDistributionPruner::new(
            &columns,
            &reference_filters(&shop_types),
            &assignment,
            CEILING,
        )
        .prune();

        let mut expected = BTreeSet::new();
        let mut key = HashDistributionKey::new();
        key.push_column(string_value("2019-08-22"), DataType::Date);
        for brand in ["1323", "2528", "9610", "3893", "6121"] {
            key.push_column(string_value(brand), DataType::Char { length: 16 });
            for cate in ["9719", "11163"] {
                key.push_column(string_value(cate), DataType::Char { length: 16 });
                for channel in ["1", "3"] {
                    key.push_column(string_value(channel), DataType::Char { length: 16 });
                    for shop in shop_types {
                        key.push_column(string_value(shop), DataType::Char { length: 16 });
                        let bucket = key.hash_value() % assignment.bucket_count();
                        expected.insert(assignment.tablet_for_bucket(bucket).unwrap());
                        key.pop_column();
                    }
                    key.pop_column();
                }
                key.pop_column();
            }
            key.pop_column();
        }

        assert_eq!(expected.len(), 39);
        assert_eq!(pruned, expected);
    }
}
