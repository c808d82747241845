//! Numbering and export laws checked across generated declarations.

#![allow(clippy::unwrap_used)]

use docenum_core::{Declaration, DocEnum, FieldNames, Identity};
use proptest::prelude::*;

fn auto_items(count: usize) -> Vec<Declaration> {
    (0..count)
        .map(|k| Declaration::auto(format!("Item{k}"), format!("description {k}")))
        .collect()
}

proptest! {
    #[test]
    fn kth_auto_item_is_initial_plus_k(initial in -1_000_000i64..1_000_000, count in 0usize..40) {
        let table = DocEnum::builder("Generated")
            .initial_number(initial)
            .declarations(auto_items(count))
            .build()
            .unwrap();

        prop_assert_eq!(table.len(), count);
        for (k, member) in table.iter().enumerate() {
            prop_assert_eq!(member.value(), &Identity::Int(initial + k as i64));
        }
    }

    #[test]
    fn auto_item_after_explicit_continues_from_it(
        initial in 0i64..100,
        before in 0usize..10,
        explicit in 1_000i64..2_000,
    ) {
        let table = DocEnum::builder("Generated")
            .initial_number(initial)
            .declarations(auto_items(before))
            .explicit("Explicit", explicit, "explicit")
            .auto("After", "after")
            .build()
            .unwrap();

        prop_assert_eq!(table.get("Explicit").unwrap().value(), &Identity::Int(explicit));
        prop_assert_eq!(table.get("After").unwrap().value(), &Identity::Int(explicit + 1));
    }

    #[test]
    fn choices_follow_declaration_order(count in 0usize..40) {
        let table = DocEnum::builder("Generated")
            .declarations(auto_items(count))
            .build()
            .unwrap();

        let choices = table.list_choices();
        prop_assert_eq!(choices.len(), count);
        for (k, (value, doc)) in choices.iter().enumerate() {
            prop_assert_eq!(value, &Identity::Int(1 + k as i64));
            prop_assert_eq!(doc, &format!("description {k}"));
        }
    }

    #[test]
    fn to_dict_keys_match_configuration(
        name_key in "[a-z]{1,8}",
        value_key in "[A-Z]{1,8}",
        doc_key in "[0-9]{1,8}",
    ) {
        let table = DocEnum::builder("Keys")
            .field_names(FieldNames::new(&name_key, &value_key, &doc_key))
            .auto("Only", "only item")
            .build()
            .unwrap();

        let dict = table.get("Only").unwrap().to_dict();
        let mut keys: Vec<_> = dict.keys().cloned().collect();
        keys.sort();
        let mut expected = vec![name_key, value_key, doc_key];
        expected.sort();
        prop_assert_eq!(keys, expected);
    }
}
