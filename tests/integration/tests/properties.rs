//! Property tests over generated forests.
//!
//! Ids are drawn from a small range so that duplicates, misses and deep
//! matches all show up regularly.

use arbora_core::*;
use proptest::prelude::*;
use serde_json::json;

const MAX_ID: i64 = 12;

fn node_strategy() -> impl Strategy<Value = Node> {
    let leaf = prop_oneof![
        (0..MAX_ID).prop_map(|id| json!({ "id": id })),
        (0..MAX_ID).prop_map(|id| json!({ "id": id, "children": [] })),
        (0..MAX_ID).prop_map(|id| json!({ "id": id, "children": "leaf" })),
    ];
    leaf.prop_recursive(4, 48, 4, |inner| {
        (0..MAX_ID, prop::collection::vec(inner, 0..4))
            .prop_map(|(id, children)| json!({ "id": id, "children": children }))
    })
}

fn forest_strategy() -> impl Strategy<Value = Forest> {
    prop::collection::vec(node_strategy(), 0..4)
}

fn id_strategy() -> impl Strategy<Value = Node> {
    (0..MAX_ID + 2).prop_map(|id| json!(id))
}

proptest! {
    #[test]
    fn includes_agrees_with_find(forest in forest_strategy(), target in id_strategy()) {
        let fields = FieldNames::DEFAULT;
        let found = find_tree(&forest, |n| fields.has_id(n, &target), &fields);
        prop_assert_eq!(includes_tree(&forest, &target, &fields), found.is_some());
    }

    #[test]
    fn index_path_resolves_to_found_node(forest in forest_strategy(), target in id_strategy()) {
        let fields = FieldNames::DEFAULT;
        let found = find_tree(&forest, |n| fields.has_id(n, &target), &fields);
        let resolved = index_of_tree(&forest, &target, &fields)
            .and_then(|path| at_index_of_tree(&forest, &path, &fields));

        match (found, resolved) {
            (Some(found), Some(resolved)) => prop_assert!(std::ptr::eq(found, resolved)),
            (None, None) => {}
            (found, resolved) => prop_assert!(false, "find {:?} vs path {:?}", found, resolved),
        }
    }

    #[test]
    fn map_length_matches_for_each_calls(forest in forest_strategy()) {
        let fields = FieldNames::DEFAULT;
        let mut calls = 0;
        for_each_tree(&forest, |_| calls += 1, &fields);

        prop_assert_eq!(map_tree(&forest, |n| n.clone(), &fields).len(), calls);
        prop_assert_eq!(count_tree(&forest, &fields), calls);
    }

    #[test]
    fn dedup_is_idempotent(forest in forest_strategy()) {
        let fields = FieldNames::DEFAULT;
        let once = dedup_tree(&forest, "id", &fields);
        let twice = dedup_tree(&once, "id", &fields);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn dedup_leaves_unique_ids(forest in forest_strategy()) {
        let fields = FieldNames::DEFAULT;
        let deduped = dedup_tree(&forest, "id", &fields);
        let ids = map_tree(&deduped, |n| IdKey::from(&n["id"]), &fields);
        let unique: std::collections::HashSet<_> = ids.iter().collect();
        prop_assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn negative_index_matches_last(forest in forest_strategy(), target in id_strategy()) {
        let fields = FieldNames::DEFAULT;
        let len = get_children_tree(&forest, &target, &fields).map_or(0, <[Node]>::len);
        let last = at_tree(&forest, &target, -1, &fields);
        let by_len = (len as isize)
            .checked_sub(1)
            .and_then(|i| at_tree(&forest, &target, i, &fields));

        match (last, by_len) {
            (Some(a), Some(b)) => prop_assert!(std::ptr::eq(a, b)),
            (None, None) => {}
            (a, b) => prop_assert!(false, "at(-1) {:?} vs at(len - 1) {:?}", a, b),
        }
    }

    #[test]
    fn single_tree_implies_multiple_trees(node in node_strategy()) {
        let fields = FieldNames::DEFAULT;
        if is_single_tree(&node, &fields) {
            prop_assert!(is_multiple_trees(&json!([node]), &fields));
        }
    }

    #[test]
    fn remove_drops_first_occurrence(mut forest in forest_strategy(), target in id_strategy()) {
        let fields = FieldNames::DEFAULT;
        let before = count_tree(&forest, &fields);
        let subtree = index_of_tree(&forest, &target, &fields)
            .and_then(|path| at_index_of_tree(&forest, &path, &fields))
            .map(|node| count_tree(std::slice::from_ref(node), &fields));

        prop_assert_eq!(remove_tree(&mut forest, &target, &fields), subtree.is_some());
        prop_assert_eq!(count_tree(&forest, &fields), before - subtree.unwrap_or(0));
    }

    #[test]
    fn depth_agrees_with_path_length(forest in forest_strategy(), target in id_strategy()) {
        let fields = FieldNames::DEFAULT;
        let depth = get_node_depth(&forest, &target, &fields);
        let path_len = index_of_tree(&forest, &target, &fields).map(|p| p.len());
        prop_assert_eq!(depth, path_len);

        let ancestors = get_ancestors_tree(&forest, &target, &fields).map(|a| a.len() + 1);
        prop_assert_eq!(ancestors, depth);
    }
}
