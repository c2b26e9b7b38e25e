//! End-to-end scenarios on small forests.
//!
//! Each module drives one realistic payload through several operations.

use arbora_core::*;
use serde_json::json;

mod walkthrough {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn map_push_address_dedup_remove() {
        let fields = FieldNames::DEFAULT;
        let mut forest = vec![json!({ "id": 1, "children": [{ "id": 2 }, { "id": 3 }] })];

        let ids = map_tree(&forest, |node| node["id"].clone(), &fields);
        assert_eq!(ids, vec![json!(1), json!(2), json!(3)]);

        assert!(push_tree(&mut forest, &json!(1), json!({ "id": 4 }), &fields));
        let children = forest[0]["children"].as_array().unwrap();
        assert_eq!(children.len(), 3);
        assert_eq!(children[2]["id"], 4);

        assert_eq!(at_tree(&forest, &json!(1), -1, &fields).unwrap()["id"], 4);
        assert_eq!(index_of_tree(&forest, &json!(3), &fields), Some(vec![0, 1]));
        assert!(at_index_of_tree(&forest, &[0, 1, 0], &fields).is_none());

        let duplicated = vec![json!({ "id": 1, "children": [{ "id": 2 }, { "id": 2 }] })];
        assert_eq!(
            dedup_tree(&duplicated, "id", &fields),
            vec![json!({ "id": 1, "children": [{ "id": 2 }] })]
        );

        let mut roots = vec![json!({ "id": 1 }), json!({ "id": 2 })];
        assert!(remove_tree(&mut roots, &json!(1), &fields));
        assert_eq!(roots, vec![json!({ "id": 2 })]);
    }
}

mod org_chart {
    use super::*;
    use pretty_assertions::assert_eq;

    fn org() -> Forest {
        vec![json!({
            "id": "ceo",
            "title": "Chief Executive",
            "children": [
                {
                    "id": "cto",
                    "title": "Chief Technology",
                    "children": [
                        { "id": "eng-1", "title": "Engineer" },
                        { "id": "eng-2", "title": "Engineer" }
                    ]
                },
                { "id": "cfo", "title": "Chief Finance", "children": [] }
            ]
        })]
    }

    #[test]
    fn reporting_lines() {
        let fields = FieldNames::DEFAULT;
        let org = org();

        assert_eq!(get_parent_tree(&org, &json!("eng-2"), &fields).unwrap()["id"], "cto");
        assert!(get_parent_tree(&org, &json!("ceo"), &fields).is_none());
        assert!(includes_tree(&org, &json!("ceo"), &fields));

        let chain: Vec<&str> = get_ancestors_tree(&org, &json!("eng-1"), &fields)
            .unwrap()
            .into_iter()
            .filter_map(|n| n["id"].as_str())
            .collect();
        assert_eq!(chain, vec!["ceo", "cto"]);

        let depths = node_depth_map(&org, &fields);
        assert_eq!(depths[&IdKey::from(json!("eng-1"))], 3);
        assert_eq!(depths[&IdKey::from(json!("cfo"))], 2);
    }

    #[test]
    fn reorganisation() {
        let fields = FieldNames::DEFAULT;
        let mut org = org();

        let moved = pop_tree(&mut org, &json!("cto"), &fields).unwrap();
        assert_eq!(moved["id"], "eng-2");
        assert!(unshift_tree(&mut org, &json!("cfo"), moved, &fields));
        assert_eq!(index_of_tree(&org, &json!("eng-2"), &fields), Some(vec![0, 1, 0]));

        let first = shift_tree(&mut org, &json!("cto"), &fields).unwrap();
        assert_eq!(first["id"], "eng-1");
        assert!(shift_tree(&mut org, &json!("cto"), &fields).is_none());

        let engineers = filter_tree(&org, |n, _| n["title"] == "Engineer", &fields);
        assert_eq!(engineers.len(), 1);
        assert!(is_multiple_trees(&serde_json::Value::Array(org), &fields));
    }
}

mod comment_thread {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn custom_field_names_end_to_end() {
        let fields =
            FieldNames::from_json(r#"{ "children": "replies", "id": "commentId" }"#).unwrap();
        let mut thread = vec![
            json!({
                "commentId": 0,
                "author": "ana",
                "replies": [{ "commentId": 1, "author": "bo" }]
            }),
            json!({ "commentId": 2, "author": "ana" }),
        ];

        let reply = json!({ "commentId": 3, "author": "cy" });
        assert!(push_tree(&mut thread, &json!(0), reply, &fields));
        assert_eq!(count_tree(&thread, &fields), 4);
        assert!(every_tree(&thread, |n| n["author"].is_string(), &fields));
        assert!(some_tree(&thread, |n| n["author"] == "cy", &fields));

        let first_per_author = dedup_tree(&thread, "author", &fields);
        let kept: Vec<&serde_json::Value> =
            map_tree(&first_per_author, |n| &n["commentId"], &fields);
        assert_eq!(kept, vec![&json!(0), &json!(1), &json!(3)]);

        let siblings = get_siblings_tree(&thread, &json!(1), &fields).unwrap();
        assert_eq!(siblings[0]["commentId"], 3);
        assert_eq!(get_children_tree(&thread, &json!(2), &fields), Some(&[][..]));
    }
}
