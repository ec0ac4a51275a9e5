//! Tests for longer edit sequences over nested collections
//!
//! This tests:
//! - Building a nested tree from schema defaults
//! - Positional identity after removals
//! - Observer notification count per edit

use blockgate_common::{AttributeTree, AttributeValue, MediaRef, Record, TreePath};
use blockgate_editor::{AttributeStore, Edit, StoreObserver};
use blockgate_schema::builtin;
use proptest::prelude::*;

#[derive(Default)]
struct Counter(u64);

impl StoreObserver for Counter {
    fn tree_replaced(&mut self, _tree: &AttributeTree, _version: u64) {
        self.0 += 1;
    }
}

fn text_at(tree: &AttributeTree, path: &str) -> String {
    tree.value_at(&TreePath::parse(path).unwrap())
        .and_then(AttributeValue::as_text)
        .unwrap_or_default()
        .to_string()
}

#[test]
fn test_build_experience_from_defaults() {
    let schema = builtin::experience();
    let mut store = AttributeStore::new(schema.default_tree(), Counter::default());

    let jobs = TreePath::field("jobs");
    let job = schema.default_record(&jobs).unwrap();
    store.edit().append(&jobs, job.clone()).unwrap();
    store.edit().append(&jobs, job).unwrap();

    let projects = TreePath::parse("jobs[1].projects").unwrap();
    let project = schema.default_record(&projects).unwrap();
    store.edit().append(&projects, project).unwrap();
    store
        .edit()
        .update_at(&projects, 0, "image", MediaRef::new("p.png", "").into())
        .unwrap();
    store
        .edit()
        .set_field(&TreePath::parse("jobs[1].title").unwrap(), "Lead".into())
        .unwrap();

    let tree = store.get();
    assert_eq!(text_at(&tree, "jobs[1].title"), "Lead");
    assert_eq!(text_at(&tree, "jobs[0].title"), "");
    assert!(tree.list_at(&TreePath::parse("jobs[0].projects").unwrap()).unwrap().is_empty());
    let image = tree
        .value_at(&TreePath::parse("jobs[1].projects[0].image").unwrap())
        .and_then(AttributeValue::as_media)
        .unwrap();
    assert_eq!(image.url, "p.png");

    // Initial notification plus one per edit
    assert_eq!(store.observer().0, 6);
}

#[test]
fn test_removing_a_job_renumbers_its_successors() {
    let jobs: Vec<Record> = ["a", "b", "c"]
        .iter()
        .map(|title| Record::new().with("title", *title).with("projects", Vec::<Record>::new()))
        .collect();
    let mut store = AttributeStore::new(Record::new().with("jobs", jobs), ());

    store
        .apply(&Edit::RemoveAt {
            path: TreePath::field("jobs"),
            position: 1,
        })
        .unwrap();

    // What used to be jobs[2] now answers to jobs[1]
    assert_eq!(text_at(store.tree(), "jobs[0].title"), "a");
    assert_eq!(text_at(store.tree(), "jobs[1].title"), "c");
    assert!(store
        .tree()
        .record_at(&TreePath::parse("jobs[2]").unwrap())
        .is_none());
}

#[test]
fn test_edit_script_from_json() {
    let script = r#"[
        { "op": "append", "path": "slides", "record": { "text": "", "highlighted": false } },
        { "op": "append", "path": "slides", "record": { "text": "", "highlighted": false } },
        { "op": "updateAt", "path": "slides", "position": 1, "field": "text", "value": "Second" },
        { "op": "removeAt", "path": "slides", "position": 0 },
        { "op": "setField", "path": "details.image", "value": { "url": "me.jpg", "alt": "" } }
    ]"#;
    let edits: Vec<Edit> = serde_json::from_str(script).unwrap();

    let mut store = AttributeStore::new(builtin::contacts().default_tree(), ());
    for edit in &edits {
        store.apply(edit).unwrap();
    }

    let slides = store.tree().list_at(&TreePath::field("slides")).unwrap();
    assert_eq!(slides.len(), 1);
    assert_eq!(slides[0].get("text"), Some(&AttributeValue::from("Second")));
    assert_eq!(store.version(), edits.len() as u64);
}

proptest! {
    #[test]
    fn prop_remove_shifts_only_later_positions(len in 1usize..12, pick in 0usize..12) {
        let k = pick % len;
        let items: Vec<Record> = (0..len)
            .map(|i| Record::new().with("text", format!("item-{}", i)))
            .collect();
        let mut store = AttributeStore::new(Record::new().with("items", items.clone()), ());

        store.edit().remove_at(&TreePath::field("items"), k).unwrap();

        let after = store.tree().list_at(&TreePath::field("items")).unwrap();
        prop_assert_eq!(after.len(), len - 1);
        for i in 0..k {
            prop_assert_eq!(&after[i], &items[i]);
        }
        for i in k..len - 1 {
            prop_assert_eq!(&after[i], &items[i + 1]);
        }
    }
}
