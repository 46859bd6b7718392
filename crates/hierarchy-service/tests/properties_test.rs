//! Property checks for the query and move engines.

mod helpers;

use helpers::{from_parents, org, other_org};
use hierarchy_entity::folder::Folder;
use hierarchy_service::{HierarchyError, HierarchyStore, PathCodec};
use proptest::prelude::*;
use proptest::sample::Index;

/// Parent links for a forest of up to `max` folders.
fn forest(max: usize) -> impl Strategy<Value = Vec<Option<usize>>> {
    (1..=max).prop_flat_map(|len| {
        (0..len)
            .map(|idx| {
                if idx == 0 {
                    Just(None).boxed()
                } else {
                    proptest::option::of(0..idx).boxed()
                }
            })
            .collect::<Vec<_>>()
    })
}

/// Alternates records from both tenants, then appends the leftovers.
fn interleave(ours: Vec<Folder>, theirs: Vec<Folder>) -> Vec<Folder> {
    let mut mixed = Vec::with_capacity(ours.len() + theirs.len());
    let mut theirs = theirs.into_iter();
    for folder in ours {
        mixed.push(folder);
        mixed.extend(theirs.next());
    }
    mixed.extend(theirs);
    mixed
}

fn is_below(path: &str, ancestor: &str) -> bool {
    path.strip_prefix(ancestor)
        .is_some_and(|rest| rest.starts_with('.'))
}

proptest! {
    #[test]
    fn org_filter_is_exact_subset(ours in forest(12), theirs in forest(12)) {
        let folders = interleave(from_parents(org(), &ours), from_parents(other_org(), &theirs));
        let store = HierarchyStore::new(folders.clone());

        let expected: Vec<Folder> = folders
            .iter()
            .filter(|f| f.organization_id == org())
            .cloned()
            .collect();
        prop_assert_eq!(store.get_folders_by_org_id(org()), expected);
    }

    #[test]
    fn children_stay_in_org_without_duplicates(
        ours in forest(12),
        theirs in forest(12),
        pick in any::<Index>(),
    ) {
        let mine = from_parents(org(), &ours);
        let anchor = mine[pick.index(mine.len())].clone();
        let store = HierarchyStore::new(interleave(mine, from_parents(other_org(), &theirs)));

        let children = store
            .get_all_child_folders(org(), &anchor.name)
            .expect("anchor exists in org");

        let mut paths: Vec<&str> = children.iter().map(|f| f.path.as_str()).collect();
        let total = paths.len();
        paths.sort_unstable();
        paths.dedup();
        prop_assert_eq!(paths.len(), total);

        for child in &children {
            prop_assert_eq!(child.organization_id, org());
            prop_assert!(is_below(&child.path, &anchor.path));
        }
    }

    #[test]
    fn self_move_always_rejected(parents in forest(10), pick in any::<Index>()) {
        let folders = from_parents(org(), &parents);
        let name = folders[pick.index(folders.len())].name.clone();
        let store = HierarchyStore::new(folders);

        prop_assert_eq!(
            store.move_folder(&name, &name),
            Err(HierarchyError::SelfMove { name: name.clone() })
        );
    }

    #[test]
    fn move_relocates_subtree_consistently(
        parents in forest(12),
        from in any::<Index>(),
        to in any::<Index>(),
    ) {
        let folders = from_parents(org(), &parents);
        let source = folders[from.index(folders.len())].clone();
        let target = folders[to.index(folders.len())].clone();
        prop_assume!(source.name != target.name);

        let store = HierarchyStore::new(folders.clone());
        let result = store.move_folder(&source.name, &target.name);

        if is_below(&target.path, &source.path) {
            prop_assert!(
                matches!(result, Err(HierarchyError::CyclicMove { .. })),
                "expected cyclic move error"
            );
            return Ok(());
        }

        let moved = result.expect("legal move");
        prop_assert_eq!(moved.len(), folders.len());

        let codec = PathCodec::default();
        let new_root = codec.join(&target.path, &source.name);
        for (before, after) in folders.iter().zip(&moved) {
            prop_assert_eq!(&before.name, &after.name);
            prop_assert_eq!(before.organization_id, after.organization_id);

            if before.name == source.name || is_below(&before.path, &source.path) {
                let suffix = codec.relative_suffix(&before.path, &source.path);
                prop_assert_eq!(codec.relative_suffix(&after.path, &new_root), suffix);
                prop_assert_eq!(&after.path, &format!("{new_root}{suffix}"));
            } else {
                prop_assert_eq!(before, after);
            }
        }

        let before_children: Vec<String> = store
            .get_all_child_folders(org(), &source.name)
            .expect("source exists")
            .into_iter()
            .map(|f| f.name)
            .collect();
        let after_children: Vec<String> = HierarchyStore::new(moved)
            .get_all_child_folders(org(), &source.name)
            .expect("source still exists")
            .into_iter()
            .map(|f| f.name)
            .collect();
        prop_assert_eq!(before_children, after_children);
    }
}
