// Manual cluster editing — merge and split for human-in-the-loop cleanup.
//
// Automatic clustering gets most of the way there; these transforms let a
// reviewer fix the rest. Both are pure: they borrow existing Cluster
// values and return new ones, so a cluster still referenced elsewhere
// (UI state, an in-flight edit) is never mutated under anyone's feet.
//
// Representative rule here is FIRST MEMBER, not highest volume. The
// engine uses a volume rule for automatic runs; manual merges keep the
// first member. The two rules differ on purpose and tests pin each one
// separately — do not unify them without confirming the intended product
// behavior.

use crate::cluster::types::{slugify, Cluster, ClusterMember};

/// Merge several clusters into one.
///
/// Members are concatenated in the order the clusters (and their members)
/// were given. Every representative flag is cleared, then the first member
/// of the concatenation becomes the representative. Merging zero clusters
/// or only empty clusters yields an empty cluster with no representative.
pub fn merge_clusters(clusters: &[Cluster], new_name: &str) -> Cluster {
    let mut members: Vec<ClusterMember> = clusters
        .iter()
        .flat_map(|c| c.members.iter())
        .map(|m| ClusterMember {
            is_representative: false,
            ..m.clone()
        })
        .collect();

    if let Some(first) = members.first_mut() {
        first.is_representative = true;
    }

    Cluster {
        id: slugify(new_name),
        name: new_name.to_string(),
        members,
    }
}

/// Split one cluster in two by selecting member texts to move out.
///
/// Members whose text exactly matches an entry in `selected_texts` go to
/// the new cluster; the rest remain. Each non-empty side gets its first
/// member as representative; a side emptied by the split legitimately has
/// zero members and no representative. Returns `(remaining, new)`.
pub fn split_cluster(
    cluster: &Cluster,
    selected_texts: &[String],
    new_name: &str,
) -> (Cluster, Cluster) {
    let selected: std::collections::HashSet<&str> =
        selected_texts.iter().map(String::as_str).collect();

    let mut remaining: Vec<ClusterMember> = Vec::new();
    let mut moved: Vec<ClusterMember> = Vec::new();

    for member in &cluster.members {
        let rebuilt = ClusterMember {
            is_representative: false,
            ..member.clone()
        };
        if selected.contains(member.text.as_str()) {
            moved.push(rebuilt);
        } else {
            remaining.push(rebuilt);
        }
    }

    if let Some(first) = remaining.first_mut() {
        first.is_representative = true;
    }
    if let Some(first) = moved.first_mut() {
        first.is_representative = true;
    }

    (
        Cluster {
            id: cluster.id.clone(),
            name: cluster.name.clone(),
            members: remaining,
        },
        Cluster {
            id: slugify(new_name),
            name: new_name.to_string(),
            members: moved,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(text: &str, volume: Option<u64>, is_representative: bool) -> ClusterMember {
        ClusterMember {
            keyword_id: format!("kw-{text}"),
            text: text.to_string(),
            search_volume: volume,
            serp_results: vec![],
            is_representative,
        }
    }

    fn cluster(name: &str, members: Vec<ClusterMember>) -> Cluster {
        Cluster {
            id: slugify(name),
            name: name.to_string(),
            members,
        }
    }

    #[test]
    fn merge_concatenates_in_input_order() {
        let a = cluster("a", vec![member("one", None, true), member("two", None, false)]);
        let b = cluster("b", vec![member("three", None, true)]);

        let merged = merge_clusters(&[a, b], "combined");
        let texts: Vec<&str> = merged.members.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
        assert_eq!(merged.name, "combined");
        assert_eq!(merged.id, "combined");
    }

    #[test]
    fn merge_representative_is_first_member_regardless_of_volume() {
        // "two" has far more volume, but the manual rule is first-member
        let a = cluster("a", vec![member("one", Some(10), false)]);
        let b = cluster("b", vec![member("two", Some(9000), true)]);

        let merged = merge_clusters(&[a, b], "combined");
        let reps: Vec<&str> = merged
            .members
            .iter()
            .filter(|m| m.is_representative)
            .map(|m| m.text.as_str())
            .collect();
        assert_eq!(reps, vec!["one"]);
    }

    #[test]
    fn merge_of_nothing_is_empty_with_no_representative() {
        let merged = merge_clusters(&[], "empty");
        assert!(merged.members.is_empty());
        assert!(merged.representative().is_none());
    }

    #[test]
    fn merge_does_not_mutate_inputs() {
        let a = cluster("a", vec![member("one", None, true)]);
        let b = cluster("b", vec![member("two", None, true)]);

        let _ = merge_clusters(std::slice::from_ref(&a), "solo");
        let merged = merge_clusters(&[a.clone(), b.clone()], "combined");

        assert!(a.members[0].is_representative);
        assert!(b.members[0].is_representative);
        assert!(!merged.members[1].is_representative);
    }

    #[test]
    fn split_partitions_by_exact_text() {
        let c = cluster(
            "shoes",
            vec![
                member("running shoes", None, true),
                member("trail shoes", None, false),
                member("dress shoes", None, false),
            ],
        );

        let (remaining, new) =
            split_cluster(&c, &["dress shoes".to_string()], "formal footwear");

        let remaining_texts: Vec<&str> =
            remaining.members.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(remaining_texts, vec!["running shoes", "trail shoes"]);
        assert_eq!(new.members.len(), 1);
        assert_eq!(new.name, "formal footwear");
        assert_eq!(new.id, "formal-footwear");
    }

    #[test]
    fn split_assigns_first_member_as_representative_on_both_sides() {
        let c = cluster(
            "c",
            vec![
                member("a", Some(5), false),
                member("b", Some(500), true),
                member("d", None, false),
            ],
        );

        let (remaining, new) = split_cluster(&c, &["b".to_string()], "new");
        assert_eq!(remaining.representative().unwrap().text, "a");
        assert_eq!(new.representative().unwrap().text, "b");
        assert_eq!(
            remaining.members.iter().filter(|m| m.is_representative).count(),
            1
        );
        assert_eq!(new.members.iter().filter(|m| m.is_representative).count(), 1);
    }

    #[test]
    fn split_everything_leaves_empty_remaining() {
        let c = cluster("c", vec![member("a", None, true), member("b", None, false)]);

        let texts = vec!["a".to_string(), "b".to_string()];
        let (remaining, new) = split_cluster(&c, &texts, "all of it");

        assert!(remaining.members.is_empty());
        assert!(remaining.representative().is_none());
        assert_eq!(new.members.len(), 2);
        assert_eq!(new.representative().unwrap().text, "a");
    }

    #[test]
    fn split_with_unknown_selection_moves_nothing() {
        let c = cluster("c", vec![member("a", None, true)]);

        let (remaining, new) = split_cluster(&c, &["nope".to_string()], "new");
        assert_eq!(remaining.members.len(), 1);
        assert!(remaining.members[0].is_representative);
        assert!(new.members.is_empty());
        assert!(new.representative().is_none());
    }

    #[test]
    fn split_does_not_mutate_input() {
        let c = cluster("c", vec![member("a", None, false), member("b", None, true)]);
        let _ = split_cluster(&c, &["b".to_string()], "new");
        assert!(c.members[1].is_representative);
        assert!(!c.members[0].is_representative);
    }
}
