use std::collections::HashMap;

use serde::Serialize;

use crate::classify::Bookmark;

/// A group of bookmarks sharing one cluster tag. Built fresh from a
/// finished classification pass; never updated incrementally.
#[derive(Debug, Clone, Serialize)]
pub struct Cluster {
    pub name: String,
    pub count: usize,
    pub bookmarks: Vec<Bookmark>,
}

/// Group classified bookmarks by tag and order the groups by size.
///
/// Members keep their original extraction order. The sort is stable and
/// groups are seeded in first-encountered order, so equal counts come out
/// in a deterministic order for identical input.
pub fn build_clusters(bookmarks: &[Bookmark]) -> Vec<Cluster> {
    let mut clusters: Vec<Cluster> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for bm in bookmarks {
        let idx = *index.entry(bm.cluster.as_str()).or_insert_with(|| {
            clusters.push(Cluster {
                name: bm.cluster.clone(),
                count: 0,
                bookmarks: Vec::new(),
            });
            clusters.len() - 1
        });
        clusters[idx].count += 1;
        clusters[idx].bookmarks.push(bm.clone());
    }

    clusters.sort_by(|a, b| b.count.cmp(&a.count));
    clusters
}
