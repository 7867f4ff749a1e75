use serde::Serialize;

use crate::classify::Bookmark;
use crate::cluster::{self, Cluster};

/// The full output document: cluster groups plus the flat bookmark list
/// in extraction order.
#[derive(Debug, Serialize)]
pub struct Report {
    pub total_bookmarks: usize,
    pub total_clusters: usize,
    pub clusters: Vec<Cluster>,
    pub all_bookmarks: Vec<Bookmark>,
}

impl Report {
    /// Aggregate a finished classification pass into the report document.
    pub fn build(bookmarks: Vec<Bookmark>) -> Self {
        let clusters = cluster::build_clusters(&bookmarks);
        Report {
            total_bookmarks: bookmarks.len(),
            total_clusters: clusters.len(),
            clusters,
            all_bookmarks: bookmarks,
        }
    }

    /// Console summary: totals plus the `top` largest clusters.
    pub fn print_summary(&self, top: usize) {
        println!(
            "Parsed {} bookmarks into {} clusters",
            self.total_bookmarks, self.total_clusters
        );
        for cluster in self.clusters.iter().take(top) {
            println!("  {}: {} bookmarks", cluster.name, cluster.count);
        }
    }
}

// ── Tests ──
