// Colored terminal output for clustering results.
//
// This module handles all terminal-specific formatting: colors, member
// tables, the unclustered tail. The main.rs display path delegates here.

use colored::Colorize;

use crate::cluster::types::{Cluster, ClusteringResult};

/// Display a full clustering result in the terminal.
pub fn display_result(result: &ClusteringResult) {
    let clustered: usize = result.clusters.iter().map(|c| c.members.len()).sum();

    println!(
        "\n{}",
        format!(
            "=== {} clusters ({} keywords clustered, {} unclustered) ===",
            result.clusters.len(),
            clustered,
            result.unclustered.len()
        )
        .bold()
    );

    for (i, cluster) in result.clusters.iter().enumerate() {
        display_cluster(i + 1, cluster);
    }

    if !result.unclustered.is_empty() {
        println!("\n  {}", "Unclustered:".dimmed());
        for keyword in &result.unclustered {
            let volume = keyword
                .search_volume
                .map(|v| format!(" ({v})"))
                .unwrap_or_default();
            println!("    - {}{}", keyword.text.dimmed(), volume.dimmed());
        }
    }

    println!();
}

/// Display one cluster with its pillar keyword and members.
fn display_cluster(rank: usize, cluster: &Cluster) {
    println!("\n  {:>3}. {}", rank, cluster.name.bold().bright_green());

    for member in &cluster.members {
        let marker = if member.is_representative {
            "*".bright_yellow().to_string()
        } else {
            " ".to_string()
        };
        let volume = member
            .search_volume
            .map(|v| format!("{v:>8}"))
            .unwrap_or_else(|| format!("{:>8}", "-"));

        println!(
            "      {} {:<40} {}",
            marker,
            super::truncate_chars(&member.text, 40),
            volume.dimmed()
        );
    }
}
