use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::ProgressBar;
use tracing::{info, warn};

use pillar::cluster::editor::{merge_clusters, split_cluster};
use pillar::cluster::types::{Cluster, ClusteringParams, Keyword, SemanticBackend};
use pillar::cluster::{cluster_keywords, ClusteringResult, MAX_KEYWORDS};
use pillar::config::Config;
use pillar::output::terminal;
use pillar::semantic::DisabledProvider;

/// Pillar: topical keyword clustering for SEO content planning.
///
/// Groups a keyword list into topical clusters by shared SERP results,
/// optionally gated by embedding distance, and picks a pillar keyword
/// for each cluster.
#[derive(Parser)]
#[command(name = "pillar", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cluster a keyword list into topical groups
    Cluster {
        /// Path to a JSON array of keyword records
        #[arg(long)]
        input: PathBuf,

        /// Minimum shared top-10 URLs (0-10) for two keywords to merge
        #[arg(long, default_value = "3")]
        overlap_threshold: u32,

        /// Maximum embedding distance (0.0-1.0) still considered similar
        #[arg(long, default_value = "0.3")]
        distance_threshold: f64,

        /// Drop groups smaller than this into the unclustered list
        #[arg(long, default_value = "2")]
        min_cluster_size: usize,

        /// Also gate merges on embedding distance (requires OPENAI_API_KEY)
        #[arg(long)]
        semantic: bool,

        /// Emit the raw result as JSON instead of a terminal summary
        #[arg(long)]
        json: bool,
    },

    /// Merge clusters from a saved result into one
    Merge {
        /// Path to a clustering result JSON (from `cluster --json`)
        #[arg(long)]
        input: PathBuf,

        /// Ids of the clusters to merge (comma-separated)
        #[arg(long, value_delimiter = ',', required = true)]
        clusters: Vec<String>,

        /// Display name for the merged cluster
        #[arg(long)]
        name: String,
    },

    /// Split a cluster by moving selected keywords into a new one
    Split {
        /// Path to a clustering result JSON (from `cluster --json`)
        #[arg(long)]
        input: PathBuf,

        /// Id of the cluster to split
        #[arg(long)]
        cluster: String,

        /// Keyword texts to move into the new cluster (comma-separated)
        #[arg(long, value_delimiter = ',', required = true)]
        keywords: Vec<String>,

        /// Display name for the new cluster
        #[arg(long)]
        name: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("pillar=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Cluster {
            input,
            overlap_threshold,
            distance_threshold,
            min_cluster_size,
            semantic,
            json,
        } => {
            let keywords = load_keywords(&input)?;
            info!(keywords = keywords.len(), semantic, "Starting clustering run");

            // Matrix construction and the pairwise scan are O(N²); the
            // engine rejects anything above MAX_KEYWORDS outright
            if keywords.len() > MAX_KEYWORDS / 5 {
                warn!(
                    keywords = keywords.len(),
                    "Large keyword list — expect quadratic memory and runtime"
                );
            }

            let params = ClusteringParams {
                overlap_threshold,
                distance_threshold,
                min_cluster_size,
                semantic_backend: if semantic {
                    SemanticBackend::Embedding
                } else {
                    SemanticBackend::Disabled
                },
            };

            let result = run_clustering(&keywords, &params).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                terminal::display_result(&result);
            }
        }

        Commands::Merge {
            input,
            clusters: ids,
            name,
        } => {
            let mut result = load_result(&input)?;

            let wanted: HashSet<&str> = ids.iter().map(String::as_str).collect();
            let mut picked: Vec<Cluster> = Vec::new();
            let mut rest: Vec<Cluster> = Vec::new();
            let mut insert_at = 0;
            for cluster in result.clusters {
                if wanted.contains(cluster.id.as_str()) {
                    if picked.is_empty() {
                        // Merged cluster takes the first input's position
                        insert_at = rest.len();
                    }
                    picked.push(cluster);
                } else {
                    rest.push(cluster);
                }
            }

            let found: HashSet<&str> = picked.iter().map(|c| c.id.as_str()).collect();
            let missing: Vec<&str> = ids
                .iter()
                .map(String::as_str)
                .filter(|id| !found.contains(id))
                .collect();
            if !missing.is_empty() {
                anyhow::bail!("No such cluster id(s): {}", missing.join(", "));
            }

            info!(merged = picked.len(), name = %name, "Merging clusters");
            rest.insert(insert_at, merge_clusters(&picked, &name));
            result.clusters = rest;

            println!("{}", serde_json::to_string_pretty(&result)?);
        }

        Commands::Split {
            input,
            cluster: id,
            keywords,
            name,
        } => {
            let mut result = load_result(&input)?;

            let pos = result
                .clusters
                .iter()
                .position(|c| c.id == id)
                .ok_or_else(|| anyhow::anyhow!("No such cluster id: {id}"))?;

            let (remaining, new) = split_cluster(&result.clusters[pos], &keywords, &name);
            info!(
                remaining = remaining.members.len(),
                moved = new.members.len(),
                "Split cluster"
            );
            result.clusters.splice(pos..=pos, [remaining, new]);

            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}

/// Read a previously saved clustering result (from `cluster --json`).
fn load_result(path: &PathBuf) -> Result<ClusteringResult> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read result file: {}", path.display()))?;
    let result: ClusteringResult = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse result JSON: {}", path.display()))?;
    Ok(result)
}

/// Read and parse the keyword list from a JSON file.
fn load_keywords(path: &PathBuf) -> Result<Vec<Keyword>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read keyword file: {}", path.display()))?;
    let keywords: Vec<Keyword> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse keyword JSON: {}", path.display()))?;
    Ok(keywords)
}

/// Run the engine with the provider the params call for.
async fn run_clustering(
    keywords: &[Keyword],
    params: &ClusteringParams,
) -> Result<ClusteringResult> {
    match params.semantic_backend {
        SemanticBackend::Disabled => {
            cluster_keywords(keywords, params, &DisabledProvider)
                .await
                .context("Clustering failed")
        }
        SemanticBackend::Embedding => {
            let config = Config::load()?;
            config.require_embeddings()?;
            let embedder = config.embedder()?;

            let spinner = ProgressBar::new_spinner();
            spinner.set_message("Embedding keywords and clustering...");
            spinner.enable_steady_tick(Duration::from_millis(100));

            let result = cluster_keywords(keywords, params, &embedder)
                .await
                .context("Clustering failed");

            spinner.finish_and_clear();
            result
        }
    }
}
