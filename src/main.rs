use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use graph_community_lab::analysis::{CommunityRequest, SocialRequest};
use graph_community_lab::community::Method;
use graph_community_lab::config::{Config, SearchMode};
use graph_community_lab::theory::{self, Topic};
use graph_community_lab::{storage, viz};

#[derive(Parser, Debug)]
#[clap(
    name = "graph-community-lab",
    about = "Community detection and social network analysis on random graphs"
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    /// Number of worker threads (0 = use all available cores)
    #[clap(long, global = true, default_value = "0")]
    threads: usize,

    /// Verbose logging
    #[clap(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Detect communities in a random graph with a fixed number of edges
    Communities {
        /// Number of nodes
        #[clap(long, default_value = "10")]
        nodes: usize,

        /// Number of edges
        #[clap(long, default_value = "15")]
        edges: usize,

        /// Detection method
        #[clap(long, value_enum, default_value = "brute-force")]
        method: Method,

        /// Seed for graph generation
        #[clap(long)]
        seed: Option<u64>,

        /// Density a subset must exceed to count as a community
        #[clap(long, default_value = "0.5")]
        threshold: f64,

        /// Largest graph the brute-force search accepts
        #[clap(long, default_value = "16")]
        max_brute_force_nodes: usize,

        /// How the brute-force search handles subsets of accepted communities
        #[clap(long, value_enum, default_value = "incremental")]
        search_mode: SearchMode,

        /// Output directory for results
        #[clap(long, default_value = "community_results")]
        output_dir: PathBuf,

        /// Skip visualizations
        #[clap(long)]
        skip_viz: bool,
    },

    /// Compute centrality measures and the influencer node of a random social network
    Social {
        /// Number of nodes
        #[clap(long, default_value = "10")]
        nodes: usize,

        /// Probability that any two nodes are connected
        #[clap(long, default_value = "0.1")]
        probability: f64,

        /// Seed for graph generation
        #[clap(long)]
        seed: Option<u64>,

        /// Number of top nodes listed per measure
        #[clap(long, default_value = "5")]
        top: usize,

        /// Output directory for results
        #[clap(long, default_value = "social_results")]
        output_dir: PathBuf,

        /// Skip visualizations
        #[clap(long)]
        skip_viz: bool,
    },

    /// Explain an algorithm or measure
    Theory {
        #[clap(value_enum)]
        topic: Topic,
    },
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Cli::parse();

    // Configure logging
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    // Set number of threads
    let num_threads = if args.threads > 0 {
        args.threads
    } else {
        num_cpus::get()
    };

    log::debug!("Using {} worker threads", num_threads);
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()?;

    match args.command {
        Command::Communities {
            nodes,
            edges,
            method,
            seed,
            threshold,
            max_brute_force_nodes,
            search_mode,
            output_dir,
            skip_viz,
        } => {
            let config = Config {
                density_threshold: threshold,
                max_brute_force_nodes,
                search_mode,
                ..Config::default()
            };
            let request = CommunityRequest {
                node_count: nodes,
                edge_count: edges,
                method,
                seed,
            };

            let report = request.run(&config)?;

            match &report.communities {
                Some(communities) => {
                    println!("Detected Communities");
                    for community in communities {
                        println!("Community {}: {:?}", community.id, community.members);
                    }
                }
                None => println!(
                    "No partition with at most {} communities",
                    config.max_girvan_newman_partitions
                ),
            }

            storage::save_community_results(&report, &output_dir)?;
            if !skip_viz {
                viz::render_communities(&report, &output_dir)?;
            }
            log::info!("Analysis complete. Results saved to {}", output_dir.display());
        }

        Command::Social {
            nodes,
            probability,
            seed,
            top,
            output_dir,
            skip_viz,
        } => {
            let config = Config {
                top_k: top,
                ..Config::default()
            };
            let request = SocialRequest {
                node_count: nodes,
                probability,
                seed,
            };

            let report = request.run(&config)?;

            if let Some(node) = report.influencer {
                println!("Influencer Node: {}", node);
            }
            println!("Degree Centrality: {:?}", report.measures.degree);
            println!("Closeness Centrality: {:?}", report.measures.closeness);
            println!("Betweenness Centrality: {:?}", report.measures.betweenness);

            storage::save_social_results(&report, &output_dir)?;
            if !skip_viz {
                viz::render_social(&report, &output_dir)?;
            }
            log::info!("Analysis complete. Results saved to {}", output_dir.display());
        }

        Command::Theory { topic } => {
            println!("{}\n", topic.title());
            println!("{}", theory::explain(topic));
        }
    }

    Ok(())
}
