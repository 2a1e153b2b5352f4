use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::clustering::ClusteringConfig;

pub mod default;
pub mod generate;

pub const DEFAULT_INPUT: &str = "sample_inputs/sample_input_0.txt";

#[derive(Parser, Debug)]
#[clap(
    about = "Shares cabs between groups of commuters heading to the same place",
    args_conflicts_with_subcommands = true
)]
pub struct Args {
    /// Input file: `m n`, m commuters, n cabs and the destination, one `x,y` per line
    #[clap(value_parser, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,
    /// exhaustive or hungarian
    #[clap(short, long, default_value = "exhaustive")]
    pub solver: String,
    /// Stop clustering once no centroid moves this far
    #[clap(long, value_parser)]
    pub cutoff: Option<f64>,
    #[clap(long, value_parser)]
    pub max_iterations: Option<usize>,
    /// Split the exhaustive search across threads
    #[clap(long)]
    pub parallel: bool,
    /// Also write the solution as JSON
    #[clap(short, long, value_parser)]
    pub output: Option<PathBuf>,
    #[clap(subcommand)]
    pub command: Option<Commands>,
}

impl Args {
    pub fn clustering_config(&self) -> ClusteringConfig {
        let defaults = ClusteringConfig::default();
        ClusteringConfig {
            cutoff: self.cutoff.unwrap_or(defaults.cutoff),
            max_iterations: self.max_iterations.unwrap_or(defaults.max_iterations),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a random input file
    Generate {
        #[clap(long, value_parser)]
        commuters: usize,
        #[clap(long, value_parser)]
        cabs: usize,
        #[clap(long, value_parser, default_value_t = 0)]
        seed: u64,
        /// Coordinates are drawn from [-extent, extent]
        #[clap(long, value_parser, default_value_t = 100)]
        extent: u32,
        #[clap(value_parser)]
        path: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["cabshare"]);
        assert_eq!(args.input, PathBuf::from(DEFAULT_INPUT));
        assert_eq!(args.solver, "exhaustive");
        assert!(!args.parallel);
        assert!(args.command.is_none());
        assert_eq!(args.clustering_config(), ClusteringConfig::default());
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "cabshare",
            "city.txt",
            "--solver",
            "hungarian",
            "--cutoff",
            "0.1",
            "--max-iterations",
            "50",
            "--output",
            "out.json",
        ]);
        assert_eq!(args.input, PathBuf::from("city.txt"));
        assert_eq!(args.solver, "hungarian");
        assert_eq!(args.output, Some(PathBuf::from("out.json")));
        let config = args.clustering_config();
        assert_eq!(config.cutoff, 0.1);
        assert_eq!(config.max_iterations, 50);
    }

    #[test]
    fn test_generate_subcommand() {
        let args = Args::parse_from([
            "cabshare",
            "generate",
            "--commuters",
            "6",
            "--cabs",
            "3",
            "random.txt",
        ]);
        match args.command {
            Some(Commands::Generate {
                commuters,
                cabs,
                seed,
                extent,
                path,
            }) => {
                assert_eq!((commuters, cabs, seed, extent), (6, 3, 0, 100));
                assert_eq!(path, PathBuf::from("random.txt"));
            }
            None => panic!("expected the generate subcommand"),
        }
    }
}
