//main.rs
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::error::ErrorKind;
use clap::Parser;
use env_logger::Env;
use log::debug;
use lloyd_kmeans::{write_centroids, ClusterError, DataSet, DEFAULT_MAX_ITER};

/// Cluster comma separated points into K groups and print the centroids.
#[derive(Parser, Debug)]
#[clap(version = "0.1.0", author = "Stefan L. <stefan.lang@med.lu.se>")]
#[clap(allow_negative_numbers = true)]
struct Opts {
    /// Number of clusters
    k: String,

    /// Maximum number of iterations [default: 400]
    max_iter: Option<String>,

    /// Read points from this file instead of stdin
    #[clap(short, long)]
    file: Option<PathBuf>,

    /// Write centroids to this file instead of stdout
    #[clap(short, long)]
    outfile: Option<PathBuf>,
}

/// Negative counts are mapped to 0 and counts too large for `usize`
/// saturate, so that validation rejects both.
fn parse_k(raw: &str) -> Result<usize> {
    let raw = raw.trim();
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(anyhow!("{:?} is not an integer", raw));
    }
    if negative {
        return Ok(0);
    }
    Ok(digits.parse().unwrap_or(usize::MAX))
}

fn parse_max_iter(raw: Option<&str>) -> Result<usize, ClusterError> {
    match raw {
        None => Ok(DEFAULT_MAX_ITER),
        Some(s) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => {
            Ok(s.parse().unwrap_or(usize::MAX))
        }
        Some(s) => Err(ClusterError::invalid_iteration_count(format!(
            "{:?} is not a positive integer",
            s
        ))),
    }
}

fn run(opts: &Opts) -> Result<()> {
    let k = parse_k(&opts.k)?;
    let max_iter = parse_max_iter(opts.max_iter.as_deref())?;

    let ds = match &opts.file {
        Some(path) => DataSet::from_path(path)?,
        None => DataSet::from_reader(io::stdin().lock())?,
    };
    debug!("Loaded {} points × {} dimensions", ds.len(), ds.dims());

    let clustering = ds.fit(k, max_iter)?;
    debug!(
        "Finished after {} iterations (converged: {})",
        clustering.iterations, clustering.converged
    );

    match &opts.outfile {
        Some(path) => write_centroids(BufWriter::new(File::create(path)?), clustering.centroids.view())?,
        None => write_centroids(io::stdout().lock(), clustering.centroids.view())?,
    }
    Ok(())
}

/// The single line shown for a failed run.
fn user_message(err: &anyhow::Error) -> &'static str {
    match err.downcast_ref::<ClusterError>() {
        Some(ClusterError::InvalidClusterCount { .. }) => "Invalid number of clusters!",
        Some(ClusterError::InvalidIterationCount { .. }) => "Invalid maximum iteration!",
        None => "An Error Has Occurred",
    }
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let opts = match Opts::try_parse() {
        Ok(opts) => opts,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            debug!("{}", e);
            println!("Invalid number of arguments!");
            return;
        }
    };

    if let Err(err) = run(&opts) {
        debug!("{:#}", err);
        println!("{}", user_message(&err));
    }
}
