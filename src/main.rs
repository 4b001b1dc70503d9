use std::path::PathBuf;

use actor_network::data_cleaning;
use actor_network::{ActorId, ActorNetwork};
use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Collaboration-graph report over a credits CSV
#[derive(Parser, Debug)]
#[command(name = "actor-network")]
#[command(version)]
struct Cli {
    /// CSV with header `title,year,actor`, one row per credit
    credits: PathBuf,

    /// Start actor of a shortest-path query
    #[arg(long, requires = "to")]
    from: Option<String>,

    /// End actor of a shortest-path query
    #[arg(long, requires = "from")]
    to: Option<String>,

    /// Degree range covered by each histogram bucket
    #[arg(long, default_value = "10")]
    interval: usize,

    /// Number of most connected actors to list
    #[arg(long, default_value = "20")]
    top: usize,

    /// Seed for path tie-breaking and diameter sampling
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    let casts = data_cleaning::parse_credits(&cli.credits)
        .with_context(|| format!("failed to read {}", cli.credits.display()))?;
    let network = data_cleaning::build_network(&casts)?;
    // parse credits and link every pair of co-stars

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    if network.is_empty() {
        info!("no actors found, nothing to report");
        return Ok(());
    }

    println!("Actors: {}, Co-appearances: {}", network.size(), network.edge_count());
    println!("Average degree: {:.3}", network.average_degree()?);
    println!("Degree standard deviation: {:.3}", network.degree_std_dev()?);

    println!("\nTop {} Most Connected Actors:", cli.top);
    for (id, degree) in network.connectivity_ranking().into_iter().take(cli.top) {
        let z = network
            .z_score(id)
            .map(|z| format!("{z:.2}"))
            .unwrap_or_else(|_| "n/a".to_string());
        println!("Actor: {}, Degree: {}, Z-score: {}", network.name(id)?, degree, z);
    }

    println!("\nDegree Histogram (interval {}):", cli.interval);
    for (bucket, count) in network.degree_buckets(cli.interval)? {
        println!("{:>6}-{:<6} {}", bucket, bucket + cli.interval - 1, count);
    }

    let (a, b) = network.diameter_with(&mut rng)?;
    print_path(&network, "\nApproximate diameter", a, b, &mut rng)?;

    if let (Some(from), Some(to)) = (&cli.from, &cli.to) {
        let u = network.id(from)?;
        let v = network.id(to)?;
        print_path(&network, "\nShortest path", u, v, &mut rng)?;
    }
    Ok(())
}

fn print_path(
    network: &ActorNetwork,
    label: &str,
    u: ActorId,
    v: ActorId,
    rng: &mut StdRng,
) -> Result<()> {
    let path = network.shortest_path_with(u, v, rng)?;
    if path.is_empty() {
        println!("{label}: {} and {} are not connected", network.name(u)?, network.name(v)?);
        return Ok(());
    }
    let names = path
        .iter()
        .map(|&id| network.name(id))
        .collect::<actor_network::Result<Vec<_>>>()?;
    println!("{label} ({} hops): {}", path.len() - 1, names.join(" -> "));
    Ok(())
}
