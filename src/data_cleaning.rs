//! Turns a credits CSV into casts and casts into an [`ActorNetwork`].
//!
//! Expected header: `title,year,actor`, one row per credit.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::error::{NetworkError, Result};
use crate::network::ActorNetwork;

#[derive(Debug, Deserialize)]
struct Credit {
    title: String,
    #[serde(default)]
    year: String,
    actor: String,
}

pub fn parse_credits(path: impl AsRef<Path>) -> Result<Vec<Vec<String>>> {
    let path = path.as_ref();
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;
    let casts = collect_casts(reader)?;
    info!(path = %path.display(), listings = casts.len(), "parsed credits");
    Ok(casts)
}

pub fn parse_credits_from_reader<R: Read>(input: R) -> Result<Vec<Vec<String>>> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);
    collect_casts(reader)
}

/// Groups credits by `(title, year)` in first-seen order. Bad rows are
/// skipped, but a header without `title` or `actor` fails the whole file.
fn collect_casts<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<Vec<String>>> {
    let headers = reader.headers()?;
    for column in ["title", "actor"] {
        if !headers.iter().any(|header| header == column) {
            return Err(NetworkError::MissingColumn { column });
        }
    }

    let mut casts: Vec<Vec<String>> = Vec::new();
    let mut listing_index: HashMap<(String, String), usize> = HashMap::new();

    for (row, record) in reader.deserialize::<Credit>().enumerate() {
        let credit = match record {
            Ok(credit) => credit,
            Err(err) if err.is_io_error() => return Err(err.into()),
            Err(err) => {
                warn!(row = row + 1, error = %err, "skipping unreadable credit");
                continue;
            }
        };
        if credit.actor.is_empty() {
            warn!(row = row + 1, title = %credit.title, "skipping credit without actor");
            continue;
        }

        let index = *listing_index
            .entry((credit.title, credit.year))
            .or_insert_with(|| {
                casts.push(Vec::new());
                casts.len() - 1
            });
        let cast = &mut casts[index];
        if !cast.contains(&credit.actor) {
            cast.push(credit.actor); // an actor credited twice in one listing counts once
        }
    }
    Ok(casts)
}

/// Registers every actor, then links each pair of actors sharing a listing.
pub fn build_network(casts: &[Vec<String>]) -> Result<ActorNetwork> {
    let mut network = ActorNetwork::new(casts.iter().flatten().cloned());
    for cast in casts {
        for (i, u) in cast.iter().enumerate() {
            for v in &cast[i + 1..] {
                network.add_edge(u, v)?;
            }
        }
    }
    info!(
        actors = network.size(),
        edges = network.edge_count(),
        "built actor network"
    );
    Ok(network)
}
