//! Degree statistics over the collaboration graph.

use std::collections::BTreeMap;

use crate::error::{NetworkError, Result};
use crate::network::ActorNetwork;
use crate::registry::ActorId;

impl ActorNetwork {
    fn degrees(&self) -> impl Iterator<Item = usize> + '_ {
        self.adjacency().iter().map(Vec::len)
    }

    fn ensure_non_empty(&self, statistic: &'static str) -> Result<()> {
        if self.is_empty() {
            return Err(NetworkError::UndefinedStatistic { statistic });
        }
        Ok(())
    }

    /// Mean degree over all nodes.
    pub fn average_degree(&self) -> Result<f64> {
        self.ensure_non_empty("average degree")?;
        let total: usize = self.degrees().sum();
        Ok(total as f64 / self.size() as f64)
    }

    /// Population standard deviation of the degrees (divides by `size`).
    pub fn degree_std_dev(&self) -> Result<f64> {
        Ok(self.mean_and_std_dev()?.1)
    }

    /// One pass for the mean, one for the spread.
    fn mean_and_std_dev(&self) -> Result<(f64, f64)> {
        let average = self.average_degree()?;
        let squared: f64 = self
            .degrees()
            .map(|degree| (degree as f64 - average).powi(2))
            .sum();
        Ok((average, (squared / self.size() as f64).sqrt()))
    }

    /// How many standard deviations `id`'s degree sits from the mean.
    pub fn z_score(&self, id: ActorId) -> Result<f64> {
        let degree = self.degree(id)?;
        let (average, std_dev) = self.degree_moments()?;
        Ok((degree as f64 - average) / std_dev)
    }

    /// Every node's z-score, ascending. Ties keep id order.
    pub fn z_scores(&self) -> Result<Vec<(f64, ActorId)>> {
        let (average, std_dev) = self.degree_moments()?;
        let mut scores: Vec<(f64, ActorId)> = self
            .degrees()
            .enumerate()
            .map(|(id, degree)| ((degree as f64 - average) / std_dev, id))
            .collect();
        scores.sort_by(|a, b| a.0.total_cmp(&b.0));
        Ok(scores)
    }

    fn degree_moments(&self) -> Result<(f64, f64)> {
        let (average, std_dev) = self.mean_and_std_dev()?;
        if std_dev == 0.0 {
            // every node has the same degree
            return Err(NetworkError::UndefinedStatistic { statistic: "z-score" });
        }
        Ok((average, std_dev))
    }

    /// Histogram of degrees. A node of degree `d` lands in bucket
    /// `d / interval * interval`; every empty bucket below the largest one is
    /// present with a zero count so the range has no holes.
    pub fn degree_buckets(&self, interval: usize) -> Result<BTreeMap<usize, usize>> {
        bucket_degrees(self.degrees(), interval)
    }

    /// `(id, degree)` for every node, most connected first.
    pub fn connectivity_ranking(&self) -> Vec<(ActorId, usize)> {
        let mut ranking: Vec<(ActorId, usize)> = self.degrees().enumerate().collect();
        ranking.sort_by(|a, b| b.1.cmp(&a.1)); // stable, equal degrees keep id order
        ranking
    }

    /// Degree -> name, ascending by degree.
    ///
    /// Lossy: when several actors share a degree only the one with the
    /// highest id is kept, since later inserts overwrite earlier ones.
    pub fn degrees_by_name(&self) -> BTreeMap<usize, String> {
        let mut actors = BTreeMap::new();
        for (degree, name) in self.degrees().zip(self.registry().names()) {
            actors.insert(degree, name.clone());
        }
        actors
    }
}

fn bucket_degrees(
    degrees: impl Iterator<Item = usize>,
    interval: usize,
) -> Result<BTreeMap<usize, usize>> {
    if interval == 0 {
        return Err(NetworkError::InvalidInterval { interval });
    }
    let mut buckets = BTreeMap::new();
    let mut max_bucket = 0;
    for degree in degrees {
        let bucket = degree / interval * interval;
        max_bucket = max_bucket.max(bucket);
        *buckets.entry(bucket).or_insert(0) += 1;
    }
    for bucket in (0..max_bucket).step_by(interval) {
        buckets.entry(bucket).or_insert(0); // fill gaps for histogram rendering
    }
    Ok(buckets)
}
