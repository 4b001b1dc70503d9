//! Breadth-first traversal: distance profiles, shortest paths and the
//! double-sweep diameter estimate.

use std::collections::VecDeque;

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use tracing::debug;

use crate::error::{NetworkError, Result};
use crate::network::ActorNetwork;
use crate::registry::ActorId;

impl ActorNetwork {
    /// Hop count from `source` to every node; `None` marks unreachable nodes.
    pub fn bfs_distances(&self, source: ActorId) -> Result<Vec<Option<usize>>> {
        self.ensure_valid(source)?;
        let adjacency = self.adjacency();
        let mut distance = vec![None; self.size()];
        let mut queue = VecDeque::new();
        distance[source] = Some(0);
        queue.push_back(source);

        while let Some(front) = queue.pop_front() {
            let next = distance[front].map_or(0, |d| d + 1);
            for &neighbor in &adjacency[front] {
                if distance[neighbor].is_none() {
                    distance[neighbor] = Some(next); // first discovery is the shortest hop count
                    queue.push_back(neighbor);
                }
            }
        }
        Ok(distance)
    }

    pub fn bfs_parents(&self, source: ActorId, target: ActorId) -> Result<Vec<Option<ActorId>>> {
        self.bfs_parents_with(source, target, &mut rand::rng())
    }

    /// Discovery tree rooted at `source`: `parent[source] == Some(source)`,
    /// undiscovered nodes are `None`. Stops as soon as `target` is reached.
    ///
    /// Each expansion visits the neighbors in a freshly shuffled order, so
    /// repeated calls spread over equally short alternatives. The adjacency
    /// lists themselves are never reordered.
    pub fn bfs_parents_with<R>(
        &self,
        source: ActorId,
        target: ActorId,
        rng: &mut R,
    ) -> Result<Vec<Option<ActorId>>>
    where
        R: Rng + ?Sized,
    {
        self.ensure_valid(source)?;
        self.ensure_valid(target)?;
        let adjacency = self.adjacency();
        let mut parent = vec![None; self.size()];
        let mut queue = VecDeque::new();
        let mut order: Vec<ActorId> = Vec::new();
        parent[source] = Some(source);
        queue.push_back(source);

        while parent[target].is_none() {
            let Some(front) = queue.pop_front() else {
                break; // frontier exhausted, target unreachable
            };
            order.clear();
            order.extend_from_slice(&adjacency[front]);
            order.shuffle(rng);
            for &neighbor in &order {
                if parent[neighbor].is_none() {
                    parent[neighbor] = Some(front);
                    queue.push_back(neighbor);
                }
            }
        }
        Ok(parent)
    }

    pub fn shortest_path(&self, u: ActorId, v: ActorId) -> Result<Vec<ActorId>> {
        self.shortest_path_with(u, v, &mut rand::rng())
    }

    /// Minimum-length path from `u` to `v`, both ends included. Empty when
    /// the two nodes are disconnected. Which path comes back is random when
    /// several shortest ones exist.
    pub fn shortest_path_with<R>(&self, u: ActorId, v: ActorId, rng: &mut R) -> Result<Vec<ActorId>>
    where
        R: Rng + ?Sized,
    {
        let parent = self.bfs_parents_with(u, v, rng)?;
        if parent[v].is_none() {
            return Ok(Vec::new());
        }

        let mut path = vec![v];
        let mut current = v;
        // the source is the only node that is its own parent
        while let Some(prev) = parent[current].filter(|&p| p != current) {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        Ok(path)
    }

    /// Name-level wrapper around [`ActorNetwork::shortest_path`].
    pub fn shortest_path_by_name(&self, from: &str, to: &str) -> Result<Vec<String>> {
        let path = self.shortest_path(self.id(from)?, self.id(to)?)?;
        path.into_iter()
            .map(|id| self.name(id).map(str::to_string))
            .collect()
    }

    pub fn diameter(&self) -> Result<(ActorId, ActorId)> {
        self.diameter_with(&mut rand::rng())
    }

    /// Double-sweep estimate of the diameter: BFS from a random node, jump to
    /// a random farthest node `a`, BFS again and return `(a, b)` where `b` is a
    /// random farthest node from `a`. `dist(a, b)` is a lower bound on the
    /// true diameter.
    pub fn diameter_with<R>(&self, rng: &mut R) -> Result<(ActorId, ActorId)>
    where
        R: Rng + ?Sized,
    {
        if self.is_empty() {
            return Err(NetworkError::UndefinedStatistic {
                statistic: "diameter",
            });
        }
        let start = rng.random_range(0..self.size());
        let one_end = random_maximum(&self.bfs_distances(start)?, rng).unwrap_or(start);
        let distances = self.bfs_distances(one_end)?;
        let other_end = random_maximum(&distances, rng).unwrap_or(one_end);
        debug!(
            start,
            one_end,
            other_end,
            length = distances[other_end].unwrap_or(0),
            "diameter sweep finished"
        );
        Ok((one_end, other_end))
    }
}

/// Uniform pick among the nodes at the largest finite distance. Unreachable
/// nodes never qualify; the baseline is 0 so the sweep origin always does.
fn random_maximum<R>(distances: &[Option<usize>], rng: &mut R) -> Option<ActorId>
where
    R: Rng + ?Sized,
{
    let mut max = 0;
    let mut ties = Vec::new();
    for (id, distance) in distances.iter().enumerate() {
        let Some(d) = *distance else { continue };
        if d > max {
            ties.clear();
            max = d;
        }
        if d == max {
            ties.push(id);
        }
    }
    ties.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn network_from(names: &[&str], edges: &[(&str, &str)]) -> ActorNetwork {
        let mut network = ActorNetwork::new(names.iter().copied());
        for (u, v) in edges {
            network.add_edge(u, v).unwrap();
        }
        network
    }

    // A - B - C and an isolated D
    fn line_with_island() -> ActorNetwork {
        network_from(&["A", "B", "C", "D"], &[("A", "B"), ("B", "C")])
    }

    // two equally short routes from S to T
    fn diamond() -> ActorNetwork {
        network_from(
            &["S", "L", "R", "T"],
            &[("S", "L"), ("S", "R"), ("L", "T"), ("R", "T")],
        )
    }

    #[test]
    fn test_bfs_distances() {
        let network = line_with_island();
        let a = network.id("A").unwrap();
        let distances = network.bfs_distances(a).unwrap();
        assert_eq!(distances[a], Some(0));
        assert_eq!(distances[network.id("B").unwrap()], Some(1));
        assert_eq!(distances[network.id("C").unwrap()], Some(2));
        assert_eq!(distances[network.id("D").unwrap()], None); // island never reached
    }

    #[test]
    fn test_bfs_parents_root_points_to_itself() {
        let network = line_with_island();
        let mut rng = SmallRng::seed_from_u64(7);
        let a = network.id("A").unwrap();
        let c = network.id("C").unwrap();
        let parent = network.bfs_parents_with(a, c, &mut rng).unwrap();
        assert_eq!(parent[a], Some(a));
        assert_eq!(parent[c], Some(network.id("B").unwrap()));
        assert_eq!(parent[network.id("D").unwrap()], None);
    }

    #[test]
    fn test_bfs_parents_unreachable_target() {
        let network = line_with_island();
        let a = network.id("A").unwrap();
        let d = network.id("D").unwrap();
        let parent = network.bfs_parents(a, d).unwrap();
        assert_eq!(parent[d], None);
        assert_eq!(parent[network.id("C").unwrap()], Some(network.id("B").unwrap())); // whole component explored
        assert!(network.bfs_parents(a, 4).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_shortest_path_scenario() {
        let network = line_with_island();
        let path = network.shortest_path_by_name("A", "C").unwrap();
        assert_eq!(path, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_shortest_path_to_self() {
        let network = line_with_island();
        for id in 0..network.size() {
            assert_eq!(network.shortest_path(id, id).unwrap(), vec![id]);
        }
    }

    #[test]
    fn test_shortest_path_disconnected_is_empty() {
        let network = line_with_island();
        let a = network.id("A").unwrap();
        let d = network.id("D").unwrap();
        assert!(network.shortest_path(a, d).unwrap().is_empty());
    }

    #[test]
    fn test_shortest_path_length_matches_distance() {
        let network = network_from(
            &["A", "B", "C", "D", "E", "F"],
            &[("A", "B"), ("B", "C"), ("C", "D"), ("A", "E"), ("E", "D"), ("D", "F")],
        );
        let mut rng = SmallRng::seed_from_u64(42);
        for u in 0..network.size() {
            let distances = network.bfs_distances(u).unwrap();
            for v in 0..network.size() {
                let path = network.shortest_path_with(u, v, &mut rng).unwrap();
                let hops = distances[v].unwrap();
                assert_eq!(path.len(), hops + 1); // node count = edge count + 1
                assert_eq!(path.first(), Some(&u));
                assert_eq!(path.last(), Some(&v));
            }
        }
    }

    #[test]
    fn test_shortest_path_ties_have_equal_length() {
        let network = diamond();
        let s = network.id("S").unwrap();
        let t = network.id("T").unwrap();
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..20 {
            let path = network.shortest_path_with(s, t, &mut rng).unwrap();
            assert_eq!(path.len(), 3);
            let middle = network.name(path[1]).unwrap();
            assert!(middle == "L" || middle == "R");
        }
    }

    #[test]
    fn test_shuffle_leaves_adjacency_untouched() {
        let network = diamond();
        let s = network.id("S").unwrap();
        let before = network.neighbors(s).unwrap().to_vec();
        let mut rng = SmallRng::seed_from_u64(11);
        for _ in 0..10 {
            network.shortest_path_with(s, network.id("T").unwrap(), &mut rng).unwrap();
        }
        assert_eq!(network.neighbors(s).unwrap(), before.as_slice());
    }

    #[test]
    fn test_shortest_path_invalid_ids() {
        let network = line_with_island();
        assert!(network.shortest_path(0, 4).unwrap_err().is_invalid_argument());
        assert!(network.shortest_path(9, 0).unwrap_err().is_invalid_argument());
        assert!(network.bfs_distances(4).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_diameter_on_path_graph() {
        let network = network_from(
            &["A", "B", "C", "D", "E"],
            &[("A", "B"), ("B", "C"), ("C", "D"), ("D", "E")],
        );
        let mut rng = SmallRng::seed_from_u64(5);
        let (a, b) = network.diameter_with(&mut rng).unwrap();
        let mut ends = [network.name(a).unwrap(), network.name(b).unwrap()];
        ends.sort();
        assert_eq!(ends, ["A", "E"]); // double sweep is exact on a path
    }

    #[test]
    fn test_diameter_second_end_is_farthest() {
        let network = network_from(
            &["A", "B", "C", "D", "E", "F", "G"],
            &[("A", "B"), ("B", "C"), ("C", "D"), ("B", "E"), ("E", "F"), ("F", "G")],
        );
        let mut rng = SmallRng::seed_from_u64(99);
        for _ in 0..10 {
            let (a, b) = network.diameter_with(&mut rng).unwrap();
            let distances = network.bfs_distances(a).unwrap();
            let max = distances.iter().flatten().max().copied().unwrap();
            assert_eq!(distances[b], Some(max));
        }
    }

    #[test]
    fn test_diameter_lengths_are_stable() {
        let network = diamond();
        let mut rng = SmallRng::seed_from_u64(1);
        let (a1, b1) = network.diameter_with(&mut rng).unwrap();
        let (a2, b2) = network.diameter_with(&mut rng).unwrap();
        let first = network.bfs_distances(a1).unwrap()[b1];
        let second = network.bfs_distances(a2).unwrap()[b2];
        assert_eq!(first, second);
    }

    #[test]
    fn test_diameter_of_isolated_nodes() {
        let network = network_from(&["A", "B"], &[]);
        let (a, b) = network.diameter().unwrap();
        assert_eq!(a, b); // nothing reachable beyond the start
    }

    #[test]
    fn test_diameter_empty_graph() {
        let network = ActorNetwork::new(Vec::<String>::new());
        assert!(matches!(
            network.diameter(),
            Err(NetworkError::UndefinedStatistic { .. })
        ));
    }

    #[test]
    fn test_random_maximum_skips_unreachable() {
        let mut rng = SmallRng::seed_from_u64(0);
        let distances = vec![Some(0), Some(2), None, Some(2), Some(1)];
        for _ in 0..10 {
            let pick = random_maximum(&distances, &mut rng).unwrap();
            assert!(pick == 1 || pick == 3);
        }
        assert_eq!(random_maximum(&[None, Some(0)], &mut rng), Some(1));
    }
}
