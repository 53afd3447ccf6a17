use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::airport::AirportCode;
use crate::graph::Network;

/// One leg of a solved path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub from: AirportCode,
    pub to: AirportCode,
    pub distance_km: f64,
}

/// Ordered stops, total distance and per-leg segments for a solved query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathResult {
    pub path: Vec<AirportCode>,
    pub total_distance: f64,
    pub segments: Vec<Segment>,
}

impl PathResult {
    /// Single-stop result for `origin == destination`.
    pub fn stationary(code: &str) -> Self {
        Self {
            path: vec![code.to_string()],
            total_distance: 0.0,
            segments: Vec::new(),
        }
    }

    /// Number of legs flown.
    pub fn hop_count(&self) -> usize {
        self.segments.len()
    }

    pub fn origin(&self) -> Option<&str> {
        self.path.first().map(String::as_str)
    }

    pub fn destination(&self) -> Option<&str> {
        self.path.last().map(String::as_str)
    }
}

/// Predecessor record: the node we came from and the exact edge weight used.
#[derive(Debug, Clone)]
struct Parent {
    from: AirportCode,
    distance: f64,
}

/// Find the path with the fewest legs using breadth-first search.
///
/// When parallel edges join the same pair, the cheapest one is reported for
/// that leg.
pub fn find_route_bfs(network: &Network, start: &str, goal: &str) -> Option<PathResult> {
    if !network.contains(start) || !network.contains(goal) {
        return None;
    }
    if start == goal {
        return Some(PathResult::stationary(start));
    }

    let mut parents: HashMap<AirportCode, Option<Parent>> = HashMap::new();
    let mut queue = VecDeque::new();

    parents.insert(start.to_string(), None);
    queue.push_back(start.to_string());

    while let Some(current) = queue.pop_front() {
        for edge in network.neighbours(&current) {
            let next = &edge.target;
            if let Some(existing) = parents.get_mut(next) {
                if let Some(parent) = existing {
                    if parent.from == current && edge.distance < parent.distance {
                        parent.distance = edge.distance;
                    }
                }
                continue;
            }

            parents.insert(
                next.clone(),
                Some(Parent {
                    from: current.clone(),
                    distance: edge.distance,
                }),
            );
            queue.push_back(next.clone());
        }

        // The goal's parent is only final once every parallel edge out of its
        // discovering node has been inspected.
        if parents
            .get(goal)
            .and_then(Option::as_ref)
            .is_some_and(|parent| parent.from == current)
        {
            return reconstruct_path(&parents, start, goal);
        }
    }

    None
}

/// Run Dijkstra's algorithm to find the lowest-distance path.
///
/// Equal-cost candidates keep the predecessor discovered first, and queue
/// entries of equal cost pop in insertion order, so repeated calls return the
/// same path.
pub fn find_route_dijkstra(network: &Network, start: &str, goal: &str) -> Option<PathResult> {
    best_first_search(network, start, goal, |_| 0.0)
}

/// Run A* search guided by the great-circle distance to the goal.
///
/// The heuristic is scaled by [`Network::heuristic_scale`] so it never
/// overestimates, which keeps results identical in cost to Dijkstra.
pub fn find_route_a_star(network: &Network, start: &str, goal: &str) -> Option<PathResult> {
    let scale = network.heuristic_scale();
    best_first_search(network, start, goal, |node| {
        network
            .great_circle_km(node, goal)
            .map(|distance| distance * scale)
            .unwrap_or(0.0)
    })
}

fn best_first_search<H>(
    network: &Network,
    start: &str,
    goal: &str,
    heuristic: H,
) -> Option<PathResult>
where
    H: Fn(&str) -> f64,
{
    if !network.contains(start) || !network.contains(goal) {
        return None;
    }
    if start == goal {
        return Some(PathResult::stationary(start));
    }

    let mut distances: HashMap<AirportCode, f64> = HashMap::new();
    let mut parents: HashMap<AirportCode, Option<Parent>> = HashMap::new();
    let mut settled: HashSet<AirportCode> = HashSet::new();
    let mut queue = BinaryHeap::new();
    let mut sequence = 0u64;

    distances.insert(start.to_string(), 0.0);
    parents.insert(start.to_string(), None);
    queue.push(QueueEntry::new(start.to_string(), heuristic(start), sequence));

    while let Some(entry) = queue.pop() {
        if !settled.insert(entry.node.clone()) {
            continue;
        }

        if entry.node == goal {
            return reconstruct_path(&parents, start, goal);
        }

        let current_distance = match distances.get(&entry.node) {
            Some(distance) => *distance,
            None => continue,
        };

        for edge in network.neighbours(&entry.node) {
            let next = &edge.target;
            if settled.contains(next) {
                continue;
            }

            let next_cost = current_distance + edge.distance;
            if next_cost < *distances.get(next).unwrap_or(&f64::INFINITY) {
                distances.insert(next.clone(), next_cost);
                parents.insert(
                    next.clone(),
                    Some(Parent {
                        from: entry.node.clone(),
                        distance: edge.distance,
                    }),
                );
                sequence += 1;
                queue.push(QueueEntry::new(
                    next.clone(),
                    next_cost + heuristic(next.as_str()),
                    sequence,
                ));
            }
        }
    }

    None
}

fn reconstruct_path(
    parents: &HashMap<AirportCode, Option<Parent>>,
    start: &str,
    goal: &str,
) -> Option<PathResult> {
    let mut path = vec![goal.to_string()];
    let mut segments = Vec::new();
    let mut current = goal;

    while current != start {
        let parent = parents.get(current)?.as_ref()?;
        segments.push(Segment {
            from: parent.from.clone(),
            to: current.to_string(),
            distance_km: parent.distance,
        });
        path.push(parent.from.clone());
        current = &parent.from;
    }

    path.reverse();
    segments.reverse();
    let total_distance = segments.iter().map(|s| s.distance_km).sum::<f64>() + 0.0;

    Some(PathResult {
        path,
        total_distance,
        segments,
    })
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: AirportCode,
    priority: FloatOrd,
    sequence: u64,
}

impl QueueEntry {
    fn new(node: AirportCode, priority: f64, sequence: u64) -> Self {
        Self {
            node,
            priority: FloatOrd(priority),
            sequence,
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by priority, with
        // earlier insertions winning ties.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
