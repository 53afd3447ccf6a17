//! Route planning strategies.
//!
//! Each algorithm sits behind the [`RoutePlanner`] trait so new search
//! strategies can be registered in [`select_planner`] without touching the
//! `solve`/`plan_route` entry points.

use crate::graph::Network;
use crate::path::{find_route_a_star, find_route_bfs, find_route_dijkstra, PathResult};

use super::RouteAlgorithm;

/// Trait for route planning strategies.
pub trait RoutePlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> RouteAlgorithm;

    /// Execute the search on the given network.
    ///
    /// Returns `None` when either code is unknown or no path exists.
    fn find_path(&self, network: &Network, start: &str, goal: &str) -> Option<PathResult>;
}

/// Fewest-legs planner. Ignores distances when choosing the path.
#[derive(Debug, Clone, Copy, Default)]
pub struct BfsPlanner;

impl RoutePlanner for BfsPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Bfs
    }

    fn find_path(&self, network: &Network, start: &str, goal: &str) -> Option<PathResult> {
        find_route_bfs(network, start, goal)
    }
}

/// Least-distance planner.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraPlanner;

impl RoutePlanner for DijkstraPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Dijkstra
    }

    fn find_path(&self, network: &Network, start: &str, goal: &str) -> Option<PathResult> {
        find_route_dijkstra(network, start, goal)
    }
}

/// Least-distance planner guided by great-circle distance to the goal.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStarPlanner;

impl RoutePlanner for AStarPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::AStar
    }

    fn find_path(&self, network: &Network, start: &str, goal: &str) -> Option<PathResult> {
        find_route_a_star(network, start, goal)
    }
}

/// Select the planner registered for an algorithm.
pub fn select_planner(algorithm: RouteAlgorithm) -> Box<dyn RoutePlanner> {
    match algorithm {
        RouteAlgorithm::Dijkstra => Box::new(DijkstraPlanner),
        RouteAlgorithm::Bfs => Box::new(BfsPlanner),
        RouteAlgorithm::AStar => Box::new(AStarPlanner),
    }
}
