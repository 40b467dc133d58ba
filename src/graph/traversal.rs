//! BFS queries over [`Graph`].

use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::Hash;

use crate::graph::Graph;

impl<V: Eq + Hash + Clone> Graph<V> {
    /// Breadth-first traversal from `start`.
    /// Returns vertices in the order they were first discovered.
    pub fn traverse(&self, start: V) -> Vec<V> {
        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();
        let mut result = Vec::new();

        visited.insert(start.clone());
        queue.push_back(start);

        while let Some(vertex) = queue.pop_front() {
            for neighbor in self.neighbors(&vertex) {
                if !visited.contains(neighbor) {
                    visited.insert(neighbor.clone());
                    queue.push_back(neighbor.clone());
                }
            }
            result.push(vertex);
        }

        log::debug!("BFS reached {} vertices", result.len());
        result
    }

    /// Breadth-first traversal labelling every reachable vertex with its depth.
    ///
    /// `start` has depth 0. A depth is set at first discovery and never revised,
    /// which for an unweighted graph is the shortest edge distance from `start`.
    /// Unreachable vertices are absent from the map.
    pub fn traverse_with_levels(&self, start: V) -> HashMap<V, usize> {
        let mut levels = HashMap::new();
        let mut queue = VecDeque::new();

        levels.insert(start.clone(), 0);
        queue.push_back((start, 0));

        while let Some((vertex, depth)) = queue.pop_front() {
            for neighbor in self.neighbors(&vertex) {
                if !levels.contains_key(neighbor) {
                    levels.insert(neighbor.clone(), depth + 1);
                    queue.push_back((neighbor.clone(), depth + 1));
                }
            }
        }

        log::debug!("BFS levels computed for {} vertices", levels.len());
        levels
    }

    /// Fewest-edges path from `start` to `end`, or `None` if `end` is unreachable.
    ///
    /// `start == end` always yields `[start]`. The search stops as soon as `end`
    /// is seen as a neighbor. Among several shortest paths the one returned
    /// depends on edge insertion order.
    pub fn shortest_path(&self, start: V, end: V) -> Option<Vec<V>> {
        if start == end {
            return Some(vec![start]);
        }

        let mut visited = HashSet::new();
        let mut queue: VecDeque<(V, Vec<V>)> = VecDeque::new();

        visited.insert(start.clone());
        queue.push_back((start.clone(), vec![start]));

        while let Some((vertex, path)) = queue.pop_front() {
            for neighbor in self.neighbors(&vertex) {
                if *neighbor == end {
                    let mut found = path;
                    found.push(neighbor.clone());
                    log::debug!("Shortest path found with {} edges", found.len() - 1);
                    return Some(found);
                }

                if !visited.contains(neighbor) {
                    visited.insert(neighbor.clone());
                    let mut extended = path.clone();
                    extended.push(neighbor.clone());
                    queue.push_back((neighbor.clone(), extended));
                }
            }
        }

        log::debug!("No path found");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 0->1, 0->2, 1->2, 2->0, 2->3, 3->3
    fn numeric_graph() -> Graph<i32> {
        vec![(0, 1), (0, 2), (1, 2), (2, 0), (2, 3), (3, 3)]
            .into_iter()
            .collect()
    }

    /// A->B, A->C, B->D, C->D, C->E, D->E, D->F, E->F
    fn letter_graph() -> Graph<&'static str> {
        vec![
            ("A", "B"),
            ("A", "C"),
            ("B", "D"),
            ("C", "D"),
            ("C", "E"),
            ("D", "E"),
            ("D", "F"),
            ("E", "F"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_traverse_discovery_order() {
        let graph = numeric_graph();
        assert_eq!(graph.traverse(2), vec![2, 0, 3, 1]);
        assert_eq!(graph.traverse(0), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_traverse_isolated_start() {
        let graph: Graph<i32> = Graph::new();
        assert_eq!(graph.traverse(5), vec![5]);

        let graph = numeric_graph();
        assert_eq!(graph.traverse(42), vec![42]);
    }

    #[test]
    fn test_traverse_discoverer_precedes_discovered() {
        let graph = letter_graph();
        let order = graph.traverse("A");
        let position = |v: &str| order.iter().position(|x| *x == v).unwrap();
        for (i, vertex) in order.iter().enumerate().skip(1) {
            // Some earlier vertex must have an edge to this one.
            assert!(
                order[..i]
                    .iter()
                    .any(|earlier| graph.neighbors(earlier).contains(vertex)),
                "{} appears before any of its predecessors",
                vertex
            );
        }
        assert!(position("B") < position("D"));
        assert!(position("D") < position("F"));
    }

    #[test]
    fn test_traverse_with_levels() {
        let graph = numeric_graph();
        let levels = graph.traverse_with_levels(2);
        let expected: HashMap<i32, usize> = [(2, 0), (0, 1), (3, 1), (1, 2)].into_iter().collect();
        assert_eq!(levels, expected);
    }

    #[test]
    fn test_levels_omit_unreachable() {
        let mut graph = letter_graph();
        graph.add_edge("X", "A");
        let levels = graph.traverse_with_levels("B");
        assert_eq!(levels.get("B"), Some(&0));
        assert_eq!(levels.get("F"), Some(&2));
        assert!(!levels.contains_key("A"));
        assert!(!levels.contains_key("X"));
    }

    #[test]
    fn test_shortest_path_letter_graph() {
        let graph = letter_graph();
        let path = graph.shortest_path("A", "F").unwrap();
        assert_eq!(path.len(), 4);
        assert_eq!(path.first(), Some(&"A"));
        assert_eq!(path.last(), Some(&"F"));
        // Fixed insertion order makes the tie-break deterministic.
        assert_eq!(path, vec!["A", "B", "D", "F"]);
    }

    #[test]
    fn test_shortest_path_to_self() {
        let graph: Graph<&str> = Graph::new();
        assert_eq!(graph.shortest_path("solo", "solo"), Some(vec!["solo"]));
    }

    #[test]
    fn test_shortest_path_unreachable() {
        let graph = letter_graph();
        assert_eq!(graph.shortest_path("F", "A"), None);
        assert_eq!(graph.shortest_path("A", "Z"), None);
    }

    #[test]
    fn test_shortest_path_uses_self_loop_free_route() {
        let graph = numeric_graph();
        assert_eq!(graph.shortest_path(3, 0), None);
        assert_eq!(graph.shortest_path(1, 3), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_levels_match_path_lengths() {
        let mut graph = letter_graph();
        graph.add_edge("F", "G");
        graph.add_edge("E", "A");
        graph.add_edge("B", "B");
        let vertices = ["A", "B", "C", "D", "E", "F", "G", "Q"];
        for start in vertices {
            let levels = graph.traverse_with_levels(start);
            for end in vertices {
                match graph.shortest_path(start, end) {
                    Some(path) => {
                        assert_eq!(levels.get(end), Some(&(path.len() - 1)));
                        for pair in path.windows(2) {
                            assert!(graph.neighbors(&pair[0]).contains(&pair[1]));
                        }
                    }
                    None => assert!(!levels.contains_key(end)),
                }
            }
        }
    }

    #[test]
    fn test_repeated_edges_visit_once() {
        let graph: Graph<i32> = vec![(1, 2), (1, 2), (1, 3), (2, 3), (2, 3)]
            .into_iter()
            .collect();
        assert_eq!(graph.edge_count(), 5);

        assert_eq!(graph.traverse(1), vec![1, 2, 3]);
        let expected: HashMap<i32, usize> = [(1, 0), (2, 1), (3, 1)].into_iter().collect();
        assert_eq!(graph.traverse_with_levels(1), expected);
        assert_eq!(graph.shortest_path(1, 3), Some(vec![1, 3]));
    }

    #[test]
    fn test_queries_are_idempotent() {
        let graph = numeric_graph();
        assert_eq!(graph.traverse(0), graph.traverse(0));
        assert_eq!(graph.traverse_with_levels(1), graph.traverse_with_levels(1));
        assert_eq!(graph.shortest_path(0, 3), graph.shortest_path(0, 3));
    }

    #[test]
    fn test_owned_string_vertices() {
        let mut graph: Graph<String> = Graph::new();
        graph.add_edge("home".to_string(), "lib".to_string());
        graph.add_edge("lib".to_string(), "src".to_string());
        assert_eq!(
            graph.shortest_path("home".to_string(), "src".to_string()),
            Some(vec!["home".to_string(), "lib".to_string(), "src".to_string()])
        );
    }
}
