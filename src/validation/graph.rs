//! Workflow-graph structure checks
//!
//! A workflow graph returned by the service (or assembled locally) must have
//! unique node ids, edges whose endpoints resolve, and no cycles. Uses
//! petgraph to build the digraph and detect cycles.

use petgraph::Directed;
use petgraph::Graph;
use petgraph::algo::toposort;
use std::collections::HashMap;

use crate::models::workflow::WorkflowGraph;

/// Structural defect found in a workflow graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("node without a unique id")]
    MissingNodeId,

    #[error("duplicate node id: {unique_id}")]
    DuplicateNodeId { unique_id: String },

    #[error("edge references unknown node: {node_id}")]
    UnknownEdgeEndpoint { node_id: String },

    #[error("edge is missing an endpoint")]
    IncompleteEdge,

    #[error("dependency cycle through node: {node_id}")]
    Cycle { node_id: String },
}

/// Check node-id uniqueness, edge resolution and acyclicity.
pub fn validate_workflow_graph(graph: &WorkflowGraph) -> Result<(), GraphError> {
    let mut dag = Graph::<&str, (), Directed>::new();
    let mut node_map = HashMap::new();

    for node in &graph.nodes {
        let unique_id = node
            .unique_id
            .as_deref()
            .ok_or(GraphError::MissingNodeId)?;
        if node_map.contains_key(unique_id) {
            return Err(GraphError::DuplicateNodeId {
                unique_id: unique_id.to_string(),
            });
        }
        let index = dag.add_node(unique_id);
        node_map.insert(unique_id, index);
    }

    for edge in &graph.edges {
        let (Some(source), Some(destination)) =
            (edge.source_id.as_deref(), edge.destination_id.as_deref())
        else {
            return Err(GraphError::IncompleteEdge);
        };
        let source_index = *node_map
            .get(source)
            .ok_or_else(|| GraphError::UnknownEdgeEndpoint {
                node_id: source.to_string(),
            })?;
        let destination_index =
            *node_map
                .get(destination)
                .ok_or_else(|| GraphError::UnknownEdgeEndpoint {
                    node_id: destination.to_string(),
                })?;
        dag.add_edge(source_index, destination_index, ());
    }

    if let Err(cycle) = toposort(&dag, None) {
        let node_id = dag[cycle.node_id()].to_string();
        tracing::debug!(%node_id, "workflow graph contains a cycle");
        return Err(GraphError::Cycle { node_id });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::workflow::{Edge, Node};

    fn node(id: &str) -> Node {
        Node::new().with_unique_id(id)
    }

    fn edge(from: &str, to: &str) -> Edge {
        Edge::new().with_source_id(from).with_destination_id(to)
    }

    #[test]
    fn test_valid_chain() {
        let graph = WorkflowGraph::new()
            .with_nodes(vec![node("t1"), node("j1"), node("c1")])
            .with_edges(vec![edge("t1", "j1"), edge("j1", "c1")]);
        assert!(validate_workflow_graph(&graph).is_ok());
    }

    #[test]
    fn test_duplicate_node_id() {
        let graph = WorkflowGraph::new().with_nodes(vec![node("t1"), node("t1")]);
        assert_eq!(
            validate_workflow_graph(&graph),
            Err(GraphError::DuplicateNodeId {
                unique_id: "t1".to_string()
            })
        );
    }

    #[test]
    fn test_dangling_edge() {
        let graph = WorkflowGraph::new()
            .with_node(node("t1"))
            .with_edge(edge("t1", "ghost"));
        assert_eq!(
            validate_workflow_graph(&graph),
            Err(GraphError::UnknownEdgeEndpoint {
                node_id: "ghost".to_string()
            })
        );
    }

    #[test]
    fn test_cycle_detected() {
        let graph = WorkflowGraph::new()
            .with_nodes(vec![node("a"), node("b")])
            .with_edges(vec![edge("a", "b"), edge("b", "a")]);
        assert!(matches!(
            validate_workflow_graph(&graph),
            Err(GraphError::Cycle { .. })
        ));
    }

    #[test]
    fn test_empty_graph_is_valid() {
        assert!(validate_workflow_graph(&WorkflowGraph::new()).is_ok());
    }
}
