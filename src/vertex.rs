use petgraph::graph::NodeIndex;

/// User facing vertex identifier, as stored in label paths.
pub type VertexId = i64;

/// A graph vertex: dense index into the caller's graph plus its user id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vertex {
    pub index: NodeIndex,
    pub id: VertexId,
}

impl Vertex {
    pub fn new(index: NodeIndex, id: VertexId) -> Self {
        Self { index, id }
    }
}

/// Neighbour reached over one edge, with the edge's cost and resource usage.
///
/// For forward extension `vertex` is the edge head, for backward extension
/// the edge tail.
#[derive(Clone, Debug, PartialEq)]
pub struct AdjVertex {
    pub vertex: Vertex,
    pub weight: f64,
    pub resource_consumption: Vec<f64>,
}

impl AdjVertex {
    pub fn new(vertex: Vertex, weight: f64, resource_consumption: Vec<f64>) -> Self {
        Self {
            vertex,
            weight,
            resource_consumption,
        }
    }
}
