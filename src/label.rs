use std::collections::BTreeSet;
use std::fmt;

use itertools::Itertools;
use log::debug;

use crate::error::{RcspError, Result};
use crate::params::{Direction, Params};
use crate::vertex::{AdjVertex, Vertex, VertexId};

#[derive(Clone, Debug)]
/// Partial path of a labelling search.
///
/// Holds the accumulated cost, current vertex, resource consumption and
/// visited vertices of the path. Under elementary mode it also carries the
/// vertices the path may no longer be extended to.
///
/// Everything except the unreachable set is fixed at construction.
pub struct Label<'p> {
    weight: f64,
    vertex: Vertex,
    resource_consumption: Vec<f64>,
    path: Vec<VertexId>,
    unreachable_nodes: BTreeSet<VertexId>,
    params: &'p Params,
}

impl<'p> Label<'p> {
    /// Label constructor
    ///
    /// Fails if `resource_consumption` does not have `params.resource_count`
    /// entries, if `path` is empty or if it does not end at `vertex`. Under elementary mode the vertices of
    /// `path` start out unreachable.
    pub fn new(
        weight: f64,
        vertex: Vertex,
        resource_consumption: Vec<f64>,
        path: Vec<VertexId>,
        params: &'p Params,
    ) -> Result<Self> {
        params.validate()?;
        if resource_consumption.len() != params.resource_count {
            return Err(RcspError::ResourceDimension {
                expected: params.resource_count,
                found: resource_consumption.len(),
            });
        }
        match path.last() {
            None => return Err(RcspError::EmptyPath),
            Some(&last) if last != vertex.id => {
                return Err(RcspError::PathEnd { vertex: vertex.id, last });
            }
            Some(_) => {}
        }

        let unreachable_nodes = if params.elementary {
            path.iter().copied().collect()
        } else {
            BTreeSet::new()
        };

        Ok(Self {
            weight,
            vertex,
            resource_consumption,
            path,
            unreachable_nodes,
            params,
        })
    }

    /// Replaces the unreachable set, builder style.
    pub fn with_unreachable_nodes<I: IntoIterator<Item = VertexId>>(mut self, nodes: I) -> Self {
        self.set_unreachable_nodes(nodes);
        self
    }

    /// Replaces the unreachable set. Only meant to be called before the
    /// label takes part in dominance checks.
    pub fn set_unreachable_nodes<I: IntoIterator<Item = VertexId>>(&mut self, nodes: I) {
        self.unreachable_nodes = nodes.into_iter().collect();
    }

    pub fn mark_unreachable(&mut self, node: VertexId) {
        self.unreachable_nodes.insert(node);
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn vertex(&self) -> Vertex {
        self.vertex
    }

    pub fn resource_consumption(&self) -> &[f64] {
        &self.resource_consumption
    }

    /// Value of the critical resource, the pool ordering key.
    pub fn critical_resource(&self) -> f64 {
        self.resource_consumption[self.params.critical_res]
    }

    pub fn path(&self) -> &[VertexId] {
        &self.path
    }

    pub fn unreachable_nodes(&self) -> &BTreeSet<VertexId> {
        &self.unreachable_nodes
    }

    pub fn params(&self) -> &'p Params {
        self.params
    }

    /// Second to last vertex of the path, if the path has one.
    pub fn predecessor(&self) -> Option<VertexId> {
        self.path.iter().rev().nth(1).copied()
    }

    /// Creates the label of this path extended across `adj`.
    ///
    /// Forward extension adds the edge resources, backward extension
    /// subtracts them. Feasibility is not checked here, see
    /// [`Label::check_feasibility`].
    pub fn extend(&self, adj: &AdjVertex, direction: Direction) -> Result<Label<'p>> {
        if adj.resource_consumption.len() != self.resource_consumption.len() {
            return Err(RcspError::ResourceDimension {
                expected: self.resource_consumption.len(),
                found: adj.resource_consumption.len(),
            });
        }

        let resource_consumption = self
            .resource_consumption
            .iter()
            .zip_eq(&adj.resource_consumption)
            .map(|(current, edge)| match direction {
                Direction::Forward => current + edge,
                Direction::Backward => current - edge,
            })
            .collect();

        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(adj.vertex.id);

        let mut unreachable_nodes = self.unreachable_nodes.clone();
        if self.params.elementary {
            unreachable_nodes.insert(adj.vertex.id);
        }

        Ok(Label {
            weight: self.weight + adj.weight,
            vertex: adj.vertex,
            resource_consumption,
            path,
            unreachable_nodes,
            params: self.params,
        })
    }

    /// Whether extending to `vertex` keeps the path elementary and free of
    /// two-cycles, as far as the active params require.
    pub fn can_extend_to(&self, vertex: &Vertex) -> bool {
        if self.params.elementary && self.unreachable_nodes.contains(&vertex.id) {
            return false;
        }
        if self.params.two_cycle_elimination && self.predecessor() == Some(vertex.id) {
            return false;
        }
        true
    }

    /// Returns true if this label dominates `other` in `direction`.
    ///
    /// Labels with different resource counts never dominate each other.
    ///
    /// Requires weight and every resource to be at least as good (lower
    /// resources forward, higher backward), plus the subset rule on
    /// unreachable sets under elementary mode and equal predecessors under
    /// two-cycle elimination. At least one comparison must be strict, so a
    /// label never dominates an exact duplicate of itself.
    pub fn check_dominance(&self, other: &Label<'_>, direction: Direction) -> bool {
        self.dominates(other, direction, self.params.elementary)
    }

    pub(crate) fn dominates(&self, other: &Label<'_>, direction: Direction, elementary: bool) -> bool {
        if self.resource_consumption.len() != other.resource_consumption.len() {
            debug!("labels {} and {} have different resource counts, not comparable", self, other);
            return false;
        }
        if self.weight > other.weight {
            return false;
        }
        let mut strict = self.weight < other.weight;

        for (&mine, &theirs) in self.resource_consumption.iter().zip_eq(&other.resource_consumption) {
            let (better, worse) = match direction {
                Direction::Forward => (mine < theirs, mine > theirs),
                Direction::Backward => (mine > theirs, mine < theirs),
            };
            if worse {
                return false;
            }
            strict |= better;
        }

        if self.params.two_cycle_elimination {
            if let (Some(mine), Some(theirs)) = (self.predecessor(), other.predecessor()) {
                if mine != theirs {
                    return false;
                }
            }
        }

        if elementary {
            if !self.unreachable_nodes.is_subset(&other.unreachable_nodes) {
                return false;
            }
            strict |= self.unreachable_nodes.len() < other.unreachable_nodes.len();
        }

        strict
    }

    /// Checks the resource vector against `min_res` and `max_res`.
    ///
    /// With `soft` only the critical resource is bounded from below, the
    /// others are only checked against their upper bound. Fails if a bound
    /// slice does not have one entry per resource.
    pub fn check_feasibility(&self, max_res: &[f64], min_res: &[f64], soft: bool) -> Result<bool> {
        let expected = self.resource_consumption.len();
        if let Some(bounds) = [max_res, min_res].into_iter().find(|bounds| bounds.len() != expected) {
            return Err(RcspError::ResourceDimension {
                expected,
                found: bounds.len(),
            });
        }

        let critical = self.params.critical_res;
        Ok(self
            .resource_consumption
            .iter()
            .zip_eq(max_res.iter().zip_eq(min_res))
            .enumerate()
            .all(|(i, (&value, (&max, &min)))| {
                if value > max {
                    return false;
                }
                !(value < min && (!soft || i == critical))
            }))
    }

    /// True if the path cost is strictly below `bound`.
    pub fn check_threshold(&self, bound: f64) -> bool {
        self.weight < bound
    }

    /// True if the path starts at `source` and ends at `sink`.
    pub fn check_st_path(&self, source: VertexId, sink: VertexId) -> bool {
        self.path.first() == Some(&source) && self.path.last() == Some(&sink)
    }
}

impl PartialEq for Label<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight
            && self.vertex == other.vertex
            && self.resource_consumption == other.resource_consumption
    }
}

impl fmt::Display for Label<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Label({},{},{:?})",
            self.vertex.id, self.weight, self.resource_consumption
        )
    }
}
