#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! Label core of a bidirectional labelling algorithm for the resource
//! constrained shortest path problem.
//!
//! A [`Label`] is a partial path with accumulated cost and resource
//! consumption. Labels are extended along edges described by [`AdjVertex`],
//! compared with [`Label::check_dominance`] and kept in a [`LabelPool`] per
//! search direction, from which [`get_next_label`] hands out the next label
//! to process and [`run_dominance_eff`] prunes dominated ones.
//!
//! Graph storage, choosing the direction to extend and joining forward and
//! backward labels into complete paths are left to the caller.

pub mod error;
pub mod label;
pub mod params;
pub mod pool;
pub mod vertex;

pub use error::{RcspError, Result};
pub use label::Label;
pub use params::{Direction, Params};
pub use pool::{get_next_label, run_dominance_eff, CriticalResourceOrder, LabelPool};
pub use vertex::{AdjVertex, Vertex, VertexId};
