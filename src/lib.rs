//! Exact inference on discrete Bayesian networks by variable elimination.
//!
//! A `DirectedModel` is built from `Variable`s and their conditional probability distributions,
//! each one a `Factor`. A `VariableEliminationEngine` then answers ```P(Q | E = e)``` for a single
//! query `Variable`, following a caller provided `EliminationOrder`.

pub mod util;
pub mod variable;
pub mod factor;
pub mod init;
pub mod model;
pub mod inference;

pub use crate::util::{Result, VarelimError};
pub use crate::variable::{all_assignments, Assignment, Variable};
pub use crate::factor::{Factor, Table};
pub use crate::init::Initialization;
pub use crate::model::{DirectedModel, DirectedModelBuilder};
pub use crate::inference::{
    EliminationOrder,
    Heuristic,
    Instrumentation,
    MaxCardinality,
    ModelOrder,
    NoInstrumentation,
    OperationCounts,
    VariableEliminationEngine
};
