//! Defines exact inference on a `DirectedModel`.
//!
//! A query ```P(Q | E = e)``` is answered by a `VariableEliminationEngine`, given the evidence
//! and an `EliminationOrder`. An `Instrumentation` sink may be passed along to count the
//! arithmetic the query costs.

mod instrumentation;
mod ordering;
mod variable_elimination;

pub use self::instrumentation::{Instrumentation, NoInstrumentation, OperationCounts};
pub use self::ordering::{EliminationOrder, Heuristic, MaxCardinality, ModelOrder};
pub use self::variable_elimination::VariableEliminationEngine;
