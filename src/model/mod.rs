//! Defines the Bayesian network model consumed by the inference engines.
//!
//! A `DirectedModel` represents the factorization of a probability distribution P over discrete
//! `Variable`s into one conditional probability distribution per `Variable`.

mod directed;

pub use self::directed::{DirectedModel, DirectedModelBuilder};
