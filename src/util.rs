//! Defines the `Error` type for the varelim library

use std::result;

use thiserror::Error;

pub type Result<T> = result::Result<T, VarelimError>;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum VarelimError {

    /// Represents an incomplete assignment where a complete assignment was required.
    #[error("Missing assignments to the required Variables")]
    IncompleteAssignment,

    /// Represents an error where a certain constraint on a scope was not satisfied
    #[error("Provided scope did not satisfy constraints")]
    InvalidScope,

    /// A query, evidence or elimination order referenced a `Variable` that is not in the model.
    /// The value is the name of the offending variable.
    #[error("Unknown variable `{0}`")]
    UnknownVariable(String),

    /// A label that is not part of the domain of the named variable
    #[error("Value `{value}` is not in the domain of variable `{variable}`")]
    UnknownValue { variable: String, value: String },

    /// No factor was left for the query variable after elimination
    #[error("Query variable `{0}` is unreachable: no factor remains for it")]
    MissingQueryResult(String),

    /// The total weight of a factor was zero, so it can not be normalized. During inference
    /// this means the evidence has zero probability under the model.
    #[error("Cannot normalize a factor with zero total weight")]
    NormalizeByZero,

    /// Represents an error where there was a parent variable expected, but not found
    #[error("Missing a parent from the model")]
    MissingParent,

    /// Represents a variable that was present multiple times in a situation where it should only
    /// have been present once
    #[error("A variable was encountered twice")]
    DuplicateVariable,

    /// Represents the situation when we expected a CPD but did not receive one
    #[error("Requires a Conditional Probability Distribution")]
    NotACPD,

    /// Represents an attempt to initialize a variable with an incompatible Initialization
    #[error("An invalid initialization was provided")]
    InvalidInitialization,

    /// Represents a situation in which a negative (or non-finite) weight was provided
    #[error("Encountered a negative probability")]
    NegativeProbability,

    /// A general error with the given description
    #[error("{0}")]
    General(String),

}
