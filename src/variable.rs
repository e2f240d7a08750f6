//! Definition of the variable module
//!
//! A `Variable` represents a discrete random variable in a Bayesian network. `Variable`s are
//! lightweight handles: they carry an identity and the number of values they may take on. The
//! human readable name and the labels of the values live in the model.

use indexmap::IndexMap;
use indexmap::map::Iter;
use itertools::Itertools;

use std::fmt;
use std::iter;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Source of unique `Variable` identifiers
static NEXT_ID: AtomicUsize = AtomicUsize::new(0);


/// A discrete random variable with values `0..cardinality`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable {
    /// Unique identity of the `Variable`
    id: usize,

    /// The number of values the `Variable` may take on
    cardinality: usize
}

impl Variable {

    /// Construct a new binary `Variable`
    pub fn binary() -> Self {
        Variable::discrete(2)
    }

    /// Construct a new `Variable` that can take on `cardinality` values.
    ///
    /// # Panics
    /// if `cardinality` is zero. A random variable needs at least one value.
    pub fn discrete(cardinality: usize) -> Self {
        assert!(cardinality > 0, "a Variable must have at least one value");

        Variable {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            cardinality
        }
    }

    /// Get the number of values the `Variable` may take on
    pub fn cardinality(&self) -> usize {
        self.cardinality
    }

    /// Get the unique identifier of the `Variable`
    pub fn id(&self) -> usize {
        self.id
    }
}

impl fmt::Display for Variable {

    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "X{}", self.id)
    }

}


/// An `Assignment` maps `Variable`s to the index of one of their values. An `Assignment` may be
/// partial, e.g. when used as evidence. Insertion order is preserved, so iterating an
/// `Assignment` is deterministic.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Assignment {
    values: IndexMap<Variable, usize>
}

impl Assignment {

    /// Construct an empty `Assignment`
    pub fn new() -> Self {
        Assignment { values: IndexMap::new() }
    }

    /// Assign `value` to `var`, replacing any previous value
    pub fn set(&mut self, var: &Variable, value: usize) {
        self.values.insert(*var, value);
    }

    /// Get the value assigned to `var`, if any
    pub fn get(&self, var: &Variable) -> Option<&usize> {
        self.values.get(var)
    }

    /// Check if `var` has been assigned a value
    pub fn contains(&self, var: &Variable) -> bool {
        self.values.contains_key(var)
    }

    /// The assigned `Variable`s, in the order they were assigned
    pub fn keys(&self) -> impl Iterator<Item = &Variable> {
        self.values.keys()
    }

    pub fn iter(&self) -> Iter<Variable, usize> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<'a> IntoIterator for &'a Assignment {
    type Item = (&'a Variable, &'a usize);
    type IntoIter = Iter<'a, Variable, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl iter::FromIterator<(Variable, usize)> for Assignment {

    fn from_iter<I: IntoIterator<Item = (Variable, usize)>>(it: I) -> Self {
        Assignment { values: it.into_iter().collect() }
    }

}


/// Iterate over every complete `Assignment` to `scope`.
///
/// Assignments are produced in row-major order: the last `Variable` of the scope varies fastest,
/// which matches the layout of a `Factor` table over the same scope. An empty scope has exactly
/// one (empty) assignment.
pub fn all_assignments(scope: &[Variable]) -> Box<dyn Iterator<Item = Assignment>> {
    if scope.is_empty() {
        return Box::new(iter::once(Assignment::new()));
    }

    let scope = scope.to_vec();
    let values = scope.iter().map(|v| 0..v.cardinality()).collect::<Vec<_>>();

    Box::new(
        values.into_iter()
              .multi_cartesian_product()
              .map(move |vals| scope.iter().cloned().zip(vals).collect())
    )
}
