//! Defines a `DirectedModel`, which is a Bayesian model that represents the factorization of
//! a probability distribution P

use crate::factor::Factor;
use crate::init::Initialization;
use crate::util::{Result, VarelimError};
use crate::variable::{Assignment, Variable};

use bidir_map::BidirMap;
use indexmap::IndexMap;

use std::collections::HashSet;


/// Represents a Bayesian Network - a Directed Probabilistic Graphical Model.
///
/// # Representation
/// The network is represented as a Directed Acyclic Graph (DAG). A traditional graph data
/// structure is not used for the simple representation of a `DirectedModel`; instead, the
/// Conditional Probability Distribution (CPD) of each `Variable` implicitly defines the edges of
/// the graph. The `Variable`s are held in their topological order to faciliate efficient
/// computations over the graph.
///
/// Every `Variable` has a name and one label per value, so queries and evidence can be phrased
/// the way the network was described (e.g. ```Alarm = True```).
pub struct DirectedModel {

    /// The `Variable`s comprising the scope of the `DirectedModel` and their associated CPDs. Note
    /// that the `Factor` associated with a `Variable` ```X``` has scope ```Pa(X) U X```, where
    /// ```Pa(X)``` are the parent's of ```X```. Therefore, in the DAG represented by this map,
    /// there are edges ```P -> X forall P in X.scope() where P != X```
    graph: IndexMap<Variable, Factor>,

    /// The user-defined names of each `Variable`. This is a two way lookup ```(`Variable`->Name)```
    /// and ```(Name->`Variable`)```
    names: BidirMap<Variable, String>,

    /// The labels of the values of each `Variable`, indexed by value
    labels: IndexMap<Variable, Vec<String>>

}

impl DirectedModel {

    /// Get the `Factor` for the given variable in this model.
    pub fn cpd(&self, v: &Variable) -> Option<&Factor> {
        self.graph.get(v)
    }

    /// Iterate over every `Variable` and its CPD, in topological order
    pub fn cpds(&self) -> impl Iterator<Item = (&Variable, &Factor)> {
        self.graph.iter()
    }

    /// Get a topological order of the `DirectedModel`
    pub fn topological_order(&self) -> Vec<Variable> {
        self.graph.keys().cloned().collect()
    }

    /// Get the parents of `v`, or `None` if `v` is not part of the model
    pub fn parents(&self, v: &Variable) -> Option<Vec<Variable>> {
        self.graph.get(v).map(|f| f.scope().into_iter().filter(|p| p != v).collect())
    }

    /// Lookup a `Variable` in the `DirectedModel` based on the name
    pub fn lookup_variable(&self, name: &str) -> Option<&Variable> {
        self.names.get_by_second(&String::from(name))
    }

    /// Lookup a `Variable`'s name in the `DirectedModel`.
    pub fn lookup_name(&self, var: &Variable) -> Option<&String> {
        self.names.get_by_first(var)
    }

    /// The name of `var` for display purposes. `Variable`s outside of the model are rendered by
    /// their identifier.
    pub fn display_name(&self, var: &Variable) -> String {
        self.lookup_name(var).cloned().unwrap_or_else(|| var.to_string())
    }

    /// Get all `Variable`s in the model.
    pub fn variables(&self) -> HashSet<Variable> {
        self.graph.keys().cloned().collect()
    }

    /// Check if `var` is part of the model
    pub fn contains(&self, var: &Variable) -> bool {
        self.graph.contains_key(var)
    }

    /// Get the number of `Variable`s in the the `DirectedModel`
    pub fn num_variables(&self) -> usize {
        self.graph.len()
    }

    /// The labels of the values of `var`, indexed by value
    pub fn labels(&self, var: &Variable) -> Option<&[String]> {
        self.labels.get(var).map(|l| l.as_slice())
    }

    /// The label of value `value` of `var`
    pub fn label(&self, var: &Variable, value: usize) -> Option<&str> {
        self.labels.get(var).and_then(|l| l.get(value)).map(|l| l.as_str())
    }

    /// The value of `var` with the given label
    pub fn value_index(&self, var: &Variable, label: &str) -> Option<usize> {
        self.labels.get(var).and_then(|l| l.iter().position(|x| x == label))
    }

    /// Build evidence from ```(name, label)``` observations.
    ///
    /// # Errors
    /// * `VarelimError::UnknownVariable` if a name does not belong to the model
    /// * `VarelimError::UnknownValue` if a label is not in the domain of its `Variable`
    pub fn evidence(&self, observations: &[(&str, &str)]) -> Result<Assignment> {
        let mut evidence = Assignment::new();

        for &(name, label) in observations {
            let var = self.lookup_variable(name)
                          .ok_or_else(|| VarelimError::UnknownVariable(String::from(name)))?;

            let value = self.value_index(var, label).ok_or_else(|| {
                VarelimError::UnknownValue { variable: String::from(name), value: String::from(label) }
            })?;

            evidence.set(var, value);
        }

        Ok(evidence)
    }

    /// Determine the probability of a full `Assignment` to the `Variable`s in the `DirectedModel`.
    ///
    /// Specifically, this computes ```P(zeta)```, where ```zeta``` is a full assignment.
    ///
    /// # Errors
    /// * `VarelimError::IncompleteAssignment` if the assignment does not cover the model
    pub fn probability(&self, assignment: &Assignment) -> Result<f64> {
        // for every variable in the graph
        self.graph.values()
                  // get the probability of the assignment
                  .map(|cpt| cpt.value(assignment))
                  // and multiply those probability by the chain rule
                  // but if there are any errors, just return the error
                  .fold(Ok(1.0), |acc, val| acc.and_then(|p| val.map(|v| p * v)))
    }
}


/// An implementation of the [builder pattern] for creating a `DirectedModel`.
///
/// Models must be assembled in topological order: the parents of a `Variable` are added
/// before the `Variable` itself.
///
/// [builder pattern]: https://en.wikipedia.org/wiki/Builder_pattern
pub struct DirectedModelBuilder {

    /// The `Variable`s and their associated CPDs
    factors: IndexMap<Variable, Factor>,

    /// The names of each `Variable`
    names: BidirMap<Variable, String>,

    /// The value labels of each `Variable`
    labels: IndexMap<Variable, Vec<String>>,

    /// The error state of the builder
    err: Option<VarelimError>

}


impl DirectedModelBuilder {

    /// Construct a new `DirectedModelBuilder` representing an empty `DirectedModel`
    pub fn new() -> Self {
        DirectedModelBuilder {
            factors: IndexMap::new(),
            names: BidirMap::new(),
            labels: IndexMap::new(),
            err: None
        }
    }


    /// Add an anonymous `Variable` to the `DirectedModel`. Its values are labeled ```"0"```,
    /// ```"1"```, ...
    ///
    /// # Args
    /// * `var`: the variable to add to the model
    /// * `parents`: the parent variables. The parents must already be in the model.
    /// * `init`: the initialization mechanism for the CPD of `var` in the model.
    pub fn with_variable(
        self,
        var: &Variable,
        parents: &[Variable],
        init: Initialization,
    ) -> Self {
        let labels = default_labels(var);
        self.add_variable(var, var.to_string(), labels, parents, init)
    }


    /// Add a named `Variable` to the `DirectedModel`. Its values are labeled ```"0"```,
    /// ```"1"```, ...
    ///
    /// # Args
    /// * `var`: the variable to add to the model
    /// * `name`: the name for the variable.
    /// * `parents`: the parent variables. The parents must already be in the model.
    /// * `init`: the initialization mechanism for the CPD of `var` in the model.
    pub fn with_named_variable(
        self,
        var: &Variable,
        name: &str,
        parents: &[Variable],
        init: Initialization,
    ) -> Self {
        let labels = default_labels(var);
        self.add_variable(var, String::from(name), labels, parents, init)
    }


    /// Add a named `Variable` with labeled values to the `DirectedModel`.
    ///
    /// # Args
    /// * `var`: the variable to add to the model
    /// * `name`: the name for the variable.
    /// * `labels`: one distinct label per value of `var`, in value order
    /// * `parents`: the parent variables. The parents must already be in the model.
    /// * `init`: the initialization mechanism for the CPD of `var` in the model.
    pub fn with_labeled_variable(
        self,
        var: &Variable,
        name: &str,
        labels: &[&str],
        parents: &[Variable],
        init: Initialization,
    ) -> Self {
        let labels = labels.iter().map(|&l| String::from(l)).collect();
        self.add_variable(var, String::from(name), labels, parents, init)
    }


    /// Complete building the model.
    ///
    /// # Returns
    /// the `DirectedModel`, or an error if one was generated during the building process
    ///
    /// # Postcondition
    /// This call consumes the `DirectedModelBuilder`
    pub fn build(self) -> Result<DirectedModel> {
        if let Some(e) = self.err {
            Err(e)
        } else {
            Ok(self.into_model())
        }
    }

    /// Internal function that constructs the model
    fn into_model(self) -> DirectedModel {
        DirectedModel { graph: self.factors, names: self.names, labels: self.labels }
    }

    /// Internal function that acutally does the variable addition to the model
    fn add_variable(
        mut self,
        var: &Variable,
        name: String,
        labels: Vec<String>,
        parents: &[Variable],
        init: Initialization,
    ) -> Self {
        ///////////////////////////////////////////////////////////////////////
        // 1) if we are in an error state, do nothing
        if self.err.is_some() {
            return self;
        }

        ///////////////////////////////////////////////////////////////////////
        // 2) Check for error conditions
        if parents.iter().any(|v| ! self.factors.contains_key(v)) {
            self.err = Some(VarelimError::MissingParent);
            return self;
        }

        if self.factors.contains_key(var) || self.names.get_by_second(&name).is_some() {
            self.err = Some(VarelimError::DuplicateVariable);
            return self;
        }

        let distinct: HashSet<&String> = labels.iter().collect();
        if labels.len() != var.cardinality() || distinct.len() != labels.len() {
            self.err = Some(VarelimError::InvalidInitialization);
            return self;
        }

        ///////////////////////////////////////////////////////////////////////
        // 3) Build the factor based on the initialization
        let factor = match init.build_cpd(*var, parents) {
            Ok(f) => f,
            Err(e) => {
                self.err = Some(e);
                return self;
            }
        };

        ///////////////////////////////////////////////////////////////////////
        // 4) Add to current model
        self.factors.insert(*var, factor);
        self.names.insert(*var, name);
        self.labels.insert(*var, labels);

        self
    }
}

impl Default for DirectedModelBuilder {

    fn default() -> Self {
        DirectedModelBuilder::new()
    }

}

fn default_labels(var: &Variable) -> Vec<String> {
    (0..var.cardinality()).map(|i| i.to_string()).collect()
}
