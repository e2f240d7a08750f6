//! Elimination orders for variable elimination.
//!
//! An `EliminationOrder` decides in which order `Variable`s are summed out. The engine follows
//! the order literally, so any heuristic lives here and the engine stays independent of it.

use crate::model::DirectedModel;
use crate::variable::Variable;

use indexmap::{IndexMap, IndexSet};

/// Produces the sequence of `Variable`s to eliminate for a given model.
///
/// The sequence may contain the query and observed `Variable`s; the engine skips them.
pub trait EliminationOrder {

    fn order(&self, model: &DirectedModel) -> Vec<Variable>;

}

/// An explicit elimination order
impl EliminationOrder for [Variable] {

    fn order(&self, _model: &DirectedModel) -> Vec<Variable> {
        self.to_vec()
    }

}

/// An explicit elimination order
impl EliminationOrder for Vec<Variable> {

    fn order(&self, _model: &DirectedModel) -> Vec<Variable> {
        self.clone()
    }

}

impl<'a, T: EliminationOrder + ?Sized> EliminationOrder for &'a T {

    fn order(&self, model: &DirectedModel) -> Vec<Variable> {
        (**self).order(model)
    }

}


/// Wraps a function that computes an elimination order from the model, e.g.
/// ```Heuristic(|m: &DirectedModel| m.topological_order())```
pub struct Heuristic<F>(pub F);

impl<F> EliminationOrder for Heuristic<F>
    where F: Fn(&DirectedModel) -> Vec<Variable>
{

    fn order(&self, model: &DirectedModel) -> Vec<Variable> {
        (self.0)(model)
    }

}


/// Every `Variable` of the model in topological order.
#[derive(Clone, Copy, Debug, Default)]
pub struct ModelOrder;

impl EliminationOrder for ModelOrder {

    fn order(&self, model: &DirectedModel) -> Vec<Variable> {
        model.topological_order()
    }

}


/// The max-cardinality heuristic of Koller & Friedman Algorithm 9.3.
///
/// Works on the interaction graph of the CPDs (the moralized network): two `Variable`s are
/// neighbors if they appear together in some CPD. Ties are broken by topological order.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaxCardinality;

impl EliminationOrder for MaxCardinality {

    fn order(&self, model: &DirectedModel) -> Vec<Variable> {
        // since we do not explictly hold the graph structure, we need to determine the neighbors
        // of each variable.
        let mut neighbors: IndexMap<Variable, IndexSet<Variable>> = model.topological_order()
                                                                         .into_iter()
                                                                         .map(|v| (v, IndexSet::new()))
                                                                         .collect();

        for (_, f) in model.cpds() {
            let scope = f.scope();
            for (i, vi) in scope.iter().enumerate() {
                for vj in scope.iter().skip(i + 1) {
                    if let Some(n) = neighbors.get_mut(vi) {
                        n.insert(*vj);
                    }
                    if let Some(n) = neighbors.get_mut(vj) {
                        n.insert(*vi);
                    }
                }
            }
        }

        // set of marked variables
        let mut marked = IndexSet::new();

        // for |vars| iterations, mark the unmarked variable with the most marked neighbors
        while marked.len() < neighbors.len() {
            let next = neighbors.iter()
                                .filter(|(v, _)| ! marked.contains(*v))
                                .map(|(v, ns)| (*v, ns.iter().filter(|n| marked.contains(*n)).count()))
                                .fold(None, |best: Option<(Variable, usize)>, (v, ct)| match best {
                                    Some((_, max)) if max >= ct => best,
                                    _ => Some((v, ct))
                                });

            match next {
                Some((v, _)) => { marked.insert(v); },
                None => break
            }
        }

        // the marking order is the reverse elimination order
        marked.into_iter().rev().collect()
    }

}
