//! Defines a `VariableEliminationEngine` that uses exact inference by variable elimination to
//! answer conditional queries ```P(Q | E = e)``` on a `DirectedModel`.
//!
//! The engine keeps one factor per owning `Variable` (initially the CPD of that `Variable`).
//! Observed `Variable`s are reduced out of every factor, then each `Variable` of the
//! elimination order is summed out of the factors that mention it. The factor that is left for
//! the query is normalized and returned.

use crate::factor::Factor;
use crate::model::DirectedModel;
use crate::util::{VarelimError, Result};
use crate::variable::{Assignment, Variable};
use super::instrumentation::{Instrumentation, NoInstrumentation};
use super::ordering::EliminationOrder;

use indexmap::IndexMap;
use tracing::{debug, trace};

/// The factors of a run, keyed by the `Variable` that owns them
type FactorCollection = IndexMap<Variable, Factor>;

pub struct VariableEliminationEngine<'a> {

    /// the model to run queries against. It is never modified.
    model: &'a DirectedModel,

    /// if `true`, every `Variable` of an elimination order must be part of the model
    strict_order: bool

}


impl<'a> VariableEliminationEngine<'a> {

    pub fn new(model: &'a DirectedModel) -> Self {
        VariableEliminationEngine { model, strict_order: true }
    }

    /// Choose whether elimination orders may mention `Variable`s that are not in the model.
    /// With `strict` set (the default) such orders are rejected with
    /// `VarelimError::UnknownVariable`; otherwise those `Variable`s are skipped like any other
    /// `Variable` that owns no factor.
    pub fn strict_order(mut self, strict: bool) -> Self {
        self.strict_order = strict;
        self
    }

    /// Compute the distribution ```P(query | evidence)```.
    ///
    /// # Args
    /// * `query`: the `Variable` to compute the distribution of
    /// * `evidence`: observed values for some `Variable`s of the model
    /// * `order`: the elimination order
    ///
    /// # Returns
    /// a normalized `Factor` over ```[query]```
    ///
    /// # Errors
    /// * `VarelimError::UnknownVariable` if the query, the evidence or (in strict mode) the
    ///   elimination order mention a `Variable` outside the model
    /// * `VarelimError::MissingQueryResult` if no factor is left for the query
    /// * `VarelimError::NormalizeByZero` if the evidence has zero probability
    pub fn run<O>(&self, query: Variable, evidence: &Assignment, order: &O) -> Result<Factor>
        where O: EliminationOrder + ?Sized
    {
        self.run_instrumented(query, evidence, order, &mut NoInstrumentation)
    }

    /// Same as `run`, reporting the arithmetic performed to `counts`.
    pub fn run_instrumented<O, I>(
        &self,
        query: Variable,
        evidence: &Assignment,
        order: &O,
        counts: &mut I
    ) -> Result<Factor>
        where O: EliminationOrder + ?Sized,
              I: Instrumentation + ?Sized
    {
        ///////////////////////////////////////////////////////////////////////
        // 1) check input arguments before doing any work
        self.check_known(&query)?;
        for var in evidence.keys() {
            self.check_known(var)?;
        }

        let order = order.order(self.model);
        if self.strict_order {
            for var in order.iter() {
                self.check_known(var)?;
            }
        }

        debug!(
            query = %self.name(&query),
            evidence = evidence.len(),
            order = order.len(),
            "running variable elimination"
        );

        ///////////////////////////////////////////////////////////////////////
        // 2) reduce observed variables
        let mut factors: FactorCollection = self.model.cpds()
                                                      .map(|(v, f)| (*v, f.clone()))
                                                      .collect();
        self.reduce(&mut factors, evidence)?;

        ///////////////////////////////////////////////////////////////////////
        // 3) sum out every variable of the elimination order
        for var in order.iter() {
            // don't eliminate the query variable, or variables without a factor (observed or
            // already eliminated)
            if *var == query || ! factors.contains_key(var) {
                trace!(variable = %self.name(var), "skipping");
                continue;
            }

            self.eliminate(&mut factors, var, counts)?;
        }

        ///////////////////////////////////////////////////////////////////////
        // 4) what is left for the query is an unnormalized distribution
        let result = factors.swap_remove(&query)
                            .ok_or_else(|| VarelimError::MissingQueryResult(self.name(&query)))?;

        debug!(query = %self.name(&query), total = result.total(), "normalizing");
        result.normalize()
    }

    /// Drop the factors of observed variables and restrict every other factor to the evidence.
    fn reduce(&self, factors: &mut FactorCollection, evidence: &Assignment) -> Result<()> {
        for (var, &value) in evidence {
            // the distribution of an observed variable is no longer needed
            factors.shift_remove(var);

            for (owner, factor) in factors.iter_mut() {
                if factor.contains(var) {
                    debug!(variable = %self.name(var), factor = %self.name(owner), "reducing");
                    *factor = factor.restrict(var, value)?;
                }
            }
        }

        Ok(())
    }

    /// Sum `var` out of every factor that mentions it, folding in the factor owned by `var`.
    fn eliminate<I>(&self, factors: &mut FactorCollection, var: &Variable, counts: &mut I) -> Result<()>
        where I: Instrumentation + ?Sized
    {
        let elim = match factors.shift_remove(var) {
            Some(f) => f,
            None => return Ok(())
        };

        debug!(variable = %self.name(var), "multiplying factors containing variable");

        for (owner, factor) in factors.iter_mut() {
            if ! factor.contains(var) {
                continue;
            }

            debug!(variable = %self.name(var), factor = %self.name(owner), "summing out");

            let product = factor.product(&elim)?;
            let marginal = product.marginalize(var)?;

            let multiplications = product.len() as u64;
            let additions = (product.len() - marginal.len()) as u64;
            trace!(multiplications, additions, "fold");

            counts.record_multiplications(multiplications);
            counts.record_additions(additions);

            *factor = marginal;
        }

        Ok(())
    }

    fn check_known(&self, var: &Variable) -> Result<()> {
        if self.model.contains(var) {
            Ok(())
        } else {
            Err(VarelimError::UnknownVariable(var.to_string()))
        }
    }

    fn name(&self, var: &Variable) -> String {
        self.model.display_name(var)
    }

}
