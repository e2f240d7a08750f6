//! Module containing initialization routines for the conditional probability tables of a model.

use crate::factor::{Factor, Table};
use crate::util::{VarelimError, Result};
use crate::variable::Variable;

use ndarray::prelude as nd;
use ndarray_rand::RandomExt;
use rand::distributions::Uniform;

/// Defines possible ways to initialize a `Variable`s CPD.
#[derive(Clone, Debug)]
pub enum Initialization<'a> {
    /// A uniform distribution over all possibilities
    Uniform,

    /// Randomly initialize the weights of the CPD.
    Random,

    /// Initialize the CPD as a Binomial distribution with parameter ```p```, the probability of
    /// the first value. Note that this `Initialization` is valid only to a `Variable` with no
    /// parents.
    Binomial(f64),

    /// Initialize the CPD as a Multinomial distribution with parameters ```p_0, p_1...```.
    /// Note that this `Initialization` is valid only to a `Variable` with no parents.
    Multinomial(&'a [f64]),

    /// User defined CPD
    Table(Factor)
}


impl<'a> Initialization<'a> {

    /// Construct a CPD ```P(var | parents)```, initialized based on ```self```
    ///
    /// # Args
    /// * `var`: the `Variable` the distribution is over
    /// * `parents`: the parents of `var`
    ///
    /// # Returns
    /// a `Factor` with scope ```parents``` followed by ```var```, or for `Initialization::Table`
    /// the provided `Factor` itself.
    ///
    /// # Errors
    /// * `VarelimError::InvalidInitialization` if the strategy does not fit the `Variable`
    /// * `VarelimError::InvalidScope` if a user defined table is over the wrong scope
    /// * `VarelimError::NotACPD` if a user defined table is not a CPD
    pub fn build_cpd(self, var: Variable, parents: &[Variable]) -> Result<Factor> {
        ///////////////////////////////////////////////////////////////////////////////
        // Trivial cases

        // if this is a user defined factor, it just needs to be verified and returned
        if let Initialization::Table(f) = self {
            if ! f.is_cpd() {
                return Err(VarelimError::NotACPD);
            }

            let s = f.scope();
            let child_last = s.last() == Some(&var);
            if child_last && s.len() == parents.len() + 1 && parents.iter().all(|v| s.contains(v)) {
                return Ok(f);
            } else {
                return Err(VarelimError::InvalidScope);
            }
        }

        ///////////////////////////////////////////////////////////////////////////////
        // Check for errors
        if parents.is_empty() {

            match self {

                // A binomial distribution on a non-binary variable
                Initialization::Binomial(_) if var.cardinality() != 2 => {
                    return Err(VarelimError::InvalidInitialization);
                },

                // A multinomial distribution with an incorrect number of parameters
                Initialization::Multinomial(ps) if ps.len() != var.cardinality() => {
                    return Err(VarelimError::InvalidInitialization);
                },

                _ => ()
            }
        } else {
            match self {

                // A binomial/multinomial on a non-unit scope
                Initialization::Binomial(_) | Initialization::Multinomial(_) => {
                    return Err(VarelimError::InvalidInitialization);
                },

                _ => ()
            }
        }

        ///////////////////////////////////////////////////////////////////////////////
        // now, build CPD
        let mut shape: Vec<usize> = parents.iter().map(|v| v.cardinality()).collect();
        shape.push(var.cardinality());

        let tbl: Table = match self {
            Initialization::Uniform => {
                // normalizing constant is just the number of values of var
                let val = 1. / (var.cardinality() as f64);
                Table::from_elem(shape, val)
            },
            Initialization::Random => {
                let ax = nd::Axis(shape.len() - 1);
                let tbl = Table::random(shape, Uniform::new(1.0, 100.0));
                let z = tbl.sum_axis(ax).insert_axis(ax);
                &tbl / &z
            },
            Initialization::Binomial(p) => {
                nd::Array::from(vec![p, 1.0 - p]).into_dyn()
            },
            Initialization::Multinomial(p) => {
                nd::Array::from(p.to_vec()).into_dyn()
            },
            Initialization::Table(_) => return Err(VarelimError::InvalidInitialization)
        };

        Factor::cpd(var, parents.to_vec(), tbl)
    }
}
