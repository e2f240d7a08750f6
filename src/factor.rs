//! Definition of the factor module
//!
//! A `Factor` represents a relationship between some set of `Variable`s: a table that maps
//! every joint assignment of its scope to a non-negative weight.

use crate::util::{Result, VarelimError};
use crate::variable::{Variable, Assignment};

use ndarray::prelude as nd;
use itertools::Itertools;

/// Alias f64 ndarray::Array as Table
pub type Table = nd::ArrayD<f64>;

/// Tolerance used when checking that a table is normalized
pub const CPD_TOLERANCE: f64 = 0.001;


/// A `Factor` over some (possibly empty) scope of variables. Represented as a dense table as
/// described in Koller & Friedman: the table has one axis per scope `Variable`, in scope order,
/// and every cell is one row of the factor.
///
/// A `Factor` with an empty scope is a scalar. The scalar `1.0` is the multiplicative identity.
#[derive(Clone, Debug, PartialEq)]
pub struct Factor {
    /// The scope of the `Factor`
    scope: Vec<Variable>,

    /// The values of the `Factor` table.
    table: Table,

    /// `true`, if the `Factor` is a conditional probability distribution (i.e. is normalized)
    cpd: bool
}


impl Factor {

    /// Get the identity factor
    pub fn identity() -> Self {
        Factor {
            scope: vec![],
            table: Table::from_elem(nd::IxDyn(&[]), 1.0),
            cpd: false
        }
    }


    /// Create a new `Factor`
    ///
    /// # Args
    /// * `scope`: the `Variable`s of the `Factor`. Each `Variable` may appear only once.
    /// * `table`: the weights, with one axis per scope `Variable`
    ///
    /// # Errors
    /// * `VarelimError::DuplicateVariable` if a `Variable` appears twice in the scope
    /// * `VarelimError::General` if the table does not match the shape of the scope
    /// * `VarelimError::NegativeProbability` if any weight is negative or not finite
    pub fn new(scope: Vec<Variable>, table: Table) -> Result<Self> {
        if scope.iter().unique().count() != scope.len() {
            return Err(VarelimError::DuplicateVariable);
        } else if scope.len() != table.ndim() {
            return Err(
                VarelimError::General(
                    String::from("Invalid arguments. Cardinality of scope must match number of table dimensions")
                )
            );
        }

        for (v, t) in scope.iter().map(|v| v.cardinality()).zip(table.shape().iter()) {
            if v != *t {
                return Err(
                    VarelimError::General(
                        String::from("Invalid arguments. Dimensions do not match")
                    )
                );
            }
        }

        // factors may not have negative values
        if table.iter().any(|&v| !(v >= 0.0) || !v.is_finite()) {
            return Err(VarelimError::NegativeProbability);
        }

        Ok(Factor { scope, table, cpd: false })
    }


    /// Create a conditional probability distribution ```P(var | parents)```.
    ///
    /// The scope of the resulting `Factor` is ```parents``` followed by ```var```, so the last
    /// axis of `table` indexes the values of `var`. For every assignment to the parents the
    /// weights along that axis must sum to one.
    ///
    /// # Errors
    /// * any error of `Factor::new`
    /// * `VarelimError::NotACPD` if the table is not normalized for some parent assignment
    pub fn cpd(var: Variable, parents: Vec<Variable>, table: Table) -> Result<Self> {
        let mut scope = parents;
        scope.push(var);

        let mut factor = Factor::new(scope, table)?;

        let child = nd::Axis(factor.scope.len() - 1);
        if factor.table.sum_axis(child).iter().any(|&z| (z - 1.0).abs() > CPD_TOLERANCE) {
            return Err(VarelimError::NotACPD);
        }

        factor.cpd = true;
        Ok(factor)
    }


    /// Check if the `Factor` is a Conditional Probability Distribution - i.e. if the values in the
    /// `Factor` are normalized.
    ///
    /// # Note
    /// Only tables built by `Factor::cpd` and the output of `normalize` are CPDs. Products,
    /// reductions and marginals never are, even if they happen to sum to one.
    pub fn is_cpd(&self) -> bool {
        self.cpd
    }


    /// Retrieve the scope of the `Factor`.
    ///
    /// # Note
    /// This method returns a clone of the `Factor`'s scope. `Variable`'s are lightweight and
    /// therefore this is an acceptable overhead
    pub fn scope(&self) -> Vec<Variable> {
        self.scope.clone()
    }


    /// Check if `var` is part of the scope of this `Factor`
    pub fn contains(&self, var: &Variable) -> bool {
        self.scope.contains(var)
    }


    /// The underlying table, with one axis per scope `Variable`
    pub fn table(&self) -> &Table {
        &self.table
    }


    /// The number of rows (complete assignments to the scope) of the `Factor`
    pub fn len(&self) -> usize {
        self.table.len()
    }


    /// The sum of all weights in the `Factor`
    pub fn total(&self) -> f64 {
        self.table.sum()
    }


    /// Retrieve the value for a complete assignment over the scope of this `Factor`
    ///
    /// # Args
    /// assignment: a full assignment to the scope of a `Factor`. The assignment's scope  may be a
    ///             superset  of the `Factor`s scope.
    ///
    /// # Returns
    /// the value of the assignment, or an error.
    ///
    /// # Errors
    /// * `VarelimError::IncompleteAssignment`, if assignment is not a complete assignment to the
    ///   scope of the `Factor`
    /// * `VarelimError::General`, if a value lies outside the domain of its `Variable`
    pub fn value(&self, assignment: &Assignment) -> Result<f64> {
        let mut idxs = Vec::with_capacity(self.scope.len());

        for v in self.scope.iter() {
            match assignment.get(v) {
                Some(&i) if i < v.cardinality() => idxs.push(i),
                Some(&i) => {
                    return Err(VarelimError::General(format!("Value {} is out of range for {}", i, v)));
                },
                None => return Err(VarelimError::IncompleteAssignment)
            }
        }

        Ok(self.table[nd::IxDyn(&idxs)])
    }


    /// Restrict the `Factor` to the rows where `var` takes on `value`.
    ///
    /// Defined in Koller & Friedman 4.2.3 (factor reduction) for a single `Variable`.
    ///
    /// # Args
    /// * `var`: the observed `Variable`
    /// * `value`: the observed value of `var`
    ///
    /// # Returns
    /// A new `Factor` over ```self.scope() - var```. If `value` lies outside the domain of `var`
    /// no row matches and every weight of the result is zero.
    ///
    /// # Errors
    /// * `VarelimError::InvalidScope`, if `var` is not in the scope of the `Factor`
    pub fn restrict(&self, var: &Variable, value: usize) -> Result<Self> {
        let axis = self.axis_of(var)?;

        let mut scope = self.scope.clone();
        scope.remove(axis);

        let table = if value < var.cardinality() {
            self.table.index_axis(nd::Axis(axis), value).to_owned()
        } else {
            let shape: Vec<usize> = scope.iter().map(|v| v.cardinality()).collect();
            Table::zeros(shape)
        };

        Ok(Factor { scope, table, cpd: false })
    }


    /// Product of this `Factor` and another `Factor`.
    ///
    /// Defined in Koller & Friedman Section 4.2.1. Rows that agree on the shared scope are
    /// joined and their weights multiplied; factors with disjoint scopes produce their cross
    /// product.
    ///
    /// # Args
    /// other: the `Factor` to multiply with.
    ///
    /// # Returns
    /// A new `Factor` with scope ```self.scope()``` followed by the `Variable`s of
    /// ```other.scope()``` that are not already present.
    pub fn product(&self, other: &Self) -> Result<Self> {
        // We are computing a new factor Psi(X, Y, Z) = phi1(X, Y) * phi2(Y, Z).
        // See Koller & Friedman Definition 4.2
        let scope: Vec<Variable> = self.scope.iter()
                                             .chain(other.scope.iter())
                                             .cloned()
                                             .unique()
                                             .collect();

        let shape: Vec<usize> = scope.iter().map(|v| v.cardinality()).collect();

        // line both tables up along the new scope, then let broadcasting do the join
        let lhs = self.aligned(&scope);
        let rhs = other.aligned(&scope);

        let lhs = lhs.broadcast(shape.as_slice()).ok_or(VarelimError::InvalidScope)?;
        let rhs = rhs.broadcast(shape.as_slice()).ok_or(VarelimError::InvalidScope)?;

        Ok(Factor { scope, table: &lhs * &rhs, cpd: false })
    }


    /// Marginalize the `Factor` over the given `Variable`
    ///
    /// Defined in Koller & Friedman 9.3.1
    ///
    /// # Args
    /// var: the `Variable` to sum out
    ///
    /// # Returns
    /// another `Factor` over ```self.scope() - var```
    ///
    /// # Errors
    /// * `VarelimError::InvalidScope`, if `var` is not in the scope of the `Factor`
    pub fn marginalize(&self, var: &Variable) -> Result<Self> {
        let axis = self.axis_of(var)?;

        let mut scope = self.scope.clone();
        scope.remove(axis);

        let table = self.table.sum_axis(nd::Axis(axis));
        Ok(Factor { scope, table, cpd: false })
    }


    /// Normalize the `Factor` so its weights sum to one.
    ///
    /// # Errors
    /// * `VarelimError::NormalizeByZero`, if the total weight is zero
    pub fn normalize(&self) -> Result<Self> {
        let z = self.total();
        if !(z > 0.0) || !z.is_finite() {
            return Err(VarelimError::NormalizeByZero);
        }

        Ok(Factor { scope: self.scope.clone(), table: &self.table / z, cpd: true })
    }


    /// Position of `var` in the scope
    fn axis_of(&self, var: &Variable) -> Result<usize> {
        self.scope.iter().position(|v| v == var).ok_or(VarelimError::InvalidScope)
    }


    /// A view of the table with axes in the order of `scope` (a superset of this scope). Axes
    /// for `Variable`s outside this scope have length one.
    fn aligned(&self, scope: &[Variable]) -> nd::ArrayViewD<f64> {
        let target = |v: &Variable| scope.iter().position(|s| s == v).unwrap_or(scope.len());

        let mut axes: Vec<usize> = (0..self.scope.len()).collect();
        axes.sort_by_key(|&i| target(&self.scope[i]));

        let mut view = self.table.view().permuted_axes(axes);
        for (i, v) in scope.iter().enumerate() {
            if !self.scope.contains(v) {
                view = view.insert_axis(nd::Axis(i));
            }
        }

        view
    }

}

// Unit tests
#[cfg(test)]
mod tests {
    use super::*;
    use crate::variable::all_assignments;

    use approx::assert_abs_diff_eq;
    use itertools::iproduct;
    use ndarray::array;

    /// Koller & Friedman Figure 4.3, phi(A, B, C)
    fn kf_abc() -> (Variable, Variable, Variable, Factor) {
        let a = Variable::discrete(3);
        let b = Variable::binary();
        let c = Variable::binary();

        let table = nd::Array::from_shape_vec(
            (3, 2, 2),
            vec![ 0.25, 0.35, 0.08, 0.16, 0.05, 0.07, 0., 0., 0.15, 0.21, 0.09, 0.18 ]
        ).expect("Unexpected error").into_dyn();

        let phi = Factor::new(vec![a, b, c], table).expect("Unexpected error");
        (a, b, c, phi)
    }

    /// Assert two factors hold the same assignment -> weight pairs, regardless of scope order
    fn assert_same_content(f: &Factor, g: &Factor) {
        let mut fs = f.scope();
        let mut gs = g.scope();
        fs.sort();
        gs.sort();
        assert_eq!(fs, gs);

        for assn in all_assignments(&f.scope()) {
            assert_abs_diff_eq!(
                f.value(&assn).unwrap(),
                g.value(&assn).unwrap(),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn identity() {
        let f = Factor::identity();
        assert!(f.scope().is_empty());
        assert_eq!(1, f.len());
        assert_eq!(1.0, f.value(&Assignment::new()).unwrap());
    }

    #[test]
    fn table_factor() {
        let vars = vec![ Variable::binary(), Variable::discrete(5), Variable::discrete(3) ];
        let mut table = Table::ones(vec![2, 5, 3]);
        table[nd::IxDyn(&[1, 1, 1])] = 5.;

        // assert table holds correct values
        let f = Factor::new(vars.clone(), table).unwrap();

        assert_eq!(30, f.len());
        for (x, y, z) in iproduct!(0..2, 0..5, 0..3) {
            let mut assn = Assignment::new();
            assn.set(&vars[0], x);
            assn.set(&vars[1], y);
            assn.set(&vars[2], z);

            let val = f.value(&assn).unwrap();
            if x == 1 && y == 1 && z == 1 {
                assert_eq!(5., val);
            } else {
                assert_eq!(1., val);
            }
        }

        assert!(! f.is_cpd());
    }

    #[test]
    fn table_factor_errs() {
        // mismatched number of dimensions
        let vars = vec![ Variable::binary(), Variable::binary() ];
        let table = Table::ones(vec![2, 2, 2]);
        match Factor::new(vars.clone(), table) {
            Err(VarelimError::General(_)) => (),
            other => panic!("wrong result {:?}", other)
        };

        // wrong cardinality
        let table = Table::ones(vec![2, 3]);
        match Factor::new(vars.clone(), table) {
            Err(VarelimError::General(_)) => (),
            other => panic!("wrong result {:?}", other)
        };

        // duplicate variable
        let table = Table::ones(vec![2, 2]);
        let f = Factor::new(vec![vars[0], vars[0]], table);
        assert_eq!(Err(VarelimError::DuplicateVariable), f);

        // negative weight
        let table = array![[1., -1.], [0., 1.]].into_dyn();
        let f = Factor::new(vars.clone(), table);
        assert_eq!(Err(VarelimError::NegativeProbability), f);
    }

    #[test]
    fn table_factor_cpd() {
        let a = Variable::binary();
        let b = Variable::binary();

        // P(B | A), rows indexed by A
        let f = Factor::cpd(b, vec![a], array![[0.8, 0.2], [0.1, 0.9]].into_dyn())
                       .expect("unexpected error");
        assert!(f.is_cpd());
        assert_eq!(vec![a, b], f.scope());

        // zero probabilities are allowed in a CPD
        let f = Factor::cpd(b, vec![a], array![[1.0, 0.0], [0.5, 0.5]].into_dyn());
        assert!(f.is_ok());

        // normalized overall, but not per parent assignment
        let f = Factor::cpd(b, vec![a], array![[0.25, 0.25], [0.25, 0.25]].into_dyn());
        assert_eq!(Err(VarelimError::NotACPD), f);
    }

    #[test]
    fn value() {
        let vars = vec![ Variable::binary(), Variable::binary() ];
        let table = array![[0., 1.], [2., 3.]].into_dyn();

        let f = Factor::new(vars.clone(), table).expect("Unexpected error");

        // verify behavior on precise assignment
        for (i, (x, y)) in iproduct!(0..2, 0..2).enumerate() {
            let mut assn = Assignment::new();
            assn.set(&vars[0], x);
            assn.set(&vars[1], y);

            assert_eq!(i as f64, f.value(&assn).expect("unexpected error"));
        }

        // verify behavior on full assignment with out of scope values
        let v3 = Variable::binary();

        for (i, (x, y)) in iproduct!(0..2, 0..2).enumerate() {
            let mut assn = Assignment::new();
            assn.set(&vars[0], x);
            assn.set(&vars[1], y);
            assn.set(&v3, 0);

            assert_eq!(i as f64, f.value(&assn).expect("unexpected error"));
        }

        // verify behavior on incomplete assignment
        let mut assn = Assignment::new();
        assn.set(&vars[0], 0);
        assn.set(&v3, 0);
        assert_eq!(Err(VarelimError::IncompleteAssignment), f.value(&assn));

        // out of range value
        assn.set(&vars[1], 7);
        assert!(f.value(&assn).is_err());
    }

    #[test]
    /// Example taken from Koller & Friedman Figure 4.3
    fn product() {
        let a = Variable::discrete(3);
        let b = Variable::binary();
        let c = Variable::binary();

        let tbl1 = nd::Array::from_shape_vec(
            (3, 2),
            vec![ 0.5, 0.8, 0.1, 0., 0.3, 0.9 ]
        ).expect("Unexpected error").into_dyn();
        let phi1 = Factor::new(vec![ a, b ], tbl1).expect("Unexpected error");

        let tbl2 = nd::Array::from_shape_vec(
            (2, 2),
            vec![ 0.5, 0.7, 0.1, 0.2 ]
        ).expect("Unexpected error").into_dyn();
        let phi2 = Factor::new(vec![ b, c ], tbl2).expect("Unexpected error");

        let phi = phi1.product(&phi2).expect("Unexpected error");
        assert_eq!(vec![a, b, c], phi.scope());
        assert_eq!(12, phi.len());

        let expected = nd::Array::from_shape_vec(
            (3, 2, 2),
            vec![ 0.25, 0.35, 0.08, 0.16, 0.05, 0.07, 0., 0., 0.15, 0.21, 0.09, 0.18 ]
        ).expect("Unexpected error").into_dyn();

        for (x, y, z) in iproduct!(0..3, 0..2, 0..2) {
            let mut assn = Assignment::new();
            assn.set(&a, x);
            assn.set(&b, y);
            assn.set(&c, z);

            let idx = vec![x, y, z];
            assert_abs_diff_eq!(expected[nd::IxDyn(&idx)], phi.value(&assn).unwrap(), epsilon = 1e-12);
        }
    }

    #[test]
    fn prod_identity() {
        let a = Variable::discrete(3);
        let b = Variable::binary();

        let tbl1 = nd::Array::from_shape_vec(
            (3, 2),
            vec![ 0.5, 0.8, 0.1, 0., 0.3, 0.9 ]
        ).expect("Unexpected error").into_dyn();
        let phi1 = Factor::new(vec![ a, b ], tbl1).expect("Unexpected error");

        let phi2 = Factor::identity();

        let phi = phi1.product(&phi2).expect("Unexpected error");
        assert_eq!(phi1, phi);

        let phi = phi2.product(&phi1).expect("Unexpected error");
        assert_eq!(phi1, phi);
    }

    #[test]
    fn prod_disjoint() {
        let a = Variable::binary();
        let c = Variable::discrete(3);

        let phi1 = Factor::new(vec![a], array![0.4, 0.6].into_dyn()).unwrap();
        let phi2 = Factor::new(vec![c], array![1., 2., 3.].into_dyn()).unwrap();

        // no shared scope is a plain cross product
        let phi = phi1.product(&phi2).expect("Unexpected error");
        assert_eq!(vec![a, c], phi.scope());
        assert_eq!(6, phi.len());

        for (x, y) in iproduct!(0..2, 0..3) {
            let mut assn = Assignment::new();
            assn.set(&a, x);
            assn.set(&c, y);

            let expected = [0.4, 0.6][x] * (y + 1) as f64;
            assert_abs_diff_eq!(expected, phi.value(&assn).unwrap(), epsilon = 1e-12);
        }
    }

    #[test]
    fn prod_commutative() {
        let (a, b, c, phi1) = kf_abc();
        let d = Variable::discrete(4);

        let phi2 = Factor::new(
            vec![d, c, a],
            Table::from_shape_fn(vec![4, 2, 3], |ix| (ix[0] * 6 + ix[1] * 3 + ix[2]) as f64 / 10.)
        ).unwrap();

        let left = phi1.product(&phi2).unwrap();
        let right = phi2.product(&phi1).unwrap();

        assert_eq!(vec![a, b, c, d], left.scope());
        assert_eq!(vec![d, c, a, b], right.scope());
        assert_same_content(&left, &right);
    }

    #[test]
    fn prod_associative() {
        let (a, _, c, phi1) = kf_abc();
        let d = Variable::binary();

        let phi2 = Factor::new(vec![c, d], array![[0.1, 0.9], [0.7, 0.3]].into_dyn()).unwrap();
        let phi3 = Factor::new(vec![d, a], array![[1., 2., 3.], [4., 5., 6.]].into_dyn()).unwrap();

        let left = phi1.product(&phi2).unwrap().product(&phi3).unwrap();
        let right = phi1.product(&phi2.product(&phi3).unwrap()).unwrap();
        assert_same_content(&left, &right);

        let fold = vec![phi3.clone(), phi1.clone(), phi2.clone()]
            .iter()
            .fold(Factor::identity(), |acc, phi| acc.product(phi).unwrap());
        assert_same_content(&left, &fold);
    }

    #[test]
    /// Example take from Koller & Friedman Figure 4.5
    fn restrict_simple() {
        let (a, b, c, phi) = kf_abc();

        let expected = nd::Array::from_shape_vec(
            (3, 2),
            vec![ 0.25, 0.08, 0.05, 0., 0.15, 0.09 ]
        ).expect("Unexpected error").into_dyn();

        let reduced = phi.restrict(&c, 0).expect("Unexpected error");
        assert_eq!(vec![a, b], reduced.scope());
        assert!(! reduced.is_cpd());
        for (x, y) in iproduct!(0..3, 0..2) {
            let mut assn = Assignment::new();
            assn.set(&a, x);
            assn.set(&b, y);

            let idx = [x, y];
            assert_eq!(expected[nd::IxDyn(&idx)], reduced.value(&assn).expect("unexpected error"));
        }
    }

    #[test]
    fn restrict_multiple() {
        let (a, b, c, phi) = kf_abc();

        let reduced = phi.restrict(&c, 0)
                         .and_then(|f| f.restrict(&a, 2))
                         .expect("Unexpected error");

        let expected = array![0.15, 0.09].into_dyn();
        assert_eq!(vec![b], reduced.scope());
        assert_eq!(&expected, reduced.table());
    }

    #[test]
    fn restrict_to_scalar() {
        let a = Variable::binary();
        let phi = Factor::new(vec![a], array![0.3, 0.7].into_dyn()).unwrap();

        let reduced = phi.restrict(&a, 1).unwrap();
        assert!(reduced.scope().is_empty());
        assert_eq!(1, reduced.len());
        assert_eq!(0.7, reduced.total());
    }

    #[test]
    fn restrict_unmatched_value() {
        let (a, b, c, phi) = kf_abc();

        // no row has c = 5, so nothing survives
        let reduced = phi.restrict(&c, 5).expect("Unexpected error");
        assert_eq!(vec![a, b], reduced.scope());
        assert_eq!(0., reduced.total());
        assert_eq!(Err(VarelimError::NormalizeByZero), reduced.normalize());
    }

    #[test]
    fn restrict_err() {
        let (_, _, _, phi) = kf_abc();
        let other = Variable::binary();

        assert_eq!(Err(VarelimError::InvalidScope), phi.restrict(&other, 0));
    }

    #[test]
    /// Example taken from Koller & Friedman Figure 9.7
    fn marginalize() {
        let (a, b, c, phi) = kf_abc();

        let marginalized = phi.marginalize(&b).expect("Unexpected error");
        assert_eq!(vec![a, c], marginalized.scope());

        let expected = array![[0.33, 0.51], [0.05, 0.07], [0.24, 0.39]].into_dyn();
        for (x, y) in iproduct!(0..3, 0..2) {
            let mut assn = Assignment::new();
            assn.set(&a, x);
            assn.set(&c, y);

            let idx = [ x, y ];
            assert_abs_diff_eq!(expected[nd::IxDyn(&idx)], marginalized.value(&assn).unwrap(), epsilon = 1e-12);
        }
    }

    #[test]
    fn marginalize_conserves_weight() {
        let (a, b, c, phi) = kf_abc();

        for v in [a, b, c].iter() {
            let m = phi.marginalize(v).unwrap();
            assert!(! m.contains(v));
            assert_eq!(2, m.scope().len());
            assert_abs_diff_eq!(phi.total(), m.total(), epsilon = 1e-12);
        }
    }

    #[test]
    fn marginalize_err() {
        let (_, _, _, phi) = kf_abc();
        let other = Variable::binary();

        assert_eq!(Err(VarelimError::InvalidScope), phi.marginalize(&other));
    }

    #[test]
    fn restrict_marginalize_commute() {
        let (_, b, c, phi) = kf_abc();

        for value in 0..2 {
            let first = phi.restrict(&c, value).unwrap().marginalize(&b).unwrap();
            let second = phi.marginalize(&b).unwrap().restrict(&c, value).unwrap();
            assert_same_content(&first, &second);
        }
    }

    #[test]
    fn normalize() {
        let (_, _, _, phi) = kf_abc();

        let n = phi.normalize().expect("Unexpected error");
        assert!(n.is_cpd());
        assert_eq!(phi.scope(), n.scope());
        assert_abs_diff_eq!(1.0, n.total(), epsilon = 1e-12);

        let a = Variable::binary();
        let phi = Factor::new(vec![a], array![1., 3.].into_dyn()).unwrap();
        let n = phi.normalize().unwrap();
        assert_eq!(&array![0.25, 0.75].into_dyn(), n.table());
    }

    #[test]
    fn normalize_zero() {
        let a = Variable::binary();
        let phi = Factor::new(vec![a], array![0., 0.].into_dyn()).unwrap();

        assert_eq!(Err(VarelimError::NormalizeByZero), phi.normalize());
    }
}
