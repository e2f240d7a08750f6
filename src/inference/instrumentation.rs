//! Counters for the arithmetic performed during inference.
//!
//! The engines report how many elementary multiplications (factor products) and additions
//! (marginalization) they perform. The counts are useful to compare elimination orders; they
//! never change the result of a query.

/// A sink for operation counts. Passed into a single inference run.
pub trait Instrumentation {

    /// Record `count` elementary multiplications
    fn record_multiplications(&mut self, count: u64);

    /// Record `count` elementary additions
    fn record_additions(&mut self, count: u64);

}


/// Running totals of the operations performed by one or more runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OperationCounts {
    pub multiplications: u64,
    pub additions: u64
}

impl OperationCounts {

    pub fn new() -> Self {
        OperationCounts::default()
    }

    /// Total number of arithmetic operations
    pub fn total(&self) -> u64 {
        self.multiplications + self.additions
    }

}

impl Instrumentation for OperationCounts {

    fn record_multiplications(&mut self, count: u64) {
        self.multiplications += count;
    }

    fn record_additions(&mut self, count: u64) {
        self.additions += count;
    }

}


/// Discards all counts
#[derive(Clone, Copy, Debug, Default)]
pub struct NoInstrumentation;

impl Instrumentation for NoInstrumentation {

    fn record_multiplications(&mut self, _count: u64) {}

    fn record_additions(&mut self, _count: u64) {}

}
