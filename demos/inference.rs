//! Provides an example of how to use varelim to perform inference on a Bayesian Network.
//!
//! The network is the burglary/earthquake alarm example. We ask for the distribution of `Alarm`
//! after observing a burglary, and compare the cost of two elimination orders.

use ndarray::array;
use varelim as v;

fn main() -> v::Result<()> {
    /////////////////////////////////////////////////////
    // Step 1: Build Model
    let (alarm, model) = build_model()?;

    /////////////////////////////////////////////////////
    // Step 2: Compile some evidence
    let evidence = model.evidence(&[("Burglary", "True")])?;

    /////////////////////////////////////////////////////
    // Step 3: Build an inference engine
    let engine = v::VariableEliminationEngine::new(&model);

    /////////////////////////////////////////////////////
    // Step 4: Run a Conditional Query
    let mut counts = v::OperationCounts::new();
    let p = engine.run_instrumented(alarm, &evidence, &v::ModelOrder, &mut counts)?;

    for assignment in v::all_assignments(&[alarm]) {
        let value = *assignment.get(&alarm).unwrap_or(&0);
        let label = model.label(&alarm, value).unwrap_or("?");
        println!("P(Alarm = {} | Burglary = True) = {:.4}", label, p.value(&assignment)?);
    }

    println!("model order: {} multiplications, {} additions", counts.multiplications, counts.additions);

    // the same query, with the max-cardinality heuristic picking the order
    let mut counts = v::OperationCounts::new();
    engine.run_instrumented(alarm, &evidence, &v::MaxCardinality, &mut counts)?;
    println!("max cardinality: {} multiplications, {} additions", counts.multiplications, counts.additions);

    Ok(())
}

fn build_model() -> v::Result<(v::Variable, v::DirectedModel)> {
    let burglary = v::Variable::binary();
    let earthquake = v::Variable::binary();
    let alarm = v::Variable::binary();
    let john = v::Variable::binary();
    let mary = v::Variable::binary();

    ///////////////////////////////////////////////////
    // Build CPTs for variables with parents
    let cpt_a = v::Factor::cpd(
        alarm,
        vec![burglary, earthquake],
        array![
            [[0.95, 0.05], [0.94, 0.06]],
            [[0.29, 0.71], [0.001, 0.999]]
        ].into_dyn()
    )?;

    let cpt_j = v::Factor::cpd(
        john,
        vec![alarm],
        array![
            [0.9, 0.1],
            [0.05, 0.95]
        ].into_dyn()
    )?;

    let cpt_m = v::Factor::cpd(
        mary,
        vec![alarm],
        array![
            [0.7, 0.3],
            [0.01, 0.99]
        ].into_dyn()
    )?;

    ///////////////////////////////////////////////////
    // Build the Model
    let tf = &["True", "False"];
    let mut builder = v::DirectedModelBuilder::new();
    builder = builder.with_labeled_variable(&burglary, "Burglary", tf, &[], v::Initialization::Binomial(0.01));
    builder = builder.with_labeled_variable(&earthquake, "Earthquake", tf, &[], v::Initialization::Binomial(0.02));
    builder = builder.with_labeled_variable(
        &alarm, "Alarm", tf, &[burglary, earthquake], v::Initialization::Table(cpt_a)
    );
    builder = builder.with_labeled_variable(&john, "JohnCalls", tf, &[alarm], v::Initialization::Table(cpt_j));
    builder = builder.with_labeled_variable(&mary, "MaryCalls", tf, &[alarm], v::Initialization::Table(cpt_m));

    Ok((alarm, builder.build()?))
}
