//! CLI command implementations.

use tracing::debug;

use crate::programs::{decompose_demo, FactorialProgram};

/// `fact [n]`: build the factorial tree, show it, run it.
pub fn run_factorial(n: i64) {
    let program = FactorialProgram::build();
    debug!(n, "running factorial tree");

    println!("tree: {}", program.render());
    match program.run(n) {
        Ok(outcome) => {
            println!("factorial({n}) = {}", outcome.result);
            if let Some(final_value) = outcome.final_value {
                println!("counter landed on {final_value}");
            }
        }
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

/// `decompose`: build `(num < 5)` and print it node by node.
pub fn run_decompose() {
    let Some(decomp) = decompose_demo() else {
        eprintln!("error: demo tree is not a comparison");
        std::process::exit(1);
    };

    println!("expression: {}", decomp.expression);
    println!("left:       {}", decomp.left);
    println!("operator:   {}", decomp.operator);
    println!("right:      {}", decomp.right);
}
