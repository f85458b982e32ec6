//! Arbor CLI
//!
//! Builds and evaluates the demonstration expression trees.

use arborc::commands::{run_decompose, run_factorial};
use arborc::init_tracing;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "fact" => {
            let n = match args.get(2) {
                Some(raw) => match raw.parse::<i64>() {
                    Ok(n) => n,
                    Err(_) => {
                        eprintln!("error: '{raw}' is not an integer");
                        eprintln!("Usage: arbor fact [n]");
                        std::process::exit(1);
                    }
                },
                None => 5,
            };
            run_factorial(n);
        }
        "decompose" => {
            run_decompose();
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Arbor {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Arbor expression tree driver");
    println!();
    println!("Usage: arbor <command> [options]");
    println!();
    println!("Commands:");
    println!("  fact [n]     Build the factorial tree and evaluate it (default n: 5)");
    println!("  decompose    Show a comparison tree node by node");
    println!("  help         Show this help message");
    println!("  version      Show version information");
}
