use clap::Parser;
use miette::{Diagnostic, IntoDiagnostic, Result};
use polcalc::{CompilationOptions, Expr, compile_with_options, render_error};
use std::io::{BufRead, BufReader, Write};
use thiserror::Error;
use tracing::debug;

/// polcalc - Evaluate Polish-notation arithmetic
#[derive(Parser, Debug)]
#[command(name = "polcalc")]
#[command(about = "Compile and evaluate prefix arithmetic expressions", long_about = None)]
struct Args {
    /// Value of the next variable (x0, x1, ...); repeat for each variable
    #[arg(short = 'x', long = "var", value_name = "VALUE", allow_negative_numbers = true)]
    vars: Vec<f64>,

    /// Maximum operator nesting depth
    #[arg(long, default_value_t = CompilationOptions::default().max_depth)]
    max_depth: usize,

    /// Print the compiled expression in canonical prefix form (for debugging)
    #[arg(long)]
    debug_tree: bool,

    /// Expression to evaluate (if not provided, reads one per line from stdin)
    expression: Option<String>,
}

#[derive(Debug, Error, Diagnostic)]
enum CliError {
    #[error("expression references x{index} but only {given} variable value(s) were supplied")]
    #[diagnostic(
        code(polcalc::missing_variable),
        help("pass one --var per variable, in index order")
    )]
    MissingVariable { index: usize, given: usize },
}

/// Outcome of one expression; compile errors are already rendered.
enum Outcome {
    Value(f64),
    Rejected,
}

fn check_vars(expr: &Expr, vars: &[f64]) -> Result<(), CliError> {
    match expr.max_variable_index() {
        Some(index) if index >= vars.len() => Err(CliError::MissingVariable {
            index,
            given: vars.len(),
        }),
        _ => Ok(()),
    }
}

fn interpret_input(options: &CompilationOptions, args: &Args, input: &str) -> Result<Outcome> {
    let expr = match compile_with_options(options, input) {
        Ok(expr) => expr,
        Err(e) => {
            render_error(&e, input);
            return Ok(Outcome::Rejected);
        }
    };

    if args.debug_tree {
        println!("=== Compiled Expression ===");
        println!("{}", expr);
        println!();
    }

    check_vars(&expr, &args.vars)?;
    let value = expr.eval(&|i| args.vars[i]);
    debug!(input, value, "evaluated expression");
    Ok(Outcome::Value(value))
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .into_diagnostic()?;

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let options = CompilationOptions {
        max_depth: args.max_depth,
    };

    // Check if we have a direct expression argument
    if let Some(expr) = &args.expression {
        match interpret_input(&options, &args, expr)? {
            Outcome::Value(value) => println!("{}", value),
            Outcome::Rejected => std::process::exit(1),
        }
        return Ok(());
    }

    // Otherwise, check if we're in interactive or pipe mode
    let is_interactive = atty::is(atty::Stream::Stdin);
    if is_interactive {
        println!("polcalc - Type prefix expressions to evaluate (Ctrl+D to exit)");
    }

    let stdin = std::io::stdin();
    let mut lines = BufReader::new(stdin.lock()).lines();
    loop {
        if is_interactive {
            print!("> ");
            std::io::stdout().flush().into_diagnostic()?;
        }

        let Some(line) = lines.next() else {
            if is_interactive {
                println!("\nGoodbye!");
            }
            return Ok(());
        };
        let line = line.into_diagnostic()?;

        match interpret_input(&options, &args, &line) {
            Ok(Outcome::Value(value)) => println!("{}", value),
            Ok(Outcome::Rejected) => {}
            // A missing variable only spoils this line; keep going.
            Err(report) => eprintln!("{:?}", report),
        }
    }
}
