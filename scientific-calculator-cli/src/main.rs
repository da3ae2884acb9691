use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::{debug, info};
use scientific_calculator::engine::evaluator::evaluate;
use scientific_calculator::engine::format::format_number;
use scientific_calculator::engine::functions::AngleUnit;
use scientific_calculator::engine::history::History;
use scientific_calculator::engine::{calculate, lexer, tokens_to_string};
use std::io;
use std::io::Write;

/// Evaluates scientific calculator expressions
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to evaluate; starts an interactive session when omitted
    expression: Option<String>,

    /// Angle unit used by trigonometric functions (deg or rad)
    #[clap(short, long, default_value = "deg")]
    angle_unit: AngleUnit,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    match args.expression {
        Some(expression) => {
            println!("{}", calculate(&normalize(&expression), args.angle_unit));
            Ok(())
        }
        None => run_interactive(args.angle_unit),
    }
}

/// Buttons and keyboards produce a display minus; the engine only knows the
/// ASCII one.
fn normalize(expression: &str) -> String {
    expression.replace('−', "-")
}

fn run_interactive(angle_unit: AngleUnit) -> Result<()> {
    println!("Scientific calculator ({angle_unit}). Type 'history', 'clear' or 'quit'.");
    let mut history = History::new();
    let stdin = io::stdin();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break; // EOF
        }

        match line.trim() {
            "" => continue,
            "quit" | "exit" => break,
            "history" => {
                for entry in history.entries() {
                    println!("{} = {}", entry.expression, entry.result);
                }
            }
            "clear" => {
                history.clear();
                info!("history cleared");
            }
            expression => {
                let normalized = normalize(expression);
                let tokens = lexer::tokenize(&normalized);
                debug!("tokenized {:?} into {:?}", normalized, tokens);

                let result = format_number(evaluate(&tokens, angle_unit));
                let recorded = tokens_to_string(&tokens).unwrap_or(normalized);
                history.record(recorded, result.clone());
                println!("{result}");
            }
        }
    }

    Ok(())
}
