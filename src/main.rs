//! Havaplan - Turkish-language activity recommendations from weather metrics
//!
//! A one-shot batch tool: reads one JSON payload from stdin, evaluates the
//! rule engine and writes `{"recommendation": "..."}` to stdout. Fatal
//! failures (unreadable stdin, malformed JSON, unusable fallback) go to
//! stderr with exit code 1 and no stdout JSON.

use std::io::{self, Read};
use std::process;

use clap::Parser;

use havaplan::cli::Cli;
use havaplan::data::{RecommendationRequest, RecommendationResponse};
use havaplan::report::RecommendationBuilder;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("havaplan: {err}");
        process::exit(1);
    }
}

/// Reads the request from stdin, builds the report and prints the response.
fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    let request: RecommendationRequest = serde_json::from_str(&input)?;

    let builder = if cli.brief {
        RecommendationBuilder::new().brief()
    } else {
        RecommendationBuilder::new()
    };
    let recommendation = builder.build(&request)?;

    let response = RecommendationResponse { recommendation };
    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}
