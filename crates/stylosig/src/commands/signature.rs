//! Signature command — compute the six style metrics of a text.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use stylosig_core::{Signature, analyze_signature};

use super::read_input_file;

/// Arguments for the `signature` subcommand.
#[derive(Args, Debug)]
pub struct SignatureArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Print only the six values, comma-separated (reusable as --signature)
    #[arg(long, conflicts_with = "counts")]
    pub compact: bool,

    /// Also print sentence, clause and word counts.
    #[arg(long)]
    pub counts: bool,
}

/// Compute and print the signature of a file.
#[instrument(name = "cmd_signature", skip_all, fields(file = %args.file))]
pub fn cmd_signature(
    args: SignatureArgs,
    global_json: bool,
    precision: usize,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, compact = args.compact, "executing signature command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let report = analyze_signature(&content);

    if global_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report)
                .with_context(|| format!("failed to serialize signature of {}", args.file))?
        );
        return Ok(());
    }

    if args.compact {
        println!("{}", format_compact(&report.signature, precision));
        return Ok(());
    }

    println!("{}", args.file.bold());
    for ((name, label), value) in Signature::NAMES
        .iter()
        .zip(Signature::LABELS)
        .zip(report.signature.as_array())
    {
        println!("  {:<24} {} {value:.precision$}", label, name.dimmed());
    }

    if args.counts {
        println!();
        println!("  {:<24} {}", "Sentences", report.sentences);
        println!("  {:<24} {}", "Clauses", report.clauses);
        println!("  {:<24} {}", "Words", report.words);
        println!("  {:<24} {}", "Distinct words", report.distinct_words);
        println!("  {:<24} {}", "Hapax words", report.hapax_words);
    }

    Ok(())
}

/// Format a signature as comma-separated values.
pub fn format_compact(signature: &Signature, precision: usize) -> String {
    signature
        .as_array()
        .iter()
        .map(|v| format!("{v:.precision$}"))
        .collect::<Vec<_>>()
        .join(",")
}
