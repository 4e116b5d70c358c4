//! Rank command — find the text whose style best matches a reference.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use tracing::{debug, instrument};

use stylosig_core::RankReport;
use stylosig_core::config::Config;

use super::{ReferenceArgs, read_input_file, read_texts};

/// Arguments for the `rank` subcommand.
#[derive(Args, Debug)]
pub struct RankArgs {
    /// Candidate files, in order. Reads one text per line from stdin when
    /// omitted, stopping at the first empty line.
    pub files: Vec<Utf8PathBuf>,

    /// Reference signature source.
    #[command(flatten)]
    pub reference: ReferenceArgs,

    /// Print only the 1-based index of the closest text.
    #[arg(long)]
    pub index_only: bool,
}

#[derive(Serialize)]
struct RankOutput<'a> {
    /// Candidate labels (file paths, or `text N` for stdin), in corpus order.
    sources: &'a [String],
    #[serde(flatten)]
    report: &'a RankReport,
}

/// Rank candidate texts against the reference signature.
#[instrument(name = "cmd_rank", skip_all, fields(files = args.files.len()))]
pub fn cmd_rank(
    args: RankArgs,
    global_json: bool,
    config: &Config,
    precision: usize,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(files = ?args.files, index_only = args.index_only, "executing rank command");

    let reference = args.reference.resolve(config, max_input_bytes)?;

    let (sources, texts): (Vec<String>, Vec<String>) = if args.files.is_empty() {
        let texts = read_texts(std::io::stdin().lock(), max_input_bytes)?;
        let sources = (1..=texts.len()).map(|i| format!("text {i}")).collect();
        (sources, texts)
    } else {
        let texts = args
            .files
            .iter()
            .map(|path| read_input_file(path, max_input_bytes))
            .collect::<anyhow::Result<Vec<String>>>()?;
        let sources = args.files.iter().map(ToString::to_string).collect();
        (sources, texts)
    };

    let report = stylosig_core::score_corpus(&texts, &reference)
        .context("failed to rank candidate texts")?;

    if args.index_only {
        println!("{}", report.best);
    } else if global_json {
        let output = RankOutput {
            sources: &sources,
            report: &report,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_ranking(&report, &sources, precision);
    }

    Ok(())
}

fn print_ranking(report: &RankReport, sources: &[String], precision: usize) {
    let width = report.candidates.len().to_string().len();
    for (candidate, source) in report.candidates.iter().zip(sources) {
        let marker = if candidate.index == report.best {
            "*".if_supports_color(Stream::Stdout, |t| t.green()).to_string()
        } else {
            " ".to_string()
        };
        println!(
            "{marker} {:>width$}  {:.precision$}  {source}",
            candidate.index, candidate.distance,
        );
    }

    let best = sources.get(report.best - 1).map_or("", String::as_str);
    println!();
    println!(
        "{} text {} ({best})",
        "Closest match:".if_supports_color(Stream::Stdout, |t| t.bold()),
        report.best,
    );
}
