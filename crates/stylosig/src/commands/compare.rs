//! Compare command — distance between a text and a reference signature.

use camino::Utf8PathBuf;
use clap::Args;
use serde::Serialize;
use tracing::{debug, instrument};

use stylosig_core::Signature;
use stylosig_core::config::Config;

use super::{ReferenceArgs, read_input_file};

/// Arguments for the `compare` subcommand.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// File to compare.
    pub file: Utf8PathBuf,

    /// Reference signature source.
    #[command(flatten)]
    pub reference: ReferenceArgs,
}

#[derive(Serialize)]
struct Comparison {
    file: String,
    reference: Signature,
    signature: Signature,
    distance: f64,
}

/// Print the distance between a file's signature and the reference.
#[instrument(name = "cmd_compare", skip_all, fields(file = %args.file))]
pub fn cmd_compare(
    args: CompareArgs,
    global_json: bool,
    config: &Config,
    precision: usize,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing compare command");

    let reference = args.reference.resolve(config, max_input_bytes)?;
    let content = read_input_file(&args.file, max_input_bytes)?;
    let signature = stylosig_core::compute_signature(&content);
    let distance = signature.distance(&reference);

    if global_json {
        let comparison = Comparison {
            file: args.file.to_string(),
            reference,
            signature,
            distance,
        };
        println!("{}", serde_json::to_string_pretty(&comparison)?);
    } else {
        println!("{distance:.precision$} {}", args.file);
    }

    Ok(())
}
