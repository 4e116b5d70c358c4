//! Command implementations.

use std::io::BufRead;

use anyhow::{Context, bail};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use stylosig_core::Signature;
use stylosig_core::config::Config;

pub mod compare;
pub mod info;
pub mod rank;
pub mod signature;

/// Decimal places used for text output when the config sets none.
pub const DEFAULT_PRECISION: usize = 4;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Read texts one per line until the first empty line or end of input.
///
/// `max_bytes` bounds the combined size of the texts read.
pub fn read_texts<R: BufRead>(reader: R, max_bytes: Option<usize>) -> anyhow::Result<Vec<String>> {
    let mut texts = Vec::new();
    let mut total = 0usize;

    for line in reader.lines() {
        let line = line.context("failed to read text from stdin")?;
        if line.is_empty() {
            break;
        }
        total += line.len();
        if let Some(max) = max_bytes
            && total > max
        {
            bail!("input too large: stdin exceeds {max} bytes");
        }
        texts.push(line);
    }

    tracing::debug!(count = texts.len(), "read texts from stdin");
    Ok(texts)
}

/// Parse a signature from six comma- or whitespace-separated numbers.
pub fn parse_signature(input: &str) -> Result<Signature, String> {
    let values = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| match part.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            Ok(_) => Err(format!("`{part}` is not a finite number")),
            Err(_) => Err(format!("`{part}` is not a number")),
        })
        .collect::<Result<Vec<f64>, String>>()?;
    Signature::try_from(values.as_slice()).map_err(|e| e.to_string())
}

/// Where the reference signature for a comparison comes from.
#[derive(Args, Debug, Default)]
pub struct ReferenceArgs {
    /// Reference signature: wal,ttr,hlr,sal,sac,pal
    #[arg(long, value_name = "VALUES", value_parser = parse_signature, allow_hyphen_values = true)]
    pub signature: Option<Signature>,

    /// Use the signature of this text as the reference
    #[arg(long, value_name = "FILE", conflicts_with = "signature")]
    pub reference_text: Option<Utf8PathBuf>,
}

impl ReferenceArgs {
    /// Resolve the reference signature.
    ///
    /// Order: `--signature`, then `--reference-text`, then the config's
    /// `reference` table.
    pub fn resolve(&self, config: &Config, max_bytes: Option<usize>) -> anyhow::Result<Signature> {
        if let Some(signature) = self.signature {
            return Ok(signature);
        }
        if let Some(ref path) = self.reference_text {
            let content = read_input_file(path, max_bytes)?;
            return Ok(stylosig_core::compute_signature(&content));
        }
        config.reference.ok_or_else(|| {
            anyhow::anyhow!(
                "no reference signature: pass --signature or --reference-text, \
                 or set `reference` in the config file"
            )
        })
    }
}
