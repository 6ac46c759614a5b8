use std::io::{self, BufWriter};

use recbench::harness::{self, HarnessConfig};

fn main() -> anyhow::Result<()> {
    recbench::logging::init()?;

    let config = HarnessConfig::default();
    tracing::info!(sizes = ?config.sizes, trials = config.trials, "timing factorial");

    let out = BufWriter::new(io::stdout().lock());
    harness::factorial(&config, out)?;

    tracing::info!(rows = config.expected_rows(), "done");
    Ok(())
}
