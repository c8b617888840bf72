//! Hidden runner command, executed in a child process

use crate::cli::args::RunnerArgs;
use crate::error::AocResult;
use crate::runner::{program, RunnerManifest, Verdict};
use crate::solutions;
use tracing::debug;

/// Execute a runner manifest
///
/// A regression is reported on stdout and still exits successfully.
pub async fn execute(args: RunnerArgs) -> AocResult<()> {
    let manifest = RunnerManifest::load(&args.manifest)?;
    let registry = solutions::registry();

    let mut stdout = std::io::stdout().lock();
    let verdict = program::execute(&manifest, &registry, &mut stdout)?;
    if let Verdict::Regression { got, want } = verdict {
        debug!("{} regressed: {} != {}", manifest.puzzle, got, want);
    }
    Ok(())
}
