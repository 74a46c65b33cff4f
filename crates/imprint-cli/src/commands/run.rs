use miette::Result;

use imprint_ops::git::CliGit;
use imprint_ops::prompt::TerminalClassifier;
use imprint_ops::{HookOutcome, HookRunner};
use imprint_util::progress;

use crate::cli::Cli;

pub fn exec(cli: &Cli) -> Result<()> {
    let target = super::target_dir(cli)?;
    let year = super::current_year();
    let config = super::load_config(cli, &target, year)?;

    let runner = HookRunner::new(
        &config,
        &target,
        TerminalClassifier,
        CliGit::new(&target),
        year,
    );

    match runner.run()? {
        HookOutcome::UpToDate => {
            progress::status_info("Unchanged", "license artifacts already present");
        }
        HookOutcome::Processed {
            report,
            defaults_seeded,
            tag,
        } => {
            progress::status(
                "Imprinted",
                &format!("{} source file(s)", report.headers_applied),
            );
            if defaults_seeded > 0 {
                progress::status("Seeded", &format!("{defaults_seeded} default file(s)"));
            }
            match tag {
                Some(tag) => progress::status("Tagged", &tag),
                None => progress::status_warn("Untagged", "no valid version tag to bump"),
            }
        }
    }

    Ok(())
}
