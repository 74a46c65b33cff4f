use miette::Result;

use imprint_ops::git::CliGit;
use imprint_ops::ops_version::TagBumper;
use imprint_ops::prompt;
use imprint_util::progress;

use crate::cli::Cli;

pub fn exec(cli: &Cli, kind: Option<&str>) -> Result<()> {
    let target = super::target_dir(cli)?;

    let kind = match kind {
        Some(kind) => kind.to_string(),
        None => prompt::select_bump_kind()?.to_string(),
    };

    let bumper = TagBumper::new(CliGit::new(&target));
    let before = bumper.latest_tag().to_string();
    let after = bumper.bump(&kind)?;

    if after != before {
        progress::status("Tagged", &after);
    } else if before.is_empty() {
        progress::status_warn("Unchanged", "no tags found");
    } else {
        progress::status_warn("Unchanged", &before);
    }

    Ok(())
}
