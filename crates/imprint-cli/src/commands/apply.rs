use miette::Result;

use imprint_ops::ops_license::{LicenseOps, INTENT_FILE, LICENSE_FILE};
use imprint_util::progress;

use crate::cli::Cli;

pub fn exec(cli: &Cli, section_name: &str) -> Result<()> {
    let target = super::target_dir(cli)?;
    let year = super::current_year();
    let config = super::load_config(cli, &target, year)?;

    let section = config.section(section_name);
    let ops = LicenseOps::new(section, year);
    let report = ops.apply(&target)?;

    progress::status(
        "Imprinted",
        &format!("{} source file(s)", report.headers_applied),
    );
    if report.license_created {
        progress::status("Created", LICENSE_FILE);
    }
    if report.intent_created {
        progress::status("Created", INTENT_FILE);
    }

    Ok(())
}
