use std::fs;

use imprint_core::config::Section;
use imprint_ops::ops_license::{LicenseOps, INTENT_FILE, LICENSE_FILE};
use tempfile::TempDir;

fn section(script: Option<&str>, license: Option<&str>, intent: Option<&str>) -> Section {
    Section {
        script: script.map(str::to_string),
        license: license.map(str::to_string),
        intent: intent.map(str::to_string),
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// Copyright-year rewriting
// ---------------------------------------------------------------------------

#[test]
fn copyright_single_year_extends_to_range() {
    assert_eq!(
        LicenseOps::update_copyright_year("© 2020", 2023),
        "© 2020-2023"
    );
}

#[test]
fn copyright_range_extends_to_current_year() {
    assert_eq!(
        LicenseOps::update_copyright_year("© 2020-2021", 2023),
        "© 2020-2023"
    );
}

#[test]
fn copyright_current_year_is_untouched() {
    assert_eq!(LicenseOps::update_copyright_year("© 2023", 2023), "© 2023");
}

#[test]
fn copyright_update_is_idempotent_within_a_year() {
    let once = LicenseOps::update_copyright_year("© 2020", 2023);
    let twice = LicenseOps::update_copyright_year(&once, 2023);
    assert_eq!(once, twice);
}

#[test]
fn copyright_update_is_monotonic_across_years() {
    let in_2023 = LicenseOps::update_copyright_year("© 2020", 2023);
    assert_eq!(in_2023, "© 2020-2023");
    let in_2024 = LicenseOps::update_copyright_year(&in_2023, 2024);
    assert_eq!(in_2024, "© 2020-2024");
}

#[test]
fn copyright_updates_every_notice_in_the_text() {
    let text = "© 2019 Alice\nsome prose\n© 2021-2022 Bob\n";
    let updated = LicenseOps::update_copyright_year(text, 2024);
    assert_eq!(updated, "© 2019-2024 Alice\nsome prose\n© 2021-2024 Bob\n");
}

#[test]
fn copyright_leaves_surrounding_text_alone() {
    let text = "Licensed under MIT.\n© 2020 Example Corp.\nAll rights reserved.\n";
    let updated = LicenseOps::update_copyright_year(text, 2022);
    assert!(updated.starts_with("Licensed under MIT.\n"));
    assert!(updated.ends_with("All rights reserved.\n"));
    assert!(updated.contains("© 2020-2022 Example Corp."));
}

// ---------------------------------------------------------------------------
// Header application
// ---------------------------------------------------------------------------

#[test]
fn header_prepended_to_matching_files() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("tool.py"), "print('hi')\n").unwrap();
    fs::write(tmp.path().join("notes.txt"), "no header here\n").unwrap();

    let ops = LicenseOps::new(section(Some("# © 2024 Ada"), None, None), 2024);
    let report = ops.apply(tmp.path()).unwrap();

    assert_eq!(report.headers_applied, 1);
    assert_eq!(
        fs::read_to_string(tmp.path().join("tool.py")).unwrap(),
        "# © 2024 Ada\nprint('hi')\n"
    );
    assert_eq!(
        fs::read_to_string(tmp.path().join("notes.txt")).unwrap(),
        "no header here\n"
    );
}

#[test]
fn header_application_is_idempotent() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("tool.py"), "print('hi')\n").unwrap();

    let ops = LicenseOps::new(section(Some("# header"), None, None), 2024);
    ops.apply(tmp.path()).unwrap();
    let first = fs::read_to_string(tmp.path().join("tool.py")).unwrap();

    let report = ops.apply(tmp.path()).unwrap();
    let second = fs::read_to_string(tmp.path().join("tool.py")).unwrap();

    assert_eq!(report.headers_applied, 0);
    assert_eq!(first, second);
}

#[test]
fn header_respects_custom_source_globs() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("main.rs"), "fn main() {}\n").unwrap();
    fs::write(tmp.path().join("tool.py"), "print('hi')\n").unwrap();

    let mut section = section(Some("// header"), None, None);
    section.sources = vec!["*.rs".to_string()];
    let ops = LicenseOps::new(section, 2024);
    let report = ops.apply(tmp.path()).unwrap();

    assert_eq!(report.headers_applied, 1);
    assert!(fs::read_to_string(tmp.path().join("main.rs"))
        .unwrap()
        .starts_with("// header\n"));
    assert_eq!(
        fs::read_to_string(tmp.path().join("tool.py")).unwrap(),
        "print('hi')\n"
    );
}

#[test]
fn no_script_key_skips_headers() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("tool.py"), "print('hi')\n").unwrap();

    let ops = LicenseOps::new(section(None, Some("MIT"), None), 2024);
    let report = ops.apply(tmp.path()).unwrap();

    assert_eq!(report.headers_applied, 0);
    assert_eq!(
        fs::read_to_string(tmp.path().join("tool.py")).unwrap(),
        "print('hi')\n"
    );
}

// ---------------------------------------------------------------------------
// LICENSE.md / INTENT.md
// ---------------------------------------------------------------------------

#[test]
fn license_created_from_configured_text() {
    let tmp = TempDir::new().unwrap();

    let ops = LicenseOps::new(section(None, Some("MIT License © 2024 Ada"), None), 2024);
    let report = ops.apply(tmp.path()).unwrap();

    assert!(report.license_created);
    assert_eq!(
        fs::read_to_string(tmp.path().join(LICENSE_FILE)).unwrap(),
        "MIT License © 2024 Ada"
    );
}

#[test]
fn existing_license_gets_year_update_not_replacement() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(LICENSE_FILE),
        "Custom license\n© 2020 Ada\n",
    )
    .unwrap();

    let ops = LicenseOps::new(section(None, Some("would replace"), None), 2024);
    let report = ops.apply(tmp.path()).unwrap();

    assert!(!report.license_created);
    assert_eq!(
        fs::read_to_string(tmp.path().join(LICENSE_FILE)).unwrap(),
        "Custom license\n© 2020-2024 Ada\n"
    );
}

#[test]
fn intent_skipped_without_intent_key() {
    let tmp = TempDir::new().unwrap();

    let ops = LicenseOps::new(section(None, Some("MIT"), None), 2024);
    ops.apply(tmp.path()).unwrap();

    assert!(!tmp.path().join(INTENT_FILE).exists());
}

#[test]
fn intent_created_when_configured() {
    let tmp = TempDir::new().unwrap();

    let ops = LicenseOps::new(
        section(None, Some("MIT"), Some("Intent © 2024 Agency")),
        2024,
    );
    let report = ops.apply(tmp.path()).unwrap();

    assert!(report.intent_created);
    assert_eq!(
        fs::read_to_string(tmp.path().join(INTENT_FILE)).unwrap(),
        "Intent © 2024 Agency"
    );
}

#[test]
fn existing_intent_gets_year_update() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(INTENT_FILE), "Intent © 2021\n").unwrap();

    let ops = LicenseOps::new(section(None, None, Some("fresh intent")), 2024);
    ops.apply(tmp.path()).unwrap();

    assert_eq!(
        fs::read_to_string(tmp.path().join(INTENT_FILE)).unwrap(),
        "Intent © 2021-2024\n"
    );
}

#[test]
fn no_license_key_and_no_file_leaves_directory_untouched() {
    let tmp = TempDir::new().unwrap();

    let ops = LicenseOps::new(section(None, None, None), 2024);
    let report = ops.apply(tmp.path()).unwrap();

    assert_eq!(report, Default::default());
    assert!(!tmp.path().join(LICENSE_FILE).exists());
}
