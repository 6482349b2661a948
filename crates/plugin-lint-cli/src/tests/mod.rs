//! Runner tests with a mocked manifest source.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use mockall::mock;
use plugin_lint_core::{Manifest, ManifestError};
use rstest::rstest;

use crate::output::JsonReport;
use crate::source::ManifestSource;
use crate::{AppError, run_with_source};


mock! {
    Source {}
    impl ManifestSource for Source {
        fn resolve(&self, path: &Path) -> Result<PathBuf, AppError>;
        fn load(&self, path: &Path) -> Result<Manifest, ManifestError>;
    }
}

struct Outcome {
    exit: ExitCode,
    stdout: String,
    stderr: String,
}

fn run_cli(args: &[&str], source: &MockSource) -> Outcome {
    let argv = std::iter::once("validate-plugin-manifest")
        .chain(args.iter().copied())
        .map(OsString::from);
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let exit = run_with_source(argv, &mut stdout, &mut stderr, source);
    Outcome {
        exit,
        stdout: String::from_utf8(stdout).expect("stdout utf8"),
        stderr: String::from_utf8(stderr).expect("stderr utf8"),
    }
}

fn clean_manifest() -> Manifest {
    Manifest::default()
        .with_id("good-manifest")
        .with_name("Good Manifest")
        .with_description("A good manifest")
        .with_author("The Author")
        .with_version("1.0.0")
        .with_min_app_version("1.0.0")
}

fn source_returning(manifest: Manifest) -> MockSource {
    let mut source = MockSource::new();
    source
        .expect_resolve()
        .returning(|path| Ok(Path::new("/work").join(path)));
    source
        .expect_load()
        .times(1)
        .returning(move |_| Ok(manifest.clone()));
    source
}

fn untouched_source() -> MockSource {
    let mut source = MockSource::new();
    source.expect_resolve().never();
    source.expect_load().never();
    source
}

// ---------------------------------------------------------------------------
// Informational flags
// ---------------------------------------------------------------------------

#[rstest]
#[case::long("--version")]
#[case::short("-V")]
fn version_flag_prints_and_exits(#[case] flag: &str) {
    let outcome = run_cli(&[flag], &untouched_source());
    assert_eq!(outcome.exit, ExitCode::SUCCESS);
    assert_eq!(
        outcome.stdout,
        format!(
            "Obsidian Plugin Manifest Validator v{}\n",
            env!("CARGO_PKG_VERSION")
        )
    );
    assert!(outcome.stderr.is_empty());
}

#[test]
fn help_goes_to_stdout_and_succeeds() {
    let outcome = run_cli(&["--help"], &untouched_source());
    assert_eq!(outcome.exit, ExitCode::SUCCESS);
    assert!(outcome.stdout.contains("--manifest"), "{}", outcome.stdout);
    assert!(outcome.stdout.contains("--json"));
    assert!(outcome.stderr.is_empty());
}

#[test]
fn unknown_flag_is_a_usage_failure() {
    let outcome = run_cli(&["--strict"], &untouched_source());
    assert_eq!(outcome.exit, ExitCode::FAILURE);
    assert!(outcome.stderr.contains("--strict"), "{}", outcome.stderr);
    assert!(outcome.stdout.is_empty());
}

// ---------------------------------------------------------------------------
// Manifest resolution and loading
// ---------------------------------------------------------------------------

#[test]
fn default_path_is_manifest_json_in_working_directory() {
    let mut source = MockSource::new();
    source
        .expect_resolve()
        .withf(|path: &Path| path == Path::new("manifest.json"))
        .times(1)
        .returning(|path| Ok(Path::new("/work").join(path)));
    source
        .expect_load()
        .withf(|path: &Path| path == Path::new("/work/manifest.json"))
        .times(1)
        .returning(|_| Ok(clean_manifest()));

    let outcome = run_cli(&["--quiet"], &source);
    assert_eq!(outcome.exit, ExitCode::SUCCESS);
}

#[test]
fn custom_manifest_path_is_resolved() {
    let mut source = MockSource::new();
    source
        .expect_resolve()
        .withf(|path: &Path| path == Path::new("plugins/kanban/manifest.json"))
        .times(1)
        .returning(|path| Ok(Path::new("/work").join(path)));
    source
        .expect_load()
        .withf(|path: &Path| path == Path::new("/work/plugins/kanban/manifest.json"))
        .times(1)
        .returning(|_| Ok(clean_manifest()));

    let outcome = run_cli(&["--manifest", "plugins/kanban/manifest.json"], &source);
    assert_eq!(outcome.exit, ExitCode::SUCCESS);
}

#[test]
fn unreadable_manifest_is_fatal() {
    let mut source = MockSource::new();
    source
        .expect_resolve()
        .returning(|path| Ok(Path::new("/work").join(path)));
    source.expect_load().returning(|path| {
        Err(ManifestError::Read {
            path: path.to_path_buf(),
            source: Arc::new(io::Error::new(io::ErrorKind::NotFound, "not found")),
        })
    });

    let outcome = run_cli(&[], &source);
    assert_eq!(outcome.exit, ExitCode::FAILURE);
    assert!(outcome.stdout.is_empty(), "no report expected: {}", outcome.stdout);
    assert!(
        outcome
            .stderr
            .starts_with("Error reading manifest file '/work/manifest.json'"),
        "{}",
        outcome.stderr
    );
}

#[test]
fn undecodable_manifest_is_fatal() {
    let mut source = MockSource::new();
    source
        .expect_resolve()
        .returning(|path| Ok(Path::new("/work").join(path)));
    source.expect_load().returning(|path| {
        Err(ManifestError::Parse {
            path: path.to_path_buf(),
            source: serde_json::from_str::<serde_json::Value>("{").expect_err("truncated json"),
        })
    });

    let outcome = run_cli(&["--json"], &source);
    assert_eq!(outcome.exit, ExitCode::FAILURE);
    assert!(outcome.stdout.is_empty());
    assert!(outcome.stderr.starts_with("Error parsing manifest.json: "));
}

#[test]
fn working_directory_failure_is_fatal() {
    let mut source = MockSource::new();
    source.expect_resolve().returning(|_| {
        Err(AppError::CurrentDir(Arc::new(io::Error::new(
            io::ErrorKind::NotFound,
            "cwd removed",
        ))))
    });
    source.expect_load().never();

    let outcome = run_cli(&[], &source);
    assert_eq!(outcome.exit, ExitCode::FAILURE);
    assert!(outcome.stderr.contains("Error getting current directory"));
}

// ---------------------------------------------------------------------------
// Reports and exit status
// ---------------------------------------------------------------------------

#[test]
fn valid_manifest_prints_banner_and_passes() {
    let outcome = run_cli(&[], &source_returning(clean_manifest()));
    assert_eq!(outcome.exit, ExitCode::SUCCESS);
    assert_eq!(
        outcome.stdout,
        "📝 Validating manifest for plugin: Good Manifest\n\n✅ Manifest validation passed!\n"
    );
}

#[test]
fn quiet_suppresses_banner() {
    let outcome = run_cli(&["--quiet"], &source_returning(clean_manifest()));
    assert_eq!(outcome.exit, ExitCode::SUCCESS);
    assert!(!outcome.stdout.contains("📝"));
    assert!(outcome.stdout.contains("✅ Manifest validation passed!"));
}

#[test]
fn single_dash_flags_match_double_dash_behaviour() {
    let mut source = MockSource::new();
    source
        .expect_resolve()
        .withf(|path: &Path| path == Path::new("custom.json"))
        .times(1)
        .returning(|path| Ok(Path::new("/work").join(path)));
    source
        .expect_load()
        .times(1)
        .returning(|_| Ok(clean_manifest()));

    let outcome = run_cli(&["-manifest", "custom.json", "-quiet"], &source);
    assert_eq!(outcome.exit, ExitCode::SUCCESS);
    assert_eq!(outcome.stdout, "\n✅ Manifest validation passed!\n");
}

#[test]
fn single_dash_version_prints_and_exits() {
    let outcome = run_cli(&["-version"], &untouched_source());
    assert_eq!(outcome.exit, ExitCode::SUCCESS);
    assert!(outcome.stdout.starts_with("Obsidian Plugin Manifest Validator v"));
}

#[test]
fn invalid_manifest_fails() {
    let manifest = clean_manifest().with_version("1.0.0-beta");
    let outcome = run_cli(&[], &source_returning(manifest));
    assert_eq!(outcome.exit, ExitCode::FAILURE);
    assert!(outcome.stdout.contains(
        "  • Invalid version number format (should only contain numbers and dots)"
    ));
    assert!(outcome.stderr.is_empty());
}

#[test]
fn warnings_alone_do_not_fail() {
    let manifest = clean_manifest().with_author("contact@example.com");
    let outcome = run_cli(&["-q"], &source_returning(manifest));
    assert_eq!(outcome.exit, ExitCode::SUCCESS);
    assert!(outcome.stdout.contains("(but has 1 warning(s) to consider)"));
}

#[test]
fn json_output_has_no_banner() {
    let manifest = clean_manifest()
        .with_id("kanban-plugin")
        .with_author("contact@example.com");
    let outcome = run_cli(&["--json"], &source_returning(manifest));
    assert_eq!(outcome.exit, ExitCode::FAILURE);

    let report: JsonReport = serde_json::from_str(&outcome.stdout).expect("stdout is json");
    assert_eq!(
        report,
        JsonReport {
            valid: false,
            errors: vec![String::from("Plugin ID should not end with 'plugin'")],
            warnings: vec![String::from(
                "Email addresses are discouraged in the author field"
            )],
        }
    );
}
