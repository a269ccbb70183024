use std::collections::BTreeSet;
use std::fs;

use scaffold_gen::assemble::{REPORT_FILE, assemble, generation_report};
use scaffold_gen::model::{Database, FrameworkKind, GeneratedFile, ProjectConfig};

fn sample_files() -> Vec<GeneratedFile> {
    vec![
        GeneratedFile::new("README.md", "# demo\n"),
        GeneratedFile::new("app/api/routes/__init__.py", ""),
        GeneratedFile::new("src/features/user/api.js", "export {}\n"),
    ]
}

fn sample_config() -> ProjectConfig {
    ProjectConfig {
        framework: FrameworkKind::Flask,
        database: Database::Sqlite,
        styling: "Plain CSS".to_string(),
        features: BTreeSet::new(),
        description: "demo".to_string(),
        entities: vec!["user".to_string()],
    }
}

#[test]
fn assemble_creates_nested_directories_and_counts_files() {
    let root = tempfile::tempdir().expect("tempdir");
    let files = sample_files();

    let result = assemble(root.path(), "demo-app", &files, Vec::new()).expect("assemble");

    assert_eq!(result.root, root.path().join("demo-app"));
    assert_eq!(result.files_written, files.len());
    assert!(result.root.join("app/api/routes/__init__.py").exists());
    assert_eq!(
        fs::read_to_string(result.root.join("README.md")).expect("read"),
        "# demo\n"
    );
}

#[test]
fn assemble_overwrites_existing_files_without_raising() {
    let root = tempfile::tempdir().expect("tempdir");
    let project_root = root.path().join("demo-app");
    fs::create_dir_all(project_root.join("src/features/user")).expect("pre-create");
    fs::write(project_root.join("README.md"), "stale contents").expect("pre-write");

    let result = assemble(root.path(), "demo-app", &sample_files(), Vec::new()).expect("assemble");

    assert_eq!(
        fs::read_to_string(result.root.join("README.md")).expect("read"),
        "# demo\n"
    );
}

#[test]
fn assemble_carries_warnings_into_the_result() {
    let root = tempfile::tempdir().expect("tempdir");
    let warnings = vec!["assist unavailable for flask resources `user`".to_string()];
    let result =
        assemble(root.path(), "demo-app", &sample_files(), warnings.clone()).expect("assemble");
    assert_eq!(result.warnings, warnings);
}

#[test]
fn report_lists_entities_files_and_warnings() {
    let config = sample_config();
    let files = sample_files();
    let warnings = vec!["assist unavailable".to_string()];

    let report = generation_report("demo-app", &config, &files, &warnings);

    assert_eq!(report.path.to_str(), Some(REPORT_FILE));
    assert!(report.contents.contains("**User**"));
    assert!(report.contents.contains("/api/users"));
    assert!(report.contents.contains("`README.md`"));
    assert!(report.contents.contains("assist unavailable"));
}

#[test]
fn report_describes_spa_scaffolds_by_feature_module() {
    let mut config = sample_config();
    config.framework = FrameworkKind::React;

    let report = generation_report("demo-spa", &config, &sample_files(), &[]);
    assert!(report.contents.contains("src/features/user/"));
    assert!(!report.contents.contains("## Warnings"));
}
