mod common;

use common::{FakeCloner, RecordingRunner, ScriptedPrompter, context};
use moltarena::config::Settings;
use moltarena::fallback::ToolOutcome;
use moltarena::install::{SKILL_DIR, install, install_path, is_installed};

#[test]
fn resolves_install_path_under_target() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = install_path(dir.path()).expect("path");
    assert_eq!(path, dir.path().join(SKILL_DIR));
    assert!(path.is_absolute());
}

#[test]
fn installs_and_strips_git_metadata() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = Settings::default();
    let runner = RecordingRunner::default();
    let cloner = FakeCloner::default();
    let prompter = ScriptedPrompter::new(false, &[]);
    let ctx = context(&settings, &runner, &cloner, &prompter);

    let outcome = install(dir.path(), &ctx).expect("install");

    assert_eq!(outcome.install_path, dir.path().join(SKILL_DIR));
    assert_eq!(outcome.dependencies, ToolOutcome::Succeeded);
    assert!(is_installed(&outcome.install_path));
    assert!(!outcome.install_path.join(".git").exists());
    assert_eq!(runner.programs(), vec!["pip"]);

    let calls = runner.calls.borrow();
    assert_eq!(calls[0].args, vec!["install", "-r", "requirements.txt"]);
    assert_eq!(calls[0].cwd.as_deref(), Some(outcome.install_path.as_path()));
}

#[test]
fn falls_back_to_pip3() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = Settings::default();
    let runner = RecordingRunner::failing(&["pip"]);
    let cloner = FakeCloner::default();
    let prompter = ScriptedPrompter::new(false, &[]);
    let ctx = context(&settings, &runner, &cloner, &prompter);

    let outcome = install(dir.path(), &ctx).expect("install");

    assert_eq!(outcome.dependencies, ToolOutcome::Succeeded);
    assert_eq!(runner.programs(), vec!["pip", "pip3"]);
}

#[test]
fn dependency_failure_is_not_fatal() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = Settings::default();
    let runner = RecordingRunner::failing(&["pip", "pip3"]);
    let cloner = FakeCloner::default();
    let prompter = ScriptedPrompter::new(false, &[]);
    let ctx = context(&settings, &runner, &cloner, &prompter);

    let outcome = install(dir.path(), &ctx).expect("install still succeeds");

    assert_eq!(outcome.dependencies, ToolOutcome::FailedTerminally);
    assert_eq!(runner.programs(), vec!["pip", "pip3"]);
    assert!(is_installed(&outcome.install_path));
}

#[test]
fn clone_failure_stops_before_dependencies() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = Settings::default();
    let runner = RecordingRunner::default();
    let cloner = FakeCloner::failing();
    let prompter = ScriptedPrompter::new(false, &[]);
    let ctx = context(&settings, &runner, &cloner, &prompter);

    let err = install(dir.path(), &ctx).expect_err("clone failure is fatal");

    assert!(err.to_string().contains("repository not found"));
    assert_eq!(cloner.clones.get(), 1);
    assert!(runner.calls.borrow().is_empty());
}
