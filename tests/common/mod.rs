#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{HashSet, VecDeque};
use std::path::Path;

use moltarena::config::Settings;
use moltarena::git::RepoCloner;
use moltarena::process::{Invocation, ProcessRunner};
use moltarena::prompt::{Prompter, Validator};
use moltarena::{Context, MoltArenaError, Result};

/// Records every invocation; programs listed in `failing` exit non-zero.
#[derive(Default)]
pub struct RecordingRunner {
    pub failing: HashSet<String>,
    pub calls: RefCell<Vec<Invocation>>,
}

impl RecordingRunner {
    pub fn failing(programs: &[&str]) -> Self {
        Self {
            failing: programs.iter().map(|p| p.to_string()).collect(),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn programs(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|call| call.program.clone())
            .collect()
    }
}

impl ProcessRunner for RecordingRunner {
    fn run(&self, invocation: &Invocation) -> Result<()> {
        self.calls.borrow_mut().push(invocation.clone());
        if self.failing.contains(&invocation.program) {
            return Err(MoltArenaError::ProcessFailed {
                program: invocation.program.clone(),
                status: "exit status: 1".to_string(),
                stderr: String::new(),
            });
        }
        Ok(())
    }
}

/// Writes a skeleton skill (with a `.git` dir) instead of cloning.
#[derive(Default)]
pub struct FakeCloner {
    pub fail: bool,
    pub clones: Cell<usize>,
}

impl FakeCloner {
    pub fn failing() -> Self {
        Self {
            fail: true,
            clones: Cell::new(0),
        }
    }
}

impl RepoCloner for FakeCloner {
    fn clone_repo(&self, _url: &str, dest: &Path) -> Result<()> {
        self.clones.set(self.clones.get() + 1);
        if self.fail {
            return Err(MoltArenaError::Message(
                "repository not found".to_string(),
            ));
        }
        std::fs::create_dir_all(dest.join(".git"))?;
        std::fs::write(dest.join(".git").join("HEAD"), "ref: refs/heads/main\n")?;
        std::fs::write(dest.join("script.py"), "print('hi')\n")?;
        std::fs::write(dest.join("requirements.txt"), "requests\n")?;
        Ok(())
    }
}

/// Replays canned answers, skipping those the validator rejects.
pub struct ScriptedPrompter {
    pub confirm_answer: bool,
    pub confirms: Cell<usize>,
    pub answers: RefCell<VecDeque<String>>,
    pub rejected: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(confirm_answer: bool, answers: &[&str]) -> Self {
        Self {
            confirm_answer,
            confirms: Cell::new(0),
            answers: RefCell::new(answers.iter().map(|a| a.to_string()).collect()),
            rejected: RefCell::new(Vec::new()),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, _message: &str, _default: bool) -> Result<bool> {
        self.confirms.set(self.confirms.get() + 1);
        Ok(self.confirm_answer)
    }

    fn input(
        &self,
        message: &str,
        default: Option<&str>,
        validate: Validator<'_>,
    ) -> Result<String> {
        loop {
            let Some(answer) = self.answers.borrow_mut().pop_front() else {
                return Err(MoltArenaError::Message(format!(
                    "no scripted answer for {}",
                    message
                )));
            };
            let answer = match (answer.is_empty(), default) {
                (true, Some(default)) => default.to_string(),
                _ => answer,
            };
            match validate(&answer) {
                Ok(()) => return Ok(answer),
                Err(reason) => self.rejected.borrow_mut().push(reason),
            }
        }
    }
}

pub fn context<'a>(
    settings: &'a Settings,
    runner: &'a RecordingRunner,
    cloner: &'a FakeCloner,
    prompter: &'a ScriptedPrompter,
) -> Context<'a> {
    Context {
        settings,
        runner,
        cloner,
        prompter,
    }
}
