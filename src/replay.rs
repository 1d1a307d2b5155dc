//! Scripted present/dismiss sequences, used by the `sheetstack` binary to
//! exercise a stack outside any UI.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::presentation::{PresentationKind, Presenter, Transition};
use crate::ui::LevelHost;

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("Failed to read script '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse script '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ReplayStep {
    Present {
        kind: PresentationKind,
        label: String,
    },
    Dismiss {
        level: usize,
    },
    DismissAll,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReplayScript {
    #[serde(default, rename = "step")]
    pub steps: Vec<ReplayStep>,
}

impl ReplayScript {
    pub fn parse(content: &str, path: &Path) -> Result<Self, ReplayError> {
        toml::from_str(content).map_err(|e| ReplayError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ReplayError> {
        let content = fs::read_to_string(path).map_err(|e| ReplayError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content, path)
    }

    /// Run every step against `presenter`. Each presented route's content
    /// is its label, and its dismiss callback records that label.
    pub fn run(&self, presenter: &Presenter<String>, max_depth: usize) -> ReplayReport {
        let dismissed = Arc::new(Mutex::new(Vec::new()));

        for step in &self.steps {
            match step {
                ReplayStep::Present { kind, label } => {
                    let content = label.clone();
                    let record = label.clone();
                    let dismissed = Arc::clone(&dismissed);
                    presenter.present(
                        *kind,
                        move |_| content.clone(),
                        Some(Box::new(move || dismissed.lock().push(record))),
                    );
                }
                ReplayStep::Dismiss { level } => presenter.dismiss(*level),
                ReplayStep::DismissAll => presenter.dismiss_all(),
            }
        }

        let stack = LevelHost::root(presenter.clone(), max_depth)
            .project()
            .into_iter()
            .map(|frame| LevelSummary {
                level: frame.level,
                kind: frame.kind,
                label: frame.content,
            })
            .collect();
        let dismissed = dismissed.lock().clone();

        ReplayReport {
            stack,
            dismissed,
            history: presenter.history(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelSummary {
    pub level: usize,
    pub kind: PresentationKind,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    /// Remaining levels, bottom-up.
    pub stack: Vec<LevelSummary>,
    /// Labels in the order their dismiss callbacks ran.
    pub dismissed: Vec<String>,
    pub history: Vec<Transition>,
}

impl fmt::Display for ReplayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "transitions:")?;
        for transition in &self.history {
            writeln!(
                f,
                "  {:?} level={} kind={} route={}",
                transition.event, transition.level, transition.kind, transition.route
            )?;
        }
        writeln!(f, "dismissed: {}", self.dismissed.join(", "))?;
        if self.stack.is_empty() {
            return writeln!(f, "stack: (empty)");
        }
        writeln!(f, "stack:")?;
        for level in &self.stack {
            writeln!(f, "  [{}] {} {}", level.level, level.kind, level.label)?;
        }
        Ok(())
    }
}
