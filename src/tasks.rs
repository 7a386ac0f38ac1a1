//! # Task Graph Synthesis
//!
//! Turns a project's list of labeled tasks into a task-runner descriptor:
//! one entry per declared task, plus one synthetic aggregator entry that
//! depends on every declared label. The aggregator is the fan-out root,
//! marked as the default build-kind entry and configured to run on folder
//! open, so opening the materialized workspace starts every task's terminal.
//!
//! The descriptor is persisted per project as pretty-printed JSON with the
//! shape `{ "tasks": [...], "aggregator": {...} }`.
//!
//! Dependency edges are validated here rather than at config load time: a
//! task referencing an undefined label, or itself, is an [`Error::Synthesis`]
//! that rejects this project's descriptor without affecting sibling projects.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::config::Task;
use crate::error::{Error, Result};

/// Label of the synthetic aggregator entry.
pub const AGGREGATOR_LABEL: &str = "Create terminals";

/// One descriptor entry per declared task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskEntry {
    pub label: String,
    pub command: String,
    #[serde(rename = "dependsOn")]
    pub depends_on: Vec<String>,
    #[serde(
        rename = "presentationGroup",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub presentation_group: Option<String>,
}

/// Build-kind marker on the aggregator entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatorGroup {
    pub kind: String,
    #[serde(rename = "isDefault")]
    pub is_default: bool,
}

/// Trigger configuration of the aggregator entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunOptions {
    #[serde(rename = "runOn")]
    pub run_on: String,
}

/// The synthetic fan-out root. Has no command of its own; it exists purely
/// to pull every declared task in through its dependency set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatorEntry {
    pub label: String,
    #[serde(rename = "dependsOn")]
    pub depends_on: Vec<String>,
    pub group: AggregatorGroup,
    #[serde(rename = "runOptions")]
    pub run_options: RunOptions,
}

/// The full descriptor artifact for one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskGraphDescriptor {
    pub tasks: Vec<TaskEntry>,
    pub aggregator: AggregatorEntry,
}

/// Synthesize the task descriptor for one project's task list.
///
/// Zero tasks is not an error: the result is an aggregator with an empty
/// dependency set (a no-op root). The aggregator always depends on the full
/// label set, in declaration order.
pub fn synthesize(tasks: &[Task]) -> Result<TaskGraphDescriptor> {
    let all_labels: Vec<String> = tasks.iter().map(|t| t.label.clone()).collect();
    let label_set: HashSet<&str> = all_labels.iter().map(String::as_str).collect();

    let mut entries = Vec::with_capacity(tasks.len());
    for task in tasks {
        for dep in &task.depends_on {
            if dep == &task.label {
                return Err(Error::Synthesis {
                    label: task.label.clone(),
                    message: "task depends on itself".to_string(),
                });
            }
            if !label_set.contains(dep.as_str()) {
                return Err(Error::Synthesis {
                    label: task.label.clone(),
                    message: format!("depends on undefined task '{}'", dep),
                });
            }
        }

        entries.push(TaskEntry {
            label: task.label.clone(),
            command: task.command.clone(),
            depends_on: task.depends_on.clone(),
            presentation_group: task.group.clone(),
        });
    }

    let aggregator = AggregatorEntry {
        label: AGGREGATOR_LABEL.to_string(),
        depends_on: all_labels,
        group: AggregatorGroup {
            kind: "build".to_string(),
            is_default: true,
        },
        run_options: RunOptions {
            run_on: "folderOpen".to_string(),
        },
    };

    Ok(TaskGraphDescriptor {
        tasks: entries,
        aggregator,
    })
}
