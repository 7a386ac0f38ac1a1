//! # Devnest Library
//!
//! This library provides the core functionality for materializing
//! multi-repository development workspaces from a declarative JSON
//! configuration. It is designed to be used by the `devnest` command-line
//! tool but can also be integrated into other applications that need to
//! stand up (or back up) a workspace programmatically.
//!
//! ## Core Concepts
//!
//! The library is built around a few key concepts:
//!
//! - **Configuration (`config`)**: the schema for `config.json`: a
//!   workspace root, an env archive folder, and an ordered list of projects,
//!   each with repositories and labeled tasks.
//! - **Repository Acquisition (`git`)**: cloning one repository into an
//!   existing destination folder through the system git client, behind a
//!   trait so orchestration is testable without network access.
//! - **Env File Transfer (`envfiles`)**: moving `.env` files between the
//!   config-addressed archive and repository working folders, in either
//!   direction, with an explicit non-error `Skipped` outcome.
//! - **Task Graph Synthesis (`tasks`)**: deriving a task-runner descriptor
//!   from a project's labeled tasks, including the synthetic aggregator that
//!   fans out to every declared task on workspace open.
//! - **Orchestration (`workspace`, `backup`)**: the per-project pipelines
//!   that sequence the above with per-repository failure isolation.
//! - **Cleanup (`sweep`)**: pruning dependency-cache folders and lock files
//!   under a root path, independent of materialization.
//!
//! ## Execution Flow
//!
//! The main entry point is [`workspace::materialize`], which for each
//! project executes the following high-level steps:
//!
//! 1.  **Folders**: ensure the workspace root and project folder exist.
//! 2.  **Cloning**: acquire every repository, failures isolated per
//!     repository.
//! 3.  **Env Restore**: after the whole clone phase, restore each
//!     repository's archived env file.
//! 4.  **Descriptor**: synthesize the task graph and persist it under the
//!     project folder.
//!
//! Processing is purely sequential, in declaration order; a failure is
//! recorded in the returned outcomes and never aborts sibling work. Only a
//! fatal configuration error stops a run, and that happens before any
//! project is touched.

pub mod backup;
pub mod config;
pub mod defaults;
pub mod envfiles;
pub mod error;
pub mod git;
pub mod output;
pub mod sweep;
pub mod tasks;
pub mod workspace;
