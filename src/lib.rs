//! forge generates files from named template sets.
//! A generator declares the values it needs and a list of input templates
//! with templated output paths; forge collects the values, resolves the paths
//! and writes the rendered files.

/// Command-line interface and command dispatch
pub mod cli;

/// Generator definitions and the definition store
/// Definitions are YAML or JSON files below the root directory (`.forge`)
pub mod config;

/// Error types and handling
pub mod error;

/// Orchestration of a generator run
pub mod generator;

/// Scaffolding of the root directory for `forge init`
pub mod init;

/// Logger setup
pub mod logger;

/// Output path templating
pub mod paths;

/// Rendering of templates into output files
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// MiniJinja-backed template rendering
pub mod renderer;
