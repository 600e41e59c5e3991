// rind-loader - Script resolution and loading for the rind scripting tool
//
// Turns a bare script name into a concrete file path through an ordered
// search path list and a chain of searcher strategies, then hands the path
// to a host for execution.

pub mod config;
pub mod dispatch;
pub mod host;
pub mod resolver;
pub mod search_path;
pub mod searcher;
pub mod suggest;

pub use config::{Config, CONFIG_FILE, PATH_ENV};
pub use dispatch::{dispatch, render_failure, LoadOutcome, LOAD_LABEL, SOURCE_LABEL};
pub use host::{ExecHost, RecordingHost, ScriptHost};
pub use resolver::{Candidate, Resolution, Resolver};
pub use search_path::{PathTemplate, SearchPaths, TemplateError, SCRIPT_EXTENSION};
pub use searcher::{is_literal_path, PathSearcher, SearchResult, Searcher, StaticSearcher};
pub use suggest::suggest_similar;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
