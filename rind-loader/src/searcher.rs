/**
 * Searcher strategies
 * Pluggable units of resolution logic, tried in order by the resolver
 */
use std::collections::HashMap;
use std::path::PathBuf;

use crate::search_path::SearchPaths;

/// Result of one strategy's attempt at a name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// A path that existed at check time
    Found(PathBuf),
    /// Every path the strategy checked, in the order checked
    NotFound(Vec<PathBuf>),
}

/// A resolution strategy.
///
/// Strategies receive the original name every time; a failure earlier in
/// the chain does not transform what later strategies see. The search path
/// list is passed in so strategies that want it can consult it.
pub trait Searcher {
    /// Short name used to tag failed candidates
    fn name(&self) -> &str;

    /// Try to turn `name` into an existing file
    fn search(&self, name: &str, paths: &SearchPaths) -> SearchResult;
}

/// Whether a name points at the filesystem directly instead of being a
/// bare script name. Covers `.`, `..`, and anything starting with `./`,
/// `../` or `/`. A name like `.profile` is not literal and still goes
/// through the search paths.
pub fn is_literal_path(name: &str) -> bool {
    name == "."
        || name == ".."
        || name.starts_with("./")
        || name.starts_with("../")
        || name.starts_with('/')
}

/// The default strategy: literal paths first, then search path expansion.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathSearcher;

impl PathSearcher {
    pub fn new() -> Self {
        Self
    }
}

impl Searcher for PathSearcher {
    fn name(&self) -> &str {
        "path"
    }

    /// Resolution order (first existing file wins):
    /// 1. The name itself, when it is a literal path. A hit here never
    ///    consults the search path list.
    /// 2. Each search path template, expanded with the name, in list order.
    ///
    /// A literal-looking name whose file is absent is recorded as the first
    /// failed candidate and still falls through to the templates.
    fn search(&self, name: &str, paths: &SearchPaths) -> SearchResult {
        let mut tried = Vec::new();

        if is_literal_path(name) {
            let literal = PathBuf::from(name);
            if literal.exists() {
                log::debug!("'{}' taken as a literal path", name);
                return SearchResult::Found(literal);
            }
            tried.push(literal);
        }

        for template in paths.iter() {
            let candidate = template.expand(name);
            log::debug!("trying '{}'", candidate.display());
            if candidate.exists() {
                return SearchResult::Found(candidate);
            }
            tried.push(candidate);
        }

        SearchResult::NotFound(tried)
    }
}

/// A fixed name to path table, for pinning individual scripts.
///
/// Not installed by default; append one behind the default strategy to get
/// explicit overrides that only apply when the normal search misses.
#[derive(Debug, Clone, Default)]
pub struct StaticSearcher {
    scripts: HashMap<String, PathBuf>,
}

impl StaticSearcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `name` to `path`; a later insert for the same name replaces it
    pub fn insert<S: Into<String>, P: Into<PathBuf>>(&mut self, name: S, path: P) {
        self.scripts.insert(name.into(), path.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.scripts.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }
}

impl Searcher for StaticSearcher {
    fn name(&self) -> &str {
        "static"
    }

    /// A mapped path is still checked for existence; a stale mapping fails
    /// with that one candidate rather than resolving to a missing file.
    fn search(&self, name: &str, _paths: &SearchPaths) -> SearchResult {
        match self.scripts.get(name) {
            Some(path) if path.exists() => SearchResult::Found(path.clone()),
            Some(path) => SearchResult::NotFound(vec![path.clone()]),
            None => SearchResult::NotFound(Vec::new()),
        }
    }
}
