/**
 * Resolution engine
 * Walks the searcher chain, short-circuits on the first hit, aggregates misses
 */
use std::path::PathBuf;

use crate::search_path::{PathTemplate, SearchPaths};
use crate::searcher::{PathSearcher, SearchResult, Searcher};

/// One failed attempt: which strategy tried which path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub searcher: String,
    pub path: PathBuf,
}

/// Outcome of a resolution call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A path that existed when checked
    Resolved(PathBuf),
    /// Every candidate every strategy tried, in strategy order
    Exhausted(Vec<Candidate>),
}

/// Resolver context: the search path list plus the searcher chain.
///
/// Callers own one of these and pass it into resolution calls; there is no
/// process-wide state. Both the list and the chain are extended by
/// appending, and appends from setup code must happen before resolution
/// calls begin (everything here is single-threaded and synchronous).
pub struct Resolver {
    search_paths: SearchPaths,
    searchers: Vec<Box<dyn Searcher>>,
}

impl Resolver {
    /// Default strategy over the default search paths
    pub fn new() -> Self {
        Self::with_paths(SearchPaths::defaults())
    }

    /// Default strategy over a caller-supplied search path list
    pub fn with_paths(search_paths: SearchPaths) -> Self {
        Self {
            search_paths,
            searchers: vec![Box::new(PathSearcher::new())],
        }
    }

    pub fn search_paths(&self) -> &SearchPaths {
        &self.search_paths
    }

    pub fn search_paths_mut(&mut self) -> &mut SearchPaths {
        &mut self.search_paths
    }

    /// Append a template to the end of the search path list
    pub fn add_search_path(&mut self, template: PathTemplate) {
        self.search_paths.add(template);
    }

    /// Append a strategy; it runs after every strategy already registered
    pub fn add_searcher(&mut self, searcher: Box<dyn Searcher>) {
        self.searchers.push(searcher);
    }

    /// Drop every registered strategy, the default included
    pub fn clear_searchers(&mut self) {
        self.searchers.clear();
    }

    /// Names of the registered strategies, in the order they run
    pub fn searcher_names(&self) -> Vec<&str> {
        self.searchers.iter().map(|s| s.name()).collect()
    }

    /// Resolve `name` to an existing file.
    ///
    /// Each strategy runs in registration order with the original name.
    /// The first hit wins and discards any earlier misses. When every
    /// strategy misses, the result carries each strategy's candidates in
    /// the order they were tried. This method does no filesystem access of
    /// its own; existence checks belong to the strategies.
    pub fn resolve(&self, name: &str) -> Resolution {
        let mut tried: Vec<Candidate> = Vec::new();

        for searcher in &self.searchers {
            match searcher.search(name, &self.search_paths) {
                SearchResult::Found(path) => {
                    log::debug!(
                        "resolved '{}' to '{}' via the {} searcher",
                        name,
                        path.display(),
                        searcher.name()
                    );
                    return Resolution::Resolved(path);
                }
                SearchResult::NotFound(paths) => {
                    log::debug!(
                        "{} searcher missed '{}' after {} candidates",
                        searcher.name(),
                        name,
                        paths.len()
                    );
                    tried.extend(paths.into_iter().map(|path| Candidate {
                        searcher: searcher.name().to_string(),
                        path,
                    }));
                }
            }
        }

        Resolution::Exhausted(tried)
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}
