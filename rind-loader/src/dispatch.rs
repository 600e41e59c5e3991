// Load dispatch: script name to resolved path to host, with typed outcomes

use std::path::PathBuf;

use anyhow::Result;

use crate::host::ScriptHost;
use crate::resolver::{Candidate, Resolution, Resolver};

/// Diagnostic label of the strict entry point
pub const SOURCE_LABEL: &str = "source";
/// Diagnostic label of the lenient entry point; mechanics are identical
pub const LOAD_LABEL: &str = "load";

/// What a dispatch call did.
///
/// Host errors are not an outcome; they travel through the error channel
/// of [`dispatch`] untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Script found and handed to the host; `status` is the host's status
    Loaded { path: PathBuf, status: i32 },
    /// Empty script name; nothing was resolved and no path was checked
    MissingName,
    /// Every searcher failed; `tried` is the full candidate list
    NotFound { name: String, tried: Vec<Candidate> },
}

impl LoadOutcome {
    /// Process exit status this outcome maps to at the top level
    pub fn exit_status(&self) -> i32 {
        match self {
            LoadOutcome::Loaded { status, .. } => *status,
            LoadOutcome::MissingName => 2,
            LoadOutcome::NotFound { .. } => 1,
        }
    }
}

/// Resolve `name` and hand the result to `host`, forwarding `args`
/// unmodified and in order.
///
/// The empty-name check runs before resolution, so a missing name touches
/// neither the filesystem nor the search paths. Resolution failures are
/// plain outcomes; deciding to terminate is the caller's business.
pub fn dispatch<H: ScriptHost>(
    resolver: &Resolver,
    host: &mut H,
    name: &str,
    args: &[String],
) -> Result<LoadOutcome> {
    if name.is_empty() {
        return Ok(LoadOutcome::MissingName);
    }

    match resolver.resolve(name) {
        Resolution::Resolved(path) => {
            let status = host.load(&path, args)?;
            Ok(LoadOutcome::Loaded { path, status })
        }
        Resolution::Exhausted(tried) => Ok(LoadOutcome::NotFound {
            name: name.to_string(),
            tried,
        }),
    }
}

/// Diagnostic block for a failed outcome, `None` when the script loaded.
///
/// Total failure renders as one header line followed by one line per
/// candidate, preserving aggregate order:
///
/// ```text
/// source: error: no script called 'deploy'
///         no file './deploy.ri'
/// ```
pub fn render_failure(label: &str, outcome: &LoadOutcome) -> Option<String> {
    match outcome {
        LoadOutcome::Loaded { .. } => None,
        LoadOutcome::MissingName => Some(format!(
            "{}: usage: {} <script> [args...]",
            label, label
        )),
        LoadOutcome::NotFound { name, tried } => {
            let mut out = format!("{}: error: no script called '{}'", label, name);
            for candidate in tried {
                out.push_str(&format!("\n\tno file '{}'", candidate.path.display()));
            }
            Some(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::RecordingHost;
    use crate::search_path::SearchPaths;
    use crate::searcher::{SearchResult, Searcher};
    use anyhow::bail;
    use std::fs;
    use std::path::Path;

    struct Tripwire;

    impl Searcher for Tripwire {
        fn name(&self) -> &str {
            "tripwire"
        }
        fn search(&self, _name: &str, _paths: &SearchPaths) -> SearchResult {
            panic!("resolution must not run");
        }
    }

    struct AlwaysMisses {
        tag: &'static str,
        paths: Vec<PathBuf>,
    }

    impl Searcher for AlwaysMisses {
        fn name(&self) -> &str {
            self.tag
        }
        fn search(&self, _name: &str, _paths: &SearchPaths) -> SearchResult {
            SearchResult::NotFound(self.paths.clone())
        }
    }

    struct FailingHost;

    impl ScriptHost for FailingHost {
        fn load(&mut self, _path: &Path, _args: &[String]) -> Result<i32> {
            bail!("parse error at line 3");
        }
    }

    #[test]
    fn test_empty_name_short_circuits() {
        let mut resolver = Resolver::with_paths(SearchPaths::new());
        resolver.clear_searchers();
        resolver.add_searcher(Box::new(Tripwire));
        let mut host = RecordingHost::new();

        let outcome = dispatch(&resolver, &mut host, "", &[]).unwrap();
        assert_eq!(outcome, LoadOutcome::MissingName);
        assert_eq!(outcome.exit_status(), 2);
        assert!(host.loads.is_empty());
    }

    #[test]
    fn test_loaded_outcome_carries_path_and_status() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("job.ri"), "exit 0\n").unwrap();

        let mut paths = SearchPaths::new();
        paths
            .add_str(&format!("{}/?.ri", dir.path().display()))
            .unwrap();
        let resolver = Resolver::with_paths(paths);

        let mut host = RecordingHost::new();
        host.status = 5;
        let args = vec!["--fast".to_string(), "all".to_string()];

        let outcome = dispatch(&resolver, &mut host, "job", &args).unwrap();
        let expected = dir.path().join("job.ri");
        assert_eq!(
            outcome,
            LoadOutcome::Loaded {
                path: expected.clone(),
                status: 5,
            }
        );
        assert_eq!(outcome.exit_status(), 5);
        assert_eq!(host.loads, vec![(expected, args)]);
    }

    #[test]
    fn test_host_errors_pass_through() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bad.ri"), "syntax(\n").unwrap();

        let mut paths = SearchPaths::new();
        paths
            .add_str(&format!("{}/?.ri", dir.path().display()))
            .unwrap();
        let resolver = Resolver::with_paths(paths);

        let err = dispatch(&resolver, &mut FailingHost, "bad", &[]).unwrap_err();
        assert_eq!(err.to_string(), "parse error at line 3");
    }

    #[test]
    fn test_not_found_render_matches_contract() {
        let mut resolver = Resolver::with_paths(SearchPaths::new());
        resolver.clear_searchers();
        resolver.add_searcher(Box::new(AlwaysMisses {
            tag: "first",
            paths: vec![PathBuf::from("/x/ghost"), PathBuf::from("/x/ghost.ri")],
        }));
        resolver.add_searcher(Box::new(AlwaysMisses {
            tag: "second",
            paths: vec![
                PathBuf::from("/y/ghost"),
                PathBuf::from("/y/ghost.ri"),
                PathBuf::from("/z/ghost"),
            ],
        }));
        let mut host = RecordingHost::new();

        let outcome = dispatch(&resolver, &mut host, "ghost", &[]).unwrap();
        assert_eq!(outcome.exit_status(), 1);
        assert!(host.loads.is_empty());

        let report = render_failure(SOURCE_LABEL, &outcome).unwrap();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(
            lines,
            vec![
                "source: error: no script called 'ghost'",
                "\tno file '/x/ghost'",
                "\tno file '/x/ghost.ri'",
                "\tno file '/y/ghost'",
                "\tno file '/y/ghost.ri'",
                "\tno file '/z/ghost'",
            ]
        );
    }

    #[test]
    fn test_missing_name_usage_line() {
        let report = render_failure(LOAD_LABEL, &LoadOutcome::MissingName).unwrap();
        assert_eq!(report, "load: usage: load <script> [args...]");
    }

    #[test]
    fn test_loaded_renders_nothing() {
        let outcome = LoadOutcome::Loaded {
            path: PathBuf::from("./job.ri"),
            status: 0,
        };
        assert!(render_failure(SOURCE_LABEL, &outcome).is_none());
    }
}
