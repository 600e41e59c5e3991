// "Did you mean" support for failed resolutions

use strsim::jaro_winkler;

use crate::search_path::SearchPaths;

/// Minimum Jaro-Winkler similarity before a name is offered
const SIMILARITY_THRESHOLD: f64 = 0.8;

/// Script names reachable through `paths`.
///
/// For each template, scans the directory its prefix points into and keeps
/// the entries the template would have produced: the fixed part of the file
/// name stripped from the front, the suffix stripped from the back.
/// Unreadable directories contribute nothing.
pub fn known_names(paths: &SearchPaths) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();

    for template in paths.iter() {
        let prefix = template.prefix();
        let (dir, stem) = match prefix.rfind('/') {
            Some(idx) => prefix.split_at(idx + 1),
            None => ("./", prefix),
        };

        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(_) => continue,
        };

        for entry in entries.flatten() {
            let file_name = entry.file_name();
            let file_name = file_name.to_string_lossy();
            if let Some(rest) = file_name.strip_prefix(stem) {
                if let Some(name) = rest.strip_suffix(template.suffix()) {
                    if !name.is_empty() && !names.iter().any(|n| n == name) {
                        names.push(name.to_string());
                    }
                }
            }
        }
    }

    names
}

/// Find similar names using fuzzy matching (Jaro-Winkler distance).
/// Returns up to `max_suggestions` names with similarity above `threshold`,
/// best first.
pub fn find_similar_names(
    target: &str,
    candidates: &[String],
    threshold: f64,
    max_suggestions: usize,
) -> Vec<String> {
    let mut scored: Vec<(String, f64)> = candidates
        .iter()
        .map(|candidate| {
            let similarity = jaro_winkler(target, candidate);
            (candidate.clone(), similarity)
        })
        .filter(|(_, score)| *score > threshold)
        .collect();

    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    scored
        .into_iter()
        .take(max_suggestions)
        .map(|(name, _)| name)
        .collect()
}

/// Best match for `target` among the names reachable through `paths`
pub fn suggest_similar(target: &str, paths: &SearchPaths) -> Option<String> {
    find_similar_names(target, &known_names(paths), SIMILARITY_THRESHOLD, 1)
        .into_iter()
        .next()
}
