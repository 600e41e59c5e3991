/**
 * Search path templates
 * Ordered path patterns with a single name slot, expanded into candidate files
 */
use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Character marking the name slot in a template string
pub const NAME_SLOT: char = '?';

/// Extension used by the default search paths
pub const SCRIPT_EXTENSION: &str = "ri";

/// Errors from parsing a template string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("search path template '{0}' has no '?' slot for the script name")]
    NoSlot(String),
    #[error("search path template '{0}' has more than one '?' slot")]
    MultipleSlots(String),
}

/// A path pattern with exactly one slot for the script name.
///
/// Stored as the prefix and suffix around the slot, so the name is always
/// inserted literally. A name containing `%s` or `?` is substituted as-is,
/// never re-interpreted as pattern syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    prefix: String,
    suffix: String,
}

impl PathTemplate {
    /// Build a template from the parts around the slot
    pub fn new<P: Into<String>, S: Into<String>>(prefix: P, suffix: S) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Parse a template string containing exactly one `?` slot
    ///
    /// # Example
    /// ```
    /// # use rind_loader::search_path::PathTemplate;
    /// let template = PathTemplate::parse("./?.ri").unwrap();
    /// assert_eq!(template.expand("build").to_str(), Some("./build.ri"));
    /// ```
    ///
    /// # Errors
    /// Returns `TemplateError` when the string has no slot or more than one
    pub fn parse(text: &str) -> Result<Self, TemplateError> {
        match text.split_once(NAME_SLOT) {
            None => Err(TemplateError::NoSlot(text.to_string())),
            Some((_, suffix)) if suffix.contains(NAME_SLOT) => {
                Err(TemplateError::MultipleSlots(text.to_string()))
            }
            Some((prefix, suffix)) => Ok(Self {
                prefix: prefix.to_string(),
                suffix: suffix.to_string(),
            }),
        }
    }

    /// Substitute `name` into the slot
    pub fn expand(&self, name: &str) -> PathBuf {
        PathBuf::from(format!("{}{}{}", self.prefix, name, self.suffix))
    }

    /// Text before the slot
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Text after the slot
    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.prefix, NAME_SLOT, self.suffix)
    }
}

/// Ordered list of search path templates.
///
/// Insertion order is the precedence order. Entries are never deduplicated
/// or reordered; a template added twice is tried twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPaths {
    templates: Vec<PathTemplate>,
}

impl SearchPaths {
    /// Empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in search order: the user script directory with and
    /// without the standard extension, then the current directory with and
    /// without. The user directory entries are skipped when no home
    /// directory can be determined.
    pub fn defaults() -> Self {
        let mut paths = Self::new();
        if let Some(home) = dirs::home_dir() {
            let scripts = home.join(".rind").join("scripts");
            let dir = scripts.to_string_lossy();
            paths.add(PathTemplate::new(
                format!("{}/", dir),
                format!(".{}", SCRIPT_EXTENSION),
            ));
            paths.add(PathTemplate::new(format!("{}/", dir), String::new()));
        }
        paths.add(PathTemplate::new("./", format!(".{}", SCRIPT_EXTENSION)));
        paths.add(PathTemplate::new("./", ""));
        paths
    }

    /// Parse a `;`-separated list of template strings. Empty segments are
    /// skipped, so a trailing separator is harmless.
    pub fn parse_list(spec: &str) -> Result<Self, TemplateError> {
        let mut paths = Self::new();
        for part in spec.split(';') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            paths.add_str(part)?;
        }
        Ok(paths)
    }

    /// Append a template to the end of the list
    pub fn add(&mut self, template: PathTemplate) {
        self.templates.push(template);
    }

    /// Parse and append a template string
    pub fn add_str(&mut self, text: &str) -> Result<(), TemplateError> {
        self.add(PathTemplate::parse(text)?);
        Ok(())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathTemplate> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
