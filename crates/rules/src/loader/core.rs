//! Core [`RuleLoader`] struct: filesystem-backed rule set loading.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::schema::Rule;

use super::error::{LoadError, Result};
use super::format::{read_records, Format};

/// Filesystem-backed rule loader.
///
/// `rules_path` is either a single rule file or a directory. Directories are
/// scanned recursively for `*.json` / `*.yml` / `*.yaml`; dotfiles, dotdirs
/// and other extensions are skipped. Any file that fails to parse aborts the
/// whole load; a partial rule set is never returned.
pub struct RuleLoader {
    rules_path: PathBuf,
}

impl RuleLoader {
    /// Create a loader for the given file or directory.
    pub fn new(rules_path: PathBuf) -> Self {
        Self { rules_path }
    }

    /// Get the configured rules path.
    pub fn rules_path(&self) -> &Path {
        &self.rules_path
    }

    /// Load the full rule set, active and inactive alike.
    pub fn load_all(&self) -> Result<Vec<Rule>> {
        let files = if self.rules_path.is_dir() {
            let mut files = Vec::new();
            collect_rule_files(&self.rules_path, &mut files)?;
            files.sort();
            files
        } else {
            vec![self.rules_path.clone()]
        };

        let mut rules = Vec::new();
        let mut seen = HashSet::new();
        for path in &files {
            for rule in self.load_file(path)? {
                if !seen.insert(rule.id.clone()) {
                    return Err(LoadError::DuplicateRule {
                        id: rule.id,
                        path: path.clone(),
                    });
                }
                rules.push(rule);
            }
        }

        info!(
            path = %self.rules_path.display(),
            files = files.len(),
            rules = rules.len(),
            "loaded rules"
        );
        Ok(rules)
    }

    /// Load one file holding a single rule or a list of rules.
    pub fn load_file(&self, path: &Path) -> Result<Vec<Rule>> {
        let rules: Vec<Rule> = read_records(path)?;
        for rule in &rules {
            debug!(rule_id = %rule.id, active = rule.is_active, path = %path.display(), "loaded rule");
        }
        Ok(rules)
    }
}

/// Recursively collect rule files below `dir`.
fn collect_rule_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(|source| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| LoadError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        // Symlinked directories are not descended into.
        let file_type = entry.file_type().map_err(|source| LoadError::Io {
            path: path.clone(),
            source,
        })?;

        // Skip dotfiles/dotdirs
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if name.starts_with('.') {
                debug!(path = %path.display(), "skipping dotfile");
                continue;
            }
        }

        if file_type.is_dir() {
            collect_rule_files(&path, files)?;
            continue;
        }

        if Format::from_path(&path).is_none() {
            debug!(path = %path.display(), "skipping non-rule file");
            continue;
        }

        files.push(path);
    }

    Ok(())
}
