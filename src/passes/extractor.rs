use crate::error::StubError;
use crate::model::DeclarationCandidate;
use log::debug;
use regex::Regex;

/// Finds the methods a spec file describes.
///
/// A declaration is a call to one of the configured describe functions whose
/// first argument is a quoted string on the same line, e.g.
/// `describe('Calculator add -->', () => {`. Prefixed variants such as
/// `fdescribe(` or `suite.describe(` count as well.
pub struct MethodExtractorPass {
    pattern: Regex,
}

impl Default for MethodExtractorPass {
    fn default() -> Self {
        Self {
            pattern: Self::build_pattern(&[crate::config::DEFAULT_DESCRIBE_NAME])
                .expect("default describe pattern is valid"),
        }
    }
}

impl MethodExtractorPass {
    pub fn new<S: AsRef<str>>(describe_names: &[S]) -> Result<Self, StubError> {
        let names: Vec<&str> = describe_names
            .iter()
            .map(|n| n.as_ref().trim())
            .filter(|n| !n.is_empty())
            .collect();
        if names.is_empty() {
            return Err(StubError::InvalidConfig(
                "at least one describe name is required".to_string(),
            ));
        }

        let pattern = Self::build_pattern(&names)
            .map_err(|e| StubError::InvalidConfig(format!("bad describe name: {e}")))?;
        Ok(Self { pattern })
    }

    fn build_pattern(names: &[&str]) -> Result<Regex, regex::Error> {
        let alternatives = names
            .iter()
            .map(|n| regex::escape(n))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!(
            r#"(?:{alternatives})\s*\(\s*(?:'([^'\n]*)'|"([^"\n]*)"|`([^`\n]*)`)"#
        ))
    }

    /// Every declaration in document order, group headers included.
    pub fn candidates(&self, text: &str) -> Vec<DeclarationCandidate> {
        let mut candidates = Vec::new();

        for line in text.lines() {
            let indent = &line[..line.len() - line.trim_start().len()];
            for caps in self.pattern.captures_iter(line) {
                let description = caps
                    .get(1)
                    .or_else(|| caps.get(2))
                    .or_else(|| caps.get(3))
                    .map_or("", |m| m.as_str());
                let candidate = DeclarationCandidate::new(indent, description);
                if !candidate.is_method() {
                    debug!("Group header: {:?}", candidate.description);
                }
                candidates.push(candidate);
            }
        }

        candidates
    }

    /// Method names declared at the depth of the first method declaration.
    /// Duplicates are kept.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let methods: Vec<DeclarationCandidate> = self
            .candidates(text)
            .into_iter()
            .filter(DeclarationCandidate::is_method)
            .collect();

        let Some(first) = methods.first() else {
            return Vec::new();
        };
        let method_depth = first.depth();

        let names: Vec<String> = methods
            .into_iter()
            .filter(|c| c.depth() == method_depth)
            .map(|c| c.method_name)
            .collect();

        debug!("Extracted {} method(s) at depth {}", names.len(), method_depth);
        names
    }
}
