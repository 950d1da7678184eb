use crate::error::StubError;
use crate::model::Template;
use crate::passes::InsertionOrder;
use log::{debug, warn};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_SPEC_SUFFIX: &str = ".spec";
pub const DEFAULT_DESCRIBE_NAME: &str = "describe";

/// Options as they appear in a JSON config file or on the command line.
/// Every field is optional until [`ConfigFile::into_config`] checks them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigFile {
    pub marker: Option<String>,
    pub template_url: Option<PathBuf>,
    pub spec_suffix: Option<String>,
    pub describe_names: Option<Vec<String>>,
    pub insertion_order: Option<InsertionOrder>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self, StubError> {
        let raw = fs::read_to_string(path).map_err(|source| StubError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw).map_err(|source| StubError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Values set in `overrides` win.
    pub fn merge(self, overrides: ConfigFile) -> ConfigFile {
        ConfigFile {
            marker: overrides.marker.or(self.marker),
            template_url: overrides.template_url.or(self.template_url),
            spec_suffix: overrides.spec_suffix.or(self.spec_suffix),
            describe_names: overrides.describe_names.or(self.describe_names),
            insertion_order: overrides.insertion_order.or(self.insertion_order),
        }
    }

    pub fn into_config(self) -> Result<StubConfig, StubError> {
        let marker = self
            .marker
            .filter(|m| !m.is_empty())
            .ok_or(StubError::MissingMarker)?;

        let spec_suffix = self
            .spec_suffix
            .unwrap_or_else(|| DEFAULT_SPEC_SUFFIX.to_string());
        if spec_suffix.is_empty() {
            return Err(StubError::InvalidConfig(
                "spec suffix must not be empty".to_string(),
            ));
        }

        let describe_names = self
            .describe_names
            .unwrap_or_else(|| vec![DEFAULT_DESCRIBE_NAME.to_string()]);
        if describe_names.iter().all(|n| n.trim().is_empty()) {
            return Err(StubError::InvalidConfig(
                "at least one describe name is required".to_string(),
            ));
        }

        Ok(StubConfig {
            marker,
            template_url: self.template_url,
            spec_suffix,
            describe_names,
            insertion_order: self.insertion_order.unwrap_or_default(),
        })
    }
}

/// Validated run configuration, read-only once processing starts.
#[derive(Debug, Clone, PartialEq)]
pub struct StubConfig {
    pub marker: String,
    pub template_url: Option<PathBuf>,
    pub spec_suffix: String,
    pub describe_names: Vec<String>,
    pub insertion_order: InsertionOrder,
}

impl StubConfig {
    pub fn new(marker: &str) -> Self {
        Self {
            marker: marker.to_string(),
            template_url: None,
            spec_suffix: DEFAULT_SPEC_SUFFIX.to_string(),
            describe_names: vec![DEFAULT_DESCRIBE_NAME.to_string()],
            insertion_order: InsertionOrder::default(),
        }
    }

    pub fn with_template_url(mut self, path: impl Into<PathBuf>) -> Self {
        self.template_url = Some(path.into());
        self
    }

    pub fn with_insertion_order(mut self, order: InsertionOrder) -> Self {
        self.insertion_order = order;
        self
    }

    /// Loads the template once for the whole run.
    ///
    /// An unreadable template file falls back to the built-in default; an
    /// empty one is a configuration error.
    pub fn resolve_template(&self) -> Result<Template, StubError> {
        let Some(path) = &self.template_url else {
            return Ok(Template::default());
        };

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!(
                    "Failed to read template {}: {}; using default template",
                    path.display(),
                    e
                );
                return Ok(Template::default());
            }
        };

        let contents = contents.trim();
        if contents.is_empty() {
            return Err(StubError::EmptyTemplate { path: path.clone() });
        }

        debug!("Loaded template from {}", path.display());
        Ok(Template::new(contents))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_marker_is_rejected() {
        let err = ConfigFile::default().into_config().unwrap_err();
        assert!(matches!(err, StubError::MissingMarker));

        let err = ConfigFile {
            marker: Some(String::new()),
            ..Default::default()
        }
        .into_config()
        .unwrap_err();
        assert!(matches!(err, StubError::MissingMarker));
    }

    #[test]
    fn test_defaults_applied() {
        let config = ConfigFile {
            marker: Some("// INSERT".to_string()),
            ..Default::default()
        }
        .into_config()
        .unwrap();

        assert_eq!(config, StubConfig::new("// INSERT"));
        assert_eq!(config.spec_suffix, ".spec");
        assert_eq!(config.describe_names, vec!["describe"]);
        assert_eq!(config.insertion_order, InsertionOrder::Declared);
    }

    #[test]
    fn test_parse_camel_case_keys() {
        let file = ConfigFile::parse(
            r#"{
                "marker": "// STUBS",
                "templateUrl": "stub.tpl",
                "specSuffix": ".test",
                "describeNames": ["describe", "context"],
                "insertionOrder": "reversed"
            }"#,
        )
        .unwrap();

        let config = file.into_config().unwrap();
        assert_eq!(config.marker, "// STUBS");
        assert_eq!(config.template_url, Some(PathBuf::from("stub.tpl")));
        assert_eq!(config.spec_suffix, ".test");
        assert_eq!(config.describe_names, vec!["describe", "context"]);
        assert_eq!(config.insertion_order, InsertionOrder::Reversed);
    }

    #[test]
    fn test_merge_prefers_overrides() {
        let base = ConfigFile {
            marker: Some("// A".to_string()),
            spec_suffix: Some(".test".to_string()),
            ..Default::default()
        };
        let overrides = ConfigFile {
            marker: Some("// B".to_string()),
            ..Default::default()
        };

        let merged = base.merge(overrides);
        assert_eq!(merged.marker.as_deref(), Some("// B"));
        assert_eq!(merged.spec_suffix.as_deref(), Some(".test"));
    }

    #[test]
    fn test_empty_describe_names_rejected() {
        let err = ConfigFile {
            marker: Some("// INSERT".to_string()),
            describe_names: Some(vec![]),
            ..Default::default()
        }
        .into_config()
        .unwrap_err();
        assert!(matches!(err, StubError::InvalidConfig(_)));
    }

    #[test]
    fn test_template_defaults_without_url() {
        let template = StubConfig::new("// INSERT").resolve_template().unwrap();
        assert!(template.is_default());
    }

    #[test]
    fn test_template_is_trimmed() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "\n  {{unit}}.prototype.{{name}} = function() {{}};\n").unwrap();

        let template = StubConfig::new("// INSERT")
            .with_template_url(file.path())
            .resolve_template()
            .unwrap();
        assert_eq!(template.source(), "{unit}.prototype.{name} = function() {};");
    }

    #[test]
    fn test_empty_template_is_fatal() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "   \n\t").unwrap();

        let err = StubConfig::new("// INSERT")
            .with_template_url(file.path())
            .resolve_template()
            .unwrap_err();
        assert!(matches!(err, StubError::EmptyTemplate { .. }));
    }

    #[test]
    fn test_unreadable_template_falls_back() {
        let template = StubConfig::new("// INSERT")
            .with_template_url("/nonexistent/stub.tpl")
            .resolve_template()
            .unwrap();
        assert!(template.is_default());
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = ConfigFile::load(file.path()).unwrap_err();
        assert!(matches!(err, StubError::ConfigParse { .. }));
    }
}
