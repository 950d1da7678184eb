pub mod config;
pub mod error;
pub mod model;
pub mod passes;

use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

pub use config::{ConfigFile, StubConfig};
pub use error::StubError;
pub use model::{DeclarationCandidate, StubRenderer, Template};
pub use passes::{InsertionOrder, MethodExtractorPass, Spliced, SplicerPass};

/// A spec file handed to the stubber. `contents: None` passes through untouched.
#[derive(Debug, Clone)]
pub struct SpecFile {
    pub path: PathBuf,
    pub contents: Option<String>,
}

impl SpecFile {
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: Some(contents.into()),
        }
    }

    pub fn null(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            contents: None,
        }
    }

    pub fn read(path: &Path) -> Result<Self, StubError> {
        let contents = fs::read_to_string(path).map_err(|e| StubError::io(path, e))?;
        Ok(Self::new(path, contents))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FileOutcome {
    /// Stubs were added (or would be, on a dry run).
    Stubbed {
        companion: PathBuf,
        inserted: Vec<String>,
    },
    /// Every declared method already has a definition.
    UpToDate { companion: PathBuf },
    MarkerMissing { companion: PathBuf },
    /// No content, no companion path, or an empty companion file.
    Skipped,
}

/// Path of the implementation file next to `spec_path`: the first
/// occurrence of `suffix` is dropped from the file name, so
/// `src/calculator.spec.js` pairs with `src/calculator.js`.
pub fn companion_path(spec_path: &Path, suffix: &str) -> Option<PathBuf> {
    if suffix.is_empty() {
        return None;
    }
    let file_name = spec_path.file_name()?.to_str()?;
    if !file_name.contains(suffix) {
        return None;
    }
    let companion = file_name.replacen(suffix, "", 1);
    if companion.is_empty() {
        return None;
    }
    Some(spec_path.with_file_name(companion))
}

/// Runs the passes for one spec/companion pair at a time.
pub struct Stubber {
    config: StubConfig,
    template: Template,
    extractor: MethodExtractorPass,
}

impl Stubber {
    /// Resolves the template up front; fails on configuration errors.
    pub fn new(config: StubConfig) -> Result<Self, StubError> {
        let template = config.resolve_template()?;
        Self::with_template(config, template)
    }

    pub fn with_template(config: StubConfig, template: Template) -> Result<Self, StubError> {
        if config.marker.is_empty() {
            return Err(StubError::MissingMarker);
        }
        let extractor = MethodExtractorPass::new(&config.describe_names)?;
        Ok(Self {
            config,
            template,
            extractor,
        })
    }

    pub fn config(&self) -> &StubConfig {
        &self.config
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn methods(&self, spec_text: &str) -> Vec<String> {
        self.extractor.extract(spec_text)
    }

    pub fn stub_contents(&self, spec_text: &str, companion_text: &str) -> Spliced {
        let methods = self.methods(spec_text);
        SplicerPass::splice(
            companion_text,
            &methods,
            &self.config.marker,
            &self.template,
            self.config.insertion_order,
        )
    }

    /// Reads the spec at `path` and stubs its companion.
    pub fn stub_path(&self, path: &Path, write: bool) -> Result<FileOutcome, StubError> {
        let spec = SpecFile::read(path)?;
        self.stub_file(&spec, write)
    }

    /// Splices missing stubs into the companion of `spec`.
    ///
    /// The companion is rewritten only when something was inserted and
    /// `write` is set; the write finishes before this returns.
    pub fn stub_file(&self, spec: &SpecFile, write: bool) -> Result<FileOutcome, StubError> {
        let Some(spec_text) = &spec.contents else {
            return Ok(FileOutcome::Skipped);
        };

        let Some(companion) = companion_path(&spec.path, &self.config.spec_suffix) else {
            debug!("No companion path for {}", spec.path.display());
            return Ok(FileOutcome::Skipped);
        };

        let companion_text =
            fs::read_to_string(&companion).map_err(|e| StubError::io(&companion, e))?;
        if companion_text.is_empty() {
            debug!("Companion {} is empty", companion.display());
            return Ok(FileOutcome::Skipped);
        }

        if SplicerPass::insertion_point(&companion_text, &self.config.marker).is_none() {
            debug!("Marker not found in {}", companion.display());
            return Ok(FileOutcome::MarkerMissing { companion });
        }

        let spliced = self.stub_contents(spec_text, &companion_text);
        if !spliced.is_changed() {
            return Ok(FileOutcome::UpToDate { companion });
        }

        if write {
            fs::write(&companion, &spliced.contents).map_err(|e| StubError::io(&companion, e))?;
            info!(
                "Inserted {} stub(s) into {}",
                spliced.inserted.len(),
                companion.display()
            );
        }

        Ok(FileOutcome::Stubbed {
            companion,
            inserted: spliced.inserted,
        })
    }
}
