pub const DEFAULT_TEMPLATE: &str = "function {name}() {}";

/// Produces the stub text for one missing method.
pub trait StubRenderer {
    fn render(&self, method: &str, indent: &str, unit: &str) -> String;
}

/// Stub template with `{name}` and `{unit}` placeholders.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    source: String,
}

impl Default for Template {
    fn default() -> Self {
        Self {
            source: DEFAULT_TEMPLATE.to_string(),
        }
    }
}

impl Template {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_default(&self) -> bool {
        self.source == DEFAULT_TEMPLATE
    }
}
