/// A `describe('...')` style block found in a spec file.
#[derive(Debug, Clone, PartialEq)]
pub struct DeclarationCandidate {
    /// Leading whitespace of the line the block was declared on.
    pub indent: String,
    /// Full description text between the quotes.
    pub description: String,
    /// Empty when the block describes a group rather than a method.
    pub method_name: String,
}

impl DeclarationCandidate {
    pub fn new(indent: &str, description: &str) -> Self {
        Self {
            indent: indent.to_string(),
            description: description.to_string(),
            method_name: method_name_of(description),
        }
    }

    pub fn is_method(&self) -> bool {
        !self.method_name.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.indent.len()
    }
}

/// The first word names the unit (`Calculator add -->`), the second the method.
/// Anything not starting with a lowercase letter marks a group header.
fn method_name_of(description: &str) -> String {
    let Some(word) = description.split_whitespace().nth(1) else {
        return String::new();
    };

    if !word.chars().next().is_some_and(|c| c.is_lowercase()) {
        return String::new();
    }

    word.chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_' || *c == '$')
        .collect()
}
