use regex::Regex;
use std::sync::LazyLock;

// JSDoc style tag, e.g. `/** @type {{Calculator}} */`
static RE_UNIT_TYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@type \{\{(.*)\}\}").unwrap());

pub struct UnitNameProbePass;

impl UnitNameProbePass {
    /// Name of the unit under test from the first `@type {{Name}}` tag, or `""`.
    pub fn probe(contents: &str) -> &str {
        RE_UNIT_TYPE
            .captures(contents)
            .and_then(|caps| caps.get(1))
            .map_or("", |m| m.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_from_jsdoc() {
        let contents = "/** @type {{Calculator}} */\nvar Calculator = {};\n";
        assert_eq!(UnitNameProbePass::probe(contents), "Calculator");
    }

    #[test]
    fn test_first_tag_wins() {
        let contents = "// @type {{First}}\n// @type {{Second}}\n";
        assert_eq!(UnitNameProbePass::probe(contents), "First");
    }

    #[test]
    fn test_missing_tag() {
        assert_eq!(UnitNameProbePass::probe("var Calculator = {};"), "");
        assert_eq!(UnitNameProbePass::probe("/** @type {Calculator} */"), "");
    }
}
