use crate::model::{StubRenderer, Template};

pub struct StubCompilerPass;

impl StubCompilerPass {
    /// Renders one stub block, ready to be inserted right after the marker.
    ///
    /// `{name}` is replaced everywhere, `{unit}` only once. Every non-empty
    /// line gets `indent` prepended and the block starts with a blank line.
    pub fn compile(template: &Template, method: &str, indent: &str, unit: &str) -> String {
        let rendered = template
            .source()
            .replace("{name}", method)
            .replacen("{unit}", unit, 1);

        let indented = rendered
            .split('\n')
            .map(|line| {
                if line.is_empty() || line.starts_with('\r') {
                    line.to_string()
                } else {
                    format!("{indent}{line}")
                }
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!("\n\n{indented}")
    }
}

impl StubRenderer for Template {
    fn render(&self, method: &str, indent: &str, unit: &str) -> String {
        StubCompilerPass::compile(self, method, indent, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template() {
        let stub = StubCompilerPass::compile(&Template::default(), "add", "  ", "");
        assert_eq!(stub, "\n\n  function add() {}");
    }

    #[test]
    fn test_name_replaced_everywhere_unit_once() {
        let template = Template::new("{unit}.{name} = function {name}() { return {unit}; };");
        let stub = StubCompilerPass::compile(&template, "add", "", "Calculator");
        assert_eq!(
            stub,
            "\n\nCalculator.add = function add() { return {unit}; };"
        );
    }

    #[test]
    fn test_missing_unit_becomes_empty() {
        let template = Template::new("/** @memberof {unit} */\nfunction {name}() {}");
        let stub = StubCompilerPass::compile(&template, "add", "", "");
        assert_eq!(stub, "\n\n/** @memberof  */\nfunction add() {}");
    }

    #[test]
    fn test_every_line_indented_except_blank() {
        let template = Template::new("function {name}() {\n\n  throw new Error('todo');\n}");
        let stub = StubCompilerPass::compile(&template, "add", "\t", "");
        assert_eq!(
            stub,
            "\n\n\tfunction add() {\n\n\t  throw new Error('todo');\n\t}"
        );
    }

    #[test]
    fn test_renderer_trait_uses_template() {
        let template = Template::default();
        assert_eq!(
            template.render("sum", "    ", "Calculator"),
            "\n\n    function sum() {}"
        );
    }
}
