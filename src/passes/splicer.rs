use crate::model::StubRenderer;
use crate::passes::{IndentProbePass, UnitNameProbePass};
use log::debug;
use serde::Deserialize;

/// Order of the inserted stubs relative to the declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsertionOrder {
    /// Stubs appear in the order the methods are declared.
    #[default]
    Declared,
    /// Each stub lands directly after the marker, ahead of the previous one,
    /// so the last declared method comes first.
    Reversed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Spliced {
    pub contents: String,
    /// Methods that received a stub, in declaration order.
    pub inserted: Vec<String>,
}

impl Spliced {
    fn unchanged(contents: &str) -> Self {
        Self {
            contents: contents.to_string(),
            inserted: Vec::new(),
        }
    }

    pub fn is_changed(&self) -> bool {
        !self.inserted.is_empty()
    }
}

pub struct SplicerPass;

impl SplicerPass {
    /// Offset right after the first occurrence of `marker`.
    pub fn insertion_point(contents: &str, marker: &str) -> Option<usize> {
        if marker.is_empty() {
            return None;
        }
        contents.find(marker).map(|index| index + marker.len())
    }

    /// Textual presence test, not a parse: comments count too.
    pub fn has_definition(contents: &str, method: &str) -> bool {
        contents.contains(&format!("function {method}"))
    }

    /// Inserts a stub after the marker for every method not yet defined.
    ///
    /// The existence check runs against `contents` as passed in, so a name
    /// listed twice gets two stubs. Text outside the insertion point is
    /// left untouched.
    pub fn splice<R: StubRenderer>(
        contents: &str,
        methods: &[String],
        marker: &str,
        renderer: &R,
        order: InsertionOrder,
    ) -> Spliced {
        let Some(position) = Self::insertion_point(contents, marker) else {
            debug!("Marker {:?} not found, nothing to splice", marker);
            return Spliced::unchanged(contents);
        };

        let indent = IndentProbePass::probe(contents, marker);
        let unit = UnitNameProbePass::probe(contents);

        let inserted: Vec<String> = methods
            .iter()
            .filter(|method| {
                let defined = Self::has_definition(contents, method);
                if defined {
                    debug!("Skipping {}: already defined", method);
                }
                !defined
            })
            .cloned()
            .collect();

        if inserted.is_empty() {
            return Spliced::unchanged(contents);
        }

        let stubs: Vec<String> = inserted
            .iter()
            .map(|method| renderer.render(method, indent, unit))
            .collect();
        let block = match order {
            InsertionOrder::Declared => stubs.concat(),
            InsertionOrder::Reversed => stubs.into_iter().rev().collect(),
        };

        let mut spliced = String::with_capacity(contents.len() + block.len());
        spliced.push_str(&contents[..position]);
        spliced.push_str(&block);
        spliced.push_str(&contents[position..]);

        Spliced {
            contents: spliced,
            inserted,
        }
    }
}
