mod declaration;
mod template;

pub use declaration::DeclarationCandidate;
pub use template::{StubRenderer, Template, DEFAULT_TEMPLATE};
