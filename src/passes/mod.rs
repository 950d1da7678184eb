mod extractor;
mod indent;
mod unit;
mod compiler;
mod splicer;

pub use extractor::MethodExtractorPass;
pub use indent::IndentProbePass;
pub use unit::UnitNameProbePass;
pub use compiler::StubCompilerPass;
pub use splicer::{InsertionOrder, Spliced, SplicerPass};
