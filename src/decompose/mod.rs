pub mod assemble;
pub mod decomposer;
pub mod fallback;
pub mod lexicon;
pub mod normalize;
pub mod protect;
pub mod scanner;

// Public exports
pub use decomposer::{decompose, DecomposeOptions, Decomposer, TermList};
pub use fallback::{fallback_queries, search_with_fallback, FallbackHit};
pub use lexicon::{CompoundOrder, Lexicon, LexiconBuilder, LexiconError};
pub use protect::Segment;
pub use scanner::ScanToken;
