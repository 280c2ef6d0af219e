//! Offset resolution for the legacy blob.
//!
//! Resolution runs in a fixed order:
//!
//! ```text
//!  symbol anchor ──► static block (01..09, back to back, no search)
//!
//!  every other key ──► global prefix search (trial lengths 10, 6, 4)
//!                          │
//!                          ▼
//!  surname anchor ──► sequential fallback (jump to hits, coast between them)
//!
//!  glyph regions ──► emitted verbatim from configuration
//! ```

mod anchor;
mod fallback;
mod glyph;
mod resolver;
mod search;
mod static_block;
mod types;

pub use anchor::*;
pub use fallback::*;
pub use glyph::*;
pub use resolver::*;
pub use search::*;
pub use static_block::*;
pub use types::*;
