//! Notes index: turns a directory of PDF notes into a nested JSON index.
//!
//! - `tree`: serialized index types (module, chapter, section, document)
//! - `filter`: include-list handling for top-level modules
//! - `builder`: directory walk
//! - `writer`: JSON output

pub mod builder;
pub mod filter;
pub mod tree;
pub mod writer;

pub use builder::{CHAPTERS_DIR, NotesIndexer, build_tree};
pub use filter::{ModuleFilter, parse_modules_file, resolve_include_list};
pub use tree::{Chapter, Document, Module, Section};
pub use writer::{to_json, write_index};
