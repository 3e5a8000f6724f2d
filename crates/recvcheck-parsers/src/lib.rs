//! Go front end for recvcheck: tree-sitter parsing, generated-file
//! detection, source discovery, and package grouping.

pub mod generated;
pub mod go;
pub mod package;
pub mod treesitter;
pub mod walker;
