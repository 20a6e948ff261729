//! Line-oriented scanner and parser for C# data-holder classes.
//!
//! Only `public class` headers, lone closing braces and auto-properties of the
//! form `public TYPE Name { get; set; }` are recognized. Everything else is
//! skipped, so comments, attributes and methods never stop a conversion.

pub mod ast;
pub mod parser;
pub mod scanner;
pub mod tokenizer;

pub use ast::{Declaration, Document, Field};
pub use parser::{classify, parse, LineKind, Parser};
pub use scanner::normalize;
pub use tokenizer::{tokenize, Token};
