//! # C# class → TypeScript interface compiler
//!
//! ```rust
//! let output = tsconvert_compiler::convert(
//!     r#"
//!     public class Person
//!     {
//!         public string Name { get; set; }
//!         public int? Age { get; set; }
//!     }
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     output,
//!     "export interface Person {\n    name: string;\n    age?: number;\n}"
//! );
//! ```

mod compiler;
mod context;
mod error;
mod naming;

pub use compiler::compile_document;
pub use context::{CompileOptions, CompilerContext};
pub use error::{ConvertError, ConvertResult};
pub use naming::to_ts_field_name;

use tracing::instrument;
use tsconvert_parser::{parse, Document};

/// Text-in, text-out converter with fixed options
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: CompileOptions,
}

impl Converter {
    pub fn new(options: CompileOptions) -> Self {
        Self { options }
    }

    /// Convert C# source text into TypeScript interfaces.
    ///
    /// Empty or whitespace-only input is rejected before parsing. Input
    /// without any class declaration yields an empty string.
    #[instrument(skip(self, source), fields(bytes = source.len()))]
    pub fn convert(&self, source: &str) -> ConvertResult<String> {
        let document = self.parse(source)?;
        self.compile(&document)
    }

    /// Parse without compiling, with the same input validation as `convert`
    pub fn parse(&self, source: &str) -> ConvertResult<Document> {
        if source.trim().is_empty() {
            return Err(ConvertError::invalid_argument(
                "C# code cannot be null or empty",
            ));
        }
        Ok(parse(source))
    }

    /// Compile an already discovered set of declarations
    pub fn compile(&self, document: &Document) -> ConvertResult<String> {
        compile_document(document, self.options.clone())
    }
}

/// Convert C# source text with default options
pub fn convert(source: &str) -> ConvertResult<String> {
    Converter::default().convert(source)
}
