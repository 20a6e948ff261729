//! # Type mapping for generated TypeScript declarations
//!
//! Turns C# property type expressions into TypeScript types:
//!
//! - **Scalars** resolve through an injected [`ScalarTable`] (`int` → `number`)
//! - **Collections** such as `List<T>` become `T[]`
//! - **Nullable** types (`T?`) become optional, and the marker is moved onto
//!   the property name when rendered
//! - **Everything else** is taken to be a reference to another declaration
//!
//! ## Example
//!
//! ```rust
//! use tsconvert_typemap::{CodeGenerator, TypeMapper, TypeScriptGenerator};
//!
//! let mapper = TypeMapper::default();
//! let prop = mapper.map("List<Address>?").unwrap().into_property();
//!
//! let ts_gen = TypeScriptGenerator::new();
//! assert_eq!(ts_gen.generate_property("addresses", &prop), "addresses?: Address[]");
//! ```

pub mod codegen;
pub mod error;
pub mod mapper;
pub mod options;
pub mod table;
pub mod types;

pub use codegen::{typescript::TypeScriptGenerator, CodeGenerator};
pub use error::{TypeMapError, TypeMapResult};
pub use mapper::{TypeMapper, MAX_NESTING_DEPTH, OPTIONAL_MARKER};
pub use options::TypeMapOptions;
pub use table::ScalarTable;
pub use types::{PropertyType, TsType};
