pub mod build;
pub mod convert;
pub mod init;
pub mod parse;

pub use build::{build, BuildArgs};
pub use convert::{convert, ConvertArgs};
pub use init::{init, InitArgs};
pub use parse::{parse, ParseArgs};
