//! argpass - Pass-through input for command frameworks.
//!
//! This library carries command-line arguments and options that were
//! already parsed elsewhere across a framework's input-handling boundary,
//! without re-parsing raw tokens or re-validating values against a schema.
//! The [`Input`] trait is the contract a dispatcher consumes;
//! [`PassthroughInput`] is the permissive implementation whose binding and
//! validation hooks accept everything.

pub mod definition;
pub mod facade;
pub mod input;
pub mod value;

pub use definition::{ArgumentSpec, Definition, DefinitionError, OptionSpec};
pub use facade::{PassthroughInput, COMMAND_ARGUMENT};
pub use input::{Input, InputError};
pub use value::OptionValue;
