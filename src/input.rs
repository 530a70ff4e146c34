//! The input capability contract consumed by command dispatchers.

use crate::definition::Definition;
use crate::value::OptionValue;
use indexmap::IndexMap;
use std::collections::HashMap;
use thiserror::Error;

/// Errors surfaced through the input contract.
///
/// The pass-through facade only ever produces [`InputError::UnknownOption`];
/// the remaining variants are for strict implementations whose `bind` and
/// `validate` actually check input against a definition.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("missing required argument: {0}")]
    MissingArgument(String),

    #[error("input does not match definition: {0}")]
    InvalidDefinition(String),
}

/// Read/write access to one command invocation's arguments and options.
///
/// The trait is object safe so a dispatcher can hold `Box<dyn Input>` and
/// accept either a validating implementation or the pass-through facade
/// without telling them apart.
///
/// Missing-key behavior is asymmetric and part of the contract:
/// [`argument`](Input::argument) returns an empty string for an unknown
/// name, while [`option`](Input::option) fails. Callers that need to
/// distinguish an absent argument from an empty value must use
/// [`has_argument`](Input::has_argument); callers that cannot guarantee an
/// option exists should use [`has_option`](Input::has_option) first or the
/// default-bearing [`parameter_option`](Input::parameter_option) lookup.
pub trait Input {
    /// The value of the first argument in insertion order, regardless of
    /// its name. `None` when no arguments were supplied.
    fn first_argument(&self) -> Option<&str>;

    /// True if any of the candidate names is present in the option set.
    fn has_parameter_option(&self, names: &[&str]) -> bool;

    /// The value of the first candidate name present in the option set,
    /// or `default` when none match.
    fn parameter_option(&self, names: &[&str], default: OptionValue) -> OptionValue;

    /// Bind the input against a definition.
    fn bind(&mut self, definition: &Definition) -> Result<(), InputError>;

    /// Check the bound input against its definition's constraints.
    fn validate(&self) -> Result<(), InputError>;

    /// All arguments, insertion order preserved.
    fn arguments(&self) -> &IndexMap<String, String>;

    /// The value of the named argument, or an empty string if absent.
    fn argument(&self, name: &str) -> &str;

    /// Insert or overwrite an argument.
    fn set_argument(&mut self, name: &str, value: &str);

    fn has_argument(&self, name: &str) -> bool;

    /// All options.
    fn options(&self) -> &HashMap<String, OptionValue>;

    /// The value of the named option. Unlike [`argument`](Input::argument),
    /// an unknown name is an error.
    fn option(&self, name: &str) -> Result<&OptionValue, InputError>;

    /// Insert or overwrite an option.
    fn set_option(&mut self, name: &str, value: OptionValue);

    fn has_option(&self, name: &str) -> bool;

    fn is_interactive(&self) -> bool;

    fn set_interactive(&mut self, interactive: bool);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facade::PassthroughInput;

    // A dispatcher sees the contract, not the concrete type.
    fn describe(input: &mut dyn Input) -> String {
        input.set_argument("seen", "yes");
        format!(
            "first={} interactive={}",
            input.first_argument().unwrap_or("-"),
            input.is_interactive()
        )
    }

    #[test]
    fn test_contract_is_object_safe() {
        let mut input = PassthroughInput::default().with_command("status");
        let summary = describe(&mut input);
        assert_eq!(summary, "first=status interactive=true");
        assert_eq!(input.argument("seen"), "yes");
    }

    #[test]
    fn test_boxed_facade_usable_as_contract() {
        let mut input: Box<dyn Input> = Box::new(PassthroughInput::default());
        input.set_option("format", OptionValue::from("json"));
        assert!(input.has_option("format"));
        assert!(input.first_argument().is_none());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            InputError::UnknownOption("format".to_string()).to_string(),
            "unknown option: format"
        );
        assert_eq!(
            InputError::MissingArgument("path".to_string()).to_string(),
            "missing required argument: path"
        );
    }
}
