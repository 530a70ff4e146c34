//! Pass-through implementation of the input contract.

use crate::definition::Definition;
use crate::input::{Input, InputError};
use crate::value::OptionValue;
use indexmap::IndexMap;
use log::{debug, trace};
use std::collections::HashMap;

/// Reserved argument name under which the command name is stored.
pub const COMMAND_ARGUMENT: &str = "command";

/// An [`Input`] backed by mappings a legacy parser already produced.
///
/// This type stands in wherever the input contract is expected, without
/// converting the stored values back into raw `--option=value` tokens just
/// to have them re-parsed, and without letting the consumer re-validate
/// values the legacy parser already accepted. `bind` and `validate` are
/// therefore no-ops here.
///
/// One instance covers one command invocation. The instance owns its
/// mappings outright and is not shared across threads.
#[derive(Debug, Clone)]
pub struct PassthroughInput {
    arguments: IndexMap<String, String>,
    options: HashMap<String, OptionValue>,
    interactive: bool,
}

impl PassthroughInput {
    /// Wrap pre-parsed argument and option mappings.
    ///
    /// Both mappings are stored as given. The interactive flag defaults to
    /// true; see [`with_interactive`](PassthroughInput::with_interactive).
    pub fn new(
        arguments: IndexMap<String, String>,
        options: HashMap<String, OptionValue>,
    ) -> Self {
        debug!(
            "accepting {} pre-parsed arguments and {} options",
            arguments.len(),
            options.len()
        );
        Self {
            arguments,
            options,
            interactive: true,
        }
    }

    /// Record the command name as the first argument.
    ///
    /// The name is stored under the reserved [`COMMAND_ARGUMENT`] key,
    /// ahead of all caller-supplied arguments, whose relative order is
    /// preserved. An existing `"command"` entry is overwritten and moved
    /// to the front.
    pub fn with_command(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        debug!("prepending command argument {:?}", name);
        self.arguments
            .shift_insert(0, COMMAND_ARGUMENT.to_string(), name);
        self
    }

    /// Override the interactive flag supplied at construction.
    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }
}

impl Default for PassthroughInput {
    /// Empty mappings, interactive.
    fn default() -> Self {
        Self::new(IndexMap::new(), HashMap::new())
    }
}

impl Input for PassthroughInput {
    fn first_argument(&self) -> Option<&str> {
        self.arguments.values().next().map(String::as_str)
    }

    fn has_parameter_option(&self, names: &[&str]) -> bool {
        names.iter().any(|name| self.options.contains_key(*name))
    }

    fn parameter_option(&self, names: &[&str], default: OptionValue) -> OptionValue {
        for name in names {
            if let Some(value) = self.options.get(*name) {
                return value.clone();
            }
        }
        default
    }

    fn bind(&mut self, definition: &Definition) -> Result<(), InputError> {
        // no-op: the stored values are taken as already bound
        debug!(
            "bind: ignoring definition with {} arguments and {} options",
            definition.arguments.len(),
            definition.options.len()
        );
        Ok(())
    }

    fn validate(&self) -> Result<(), InputError> {
        // no-op: the legacy parser already accepted these values
        Ok(())
    }

    fn arguments(&self) -> &IndexMap<String, String> {
        &self.arguments
    }

    fn argument(&self, name: &str) -> &str {
        self.arguments.get(name).map(String::as_str).unwrap_or("")
    }

    fn set_argument(&mut self, name: &str, value: &str) {
        trace!("set argument {} = {}", name, value);
        self.arguments.insert(name.to_string(), value.to_string());
    }

    fn has_argument(&self, name: &str) -> bool {
        self.arguments.contains_key(name)
    }

    fn options(&self) -> &HashMap<String, OptionValue> {
        &self.options
    }

    fn option(&self, name: &str) -> Result<&OptionValue, InputError> {
        self.options
            .get(name)
            .ok_or_else(|| InputError::UnknownOption(name.to_string()))
    }

    fn set_option(&mut self, name: &str, value: OptionValue) {
        trace!("set option {} = {}", name, value);
        self.options.insert(name.to_string(), value);
    }

    fn has_option(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }
}
