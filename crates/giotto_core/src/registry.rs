//! Immutable command registry snapshot.

use crate::CommandPattern;
use derive_getters::Getters;
use std::collections::HashMap;
use tracing::debug;

/// Descriptor for a registered command.
#[derive(Debug, Clone, Getters, derive_new::new)]
pub struct CommandDescriptor {
    /// Dotted-namespace identifier, e.g. `settings.enable`
    id: String,
    /// The word that invokes the command
    call: String,
    /// Short human description
    description: String,
    /// Whether the command participates in permission control
    blacklistable: bool,
}

/// Pre-built lookup snapshot over every registered command.
///
/// Built once from the framework's combined built-in, inline, and custom
/// command sets and passed into matching as a parameter; the matcher never
/// polls a live registry. Registration order is preserved, and the first
/// registration of an identifier wins.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    commands: Vec<CommandDescriptor>,
    index: HashMap<String, usize>,
}

impl CommandRegistry {
    /// Build a snapshot from an ordered set of descriptors.
    pub fn from_descriptors(descriptors: impl IntoIterator<Item = CommandDescriptor>) -> Self {
        let mut commands: Vec<CommandDescriptor> = Vec::new();
        let mut index = HashMap::new();
        for descriptor in descriptors {
            let key = descriptor.id().to_ascii_lowercase();
            if index.contains_key(&key) {
                continue;
            }
            index.insert(key, commands.len());
            commands.push(descriptor);
        }
        Self { commands, index }
    }

    /// Look up a descriptor by identifier, case-insensitively.
    pub fn descriptor(&self, id: &str) -> Option<&CommandDescriptor> {
        self.index
            .get(&id.to_ascii_lowercase())
            .map(|&position| &self.commands[position])
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Identifiers matching `pattern` that are flagged permission-gateable.
    ///
    /// Non-gateable matches are silently excluded; they are not an error.
    /// The result carries no duplicates and preserves registration order.
    pub fn matching_gateable(&self, pattern: &CommandPattern) -> Vec<String> {
        let matched: Vec<String> = self
            .commands
            .iter()
            .filter(|command| *command.blacklistable() && pattern.matches(command.id()))
            .map(|command| command.id().clone())
            .collect();
        debug!(?pattern, count = matched.len(), "Matched gateable commands");
        matched
    }
}
