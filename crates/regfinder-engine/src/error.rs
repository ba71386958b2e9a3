//! Errors raised while assembling a rule registry.

use regfinder_core::Regulation;
use thiserror::Error;

/// Rule registry construction failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Two rules conclude about the same regulation. Only one rule per
    /// regulation may be registered, otherwise one evaluation could emit the
    /// same regulation key twice.
    #[error("rules \"{first}\" and \"{second}\" both conclude about {regulation}")]
    DuplicateRule {
        /// The contested regulation.
        regulation: Regulation,
        /// Name of the rule registered first.
        first: &'static str,
        /// Name of the rejected rule.
        second: &'static str,
    },
}
