//! CompilerOptions value object - settings handed to the compiler service
//!
//! Constructed once per invocation and immutable afterwards. The default
//! matches the compiler's own default configuration.

use serde::{Deserialize, Serialize};

/// Behavior settings for one compiler invocation
///
/// `target_bytecode` is carried to the compiler verbatim; this crate does not
/// translate version aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerOptions {
    #[serde(default = "default_target_bytecode")]
    pub target_bytecode: String,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            target_bytecode: default_target_bytecode(),
        }
    }
}

fn default_target_bytecode() -> String {
    "1.8".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_targets_1_8() {
        assert_eq!(CompilerOptions::default().target_bytecode, "1.8");
    }

    #[test]
    fn deserializes_with_defaults() {
        let options: CompilerOptions = toml::from_str("").unwrap();
        assert_eq!(options, CompilerOptions::default());
    }
}
