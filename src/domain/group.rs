//! Group rule marking a change as part of a batched update

use serde::{Deserialize, Serialize};

/// Classification marking a change as a grouped (batched) update
///
/// This core only records whether a rule was supplied; evaluating the
/// rule against dependencies is upstream responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRule {
    /// Name of the update group (e.g., `dev-dependencies`)
    pub name: String,
}

impl GroupRule {
    /// Creates a group rule with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_rule_new() {
        let rule = GroupRule::new("dev-dependencies");
        assert_eq!(rule.name, "dev-dependencies");
    }

    #[test]
    fn test_serde_round_trip() {
        let rule = GroupRule::new("minor-updates");
        let json = serde_json::to_string(&rule).unwrap();
        let parsed: GroupRule = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, rule);
    }
}
