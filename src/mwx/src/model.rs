//! Output types shared by several XAssets

use serde::{Deserialize, Serialize};

/// Which titles an item can be equipped in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    pub cold_war: bool,
    pub warzone: bool,
    pub modern_warfare: bool,
}

impl Availability {
    /// Assumed for items missing from the item source table
    pub const DEFAULT: Availability = Availability {
        cold_war: false,
        warzone: true,
        modern_warfare: true,
    };
}

impl Default for Availability {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A loot item granted by a bundle, challenge or event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// A reward read from a table cell that may be empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LootReward {
    pub id: Option<i64>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability_serializes_camel_case() {
        let json = serde_json::to_string(&Availability::DEFAULT).unwrap();
        assert_eq!(
            json,
            r#"{"coldWar":false,"warzone":true,"modernWarfare":true}"#
        );
    }

    #[test]
    fn test_reward_type_field() {
        let reward = Reward {
            id: 7,
            kind: None,
        };
        assert_eq!(
            serde_json::to_string(&reward).unwrap(),
            r#"{"id":7,"type":null}"#
        );
    }
}
