use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Team position a champion is played in. Variant order is the canonical
/// order used when two positions have the same play rate.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Top,
    Jungle,
    Middle,
    Bottom,
    Utility,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Top,
        Role::Jungle,
        Role::Middle,
        Role::Bottom,
        Role::Utility,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Top => "TOP",
            Role::Jungle => "JUNGLE",
            Role::Middle => "MIDDLE",
            Role::Bottom => "BOTTOM",
            Role::Utility => "UTILITY",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        // Riot position names plus the names players use for them
        match value.to_lowercase().as_str() {
            "top" => Ok(Role::Top),
            "jungle" => Ok(Role::Jungle),
            "middle" | "mid" => Ok(Role::Middle),
            "bottom" | "bot" | "adc" => Ok(Role::Bottom),
            "utility" | "support" => Ok(Role::Utility),
            _ => Err(ParseRoleError(value.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_riot_positions_and_aliases() {
        assert_eq!("TOP".parse(), Ok(Role::Top));
        assert_eq!("jungle".parse(), Ok(Role::Jungle));
        assert_eq!("Mid".parse(), Ok(Role::Middle));
        assert_eq!("BOTTOM".parse(), Ok(Role::Bottom));
        assert_eq!("support".parse(), Ok(Role::Utility));
        assert_eq!(
            "ROAM".parse::<Role>(),
            Err(ParseRoleError("ROAM".to_owned()))
        );
    }

    #[test]
    fn serializes_upper_case() {
        let json = serde_json::to_string(&Role::ALL).unwrap();
        assert_eq!(json, r#"["TOP","JUNGLE","MIDDLE","BOTTOM","UTILITY"]"#);
        for role in Role::ALL {
            assert_eq!(serde_json::to_string(&role).unwrap(), format!("\"{role}\""));
        }
    }
}
