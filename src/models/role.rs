// ============================================================================
// ROLE - Closed enumeration of everything the client can act as
// ============================================================================

use serde::de::{Deserialize, Deserializer};
use serde::Serialize;

/// Who the client believes it is talking for. The backend decides this at
/// login; anything it sends that we do not recognise collapses to `Guest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Role {
    #[serde(rename = "ADMIN")]
    Admin,
    #[serde(rename = "PASSENGER")]
    Passenger,
    #[serde(rename = "GUEST")]
    Guest,
}

// Manual impl so unknown role strings read back as Guest instead of failing
// the whole session deserialization.
impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Role::from_backend(&value))
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Guest
    }
}

impl Role {
    /// Parse the `role` string of a login payload. Unknown values are `Guest`.
    pub fn from_backend(value: &str) -> Role {
        match value {
            "ADMIN" => Role::Admin,
            "PASSENGER" => Role::Passenger,
            _ => Role::Guest,
        }
    }

    pub fn is_guest(&self) -> bool {
        matches!(self, Role::Guest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_backend_role_collapses_to_guest() {
        assert_eq!(Role::from_backend("ADMIN"), Role::Admin);
        assert_eq!(Role::from_backend("PASSENGER"), Role::Passenger);
        assert_eq!(Role::from_backend("BOGUS"), Role::Guest);
        assert_eq!(Role::from_backend(""), Role::Guest);
    }

    #[test]
    fn serde_round_trip_uses_backend_spelling() {
        let json = serde_json::to_string(&Role::Passenger).unwrap();
        assert_eq!(json, "\"PASSENGER\"");
        let back: Role = serde_json::from_str("\"ADMIN\"").unwrap();
        assert_eq!(back, Role::Admin);
        // Unknown strings deserialize as Guest instead of failing.
        let bogus: Role = serde_json::from_str("\"SUPERUSER\"").unwrap();
        assert_eq!(bogus, Role::Guest);
    }
}
