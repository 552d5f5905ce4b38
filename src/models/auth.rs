use serde::{Deserialize, Serialize};

use crate::models::{Gender, Passenger, Role};

/// Payload for POST /auth/login.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// What /auth/login answers with. `role` stays a raw string here so an
/// unexpected value can be rejected by the session store instead of failing
/// deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub role: String,
    #[serde(default)]
    pub passenger: Option<Passenger>,
}

/// Payload for POST /passengers/register. The backend stores phone as a
/// number, so the 10-digit string is converted before sending.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub phone: u64,
    pub gender: Gender,
    pub password: String,
}

/// The client's persisted belief about who is logged in.
/// Invariant: `passenger` is Some iff `role == Passenger`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub role: Role,
    pub passenger: Option<Passenger>,
}

impl Default for AuthSession {
    fn default() -> Self {
        Self {
            role: Role::Guest,
            passenger: None,
        }
    }
}

impl AuthSession {
    /// Adopt a login payload, enforcing the role/passenger invariant.
    pub fn from_login(payload: &LoginResponse) -> Self {
        let role = Role::from_backend(&payload.role);
        Self {
            passenger: if role == Role::Passenger {
                payload.passenger.clone()
            } else {
                None
            },
            role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bogus_role_resets_to_guest() {
        let payload = LoginResponse {
            role: "BOGUS".to_string(),
            passenger: Some(Passenger {
                id: 1,
                name: "A".to_string(),
                email: None,
                phone: None,
            }),
        };
        let session = AuthSession::from_login(&payload);
        assert_eq!(session.role, Role::Guest);
        assert!(session.passenger.is_none());
    }

    #[test]
    fn admin_login_drops_any_passenger_profile() {
        let payload = LoginResponse {
            role: "ADMIN".to_string(),
            passenger: Some(Passenger {
                id: 1,
                name: "A".to_string(),
                email: None,
                phone: None,
            }),
        };
        let session = AuthSession::from_login(&payload);
        assert_eq!(session.role, Role::Admin);
        assert!(session.passenger.is_none());
    }

    #[test]
    fn passenger_login_keeps_profile() {
        let payload = LoginResponse {
            role: "PASSENGER".to_string(),
            passenger: Some(Passenger {
                id: 7,
                name: "Asha".to_string(),
                email: Some("asha@example.com".to_string()),
                phone: Some(9_876_543_210),
            }),
        };
        let session = AuthSession::from_login(&payload);
        assert_eq!(session.role, Role::Passenger);
        assert_eq!(session.passenger.unwrap().id, 7);
    }
}
