use serde::{Deserialize, Serialize};

/// Profile of the logged-in passenger, as returned by /auth/login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passenger {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<u64>,
}

/// Gender values the backend accepts for passengers and registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "MALE")]
    Male,
    #[serde(rename = "FEMALE")]
    Female,
    #[serde(rename = "OTHER")]
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
            Gender::Other => "OTHER",
        }
    }

    pub fn from_value(value: &str) -> Gender {
        match value {
            "FEMALE" => Gender::Female,
            "OTHER" => Gender::Other,
            _ => Gender::Male,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

/// One row of the booking form, sent to /passengers/routes/{id}/book.
#[derive(Debug, Clone, Serialize)]
pub struct PassengerInput {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
}
