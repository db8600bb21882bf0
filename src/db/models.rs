use sqlx::FromRow;

/// Stored credential record.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Account {
    pub username: String,
    pub password_hash: String,
}

/// Named document collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Exercises,
    Foods,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Exercises => "exercises",
            Collection::Foods => "foods",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "exercises" => Some(Collection::Exercises),
            "foods" => Some(Collection::Foods),
            _ => None,
        }
    }
}
