use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub document: String,
    pub first_name: String,
    pub last_name: String,
}

/// Body accepted by user registration and update.
#[derive(Debug, Clone, Deserialize)]
pub struct UserInput {
    pub document: String,
    #[serde(alias = "firstName")]
    pub first_name: String,
    #[serde(alias = "lastName")]
    pub last_name: String,
}
