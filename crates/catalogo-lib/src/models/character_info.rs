use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Location {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// A character as returned by the character API
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct CharacterInfo {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub species: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub origin: Option<Location>,
}
