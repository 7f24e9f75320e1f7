//! Serialize and parse exercises with plain json text.

use serde::{Deserialize, Serialize};

pub const USERS_JSON: &str = r#"
[
  { "id": 1, "name": "Ana", "email": "ana@mail.com" },
  { "id": 2, "name": "Luis", "email": "luis@mail.com" },
  { "id": 3, "name": "María", "email": "maria@mail.com" }
]
"#;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Course {
    pub name: String,
    pub duration: String,
    pub level: String,
}

impl Default for Course {
    fn default() -> Self {
        Self {
            name: "JavaScript from scratch".to_string(),
            duration: "4 weeks".to_string(),
            level: "Beginner".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

pub fn parse_users(json: &str) -> Result<Vec<User>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Runs every exercise and returns the lines to print
pub fn run(course: &Course, users_json: &str) -> Result<Vec<String>, serde_json::Error> {
    let mut lines = vec![];

    let course_json = serde_json::to_string(course)?;
    lines.push("=== Exercise 1: object to JSON ===".to_string());
    lines.push(course_json.clone());

    let parsed: Course = serde_json::from_str(&course_json)?;
    lines.push("=== Exercise 2: JSON to object ===".to_string());
    lines.push(format!("Course: {} - Level: {}", parsed.name, parsed.level));

    lines.push("=== Exercise 3: user list ===".to_string());
    for user in parse_users(users_json)? {
        lines.push(format!("User {}: {} - {}", user.id, user.name, user.email));
    }

    Ok(lines)
}
