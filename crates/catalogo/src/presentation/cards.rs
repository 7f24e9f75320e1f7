use crate::domain::entities::{character::Character, weather::Weather};

pub const FAVORITE_MARKER: &str = "★";
pub const NOT_FAVORITE_MARKER: &str = "☆";

pub fn format_card(character: &Character, favorite: bool) -> String {
    let marker = if favorite {
        FAVORITE_MARKER
    } else {
        NOT_FAVORITE_MARKER
    };

    format!(
        "{marker} #{:<4} {}  ({} • {})",
        character.id, character.name, character.species, character.status
    )
}

pub fn format_detail(character: &Character, favorite: bool) -> String {
    let origin = if character.origin_name.is_empty() {
        "unknown"
    } else {
        character.origin_name.as_str()
    };

    let mut lines = vec![
        format!("{} (#{})", character.name, character.id),
        format!("Species: {}", character.species),
        format!("Status: {}", character.status),
        format!("Origin: {origin}"),
    ];
    if !character.image_url.is_empty() {
        lines.push(format!("Image: {}", character.image_url));
    }
    if favorite {
        lines.push(format!("{FAVORITE_MARKER} favorite"));
    }

    lines.join("\n")
}

fn format_temp(temp: Option<f64>) -> String {
    match temp {
        Some(temp) => format!("{}°C", temp.round() as i64),
        None => "--°C".to_string(),
    }
}

pub fn format_weather(weather: &Weather) -> String {
    let mut lines = vec![
        weather.place(),
        format_temp(weather.temp),
        format!(
            "Feels like: {} - {}",
            format_temp(weather.feels_like),
            weather.description
        ),
    ];
    if let Some(icon_url) = weather.icon_url() {
        lines.push(format!("Icon: {icon_url}"));
    }

    lines.join("\n")
}
