use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct WeatherSys {
    #[serde(default)]
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct WeatherMain {
    #[serde(default)]
    pub temp: Option<f64>,
    #[serde(default)]
    pub feels_like: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct WeatherCondition {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

/// Current weather response, only the fields the client displays
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct WeatherInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sys: Option<WeatherSys>,
    #[serde(default)]
    pub main: Option<WeatherMain>,
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,
}
