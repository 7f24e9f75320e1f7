use catalogo_lib::prelude::WeatherInfo;

pub const ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Weather {
    pub name: String,
    pub country: String,
    pub temp: Option<f64>,
    pub feels_like: Option<f64>,
    pub description: String,
    pub icon: String,
}

impl Weather {
    pub fn icon_url(&self) -> Option<String> {
        (!self.icon.is_empty()).then(|| format!("{ICON_BASE_URL}/{}@2x.png", self.icon))
    }

    /// "Madrid, ES" or just the name when the country is unknown
    pub fn place(&self) -> String {
        if self.country.is_empty() {
            self.name.clone()
        } else {
            format!("{}, {}", self.name, self.country)
        }
    }
}

impl From<WeatherInfo> for Weather {
    fn from(info: WeatherInfo) -> Self {
        let condition = info.weather.into_iter().next().unwrap_or_default();
        let main = info.main.unwrap_or_default();

        Self {
            name: info.name,
            country: info.sys.and_then(|sys| sys.country).unwrap_or_default(),
            temp: main.temp,
            feels_like: main.feels_like,
            description: condition.description.unwrap_or_default(),
            icon: condition.icon.unwrap_or_default(),
        }
    }
}
