pub use crate::models::{
    CharacterInfo, CharacterPage, Location, PageInfo, WeatherCondition, WeatherInfo, WeatherMain,
    WeatherSys,
};
