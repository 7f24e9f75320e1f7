use std::sync::Arc;

use crate::{
    application::status::View,
    domain::{
        entities::{character::Character, weather::Weather},
        repositories::storage::KeyValueStore,
        services::favorites::FavoritesService,
    },
    presentation::cards::{format_card, format_weather},
};

/// Prints the catalogue as one card per line, status goes to stderr
pub struct CatalogueTerminal<S>
where
    S: KeyValueStore,
{
    favorites: Arc<FavoritesService<S>>,
}

impl<S> CatalogueTerminal<S>
where
    S: KeyValueStore,
{
    pub fn new(favorites: Arc<FavoritesService<S>>) -> Self {
        Self { favorites }
    }
}

impl<S> View<[Character]> for CatalogueTerminal<S>
where
    S: KeyValueStore,
{
    fn set_loading(&self, loading: bool) {
        if loading {
            eprintln!("Loading characters...");
        }
    }

    fn show_error(&self, message: &str) {
        eprintln!("error: {message} (type `retry` to try again)");
    }

    fn clear_error(&self) {}

    fn show_notice(&self, message: &str) {
        eprintln!("{message}");
    }

    fn render(&self, characters: &[Character]) {
        if characters.is_empty() {
            println!("Nothing to show.");
            return;
        }

        let favorites = self.favorites.get_all();
        for character in characters {
            println!("{}", format_card(character, favorites.contains(&character.id)));
        }
    }
}

#[derive(Default)]
pub struct WeatherTerminal;

impl View<Weather> for WeatherTerminal {
    fn set_loading(&self, loading: bool) {
        if loading {
            eprintln!("Loading weather...");
        }
    }

    fn show_error(&self, message: &str) {
        eprintln!("error: {message}");
    }

    fn clear_error(&self) {}

    fn render(&self, weather: &Weather) {
        println!("{}", format_weather(weather));
    }
}
