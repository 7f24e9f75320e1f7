use std::{
    sync::{Arc, Mutex, MutexGuard},
    time::Duration,
};

use thiserror::Error;
use tokio::task::JoinHandle;

use crate::{
    application::{
        loader::{AsyncLoader, Ticket},
        status::{FetchStatus, View, with_timeout},
    },
    domain::{
        entities::weather::Weather,
        repositories::{error::FetchError, weather::WeatherRepository},
    },
};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Type a city name before searching.")]
    EmptyCity,
}

#[derive(Default)]
struct State {
    status: FetchStatus,
    last_city: Option<String>,
    weather: Option<Weather>,
}

/// Current weather lookup by city name, with retry of the last city
pub struct WeatherController<R>
where
    R: WeatherRepository,
{
    repo: Arc<R>,
    view: Arc<dyn View<Weather>>,
    timeout: Duration,
    state: Mutex<State>,
    loader: AsyncLoader,
}

impl<R> WeatherController<R>
where
    R: WeatherRepository + 'static,
{
    pub fn new(repo: R, view: Arc<dyn View<Weather>>, timeout: Duration) -> Arc<Self> {
        Arc::new(Self {
            repo: Arc::new(repo),
            view,
            timeout,
            state: Mutex::new(State::default()),
            loader: AsyncLoader::new(),
        })
    }

    fn lock_state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn lookup(self: &Arc<Self>, city: &str) -> Result<JoinHandle<()>, ValidationError> {
        let mut state = self.lock_state();
        state.last_city = Some(city.to_string());

        let city = city.trim().to_string();
        if city.is_empty() {
            let e = ValidationError::EmptyCity;
            self.view.show_error(&e.to_string());
            return Err(e);
        }

        state.status = FetchStatus::Loading;
        state.weather = None;
        self.view.clear_error();
        self.view.set_loading(true);

        let controller = self.clone();
        let handle = self.loader.load(move |ticket| async move {
            debug!("weather request {} for {city:?}", ticket.id());
            let result = with_timeout(controller.timeout, controller.repo.fetch_weather(&city)).await;
            controller.finish(&ticket, &city, result);
        });
        drop(state);

        Ok(handle)
    }

    fn finish(&self, ticket: &Ticket, city: &str, result: Result<Weather, FetchError>) {
        let mut state = self.lock_state();
        if !ticket.is_current() {
            debug!("dropping stale weather {} for {city:?}", ticket.id());
            return;
        }

        match result {
            Ok(weather) => {
                self.view.clear_error();
                self.view.render(&weather);
                state.weather = Some(weather);
                state.status = FetchStatus::Success;
            }
            Err(e) => {
                warn!("weather lookup for {city:?} failed: {e}");
                self.view.show_error(&e.user_message("City"));
                state.status = FetchStatus::Failed(e);
            }
        }

        self.view.set_loading(false);
    }

    /// Look up the last city again, a no-op when nothing was searched yet
    pub fn retry(self: &Arc<Self>) -> Option<JoinHandle<()>> {
        let city = self
            .lock_state()
            .last_city
            .clone()
            .filter(|city| !city.trim().is_empty())?;

        self.lookup(&city).ok()
    }

    pub fn cancel(&self) {
        let mut state = self.lock_state();
        self.loader.cancel();
        if state.status.is_loading() {
            state.status = FetchStatus::Idle;
            self.view.set_loading(false);
        }
    }

    pub fn status(&self) -> FetchStatus {
        self.lock_state().status.clone()
    }

    pub fn weather(&self) -> Option<Weather> {
        self.lock_state().weather.clone()
    }

    pub fn last_city(&self) -> Option<String> {
        self.lock_state().last_city.clone()
    }
}
