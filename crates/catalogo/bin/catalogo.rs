#[macro_use]
extern crate log;

use std::sync::Arc;

use anyhow::anyhow;
use catalogo::{
    application::{catalogue::CatalogueController, status::FetchStatus, weather::WeatherController},
    domain::services::favorites::FavoritesService,
    infrastructure::{
        config::{API_KEY_ENV, Config},
        http,
        repositories::{
            character::CharacterRepositoryImpl, storage::FileStore, weather::WeatherRepositoryImpl,
        },
    },
    practice,
    presentation::{
        cards::format_detail,
        terminal::{CatalogueTerminal, WeatherTerminal},
    },
};
use clap::{Parser, Subcommand};
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    task::JoinHandle,
};

#[derive(Parser)]
#[clap(version, about = "Character catalogue and weather lookup")]
struct Opts {
    /// Path to config file
    #[clap(long)]
    config: Option<String>,
    #[clap(subcommand)]
    subcmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Browse the character catalogue, commands are read from stdin
    Browse {
        /// Only show characters whose name contains this text
        #[clap(long)]
        query: Option<String>,
    },
    /// List favorite character ids
    Favorites,
    /// Mark a character as favorite
    Favorite {
        id: i64,
        /// Unmark instead
        #[clap(long)]
        remove: bool,
    },
    /// Current weather for a city
    Weather {
        city: String,
        /// Retry a failed lookup this many times
        #[clap(long, default_value = "0")]
        retries: u32,
    },
    /// Run the JSON serialize/parse exercises
    JsonPractice,
}

const HELP: &str = "commands:
  more          load the next page below the current list
  next | prev   jump to the next or previous page
  search [text] filter loaded characters by name, empty shows all
  show <id>     character details
  fav <id>      mark as favorite
  unfav <id>    unmark as favorite
  toggle <id>   flip the favorite mark
  retry         repeat the last request
  help          this text
  quit          leave";

fn init_logger() {
    let mut builder = env_logger::Builder::new();
    if let Ok(rust_log) = std::env::var("RUST_LOG") {
        builder.parse_filters(&rust_log);
    } else if let Ok(catalogo_log) = std::env::var("CATALOGO_LOG") {
        builder.parse_filters(&format!(
            "catalogo={catalogo_log},catalogo_lib={catalogo_log}"
        ));
    } else {
        builder.parse_filters("warn");
    }
    builder.init();
}

fn parse_id(arg: &str) -> Option<i64> {
    match arg.trim().parse() {
        Ok(id) => Some(id),
        Err(_) => {
            eprintln!("expected a character id, got {arg:?}");
            None
        }
    }
}

async fn browse(
    config: &Config,
    favorites: Arc<FavoritesService<FileStore>>,
    query: Option<String>,
) -> Result<(), anyhow::Error> {
    let repo = CharacterRepositoryImpl::new(http::build_client()?);
    let view = Arc::new(CatalogueTerminal::new(favorites.clone()));
    let controller = CatalogueController::new(
        repo,
        view,
        config.catalogue_url.clone(),
        config.timeout(),
    );

    controller.load_first().await?;
    if let Some(query) = query {
        controller.search(&query);
    }
    eprintln!("{HELP}");

    let mut pending: Option<JoinHandle<()>> = None;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let (command, arg) = line.split_once(' ').unwrap_or((line, ""));

        let issued = match command {
            "" => continue,
            "more" => controller.load_more().ok_or("No more pages."),
            "next" => controller.next_page().ok_or("No next page."),
            "prev" => controller.prev_page().ok_or("No previous page."),
            "retry" => controller.retry_last().ok_or("Nothing to retry."),
            "search" => {
                controller.search(arg);
                continue;
            }
            "show" => {
                if let Some(id) = parse_id(arg) {
                    match controller.find(id) {
                        Some(character) => {
                            println!("{}", format_detail(&character, favorites.is_favorite(id)))
                        }
                        None => eprintln!("No character #{id} loaded."),
                    }
                }
                continue;
            }
            "fav" | "unfav" => {
                if let Some(id) = parse_id(arg) {
                    let on = command == "fav";
                    favorites.set_favorite(id, on);
                    eprintln!("#{id} {}", if on { "added to favorites" } else { "removed from favorites" });
                }
                continue;
            }
            "toggle" => {
                if let Some(id) = parse_id(arg) {
                    let on = favorites.toggle(id);
                    eprintln!("#{id} {}", if on { "added to favorites" } else { "removed from favorites" });
                }
                continue;
            }
            "help" => {
                eprintln!("{HELP}");
                continue;
            }
            "quit" | "exit" => {
                controller.cancel();
                return Ok(());
            }
            other => {
                eprintln!("unknown command {other:?}, type `help`");
                continue;
            }
        };

        match issued {
            Ok(handle) => pending = Some(handle),
            Err(message) => eprintln!("{message}"),
        }
    }

    if let Some(handle) = pending {
        handle.await?;
    }

    Ok(())
}

async fn weather(config: &Config, city: &str, retries: u32) -> Result<(), anyhow::Error> {
    let api_key = config.weather_api_key().ok_or_else(|| {
        anyhow!(
            "missing OpenWeather API key, set {API_KEY_ENV} or weather.api_key in {}",
            config.path().display()
        )
    })?;

    let repo = WeatherRepositoryImpl::new(http::build_client()?, &config.weather, api_key);
    let controller = WeatherController::new(repo, Arc::new(WeatherTerminal), config.timeout());

    let handle = match controller.lookup(city) {
        Ok(handle) => handle,
        Err(e) => {
            debug!("lookup rejected: {e}");
            return Ok(());
        }
    };
    handle.await?;

    let mut attempts = 0;
    while matches!(controller.status(), FetchStatus::Failed(_)) && attempts < retries {
        attempts += 1;
        info!("retrying weather for {city:?} ({attempts}/{retries})");
        match controller.retry() {
            Some(handle) => handle.await?,
            None => break,
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    init_logger();

    let opts: Opts = Opts::parse();
    let config = Config::open(opts.config)?;

    debug!(
        "catalogo {} (models {}), config: {:?}",
        env!("CARGO_PKG_VERSION"),
        catalogo_lib::LIB_VERSION,
        config
    );

    let favorites = Arc::new(FavoritesService::new(FileStore::new(&config.storage_path)));

    match opts.subcmd {
        Command::Browse { query } => browse(&config, favorites, query).await?,
        Command::Favorites => {
            for id in favorites.get_all() {
                println!("{id}");
            }
        }
        Command::Favorite { id, remove } => favorites.set_favorite(id, !remove),
        Command::Weather { city, retries } => weather(&config, &city, retries).await?,
        Command::JsonPractice => {
            for line in practice::run(&practice::Course::default(), practice::USERS_JSON)? {
                println!("{line}");
            }
        }
    }

    Ok(())
}
