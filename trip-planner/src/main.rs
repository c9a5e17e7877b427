use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trip_planner::cache::CachedGeocoder;
use trip_planner::config::AppConfig;
use trip_planner::geocoding::{GeocoderBackend, MockGeocoder, NominatimClient};
use trip_planner::places::{MockPlaceFinder, OverpassClient, PlacesBackend};
use trip_planner::weather::{OpenWeatherClient, WeatherBackend};
use trip_planner::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;

    // Geocoder: mock table if configured, otherwise Nominatim
    let backend = match &config.mock_places_file {
        Some(path) => {
            let mock = MockGeocoder::from_file(path)?;
            tracing::info!(path = %path.display(), places = mock.len(), "Loaded mock places");
            GeocoderBackend::Mock(mock)
        }
        None => GeocoderBackend::Nominatim(NominatimClient::new(config.nominatim.clone())?),
    };
    tracing::info!(backend = backend.name(), "Geocoder ready");
    let geocoder = CachedGeocoder::new(backend, &config.cache);

    let places = match &config.mock_nearby_file {
        Some(path) => {
            let mock = MockPlaceFinder::from_file(path)?;
            tracing::info!(path = %path.display(), places = mock.len(), "Loaded mock nearby places");
            PlacesBackend::Mock(mock)
        }
        None => PlacesBackend::Overpass(OverpassClient::new(config.overpass.clone())?),
    };
    tracing::info!(backend = places.name(), "Place search ready");

    let weather = match config.weather.clone() {
        Some(weather_config) => WeatherBackend::OpenWeather(OpenWeatherClient::new(weather_config)?),
        None => {
            tracing::info!("OPENWEATHER_API_KEY not set, weather disabled");
            WeatherBackend::Disabled
        }
    };

    let state = AppState::new(geocoder, weather, places, config.planner.clone());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!(addr = %config.bind, "Trip planner listening");
    tracing::info!("  GET  /health                 - Health check");
    tracing::info!("  POST /api/route/plan         - Plan a route");
    tracing::info!("  GET  /api/geocode            - Resolve a place name");
    tracing::info!("  GET  /api/geocode/reverse    - Nearest place to a coordinate");
    tracing::info!("  GET  /api/estimate           - Duration and cost for a distance");
    tracing::info!("  GET  /api/places             - Places of interest nearby");

    axum::serve(listener, app).await?;
    Ok(())
}
