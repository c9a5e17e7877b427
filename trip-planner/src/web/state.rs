//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedGeocoder;
use crate::geocoding::GeocoderBackend;
use crate::places::PlacesBackend;
use crate::planner::PlannerConfig;
use crate::weather::WeatherBackend;

/// The geocoder handlers use: the configured backend behind the cache.
pub type AppGeocoder = CachedGeocoder<GeocoderBackend>;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Cached geocoder
    pub geocoder: Arc<AppGeocoder>,

    /// Current-weather source
    pub weather: Arc<WeatherBackend>,

    /// Nearby-place search
    pub places: Arc<PlacesBackend>,

    /// Route planner configuration
    pub config: Arc<PlannerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        geocoder: AppGeocoder,
        weather: WeatherBackend,
        places: PlacesBackend,
        config: PlannerConfig,
    ) -> Self {
        Self {
            geocoder: Arc::new(geocoder),
            weather: Arc::new(weather),
            places: Arc::new(places),
            config: Arc::new(config),
        }
    }
}
