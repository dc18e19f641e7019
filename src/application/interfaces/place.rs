use crate::presentation::place::{CityDetail, Place};
use async_trait::async_trait;

/// Interface for the place endpoints
///
/// Every method returns `None` when the call fails for any reason; the cause is logged.
#[async_trait]
pub trait PlaceService: Send + Sync {
    /// Lists all countries
    async fn countries(&self) -> Option<Vec<Place>>;

    /// Lists all states
    async fn states(&self) -> Option<Vec<Place>>;

    /// Lists the states of a country
    async fn states_by_country(&self, country_id: u32) -> Option<Vec<Place>>;

    /// Lists all cities
    async fn cities(&self) -> Option<Vec<Place>>;

    /// Lists the cities of a state
    async fn cities_by_state(&self, state_id: u32) -> Option<Vec<Place>>;

    /// Gets the details of a city
    async fn city_detail(&self, city_id: u32) -> Option<CityDetail>;
}
