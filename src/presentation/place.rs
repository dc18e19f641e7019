use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Country, state or city as listed by the place endpoints
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Place {
    /// Identifier used by the nested place and prayer time endpoints
    pub id: u32,
    /// Short code
    pub code: String,
    /// Display name
    pub name: String,
}

/// Details of a single city, including qibla information
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CityDetail {
    /// City identifier, returned as a string by this endpoint
    pub id: String,
    /// Local name
    pub name: String,
    /// Short code
    pub code: String,
    /// Geographic qibla angle in degrees
    pub geographic_qibla_angle: String,
    /// Distance to the Kaaba in kilometres
    pub distance_to_kaaba: String,
    /// Qibla angle in degrees
    pub qibla_angle: String,
    /// City name
    pub city: String,
    /// City name in English
    pub city_en: String,
    /// Country name
    pub country: String,
    /// Country name in English
    pub country_en: String,
}
