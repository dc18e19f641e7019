use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Prayer times of a single day for a city
///
/// Times are local `HH:mm` strings as returned by the service.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PrayerTime {
    /// Image URL of the moon phase
    pub shape_moon_url: String,
    /// Dawn prayer
    pub fajr: String,
    /// Sunrise
    pub sunrise: String,
    /// Noon prayer
    pub dhuhr: String,
    /// Afternoon prayer
    pub asr: String,
    /// Sunset prayer
    pub maghrib: String,
    /// Night prayer
    pub isha: String,
    /// Astronomical sunset
    pub astronomical_sunset: String,
    /// Astronomical sunrise
    pub astronomical_sunrise: String,
    /// Hijri date, short form
    pub hijri_date_short: String,
    /// Hijri date, short form, ISO-8601
    pub hijri_date_short_iso8601: String,
    /// Hijri date, long form
    pub hijri_date_long: String,
    /// Hijri date, long form, ISO-8601
    pub hijri_date_long_iso8601: String,
    /// Time at which the sun is in the qibla direction
    pub qibla_time: String,
    /// Gregorian date, short form
    pub gregorian_date_short: String,
    /// Gregorian date, short form, ISO-8601
    pub gregorian_date_short_iso8601: String,
    /// Gregorian date, long form
    pub gregorian_date_long: String,
    /// Gregorian date, long form, ISO-8601
    pub gregorian_date_long_iso8601: String,
    /// UTC offset of the city in hours
    pub greenwich_mean_time_zone: f64,
}

/// Eid prayer times for a city
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EidPrayerTime {
    /// Eid al-Adha, hijri date
    pub eid_al_adha_hijri: String,
    /// Eid al-Adha prayer time
    pub eid_al_adha_time: String,
    /// Eid al-Adha, gregorian date
    pub eid_al_adha_date: String,
    /// Eid al-Fitr, hijri date
    pub eid_al_fitr_hijri: String,
    /// Eid al-Fitr prayer time
    pub eid_al_fitr_time: String,
    /// Eid al-Fitr, gregorian date
    pub eid_al_fitr_date: String,
}
