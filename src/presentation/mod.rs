/// Daily content models
pub mod content;
/// Place models: countries, states, cities
pub mod place;
/// Prayer time models
pub mod prayer_time;

pub use content::DailyContent;
pub use place::{CityDetail, Place};
pub use prayer_time::{EidPrayerTime, PrayerTime};
