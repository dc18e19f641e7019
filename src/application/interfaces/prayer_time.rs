use crate::presentation::prayer_time::{EidPrayerTime, PrayerTime};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Interface for the prayer time endpoints
#[async_trait]
pub trait PrayerTimeService: Send + Sync {
    /// Prayer times for today
    async fn daily_prayer_time(&self, city_id: u32) -> Option<Vec<PrayerTime>>;

    /// Prayer times for the coming week
    async fn weekly_prayer_time(&self, city_id: u32) -> Option<Vec<PrayerTime>>;

    /// Prayer times for the coming month
    async fn monthly_prayer_time(&self, city_id: u32) -> Option<Vec<PrayerTime>>;

    /// Eid prayer times
    async fn eid_prayer_time(&self, city_id: u32) -> Option<EidPrayerTime>;

    /// Prayer times for Ramadan
    async fn ramadan_prayer_time(&self, city_id: u32) -> Option<Vec<PrayerTime>>;

    /// Prayer times between two dates
    ///
    /// # Arguments
    /// * `city_id` - City identifier
    /// * `start` - First day of the range
    /// * `end` - Last day of the range
    async fn date_range(
        &self,
        city_id: u32,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Option<Vec<PrayerTime>>;
}
