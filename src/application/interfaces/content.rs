use crate::presentation::content::DailyContent;
use async_trait::async_trait;

/// Interface for the daily content endpoint
#[async_trait]
pub trait ContentService: Send + Sync {
    /// Verse, hadith and prayer of the day
    async fn daily_content(&self) -> Option<DailyContent>;
}
