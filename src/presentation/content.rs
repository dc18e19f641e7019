use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Verse, hadith and prayer of the day
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DailyContent {
    /// Identifier
    pub id: u32,
    /// Day of the year the content belongs to
    pub day_of_year: u32,
    /// Verse text
    pub verse: String,
    /// Verse reference
    pub verse_source: String,
    /// Hadith text
    pub hadith: String,
    /// Hadith reference
    pub hadith_source: String,
    /// Prayer text
    pub pray: String,
    /// Prayer reference
    pub pray_source: String,
}
