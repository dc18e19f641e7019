/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Body of `POST /Auth/Login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    /// Account email
    pub email: &'a str,
    /// Account password
    pub password: &'a str,
}

/// Body of `POST /api/PrayerTime/DateRange/`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeRequest {
    /// City identifier
    pub city_id: u32,
    /// Start of the range, ISO-8601
    pub start_date: String,
    /// End of the range, ISO-8601
    pub end_date: String,
}

impl DateRangeRequest {
    /// Creates a new request, formatting both bounds as ISO-8601 UTC timestamps
    /// with millisecond precision (`2023-01-01T00:00:00.000Z`)
    pub fn new(city_id: u32, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            city_id,
            start_date: to_iso8601(&start),
            end_date: to_iso8601(&end),
        }
    }
}

fn to_iso8601(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}
