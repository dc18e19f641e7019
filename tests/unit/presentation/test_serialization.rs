use awqat_salah::presentation::{CityDetail, DailyContent, EidPrayerTime, PrayerTime};
use serde_json::json;

pub fn prayer_time_json() -> serde_json::Value {
    json!({
        "shapeMoonUrl": "url",
        "fajr": "05:12",
        "sunrise": "06:40",
        "dhuhr": "12:51",
        "asr": "15:49",
        "maghrib": "18:52",
        "isha": "20:14",
        "astronomicalSunset": "18:45",
        "astronomicalSunrise": "06:47",
        "hijriDateShort": "1.1.1445",
        "hijriDateShortIso8601": "1445-01-01",
        "hijriDateLong": "1 Muharram 1445",
        "hijriDateLongIso8601": "1445-01-01T00:00:00",
        "qiblaTime": "10:31",
        "gregorianDateShort": "19.07.2023",
        "gregorianDateShortIso8601": "2023-07-19",
        "gregorianDateLong": "19 July 2023 Wednesday",
        "gregorianDateLongIso8601": "2023-07-19T00:00:00",
        "greenwichMeanTimeZone": 3.0
    })
}

#[test]
fn test_prayer_time_field_names() {
    let value = prayer_time_json();
    let prayer: PrayerTime = serde_json::from_value(value.clone()).unwrap();
    assert_eq!(prayer.fajr, "05:12");
    assert_eq!(prayer.hijri_date_short_iso8601, "1445-01-01");
    assert_eq!(prayer.greenwich_mean_time_zone, 3.0);
    assert_eq!(serde_json::to_value(&prayer).unwrap(), value);
}

#[test]
fn test_prayer_time_integer_timezone() {
    let mut value = prayer_time_json();
    value["greenwichMeanTimeZone"] = json!(0);
    let prayer: PrayerTime = serde_json::from_value(value).unwrap();
    assert_eq!(prayer.greenwich_mean_time_zone, 0.0);
}

#[test]
fn test_city_detail_field_names() {
    let detail: CityDetail = serde_json::from_value(json!({
        "id": "9541",
        "name": "ISTANBUL",
        "code": "ISTANBUL",
        "geographicQiblaAngle": "151.6",
        "distanceToKaaba": "2405",
        "qiblaAngle": "146",
        "city": "İstanbul",
        "cityEn": "Istanbul",
        "country": "Türkiye",
        "countryEn": "Turkey"
    }))
    .unwrap();
    assert_eq!(detail.distance_to_kaaba, "2405");
    assert_eq!(detail.country_en, "Turkey");
}

#[test]
fn test_eid_prayer_time_field_names() {
    let eid: EidPrayerTime = serde_json::from_value(json!({
        "eidAlAdhaHijri": "10.12.1444",
        "eidAlAdhaTime": "06:19",
        "eidAlAdhaDate": "28.06.2023",
        "eidAlFitrHijri": "1.10.1444",
        "eidAlFitrTime": "07:04",
        "eidAlFitrDate": "21.04.2023"
    }))
    .unwrap();
    assert_eq!(eid.eid_al_fitr_time, "07:04");
}

#[test]
fn test_daily_content_display() {
    let content: DailyContent = serde_json::from_value(json!({
        "id": 0,
        "dayOfYear": 1,
        "verse": "abc",
        "verseSource": "def",
        "hadith": "ghi",
        "hadithSource": "jkl",
        "pray": "mno",
        "praySource": "pqr"
    }))
    .unwrap();
    assert_eq!(content.day_of_year, 1);
    let display = format!("{}", content);
    assert!(display.contains("def"));
    assert!(display.contains("mno"));
}
