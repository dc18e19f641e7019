use awqat_salah::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    // credentials come from AWQAT_EMAIL / AWQAT_PASSWORD or a .env file
    let client = Client::default();
    client.login_with_config().await;
    if !client.is_authenticated().await {
        error!("Login failed, see the log above");
        return Ok(());
    }

    let daily_content = client.daily_content().await;
    info!(
        "Got daily content, day of year: {:?}",
        daily_content.map(|c| c.day_of_year)
    );

    let countries = client.countries().await.unwrap_or_default();
    info!("Got countries: {}", countries.len());
    info!("Got states: {:?}", client.states().await.map(|s| s.len()));
    info!("Got cities: {:?}", client.cities().await.map(|c| c.len()));

    let Some(country) = countries.first() else {
        return Ok(());
    };
    let states = client.states_by_country(country.id).await.unwrap_or_default();
    info!("Got states for country {}: {}", country.name, states.len());

    let Some(state) = states.first() else {
        return Ok(());
    };
    let cities = client.cities_by_state(state.id).await.unwrap_or_default();
    info!("Got cities for state {}: {}", state.name, cities.len());

    let Some(city) = cities.first() else {
        return Ok(());
    };
    let city_id = city.id;

    if let Some(detail) = client.city_detail(city_id).await {
        info!("Got city details, distance to kaaba: {}", detail.distance_to_kaaba);
    }

    let count = |v: Option<Vec<PrayerTime>>| v.map_or(0, |v| v.len());
    info!("Got daily prayer times: {}", count(client.daily_prayer_time(city_id).await));
    info!("Got weekly prayer times: {}", count(client.weekly_prayer_time(city_id).await));
    info!("Got monthly prayer times: {}", count(client.monthly_prayer_time(city_id).await));

    let start = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).single().ok_or("invalid start")?;
    let end = Utc.with_ymd_and_hms(2023, 7, 1, 0, 0, 0).single().ok_or("invalid end")?;
    info!(
        "Got prayer times for range: {}",
        count(client.date_range(city_id, start, end).await)
    );

    if let Some(eid) = client.eid_prayer_time(city_id).await {
        info!("Got eid prayer times: {}", eid.eid_al_adha_date);
    }
    info!("Got ramadan prayer times: {}", count(client.ramadan_prayer_time(city_id).await));

    client.close();
    Ok(())
}
