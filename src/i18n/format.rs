//! Format helpers for strings with interpolation.

use super::t;

/// Greeting plus the command list shown on `/start`.
pub fn greeting(lang: &str, first_name: Option<&str>) -> String {
    let ru = lang.eq_ignore_ascii_case("ru");
    let hello = match (ru, first_name) {
        (true, Some(name)) => format!("Привет, {name}!"),
        (true, None) => "Привет!".to_string(),
        (false, Some(name)) => format!("Hello, {name}!"),
        (false, None) => "Hello!".to_string(),
    };
    format!(
        "{hello} {intro}\n/apod - {apod}\n/asteroids - {asteroids}\n/mars - {mars}",
        intro = t("commands_intro", lang),
        apod = t("cmd_apod", lang),
        asteroids = t("cmd_asteroids", lang),
        mars = t("cmd_mars", lang),
    )
}

/// Caption of the picture of the day.
pub fn apod_caption(lang: &str, title: &str, description: &str) -> String {
    format!(
        "{} {title}\n{} {description}",
        t("title_label", lang),
        t("description_label", lang)
    )
}

/// Text reply for a picture of the day that is a video.
pub fn apod_video(lang: &str, caption: &str, url: &str) -> String {
    format!("{caption}\n{} {url}", t("video_label", lang))
}

/// One asteroid rendered as a text block.
pub fn asteroid_summary(
    lang: &str,
    name: &str,
    diameter_m: f64,
    distance_km: &str,
    speed_kmh: &str,
) -> String {
    format!(
        "{} {name}\n{} {diameter_m} {}\n{} {distance_km} {}\n{} {speed_kmh} {}",
        t("name_label", lang),
        t("diameter_label", lang),
        t("meters", lang),
        t("distance_label", lang),
        t("km", lang),
        t("speed_label", lang),
        t("km_per_hour", lang),
    )
}
