//! Internationalization: localized strings for bot replies.
//!
//! Uses a simple `t(key, lang)` function for static strings and
//! format helpers for strings with interpolation. `lang` is an ISO 639-1
//! code. Supported languages: Russian, English (fallback).

mod format;


pub use format::*;

/// Return a localized static string for `key` in the given `lang`.
/// Falls back to English for unsupported languages and "???" for unknown keys.
pub fn t(key: &str, lang: &str) -> &'static str {
    let ru = lang.eq_ignore_ascii_case("ru");
    match key {
        // --- Fallbacks ---
        "apod_unavailable" => {
            if ru {
                "Не удалось получить фотографию дня."
            } else {
                "Could not fetch the picture of the day."
            }
        }
        "asteroids_unavailable" => {
            if ru {
                "Нет данных о ближайших астероидах."
            } else {
                "No data on nearby asteroids."
            }
        }
        "mars_unavailable" => {
            if ru {
                "Не удалось получить фотографию с Марса."
            } else {
                "Could not fetch a photo from Mars."
            }
        }

        // --- Captions and labels ---
        "mars_caption" => {
            if ru {
                "Фотография с Марса"
            } else {
                "Photo from Mars"
            }
        }
        "title_label" => {
            if ru {
                "Название:"
            } else {
                "Title:"
            }
        }
        "description_label" => {
            if ru {
                "Описание:"
            } else {
                "Description:"
            }
        }
        "video_label" => {
            if ru {
                "Видео:"
            } else {
                "Video:"
            }
        }
        "name_label" => {
            if ru {
                "Название:"
            } else {
                "Name:"
            }
        }
        "diameter_label" => {
            if ru {
                "Диаметр:"
            } else {
                "Diameter:"
            }
        }
        "distance_label" => {
            if ru {
                "Расстояние до Земли:"
            } else {
                "Distance to Earth:"
            }
        }
        "speed_label" => {
            if ru {
                "Скорость:"
            } else {
                "Speed:"
            }
        }
        "meters" => {
            if ru {
                "метров"
            } else {
                "meters"
            }
        }
        "km" => {
            if ru {
                "км"
            } else {
                "km"
            }
        }
        "km_per_hour" => {
            if ru {
                "км/ч"
            } else {
                "km/h"
            }
        }

        // --- Command descriptions ---
        "cmd_start" => {
            if ru {
                "Список команд"
            } else {
                "List available commands"
            }
        }
        "cmd_apod" => {
            if ru {
                "Фотография дня"
            } else {
                "Astronomy picture of the day"
            }
        }
        "cmd_asteroids" => {
            if ru {
                "Информация о ближайших астероидах"
            } else {
                "Info about a nearby asteroid"
            }
        }
        "cmd_mars" => {
            if ru {
                "Картинка с Марса"
            } else {
                "A picture from Mars"
            }
        }
        "commands_intro" => {
            if ru {
                "Вот команды, которые я поддерживаю:"
            } else {
                "Here are the commands I support:"
            }
        }
        _ => "???",
    }
}
