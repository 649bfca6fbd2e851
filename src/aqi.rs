//! Overall air quality index classification
//!
//! The provider assigns each classified pollutant an integer quality index on
//! a 1..=5 scale. The overall station AQI is the worst of those per-parameter
//! indices, mapped through a fixed lookup table to a localized name,
//! description and recommendation. Levels outside the table fall back to the
//! provider's own strings carried in the payload.

use serde::Serialize;

/// Language for the AQI classification strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Ukrainian,
}

impl Language {
    /// Parse a language tag from a string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Some(Language::English),
            "uk" | "ua" | "ukrainian" => Some(Language::Ukrainian),
            _ => None,
        }
    }
}

/// Derived overall AQI classification for a station
#[derive(Debug, Clone, Serialize)]
pub struct AqiClassification {
    /// Numeric severity level, the worst per-parameter quality index
    pub level: i64,
    pub name: String,
    pub description: String,
    pub recommendation: String,
}

/// Level table: (level, name, description, recommendation)
const LEVELS_EN: [(i64, &str, &str, &str); 5] = [
    (
        1,
        "Good",
        "Air quality is considered satisfactory",
        "Enjoy your usual outdoor activities",
    ),
    (
        2,
        "Moderate",
        "Air quality is acceptable",
        "Unusually sensitive people should consider limiting prolonged outdoor exertion",
    ),
    (
        3,
        "Unhealthy for sensitive groups",
        "Members of sensitive groups may experience health effects",
        "Sensitive groups should reduce prolonged outdoor exertion",
    ),
    (
        4,
        "Unhealthy",
        "Everyone may begin to experience health effects",
        "Limit time spent outdoors",
    ),
    (
        5,
        "Very unhealthy",
        "Health alert: the risk of health effects is increased for everyone",
        "Stay indoors and keep windows closed",
    ),
];

const LEVELS_UK: [(i64, &str, &str, &str); 5] = [
    (
        1,
        "Добрий",
        "Якість повітря задовільна",
        "Обмежень для перебування на вулиці немає",
    ),
    (
        2,
        "Помірний",
        "Якість повітря прийнятна",
        "Особливо чутливим людям варто обмежити тривалі навантаження на вулиці",
    ),
    (
        3,
        "Шкідливий для чутливих груп",
        "Можливий вплив на здоров'я чутливих груп",
        "Чутливим групам варто зменшити навантаження на відкритому повітрі",
    ),
    (
        4,
        "Шкідливий",
        "Можливий вплив на здоров'я кожного",
        "Обмежте час перебування на вулиці",
    ),
    (
        5,
        "Дуже шкідливий",
        "Підвищений ризик для здоров'я кожного",
        "Залишайтеся в приміщенні та зачиніть вікна",
    ),
];

fn lookup(level: i64, language: Language) -> Option<(&'static str, &'static str, &'static str)> {
    let table = match language {
        Language::English => &LEVELS_EN,
        Language::Ukrainian => &LEVELS_UK,
    };
    table
        .iter()
        .find(|&&(l, _, _, _)| l == level)
        .map(|&(_, name, desc, rec)| (name, desc, rec))
}

/// Classify an overall AQI level.
///
/// `fallback_desc` and `fallback_rec` are the provider's own strings from the
/// raw payload, used when the level has no entry in the translation table.
pub fn classify(
    level: i64,
    language: Language,
    fallback_desc: Option<&str>,
    fallback_rec: Option<&str>,
) -> AqiClassification {
    match lookup(level, language) {
        Some((name, description, recommendation)) => AqiClassification {
            level,
            name: name.to_string(),
            description: description.to_string(),
            recommendation: recommendation.to_string(),
        },
        None => AqiClassification {
            level,
            name: fallback_desc.unwrap_or("Unknown").to_string(),
            description: fallback_desc.unwrap_or_default().to_string(),
            recommendation: fallback_rec.unwrap_or_default().to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_parsing() {
        assert_eq!(Language::from_str("en"), Some(Language::English));
        assert_eq!(Language::from_str("UK"), Some(Language::Ukrainian));
        assert_eq!(Language::from_str("ua"), Some(Language::Ukrainian));
        assert_eq!(Language::from_str("de"), None);
    }

    #[test]
    fn test_classify_known_levels() {
        let good = classify(1, Language::English, None, None);
        assert_eq!(good.name, "Good");
        assert_eq!(good.level, 1);

        let worst = classify(5, Language::English, None, None);
        assert_eq!(worst.name, "Very unhealthy");

        let uk = classify(2, Language::Ukrainian, None, None);
        assert_eq!(uk.name, "Помірний");
    }

    #[test]
    fn test_classify_falls_back_to_provider_strings() {
        let c = classify(
            7,
            Language::English,
            Some("Критичний"),
            Some("Не виходьте з дому"),
        );
        assert_eq!(c.level, 7);
        assert_eq!(c.name, "Критичний");
        assert_eq!(c.recommendation, "Не виходьте з дому");
    }

    #[test]
    fn test_classify_unknown_level_without_provider_strings() {
        let c = classify(0, Language::English, None, None);
        assert_eq!(c.name, "Unknown");
        assert!(c.description.is_empty());
    }
}
