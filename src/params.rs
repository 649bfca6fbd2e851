//! Measured parameter identification and sensor metadata
//!
//! The provider names each parameter in Ukrainian with embedded HTML markup,
//! e.g. `"ТЧ2,5,&nbsp;мкг/м<sup>3</sup>"`. This module cleans those names and
//! maps them to typed parameter kinds, and carries the per-kind metadata a
//! host platform needs to register one sensor entity per measurement.

use std::fmt;

use serde::Serialize;

/// A measured pollutant or weather parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    Pm25,
    Pm10,
    Pm1,
    Ozone,
    No2,
    So2,
    Co,
    Temperature,
    Humidity,
    Pressure,
    WindSpeed,
    WindDirection,
}

/// Ukrainian name fragments as published by the provider, matched in order.
/// "ТЧ10" must precede "ТЧ1" since the latter is a prefix of the former.
const NAME_PATTERNS: [(&str, ParameterKind); 12] = [
    ("ТЧ2,5", ParameterKind::Pm25),
    ("ТЧ10", ParameterKind::Pm10),
    ("ТЧ1", ParameterKind::Pm1),
    ("Озон – O", ParameterKind::Ozone),
    ("Діоксид азоту – NO", ParameterKind::No2),
    ("Діоксид сірки – SO", ParameterKind::So2),
    ("Оксид вуглецю – CO", ParameterKind::Co),
    ("Температура повітря", ParameterKind::Temperature),
    ("Вологість", ParameterKind::Humidity),
    ("Тиск", ParameterKind::Pressure),
    ("Швидкість вітру", ParameterKind::WindSpeed),
    ("Напрям вітру", ParameterKind::WindDirection),
];

impl ParameterKind {
    /// Identify a parameter from the provider's raw (HTML-laden) name.
    pub fn from_provider_name(raw_name: &str) -> Option<Self> {
        let clean = clean_html(raw_name);
        NAME_PATTERNS
            .iter()
            .find(|(pattern, _)| clean.contains(pattern))
            .map(|&(_, kind)| kind)
    }

    /// Short stable identifier, suitable for entity unique ids
    pub fn slug(self) -> &'static str {
        match self {
            ParameterKind::Pm25 => "pm25",
            ParameterKind::Pm10 => "pm10",
            ParameterKind::Pm1 => "pm1",
            ParameterKind::Ozone => "ozone",
            ParameterKind::No2 => "no2",
            ParameterKind::So2 => "so2",
            ParameterKind::Co => "co",
            ParameterKind::Temperature => "temperature",
            ParameterKind::Humidity => "humidity",
            ParameterKind::Pressure => "pressure",
            ParameterKind::WindSpeed => "wind_speed",
            ParameterKind::WindDirection => "wind_direction",
        }
    }

    /// English display name
    pub fn display_name(self) -> &'static str {
        match self {
            ParameterKind::Pm25 => "PM2.5",
            ParameterKind::Pm10 => "PM10",
            ParameterKind::Pm1 => "PM1",
            ParameterKind::Ozone => "Ozone",
            ParameterKind::No2 => "Nitrogen Dioxide",
            ParameterKind::So2 => "Sulfur Dioxide",
            ParameterKind::Co => "Carbon Monoxide",
            ParameterKind::Temperature => "Temperature",
            ParameterKind::Humidity => "Humidity",
            ParameterKind::Pressure => "Pressure",
            ParameterKind::WindSpeed => "Wind Speed",
            ParameterKind::WindDirection => "Wind Direction",
        }
    }

    /// Native unit of measurement; the provider already reports SI-adjacent units
    pub fn unit(self) -> &'static str {
        match self {
            ParameterKind::Pm25
            | ParameterKind::Pm10
            | ParameterKind::Pm1
            | ParameterKind::Ozone
            | ParameterKind::No2
            | ParameterKind::So2
            | ParameterKind::Co => "µg/m³",
            ParameterKind::Temperature => "°C",
            ParameterKind::Humidity => "%",
            ParameterKind::Pressure => "hPa",
            ParameterKind::WindSpeed => "m/s",
            ParameterKind::WindDirection => "°",
        }
    }

    /// Material Design icon name for UI display
    pub fn icon(self) -> &'static str {
        match self {
            ParameterKind::Pm25 | ParameterKind::Pm10 | ParameterKind::Pm1 => "mdi:dots-hexagon",
            ParameterKind::Ozone | ParameterKind::No2 | ParameterKind::So2 => "mdi:molecule",
            ParameterKind::Co => "mdi:molecule-co",
            ParameterKind::Temperature => "mdi:thermometer",
            ParameterKind::Humidity => "mdi:water-percent",
            ParameterKind::Pressure => "mdi:gauge",
            ParameterKind::WindSpeed => "mdi:weather-windy",
            ParameterKind::WindDirection => "mdi:compass",
        }
    }

    /// Host-platform device class, where one exists
    pub fn device_class(self) -> Option<&'static str> {
        match self {
            ParameterKind::Pm25 => Some("pm25"),
            ParameterKind::Pm10 => Some("pm10"),
            ParameterKind::Pm1 => Some("pm1"),
            ParameterKind::Ozone => Some("ozone"),
            ParameterKind::No2 => Some("nitrogen_dioxide"),
            ParameterKind::So2 => Some("sulphur_dioxide"),
            ParameterKind::Co => Some("carbon_monoxide"),
            ParameterKind::Temperature => Some("temperature"),
            ParameterKind::Humidity => Some("humidity"),
            ParameterKind::Pressure => Some("atmospheric_pressure"),
            ParameterKind::WindSpeed => Some("wind_speed"),
            ParameterKind::WindDirection => None,
        }
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Strip HTML tags, decode entities and collapse whitespace in a provider name.
pub fn clean_html(raw: &str) -> String {
    let mut text = String::with_capacity(raw.len());
    let mut in_tag = false;
    for c in raw.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => text.push(c),
            _ => {}
        }
    }
    let text = decode_entities(&text);
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decode the small fixed set of entities the provider emits in names.
fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_html() {
        assert_eq!(clean_html("ТЧ2,5,&nbsp;мкг/м<sup>3</sup>"), "ТЧ2,5, мкг/м3");
        assert_eq!(
            clean_html("Озон – O<sub>3</sub>,&nbsp;мкг/м<sup>3</sup>"),
            "Озон – O3, мкг/м3"
        );
        assert_eq!(clean_html("  Вологість,   % "), "Вологість, %");
    }

    #[test]
    fn test_from_provider_name() {
        assert_eq!(
            ParameterKind::from_provider_name("ТЧ2,5,&nbsp;мкг/м<sup>3</sup>"),
            Some(ParameterKind::Pm25)
        );
        assert_eq!(
            ParameterKind::from_provider_name("ТЧ10,&nbsp;мкг/м<sup>3</sup>"),
            Some(ParameterKind::Pm10)
        );
        assert_eq!(
            ParameterKind::from_provider_name("ТЧ1,&nbsp;мкг/м<sup>3</sup>"),
            Some(ParameterKind::Pm1)
        );
        assert_eq!(
            ParameterKind::from_provider_name("Діоксид азоту – NO<sub>2</sub>"),
            Some(ParameterKind::No2)
        );
        assert_eq!(
            ParameterKind::from_provider_name("Температура повітря, °С"),
            Some(ParameterKind::Temperature)
        );
        assert_eq!(
            ParameterKind::from_provider_name("Напрям вітру, °"),
            Some(ParameterKind::WindDirection)
        );
        assert_eq!(ParameterKind::from_provider_name("Радіація"), None);
    }

    #[test]
    fn test_pm10_not_shadowed_by_pm1() {
        // "ТЧ1" is a prefix of "ТЧ10"; ordering in the pattern table must
        // keep PM10 from being misread as PM1.
        assert_eq!(
            ParameterKind::from_provider_name("ТЧ10"),
            Some(ParameterKind::Pm10)
        );
        assert_eq!(
            ParameterKind::from_provider_name("ТЧ1"),
            Some(ParameterKind::Pm1)
        );
    }

    #[test]
    fn test_sensor_metadata() {
        assert_eq!(ParameterKind::Pm25.unit(), "µg/m³");
        assert_eq!(ParameterKind::Pressure.unit(), "hPa");
        assert_eq!(ParameterKind::WindSpeed.unit(), "m/s");
        assert_eq!(ParameterKind::Co.icon(), "mdi:molecule-co");
        assert_eq!(ParameterKind::Humidity.device_class(), Some("humidity"));
        assert_eq!(ParameterKind::WindDirection.device_class(), None);
        assert_eq!(ParameterKind::Pm25.slug(), "pm25");
    }
}
