//! Hardcoded sample data backing every screen.
//!
//! This is the entire "dataset" of the application: static arrays for
//! parcels, alerts, weather, soil-moisture history, and sensors. There
//! is no network layer and no persistence; screens only filter and
//! format what lives here.

use agriview_types::{AlertStatus, ParcelId, Severity};

// ============================================================================
// Parcels
// ============================================================================

/// Overall condition of a parcel, as shown on the dashboard cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Good,
    Watch,
    Critical,
}

impl Condition {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Condition::Good => "Good",
            Condition::Watch => "Watch",
            Condition::Critical => "Critical",
        }
    }
}

/// Irrigation details for the map screen.
#[derive(Debug, Clone, Copy)]
pub struct Irrigation {
    pub system: &'static str,
    pub last_cycle: &'static str,
    pub next_cycle: &'static str,
    /// Water used over the last 7 days, display string.
    pub water_used: &'static str,
    /// Same figure as a share of the weekly budget, for the gauge.
    pub water_used_pct: u16,
    pub wind: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Parcel {
    pub id: &'static str,
    pub name: &'static str,
    pub crop: &'static str,
    pub surface: &'static str,
    pub surface_ha: u16,
    pub condition: Condition,
    pub soil_humidity: &'static str,
    pub temperature: &'static str,
    pub irrigation: Irrigation,
}

pub const PARCELS: [Parcel; 3] = [
    Parcel {
        id: "A",
        name: "Parcel A",
        crop: "Wheat",
        surface: "12 ha",
        surface_ha: 12,
        condition: Condition::Good,
        soil_humidity: "45%",
        temperature: "24°C",
        irrigation: Irrigation {
            system: "Sprinkler irrigation",
            last_cycle: "3 days ago",
            next_cycle: "In 2 days",
            water_used: "45,000 L",
            water_used_pct: 68,
            wind: "12 km/h",
        },
    },
    Parcel {
        id: "B",
        name: "Parcel B",
        crop: "Corn",
        surface: "8 ha",
        surface_ha: 8,
        condition: Condition::Watch,
        soil_humidity: "38%",
        temperature: "26°C",
        irrigation: Irrigation {
            system: "Drip irrigation",
            last_cycle: "1 day ago",
            next_cycle: "Today",
            water_used: "28,000 L",
            water_used_pct: 42,
            wind: "8 km/h",
        },
    },
    Parcel {
        id: "C",
        name: "Parcel C",
        crop: "Tomatoes",
        surface: "5 ha",
        surface_ha: 5,
        condition: Condition::Critical,
        soil_humidity: "52%",
        temperature: "25°C",
        irrigation: Irrigation {
            system: "Localized irrigation",
            last_cycle: "2 days ago",
            next_cycle: "Tomorrow",
            water_used: "32,000 L",
            water_used_pct: 48,
            wind: "10 km/h",
        },
    },
];

/// Total cultivated surface across all parcels, in hectares.
#[must_use]
pub fn total_surface_ha() -> u16 {
    PARCELS.iter().map(|p| p.surface_ha).sum()
}

/// Resolve a parcel id to its fixture, falling back to parcel A for
/// ids the dataset does not know. The navigation core passes parcel
/// ids through untouched; this display fallback lives here.
#[must_use]
pub fn parcel_or_default(id: &ParcelId) -> &'static Parcel {
    PARCELS
        .iter()
        .find(|p| p.id == id.as_str())
        .unwrap_or(&PARCELS[0])
}

// ============================================================================
// Dashboard
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct UrgentAction {
    pub title: &'static str,
    pub parcel: &'static str,
    pub description: &'static str,
    pub severity: Severity,
}

pub const URGENT_ACTIONS: [UrgentAction; 3] = [
    UrgentAction {
        title: "Disease detected",
        parcel: "Parcel C",
        description: "Possible downy mildew detected",
        severity: Severity::Urgent,
    },
    UrgentAction {
        title: "Irrigation recommended",
        parcel: "Parcel A",
        description: "Soil humidity: 25%",
        severity: Severity::Important,
    },
    UrgentAction {
        title: "High temperature",
        parcel: "Parcel B",
        description: "32°C expected tomorrow",
        severity: Severity::Watch,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct FarmProfile {
    pub name: &'static str,
    pub role: &'static str,
    pub region: &'static str,
}

pub const FARM: FarmProfile = FarmProfile {
    name: "Martin Farm",
    role: "Farm operator",
    region: "Beauce",
};

// ============================================================================
// Alerts
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct Alert {
    pub kind: &'static str,
    pub title: &'static str,
    pub parcel: &'static str,
    pub description: &'static str,
    pub timestamp: &'static str,
    pub severity: Severity,
    pub status: AlertStatus,
}

pub const ALERTS: [Alert; 7] = [
    Alert {
        kind: "Disease",
        title: "Possible downy mildew detected",
        parcel: "Parcel C",
        description: "Conditions favorable to downy mildew observed. Inspection recommended.",
        timestamp: "1h ago",
        severity: Severity::Urgent,
        status: AlertStatus::Active,
    },
    Alert {
        kind: "Irrigation",
        title: "Irrigation recommended",
        parcel: "Parcel A",
        description: "Soil humidity below the critical threshold (25%). Irrigation needed.",
        timestamp: "2h ago",
        severity: Severity::Important,
        status: AlertStatus::Active,
    },
    Alert {
        kind: "Temperature",
        title: "Heat wave expected",
        parcel: "Parcel B",
        description: "High temperatures expected (>32°C) over the next 3 days.",
        timestamp: "3h ago",
        severity: Severity::Watch,
        status: AlertStatus::Active,
    },
    Alert {
        kind: "Weather",
        title: "Rain expected",
        parcel: "All parcels",
        description: "Precipitation expected (15-20mm) within 24h. Adjust irrigation.",
        timestamp: "5h ago",
        severity: Severity::Info,
        status: AlertStatus::Active,
    },
    Alert {
        kind: "Wind",
        title: "Strong winds expected",
        parcel: "Parcel A",
        description: "Winds of 40-50 km/h expected. Check structure stability.",
        timestamp: "6h ago",
        severity: Severity::Watch,
        status: AlertStatus::Active,
    },
    Alert {
        kind: "Irrigation",
        title: "Irrigation completed",
        parcel: "Parcel C",
        description: "Irrigation cycle finished successfully. Soil humidity: 52%.",
        timestamp: "Yesterday",
        severity: Severity::Info,
        status: AlertStatus::Resolved,
    },
    Alert {
        kind: "Growth",
        title: "Critical growth stage",
        parcel: "Parcel B",
        description: "Corn entering flowering stage. Closer monitoring recommended.",
        timestamp: "Yesterday",
        severity: Severity::Important,
        status: AlertStatus::Active,
    },
];

/// Count of alerts still needing attention.
#[must_use]
pub fn active_alert_count() -> usize {
    ALERTS
        .iter()
        .filter(|a| a.status == AlertStatus::Active)
        .count()
}

/// Count of resolved alerts.
#[must_use]
pub fn resolved_alert_count() -> usize {
    ALERTS.len() - active_alert_count()
}

// ============================================================================
// Weather
// ============================================================================

/// Sky condition, mapped to glyphs by the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sky {
    Sun,
    Cloud,
    Rain,
}

#[derive(Debug, Clone, Copy)]
pub struct CurrentWeather {
    pub temp_c: i16,
    pub feels_like_c: i16,
    pub condition: &'static str,
    pub sky: Sky,
    pub humidity_pct: u8,
    pub wind_kmh: u8,
    pub pressure_hpa: u16,
    pub visibility_km: u8,
    pub uv_index: u8,
    pub sunrise: &'static str,
    pub sunset: &'static str,
}

pub const CURRENT_WEATHER: CurrentWeather = CurrentWeather {
    temp_c: 18,
    feels_like_c: 16,
    condition: "Partly cloudy",
    sky: Sky::Cloud,
    humidity_pct: 65,
    wind_kmh: 12,
    pressure_hpa: 1013,
    visibility_km: 10,
    uv_index: 4,
    sunrise: "06:45",
    sunset: "20:30",
};

#[derive(Debug, Clone, Copy)]
pub struct HourlyForecast {
    pub time: &'static str,
    pub temp_c: i16,
    pub sky: Sky,
    pub precipitation_pct: u8,
}

pub const HOURLY_FORECAST: [HourlyForecast; 6] = [
    HourlyForecast { time: "14:00", temp_c: 18, sky: Sky::Cloud, precipitation_pct: 10 },
    HourlyForecast { time: "15:00", temp_c: 19, sky: Sky::Sun, precipitation_pct: 5 },
    HourlyForecast { time: "16:00", temp_c: 20, sky: Sky::Sun, precipitation_pct: 0 },
    HourlyForecast { time: "17:00", temp_c: 19, sky: Sky::Cloud, precipitation_pct: 15 },
    HourlyForecast { time: "18:00", temp_c: 17, sky: Sky::Rain, precipitation_pct: 40 },
    HourlyForecast { time: "19:00", temp_c: 16, sky: Sky::Rain, precipitation_pct: 60 },
];

#[derive(Debug, Clone, Copy)]
pub struct DailyForecast {
    pub day: &'static str,
    pub max_c: i16,
    pub min_c: i16,
    pub sky: Sky,
    pub precipitation_pct: u8,
    pub description: &'static str,
}

pub const DAILY_FORECAST: [DailyForecast; 7] = [
    DailyForecast { day: "Today", max_c: 20, min_c: 12, sky: Sky::Cloud, precipitation_pct: 40, description: "Cloudy with showers" },
    DailyForecast { day: "Tomorrow", max_c: 22, min_c: 14, sky: Sky::Sun, precipitation_pct: 10, description: "Sunny" },
    DailyForecast { day: "Monday", max_c: 24, min_c: 15, sky: Sky::Sun, precipitation_pct: 5, description: "Fine weather" },
    DailyForecast { day: "Tuesday", max_c: 21, min_c: 13, sky: Sky::Rain, precipitation_pct: 70, description: "Moderate rain" },
    DailyForecast { day: "Wednesday", max_c: 19, min_c: 11, sky: Sky::Rain, precipitation_pct: 80, description: "Heavy rain" },
    DailyForecast { day: "Thursday", max_c: 23, min_c: 14, sky: Sky::Cloud, precipitation_pct: 20, description: "Partly cloudy" },
    DailyForecast { day: "Friday", max_c: 25, min_c: 16, sky: Sky::Sun, precipitation_pct: 0, description: "Sunny" },
];

#[derive(Debug, Clone, Copy)]
pub struct WeatherAdvisory {
    pub severity: Severity,
    pub message: &'static str,
    pub action: &'static str,
}

pub const WEATHER_ADVISORIES: [WeatherAdvisory; 2] = [
    WeatherAdvisory {
        severity: Severity::Watch,
        message: "Rain alert: 15mm expected tomorrow afternoon",
        action: "Avoid irrigation",
    },
    WeatherAdvisory {
        severity: Severity::Info,
        message: "Ideal conditions for crop treatment on Wednesday",
        action: "Plan treatment",
    },
];

// ============================================================================
// Parcel detail
// ============================================================================

/// Soil moisture readings for one day, at three probe depths (percent).
#[derive(Debug, Clone, Copy)]
pub struct SoilMoistureDay {
    pub day: &'static str,
    pub depth_30cm: f64,
    pub depth_50cm: f64,
    pub depth_80cm: f64,
}

pub const SOIL_MOISTURE_WEEK: [SoilMoistureDay; 7] = [
    SoilMoistureDay { day: "1", depth_30cm: 35.0, depth_50cm: 38.0, depth_80cm: 42.0 },
    SoilMoistureDay { day: "2", depth_30cm: 40.0, depth_50cm: 42.0, depth_80cm: 45.0 },
    SoilMoistureDay { day: "3", depth_30cm: 32.0, depth_50cm: 35.0, depth_80cm: 40.0 },
    SoilMoistureDay { day: "4", depth_30cm: 38.0, depth_50cm: 40.0, depth_80cm: 43.0 },
    SoilMoistureDay { day: "5", depth_30cm: 30.0, depth_50cm: 33.0, depth_80cm: 38.0 },
    SoilMoistureDay { day: "6", depth_30cm: 42.0, depth_50cm: 45.0, depth_80cm: 48.0 },
    SoilMoistureDay { day: "7", depth_30cm: 38.0, depth_50cm: 40.0, depth_80cm: 44.0 },
];

/// Live sensor tiles on the parcel detail screen.
#[derive(Debug, Clone, Copy)]
pub struct ParcelLiveData {
    pub soil_humidity: &'static str,
    pub humidity_30cm: &'static str,
    pub humidity_50cm: &'static str,
    pub humidity_80cm: &'static str,
    pub soil_temp: &'static str,
    pub soil_temp_trend: &'static str,
    pub co2: &'static str,
    pub co2_level: &'static str,
}

pub const PARCEL_LIVE: ParcelLiveData = ParcelLiveData {
    soil_humidity: "38%",
    humidity_30cm: "35%",
    humidity_50cm: "38%",
    humidity_80cm: "25%",
    soil_temp: "22°C",
    soil_temp_trend: "+0.5°C vs yesterday",
    co2: "110 ppm",
    co2_level: "Low, trending up",
};

#[derive(Debug, Clone, Copy)]
pub struct Recommendation {
    pub title: &'static str,
    pub detail: &'static str,
}

pub const RECOMMENDATION: Recommendation = Recommendation {
    title: "Recommended irrigation: 25mm",
    detail: "The soil is dry at depth. Irrigation is needed to avoid water stress.",
};

#[derive(Debug, Clone, Copy)]
pub struct Operation {
    pub kind: &'static str,
    pub detail: &'static str,
    pub date: &'static str,
}

pub const OPERATIONS_LOG: [Operation; 3] = [
    Operation { kind: "Irrigation", detail: "20mm", date: "15/07/2024 - 08:30" },
    Operation { kind: "NPK fertilization", detail: "", date: "11/06 - 11:00" },
    Operation { kind: "Weather event: rain (15mm)", detail: "", date: "10/07 - 16:00" },
];

// ============================================================================
// History & analysis
// ============================================================================

/// One point of the soil-humidity trend shown on the history screen.
#[derive(Debug, Clone, Copy)]
pub struct TrendPoint {
    pub date: &'static str,
    pub value: f64,
}

pub const MOISTURE_TREND: [TrendPoint; 7] = [
    TrendPoint { date: "15/07", value: 42.0 },
    TrendPoint { date: "16/07", value: 38.0 },
    TrendPoint { date: "17/07", value: 45.0 },
    TrendPoint { date: "18/07", value: 40.0 },
    TrendPoint { date: "19/07", value: 48.0 },
    TrendPoint { date: "20/07", value: 35.0 },
    TrendPoint { date: "21/07", value: 52.0 },
];

pub const INTERVENTIONS: [Operation; 3] = [
    Operation { kind: "Irrigation", detail: "25mm", date: "14/07 - 08:30" },
    Operation { kind: "Fertilization", detail: "Type: NPK", date: "12/07 - 11:00" },
    Operation { kind: "Irrigation", detail: "20mm", date: "10/07 - 09:00" },
];

// ============================================================================
// Settings
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct Sensor {
    pub name: &'static str,
    pub parcel: &'static str,
    pub battery_pct: u8,
}

pub const SENSORS: [Sensor; 2] = [
    Sensor { name: "Humidity sensor #1", parcel: "Parcel A", battery_pct: 92 },
    Sensor { name: "Nutrient sensor #2", parcel: "Parcel B", battery_pct: 40 },
];

/// Soil humidity alert thresholds (display only).
pub const HUMIDITY_THRESHOLDS: (&str, &str) = ("30%", "75%");

#[cfg(test)]
mod tests {
    use agriview_types::ParcelId;

    use super::{ALERTS, PARCELS, active_alert_count, parcel_or_default, resolved_alert_count};

    #[test]
    fn known_parcel_ids_resolve() {
        for parcel in &PARCELS {
            let resolved = parcel_or_default(&ParcelId::new(parcel.id));
            assert_eq!(resolved.id, parcel.id);
        }
    }

    #[test]
    fn unknown_parcel_id_falls_back_to_first() {
        let resolved = parcel_or_default(&ParcelId::new("Z"));
        assert_eq!(resolved.id, "A");
    }

    #[test]
    fn alert_counts_partition_the_dataset() {
        assert_eq!(active_alert_count() + resolved_alert_count(), ALERTS.len());
        assert_eq!(resolved_alert_count(), 1);
    }
}
