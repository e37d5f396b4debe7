//! Suitability scoring engine
//!
//! Scores a day for outdoor activity on a 0-100 scale using independent
//! per-metric deductions, then maps the aggregate score to a verdict label.
//! The two passes are deliberate: the deduction pass records *which* hazards
//! contributed (as free-text detail strings), while the verdict is derived
//! solely from the aggregate score, so the label cannot flip-flop with the
//! order hazards are checked.

use crate::data::WeatherMetrics;

/// Overall suitability verdict, banded on the aggregate score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuitabilityLevel {
    /// Score >= 90
    Excellent,
    /// Score >= 75
    Good,
    /// Score >= 60
    Fair,
    /// Score >= 40
    Poor,
    /// Score < 40
    Dangerous,
}

impl SuitabilityLevel {
    /// Maps an aggregate score to its verdict band.
    pub fn from_score(score: i32) -> SuitabilityLevel {
        if score >= 90 {
            SuitabilityLevel::Excellent
        } else if score >= 75 {
            SuitabilityLevel::Good
        } else if score >= 60 {
            SuitabilityLevel::Fair
        } else if score >= 40 {
            SuitabilityLevel::Poor
        } else {
            SuitabilityLevel::Dangerous
        }
    }

    /// Returns the Turkish display label for the verdict.
    pub fn label(&self) -> &'static str {
        match self {
            SuitabilityLevel::Excellent => "Mükemmel",
            SuitabilityLevel::Good => "İyi",
            SuitabilityLevel::Fair => "Orta",
            SuitabilityLevel::Poor => "Kötü",
            SuitabilityLevel::Dangerous => "Tehlikeli",
        }
    }

    /// Returns the emoji shown next to the verdict.
    pub fn emoji(&self) -> &'static str {
        match self {
            SuitabilityLevel::Excellent => "✅",
            SuitabilityLevel::Good => "👍",
            SuitabilityLevel::Fair => "⚠️",
            SuitabilityLevel::Poor => "❌",
            SuitabilityLevel::Dangerous => "🚨",
        }
    }
}

/// Result of the suitability evaluation for a single day.
#[derive(Debug, Clone)]
pub struct SuitabilityAssessment {
    /// Aggregate score after all deductions; printed raw, never clamped
    pub score: i32,
    /// Verdict band derived from the score
    pub level: SuitabilityLevel,
    /// Free-text notes for every hazard band that fired
    pub details: Vec<String>,
}

/// Evaluates suitability for the given day's metrics.
///
/// Starts at 100 and applies independent deductions in a fixed order:
/// temperature, precipitation, wind, UV, humidity, visibility. Several
/// metrics use mutually exclusive bands (heat before cold, heavier rain
/// before lighter), so at most one deduction fires per metric.
pub fn assess(metrics: &WeatherMetrics) -> SuitabilityAssessment {
    let mut score = 100;
    let mut details = Vec::new();

    // Temperature
    if metrics.temp_max > 35.0 {
        score -= 30;
        details.push("Sıcaklık tehlikeli seviyede".to_string());
    } else if metrics.temp_max > 30.0 {
        score -= 15;
        details.push("Yüksek sıcaklık nedeniyle dikkatli ol".to_string());
    } else if metrics.temp_min < -10.0 {
        score -= 25;
        details.push("Dondurucu soğuk, donma riski".to_string());
    } else if metrics.temp_min < -5.0 {
        score -= 10;
        details.push("Soğuk hava, sıcak giyin".to_string());
    }

    // Precipitation
    if metrics.precipitation > 20.0 {
        score -= 40;
        details.push("Yoğun yağış bekleniyor".to_string());
    } else if metrics.precipitation > 10.0 {
        score -= 25;
        details.push("Orta şiddette yağış".to_string());
    } else if metrics.precipitation > 5.0 {
        score -= 15;
        details.push("Hafif yağış ihtimali".to_string());
    }

    // Wind
    if metrics.wind > 40.0 {
        score -= 30;
        details.push("Güçlü rüzgar, güvenlik riski".to_string());
    } else if metrics.wind > 25.0 {
        score -= 15;
        details.push("Orta şiddette rüzgar".to_string());
    }

    // UV index
    if metrics.uv_index > 8.0 {
        score -= 20;
        details.push("Çok yüksek UV indeksi".to_string());
    } else if metrics.uv_index > 6.0 {
        score -= 10;
        details.push("Yüksek UV indeksi".to_string());
    }

    // Humidity
    if metrics.humidity > 90.0 {
        score -= 15;
        details.push("Çok yüksek nem, bunaltıcı".to_string());
    } else if metrics.humidity > 80.0 {
        score -= 8;
        details.push("Yüksek nem".to_string());
    } else if metrics.humidity < 20.0 {
        score -= 5;
        details.push("Düşük nem, cilt kuruluğu".to_string());
    }

    // Visibility
    if metrics.visibility < 1.0 {
        score -= 25;
        details.push("Yoğun sis, görüş mesafesi çok düşük".to_string());
    } else if metrics.visibility < 5.0 {
        score -= 10;
        details.push("Sisli hava, dikkatli ol".to_string());
    }

    SuitabilityAssessment {
        score,
        level: SuitabilityLevel::from_score(score),
        details,
    }
}

/// Returns the Turkish label for a UV index value.
pub fn uv_label(uv_index: f64) -> &'static str {
    if uv_index > 8.0 {
        "Çok yüksek"
    } else if uv_index > 6.0 {
        "Yüksek"
    } else if uv_index > 3.0 {
        "Orta"
    } else {
        "Düşük"
    }
}

/// Maps an upstream comfort score to its overall-state label.
pub fn comfort_overall(score: i64) -> &'static str {
    if score >= 80 {
        "Mükemmel"
    } else if score >= 60 {
        "İyi"
    } else if score >= 40 {
        "Orta"
    } else {
        "Kötü"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(
        temp_max: f64,
        temp_min: f64,
        wind: f64,
        humidity: f64,
        precipitation: f64,
        uv_index: f64,
        visibility: f64,
    ) -> WeatherMetrics {
        WeatherMetrics {
            temp_max,
            temp_min,
            wind,
            humidity,
            precipitation,
            uv_index,
            visibility,
        }
    }

    fn mild_day() -> WeatherMetrics {
        metrics(25.5, 18.2, 15.3, 75.0, 2.1, 0.0, 10.0)
    }

    #[test]
    fn test_mild_day_scores_excellent() {
        let assessment = assess(&mild_day());
        assert_eq!(assessment.score, 100);
        assert_eq!(assessment.level, SuitabilityLevel::Excellent);
        assert!(assessment.details.is_empty());
    }

    #[test]
    fn test_heavy_rain_dominates_lighter_bands() {
        // 25mm fires only the >20 band, not the lighter ones below it
        let assessment = assess(&metrics(22.0, 15.0, 10.0, 60.0, 25.0, 0.0, 10.0));
        assert_eq!(assessment.score, 60);
        assert_eq!(assessment.level, SuitabilityLevel::Fair);
        assert_eq!(assessment.details, vec!["Yoğun yağış bekleniyor"]);
    }

    #[test]
    fn test_score_monotonic_in_precipitation() {
        let mut previous = i32::MAX;
        for step in 0..=250 {
            let precipitation = f64::from(step) / 10.0;
            let assessment = assess(&metrics(25.5, 18.2, 15.3, 75.0, precipitation, 0.0, 10.0));
            assert!(
                assessment.score <= previous,
                "score rose from {} to {} at {}mm",
                previous,
                assessment.score,
                precipitation
            );
            previous = assessment.score;
        }
    }

    #[test]
    fn test_deductions_accumulate_across_metrics() {
        // temp -30, rain -40, wind -30, uv -20, humidity -15, visibility -25
        let assessment = assess(&metrics(36.0, 20.0, 45.0, 95.0, 25.0, 9.0, 0.5));
        assert_eq!(assessment.score, 100 - 30 - 40 - 30 - 20 - 15 - 25);
        assert_eq!(assessment.level, SuitabilityLevel::Dangerous);
        assert_eq!(assessment.details.len(), 6);
    }

    #[test]
    fn test_score_is_not_clamped_below_zero() {
        let assessment = assess(&metrics(36.0, 20.0, 45.0, 95.0, 25.0, 9.0, 0.5));
        assert!(assessment.score < 0);
    }

    #[test]
    fn test_cold_bands_only_apply_when_heat_bands_do_not() {
        let assessment = assess(&metrics(2.0, -12.0, 5.0, 50.0, 0.0, 0.0, 10.0));
        assert_eq!(assessment.score, 75);
        assert_eq!(assessment.details, vec!["Dondurucu soğuk, donma riski"]);
    }

    #[test]
    fn test_level_band_boundaries() {
        assert_eq!(SuitabilityLevel::from_score(90), SuitabilityLevel::Excellent);
        assert_eq!(SuitabilityLevel::from_score(89), SuitabilityLevel::Good);
        assert_eq!(SuitabilityLevel::from_score(75), SuitabilityLevel::Good);
        assert_eq!(SuitabilityLevel::from_score(74), SuitabilityLevel::Fair);
        assert_eq!(SuitabilityLevel::from_score(60), SuitabilityLevel::Fair);
        assert_eq!(SuitabilityLevel::from_score(59), SuitabilityLevel::Poor);
        assert_eq!(SuitabilityLevel::from_score(40), SuitabilityLevel::Poor);
        assert_eq!(SuitabilityLevel::from_score(39), SuitabilityLevel::Dangerous);
        assert_eq!(SuitabilityLevel::from_score(-50), SuitabilityLevel::Dangerous);
    }

    #[test]
    fn test_level_labels_and_emoji() {
        assert_eq!(SuitabilityLevel::Excellent.label(), "Mükemmel");
        assert_eq!(SuitabilityLevel::Excellent.emoji(), "✅");
        assert_eq!(SuitabilityLevel::Good.label(), "İyi");
        assert_eq!(SuitabilityLevel::Fair.label(), "Orta");
        assert_eq!(SuitabilityLevel::Poor.label(), "Kötü");
        assert_eq!(SuitabilityLevel::Dangerous.label(), "Tehlikeli");
        assert_eq!(SuitabilityLevel::Dangerous.emoji(), "🚨");
    }

    #[test]
    fn test_uv_label_bands() {
        assert_eq!(uv_label(0.0), "Düşük");
        assert_eq!(uv_label(3.0), "Düşük");
        assert_eq!(uv_label(4.0), "Orta");
        assert_eq!(uv_label(6.5), "Yüksek");
        assert_eq!(uv_label(9.0), "Çok yüksek");
    }

    #[test]
    fn test_comfort_overall_bands() {
        assert_eq!(comfort_overall(85), "Mükemmel");
        assert_eq!(comfort_overall(80), "Mükemmel");
        assert_eq!(comfort_overall(75), "İyi");
        assert_eq!(comfort_overall(60), "İyi");
        assert_eq!(comfort_overall(45), "Orta");
        assert_eq!(comfort_overall(20), "Kötü");
    }
}
