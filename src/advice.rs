//! Time-of-day, clothing, safety and health heuristics
//!
//! Each function in this module turns the day's metrics into a set of
//! Turkish advice strings for one report section. The thresholds are fixed
//! rule bands; nothing here is a physical model.

use crate::data::WeatherMetrics;

/// Time-of-day advice for the three fixed windows.
#[derive(Debug, Clone)]
pub struct TimeAdvice {
    /// Free-text advice lines, in window order (morning, afternoon, evening)
    pub recommendations: Vec<String>,
    /// Windows whose favorable-condition test passed
    pub optimal_times: Vec<String>,
    /// Running score for the morning window (baseline 50)
    pub morning_score: i32,
    /// Running score for the afternoon window (baseline 50)
    pub afternoon_score: i32,
    /// Running score for the evening window (baseline 50)
    pub evening_score: i32,
}

/// Scores the three fixed windows (morning 6-10, afternoon 10-16,
/// evening 16-20) and collects per-window advice.
///
/// Each window starts at 50 and gains or loses fixed deltas when its
/// temperature/wind/UV conditions fire. Membership in `optimal_times` is
/// decided by each window's favorable-condition test alone; the running
/// scores are reported but do not gate the list.
pub fn time_of_day(metrics: &WeatherMetrics) -> TimeAdvice {
    let mut recommendations = Vec::new();
    let mut optimal_times = Vec::new();

    // Morning (6-10)
    let mut morning_score = 50;
    if metrics.temp_min > 15.0 && metrics.temp_min < 25.0 && metrics.wind < 20.0 {
        morning_score += 30;
        optimal_times.push("Sabah 6-10 arası ideal".to_string());
    }
    if metrics.temp_max > 30.0 {
        morning_score += 20;
        recommendations.push("Sabah erken saatler (6-9 arası) en uygun".to_string());
    }
    if metrics.wind > 20.0 {
        morning_score -= 15;
        recommendations.push("Sabah rüzgar daha az olabilir".to_string());
    }

    // Afternoon (10-16)
    let mut afternoon_score = 50;
    if metrics.temp_max < 30.0 && metrics.temp_max > 20.0 && metrics.wind < 15.0 {
        afternoon_score += 25;
        optimal_times.push("Öğleden sonra 12-16 arası uygun".to_string());
    }
    if metrics.temp_max > 35.0 {
        afternoon_score -= 30;
        recommendations.push("Öğle saatlerinden kaçın (11-15 arası)".to_string());
    }
    if metrics.uv_index > 6.0 {
        afternoon_score -= 20;
        recommendations.push("Öğle saatlerinde UV yüksek, gölgede kal".to_string());
    }

    // Evening (16-20)
    let mut evening_score = 50;
    if metrics.temp_max > 25.0 && metrics.temp_min > 15.0 && metrics.wind < 20.0 {
        evening_score += 25;
        optimal_times.push("Akşam 16-20 arası güzel".to_string());
    }
    if metrics.temp_max > 30.0 {
        evening_score += 20;
        recommendations.push("Akşam saatleri (18-20 arası) daha serin".to_string());
    }
    if metrics.wind > 25.0 {
        evening_score -= 10;
        recommendations.push("Akşam rüzgar azalabilir".to_string());
    }

    if recommendations.is_empty() {
        recommendations.push("Hava koşulları genel olarak uygun".to_string());
    }

    TimeAdvice {
        recommendations,
        optimal_times,
        morning_score,
        afternoon_score,
        evening_score,
    }
}

/// Clothing advice: a base layer plus additive protection layers.
#[derive(Debug, Clone)]
pub struct ClothingAdvice {
    /// Full-sentence recommendations
    pub recommendations: Vec<String>,
    /// Short emoji-prefixed labels mirroring the same triggers
    pub priority: Vec<String>,
}

/// Builds clothing advice for the day.
///
/// Exactly one base-layer garment is chosen from five mutually exclusive
/// temperature bands (<10, <15, <20, <25, >=25 degrees Celsius); wind, rain,
/// sun and humidity layers are appended independently.
pub fn clothing(metrics: &WeatherMetrics) -> ClothingAdvice {
    let mut recommendations = Vec::new();
    let mut priority = Vec::new();

    // Base layer ladder
    if metrics.temp_max < 10.0 {
        recommendations.push("Kalın mont veya kışlık ceket (0-10°C)".to_string());
        priority.push("🔥 Kalın mont".to_string());
    } else if metrics.temp_max < 15.0 {
        recommendations.push("Orta kalınlıkta mont veya hırka (10-15°C)".to_string());
        priority.push("🧥 Orta mont".to_string());
    } else if metrics.temp_max < 20.0 {
        recommendations.push("Hafif ceket veya uzun kollu (15-20°C)".to_string());
        priority.push("👔 Hafif ceket".to_string());
    } else if metrics.temp_max < 25.0 {
        recommendations.push("T-shirt veya ince gömlek (20-25°C)".to_string());
        priority.push("👕 T-shirt".to_string());
    } else {
        recommendations.push("Çok hafif giysiler, terletmeyen kumaş (25°C+)".to_string());
        priority.push("🩳 Hafif giysiler".to_string());
    }

    // Wind protection
    if metrics.wind > 15.0 {
        recommendations.push("Rüzgar geçirmeyen ceket veya rüzgarlık".to_string());
        priority.push("💨 Rüzgarlık".to_string());
    }

    // Rain protection
    if metrics.precipitation > 0.0 {
        recommendations.push("Su geçirmez mont veya yağmurluk".to_string());
        priority.push("☔ Yağmurluk".to_string());
        recommendations.push("Su geçirmez ayakkabı veya bot".to_string());
        priority.push("👢 Su geçirmez ayakkabı".to_string());
    }

    // Sun protection, three additive thresholds
    if metrics.uv_index > 3.0 {
        recommendations.push("Güneş gözlüğü (UV korumalı)".to_string());
        priority.push("🕶️ Güneş gözlüğü".to_string());
    }
    if metrics.uv_index > 5.0 {
        recommendations.push("Geniş kenarlı şapka veya kasket".to_string());
        priority.push("🧢 Şapka".to_string());
    }
    if metrics.uv_index > 7.0 {
        recommendations.push("Uzun kollu güneş korumalı giysi".to_string());
        priority.push("👔 Uzun kollu".to_string());
    }

    // Humidity-driven fabric advice
    if metrics.humidity > 70.0 {
        recommendations.push("Nefes alabilen, terletmeyen kumaşlar (pamuk, keten)".to_string());
        priority.push("🌿 Nefes alabilen kumaş".to_string());
    }
    if metrics.humidity > 85.0 {
        recommendations.push("Yedek giysi al, terleme olabilir".to_string());
        priority.push("👕 Yedek giysi".to_string());
    }

    ClothingAdvice {
        recommendations,
        priority,
    }
}

/// Safety warnings with matching short priority labels.
#[derive(Debug, Clone)]
pub struct SafetyAdvice {
    /// Full-sentence warnings
    pub tips: Vec<String>,
    /// Short emoji-prefixed risk labels
    pub priority: Vec<String>,
}

/// Collects safety warnings across all metrics.
///
/// Thresholds are checked independently; several thresholds on the same
/// metric can all fire (both the >30 and >35 temperature warnings appear on
/// a 36 degree day).
pub fn safety(metrics: &WeatherMetrics) -> SafetyAdvice {
    let mut tips = Vec::new();
    let mut priority = Vec::new();

    // Heat
    if metrics.temp_max > 30.0 {
        tips.push("Sıcak çarpması riski: Bol su iç, gölgede kal".to_string());
        priority.push("🔥 Sıcak çarpması riski".to_string());
    }
    if metrics.temp_max > 35.0 {
        tips.push("Tehlikeli sıcaklık: Açık hava aktivitelerinden kaçın".to_string());
        priority.push("🚨 Tehlikeli sıcaklık".to_string());
    }
    if metrics.heat_index() > 40.0 {
        tips.push("Hissedilen sıcaklık çok yüksek, dışarı çıkmayın".to_string());
        priority.push("🌡️ Yüksek hissedilen sıcaklık".to_string());
    }

    // Cold
    if metrics.temp_min < -5.0 {
        tips.push("Donma riski: Kalın giyin, uzun süre dışarıda kalmayın".to_string());
        priority.push("❄️ Donma riski".to_string());
    }
    if metrics.wind_chill() < -10.0 {
        tips.push("Rüzgar soğuğu tehlikeli, korunaklı alanlarda kalın".to_string());
        priority.push("💨 Rüzgar soğuğu".to_string());
    }

    // Wind
    if metrics.wind > 25.0 {
        tips.push("Güçlü rüzgar: Düşen objelere dikkat edin".to_string());
        priority.push("💨 Güçlü rüzgar".to_string());
    }
    if metrics.wind > 40.0 {
        tips.push("Tehlikeli rüzgar: Açık hava aktivitelerinden kaçının".to_string());
        priority.push("🚨 Tehlikeli rüzgar".to_string());
    }

    // Rain
    if metrics.precipitation > 10.0 {
        tips.push("Yoğun yağış: Islak yüzeylerde kayma riski".to_string());
        priority.push("🌧️ Kayma riski".to_string());
    }
    if metrics.precipitation > 20.0 {
        tips.push("Aşırı yağış: Sel riski, yüksek yerlere çıkın".to_string());
        priority.push("🌊 Sel riski".to_string());
    }

    // UV
    if metrics.uv_index > 6.0 {
        tips.push("Yüksek UV: Güneş yanığı riski, korunun".to_string());
        priority.push("☀️ Güneş yanığı riski".to_string());
    }
    if metrics.uv_index > 8.0 {
        tips.push("Çok yüksek UV: 10:00-16:00 arası güneşten kaçının".to_string());
        priority.push("🚨 Yüksek UV riski".to_string());
    }

    // Visibility
    if metrics.visibility < 5.0 {
        tips.push("Düşük görüş: Dikkatli hareket edin, reflektör kullanın".to_string());
        priority.push("🌫️ Düşük görüş".to_string());
    }
    if metrics.visibility < 1.0 {
        tips.push("Çok düşük görüş: Açık hava aktivitelerinden kaçının".to_string());
        priority.push("🚨 Çok düşük görüş".to_string());
    }

    SafetyAdvice { tips, priority }
}

/// Cross-metric health tips.
pub fn health(metrics: &WeatherMetrics) -> Vec<String> {
    let mut tips = Vec::new();
    if metrics.humidity > 80.0 {
        tips.push("Yüksek nem: Nefes alabilen giysiler giyin".to_string());
    }
    if metrics.temperature_range() > 15.0 {
        tips.push("Büyük sıcaklık farkı: Katmanlı giyinin".to_string());
    }
    if metrics.wind > 20.0 && metrics.temp_max < 20.0 {
        tips.push("Rüzgar + soğuk: Ekstra koruma gerekli".to_string());
    }
    tips
}
