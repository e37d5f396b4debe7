//! Recommendation report assembly
//!
//! [`RecommendationBuilder`] turns a request envelope into one formatted
//! Turkish text block. Failures while assembling the full report are caught
//! internally and degraded to a one-line fallback summary; only when the
//! fallback itself cannot be built does an error reach the caller.

use chrono::{DateTime, Local};
use thiserror::Error;

use crate::activity::{activity_advice, brief_tips};
use crate::advice::{clothing, health, safety, time_of_day};
use crate::data::{InputError, RecommendationRequest, WeatherMetrics};
use crate::suitability::{assess, comfort_overall, uv_label};

/// Errors surfaced to the caller by [`RecommendationBuilder::build`].
///
/// The builder swallows recoverable failures by degrading to the fallback
/// summary; this error means even the fallback could not be produced.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The weather record lacks the fields the fallback summary reads
    #[error("fallback summary unavailable: {0}")]
    FallbackUnavailable(#[source] InputError),
}

/// Which report layout to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReportVariant {
    /// The detailed multi-section report with scoring and timestamp
    Full,
    /// The short single-pass report
    Brief,
}

/// Builds recommendation reports from request envelopes.
#[derive(Debug, Clone)]
pub struct RecommendationBuilder {
    variant: ReportVariant,
    /// Fixed timestamp for the report footer; `None` reads the wall clock
    timestamp: Option<DateTime<Local>>,
}

impl Default for RecommendationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationBuilder {
    /// Creates a builder for the detailed report.
    pub fn new() -> Self {
        Self {
            variant: ReportVariant::Full,
            timestamp: None,
        }
    }

    /// Switches to the short report layout.
    pub fn brief(mut self) -> Self {
        self.variant = ReportVariant::Brief;
        self
    }

    /// Pins the footer timestamp instead of reading the wall clock.
    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Builds the recommendation text for a request.
    ///
    /// Missing fields inside the envelope degrade to the fallback summary
    /// (with a note on stderr). The fallback substitutes "Orta"/50 for a
    /// missing comfort index but reads the weather record unguarded, so a
    /// weather record without temperature or humidity fails outright. That
    /// asymmetry is inherited behavior, kept intentionally.
    pub fn build(&self, request: &RecommendationRequest) -> Result<String, ReportError> {
        let rendered = match self.variant {
            ReportVariant::Full => self.render_full(request),
            ReportVariant::Brief => self.render_brief(request),
        };
        match rendered {
            Ok(text) => Ok(text),
            Err(err) => {
                eprintln!("recommendation degraded to fallback summary: {err}");
                fallback_summary(request)
            }
        }
    }

    /// Renders the detailed multi-section report.
    fn render_full(&self, request: &RecommendationRequest) -> Result<String, InputError> {
        let metrics = WeatherMetrics::from_request(request)?;
        let comfort_score = request
            .comfort_index
            .score
            .ok_or(InputError::MissingComfortField("score"))?;
        let comfort_level = request
            .comfort_index
            .level
            .as_deref()
            .ok_or(InputError::MissingComfortField("level"))?;

        let assessment = assess(&metrics);
        let time = time_of_day(&metrics);
        let wardrobe = clothing(&metrics);
        let activity = activity_advice(request.event_type(), &metrics);
        let warnings = safety(&metrics);
        let health_tips = health(&metrics);
        let generated_at = self.timestamp.unwrap_or_else(Local::now);

        let detail_line = if assessment.details.is_empty() {
            "Hava koşulları genel olarak uygun".to_string()
        } else {
            assessment.details.join(" ")
        };

        Ok(format!(
            "{emoji} **ETKİNLİK UYGUNLUĞU: {verdict}** (Skor: {score}/100)\n\
             \n\
             {detail_line}\n\
             \n\
             📊 **DETAYLI HAVA DURUMU ANALİZİ:**\n\
             • **Sıcaklık:** {temp_max}°C (maks) / {temp_min}°C (min) / {temp_avg:.1}°C (ortalama)\n\
             • **Hissedilen Sıcaklık:** {heat_index:.1}°C (sıcaklık) / {wind_chill:.1}°C (rüzgar soğuğu)\n\
             • **Rüzgar:** {wind} km/h\n\
             • **Nem:** %{humidity}\n\
             • **Yağış:** {precipitation}mm\n\
             • **UV İndeksi:** {uv} ({uv_band})\n\
             • **Görüş Mesafesi:** {visibility}km\n\
             • **Sıcaklık Farkı:** {temp_range:.1}°C\n\
             \n\
             📈 **KONFOR DEĞERLENDİRMESİ:**\n\
             **Skor:** {comfort_score}/100 - {comfort_level}\n\
             **Genel Durum:** {comfort_state}\n\
             \n\
             ⏰ **ZAMAN ÖNERİLERİ:**\n\
             {time_lines}\n\
             \n\
             **En İyi Zamanlar:**\n\
             {optimal_lines}\n\
             \n\
             👕 **DETAYLI GİYİM ÖNERİLERİ:**\n\
             **Temel Giyim:**\n\
             {clothing_lines}\n\
             \n\
             **Öncelikli Eşyalar:**\n\
             {clothing_priority_lines}\n\
             \n\
             🎯 **ETKİNLİK ÖZEL ÖNERİLERİ:**\n\
             **Genel İpuçları:**\n\
             {activity_tip_lines}\n\
             \n\
             **Gerekli Ekipmanlar:**\n\
             {gear_lines}\n\
             \n\
             **Zamanlama:**\n\
             {timing_lines}\n\
             \n\
             ⚠️ **GÜVENLİK UYARILARI:**\n\
             {safety_lines}\n\
             \n\
             **Yüksek Öncelikli Riskler:**\n\
             {risk_lines}\n\
             \n\
             💡 **SAĞLIK İPUÇLARI:**\n\
             {health_lines}\n\
             \n\
             🌍 **KONUM BİLGİSİ:**\n\
             **Şehir:** {location}\n\
             **Tarih:** {date}\n\
             **Etkinlik Türü:** {event_type}\n\
             \n\
             **Son Güncelleme:** {generated_at}",
            emoji = assessment.level.emoji(),
            verdict = assessment.level.label(),
            score = assessment.score,
            detail_line = detail_line,
            temp_max = metrics.temp_max,
            temp_min = metrics.temp_min,
            temp_avg = metrics.average_temperature(),
            heat_index = metrics.heat_index(),
            wind_chill = metrics.wind_chill(),
            wind = metrics.wind,
            humidity = metrics.humidity,
            precipitation = metrics.precipitation,
            uv = metrics.uv_index,
            uv_band = uv_label(metrics.uv_index),
            visibility = metrics.visibility,
            temp_range = metrics.temperature_range(),
            comfort_score = comfort_score,
            comfort_level = comfort_level,
            comfort_state = comfort_overall(comfort_score),
            time_lines = bullets(&time.recommendations),
            optimal_lines = bullets_or(&time.optimal_times, "Hava koşulları tüm gün uygun"),
            clothing_lines = bullets(&wardrobe.recommendations),
            clothing_priority_lines = bullets_or(&wardrobe.priority, "Standart giyim yeterli"),
            activity_tip_lines = bullets_or(&activity.tips, "Genel güvenlik kurallarına uyun"),
            gear_lines = bullets_or(&activity.gear, "Özel ekipman gerekmiyor"),
            timing_lines = bullets_or(&activity.timing, "Herhangi bir saatte yapılabilir"),
            safety_lines = bullets_or(&warnings.tips, "Özel güvenlik riski yok"),
            risk_lines = bullets_or(&warnings.priority, "Risk seviyesi düşük"),
            health_lines = bullets_or(&health_tips, "Genel sağlık önlemleri yeterli"),
            location = request.location,
            date = request.date,
            event_type = request.event_type(),
            generated_at = generated_at.format("%d.%m.%Y %H:%M"),
        ))
    }

    /// Renders the short single-pass report.
    fn render_brief(&self, request: &RecommendationRequest) -> Result<String, InputError> {
        let metrics = WeatherMetrics::from_request(request)?;
        let comfort_score = request
            .comfort_index
            .score
            .ok_or(InputError::MissingComfortField("score"))?;
        let comfort_level = request
            .comfort_index
            .level
            .as_deref()
            .ok_or(InputError::MissingComfortField("level"))?;

        // Single-pass verdict, first matching hazard wins
        let (emoji, verdict) = if metrics.precipitation > 10.0 {
            ("❌", "Uygun değil")
        } else if metrics.precipitation > 5.0 {
            ("⚠️", "Dikkatli ol")
        } else if metrics.wind > 30.0 {
            ("💨", "Rüzgarlı")
        } else if metrics.temp_max > 35.0 || metrics.temp_min < -5.0 {
            ("🌡️", "Aşırı sıcak/soğuk")
        } else {
            ("✅", "Mükemmel")
        };

        let mut time_recs = Vec::new();
        if metrics.wind > 20.0 {
            time_recs.push("Rüzgar güçlü, sabah 8-10 arası veya akşam 18:00 sonrası daha uygun");
        }
        if metrics.temp_max > 30.0 {
            time_recs.push("Sıcaklık yüksek, sabah erken veya akşam geç saatleri tercih et");
        }
        if metrics.humidity > 80.0 {
            time_recs.push("Nem yüksek, öğle saatlerinde daha rahat olabilir");
        }
        if metrics.precipitation > 5.0 {
            time_recs.push("Yağış bekleniyor, kapalı alan alternatifi düşün");
        }
        if metrics.uv_index > 7.0 {
            time_recs.push("UV indeksi yüksek, güneş kremi kullan ve gölgede kal");
        }
        if time_recs.is_empty() {
            time_recs.push("Hava koşulları genel olarak uygun, istediğin saatte yapabilirsin");
        }

        let mut clothing_recs = Vec::new();
        if metrics.temp_max < 15.0 {
            clothing_recs.push("Kalın giysiler giy, mont al");
        } else if metrics.temp_max > 25.0 {
            clothing_recs.push("Hafif giysiler tercih et, şapka tak");
        }
        if metrics.wind > 15.0 {
            clothing_recs.push("Rüzgar korumalı giysiler giy");
        }
        if metrics.humidity > 70.0 {
            clothing_recs.push("Nefes alabilen kumaşlar tercih et");
        }
        if metrics.precipitation > 0.0 {
            clothing_recs.push("Su geçirmez giysiler veya şemsiye al");
        }
        if metrics.uv_index > 5.0 {
            clothing_recs.push("Güneş gözlüğü ve şapka tak");
        }

        let activity_tips = brief_tips(request.event_type());

        let mut safety_tips = Vec::new();
        if metrics.temp_max > 30.0 {
            safety_tips.push("Sıcak çarpmasına dikkat et, bol su iç");
        }
        if metrics.wind > 25.0 {
            safety_tips.push("Rüzgar nedeniyle düşen objelere dikkat et");
        }
        if metrics.precipitation > 5.0 {
            safety_tips.push("Islak yüzeylerde kayma riski var");
        }
        if metrics.uv_index > 6.0 {
            safety_tips.push("Güneş yanığı riski yüksek, korun");
        }

        Ok(format!(
            "{emoji} **Uygunluk:** {verdict}\n\
             \n\
             📊 **Hava Durumu:**\n\
             • Sıcaklık: {temp_max}°C (maks) / {temp_min}°C (min)\n\
             • Rüzgar: {wind} km/h\n\
             • Nem: %{humidity}\n\
             • Yağış: {precipitation}mm\n\
             • UV İndeksi: {uv}\n\
             \n\
             📈 **Konfor Skoru:** {comfort_score}/100 ({comfort_level})\n\
             \n\
             ⏰ **Zaman Önerileri:**\n\
             {time_lines}\n\
             \n\
             👕 **Giyim Önerileri:**\n\
             {clothing_lines}\n\
             \n\
             🎯 **Etkinlik İpuçları:**\n\
             {activity_lines}\n\
             \n\
             ⚠️ **Güvenlik Uyarıları:**\n\
             {safety_lines}",
            emoji = emoji,
            verdict = verdict,
            temp_max = metrics.temp_max,
            temp_min = metrics.temp_min,
            wind = metrics.wind,
            humidity = metrics.humidity,
            precipitation = metrics.precipitation,
            uv = metrics.uv_index,
            comfort_score = comfort_score,
            comfort_level = comfort_level,
            time_lines = bullets(&time_recs),
            clothing_lines = bullets_or(&clothing_recs, "Mevcut hava koşullarına uygun giyin"),
            activity_lines = bullets_or(&activity_tips, "Genel güvenlik kurallarına uy"),
            safety_lines = bullets_or(&safety_tips, "Genel güvenlik önlemlerini al"),
        ))
    }
}

/// Builds the degraded one-line summary.
///
/// Substitutes "Orta"/50 for a missing comfort index but requires the
/// weather record's temperature and humidity series.
fn fallback_summary(request: &RecommendationRequest) -> Result<String, ReportError> {
    let daily = request
        .weather_data
        .daily
        .as_ref()
        .ok_or(ReportError::FallbackUnavailable(InputError::MissingDaily))?;
    let temp_max = daily.temperature_2m_max.first().ok_or(
        ReportError::FallbackUnavailable(InputError::MissingSeries("temperature_2m_max")),
    )?;
    let humidity = daily.relative_humidity_2m_max.first().ok_or(
        ReportError::FallbackUnavailable(InputError::MissingSeries("relative_humidity_2m_max")),
    )?;
    let level = request.comfort_index.level.as_deref().unwrap_or("Orta");
    let score = request.comfort_index.score.unwrap_or(50);

    Ok(format!(
        "Hava durumu analizi: {level} seviyede rahatsızlık ({score}/100). \
         Sıcaklık {temp_max}°C, nem %{humidity}."
    ))
}

/// Renders items as "• item" lines joined by newlines.
fn bullets<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| format!("• {}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Like [`bullets`], with a fixed placeholder line for empty sections.
fn bullets_or<S: AsRef<str>>(items: &[S], placeholder: &str) -> String {
    if items.is_empty() {
        format!("• {placeholder}")
    } else {
        bullets(items)
    }
}
