//! Event-type categories and category-specific advice
//!
//! The free-text event type is matched case-insensitively by substring
//! against fixed keyword sets, in a fixed priority order; the first matching
//! category wins and categories are mutually exclusive.

use crate::data::WeatherMetrics;

/// Event categories recognized by the recommendation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventCategory {
    /// Hiking, trekking and nature walks
    Hiking,
    /// Picnics and outdoor dining
    Picnic,
    /// Weddings and outdoor ceremonies
    Wedding,
    /// Photo shoots
    Photography,
    /// Sports and exercise
    Sports,
    /// Beach and water activities
    Beach,
}

impl EventCategory {
    /// Returns all categories in matching priority order.
    pub fn all() -> &'static [EventCategory] {
        &[
            EventCategory::Hiking,
            EventCategory::Picnic,
            EventCategory::Wedding,
            EventCategory::Photography,
            EventCategory::Sports,
            EventCategory::Beach,
        ]
    }

    /// Keyword set for the category, including language variants.
    fn keywords(&self) -> &'static [&'static str] {
        match self {
            EventCategory::Hiking => &["yürüyüş", "hiking", "trekking", "doğa yürüyüşü"],
            EventCategory::Picnic => &["piknik", "picnic", "barbekü", "açık hava yemeği"],
            EventCategory::Wedding => &["düğün", "wedding", "açık hava etkinliği", "tören"],
            EventCategory::Photography => &["fotoğraf", "photography", "çekim", "foto"],
            EventCategory::Sports => &["spor", "sports", "egzersiz", "koşu", "futbol"],
            EventCategory::Beach => &["plaj", "beach", "deniz", "yüzme", "su"],
        }
    }

    /// Detects the category for a free-text event type.
    ///
    /// Matching is case-insensitive and by substring; categories are tried
    /// in priority order and the first hit wins. Returns `None` when no
    /// keyword matches (e.g. "office meeting").
    pub fn detect(event_type: &str) -> Option<EventCategory> {
        let lowered = event_type.to_lowercase();
        EventCategory::all()
            .iter()
            .copied()
            .find(|category| category.keywords().iter().any(|kw| lowered.contains(kw)))
    }
}

/// Category-specific tips, gear and timing advice.
#[derive(Debug, Clone, Default)]
pub struct ActivityAdvice {
    /// General tips for the detected category
    pub tips: Vec<String>,
    /// Emoji-prefixed gear checklist entries
    pub gear: Vec<String>,
    /// Timing suggestions
    pub timing: Vec<String>,
}

/// Builds activity-specific advice for the event type.
///
/// Each category contributes fixed tip/gear lists plus conditional extras
/// gated on the day's metrics. An unmatched event type yields empty lists
/// (the report substitutes its generic placeholders).
pub fn activity_advice(event_type: &str, metrics: &WeatherMetrics) -> ActivityAdvice {
    let mut advice = ActivityAdvice::default();
    let Some(category) = EventCategory::detect(event_type) else {
        return advice;
    };

    match category {
        EventCategory::Hiking => {
            advice.tip("Rahat yürüyüş ayakkabısı veya bot giy", "🥾 Yürüyüş ayakkabısı");
            advice.tip("En az 2 litre su al", "💧 Su şişesi");
            advice.tip("Enerji verici atıştırmalıklar (fındık, meyve)", "🥜 Atıştırmalık");
            advice.tip("İlk yardım çantası al", "🏥 İlk yardım çantası");
            if metrics.wind > 15.0 {
                advice
                    .tips
                    .push("Rüzgar nedeniyle düşük sıcaklık hissedilebilir".to_string());
            }
            if metrics.temp_max > 25.0 {
                advice
                    .timing
                    .push("Sabah erken veya akşam geç saatleri tercih et".to_string());
            }
        }
        EventCategory::Picnic => {
            advice.tip("Piknik örtüsü ve soğutucu al", "🧺 Piknik örtüsü");
            advice.tip("Böcek kovucu sprey kullan", "🦟 Böcek kovucu");
            advice.tip("Güneş şemsiyesi veya gölgelik", "⛱️ Güneş şemsiyesi");
            if metrics.temp_max > 30.0 {
                advice.tip("Yiyecekleri soğuk tutmak için buz paketi al", "🧊 Buz paketi");
            }
            if metrics.wind > 20.0 {
                advice
                    .tips
                    .push("Rüzgar nedeniyle hafif eşyaları sabitle".to_string());
            }
        }
        EventCategory::Wedding => {
            advice
                .tips
                .push("Açık hava düğünü için yedek kapalı alan planı hazırla".to_string());
            advice.tip("Misafirler için gölgelik veya şemsiye düşün", "⛱️ Gölgelik");
            advice
                .tips
                .push("Ses sistemini rüzgar korumalı yerleştir".to_string());
            if metrics.precipitation > 5.0 {
                advice.tip("Yağmur planı yap, çadır veya kapalı alan hazırla", "🏕️ Yağmur çadırı");
            }
            if metrics.temp_max > 30.0 {
                advice.tip("Misafirler için soğuk içecek ve fan sağla", "❄️ Soğuk içecek");
            }
        }
        EventCategory::Photography => {
            advice.tip("Kamera ekipmanlarını koruyucu kılıf ile taşı", "📷 Kamera kılıfı");
            advice
                .tips
                .push("Altın saatlerde (gün doğumu/batımı) çekim yap".to_string());
            advice
                .timing
                .push("En iyi ışık: 06:00-08:00 ve 18:00-20:00".to_string());
            advice.tip("Yedek pil ve hafıza kartı al", "🔋 Yedek pil");
            if metrics.wind > 15.0 {
                advice.tip("Rüzgar nedeniyle tripod kullan", "📐 Tripod");
            }
            if metrics.precipitation > 0.0 {
                advice.tip("Kamera için yağmur kılıfı al", "☔ Kamera yağmur kılıfı");
            }
        }
        EventCategory::Sports => {
            advice.tip("Spor ayakkabısı giy", "👟 Spor ayakkabısı");
            advice.tip("Bol su al, hidrasyon önemli", "💧 Su şişesi");
            if metrics.temp_max > 25.0 {
                advice
                    .tips
                    .push("Sıcakta spor yaparken dikkatli ol, sık mola ver".to_string());
                advice
                    .timing
                    .push("Sabah erken veya akşam geç saatleri tercih et".to_string());
            }
            if metrics.humidity > 80.0 {
                advice
                    .tips
                    .push("Yüksek nem nedeniyle daha yavaş tempo".to_string());
            }
        }
        EventCategory::Beach => {
            advice.tip("Güneş kremi kullan (SPF 30+)", "🧴 Güneş kremi");
            advice.tip("Plaj şemsiyesi veya gölgelik", "⛱️ Plaj şemsiyesi");
            advice.tip("Su geçirmez telefon kılıfı", "📱 Su geçirmez kılıf");
            if metrics.uv_index > 6.0 {
                advice
                    .tips
                    .push("Güneşin en yoğun olduğu saatlerde (11-15) denizden çık".to_string());
                advice
                    .timing
                    .push("En güvenli saatler: 08:00-11:00 ve 15:00-18:00".to_string());
            }
        }
    }

    advice
}

impl ActivityAdvice {
    /// Appends a tip together with its gear-list counterpart.
    fn tip(&mut self, tip: &str, gear: &str) {
        self.tips.push(tip.to_string());
        self.gear.push(gear.to_string());
    }
}

/// Two fixed tips per category for the brief report.
///
/// The brief variant recognizes fewer categories and fewer keywords than the
/// full one; kept separate so the two reports stay independently faithful.
pub fn brief_tips(event_type: &str) -> Vec<&'static str> {
    let lowered = event_type.to_lowercase();
    if lowered.contains("yürüyüş") || lowered.contains("hiking") {
        vec!["Rahat yürüyüş ayakkabısı giy", "Su ve atıştırmalık al"]
    } else if lowered.contains("piknik") || lowered.contains("picnic") {
        vec!["Piknik örtüsü ve soğutucu al", "Böcek kovucu sprey kullan"]
    } else if lowered.contains("düğün") || lowered.contains("wedding") {
        vec![
            "Açık hava düğünü için yedek plan hazırla",
            "Misafirler için gölgelik düşün",
        ]
    } else if lowered.contains("fotoğraf") || lowered.contains("photography") {
        vec![
            "Kamera ekipmanlarını koruyucu kılıf ile taşı",
            "Altın saatlerde (gün doğumu/batımı) çekim yap",
        ]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mild_metrics() -> WeatherMetrics {
        WeatherMetrics {
            temp_max: 22.0,
            temp_min: 14.0,
            wind: 10.0,
            humidity: 55.0,
            precipitation: 0.0,
            uv_index: 3.0,
            visibility: 10.0,
        }
    }

    #[test]
    fn test_detect_hiking_from_english_and_turkish() {
        assert_eq!(EventCategory::detect("Hiking trip"), Some(EventCategory::Hiking));
        assert_eq!(EventCategory::detect("yürüyüş"), Some(EventCategory::Hiking));
        assert_eq!(
            EventCategory::detect("Doğa Yürüyüşü"),
            Some(EventCategory::Hiking)
        );
    }

    #[test]
    fn test_detect_is_case_insensitive_substring() {
        assert_eq!(
            EventCategory::detect("PLAJ günü"),
            Some(EventCategory::Beach)
        );
        assert_eq!(
            EventCategory::detect("şirket pikniği"),
            Some(EventCategory::Picnic)
        );
    }

    #[test]
    fn test_detect_priority_order_first_match_wins() {
        // "yürüyüş" (hiking) outranks "spor" (sports) in the priority chain
        assert_eq!(
            EventCategory::detect("sportif yürüyüş"),
            Some(EventCategory::Hiking)
        );
    }

    #[test]
    fn test_detect_unmatched_returns_none() {
        assert_eq!(EventCategory::detect("office meeting"), None);
        assert_eq!(EventCategory::detect(""), None);
    }

    #[test]
    fn test_hiking_advice_has_fixed_gear_list() {
        let advice = activity_advice("hiking", &mild_metrics());
        assert_eq!(advice.tips.len(), 4);
        assert_eq!(advice.gear.len(), 4);
        assert!(advice.gear.contains(&"🥾 Yürüyüş ayakkabısı".to_string()));
        assert!(advice.timing.is_empty());
    }

    #[test]
    fn test_hiking_hot_day_adds_timing() {
        let mut metrics = mild_metrics();
        metrics.temp_max = 28.0;
        let advice = activity_advice("hiking", &metrics);
        assert_eq!(
            advice.timing,
            vec!["Sabah erken veya akşam geç saatleri tercih et"]
        );
    }

    #[test]
    fn test_wedding_rain_plan_gated_on_precipitation() {
        let mut metrics = mild_metrics();
        let dry = activity_advice("düğün", &metrics);
        assert!(!dry.gear.contains(&"🏕️ Yağmur çadırı".to_string()));

        metrics.precipitation = 6.0;
        let wet = activity_advice("düğün", &metrics);
        assert!(wet.gear.contains(&"🏕️ Yağmur çadırı".to_string()));
    }

    #[test]
    fn test_photography_windy_day_recommends_tripod() {
        let mut metrics = mild_metrics();
        metrics.wind = 18.0;
        let advice = activity_advice("fotoğraf çekimi", &metrics);
        assert!(advice.gear.contains(&"📐 Tripod".to_string()));
    }

    #[test]
    fn test_beach_high_uv_adds_safe_hours() {
        let mut metrics = mild_metrics();
        metrics.uv_index = 7.0;
        let advice = activity_advice("beach day", &metrics);
        assert!(advice
            .timing
            .contains(&"En güvenli saatler: 08:00-11:00 ve 15:00-18:00".to_string()));
    }

    #[test]
    fn test_unmatched_event_gives_empty_advice() {
        let advice = activity_advice("office meeting", &mild_metrics());
        assert!(advice.tips.is_empty());
        assert!(advice.gear.is_empty());
        assert!(advice.timing.is_empty());
    }

    #[test]
    fn test_brief_tips_categories() {
        assert_eq!(
            brief_tips("hiking"),
            vec!["Rahat yürüyüş ayakkabısı giy", "Su ve atıştırmalık al"]
        );
        assert_eq!(brief_tips("Piknik").len(), 2);
        assert_eq!(brief_tips("wedding").len(), 2);
        assert_eq!(brief_tips("foto çekimi").len(), 0); // brief variant only knows "fotoğraf"
        assert!(brief_tips("office meeting").is_empty());
    }
}
