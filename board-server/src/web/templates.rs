//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::{ArrivalEntry, Station};

// ============================================================================
// Page Templates
// ============================================================================

/// Main page with the station search box and board container.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Name of the default station, when one resolved at startup.
    pub default_station: Option<String>,
}

// ============================================================================
// Fragment Templates (AJAX responses, no page chrome)
// ============================================================================

/// Suggestion dropdown fragment.
#[derive(Template)]
#[template(path = "suggestions.html")]
pub struct SuggestionsTemplate {
    pub stations: Vec<StationView>,
}

/// Arrival board fragment.
#[derive(Template)]
#[template(path = "board.html")]
pub struct BoardTemplate {
    pub station_name: String,
    pub entries: Vec<ArrivalView>,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Station view model for the suggestion list.
#[derive(Debug, Clone)]
pub struct StationView {
    pub name: String,
    pub short_code: String,
}

impl StationView {
    pub fn from_station(station: &Station) -> Self {
        Self {
            name: station.name.clone(),
            short_code: station.short_code.as_str().to_string(),
        }
    }
}

/// Arrival row view model.
#[derive(Debug, Clone)]
pub struct ArrivalView {
    pub line_id: String,
    pub train_type: String,
    pub scheduled_hhmm: String,
    pub delay_minutes: i64,
    pub is_delayed: bool,
}

impl ArrivalView {
    /// Line label for display: the commuter line where present,
    /// otherwise the train type.
    pub fn line_label(&self) -> &str {
        if self.line_id.is_empty() {
            &self.train_type
        } else {
            &self.line_id
        }
    }

    /// Create from a domain ArrivalEntry, formatting the scheduled
    /// time as local HH:MM for display.
    pub fn from_entry(entry: &ArrivalEntry) -> Self {
        let local = entry.scheduled_time.with_timezone(&chrono::Local);
        Self {
            line_id: entry.line_id.clone(),
            train_type: entry.train_type.clone(),
            scheduled_hhmm: local.format("%H:%M").to_string(),
            delay_minutes: entry.delay_minutes,
            is_delayed: entry.is_delayed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ShortCode;
    use chrono::{TimeZone, Utc};

    #[test]
    fn line_label_falls_back_to_train_type() {
        let view = ArrivalView {
            line_id: String::new(),
            train_type: "IC".to_string(),
            scheduled_hhmm: "10:00".to_string(),
            delay_minutes: 0,
            is_delayed: false,
        };
        assert_eq!(view.line_label(), "IC");

        let view = ArrivalView {
            line_id: "A".to_string(),
            ..view
        };
        assert_eq!(view.line_label(), "A");
    }

    #[test]
    fn board_template_renders_entries() {
        let entry = ArrivalEntry {
            line_id: "A".to_string(),
            train_type: "HL".to_string(),
            scheduled_time: Utc.with_ymd_and_hms(2026, 8, 26, 10, 0, 0).unwrap(),
            delay_minutes: 7,
            is_delayed: true,
        };

        let template = BoardTemplate {
            station_name: "Helsinki asema".to_string(),
            entries: vec![ArrivalView::from_entry(&entry)],
        };

        let html = template.render().unwrap();
        assert!(html.contains("Helsinki asema"));
        assert!(html.contains("Delay: 7 min"));
    }

    #[test]
    fn empty_board_renders_placeholder() {
        let template = BoardTemplate {
            station_name: "Helsinki asema".to_string(),
            entries: Vec::new(),
        };

        let html = template.render().unwrap();
        assert!(html.contains("No trains found"));
    }

    #[test]
    fn suggestions_template_renders_names_and_codes() {
        let station = Station {
            name: "Pasila asema".to_string(),
            short_code: ShortCode::parse("PSL").unwrap(),
        };

        let template = SuggestionsTemplate {
            stations: vec![StationView::from_station(&station)],
        };

        let html = template.render().unwrap();
        assert!(html.contains("Pasila asema"));
        assert!(html.contains("PSL"));
    }
}
