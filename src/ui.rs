use chrono::{DateTime, Local, Utc};
use ratatui::prelude::*;

use crate::app::state::ToastSeverity;
use crate::models::AppointmentStatus;

/// Status chip color, matching the severity of each lifecycle state
pub fn status_color(status: AppointmentStatus) -> Color {
    match status {
        AppointmentStatus::Scheduled => Color::Blue,
        AppointmentStatus::Done => Color::Green,
        AppointmentStatus::Canceled => Color::Red,
    }
}

pub fn severity_color(severity: ToastSeverity) -> Color {
    match severity {
        ToastSeverity::Success => Color::Green,
        ToastSeverity::Error => Color::Red,
    }
}

/// Wire instants render in local wall-clock time
pub fn format_local(instant: &DateTime<Utc>) -> String {
    instant
        .with_timezone(&Local)
        .format("%d/%m/%Y %H:%M")
        .to_string()
}

/// Table cells show N/A for absent optional values
pub fn or_na<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map_or_else(|| String::from("N/A"), T::to_string)
}

/// Renders tabs
#[allow(dead_code)] // Prepared for tab-style navigation bars
pub fn render_tabs<'a>(titles: &[&'a str], selected: usize) -> ratatui::widgets::Tabs<'a> {
    let titles: Vec<Line> = titles.iter().map(|t| Line::from(*t)).collect();

    ratatui::widgets::Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Yellow).bold())
        .divider("|")
}
