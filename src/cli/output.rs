use crate::core::{HistoryEntry, Ticket, TicketStatus};
use crate::error::Result;
use chrono::{DateTime, Local, Utc};
use colored::Colorize;
use serde::Serialize;

/// Formats command results as colored text or JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputFormatter {
    json: bool,
}

impl OutputFormatter {
    pub fn new(json: bool, no_color: bool) -> Self {
        if no_color {
            colored::control::set_override(false);
        }
        Self { json }
    }

    #[must_use]
    pub const fn is_json(&self) -> bool {
        self.json
    }

    pub fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    pub fn success(&self, message: &str) {
        if !self.json {
            println!("{} {}", "✓".green().bold(), message);
        }
    }

    pub fn info(&self, message: &str) {
        if !self.json {
            println!("{message}");
        }
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "error:".red().bold(), message);
    }

    /// One dashboard line per ticket
    pub fn ticket_row(&self, ticket: &Ticket) -> String {
        let request = ticket.request();
        format!(
            "{:<12} {:<8} {:<17} {:<24} {:<20} {}",
            ticket.reference_code().as_str().bold(),
            status_label(ticket.status()),
            format_timestamp(ticket.created_at()),
            truncate(&request.primary_name, 24),
            truncate(&request.company, 20),
            truncate(&request.rack, 30),
        )
    }

    /// The full ticket card with history newest first
    pub fn ticket_details(&self, ticket: &Ticket) -> Vec<String> {
        let request = ticket.request();
        let mut lines = vec![
            format!(
                "{} {}",
                ticket.reference_code().as_str().bold(),
                status_label(ticket.status())
            ),
            format!("ID:         {}", ticket.id()),
            format!("Created:    {}", format_timestamp(ticket.created_at())),
            format!("Applicant:  {}", request.primary_name),
            format!("Company:    {}", request.company),
        ];
        if !request.department.is_empty() {
            lines.push(format!("Department: {}", request.department));
        }
        lines.push(format!("Rack:       {}", request.rack));
        lines.push(format!("Purpose:    {}", request.purpose));
        if let Some(equipment) = request.equipment() {
            lines.push(format!("Equipment:  {equipment}"));
        }
        if !request.notes.is_empty() {
            lines.push(format!("Notes:      {}", request.notes));
        }
        if !request.additional_staff.is_empty() {
            lines.push("Staff:".to_string());
            for staff in &request.additional_staff {
                match &staff.id_number {
                    Some(id_number) => lines.push(format!(
                        "  - {} ({}, ID {})",
                        staff.name, staff.role, id_number
                    )),
                    None => lines.push(format!("  - {} ({})", staff.name, staff.role)),
                }
            }
        }
        lines.push("History:".to_string());
        lines.extend(ticket.history_newest_first().map(history_line));
        lines
    }
}

fn history_line(entry: &HistoryEntry) -> String {
    let when = entry
        .recorded_at()
        .map_or_else(|| entry.timestamp.to_string(), format_local);
    format!("  {}  {}", when.dimmed(), entry.action)
}

fn status_label(status: TicketStatus) -> String {
    match status {
        TicketStatus::Open => "OPEN".green().to_string(),
        TicketStatus::Locked => "LOCKED".red().to_string(),
    }
}

/// Formats epoch milliseconds as local time, e.g. `04 Mar 2025 14:05`
pub fn format_timestamp(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis).map_or_else(|| millis.to_string(), format_local)
}

fn format_local(utc: DateTime<Utc>) -> String {
    utc.with_timezone(&Local).format("%d %b %Y %H:%M").to_string()
}

fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        value.to_string()
    } else {
        let mut out: String = value.chars().take(max.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}
