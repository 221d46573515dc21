use chrono::{DateTime, Utc};
use clientreg::api::{CmdMessage, MessageLevel};
use clientreg::index::DisplayClient;
use clientreg::model::Field;
use colored::Colorize;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 28;
const TIME_WIDTH: usize = 16;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_clients(clients: &[DisplayClient]) {
    if clients.is_empty() {
        println!("Nenhum cliente encontrado.");
        return;
    }

    for dc in clients {
        let idx = format!("{:>3}. ", dc.index);
        let name = truncate_to_width(&dc.client.name, NAME_WIDTH);
        let padding = NAME_WIDTH.saturating_sub(name.width());

        println!(
            "{}{}{} {:<16} {:<15} {:<9}{}",
            idx.yellow(),
            name,
            " ".repeat(padding),
            dc.client.phone,
            dc.client.national_id,
            dc.client.plate,
            format_time_ago(dc.client.created_at).dimmed()
        );
    }
}

pub(super) fn print_full_clients(clients: &[DisplayClient]) {
    for (i, dc) in clients.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{} {}", format!("{}.", dc.index).yellow(), dc.client.name.bold());
        println!("--------------------------------");
        let input = dc.client.input();
        for field in [Field::Phone, Field::NationalId, Field::Plate] {
            println!("{:<10}{}", format!("{}:", field.label()), input.get(field));
        }
        println!("{:<10}{}", "Id:", dc.client.id.to_string().dimmed());
        println!(
            "{:<10}{}",
            "Criado:",
            dc.client.created_at.format("%d/%m/%Y %H:%M")
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
