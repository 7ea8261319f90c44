use colored::Colorize;
use contacts::api::{CmdMessage, MessageLevel};
use contacts::config::ContactsConfig;
use contacts::model::{Contact, ContactStats, Status};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ID_WIDTH: usize = 16;
const NAME_WIDTH: usize = 22;
const EMAIL_WIDTH: usize = 28;
const COMPANY_WIDTH: usize = 18;

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

pub(super) fn print_contacts(contacts: &[Contact]) {
    if contacts.is_empty() {
        println!("No contacts found.");
        return;
    }

    let id_width = id_column_width(contacts);
    println!(
        "{}",
        format!(
            "{}{}{}{}{}",
            pad("ID", id_width),
            pad("NAME", NAME_WIDTH),
            pad("EMAIL", EMAIL_WIDTH),
            pad("COMPANY", COMPANY_WIDTH),
            "STATUS"
        )
        .bold()
    );

    for contact in contacts {
        let status = match contact.status {
            Status::Active => contact.status.as_str().green(),
            Status::Inactive => contact.status.as_str().dimmed(),
        };
        println!(
            "{}{}{}{}{}",
            pad(&contact.id, id_width).yellow(),
            pad(&contact.name, NAME_WIDTH),
            pad(&contact.email, EMAIL_WIDTH),
            pad(&contact.company, COMPANY_WIDTH).dimmed(),
            status
        );
    }
}

pub(super) fn print_stats(stats: &ContactStats) {
    println!("Total contacts:    {}", stats.total);
    println!("Active contacts:   {}", stats.active.to_string().green());
    println!("Inactive contacts: {}", stats.inactive.to_string().dimmed());
}

pub(super) fn print_config(config: &ContactsConfig) {
    println!("storage-key = {}", config.storage_key);
    println!("persist = {}", config.persist);
    println!("log-level = {}", config.log_level);
}

/// Wide enough that no id is truncated.
fn id_column_width(contacts: &[Contact]) -> usize {
    let widest = contacts.iter().map(|c| c.id.width()).max().unwrap_or(0);
    ID_WIDTH.max(widest + 2)
}

/// Truncate to fit `width - 1` columns, then pad to `width`.
fn pad(s: &str, width: usize) -> String {
    let cell = truncate_to_width(s, width.saturating_sub(1));
    let padding = width.saturating_sub(cell.width());
    format!("{}{}", cell, " ".repeat(padding))
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
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
