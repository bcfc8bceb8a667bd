//! # Inquiry Prefill
//!
//! Builds the payload handed to the contact form when a visitor asks about
//! the item in the overlay.

use std::fmt::Write;

use serde::Serialize;

use crate::core::catalog::Item;
use crate::core::listing::format_currency;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Interest {
    /// Questions about, or acquisition of, the original.
    General,
    PrintPurchase,
}

impl Interest {
    /// Value of the contact form's interest field.
    pub fn form_value(&self) -> &'static str {
        match self {
            Interest::General => "acquisition",
            Interest::PrintPurchase => "print",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InquiryRequest {
    pub item_id: String,
    pub interest: Interest,
}

/// Opening line of the prefilled message.
pub fn message_prefix(item: &Item) -> String {
    let mut details = item.year.clone().unwrap_or_default();
    if let Some(size) = item.size.as_deref().filter(|s| !s.is_empty()) {
        details.push_str(", ");
        details.push_str(size);
    }
    format!("I'm writing about \u{201c}{}\u{201d} ({}). ", item.title, details)
}

const PRINT_HEADING: &str = "I'd like to order a print. Available sizes:\n";

/// Full prefill text. Print purchases list the available sizes.
pub fn compose_message(item: &Item, interest: Interest) -> String {
    let mut message = message_prefix(item);
    message.push_str("\n\n");
    if interest == Interest::PrintPurchase {
        message.push_str(&print_section(item));
    }
    message
}

fn print_section(item: &Item) -> String {
    let mut section = String::new();
    if item.has_prints() {
        section.push_str(PRINT_HEADING);
        for (size, price) in &item.print_prices {
            // Writing into a String cannot fail.
            let _ = writeln!(section, "- {}: {}", size, format_currency(*price));
        }
    }
    section
}

/// Keeps what the visitor already typed if it starts with the prefix.
/// A print request still gets the size list appended when it is missing.
pub fn prefill(existing: &str, item: &Item, interest: Interest) -> String {
    if !existing.starts_with(&message_prefix(item)) {
        return compose_message(item, interest);
    }
    let mut message = existing.to_string();
    if interest == Interest::PrintPurchase && !message.contains(PRINT_HEADING) {
        let section = print_section(item);
        if !section.is_empty() {
            if !message.ends_with('\n') {
                message.push('\n');
            }
            if !message.ends_with("\n\n") {
                message.push('\n');
            }
            message.push_str(&section);
        }
    }
    message
}
