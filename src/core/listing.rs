//! # Listing Text
//!
//! Display strings derived from an item: status label, price text, the meta
//! line under a title, and the resolved [`DetailView`] the detail navigator
//! publishes for the overlay.

use crate::core::catalog::{Item, PriceDisplay, Status};

pub const REQUEST_PRICE_LABEL: &str = "Request price";

/// Price text shown next to the status badge.
///
/// Sold work without an explicit price policy shows nothing.
pub fn price_text(item: &Item) -> String {
    match (item.price_display, item.price) {
        (None, _) => String::new(),
        (Some(PriceDisplay::OnRequest), _) => REQUEST_PRICE_LABEL.to_string(),
        (Some(PriceDisplay::Numeric), Some(price)) => format_currency(price),
        (Some(PriceDisplay::Numeric), None) => String::new(),
        (Some(PriceDisplay::NoteOnly), _) => item.note.clone().unwrap_or_default(),
    }
}

/// `$` amount with thousands separators; cents only when non-zero.
pub fn format_currency(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    let digits = (cents / 100).to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match cents % 100 {
        0 => format!("{sign}${grouped}"),
        fraction => format!("{sign}${grouped}.{fraction:02}"),
    }
}

/// `year · size · medium`, skipping whatever is missing.
pub fn meta_line(item: &Item) -> String {
    [&item.year, &item.size, &item.medium]
        .into_iter()
        .filter_map(|part| part.as_deref())
        .filter(|part| !part.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" · ")
}

/// Status, price and note as one line for the overlay.
pub fn status_line(item: &Item) -> String {
    let mut line = item.status.label().to_string();
    let price = price_text(item);
    if !price.is_empty() {
        line.push_str(" • ");
        line.push_str(&price);
    }
    if let Some(note) = item.note.as_deref()
        && !note.is_empty()
        && item.price_display != Some(PriceDisplay::NoteOnly)
    {
        line.push_str(" - ");
        line.push_str(note);
    }
    line
}

/// Everything the overlay needs about the item under the navigator.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub id: String,
    pub title: String,
    pub image: String,
    pub meta: String,
    pub description: String,
    pub status: Status,
    pub price_text: String,
    pub status_line: String,
    /// `(size, formatted price)` in size-label order.
    pub print_prices: Vec<(String, String)>,
    pub print_available: bool,
    /// Position within the sequence being paged, zero-based.
    pub position: usize,
    pub total: usize,
}

impl DetailView {
    pub fn new(item: &Item, position: usize, total: usize) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            image: item.image.clone(),
            meta: meta_line(item),
            description: item.description.clone().unwrap_or_default(),
            status: item.status,
            price_text: price_text(item),
            status_line: status_line(item),
            print_prices: item
                .print_prices
                .iter()
                .map(|(size, price)| (size.clone(), format_currency(*price)))
                .collect(),
            print_available: item.has_prints(),
            position,
            total,
        }
    }
}
