//! Formatting helpers for amounts and the ISO date interchange boundary.

use std::collections::HashMap;

use chrono::NaiveDate;
use once_cell::sync::Lazy;

use crate::errors::FinanceError;

const ISO_FORMAT: &str = "%Y-%m-%d";

static CURRENCY_SYMBOLS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("USD", "$"),
        ("EUR", "€"),
        ("GBP", "£"),
        ("JPY", "¥"),
        ("CAD", "CA$"),
        ("AUD", "A$"),
        ("CHF", "CHF"),
        ("BRL", "R$"),
    ])
});

/// Currency symbol lookup; unknown codes fall back to the code itself.
pub fn symbol_for(code: &str) -> &str {
    CURRENCY_SYMBOLS.get(code).copied().unwrap_or(code)
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

/// Renders an amount with grouped thousands and the currency symbol.
pub fn format_amount(amount: f64, code: &str) -> String {
    let precision = minor_units_for(code);
    let body = format!("{:.*}", precision as usize, amount.abs());
    let grouped = match body.split_once('.') {
        Some((int_part, frac)) => format!("{}.{}", group_digits(int_part), frac),
        None => group_digits(&body),
    };
    if amount < 0.0 {
        format!("-{}{}", symbol_for(code), grouped)
    } else {
        format!("{}{}", symbol_for(code), grouped)
    }
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, ',');
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}

/// Parses the ISO `YYYY-MM-DD` dates used in interchange payloads.
pub fn parse_iso_date(value: &str) -> Result<NaiveDate, FinanceError> {
    NaiveDate::parse_from_str(value, ISO_FORMAT)
        .map_err(|err| FinanceError::InvalidDate(format!("{}: {}", value, err)))
}

pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}
