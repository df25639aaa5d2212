//! # CSV Export
//!
//! Builds the CSV files the expenses, timesheets and orders views offer
//! for download. Output is a `String`; writing it somewhere is the caller's
//! business.
//!
//! ## Cell Rules
//! - Cells containing `,` `"` CR or LF are quoted, with `"` doubled.
//! - Cells starting with `=` `+` `-` `@` get a leading `'` so spreadsheet
//!   apps do not evaluate them as formulas. Plain numbers such as `-5.50`
//!   are exempt and stay numeric.
//! - Amounts are plain decimals with a sign when negative (`85.00`,
//!   `-0.50`), dates are `YYYY-MM-DD`.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::money::Money;
use crate::types::{Client, Expense, Order, TimesheetEntry};

/// `-12`, `-12.50`, `3.5`: digits with an optional leading minus and at
/// most one decimal point.
fn is_plain_number(value: &str) -> bool {
    let digits = value.strip_prefix('-').unwrap_or(value);
    let mut parts = digits.splitn(2, '.');
    let whole = parts.next().unwrap_or_default();
    let fraction = parts.next();

    !whole.is_empty()
        && whole.bytes().all(|b| b.is_ascii_digit())
        && fraction.map_or(true, |f| !f.is_empty() && f.bytes().all(|b| b.is_ascii_digit()))
}

fn needs_formula_guard(value: &str) -> bool {
    if is_plain_number(value) {
        return false;
    }
    let trimmed = value.trim_start();
    matches!(trimmed.chars().next(), Some('=' | '+' | '-' | '@'))
}

/// Escapes one CSV cell.
pub fn csv_escape(value: &str) -> String {
    let safe = if needs_formula_guard(value) {
        format!("'{value}")
    } else {
        value.to_string()
    };

    if safe.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", safe.replace('"', "\"\""))
    } else {
        safe
    }
}

fn csv_line<S: AsRef<str>>(cells: &[S]) -> String {
    cells
        .iter()
        .map(|c| csv_escape(c.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

fn amount_cell(amount: Money) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    format!("{}{}.{:02}", sign, amount.dollars().abs(), amount.cents_part())
}

fn date_cell(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Expenses as CSV: Date, Category, Vendor, Description, Amount, Order.
pub fn expenses_to_csv(expenses: &[Expense]) -> String {
    let mut lines = vec![csv_line(&[
        "Date",
        "Category",
        "Vendor",
        "Description",
        "Amount",
        "Order",
    ])];

    for expense in expenses {
        lines.push(csv_line(&[
            date_cell(expense.date),
            expense.category.clone(),
            expense.vendor.clone(),
            expense.description.clone().unwrap_or_default(),
            amount_cell(expense.amount),
            expense.order_id.clone().unwrap_or_default(),
        ]));
    }

    lines.join("\n")
}

/// Timesheet entries as CSV with the billable amount worked out.
pub fn timesheets_to_csv(entries: &[TimesheetEntry], default_rate: Money) -> String {
    let mut lines = vec![csv_line(&[
        "Date",
        "User",
        "Order",
        "Description",
        "Hours",
        "Rate",
        "Amount",
    ])];

    for entry in entries {
        let rate = entry.hourly_rate.unwrap_or(default_rate);
        lines.push(csv_line(&[
            date_cell(entry.date),
            entry.user_id.clone(),
            entry.order_id.clone().unwrap_or_default(),
            entry.description.clone(),
            format!("{:.2}", entry.hours),
            amount_cell(rate),
            amount_cell(entry.billable_amount(default_rate)),
        ]));
    }

    lines.join("\n")
}

/// Orders as CSV with the client name resolved (blank when the client is gone).
pub fn orders_to_csv(orders: &[Order], clients: &[Client]) -> String {
    let names: HashMap<&str, &str> = clients
        .iter()
        .map(|c| (c.id.as_str(), c.name.as_str()))
        .collect();

    let mut lines = vec![csv_line(&[
        "Order", "Client", "Title", "Status", "Due", "Subtotal", "Tax", "Shipping", "Total",
    ])];

    for order in orders {
        let status = serde_json::to_value(order.status)
            .ok()
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_default();

        lines.push(csv_line(&[
            order.order_number.clone(),
            names
                .get(order.client_id.as_str())
                .copied()
                .unwrap_or_default()
                .to_string(),
            order.title.clone(),
            status,
            date_cell(order.due_date),
            amount_cell(order.pricing.subtotal),
            amount_cell(order.pricing.tax),
            amount_cell(order.pricing.shipping),
            amount_cell(order.pricing.total),
        ]));
    }

    lines.join("\n")
}
