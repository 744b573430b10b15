use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::fmt::{money, short_date};
use crate::models::{ProcessingResult, TransactionRecord};

/// Two-state classification badge derived from `is_classified`.
pub fn classification_badge(is_classified: bool) -> String {
    if is_classified {
        "classified".green().to_string()
    } else {
        "unclassified".yellow().to_string()
    }
}

fn amount_cell(amount: f64) -> String {
    if amount >= 0.0 {
        money(amount).green().to_string()
    } else {
        money(amount).red().to_string()
    }
}

/// Render a company's transactions as a table, or an explicit empty-state
/// message.
pub fn format_transactions(records: &[TransactionRecord]) -> String {
    if records.is_empty() {
        return "No transactions found.".to_string();
    }

    let mut table = Table::new();
    table.set_header(vec!["Date", "Description", "Amount", "Type", "Category", "Status"]);
    for record in records {
        table.add_row(vec![
            Cell::new(short_date(&record.transaction_date)),
            Cell::new(&record.description),
            Cell::new(amount_cell(record.amount)),
            Cell::new(&record.transaction_type),
            Cell::new(record.category_name.as_deref().unwrap_or("-")),
            Cell::new(classification_badge(record.is_classified)),
        ]);
    }
    format!("Transactions ({})\n{table}", records.len())
}

/// Render the processing summary returned after a submit.
pub fn format_summary(result: &ProcessingResult) -> String {
    let mut out = String::new();
    out.push_str("Processing result\n");
    out.push_str(&format!("  Total processed:  {}\n", result.total_processed));
    out.push_str(&format!(
        "  Classified:       {}\n",
        result.classified_count.to_string().green()
    ));
    out.push_str(&format!(
        "  Unclassified:     {}\n",
        result.unclassified_count.to_string().yellow()
    ));
    if !result.message.is_empty() {
        out.push_str(&format!("  {}\n", result.message));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(amount: f64, classified: bool) -> TransactionRecord {
        TransactionRecord {
            id: "1".to_string(),
            transaction_date: "2024-03-15".to_string(),
            description: "OFFICE SUPPLIES".to_string(),
            amount,
            transaction_type: "DEBIT".to_string(),
            company_id: "ACME".to_string(),
            company_name: Some("Acme Corp".to_string()),
            category_id: classified.then(|| "c1".to_string()),
            category_name: classified.then(|| "Supplies".to_string()),
            is_classified: classified,
        }
    }

    #[test]
    fn test_empty_state_message() {
        colored::control::set_override(false);
        assert_eq!(format_transactions(&[]), "No transactions found.");
    }

    #[test]
    fn test_table_shows_derived_display_values() {
        colored::control::set_override(false);
        let out = format_transactions(&[record(-1234.5, true)]);
        assert!(out.starts_with("Transactions (1)"));
        assert!(out.contains("Mar 15, 2024"));
        assert!(out.contains("-$1,234.50"));
        assert!(out.contains("Supplies"));
        assert!(out.contains("classified"));
    }

    #[test]
    fn test_unclassified_row_shows_badge_and_dash_category() {
        colored::control::set_override(false);
        let out = format_transactions(&[record(100.0, false)]);
        assert!(out.contains("unclassified"));
        assert!(out.contains("$100.00"));
        assert!(out.contains('-'));
    }

    #[test]
    fn test_summary_includes_counts_and_message() {
        colored::control::set_override(false);
        let out = format_summary(&ProcessingResult {
            total_processed: 10,
            classified_count: 7,
            unclassified_count: 3,
            message: "3 transactions need review".to_string(),
        });
        assert!(out.contains("Total processed:  10"));
        assert!(out.contains("Classified:       7"));
        assert!(out.contains("Unclassified:     3"));
        assert!(out.contains("3 transactions need review"));
    }

    #[test]
    fn test_summary_omits_empty_message() {
        colored::control::set_override(false);
        let out = format_summary(&ProcessingResult {
            total_processed: 0,
            classified_count: 0,
            unclassified_count: 0,
            message: String::new(),
        });
        assert_eq!(out.lines().count(), 4);
    }
}
