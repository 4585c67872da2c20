//! Typed view builders.
//!
//! Views never concatenate markup; they build these values and let the
//! renderer escape the text.

use crate::payees::PayeeCache;
use crate::{Category, TransactionRow};

pub const CATEGORY_PLACEHOLDER: &str = "Select a category...";
pub const PAYEE_PLACEHOLDER: &str = "Select a payee...";
pub const UNASSIGNED_PAYEE: &str = "—";
pub const MANAGE_PAYEES_LABEL: &str = "Manage Payees";

/// One `<option>` of a `<select>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn placeholder(label: &str) -> Self {
        Self {
            value: String::new(),
            label: label.to_string(),
        }
    }
}

/// Uppercase the first character, leave the rest alone.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// "MainCategory - Name"
pub fn category_label(category: &Category) -> String {
    format!("{} - {}", capitalize_first(&category.main_category), category.name)
}

pub fn category_options(categories: &[Category]) -> Vec<SelectOption> {
    std::iter::once(SelectOption::placeholder(CATEGORY_PLACEHOLDER))
        .chain(categories.iter().map(|c| SelectOption {
            value: c.id.to_string(),
            label: category_label(c),
        }))
        .collect()
}

pub fn payee_options(cache: &PayeeCache) -> Vec<SelectOption> {
    std::iter::once(SelectOption::placeholder(PAYEE_PLACEHOLDER))
        .chain(cache.iter().map(|p| SelectOption {
            value: p.id.to_string(),
            label: p.name.clone(),
        }))
        .collect()
}

/// Text of a row's payee cell
pub fn payee_cell_text(row: &TransactionRow) -> &str {
    row.payee_name
        .as_deref()
        .filter(|name| !name.is_empty())
        .unwrap_or(UNASSIGNED_PAYEE)
}

pub fn format_amount(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", amount.abs())
    } else {
        format!("${:.2}", amount)
    }
}

pub fn amount_class(amount: f64) -> &'static str {
    if amount < 0.0 {
        "amount negative"
    } else if amount > 0.0 {
        "amount positive"
    } else {
        "amount zero"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Payee;

    fn category(id: i64, name: &str, main: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
            main_category: main.to_string(),
        }
    }

    #[test]
    fn test_category_label_capitalizes_main_category() {
        assert_eq!(category_label(&category(1, "Groceries", "needs")), "Needs - Groceries");
        assert_eq!(category_label(&category(2, "Misc", "")), " - Misc");
        assert_eq!(capitalize_first("épargne"), "Épargne");
    }

    #[test]
    fn test_category_options_start_with_placeholder() {
        let options = category_options(&[category(4, "Rent", "needs"), category(9, "Games", "wants")]);
        assert_eq!(options.len(), 3);
        assert_eq!(options[0], SelectOption { value: String::new(), label: CATEGORY_PLACEHOLDER.to_string() });
        assert_eq!(options[2].value, "9");
        assert_eq!(options[2].label, "Wants - Games");
    }

    #[test]
    fn test_payee_options_follow_cache() {
        let mut cache = PayeeCache::new(vec![Payee { id: 3, name: "Grocer".to_string() }]);
        cache.insert(Payee { id: 8, name: "<b>Bakery</b>".to_string() });
        let options = payee_options(&cache);
        assert_eq!(options[0].label, PAYEE_PLACEHOLDER);
        assert_eq!(options[2].label, "<b>Bakery</b>");
        assert_eq!(options[2].value, "8");
    }

    #[test]
    fn test_payee_cell_text_fallback() {
        let mut row = TransactionRow {
            id: 1,
            date: "2025-06-01".to_string(),
            description: "Coffee".to_string(),
            amount: -3.5,
            category: None,
            payee_id: None,
            payee_name: None,
        };
        assert_eq!(payee_cell_text(&row), UNASSIGNED_PAYEE);
        row.payee_name = Some("Cafe".to_string());
        assert_eq!(payee_cell_text(&row), "Cafe");
    }

    #[test]
    fn test_amount_formatting() {
        assert_eq!(format_amount(-3.5), "-$3.50");
        assert_eq!(format_amount(1200.0), "$1200.00");
        assert_eq!(amount_class(-1.0), "amount negative");
        assert_eq!(amount_class(0.0), "amount zero");
    }
}
