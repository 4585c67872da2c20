//! Inline payee picker.
//!
//! At most one dropdown is open at a time. Every open gets a fresh
//! [`PickerToken`]; responses that arrive after their dropdown was replaced
//! or dismissed carry a stale token and must not close the current one.

use crate::{PayeeId, TransactionId};

/// Page coordinates of the dropdown's top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropdownAnchor {
    pub top: f64,
    pub left: f64,
}

impl DropdownAnchor {
    /// Place the dropdown right under a cell, given the cell's viewport
    /// rectangle and the current page scroll.
    pub fn below(rect_bottom: f64, rect_left: f64, scroll_x: f64, scroll_y: f64) -> Self {
        Self {
            top: rect_bottom + scroll_y,
            left: rect_left + scroll_x,
        }
    }

    pub fn style(&self) -> String {
        format!("top: {}px; left: {}px;", self.top, self.left)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PickerToken(u64);

/// What the user clicked inside the dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEntry {
    Payee { id: PayeeId, name: String },
    ManagePayees,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OpenPicker {
    pub token: PickerToken,
    pub transaction_id: TransactionId,
    pub anchor: DropdownAnchor,
    /// Set once a payee was chosen; further clicks are ignored
    pub pending: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PayeePicker {
    open: Option<OpenPicker>,
    next_token: u64,
}

impl PayeePicker {
    /// Open for a transaction row, replacing any dropdown already open.
    pub fn open(&mut self, transaction_id: TransactionId, anchor: DropdownAnchor) -> PickerToken {
        self.next_token += 1;
        let token = PickerToken(self.next_token);
        self.open = Some(OpenPicker {
            token,
            transaction_id,
            anchor,
            pending: false,
        });
        token
    }

    pub fn current(&self) -> Option<&OpenPicker> {
        self.open.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn is_current(&self, token: PickerToken) -> bool {
        self.open.as_ref().is_some_and(|o| o.token == token)
    }

    /// Mark the current dropdown as having accepted its one selection.
    ///
    /// Returns the transaction the selection applies to, or `None` if the
    /// token is stale or a selection was already taken.
    pub fn take_selection(&mut self, token: PickerToken) -> Option<TransactionId> {
        let open = self.open.as_mut().filter(|o| o.token == token && !o.pending)?;
        open.pending = true;
        Some(open.transaction_id)
    }

    pub fn close(&mut self) -> bool {
        self.open.take().is_some()
    }

    /// Close only if `token` still identifies the open dropdown.
    pub fn close_if_current(&mut self, token: PickerToken) -> bool {
        if self.is_current(token) {
            self.open = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor() -> DropdownAnchor {
        DropdownAnchor::below(120.0, 40.0, 0.0, 300.0)
    }

    #[test]
    fn test_anchor_adds_scroll_offset() {
        let anchor = DropdownAnchor::below(120.0, 40.0, 5.0, 300.0);
        assert_eq!(anchor.top, 420.0);
        assert_eq!(anchor.left, 45.0);
        assert_eq!(anchor.style(), "top: 420px; left: 45px;");
    }

    #[test]
    fn test_opening_replaces_previous() {
        let mut picker = PayeePicker::default();
        let first = picker.open(1, anchor());
        let second = picker.open(2, anchor());
        assert_ne!(first, second);
        assert!(!picker.is_current(first));
        assert!(picker.is_current(second));
        assert_eq!(picker.current().map(|o| o.transaction_id), Some(2));
    }

    #[test]
    fn test_single_selection_per_dropdown() {
        let mut picker = PayeePicker::default();
        let token = picker.open(7, anchor());
        assert_eq!(picker.take_selection(token), Some(7));
        assert_eq!(picker.take_selection(token), None);
    }

    #[test]
    fn test_stale_token_cannot_close_new_dropdown() {
        let mut picker = PayeePicker::default();
        let stale = picker.open(1, anchor());
        let fresh = picker.open(2, anchor());
        assert!(!picker.close_if_current(stale));
        assert!(picker.is_current(fresh));
        assert!(picker.close_if_current(fresh));
        assert!(!picker.is_open());
    }

    #[test]
    fn test_close_when_nothing_open() {
        let mut picker = PayeePicker::default();
        assert!(!picker.close());
    }
}
