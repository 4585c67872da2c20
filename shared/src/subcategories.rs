//! Subcategory lists on the plan settings page.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ApiError;
use crate::flash::FlashLevel;
use crate::{ManageSubcategoryOutcome, ManageSubcategoryRequest, SubcategoryAction};

pub const EMPTY_PLACEHOLDER: &str = "No subcategories yet.";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubcategoryError {
    #[error("Subcategory name is required")]
    EmptyName,
}

/// Subcategories under one main category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubcategoryGroup {
    /// Main category key, as sent to the API (e.g. "needs")
    pub category: String,
    /// Heading shown above the list
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub subcategories: Vec<String>,
}

impl SubcategoryGroup {
    pub fn list_dom_id(&self) -> String {
        format!("subcategory-list-{}", self.category)
    }

    pub fn item_dom_id(&self, name: &str) -> String {
        item_dom_id(&self.category, name)
    }

    pub fn heading(&self) -> &str {
        if self.label.is_empty() {
            &self.category
        } else {
            &self.label
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.subcategories.iter().any(|s| s == name)
    }

    /// Returns false when the name was already listed.
    pub fn add(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.subcategories.push(name.to_string());
        true
    }

    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.subcategories.len();
        self.subcategories.retain(|s| s != name);
        self.subcategories.len() != before
    }

    pub fn shows_placeholder(&self) -> bool {
        self.subcategories.is_empty()
    }
}

pub fn item_dom_id(category: &str, name: &str) -> String {
    format!("subcategory-item-{category}-{name}")
}

/// Build a request. Typed names are trimmed for an add; a delete sends the
/// listed name exactly as the server rendered it.
pub fn build_request(
    action: SubcategoryAction,
    category: &str,
    name: &str,
) -> Result<ManageSubcategoryRequest, SubcategoryError> {
    if name.trim().is_empty() {
        return Err(SubcategoryError::EmptyName);
    }
    let subcategory_name = match action {
        SubcategoryAction::Add => name.trim().to_string(),
        SubcategoryAction::Delete => name.to_string(),
    };
    Ok(ManageSubcategoryRequest {
        action,
        category: category.to_string(),
        subcategory_name,
    })
}

/// All subcategory groups on the page, plus the text typed in each
/// list's add input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubcategoryBoard {
    groups: Vec<SubcategoryGroup>,
    drafts: HashMap<String, String>,
}

impl SubcategoryBoard {
    pub fn new(groups: Vec<SubcategoryGroup>) -> Self {
        Self {
            groups,
            drafts: HashMap::new(),
        }
    }

    pub fn draft(&self, category: &str) -> &str {
        self.drafts.get(category).map(String::as_str).unwrap_or("")
    }

    pub fn drafts(&self) -> &HashMap<String, String> {
        &self.drafts
    }

    pub fn set_draft(&mut self, category: &str, value: String) {
        self.drafts.insert(category.to_string(), value);
    }

    pub fn groups(&self) -> &[SubcategoryGroup] {
        &self.groups
    }

    pub fn group(&self, category: &str) -> Option<&SubcategoryGroup> {
        self.groups.iter().find(|g| g.category == category)
    }

    /// Patch the matching list for an accepted request. Unknown categories
    /// are ignored, mirroring a list that is not on the page.
    pub fn apply(&mut self, request: &ManageSubcategoryRequest) -> bool {
        let Some(group) = self.groups.iter_mut().find(|g| g.category == request.category) else {
            return false;
        };
        match request.action {
            SubcategoryAction::Add => group.add(&request.subcategory_name),
            SubcategoryAction::Delete => group.remove(&request.subcategory_name),
        }
    }

    /// Fold a finished request into the board.
    ///
    /// The list is patched only when the server accepted the change, and an
    /// accepted add also clears that list's input. The returned notification
    /// is shown either way.
    pub fn handle_response(
        &mut self,
        request: &ManageSubcategoryRequest,
        result: &Result<ManageSubcategoryOutcome, ApiError>,
    ) -> (FlashLevel, String) {
        match result {
            Ok(outcome) => {
                if outcome.accepted {
                    self.apply(request);
                    if request.action == SubcategoryAction::Add {
                        self.drafts.remove(&request.category);
                    }
                }
                (
                    FlashLevel::from_status(&outcome.body.status),
                    outcome.body.message.clone(),
                )
            }
            Err(_) => (FlashLevel::Danger, UNEXPECTED_ERROR_MESSAGE.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ManageSubcategoryResponse;

    fn board() -> SubcategoryBoard {
        SubcategoryBoard::new(vec![
            SubcategoryGroup {
                category: "food".to_string(),
                label: "Food".to_string(),
                subcategories: vec!["coffee".to_string()],
            },
            SubcategoryGroup {
                category: "wants".to_string(),
                label: String::new(),
                subcategories: vec![],
            },
        ])
    }

    fn outcome(accepted: bool, status: &str, message: &str) -> Result<ManageSubcategoryOutcome, ApiError> {
        Ok(ManageSubcategoryOutcome {
            accepted,
            body: ManageSubcategoryResponse {
                status: status.to_string(),
                message: message.to_string(),
            },
        })
    }

    #[test]
    fn test_deleting_last_entry_shows_placeholder() {
        let mut board = board();
        let request = build_request(SubcategoryAction::Delete, "food", "coffee").unwrap();
        let flash = board.handle_response(&request, &outcome(true, "success", "Subcategory 'coffee' deleted."));

        let food = board.group("food").unwrap();
        assert!(food.shows_placeholder());
        assert_eq!(flash, (FlashLevel::Success, "Subcategory 'coffee' deleted.".to_string()));
    }

    #[test]
    fn test_add_inserts_exactly_one_entry() {
        let mut board = board();
        let request = build_request(SubcategoryAction::Add, "wants", " games ").unwrap();
        board.handle_response(&request, &outcome(true, "success", "Added"));

        let wants = board.group("wants").unwrap();
        assert_eq!(wants.subcategories, vec!["games".to_string()]);
        assert!(!wants.shows_placeholder());

        board.handle_response(&request, &outcome(true, "success", "Added"));
        assert_eq!(board.group("wants").unwrap().subcategories.len(), 1);
    }

    #[test]
    fn test_rejected_request_leaves_list_but_reports() {
        let mut board = board();
        let request = build_request(SubcategoryAction::Delete, "food", "coffee").unwrap();
        let flash = board.handle_response(&request, &outcome(false, "error", "Not allowed"));

        assert_eq!(board.group("food").unwrap().subcategories, vec!["coffee".to_string()]);
        assert_eq!(flash, (FlashLevel::Danger, "Not allowed".to_string()));
    }

    #[test]
    fn test_network_failure_reports_generic_message() {
        let mut board = board();
        let request = build_request(SubcategoryAction::Add, "food", "tea").unwrap();
        let flash = board.handle_response(&request, &Err(ApiError::Network("offline".to_string())));

        assert_eq!(flash, (FlashLevel::Danger, UNEXPECTED_ERROR_MESSAGE.to_string()));
        assert!(!board.group("food").unwrap().contains("tea"));
    }

    #[test]
    fn test_runtime_added_rows_delete_like_initial_rows() {
        let mut board = board();
        let add = build_request(SubcategoryAction::Add, "food", "snacks").unwrap();
        board.apply(&add);
        let delete = build_request(SubcategoryAction::Delete, "food", "snacks").unwrap();
        assert!(board.apply(&delete));
        assert_eq!(board.group("food").unwrap().subcategories, vec!["coffee".to_string()]);
    }

    #[test]
    fn test_delete_sends_listed_name_verbatim() {
        let mut board = SubcategoryBoard::new(vec![SubcategoryGroup {
            category: "food".to_string(),
            label: String::new(),
            subcategories: vec!["coffee ".to_string()],
        }]);
        let request = build_request(SubcategoryAction::Delete, "food", "coffee ").unwrap();
        assert_eq!(request.subcategory_name, "coffee ");

        board.handle_response(&request, &outcome(true, "success", "Deleted"));
        assert!(board.group("food").unwrap().shows_placeholder());
    }

    #[test]
    fn test_accepted_add_clears_input() {
        let mut board = board();
        board.set_draft("wants", " games ".to_string());
        let request = build_request(SubcategoryAction::Add, "wants", board.draft("wants")).unwrap();

        board.handle_response(&request, &outcome(true, "success", "Added"));
        assert_eq!(board.draft("wants"), "");
    }

    #[test]
    fn test_rejected_or_failed_add_keeps_input() {
        let mut board = board();
        board.set_draft("food", "tea".to_string());
        let request = build_request(SubcategoryAction::Add, "food", "tea").unwrap();

        board.handle_response(&request, &outcome(false, "error", "Already exists"));
        assert_eq!(board.draft("food"), "tea");
        board.handle_response(&request, &Err(ApiError::Network("offline".to_string())));
        assert_eq!(board.draft("food"), "tea");
    }

    #[test]
    fn test_delete_keeps_other_list_inputs() {
        let mut board = board();
        board.set_draft("food", "tea".to_string());
        let request = build_request(SubcategoryAction::Delete, "food", "coffee").unwrap();

        board.handle_response(&request, &outcome(true, "success", "Deleted"));
        assert_eq!(board.draft("food"), "tea");
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(
            build_request(SubcategoryAction::Add, "food", "  "),
            Err(SubcategoryError::EmptyName)
        );
        assert_eq!(
            build_request(SubcategoryAction::Delete, "food", ""),
            Err(SubcategoryError::EmptyName)
        );
    }

    #[test]
    fn test_dom_ids_and_heading() {
        let board = board();
        let food = board.group("food").unwrap();
        assert_eq!(food.list_dom_id(), "subcategory-list-food");
        assert_eq!(food.item_dom_id("coffee"), "subcategory-item-food-coffee");
        assert_eq!(food.heading(), "Food");
        assert_eq!(board.group("wants").unwrap().heading(), "wants");
    }
}
