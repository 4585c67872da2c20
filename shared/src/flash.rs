//! Dismissible notifications ("flash" banners).

/// Banners disappear on their own after this long.
pub const FLASH_DISMISS_MS: u32 = 5000;

/// Severity of a banner, mapped from the server's free-form status string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashLevel {
    Success,
    Info,
    Warning,
    Danger,
}

impl FlashLevel {
    pub fn from_status(status: &str) -> Self {
        match status.trim().to_ascii_lowercase().as_str() {
            "success" | "ok" => FlashLevel::Success,
            "warning" | "warn" => FlashLevel::Warning,
            "error" | "danger" => FlashLevel::Danger,
            _ => FlashLevel::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FlashLevel::Success => "success",
            FlashLevel::Info => "info",
            FlashLevel::Warning => "warning",
            FlashLevel::Danger => "danger",
        }
    }

    pub fn css_class(&self) -> String {
        format!("alert alert-{} alert-dismissible fade show", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashMessage {
    pub id: u64,
    pub level: FlashLevel,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlashBoard {
    messages: Vec<FlashMessage>,
    next_id: u64,
}

impl FlashBoard {
    /// Show a banner; returns its id for later dismissal.
    pub fn push(&mut self, level: FlashLevel, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.messages.push(FlashMessage {
            id,
            level,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.messages.len();
        self.messages.retain(|m| m.id != id);
        self.messages.len() != before
    }

    pub fn messages(&self) -> &[FlashMessage] {
        &self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_status() {
        assert_eq!(FlashLevel::from_status("success"), FlashLevel::Success);
        assert_eq!(FlashLevel::from_status("error"), FlashLevel::Danger);
        assert_eq!(FlashLevel::from_status("Danger"), FlashLevel::Danger);
        assert_eq!(FlashLevel::from_status("warning"), FlashLevel::Warning);
        assert_eq!(FlashLevel::from_status(""), FlashLevel::Info);
    }

    #[test]
    fn test_css_class() {
        assert_eq!(
            FlashLevel::Success.css_class(),
            "alert alert-success alert-dismissible fade show"
        );
    }

    #[test]
    fn test_push_and_dismiss() {
        let mut board = FlashBoard::default();
        let first = board.push(FlashLevel::Success, "Added");
        let second = board.push(FlashLevel::Danger, "Nope");
        assert_eq!(board.messages().len(), 2);
        assert!(board.dismiss(first));
        assert!(!board.dismiss(first));
        assert_eq!(board.messages()[0].id, second);
    }
}
