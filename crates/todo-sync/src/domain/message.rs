//! User-facing error messages

use serde::{Deserialize, Serialize};

/// The one error the banner can show at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ErrorMessage {
    #[default]
    None,
    EmptyTitle,
    LoadFailed,
    AddFailed,
    DeleteFailed,
    UpdateFailed,
}

impl ErrorMessage {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorMessage::None => "",
            ErrorMessage::EmptyTitle => "Title should not be empty",
            ErrorMessage::LoadFailed => "Unable to load todos",
            ErrorMessage::AddFailed => "Unable to add a todo",
            ErrorMessage::DeleteFailed => "Unable to delete a todo",
            ErrorMessage::UpdateFailed => "Unable to update a todo",
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, ErrorMessage::None)
    }
}

impl std::fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
