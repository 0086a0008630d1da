//! Text editor state.

use serde::{Deserialize, Serialize};

/// Observable state of a [`TextEditor`](crate::TextEditor).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextState {
    pub text: String,
}
