use super::*;

/// Inbound request from the popup or background collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Request {
  GetContent,
  UpdateReadingMode { preferences: Preferences },
}

/// Structured reply to a [`Request`].
///
/// Extraction failures cross the collaborator boundary as data, never as a
/// panic, so presentation layers can show a user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
  Content { content: String, success: bool },
  Failure { error: String, success: bool },
  Acknowledged { success: bool },
}

impl Response {
  fn content(text: ExtractedText) -> Self {
    Self::Content {
      content: text.into_string(),
      success: true,
    }
  }

  fn failure(error: &Error) -> Self {
    Self::Failure {
      error: error.to_string(),
      success: false,
    }
  }
}

pub fn handle_request(
  session: &mut ReadingModeSession,
  request: Request,
) -> Response {
  match request {
    Request::GetContent => match session.extract_content() {
      Ok(text) => Response::content(text),
      Err(error) => Response::failure(&error),
    },
    Request::UpdateReadingMode { preferences } => {
      session.apply_preferences(preferences);

      Response::Acknowledged { success: true }
    }
  }
}
