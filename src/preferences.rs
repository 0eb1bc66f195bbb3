use super::*;

/// User preferences for the reading view.
///
/// Persisted by the host in a flat key/value store; the engine only reads
/// them. Numeric fields stay strings to match the stored shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Preferences {
  pub enabled: bool,
  pub font_size: String,
  pub line_height: String,
  pub background_color: String,
  pub text_color: String,
  pub api_key: String,
}

impl Default for Preferences {
  fn default() -> Self {
    Self {
      enabled: false,
      font_size: "16".into(),
      line_height: "1.6".into(),
      background_color: "white".into(),
      text_color: "black".into(),
      api_key: String::new(),
    }
  }
}
