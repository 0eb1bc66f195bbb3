#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("extracted content is too short to be an article ({length} characters)")]
  ContentTooShort { length: usize },
}
