use super::*;

pub(crate) static BYLINE_PREFIX: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(?i)^(?:by|author)[:\s].*?\n").unwrap());

pub(crate) static DATE_STAMP: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(
    r"(?i)\b(?:published|updated|posted)\s*(?:on|at)?\s*:?\s*\w+\s+\d+,?\s+\d{4}\b",
  )
  .unwrap()
});

pub(crate) static NEWLINE_RUNS: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\n+").unwrap());

pub(crate) static READ_TIME: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(?i)\b\d+\s+(?:min|minute)s?\s+read\b").unwrap());

pub(crate) static SHARE_PROMPT: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?i)share\s*(?:on|via)\s*(?:facebook|twitter|linkedin|email)")
    .unwrap()
});

pub(crate) static WHITESPACE_RUNS: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\s+").unwrap());
