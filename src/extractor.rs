use super::*;

/// Hard cap on extracted text, sized for the downstream summarization call.
pub const MAX_TEXT_LENGTH: usize = 4000;

/// Extractions shorter than this are judged not to be a real article.
pub const MIN_TEXT_LENGTH: usize = 100;

const TRUNCATION_MARKER: &str = "...";

/// Selectors removed from the duplicated subtree before text extraction.
const REMOVAL_SELECTORS: &[&str] = &[
  "script",
  "style",
  "iframe",
  "nav",
  "header",
  "footer",
  ".ad",
  ".advertisement",
  ".social-share",
  ".comments",
  "#comments",
  "aside",
  ".sidebar",
  ".related-posts",
  ".meta",
  ".share",
  ".author-info",
  ".navigation",
  ".breadcrumbs",
  ".pagination",
  ".menu",
  ".search",
  "form",
  ".widget",
  ".popup",
  ".modal",
  ".newsletter",
  ".subscription",
];

static SELECTORS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
  REMOVAL_SELECTORS
    .iter()
    .map(|selector| Selector::parse(selector).unwrap())
    .collect()
});

/// Sanitized article text, immutable once constructed and bounded to
/// [`MAX_TEXT_LENGTH`] characters plus the truncation marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedText {
  text: String,
  truncated: bool,
}

impl ExtractedText {
  pub fn as_str(&self) -> &str {
    &self.text
  }

  pub fn char_count(&self) -> usize {
    self.text.chars().count()
  }

  pub fn into_string(self) -> String {
    self.text
  }

  pub fn is_truncated(&self) -> bool {
    self.truncated
  }
}

/// Produces clean plain text from the located container.
///
/// Works on a reparsed duplicate of the container markup; the live document
/// is never mutated. Fails with [`Error::ContentTooShort`] when the sanitized
/// text falls under [`MIN_TEXT_LENGTH`] characters.
pub fn extract(html: &Html, container: NodeId) -> Result<ExtractedText> {
  let markup = dom::element(html, container)
    .map_or_else(|| html.root_element().html(), |element| element.html());

  let mut duplicate = Html::parse_fragment(&markup);

  remove_unwanted(&mut duplicate);

  let text = strip_boilerplate(collapse_whitespace(&raw_text(&duplicate)));

  let length = text.chars().count();

  if length < MIN_TEXT_LENGTH {
    debug!("extracted content too short: {length} characters");
    return Err(Error::ContentTooShort { length });
  }

  if length > MAX_TEXT_LENGTH {
    debug!("content truncated to {MAX_TEXT_LENGTH} characters");

    let mut text: String = text.chars().take(MAX_TEXT_LENGTH).collect();
    text.push_str(TRUNCATION_MARKER);

    return Ok(ExtractedText {
      text,
      truncated: true,
    });
  }

  Ok(ExtractedText {
    text,
    truncated: false,
  })
}

fn collapse_whitespace(text: &str) -> String {
  let collapsed = re::WHITESPACE_RUNS.replace_all(text, " ");

  re::NEWLINE_RUNS
    .replace_all(&collapsed, "\n")
    .trim()
    .to_string()
}

fn raw_text(duplicate: &Html) -> String {
  let mut text = String::new();

  for node in duplicate.tree.root().descendants() {
    if let Node::Text(value) = node.value() {
      text.push_str(value);
    }
  }

  text
}

fn remove_unwanted(duplicate: &mut Html) {
  for selector in SELECTORS.iter() {
    let matches: Vec<NodeId> =
      duplicate.select(selector).map(|element| element.id()).collect();

    for id in matches {
      dom::detach(duplicate, id);
    }
  }
}

fn strip_boilerplate(text: String) -> String {
  let text = re::BYLINE_PREFIX.replace(&text, "");
  let text = re::READ_TIME.replace_all(&text, "");
  let text = re::SHARE_PROMPT.replace_all(&text, "");

  re::DATE_STAMP.replace_all(&text, "").trim().to_string()
}
