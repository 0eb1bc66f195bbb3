use super::*;

/// Content selectors ordered from most specific to weakest fallback.
const CONTENT_SELECTORS: &[&str] = &[
  "article[class*=\"article\"]",
  "article[class*=\"post\"]",
  "div[class*=\"article-content\"]",
  "div[class*=\"post-content\"]",
  "[itemprop=\"articleBody\"]",
  ".article-content",
  ".post-content",
  ".entry-content",
  ".article__content",
  ".article__body",
  ".post__content",
  ".post__body",
  ".story-content",
  ".story-body",
  ".article-body",
  "article",
  "[role=\"main\"]",
  "main",
  "#content",
  ".content",
  ".post",
  ".article",
];

/// Class tokens that exclude an element from the fallback scan.
const EXCLUDED_CLASSES: &[&str] = &["nav", "footer", "comments"];

/// Tags that never hold article content.
const EXCLUDED_TAGS: &[&str] = &["script", "style", "noscript", "iframe"];

/// Minimum trimmed character count before a candidate is accepted.
const MIN_CANDIDATE_LENGTH: usize = 200;

/// Minimum whitespace-delimited word count for fallback candidates.
const MIN_CANDIDATE_WORDS: usize = 30;

/// Candidates spanning more than this share of the body text are wrappers
/// around the whole page, not content.
const BODY_LENGTH_RATIO: f64 = 0.95;

static SELECTORS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
  CONTENT_SELECTORS
    .iter()
    .map(|selector| Selector::parse(selector).unwrap())
    .collect()
});

/// Selects the single element most likely to hold the article body.
///
/// Never errors: when neither the selector ladder nor the largest-container
/// scan produces an acceptable candidate, the document body itself is the
/// container.
pub fn locate_main_content(html: &Html) -> NodeId {
  for (raw, selector) in CONTENT_SELECTORS.iter().zip(SELECTORS.iter()) {
    let Some(candidate) = best_selector_match(html, selector) else {
      continue;
    };

    if dom::trimmed_text(html, candidate).chars().count()
      > MIN_CANDIDATE_LENGTH
    {
      debug!("found content using selector: {raw}");
      return candidate;
    }
  }

  debug!("no content selector matched, scanning for the largest text container");

  if let Some(candidate) = largest_text_container(html) {
    return candidate;
  }

  dom::body_id(html).unwrap_or_else(|| html.tree.root().id())
}

/// Among a selector's matches, picks the one with the longest trimmed text;
/// the first in document order wins ties.
fn best_selector_match(html: &Html, selector: &Selector) -> Option<NodeId> {
  let mut best: Option<(NodeId, usize)> = None;

  for element in html.select(selector) {
    let length = dom::trimmed_text(html, element.id()).chars().count();

    match best {
      Some((_, longest)) if length <= longest => {}
      _ => best = Some((element.id(), length)),
    }
  }

  best.map(|(id, _)| id)
}

fn is_excluded(element: ElementRef<'_>) -> bool {
  if EXCLUDED_TAGS.contains(&element.value().name()) {
    return true;
  }

  element
    .value()
    .attr("class")
    .unwrap_or_default()
    .split_whitespace()
    .any(|token| EXCLUDED_CLASSES.contains(&token))
}

/// Full-tree fallback: every element under `<body>` with enough prose,
/// largest first, preferring one that is not effectively the whole page.
fn largest_text_container(html: &Html) -> Option<NodeId> {
  let body = dom::body_id(html)?;

  let body_length = dom::collect_text(html, body).chars().count();

  let mut candidates: Vec<(NodeId, usize)> = html
    .tree
    .get(body)?
    .descendants()
    .filter(|node| node.id() != body)
    .filter_map(ElementRef::wrap)
    .filter(|element| !is_excluded(*element))
    .filter(|element| !is_distraction(*element))
    .filter_map(|element| {
      let trimmed = dom::trimmed_text(html, element.id());

      let qualifies = trimmed.chars().count() > MIN_CANDIDATE_LENGTH
        && trimmed.split_whitespace().count() > MIN_CANDIDATE_WORDS;

      qualifies.then(|| {
        let raw = dom::collect_text(html, element.id()).chars().count();
        (element.id(), raw)
      })
    })
    .collect();

  if candidates.is_empty() {
    return None;
  }

  candidates.sort_by(|a, b| b.1.cmp(&a.1));

  let ceiling = f64::from(u32::try_from(body_length).unwrap_or(u32::MAX))
    * BODY_LENGTH_RATIO;

  let chosen = candidates
    .iter()
    .find(|(_, length)| {
      *length > MIN_CANDIDATE_LENGTH
        && f64::from(u32::try_from(*length).unwrap_or(u32::MAX)) < ceiling
    })
    .or_else(|| candidates.first())
    .map(|(id, _)| *id);

  if let Some(id) = chosen {
    debug!(
      "found main content container with length: {}",
      dom::collect_text(html, id).chars().count()
    );
  }

  chosen
}
