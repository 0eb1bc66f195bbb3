use super::*;

/// Content-bearing tags that are never classified as distractions, no matter
/// how their class or id is named.
const CONTENT_TAGS: &[&str] =
  &["article", "main", "section", "p", "h1", "h2", "h3", "h4", "h5", "h6"];

/// Class and id vocabulary associated with advertising and marketing chrome.
const AD_VOCABULARY: &[&str] = &[
  "ad",
  "ads",
  "adv",
  "sponsor",
  "promo",
  "promotion",
  "banner",
  "marketing",
  "advertisement",
  "advertising",
  "commercial",
];

/// URL fragments that mark an embedded frame as ad delivery.
const AD_FRAME_SOURCES: &[&str] = &["ad", "sponsor", "doubleclick", "adsystem"];

// One boundary pattern per vocabulary entry. The plural-s alternative and the
// dashed forms are deliberate: `ads` and `ad-banner` count, `gradient` and
// `loading` do not.
static KEYWORD_BOUNDARIES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
  AD_VOCABULARY
    .iter()
    .map(|keyword| {
      Regex::new(&format!(
        r"\b{keyword}\b|\b{keyword}s\b|\b{keyword}-|{keyword}\b|-{keyword}\b"
      ))
      .unwrap()
    })
    .collect()
});

/// Decides whether a single element is advertising or other non-content.
///
/// Pure and O(1) relative to the node: only the tag name, class, id, and (for
/// frames) the source URL are consulted, never the subtree.
pub fn is_distraction(element: ElementRef<'_>) -> bool {
  let tag = element.value().name();

  if CONTENT_TAGS.contains(&tag) {
    return false;
  }

  let class = element
    .value()
    .attr("class")
    .unwrap_or_default()
    .to_lowercase();

  let id = element.value().attr("id").unwrap_or_default().to_lowercase();

  if matches_ad_vocabulary(&class, &id) {
    return true;
  }

  tag == "iframe" && has_ad_frame_source(element)
}

fn has_ad_frame_source(element: ElementRef<'_>) -> bool {
  let source = element
    .value()
    .attr("src")
    .unwrap_or_default()
    .to_lowercase();

  AD_FRAME_SOURCES
    .iter()
    .any(|fragment| source.contains(fragment))
}

fn matches_ad_vocabulary(class: &str, id: &str) -> bool {
  AD_VOCABULARY.iter().zip(KEYWORD_BOUNDARIES.iter()).any(
    |(keyword, boundary)| {
      if !class.contains(keyword) && !id.contains(keyword) {
        return false;
      }

      // The keyword must land on a token boundary within whichever attribute
      // token contains it; a bare substring hit does not count.
      let token = class
        .split(' ')
        .find(|token| token.contains(keyword))
        .or_else(|| id.split('-').find(|token| token.contains(keyword)));

      token.is_none_or(|token| boundary.is_match(token))
    },
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  fn first_element(markup: &str) -> (Html, NodeId) {
    let html =
      Html::parse_document(&format!("<html><body>{markup}</body></html>"));

    let id = crate::dom::body_id(&html)
      .and_then(|body| {
        html
          .tree
          .get(body)
          .unwrap()
          .children()
          .find(|child| child.value().is_element())
      })
      .map(|node| node.id())
      .unwrap();

    (html, id)
  }

  fn classify(markup: &str) -> bool {
    let (html, id) = first_element(markup);
    is_distraction(crate::dom::element(&html, id).unwrap())
  }

  #[test]
  fn content_tags_are_never_distractions() {
    assert!(!classify("<p class=\"ad-info\">text</p>"));
    assert!(!classify("<section class=\"advertisement\">text</section>"));
    assert!(!classify("<article id=\"ad-rail\">text</article>"));
  }

  #[test]
  fn token_bounded_keywords_are_flagged() {
    assert!(classify("<div class=\"ad-banner\">buy</div>"));
    assert!(classify("<div class=\"ads\">buy</div>"));
    assert!(classify("<div id=\"sponsor-box\">buy</div>"));
    assert!(classify("<div class=\"advertisement-slot\">buy</div>"));
  }

  #[test]
  fn substring_hits_without_a_boundary_are_ignored() {
    assert!(!classify("<div class=\"gradient\">text</div>"));
    assert!(!classify("<div class=\"loading\">text</div>"));
    assert!(!classify("<div id=\"shadow\">text</div>"));
  }

  #[test]
  fn frames_with_ad_serving_sources_are_flagged() {
    assert!(classify(
      "<iframe src=\"https://securepubads.doubleclick.net/x\"></iframe>"
    ));
    assert!(classify("<iframe src=\"https://cdn.adsystem.io/u\"></iframe>"));
    assert!(!classify("<iframe src=\"https://example.org/video\"></iframe>"));
  }

  #[test]
  fn classification_is_rederivable() {
    let (html, id) = first_element("<div class=\"promo\">deal</div>");
    let element = crate::dom::element(&html, id).unwrap();

    assert_eq!(is_distraction(element), is_distraction(element));
  }
}
