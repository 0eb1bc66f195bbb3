use super::*;

/// Structural selectors that flag likely ad units for the one-shot sweep.
/// Broader and fuzzier than the classifier, which is why deletion requires
/// the classifier's independent confirmation.
const DISTRACTION_SELECTORS: &[&str] = &[
  "[class*=\"ad-\"]",
  "[class*=\"ads-\"]",
  "[class*=\"-ad-\"]",
  "[class*=\"-ads-\"]",
  "[id*=\"ad-\"]",
  "[id*=\"ads-\"]",
  "[id*=\"-ad-\"]",
  "[id*=\"-ads-\"]",
  ".ad",
  ".ads",
  ".advertisement",
  ".advertising",
  ".advert",
  ".banner-ad",
  ".displayAd",
  ".google-ad",
  ".dfp-ad",
  "ins.adsbygoogle",
  "[data-ad]",
  "[data-ads]",
  "[data-ad-unit]",
  "[data-adunit]",
  "[data-advertisement]",
  ".ad-container",
  ".ad-wrapper",
  ".ad-box",
  ".ad-unit",
  ".ad-slot",
  ".ad-banner",
  ".pub_300x250",
  ".pub_728x90",
  "div[id*=\"google_ads\"]",
  "div[id*=\"doubleclick\"]",
  "amp-ad",
  "amp-embed",
  "[id*=\"outbrain\"]",
  "[id*=\"taboola\"]",
];

static SELECTORS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
  DISTRACTION_SELECTORS
    .iter()
    .map(|selector| Selector::parse(selector).unwrap())
    .collect()
});

/// Counts of nodes deleted and hidden by a removal pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SweepOutcome {
  pub hidden: usize,
  pub removed: usize,
}

/// One-shot distraction pass over the live document.
///
/// Matches are skipped when they sit inside the content container or contain
/// it. A match the classifier confirms is deleted; a match it disputes is
/// only hidden, which neutralizes layout impact without risking content.
pub fn remove_distractions(html: &mut Html, container: NodeId) -> SweepOutcome {
  let mut outcome = SweepOutcome::default();

  for selector in SELECTORS.iter() {
    let matches: Vec<NodeId> =
      html.select(selector).map(|element| element.id()).collect();

    for id in matches {
      if dom::is_within(html, id, container)
        || dom::is_within(html, container, id)
      {
        continue;
      }

      let confirmed = dom::element(html, id).is_some_and(is_distraction);

      if confirmed {
        dom::detach(html, id);
        outcome.removed += 1;
      } else {
        hide(html, id);
        outcome.hidden += 1;
      }
    }
  }

  debug!(
    "distraction sweep removed {} and hid {} nodes",
    outcome.removed, outcome.hidden
  );

  outcome
}

/// Mutation-watch callback: classifies newly added nodes top-down and deletes
/// confirmed distractions without rescanning the whole document.
///
/// Uses an explicit queue rather than recursion so pathological markup depth
/// cannot overflow the stack. A node that is itself a distraction is deleted
/// whole; otherwise its element children are queued.
pub fn sweep_added(
  html: &mut Html,
  container: NodeId,
  added: &[NodeId],
) -> usize {
  let mut removed = 0;

  let mut queue: VecDeque<NodeId> = added.iter().copied().collect();

  while let Some(id) = queue.pop_front() {
    if dom::is_within(html, id, container)
      || dom::is_within(html, container, id)
    {
      continue;
    }

    let Some(element) = dom::element(html, id) else {
      continue;
    };

    if is_distraction(element) {
      dom::detach(html, id);
      removed += 1;
      continue;
    }

    let children: Vec<NodeId> = element
      .children()
      .filter(|child| child.value().is_element())
      .map(|child| child.id())
      .collect();

    queue.extend(children);
  }

  removed
}

fn hide(html: &mut Html, id: NodeId) {
  if let Some(mut node) = html.tree.get_mut(id)
    && let Node::Element(element) = node.value()
  {
    element.attrs.insert(
      QualName::new(None, ns!(), local_name!("style")),
      "display: none !important;".into(),
    );
  }
}
