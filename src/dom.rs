use super::*;

/// Finds the `<body>` element of a parsed document.
pub(crate) fn body_id(html: &Html) -> Option<NodeId> {
  html
    .tree
    .root()
    .children()
    .find(
      |child| matches!(child.value(), Node::Element(el) if el.name() == "html"),
    )?
    .children()
    .find(
      |child| matches!(child.value(), Node::Element(el) if el.name() == "body"),
    )
    .map(|node| node.id())
}

/// Concatenates the raw text of a node's descendants, whitespace included.
pub(crate) fn collect_text(html: &Html, id: NodeId) -> String {
  let Some(node) = html.tree.get(id) else {
    return String::new();
  };

  let mut text = String::new();

  for descendant in node.descendants() {
    if let Node::Text(value) = descendant.value() {
      text.push_str(value);
    }
  }

  text
}

pub(crate) fn detach(html: &mut Html, id: NodeId) {
  if let Some(mut node) = html.tree.get_mut(id) {
    node.detach();
  }
}

pub(crate) fn element(html: &Html, id: NodeId) -> Option<ElementRef<'_>> {
  html.tree.get(id).and_then(ElementRef::wrap)
}

/// Returns true when `node` is `ancestor` or sits anywhere below it.
pub(crate) fn is_within(html: &Html, node: NodeId, ancestor: NodeId) -> bool {
  html.tree.get(node).is_some_and(|node| {
    node.id() == ancestor
      || node.ancestors().any(|parent| parent.id() == ancestor)
  })
}

pub(crate) fn trimmed_text(html: &Html, id: NodeId) -> String {
  collect_text(html, id).trim().to_string()
}
