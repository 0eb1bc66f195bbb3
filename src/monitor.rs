use super::*;

/// Cancellation handle owned by an installed watch. Consumed exactly once
/// when the watch is torn down.
#[derive(Debug)]
pub struct WatchHandle {
  scope: NodeId,
}

impl WatchHandle {
  fn cancel(self) -> NodeId {
    self.scope
  }
}

/// Subtree-mutation watch over the document body.
///
/// Two states, inactive and active. Installing over an active watch tears
/// the previous one down before the replacement attaches, so at most one
/// watch is ever live.
#[derive(Debug, Default)]
pub struct Monitor {
  watch: Option<WatchHandle>,
}

impl Monitor {
  /// Attaches a watch scoped to the given subtree root, disconnecting any
  /// previous watch first.
  pub fn install(&mut self, scope: NodeId) {
    self.teardown();
    self.watch = Some(WatchHandle { scope });
  }

  pub fn is_active(&self) -> bool {
    self.watch.is_some()
  }

  pub fn scope(&self) -> Option<NodeId> {
    self.watch.as_ref().map(|watch| watch.scope)
  }

  /// Disconnects the active watch, if any. Returns whether one was active.
  pub fn teardown(&mut self) -> bool {
    self.watch.take().map(WatchHandle::cancel).is_some()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn some_scope() -> (Html, NodeId) {
    let html = Html::parse_document("<html><body></body></html>");
    let scope = crate::dom::body_id(&html).unwrap();
    (html, scope)
  }

  #[test]
  fn starts_inactive() {
    let monitor = Monitor::default();

    assert!(!monitor.is_active());
    assert!(monitor.scope().is_none());
  }

  #[test]
  fn install_activates_and_teardown_consumes_once() {
    let (_html, scope) = some_scope();

    let mut monitor = Monitor::default();

    monitor.install(scope);
    assert!(monitor.is_active());
    assert_eq!(monitor.scope(), Some(scope));

    assert!(monitor.teardown());
    assert!(!monitor.is_active());

    // Second teardown finds nothing to consume.
    assert!(!monitor.teardown());
  }

  #[test]
  fn reinstall_replaces_the_previous_watch() {
    let (_html, scope) = some_scope();

    let mut monitor = Monitor::default();

    monitor.install(scope);
    monitor.install(scope);

    assert!(monitor.is_active());
    assert!(monitor.teardown());
    assert!(!monitor.teardown());
  }
}
