use super::*;

/// Reading-mode state for a single page.
///
/// Owns the parsed document, the selected content container, the mutation
/// monitor, and the prepared reader view. One session is live per page;
/// re-activation replaces state wholly rather than merging into it.
#[derive(Debug)]
pub struct ReadingModeSession {
  container: NodeId,
  html: Html,
  monitor: Monitor,
  preferences: Preferences,
  view: Option<ReaderView>,
}

impl ReadingModeSession {
  pub fn new(page: &str) -> Self {
    let html = Html::parse_document(page);

    let container = locate_main_content(&html);

    Self {
      container,
      html,
      monitor: Monitor::default(),
      preferences: Preferences::default(),
      view: None,
    }
  }

  /// Applies a fresh preference record.
  ///
  /// When reading mode is enabled this reselects the content container,
  /// prepares the styled view, sweeps distractions, and (re)installs the
  /// mutation watch. When disabled it tears the watch down and drops the
  /// view. The container is immutable between these calls.
  pub fn apply_preferences(&mut self, preferences: Preferences) -> SweepOutcome {
    let mut outcome = SweepOutcome::default();

    if preferences.enabled {
      self.container = locate_main_content(&self.html);
      self.view = Some(render::render(&self.html, self.container, &preferences));

      outcome = remove_distractions(&mut self.html, self.container);

      let scope = dom::body_id(&self.html)
        .unwrap_or_else(|| self.html.tree.root().id());

      self.monitor.install(scope);
    } else {
      self.monitor.teardown();
      self.view = None;
    }

    self.preferences = preferences;

    outcome
  }

  pub fn container(&self) -> NodeId {
    self.container
  }

  pub fn document(&self) -> &Html {
    &self.html
  }

  /// Mutable document access for the host environment. Additions made here
  /// should be reported through [`ReadingModeSession::notify_added`] so the
  /// monitor can sweep them.
  pub fn document_mut(&mut self) -> &mut Html {
    &mut self.html
  }

  /// Locates the content container afresh and extracts sanitized text for
  /// the caller, typically on its way to a summarization endpoint.
  pub fn extract_content(&mut self) -> Result<ExtractedText> {
    self.container = locate_main_content(&self.html);

    extract(&self.html, self.container)
  }

  pub fn is_monitor_active(&self) -> bool {
    self.monitor.is_active()
  }

  /// Mutation callback invoked by the host with a batch of newly added
  /// nodes, in insertion order. Idempotent: nodes already deleted are
  /// classified again but deleting them twice has no further effect.
  pub fn notify_added(&mut self, added: &[NodeId]) -> usize {
    if !self.monitor.is_active() {
      return 0;
    }

    sweep_added(&mut self.html, self.container, added)
  }

  pub fn preferences(&self) -> &Preferences {
    &self.preferences
  }

  pub fn view(&self) -> Option<&ReaderView> {
    self.view.as_ref()
  }
}
