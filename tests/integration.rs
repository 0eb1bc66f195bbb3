use {
  ego_tree::NodeId,
  html5ever::{Attribute, LocalName, QualName, local_name, namespace_url, ns},
  pretty_assertions::assert_eq,
  readmode::{
    Error, Preferences, ReadingModeSession, Request, Response, handle_request,
  },
  scraper::{ElementRef, Node, Selector, node::Element},
};

fn article_page(text: &str) -> String {
  format!(
    "<html><body>\
     <nav class=\"nav\">home | archive | about</nav>\
     <article class=\"article-content\"><p>{text}</p></article>\
     <div class=\"ad-banner\">limited time offer</div>\
     <section class=\"ad-wrapper\">sponsored reading list</section>\
     </body></html>"
  )
}

fn story() -> String {
  "The ferret escaped at dawn and was last seen near the canal. ".repeat(10)
}

fn enabled() -> Preferences {
  Preferences {
    enabled: true,
    ..Preferences::default()
  }
}

fn count(session: &ReadingModeSession, selector: &str) -> usize {
  session
    .document()
    .select(&Selector::parse(selector).unwrap())
    .count()
}

fn body_id(session: &ReadingModeSession) -> NodeId {
  session
    .document()
    .select(&Selector::parse("body").unwrap())
    .next()
    .unwrap()
    .id()
}

fn append_div(
  session: &mut ReadingModeSession,
  parent: NodeId,
  class: &str,
) -> NodeId {
  let element = Element::new(
    QualName::new(None, ns!(html), LocalName::from("div")),
    vec![Attribute {
      name: QualName::new(None, ns!(), local_name!("class")),
      value: class.into(),
    }],
  );

  session
    .document_mut()
    .tree
    .get_mut(parent)
    .unwrap()
    .append(Node::Element(element))
    .id()
}

#[test]
fn locates_the_article_container() {
  let session = ReadingModeSession::new(&article_page(&story()));

  let container = session
    .document()
    .tree
    .get(session.container())
    .and_then(ElementRef::wrap)
    .unwrap();

  assert_eq!(container.value().name(), "article");
  assert_eq!(container.value().attr("class"), Some("article-content"));
}

#[test]
fn get_content_returns_sanitized_text() {
  let story = story();

  let mut session = ReadingModeSession::new(&article_page(&story));

  let response = handle_request(&mut session, Request::GetContent);

  let Response::Content { content, success } = response else {
    panic!("expected a content response");
  };

  assert!(success);
  assert_eq!(content, story.trim());
}

#[test]
fn get_content_reports_short_pages_as_failures() {
  let mut session = ReadingModeSession::new(
    "<html><body><p>nothing much here</p></body></html>",
  );

  let response = handle_request(&mut session, Request::GetContent);

  let Response::Failure { error, success } = response else {
    panic!("expected a failure response");
  };

  assert!(!success);
  assert!(error.contains("too short"));
}

#[test]
fn extraction_boundary_sits_at_one_hundred_characters() {
  let mut session = ReadingModeSession::new(&format!(
    "<html><body><p>{}</p></body></html>",
    "a".repeat(99)
  ));

  let Err(Error::ContentTooShort { length }) = session.extract_content()
  else {
    panic!("99 characters must be rejected");
  };

  assert_eq!(length, 99);

  let mut session = ReadingModeSession::new(&format!(
    "<html><body><p>{}</p></body></html>",
    "a".repeat(100)
  ));

  assert_eq!(session.extract_content().unwrap().char_count(), 100);
}

#[test]
fn extraction_truncates_long_articles() {
  let mut session = ReadingModeSession::new(&format!(
    "<html><body><article class=\"article-content\"><p>{}</p></article></body></html>",
    "x".repeat(5000)
  ));

  let text = session.extract_content().unwrap();

  assert_eq!(text.char_count(), 4003);
  assert!(text.is_truncated());
  assert!(text.as_str().ends_with("..."));
}

#[test]
fn enabling_reading_mode_sweeps_distractions() {
  let mut session = ReadingModeSession::new(&article_page(&story()));

  let outcome = session.apply_preferences(enabled());

  assert_eq!(outcome.removed, 1);
  assert_eq!(count(&session, ".ad-banner"), 0);

  // The section is allow-listed by the classifier, so the selector hit only
  // earns it a hide.
  let document = session.document();

  let section = document
    .select(&Selector::parse(".ad-wrapper").unwrap())
    .next()
    .expect("disputed matches must survive");

  assert_eq!(
    section.value().attr("style"),
    Some("display: none !important;")
  );

  assert!(session.is_monitor_active());
}

#[test]
fn repeated_activation_keeps_one_monitor_and_removes_nothing_twice() {
  let mut session = ReadingModeSession::new(&article_page(&story()));

  let first = session.apply_preferences(enabled());
  let second = session.apply_preferences(enabled());

  assert_eq!(first.removed, 1);
  assert_eq!(second.removed, 0);
  assert!(session.is_monitor_active());
}

#[test]
fn deactivation_tears_down_monitor_and_view() {
  let mut session = ReadingModeSession::new(&article_page(&story()));

  session.apply_preferences(enabled());
  assert!(session.view().is_some());

  session.apply_preferences(Preferences::default());

  assert!(!session.is_monitor_active());
  assert!(session.view().is_none());

  // With the watch gone, reported additions are ignored.
  let body = body_id(&session);
  let late = append_div(&mut session, body, "advertisement-slot");

  assert_eq!(session.notify_added(&[late]), 0);
  assert_eq!(count(&session, ".advertisement-slot"), 1);
}

#[test]
fn monitor_removes_late_injected_ads() {
  let mut session = ReadingModeSession::new(&article_page(&story()));

  session.apply_preferences(enabled());

  let body = body_id(&session);
  let late = append_div(&mut session, body, "advertisement-slot");

  assert_eq!(session.notify_added(&[late]), 1);
  assert_eq!(count(&session, ".advertisement-slot"), 0);
}

#[test]
fn monitor_sweeps_nested_insertions_top_down() {
  let mut session = ReadingModeSession::new(&article_page(&story()));

  session.apply_preferences(enabled());

  let body = body_id(&session);
  let wrapper = append_div(&mut session, body, "async-widgets");
  let ad = append_div(&mut session, wrapper, "ad-slot");

  assert_eq!(session.notify_added(&[wrapper]), 1);

  // The wrapper survives; only the nested ad goes.
  assert_eq!(count(&session, ".async-widgets"), 1);
  assert_eq!(count(&session, ".ad-slot"), 0);

  let _ = ad;
}

#[test]
fn monitor_never_touches_the_container_subtree() {
  let mut session = ReadingModeSession::new(&article_page(&story()));

  session.apply_preferences(enabled());

  let container = session.container();
  let inside = append_div(&mut session, container, "ad-slot");

  assert_eq!(session.notify_added(&[inside]), 0);
  assert_eq!(count(&session, ".ad-slot"), 1);

  let _ = inside;
}

#[test]
fn update_reading_mode_request_prepares_the_view() {
  let mut session = ReadingModeSession::new(&article_page(&story()));

  let request: Request = serde_json::from_str(
    r##"{
      "action": "updateReadingMode",
      "preferences": {
        "enabled": true,
        "fontSize": "18",
        "lineHeight": "1.8",
        "backgroundColor": "#fdf6e3",
        "textColor": "#073642",
        "apiKey": ""
      }
    }"##,
  )
  .unwrap();

  let response = handle_request(&mut session, request);

  assert_eq!(response, Response::Acknowledged { success: true });

  let view = session.view().expect("enabling must prepare a view");

  assert!(view.container_html.contains("ferret"));
  assert!(view.stylesheet.contains("font-size: 18px !important;"));
  assert!(view.page_style.contains("#fdf6e3"));
  assert_eq!(session.preferences().font_size, "18");
}
