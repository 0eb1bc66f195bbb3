use super::*;

const CONTAINER_ID: &str = "reading-mode-container";
const STYLE_ID: &str = "reading-mode-styles";

const FONT_STACK: &str = "system-ui, -apple-system, BlinkMacSystemFont, \
  'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, 'Open Sans', \
  'Helvetica Neue', sans-serif";

/// Styled reading view prepared for the host page.
///
/// The engine clones the container markup and parameterizes the styles; the
/// host is responsible for grafting the container and stylesheet into its
/// live page and for restoring the original styles on deactivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReaderView {
  /// Cloned content wrapped in the isolated reader container.
  pub container_html: String,
  /// Inline style the host applies to both `<html>` and `<body>`.
  pub page_style: String,
  /// Contents for the `#reading-mode-styles` sheet.
  pub stylesheet: String,
}

impl ReaderView {
  /// Id of the isolated container the host mounts `container_html` under.
  pub fn container_id() -> &'static str {
    CONTAINER_ID
  }

  /// Id for the `<style>` element holding `stylesheet`.
  pub fn style_element_id() -> &'static str {
    STYLE_ID
  }
}

pub(crate) fn render(
  html: &Html,
  container: NodeId,
  preferences: &Preferences,
) -> ReaderView {
  let clone = dom::element(html, container)
    .map_or_else(String::new, |element| element.html());

  let background = &preferences.background_color;
  let text = &preferences.text_color;

  let container_style = format!(
    "background-color: {background} !important; \
     color: {text} !important; \
     width: 100% !important; \
     max-width: 800px !important; \
     margin: 0 auto !important; \
     padding: 20px !important; \
     position: relative !important; \
     z-index: 1000 !important; \
     box-sizing: border-box !important;"
  );

  ReaderView {
    container_html: format!(
      "<div id=\"{CONTAINER_ID}\" style=\"{container_style}\">{clone}</div>"
    ),
    page_style: format!(
      "background-color: {background} !important; \
       color: {text} !important; \
       height: 100% !important; \
       margin: 0 !important; \
       padding: 0 !important; \
       overflow-x: hidden !important;"
    ),
    stylesheet: stylesheet(preferences),
  }
}

fn stylesheet(preferences: &Preferences) -> String {
  format!(
    "body.reading-mode-enabled > *:not(#{CONTAINER_ID}) {{\n\
     \x20 display: none !important;\n\
     }}\n\
     #{CONTAINER_ID} {{\n\
     \x20 isolation: isolate !important;\n\
     }}\n\
     #{CONTAINER_ID} * {{\n\
     \x20 max-width: 100% !important;\n\
     \x20 box-sizing: border-box !important;\n\
     \x20 font-size: {font_size}px !important;\n\
     \x20 line-height: {line_height} !important;\n\
     \x20 font-family: {FONT_STACK} !important;\n\
     \x20 color: {text} !important;\n\
     }}",
    font_size = preferences.font_size,
    line_height = preferences.line_height,
    text = preferences.text_color,
  )
}
