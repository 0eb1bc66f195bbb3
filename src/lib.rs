use {
  ego_tree::NodeId,
  html5ever::{QualName, local_name, namespace_url, ns},
  log::debug,
  regex::Regex,
  scraper::{ElementRef, Html, Node, Selector},
  serde::{Deserialize, Serialize},
  std::{collections::VecDeque, sync::LazyLock},
};

pub use crate::{
  classifier::is_distraction,
  error::Error,
  extractor::{ExtractedText, MAX_TEXT_LENGTH, MIN_TEXT_LENGTH, extract},
  locator::locate_main_content,
  message::{Request, Response, handle_request},
  monitor::Monitor,
  preferences::Preferences,
  remover::{SweepOutcome, remove_distractions, sweep_added},
  render::ReaderView,
  session::ReadingModeSession,
};

mod classifier;
mod dom;
mod error;
mod extractor;
mod locator;
mod message;
mod monitor;
mod preferences;
mod re;
mod remover;
mod render;
mod session;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
