use {
  anyhow::Context,
  clap::Parser,
  log::LevelFilter,
  readmode::ReadingModeSession,
  simplelog::{Config, SimpleLogger},
  std::{fs, path::PathBuf, process},
};

#[derive(Parser)]
#[command(name = "readmode")]
#[command(about = "Extract the readable article text from an HTML page", long_about = None)]
struct Arguments {
  /// Path to the HTML file to read
  #[arg(value_name = "FILE")]
  input: PathBuf,

  /// Emit the extraction result as JSON
  #[arg(long)]
  json: bool,

  /// Log locator and sweep diagnostics to stderr
  #[arg(long, short)]
  verbose: bool,
}

impl Arguments {
  fn run(self) -> Result {
    let page = fs::read_to_string(&self.input).with_context(|| {
      format!("failed to read file from `{}`", self.input.display())
    })?;

    let mut session = ReadingModeSession::new(&page);

    let text = session
      .extract_content()
      .context("failed to extract article content")?;

    if self.json {
      println!("{}", serde_json::to_string_pretty(&text)?);
    } else {
      println!("{}", text.as_str());
    }

    Ok(())
  }
}

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn main() {
  let arguments = Arguments::parse();

  let level = if arguments.verbose {
    LevelFilter::Debug
  } else {
    LevelFilter::Warn
  };

  let _ = SimpleLogger::init(level, Config::default());

  if let Err(error) = arguments.run() {
    eprintln!("error: {error:#}");
    process::exit(1);
  }
}
