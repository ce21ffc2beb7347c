use std::path::PathBuf;

use anyhow::Result;
use beautify::settings::Settings;
use beautify::{Config, OutputMode, run_with_config};
use clap::Parser;

/// beautify - format web code through prettier.
///
/// Reads JavaScript, JSX, HTML or CSS from a file, the clipboard, an inline
/// argument or stdin, optionally strips comments, and prints the formatted
/// result.
#[derive(Parser, Debug)]
#[command(
    name = "beautify",
    author,
    version,
    about = "Strip comments from and pretty-print JavaScript, JSX, HTML and CSS",
    long_about = r#"Strip comments from and pretty-print JavaScript, JSX, HTML and CSS.

Input is taken from, in order of precedence:
  • FILE (extension must be js, jsx, html or css)
  • the clipboard, with --paste
  • --code TEXT
  • stdin

Formatting is delegated to prettier with 2-space indentation, semicolons
and single quotes.

Typical usage:
  beautify app.min.js
  beautify --remove-comments --html page.html
  cat style.css | beautify -l css --copy
"#
)]
struct Args {
    /// Source file to format. Its extension selects the language.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Code to format, used instead of stdin.
    #[arg(short = 'c', long = "code", value_name = "TEXT", conflicts_with = "paste")]
    code: Option<String>,

    /// Language of inline, pasted or piped code (javascript, jsx, html, css).
    ///
    /// Ignored when FILE is given.
    #[arg(short = 'l', long = "language", value_name = "LANG", default_value = "javascript")]
    language: String,

    /// Strip comments before formatting.
    ///
    /// JavaScript/JSX: `//` line and `/* */` block comments.
    /// HTML: `<!-- -->`. CSS: `/* */`.
    /// Matching is textual, so comment markers inside strings are removed too.
    #[arg(long = "remove-comments")]
    remove_comments: bool,

    /// Read the code from the system clipboard.
    #[arg(long = "paste")]
    paste: bool,

    /// Copy the formatted result to the system clipboard.
    #[arg(long = "copy")]
    copy: bool,

    /// Wrap the result in `<pre><code class="language-…">` markup.
    #[arg(long = "html", conflicts_with = "json")]
    html: bool,

    /// Output a JSON object { "path": "...", "class_name": "...", "content": "..." }.
    #[arg(long = "json")]
    json: bool,

    /// prettier executable to run (overrides the settings file).
    #[arg(long = "prettier", value_name = "PROGRAM")]
    prettier: Option<String>,

    /// Settings file (default: <config dir>/beautify/config.toml).
    #[arg(long = "config", value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let settings = Settings::load(args.config.as_deref())?;

    let output = if args.json {
        OutputMode::Json
    } else if args.html {
        OutputMode::Markup
    } else {
        OutputMode::Plain
    };

    let cfg = Config {
        file: args.file,
        code: args.code,
        language: args.language,
        remove_comments: args.remove_comments,
        paste: args.paste,
        copy: args.copy,
        output,
        prettier: args.prettier,
        settings,
    };

    run_with_config(cfg)
}
