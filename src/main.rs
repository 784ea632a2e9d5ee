//! slashart - retro slash art from text
//!
//! ```text
//! //      //   //////
//! //=     //=   =//===
//! //////////=    //=
//! //======//=    //=
//! //=     //=    //=
//! //=     //=  //////
//!  ==      ==   ======
//! ```

mod feedback;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use feedback::{NoticeKind, Notifier, TerminalNotifier};
use rand::rngs::StdRng;
use rand::SeedableRng;
use slashart_config::{default_config_path, find_preset, presets, Config, ConfigManager};
use slashart_core::{
    validate, write_lines, ExportFormat, GlyphClass, GlyphRenderer, Layout, DEFAULT_DISPLAY_TEXT,
};
use std::io::{self, BufRead, IsTerminal, Read, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// slashart - render text as retro slash art
#[derive(Parser, Debug)]
#[command(name = "slashart")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text to render, "-" reads stdin
    text: Option<String>,

    /// Characters for `/` cells ("!ALPHA" uses the letter itself), or a preset label
    #[arg(short = 's', long)]
    slash: Option<String>,

    /// Characters for `=` cells, or a preset label
    #[arg(short = 'e', long)]
    equals: Option<String>,

    /// Characters for background cells, or a preset label
    #[arg(short = 'v', long = "void")]
    void: Option<String>,

    /// One block per word instead of per line
    #[arg(long)]
    title: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum)]
    format: Option<FormatArg>,

    /// Seed for random substitutions
    #[arg(long)]
    seed: Option<u64>,

    /// Only report unsupported characters, as JSON
    #[arg(long)]
    validate: bool,

    /// Render each line read from stdin
    #[arg(short = 'i', long)]
    interactive: bool,

    /// Print the built-in substitution presets
    #[arg(long)]
    list_presets: bool,

    /// Config file path
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Never ring the terminal bell
    #[arg(long)]
    no_bell: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Plain,
    Chat,
    Json,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Plain => ExportFormat::Plain,
            FormatArg::Chat => ExportFormat::Chat,
            FormatArg::Json => ExportFormat::Json,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Set up logging on stderr, stdout carries the art
    let log_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("slashart={}", log_level)),
        ))
        .init();

    tracing::debug!("Starting slashart v{}", env!("CARGO_PKG_VERSION"));

    slashart_core::init()?;

    let config_path = args.config.clone().unwrap_or_else(default_config_path);
    let mut manager = ConfigManager::with_path(&config_path)?;
    let bell = manager.config().feedback.bell && !args.no_bell;
    let notifier = TerminalNotifier::stderr(bell);

    if let Err(e) = run(&args, &mut manager, &notifier) {
        notifier.notify(NoticeKind::Error, &format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

fn run(args: &Args, manager: &mut ConfigManager, notifier: &dyn Notifier) -> anyhow::Result<()> {
    if args.list_presets {
        print_presets(&mut io::stdout().lock())?;
        return Ok(());
    }

    if args.interactive {
        return run_interactive(args, manager, notifier);
    }

    let text = read_text(args.text.as_deref())?;

    if args.validate {
        let report = serde_json::to_string_pretty(&validate(&text))?;
        println!("{}", report);
        return Ok(());
    }

    let mut config = manager.config();
    apply_overrides(&mut config, args);
    if args.seed.is_some() && !uses_randomness(&config) {
        tracing::debug!("--seed has no effect without a multi-character spec");
    }

    let mut rng = make_rng(args.seed);
    let rows = render_text(&text, &config, &mut rng, notifier, &mut io::stdout().lock())?;

    // Piped output is invisible to the user, confirm it went out
    if !io::stdout().is_terminal() {
        notifier.notify(NoticeKind::Success, &format!("Slash art written ({} rows)", rows));
    }
    Ok(())
}

/// Render every stdin line as it arrives, following config file edits
fn run_interactive(
    args: &Args,
    manager: &mut ConfigManager,
    notifier: &dyn Notifier,
) -> anyhow::Result<()> {
    if manager.path().exists() {
        manager.enable_hot_reload()?;
        tracing::info!("Watching {} for changes", manager.path().display());
    } else {
        tracing::debug!("No config file at {}, hot reload off", manager.path().display());
    }

    let mut rng = make_rng(args.seed);
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;
        let text = line.replace("\\n", "\n");

        let mut config = manager.config();
        apply_overrides(&mut config, args);
        render_text(&text, &config, &mut rng, notifier, &mut io::stdout().lock())?;
    }

    Ok(())
}

/// CLI flags win over file and environment settings
fn apply_overrides(config: &mut Config, args: &Args) {
    let overrides = [
        (GlyphClass::Slash, &args.slash),
        (GlyphClass::Equals, &args.equals),
        (GlyphClass::Void, &args.void),
    ];
    for (class, value) in overrides {
        if let Some(spec) = value {
            config.render.set_spec(class, preset_or_spec(class, spec));
        }
    }
    if args.title {
        config.render.title = true;
    }
    if let Some(format) = args.format {
        config.output.format = format.into();
    }
    if args.no_bell {
        config.feedback.bell = false;
    }
}

/// A preset label such as `alpha` or `space` stands for its spec
fn preset_or_spec(class: GlyphClass, spec: &str) -> String {
    match find_preset(class, spec) {
        Some(preset) => preset.value.to_string(),
        None => spec.to_string(),
    }
}

/// Whether any class draws from the random generator
fn uses_randomness(config: &Config) -> bool {
    let render_config = config.render.to_render_config();
    GlyphClass::all()
        .iter()
        .any(|class| render_config.substitutions.get(*class).is_random())
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Positional text, or stdin when asked for or piped
fn read_text(arg: Option<&str>) -> anyhow::Result<String> {
    let from_stdin = match arg {
        Some("-") => true,
        Some(_) => false,
        None => !io::stdin().is_terminal(),
    };

    if !from_stdin {
        return Ok(arg.unwrap_or_default().to_string());
    }

    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read stdin")?;
    Ok(text.trim_end_matches(['\r', '\n']).to_string())
}

fn render_text<W: Write>(
    text: &str,
    config: &Config,
    rng: &mut StdRng,
    notifier: &dyn Notifier,
    out: &mut W,
) -> anyhow::Result<usize> {
    let render_config = config.render.to_render_config();

    if config.feedback.warn_unsupported {
        if let Some(message) = validate(text).warning_message() {
            notifier.notify(NoticeKind::Warning, &message);
        }
    }

    let wide = GlyphClass::all()
        .iter()
        .any(|class| !render_config.substitutions.get(*class).is_single_width());
    if wide {
        notifier.notify(
            NoticeKind::Warning,
            "Substitution characters wider than one column will break alignment.",
        );
    }

    // The title layout has its own fallback text
    let display = if text.trim().is_empty() && render_config.layout == Layout::Lines {
        DEFAULT_DISPLAY_TEXT
    } else {
        text
    };

    let lines = GlyphRenderer::with_config(render_config).render_with_rng(display, rng);
    tracing::debug!("Rendered {} rows", lines.len());
    write_lines(out, &lines, config.output.format)?;
    Ok(lines.len())
}

fn print_presets<W: Write>(out: &mut W) -> io::Result<()> {
    for class in GlyphClass::all() {
        writeln!(out, "{} ({:?})", class.name(), class.marker())?;
        for preset in presets(*class) {
            writeln!(out, "  {:<6} {:?}", preset.label, preset.value)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct RecordingNotifier {
        notices: Mutex<Vec<(NoticeKind, String)>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, kind: NoticeKind, message: &str) {
            self.notices.lock().push((kind, message.to_string()));
        }
    }

    fn render_to_string(text: &str, config: &Config, notifier: &dyn Notifier) -> String {
        let mut out = Vec::new();
        let mut rng = make_rng(Some(1));
        render_text(text, config, &mut rng, notifier, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_arg_parsing() {
        let args = Args::try_parse_from(["slashart"]).unwrap();
        assert!(args.text.is_none());
        assert!(!args.title);
        assert!(!args.interactive);
    }

    #[test]
    fn test_arg_parsing_with_options() {
        let args = Args::try_parse_from([
            "slashart", "HELLO", "-s", "!ALPHA", "--void", ".", "-f", "chat", "--seed", "9",
        ])
        .unwrap();
        assert_eq!(args.text.as_deref(), Some("HELLO"));
        assert_eq!(args.slash.as_deref(), Some("!ALPHA"));
        assert_eq!(args.void.as_deref(), Some("."));
        assert_eq!(args.format, Some(FormatArg::Chat));
        assert_eq!(args.seed, Some(9));
    }

    #[test]
    fn test_overrides_win() {
        let args =
            Args::try_parse_from(["slashart", "--equals", "-", "--title", "--no-bell"]).unwrap();
        let mut config = Config::default();
        apply_overrides(&mut config, &args);
        assert_eq!(config.render.equals, "-");
        assert_eq!(config.render.slash, "/");
        assert!(config.render.title);
        assert!(!config.feedback.bell);
    }

    #[test]
    fn test_preset_labels_expand() {
        let args = Args::try_parse_from([
            "slashart", "--slash", "alpha", "--equals", "Space", "--void", "xyz",
        ])
        .unwrap();
        let mut config = Config::default();
        apply_overrides(&mut config, &args);
        assert_eq!(config.render.slash, "!ALPHA");
        assert_eq!(config.render.equals, " ");
        assert_eq!(config.render.void, "xyz");
    }

    #[test]
    fn test_uses_randomness() {
        let mut config = Config::default();
        assert!(!uses_randomness(&config));
        config.render.void = ".:".to_string();
        assert!(uses_randomness(&config));
    }

    #[test]
    fn test_render_reports_row_count() {
        let notifier = RecordingNotifier::default();
        let mut out = Vec::new();
        let rows = render_text(
            "A\nB",
            &Config::default(),
            &mut make_rng(Some(3)),
            &notifier,
            &mut out,
        )
        .unwrap();
        assert_eq!(rows, 15);
    }

    #[test]
    fn test_render_warns_on_unsupported() {
        let notifier = RecordingNotifier::default();
        let out = render_to_string("A~", &Config::default(), &notifier);

        assert_eq!(out.lines().count(), 7);
        let notices = notifier.notices.lock();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].0, NoticeKind::Warning);
        assert!(notices[0].1.contains('~'));
    }

    #[test]
    fn test_render_warning_can_be_disabled() {
        let notifier = RecordingNotifier::default();
        let mut config = Config::default();
        config.feedback.warn_unsupported = false;
        render_to_string("A~", &config, &notifier);
        assert!(notifier.notices.lock().is_empty());
    }

    #[test]
    fn test_blank_text_shows_default() {
        let notifier = RecordingNotifier::default();
        let out = render_to_string("", &Config::default(), &notifier);
        // ASCII and ART blocks plus the separator
        assert_eq!(out.lines().count(), 15);
    }

    #[test]
    fn test_chat_format() {
        let notifier = RecordingNotifier::default();
        let mut config = Config::default();
        config.output.format = ExportFormat::Chat;
        let out = render_to_string("A", &config, &notifier);
        assert!(out.starts_with("```\n"));
        assert!(out.ends_with("\n```\n"));
    }

    #[test]
    fn test_wide_spec_warns() {
        let notifier = RecordingNotifier::default();
        let mut config = Config::default();
        config.render.slash = "字".to_string();
        render_to_string("A", &config, &notifier);
        assert!(notifier
            .notices
            .lock()
            .iter()
            .any(|(_, m)| m.contains("wider than one column")));
    }

    #[test]
    fn test_print_presets() {
        let mut out = Vec::new();
        print_presets(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Slash ('/')"));
        assert!(text.contains("\"!ALPHA\""));
    }
}
