use std::fs;
use std::io::{self, Stdout};
use std::sync::Once;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::cursor::Show;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;

use typioca::app::App;
use typioca::config::Config;
use typioca::event::{AppEvent, EventHandler, TICK_RATE};
use typioca::generator::corpus::CorpusKey;
use typioca::ui::terminal::TermSize;
use typioca::ui::theme::Theme;

#[derive(Parser)]
#[command(name = "typioca", version, about = "Minimal terminal typing test")]
struct Cli {
    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(short, long, value_enum, help = "Word list to draw from")]
    corpus: Option<CorpusKey>,

    #[arg(long, help = "Timer run length in seconds")]
    time: Option<u64>,

    #[arg(short, long, help = "Number of words in a word count run")]
    words: Option<usize>,

    #[arg(long, help = "Seed for reproducible word lists")]
    seed: Option<u64>,
}

impl Cli {
    fn apply(&self, config: &mut Config) {
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
        if let Some(corpus) = self.corpus {
            config.corpus = corpus;
        }
        if let Some(time) = self.time {
            config.duration_secs = time;
        }
        if let Some(words) = self.words {
            config.word_count = words;
        }
        config.normalize();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = configure_logging();
    install_panic_hook();
    info!("startup");

    let mut config = Config::load().unwrap_or_else(|err| {
        warn!(error = %err, "failed to load config, using defaults");
        Config::default()
    });
    cli.apply(&mut config);

    let theme = Theme::load(&config.theme).unwrap_or_else(|| {
        warn!(theme = config.theme.as_str(), "unknown theme, using default");
        Theme::default()
    });
    let mut app =
        App::new(config, theme.palette(), cli.seed).context("failed to load word lists")?;
    let events = EventHandler::new(TICK_RATE);

    let result = {
        let _guard = TerminalGuard::enter().context("failed to set up the terminal")?;
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))
            .context("failed to set up the terminal")?;
        run_app(&mut terminal, &mut app, &events)
    };
    if let Err(err) = &result {
        tracing::error!(error = %err, "exiting on error");
    }
    result?;

    println!("bye!");
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        let size = TermSize::query();
        terminal.draw(|frame| app.draw(frame, size, Instant::now()))?;

        match events.next()? {
            AppEvent::Key(key) => app.handle_key(key, Instant::now())?,
            AppEvent::Tick => app.on_tick(Instant::now()),
            AppEvent::Resize(width, height) => {
                debug!(width, height, "terminal resized");
                terminal.clear()?;
            }
        }

        if app.should_quit {
            info!("quit");
            return Ok(());
        }
    }
}

/// Raw mode and the alternate screen for as long as the guard lives.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, SetTitle("typioca"))?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Logs go to a file because the screen belongs to the UI. Filtering follows
/// `RUST_LOG`.
fn configure_logging() -> Option<WorkerGuard> {
    let log_dir = dirs::cache_dir()?.join("typioca");
    fs::create_dir_all(&log_dir).ok()?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "typioca.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .ok()?;
    Some(guard)
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            tracing::error!(?info, "panic");
            default_panic(info);
        }));
    });
}
