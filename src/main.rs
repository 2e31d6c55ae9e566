pub mod ui;

use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
};

use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::{info, warn};

use reaction_dash::{
    clock::{Clock, MonotonicClock},
    config::{Config, ConfigStore, FileConfigStore},
    difficulty::Difficulty,
    engine::ReactionEngine,
    input::{command_for_key, Command},
    logging::init_file_logging,
    rng::{CueRng, SeededCueRng, ThreadCueRng},
    runtime::{CrosstermEventSource, FixedTicker, GameEvent, Runner},
};

use crate::ui::panel::PanelState;

/// reaction-speed trainer: press the lit digit before the enemy gets away
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A terminal reaction drill. A digit lights up, you press it, the enemy loses HP. Clear five rounds and track your average and fastest reaction times."
)]
pub struct Cli {
    /// tempo preset controlling the delay between cues
    #[clap(short = 'd', long, value_enum)]
    difficulty: Option<Difficulty>,

    /// seed the cue generator for a reproducible run
    #[clap(long)]
    seed: Option<u64>,

    /// event loop tick interval in milliseconds
    #[clap(long = "tick-ms")]
    tick_rate_ms: Option<u64>,

    /// write logs here instead of the default state directory
    #[clap(long)]
    log_file: Option<PathBuf>,

    /// store the chosen difficulty and tick rate as future defaults
    #[clap(long)]
    save_config: bool,
}

impl Cli {
    /// Merge CLI flags over stored preferences
    fn apply_to(&self, stored: Config) -> Config {
        Config {
            difficulty: self.difficulty.unwrap_or(stored.difficulty),
            tick_rate_ms: self.tick_rate_ms.unwrap_or(stored.tick_rate_ms),
        }
    }

    fn cue_rng(&self) -> Box<dyn CueRng> {
        match self.seed {
            Some(seed) => Box::new(SeededCueRng::new(seed)),
            None => Box::new(ThreadCueRng::new()),
        }
    }
}

pub struct App<C: Clock = MonotonicClock> {
    pub engine: ReactionEngine<PanelState, C, Box<dyn CueRng>>,
}

impl App {
    pub fn new(config: &Config, rng: Box<dyn CueRng>) -> Self {
        Self::from_engine(ReactionEngine::new(
            PanelState::default(),
            MonotonicClock,
            rng,
            config.difficulty,
        ))
    }
}

impl<C: Clock> App<C> {
    pub fn from_engine(engine: ReactionEngine<PanelState, C, Box<dyn CueRng>>) -> Self {
        Self { engine }
    }

    /// Apply one decoded command. Returns false when the app should exit.
    pub fn handle(&mut self, command: Command) -> bool {
        match command {
            Command::Press(digit) => {
                self.engine.press_digit(digit);
            }
            Command::Start => self.engine.start(),
            Command::Stop => self.engine.stop(),
            Command::Reset { keep_round } => self.engine.reset(keep_round),
            Command::SetDifficulty(d) => self.engine.set_difficulty(d),
            Command::CycleDifficulty => {
                let next = self.engine.difficulty().cycle();
                self.engine.set_difficulty(next);
            }
            Command::Quit => return false,
        }
        true
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let log_path = init_file_logging(cli.log_file.as_deref())?;

    let store = FileConfigStore::new();
    let config = cli.apply_to(store.load());
    if cli.save_config {
        store.save(&config)?;
        info!(path = %store.path().display(), "saved defaults");
    }
    info!(?config, log = %log_path.display(), "starting");

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config, cli.cue_rng());
    let res = start_tui(&mut terminal, &mut app, &config);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn start_tui<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    config: &Config,
) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::from_millis(config.tick_rate_ms),
    );

    terminal.draw(|f| f.render_widget(&*app, f.area()))?;

    loop {
        match runner.step() {
            GameEvent::Tick => {
                let before = (
                    app.engine.active_cue(),
                    app.engine.presenter().celebration.is_some(),
                );
                app.engine.poll();
                let after = (
                    app.engine.active_cue(),
                    app.engine.presenter().celebration.is_some(),
                );
                if before != after {
                    terminal.draw(|f| f.render_widget(&*app, f.area()))?;
                }
            }
            GameEvent::Resize => {
                terminal.draw(|f| f.render_widget(&*app, f.area()))?;
            }
            GameEvent::Closed => {
                warn!("input closed, shutting down");
                break;
            }
            GameEvent::Key(key) => {
                if let Some(command) = command_for_key(&key) {
                    if !app.handle(command) {
                        info!("quit requested");
                        break;
                    }
                }
                terminal.draw(|f| f.render_widget(&*app, f.area()))?;
            }
        }
    }

    Ok(())
}
