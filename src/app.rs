use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use rand::Rng;

use crate::config::{LIFE_ALIVE_PROBABILITY, RATE_LOG_INTERVAL_MS};
use crate::simulation::{life, rule30, Grid, SeedMode};

/// Game of Life state owned by the display side: current grid plus run flag
pub struct LifeSession {
    front: Grid,
    back: Grid,
    running: bool,
    generation: u64,
}

impl LifeSession {
    /// Stopped session on an empty grid
    pub fn new() -> Self {
        Self {
            front: life::empty_grid(),
            back: life::empty_grid(),
            running: false,
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.front
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn start(&mut self) {
        if !self.running {
            log::info!("Life started at generation {}", self.generation);
        }
        self.running = true;
    }

    pub fn stop(&mut self) {
        if self.running {
            log::info!("Life stopped at generation {}", self.generation);
        }
        self.running = false;
    }

    pub fn toggle_running(&mut self) {
        if self.running {
            self.stop();
        } else {
            self.start();
        }
    }

    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.front = life::random_grid(rng, LIFE_ALIVE_PROBABILITY);
        self.generation = 0;
        log::info!("Randomized Life grid: {} live cells", self.front.live_count());
    }

    pub fn clear(&mut self) {
        self.front.clear();
        self.generation = 0;
        log::info!("Cleared Life grid");
    }

    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        self.front = life::toggle_cell(&self.front, row, col);
        log::debug!("Toggled cell ({}, {})", row, col);
    }

    /// Advance one generation regardless of the run flag
    pub fn step_once(&mut self) {
        // Back buffer receives the next generation, then the buffers swap
        life::step_into(&self.front, &mut self.back);
        std::mem::swap(&mut self.front, &mut self.back);
        self.generation += 1;
    }

    /// Scheduler hook: advance only while running. Returns whether a step ran.
    pub fn tick(&mut self) -> bool {
        if self.running {
            self.step_once();
        }
        self.running
    }
}

impl Default for LifeSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Rule 30 state owned by the display side: seed mode plus generated grid
pub struct Rule30Session {
    mode: SeedMode,
    grid: Grid,
}

impl Rule30Session {
    /// Centered session, generated immediately
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mode = SeedMode::default();
        Self {
            mode,
            grid: rule30::generate(mode, rng),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn mode(&self) -> SeedMode {
        self.mode
    }

    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.grid = rule30::generate(self.mode, rng);
        log::info!("Regenerated Rule 30 ({} seed)", self.mode);
    }

    pub fn clear(&mut self) {
        self.grid = rule30::clear();
        log::info!("Cleared Rule 30 grid");
    }

    /// Switch between centered and random seeding; always regenerates
    pub fn toggle_seed_mode<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.mode = self.mode.toggled();
        self.regenerate(rng);
    }
}

/// Which automaton is on screen
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Life,
    Rule30,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Life => write!(f, "Game of Life"),
            View::Rule30 => write!(f, "Rule 30"),
        }
    }
}

/// Errors from parsing a line of user input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("{command} requires {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("invalid {argument}: {value}")]
    InvalidArgument {
        argument: &'static str,
        value: String,
    },
}

/// One user action
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Stop,
    ToggleRunning,
    Step,
    Randomize,
    Clear,
    Toggle { row: usize, col: usize },
    Regenerate,
    ToggleSeedMode,
    SwitchView,
    Help,
    Quit,
}

fn parse_coord(value: Option<&str>, argument: &'static str) -> Result<usize, CommandError> {
    let value = value.ok_or(CommandError::MissingArgument {
        command: "toggle",
        argument,
    })?;
    value.parse().map_err(|_| CommandError::InvalidArgument {
        argument,
        value: value.to_string(),
    })
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(CommandError::Unknown(String::new()));
        };

        let command = match head.to_ascii_lowercase().as_str() {
            "start" => Command::Start,
            "stop" => Command::Stop,
            "run" | "r" => Command::ToggleRunning,
            "step" | "n" => Command::Step,
            "random" | "randomize" => Command::Randomize,
            "clear" | "c" => Command::Clear,
            "toggle" | "t" => {
                let row = parse_coord(words.next(), "row")?;
                let col = parse_coord(words.next(), "col")?;
                Command::Toggle { row, col }
            }
            "regen" | "regenerate" => Command::Regenerate,
            "seed" => Command::ToggleSeedMode,
            "view" | "v" => Command::SwitchView,
            "help" | "h" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(command)
    }
}

/// What the front-end should do after a command
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Redraw,
    /// The command does not apply to the view on screen; nothing changed
    Ignored,
    ShowHelp,
    Quit,
}

pub const HELP: &str = "\
Commands:
  start / stop        Run or pause Game of Life
  run                 Toggle running
  step                Advance one generation
  random              Randomize the Life grid
  clear               Clear the current view
  toggle <row> <col>  Flip one Life cell
  regen               Regenerate Rule 30
  seed                Switch Rule 30 between centered and random seed
  view                Switch between Game of Life and Rule 30
  quit                Exit";

/// Both sessions plus the active view
pub struct App<R: Rng> {
    rng: R,
    view: View,
    life: LifeSession,
    rule30: Rule30Session,
    rate: GenerationRate,
}

impl<R: Rng> App<R> {
    pub fn new(mut rng: R) -> Self {
        let rule30 = Rule30Session::new(&mut rng);
        Self {
            rng,
            view: View::default(),
            life: LifeSession::new(),
            rule30,
            rate: GenerationRate::new(Duration::from_millis(RATE_LOG_INTERVAL_MS)),
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn life(&self) -> &LifeSession {
        &self.life
    }

    pub fn rule30(&self) -> &Rule30Session {
        &self.rule30
    }

    /// Grid of the active view
    pub fn grid(&self) -> &Grid {
        match self.view {
            View::Life => self.life.grid(),
            View::Rule30 => self.rule30.grid(),
        }
    }

    pub fn status(&self) -> String {
        match self.view {
            View::Life => format!(
                "{} | generation {} | {} | {} live",
                self.view,
                self.life.generation(),
                if self.life.is_running() { "running" } else { "stopped" },
                self.life.grid().live_count()
            ),
            View::Rule30 => format!("{} | {} seed", self.view, self.rule30.mode()),
        }
    }

    pub fn handle(&mut self, command: Command) -> Control {
        let target = match command {
            Command::Start
            | Command::Stop
            | Command::ToggleRunning
            | Command::Step
            | Command::Randomize
            | Command::Toggle { .. } => Some(View::Life),
            Command::Regenerate | Command::ToggleSeedMode => Some(View::Rule30),
            _ => None,
        };
        if let Some(target) = target {
            if target != self.view {
                log::warn!("{:?} only applies to the {} view", command, target);
                return Control::Ignored;
            }
        }

        match command {
            Command::Start => self.life.start(),
            Command::Stop => self.life.stop(),
            Command::ToggleRunning => self.life.toggle_running(),
            Command::Step => self.life.step_once(),
            Command::Randomize => self.life.randomize(&mut self.rng),
            Command::Toggle { row, col } => self.life.toggle_cell(row, col),
            Command::Clear => match self.view {
                View::Life => self.life.clear(),
                View::Rule30 => self.rule30.clear(),
            },
            Command::Regenerate => self.rule30.regenerate(&mut self.rng),
            Command::ToggleSeedMode => self.rule30.toggle_seed_mode(&mut self.rng),
            Command::SwitchView => {
                self.view = match self.view {
                    View::Life => View::Rule30,
                    View::Rule30 => View::Life,
                };
                log::info!("Switched to {}", self.view);
            }
            Command::Help => return Control::ShowHelp,
            Command::Quit => return Control::Quit,
        }
        Control::Redraw
    }

    /// Whether timer ticks currently advance anything
    pub fn is_ticking(&self) -> bool {
        self.view == View::Life && self.life.is_running()
    }

    /// Timer hook. Life only advances while its view is shown.
    pub fn tick(&mut self) -> bool {
        if self.view != View::Life || !self.life.tick() {
            return false;
        }

        if let Some(rate) = self.rate.sample(self.life.generation()) {
            log::debug!("{:.1} generations/s", rate);
        }
        true
    }
}

/// Measures how fast the Life generation counter advances
struct GenerationRate {
    window: Duration,
    since: Instant,
    from_generation: u64,
}

impl GenerationRate {
    fn new(window: Duration) -> Self {
        Self {
            window,
            since: Instant::now(),
            from_generation: 0,
        }
    }

    /// Generations per second over the last window, once the window has elapsed.
    ///
    /// A counter reset (clear/randomize) restarts the window.
    fn sample(&mut self, generation: u64) -> Option<f64> {
        if generation < self.from_generation {
            self.since = Instant::now();
            self.from_generation = generation;
            return None;
        }

        let elapsed = self.since.elapsed();
        if elapsed < self.window {
            return None;
        }

        let advanced = generation - self.from_generation;
        self.since = Instant::now();
        self.from_generation = generation;
        Some(advanced as f64 / elapsed.as_secs_f64().max(f64::EPSILON))
    }
}
