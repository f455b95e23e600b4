//! Headless Pong runner
//!
//! Drives a full session from the main menu to the end of a round with
//! scripted players at the keyboard, then prints the result.

use std::thread;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use game_core::{Arena, Mode, Score, Side};
use proto::{Command, DifficultyLevel, GameMode, Notification, SessionState, SettingKey};
use session::{command_for_key, FixedTicker, Session};

mod script;

use script::ScriptedPlayer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    /// Left paddle against the AI
    One,
    /// Two scripted players on a three minute clock
    Two,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for DifficultyLevel {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => DifficultyLevel::Easy,
            DifficultyArg::Medium => DifficultyLevel::Medium,
            DifficultyArg::Hard => DifficultyLevel::Hard,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "pong")]
#[command(about = "Play a headless round of Pong with scripted players", long_about = None)]
struct Cli {
    #[arg(short, long, value_enum, default_value_t = ModeArg::One)]
    mode: ModeArg,

    /// AI difficulty for one-player rounds
    #[arg(short, long, value_enum, default_value_t = DifficultyArg::Medium)]
    difficulty: DifficultyArg,

    /// Seed for serve directions and AI noise
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Left player name (two-player rounds)
    #[arg(long, default_value = "Player A")]
    name1: String,

    /// Right player name (two-player rounds)
    #[arg(long, default_value = "Player B")]
    name2: String,

    /// Window size the arena is fitted into
    #[arg(long, default_value_t = 1280.0)]
    width: f32,

    #[arg(long, default_value_t = 960.0)]
    height: f32,

    /// Ball speed per axis, per tick
    #[arg(long)]
    ball_speed: Option<f32>,

    /// Paddle travel per key press
    #[arg(long)]
    paddle_speed: Option<f32>,

    /// Ticks between a scripted player's glances at the ball
    #[arg(long, default_value_t = 12)]
    reaction: u32,

    /// Give up after this many ticks
    #[arg(long, default_value_t = 2_000_000)]
    max_ticks: u64,

    /// Pace ticks against the wall clock instead of running flat out
    #[arg(long)]
    realtime: bool,

    /// Encode every notification and report the bytes sent
    #[arg(long)]
    wire_stats: bool,
}

#[derive(Debug, Default)]
struct Summary {
    ticks: u64,
    tick_seconds: f64,
    winner: Option<String>,
    score: Score,
    paddle_hits: u32,
    wall_hits: u32,
    sound_cues: u32,
    notifications: u64,
    wire_bytes: usize,
}

impl Summary {
    fn record(&mut self, notification: &Notification, encode: bool) -> Result<()> {
        self.notifications += 1;
        if let Some(cue) = notification.sound_cue() {
            tracing::trace!(cue, "sound cue");
            self.sound_cues += 1;
        }
        match notification {
            Notification::PaddleHit { .. } => self.paddle_hits += 1,
            Notification::WallHit => self.wall_hits += 1,
            Notification::Scored {
                side,
                score_a,
                score_b,
            } => tracing::info!(side, score_a, score_b, tick = self.ticks, "point scored"),
            Notification::RoundEnded { winner_label } => {
                self.winner = Some(winner_label.clone());
            }
            _ => {}
        }

        if encode {
            let bytes = notification
                .to_bytes()
                .context("failed to encode notification")?;
            self.wire_bytes += bytes.len();
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    if cli.max_ticks == 0 {
        bail!("--max-ticks must be at least 1");
    }
    if !valid_window(cli.width, cli.height) {
        bail!("window size must be positive, got {}x{}", cli.width, cli.height);
    }

    let arena = Arena::for_window(cli.width, cli.height);
    tracing::info!(
        width = arena.width,
        height = arena.height,
        seed = cli.seed,
        "starting session"
    );

    let mut session = Session::new(arena, cli.seed);
    start_round(&mut session, &cli)?;
    let summary = run(&mut session, &cli)?;
    report(&session, &summary, &cli);
    Ok(())
}

fn valid_window(width: f32, height: f32) -> bool {
    width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0
}

/// Walk the menus the way a player would, ending in a live match
fn start_round(session: &mut Session, cli: &Cli) -> Result<()> {
    session.handle(Command::Continue);

    if cli.ball_speed.is_some() || cli.paddle_speed.is_some() {
        session.handle(Command::OpenSettings);
        if let Some(speed) = cli.ball_speed {
            let delta = speed - session.settings().ball_speed;
            session.handle(Command::AdjustSetting {
                key: SettingKey::BallSpeed,
                delta,
            });
        }
        if let Some(speed) = cli.paddle_speed {
            let delta = speed - session.settings().paddle_speed;
            session.handle(Command::AdjustSetting {
                key: SettingKey::PaddleSpeed,
                delta,
            });
        }
        session.handle(Command::ReturnToMenu);
    }

    match cli.mode {
        ModeArg::One => {
            session.handle(Command::SelectMode(GameMode::OnePlayer));
            session.handle(Command::SelectDifficulty(cli.difficulty.into()));
        }
        ModeArg::Two => {
            session.handle(Command::SelectMode(GameMode::TwoPlayer));
            session.handle(Command::SubmitPlayerNames {
                name1: cli.name1.clone(),
                name2: cli.name2.clone(),
            });
        }
    }

    if session.state() != SessionState::Playing {
        bail!("menus ended in {:?} instead of a match", session.state());
    }
    Ok(())
}

fn run(session: &mut Session, cli: &Cli) -> Result<Summary> {
    let mode = session.mode();
    let tick_seconds = session
        .current_match()
        .map(|game| game.config().tick_seconds)
        .context("no match after starting a round")?;

    let mut players = vec![ScriptedPlayer::new(Side::Left, cli.reaction)];
    if mode == Mode::TwoPlayer {
        // A slightly slower right hand keeps the two sides from mirroring
        players.push(ScriptedPlayer::new(Side::Right, cli.reaction + 3));
    }

    let mut ticker = FixedTicker::new(tick_seconds);
    let mut last = Instant::now();
    let mut summary = Summary {
        tick_seconds,
        ..Summary::default()
    };

    while summary.ticks < cli.max_ticks && session.state() == SessionState::Playing {
        let due = if cli.realtime {
            let now = Instant::now();
            let due = ticker.advance(now - last);
            last = now;
            if due == 0 {
                thread::sleep(ticker.tick_duration());
                continue;
            }
            due
        } else {
            1
        };

        for _ in 0..due {
            for player in &mut players {
                let command = player.key(session).and_then(|key| command_for_key(key, mode));
                if let Some(command) = command {
                    session.handle(command);
                }
            }
            for notification in session.tick() {
                summary.record(&notification, cli.wire_stats)?;
            }
            summary.ticks += 1;
            if session.state() != SessionState::Playing || summary.ticks >= cli.max_ticks {
                break;
            }
        }
    }

    summary.score = session
        .current_match()
        .map(|game| game.score())
        .unwrap_or_default();
    tracing::debug!(ticks = summary.ticks, "run finished");
    Ok(summary)
}

fn report(session: &Session, summary: &Summary, cli: &Cli) {
    let mode = session.mode();
    let names = session.names();
    let seconds = summary.ticks as f64 * summary.tick_seconds;

    match &summary.winner {
        Some(label) => println!("{label}"),
        None => println!("No result after {} ticks", summary.ticks),
    }
    println!(
        "{}: {}  {}: {}",
        names.name(Side::Left, mode),
        summary.score.a,
        names.name(Side::Right, mode),
        summary.score.b
    );
    println!("{} ticks ({seconds:.1} s of play)", summary.ticks);
    println!(
        "Paddle hits: {}  Wall hits: {}  Sound cues: {}",
        summary.paddle_hits, summary.wall_hits, summary.sound_cues
    );
    if cli.wire_stats {
        println!(
            "Wire: {} notifications, {} bytes",
            summary.notifications, summary.wire_bytes
        );
    }
}
