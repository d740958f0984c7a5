use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tubes::config::GameConfig;
use tubes::constants::{GAME_OVER_HOLD_MS, TITLE_POLL_MS};
use tubes::input::{map_key, skips_game_over, KeyAction, SteerLatch};
use tubes::sim::{EndReason, Round, RoundState, TickInput};
use tubes::ui::{render_game_over, render_round, render_title};
use tubes::utils::logging;

enum Screen {
    Title {
        last_score: Option<u32>,
    },
    Playing {
        round: Box<Round<ChaCha8Rng>>,
        round_seed: u64,
        latch: SteerLatch,
        stop_requested: bool,
        last_tick: Instant,
    },
    GameOver {
        score: u32,
        reason: EndReason,
        since: Instant,
    },
}

struct CliOptions {
    config_path: Option<PathBuf>,
    seed: Option<u64>,
    write_config: bool,
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let options = parse_args(&args);

    // Logging is best-effort; the game runs without it.
    let _ = logging::init();

    let mut config = match GameConfig::load(options.config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(1);
        }
    };
    if options.seed.is_some() {
        config.seed = options.seed;
    }

    if options.write_config {
        let path = config.save_default_location()?;
        println!("Config written to {}", path.display());
        return Ok(());
    }

    let session_seed = config.session_seed();
    log::info!("tubes {} starting, session seed {}", env!("CARGO_PKG_VERSION"), session_seed);
    let mut session_rng = ChaCha8Rng::seed_from_u64(session_seed);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let result = run(&mut terminal, &config, &mut session_rng);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::error!("terminal loop failed: {}", e);
    }
    log::info!("tubes exiting");
    result
}

fn parse_args(args: &[String]) -> CliOptions {
    let mut options = CliOptions {
        config_path: None,
        seed: None,
        write_config: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" | "-s" => {
                let seed = args.get(i + 1).and_then(|raw| raw.parse().ok());
                if seed.is_none() {
                    eprintln!("--seed needs a non-negative integer");
                    std::process::exit(1);
                }
                options.seed = seed;
                i += 1;
            }
            "--config" | "-c" => {
                let Some(path) = args.get(i + 1) else {
                    eprintln!("--config needs a path");
                    std::process::exit(1);
                };
                options.config_path = Some(PathBuf::from(path));
                i += 1;
            }
            "--write-config" => options.write_config = true,
            "--version" | "-v" => {
                println!("tubes {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Tubes - steer through the gaps\n");
                println!("Usage: tubes [options]\n");
                println!("Options:");
                println!("  --seed N         Fix the session seed");
                println!("  --config PATH    Read settings from a JSON file");
                println!("  --write-config   Save the effective settings to ~/.tubes/config.json");
                println!("  --version        Show version information");
                println!("  --help           Show this help message\n");
                println!("Controls: arrows/WASD/HJKL steer, Home/PgUp/End/PgDn diagonals,");
                println!("          Space starts a round, Esc stops it, q quits.");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'tubes --help' for usage.");
                std::process::exit(1);
            }
        }
        i += 1;
    }
    options
}

fn start_round(config: &GameConfig, session_rng: &mut ChaCha8Rng) -> Screen {
    let round_seed: u64 = session_rng.gen();
    log::info!("round start, seed {}", round_seed);
    Screen::Playing {
        round: Box::new(Round::new(
            config.round_settings(),
            ChaCha8Rng::seed_from_u64(round_seed),
        )),
        round_seed,
        latch: SteerLatch::default(),
        stop_requested: false,
        last_tick: Instant::now(),
    }
}

fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    config: &GameConfig,
    session_rng: &mut ChaCha8Rng,
) -> io::Result<()> {
    let tick_interval = Duration::from_millis(config.tick_interval_ms);
    let game_over_hold = Duration::from_millis(GAME_OVER_HOLD_MS);
    let mut screen = Screen::Title { last_score: None };

    loop {
        terminal.draw(|frame| {
            let area = frame.size();
            match &screen {
                Screen::Title { last_score } => render_title(frame, area, *last_score),
                Screen::Playing {
                    round, round_seed, ..
                } => render_round(frame, area, &**round, *round_seed),
                Screen::GameOver { score, reason, .. } => {
                    render_game_over(frame, area, *score, *reason)
                }
            }
        })?;

        screen = match screen {
            Screen::Title { last_score } => {
                if event::poll(Duration::from_millis(TITLE_POLL_MS))? {
                    if let Event::Key(key) = event::read()? {
                        match map_key(&key) {
                            KeyAction::Start => start_round(config, session_rng),
                            KeyAction::Quit => return Ok(()),
                            _ => Screen::Title { last_score },
                        }
                    } else {
                        Screen::Title { last_score }
                    }
                } else {
                    Screen::Title { last_score }
                }
            }

            Screen::Playing {
                mut round,
                round_seed,
                mut latch,
                mut stop_requested,
                mut last_tick,
            } => {
                let wait = tick_interval.saturating_sub(last_tick.elapsed());
                if event::poll(wait)? {
                    if let Event::Key(key) = event::read()? {
                        match map_key(&key) {
                            KeyAction::Steer { dx, dy } => latch.press(dx, dy),
                            KeyAction::Stop => stop_requested = true,
                            KeyAction::Quit => return Ok(()),
                            KeyAction::Start | KeyAction::Other => {}
                        }
                    }
                }

                let ended = if last_tick.elapsed() >= tick_interval {
                    let outcome = round.tick(TickInput {
                        direction: latch.take(),
                        stop: stop_requested,
                    });
                    last_tick = Instant::now();
                    match outcome.state {
                        RoundState::Ended(reason) => Some((reason, outcome.score)),
                        RoundState::Running => None,
                    }
                } else {
                    None
                };

                match ended {
                    Some((reason, score)) => Screen::GameOver {
                        score,
                        reason,
                        since: Instant::now(),
                    },
                    None => Screen::Playing {
                        round,
                        round_seed,
                        latch,
                        stop_requested,
                        last_tick,
                    },
                }
            }

            Screen::GameOver {
                score,
                reason,
                since,
            } => {
                let remaining = game_over_hold.saturating_sub(since.elapsed());
                let mut skipped = false;
                if event::poll(remaining)? {
                    if let Event::Key(key) = event::read()? {
                        skipped = skips_game_over(&key);
                    }
                }
                if skipped || since.elapsed() >= game_over_hold {
                    Screen::Title {
                        last_score: Some(score),
                    }
                } else {
                    Screen::GameOver {
                        score,
                        reason,
                        since,
                    }
                }
            }
        };
    }
}
