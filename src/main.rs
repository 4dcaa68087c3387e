use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::input::{handle_key, InputResult};
use flappy::ui::draw_ui;
use flappy::utils::build_info;
use flappy::utils::frame_clock::FrameClock;
use flappy::utils::logging::setup_logging;
use flappy::{FileHighScoreStore, FlappyGame, GameConfig, HighScoreStore};
use ratatui::backend::Backend;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_string());
                std::process::exit(0);
            }
            "--print-config" => {
                let json = serde_json::to_string_pretty(&GameConfig::default())
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                println!("{}", json);
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Flappy - Terminal Flappy Bird\n");
                println!("Usage: flappy [option]\n");
                println!("Options:");
                println!("  --print-config  Print the default flappy_config.json");
                println!("  --version       Show version information");
                println!("  --help          Show this help message\n");
                println!("Controls: Space/Up flap, P pause, R restart, Esc quit");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'flappy --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    setup_logging();
    tracing::info!(version = %build_info::version_string(), "Starting");

    let config = GameConfig::load();
    let mut game = FlappyGame::new(config, FileHighScoreStore::in_working_dir());
    game.seed_starter_pipes();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let result = run(&mut terminal, &mut game);

    // Restore terminal even if the loop failed
    shut_down(&mut game, || {
        disable_raw_mode()?;
        terminal.backend_mut().execute(LeaveAlternateScreen)?;
        terminal.show_cursor()
    })?;

    result
}

/// Commit the score, then restore the terminal.
fn shut_down<S: HighScoreStore>(
    game: &mut FlappyGame<S>,
    restore: impl FnOnce() -> io::Result<()>,
) -> io::Result<()> {
    game.finish();
    tracing::info!(high_score = game.high_score(), "Exiting");
    restore()
}

/// Frame loop: input, one update, one draw, then sleep out the frame.
fn run<B: Backend, S: HighScoreStore>(
    terminal: &mut Terminal<B>,
    game: &mut FlappyGame<S>,
) -> io::Result<()> {
    let frame_budget = game.config().frame_duration();
    let mut clock = FrameClock::new(Instant::now());

    loop {
        let frame_start = Instant::now();

        // Drain pending input without blocking
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if handle_key(key, game) == InputResult::Quit {
                    return Ok(());
                }
            }
        }

        game.update(clock.tick(Instant::now()));

        let snapshot = game.snapshot();
        terminal.draw(|frame| draw_ui(frame, &snapshot))?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_budget {
            std::thread::sleep(frame_budget - elapsed);
        }
    }
}
