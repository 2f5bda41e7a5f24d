use std::error::Error;
use std::io;
use std::time::Duration;

use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use adopet_console::trace::{self, Verbosity};
use adopet_console::{ConsoleApp, SeedDataSource};
use adopet_tui::InputEvent;

struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalGuard {
    fn enter() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

const fn map_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => Some(InputEvent::Key(key.code, key.modifiers)),
        Event::Mouse(mouse) => Some(InputEvent::Mouse(mouse.kind, mouse.column, mouse.row)),
        Event::Resize(width, height) => Some(InputEvent::Resize(*width, *height)),
        Event::FocusGained | Event::FocusLost | Event::Paste(_) => None,
    }
}

#[derive(Debug, Default, Clone)]
struct RuntimeOptions {
    empty: bool,
    verbose: bool,
    quiet: bool,
    no_color: bool,
}

fn parse_runtime_options() -> Result<RuntimeOptions, Box<dyn Error>> {
    let mut options = RuntimeOptions::default();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--empty" => {
                options.empty = true;
            }
            "-v" | "--verbose" => {
                options.verbose = true;
            }
            "-q" | "--quiet" => {
                options.quiet = true;
            }
            "--no-color" => {
                options.no_color = true;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("unknown argument: {other}"),
                )
                .into());
            }
        }
    }

    if !options.empty {
        if let Ok(value) = std::env::var("ADOPET_EMPTY") {
            let value = value.trim();
            options.empty = matches!(value, "1" | "true" | "TRUE" | "True");
        }
    }

    Ok(options)
}

fn print_help() {
    println!("adopet-console");
    println!();
    println!("Usage:");
    println!("  adopet-console [--empty] [-v|-q] [--no-color]");
    println!();
    println!("Flags:");
    println!("  --empty           Start with no pets in the roster");
    println!("  -v, --verbose     Debug-level logging");
    println!("  -q, --quiet       Errors only");
    println!("  --no-color        Suppress ANSI colors in log output");
    println!("  -h, --help        Show this help message");
    println!();
    println!("Environment:");
    println!("  ADOPET_EMPTY=true|false");
    println!("  ADOPET_LOG=<tracing directives> (overrides RUST_LOG and flags)");
}

fn main() -> Result<(), Box<dyn Error>> {
    let options = parse_runtime_options()?;
    trace::init_subscriber(
        Verbosity::from_flags(options.verbose, options.quiet),
        options.no_color,
    );

    let source = if options.empty {
        SeedDataSource::empty()
    } else {
        SeedDataSource::new()
    };

    let mut terminal = TerminalGuard::enter()?;
    let mut app = ConsoleApp::new(&source);

    let poll_timeout = Duration::from_millis(200);
    loop {
        terminal.terminal.draw(|frame| app.render(frame))?;

        if event::poll(poll_timeout)? {
            let raw = event::read()?;
            if let Some(input) = map_event(&raw) {
                let quit = app.handle_event(&input);
                if quit || app.shell().should_quit {
                    break;
                }
            }
        }
    }

    Ok(())
}
