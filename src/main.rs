use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use indoc::indoc;
use tracing::Level;

use term_window::config::WindowConfig;
use term_window::desktop::Desktop;
use term_window::drivers::console::{ConsoleInputDriver, ConsoleOutputDriver};
use term_window::drivers::{InputDriver, OutputDriver};
use term_window::event_loop::{ControlFlow, EventLoop};
use term_window::geometry::Rect;
use term_window::render::{OpenStepDecorator, render_windows};
use term_window::tracing_sub;

const WINDOW_BODY: &str = indoc! {"
    Drag the title bar to move.
    Grab an edge or corner to resize.
    [_] collapses, [+] maximizes,
    [x] closes. q or Esc quits.
"};

#[derive(Parser, Debug)]
#[command(
    name = "term-window",
    version = env!("CARGO_PKG_VERSION"),
    about = "Floating, draggable, resizable windows in the terminal"
)]
struct Cli {
    /// Number of windows to open.
    #[arg(short = 'n', long, default_value_t = 2)]
    windows: usize,

    /// Axes windows can be dragged along ("x", "y", "xy" or "").
    #[arg(long, default_value = "xy")]
    drag: String,

    /// Axes windows can be resized along ("x", "y", "xy" or "").
    #[arg(long, default_value = "xy")]
    resize: String,

    /// Side of the corner grips, in cells.
    #[arg(long, default_value_t = 2)]
    corner_size: i32,

    /// Thickness of the edge grips, in cells.
    #[arg(long, default_value_t = 1)]
    edge_size: i32,

    #[arg(long, default_value_t = 16)]
    min_width: i32,

    #[arg(long, default_value_t = 5)]
    min_height: i32,

    #[arg(long)]
    max_width: Option<i32>,

    #[arg(long)]
    max_height: Option<i32>,

    /// Cells the cursor must travel before a title-bar press starts moving.
    #[arg(long, default_value_t = 1)]
    drag_threshold: i32,

    /// Write debug logs to this file.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn window_config(&self) -> io::Result<WindowConfig> {
        let config = WindowConfig::default()
            .with_drag(&self.drag)
            .and_then(|c| c.with_resize(&self.resize))
            .map_err(io::Error::other)?
            .with_zone_sizes(self.corner_size, self.edge_size)
            .with_min_size(self.min_width, self.min_height)
            .with_max_size(self.max_width, self.max_height)
            .with_drag_threshold(self.drag_threshold);
        config.validate().map_err(io::Error::other)?;
        Ok(config)
    }
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    tracing_sub::init(cli.log_file.as_deref(), Level::DEBUG)?;
    let config = cli.window_config()?;

    let mut output = ConsoleOutputDriver::new()?;
    let size = output.size()?;
    let mut desktop = Desktop::new(size.into(), config).map_err(io::Error::other)?;
    for idx in 0..cli.windows {
        let offset = idx as i32 * 4;
        let rect = Rect::new(2 + offset * 2, 1 + offset, 40, 12);
        desktop
            .open_window(&format!("Window {}", idx + 1), rect, WINDOW_BODY)
            .map_err(io::Error::other)?;
    }

    output.enter()?;
    let mut input = ConsoleInputDriver::new();
    input.set_mouse_capture(true)?;
    let result = run(&mut desktop, &mut input, &mut output);
    let _ = input.set_mouse_capture(false);
    output.exit()?;
    result
}

fn run(
    desktop: &mut Desktop,
    input: &mut ConsoleInputDriver,
    output: &mut ConsoleOutputDriver,
) -> io::Result<()> {
    let decorator = OpenStepDecorator;
    let mut event_loop = EventLoop::new(input, Duration::from_millis(16));
    event_loop.run(|event| {
        let Some(event) = event else {
            output.draw(|area, buffer| {
                render_windows(buffer, area, desktop.scene(), desktop.windows(), &decorator);
            })?;
            return Ok(ControlFlow::Continue);
        };
        if is_quit(&event) {
            return Ok(ControlFlow::Quit);
        }
        desktop.dispatch(&event);
        if desktop.is_empty() {
            tracing::debug!("last window closed");
            return Ok(ControlFlow::Quit);
        }
        Ok(ControlFlow::Continue)
    })
}

fn is_quit(event: &Event) -> bool {
    let Event::Key(key) = event else {
        return false;
    };
    if key.kind != KeyEventKind::Press {
        return false;
    }
    matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
