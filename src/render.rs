use ratatui::buffer::Buffer;
use ratatui::layout::Rect as CellRect;
use ratatui::style::{Color, Modifier, Style};

use crate::geometry::Rect;
use crate::host::WindowHost;
use crate::scene::Scene;
use crate::widget::{FloatingWindow, InteractionState};

pub trait WindowDecorator: std::fmt::Debug {
    fn render_window(&self, buffer: &mut Buffer, bounds: CellRect, scene: &Scene, window: &FloatingWindow);
}

/// Grey frame, filled title bar with buttons on the right, and a double-line
/// outline while a grip is hovered or a drag is in progress.
#[derive(Debug, Default)]
pub struct OpenStepDecorator;

struct Painter<'a> {
    buffer: &'a mut Buffer,
    bounds: CellRect,
}

impl Painter<'_> {
    fn put(&mut self, x: i32, y: i32, symbol: &str, style: Style) {
        let bx = self.bounds.x as i32;
        let by = self.bounds.y as i32;
        if x < bx
            || y < by
            || x >= bx + self.bounds.width as i32
            || y >= by + self.bounds.height as i32
        {
            return;
        }
        if let Some(cell) = self.buffer.cell_mut((x as u16, y as u16)) {
            cell.set_symbol(symbol);
            cell.set_style(style);
        }
    }

    fn fill_row(&mut self, rect: Rect, y: i32, style: Style) {
        for x in rect.x..rect.right() {
            self.put(x, y, " ", style);
        }
    }

    /// Writes `text` from `x`, never past `limit` (exclusive).
    fn text(&mut self, x: i32, y: i32, limit: i32, text: &str, style: Style) {
        for (idx, ch) in text.chars().enumerate() {
            let cx = x + idx as i32;
            if cx >= limit {
                break;
            }
            self.put(cx, y, &ch.to_string(), style);
        }
    }

    fn frame(&mut self, rect: Rect, glyphs: &FrameGlyphs, style: Style) {
        if rect.width < 2 || rect.height < 2 {
            return;
        }
        let right = rect.right() - 1;
        let bottom = rect.bottom() - 1;
        for x in rect.x..=right {
            let (top, bot) = if x == rect.x {
                (glyphs.top_left, glyphs.bottom_left)
            } else if x == right {
                (glyphs.top_right, glyphs.bottom_right)
            } else {
                (glyphs.horizontal, glyphs.horizontal)
            };
            self.put(x, rect.y, top, style);
            self.put(x, bottom, bot, style);
        }
        for y in rect.y + 1..bottom {
            self.put(rect.x, y, glyphs.vertical, style);
            self.put(right, y, glyphs.vertical, style);
        }
    }
}

struct FrameGlyphs {
    top_left: &'static str,
    top_right: &'static str,
    bottom_left: &'static str,
    bottom_right: &'static str,
    horizontal: &'static str,
    vertical: &'static str,
}

const SINGLE: FrameGlyphs = FrameGlyphs {
    top_left: "┌",
    top_right: "┐",
    bottom_left: "└",
    bottom_right: "┘",
    horizontal: "─",
    vertical: "│",
};

const DOUBLE: FrameGlyphs = FrameGlyphs {
    top_left: "╔",
    top_right: "╗",
    bottom_left: "╚",
    bottom_right: "╝",
    horizontal: "═",
    vertical: "║",
};

impl WindowDecorator for OpenStepDecorator {
    fn render_window(&self, buffer: &mut Buffer, bounds: CellRect, scene: &Scene, window: &FloatingWindow) {
        let parts = window.parts();
        let Some(rect) = scene.bounding_rect(parts.container) else {
            return;
        };
        let mut painter = Painter { buffer, bounds };

        let body_style = Style::default().bg(Color::Reset).fg(Color::Gray);
        let border_style = Style::default().fg(Color::DarkGray).bg(Color::Reset);
        let active = window.hover_class().is_some() || window.state() != InteractionState::Idle;
        let header_style = if active {
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().bg(Color::DarkGray).fg(Color::White)
        };

        for y in rect.y..rect.bottom() {
            painter.fill_row(rect, y, body_style);
        }

        if let Some(bar) = scene.bounding_rect(parts.titlebar) {
            painter.fill_row(bar, bar.y, header_style);
            if let Some(title) = parts.title
                && let Some(title_rect) = scene.bounding_rect(title)
            {
                let text = scene.text(title);
                let len = text.chars().count() as i32;
                let start = title_rect.x + ((title_rect.width - len) / 2).max(0);
                painter.text(start, title_rect.y, title_rect.right(), text, header_style);
            }
            let buttons = [parts.minimize, parts.maximize, Some(parts.close)];
            for button in buttons.into_iter().flatten() {
                if let Some(button_rect) = scene.bounding_rect(button) {
                    painter.text(
                        button_rect.x,
                        button_rect.y,
                        button_rect.right(),
                        scene.text(button),
                        header_style,
                    );
                }
            }
        }

        if let Some(content) = parts.content
            && !scene.is_hidden(content)
            && let Some(content_rect) = scene.bounding_rect(content)
        {
            for (row, line) in scene.text(content).lines().enumerate() {
                let y = content_rect.y + row as i32;
                if y >= content_rect.bottom() {
                    break;
                }
                painter.text(content_rect.x, y, content_rect.right(), line, body_style);
            }
        }

        if active {
            painter.frame(rect, &DOUBLE, border_style.fg(Color::Yellow));
        } else {
            painter.frame(rect, &SINGLE, border_style);
        }
    }
}

/// Paints every window attached to the scene root, in creation order, so
/// later windows overlap earlier ones.
pub fn render_windows(
    buffer: &mut Buffer,
    bounds: CellRect,
    scene: &Scene,
    windows: &[FloatingWindow],
    decorator: &dyn WindowDecorator,
) {
    for window in windows.iter().filter(|w| !w.is_closed()) {
        if scene.is_attached(window.container()) {
            decorator.render_window(buffer, bounds, scene, window);
        }
    }
}
