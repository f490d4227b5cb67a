//! Routes terminal events to windows.
//!
//! There is no focus or stacking policy: a window with a drag or resize in
//! progress sees every mouse event first, otherwise presses go to the most
//! recently opened window under the cursor and hover movement goes to all of
//! them. Pointer-up is additionally broadcast to every window subscribed on
//! the scene, so a release outside all windows still ends an interaction.

use crossterm::event::{Event, MouseEvent, MouseEventKind};

use crate::config::WindowConfig;
use crate::error::{ConfigError, WindowError};
use crate::geometry::{CursorPoint, Rect};
use crate::host::{ElementId, WindowHost};
use crate::scene::Scene;
use crate::widget::{FloatingWindow, InteractionState, WindowResponse};

#[derive(Debug)]
pub struct Desktop {
    scene: Scene,
    windows: Vec<FloatingWindow>,
    config: WindowConfig,
}

impl Desktop {
    pub fn new(viewport: Rect, config: WindowConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            scene: Scene::new(viewport),
            windows: Vec::new(),
            config,
        })
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn windows(&self) -> &[FloatingWindow] {
        &self.windows
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn set_viewport(&mut self, viewport: Rect) {
        self.scene.set_viewport(viewport);
    }

    /// Opens a window through the factory path and fills its content area
    /// with `body`.
    pub fn open_window(&mut self, title: &str, rect: Rect, body: &str) -> Result<ElementId, WindowError> {
        let window = FloatingWindow::create(&mut self.scene, None, title, rect, &self.config)?;
        if let Some(content) = window.parts().content {
            self.scene.set_text(content, body);
        }
        let container = window.container();
        tracing::debug!(?container, title, "opened window");
        self.windows.push(window);
        Ok(container)
    }

    pub fn window(&self, container: ElementId) -> Option<&FloatingWindow> {
        self.windows.iter().find(|w| w.container() == container)
    }

    /// Returns whether any window handled the event.
    pub fn dispatch(&mut self, event: &Event) -> bool {
        match event {
            Event::Mouse(mouse) => {
                let handled = self.dispatch_mouse(mouse);
                self.windows.retain(|w| !w.is_closed());
                handled
            }
            Event::Resize(width, height) => {
                self.set_viewport(Rect::new(0, 0, *width as i32, *height as i32));
                true
            }
            _ => false,
        }
    }

    fn dispatch_mouse(&mut self, mouse: &MouseEvent) -> bool {
        let point = CursorPoint::from(mouse);
        let mut handled = false;

        let active = self
            .windows
            .iter()
            .rposition(|w| w.state() != InteractionState::Idle);

        match (active, mouse.kind) {
            (Some(idx), _) => handled |= self.deliver(idx, mouse),
            (None, MouseEventKind::Down(_)) => {
                if let Some(idx) = self.topmost_at(point) {
                    handled |= self.deliver(idx, mouse);
                }
            }
            (None, MouseEventKind::Moved | MouseEventKind::Drag(_)) => {
                for idx in (0..self.windows.len()).rev() {
                    handled |= self.deliver(idx, mouse);
                }
            }
            _ => {}
        }

        if matches!(mouse.kind, MouseEventKind::Up(_)) {
            handled |= self.broadcast_pointer_up();
        }
        handled
    }

    fn topmost_at(&self, point: CursorPoint) -> Option<usize> {
        self.windows.iter().rposition(|w| {
            w.hit_test(&self.scene, point).is_ok_and(|hit| !hit.is_none())
                || w.geometry(&self.scene).is_ok_and(|r| r.contains(point))
        })
    }

    fn deliver(&mut self, idx: usize, mouse: &MouseEvent) -> bool {
        let Some(window) = self.windows.get_mut(idx) else {
            return false;
        };
        match window.handle_mouse(&mut self.scene, mouse) {
            Ok(response) => {
                if response == WindowResponse::Closed {
                    tracing::debug!(container = ?window.container(), "window closed by user");
                }
                response.is_handled()
            }
            Err(err) => {
                tracing::warn!(container = ?window.container(), error = %err, "mouse event failed");
                false
            }
        }
    }

    fn broadcast_pointer_up(&mut self) -> bool {
        let mut released = false;
        for (_, owner) in self.scene.pointer_up_listeners() {
            let Some(window) = self.windows.iter_mut().find(|w| w.container() == owner) else {
                continue;
            };
            match window.on_document_pointer_up(&mut self.scene) {
                Ok(ended) => released |= ended,
                Err(err) => {
                    tracing::warn!(container = ?owner, error = %err, "pointer-up delivery failed");
                }
            }
        }
        released
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseButton};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn desktop() -> Desktop {
        let config = WindowConfig::default()
            .with_zone_sizes(2, 1)
            .with_min_size(12, 5)
            .with_drag_threshold(0);
        Desktop::new(Rect::new(0, 0, 100, 40), config).unwrap()
    }

    #[test]
    fn release_outside_every_window_ends_drag() {
        let mut d = desktop();
        let id = d.open_window("a", Rect::new(10, 10, 30, 10), "body").unwrap();
        d.dispatch(&mouse(MouseEventKind::Down(MouseButton::Left), 20, 11));
        assert_eq!(d.window(id).unwrap().state(), InteractionState::Dragging);
        d.dispatch(&mouse(MouseEventKind::Drag(MouseButton::Left), 90, 38));
        assert!(d.dispatch(&mouse(MouseEventKind::Up(MouseButton::Left), 95, 39)));
        assert_eq!(d.window(id).unwrap().state(), InteractionState::Idle);
        // A stray second release is not reported as handled.
        assert!(!d.dispatch(&mouse(MouseEventKind::Up(MouseButton::Left), 95, 39)));
    }

    #[test]
    fn press_goes_to_most_recent_window_under_cursor() {
        let mut d = desktop();
        let below = d.open_window("below", Rect::new(0, 0, 40, 20), "").unwrap();
        let above = d.open_window("above", Rect::new(20, 0, 40, 20), "").unwrap();
        d.dispatch(&mouse(MouseEventKind::Down(MouseButton::Left), 30, 1));
        assert_eq!(d.window(above).unwrap().state(), InteractionState::Dragging);
        assert_eq!(d.window(below).unwrap().state(), InteractionState::Idle);
    }

    #[test]
    fn closing_removes_window_and_listener() {
        let mut d = desktop();
        let id = d.open_window("a", Rect::new(0, 0, 30, 10), "").unwrap();
        let close = d
            .scene()
            .bounding_rect(d.window(id).unwrap().parts().close)
            .unwrap();
        d.dispatch(&mouse(
            MouseEventKind::Down(MouseButton::Left),
            close.x as u16,
            close.y as u16,
        ));
        assert!(d.is_empty());
        assert!(d.scene().pointer_up_listeners().is_empty());
        assert!(d.scene().children(d.scene().root()).is_empty());
    }

    #[test]
    fn terminal_resize_updates_viewport() {
        let mut d = desktop();
        d.dispatch(&Event::Resize(120, 50));
        assert_eq!(d.scene().viewport(), Rect::new(0, 0, 120, 50));
    }
}
