//! The floating window widget: part lookup, the drag/resize state machine
//! and the lifecycle (attach, factory creation, close).

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::config::WindowConfig;
use crate::constants::{BUTTON_WIDTH, TITLEBAR_HEIGHT};
use crate::error::WindowError;
use crate::geometry::{CursorPoint, Rect, ResizeDirection, ZoneChecks, ZoneHit, classify};
use crate::host::{ElementId, ListenerId, Placement, WindowHost};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Dragging,
    Resizing(ResizeDirection),
}

/// Outcome of feeding one mouse event to a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowResponse {
    Ignored,
    Consumed,
    /// The close button was pressed; the window is gone.
    Closed,
}

impl WindowResponse {
    pub fn is_handled(self) -> bool {
        !matches!(self, WindowResponse::Ignored)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowParts {
    pub container: ElementId,
    pub titlebar: ElementId,
    pub title: Option<ElementId>,
    pub minimize: Option<ElementId>,
    pub maximize: Option<ElementId>,
    pub close: ElementId,
    pub content: Option<ElementId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PressTarget {
    Resize(ResizeDirection),
    Drag,
}

/// Press-time snapshot. Every move recomputes geometry from it.
#[derive(Debug, Clone, Copy)]
struct Grab {
    origin: CursorPoint,
    start: Rect,
    engaged: bool,
}

#[derive(Debug)]
pub struct FloatingWindow {
    parts: WindowParts,
    config: WindowConfig,
    state: InteractionState,
    grab: Option<Grab>,
    hover_class: Option<String>,
    listener: Option<ListenerId>,
    restore_rect: Option<Rect>,
    collapsed_from: Option<i32>,
    closed: bool,
}

impl FloatingWindow {
    /// Wraps an existing container. The title bar and close button must be
    /// present below it; title text, minimize, maximize and content parts are
    /// optional.
    pub fn attach<H: WindowHost + ?Sized>(
        host: &mut H,
        container: ElementId,
        config: &WindowConfig,
    ) -> Result<Self, WindowError> {
        config.validate()?;
        let config = config.clone();
        if host.bounding_rect(container).is_none() {
            return Err(WindowError::MissingElement {
                part: "container",
                class: config.classes.window.clone(),
            });
        }
        let classes = &config.classes;
        let required = |part: &'static str, suffix: &str| {
            let class = classes.part(suffix);
            host.find_by_class(container, &class)
                .ok_or(WindowError::MissingElement { part, class })
        };
        let titlebar = required("title bar", &classes.titlebar)?;
        let close = required("close button", &classes.close)?;
        let optional = |suffix: &str| host.find_by_class(container, &classes.part(suffix));
        let parts = WindowParts {
            container,
            titlebar,
            title: optional(&classes.title),
            minimize: optional(&classes.minimize),
            maximize: optional(&classes.maximize),
            close,
            content: optional(&classes.content),
        };
        let listener = host.subscribe_pointer_up(container);
        tracing::debug!(container = ?container, ?listener, "attached window");
        Ok(Self {
            parts,
            config,
            state: InteractionState::Idle,
            grab: None,
            hover_class: None,
            listener: Some(listener),
            restore_rect: None,
            collapsed_from: None,
            closed: false,
        })
    }

    /// Synthesizes a container with the full set of parts under `parent`
    /// (the host root when `None`) and attaches to it.
    pub fn create<H: WindowHost + ?Sized>(
        host: &mut H,
        parent: Option<ElementId>,
        title: &str,
        rect: Rect,
        config: &WindowConfig,
    ) -> Result<Self, WindowError> {
        config.validate()?;
        let parent = parent.unwrap_or_else(|| host.root());
        let classes = &config.classes;
        let container = host.create_element(
            parent,
            &[classes.window.as_str()],
            Placement::Fixed(Rect::default()),
        );
        host.set_geometry(container, rect);
        let titlebar = host.create_element(
            container,
            &[classes.part(&classes.titlebar).as_str()],
            Placement::Strip {
                top: TITLEBAR_HEIGHT - 1,
                height: 1,
                inset: 1,
            },
        );
        let title_el = host.create_element(
            titlebar,
            &[classes.part(&classes.title).as_str()],
            Placement::Fill {
                top: 0,
                left: 0,
                right: 3 * (BUTTON_WIDTH + 1) + 1,
                bottom: 0,
            },
        );
        host.set_text(title_el, title);
        // One free cell between buttons keeps their inclusive hit boxes apart.
        for (slot, (suffix, glyph)) in [
            (&classes.close, "[x]"),
            (&classes.maximize, "[+]"),
            (&classes.minimize, "[_]"),
        ]
        .into_iter()
        .enumerate()
        {
            let button = host.create_element(
                titlebar,
                &[classes.part(suffix).as_str()],
                Placement::FromRight {
                    top: 0,
                    right: slot as i32 * (BUTTON_WIDTH + 1) + 1,
                    width: BUTTON_WIDTH,
                    height: 1,
                },
            );
            host.set_text(button, glyph);
        }
        host.create_element(
            container,
            &[classes.part(&classes.content).as_str()],
            Placement::Fill {
                top: TITLEBAR_HEIGHT,
                left: 1,
                right: 1,
                bottom: 1,
            },
        );
        match Self::attach(host, container, config) {
            Ok(window) => Ok(window),
            Err(err) => {
                host.detach(container);
                Err(err)
            }
        }
    }

    pub fn parts(&self) -> &WindowParts {
        &self.parts
    }

    pub fn container(&self) -> ElementId {
        self.parts.container
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn hover_class(&self) -> Option<&str> {
        self.hover_class.as_deref()
    }

    pub fn listener(&self) -> Option<ListenerId> {
        self.listener
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn is_minimized(&self) -> bool {
        self.collapsed_from.is_some()
    }

    pub fn is_maximized(&self) -> bool {
        self.restore_rect.is_some()
    }

    fn ensure_open(&self) -> Result<(), WindowError> {
        if self.closed {
            Err(WindowError::Closed)
        } else {
            Ok(())
        }
    }

    fn rect_of<H: WindowHost + ?Sized>(&self, host: &H, id: ElementId) -> Result<Rect, WindowError> {
        host.bounding_rect(id).ok_or(WindowError::UnknownElement(id))
    }

    pub fn geometry<H: WindowHost + ?Sized>(&self, host: &H) -> Result<Rect, WindowError> {
        self.ensure_open()?;
        self.rect_of(host, self.parts.container)
    }

    /// Classifies `point` against this window's live geometry.
    pub fn hit_test<H: WindowHost + ?Sized>(
        &self,
        host: &H,
        point: CursorPoint,
    ) -> Result<ZoneHit, WindowError> {
        self.ensure_open()?;
        let window = self.rect_of(host, self.parts.container)?;
        let title = host.bounding_rect(self.parts.titlebar);
        let checks = if self.is_minimized() {
            ZoneChecks::NONE
        } else {
            self.config.zone_checks()
        };
        Ok(classify(window, title, point, checks, self.config.zone_sizes()))
    }

    pub fn handle_mouse<H: WindowHost + ?Sized>(
        &mut self,
        host: &mut H,
        mouse: &MouseEvent,
    ) -> Result<WindowResponse, WindowError> {
        self.ensure_open()?;
        let point = CursorPoint::from(mouse);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.pointer_down(host, point),
            MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
                self.pointer_move(host, point)
            }
            MouseEventKind::Up(_) => Ok(if self.release(host) {
                WindowResponse::Consumed
            } else {
                WindowResponse::Ignored
            }),
            _ => Ok(WindowResponse::Ignored),
        }
    }

    /// Document-wide pointer-up, delivered to subscribed windows whether or
    /// not the pointer is over them. Returns whether a drag or resize ended.
    pub fn on_document_pointer_up<H: WindowHost + ?Sized>(
        &mut self,
        host: &mut H,
    ) -> Result<bool, WindowError> {
        self.ensure_open()?;
        Ok(self.release(host))
    }

    /// What a press over `hit` starts, ignoring buttons. Corners beat the
    /// title bar, which beats the edge strips running underneath it. Hover
    /// markers follow the same order.
    fn press_target(&self, hit: &ZoneHit) -> Option<PressTarget> {
        if let Some(corner) = hit.corner {
            return Some(PressTarget::Resize(ResizeDirection::Corner(corner)));
        }
        if hit.in_drag_zone && self.config.drag.any() {
            return Some(PressTarget::Drag);
        }
        hit.edge
            .map(|edge| PressTarget::Resize(ResizeDirection::Edge(edge)))
    }

    fn part_contains<H: WindowHost + ?Sized>(
        &self,
        host: &H,
        part: Option<ElementId>,
        point: CursorPoint,
    ) -> bool {
        part.and_then(|id| host.bounding_rect(id))
            .is_some_and(|r| r.contains(point))
    }

    fn over_button<H: WindowHost + ?Sized>(&self, host: &H, point: CursorPoint) -> bool {
        [Some(self.parts.close), self.parts.minimize, self.parts.maximize]
            .into_iter()
            .any(|part| self.part_contains(host, part, point))
    }

    fn pointer_down<H: WindowHost + ?Sized>(
        &mut self,
        host: &mut H,
        point: CursorPoint,
    ) -> Result<WindowResponse, WindowError> {
        if self.part_contains(host, Some(self.parts.close), point) {
            self.close(host)?;
            return Ok(WindowResponse::Closed);
        }
        if self.part_contains(host, self.parts.minimize, point) {
            self.toggle_minimize(host)?;
            return Ok(WindowResponse::Consumed);
        }
        if self.part_contains(host, self.parts.maximize, point) {
            self.toggle_maximize(host)?;
            return Ok(WindowResponse::Consumed);
        }
        if self.state != InteractionState::Idle {
            return Ok(WindowResponse::Consumed);
        }

        let window = self.rect_of(host, self.parts.container)?;
        let hit = self.hit_test(host, point)?;
        match self.press_target(&hit) {
            Some(PressTarget::Resize(direction)) => {
                self.state = InteractionState::Resizing(direction);
                self.grab = Some(Grab {
                    origin: point,
                    start: window,
                    engaged: true,
                });
                self.set_hover_class(host, self.config.cursor_class(direction.tag()));
                tracing::debug!(container = ?self.parts.container, edge = direction.tag(), "resize started");
                Ok(WindowResponse::Consumed)
            }
            Some(PressTarget::Drag) => {
                self.state = InteractionState::Dragging;
                self.grab = Some(Grab {
                    origin: point,
                    start: window,
                    engaged: self.config.drag_threshold <= 0,
                });
                self.set_hover_class(host, None);
                tracing::debug!(container = ?self.parts.container, "drag started");
                Ok(WindowResponse::Consumed)
            }
            None if window.contains(point) => Ok(WindowResponse::Consumed),
            None => Ok(WindowResponse::Ignored),
        }
    }

    fn pointer_move<H: WindowHost + ?Sized>(
        &mut self,
        host: &mut H,
        point: CursorPoint,
    ) -> Result<WindowResponse, WindowError> {
        match self.state {
            InteractionState::Idle => {
                let hit = self.hit_test(host, point)?;
                let marker = match self.press_target(&hit) {
                    Some(PressTarget::Resize(direction)) if !self.over_button(host, point) => {
                        self.config.cursor_class(direction.tag())
                    }
                    _ => None,
                };
                self.set_hover_class(host, marker);
                let window = self.rect_of(host, self.parts.container)?;
                Ok(if window.contains(point) {
                    WindowResponse::Consumed
                } else {
                    WindowResponse::Ignored
                })
            }
            InteractionState::Dragging => {
                let Some(grab) = self.grab.as_mut() else {
                    return Ok(WindowResponse::Consumed);
                };
                if !grab.engaged {
                    if grab.origin.chebyshev(point) <= self.config.drag_threshold {
                        return Ok(WindowResponse::Consumed);
                    }
                    grab.engaged = true;
                }
                let moved = drag_rect(grab.start, grab.origin, point, &self.config);
                host.set_geometry(self.parts.container, moved);
                self.restore_rect = None;
                Ok(WindowResponse::Consumed)
            }
            InteractionState::Resizing(direction) => {
                let Some(grab) = self.grab else {
                    return Ok(WindowResponse::Consumed);
                };
                let resized = resize_rect(grab.start, direction, grab.origin, point, &self.config);
                host.set_geometry(self.parts.container, resized);
                self.restore_rect = None;
                Ok(WindowResponse::Consumed)
            }
        }
    }

    /// Returns to Idle. Only the first pointer-up after a press reports
    /// `true`; the hover marker is cleared with it.
    fn release<H: WindowHost + ?Sized>(&mut self, host: &mut H) -> bool {
        if self.state == InteractionState::Idle && self.grab.is_none() {
            return false;
        }
        tracing::debug!(container = ?self.parts.container, from = ?self.state, "interaction ended");
        self.state = InteractionState::Idle;
        self.grab = None;
        self.set_hover_class(host, None);
        true
    }

    fn set_hover_class<H: WindowHost + ?Sized>(&mut self, host: &mut H, class: Option<String>) {
        if self.hover_class == class {
            return;
        }
        if let Some(old) = self.hover_class.take() {
            host.remove_class(self.parts.container, &old);
        }
        if let Some(new) = class.as_deref() {
            host.add_class(self.parts.container, new);
        }
        tracing::trace!(container = ?self.parts.container, class = ?class, "hover marker");
        self.hover_class = class;
    }

    /// Collapses the window to its title bar, or restores it.
    pub fn toggle_minimize<H: WindowHost + ?Sized>(&mut self, host: &mut H) -> Result<(), WindowError> {
        self.ensure_open()?;
        let window = self.rect_of(host, self.parts.container)?;
        if let Some(height) = self.collapsed_from.take() {
            host.set_geometry(self.parts.container, Rect { height, ..window });
            if let Some(content) = self.parts.content {
                host.set_hidden(content, false);
            }
            tracing::debug!(container = ?self.parts.container, "restored from minimized");
            return Ok(());
        }
        let titlebar = self.rect_of(host, self.parts.titlebar)?;
        let collapsed = titlebar.bottom() - window.y + 1;
        self.collapsed_from = Some(window.height);
        host.set_geometry(
            self.parts.container,
            Rect {
                height: collapsed.min(window.height),
                ..window
            },
        );
        if let Some(content) = self.parts.content {
            host.set_hidden(content, true);
        }
        self.set_hover_class(host, None);
        tracing::debug!(container = ?self.parts.container, "minimized");
        Ok(())
    }

    /// Fills the parent element, or restores the geometry saved when the
    /// window was maximized.
    pub fn toggle_maximize<H: WindowHost + ?Sized>(&mut self, host: &mut H) -> Result<(), WindowError> {
        self.ensure_open()?;
        if self.is_minimized() {
            self.toggle_minimize(host)?;
        }
        if let Some(restore) = self.restore_rect.take() {
            host.set_geometry(self.parts.container, restore);
            tracing::debug!(container = ?self.parts.container, "restored from maximized");
            return Ok(());
        }
        let window = self.rect_of(host, self.parts.container)?;
        let parent = host
            .parent(self.parts.container)
            .and_then(|p| host.bounding_rect(p))
            .ok_or(WindowError::UnknownElement(self.parts.container))?;
        host.set_geometry(
            self.parts.container,
            Rect {
                width: self.config.clamp_width(parent.width),
                height: self.config.clamp_height(parent.height),
                ..parent
            },
        );
        self.restore_rect = Some(window);
        tracing::debug!(container = ?self.parts.container, "maximized");
        Ok(())
    }

    /// Detaches the container and releases the pointer-up subscription.
    /// Every later call on this window fails with [`WindowError::Closed`].
    pub fn close<H: WindowHost + ?Sized>(&mut self, host: &mut H) -> Result<(), WindowError> {
        self.ensure_open()?;
        self.release(host);
        self.set_hover_class(host, None);
        host.detach(self.parts.container);
        if let Some(listener) = self.listener.take() {
            host.unsubscribe_pointer_up(listener);
        }
        self.closed = true;
        tracing::debug!(container = ?self.parts.container, "closed window");
        Ok(())
    }
}

/// New geometry for a title-bar drag: the press-time rectangle shifted by
/// the cursor's travel along the enabled axes.
pub fn drag_rect(start: Rect, origin: CursorPoint, point: CursorPoint, config: &WindowConfig) -> Rect {
    let dx = if config.drag.horizontal {
        point.x - origin.x
    } else {
        0
    };
    let dy = if config.drag.vertical {
        point.y - origin.y
    } else {
        0
    };
    start.translate(dx, dy)
}

/// New geometry for a resize grip. West and north grips keep the opposite
/// side anchored; sizes are clamped to the configured bounds.
pub fn resize_rect(
    start: Rect,
    direction: ResizeDirection,
    origin: CursorPoint,
    point: CursorPoint,
    config: &WindowConfig,
) -> Rect {
    let dx = point.x - origin.x;
    let dy = point.y - origin.y;
    let mut rect = start;

    if direction.moves_left() {
        rect.width = config.clamp_width(start.width - dx);
        rect.x = start.right() - rect.width;
    } else if direction.moves_right() {
        rect.width = config.clamp_width(start.width + dx);
    }

    if direction.moves_top() {
        rect.height = config.clamp_height(start.height - dy);
        rect.y = start.bottom() - rect.height;
    } else if direction.moves_bottom() {
        rect.height = config.clamp_height(start.height + dy);
    }

    rect
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Corner, Edge};
    use crate::scene::Scene;
    use crossterm::event::KeyModifiers;

    fn config() -> WindowConfig {
        WindowConfig::default()
            .with_zone_sizes(2, 1)
            .with_min_size(10, 4)
            .with_drag_threshold(0)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn setup() -> (Scene, FloatingWindow) {
        let mut scene = Scene::new(Rect::new(0, 0, 120, 40));
        let window =
            FloatingWindow::create(&mut scene, None, "demo", Rect::new(10, 5, 40, 15), &config())
                .unwrap();
        (scene, window)
    }

    #[test]
    fn resize_left_keeps_right_edge() {
        let cfg = config();
        let start = Rect::new(10, 5, 40, 15);
        let dir = ResizeDirection::Edge(Edge::West);
        let r = resize_rect(start, dir, CursorPoint::new(10, 8), CursorPoint::new(14, 8), &cfg);
        assert_eq!(r, Rect::new(14, 5, 36, 15));
        // Far past the minimum: pinned, right edge unchanged.
        let r = resize_rect(start, dir, CursorPoint::new(10, 8), CursorPoint::new(60, 8), &cfg);
        assert_eq!(r.width, 10);
        assert_eq!(r.right(), start.right());
    }

    #[test]
    fn resize_corner_clamps_to_maximum() {
        let cfg = config().with_max_size(Some(50), Some(20));
        let start = Rect::new(0, 0, 40, 15);
        let dir = ResizeDirection::Corner(Corner::SouthEast);
        let r = resize_rect(start, dir, CursorPoint::new(40, 15), CursorPoint::new(90, 60), &cfg);
        assert_eq!(r, Rect::new(0, 0, 50, 20));
    }

    #[test]
    fn resize_is_computed_from_press_snapshot() {
        let cfg = config();
        let start = Rect::new(0, 0, 40, 15);
        let dir = ResizeDirection::Edge(Edge::East);
        let origin = CursorPoint::new(40, 5);
        // Skipping intermediate frames gives the same result as replaying them.
        let direct = resize_rect(start, dir, origin, CursorPoint::new(52, 5), &cfg);
        let _ = resize_rect(start, dir, origin, CursorPoint::new(45, 5), &cfg);
        let again = resize_rect(start, dir, origin, CursorPoint::new(52, 5), &cfg);
        assert_eq!(direct, again);
        assert_eq!(direct.width, 52);
    }

    #[test]
    fn drag_respects_enabled_axes() {
        let cfg = config().with_drag("x").unwrap();
        let r = drag_rect(
            Rect::new(10, 10, 20, 5),
            CursorPoint::new(15, 11),
            CursorPoint::new(25, 30),
            &cfg,
        );
        assert_eq!(r, Rect::new(20, 10, 20, 5));
    }

    #[test]
    fn factory_builds_all_parts() {
        let (scene, window) = setup();
        let parts = window.parts();
        assert!(parts.title.is_some());
        assert!(parts.minimize.is_some());
        assert!(parts.maximize.is_some());
        assert!(parts.content.is_some());
        assert_eq!(scene.text(parts.title.unwrap()), "demo");
        assert_eq!(
            scene.bounding_rect(parts.titlebar),
            Some(Rect::new(11, 6, 38, 1))
        );
        assert_eq!(scene.pointer_up_listeners().len(), 1);
    }

    #[test]
    fn hover_marker_tracks_zone_and_clears_outside() {
        let (mut scene, mut window) = setup();
        let container = window.container();
        window
            .handle_mouse(&mut scene, &mouse(MouseEventKind::Moved, 10, 5))
            .unwrap();
        assert_eq!(window.hover_class(), Some("cursor-nw"));
        assert!(scene.has_class(container, "cursor-nw"));

        window
            .handle_mouse(&mut scene, &mouse(MouseEventKind::Moved, 30, 20))
            .unwrap();
        assert_eq!(window.hover_class(), Some("cursor-s"));
        assert!(!scene.has_class(container, "cursor-nw"));

        window
            .handle_mouse(&mut scene, &mouse(MouseEventKind::Moved, 30, 12))
            .unwrap();
        assert_eq!(window.hover_class(), None);
        assert!(!scene.has_class(container, "cursor-s"));
    }

    #[test]
    fn title_drag_moves_container() {
        let (mut scene, mut window) = setup();
        let down = window
            .handle_mouse(&mut scene, &mouse(MouseEventKind::Down(MouseButton::Left), 20, 6))
            .unwrap();
        assert_eq!(down, WindowResponse::Consumed);
        assert_eq!(window.state(), InteractionState::Dragging);
        window
            .handle_mouse(&mut scene, &mouse(MouseEventKind::Drag(MouseButton::Left), 25, 9))
            .unwrap();
        assert_eq!(window.geometry(&scene).unwrap(), Rect::new(15, 8, 40, 15));
        window
            .handle_mouse(&mut scene, &mouse(MouseEventKind::Up(MouseButton::Left), 25, 9))
            .unwrap();
        assert_eq!(window.state(), InteractionState::Idle);
    }

    #[test]
    fn drag_waits_for_threshold() {
        let mut scene = Scene::new(Rect::new(0, 0, 120, 40));
        let cfg = config().with_drag_threshold(3);
        let mut window =
            FloatingWindow::create(&mut scene, None, "t", Rect::new(10, 5, 40, 15), &cfg).unwrap();
        window
            .handle_mouse(&mut scene, &mouse(MouseEventKind::Down(MouseButton::Left), 20, 6))
            .unwrap();
        window
            .handle_mouse(&mut scene, &mouse(MouseEventKind::Drag(MouseButton::Left), 22, 6))
            .unwrap();
        assert_eq!(window.geometry(&scene).unwrap(), Rect::new(10, 5, 40, 15));
        window
            .handle_mouse(&mut scene, &mouse(MouseEventKind::Drag(MouseButton::Left), 24, 6))
            .unwrap();
        assert_eq!(window.geometry(&scene).unwrap(), Rect::new(14, 5, 40, 15));
    }

    #[test]
    fn title_bar_beats_north_strip_for_press_and_hover() {
        let (mut scene, mut window) = setup();
        let hit = window.hit_test(&scene, CursorPoint::new(30, 6)).unwrap();
        assert_eq!(hit.edge, Some(Edge::North));
        assert!(hit.in_drag_zone);

        window
            .handle_mouse(&mut scene, &mouse(MouseEventKind::Moved, 30, 6))
            .unwrap();
        assert_eq!(window.hover_class(), None);
        window
            .handle_mouse(&mut scene, &mouse(MouseEventKind::Moved, 30, 5))
            .unwrap();
        assert_eq!(window.hover_class(), Some("cursor-n"));

        window
            .handle_mouse(&mut scene, &mouse(MouseEventKind::Down(MouseButton::Left), 30, 6))
            .unwrap();
        assert_eq!(window.state(), InteractionState::Dragging);
        window
            .handle_mouse(&mut scene, &mouse(MouseEventKind::Up(MouseButton::Left), 30, 6))
            .unwrap();

        window
            .handle_mouse(&mut scene, &mouse(MouseEventKind::Down(MouseButton::Left), 30, 5))
            .unwrap();
        assert_eq!(
            window.state(),
            InteractionState::Resizing(ResizeDirection::Edge(Edge::North))
        );
    }

    #[test]
    fn close_button_inside_corner_closes() {
        let (mut scene, mut window) = setup();
        let close = scene.bounding_rect(window.parts().close).unwrap();
        assert_eq!(close, Rect::new(45, 6, 3, 1));
        let hit = window.hit_test(&scene, CursorPoint::new(48, 6)).unwrap();
        assert_eq!(hit.corner, Some(Corner::NorthEast));

        window
            .handle_mouse(&mut scene, &mouse(MouseEventKind::Moved, 49, 6))
            .unwrap();
        assert_eq!(window.hover_class(), Some("cursor-ne"));
        window
            .handle_mouse(&mut scene, &mouse(MouseEventKind::Moved, 48, 6))
            .unwrap();
        assert_eq!(window.hover_class(), None);

        let resp = window
            .handle_mouse(&mut scene, &mouse(MouseEventKind::Down(MouseButton::Left), 48, 6))
            .unwrap();
        assert_eq!(resp, WindowResponse::Closed);
        assert!(window.is_closed());
    }

    #[test]
    fn close_button_closes_from_any_state() {
        let (mut scene, mut window) = setup();
        let close = scene.bounding_rect(window.parts().close).unwrap();
        let resp = window
            .handle_mouse(
                &mut scene,
                &mouse(
                    MouseEventKind::Down(MouseButton::Left),
                    close.x as u16,
                    close.y as u16,
                ),
            )
            .unwrap();
        assert_eq!(resp, WindowResponse::Closed);
        assert!(window.is_closed());
        assert!(scene.pointer_up_listeners().is_empty());
        assert_eq!(
            window.handle_mouse(&mut scene, &mouse(MouseEventKind::Moved, 0, 0)),
            Err(WindowError::Closed)
        );
        assert_eq!(window.close(&mut scene), Err(WindowError::Closed));
    }

    #[test]
    fn minimize_collapses_and_disables_resize() {
        let (mut scene, mut window) = setup();
        window.toggle_minimize(&mut scene).unwrap();
        let rect = window.geometry(&scene).unwrap();
        assert_eq!(rect.height, 3);
        assert!(scene.is_hidden(window.parts().content.unwrap()));
        let hit = window.hit_test(&scene, CursorPoint::new(10, 5)).unwrap();
        assert_eq!(hit.resize_direction(), None);

        window.toggle_minimize(&mut scene).unwrap();
        assert_eq!(window.geometry(&scene).unwrap().height, 15);
        assert!(!scene.is_hidden(window.parts().content.unwrap()));
    }

    #[test]
    fn maximize_fills_parent_and_restores() {
        let (mut scene, mut window) = setup();
        window.toggle_maximize(&mut scene).unwrap();
        assert_eq!(window.geometry(&scene).unwrap(), Rect::new(0, 0, 120, 40));
        assert!(window.is_maximized());
        window.toggle_maximize(&mut scene).unwrap();
        assert_eq!(window.geometry(&scene).unwrap(), Rect::new(10, 5, 40, 15));
    }
}
