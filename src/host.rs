//! The capabilities a window needs from whatever tree of elements hosts it.
//!
//! Windows never reach into a concrete surface. They look up their parts by
//! class, read bounding rectangles, mutate class lists and geometry, and
//! subscribe to the document-level pointer-up notification through this
//! trait. [`crate::scene::Scene`] is the in-memory implementation.

use crate::geometry::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(pub(crate) usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(pub(crate) u64);

/// How an element's rectangle derives from its parent's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Offset and size relative to the parent's origin.
    Fixed(Rect),
    /// Spans the parent's width minus `inset` on both sides.
    Strip { top: i32, height: i32, inset: i32 },
    /// Anchored `right` cells in from the parent's right edge.
    FromRight {
        top: i32,
        right: i32,
        width: i32,
        height: i32,
    },
    /// Fills the parent minus the given insets.
    Fill {
        top: i32,
        left: i32,
        right: i32,
        bottom: i32,
    },
}

impl Placement {
    pub fn resolve(&self, parent: Rect) -> Rect {
        match *self {
            Placement::Fixed(r) => r.translate(parent.x, parent.y),
            Placement::Strip { top, height, inset } => Rect::new(
                parent.x + inset,
                parent.y + top,
                parent.width - 2 * inset,
                height,
            ),
            Placement::FromRight {
                top,
                right,
                width,
                height,
            } => Rect::new(
                parent.right() - right - width,
                parent.y + top,
                width,
                height,
            ),
            Placement::Fill {
                top,
                left,
                right,
                bottom,
            } => Rect::new(
                parent.x + left,
                parent.y + top,
                parent.width - left - right,
                parent.height - top - bottom,
            ),
        }
    }
}

pub trait WindowHost {
    /// The document root; windows created without a parent attach here.
    fn root(&self) -> ElementId;

    fn create_element(
        &mut self,
        parent: ElementId,
        classes: &[&str],
        placement: Placement,
    ) -> ElementId;

    /// First descendant of `scope` (depth-first, document order) carrying
    /// `class`. `scope` itself is not considered.
    fn find_by_class(&self, scope: ElementId, class: &str) -> Option<ElementId>;

    fn parent(&self, id: ElementId) -> Option<ElementId>;

    /// Absolute rectangle of an attached element; `None` once detached.
    fn bounding_rect(&self, id: ElementId) -> Option<Rect>;

    /// Moves/resizes `id` so that its absolute rectangle becomes `rect`.
    fn set_geometry(&mut self, id: ElementId, rect: Rect);

    fn has_class(&self, id: ElementId, class: &str) -> bool;
    fn add_class(&mut self, id: ElementId, class: &str);
    fn remove_class(&mut self, id: ElementId, class: &str);

    fn set_text(&mut self, id: ElementId, text: &str);
    fn set_hidden(&mut self, id: ElementId, hidden: bool);

    /// Removes `id` from its parent. Returns `false` if it was not attached.
    fn detach(&mut self, id: ElementId) -> bool;

    /// Registers `owner` for document-wide pointer-up notifications.
    fn subscribe_pointer_up(&mut self, owner: ElementId) -> ListenerId;

    /// Returns `false` if `listener` was not registered.
    fn unsubscribe_pointer_up(&mut self, listener: ListenerId) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARENT: Rect = Rect::new(10, 5, 40, 20);

    #[test]
    fn fixed_is_relative_to_parent_origin() {
        let r = Placement::Fixed(Rect::new(2, 3, 4, 5)).resolve(PARENT);
        assert_eq!(r, Rect::new(12, 8, 4, 5));
    }

    #[test]
    fn strip_and_fill_follow_parent_size() {
        let strip = Placement::Strip {
            top: 1,
            height: 1,
            inset: 1,
        };
        assert_eq!(strip.resolve(PARENT), Rect::new(11, 6, 38, 1));
        let wider = Rect { width: 60, ..PARENT };
        assert_eq!(strip.resolve(wider).width, 58);

        let fill = Placement::Fill {
            top: 2,
            left: 1,
            right: 1,
            bottom: 1,
        };
        assert_eq!(fill.resolve(PARENT), Rect::new(11, 7, 38, 17));
    }

    #[test]
    fn from_right_tracks_right_edge() {
        let p = Placement::FromRight {
            top: 0,
            right: 0,
            width: 3,
            height: 1,
        };
        assert_eq!(p.resolve(PARENT), Rect::new(47, 5, 3, 1));
    }
}
