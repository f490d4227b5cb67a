//! In-memory [`WindowHost`] backing the terminal desktop.

use std::collections::BTreeMap;

use crate::geometry::Rect;
use crate::host::{ElementId, ListenerId, Placement, WindowHost};

#[derive(Debug, Clone)]
struct Node {
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    classes: Vec<String>,
    placement: Placement,
    text: String,
    hidden: bool,
}

impl Node {
    fn new(parent: Option<ElementId>, classes: &[&str], placement: Placement) -> Self {
        Self {
            parent,
            children: Vec::new(),
            classes: classes.iter().map(|c| c.to_string()).collect(),
            placement,
            text: String::new(),
            hidden: false,
        }
    }
}

/// In-memory element tree standing in for a document.
///
/// Element ids are never reused. Detaching an element drops it together with
/// its subtree, so stale ids simply resolve to nothing.
#[derive(Debug, Clone)]
pub struct Scene {
    nodes: BTreeMap<usize, Node>,
    next_element: usize,
    listeners: BTreeMap<ListenerId, ElementId>,
    next_listener: u64,
}

impl Scene {
    pub fn new(viewport: Rect) -> Self {
        let mut nodes = BTreeMap::new();
        nodes.insert(0, Node::new(None, &[], Placement::Fixed(viewport)));
        Self {
            nodes,
            next_element: 1,
            listeners: BTreeMap::new(),
            next_listener: 0,
        }
    }

    pub fn viewport(&self) -> Rect {
        self.bounding_rect(self.root()).unwrap_or_default()
    }

    pub fn set_viewport(&mut self, viewport: Rect) {
        let root = self.root();
        if let Some(node) = self.node_mut(root) {
            node.placement = Placement::Fixed(viewport);
        }
    }

    /// Number of live elements, the root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.node(id).map_or(&[], |n| n.children.as_slice())
    }

    pub fn classes(&self, id: ElementId) -> &[String] {
        self.node(id).map_or(&[], |n| n.classes.as_slice())
    }

    pub fn text(&self, id: ElementId) -> &str {
        self.node(id).map_or("", |n| n.text.as_str())
    }

    /// Hidden elements and their subtrees are not rendered.
    pub fn is_hidden(&self, id: ElementId) -> bool {
        self.node(id).is_none_or(|n| n.hidden)
    }

    pub fn is_attached(&self, id: ElementId) -> bool {
        let mut current = id;
        loop {
            if current == self.root() {
                return true;
            }
            match self.node(current).and_then(|n| n.parent) {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    /// Currently registered pointer-up listeners with their owners, in
    /// registration order.
    pub fn pointer_up_listeners(&self) -> Vec<(ListenerId, ElementId)> {
        self.listeners.iter().map(|(l, o)| (*l, *o)).collect()
    }

    fn node(&self, id: ElementId) -> Option<&Node> {
        self.nodes.get(&id.0)
    }

    fn node_mut(&mut self, id: ElementId) -> Option<&mut Node> {
        self.nodes.get_mut(&id.0)
    }

    fn drop_subtree(&mut self, id: ElementId) {
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.remove(&current.0) {
                stack.extend(node.children);
            }
        }
    }
}

impl WindowHost for Scene {
    fn root(&self) -> ElementId {
        ElementId(0)
    }

    fn create_element(
        &mut self,
        parent: ElementId,
        classes: &[&str],
        placement: Placement,
    ) -> ElementId {
        let id = ElementId(self.next_element);
        self.next_element += 1;
        let parent = self.node(parent).map(|_| parent);
        self.nodes.insert(id.0, Node::new(parent, classes, placement));
        if let Some(parent) = parent
            && let Some(node) = self.node_mut(parent)
        {
            node.children.push(id);
        }
        id
    }

    fn find_by_class(&self, scope: ElementId, class: &str) -> Option<ElementId> {
        let mut stack: Vec<ElementId> = self.children(scope).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            if self.has_class(id, class) {
                return Some(id);
            }
            stack.extend(self.children(id).iter().rev().copied());
        }
        None
    }

    fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.node(id).and_then(|n| n.parent)
    }

    fn bounding_rect(&self, id: ElementId) -> Option<Rect> {
        let node = self.node(id)?;
        match node.parent {
            None if id == self.root() => Some(node.placement.resolve(Rect::default())),
            None => None,
            Some(parent) => self
                .bounding_rect(parent)
                .map(|parent_rect| node.placement.resolve(parent_rect)),
        }
    }

    fn set_geometry(&mut self, id: ElementId, rect: Rect) {
        let parent_rect = self
            .parent(id)
            .and_then(|p| self.bounding_rect(p))
            .unwrap_or_default();
        if let Some(node) = self.node_mut(id) {
            node.placement = Placement::Fixed(Rect {
                x: rect.x - parent_rect.x,
                y: rect.y - parent_rect.y,
                ..rect
            });
        }
    }

    fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.node(id)
            .is_some_and(|n| n.classes.iter().any(|c| c == class))
    }

    fn add_class(&mut self, id: ElementId, class: &str) {
        if self.has_class(id, class) {
            return;
        }
        if let Some(node) = self.node_mut(id) {
            node.classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, id: ElementId, class: &str) {
        if let Some(node) = self.node_mut(id) {
            node.classes.retain(|c| c != class);
        }
    }

    fn set_text(&mut self, id: ElementId, text: &str) {
        if let Some(node) = self.node_mut(id) {
            node.text = text.to_string();
        }
    }

    fn set_hidden(&mut self, id: ElementId, hidden: bool) {
        if let Some(node) = self.node_mut(id) {
            node.hidden = hidden;
        }
    }

    fn detach(&mut self, id: ElementId) -> bool {
        let Some(parent) = self.parent(id) else {
            return false;
        };
        if let Some(node) = self.node_mut(parent) {
            node.children.retain(|child| *child != id);
        }
        self.drop_subtree(id);
        true
    }

    fn subscribe_pointer_up(&mut self, owner: ElementId) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.insert(id, owner);
        id
    }

    fn unsubscribe_pointer_up(&mut self, listener: ListenerId) -> bool {
        self.listeners.remove(&listener).is_some()
    }
}
