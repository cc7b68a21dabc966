//! In-memory document
//!
//! A minimal node arena that implements [`UiSurface`] so page behavior can be
//! exercised natively. Supported selectors: `tag`, `.class`, `#id`,
//! `[attr^="prefix"]` and compounds of those (`a[href^="#"]`, `div.modal`).
//! Events are not delivered on their own; the `click`/`hover`/`scroll_to`/
//! `reveal`/`take_frames` helpers return the commands a browser would have
//! dispatched, and the caller feeds them back into the page.

use std::collections::{BTreeMap, HashMap, VecDeque};

use crate::page::PageCommand;
use crate::systems::effects::RevealOptions;

use super::{SurfaceError, Trigger, UiSurface};

pub type NodeId = usize;

#[derive(Clone, Debug, Default)]
struct MemNode {
    tag: String,
    attrs: HashMap<String, String>,
    text: String,
    style: BTreeMap<String, String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Clone, Debug)]
struct Listener {
    owner: Option<NodeId>,
    node: NodeId,
    trigger: Trigger,
    command: PageCommand<NodeId>,
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attr_prefix: Option<(String, String)>,
}

fn is_ident(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

impl Selector {
    fn parse(src: &str) -> Option<Self> {
        let src = src.trim();
        if src.is_empty() {
            return None;
        }
        let mut sel = Selector::default();
        let mut rest = src;

        let tag_len = rest.find(|c: char| !is_ident(c)).unwrap_or(rest.len());
        if tag_len > 0 {
            sel.tag = Some(rest[..tag_len].to_ascii_lowercase());
            rest = &rest[tag_len..];
        }

        while let Some(c) = rest.chars().next() {
            match c {
                '.' | '#' => {
                    let body = &rest[1..];
                    let len = body.find(|c: char| !is_ident(c)).unwrap_or(body.len());
                    if len == 0 {
                        return None;
                    }
                    if c == '.' {
                        sel.classes.push(body[..len].to_string());
                    } else {
                        sel.id = Some(body[..len].to_string());
                    }
                    rest = &body[len..];
                }
                '[' => {
                    let end = rest.find(']')?;
                    let (name, value) = rest[1..end].split_once("^=")?;
                    let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
                    sel.attr_prefix = Some((name.trim().to_string(), value.to_string()));
                    rest = &rest[end + 1..];
                }
                _ => return None,
            }
        }
        Some(sel)
    }

    fn matches(&self, node: &MemNode) -> bool {
        if let Some(tag) = &self.tag {
            if node.tag != *tag {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if node.attrs.get("id") != Some(id) {
                return false;
            }
        }
        if !self.classes.is_empty() {
            let classes = node.attrs.get("class").map(String::as_str).unwrap_or("");
            if !self
                .classes
                .iter()
                .all(|want| classes.split_whitespace().any(|have| have == want))
            {
                return false;
            }
        }
        if let Some((name, prefix)) = &self.attr_prefix {
            match node.attrs.get(name) {
                Some(v) if v.starts_with(prefix.as_str()) => {}
                _ => return false,
            }
        }
        true
    }
}

pub struct MemorySurface {
    nodes: Vec<MemNode>,
    root: NodeId,
    body: NodeId,
    scroll_y: f64,
    listeners: Vec<Listener>,
    scroll_listeners: Vec<PageCommand<NodeId>>,
    observed: Vec<NodeId>,
    reveal_options: Option<RevealOptions>,
    frames: VecDeque<PageCommand<NodeId>>,
    scrolled_into_view: Vec<NodeId>,
    // Successful `set_style` calls left before every call fails
    style_budget: Option<usize>,
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySurface {
    /// Empty `<html><body></body></html>`
    pub fn new() -> Self {
        let mut surface = Self {
            nodes: vec![MemNode {
                tag: "html".to_string(),
                ..MemNode::default()
            }],
            root: 0,
            body: 0,
            scroll_y: 0.0,
            listeners: Vec::new(),
            scroll_listeners: Vec::new(),
            observed: Vec::new(),
            reveal_options: None,
            frames: VecDeque::new(),
            scrolled_into_view: Vec::new(),
            style_budget: None,
        };
        surface.body = surface.add(0, "body");
        surface
    }

    fn alloc(&mut self, tag: &str) -> NodeId {
        self.nodes.push(MemNode {
            tag: tag.to_ascii_lowercase(),
            ..MemNode::default()
        });
        self.nodes.len() - 1
    }

    fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.nodes[node].parent.take() {
            self.nodes[parent].children.retain(|&c| c != node);
        }
    }

    fn descendants(&self, root: NodeId, out: &mut Vec<NodeId>) {
        for &child in &self.nodes[root].children {
            out.push(child);
            self.descendants(child, out);
        }
    }

    fn select_under(&self, root: NodeId, selector: &str) -> Vec<NodeId> {
        let Some(sel) = Selector::parse(selector) else {
            return Vec::new();
        };
        let mut all = Vec::new();
        self.descendants(root, &mut all);
        all.into_iter().filter(|&n| sel.matches(&self.nodes[n])).collect()
    }

    /// Node and its ancestors, innermost first
    fn path(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = vec![node];
        let mut cur = node;
        while let Some(parent) = self.nodes[cur].parent {
            out.push(parent);
            cur = parent;
        }
        out
    }

    // === Document building ===

    /// Create `tag` and append it to `parent`
    pub fn add(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let node = self.alloc(tag);
        self.nodes[node].parent = Some(parent);
        self.nodes[parent].children.push(node);
        node
    }

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        self.nodes[node].attrs.insert(name.to_string(), value.to_string());
    }

    // === Inspection ===

    pub fn tag(&self, node: NodeId) -> &str {
        &self.nodes[node].tag
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node].children
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.nodes[node].style.get(property).map(String::as_str)
    }

    pub fn css_text(&self, node: NodeId) -> Option<&str> {
        self.nodes[node].attrs.get("style").map(String::as_str)
    }

    pub fn scrolled_into_view(&self) -> &[NodeId] {
        &self.scrolled_into_view
    }

    pub fn observed(&self) -> &[NodeId] {
        &self.observed
    }

    pub fn reveal_options(&self) -> Option<RevealOptions> {
        self.reveal_options
    }

    pub fn pending_frames(&self) -> usize {
        self.frames.len()
    }

    /// Registered element listeners (window scroll excluded)
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    // === Faults ===

    /// Let `budget` more `set_style` calls succeed, then fail the rest.
    /// `None` clears the fault.
    pub fn fail_styles_after(&mut self, budget: Option<usize>) {
        self.style_budget = budget;
    }

    // === Event simulation ===

    /// Commands fired by a click on `target`, bubbling from target to root
    pub fn click(&self, target: NodeId) -> Vec<PageCommand<NodeId>> {
        let path = self.path(target);
        let mut out = Vec::new();
        for node in path {
            for l in self.listeners.iter().filter(|l| l.node == node) {
                let fires = match l.trigger {
                    Trigger::Click | Trigger::Navigate => true,
                    Trigger::ClickSelf => node == target,
                    Trigger::PointerEnter | Trigger::PointerLeave => false,
                };
                if fires {
                    out.push(l.command.clone());
                }
            }
        }
        out
    }

    /// Commands fired by the pointer entering (`true`) or leaving `node`
    pub fn hover(&self, node: NodeId, entered: bool) -> Vec<PageCommand<NodeId>> {
        let want = if entered {
            Trigger::PointerEnter
        } else {
            Trigger::PointerLeave
        };
        self.listeners
            .iter()
            .filter(|l| l.node == node && l.trigger == want)
            .map(|l| l.command.clone())
            .collect()
    }

    pub fn scroll_to(&mut self, y: f64) -> Vec<PageCommand<NodeId>> {
        self.scroll_y = y;
        self.scroll_listeners.clone()
    }

    /// `node` intersects the viewport
    pub fn reveal(&self, node: NodeId) -> Option<PageCommand<NodeId>> {
        self.observed
            .contains(&node)
            .then_some(PageCommand::Reveal { node })
    }

    /// Drain commands queued for the next animation frame
    pub fn take_frames(&mut self) -> Vec<PageCommand<NodeId>> {
        self.frames.drain(..).collect()
    }
}

impl UiSurface for MemorySurface {
    type Node = NodeId;

    fn body(&self) -> Option<NodeId> {
        Some(self.body)
    }

    fn query(&self, selector: &str) -> Option<NodeId> {
        self.select_under(self.root, selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        self.select_under(self.root, selector)
    }

    fn find(&self, root: &NodeId, selector: &str) -> Option<NodeId> {
        self.select_under(*root, selector).into_iter().next()
    }

    fn closest(&self, node: &NodeId, selector: &str) -> Option<NodeId> {
        let sel = Selector::parse(selector)?;
        self.path(*node)
            .into_iter()
            .find(|&n| sel.matches(&self.nodes[n]))
    }

    fn create(&mut self, tag: &str) -> Result<NodeId, SurfaceError> {
        Ok(self.alloc(tag))
    }

    fn append(&mut self, parent: &NodeId, child: &NodeId) -> Result<(), SurfaceError> {
        if *parent >= self.nodes.len() || *child >= self.nodes.len() {
            return Err(SurfaceError::MissingElement(format!("node {}", parent.max(child))));
        }
        self.detach(*child);
        self.nodes[*child].parent = Some(*parent);
        self.nodes[*parent].children.push(*child);
        Ok(())
    }

    fn remove(&mut self, node: &NodeId) {
        self.detach(*node);
    }

    fn is_attached(&self, node: &NodeId) -> bool {
        self.path(*node).last() == Some(&self.root)
    }

    fn set_class(&mut self, node: &NodeId, class: &str) {
        self.set_attribute(*node, "class", class);
    }

    fn set_text(&mut self, node: &NodeId, text: &str) {
        let children = std::mem::take(&mut self.nodes[*node].children);
        for child in children {
            self.nodes[child].parent = None;
        }
        self.nodes[*node].text = text.to_string();
    }

    fn text(&self, node: &NodeId) -> Option<String> {
        let mut out = self.nodes[*node].text.clone();
        let mut all = Vec::new();
        self.descendants(*node, &mut all);
        for n in all {
            out.push_str(&self.nodes[n].text);
        }
        Some(out)
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.nodes[*node].attrs.get(name).cloned()
    }

    fn set_css_text(&mut self, node: &NodeId, css: &str) -> Result<(), SurfaceError> {
        self.set_attribute(*node, "style", css);
        self.nodes[*node].style.clear();
        Ok(())
    }

    fn set_style(&mut self, node: &NodeId, property: &str, value: &str) -> Result<(), SurfaceError> {
        match self.style_budget {
            Some(0) => return Err(SurfaceError::Js(format!("style `{}` rejected", property))),
            Some(ref mut left) => *left -= 1,
            None => {}
        }
        self.nodes[*node]
            .style
            .insert(property.to_string(), value.to_string());
        Ok(())
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn scroll_into_view(&mut self, node: &NodeId) {
        self.scrolled_into_view.push(*node);
    }

    fn listen(
        &mut self,
        node: &NodeId,
        trigger: Trigger,
        command: PageCommand<NodeId>,
    ) -> Result<(), SurfaceError> {
        self.listeners.push(Listener {
            owner: None,
            node: *node,
            trigger,
            command,
        });
        Ok(())
    }

    fn listen_owned(
        &mut self,
        owner: &NodeId,
        node: &NodeId,
        trigger: Trigger,
        command: PageCommand<NodeId>,
    ) -> Result<(), SurfaceError> {
        self.listeners.push(Listener {
            owner: Some(*owner),
            node: *node,
            trigger,
            command,
        });
        Ok(())
    }

    fn release(&mut self, owner: &NodeId) {
        self.listeners.retain(|l| l.owner != Some(*owner));
    }

    fn listen_scroll(&mut self, command: PageCommand<NodeId>) -> Result<(), SurfaceError> {
        self.scroll_listeners.push(command);
        Ok(())
    }

    fn observe_reveal(&mut self, nodes: &[NodeId], options: RevealOptions) -> Result<(), SurfaceError> {
        self.observed.extend_from_slice(nodes);
        self.reveal_options = Some(options);
        Ok(())
    }

    fn request_frame(&mut self, command: PageCommand<NodeId>) -> Result<(), SurfaceError> {
        self.frames.push_back(command);
        Ok(())
    }
}
