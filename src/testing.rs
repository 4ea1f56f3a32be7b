//! In-memory stand-ins for the browser, used by the unit tests.

use anyhow::{anyhow, Result};
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use crate::services::dom::RenderTarget;
use crate::services::scheduler::{Scheduler, Task};
use crate::services::storage::KeyValueStore;

#[derive(Clone, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct FakeNode {
    pub tag: String,
    pub attributes: BTreeMap<String, String>,
    pub styles: BTreeMap<String, String>,
    pub text: Option<String>,
    pub children: Vec<usize>,
    pub parent: Option<usize>,
    pub in_body: bool,
}

/// One entry per mutation or layout read, in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum DomEvent {
    Style(usize, String, String),
    Layout(usize),
    AppendToBody(usize),
    Remove(usize),
}

#[derive(Default)]
struct FakeTree {
    nodes: Vec<FakeNode>,
    body: Vec<usize>,
    events: Vec<DomEvent>,
}

impl FakeTree {
    fn attached(&self, mut id: usize) -> bool {
        loop {
            let node = &self.nodes[id];
            if node.in_body {
                return true;
            }
            match node.parent {
                Some(p) => id = p,
                None => return false,
            }
        }
    }
}

/// Arena-backed document. Nodes are indices into the arena.
#[derive(Clone, Default)]
pub struct FakeDocument {
    tree: Rc<RefCell<FakeTree>>,
    fail_on_create: Rc<RefCell<bool>>,
}

impl FakeDocument {
    pub fn node(&self, id: usize) -> FakeNode {
        self.tree.borrow().nodes[id].clone()
    }

    pub fn body_children(&self) -> Vec<usize> {
        self.tree.borrow().body.clone()
    }

    pub fn events(&self) -> Vec<DomEvent> {
        self.tree.borrow().events.clone()
    }

    pub fn fail_on_create(&self) {
        *self.fail_on_create.borrow_mut() = true;
    }

    fn with_node<R>(&self, id: usize, f: impl FnOnce(&mut FakeNode) -> R) -> R {
        f(&mut self.tree.borrow_mut().nodes[id])
    }
}

impl RenderTarget for FakeDocument {
    type Node = usize;

    fn create_element(&self, tag: &str) -> Result<usize> {
        if *self.fail_on_create.borrow() {
            return Err(anyhow!("refusing to create <{}>", tag));
        }
        let mut tree = self.tree.borrow_mut();
        tree.nodes.push(FakeNode {
            tag: tag.to_string(),
            ..FakeNode::default()
        });
        Ok(tree.nodes.len() - 1)
    }

    fn set_attribute(&self, node: &usize, name: &str, value: &str) -> Result<()> {
        self.with_node(*node, |n| {
            n.attributes.insert(name.to_string(), value.to_string())
        });
        Ok(())
    }

    fn set_style(&self, node: &usize, property: &str, value: &str) -> Result<()> {
        self.with_node(*node, |n| {
            n.styles.insert(property.to_string(), value.to_string())
        });
        self.tree.borrow_mut().events.push(DomEvent::Style(
            *node,
            property.to_string(),
            value.to_string(),
        ));
        Ok(())
    }

    fn set_text(&self, node: &usize, text: &str) {
        self.with_node(*node, |n| n.text = Some(text.to_string()));
    }

    fn append_child(&self, parent: &usize, child: &usize) -> Result<()> {
        let mut tree = self.tree.borrow_mut();
        tree.nodes[*parent].children.push(*child);
        tree.nodes[*child].parent = Some(*parent);
        Ok(())
    }

    fn append_to_body(&self, node: &usize) -> Result<()> {
        let mut tree = self.tree.borrow_mut();
        tree.nodes[*node].in_body = true;
        tree.body.push(*node);
        tree.events.push(DomEvent::AppendToBody(*node));
        Ok(())
    }

    fn force_layout(&self, node: &usize) {
        self.tree.borrow_mut().events.push(DomEvent::Layout(*node));
    }

    fn remove(&self, node: &usize) {
        let mut tree = self.tree.borrow_mut();
        if let Some(parent) = tree.nodes[*node].parent.take() {
            tree.nodes[parent].children.retain(|c| c != node);
        }
        if tree.nodes[*node].in_body {
            tree.nodes[*node].in_body = false;
            tree.body.retain(|c| c != node);
            tree.events.push(DomEvent::Remove(*node));
        }
    }

    fn find_by_id(&self, id: &str) -> Option<usize> {
        let tree = self.tree.borrow();
        (0..tree.nodes.len()).find(|&i| {
            tree.nodes[i].attributes.get("id").map(String::as_str) == Some(id) && tree.attached(i)
        })
    }
}

struct Pending {
    due: u64,
    seq: u64,
    task: Task,
}

#[derive(Default)]
struct Clock {
    now: u64,
    seq: u64,
    queue: Vec<Pending>,
    refusing: bool,
}

/// Virtual clock: tasks only run inside [`ManualScheduler::advance`].
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

impl ManualScheduler {
    pub fn now(&self) -> u64 {
        self.clock.borrow().now
    }

    pub fn pending(&self) -> usize {
        self.clock.borrow().queue.len()
    }

    /// Every later `schedule` call fails, like a window without timers.
    pub fn refuse(&self) {
        self.clock.borrow_mut().refusing = true;
    }

    pub fn advance(&self, ms: u64) {
        let target = self.now() + ms;
        loop {
            let next = {
                let mut clock = self.clock.borrow_mut();
                let idx = clock
                    .queue
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.due <= target)
                    .min_by_key(|(_, p)| (p.due, p.seq))
                    .map(|(i, _)| i);
                idx.map(|i| {
                    let pending = clock.queue.remove(i);
                    clock.now = pending.due;
                    pending.task
                })
            };
            // Borrow released: the task may schedule more work.
            match next {
                Some(task) => task(),
                None => break,
            }
        }
        self.clock.borrow_mut().now = target;
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) -> Result<()> {
        let mut clock = self.clock.borrow_mut();
        if clock.refusing {
            return Err(anyhow!("timer refused"));
        }
        let due = clock.now + u64::from(delay_ms);
        let seq = clock.seq;
        clock.seq += 1;
        clock.queue.push(Pending { due, seq, task });
        Ok(())
    }
}
