//! AND/OR predicate combinators over in-memory records.
//!
//! Filter kinds are attached as leaf predicates to an `all()` group, with
//! the multi-field free-text match nested as an `any()` group. New
//! filterable fields are added at the call site; the combinator itself
//! never changes.

enum Mode {
    All,
    Any,
}

enum Node<T> {
    Leaf(Box<dyn Fn(&T) -> bool>),
    Group(Condition<T>),
}

/// A tree of predicates combined with AND (`all`) or OR (`any`).
pub struct Condition<T> {
    mode: Mode,
    nodes: Vec<Node<T>>,
}

impl<T> Condition<T> {
    /// A group matching records that satisfy every predicate.
    pub fn all() -> Self {
        Self {
            mode: Mode::All,
            nodes: Vec::new(),
        }
    }

    /// A group matching records that satisfy at least one predicate.
    pub fn any() -> Self {
        Self {
            mode: Mode::Any,
            nodes: Vec::new(),
        }
    }

    pub fn add(mut self, predicate: impl Fn(&T) -> bool + 'static) -> Self {
        self.nodes.push(Node::Leaf(Box::new(predicate)));
        self
    }

    pub fn add_group(mut self, group: Condition<T>) -> Self {
        self.nodes.push(Node::Group(group));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Evaluate the tree against one record. An empty group matches
    /// everything regardless of mode, so callers can build a condition
    /// unconditionally and only attach the filters that are set.
    pub fn matches(&self, record: &T) -> bool {
        if self.nodes.is_empty() {
            return true;
        }
        let mut check = self.nodes.iter().map(|node| match node {
            Node::Leaf(predicate) => predicate(record),
            Node::Group(group) => group.matches(record),
        });
        match self.mode {
            Mode::All => check.all(|matched| matched),
            Mode::Any => check.any(|matched| matched),
        }
    }
}
