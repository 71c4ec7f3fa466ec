use std::collections::HashMap;
use std::fmt::Debug;

/// Handle to a node inside a [`FibonacciHeap`] arena.
///
/// Handles stay valid for the lifetime of the heap that issued them. Calling
/// [`FibonacciHeap::decrease_key`] with a handle whose node was already
/// extracted is outside the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

#[derive(Debug)]
struct Node<W> {
    vertex: usize,
    key: W,
    degree: usize,
    /// True if this node has lost a child since it last became a non-root
    mark: bool,
    parent: Option<NodeId>,
    /// One designated child; the rest are reached through the sibling ring
    child: Option<NodeId>,
    left: NodeId,
    right: NodeId,
}

/// A mergeable min-priority queue keyed by `(vertex, key)` pairs.
///
/// Supports O(1) insert, amortized O(log n) extract-min and amortized O(1)
/// decrease-key, which is what makes it preferable to a binary heap for
/// relaxation-heavy Dijkstra workloads.
///
/// All nodes live in a single arena owned by the heap; the sibling rings of
/// the classic pointer formulation become index-linked circular lists inside
/// that arena. Dropping the heap drops every node it ever allocated in one
/// go. Extracted nodes stay in the arena (their slot is never reused), so the
/// vertex-to-handle map is a record of "ever inserted", not of current
/// membership.
#[derive(Debug)]
pub struct FibonacciHeap<W> {
    nodes: Vec<Node<W>>,
    min: Option<NodeId>,
    /// Number of nodes currently in the heap (inserted and not yet extracted)
    len: usize,
    handles: HashMap<usize, NodeId>,
}

impl<W> FibonacciHeap<W>
where
    W: Copy + Ord + Debug,
{
    /// Creates a new empty heap
    pub fn new() -> Self {
        FibonacciHeap {
            nodes: Vec::new(),
            min: None,
            len: 0,
            handles: HashMap::new(),
        }
    }

    /// Creates a new empty heap with room for `vertices` nodes
    pub fn with_capacity(vertices: usize) -> Self {
        FibonacciHeap {
            nodes: Vec::with_capacity(vertices),
            min: None,
            len: 0,
            handles: HashMap::with_capacity(vertices),
        }
    }

    /// Returns true if the heap holds no nodes
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes currently in the heap
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the handle issued when `vertex` was inserted, if it ever was.
    ///
    /// Handles are not invalidated by extraction; callers that need current
    /// membership must track it themselves (the Dijkstra driver does, via its
    /// finalized flags).
    pub fn handle(&self, vertex: usize) -> Option<NodeId> {
        self.handles.get(&vertex).copied()
    }

    /// Returns the minimum entry without removing it
    pub fn peek(&self) -> Option<(usize, W)> {
        self.min.map(|id| {
            let node = &self.nodes[id.0];
            (node.vertex, node.key)
        })
    }

    /// Inserts a new `(vertex, key)` entry as a root and returns its handle.
    ///
    /// Each vertex may be inserted at most once; re-insertion is undefined.
    pub fn insert(&mut self, vertex: usize, key: W) -> NodeId {
        debug_assert!(
            !self.handles.contains_key(&vertex),
            "vertex {} inserted twice",
            vertex
        );
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            vertex,
            key,
            degree: 0,
            mark: false,
            parent: None,
            child: None,
            left: id,
            right: id,
        });
        self.add_to_root_ring(id);
        self.handles.insert(vertex, id);
        self.len += 1;
        id
    }

    /// Removes and returns the minimum entry, or `None` if the heap is empty.
    ///
    /// The minimum's children are promoted to the root ring, then trees of
    /// equal degree are merged until all root degrees are distinct.
    pub fn extract_min(&mut self) -> Option<(usize, W)> {
        let z = self.min?;

        // Promote every child of z to the root ring.
        while let Some(c) = self.nodes[z.0].child {
            let next = self.nodes[c.0].right;
            self.nodes[z.0].child = if next == c { None } else { Some(next) };
            self.unlink(c);
            self.nodes[c.0].parent = None;
            self.nodes[c.0].mark = false;
            self.splice_after(z, c);
        }
        self.nodes[z.0].degree = 0;

        let right = self.nodes[z.0].right;
        self.unlink(z);
        if right == z {
            self.min = None;
        } else {
            self.min = Some(right);
            self.consolidate();
        }
        self.len -= 1;

        let node = &self.nodes[z.0];
        Some((node.vertex, node.key))
    }

    /// Lowers the key of the node behind `id` to `new_key`.
    ///
    /// A `new_key` that does not decrease the current key is ignored. If the
    /// new key undercuts the parent's, the node is cut to the root ring and
    /// marked ancestors are cut along with it.
    pub fn decrease_key(&mut self, id: NodeId, new_key: W) {
        if new_key >= self.nodes[id.0].key {
            return;
        }
        self.nodes[id.0].key = new_key;

        if let Some(parent) = self.nodes[id.0].parent {
            if self.nodes[id.0].key < self.nodes[parent.0].key {
                self.cut(id, parent);
                self.cascading_cut(parent);
            }
        }

        if let Some(min) = self.min {
            if self.nodes[id.0].key < self.nodes[min.0].key {
                self.min = Some(id);
            }
        }
    }

    /// Splices `id` (a detached, self-ringed node) into the root ring
    fn add_to_root_ring(&mut self, id: NodeId) {
        match self.min {
            None => {
                self.nodes[id.0].left = id;
                self.nodes[id.0].right = id;
                self.min = Some(id);
            }
            Some(min) => {
                self.splice_after(min, id);
                if self.nodes[id.0].key < self.nodes[min.0].key {
                    self.min = Some(id);
                }
            }
        }
    }

    /// Inserts `id` into the ring immediately to the right of `anchor`
    fn splice_after(&mut self, anchor: NodeId, id: NodeId) {
        let next = self.nodes[anchor.0].right;
        self.nodes[id.0].left = anchor;
        self.nodes[id.0].right = next;
        self.nodes[anchor.0].right = id;
        self.nodes[next.0].left = id;
    }

    /// Removes `id` from its ring, leaving it self-ringed
    fn unlink(&mut self, id: NodeId) {
        let (l, r) = (self.nodes[id.0].left, self.nodes[id.0].right);
        self.nodes[l.0].right = r;
        self.nodes[r.0].left = l;
        self.nodes[id.0].left = id;
        self.nodes[id.0].right = id;
    }

    /// Makes `child` a child of `parent`; both must be roots
    fn link(&mut self, child: NodeId, parent: NodeId) {
        self.unlink(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[child.0].mark = false;
        match self.nodes[parent.0].child {
            None => self.nodes[parent.0].child = Some(child),
            Some(first) => self.splice_after(first, child),
        }
        self.nodes[parent.0].degree += 1;
    }

    /// Merges root trees of equal degree until every root degree is distinct,
    /// then recomputes `min` over the surviving roots.
    fn consolidate(&mut self) {
        let start = match self.min {
            Some(id) => id,
            None => return,
        };

        // Snapshot the root ring before any relinking.
        let mut roots = Vec::new();
        let mut w = start;
        loop {
            roots.push(w);
            w = self.nodes[w.0].right;
            if w == start {
                break;
            }
        }

        // Max root degree is bounded by log_phi(len), so log2 + slack covers it.
        let max_degree = ((self.len + 1) as f64).log2() as usize + 2;
        let mut table: Vec<Option<NodeId>> = vec![None; max_degree + 1];

        for mut x in roots {
            let mut d = self.nodes[x.0].degree;
            loop {
                if d >= table.len() {
                    table.resize(d + 1, None);
                }
                match table[d].take() {
                    Some(mut y) => {
                        // The larger key is demoted under the smaller.
                        if self.nodes[y.0].key < self.nodes[x.0].key {
                            std::mem::swap(&mut x, &mut y);
                        }
                        self.link(y, x);
                        d += 1;
                    }
                    None => {
                        table[d] = Some(x);
                        break;
                    }
                }
            }
        }

        self.min = None;
        for id in table.into_iter().flatten() {
            self.add_to_root_ring(id);
        }
    }

    /// Detaches `id` from `parent` and makes it an unmarked root
    fn cut(&mut self, id: NodeId, parent: NodeId) {
        let right = self.nodes[id.0].right;
        if self.nodes[parent.0].child == Some(id) {
            self.nodes[parent.0].child = if right == id { None } else { Some(right) };
        }
        self.unlink(id);
        self.nodes[parent.0].degree -= 1;
        self.nodes[id.0].parent = None;
        self.nodes[id.0].mark = false;
        if let Some(min) = self.min {
            self.splice_after(min, id);
        }
    }

    /// Walks up from a node that just lost a child, cutting marked ancestors.
    ///
    /// The first unmarked non-root ancestor is marked and the walk stops;
    /// roots are never marked. Iterative on purpose, so the walk is bounded
    /// by tree height without consuming stack.
    fn cascading_cut(&mut self, mut id: NodeId) {
        while let Some(parent) = self.nodes[id.0].parent {
            if !self.nodes[id.0].mark {
                self.nodes[id.0].mark = true;
                break;
            }
            self.cut(id, parent);
            id = parent;
        }
    }
}

impl<W> Default for FibonacciHeap<W>
where
    W: Copy + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
