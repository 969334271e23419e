//! Doubly linked ordered list stored in an arena.
//!
//! Every element lives in a slot that also carries its `prev`/`next` links,
//! so insertion and removal at a known position are O(1) and never allocate
//! beyond the slot itself. Slot 0 is the sentinel: it links to itself when
//! the list is empty, its `next` is the head and its `prev` is the tail.
//!
//! Elements are addressed by [`NodeId`] handles. A handle stays valid until
//! its element is removed; the slot is then recycled for a later insertion.

const SENTINEL: usize = 0;

/// Stable handle to an element of an [`OrderedList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

struct Slot<T> {
    prev: usize,
    next: usize,
    value: Option<T>,
}

impl<T> Slot<T> {
    fn detached(at: usize, value: Option<T>) -> Self {
        Self {
            prev: at,
            next: at,
            value,
        }
    }
}

pub struct OrderedList<T> {
    slots: Vec<Slot<T>>,
    free: Vec<usize>,
    len: usize,
}

impl<T> OrderedList<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity + 1);
        slots.push(Slot::detached(SENTINEL, None));
        Self {
            slots,
            free: Vec::new(),
            len: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots[SENTINEL].next == SENTINEL
    }

    pub fn push_front(&mut self, value: T) -> NodeId {
        let idx = self.alloc(value);
        self.link_after(SENTINEL, idx);
        NodeId(idx)
    }

    pub fn push_back(&mut self, value: T) -> NodeId {
        let idx = self.alloc(value);
        let tail = self.slots[SENTINEL].prev;
        self.link_after(tail, idx);
        NodeId(idx)
    }

    /// Detach `node` and hand back its value. `None` if `node` is not a member.
    pub fn remove(&mut self, node: NodeId) -> Option<T> {
        if !self.contains(node) {
            return None;
        }
        self.unlink(node.0);
        self.len -= 1;
        self.free.push(node.0);
        self.slots[node.0].value.take()
    }

    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.last()?;
        self.remove(tail)
    }

    /// Relink a member at the head of the list.
    pub fn move_to_front(&mut self, node: NodeId) {
        if self.contains(node) && self.slots[SENTINEL].next != node.0 {
            self.unlink(node.0);
            self.link_after(SENTINEL, node.0);
        }
    }

    #[inline]
    pub fn first(&self) -> Option<NodeId> {
        self.member(self.slots[SENTINEL].next)
    }

    #[inline]
    pub fn last(&self) -> Option<NodeId> {
        self.member(self.slots[SENTINEL].prev)
    }

    /// The element following `node`, or `None` once the sentinel is reached.
    #[inline]
    pub fn next(&self, node: NodeId) -> Option<NodeId> {
        if !self.contains(node) {
            return None;
        }
        self.member(self.slots[node.0].next)
    }

    #[inline]
    pub fn get(&self, node: NodeId) -> Option<&T> {
        self.slots.get(node.0).and_then(|slot| slot.value.as_ref())
    }

    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        self.get(node).is_some()
    }

    /// Front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.first(),
        }
    }

    fn alloc(&mut self, value: T) -> usize {
        self.len += 1;
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Slot::detached(idx, Some(value));
                idx
            }
            None => {
                let idx = self.slots.len();
                self.slots.push(Slot::detached(idx, Some(value)));
                idx
            }
        }
    }

    fn link_after(&mut self, at: usize, idx: usize) {
        let next = self.slots[at].next;
        self.slots[idx].prev = at;
        self.slots[idx].next = next;
        self.slots[at].next = idx;
        self.slots[next].prev = idx;
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = (self.slots[idx].prev, self.slots[idx].next);
        self.slots[prev].next = next;
        self.slots[next].prev = prev;
        self.slots[idx].prev = idx;
        self.slots[idx].next = idx;
    }

    #[inline]
    fn member(&self, idx: usize) -> Option<NodeId> {
        (idx != SENTINEL).then_some(NodeId(idx))
    }
}

impl<T> Default for OrderedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Iter<'a, T> {
    list: &'a OrderedList<T>,
    cursor: Option<NodeId>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (NodeId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.cursor?;
        self.cursor = self.list.next(node);
        self.list.get(node).map(|value| (node, value))
    }
}
