use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(1);

/// Handle to a node inside a specific [`TokenList`].
///
/// A handle remembers which list created it, so passing it to a different
/// list is reported as [`TokenListError::ForeignNode`] instead of silently
/// touching an unrelated slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    list: u64,
    index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenListError {
    #[error("node belongs to another token list")]
    ForeignNode,
    #[error("node has been removed from its token list")]
    DetachedNode,
    #[error("token list is empty")]
    Empty,
}

#[derive(Debug)]
struct Slot<T> {
    /// `None` once the node has been removed; the slot is never reused.
    value: Option<T>,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Doubly-linked list stored in a slot arena.
///
/// Nodes are addressed by [`NodeId`]; insertion relative to a node and removal
/// of a node are O(1). Removed slots stay dead so stale handles keep failing
/// with [`TokenListError::DetachedNode`].
#[derive(Debug)]
pub struct TokenList<T> {
    id: u64,
    slots: Vec<Slot<T>>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl<T> Default for TokenList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TokenList<T> {
    pub fn new() -> Self {
        Self {
            id: NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed),
            slots: Vec::new(),
            head: None,
            tail: None,
        }
    }

    fn handle(&self, index: usize) -> NodeId {
        NodeId {
            list: self.id,
            index,
        }
    }

    /// Validates ownership and liveness, returning the slot index.
    fn live_index(&self, node: NodeId) -> Result<usize, TokenListError> {
        if node.list != self.id {
            return Err(TokenListError::ForeignNode);
        }
        match self.slots.get(node.index) {
            Some(slot) if slot.value.is_some() => Ok(node.index),
            _ => Err(TokenListError::DetachedNode),
        }
    }

    pub fn head(&self) -> Option<NodeId> {
        self.head.map(|i| self.handle(i))
    }

    pub fn tail(&self) -> Option<NodeId> {
        self.tail.map(|i| self.handle(i))
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Number of live nodes. Walks the list, so this is O(n).
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    pub fn get(&self, node: NodeId) -> Result<&T, TokenListError> {
        let index = self.live_index(node)?;
        self.slots[index]
            .value
            .as_ref()
            .ok_or(TokenListError::DetachedNode)
    }

    pub fn get_mut(&mut self, node: NodeId) -> Result<&mut T, TokenListError> {
        let index = self.live_index(node)?;
        self.slots[index]
            .value
            .as_mut()
            .ok_or(TokenListError::DetachedNode)
    }

    pub fn next(&self, node: NodeId) -> Result<Option<NodeId>, TokenListError> {
        let index = self.live_index(node)?;
        Ok(self.slots[index].next.map(|i| self.handle(i)))
    }

    pub fn prev(&self, node: NodeId) -> Result<Option<NodeId>, TokenListError> {
        let index = self.live_index(node)?;
        Ok(self.slots[index].prev.map(|i| self.handle(i)))
    }

    fn push_slot(&mut self, value: T, prev: Option<usize>, next: Option<usize>) -> usize {
        let index = self.slots.len();
        self.slots.push(Slot {
            value: Some(value),
            prev,
            next,
        });
        match prev {
            Some(p) => self.slots[p].next = Some(index),
            None => self.head = Some(index),
        }
        match next {
            Some(n) => self.slots[n].prev = Some(index),
            None => self.tail = Some(index),
        }
        index
    }

    pub fn append(&mut self, value: T) -> NodeId {
        let index = self.push_slot(value, self.tail, None);
        self.handle(index)
    }

    pub fn prepend(&mut self, value: T) -> NodeId {
        let index = self.push_slot(value, None, self.head);
        self.handle(index)
    }

    pub fn insert_before(&mut self, relative: NodeId, value: T) -> Result<NodeId, TokenListError> {
        let anchor = self.live_index(relative)?;
        let prev = self.slots[anchor].prev;
        let index = self.push_slot(value, prev, Some(anchor));
        Ok(self.handle(index))
    }

    pub fn insert_after(&mut self, relative: NodeId, value: T) -> Result<NodeId, TokenListError> {
        let anchor = self.live_index(relative)?;
        let next = self.slots[anchor].next;
        let index = self.push_slot(value, Some(anchor), next);
        Ok(self.handle(index))
    }

    /// Unlinks `node` and hands back its value. The handle is dead afterwards.
    pub fn remove(&mut self, node: NodeId) -> Result<T, TokenListError> {
        let index = self.live_index(node)?;
        let (prev, next) = (self.slots[index].prev, self.slots[index].next);

        match prev {
            Some(p) => self.slots[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.slots[n].prev = prev,
            None => self.tail = prev,
        }

        let slot = &mut self.slots[index];
        slot.prev = None;
        slot.next = None;
        slot.value.take().ok_or(TokenListError::DetachedNode)
    }

    pub fn remove_first(&mut self) -> Result<T, TokenListError> {
        let head = self.head().ok_or(TokenListError::Empty)?;
        self.remove(head)
    }

    pub fn remove_last(&mut self) -> Result<T, TokenListError> {
        let tail = self.tail().ok_or(TokenListError::Empty)?;
        self.remove(tail)
    }

    /// Iterates values head to tail. Each call starts a fresh traversal.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    /// Handles of all live nodes, head to tail.
    pub fn node_ids(&self) -> Vec<NodeId> {
        let mut ids = Vec::new();
        let mut cursor = self.head;
        while let Some(index) = cursor {
            ids.push(self.handle(index));
            cursor = self.slots[index].next;
        }
        ids
    }
}

impl<T> FromIterator<T> for TokenList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = TokenList::new();
        for value in iter {
            list.append(value);
        }
        list
    }
}

pub struct Iter<'a, T> {
    list: &'a TokenList<T>,
    cursor: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = &self.list.slots[self.cursor?];
        self.cursor = slot.next;
        slot.value.as_ref()
    }
}

impl<'a, T> IntoIterator for &'a TokenList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn values(list: &TokenList<&'static str>) -> Vec<&'static str> {
        list.iter().copied().collect()
    }

    #[test]
    fn append_and_prepend_keep_order() {
        let mut list = TokenList::new();
        list.append("b");
        list.append("c");
        list.prepend("a");

        assert_eq!(values(&list), vec!["a", "b", "c"]);
        assert_eq!(list.count(), 3);
        assert!(!list.is_empty());
    }

    #[test]
    fn insert_relative_to_head_and_tail_moves_ends() {
        let mut list = TokenList::new();
        let only = list.append("middle");

        let first = list.insert_before(only, "first").unwrap();
        let last = list.insert_after(only, "last").unwrap();

        assert_eq!(list.head(), Some(first));
        assert_eq!(list.tail(), Some(last));
        assert_eq!(list.prev(first).unwrap(), None);
        assert_eq!(list.next(last).unwrap(), None);
        assert_eq!(values(&list), vec!["first", "middle", "last"]);
    }

    #[test]
    fn insert_in_the_middle_relinks_neighbours() {
        let mut list = TokenList::new();
        let a = list.append("a");
        let c = list.append("c");

        let b = list.insert_after(a, "b").unwrap();

        assert_eq!(list.next(a).unwrap(), Some(b));
        assert_eq!(list.prev(c).unwrap(), Some(b));
        assert_eq!(values(&list), vec!["a", "b", "c"]);
    }

    #[test]
    fn remove_middle_head_and_tail() {
        let mut list: TokenList<_> = ["a", "b", "c", "d"].into_iter().collect();
        let ids = list.node_ids();

        assert_eq!(list.remove(ids[1]).unwrap(), "b");
        assert_eq!(values(&list), vec!["a", "c", "d"]);

        assert_eq!(list.remove(ids[0]).unwrap(), "a");
        assert_eq!(list.head(), Some(ids[2]));
        assert_eq!(list.prev(ids[2]).unwrap(), None);

        assert_eq!(list.remove(ids[3]).unwrap(), "d");
        assert_eq!(list.tail(), Some(ids[2]));
        assert_eq!(values(&list), vec!["c"]);
    }

    #[test]
    fn removing_last_node_empties_list() {
        let mut list = TokenList::new();
        let only = list.append(1);
        list.remove(only).unwrap();

        assert!(list.is_empty());
        assert_eq!(list.head(), None);
        assert_eq!(list.tail(), None);
        assert_eq!(list.count(), 0);
    }

    #[test]
    fn removed_handle_is_detached() {
        let mut list = TokenList::new();
        let a = list.append("a");
        list.append("b");
        list.remove(a).unwrap();

        assert_eq!(list.get(a), Err(TokenListError::DetachedNode));
        assert_eq!(list.next(a), Err(TokenListError::DetachedNode));
        assert_eq!(list.insert_after(a, "x"), Err(TokenListError::DetachedNode));
        assert_eq!(list.remove(a), Err(TokenListError::DetachedNode));
        assert_eq!(values(&list), vec!["b"]);
    }

    #[test]
    fn handles_from_another_list_are_rejected() {
        let mut mine = TokenList::new();
        mine.append("mine");
        let mut theirs = TokenList::new();
        let foreign = theirs.append("theirs");

        assert_eq!(mine.get(foreign), Err(TokenListError::ForeignNode));
        assert_eq!(
            mine.insert_before(foreign, "x"),
            Err(TokenListError::ForeignNode)
        );
        assert_eq!(mine.remove(foreign), Err(TokenListError::ForeignNode));
        assert_eq!(values(&mine), vec!["mine"]);
    }

    #[test]
    fn remove_first_and_last() {
        let mut list: TokenList<_> = [1, 2, 3].into_iter().collect();

        assert_eq!(list.remove_first(), Ok(1));
        assert_eq!(list.remove_last(), Ok(3));
        assert_eq!(list.remove_last(), Ok(2));
        assert_eq!(list.remove_first(), Err(TokenListError::Empty));
        assert_eq!(list.remove_last(), Err(TokenListError::Empty));
    }

    #[test]
    fn get_mut_edits_in_place() {
        let mut list = TokenList::new();
        let node = list.append(String::from("**"));
        list.get_mut(node).unwrap().truncate(1);

        assert_eq!(list.get(node).unwrap(), "*");
    }

    #[test]
    fn iteration_is_restartable() {
        let list: TokenList<_> = ["x", "y"].into_iter().collect();

        let first: Vec<_> = list.iter().collect();
        let second: Vec<_> = (&list).into_iter().collect();

        assert_eq!(first, second);
    }
}
