use std::fmt;

use log::{debug, trace};

use crate::error::{ListError, Result};

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    data: T,
    next: Link<T>,
}

impl<T> Node<T> {
    fn new(data: T) -> Self {
        Node { data, next: None }
    }
}

/// A singly linked list that owns its nodes through a chain of boxes.
///
/// Every operation walks from `head`; there is no cached tail, so `append`
/// and `pop` are linear in the size of the list while `shift` and `unshift`
/// are constant time. Indices are signed so that a negative index is
/// reported as [`ListError::InvalidArgument`] rather than being confused with
/// an out-of-range one. Positions returned by [`index_of`](Self::index_of)
/// are `usize` and need an `as isize` cast before being passed back to
/// [`get`](Self::get) or [`insert_at`](Self::insert_at).
///
/// `collect` and `extend` walk to the tail once per call, not once per element.
pub struct SequentialList<T> {
    head: Link<T>,
    size: usize,
}

pub(crate) struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.data
        })
    }
}

fn rejected(operation: &str, err: ListError) -> ListError {
    debug!("{} rejected: {}", operation, err);
    err
}

fn non_negative(operation: &str, index: isize) -> Result<usize> {
    usize::try_from(index).map_err(|_| {
        rejected(
            operation,
            ListError::InvalidArgument(format!("index cannot be negative, got {}", index)),
        )
    })
}

impl<T> SequentialList<T> {
    pub fn new() -> Self {
        SequentialList {
            head: None,
            size: 0,
        }
    }

    pub fn with_value(data: T) -> Self {
        SequentialList {
            head: Some(Box::new(Node::new(data))),
            size: 1,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Links `data` after the current tail, or makes it the head of an empty list.
    pub fn append(&mut self, data: T) {
        let node = Some(Box::new(Node::new(data)));
        let last = self.size.checked_sub(1);
        match last.and_then(|index| self.node_at_mut(index)) {
            Some(tail) => tail.next = node,
            None => self.head = node,
        }
        self.size += 1;
        trace!("append: size is now {}", self.size);
    }

    /// Removes and returns the tail element.
    ///
    /// # Errors
    ///
    /// [`ListError::NoElement`] if the list is empty.
    pub fn pop(&mut self) -> Result<T> {
        let removed = match self.size {
            0 => None,
            1 => self.head.take(),
            size => self
                .node_at_mut(size - 2)
                .and_then(|penultimate| penultimate.next.take()),
        };
        let node = removed.ok_or_else(|| rejected("pop", ListError::NoElement))?;
        self.size -= 1;
        trace!("pop: size is now {}", self.size);
        Ok(node.data)
    }

    /// Removes and returns the head element, advancing the head to its successor.
    ///
    /// # Errors
    ///
    /// [`ListError::NoElement`] if the list is empty.
    pub fn shift(&mut self) -> Result<T> {
        let node = self
            .head
            .take()
            .ok_or_else(|| rejected("shift", ListError::NoElement))?;
        self.head = node.next;
        self.size -= 1;
        trace!("shift: size is now {}", self.size);
        Ok(node.data)
    }

    pub fn unshift(&mut self, data: T) {
        self.head = Some(Box::new(Node {
            data,
            next: self.head.take(),
        }));
        self.size += 1;
        trace!("unshift: size is now {}", self.size);
    }

    /// Returns the zero-based position of the first element equal to `data`.
    ///
    /// # Errors
    ///
    /// [`ListError::NoElement`] if the list is empty, [`ListError::NotFound`]
    /// if no element matches.
    pub fn index_of(&self, data: &T) -> Result<usize>
    where
        T: PartialEq,
    {
        if self.is_empty() {
            return Err(rejected("index_of", ListError::NoElement));
        }
        self.iter()
            .position(|x| x == data)
            .ok_or_else(|| rejected("index_of", ListError::NotFound))
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// [`ListError::InvalidArgument`] for a negative index,
    /// [`ListError::IndexOutOfRange`] when `index >= size()`.
    pub fn get(&self, index: isize) -> Result<&T> {
        let position = non_negative("get", index)?;
        let out_of_range = || {
            rejected(
                "get",
                ListError::IndexOutOfRange {
                    index,
                    size: self.size,
                },
            )
        };
        if position >= self.size {
            return Err(out_of_range());
        }
        self.iter().nth(position).ok_or_else(out_of_range)
    }

    /// Inserts `data` so that it ends up at `index`, shifting the rest of the
    /// chain by one. `index == size()` appends.
    ///
    /// # Errors
    ///
    /// [`ListError::InvalidArgument`] for a negative index,
    /// [`ListError::IndexOutOfRange`] when `index > size()`.
    pub fn insert_at(&mut self, data: T, index: isize) -> Result<()> {
        let position = non_negative("insert_at", index)?;
        if position > self.size {
            return Err(rejected(
                "insert_at",
                ListError::IndexOutOfRange {
                    index,
                    size: self.size,
                },
            ));
        }
        if position == self.size {
            self.append(data);
            return Ok(());
        }
        if position == 0 {
            self.unshift(data);
            return Ok(());
        }

        let size = self.size;
        let prev = self.node_at_mut(position - 1).ok_or_else(|| {
            rejected("insert_at", ListError::IndexOutOfRange { index, size })
        })?;
        let next = prev.next.take();
        prev.next = Some(Box::new(Node { data, next }));
        self.size += 1;
        trace!("insert_at {}: size is now {}", position, self.size);
        Ok(())
    }

    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Number of nodes reachable from `head`, counted by walking the chain.
    #[cfg(test)]
    pub(crate) fn reachable(&self) -> usize {
        self.iter().count()
    }

    fn node_at_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        let mut current_node = self.head.as_deref_mut();
        for _ in 0..index {
            current_node = current_node?.next.as_deref_mut();
        }
        current_node
    }
}

impl<T> Default for SequentialList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TryFrom<Option<T>> for SequentialList<T> {
    type Error = ListError;

    fn try_from(value: Option<T>) -> Result<Self> {
        value.map(Self::with_value).ok_or_else(|| {
            rejected(
                "construct",
                ListError::InvalidArgument("collection does not support an absent element".into()),
            )
        })
    }
}

// Unlinks one node at a time; the default recursive drop of a long box chain
// can overflow the stack.
impl<T> Drop for SequentialList<T> {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T: fmt::Display> fmt::Display for SequentialList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, data) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", data)?;
        }
        write!(f, "]")
    }
}

impl<T: fmt::Debug> fmt::Debug for SequentialList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone> Clone for SequentialList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SequentialList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SequentialList<T> {}

impl<T> Extend<T> for SequentialList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        // Chain is built back to front, then spliced after the tail in one walk.
        let items: Vec<T> = iter.into_iter().collect();
        let added = items.len();
        if added == 0 {
            return;
        }
        let mut chain: Link<T> = None;
        for data in items.into_iter().rev() {
            chain = Some(Box::new(Node { data, next: chain }));
        }
        let last = self.size.checked_sub(1);
        match last.and_then(|index| self.node_at_mut(index)) {
            Some(tail) => tail.next = chain,
            None => self.head = chain,
        }
        self.size += added;
        trace!("extend: added {}, size is now {}", added, self.size);
    }
}

impl<T> FromIterator<T> for SequentialList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SequentialList::new();
        list.extend(iter);
        list
    }
}
