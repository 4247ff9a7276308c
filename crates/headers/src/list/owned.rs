//! Owning wrapper tying a native list's release to Rust scope discipline.

use std::ffi::CStr;
use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

use super::raw::{self, ListNode};

/// Sole owner of a native header list.
///
/// Dropping the handle releases every node exactly once. Because the type is
/// neither `Clone` nor `Copy`, and [`ListHandle::from_raw`] transfers
/// ownership, a list can never be freed twice through safe code.
///
/// A handle never wraps a null head; the "no headers" state is represented
/// as `Option::<ListHandle>::None`, not as a wrapper around null.
///
/// The native handle a list is attached to holds the same head pointer as a
/// non-owning reference, so a `ListHandle` must outlive that attachment:
/// attach first, then wrap, and keep the wrapper stored for as long as the
/// handle may read the list.
pub struct ListHandle {
    head: NonNull<ListNode>,
}

impl ListHandle {
    /// Takes ownership of a raw list head.
    ///
    /// # Safety
    ///
    /// `head` must be the head of a well-formed list produced by
    /// [`append`](super::append), and the caller must transfer sole ownership: no other
    /// `ListHandle` may wrap it and no other code may free it.
    pub unsafe fn from_raw(head: NonNull<ListNode>) -> Self {
        Self { head }
    }

    /// The raw head pointer, as handed to the native handle.
    ///
    /// The pointer stays owned by this wrapper; callers must not free it or
    /// keep it past the wrapper's lifetime.
    pub fn as_ptr(&self) -> *mut ListNode {
        self.head.as_ptr()
    }

    /// Iterates the list entries in list order.
    pub fn iter(&self) -> Iter<'_> {
        Iter { node: self.head.as_ptr(), _list: PhantomData }
    }

    /// The entries decoded into owned strings.
    pub fn lines(&self) -> Vec<String> {
        self.iter().map(|entry| entry.to_string_lossy().into_owned()).collect()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Always false: a wrapped list holds at least one entry.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Drop for ListHandle {
    fn drop(&mut self) {
        // SAFETY: `from_raw` transferred sole ownership to this wrapper, and
        // drop runs at most once per wrapper, so the list is freed exactly once.
        unsafe { raw::free_all(self.head.as_ptr()) };
    }
}

impl fmt::Debug for ListHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Iterator over the entries of a [`ListHandle`].
#[derive(Debug)]
pub struct Iter<'a> {
    node: *const ListNode,
    _list: PhantomData<&'a ListNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a CStr;

    fn next(&mut self) -> Option<Self::Item> {
        let node = NonNull::new(self.node.cast_mut())?;
        // SAFETY: `node` is reachable from a `ListHandle` borrowed for 'a, so
        // the node and its line stay valid for 'a.
        unsafe {
            self.node = node.as_ref().next;
            Some(CStr::from_ptr(node.as_ref().data))
        }
    }
}

impl<'a> IntoIterator for &'a ListHandle {
    type Item = &'a CStr;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(lines: &[&str]) -> ListHandle {
        let mut head = None;
        for line in lines {
            // SAFETY: `head` is the exclusively owned result of the previous append.
            head = Some(unsafe { raw::append(head, line) }.unwrap());
        }
        // SAFETY: the freshly built list has exactly one owner.
        unsafe { ListHandle::from_raw(head.unwrap()) }
    }

    #[test]
    fn iter_yields_entries_in_list_order() {
        let list = sample(&["Host: example.com", "Accept: */*"]);
        let lines: Vec<&str> = list.iter().map(|entry| entry.to_str().unwrap()).collect();
        assert_eq!(lines, ["Host: example.com", "Accept: */*"]);
        assert_eq!(list.len(), 2);
        assert!(!list.is_empty());
    }

    #[test]
    fn lines_decodes_owned_strings() {
        let list = sample(&["X-One: 1"]);
        assert_eq!(list.lines(), ["X-One: 1"]);
    }

    #[test]
    fn debug_shows_the_entries() {
        let list = sample(&["A: 1"]);
        assert_eq!(format!("{list:?}"), "[\"A: 1\"]");
    }

    #[test]
    fn drop_releases_the_list() {
        // exercised for leak/double-free detection under sanitizers
        let list = sample(&["A: 1", "B: 2", "C: 3"]);
        drop(list);
    }
}
