// stream/adapters.rs
//
// Lazy stream adapters and eager realization.
// Forward-only streams cannot be rewound or reversed for free, so every
// operation that needs reverse traversal makes the cost explicit: a
// DoubleEndedIterator bound, or a bounded buffer.

use std::collections::VecDeque;
use std::iter;

/// Stream extensions for any `Iterator`.
pub trait StreamKit: Iterator {
    /// A lazy stream yielding `element` first, then the original
    /// elements in order. Nothing is copied eagerly.
    fn prepend(self, element: Self::Item) -> iter::Chain<iter::Once<Self::Item>, Self>
    where
        Self: Sized,
    {
        iter::once(element).chain(self)
    }

    /// The element immediately after the first occurrence of `target`.
    ///
    /// `None` if `target` is absent or is the last element. Consumes the
    /// stream up to and including that neighbor.
    fn next_to(mut self, target: &Self::Item) -> Option<Self::Item>
    where
        Self: Sized,
        Self::Item: PartialEq,
    {
        while let Some(item) = self.next() {
            if item == *target {
                return self.next();
            }
        }
        None
    }

    /// The element immediately before `target`, scanning from the end
    /// (so with duplicates, the neighbor of the last occurrence).
    ///
    /// Requires a reversible stream; forward-only streams must be
    /// materialized first, which keeps the buffering cost at the call
    /// site instead of hiding it here.
    fn previous_to(self, target: &Self::Item) -> Option<Self::Item>
    where
        Self: Sized + DoubleEndedIterator,
        Self::Item: PartialEq,
    {
        self.rev().next_to(target)
    }

    /// Up to `count` elements from the front of the stream, fewer if the
    /// stream is shorter.
    fn first_n(self, count: usize) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        self.take(count).collect()
    }

    /// Up to `count` elements from the back of the stream, fewer if the
    /// stream is shorter.
    ///
    /// Stream length is unknown in advance, so this runs one full
    /// forward pass over a ring buffer: O(n) time, O(count) auxiliary
    /// space. Consumes the stream; finite streams only.
    fn last_n(self, count: usize) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        if count == 0 {
            return Vec::new();
        }
        let mut window: VecDeque<Self::Item> = VecDeque::new();
        for item in self {
            if window.len() == count {
                let _ = window.pop_front();
            }
            window.push_back(item);
        }
        window.into()
    }

    /// Realize the stream into a `Vec`, preserving order.
    fn collect_vec(self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        self.collect()
    }

    /// Realize the stream into a `Vec`, applying `transform` to each
    /// element in a single forward pass.
    fn map_collect<U, F>(self, transform: F) -> Vec<U>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> U,
    {
        self.map(transform).collect()
    }
}

impl<I: Iterator> StreamKit for I {}
