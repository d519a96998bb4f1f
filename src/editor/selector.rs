//! # Selection Cursor
//!
//! [`Selector`] tracks which element of an externally owned list is
//! selected. It never owns the list: every operation borrows it, and every
//! operation on an empty list is a no-op.
//!
//! While an index is present it is in range and that element's selected flag
//! is set. When the cursor is cleared, no element is flagged by it.
//!
//! The cursor remembers the last index it pointed at, so
//! [`Selector::reselect`] after [`Selector::deselect`] restores the same
//! element. A cursor that was never set remembers index 0.

/// Elements that carry a selected flag
pub trait Selectable {
    fn is_selected(&self) -> bool;
    fn set_selected(&mut self, selected: bool);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    current: Option<usize>,
    remembered: usize,
}

impl Selector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_present(&self) -> bool {
        self.current.is_some()
    }

    pub fn is_not_present(&self) -> bool {
        !self.is_present()
    }

    /// Current index, or `None` when absent or when `elements` is empty
    pub fn index<T>(&self, elements: &[T]) -> Option<usize> {
        self.current.filter(|&index| index < elements.len())
    }

    /// Index the next [`reselect`](Self::reselect) would pick before clamping
    pub fn remembered(&self) -> usize {
        self.remembered
    }

    pub fn element<'a, T>(&self, elements: &'a [T]) -> Option<&'a T> {
        let index = self.index(elements)?;
        Some(&elements[index])
    }

    pub fn element_mut<'a, T>(&self, elements: &'a mut [T]) -> Option<&'a mut T> {
        let index = self.index(elements)?;
        Some(&mut elements[index])
    }

    /// Clears the flag of the current element and the cursor
    pub fn deselect<T: Selectable>(&mut self, elements: &mut [T]) {
        if elements.is_empty() {
            return;
        }
        if let Some(index) = self.current.take() {
            self.remembered = index;
            if let Some(element) = elements.get_mut(index) {
                element.set_selected(false);
            }
        }
    }

    /// Selects the current element again, or the remembered one
    ///
    /// A remembered index past the end of the list is clamped to the last
    /// element.
    pub fn reselect<T: Selectable>(&mut self, elements: &mut [T]) {
        let Some(last) = elements.len().checked_sub(1) else {
            return;
        };
        let index = self.current.unwrap_or(self.remembered).min(last);
        self.current = Some(index);
        self.remembered = index;
        elements[index].set_selected(true);
    }

    /// Moves the cursor to `index`; out-of-range indices are ignored
    pub fn set<T: Selectable>(&mut self, elements: &mut [T], index: usize) {
        if index >= elements.len() {
            return;
        }
        self.deselect(elements);
        self.current = Some(index);
        self.remembered = index;
        elements[index].set_selected(true);
    }

    /// Selects the following element, wrapping to the first
    pub fn select_next<T: Selectable>(&mut self, elements: &mut [T]) {
        self.step(elements, |index, len| (index + 1) % len);
    }

    /// Selects the preceding element, wrapping to the last
    pub fn select_previous<T: Selectable>(&mut self, elements: &mut [T]) {
        self.step(elements, |index, len| (index + len - 1) % len);
    }

    fn step<T, F>(&mut self, elements: &mut [T], next: F)
    where
        T: Selectable,
        F: Fn(usize, usize) -> usize,
    {
        if elements.is_empty() {
            return;
        }
        self.reselect(elements);
        if let Some(index) = self.current {
            self.set(elements, next(index, elements.len()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Item {
        selected: bool,
    }

    impl Selectable for Item {
        fn is_selected(&self) -> bool {
            self.selected
        }

        fn set_selected(&mut self, selected: bool) {
            self.selected = selected;
        }
    }

    fn items(count: usize) -> Vec<Item> {
        (0..count).map(|_| Item::default()).collect()
    }

    fn flags(items: &[Item]) -> Vec<bool> {
        items.iter().map(|item| item.selected).collect()
    }

    #[test]
    fn test_empty_list_is_a_no_op() {
        let mut selector = Selector::new();
        let mut empty: Vec<Item> = Vec::new();

        selector.select_next(&mut empty);
        selector.select_previous(&mut empty);
        selector.reselect(&mut empty);
        selector.set(&mut empty, 0);
        selector.deselect(&mut empty);

        assert!(selector.is_not_present());
        assert_eq!(selector.index(&empty), None);
        assert!(selector.element(&empty).is_none());
    }

    #[test]
    fn test_set_moves_the_flag() {
        let mut list = items(3);
        let mut selector = Selector::new();

        selector.set(&mut list, 1);
        assert_eq!(flags(&list), [false, true, false]);

        selector.set(&mut list, 2);
        assert_eq!(flags(&list), [false, false, true]);
        assert_eq!(selector.index(&list), Some(2));

        // Out of range is ignored
        selector.set(&mut list, 3);
        assert_eq!(selector.index(&list), Some(2));
    }

    #[test]
    fn test_next_and_previous_wrap_around() {
        let mut list = items(3);
        let mut selector = Selector::new();

        selector.set(&mut list, 2);
        selector.select_next(&mut list);
        assert_eq!(selector.index(&list), Some(0));
        assert_eq!(flags(&list), [true, false, false]);

        selector.select_previous(&mut list);
        assert_eq!(selector.index(&list), Some(2));
        assert_eq!(flags(&list), [false, false, true]);
    }

    #[test]
    fn test_next_from_nothing_starts_after_remembered() {
        let mut list = items(3);
        let mut selector = Selector::new();

        selector.select_next(&mut list);
        assert_eq!(selector.index(&list), Some(1));
    }

    #[test]
    fn test_reselect_remembers_last_index() {
        let mut list = items(3);
        let mut selector = Selector::new();

        selector.set(&mut list, 2);
        selector.deselect(&mut list);
        assert!(selector.is_not_present());
        assert_eq!(flags(&list), [false, false, false]);

        selector.reselect(&mut list);
        assert_eq!(selector.index(&list), Some(2));
        assert_eq!(flags(&list), [false, false, true]);
    }

    #[test]
    fn test_reselect_never_set_picks_first() {
        let mut list = items(2);
        let mut selector = Selector::new();

        selector.reselect(&mut list);
        assert_eq!(selector.index(&list), Some(0));
        assert!(list[0].is_selected());
    }

    #[test]
    fn test_reselect_clamps_after_shrink() {
        let mut list = items(3);
        let mut selector = Selector::new();

        selector.set(&mut list, 2);
        selector.deselect(&mut list);
        list.truncate(1);

        selector.reselect(&mut list);
        assert_eq!(selector.index(&list), Some(0));
    }

    #[test]
    fn test_element_mut_reaches_current() {
        let mut list = items(2);
        let mut selector = Selector::new();
        selector.set(&mut list, 1);

        if let Some(item) = selector.element_mut(&mut list) {
            item.set_selected(false);
        }
        assert_eq!(flags(&list), [false, false]);
    }
}
