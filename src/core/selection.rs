/// Cursor choosing which record's detail panel a tab strip shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    selected: usize,
}

impl Selection {
    pub fn new(selected: usize) -> Self {
        Self { selected }
    }

    pub fn select(&mut self, index: usize) {
        self.selected = index;
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Index actually shown for a list of `len` items; out of range means 0.
    pub fn effective(&self, len: usize) -> usize {
        if self.selected < len {
            self.selected
        } else {
            0
        }
    }

    pub fn current<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        items.get(self.effective(items.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_selection_is_kept() {
        let selection = Selection::new(2);
        assert_eq!(selection.effective(4), 2);
        assert_eq!(selection.current(&["a", "b", "c", "d"]), Some(&"c"));
    }

    #[test]
    fn shrinking_list_resets_to_first() {
        let mut selection = Selection::default();
        selection.select(3);
        assert_eq!(selection.effective(3), 0);
        assert_eq!(selection.current(&["x", "y", "z"]), Some(&"x"));
        // 原本的選擇仍保留，清單變長時恢復
        assert_eq!(selection.selected(), 3);
        assert_eq!(selection.effective(5), 3);
    }

    #[test]
    fn empty_list_has_no_current() {
        let selection = Selection::new(1);
        assert_eq!(selection.effective(0), 0);
        assert_eq!(selection.current::<u8>(&[]), None);
    }
}
