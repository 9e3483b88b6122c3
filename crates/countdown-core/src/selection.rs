//! Single-selection cursor over the countdown list.

#[derive(Clone, Debug, Default)]
pub struct SelectionState {
    selected_index: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn set(&mut self, index: Option<usize>) {
        self.selected_index = index;
    }

    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(idx) => (idx + 1).min(len - 1),
            None => 0,
        });
    }

    pub fn prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(idx) => idx.saturating_sub(1),
            None => 0,
        });
    }

    /// Keep the selection inside a list that just changed length.
    pub fn clamp(&mut self, len: usize) {
        self.selected_index = match (self.selected_index, len) {
            (_, 0) => None,
            (Some(idx), len) => Some(idx.min(len - 1)),
            (None, _) => Some(0),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_stops_at_last() {
        let mut selection = SelectionState::new();
        selection.next(2);
        assert_eq!(selection.get(), Some(0));
        selection.next(2);
        selection.next(2);
        assert_eq!(selection.get(), Some(1));
    }

    #[test]
    fn test_prev_stops_at_first() {
        let mut selection = SelectionState::new();
        selection.set(Some(1));
        selection.prev(3);
        selection.prev(3);
        assert_eq!(selection.get(), Some(0));
    }

    #[test]
    fn test_empty_list_keeps_no_selection() {
        let mut selection = SelectionState::new();
        selection.next(0);
        selection.prev(0);
        assert_eq!(selection.get(), None);
    }

    #[test]
    fn test_clamp_after_removing_last_item() {
        let mut selection = SelectionState::new();
        selection.set(Some(2));
        selection.clamp(2);
        assert_eq!(selection.get(), Some(1));
        selection.clamp(0);
        assert_eq!(selection.get(), None);
        selection.clamp(3);
        assert_eq!(selection.get(), Some(0));
    }
}
