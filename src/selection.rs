/// Cursor and scroll offset for a list whose rows are re-derived every
/// draw, so only the indices are kept here and clamped against the current
/// row count.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Selection {
  offset: usize,
  selected: usize,
}

impl Selection {
  pub(crate) fn clamp(&mut self, len: usize) {
    self.selected = self.selected.min(len.saturating_sub(1));
    self.offset = self.offset.min(len.saturating_sub(1));
  }

  pub(crate) fn offset(&self, len: usize) -> usize {
    if len == 0 {
      0
    } else {
      self.offset.min(self.selected_index(len).unwrap_or(0))
    }
  }

  pub(crate) fn raw(&self) -> usize {
    self.selected
  }

  pub(crate) fn select(&mut self, index: usize, len: usize) {
    if len == 0 {
      self.selected = 0;
    } else {
      self.selected = index.min(len.saturating_sub(1));
    }
  }

  pub(crate) fn selected_index(&self, len: usize) -> Option<usize> {
    if len == 0 {
      None
    } else {
      Some(self.selected.min(len.saturating_sub(1)))
    }
  }

  pub(crate) fn set_offset(&mut self, offset: usize, len: usize) {
    if len == 0 {
      self.offset = 0;
    } else {
      self.offset = offset.min(len.saturating_sub(1));
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn selected_index_is_none_when_empty() {
    let selection = Selection::default();
    assert_eq!(selection.selected_index(0), None);
    assert_eq!(selection.offset(0), 0);
  }

  #[test]
  fn select_clamps_to_the_row_count() {
    let mut selection = Selection::default();

    selection.select(10, 3);
    assert_eq!(selection.selected_index(3), Some(2));

    selection.set_offset(10, 3);
    assert_eq!(selection.offset(3), 2);
  }

  #[test]
  fn clamp_pulls_a_stale_cursor_back_into_range() {
    let mut selection = Selection::default();
    selection.select(5, 6);

    selection.clamp(2);
    assert_eq!(selection.selected_index(2), Some(1));
  }

  #[test]
  fn selection_survives_a_shrink_and_regrow() {
    let mut selection = Selection::default();
    selection.select(4, 10);

    // Filtering down to one row then back up keeps a valid cursor.
    assert_eq!(selection.selected_index(1), Some(0));
    assert_eq!(selection.selected_index(10), Some(4));
  }
}
