use super::*;

pub(crate) struct CommentView {
  pub(crate) body: Option<String>,
  pub(crate) entries: Vec<CommentEntry>,
  pub(crate) offset: usize,
  pub(crate) selected: Option<usize>,
  pub(crate) story: Story,
}

impl CommentView {
  pub(crate) fn collapse_selected(&mut self) {
    if let Some(selected) = self.selected
      && let Some(entry) = self.entries.get_mut(selected)
    {
      if entry.expanded && !entry.children.is_empty() {
        entry.expanded = false;
      } else if let Some(parent) = entry.parent {
        self.selected = Some(parent);
      }
    }

    self.ensure_selection_visible();
  }

  pub(crate) fn ensure_selection_visible(&mut self) {
    let mut current = self.selected;

    while let Some(idx) = current {
      if self.is_visible(idx) {
        self.selected = Some(idx);
        return;
      }

      current = self.entries.get(idx).and_then(|entry| entry.parent);
    }

    self.selected = self.visible_indexes().first().copied();
  }

  pub(crate) fn expand_selected(&mut self) {
    if let Some(selected) = self.selected
      && let Some(entry) = self.entries.get_mut(selected)
    {
      if entry.children.is_empty() {
        return;
      }

      if entry.expanded {
        if let Some(child) = entry.children.first().copied() {
          self.selected = Some(child);
        }
      } else {
        entry.expanded = true;
      }
    }

    self.ensure_selection_visible();
  }

  // Preorder flatten with an explicit work stack; the source tree's depth is
  // bounded only by the remote data, so the call stack stays out of it.
  fn flatten(roots: Vec<Comment>) -> Vec<CommentEntry> {
    let mut entries = Vec::new();
    let mut stack: Vec<(Comment, Option<usize>, usize)> = Vec::new();

    for comment in roots.into_iter().rev() {
      stack.push((comment, None, 0));
    }

    while let Some((comment, parent, depth)) = stack.pop() {
      let Comment {
        author,
        children,
        id,
        text,
      } = comment;

      let body = match text {
        Some(html) => html2text::from_read(html.as_bytes(), usize::MAX)
          .ok()
          .map(|text| text.trim_end().to_owned())
          .unwrap_or_default(),
        None => "[deleted]".to_string(),
      };

      let index = entries.len();

      entries.push(CommentEntry {
        author,
        body,
        children: Vec::new(),
        depth,
        expanded: true,
        id,
        parent,
      });

      if let Some(parent) = parent
        && let Some(entry) = entries.get_mut(parent)
      {
        entry.children.push(index);
      }

      for child in children.into_iter().rev() {
        stack.push((child, Some(index), depth.saturating_add(1)));
      }
    }

    entries
  }

  pub(crate) fn is_visible(&self, idx: usize) -> bool {
    let mut current = Some(idx);

    while let Some(i) = current {
      if let Some(parent) = self.entries.get(i).and_then(|entry| entry.parent) {
        if let Some(parent_entry) = self.entries.get(parent)
          && !parent_entry.expanded
        {
          return false;
        }

        current = Some(parent);
      } else {
        break;
      }
    }

    true
  }

  pub(crate) fn move_by(&mut self, delta: isize) {
    let (visible, selected_pos) = self.visible_with_selection();

    if visible.is_empty() {
      self.selected = None;
      return;
    }

    let current = selected_pos.unwrap_or(0);
    let max_index = visible.len().saturating_sub(1);

    let target = if delta >= 0 {
      let delta_usize = usize::try_from(delta).unwrap_or(usize::MAX);
      current.saturating_add(delta_usize).min(max_index)
    } else {
      let magnitude = delta
        .checked_abs()
        .and_then(|value| usize::try_from(value).ok())
        .unwrap_or(usize::MAX);

      current.saturating_sub(magnitude)
    };

    self.selected = Some(visible[target]);
  }

  pub(crate) fn new(item: Item, snapshot: Story) -> Self {
    let Item {
      author,
      children,
      id,
      points,
      text,
      title,
      url,
    } = item;

    // The fetched item is fresher than the list row's snapshot; prefer its
    // fields, fall back to the snapshot where the item leaves them out.
    let story = Story {
      author: author.or(snapshot.author),
      id: id.to_string(),
      points: points.or(snapshot.points),
      title: title.unwrap_or(snapshot.title),
      url: url.or(snapshot.url),
    };

    let body = text
      .as_deref()
      .map(sanitize_comment)
      .filter(|body| !body.is_empty());

    let entries = Self::flatten(children);

    let selected = (!entries.is_empty()).then_some(0);

    Self {
      body,
      entries,
      offset: 0,
      selected,
      story,
    }
  }

  pub(crate) fn page_down(&mut self, amount: usize) {
    let step = amount.saturating_sub(1).max(1);
    let delta = isize::try_from(step).unwrap_or(isize::MAX);
    self.move_by(delta);
  }

  pub(crate) fn page_up(&mut self, amount: usize) {
    let step = amount.saturating_sub(1).max(1);
    let delta = isize::try_from(step).unwrap_or(isize::MAX);
    self.move_by(-delta);
  }

  pub(crate) fn select_index_at(&mut self, pos: usize) {
    let (visible, _) = self.visible_with_selection();

    if visible.is_empty() {
      self.selected = None;
      return;
    }

    let index = pos.min(visible.len().saturating_sub(1));

    self.selected = Some(visible[index]);
  }

  pub(crate) fn select_next(&mut self) {
    self.move_by(1);
  }

  pub(crate) fn select_previous(&mut self) {
    self.move_by(-1);
  }

  pub(crate) fn selected_entry(&self) -> Option<&CommentEntry> {
    self.selected.and_then(|idx| self.entries.get(idx))
  }

  pub(crate) fn toggle_selected(&mut self) {
    if let Some(selected) = self.selected
      && let Some(entry) = self.entries.get_mut(selected)
    {
      if entry.children.is_empty() {
        return;
      }

      entry.expanded = !entry.expanded;
    }

    self.ensure_selection_visible();
  }

  pub(crate) fn visible_indexes(&self) -> Vec<usize> {
    let mut visible = Vec::new();

    for idx in 0..self.entries.len() {
      if self.is_visible(idx) {
        visible.push(idx);
      }
    }

    visible
  }

  pub(crate) fn visible_with_selection(&self) -> (Vec<usize>, Option<usize>) {
    let visible = self.visible_indexes();

    let selected_pos = self
      .selected
      .and_then(|selected| visible.iter().position(|&idx| idx == selected));

    (visible, selected_pos)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn make_comment(id: u64, children: Vec<Comment>) -> Comment {
    Comment {
      author: Some(format!("user{id}")),
      children,
      id,
      text: Some(format!("comment {id}")),
    }
  }

  fn make_item(children: Vec<Comment>) -> Item {
    Item {
      author: Some("op".to_string()),
      children,
      id: 42,
      points: Some(10),
      text: None,
      title: Some("Example".to_string()),
      url: None,
    }
  }

  fn snapshot() -> Story {
    Story {
      author: None,
      id: "42".to_string(),
      points: None,
      title: "Stale title".to_string(),
      url: Some("https://example.com".to_string()),
    }
  }

  fn make_view() -> CommentView {
    let child = make_comment(2, Vec::new());
    let parent = make_comment(1, vec![child]);

    CommentView::new(make_item(vec![parent]), snapshot())
  }

  #[test]
  fn new_prefers_item_fields_over_the_snapshot() {
    let view = make_view();

    assert_eq!(view.story.title, "Example");
    assert_eq!(view.story.points, Some(10));
    assert_eq!(view.story.url.as_deref(), Some("https://example.com"));
  }

  #[test]
  fn flatten_preserves_preorder_and_depth() {
    let item = make_item(vec![
      make_comment(1, vec![make_comment(2, vec![make_comment(3, Vec::new())])]),
      make_comment(4, Vec::new()),
    ]);

    let view = CommentView::new(item, snapshot());

    let ids: Vec<u64> = view.entries.iter().map(|entry| entry.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);

    let depths: Vec<usize> =
      view.entries.iter().map(|entry| entry.depth).collect();
    assert_eq!(depths, vec![0, 1, 2, 0]);

    assert_eq!(view.entries[0].children, vec![1]);
    assert_eq!(view.entries[1].parent, Some(0));
    assert_eq!(view.entries[3].parent, None);
  }

  #[test]
  fn flatten_handles_deep_chains_without_recursing() {
    let mut comment = make_comment(400, Vec::new());

    for id in (1..400).rev() {
      comment = make_comment(id, vec![comment]);
    }

    let view = CommentView::new(make_item(vec![comment]), snapshot());

    assert_eq!(view.entries.len(), 400);
    assert_eq!(view.entries.last().map(|entry| entry.depth), Some(399));
  }

  #[test]
  fn deleted_comment_displays_a_placeholder_body() {
    let comment = Comment {
      author: None,
      children: Vec::new(),
      id: 7,
      text: None,
    };

    let view = CommentView::new(make_item(vec![comment]), snapshot());

    assert_eq!(view.entries[0].body(), "[deleted]");
    assert_eq!(view.entries[0].header(), "unknown");
  }

  #[test]
  fn toggle_selected_collapses_and_expands_comments() {
    let mut view = make_view();
    assert!(view.entries[0].expanded);

    view.toggle_selected();
    assert!(!view.entries[0].expanded);

    view.toggle_selected();
    assert!(view.entries[0].expanded);
  }

  #[test]
  fn collapse_selected_moves_to_parent_when_child_selected() {
    let mut view = make_view();
    view.select_index_at(1);
    assert_eq!(view.selected, Some(1));
    view.collapse_selected();
    assert_eq!(view.selected, Some(0));
  }

  #[test]
  fn expand_selected_moves_into_first_child() {
    let mut view = make_view();
    view.expand_selected();
    assert_eq!(view.selected, Some(1));
  }

  #[test]
  fn ensure_selection_visible_promotes_hidden_selection() {
    let mut view = make_view();
    view.select_index_at(1);
    view.entries[0].expanded = false;
    view.ensure_selection_visible();
    assert_eq!(view.selected, Some(0));
  }

  #[test]
  fn visible_indexes_respect_collapsed_ancestors() {
    let mut view = make_view();
    assert_eq!(view.visible_indexes(), vec![0, 1]);
    view.entries[0].expanded = false;
    assert_eq!(view.visible_indexes(), vec![0]);
  }
}
