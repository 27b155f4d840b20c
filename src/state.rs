use super::*;

pub(crate) struct State {
  active_tab: Tab,
  favorites: Favorites,
  feed: Feed,
  filter_input: Option<FilterInput>,
  help: HelpView,
  list_height: usize,
  mode: Mode,
  next_request_id: u64,
  pending_effects: Vec<Effect>,
  pending_story: Option<PendingStory>,
  selections: [Selection; 2],
  status: StatusLine,
  term: String,
}

impl State {
  fn accept_filter(&mut self) {
    if self.filter_input.take().is_none() {
      return;
    }

    if !self.help.is_visible() {
      self.status.set_base(LIST_STATUS);
    }
  }

  pub(crate) fn active_tab(&self) -> Tab {
    self.active_tab
  }

  fn apply_filter_buffer(&mut self) {
    if let Some(input) = &self.filter_input {
      self.term = input.buffer.clone();

      let prompt = input.prompt();
      self.status.set_base(truncate(&prompt, 80));
    }

    self.clamp_tab_selection(Tab::All);
    self.clamp_tab_selection(Tab::Favorites);
  }

  fn cancel_filter(&mut self) {
    let Some(input) = self.filter_input.take() else {
      return;
    };

    self.term = input.original;

    if !self.help.is_visible() {
      self.status.set_base(LIST_STATUS);
    }

    self.clamp_tab_selection(Tab::All);
    self.clamp_tab_selection(Tab::Favorites);
  }

  fn clamp_tab_selection(&mut self, tab: Tab) {
    let len =
      view::listing(&self.feed, self.favorites.list(), &self.term, tab)
        .row_count();

    self.selections[tab.index()].clamp(len);
  }

  pub(crate) fn clear_pending_effects(&mut self) {
    self.pending_effects.clear();
  }

  fn close_comments(&mut self) {
    self.mode = Mode::List;

    if !self.help.is_visible() {
      let base = self.list_base();
      self.status.set_base(base);
    }
  }

  pub(crate) fn current_listing(&self) -> Listing {
    view::listing(
      &self.feed,
      self.favorites.list(),
      &self.term,
      self.active_tab,
    )
  }

  fn current_story(&self) -> Option<&Story> {
    match self.current_listing() {
      Listing::Rows(rows) => {
        let index = self.selection().selected_index(rows.len())?;
        rows.get(index).map(|row| row.story)
      }
      _ => None,
    }
  }

  pub(crate) fn dispatch_command(
    &mut self,
    command: Command,
  ) -> Result<CommandDispatch> {
    debug_assert!(
      self.pending_effects.is_empty(),
      "command dispatch should start without pending effects"
    );

    let mut should_exit = false;

    match command {
      Command::Quit => {
        should_exit = true;
      }
      Command::ShowHelp => self.help_show(),
      Command::HideHelp => self.help_hide(),
      Command::StartFilter => self.start_filter(),
      Command::CancelFilter => self.cancel_filter(),
      Command::AcceptFilter => self.accept_filter(),
      Command::SwitchTabLeft => self.switch_tab_left(),
      Command::SwitchTabRight => self.switch_tab_right(),
      Command::SelectNext => self.select_next(),
      Command::SelectPrevious => self.select_previous(),
      Command::PageDown => self.page_down(),
      Command::PageUp => self.page_up(),
      Command::SelectFirst => self.select_index(0),
      Command::SelectLast => self.select_last(),
      Command::OpenComments => self.open_comments(),
      Command::OpenCurrentInBrowser => self.open_current_in_browser(),
      Command::OpenCommentLink => self.open_comment_link(),
      Command::CloseComments => self.close_comments(),
      Command::RefreshStories => self.refresh_stories(),
      Command::ToggleFavorite => self.toggle_favorite(),
      Command::None => {}
    }

    Ok(CommandDispatch {
      effects: std::mem::take(&mut self.pending_effects),
      should_exit,
    })
  }

  pub(crate) fn filter_key_command(
    &mut self,
    key: KeyEvent,
  ) -> Option<Command> {
    if self.filter_input.is_some() {
      Some(self.handle_filter_key(key))
    } else {
      None
    }
  }

  pub(crate) fn handle_event(&mut self, event: Event) {
    match event {
      Event::FrontPage { result } => {
        match result {
          Ok(stories) => {
            self.feed = Feed::Ready(stories);
          }
          Err(error) => {
            self.feed = Feed::Failed(error.to_string());
          }
        }

        self.clamp_tab_selection(Tab::All);

        if matches!(self.mode, Mode::List) && !self.help.is_visible() {
          let base = self.list_base();
          self.status.set_base(base);
        }
      }
      Event::StoryDetail { request_id, result } => {
        let Some(pending) = self.pending_story.as_ref() else {
          return;
        };

        if pending.request_id != request_id {
          return;
        }

        let Some(pending) = self.pending_story.take() else {
          return;
        };

        match result {
          Ok(item) => {
            self.mode = Mode::Comments(CommentView::new(item, pending.story));

            if !self.help.is_visible() {
              self.status.set_base(COMMENTS_STATUS);
            }
          }
          Err(error) => {
            if !self.help.is_visible() {
              let base = self.list_base();
              self.status.set_base(base);
              self
                .status
                .set_notice(format!("Could not load comments: {error}"));
            }
          }
        }
      }
    }
  }

  fn handle_filter_key(&mut self, key: KeyEvent) -> Command {
    match key.code {
      KeyCode::Esc => Command::CancelFilter,
      KeyCode::Enter => Command::AcceptFilter,
      KeyCode::Backspace => {
        if let Some(input) = self.filter_input.as_mut() {
          input.buffer.pop();
        }

        self.apply_filter_buffer();

        Command::None
      }
      KeyCode::Char(ch) => {
        let modifiers = key.modifiers;

        if modifiers.contains(KeyModifiers::CONTROL)
          || modifiers.contains(KeyModifiers::ALT)
          || modifiers.contains(KeyModifiers::SUPER)
        {
          return Command::None;
        }

        if let Some(input) = self.filter_input.as_mut() {
          input.buffer.push(ch);
        }

        self.apply_filter_buffer();

        Command::None
      }
      _ => Command::None,
    }
  }

  pub(crate) fn help(&self) -> &HelpView {
    &self.help
  }

  fn help_hide(&mut self) {
    self.help.hide(&mut self.status);
  }

  pub(crate) fn help_is_visible(&self) -> bool {
    self.help.is_visible()
  }

  fn help_show(&mut self) {
    self.help.show(&mut self.status);
  }

  fn list_base(&self) -> String {
    self.filter_input.as_ref().map_or_else(
      || LIST_STATUS.to_string(),
      |input| truncate(&input.prompt(), 80),
    )
  }

  pub(crate) fn list_height(&self) -> usize {
    self.list_height
  }

  pub(crate) fn list_selection(&self, row_count: usize) -> (Option<usize>, usize) {
    let selection = self.selection();

    (
      selection.selected_index(row_count),
      selection.offset(row_count),
    )
  }

  pub(crate) fn mode_mut(&mut self) -> &mut Mode {
    &mut self.mode
  }

  pub(crate) fn new(favorites: Favorites) -> Self {
    Self {
      active_tab: Tab::All,
      favorites,
      feed: Feed::Loading,
      filter_input: None,
      help: HelpView::new(),
      list_height: 0,
      mode: Mode::List,
      next_request_id: 0,
      pending_effects: Vec::new(),
      pending_story: None,
      selections: [Selection::default(); 2],
      status: StatusLine::new(LIST_STATUS),
      term: String::new(),
    }
  }

  fn open_comment_link(&mut self) {
    if let Mode::Comments(view) = &self.mode {
      let url = view
        .selected_entry()
        .map(CommentEntry::permalink)
        .unwrap_or_else(|| view.story.resolved_url());

      self.pending_effects.push(Effect::OpenUrl { url });
    }
  }

  fn open_comments(&mut self) {
    let Some(story) = self.current_story().cloned() else {
      return;
    };

    if !self.help.is_visible() {
      self.status.set_base(LOADING_COMMENTS_STATUS);
    }

    let request_id = self.next_request_id;

    self.next_request_id = self.next_request_id.wrapping_add(1);

    self.pending_effects.push(Effect::FetchStoryDetail {
      request_id,
      story_id: story.id.clone(),
    });

    self.pending_story = Some(PendingStory { request_id, story });
  }

  fn open_current_in_browser(&mut self) {
    if let Some(story) = self.current_story() {
      self.pending_effects.push(Effect::OpenUrl {
        url: story.resolved_url(),
      });
    }
  }

  fn page_down(&mut self) {
    let current = self.selection().raw();
    let jump = self.page_jump();

    self.select_index(current.saturating_add(jump));
  }

  fn page_jump(&self) -> usize {
    self.list_height.saturating_sub(1).max(1)
  }

  fn page_up(&mut self) {
    let current = self.selection().raw();
    let jump = self.page_jump();

    self.select_index(current.saturating_sub(jump));
  }

  fn refresh_stories(&mut self) {
    if matches!(self.feed, Feed::Loading) {
      return;
    }

    self.feed = Feed::Loading;
    self.selections[Tab::All.index()] = Selection::default();

    if !self.help.is_visible() {
      self.status.set_base(LOADING_STORIES_STATUS);
    }

    self.pending_effects.push(Effect::FetchFrontPage);
  }

  fn select_index(&mut self, target: usize) {
    let len = self.current_listing().row_count();

    self.selections[self.active_tab.index()].select(target, len);
  }

  fn select_last(&mut self) {
    let last = self.current_listing().row_count().saturating_sub(1);

    self.select_index(last);
  }

  fn select_next(&mut self) {
    let current = self.selection().raw();

    self.select_index(current.saturating_add(1));
  }

  fn select_previous(&mut self) {
    let current = self.selection().raw();

    self.select_index(current.saturating_sub(1));
  }

  fn selection(&self) -> Selection {
    self.selections[self.active_tab.index()]
  }

  pub(crate) fn set_list_height(&mut self, height: usize) {
    self.list_height = height;
  }

  pub(crate) fn set_list_offset(&mut self, offset: usize) {
    let len = self.current_listing().row_count();

    self.selections[self.active_tab.index()].set_offset(offset, len);
  }

  pub(crate) fn set_notice(&mut self, message: String) {
    self.status.set_notice(message);
  }

  fn start_filter(&mut self) {
    if self.filter_input.is_some() {
      return;
    }

    self.filter_input = Some(FilterInput::new(self.term.clone()));

    self.apply_filter_buffer();
  }

  pub(crate) fn status(&self) -> &str {
    self.status.current()
  }

  fn switch_tab_left(&mut self) {
    self.active_tab = self.active_tab.previous();
  }

  fn switch_tab_right(&mut self) {
    self.active_tab = self.active_tab.next();
  }

  pub(crate) fn term(&self) -> &str {
    &self.term
  }

  pub(crate) fn tick(&mut self) {
    self.status.tick();
  }

  fn toggle_favorite(&mut self) {
    let story = match &self.mode {
      Mode::Comments(view) => Some(view.story.clone()),
      Mode::List => self.current_story().cloned(),
    };

    let Some(story) = story else {
      return;
    };

    let title = truncate(&story.title, 40);

    let added = match self.favorites.toggle(&story) {
      Ok(added) => added,
      Err(error) => {
        // The in-memory list already changed; only the persist failed.
        if !self.help.is_visible() {
          self
            .status
            .set_notice(format!("Could not save favorites: {error}"));
        }

        self.clamp_tab_selection(Tab::Favorites);

        return;
      }
    };

    self.clamp_tab_selection(Tab::Favorites);

    if !self.help.is_visible() {
      let message = if added {
        format!("Favorited \"{title}\"")
      } else {
        format!("Removed favorite \"{title}\"")
      };

      self.status.set_notice(message);
    }
  }
}
