use super::*;

pub(crate) struct App {
  client: Client,
  event_rx: UnboundedReceiver<Event>,
  event_tx: UnboundedSender<Event>,
  handle: Handle,
  state: State,
}

impl App {
  fn comment_list_item(entry: &CommentEntry, available_width: u16) -> ListItem {
    let depth_indent = "  ".repeat(entry.depth);
    let indent = format!("{BASE_INDENT}{depth_indent}");

    let toggle = entry.has_children().then_some(if entry.expanded {
      "[-]"
    } else {
      "[+]"
    });

    let mut header = vec![Span::raw(indent.clone())];

    if let Some(symbol) = toggle {
      header.push(Span::raw(symbol));
      header.push(Span::raw(" "));
    }

    header.push(Span::styled(
      entry.header(),
      Style::default().fg(Color::White),
    ));

    let mut lines = vec![Line::from(header)];

    if !entry.body().is_empty() {
      let body_indent = indent.clone();
      let prefix_width = body_indent.chars().count();

      let max_width = usize::from(available_width);
      let wrap_width = max_width.saturating_sub(prefix_width).max(1);

      for line in wrap_text(entry.body(), wrap_width) {
        lines.push(Line::from(vec![
          Span::raw(body_indent.clone()),
          Span::styled(line, Style::default().fg(Color::DarkGray)),
        ]));
      }
    }

    lines.push(Line::from(Span::raw(indent.clone())));

    ListItem::new(lines)
  }

  fn draw(&mut self, frame: &mut Frame) {
    if matches!(self.state.mode_mut(), Mode::Comments(_)) {
      self.draw_comments(frame);
    } else {
      self.draw_list(frame);
    }
  }

  fn draw_comments(&mut self, frame: &mut Frame) {
    let area = frame.area();

    let Mode::Comments(view) = self.state.mode_mut() else {
      return;
    };

    let body_width = usize::from(area.width.saturating_sub(4).max(1));

    let mut header_lines = vec![Line::from(Span::styled(
      view.story.title.clone(),
      Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    ))];

    let byline = match view.story.detail() {
      Some(detail) => format!("{detail} • {}", view.story.resolved_url()),
      None => view.story.resolved_url(),
    };

    header_lines.push(Line::from(Span::styled(
      byline,
      Style::default().fg(Color::DarkGray),
    )));

    if let Some(body) = &view.body {
      header_lines.push(Line::default());

      for line in wrap_text(body, body_width).into_iter().take(4) {
        header_lines.push(Line::from(Span::styled(
          line,
          Style::default().fg(Color::Gray),
        )));
      }
    }

    let header_height = u16::try_from(header_lines.len())
      .unwrap_or(u16::MAX)
      .saturating_add(1);

    let layout = Layout::default()
      .direction(Direction::Vertical)
      .margin(1)
      .constraints([
        Constraint::Length(header_height),
        Constraint::Min(0),
        Constraint::Length(1),
      ])
      .split(area);

    let list_height = usize::from(layout[1].height);

    let (visible, selected_pos) = view.visible_with_selection();

    let list_items: Vec<ListItem> = if visible.is_empty() {
      vec![ListItem::new(Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::raw("No comments yet."),
      ]))]
    } else {
      visible
        .iter()
        .map(|&idx| Self::comment_list_item(&view.entries[idx], layout[1].width))
        .collect()
    };

    let offset = view.offset.min(selected_pos.unwrap_or(0));

    frame.render_widget(
      Paragraph::new(header_lines).wrap(Wrap { trim: true }),
      layout[0],
    );

    let mut list_state = ListState::default()
      .with_selected(selected_pos)
      .with_offset(offset);

    let list = List::new(list_items)
      .highlight_style(
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      )
      .highlight_symbol("");

    frame.render_stateful_widget(list, layout[1], &mut list_state);

    view.offset = list_state.offset();

    self.state.set_list_height(list_height);

    let status = Paragraph::new(self.state.status().to_string())
      .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, layout[2]);

    self.state.help().draw(frame);
  }

  fn draw_list(&mut self, frame: &mut Frame) {
    let layout = Layout::default()
      .direction(Direction::Vertical)
      .margin(1)
      .constraints([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
      ])
      .split(frame.area());

    self.state.set_list_height(usize::from(layout[1].height));

    let tab_titles: Vec<Line> = Tab::all()
      .iter()
      .map(|tab| Line::from(tab.label().to_uppercase()))
      .collect();

    let tabs_widget = Tabs::new(tab_titles)
      .select(self.state.active_tab().index())
      .style(Style::default().fg(Color::DarkGray))
      .highlight_style(
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      )
      .divider(Span::raw(" "));

    frame.render_widget(tabs_widget, layout[0]);

    let (list_items, row_count) = {
      let listing = self.state.current_listing();

      let items: Vec<ListItem> = match &listing {
        Listing::Loading => {
          vec![Self::notice_item(LOADING_STORIES_STATUS.to_string())]
        }
        Listing::Failed(message) => vec![Self::notice_item(format!(
          "Could not load the front page: {message}"
        ))],
        Listing::Rows(rows) if rows.is_empty() => {
          let text = if self.state.term().is_empty() {
            match self.state.active_tab() {
              Tab::All => "Front page is empty.".to_string(),
              Tab::Favorites => {
                "No favorites yet. Press f on a story to add one.".to_string()
              }
            }
          } else {
            format!(
              "No stories match \"{}\".",
              truncate(self.state.term(), 40)
            )
          };

          vec![Self::notice_item(text)]
        }
        Listing::Rows(rows) => {
          rows.iter().map(Self::story_list_item).collect()
        }
      };

      (items, listing.row_count())
    };

    let (selected_index, offset) = self.state.list_selection(row_count);

    let mut list_state = ListState::default()
      .with_selected(selected_index)
      .with_offset(offset);

    let list = List::new(list_items)
      .highlight_style(
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      )
      .highlight_symbol("");

    frame.render_stateful_widget(list, layout[1], &mut list_state);

    self.state.set_list_offset(list_state.offset());

    let status = Paragraph::new(self.state.status().to_string())
      .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, layout[2]);

    self.state.help().draw(frame);
  }

  fn execute_effect(&mut self, effect: Effect) {
    match effect {
      Effect::FetchFrontPage => {
        let (client, sender) = (self.client.clone(), self.event_tx.clone());

        let handle = self.handle.clone();

        handle.spawn(async move {
          let _ = sender.send(Event::FrontPage {
            result: client.fetch_front_page().await,
          });
        });
      }
      Effect::FetchStoryDetail {
        request_id,
        story_id,
      } => {
        let (client, sender) = (self.client.clone(), self.event_tx.clone());

        let handle = self.handle.clone();

        handle.spawn(async move {
          let _ = sender.send(Event::StoryDetail {
            request_id,
            result: client.fetch_item(&story_id).await,
          });
        });
      }
      Effect::OpenUrl { url } => match webbrowser::open(&url) {
        Ok(()) => {
          self.state.set_notice(format!(
            "Opened in browser: {}",
            truncate(&url, 80)
          ));
        }
        Err(error) => {
          self
            .state
            .set_notice(format!("Could not open link: {error}"));
        }
      },
    }
  }

  pub(crate) fn new(client: Client, favorites: Favorites) -> Self {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    let state = State::new(favorites);

    Self {
      client,
      event_rx,
      event_tx,
      handle: Handle::current(),
      state,
    }
  }

  fn notice_item(text: String) -> ListItem<'static> {
    ListItem::new(Line::from(vec![Span::raw(BASE_INDENT), Span::raw(text)]))
  }

  fn process_pending_events(&mut self) {
    self.state.tick();

    while let Ok(event) = self.event_rx.try_recv() {
      self.state.handle_event(event);
    }
  }

  pub(crate) fn run(
    &mut self,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
  ) -> Result {
    self.execute_effect(Effect::FetchFrontPage);

    loop {
      self.process_pending_events();

      terminal.draw(|frame| self.draw(frame))?;

      if !crossterm_event::poll(Duration::from_millis(200))? {
        self.process_pending_events();
        continue;
      }

      let CrosstermEvent::Key(key) = crossterm_event::read()? else {
        self.process_pending_events();
        continue;
      };

      if key.kind != KeyEventKind::Press {
        self.process_pending_events();
        continue;
      }

      let command = if self.state.help_is_visible() {
        HelpView::handle_key(key)
      } else if let Some(command) = self.state.filter_key_command(key) {
        command
      } else {
        let page = self.state.list_height().max(1);
        self.state.mode_mut().handle_key(key, page)
      };

      match self.state.dispatch_command(command) {
        Ok(dispatch) => {
          for effect in dispatch.effects {
            self.execute_effect(effect);
          }

          if dispatch.should_exit {
            break;
          }

          self.process_pending_events();
        }
        Err(error) => {
          self.state.clear_pending_effects();
          self.state.set_notice(format!("error: {error}"));
          self.process_pending_events();
        }
      }
    }

    Ok(())
  }

  fn story_list_item(row: &StoryRow) -> ListItem<'static> {
    let title = if row.favorite {
      format!("★ {}", row.story.title)
    } else {
      row.story.title.clone()
    };

    let mut lines = vec![Line::from(vec![
      Span::raw(BASE_INDENT),
      Span::styled(title, Style::default().fg(Color::White)),
    ])];

    if let Some(detail) = row.story.detail() {
      lines.push(Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::styled(detail, Style::default().fg(Color::DarkGray)),
      ]));
    }

    lines.push(Line::from(Span::raw(BASE_INDENT)));

    ListItem::new(lines)
  }
}
