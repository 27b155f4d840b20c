use {
  anyhow::Context,
  app::App,
  client::Client,
  command::Command,
  command_dispatch::CommandDispatch,
  comment::Comment,
  comment_entry::CommentEntry,
  comment_view::CommentView,
  crossterm::{
    event as crossterm_event,
    event::{
      Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    },
    execute,
    style::Stylize,
    terminal::{
      EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
      enable_raw_mode,
    },
  },
  effect::Effect,
  event::Event,
  favorites::{Favorites, FavoritesList},
  feed::Feed,
  filter_input::FilterInput,
  help_view::HelpView,
  item::Item,
  mode::Mode,
  pending_story::PendingStory,
  ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
      Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs, Wrap,
    },
  },
  search_response::SearchResponse,
  selection::Selection,
  serde::{Deserialize, Serialize},
  state::State,
  status_line::StatusLine,
  std::{
    backtrace::BacktraceStatus,
    env, fs,
    io::{self, IsTerminal, Stdout},
    path::{Path, PathBuf},
    process,
    time::{Duration, Instant},
  },
  story::Story,
  tab::Tab,
  tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
  },
  utils::{format_points, sanitize_comment, truncate, wrap_text},
  view::{Listing, StoryRow},
};

mod app;
mod client;
mod command;
mod command_dispatch;
mod comment;
mod comment_entry;
mod comment_view;
mod effect;
mod event;
mod favorites;
mod feed;
mod filter_input;
mod help_view;
mod item;
mod mode;
mod pending_story;
mod search_response;
mod selection;
mod state;
mod status_line;
mod story;
mod tab;
mod utils;
mod view;

const LIST_STATUS: &str = "↑/k up • ↓/j down • tab switch tab • / filter • enter comments • o open link • f favorite • r refresh • q quit • ? help";

const COMMENTS_STATUS: &str = "↑/k up • ↓/j down • ←/h collapse • →/l expand • enter toggle • o open comment • f favorite story • esc back";

const HELP_TITLE: &str = "Help";
const HELP_STATUS: &str = "Press ? or esc to close help";

const LOADING_STORIES_STATUS: &str = "Loading the front page...";
const LOADING_COMMENTS_STATUS: &str = "Loading comments...";

const BASE_INDENT: &str = " ";

const HELP_TEXT: &str = "\
Navigation:
  ← / h   previous tab
  → / l   next tab
  tab     next tab
  ↑ / k   move selection up
  ↓ / j   move selection down
  pg↓     page down
  pg↑     page up
  ctrl+d  page down
  ctrl+u  page up
  home    jump to first story
  end     jump to last story

Actions:
  enter   view comments for the selected story
  o       open the selected story in your browser
  f       toggle a favorite for the selected story
  /       filter stories by title (type to edit, enter to keep, esc to cancel)
  r       refresh the front page
  q       quit frontpage
  esc     close help or quit from the list
  ?       toggle this help

Comments:
  ↑ / k   move selection up
  ↓ / j   move selection down
  pg↓     page down
  pg↑     page up
  ← / h   collapse or go to parent
  → / l   expand or go to first child
  enter   toggle collapse or expand
  o       open the selected comment in your browser
  f       toggle a favorite for the story
  esc     return to the story list
";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
  enable_raw_mode()?;

  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;

  Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(
  terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result {
  disable_raw_mode()?;

  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

  terminal.show_cursor()?;

  Ok(())
}

async fn run() -> Result {
  let client = Client::default();

  let favorites = Favorites::load().context("could not load favorites")?;

  let mut terminal = initialize_terminal()?;

  let mut app = App::new(client, favorites);

  app.run(&mut terminal)?;

  restore_terminal(&mut terminal)
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
