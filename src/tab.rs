#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Tab {
  All,
  Favorites,
}

impl Tab {
  pub(crate) fn all() -> &'static [Tab] {
    &[Tab::All, Tab::Favorites]
  }

  pub(crate) fn index(self) -> usize {
    match self {
      Tab::All => 0,
      Tab::Favorites => 1,
    }
  }

  pub(crate) fn label(self) -> &'static str {
    match self {
      Tab::All => "all",
      Tab::Favorites => "favorites",
    }
  }

  pub(crate) fn next(self) -> Tab {
    match self {
      Tab::All => Tab::Favorites,
      Tab::Favorites => Tab::All,
    }
  }

  pub(crate) fn previous(self) -> Tab {
    self.next()
  }
}
