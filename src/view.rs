use super::*;

pub(crate) enum Listing<'a> {
  Failed(&'a str),
  Loading,
  Rows(Vec<StoryRow<'a>>),
}

impl Listing<'_> {
  pub(crate) fn row_count(&self) -> usize {
    match self {
      Listing::Rows(rows) => rows.len(),
      _ => 0,
    }
  }
}

#[derive(Clone, Copy)]
pub(crate) struct StoryRow<'a> {
  pub(crate) favorite: bool,
  pub(crate) story: &'a Story,
}

pub(crate) fn filter_by_title<'a>(
  stories: &'a [Story],
  term: &str,
) -> Vec<&'a Story> {
  if term.is_empty() {
    return stories.iter().collect();
  }

  let needle = term.to_lowercase();

  stories
    .iter()
    .filter(|story| story.title.to_lowercase().contains(&needle))
    .collect()
}

pub(crate) fn is_favorite(favorites: &FavoritesList, story: &Story) -> bool {
  favorites.contains(&story.id)
}

pub(crate) fn listing<'a>(
  feed: &'a Feed,
  favorites: &'a FavoritesList,
  term: &str,
  tab: Tab,
) -> Listing<'a> {
  let source = match tab {
    Tab::All => match feed {
      Feed::Failed(message) => return Listing::Failed(message),
      Feed::Loading => return Listing::Loading,
      Feed::Ready(stories) => stories.as_slice(),
    },
    // Favorites need no network, so this tab always has rows.
    Tab::Favorites => favorites.stories(),
  };

  let rows = filter_by_title(source, term)
    .into_iter()
    .map(|story| StoryRow {
      favorite: is_favorite(favorites, story),
      story,
    })
    .collect();

  Listing::Rows(rows)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn story(id: &str, title: &str) -> Story {
    Story {
      author: Some("author".to_string()),
      id: id.to_string(),
      points: Some(5),
      title: title.to_string(),
      url: None,
    }
  }

  fn favorites(stories: Vec<Story>) -> FavoritesList {
    FavoritesList::dedupe(stories)
  }

  #[test]
  fn empty_term_is_the_identity_filter() {
    let stories = vec![story("1", "Rust"), story("2", "Go")];

    let filtered = filter_by_title(&stories, "");

    assert_eq!(filtered.len(), 2);
    assert_eq!(filtered[0].id, "1");
    assert_eq!(filtered[1].id, "2");
  }

  #[test]
  fn filter_matches_case_insensitively() {
    let stories = vec![story("1", "Rust")];

    assert_eq!(filter_by_title(&stories, "rust").len(), 1);
    assert_eq!(filter_by_title(&stories, "RUST").len(), 1);
    assert_eq!(filter_by_title(&stories, "go").len(), 0);
  }

  #[test]
  fn filter_preserves_relative_order() {
    let stories = vec![
      story("1", "Rust 1.0"),
      story("2", "Go"),
      story("3", "Rust again"),
    ];

    let filtered = filter_by_title(&stories, "rust");

    assert_eq!(filtered.len(), 2);
    assert_eq!(filtered[0].id, "1");
    assert_eq!(filtered[1].id, "3");
  }

  #[test]
  fn is_favorite_matches_by_identifier() {
    let list = favorites(vec![story("1", "A")]);

    let mut other = story("1", "A renamed");
    assert!(is_favorite(&list, &other));

    other.id = "2".to_string();
    assert!(!is_favorite(&list, &other));
  }

  #[test]
  fn single_hit_renders_one_row_in_the_all_tab() {
    let feed = Feed::Ready(vec![story("1", "A")]);
    let list = favorites(Vec::new());

    match listing(&feed, &list, "", Tab::All) {
      Listing::Rows(rows) => {
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].story.title, "A");
        assert!(!rows[0].favorite);
      }
      _ => panic!("expected rows"),
    }
  }

  #[test]
  fn loading_feed_is_distinct_from_zero_rows() {
    let list = favorites(Vec::new());

    assert!(matches!(
      listing(&Feed::Loading, &list, "", Tab::All),
      Listing::Loading
    ));

    let feed = Feed::Ready(vec![story("1", "A")]);
    assert!(matches!(
      listing(&feed, &list, "zzz", Tab::All),
      Listing::Rows(rows) if rows.is_empty()
    ));
  }

  #[test]
  fn failed_feed_surfaces_its_message() {
    let feed = Feed::Failed("boom".to_string());
    let list = favorites(Vec::new());

    match listing(&feed, &list, "", Tab::All) {
      Listing::Failed(message) => assert_eq!(message, "boom"),
      _ => panic!("expected failed listing"),
    }
  }

  #[test]
  fn favorites_tab_lists_rows_even_while_the_feed_loads() {
    let list = favorites(vec![story("1", "Saved")]);

    match listing(&Feed::Loading, &list, "", Tab::Favorites) {
      Listing::Rows(rows) => {
        assert_eq!(rows.len(), 1);
        assert!(rows[0].favorite);
      }
      _ => panic!("expected rows"),
    }
  }

  #[test]
  fn both_tabs_share_the_same_filter_predicate() {
    let saved = story("1", "Rust");
    let feed = Feed::Ready(vec![saved.clone(), story("2", "Go")]);
    let list = favorites(vec![saved]);

    let all = listing(&feed, &list, "rust", Tab::All);
    let favorites_tab = listing(&feed, &list, "rust", Tab::Favorites);

    assert_eq!(all.row_count(), 1);
    assert_eq!(favorites_tab.row_count(), 1);

    match (all, favorites_tab) {
      (Listing::Rows(all_rows), Listing::Rows(favorite_rows)) => {
        assert!(all_rows[0].favorite);
        assert!(favorite_rows[0].favorite);
        assert_eq!(all_rows[0].story.id, favorite_rows[0].story.id);
      }
      _ => panic!("expected rows on both tabs"),
    }
  }
}
