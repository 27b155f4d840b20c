use super::*;

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub(crate) struct FavoritesList {
  stories: Vec<Story>,
}

impl FavoritesList {
  pub(crate) fn contains(&self, id: &str) -> bool {
    self.stories.iter().any(|story| story.id == id)
  }

  pub(crate) fn dedupe(raw: Vec<Story>) -> Self {
    let mut stories: Vec<Story> = Vec::with_capacity(raw.len());

    for story in raw {
      if let Some(existing) =
        stories.iter_mut().find(|existing| existing.id == story.id)
      {
        *existing = story;
      } else {
        stories.push(story);
      }
    }

    Self { stories }
  }

  pub(crate) fn stories(&self) -> &[Story] {
    &self.stories
  }

  pub(crate) fn toggle(&self, story: &Story) -> FavoritesList {
    let mut stories = self.stories.clone();

    if let Some(position) =
      stories.iter().position(|existing| existing.id == story.id)
    {
      stories.remove(position);
    } else {
      stories.push(story.clone());
    }

    Self { stories }
  }
}

#[derive(Debug)]
pub(crate) struct Favorites {
  list: FavoritesList,
  path: PathBuf,
}

impl Favorites {
  fn ensure_parent_dir(path: &Path) -> Result {
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent)?;
    }

    Ok(())
  }

  fn favorites_path() -> Result<PathBuf> {
    if let Ok(path) = env::var("FRONTPAGE_FAVORITES_FILE") {
      return Ok(PathBuf::from(path));
    }

    let base_dir = if let Ok(dir) = env::var("XDG_CONFIG_HOME") {
      PathBuf::from(dir)
    } else if let Ok(home) = env::var("HOME") {
      PathBuf::from(home).join(".config")
    } else {
      env::current_dir()?.join(".config")
    };

    Ok(base_dir.join("frontpage").join("favorites.json"))
  }

  pub(crate) fn list(&self) -> &FavoritesList {
    &self.list
  }

  pub(crate) fn load() -> Result<Self> {
    Ok(Self::load_from(Self::favorites_path()?))
  }

  pub(crate) fn load_from(path: PathBuf) -> Self {
    // An absent, empty, or unparsable file is "no favorites yet".
    let list = match fs::read(&path) {
      Ok(data) if !data.is_empty() => {
        serde_json::from_slice::<Vec<Story>>(&data)
          .map(FavoritesList::dedupe)
          .unwrap_or_default()
      }
      _ => FavoritesList::default(),
    };

    Self { list, path }
  }

  fn persist(&self) -> Result {
    Self::ensure_parent_dir(&self.path)?;

    let serialized = serde_json::to_vec_pretty(self.list.stories())?;

    fs::write(&self.path, serialized)?;

    Ok(())
  }

  pub(crate) fn toggle(&mut self, story: &Story) -> Result<bool> {
    let added = !self.list.contains(&story.id);

    // The in-memory mutation survives a failed persist; the next successful
    // toggle rewrites the whole file.
    self.list = self.list.toggle(story);
    self.persist()?;

    Ok(added)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use std::sync::atomic::{AtomicUsize, Ordering};

  static COUNTER: AtomicUsize = AtomicUsize::new(0);

  fn temp_favorites_file() -> PathBuf {
    let unique = COUNTER.fetch_add(1, Ordering::Relaxed);
    env::temp_dir().join(format!("frontpage_favorites_test_{unique}.json"))
  }

  fn sample_story(id: &str) -> Story {
    Story {
      author: Some("author".to_string()),
      id: id.to_string(),
      points: Some(5),
      title: format!("Story {id}"),
      url: Some(format!("https://example.com/{id}")),
    }
  }

  #[test]
  fn toggle_adds_and_removes_stories() {
    let path = temp_favorites_file();
    let mut favorites = Favorites::load_from(path.clone());
    assert!(favorites.list().stories().is_empty());

    let story = sample_story("1");
    assert!(favorites.toggle(&story).unwrap());
    assert!(favorites.list().contains("1"));

    assert!(!favorites.toggle(&story).unwrap());
    assert!(favorites.list().stories().is_empty());

    let _ = fs::remove_file(path);
  }

  #[test]
  fn pure_toggle_is_its_own_inverse() {
    let list = FavoritesList::dedupe(vec![sample_story("1"), sample_story("2")]);
    let story = sample_story("3");

    let toggled_twice = list.toggle(&story).toggle(&story);

    let ids = |list: &FavoritesList| {
      list
        .stories()
        .iter()
        .map(|story| story.id.clone())
        .collect::<Vec<_>>()
    };

    assert_eq!(ids(&toggled_twice), ids(&list));
  }

  #[test]
  fn pure_toggle_appends_new_stories_at_the_end() {
    let list = FavoritesList::dedupe(vec![sample_story("1")]);

    let toggled = list.toggle(&sample_story("2"));

    assert_eq!(toggled.stories()[0].id, "1");
    assert_eq!(toggled.stories()[1].id, "2");
  }

  #[test]
  fn toggled_favorite_survives_a_reload() {
    let path = temp_favorites_file();

    let mut favorites = Favorites::load_from(path.clone());
    favorites.toggle(&sample_story("1")).unwrap();

    let reloaded = Favorites::load_from(path.clone());
    assert_eq!(reloaded.list().stories().len(), 1);
    assert_eq!(reloaded.list().stories()[0].id, "1");

    let _ = fs::remove_file(path);
  }

  #[test]
  fn corrupt_file_loads_as_empty() {
    let path = temp_favorites_file();
    fs::write(&path, b"{not json").unwrap();

    let favorites = Favorites::load_from(path.clone());
    assert!(favorites.list().stories().is_empty());

    let _ = fs::remove_file(path);
  }

  #[test]
  fn duplicate_ids_collapse_with_last_write_winning() {
    let mut duplicate = sample_story("1");
    duplicate.title = "Updated".to_string();

    let list =
      FavoritesList::dedupe(vec![sample_story("1"), sample_story("2"), duplicate]);

    assert_eq!(list.stories().len(), 2);
    assert_eq!(list.stories()[0].title, "Updated");
  }

  #[test]
  fn env_override_controls_the_favorites_path() {
    let path = temp_favorites_file();

    // SAFETY: scoped test code sets the env var to isolate the favorites file.
    unsafe {
      env::set_var("FRONTPAGE_FAVORITES_FILE", &path);
    }

    let favorites = Favorites::load().unwrap();
    assert_eq!(favorites.path, path);

    // SAFETY: restores the environment before the test exits.
    unsafe {
      env::remove_var("FRONTPAGE_FAVORITES_FILE");
    }
  }
}
