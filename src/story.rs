use super::*;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub(crate) struct Story {
  pub(crate) author: Option<String>,
  #[serde(rename = "objectID")]
  pub(crate) id: String,
  pub(crate) points: Option<u64>,
  pub(crate) title: String,
  pub(crate) url: Option<String>,
}

impl Story {
  pub(crate) fn detail(&self) -> Option<String> {
    match (self.points, self.author.as_deref()) {
      (Some(points), Some(author)) => {
        Some(format!("{} by {author}", format_points(points)))
      }
      (Some(points), None) => Some(format_points(points)),
      (None, Some(author)) => Some(format!("by {author}")),
      _ => None,
    }
  }

  pub(crate) fn permalink(&self) -> String {
    format!("https://news.ycombinator.com/item?id={}", self.id)
  }

  pub(crate) fn resolved_url(&self) -> String {
    self
      .url
      .clone()
      .filter(|url| !url.is_empty())
      .unwrap_or_else(|| self.permalink())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn story(points: Option<u64>, author: Option<&str>) -> Story {
    Story {
      author: author.map(String::from),
      id: "100".to_string(),
      points,
      title: "Example".to_string(),
      url: None,
    }
  }

  #[test]
  fn detail_combines_points_and_author() {
    assert_eq!(
      story(Some(5), Some("pg")).detail(),
      Some("5 points by pg".to_string())
    );

    assert_eq!(story(Some(1), None).detail(), Some("1 point".to_string()));
    assert_eq!(story(None, Some("pg")).detail(), Some("by pg".to_string()));
    assert_eq!(story(None, None).detail(), None);
  }

  #[test]
  fn resolved_url_falls_back_to_permalink_for_text_posts() {
    let mut story = story(None, None);
    assert_eq!(
      story.resolved_url(),
      "https://news.ycombinator.com/item?id=100"
    );

    story.url = Some(String::new());
    assert_eq!(
      story.resolved_url(),
      "https://news.ycombinator.com/item?id=100"
    );

    story.url = Some("https://example.com".to_string());
    assert_eq!(story.resolved_url(), "https://example.com");
  }
}
