use super::*;

pub(crate) struct CommentEntry {
  pub(crate) author: Option<String>,
  pub(crate) body: String,
  pub(crate) children: Vec<usize>,
  pub(crate) depth: usize,
  pub(crate) expanded: bool,
  pub(crate) id: u64,
  pub(crate) parent: Option<usize>,
}

impl CommentEntry {
  pub(crate) fn body(&self) -> &str {
    self.body.as_str()
  }

  pub(crate) fn has_children(&self) -> bool {
    !self.children.is_empty()
  }

  pub(crate) fn header(&self) -> String {
    self.author.as_deref().unwrap_or("unknown").to_string()
  }

  pub(crate) fn permalink(&self) -> String {
    format!("https://news.ycombinator.com/item?id={}", self.id)
  }
}
