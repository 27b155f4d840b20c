use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct Item {
  pub(crate) author: Option<String>,
  #[serde(default)]
  pub(crate) children: Vec<Comment>,
  pub(crate) id: u64,
  pub(crate) points: Option<u64>,
  pub(crate) text: Option<String>,
  pub(crate) title: Option<String>,
  pub(crate) url: Option<String>,
}
