use super::*;

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct Comment {
  pub(crate) author: Option<String>,
  #[serde(default)]
  pub(crate) children: Vec<Comment>,
  pub(crate) id: u64,
  pub(crate) text: Option<String>,
}
