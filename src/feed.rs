use super::*;

pub(crate) enum Feed {
  Failed(String),
  Loading,
  Ready(Vec<Story>),
}
