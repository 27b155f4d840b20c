use super::*;

pub(crate) enum Event {
  FrontPage {
    result: Result<Vec<Story>>,
  },
  StoryDetail {
    request_id: u64,
    result: Result<Item>,
  },
}
