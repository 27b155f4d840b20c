#[derive(Clone)]
pub(crate) enum Effect {
  FetchFrontPage,
  FetchStoryDetail { request_id: u64, story_id: String },
  OpenUrl { url: String },
}
