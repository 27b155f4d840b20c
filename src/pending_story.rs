use super::*;

pub(crate) struct PendingStory {
  pub(crate) request_id: u64,
  pub(crate) story: Story,
}
