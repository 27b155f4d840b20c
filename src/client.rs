use super::*;

#[derive(Clone)]
pub(crate) struct Client {
  client: reqwest::Client,
}

impl Default for Client {
  fn default() -> Self {
    Self {
      client: reqwest::Client::new(),
    }
  }
}

impl Client {
  const FRONT_PAGE_URL: &str =
    "https://hn.algolia.com/api/v1/search?tags=front_page&hitsPerPage=100";

  const ITEM_URL: &str = "https://hn.algolia.com/api/v1/items";

  pub(crate) async fn fetch_front_page(&self) -> Result<Vec<Story>> {
    Ok(
      self
        .client
        .get(Self::FRONT_PAGE_URL)
        .send()
        .await?
        .error_for_status()?
        .json::<SearchResponse>()
        .await?
        .hits,
    )
  }

  pub(crate) async fn fetch_item(&self, story_id: &str) -> Result<Item> {
    Ok(
      self
        .client
        .get(format!("{}/{story_id}", Self::ITEM_URL))
        .send()
        .await?
        .error_for_status()?
        .json::<Item>()
        .await?,
    )
  }
}
