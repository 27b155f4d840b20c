use super::*;

const NOTICE_TTL: Duration = Duration::from_secs(3);

/// One-line status bar: a base message per mode plus an optional transient
/// notice that expires on its own.
pub(crate) struct StatusLine {
  base: String,
  notice: Option<(String, Instant)>,
}

impl StatusLine {
  pub(crate) fn base(&self) -> &str {
    &self.base
  }

  pub(crate) fn current(&self) -> &str {
    self
      .notice
      .as_ref()
      .map_or(self.base.as_str(), |(message, _)| message.as_str())
  }

  pub(crate) fn new(base: impl Into<String>) -> Self {
    Self {
      base: base.into(),
      notice: None,
    }
  }

  pub(crate) fn set_base(&mut self, base: impl Into<String>) {
    self.base = base.into();
    self.notice = None;
  }

  pub(crate) fn set_notice(&mut self, message: String) {
    self.notice = Some((message, Instant::now() + NOTICE_TTL));
  }

  pub(crate) fn tick(&mut self) {
    if let Some((_, expires_at)) = &self.notice
      && Instant::now() >= *expires_at
    {
      self.notice = None;
    }
  }
}
