pub(crate) struct FilterInput {
  pub(crate) buffer: String,
  pub(crate) original: String,
}

impl FilterInput {
  pub(crate) fn new(term: String) -> Self {
    Self {
      buffer: term.clone(),
      original: term,
    }
  }

  pub(crate) fn prompt(&self) -> String {
    format!("Filter: {}", self.buffer)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn prompt_reflects_current_buffer() {
    let mut input = FilterInput::new(String::new());
    assert_eq!(input.prompt(), "Filter: ");

    input.buffer.push_str("rust");
    assert_eq!(input.prompt(), "Filter: rust");
  }

  #[test]
  fn new_keeps_the_previous_term_for_cancel() {
    let input = FilterInput::new("rust".to_string());
    assert_eq!(input.buffer, "rust");
    assert_eq!(input.original, "rust");
  }
}
