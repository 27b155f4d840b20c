#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
  AcceptFilter,
  CancelFilter,
  CloseComments,
  HideHelp,
  None,
  OpenCommentLink,
  OpenComments,
  OpenCurrentInBrowser,
  PageDown,
  PageUp,
  Quit,
  RefreshStories,
  SelectFirst,
  SelectLast,
  SelectNext,
  SelectPrevious,
  ShowHelp,
  StartFilter,
  SwitchTabLeft,
  SwitchTabRight,
  ToggleFavorite,
}
