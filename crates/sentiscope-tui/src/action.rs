/// A user-level action, produced by mapping terminal events in `input.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveDown,
    MoveUp,
    GoTop,
    GoBottom,
    /// Enter: submit the highlighted choice, or toggle the selected card.
    DrillIn,
    /// Esc: dismiss overlay / go back one screen.
    NavigateBack,
    NextPage,
    PrevPage,
    /// Space: flip the selected article card's detail region.
    ToggleDetails,
    /// Show the info popup for the sector under the cursor.
    ShowSectorInfo,
    ToggleHelp,
    ScrollDown,
    ScrollUp,
    /// A character typed in text-input mode ('\x08' is backspace).
    Input(char),
    /// Ctrl+S in text-input mode: submit the paste buffer.
    InputSubmit,
    /// Esc in text-input mode: abandon the paste buffer.
    InputCancel,
    Tick,
    Resize(u16, u16),
    None,
}
