/// Every user interaction produces an Action. The UI never calls git directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,

    // Query editing
    SearchPush(char),
    SearchPop,

    // Movement
    MoveSelection(i32),

    // Selection
    Confirm,

    // Delete flow
    RequestDelete,
    AffirmDelete,
    CancelDelete,
}
