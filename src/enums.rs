/// Lock screen states, each with its own background color
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LockState {
    /// After initialization
    Init,
    /// During input
    Input,
    /// Wrong password
    Failed,
}

/// Number of entries in the color table
pub const NUMCOLS: usize = 3;

impl LockState {
    pub const ALL: [LockState; NUMCOLS] =
        [LockState::Init, LockState::Input, LockState::Failed];

    pub fn name(self) -> &'static str {
        match self {
            LockState::Init => "init",
            LockState::Input => "input",
            LockState::Failed => "failed",
        }
    }
}
