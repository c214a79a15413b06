/// Whether a mode did something. Lets the driver report runs where no
/// optional mode was requested.
#[derive(Debug, PartialEq)]
pub enum CliModeResult {
    Finish,
    NothingToDo,
}

/// A step of a run that can fail without stopping the steps after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Load,
    Export,
    Update,
}
