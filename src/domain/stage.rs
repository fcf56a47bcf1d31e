use serde::Serialize;

/// Where a create attempt currently is (or where it stopped)
///
/// The flow is forward-only: Idle -> Validating -> Compiling -> Finishing ->
/// Reporting -> Idle. A failure at Validating or Compiling ends the attempt
/// at that stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Idle,
    Validating,
    Compiling,
    Finishing,
    Reporting,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Idle => write!(f, "idle"),
            Stage::Validating => write!(f, "validating"),
            Stage::Compiling => write!(f, "compiling"),
            Stage::Finishing => write!(f, "finishing"),
            Stage::Reporting => write!(f, "reporting"),
        }
    }
}
