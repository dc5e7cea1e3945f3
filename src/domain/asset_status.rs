use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetStatus {
    Pending,
    Generating,
    Success,
    Failed,
}

impl AssetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetStatus::Pending => "PENDING",
            AssetStatus::Generating => "GENERATING",
            AssetStatus::Success => "SUCCESS",
            AssetStatus::Failed => "FAILED",
        }
    }

    /// Statuses a batch run picks up when it snapshots its work queue.
    pub fn is_batch_candidate(&self) -> bool {
        matches!(self, AssetStatus::Pending | AssetStatus::Failed)
    }

    /// No further automatic transition happens from these without explicit
    /// user action.
    pub fn is_terminal(&self) -> bool {
        matches!(self, AssetStatus::Success | AssetStatus::Failed)
    }
}

impl FromStr for AssetStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(AssetStatus::Pending),
            "GENERATING" => Ok(AssetStatus::Generating),
            "SUCCESS" => Ok(AssetStatus::Success),
            "FAILED" => Ok(AssetStatus::Failed),
            _ => Err(format!("Invalid asset status: {}", s)),
        }
    }
}

impl fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
