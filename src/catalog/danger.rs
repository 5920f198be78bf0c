// Danger levels - how risky a catalog command is to run
//
// Each level carries the badge text shown next to a command (icon + label)
// and a one-line description of what that level means.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DangerLevel {
    /// Read-only queries, usually leave the system unchanged
    Low,
    /// Changes permissions or settings on a few files/services
    Medium,
    /// May delete data or disrupt running services
    High,
}

impl DangerLevel {
    pub const ALL: [DangerLevel; 3] = [DangerLevel::Low, DangerLevel::Medium, DangerLevel::High];

    pub fn icon(&self) -> &'static str {
        match self {
            DangerLevel::Low => "🟢",
            DangerLevel::Medium => "🟡",
            DangerLevel::High => "🔴",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DangerLevel::Low => "低危險度",
            DangerLevel::Medium => "中危險度",
            DangerLevel::High => "高危險度",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DangerLevel::Low => "查詢、瀏覽類指令，通常不會改變系統狀態。",
            DangerLevel::Medium => "會修改權限或設定，可能影響少數檔案或服務。",
            DangerLevel::High => "可能刪除資料或影響系統服務，使用前需特別小心。",
        }
    }

    /// Badge text: icon followed by label (e.g. "🔴 高危險度")
    pub fn badge(&self) -> String {
        format!("{} {}", self.icon(), self.label())
    }
}

impl fmt::Display for DangerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DangerLevel::Low => write!(f, "low"),
            DangerLevel::Medium => write!(f, "medium"),
            DangerLevel::High => write!(f, "high"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_combines_icon_and_label() {
        assert_eq!(DangerLevel::High.badge(), "🔴 高危險度");
        assert_eq!(DangerLevel::Low.badge(), "🟢 低危險度");
    }

    #[test]
    fn test_levels_are_ordered_by_risk() {
        assert!(DangerLevel::Low < DangerLevel::Medium);
        assert!(DangerLevel::Medium < DangerLevel::High);
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&DangerLevel::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
    }
}
