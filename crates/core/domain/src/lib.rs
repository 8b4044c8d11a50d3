pub mod catalog;
pub mod issue;
pub mod personnel;

pub use catalog::{Department, ISSUE_TYPES};
pub use issue::{
    AssigneeRef, Attachment, AttachmentKind, Coordinates, HistoryEntry, Issue, IssueDraft,
    IssueStatus, IssueUpdate, Priority, ResolutionProof,
};
pub use personnel::{Personnel, PersonnelDraft, PersonnelStatus, PersonnelUpdate};

/// 操作者身份：所有变更操作共享的执行上下文。
///
/// 仅用于审计轨迹标注（history 的 `by` 字段），不做任何权限校验。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub name: String,
}

impl Actor {
    /// 构造任意角色名的操作者。
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// 市民（工单上报方）。
    pub fn citizen() -> Self {
        Self::new("Citizen")
    }

    /// 一线处理人员。
    pub fn staff_officer() -> Self {
        Self::new("Staff Officer")
    }

    /// 督导。
    pub fn supervisor() -> Self {
        Self::new("Supervisor")
    }

    /// 系统自动操作。
    pub fn system() -> Self {
        Self::new("System")
    }
}

impl Default for Actor {
    /// 未显式指定时按系统操作记录。
    fn default() -> Self {
        Self::system()
    }
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
