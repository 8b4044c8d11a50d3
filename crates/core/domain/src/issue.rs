//! 工单数据模型
//!
//! 定义工单记录及其输入结构：
//! - 工单记录：Issue（含附件、坐标、指派快照、审计轨迹）
//! - 创建输入：IssueDraft
//! - 更新输入：IssueUpdate（全 Option 合并语义）
//!
//! 序列化字段名与历史集合 blob 保持 camelCase 兼容
//! （`type` / `createdAt` / `assignedTo` 等），旧数据可直接读回。

use crate::catalog::Department;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 工单状态机。
///
/// 转移为建议性约束：存储层按调用方请求记录，不做拒绝。
/// `resolved` / `closed` 仅在 UI 层视为终态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueStatus {
    Reported,
    Verified,
    Assigned,
    InProgress,
    OnHold,
    Resolved,
    Closed,
}

impl IssueStatus {
    /// 全部状态（统计分桶测试按此穷举）。
    pub const ALL: [IssueStatus; 7] = [
        IssueStatus::Reported,
        IssueStatus::Verified,
        IssueStatus::Assigned,
        IssueStatus::InProgress,
        IssueStatus::OnHold,
        IssueStatus::Resolved,
        IssueStatus::Closed,
    ];

    /// 状态的 wire 值（snake_case）。
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueStatus::Reported => "reported",
            IssueStatus::Verified => "verified",
            IssueStatus::Assigned => "assigned",
            IssueStatus::InProgress => "in_progress",
            IssueStatus::OnHold => "on_hold",
            IssueStatus::Resolved => "resolved",
            IssueStatus::Closed => "closed",
        }
    }
}

impl std::fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 工单优先级。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Priority {
    Low,
    /// 创建时未指定则取 Medium。
    #[default]
    Medium,
    High,
    Critical,
}

/// 附件类型。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    Image,
    Audio,
}

/// 经纬度坐标。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// 工单附件（UI 视角下仅追加）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(rename = "type")]
    pub kind: AttachmentKind,
    pub url: String,
    pub name: String,
}

/// 指派快照。
///
/// 对人员记录的非持有引用：id + 姓名副本，不做级联维护，
/// 人员被移除后允许保持过期值。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssigneeRef {
    pub id: String,
    pub name: String,
}

/// 处置凭证（仅在转入 resolved 时附加）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionProof {
    pub url: String,
    #[serde(rename = "type")]
    pub kind: AttachmentKind,
    pub uploaded_at: DateTime<Utc>,
}

/// 审计轨迹条目（仅追加）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub action: String,
    pub by: String,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// 以当前时间构造一条轨迹。
    pub fn now(action: impl Into<String>, by: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            by: by.into(),
            timestamp: Utc::now(),
        }
    }
}

/// 工单记录。
///
/// 不变量：
/// - `history` 创建后永不为空，首条恒为 `Reported`
/// - `assigned_to` 仅在 assigned / in_progress 下非空（由指派协调逻辑维护，
///   存储层不强制）
/// - `last_assigned_to` 仅在 on_hold 期间有意义
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub issue_type: String,
    pub priority: Priority,
    pub status: IssueStatus,
    pub department: Department,
    pub description: String,
    pub location: String,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<AssigneeRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_assigned_to: Option<AssigneeRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution_proof: Option<ResolutionProof>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub history: Vec<HistoryEntry>,
}

/// 工单创建输入。
#[derive(Debug, Clone, Default)]
pub struct IssueDraft {
    pub title: String,
    pub issue_type: String,
    /// 未指定则取 Medium。
    pub priority: Option<Priority>,
    /// 未指定则按类别关键字推导。
    pub department: Option<Department>,
    pub description: String,
    pub location: String,
    pub coordinates: Option<Coordinates>,
    pub attachments: Vec<Attachment>,
}

/// 工单更新输入（合并语义：Some 覆盖、None 保留）。
///
/// `assigned_to` / `last_assigned_to` 为双层 Option：
/// 外层 None 表示保留，`Some(None)` 表示显式清空。
#[derive(Debug, Clone, Default)]
pub struct IssueUpdate {
    pub title: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<IssueStatus>,
    pub department: Option<Department>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub attachments: Option<Vec<Attachment>>,
    pub assigned_to: Option<Option<AssigneeRef>>,
    pub last_assigned_to: Option<Option<AssigneeRef>>,
    pub resolution_proof: Option<ResolutionProof>,
}

impl IssueUpdate {
    /// 仅变更状态的更新。
    pub fn status_only(status: IssueStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}
