//! 人员数据模型
//!
//! 定义人员记录及其输入结构：
//! - 人员记录：Personnel（含可用状态与层级）
//! - 创建输入：PersonnelDraft
//! - 更新输入：PersonnelUpdate（合并语义，无审计轨迹）

use crate::catalog::Department;
use crate::issue::AssigneeRef;
use serde::{Deserialize, Serialize};

/// 一线通用人员层级。
pub const TIER_GENERAL: u8 = 1;
/// 专家人员层级（仅督导视图可见，展示层约束）。
pub const TIER_SPECIALIST: u8 = 2;

/// 人员可用状态。
///
/// 不变量（由指派协调逻辑手工维护）：Busy 当且仅当
/// 某工单的 `assigned_to.id` 等于该人员 id；绕过协调逻辑
/// 直接更新状态可导致漂移。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PersonnelStatus {
    #[default]
    Available,
    Busy,
    #[serde(rename = "On Leave")]
    OnLeave,
}

impl PersonnelStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonnelStatus::Available => "Available",
            PersonnelStatus::Busy => "Busy",
            PersonnelStatus::OnLeave => "On Leave",
        }
    }
}

impl std::fmt::Display for PersonnelStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 人员记录。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Personnel {
    pub id: String,
    pub name: String,
    /// 岗位名称（自由文本）。
    pub role: String,
    /// 1 = 通用人员，2 = 专家。
    pub tier: u8,
    pub status: PersonnelStatus,
    pub department: Department,
}

impl Personnel {
    /// 生成该人员的指派快照（id + 姓名副本）。
    pub fn assignee_ref(&self) -> AssigneeRef {
        AssigneeRef {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}

/// 人员创建输入。
#[derive(Debug, Clone)]
pub struct PersonnelDraft {
    pub name: String,
    pub role: String,
    pub tier: u8,
    pub department: Department,
    /// 未指定则取 Available。
    pub status: Option<PersonnelStatus>,
}

/// 人员更新输入（合并语义：Some 覆盖、None 保留）。
#[derive(Debug, Clone, Default)]
pub struct PersonnelUpdate {
    pub name: Option<String>,
    pub role: Option<String>,
    pub tier: Option<u8>,
    pub department: Option<Department>,
    pub status: Option<PersonnelStatus>,
}

impl PersonnelUpdate {
    /// 仅变更可用状态的更新。
    pub fn status_only(status: PersonnelStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}
