//! 部门与工单类别目录
//!
//! 表单和筛选 UI 共用的固定枚举值：
//! - Department：部门（含兜底的 Admin）
//! - ISSUE_TYPES：工单类别列表

use serde::{Deserialize, Serialize};

/// 工单类别列表（表单下拉选项；自由填写时归入 "Other"）。
pub const ISSUE_TYPES: [&str; 6] = [
    "Pothole",
    "Garbage Dump",
    "Street Light Failure",
    "Water Leakage",
    "Illegal Parking",
    "Noise Pollution",
];

/// 部门。
///
/// 序列化值与历史集合 blob 中的显示名保持一致（含空格）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    #[serde(rename = "Public Works")]
    PublicWorks,
    Sanitation,
    Health,
    Power,
    #[serde(rename = "Water Supply")]
    WaterSupply,
    /// 无法按类别归口时的兜底部门（不出现在路由列表中）。
    Admin,
}

impl Department {
    /// 可路由部门列表（人员归属、表单选项）。
    pub const ALL: [Department; 5] = [
        Department::PublicWorks,
        Department::Sanitation,
        Department::Health,
        Department::Power,
        Department::WaterSupply,
    ];

    /// 部门显示名。
    pub fn as_str(&self) -> &'static str {
        match self {
            Department::PublicWorks => "Public Works",
            Department::Sanitation => "Sanitation",
            Department::Health => "Health",
            Department::Power => "Power",
            Department::WaterSupply => "Water Supply",
            Department::Admin => "Admin",
        }
    }

    /// 按类别关键字推导归口部门。
    ///
    /// 未命中任何关键字时归入 Admin。
    pub fn for_issue_type(issue_type: &str) -> Department {
        if issue_type.contains("Pothole") {
            Department::PublicWorks
        } else if issue_type.contains("Garbage") {
            Department::Sanitation
        } else if issue_type.contains("Light") || issue_type.contains("Power") {
            Department::Power
        } else if issue_type.contains("Water") {
            Department::WaterSupply
        } else {
            Department::Admin
        }
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
