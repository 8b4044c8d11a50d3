//! 持久化键
//!
//! 两份集合各占一个固定键，整值读写。

/// 工单集合。
pub const ISSUES: &str = "cp_issues";
/// 人员集合。
pub const PERSONNEL: &str = "cp_personnel";
/// 遗留键：用户数据，仅重置时清除。
pub const USERS: &str = "cp_users";
/// 遗留键：缓存统计，仅重置时清除（统计现为按需派生）。
pub const STATS: &str = "cp_stats";
