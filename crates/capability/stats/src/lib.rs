//! 工单统计
//!
//! 对工单集合做一次全量扫描，按生命周期归入待处理/已处置
//! 两个桶并按部门计数。每次调用现算，不落盘、不缓存。

use civic_storage::{IssueStore, StorageError};
use domain::{Department, IssueStatus};
use tracing::debug;

/// 统计快照。
///
/// `by_department` 保持部门在工单集合中的首次出现顺序
/// （即最近上报在前），方便直接渲染列表。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub total: u64,
    pub pending: u64,
    pub resolved: u64,
    pub by_department: Vec<(Department, u64)>,
}

/// 工单统计聚合器
pub struct StatsAggregator {
    issues: IssueStore,
}

impl StatsAggregator {
    /// 在指定工单存储上创建聚合器。
    pub fn new(issues: IssueStore) -> Self {
        Self { issues }
    }

    /// 现算一份统计快照。
    pub async fn stats(&self) -> Result<StatsSnapshot, StorageError> {
        let issues = self.issues.list_issues().await?;
        let mut snapshot = StatsSnapshot {
            total: issues.len() as u64,
            ..StatsSnapshot::default()
        };

        for issue in &issues {
            // 穷举匹配：新增状态时这里必须显式决定归属
            match issue.status {
                IssueStatus::Reported | IssueStatus::Assigned | IssueStatus::InProgress => {
                    snapshot.pending += 1;
                }
                IssueStatus::Resolved | IssueStatus::Closed => {
                    snapshot.resolved += 1;
                }
                IssueStatus::Verified | IssueStatus::OnHold => {}
            }

            match snapshot
                .by_department
                .iter_mut()
                .find(|(department, _)| *department == issue.department)
            {
                Some((_, count)) => *count += 1,
                None => snapshot.by_department.push((issue.department, 1)),
            }
        }

        debug!(
            target: "civic.stats",
            total = snapshot.total,
            pending = snapshot.pending,
            resolved = snapshot.resolved,
            "stats_recomputed"
        );
        Ok(snapshot)
    }
}
