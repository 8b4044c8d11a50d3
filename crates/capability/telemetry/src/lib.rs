//! 追踪初始化与操作计数。

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing_subscriber::{EnvFilter, fmt};

/// 基础计数快照。
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsSnapshot {
    pub issues_created: u64,
    pub issues_updated: u64,
    pub status_transitions: u64,
    pub assignments: u64,
    pub assignment_failures: u64,
    pub holds: u64,
    pub resumes: u64,
    pub resume_fallbacks: u64,
    pub storage_write_failures: u64,
    pub database_resets: u64,
}

/// 基础计数。
pub struct TelemetryMetrics {
    issues_created: AtomicU64,
    issues_updated: AtomicU64,
    status_transitions: AtomicU64,
    assignments: AtomicU64,
    assignment_failures: AtomicU64,
    holds: AtomicU64,
    resumes: AtomicU64,
    resume_fallbacks: AtomicU64,
    storage_write_failures: AtomicU64,
    database_resets: AtomicU64,
}

impl TelemetryMetrics {
    pub fn new() -> Self {
        Self {
            issues_created: AtomicU64::new(0),
            issues_updated: AtomicU64::new(0),
            status_transitions: AtomicU64::new(0),
            assignments: AtomicU64::new(0),
            assignment_failures: AtomicU64::new(0),
            holds: AtomicU64::new(0),
            resumes: AtomicU64::new(0),
            resume_fallbacks: AtomicU64::new(0),
            storage_write_failures: AtomicU64::new(0),
            database_resets: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            issues_created: self.issues_created.load(Ordering::Relaxed),
            issues_updated: self.issues_updated.load(Ordering::Relaxed),
            status_transitions: self.status_transitions.load(Ordering::Relaxed),
            assignments: self.assignments.load(Ordering::Relaxed),
            assignment_failures: self.assignment_failures.load(Ordering::Relaxed),
            holds: self.holds.load(Ordering::Relaxed),
            resumes: self.resumes.load(Ordering::Relaxed),
            resume_fallbacks: self.resume_fallbacks.load(Ordering::Relaxed),
            storage_write_failures: self.storage_write_failures.load(Ordering::Relaxed),
            database_resets: self.database_resets.load(Ordering::Relaxed),
        }
    }
}

impl Default for TelemetryMetrics {
    fn default() -> Self {
        Self::new()
    }
}

static METRICS: OnceLock<TelemetryMetrics> = OnceLock::new();

/// 获取全局计数实例。
pub fn metrics() -> &'static TelemetryMetrics {
    METRICS.get_or_init(TelemetryMetrics::new)
}

/// 初始化 tracing（默认 info）。
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}

/// 生成新的操作追踪 op_id。
pub fn new_operation_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// 记录工单创建次数。
pub fn record_issue_created() {
    metrics().issues_created.fetch_add(1, Ordering::Relaxed);
}

/// 记录工单字段更新次数。
pub fn record_issue_updated() {
    metrics().issues_updated.fetch_add(1, Ordering::Relaxed);
}

/// 记录状态转移次数（仅状态实际变化时）。
pub fn record_status_transition() {
    metrics().status_transitions.fetch_add(1, Ordering::Relaxed);
}

/// 记录指派成功次数。
pub fn record_assignment() {
    metrics().assignments.fetch_add(1, Ordering::Relaxed);
}

/// 记录指派失败次数（人员缺失、无可用候选）。
pub fn record_assignment_failure() {
    metrics().assignment_failures.fetch_add(1, Ordering::Relaxed);
}

/// 记录任务挂起次数。
pub fn record_hold() {
    metrics().holds.fetch_add(1, Ordering::Relaxed);
}

/// 记录任务恢复次数。
pub fn record_resume() {
    metrics().resumes.fetch_add(1, Ordering::Relaxed);
}

/// 记录恢复时退化为随机指派的次数（原指派人不可用）。
pub fn record_resume_fallback() {
    metrics().resume_fallbacks.fetch_add(1, Ordering::Relaxed);
}

/// 记录持久化写入失败次数。
pub fn record_storage_write_failure() {
    metrics()
        .storage_write_failures
        .fetch_add(1, Ordering::Relaxed);
}

/// 记录数据库重置次数。
pub fn record_database_reset() {
    metrics().database_resets.fetch_add(1, Ordering::Relaxed);
}
