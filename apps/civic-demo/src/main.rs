//! 演示入口：初始化存储后走完一条工单全生命周期
//! （上报 → 指派 → 挂起 → 恢复 → 处置），最后打印统计与计数。

use chrono::Utc;
use civic_assignment::AssignmentCoordinator;
use civic_config::AppConfig;
use civic_stats::StatsAggregator;
use civic_storage::{CivicDatabase, InMemoryKvStore, JsonFileKvStore, KeyValueStore};
use civic_telemetry::init_tracing;
use domain::{
    Actor, AttachmentKind, Coordinates, IssueDraft, IssueStatus, IssueUpdate, Priority,
    ResolutionProof,
};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 加载本地 .env（如存在），便于直接 cargo run 启动
    dotenvy::dotenv().ok();
    // 从环境变量加载运行配置
    let config = AppConfig::from_env()?;
    // 初始化结构化日志
    init_tracing();

    // 选择持久化后端：指定路径用文件存储，否则纯内存
    let kv: Arc<dyn KeyValueStore> = match &config.storage_path {
        Some(path) => {
            info!(target: "civic.demo", path = %path, "using_file_backend");
            Arc::new(JsonFileKvStore::new(path.clone()))
        }
        None => Arc::new(InMemoryKvStore::new()),
    };
    let db = CivicDatabase::new(kv);
    if config.reset_on_start {
        db.reset().await?;
    }
    db.initialize(config.seed_demo_data).await?;

    let coordinator = AssignmentCoordinator::new(db.issues().clone(), db.personnel().clone());
    let stats = StatsAggregator::new(db.issues().clone());

    // 市民上报
    let issue = db
        .issues()
        .create_issue(IssueDraft {
            title: "Water leaking near bus stop".to_string(),
            issue_type: "Water Leakage".to_string(),
            priority: Some(Priority::High),
            description: "Steady leak flooding the sidewalk.".to_string(),
            location: "Elm Street, Stop 12".to_string(),
            coordinates: Some(Coordinates {
                lat: 40.7150,
                lng: -74.0040,
            }),
            ..IssueDraft::default()
        })
        .await?;

    // 主管指派：同部门随机挑一名可用人员
    let supervisor = Actor::supervisor();
    let assignee = coordinator
        .random_available_personnel(issue.department)
        .await?
        .ok_or("no available personnel to demo assignment")?;
    coordinator
        .assign_issue(&issue.id, &assignee.id, &supervisor)
        .await?;

    // 挂起再恢复（恢复应回到同一受理人）
    coordinator.hold_task(&issue.id, &supervisor).await?;
    let resumed = coordinator.resume_task(&issue.id, &supervisor).await?;
    info!(
        target: "civic.demo",
        issue_id = %issue.id,
        personnel_id = %resumed.id,
        "lifecycle_resumed"
    );

    // 现场处置完成，附凭证转 resolved
    db.issues()
        .update_issue(
            &issue.id,
            IssueUpdate {
                status: Some(IssueStatus::Resolved),
                resolution_proof: Some(ResolutionProof {
                    url: "https://civic.example/proof/leak-fixed.jpg".to_string(),
                    kind: AttachmentKind::Image,
                    uploaded_at: Utc::now(),
                }),
                ..IssueUpdate::default()
            },
            &Actor::staff_officer(),
        )
        .await?;

    let snapshot = stats.stats().await?;
    info!(
        target: "civic.demo",
        total = snapshot.total,
        pending = snapshot.pending,
        resolved = snapshot.resolved,
        departments = snapshot.by_department.len(),
        "stats_snapshot"
    );

    let metrics = civic_telemetry::metrics().snapshot();
    info!(
        target: "civic.demo",
        issues_created = metrics.issues_created,
        assignments = metrics.assignments,
        holds = metrics.holds,
        resumes = metrics.resumes,
        status_transitions = metrics.status_transitions,
        "telemetry_counters"
    );
    Ok(())
}
