//! 工单集合存储
//!
//! 功能：
//! - 工单创建（生成 id、默认值、部门推导、首条审计轨迹）
//! - 工单查询（整集合快照、按 id 线性查找）
//! - 工单更新（字段合并 + 状态变化时追加轨迹）
//!
//! 集合按"最近在前"排序，每次变更整体序列化写回固定键。

use crate::error::StorageError;
use crate::keys;
use crate::kv::KeyValueStore;
use chrono::Utc;
use civic_telemetry::{record_issue_created, record_issue_updated, record_status_transition};
use domain::{Actor, Department, HistoryEntry, Issue, IssueDraft, IssueStatus};
use std::sync::Arc;
use tracing::info;

/// 工单集合存储
///
/// 持有注入的键值后端，所有操作按整集合读-改-写执行。
#[derive(Clone)]
pub struct IssueStore {
    kv: Arc<dyn KeyValueStore>,
}

impl IssueStore {
    /// 在指定后端上创建存储。
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    pub(crate) async fn load(&self) -> Result<Vec<Issue>, StorageError> {
        match self.kv.get(keys::ISSUES).await? {
            Some(raw) => {
                serde_json::from_str(&raw).map_err(|err| StorageError::corrupt(keys::ISSUES, err))
            }
            None => Ok(Vec::new()),
        }
    }

    pub(crate) async fn save(&self, issues: &[Issue]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(issues).map_err(StorageError::backend)?;
        match self.kv.set(keys::ISSUES, &raw).await {
            Ok(()) => Ok(()),
            Err(err) => {
                civic_telemetry::record_storage_write_failure();
                Err(err)
            }
        }
    }

    /// 返回完整集合快照（最近在前）。
    pub async fn list_issues(&self) -> Result<Vec<Issue>, StorageError> {
        self.load().await
    }

    /// 按 id 查找工单；未命中返回 `Ok(None)`。
    pub async fn find_issue(&self, id: &str) -> Result<Option<Issue>, StorageError> {
        Ok(self.load().await?.into_iter().find(|issue| issue.id == id))
    }

    /// 创建新工单。
    ///
    /// - id 按当前集合长度单调派生（`ISS-<1000+n+1>`），不复用
    /// - 初始状态恒为 `reported`，轨迹以 `Reported` 开头
    /// - 未指定优先级取 Medium，未指定部门按类别关键字推导
    /// - 新记录插入集合头部（最近在前）
    pub async fn create_issue(&self, draft: IssueDraft) -> Result<Issue, StorageError> {
        let mut issues = self.load().await?;
        let now = Utc::now();
        let department = draft
            .department
            .unwrap_or_else(|| Department::for_issue_type(&draft.issue_type));
        let issue = Issue {
            id: format!("ISS-{}", 1000 + issues.len() + 1),
            title: draft.title,
            issue_type: draft.issue_type,
            priority: draft.priority.unwrap_or_default(),
            status: IssueStatus::Reported,
            department,
            description: draft.description,
            location: draft.location,
            coordinates: draft.coordinates,
            attachments: draft.attachments,
            assigned_to: None,
            last_assigned_to: None,
            resolution_proof: None,
            created_at: now,
            updated_at: now,
            history: vec![HistoryEntry {
                action: "Reported".to_string(),
                by: Actor::citizen().name,
                timestamp: now,
            }],
        };
        issues.insert(0, issue.clone());
        self.save(&issues).await?;
        record_issue_created();
        info!(
            target: "civic.storage",
            issue_id = %issue.id,
            issue_type = %issue.issue_type,
            department = %issue.department,
            "issue_created"
        );
        Ok(issue)
    }

    /// 合并更新工单字段，刷新 `updated_at`。
    ///
    /// 携带的状态与当前不同时，恰好追加一条
    /// `Status changed to <status>` 轨迹（操作者取 `actor`）；
    /// 状态相同则不追加。未知 id 返回 `Ok(None)`，集合不变。
    pub async fn update_issue(
        &self,
        id: &str,
        update: domain::IssueUpdate,
        actor: &Actor,
    ) -> Result<Option<Issue>, StorageError> {
        let mut issues = self.load().await?;
        let Some(issue) = issues.iter_mut().find(|issue| issue.id == id) else {
            return Ok(None);
        };
        let now = Utc::now();

        if let Some(title) = update.title {
            issue.title = title;
        }
        if let Some(priority) = update.priority {
            issue.priority = priority;
        }
        if let Some(department) = update.department {
            issue.department = department;
        }
        if let Some(description) = update.description {
            issue.description = description;
        }
        if let Some(location) = update.location {
            issue.location = location;
        }
        if let Some(coordinates) = update.coordinates {
            issue.coordinates = Some(coordinates);
        }
        if let Some(attachments) = update.attachments {
            issue.attachments = attachments;
        }
        if let Some(assigned_to) = update.assigned_to {
            issue.assigned_to = assigned_to;
        }
        if let Some(last_assigned_to) = update.last_assigned_to {
            issue.last_assigned_to = last_assigned_to;
        }
        if let Some(proof) = update.resolution_proof {
            issue.resolution_proof = Some(proof);
        }

        let mut transitioned = false;
        if let Some(status) = update.status {
            if status != issue.status {
                issue.history.push(HistoryEntry {
                    action: format!("Status changed to {}", status),
                    by: actor.name.clone(),
                    timestamp: now,
                });
                transitioned = true;
            }
            issue.status = status;
        }
        issue.updated_at = now;
        let updated = issue.clone();

        self.save(&issues).await?;
        record_issue_updated();
        if transitioned {
            record_status_transition();
            info!(
                target: "civic.storage",
                issue_id = %updated.id,
                status = %updated.status,
                actor = %actor,
                "issue_status_changed"
            );
        }
        Ok(Some(updated))
    }
}
