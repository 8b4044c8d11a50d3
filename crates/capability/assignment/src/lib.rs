//! 指派协调
//!
//! 功能：
//! - 工单指派：人员置 Busy、工单转 assigned 并归一化部门
//! - 任务挂起：释放受理人、留存上一任指派快照
//! - 任务恢复：优先回到原受理人，否则同部门随机兜底
//! - 挂起/恢复切换（UI 单入口）
//!
//! 协调器跨两份集合顺序写入，不提供跨集合事务；每步操作
//! 携带 op_id 落日志，便于回放排查。

use civic_storage::{IssueStore, PersonnelStore, StorageError};
use domain::{
    Actor, Department, Issue, IssueStatus, IssueUpdate, Personnel, PersonnelStatus,
    PersonnelUpdate,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;
use tracing::{info, warn};

/// 指派协调错误。
#[derive(Debug, thiserror::Error)]
pub enum AssignmentError {
    /// 工单不存在。
    #[error("issue not found: {0}")]
    IssueNotFound(String),
    /// 人员不存在。
    #[error("personnel not found: {0}")]
    PersonnelNotFound(String),
    /// 指定部门下没有可用人员。
    #[error("no available personnel in department {0}")]
    NoAvailablePersonnel(Department),
    /// 底层存储失败。
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// 挂起/恢复切换的落点。
#[derive(Debug)]
pub enum HoldToggle {
    /// 任务已挂起，返回更新后的工单。
    Held(Issue),
    /// 任务已恢复，返回接手的人员。
    Resumed(Personnel),
}

/// 指派协调器
///
/// 持有两份集合存储与一个可注入的随机源（随机兜底指派用）。
pub struct AssignmentCoordinator {
    issues: IssueStore,
    personnel: PersonnelStore,
    rng: Mutex<StdRng>,
}

impl AssignmentCoordinator {
    /// 以熵随机源构造协调器。
    pub fn new(issues: IssueStore, personnel: PersonnelStore) -> Self {
        Self::with_rng(issues, personnel, StdRng::from_entropy())
    }

    /// 以指定随机源构造协调器（确定性测试用）。
    pub fn with_rng(issues: IssueStore, personnel: PersonnelStore, rng: StdRng) -> Self {
        Self {
            issues,
            personnel,
            rng: Mutex::new(rng),
        }
    }

    /// 把工单指派给指定人员。
    ///
    /// 人员置 Busy、工单转 assigned 并记录指派快照；工单部门
    /// 统一改写为受理人所在部门。重复指派同一人结果不变。
    pub async fn assign_issue(
        &self,
        issue_id: &str,
        personnel_id: &str,
        actor: &Actor,
    ) -> Result<Personnel, AssignmentError> {
        let op_id = civic_telemetry::new_operation_id();

        let Some(person) = self.personnel.find_personnel(personnel_id).await? else {
            civic_telemetry::record_assignment_failure();
            warn!(
                target: "civic.assignment",
                op_id = %op_id,
                issue_id = %issue_id,
                personnel_id = %personnel_id,
                "assign_rejected_unknown_personnel"
            );
            return Err(AssignmentError::PersonnelNotFound(personnel_id.to_string()));
        };
        if self.issues.find_issue(issue_id).await?.is_none() {
            civic_telemetry::record_assignment_failure();
            warn!(
                target: "civic.assignment",
                op_id = %op_id,
                issue_id = %issue_id,
                "assign_rejected_unknown_issue"
            );
            return Err(AssignmentError::IssueNotFound(issue_id.to_string()));
        }

        let busy = self
            .personnel
            .update_personnel(&person.id, PersonnelUpdate::status_only(PersonnelStatus::Busy))
            .await?
            .ok_or_else(|| AssignmentError::PersonnelNotFound(person.id.clone()))?;
        self.issues
            .update_issue(
                issue_id,
                IssueUpdate {
                    status: Some(IssueStatus::Assigned),
                    assigned_to: Some(Some(busy.assignee_ref())),
                    department: Some(busy.department),
                    ..IssueUpdate::default()
                },
                actor,
            )
            .await?
            .ok_or_else(|| AssignmentError::IssueNotFound(issue_id.to_string()))?;

        civic_telemetry::record_assignment();
        info!(
            target: "civic.assignment",
            op_id = %op_id,
            issue_id = %issue_id,
            personnel_id = %busy.id,
            department = %busy.department,
            "issue_assigned"
        );
        Ok(busy)
    }

    /// 挂起任务。
    ///
    /// 释放当前受理人（置回 Available）、工单转 on_hold 并清空
    /// 指派；原受理人快照写入 last_assigned_to。未指派的工单
    /// 也允许挂起，此时不触碰 last_assigned_to。
    pub async fn hold_task(&self, issue_id: &str, actor: &Actor) -> Result<Issue, AssignmentError> {
        let op_id = civic_telemetry::new_operation_id();
        let issue = self
            .issues
            .find_issue(issue_id)
            .await?
            .ok_or_else(|| AssignmentError::IssueNotFound(issue_id.to_string()))?;

        let mut update = IssueUpdate {
            status: Some(IssueStatus::OnHold),
            assigned_to: Some(None),
            ..IssueUpdate::default()
        };
        if let Some(assignee) = &issue.assigned_to {
            // 受理人记录可能已被移除，释放失败不阻断挂起
            self.personnel
                .update_personnel(
                    &assignee.id,
                    PersonnelUpdate::status_only(PersonnelStatus::Available),
                )
                .await?;
            update.last_assigned_to = Some(Some(assignee.clone()));
        }

        let held = self
            .issues
            .update_issue(issue_id, update, actor)
            .await?
            .ok_or_else(|| AssignmentError::IssueNotFound(issue_id.to_string()))?;

        civic_telemetry::record_hold();
        info!(
            target: "civic.assignment",
            op_id = %op_id,
            issue_id = %issue_id,
            freed = issue.assigned_to.is_some(),
            "task_held"
        );
        Ok(held)
    }

    /// 恢复挂起的任务。
    ///
    /// 原受理人仍可用则回到原受理人，否则在工单所属部门内
    /// 随机挑选可用人员兜底；无候选人时返回错误，工单保持
    /// on_hold 不动。成功后工单直接进入 in_progress。
    pub async fn resume_task(
        &self,
        issue_id: &str,
        actor: &Actor,
    ) -> Result<Personnel, AssignmentError> {
        let op_id = civic_telemetry::new_operation_id();
        let issue = self
            .issues
            .find_issue(issue_id)
            .await?
            .ok_or_else(|| AssignmentError::IssueNotFound(issue_id.to_string()))?;

        let mut preferred = None;
        if let Some(prev) = &issue.last_assigned_to {
            preferred = self
                .personnel
                .find_personnel(&prev.id)
                .await?
                .filter(|person| person.status == PersonnelStatus::Available);
        }

        let candidate = match preferred {
            Some(person) => person,
            None => {
                let fallback = self.random_available_personnel(issue.department).await?;
                let Some(person) = fallback else {
                    civic_telemetry::record_assignment_failure();
                    warn!(
                        target: "civic.assignment",
                        op_id = %op_id,
                        issue_id = %issue_id,
                        department = %issue.department,
                        "resume_rejected_no_available_personnel"
                    );
                    return Err(AssignmentError::NoAvailablePersonnel(issue.department));
                };
                if issue.last_assigned_to.is_some() {
                    civic_telemetry::record_resume_fallback();
                }
                person
            }
        };

        let assignee = self.assign_issue(issue_id, &candidate.id, actor).await?;
        self.issues
            .update_issue(
                issue_id,
                IssueUpdate {
                    status: Some(IssueStatus::InProgress),
                    last_assigned_to: Some(None),
                    ..IssueUpdate::default()
                },
                actor,
            )
            .await?
            .ok_or_else(|| AssignmentError::IssueNotFound(issue_id.to_string()))?;

        civic_telemetry::record_resume();
        info!(
            target: "civic.assignment",
            op_id = %op_id,
            issue_id = %issue_id,
            personnel_id = %assignee.id,
            "task_resumed"
        );
        Ok(assignee)
    }

    /// 挂起/恢复切换：on_hold 的工单恢复，其余挂起。
    pub async fn toggle_task_hold(
        &self,
        issue_id: &str,
        actor: &Actor,
    ) -> Result<HoldToggle, AssignmentError> {
        let issue = self
            .issues
            .find_issue(issue_id)
            .await?
            .ok_or_else(|| AssignmentError::IssueNotFound(issue_id.to_string()))?;

        if issue.status == IssueStatus::OnHold {
            Ok(HoldToggle::Resumed(self.resume_task(issue_id, actor).await?))
        } else {
            Ok(HoldToggle::Held(self.hold_task(issue_id, actor).await?))
        }
    }

    /// 指定部门下的全部可用人员。
    pub async fn available_personnel(
        &self,
        department: Department,
    ) -> Result<Vec<Personnel>, AssignmentError> {
        Ok(self
            .personnel
            .list_personnel()
            .await?
            .into_iter()
            .filter(|person| {
                person.department == department && person.status == PersonnelStatus::Available
            })
            .collect())
    }

    /// 指定部门下随机挑一名可用人员；无候选返回 `Ok(None)`。
    pub async fn random_available_personnel(
        &self,
        department: Department,
    ) -> Result<Option<Personnel>, AssignmentError> {
        let mut candidates = self.available_personnel(department).await?;
        if candidates.is_empty() {
            return Ok(None);
        }
        let index = {
            let mut rng = self
                .rng
                .lock()
                .map_err(|_| StorageError::LockPoisoned)?;
            rng.gen_range(0..candidates.len())
        };
        Ok(Some(candidates.swap_remove(index)))
    }
}
