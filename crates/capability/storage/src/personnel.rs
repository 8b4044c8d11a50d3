//! 人员集合存储
//!
//! 功能：
//! - 人员登记（生成 id、默认 Available）
//! - 人员查询与字段合并更新（无审计轨迹）
//!
//! 与工单存储同构的整集合读-改-写，登记追加到集合尾部。

use crate::error::StorageError;
use crate::keys;
use crate::kv::KeyValueStore;
use domain::{Personnel, PersonnelDraft, PersonnelUpdate};
use std::sync::Arc;
use tracing::info;

/// 人员集合存储
#[derive(Clone)]
pub struct PersonnelStore {
    kv: Arc<dyn KeyValueStore>,
}

impl PersonnelStore {
    /// 在指定后端上创建存储。
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    pub(crate) async fn load(&self) -> Result<Vec<Personnel>, StorageError> {
        match self.kv.get(keys::PERSONNEL).await? {
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|err| StorageError::corrupt(keys::PERSONNEL, err)),
            None => Ok(Vec::new()),
        }
    }

    pub(crate) async fn save(&self, people: &[Personnel]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(people).map_err(StorageError::backend)?;
        match self.kv.set(keys::PERSONNEL, &raw).await {
            Ok(()) => Ok(()),
            Err(err) => {
                civic_telemetry::record_storage_write_failure();
                Err(err)
            }
        }
    }

    /// 返回完整集合快照。
    pub async fn list_personnel(&self) -> Result<Vec<Personnel>, StorageError> {
        self.load().await
    }

    /// 按 id 查找人员；未命中返回 `Ok(None)`。
    pub async fn find_personnel(&self, id: &str) -> Result<Option<Personnel>, StorageError> {
        Ok(self
            .load()
            .await?
            .into_iter()
            .find(|person| person.id == id))
    }

    /// 登记新人员（id 按当前集合长度派生 `P-<1000+n>`，
    /// 未指定状态取 Available）。
    pub async fn add_personnel(&self, draft: PersonnelDraft) -> Result<Personnel, StorageError> {
        let mut people = self.load().await?;
        let person = Personnel {
            id: format!("P-{}", 1000 + people.len()),
            name: draft.name,
            role: draft.role,
            tier: draft.tier,
            status: draft.status.unwrap_or_default(),
            department: draft.department,
        };
        people.push(person.clone());
        self.save(&people).await?;
        info!(
            target: "civic.storage",
            personnel_id = %person.id,
            department = %person.department,
            tier = person.tier,
            "personnel_added"
        );
        Ok(person)
    }

    /// 合并更新人员字段；未知 id 返回 `Ok(None)`，集合不变。
    pub async fn update_personnel(
        &self,
        id: &str,
        update: PersonnelUpdate,
    ) -> Result<Option<Personnel>, StorageError> {
        let mut people = self.load().await?;
        let Some(person) = people.iter_mut().find(|person| person.id == id) else {
            return Ok(None);
        };

        if let Some(name) = update.name {
            person.name = name;
        }
        if let Some(role) = update.role {
            person.role = role;
        }
        if let Some(tier) = update.tier {
            person.tier = tier;
        }
        if let Some(department) = update.department {
            person.department = department;
        }
        if let Some(status) = update.status {
            person.status = status;
        }
        let updated = person.clone();

        self.save(&people).await?;
        Ok(Some(updated))
    }
}
