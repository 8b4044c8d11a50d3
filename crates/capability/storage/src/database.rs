//! 数据库门面
//!
//! 把两份集合存储收在一个入口后面：
//! - initialize：空存储播种 + 遗留数据一次性迁移（补齐坐标）
//! - reset：清空工单、移除人员与遗留键
//!
//! 后端经构造函数注入，不使用环境单例。

use crate::error::StorageError;
use crate::issues::IssueStore;
use crate::keys;
use crate::kv::KeyValueStore;
use crate::personnel::PersonnelStore;
use crate::seed;
use domain::{Coordinates, Issue};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use tracing::{info, warn};

// 迁移补齐坐标时的参考点与散布半径
const BASE_LAT: f64 = 40.7128;
const BASE_LNG: f64 = -74.0060;
const COORD_JITTER: f64 = 0.005;

/// 数据库门面
///
/// 两份集合共享同一个键值后端；每进程/每测试构造一次，
/// 按引用传给需要的协作方。
pub struct CivicDatabase {
    kv: Arc<dyn KeyValueStore>,
    issues: IssueStore,
    personnel: PersonnelStore,
}

impl CivicDatabase {
    /// 在指定后端上构造数据库。
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            issues: IssueStore::new(kv.clone()),
            personnel: PersonnelStore::new(kv.clone()),
            kv,
        }
    }

    /// 工单集合存储。
    pub fn issues(&self) -> &IssueStore {
        &self.issues
    }

    /// 人员集合存储。
    pub fn personnel(&self) -> &PersonnelStore {
        &self.personnel
    }

    /// 初始化存储。
    ///
    /// - 工单键缺失且 `seed_demo_data` 为真时写入演示数据
    /// - 工单键已存在时执行一次性迁移：缺坐标的遗留记录
    ///   补上参考点附近的随机坐标
    /// - 人员键缺失且 `seed_demo_data` 为真时写入演示人员
    pub async fn initialize(&self, seed_demo_data: bool) -> Result<(), StorageError> {
        self.initialize_with_rng(seed_demo_data, &mut StdRng::from_entropy())
            .await
    }

    /// 同 [`initialize`](Self::initialize)，随机源可注入（确定性测试用）。
    pub async fn initialize_with_rng<R: Rng + ?Sized>(
        &self,
        seed_demo_data: bool,
        rng: &mut R,
    ) -> Result<(), StorageError> {
        match self.kv.get(keys::ISSUES).await? {
            None => {
                if seed_demo_data {
                    self.issues.save(&seed::seed_issues()).await?;
                    info!(target: "civic.storage", "issues_seeded");
                }
            }
            Some(_) => {
                let mut issues = self.issues.load().await?;
                let migrated = migrate_missing_coordinates(&mut issues, rng);
                if migrated > 0 {
                    self.issues.save(&issues).await?;
                    info!(
                        target: "civic.storage",
                        migrated = migrated,
                        "legacy_issues_gained_coordinates"
                    );
                }
            }
        }

        if seed_demo_data && self.kv.get(keys::PERSONNEL).await?.is_none() {
            self.personnel.save(&seed::seed_personnel()).await?;
            info!(target: "civic.storage", "personnel_seeded");
        }
        Ok(())
    }

    /// 清空数据库。
    ///
    /// 工单键写入显式空数组：后续 initialize 视其为已有
    /// （但为空）数据，不再重新播种。人员与遗留键直接移除。
    /// 发出的 `database_reset` 事件即对上层的"重建视图"信号。
    pub async fn reset(&self) -> Result<(), StorageError> {
        self.kv.set(keys::ISSUES, "[]").await?;
        self.kv.remove(keys::USERS).await?;
        self.kv.remove(keys::STATS).await?;
        self.kv.remove(keys::PERSONNEL).await?;
        civic_telemetry::record_database_reset();
        warn!(target: "civic.storage", "database_reset");
        Ok(())
    }
}

/// 为缺坐标的记录补上参考点附近的随机坐标，返回补齐条数。
fn migrate_missing_coordinates<R: Rng + ?Sized>(issues: &mut [Issue], rng: &mut R) -> usize {
    let mut migrated = 0;
    for issue in issues.iter_mut() {
        if issue.coordinates.is_none() {
            issue.coordinates = Some(Coordinates {
                lat: BASE_LAT + rng.gen_range(-COORD_JITTER..COORD_JITTER),
                lng: BASE_LNG + rng.gen_range(-COORD_JITTER..COORD_JITTER),
            });
            migrated += 1;
        }
    }
    migrated
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn migration_only_touches_records_without_coordinates() {
        let mut issues = seed::seed_issues();
        issues[1].coordinates = None;
        let before = issues[0].coordinates;

        let mut rng = StdRng::seed_from_u64(7);
        let migrated = migrate_missing_coordinates(&mut issues, &mut rng);

        assert_eq!(migrated, 1);
        assert_eq!(issues[0].coordinates, before);
        let gained = issues[1].coordinates.expect("coordinates");
        assert!((gained.lat - BASE_LAT).abs() < COORD_JITTER);
        assert!((gained.lng - BASE_LNG).abs() < COORD_JITTER);
    }
}
