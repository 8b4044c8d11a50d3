//! 键值持久化抽象
//!
//! 持久化协作方的最小接口：按固定键整值读写字符串 blob，
//! 无部分更新。
//!
//! 实现：
//! - InMemoryKvStore：内存实现（测试和演示）
//! - JsonFileKvStore：单 JSON 文件实现

use crate::error::StorageError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Mutex, RwLock};

/// 键值存储接口。
///
/// 整值语义：`set` 覆盖整个键值，`get` 返回完整 blob 或缺失。
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// 读取键下的完整 blob；键缺失返回 `Ok(None)`。
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// 以整值覆盖写入。
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// 移除键（键缺失视为成功）。
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// 键值内存存储
///
/// 使用 RwLock + HashMap 提供线程安全的内存存储。
pub struct InMemoryKvStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryKvStore {
    /// 创建空的内存存储。
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryKvStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let map = self.entries.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(map.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut map = self
            .entries
            .write()
            .map_err(|_| StorageError::LockPoisoned)?;
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut map = self
            .entries
            .write()
            .map_err(|_| StorageError::LockPoisoned)?;
        map.remove(key);
        Ok(())
    }
}

/// 键值文件存储
///
/// 全部键值收在一个 JSON 文件里，每次写入整体落盘。
/// 文件不存在视为空存储。
pub struct JsonFileKvStore {
    path: PathBuf,
    // 串行化文件读-改-写，保证单进程内写入原子
    lock: Mutex<()>,
}

impl JsonFileKvStore {
    /// 绑定到指定文件路径（文件可不存在）。
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    fn read_map(&self) -> Result<HashMap<String, String>, StorageError> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let raw = std::fs::read_to_string(&self.path).map_err(StorageError::backend)?;
        if raw.trim().is_empty() {
            return Ok(HashMap::new());
        }
        serde_json::from_str(&raw)
            .map_err(|err| StorageError::corrupt(&self.path.to_string_lossy(), err))
    }

    fn write_map(&self, map: &HashMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(StorageError::backend)?;
            }
        }
        let raw = serde_json::to_string_pretty(map).map_err(StorageError::backend)?;
        std::fs::write(&self.path, raw).map_err(StorageError::backend)
    }
}

#[async_trait]
impl KeyValueStore for JsonFileKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock().map_err(|_| StorageError::LockPoisoned)?;
        Ok(self.read_map()?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().map_err(|_| StorageError::LockPoisoned)?;
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().map_err(|_| StorageError::LockPoisoned)?;
        let mut map = self.read_map()?;
        if map.remove(key).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }
}
