//! 存储层错误类型
//!
//! 定义统一的存储错误类型，用于封装底层错误：
//! - 后端读写失败（I/O、配额）
//! - 锁中毒
//! - 集合 blob 损坏

/// 存储错误。
///
/// 按 id 查找未命中不是错误（返回 `Ok(None)`）；此类型只承载
/// 持久化协作方自身的故障，调用方可提示重试或重置。
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// 后端读写失败。
    #[error("storage backend failure: {0}")]
    Backend(String),
    /// 并发访问下锁中毒。
    #[error("storage lock poisoned")]
    LockPoisoned,
    /// 指定键下的集合 blob 无法解码。
    #[error("corrupt collection under {key}: {message}")]
    Corrupt { key: String, message: String },
}

impl StorageError {
    /// 以任意错误构造后端失败。
    pub fn backend(err: impl std::fmt::Display) -> Self {
        Self::Backend(err.to_string())
    }

    /// 以解码错误构造集合损坏。
    pub fn corrupt(key: &str, err: impl std::fmt::Display) -> Self {
        Self::Corrupt {
            key: key.to_string(),
            message: err.to_string(),
        }
    }
}
