//! # CivicPulse Storage 模块
//!
//! 本模块提供工单与人员集合的持久化层，模拟一个以键值存储
//! 为后端的数据库服务。
//!
//! ## 架构设计
//!
//! 该模块采用分层架构，遵循以下原则：
//!
//! 1. **持久化抽象层** (`kv.rs`)：定义键值存储的异步 Trait 接口
//!    （整值读写，无部分更新）
//! 2. **错误处理层** (`error.rs`)：统一的存储错误类型
//! 3. **集合存储层** (`issues.rs` / `personnel.rs`)：
//!    按"整集合读-改-写"模式维护两份有序集合
//! 4. **数据库门面** (`database.rs`)：初始化播种、遗留数据迁移、重置
//! 5. **种子数据** (`seed.rs`)：演示环境的初始记录
//!
//! ## 存储实现
//!
//! - [`InMemoryKvStore`]：`RwLock<HashMap>` 内存实现（测试和演示）
//! - [`JsonFileKvStore`]：单 JSON 文件实现（键 → blob 映射整体落盘，
//!   对应浏览器本地存储的语义）
//!
//! ## 设计约束
//!
//! - **显式注入**：存储后端经 `Arc<dyn KeyValueStore>` 注入，
//!   无环境单例
//! - **整值语义**：每次写入序列化完整集合；调用方读到的永远是
//!   当前快照
//! - **软失败**：按 id 查找未命中返回 `Ok(None)`，不抛错；
//!   后端故障（I/O、损坏）以 [`StorageError`] 显式上抛
//! - **单逻辑调用方**：集合级读-改-写在单次调用内完成；
//!   跨集合一致性由上层指派协调逻辑负责

pub mod database;
pub mod error;
pub mod issues;
pub mod keys;
pub mod kv;
pub mod personnel;
pub mod seed;

pub use database::CivicDatabase;
pub use error::StorageError;
pub use issues::IssueStore;
pub use kv::{InMemoryKvStore, JsonFileKvStore, KeyValueStore};
pub use personnel::PersonnelStore;
