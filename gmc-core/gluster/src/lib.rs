//! GMC Gluster 采集管道
//!
//! 调用 gluster 管理命令（始终请求 XML 输出）并归一化为指标值，支持：
//! - 卷信息 / 卷列表 / 集群成员状态 / 卷状态明细的结构化透传
//! - 卷累计性能统计的按 Brick 透传
//! - 待修复条目数的跨 Brick 求和
//! - 目录配额列表的按序透传
//! - glusterfs 挂载点的存在性与可写性探测
//!
//! 进程失败（ProcessError）、解码失败（DecodeError）与字段转换失败
//! （ConversionError）严格区分，上层据此选择告警与重试策略
//!
//! # 示例
//!
//! ```ignore
//! use gmc_gluster::{GlusterClient, GlusterConfig};
//!
//! let client = GlusterClient::new(GlusterConfig::default());
//!
//! // 每个卷一次独立的采集事务
//! for volume in client.volume_list().await? {
//!     let entries = client.volume_heal_entries(&volume).await?;
//!     println!("{}: {} 个待修复条目", volume, entries);
//! }
//! ```

mod client;
mod config;
mod decode;
mod error;
pub mod models;
mod mount;

pub use client::{sum_entries_out_of_sync, GlusterClient};
pub use config::GlusterConfig;
pub use error::{GlusterError, Result};
pub use models::{
    GlusterMount, HealInfo, Peer, QuotaLimit, StatusVolume, VolProfile, Volume,
};
pub use mount::{list_gluster_mounts, probe_mount_writable};
