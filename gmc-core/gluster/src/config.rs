//! Gluster 采集配置

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Gluster 采集配置
///
/// 命令路径通过配置显式传入客户端，不读取进程级全局状态，
/// 便于用替身可执行文件测试整个管道
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlusterConfig {
    /// gluster 命令路径
    #[serde(default = "default_binary")]
    pub binary: PathBuf,
    /// 单次命令执行超时
    #[serde(with = "humantime_serde", default = "default_command_timeout")]
    pub command_timeout: Duration,
}

fn default_binary() -> PathBuf {
    PathBuf::from("gluster")
}

fn default_command_timeout() -> Duration {
    Duration::from_secs(60)
}

impl Default for GlusterConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            command_timeout: default_command_timeout(),
        }
    }
}

impl GlusterConfig {
    /// 使用指定命令路径创建配置
    ///
    /// # Arguments
    /// * `binary` - gluster 命令路径
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            command_timeout: default_command_timeout(),
        }
    }

    /// 设置命令执行超时
    pub fn command_timeout(mut self, timeout: Duration) -> Self {
        self.command_timeout = timeout;
        self
    }
}
