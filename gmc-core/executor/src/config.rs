//! 执行器配置

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 执行器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// 命令执行超时
    #[serde(with = "humantime_serde", default = "default_command_timeout")]
    pub command_timeout: Duration,
}

fn default_command_timeout() -> Duration {
    Duration::from_secs(60)
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            command_timeout: default_command_timeout(),
        }
    }
}

impl RunnerConfig {
    /// 设置命令执行超时
    pub fn command_timeout(mut self, timeout: Duration) -> Self {
        self.command_timeout = timeout;
        self
    }
}
