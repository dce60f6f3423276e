//! 挂载点探测
//!
//! 检查本机的 glusterfs 挂载点是否存在、是否可写。
//! 与采集周期一起调用，用于暴露挂载健康度

use gmc_executor::CommandRunner;
use regex::Regex;
use tracing::{debug, info};

use crate::error::{GlusterError, Result};
use crate::models::GlusterMount;

/// 列出本机的 glusterfs 挂载点
///
/// 执行 `mount -t fuse.glusterfs` 并解析输出
pub async fn list_gluster_mounts(runner: &CommandRunner) -> Result<Vec<GlusterMount>> {
    let command = "mount -t fuse.glusterfs";

    let output = runner
        .run("mount", &["-t", "fuse.glusterfs"])
        .await
        .map_err(|e| GlusterError::ProcessError {
            command: command.to_string(),
            detail: e.to_string(),
        })?;

    if !output.is_success() {
        return Err(GlusterError::ProcessError {
            command: command.to_string(),
            detail: format!(
                "退出码 {:?}: {}",
                output.exit_code,
                output.combined_output()
            ),
        });
    }

    let mounts = parse_mount_output(&output.stdout)?;
    info!("找到 {} 个 glusterfs 挂载点", mounts.len());
    Ok(mounts)
}

/// 检查挂载点是否可写
///
/// 在挂载点上创建并删除一个带时间戳的测试文件；
/// 任一步失败即返回错误，不以 false 静默代替
pub async fn probe_mount_writable(mount_point: &str) -> Result<bool> {
    let test_file = format!(
        "{}/gluster_mount.test_{}",
        mount_point,
        chrono::Utc::now().format("%Y%m%d%H%M%S%9f")
    );
    debug!("写入探测文件: {}", test_file);

    tokio::fs::write(&test_file, b"").await?;
    tokio::fs::remove_file(&test_file).await?;

    Ok(true)
}

/// 解析 `mount` 输出
///
/// 行格式: `<device> on <mount_point> type <fstype> (<options>)`
fn parse_mount_output(output: &str) -> Result<Vec<GlusterMount>> {
    let re = Regex::new(r"^(\S+) on (\S+) type (\S+)").map_err(|e| GlusterError::DecodeError {
        command: "mount".to_string(),
        detail: e.to_string(),
    })?;

    let mut mounts = Vec::new();
    for line in output.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(caps) = re.captures(line) {
            mounts.push(GlusterMount::new(&caps[1], &caps[2]));
        }
    }

    Ok(mounts)
}
