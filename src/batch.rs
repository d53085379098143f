//! 批量检查模块
//!
//! 一次检查多个地板文件，可选用 rayon 并行

use crate::config::CheckConfig;
use crate::error::Result;
use crate::tiling::{analyze, TilingReport};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// 单个地板的检查结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorOutcome {
    pub name: String,
    pub report: Option<TilingReport>,
    pub error: Option<String>,
}

impl FloorOutcome {
    pub fn is_tileable(&self) -> bool {
        self.report.as_ref().is_some_and(TilingReport::is_tileable)
    }

    fn failed(name: String, error: String) -> Self {
        Self {
            name,
            report: None,
            error: Some(error),
        }
    }
}

/// 检查统计
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchStats {
    pub checked: usize,
    pub tileable: usize,
    pub errors: usize,
    pub duration_ms: u64,
}

/// 批量检查报告
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub outcomes: Vec<FloorOutcome>,
    pub stats: BatchStats,
}

impl BatchReport {
    /// 全部地板都可铺满且没有错误
    pub fn all_tileable(&self) -> bool {
        self.stats.errors == 0 && self.stats.tileable == self.stats.checked
    }
}

/// 批量检查器
pub struct BatchChecker {
    config: CheckConfig,
}

impl BatchChecker {
    /// 创建检查器
    pub fn new(config: CheckConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// 检查一段地板文本
    pub fn check_str(&self, name: impl Into<String>, text: &str) -> FloorOutcome {
        let name = name.into();
        match analyze(text) {
            Ok(report) => FloorOutcome {
                name,
                report: Some(report),
                error: None,
            },
            Err(e) => {
                warn!(floor = %name, error = %e, "分析失败");
                FloorOutcome::failed(name, e.to_string())
            }
        }
    }

    /// 检查多段地板文本 (名称, 内容)
    pub fn check_floors(&self, floors: &[(String, String)]) -> BatchReport {
        let inputs: Vec<_> = floors
            .iter()
            .map(|(name, text)| (name.clone(), Ok(text.clone())))
            .collect();
        self.run(inputs)
    }

    /// 检查多个地板文件
    ///
    /// 读取失败默认计入错误数；`fail_fast` 时直接返回 IO 错误。
    pub fn check_files<P: AsRef<Path>>(&self, paths: &[P]) -> Result<BatchReport> {
        let mut inputs = Vec::with_capacity(paths.len());
        for path in paths {
            let path = path.as_ref();
            let name = path.display().to_string();
            match fs::read_to_string(path) {
                Ok(text) => inputs.push((name, Ok(text))),
                Err(e) if self.config.fail_fast => return Err(e.into()),
                Err(e) => {
                    warn!(file = %name, error = %e, "读取失败");
                    inputs.push((name, Err(e.to_string())));
                }
            }
        }
        Ok(self.run(inputs))
    }

    fn run(&self, inputs: Vec<(String, std::result::Result<String, String>)>) -> BatchReport {
        let start = std::time::Instant::now();

        let check = |(name, input): (String, std::result::Result<String, String>)| match input {
            Ok(text) => self.check_str(name, &text),
            Err(error) => FloorOutcome::failed(name, error),
        };

        let outcomes: Vec<FloorOutcome> = if self.config.parallel {
            inputs.into_par_iter().map(check).collect()
        } else {
            inputs.into_iter().map(check).collect()
        };

        let stats = BatchStats {
            checked: outcomes.len(),
            tileable: outcomes.iter().filter(|o| o.is_tileable()).count(),
            errors: outcomes.iter().filter(|o| o.error.is_some()).count(),
            duration_ms: start.elapsed().as_millis() as u64,
        };
        debug!(
            checked = stats.checked,
            tileable = stats.tileable,
            errors = stats.errors,
            "批量检查完成"
        );

        BatchReport { outcomes, stats }
    }
}
