//! 批量检查配置

/// 检查配置
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckConfig {
    /// 是否并行检查多个地板
    pub parallel: bool,
    /// 读取失败时立即返回错误，而不是计入统计
    pub fail_fast: bool,
}

impl CheckConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置并行模式
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// 设置遇错即停
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }
}
