//! 集成测试公共工具

use tracing_subscriber::EnvFilter;

/// 初始化日志（通过 RUST_LOG 控制级别），重复调用无副作用
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
