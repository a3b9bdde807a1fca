// ==========================================
// 性能统计
// ==========================================
// 记录流程级耗时,输出到独立的 perf target
// ==========================================

use std::time::Instant;

/// 性能统计 Guard：在 Drop 时记录 elapsed_ms
///
/// 使用方式：
/// ```ignore
/// let _perf = carbon_inventory::perf::PerfGuard::new("run_pipeline");
/// // do work...
/// ```
pub struct PerfGuard {
    op: &'static str,
    start: Instant,
}

impl PerfGuard {
    pub fn new(op: &'static str) -> Self {
        Self {
            op,
            start: Instant::now(),
        }
    }
}

impl Drop for PerfGuard {
    fn drop(&mut self) {
        let elapsed_ms = self.start.elapsed().as_millis() as u64;
        tracing::info!(target: "perf", op = self.op, elapsed_ms, "done");
    }
}
