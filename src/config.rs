// ABOUTME: Version constant and sandbox execution limits

pub const VERSION: &str = "0.1.0";

/// Execution limits for sandboxed runs.
///
/// Both limits default to off, matching the language's reference behavior:
/// recursion is bounded only by the host stack and loops may spin forever.
/// Exceeding a configured limit surfaces as a runtime fault.
#[derive(Debug, Clone, Copy, Default)]
pub struct LimitsConfig {
    /// Maximum number of simultaneously active function invocations.
    pub max_call_depth: Option<usize>,
    /// Maximum number of statement executions per dispatch.
    pub max_steps: Option<u64>,
}
