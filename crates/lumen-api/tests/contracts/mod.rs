//! 契约集成测试：站在外部消费者视角，仅通过公开 API 验证各模块的协作行为。
//!
//! 诊断钩子涉及进程级全局状态，相关断言收敛在独立的 `hook` 测试目标中，
//! 本目标内的用例不安装也不依赖全局处理器。

mod metrics;
mod severity;
mod value;
