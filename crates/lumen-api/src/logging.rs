//! 日志发射契约：仪表层与采集后端的唯一耦合点。
//!
//! # 设计背景（Why）
//! - 业务代码只依赖 [`Logger`] 契约，采集后端（控制台、文件、远端管道）
//!   在进程装配阶段注入实现，仪表调用点与后端实现彻底解耦；
//! - [`Logger::enabled`] 提供前置开关：构造 [`Record`] 之前即可判断本条是否会被
//!   接收，让被禁用级别的调用点付出接近零的成本。
//!
//! # 契约说明（What）
//! - **前置条件**：实现必须 `Send + Sync + 'static`，可被任意线程并发调用；
//! - **后置条件**：[`Logger::emit`] 取得记录的所有权，调用返回后调用方不再
//!   持有任何别名，实现可自由转移、缓冲或丢弃该记录；
//! - **约束**：`enabled` 仅是提示（hint），返回 `true` 不构成 `emit` 必须
//!   接收的承诺，实现仍可在 `emit` 内部二次过滤。

use crate::record::Record;
use crate::severity::Severity;
use crate::value::Value;

/// 日志发射器契约。
///
/// 便捷方法（[`Logger::trace`] 等）全部收敛到 [`Logger::emit`] 单点，
/// 实现方只需覆写 `emit`（以及按需覆写 `enabled`）。
pub trait Logger: Send + Sync + 'static {
    /// 发射一条记录，取得其所有权。
    fn emit(&self, record: Record);

    /// 预判给定级别是否会被接收；默认全量接收。
    ///
    /// `severity` 为 `None` 表示调用方尚未决定级别。
    fn enabled(&self, severity: Option<Severity>) -> bool {
        let _ = severity;
        true
    }

    /// 以 TRACE 级别发射主体。
    fn trace(&self, body: Value) {
        self.emit_with(Severity::Trace, body);
    }

    /// 以 DEBUG 级别发射主体。
    fn debug(&self, body: Value) {
        self.emit_with(Severity::Debug, body);
    }

    /// 以 INFO 级别发射主体。
    fn info(&self, body: Value) {
        self.emit_with(Severity::Info, body);
    }

    /// 以 WARN 级别发射主体。
    fn warn(&self, body: Value) {
        self.emit_with(Severity::Warn, body);
    }

    /// 以 ERROR 级别发射主体。
    fn error(&self, body: Value) {
        self.emit_with(Severity::Error, body);
    }

    /// 以 FATAL 级别发射主体。
    fn fatal(&self, body: Value) {
        self.emit_with(Severity::Fatal, body);
    }

    /// 便捷方法的公共汇聚点：先探询 `enabled`，再构造并发射记录。
    fn emit_with(&self, severity: Severity, body: Value) {
        if !self.enabled(Some(severity)) {
            return;
        }
        let mut record = Record::new();
        record.set_severity(severity);
        record.set_body(body);
        self.emit(record);
    }
}
