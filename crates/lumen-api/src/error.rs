use crate::Error;
use alloc::{borrow::Cow, boxed::Box};
use core::fmt;

/// `ErrorCause` 封装底层原因，保持 `Send + Sync` 以方便跨线程传递。
pub type ErrorCause = Box<dyn Error + Send + Sync + 'static>;

/// `ApiError` 是仪表层对外暴露的唯一诊断错误形态。
///
/// # 设计背景（Why）
/// - 热路径访问器（如 [`Value::as_bool`](crate::Value::as_bool)）按约定不返回 `Result`，
///   所有非致命异常统一折叠为带稳定错误码的诊断对象，经由 [`hook`](crate::hook) 侧信道上报；
/// - 稳定错误码使日志、指标与告警系统能够在不解析消息文本的前提下执行自动化治理。
///
/// # 逻辑解析（How）
/// - `code` 始终为 `'static` 字符串，承载稳定语义；`message` 面向排障人员；
/// - Builder 风格的 [`ApiError::with_cause`] 叠加底层原因，并通过 `source()` 暴露完整链路。
///
/// # 契约说明（What）
/// - **前置条件**：调用方必须使用 [`codes`] 模块或遵循 `<域>.<语义>` 约定的自定义码值；
/// - **返回值**：构造函数返回拥有所有权的 `ApiError`，可安全跨线程移动（`Send + Sync + 'static`）；
/// - **后置条件**：除非显式调用 `with_cause`，错误不携带底层原因。
///
/// # 设计取舍与风险（Trade-offs）
/// - 采用 `Cow` 保存消息：静态文案零分配，动态拼接时才接受一次堆分配。
#[derive(Debug)]
pub struct ApiError {
    code: &'static str,
    message: Cow<'static, str>,
    cause: Option<ErrorCause>,
}

impl ApiError {
    /// 使用稳定错误码与消息创建诊断错误。
    pub fn new(code: &'static str, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code,
            message: message.into(),
            cause: None,
        }
    }

    /// 附带底层原因并返回新的诊断错误。
    ///
    /// # 契约说明
    /// - **前置条件**：`cause` 必须满足线程安全约束；
    /// - **后置条件**：`source()` 返回该原因。
    pub fn with_cause(mut self, cause: impl Error + Send + Sync + 'static) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// 获取稳定错误码。
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// 获取人类可读描述。
    pub fn message(&self) -> &str {
        &self.message
    }

    /// 获取底层原因。
    pub fn cause(&self) -> Option<&ErrorCause> {
        self.cause.as_ref()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause
            .as_ref()
            .map(|boxed| boxed.as_ref() as &(dyn Error + 'static))
    }
}

/// 框架内置的错误码常量集合，确保可观测性系统具有稳定识别符。
///
/// # 契约说明（What）
/// - 错误码遵循 `<域>.<语义>` 命名约定，方便在跨组件日志中检索与聚合；
/// - 码值一经发布即视为稳定契约，重命名属于破坏性变更。
pub mod codes {
    /// 以与实际类别不匹配的访问器读取 [`Value`](crate::Value)。
    pub const VALUE_INVALID_KIND: &str = "value.invalid_kind";
    /// 指标仪表名称为空或不符合命名约定。
    pub const METRIC_INVALID_NAME: &str = "metric.invalid_name";
}

const _: fn() = || {
    fn assert_error_traits<T: Error + Send + Sync + 'static>() {}

    assert_error_traits::<ApiError>();
};
