//! 诊断侧信道：全局错误处理器钩子。
//!
//! # 设计背景（Why）
//! - 仪表层的热路径访问器承诺零分配且不返回 `Result`（见 [`crate::value`]）；
//!   非致命异常（如类别不匹配的取值）需要一条不干扰控制流的上报通道。
//! - 参考业界仪表库的全局 Error Handler 设计：默认静默丢弃，宿主进程按需安装自己的处理器
//!   （桥接到日志后端、计数器或测试录制器）。
//!
//! # 逻辑解析（How）
//! - 进程级槽位基于 [`crate::arc_swap::ArcSwapOption`]：安装是一次原子替换，上报是一次无锁读取；
//! - 槽位为空时上报被丢弃，保证未配置环境下零副作用。
//!
//! # 契约说明（What）
//! - **并发语义**：[`set_error_handler`] 的写入先行发生于其后所有 [`report`] 的读取；
//!   多次安装以最后一次为准（last-writer-wins）。
//! - **后置条件**：处理器一旦安装即对全进程生效，包括安装之前创建的所有 `Value`/`Record`。
//!
//! # 风险提示（Trade-offs）
//! - 处理器在调用方线程上同步执行，实现必须保持非阻塞且不可 panic，否则会污染仪表调用点；
//! - 全局状态会跨测试共享，测试中请将处理器断言收敛到独立测试进程。

use crate::arc_swap::ArcSwapOption;
use crate::error::ApiError;
use alloc::sync::Arc;

/// 诊断处理器契约。
///
/// # 契约说明（What）
/// - **前置条件**：实现必须 `Send + Sync + 'static`，可被任意线程并发调用；
/// - **后置条件**：`handle` 返回后错误对象即被丢弃，实现如需留存必须自行克隆所需字段；
/// - **约束**：实现不得阻塞、不得 panic，也不得在内部再次触发上报（避免递归）。
pub trait ErrorHandler: Send + Sync + 'static {
    /// 处理一条诊断错误。
    fn handle(&self, error: &ApiError);
}

/// 槽位载体：`arc-swap` 要求常规尺寸（thin pointer）的泛型参数，
/// 因此用一层结构体包裹胖指针 `Arc<dyn ErrorHandler>`。
struct Registration {
    handler: Arc<dyn ErrorHandler>,
}

static HANDLER: ArcSwapOption<Registration> = ArcSwapOption::const_empty();

/// 安装进程级诊断处理器。
///
/// # 契约说明
/// - **输入参数**：`handler` 为共享所有权的处理器；调用方可保留自己的 `Arc` 以便事后检视；
/// - **后置条件**：替换先前安装的处理器（若有），旧处理器在所有在途上报结束后随引用计数释放。
pub fn set_error_handler(handler: Arc<dyn ErrorHandler>) {
    HANDLER.store(Some(Arc::new(Registration { handler })));
}

/// 经由侧信道上报一条诊断错误。
///
/// # 契约说明
/// - **前置条件**：无；未安装处理器时本调用等价于丢弃，不产生任何副作用；
/// - **后置条件**：已安装的处理器在当前线程同步收到 `error` 的只读引用。
pub fn report(error: ApiError) {
    if let Some(registration) = HANDLER.load_full() {
        registration.handler.handle(&error);
    }
}
