#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![doc = "lumen-api: 可观测性仪表层的核心契约。"]
#![doc = ""]
#![doc = "== 定位与边界 =="]
#![doc = "本 Crate 只定义应用代码与桥接层共享的词汇：结构化属性值（`Value`/`KeyValue`）、"]
#![doc = "日志记录（`Record`/`Event`）、日志级别（`Severity`）以及 `Logger`/`Meter` 契约。"]
#![doc = "采集、聚合、批处理与导出全部由调用方注入的 SDK 实现；本层不含任何 IO、阻塞或后台任务。"]
#![doc = ""]
#![doc = "== 内存分配依赖 =="]
#![doc = "`lumen-api` 定位于 `no_std + alloc` 场景：契约大量依赖 [`alloc`] 中的 `Box`、`Arc`、`Vec`、`Cow`。"]
#![doc = "纯 `no_std`（无分配器）环境暂不支持；`std` Feature 仅增量开启时间戳转换与无锁钩子路径。"]

extern crate alloc;

pub mod arc_swap;
pub mod error;
pub mod hook;
pub mod logging;
pub mod metrics;
pub mod record;
pub mod severity;
/// 测试桩命名空间，集中暴露官方维护的 `Noop` 实现，供集成测试、示例与未接入 SDK 的调用方复用。
///
/// # 设计背景（Why）
/// - 统一维护空操作桩对象，避免在各处重复定义零尺寸结构体；
/// - 当核心契约演进时，通过单点更新保证所有测试与占位接线同步适配。
pub mod test_stubs;
pub mod value;

pub use error::{ApiError, ErrorCause};
pub use hook::{ErrorHandler, report, set_error_handler};
pub use logging::Logger;
pub use metrics::{
    Counter, Gauge, Histogram, InstrumentDescriptor, InstrumentOptions, Meter, ObserveCallback,
    Observer,
};
pub use record::{Event, INLINE_ATTRIBUTES, Record, Timestamp};
pub use severity::Severity;
pub use value::{AttributeSet, KeyValue, Kind, Value};

use alloc::boxed::Box;
use core::fmt;

/// `lumen-api` 中所有错误必须实现的 `no_std` 基础 Trait。
///
/// # 设计背景（Why）
/// - `std::error::Error` 在 `no_std` 环境中不可用，因此需要一个对象安全、与平台无关的错误抽象来串联底层错误链。
/// - 该 Trait 作为所有错误类型的“最小公共接口”，帮助诊断钩子在 `alloc` 场景下完成跨模块错误传递。
///
/// # 逻辑解析（How）
/// - 约束实现者提供 `Debug` 与 `Display`，便于日志与可观测性收集。
/// - 通过 `source` 方法递归返回链路上的上游错误，保持与 `std::error::Error::source` 一致的语义。
///
/// # 契约说明（What）
/// - **前置条件**：实现类型若需装箱进 [`ErrorCause`]，必须是 `'static` 生命周期并可安全跨线程共享。
/// - **后置条件**：`source` 返回的引用生命周期受限于 `self`，以防悬垂引用。
///
/// # 设计取舍与风险（Trade-offs）
/// - 未在 Trait 上强加 `Send + Sync` 约束，避免对受限设备强加多余负担；需要线程安全时请使用 [`ErrorCause`] 类型别名。
/// - 若底层错误不提供 `source`，错误链会在此处终止，这是设计上允许的边界情况。
pub trait Error: fmt::Debug + fmt::Display {
    /// 返回当前错误的上游来源。
    fn source(&self) -> Option<&(dyn Error + 'static)>;
}

impl<E> Error for Box<E>
where
    E: Error + ?Sized,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        (**self).source()
    }
}
