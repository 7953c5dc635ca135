//! 指标仪表契约：计数器、仪表盘与直方图的创建和记录接口。
//!
//! # 设计背景（Why）
//! - 业务代码通过 [`Meter`] 申领仪表，后端（聚合器、导出管线）在装配阶段注入；
//!   仪表句柄创建一次、记录多次，热路径上只剩一次虚调用加若干参数传递；
//! - 创建参数拆成两层：[`InstrumentDescriptor`] 承载身份（名称/描述/单位），
//!   可在 `const` 上下文组装；[`InstrumentOptions`] 承载创建期修饰
//!   （静态属性、异步回调），同名修饰后写覆盖先写（last-wins）。
//!
//! # 契约说明（What）
//! - **命名规则**：仪表名非空、首字符为 ASCII 字母、长度不超过 255，
//!   其余字符取自字母数字与 `_` `.` `-` `/`；
//! - **降级语义**：非法名称经侧信道上报 [`codes::METRIC_INVALID_NAME`]，
//!   创建流程继续并返回可用句柄，绝不 panic——坏名字不应摧毁宿主进程；
//! - **并发语义**：所有仪表句柄 `Send + Sync`，记录方法可被任意线程并发调用。

use crate::error::{ApiError, codes};
use crate::value::{AttributeSet, KeyValue};
use alloc::boxed::Box;
use alloc::format;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

/// 仪表名长度上限（字节）。
pub const MAX_INSTRUMENT_NAME_LEN: usize = 255;

/// 仪表身份描述符。
///
/// # 逻辑解析（How）
/// - 借用 `'a` 生命周期的字符串切片，可在 `const` 上下文以"建造者链"组装：
///
/// ```
/// use lumen_api::InstrumentDescriptor;
///
/// const REQUESTS: InstrumentDescriptor<'static> =
///     InstrumentDescriptor::new("http.server.requests")
///         .with_description("已处理的 HTTP 请求数")
///         .with_unit("{request}");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstrumentDescriptor<'a> {
    name: &'a str,
    description: &'a str,
    unit: &'a str,
}

impl<'a> InstrumentDescriptor<'a> {
    /// 以仪表名构造；描述与单位默认为空。
    pub const fn new(name: &'a str) -> Self {
        Self { name, description: "", unit: "" }
    }

    /// 附加人读描述，后写覆盖先写。
    pub const fn with_description(mut self, description: &'a str) -> Self {
        self.description = description;
        self
    }

    /// 附加计量单位（UCUM 风格），后写覆盖先写。
    pub const fn with_unit(mut self, unit: &'a str) -> Self {
        self.unit = unit;
        self
    }

    /// 仪表名。
    pub const fn name(&self) -> &'a str {
        self.name
    }

    /// 人读描述。
    pub const fn description(&self) -> &'a str {
        self.description
    }

    /// 计量单位。
    pub const fn unit(&self) -> &'a str {
        self.unit
    }

    /// 校验仪表名是否满足命名规则。
    ///
    /// # 契约说明
    /// - **后置条件**：返回 `Err` 携带 [`codes::METRIC_INVALID_NAME`] 与
    ///   具体原因；本方法本身无副作用，是否上报由调用方决定。
    pub fn validate(&self) -> Result<(), ApiError> {
        let name = self.name;
        if name.is_empty() {
            return Err(ApiError::new(codes::METRIC_INVALID_NAME, "instrument name is empty"));
        }
        if name.len() > MAX_INSTRUMENT_NAME_LEN {
            return Err(ApiError::new(
                codes::METRIC_INVALID_NAME,
                format!("instrument name exceeds {MAX_INSTRUMENT_NAME_LEN} bytes: {name:?}"),
            ));
        }
        let mut chars = name.chars();
        // 上面已排除空串。
        let Some(first) = chars.next() else { return Ok(()) };
        if !first.is_ascii_alphabetic() {
            return Err(ApiError::new(
                codes::METRIC_INVALID_NAME,
                format!("instrument name must start with an ASCII letter: {name:?}"),
            ));
        }
        for c in chars {
            if !(c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-' | '/')) {
                return Err(ApiError::new(
                    codes::METRIC_INVALID_NAME,
                    format!("instrument name contains invalid character {c:?}: {name:?}"),
                ));
            }
        }
        Ok(())
    }
}

/// 异步观测的取值回执：回调在采集周期内经由它上报当前读数。
pub trait Observer: Send + Sync {
    /// 上报一次读数及其维度属性。
    fn observe(&self, value: f64, attributes: AttributeSet<'_>);
}

/// 异步观测回调。采集周期由后端驱动，回调必须非阻塞且可重入。
pub type ObserveCallback = Box<dyn Fn(&dyn Observer) + Send + Sync + 'static>;

/// 仪表创建期修饰。
///
/// # 契约说明（What）
/// - **属性按键合并（last-wins）**：[`InstrumentOptions::with_attributes`] 把输入
///   并入既有属性集，键相同者以最后写入的取值为准，键不同者追加保留；
///   同一批输入内的重复键同样只留最后一个；
/// - **回调整体替换**：[`InstrumentOptions::with_callback`] 以最后一次设置为准；
/// - 未被本契约识别的修饰不存在——类型系统替代了动态的"未知选项忽略"规则。
#[derive(Default)]
pub struct InstrumentOptions {
    attributes: Vec<KeyValue>,
    callback: Option<ObserveCallback>,
}

impl InstrumentOptions {
    /// 构造无修饰的默认选项。
    pub fn new() -> Self {
        Self::default()
    }

    /// 把属性并入既有集合：同键覆写取值，新键按输入顺序追加。
    ///
    /// # 契约说明
    /// - **后置条件**：每个键最多出现一次，取值为历次设置中最后写入者；
    ///   首次出现的键保持其首次出现时的相对顺序。
    pub fn with_attributes(mut self, attributes: impl IntoIterator<Item = KeyValue>) -> Self {
        for attribute in attributes {
            match self.attributes.iter_mut().find(|existing| existing.key == attribute.key) {
                Some(existing) => existing.value = attribute.value,
                None => self.attributes.push(attribute),
            }
        }
        self
    }

    /// 设置异步观测回调，整体替换先前设置。
    pub fn with_callback(mut self, callback: ObserveCallback) -> Self {
        self.callback = Some(callback);
        self
    }

    /// 静态属性视图。
    pub fn attributes(&self) -> &[KeyValue] {
        &self.attributes
    }

    /// 是否携带异步观测回调。
    pub fn has_callback(&self) -> bool {
        self.callback.is_some()
    }

    /// 拆解为（属性集，回调），供 [`Meter`] 实现消费。
    pub fn into_parts(self) -> (Vec<KeyValue>, Option<ObserveCallback>) {
        (self.attributes, self.callback)
    }
}

impl fmt::Debug for InstrumentOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstrumentOptions")
            .field("attributes", &self.attributes)
            .field("callback", &self.callback.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// 单调累加计数器。
pub trait Counter: Send + Sync {
    /// 累加 `delta`（必须非负，负值由实现丢弃或上报）。
    fn add(&self, delta: f64, attributes: AttributeSet<'_>);

    /// 累加 1。
    fn increment(&self, attributes: AttributeSet<'_>) {
        self.add(1.0, attributes);
    }
}

/// 可升可降的瞬时值仪表盘。
pub trait Gauge: Send + Sync {
    /// 覆写当前读数。
    fn set(&self, value: f64, attributes: AttributeSet<'_>);

    /// 在当前读数上累加 `delta`。状态追踪由实现负责。
    fn increment(&self, delta: f64, attributes: AttributeSet<'_>);

    /// 在当前读数上扣减 `delta`。
    fn decrement(&self, delta: f64, attributes: AttributeSet<'_>) {
        self.increment(-delta, attributes);
    }
}

/// 按桶聚合的分布直方图。
pub trait Histogram: Send + Sync {
    /// 记录一次观测样本。
    fn record(&self, value: f64, attributes: AttributeSet<'_>);
}

/// 仪表工厂契约。
///
/// # 契约说明（What）
/// - **前置条件**：`descriptor` 的名称应满足命名规则；违反时实现必须经
///   侧信道上报并仍返回可用句柄（可以是空操作句柄），不得 panic；
/// - **后置条件**：同名重复创建的行为由实现决定（复用或新建），
///   本契约不做约束。
pub trait Meter: Send + Sync + 'static {
    /// 创建计数器。
    fn counter(
        &self,
        descriptor: &InstrumentDescriptor<'_>,
        options: InstrumentOptions,
    ) -> Arc<dyn Counter>;

    /// 创建仪表盘。
    fn gauge(
        &self,
        descriptor: &InstrumentDescriptor<'_>,
        options: InstrumentOptions,
    ) -> Arc<dyn Gauge>;

    /// 创建直方图。
    fn histogram(
        &self,
        descriptor: &InstrumentDescriptor<'_>,
        options: InstrumentOptions,
    ) -> Arc<dyn Histogram>;

    /// 创建由采集周期驱动的异步仪表盘，消费 `options` 中的观测回调。
    ///
    /// 未携带回调的选项是合法输入：产生一个只能被动 `set` 的普通仪表盘。
    fn observable_gauge(
        &self,
        descriptor: &InstrumentDescriptor<'_>,
        options: InstrumentOptions,
    ) -> Arc<dyn Gauge>;
}

/// 常用单位与属性键的命名约定，供仪表声明处引用以保持一致性。
pub mod contract {
    /// 单位：毫秒。
    pub const UNIT_MILLISECONDS: &str = "ms";
    /// 单位：字节。
    pub const UNIT_BYTES: &str = "By";
    /// 单位：无量纲计数。
    pub const UNIT_DIMENSIONLESS: &str = "1";
}

#[allow(unused)]
fn _assert_object_safe(
    _: &dyn Meter,
    _: &dyn Counter,
    _: &dyn Gauge,
    _: &dyn Histogram,
    _: &dyn Observer,
) {
}
