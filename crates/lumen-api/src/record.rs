//! 日志记录与事件载体：内联槽位 + 溢出向量的属性存储。
//!
//! # 设计背景（Why）
//! - 绝大多数日志记录的属性数不超过个位数；为常见情形预留固定内联槽位，
//!   可让热路径在不触发堆分配的前提下完成属性追加；
//! - 超出内联容量的属性落入溢出向量，容量上限不设边界，正确性优先于零分配。
//!
//! # 逻辑解析（How）
//! - [`AttributeSlots`] 是 [`Record`] 与 [`Event`] 共用的私有存储：
//!   前 [`INLINE_ATTRIBUTES`] 个属性写入内联数组，其余追加到向量；
//! - 遍历（walk）严格按插入顺序先内联后溢出，访问器返回 `false` 即短路终止；
//! - 克隆派生自字段克隆：向量按当前长度精确复制，副本与原件不共享可变状态。
//!
//! # 契约说明（What）
//! - **过滤非对称性**：[`Record::add_attributes`] 静默丢弃空键属性；
//!   [`Event::add_attributes`] 原样保留一切输入。两者行为差异是有意设计，
//!   事件载体在采集边界之前不做任何数据修剪；
//! - **后置条件**：任何追加操作之后 `attributes_len()` 恰为历次保留下来的属性总数，
//!   遍历顺序与保留顺序一致。

use crate::severity::Severity;
use crate::value::{KeyValue, Value};
use alloc::borrow::Cow;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// 内联属性槽位数。追加的前若干属性不触发堆分配。
pub const INLINE_ATTRIBUTES: usize = 5;

/// Unix 纪元以来的纳秒时间戳。零值表示"未设置"。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(u64);

impl Timestamp {
    /// 由纳秒数构造。
    pub const fn from_nanos(nanos: u64) -> Self {
        Timestamp(nanos)
    }

    /// 返回纳秒数。
    pub const fn as_nanos(self) -> u64 {
        self.0
    }

    /// 是否为未设置的零值。
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

#[cfg(feature = "std")]
impl From<std::time::SystemTime> for Timestamp {
    /// 纪元之前的时间点与 `u64` 纳秒溢出都饱和处理，不 panic。
    fn from(t: std::time::SystemTime) -> Self {
        let nanos = t
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| u64::try_from(d.as_nanos()).unwrap_or(u64::MAX))
            .unwrap_or(0);
        Timestamp(nanos)
    }
}

/// 内联优先的属性存储。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct AttributeSlots {
    front: [Option<KeyValue>; INLINE_ATTRIBUTES],
    front_len: usize,
    back: Vec<KeyValue>,
}

impl AttributeSlots {
    const fn new() -> Self {
        Self { front: [None, None, None, None, None], front_len: 0, back: Vec::new() }
    }

    fn push(&mut self, attribute: KeyValue) {
        if self.front_len < INLINE_ATTRIBUTES {
            self.front[self.front_len] = Some(attribute);
            self.front_len += 1;
        } else {
            self.back.push(attribute);
        }
    }

    fn len(&self) -> usize {
        self.front_len + self.back.len()
    }

    /// 按插入顺序遍历；`visitor` 返回 `false` 时立即终止。
    fn walk(&self, mut visitor: impl FnMut(&KeyValue) -> bool) {
        for slot in self.front.iter().take(self.front_len) {
            // 不变量：前 front_len 个槽位必为 Some。
            let Some(attribute) = slot else { continue };
            if !visitor(attribute) {
                return;
            }
        }
        for attribute in &self.back {
            if !visitor(attribute) {
                return;
            }
        }
    }

    #[cfg(test)]
    fn overflow_len(&self) -> usize {
        self.back.len()
    }
}

/// 一条待发射的日志记录。
///
/// # 契约说明（What）
/// - 字段全部可选，零值 `Record::new()` 即合法输入；
/// - **属性过滤**：空键属性在 [`Record::add_attributes`] 入口被静默丢弃，
///   不经侧信道上报——属性键缺失是数据质量问题而非 API 误用；
/// - **克隆独立性**：`clone()` 之后对副本的属性追加不影响原记录；
/// - **并发语义**：单写者类型。跨线程共享修改需要外部同步（`&mut` 独占即天然满足）。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    timestamp: Timestamp,
    observed_timestamp: Timestamp,
    severity: Option<Severity>,
    severity_text: Cow<'static, str>,
    body: Value,
    attributes: AttributeSlots,
}

impl Record {
    /// 构造一条空记录。
    pub fn new() -> Self {
        Self {
            timestamp: Timestamp::from_nanos(0),
            observed_timestamp: Timestamp::from_nanos(0),
            severity: None,
            severity_text: Cow::Borrowed(""),
            body: Value::Empty,
            attributes: AttributeSlots::new(),
        }
    }

    /// 事件发生时刻。
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// 设置事件发生时刻。
    pub fn set_timestamp(&mut self, t: Timestamp) {
        self.timestamp = t;
    }

    /// 采集侧观测到该事件的时刻。
    pub fn observed_timestamp(&self) -> Timestamp {
        self.observed_timestamp
    }

    /// 设置观测时刻。
    pub fn set_observed_timestamp(&mut self, t: Timestamp) {
        self.observed_timestamp = t;
    }

    /// 严重级别；未设置时为 `None`。
    pub fn severity(&self) -> Option<Severity> {
        self.severity
    }

    /// 设置严重级别。
    pub fn set_severity(&mut self, severity: Severity) {
        self.severity = Some(severity);
    }

    /// 来源系统的原始级别文本（可能与 [`Record::severity`] 不一致，原样透传）。
    pub fn severity_text(&self) -> &str {
        &self.severity_text
    }

    /// 设置原始级别文本。
    pub fn set_severity_text(&mut self, text: impl Into<Cow<'static, str>>) {
        self.severity_text = text.into();
    }

    /// 记录主体。
    pub fn body(&self) -> &Value {
        &self.body
    }

    /// 设置记录主体。
    pub fn set_body(&mut self, body: Value) {
        self.body = body;
    }

    /// 追加属性，空键条目被静默丢弃。
    ///
    /// # 契约说明
    /// - **后置条件**：保留下来的属性按输入顺序排在既有属性之后；
    ///   前 [`INLINE_ATTRIBUTES`] 个保留属性不触发堆分配。
    pub fn add_attributes(&mut self, attributes: impl IntoIterator<Item = KeyValue>) {
        for attribute in attributes {
            if !attribute.is_valid() {
                continue;
            }
            self.attributes.push(attribute);
        }
    }

    /// 当前保留的属性总数。
    pub fn attributes_len(&self) -> usize {
        self.attributes.len()
    }

    /// 按插入顺序遍历属性；`visitor` 返回 `false` 时短路终止。
    pub fn walk_attributes(&self, visitor: impl FnMut(&KeyValue) -> bool) {
        self.attributes.walk(visitor);
    }

    #[cfg(test)]
    fn overflow_len(&self) -> usize {
        self.attributes.overflow_len()
    }
}

/// 一次命名事件（例如指标样本的示例上下文或审计动作）。
///
/// # 契约说明（What）
/// - 与 [`Record`] 共用同一套内联优先存储，但**不做任何属性过滤**：
///   空键属性原样保留，由下游采集管线决定取舍。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Event {
    name: Cow<'static, str>,
    timestamp: Timestamp,
    severity: Option<Severity>,
    body: Value,
    attributes: AttributeSlots,
}

impl Event {
    /// 以事件名构造。
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            timestamp: Timestamp::from_nanos(0),
            severity: None,
            body: Value::Empty,
            attributes: AttributeSlots::new(),
        }
    }

    /// 事件名。
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 事件时刻。
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// 设置事件时刻。
    pub fn set_timestamp(&mut self, t: Timestamp) {
        self.timestamp = t;
    }

    /// 严重级别；未设置时为 `None`。
    pub fn severity(&self) -> Option<Severity> {
        self.severity
    }

    /// 设置严重级别。
    pub fn set_severity(&mut self, severity: Severity) {
        self.severity = Some(severity);
    }

    /// 事件主体。
    pub fn body(&self) -> &Value {
        &self.body
    }

    /// 设置事件主体。
    pub fn set_body(&mut self, body: Value) {
        self.body = body;
    }

    /// 追加属性，一切输入原样保留（包括空键）。
    pub fn add_attributes(&mut self, attributes: impl IntoIterator<Item = KeyValue>) {
        for attribute in attributes {
            self.attributes.push(attribute);
        }
    }

    /// 当前属性总数。
    pub fn attributes_len(&self) -> usize {
        self.attributes.len()
    }

    /// 按插入顺序遍历属性；`visitor` 返回 `false` 时短路终止。
    pub fn walk_attributes(&self, visitor: impl FnMut(&KeyValue) -> bool) {
        self.attributes.walk(visitor);
    }
}
