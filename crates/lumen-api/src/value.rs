//! 属性值模型：带类别标签的统一取值类型。
//!
//! # 设计背景（Why）
//! - 日志记录与指标维度都需要携带异构属性，本模块以单一的 [`Value`]
//!   枚举覆盖八种类别，避免各调用点各自定义联合类型；
//! - 枚举编码让编译器静态保证"类别标签与载荷一致"，非法状态不可表达，
//!   判别、相等性与克隆全部由语言原生语义承担。
//!
//! # 逻辑解析（How）
//! - 字符串与字节串使用 `Cow<'static, _>`：静态字面量零拷贝，动态内容按需落堆；
//! - 复合类别（`Slice`/`Map`）持有元素向量，嵌套深度不限；
//! - 浮点相等性按位（`f64::to_bits`）比较，使 `NaN == NaN` 成立，
//!   从而让 [`Value`] 满足 `Eq` 的等价关系契约。
//!
//! # 契约说明（What）
//! - **后置条件**：任意 `Value` 的 [`Value::kind`] 与其构造函数一一对应，构造后不可变；
//! - **边界语义**：`Value::slice([])` 与 `Value::map([])` 是合法的空复合值，
//!   其类别仍为 `Slice`/`Map`，与 [`Value::empty`] 判然有别。
//!
//! # 风险提示（Trade-offs）
//! - 按位浮点相等意味着 `0.0 != -0.0`；需要 IEEE 语义的调用方应先取出
//!   [`Value::as_float64`] 再自行比较。

use crate::error::{ApiError, codes};
use crate::hook;
use alloc::borrow::Cow;
use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

/// 值类别标签。
///
/// # 契约说明（What）
/// - 与 [`Value`] 的变体一一对应；序列化形态为类别名字符串，
///   判别值（discriminant）不保证跨版本稳定，外部系统不得依赖其整数表示。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    /// 未携带任何载荷的占位类别。
    Empty,
    /// 布尔。
    Bool,
    /// 64 位有符号整数。
    Int64,
    /// 64 位浮点数。
    Float64,
    /// UTF-8 字符串。
    String,
    /// 不透明字节串。
    Bytes,
    /// 有序的异构值列表。
    Slice,
    /// 有序的键值对列表（非去重映射）。
    Map,
}

impl Kind {
    /// 返回类别的稳定文本名，用于诊断消息与日志输出。
    pub const fn as_str(self) -> &'static str {
        match self {
            Kind::Empty => "Empty",
            Kind::Bool => "Bool",
            Kind::Int64 => "Int64",
            Kind::Float64 => "Float64",
            Kind::String => "String",
            Kind::Bytes => "Bytes",
            Kind::Slice => "Slice",
            Kind::Map => "Map",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 带类别标签的属性值。
///
/// # 逻辑解析（How）
/// - 每个变体同时充当类别标签与载荷容器；`match` 穷尽性检查保证
///   新增类别时所有消费方必须同步更新。
///
/// # 契约说明（What）
/// - **克隆独立性**：`clone()` 产生的副本与原值不共享可变状态，
///   复合变体（`Slice`/`Map`）的元素向量按当前长度精确复制；
/// - **相等性**：先比类别再比载荷；`Float64` 按位比较，因此
///   `Value::int64(0) != Value::float64(0.0)` 且 `NaN == NaN`。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Value {
    /// 零值占位，亦是 `Value::default()` 的结果。
    Empty,
    Bool(bool),
    Int64(i64),
    Float64(f64),
    String(Cow<'static, str>),
    Bytes(Cow<'static, [u8]>),
    Slice(Vec<Value>),
    Map(Vec<KeyValue>),
}

impl Value {
    /// 构造占位空值。
    pub const fn empty() -> Self {
        Value::Empty
    }

    /// 构造布尔值。
    pub const fn bool(v: bool) -> Self {
        Value::Bool(v)
    }

    /// 构造 64 位整数值。
    pub const fn int64(v: i64) -> Self {
        Value::Int64(v)
    }

    /// 构造 64 位浮点值。载荷按位保留，`NaN` 可无损往返。
    pub const fn float64(v: f64) -> Self {
        Value::Float64(v)
    }

    /// 构造字符串值。静态字面量走 `Cow::Borrowed`，不产生分配。
    pub fn string(v: impl Into<Cow<'static, str>>) -> Self {
        Value::String(v.into())
    }

    /// 构造字节串值。
    pub fn bytes(v: impl Into<Cow<'static, [u8]>>) -> Self {
        Value::Bytes(v.into())
    }

    /// 构造列表值。空列表合法，其类别仍为 [`Kind::Slice`]。
    pub fn slice(v: impl Into<Vec<Value>>) -> Self {
        Value::Slice(v.into())
    }

    /// 构造键值对列表值。不做键去重，保留插入顺序。
    pub fn map(v: impl Into<Vec<KeyValue>>) -> Self {
        Value::Map(v.into())
    }

    /// 返回当前值的类别标签。
    pub const fn kind(&self) -> Kind {
        match self {
            Value::Empty => Kind::Empty,
            Value::Bool(_) => Kind::Bool,
            Value::Int64(_) => Kind::Int64,
            Value::Float64(_) => Kind::Float64,
            Value::String(_) => Kind::String,
            Value::Bytes(_) => Kind::Bytes,
            Value::Slice(_) => Kind::Slice,
            Value::Map(_) => Kind::Map,
        }
    }

    /// 判断是否为占位空值。
    pub const fn is_empty(&self) -> bool {
        matches!(self, Value::Empty)
    }

    fn report_mismatch(&self, expected: Kind) {
        hook::report(ApiError::new(
            codes::VALUE_INVALID_KIND,
            alloc::format!("expected {}, got {}", expected.as_str(), self.kind().as_str()),
        ));
    }

    /// 取出布尔载荷。
    ///
    /// # 契约说明
    /// - **后置条件**：类别不匹配时返回 `false` 并经侧信道上报
    ///   [`codes::VALUE_INVALID_KIND`]，绝不 panic。
    pub fn as_bool(&self) -> bool {
        match self {
            Value::Bool(v) => *v,
            other => {
                other.report_mismatch(Kind::Bool);
                false
            }
        }
    }

    /// 取出整数载荷；类别不匹配时返回 `0` 并上报。
    pub fn as_int64(&self) -> i64 {
        match self {
            Value::Int64(v) => *v,
            other => {
                other.report_mismatch(Kind::Int64);
                0
            }
        }
    }

    /// 取出浮点载荷；类别不匹配时返回 `0.0` 并上报。
    pub fn as_float64(&self) -> f64 {
        match self {
            Value::Float64(v) => *v,
            other => {
                other.report_mismatch(Kind::Float64);
                0.0
            }
        }
    }

    /// 取出字符串载荷；类别不匹配时返回空串并上报。
    pub fn as_str(&self) -> &str {
        match self {
            Value::String(v) => v,
            other => {
                other.report_mismatch(Kind::String);
                ""
            }
        }
    }

    /// 取出字节串载荷；类别不匹配时返回空切片并上报。
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Value::Bytes(v) => v,
            other => {
                other.report_mismatch(Kind::Bytes);
                &[]
            }
        }
    }

    /// 取出列表载荷；类别不匹配时返回空切片并上报。
    pub fn as_slice(&self) -> &[Value] {
        match self {
            Value::Slice(v) => v,
            other => {
                other.report_mismatch(Kind::Slice);
                &[]
            }
        }
    }

    /// 取出键值对列表载荷；类别不匹配时返回空切片并上报。
    pub fn as_map(&self) -> &[KeyValue] {
        match self {
            Value::Map(v) => v,
            other => {
                other.report_mismatch(Kind::Map);
                &[]
            }
        }
    }

    /// 布尔载荷的免检视图：类别不匹配时静默返回零值，不触发侧信道。
    ///
    /// 适用于调用方已通过 [`Value::kind`] 自行判别的热路径。
    pub fn as_bool_unchecked(&self) -> bool {
        matches!(self, Value::Bool(true))
    }

    /// 整数载荷的免检视图，语义同 [`Value::as_bool_unchecked`]。
    pub fn as_int64_unchecked(&self) -> i64 {
        match self {
            Value::Int64(v) => *v,
            _ => 0,
        }
    }

    /// 浮点载荷的免检视图。
    pub fn as_float64_unchecked(&self) -> f64 {
        match self {
            Value::Float64(v) => *v,
            _ => 0.0,
        }
    }

    /// 字符串载荷的免检视图。
    pub fn as_str_unchecked(&self) -> &str {
        match self {
            Value::String(v) => v,
            _ => "",
        }
    }

    /// 字节串载荷的免检视图。
    pub fn as_bytes_unchecked(&self) -> &[u8] {
        match self {
            Value::Bytes(v) => v,
            _ => &[],
        }
    }

    /// 列表载荷的免检视图。
    pub fn as_slice_unchecked(&self) -> &[Value] {
        match self {
            Value::Slice(v) => v,
            _ => &[],
        }
    }

    /// 键值对列表载荷的免检视图。
    pub fn as_map_unchecked(&self) -> &[KeyValue] {
        match self {
            Value::Map(v) => v,
            _ => &[],
        }
    }

    /// 渲染为 `serde_json::Value`，用于本地调试导出。
    ///
    /// # 契约说明
    /// - 字节串编码为 JSON 数组（逐字节整数），不做 base64；
    /// - `NaN`/`Inf` 超出 JSON 数值域，按 `null` 渲染。
    #[cfg(feature = "std_json")]
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::json;
        match self {
            Value::Empty => serde_json::Value::Null,
            Value::Bool(v) => json!(v),
            Value::Int64(v) => json!(v),
            Value::Float64(v) => serde_json::Number::from_f64(*v)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(v) => json!(v.as_ref()),
            Value::Bytes(v) => json!(v.as_ref()),
            Value::Slice(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Value::Map(entries) => {
                let mut object = serde_json::Map::with_capacity(entries.len());
                for entry in entries {
                    object.insert(entry.key.clone().into_owned(), entry.value.to_json());
                }
                serde_json::Value::Object(object)
            }
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Empty
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Empty, Value::Empty) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int64(a), Value::Int64(b)) => a == b,
            // 按位比较：NaN 自反，+0.0 与 -0.0 不等，满足 Eq 要求的等价关系。
            (Value::Float64(a), Value::Float64(b)) => a.to_bits() == b.to_bits(),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::Slice(a), Value::Slice(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int64(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float64(v)
    }
}

impl From<&'static str> for Value {
    fn from(v: &'static str) -> Self {
        Value::String(Cow::Borrowed(v))
    }
}

impl From<alloc::string::String> for Value {
    fn from(v: alloc::string::String) -> Self {
        Value::String(Cow::Owned(v))
    }
}

impl From<Cow<'static, str>> for Value {
    fn from(v: Cow<'static, str>) -> Self {
        Value::String(v)
    }
}

impl From<&'static [u8]> for Value {
    fn from(v: &'static [u8]) -> Self {
        Value::Bytes(Cow::Borrowed(v))
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(Cow::Owned(v))
    }
}

/// 键值对属性。
///
/// # 契约说明（What）
/// - 键为 UTF-8 字符串，值为任意 [`Value`]；
/// - 空键本身可构造（例如作为 `Map` 元素），是否过滤由容器层决定：
///   [`crate::record::Record`] 静默丢弃空键属性，[`crate::record::Event`] 原样保留。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValue {
    /// 属性键。
    pub key: Cow<'static, str>,
    /// 属性值。
    pub value: Value,
}

impl KeyValue {
    /// 构造一个键值对。
    pub fn new(key: impl Into<Cow<'static, str>>, value: impl Into<Value>) -> Self {
        Self { key: key.into(), value: value.into() }
    }

    /// 键非空即视为合法；空键属性是否保留由容器层决定。
    pub fn is_valid(&self) -> bool {
        !self.key.is_empty()
    }

    /// 布尔属性的便捷构造。
    pub fn bool(key: impl Into<Cow<'static, str>>, v: bool) -> Self {
        Self::new(key, Value::Bool(v))
    }

    /// 整数属性的便捷构造。
    pub fn int64(key: impl Into<Cow<'static, str>>, v: i64) -> Self {
        Self::new(key, Value::Int64(v))
    }

    /// 浮点属性的便捷构造。
    pub fn float64(key: impl Into<Cow<'static, str>>, v: f64) -> Self {
        Self::new(key, Value::Float64(v))
    }

    /// 字符串属性的便捷构造。
    pub fn string(key: impl Into<Cow<'static, str>>, v: impl Into<Cow<'static, str>>) -> Self {
        Self::new(key, Value::String(v.into()))
    }

    /// 字节串属性的便捷构造。
    pub fn bytes(key: impl Into<Cow<'static, str>>, v: impl Into<Cow<'static, [u8]>>) -> Self {
        Self::new(key, Value::Bytes(v.into()))
    }

    /// 列表属性的便捷构造。
    pub fn slice(key: impl Into<Cow<'static, str>>, v: impl Into<Vec<Value>>) -> Self {
        Self::new(key, Value::Slice(v.into()))
    }

    /// 嵌套键值对属性的便捷构造。
    pub fn map(key: impl Into<Cow<'static, str>>, v: impl Into<Vec<KeyValue>>) -> Self {
        Self::new(key, Value::Map(v.into()))
    }
}

/// 借用视角的属性集合，约定为按插入顺序排列的切片。
pub type AttributeSet<'a> = &'a [KeyValue];
