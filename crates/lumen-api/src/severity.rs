//! 日志严重级别：六档基准 × 四级细分的 24 级阶梯。
//!
//! # 设计背景（Why）
//! - 单纯的六档（Trace/Debug/Info/Warn/Error/Fatal）不足以表达后端采样策略
//!   所需的细粒度阈值，因此每档再细分四级，数值 1..=24 单调递增；
//! - 数值编码是跨进程协议的一部分：比较、过滤与序列化都以数值为准。
//!
//! # 逻辑解析（How）
//! - 以 `#[repr(i32)]` 枚举承载 24 个变体，判别值即协议数值；
//! - 派生 `Ord` 直接获得与数值一致的全序，`Severity::Error > Severity::Info` 等
//!   比较无需额外转换。
//!
//! # 契约说明（What）
//! - **不变量**：每档基准变体（如 [`Severity::Warn`]）与其一级细分（`Warn1`）数值相同
//!   的设计被有意排除——本阶梯中基准名即一级细分的别名语义由 [`Severity::band_str`]
//!   归一化呈现，数值空间不留空洞；
//! - **边界语义**：[`Severity::from_number`] 对 1..=24 之外的输入返回 `None`，
//!   不做夹取（clamp），由调用方决定降级策略。

use serde::{Deserialize, Serialize};

/// 24 级日志严重级别。
///
/// 变体命名规则：`<档位><细分序号>`，其中一级细分省略序号
/// （`Trace` 即 Trace 档第 1 级，数值 1；`Trace2` 为第 2 级，数值 2，依此类推）。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(i32)]
pub enum Severity {
    Trace = 1,
    Trace2 = 2,
    Trace3 = 3,
    Trace4 = 4,
    Debug = 5,
    Debug2 = 6,
    Debug3 = 7,
    Debug4 = 8,
    Info = 9,
    Info2 = 10,
    Info3 = 11,
    Info4 = 12,
    Warn = 13,
    Warn2 = 14,
    Warn3 = 15,
    Warn4 = 16,
    Error = 17,
    Error2 = 18,
    Error3 = 19,
    Error4 = 20,
    Fatal = 21,
    Fatal2 = 22,
    Fatal3 = 23,
    Fatal4 = 24,
}

impl Severity {
    /// 阶梯最低级别。
    pub const MIN: Severity = Severity::Trace;

    /// 阶梯最高级别。
    pub const MAX: Severity = Severity::Fatal4;

    /// 返回协议数值（1..=24）。
    pub const fn number(self) -> i32 {
        self as i32
    }

    /// 由协议数值还原级别；超出 1..=24 时返回 `None`。
    pub const fn from_number(number: i32) -> Option<Severity> {
        Some(match number {
            1 => Severity::Trace,
            2 => Severity::Trace2,
            3 => Severity::Trace3,
            4 => Severity::Trace4,
            5 => Severity::Debug,
            6 => Severity::Debug2,
            7 => Severity::Debug3,
            8 => Severity::Debug4,
            9 => Severity::Info,
            10 => Severity::Info2,
            11 => Severity::Info3,
            12 => Severity::Info4,
            13 => Severity::Warn,
            14 => Severity::Warn2,
            15 => Severity::Warn3,
            16 => Severity::Warn4,
            17 => Severity::Error,
            18 => Severity::Error2,
            19 => Severity::Error3,
            20 => Severity::Error4,
            21 => Severity::Fatal,
            22 => Severity::Fatal2,
            23 => Severity::Fatal3,
            24 => Severity::Fatal4,
            _ => return None,
        })
    }

    /// 返回细分级别的全名，例如 `"WARN3"`。
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Trace2 => "TRACE2",
            Severity::Trace3 => "TRACE3",
            Severity::Trace4 => "TRACE4",
            Severity::Debug => "DEBUG",
            Severity::Debug2 => "DEBUG2",
            Severity::Debug3 => "DEBUG3",
            Severity::Debug4 => "DEBUG4",
            Severity::Info => "INFO",
            Severity::Info2 => "INFO2",
            Severity::Info3 => "INFO3",
            Severity::Info4 => "INFO4",
            Severity::Warn => "WARN",
            Severity::Warn2 => "WARN2",
            Severity::Warn3 => "WARN3",
            Severity::Warn4 => "WARN4",
            Severity::Error => "ERROR",
            Severity::Error2 => "ERROR2",
            Severity::Error3 => "ERROR3",
            Severity::Error4 => "ERROR4",
            Severity::Fatal => "FATAL",
            Severity::Fatal2 => "FATAL2",
            Severity::Fatal3 => "FATAL3",
            Severity::Fatal4 => "FATAL4",
        }
    }

    /// 返回所属档位的基准名（抹去细分序号），用于与六档后端对接。
    pub const fn band_str(self) -> &'static str {
        match self.number() {
            1..=4 => "TRACE",
            5..=8 => "DEBUG",
            9..=12 => "INFO",
            13..=16 => "WARN",
            17..=20 => "ERROR",
            _ => "FATAL",
        }
    }
}

impl core::fmt::Display for Severity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
