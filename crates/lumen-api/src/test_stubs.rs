//! 空操作实现：未装配后端时的默认落点，兼作测试脚手架。
//!
//! # 设计背景（Why）
//! - 契约消费方（库代码）不应关心宿主是否装配了真实后端；向其注入本模块的
//!   空操作实现即可让仪表调用点保持原样而产生零副作用；
//! - 单元测试需要满足契约的最小实现作为占位或对照组，这些类型同样胜任。
//!
//! # 契约说明（What）
//! - 所有空操作实现忽略输入并立即返回；[`NoopLogger::enabled`] 返回 `false`，
//!   让上游得以跳过记录构造；
//! - [`NoopMeter`] 仍然执行名称校验并经侧信道上报非法名——即使无人消费数据，
//!   仪表声明处的拼写错误也应尽早暴露。

use crate::hook;
use crate::logging::Logger;
use crate::metrics::{Counter, Gauge, Histogram, InstrumentDescriptor, InstrumentOptions, Meter};
use crate::record::Record;
use crate::severity::Severity;
use crate::value::KeyValue;
use alloc::sync::Arc;

/// 丢弃一切记录的日志发射器。
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn emit(&self, _record: Record) {}

    fn enabled(&self, _severity: Option<Severity>) -> bool {
        false
    }
}

/// 丢弃一切样本的计数器。
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCounter;

impl Counter for NoopCounter {
    fn add(&self, _delta: f64, _attributes: &[KeyValue]) {}
}

/// 丢弃一切读数的仪表盘。
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopGauge;

impl Gauge for NoopGauge {
    fn set(&self, _value: f64, _attributes: &[KeyValue]) {}

    fn increment(&self, _delta: f64, _attributes: &[KeyValue]) {}
}

/// 丢弃一切观测的直方图。
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHistogram;

impl Histogram for NoopHistogram {
    fn record(&self, _value: f64, _attributes: &[KeyValue]) {}
}

/// 只做名称校验的仪表工厂，所有句柄均为空操作。
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopMeter;

impl NoopMeter {
    fn check(descriptor: &InstrumentDescriptor<'_>) {
        if let Err(error) = descriptor.validate() {
            hook::report(error);
        }
    }
}

impl Meter for NoopMeter {
    fn counter(
        &self,
        descriptor: &InstrumentDescriptor<'_>,
        _options: InstrumentOptions,
    ) -> Arc<dyn Counter> {
        Self::check(descriptor);
        Arc::new(NoopCounter)
    }

    fn gauge(
        &self,
        descriptor: &InstrumentDescriptor<'_>,
        _options: InstrumentOptions,
    ) -> Arc<dyn Gauge> {
        Self::check(descriptor);
        Arc::new(NoopGauge)
    }

    fn histogram(
        &self,
        descriptor: &InstrumentDescriptor<'_>,
        _options: InstrumentOptions,
    ) -> Arc<dyn Histogram> {
        Self::check(descriptor);
        Arc::new(NoopHistogram)
    }

    fn observable_gauge(
        &self,
        descriptor: &InstrumentDescriptor<'_>,
        _options: InstrumentOptions,
    ) -> Arc<dyn Gauge> {
        Self::check(descriptor);
        Arc::new(NoopGauge)
    }
}
