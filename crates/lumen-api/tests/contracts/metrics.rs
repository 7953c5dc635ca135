//! 指标契约测试：用一个最小的录制型后端验证仪表创建与记录的端到端协作。

use lumen_api::metrics::contract;
use lumen_api::{
    Counter, Gauge, Histogram, InstrumentDescriptor, InstrumentOptions, KeyValue, Meter,
    ObserveCallback, Observer,
};
use std::sync::{Arc, Mutex};

/// 录制型后端：把每次记录追加到共享账本，并保存异步回调供"采集周期"驱动。
#[derive(Default)]
struct RecordingMeter {
    ledger: Arc<Mutex<Vec<(String, f64)>>>,
    callbacks: Mutex<Vec<ObserveCallback>>,
}

struct LedgerInstrument {
    name: String,
    ledger: Arc<Mutex<Vec<(String, f64)>>>,
}

impl LedgerInstrument {
    fn write(&self, value: f64) {
        self.ledger.lock().unwrap().push((self.name.clone(), value));
    }
}

impl Counter for LedgerInstrument {
    fn add(&self, delta: f64, _attributes: &[KeyValue]) {
        self.write(delta);
    }
}

impl Gauge for LedgerInstrument {
    fn set(&self, value: f64, _attributes: &[KeyValue]) {
        self.write(value);
    }

    fn increment(&self, delta: f64, _attributes: &[KeyValue]) {
        self.write(delta);
    }
}

impl Histogram for LedgerInstrument {
    fn record(&self, value: f64, _attributes: &[KeyValue]) {
        self.write(value);
    }
}

impl RecordingMeter {
    fn instrument(&self, descriptor: &InstrumentDescriptor<'_>) -> LedgerInstrument {
        LedgerInstrument { name: descriptor.name().to_string(), ledger: Arc::clone(&self.ledger) }
    }

    /// 模拟一次采集周期：驱动所有已注册回调。
    fn collect(&self, observer: &dyn Observer) {
        for callback in self.callbacks.lock().unwrap().iter() {
            callback(observer);
        }
    }
}

impl Meter for RecordingMeter {
    fn counter(
        &self,
        descriptor: &InstrumentDescriptor<'_>,
        _options: InstrumentOptions,
    ) -> Arc<dyn Counter> {
        Arc::new(self.instrument(descriptor))
    }

    fn gauge(
        &self,
        descriptor: &InstrumentDescriptor<'_>,
        _options: InstrumentOptions,
    ) -> Arc<dyn Gauge> {
        Arc::new(self.instrument(descriptor))
    }

    fn histogram(
        &self,
        descriptor: &InstrumentDescriptor<'_>,
        _options: InstrumentOptions,
    ) -> Arc<dyn Histogram> {
        Arc::new(self.instrument(descriptor))
    }

    fn observable_gauge(
        &self,
        descriptor: &InstrumentDescriptor<'_>,
        options: InstrumentOptions,
    ) -> Arc<dyn Gauge> {
        let instrument = self.instrument(descriptor);
        let (_, callback) = options.into_parts();
        if let Some(callback) = callback {
            self.callbacks.lock().unwrap().push(callback);
        }
        Arc::new(instrument)
    }
}

/// 把观测读数转写进账本的回执实现。
struct LedgerObserver(Arc<Mutex<Vec<(String, f64)>>>);

impl Observer for LedgerObserver {
    fn observe(&self, value: f64, _attributes: &[KeyValue]) {
        self.0.lock().unwrap().push(("observed".to_string(), value));
    }
}

/// 测试目标：三类仪表的记录路径全部落到后端账本。
///
/// 测试步骤：创建计数器/仪表盘/直方图各一，分别记录后核对账本。
/// 输入输出契约：账本条目按记录顺序排列，仪表名与取值原样透传。
#[test]
fn instruments_route_records_to_backend() {
    let meter = RecordingMeter::default();
    let counter = meter.counter(
        &InstrumentDescriptor::new("jobs.completed").with_unit(contract::UNIT_DIMENSIONLESS),
        InstrumentOptions::new(),
    );
    let gauge =
        meter.gauge(&InstrumentDescriptor::new("pool.size"), InstrumentOptions::new());
    let histogram = meter.histogram(
        &InstrumentDescriptor::new("job.duration").with_unit(contract::UNIT_MILLISECONDS),
        InstrumentOptions::new(),
    );

    counter.add(3.0, &[KeyValue::string("queue", "default")]);
    counter.increment(&[]);
    gauge.set(17.0, &[]);
    gauge.increment(2.0, &[]);
    gauge.decrement(1.0, &[]);
    histogram.record(12.5, &[]);

    let ledger = meter.ledger.lock().unwrap();
    assert_eq!(
        *ledger,
        vec![
            ("jobs.completed".to_string(), 3.0),
            ("jobs.completed".to_string(), 1.0),
            ("pool.size".to_string(), 17.0),
            ("pool.size".to_string(), 2.0),
            ("pool.size".to_string(), -1.0),
            ("job.duration".to_string(), 12.5),
        ],
        "账本应按记录顺序收录全部样本"
    );
}

/// 测试目标：异步仪表盘的创建期回调由后端的采集周期驱动。
#[test]
fn callbacks_fire_on_collection_cycle() {
    let meter = RecordingMeter::default();
    let _uptime = meter.observable_gauge(
        &InstrumentDescriptor::new("runtime.uptime"),
        InstrumentOptions::new().with_callback(Box::new(|observer| observer.observe(99.0, &[]))),
    );

    let observer = LedgerObserver(Arc::clone(&meter.ledger));
    assert!(meter.ledger.lock().unwrap().is_empty(), "采集前账本应为空");
    meter.collect(&observer);
    meter.collect(&observer);
    let ledger = meter.ledger.lock().unwrap();
    assert_eq!(ledger.len(), 2, "两次采集应各驱动回调一次");
    assert_eq!(ledger[0], ("observed".to_string(), 99.0), "回调读数应透传");
}

/// 测试目标：描述符与选项在 Meter 边界上各司其职。
#[test]
fn descriptor_and_options_cross_the_boundary() {
    let descriptor = InstrumentDescriptor::new("cache.hits")
        .with_description("缓存命中数")
        .with_unit("1");
    assert!(descriptor.validate().is_ok(), "合法描述符应通过校验");

    let options = InstrumentOptions::new()
        .with_attributes([KeyValue::string("tier", "l1"), KeyValue::string("region", "cn-north")])
        .with_attributes([KeyValue::string("tier", "l2")]);
    let (attributes, callback) = options.into_parts();
    assert_eq!(attributes.len(), 2, "按键合并应保留未被覆写的键");
    assert_eq!(attributes[0].key, "tier", "键的首现顺序应保持");
    assert_eq!(attributes[0].value.as_str(), "l2", "同键应以最后一次设置为准");
    assert_eq!(attributes[1].value.as_str(), "cn-north", "异键属性不应被丢弃");
    assert!(callback.is_none(), "未设置回调时拆解结果应为 None");
}
