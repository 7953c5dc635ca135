//! 属性值模型的契约测试：类别判别、相等性等价关系与序列化形态。

use lumen_api::{KeyValue, Kind, Value};
use proptest::prelude::*;

fn value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::empty()),
        any::<bool>().prop_map(Value::bool),
        any::<i64>().prop_map(Value::int64),
        any::<f64>().prop_map(Value::float64),
        ".{0,8}".prop_map(Value::string),
        proptest::collection::vec(any::<u8>(), 0..8).prop_map(Value::bytes),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..4).prop_map(Value::slice),
            proptest::collection::vec(
                ("[a-z]{0,3}", inner).prop_map(|(k, v)| KeyValue::new(k, v)),
                0..4,
            )
            .prop_map(Value::map),
        ]
    })
}

/// 把值重建到全新的 owned 后备存储：与原值结构相等，但不共享任何缓冲区。
fn rebuild_with_fresh_storage(v: &Value) -> Value {
    match v {
        Value::Empty => Value::empty(),
        Value::Bool(b) => Value::bool(*b),
        Value::Int64(i) => Value::int64(*i),
        Value::Float64(f) => Value::float64(*f),
        Value::String(s) => Value::string(s.clone().into_owned()),
        Value::Bytes(b) => Value::bytes(b.clone().into_owned()),
        Value::Slice(items) => {
            Value::slice(items.iter().map(rebuild_with_fresh_storage).collect::<Vec<_>>())
        }
        Value::Map(entries) => Value::map(
            entries
                .iter()
                .map(|kv| {
                    KeyValue::new(kv.key.clone().into_owned(), rebuild_with_fresh_storage(&kv.value))
                })
                .collect::<Vec<_>>(),
        ),
    }
}

/// 取值碰撞概率足够高的小值池，让对称性/传递性检验能命中相等对。
fn pooled_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::empty()),
        Just(Value::bool(true)),
        Just(Value::int64(0)),
        Just(Value::int64(1)),
        Just(Value::float64(0.0)),
        Just(Value::float64(f64::NAN)),
        Just(Value::string("a")),
        Just(Value::bytes(&b"\x00"[..])),
        Just(Value::slice(vec![Value::int64(1)])),
        Just(Value::map(vec![KeyValue::int64("k", 1)])),
    ]
}

proptest! {
    /// 测试目标：相等性在任意嵌套值上自反（含 NaN 与任意字节串）。
    #[test]
    fn equality_is_reflexive(v in value_strategy()) {
        prop_assert_eq!(&v, &v, "任意值都应与自身相等");
    }

    /// 测试目标：相等性对称，任意两值的比较结果与比较方向无关。
    #[test]
    fn equality_is_symmetric(a in value_strategy(), b in value_strategy()) {
        prop_assert_eq!(a == b, b == a, "相等性判断不应依赖比较方向");
    }

    /// 测试目标：相等性在小值池上传递（池内碰撞频繁，相等对真实出现）。
    #[test]
    fn equality_is_transitive_over_pool(
        a in pooled_value(),
        b in pooled_value(),
        c in pooled_value(),
    ) {
        if a == b && b == c {
            prop_assert_eq!(a, c, "a == b 且 b == c 时应有 a == c");
        }
    }

    /// 测试目标：重建到全新后备存储的值与原值相等且传递成立。
    ///
    /// 重建两次得到三个互不共享缓冲区的值，链式断言同时覆盖
    /// "不同后备数组上的结构相等"与三元传递性。
    #[test]
    fn equality_holds_across_distinct_backing_storage(a in value_strategy()) {
        let b = rebuild_with_fresh_storage(&a);
        let c = rebuild_with_fresh_storage(&b);
        prop_assert_eq!(&a, &b, "重建值应与原值相等");
        prop_assert_eq!(&b, &c, "二次重建值应与一次重建值相等");
        prop_assert_eq!(&a, &c, "相等性应沿重建链传递");
    }

    /// 测试目标：克隆副本与原值相等且类别一致。
    #[test]
    fn clone_preserves_equality_and_kind(v in value_strategy()) {
        let copy = v.clone();
        prop_assert_eq!(copy.kind(), v.kind(), "克隆不应改变类别");
        prop_assert_eq!(copy, v, "克隆副本应与原值相等");
    }

    /// 测试目标：类别不同的值永不相等。
    #[test]
    fn distinct_kinds_never_compare_equal(a in value_strategy(), b in value_strategy()) {
        if a.kind() != b.kind() {
            prop_assert_ne!(a, b, "类别不同的值不应相等");
        }
    }
}

/// 测试目标：八种类别的判别标签跨 API 边界稳定可见。
#[test]
fn kind_discrimination_covers_all_variants() {
    let samples = [
        (Value::empty(), Kind::Empty),
        (Value::bool(false), Kind::Bool),
        (Value::int64(0), Kind::Int64),
        (Value::float64(0.0), Kind::Float64),
        (Value::string(""), Kind::String),
        (Value::bytes(&b""[..]), Kind::Bytes),
        (Value::slice(Vec::new()), Kind::Slice),
        (Value::map(Vec::new()), Kind::Map),
    ];
    for (value, expected) in samples {
        assert_eq!(value.kind(), expected, "构造函数与类别标签应一一对应");
    }
}

/// 测试目标：空复合值与空值占位判然有别。
#[test]
fn empty_composites_are_not_empty_value() {
    let slice = Value::slice(Vec::new());
    let map = Value::map(Vec::new());
    assert_ne!(slice, Value::empty(), "空列表不应等于空值");
    assert_ne!(map, Value::empty(), "空映射不应等于空值");
    assert!(!slice.is_empty(), "空列表的 is_empty 应为 false");
    assert!(Value::empty().is_empty(), "空值的 is_empty 应为 true");
}

/// 测试目标：嵌套结构的序列化往返保持相等（仅限有限浮点）。
#[test]
fn serde_round_trip_preserves_structure() {
    let original = Value::map(vec![
        KeyValue::string("service", "checkout"),
        KeyValue::slice("shards", vec![Value::int64(1), Value::int64(2)]),
        KeyValue::map("limits", vec![KeyValue::float64("qps", 250.0)]),
        KeyValue::bytes("token", &b"\x00\xff"[..]),
    ]);
    let encoded = serde_json::to_string(&original).expect("序列化应成功");
    let decoded: Value = serde_json::from_str(&encoded).expect("反序列化应成功");
    assert_eq!(decoded, original, "往返后结构应保持相等");
}

/// 测试目标：std_json 导出遵循文档化的渲染规则。
#[cfg(feature = "std_json")]
#[test]
fn to_json_follows_documented_rendering() {
    let value = Value::map(vec![
        KeyValue::string("name", "demo"),
        KeyValue::float64("nan", f64::NAN),
    ]);
    let json = value.to_json();
    assert_eq!(json["name"], serde_json::json!("demo"), "字符串应直出");
    assert!(json["nan"].is_null(), "NaN 超出 JSON 数值域应渲染为 null");
}
