//! 严重级别阶梯的契约测试：数值编码、全序与档位归一化。

use lumen_api::Severity;

const ALL: [Severity; 24] = [
    Severity::Trace,
    Severity::Trace2,
    Severity::Trace3,
    Severity::Trace4,
    Severity::Debug,
    Severity::Debug2,
    Severity::Debug3,
    Severity::Debug4,
    Severity::Info,
    Severity::Info2,
    Severity::Info3,
    Severity::Info4,
    Severity::Warn,
    Severity::Warn2,
    Severity::Warn3,
    Severity::Warn4,
    Severity::Error,
    Severity::Error2,
    Severity::Error3,
    Severity::Error4,
    Severity::Fatal,
    Severity::Fatal2,
    Severity::Fatal3,
    Severity::Fatal4,
];

/// 测试目标：24 个级别的数值恰为 1..=24 且严格递增。
#[test]
fn numbers_are_dense_and_strictly_increasing() {
    for (index, severity) in ALL.iter().enumerate() {
        assert_eq!(severity.number(), index as i32 + 1, "数值应与阶梯位置一致");
    }
    for window in ALL.windows(2) {
        assert!(window[0] < window[1], "相邻级别应严格递增: {} < {}", window[0], window[1]);
    }
}

/// 测试目标：from_number 在全域上与 number 互逆，域外返回 None。
#[test]
fn from_number_is_inverse_on_domain() {
    for severity in ALL {
        assert_eq!(
            Severity::from_number(severity.number()),
            Some(severity),
            "from_number 应还原 {severity}"
        );
    }
    for out_of_range in [i32::MIN, -1, 0, 25, 100, i32::MAX] {
        assert_eq!(Severity::from_number(out_of_range), None, "域外数值应返回 None");
    }
}

/// 测试目标：档位归一化把每连续四级映射到同一基准名。
#[test]
fn bands_group_in_fours() {
    let expected_bands = ["TRACE", "DEBUG", "INFO", "WARN", "ERROR", "FATAL"];
    for (index, severity) in ALL.iter().enumerate() {
        assert_eq!(
            severity.band_str(),
            expected_bands[index / 4],
            "{severity} 的档位应为 {}",
            expected_bands[index / 4]
        );
    }
}

/// 测试目标：全名文本与变体命名规则一致且互不重复。
#[test]
fn display_names_are_unique() {
    let mut names: Vec<&str> = ALL.iter().map(|s| s.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), 24, "24 个级别的名称应互不重复");
    assert_eq!(Severity::Warn3.to_string(), "WARN3", "Display 应输出全名");
}
