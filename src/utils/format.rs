//! # 字节数与节省率格式化
//!
//! 报告中所有数字的渲染规则。
//!
//! ## 规则
//! - 字节数: 以 1024 为基，在 Bytes/KB/MB 中取使数值 >= 1 的
//!   最大单位，保留两位小数并去掉末尾的零；0 特判为 "0 Bytes"
//! - 节省率: `(original - converted) / original * 100`，保留一位
//!   小数；original 为 0 时按 0.0% 处理
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用

const KB: u64 = 1024;
const MB: u64 = KB * KB;

/// 把字节数渲染为人类可读的 `"<数值> <单位>"`
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let (value, unit) = if bytes < KB {
        (bytes as f64, "Bytes")
    } else if bytes < MB {
        (bytes as f64 / KB as f64, "KB")
    } else {
        (bytes as f64 / MB as f64, "MB")
    };

    // 两位小数，f64 的 Display 会自动去掉末尾的零
    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, unit)
}

/// 计算节省百分比，保留一位小数
///
/// `original == 0` 时公式未定义，约定返回 0.0。
pub fn savings_percent(original: u64, converted: u64) -> f64 {
    if original == 0 {
        return 0.0;
    }
    let pct = (original as f64 - converted as f64) / original as f64 * 100.0;
    (pct * 10.0).round() / 10.0
}

/// 渲染节省百分比，如 `"25.0%"`
pub fn format_savings(original: u64, converted: u64) -> String {
    format!("{:.1}%", savings_percent(original, converted))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes_fixed_points() {
        assert_eq!(format_bytes(0), "0 Bytes");
        assert_eq!(format_bytes(1024), "1 KB");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(1048576), "1 MB");
    }

    #[test]
    fn test_format_bytes_sub_kilobyte() {
        assert_eq!(format_bytes(1), "1 Bytes");
        assert_eq!(format_bytes(500), "500 Bytes");
        assert_eq!(format_bytes(1023), "1023 Bytes");
    }

    #[test]
    fn test_format_bytes_rounding() {
        // 1126 / 1024 = 1.0996... -> 1.1
        assert_eq!(format_bytes(1126), "1.1 KB");
        // 2621440 / 1048576 = 2.5
        assert_eq!(format_bytes(2621440), "2.5 MB");
    }

    #[test]
    fn test_format_bytes_caps_at_megabytes() {
        // 2 GB 仍然以 MB 渲染
        assert_eq!(format_bytes(2 * 1024 * MB), "2048 MB");
    }

    #[test]
    fn test_savings_percent() {
        assert_eq!(format_savings(1000, 750), "25.0%");
        assert_eq!(format_savings(3, 2), "33.3%");
        assert_eq!(format_savings(100, 100), "0.0%");
    }

    #[test]
    fn test_savings_percent_zero_original_guarded() {
        assert_eq!(savings_percent(0, 0), 0.0);
        assert_eq!(format_savings(0, 100), "0.0%");
    }

    #[test]
    fn test_savings_percent_can_be_negative() {
        // 转换后变大时报告负节省，而不是吞掉
        assert_eq!(format_savings(100, 150), "-50.0%");
    }
}
