//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// 必須列がCSVに存在しない
    #[error("Schema error: missing columns [{}]", .missing.join(", "))]
    Schema { missing: Vec<String> },

    /// 抽出対象レコードの数値列を整数に変換できない
    #[error("Conversion error: line {line}, column {column}: {value:?} is not an integer")]
    Conversion {
        line: usize,
        column: &'static str,
        value: String,
    },
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_schema() {
        let error = Error::Schema {
            missing: vec!["台番".to_string(), "差枚".to_string()],
        };
        let display = format!("{}", error);
        assert_eq!(display, "Schema error: missing columns [台番, 差枚]");
    }

    #[test]
    fn test_error_display_conversion() {
        let error = Error::Conversion {
            line: 4,
            column: "G数",
            value: "abc".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("line 4"));
        assert!(display.contains("G数"));
        assert!(display.contains("\"abc\""));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::Schema { missing: vec!["BB".to_string()] };
        let debug = format!("{:?}", error);
        assert!(debug.contains("Schema"));
        assert!(debug.contains("BB"));
    }
}
