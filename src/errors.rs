//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_seminar_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum SeminarError {
            $($variant(String),)*
        }

        impl SeminarError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(SeminarError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(SeminarError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(SeminarError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl SeminarError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        SeminarError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_seminar_errors! {
    Validation("E001", "Validation Error"),
    DuplicateUser("E002", "Duplicate User Error"),
    UserNotFound("E003", "User Not Found"),
    BadCredential("E004", "Bad Credential"),
    UnknownEvaluator("E005", "Unknown Evaluator"),
    PastSchedule("E006", "Past Schedule Error"),
    VenueConflict("E007", "Venue Conflict"),
    EvaluatorConflict("E008", "Evaluator Conflict"),
    SessionNotFound("E009", "Session Not Found"),
    SessionTaken("E010", "Session Taken"),
    SubmissionNotFound("E011", "Submission Not Found"),
    Persistence("E012", "Persistence Error"),
    Serialization("E013", "Serialization Error"),
    DateParse("E014", "Date Parse Error"),
    Authentication("E015", "Authentication Error"),
}

impl SeminarError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for SeminarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for SeminarError {}

// 为常见的错误类型实现 From trait
impl From<std::io::Error> for SeminarError {
    fn from(err: std::io::Error) -> Self {
        SeminarError::Persistence(err.to_string())
    }
}

impl From<serde_json::Error> for SeminarError {
    fn from(err: serde_json::Error) -> Self {
        SeminarError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for SeminarError {
    fn from(err: chrono::ParseError) -> Self {
        SeminarError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SeminarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(SeminarError::validation("test").code(), "E001");
        assert_eq!(SeminarError::duplicate_user("test").code(), "E002");
        assert_eq!(SeminarError::venue_conflict("test").code(), "E007");
        assert_eq!(SeminarError::persistence("test").code(), "E012");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            SeminarError::venue_conflict("test").error_type(),
            "Venue Conflict"
        );
        assert_eq!(
            SeminarError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = SeminarError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_format_simple() {
        let err = SeminarError::past_schedule("Cannot schedule a session in the past");
        let formatted = err.format_simple();
        assert!(formatted.contains("Past Schedule Error"));
        assert!(formatted.contains("in the past"));
    }
}
