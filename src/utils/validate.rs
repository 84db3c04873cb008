use once_cell::sync::Lazy;
use regex::Regex;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Invalid username regex"));

pub fn validate_username(username: &str) -> Result<(), &'static str> {
    // 用户名不能为空
    if username.trim().is_empty() {
        return Err("Username must not be empty");
    }
    // 用户名格式校验：只能包含字母、数字、下划线或连字符
    if !USERNAME_RE.is_match(username) {
        return Err("Username must contain only letters, numbers, underscores or hyphens");
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), &'static str> {
    // 密码不能为空，其余不作限制（注册表单只要求填写）
    if password.is_empty() {
        return Err("Password must not be empty");
    }
    Ok(())
}

/// 校验必填字段非空，返回带字段名的错误信息
pub fn validate_required(field_name: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field_name} is required"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_username() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("student1").is_ok());
        assert!(validate_username("eval_1-a").is_ok());
    }

    #[test]
    fn test_empty_username() {
        assert!(validate_username("").is_err());
        assert!(validate_username("   ").is_err());
    }

    #[test]
    fn test_username_with_invalid_chars() {
        assert!(validate_username("alice bob").is_err());
        assert!(validate_username("alice@host").is_err());
    }

    #[test]
    fn test_password_only_requires_non_empty() {
        assert!(validate_password("pw").is_ok());
        assert!(validate_password("pass").is_ok());
        assert!(validate_password("").is_err());
    }

    #[test]
    fn test_validate_required() {
        assert!(validate_required("Research title", "Quantum Widgets").is_ok());
        let err = validate_required("Research title", "  ").unwrap_err();
        assert!(err.contains("Research title"));
    }
}
