pub struct ApiKey(String);

impl From<&str> for ApiKey {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for ApiKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl ApiKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<redacted>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_from_str_creates_key() {
        let key_str = "mp_1234567890abcdefghijklmnopqrstuvwxyz";
        let key = ApiKey::from(key_str);

        assert_eq!(key.as_str(), key_str);
    }

    #[test]
    fn test_api_key_from_empty_string() {
        // An absent credential is a valid state, forwarded as-is
        let key = ApiKey::from("");

        assert_eq!(key.as_str(), "");
    }

    #[test]
    fn test_api_key_from_owned_string() {
        let key = ApiKey::from("owned_key_value".to_string());

        assert_eq!(key.as_str(), "owned_key_value");
    }

    #[test]
    fn test_api_key_from_str_with_special_characters() {
        let key_str = "key_!@#$%^&*()_+-=[]{}|;:',.<>?/~`";
        let key = ApiKey::from(key_str);

        assert_eq!(key.as_str(), key_str);
    }

    #[test]
    fn test_api_key_debug_redacts_value() {
        let sensitive_key = "mp_very_secret_key_do_not_log";
        let key = ApiKey::from(sensitive_key);

        let debug_output = format!("{key:?}");

        // Ensure the actual key value is not in the debug output
        assert_eq!(debug_output, "<redacted>");
        assert!(!debug_output.contains(sensitive_key));
        assert!(!debug_output.contains("mp_"));
        assert!(!debug_output.contains("secret"));
    }

    #[test]
    fn test_api_key_debug_does_not_expose_empty_key() {
        let key = ApiKey::from("");
        let debug_output = format!("{key:?}");

        assert_eq!(debug_output, "<redacted>");
    }
}
