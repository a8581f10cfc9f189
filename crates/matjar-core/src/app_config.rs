#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// JSON endpoint serving the full product list.
    pub catalog_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Maximum suggestions returned by the search widget.
    pub suggestion_limit: usize,
    /// Public root of the static storefront, used for feed links.
    pub store_base_url: String,
    /// Shop phone number for WhatsApp order links.
    pub whatsapp_number: Option<String>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("catalog_url", &self.catalog_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("suggestion_limit", &self.suggestion_limit)
            .field("store_base_url", &self.store_base_url)
            .field(
                "whatsapp_number",
                &self.whatsapp_number.as_ref().map(|_| "[redacted]"),
            )
            .finish()
    }
}
