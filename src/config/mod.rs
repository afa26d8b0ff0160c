//! Client configuration: target environment and account credentials.
//!
//! Credentials are an explicit value handed to the client at construction.
//! There is no process-wide credential state; two clients for the same
//! environment are fully independent.

/// Canada Post API environment.
///
/// Selects the gateway host and the request pretty-printing behavior
/// (development payloads are indented for log readability).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Environment {
    /// The certification/test gateway.
    Development,
    /// The live gateway.
    Production,
}

impl Environment {
    /// Gateway host for this environment.
    pub fn host(&self) -> &'static str {
        match self {
            Environment::Development => "ct.soa-gw.canadapost.ca",
            Environment::Production => "soa-gw.canadapost.ca",
        }
    }

    /// True for the certification/test environment.
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

/// Account credentials for the Canada Post web services.
///
/// `customer_number` identifies the account, `username`/`password` are the
/// API key pair used for basic auth, and `contract_number` is required for
/// Contract Shipping operations (shipment creation and void).
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub customer_number: String,
    pub username: String,
    pub password: String,
    pub contract_number: Option<String>,
}

impl Credentials {
    /// Create credentials without a contract number.
    pub fn new(
        customer_number: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Credentials {
            customer_number: customer_number.into(),
            username: username.into(),
            password: password.into(),
            contract_number: None,
        }
    }

    /// Attach the contract number used for Contract Shipping.
    pub fn with_contract(mut self, contract_number: impl Into<String>) -> Self {
        self.contract_number = Some(contract_number.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_hosts() {
        assert_eq!(Environment::Development.host(), "ct.soa-gw.canadapost.ca");
        assert_eq!(Environment::Production.host(), "soa-gw.canadapost.ca");
        assert!(Environment::Development.is_development());
        assert!(!Environment::Production.is_development());
    }

    #[test]
    fn test_credentials_contract() {
        let creds = Credentials::new("1234567", "user", "pass");
        assert!(creds.contract_number.is_none());

        let creds = creds.with_contract("42708517");
        assert_eq!(creds.contract_number.as_deref(), Some("42708517"));
    }
}
