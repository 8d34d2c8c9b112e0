//! Marketplace installation callbacks
//!
//! When a business installs the application, the vendor redirects to the
//! integrator with a signed query string. [`Application::validate`] checks
//! the signature and [`Application::create_auth_token`] turns the one-time
//! token into a Basic-Auth credential for the admin API.
//!
//! The vendor signs with MD5; the digest cannot be swapped without breaking
//! interoperability.

use std::collections::HashMap;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use cowork_domain::{ApplicationConfig, CoworkError, Result};
use md5::{Digest, Md5};
use tracing::warn;

/// Parameters of one installation callback. Single use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallationRequest {
    /// Public key of the application being installed (`a`).
    pub application_key: String,
    /// One-time installation token (`t`).
    pub token: String,
    /// Request time as sent by the vendor (`d`).
    pub request_time: String,
    /// Hex MD5 checksum over the sorted parameters (`h`).
    pub validation_hash: String,
    /// Subdomain of the installing business (`b`).
    pub subdomain: String,
    /// Email of the installing user (`e`).
    pub email: String,
}

impl InstallationRequest {
    /// Parse the callback query string (`a`, `t`, `d`, `h`, `b`, `e`).
    ///
    /// A leading `?` is accepted.
    ///
    /// # Errors
    /// Returns `CoworkError::InvalidInput` naming the first missing parameter.
    pub fn from_query(query: &str) -> Result<Self> {
        let query = query.strip_prefix('?').unwrap_or(query);
        let params: HashMap<String, String> =
            url::form_urlencoded::parse(query.as_bytes()).into_owned().collect();

        let take = |key: &str| {
            params.get(key).cloned().ok_or_else(|| {
                CoworkError::InvalidInput(format!("installation callback is missing '{key}'"))
            })
        };

        Ok(Self {
            application_key: take("a")?,
            token: take("t")?,
            request_time: take("d")?,
            validation_hash: take("h")?,
            subdomain: take("b")?,
            email: take("e")?,
        })
    }
}

/// Long-lived application identity configured by the integrator.
#[derive(Clone)]
pub struct Application {
    public_key: String,
    secret_key: String,
}

impl std::fmt::Debug for Application {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Application")
            .field("public_key", &self.public_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

impl Application {
    /// Identity from the key pair issued by the marketplace.
    pub fn new(public_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self { public_key: public_key.into(), secret_key: secret_key.into() }
    }

    /// Public half of the key pair.
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Check that a callback was issued for this application and signed with
    /// its secret.
    ///
    /// The key comparison happens first; no hash is computed for a request
    /// addressed to another application.
    ///
    /// # Errors
    /// Returns `CoworkError::Auth` if the application key or the checksum
    /// does not match.
    pub fn validate(&self, request: &InstallationRequest) -> Result<()> {
        if request.application_key != self.public_key {
            warn!(
                request_key = %request.application_key,
                configured_key = %self.public_key,
                "installation request addressed to another application"
            );
            return Err(CoworkError::Auth("Request parameters are not correct.".into()));
        }

        let expected = self.expected_hash(request);
        if !expected.eq_ignore_ascii_case(&request.validation_hash) {
            warn!(
                subdomain = %request.subdomain,
                "installation request checksum does not match"
            );
            return Err(CoworkError::Auth("Checksums don't match.".into()));
        }

        Ok(())
    }

    /// Basic-Auth credential for the installing business.
    ///
    /// Base64 of `{public_key}:{md5_hex(token + secret_key)}`; usable as the
    /// admin API key.
    pub fn create_auth_token(&self, request: &InstallationRequest) -> String {
        let password = md5_hex(&format!("{}{}", request.token, self.secret_key));
        STANDARD.encode(format!("{}:{}", self.public_key, password))
    }

    fn expected_hash(&self, request: &InstallationRequest) -> String {
        let mut params =
            [request.token.as_str(), request.application_key.as_str(), request.request_time.as_str()];
        params.sort_unstable();

        md5_hex(&format!("{}{}", params.join("|"), self.secret_key))
    }
}

impl From<&ApplicationConfig> for Application {
    fn from(config: &ApplicationConfig) -> Self {
        Self::new(config.public_key.clone(), config.secret_key.clone())
    }
}

fn md5_hex(input: &str) -> String {
    hex::encode(Md5::digest(input.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUBLIC_KEY: &str = "APPKEY-42";
    const SECRET_KEY: &str = "s3cr3t";

    fn signed_request() -> InstallationRequest {
        let token = "token-xyz";
        let time = "2017-06-01T12:00:00Z";
        // "2017..." < "APPKEY-42" < "token-xyz"
        let hash = md5_hex(&format!("{time}|{PUBLIC_KEY}|{token}{SECRET_KEY}"));

        InstallationRequest {
            application_key: PUBLIC_KEY.into(),
            token: token.into(),
            request_time: time.into(),
            validation_hash: hash,
            subdomain: "downtown".into(),
            email: "owner@example.com".into(),
        }
    }

    fn application() -> Application {
        Application::new(PUBLIC_KEY, SECRET_KEY)
    }

    #[test]
    fn md5_matches_known_vectors() {
        assert_eq!(md5_hex(""), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(md5_hex("abc"), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn accepts_correctly_signed_request() {
        assert_eq!(application().validate(&signed_request()), Ok(()));
    }

    #[test]
    fn hash_comparison_ignores_case() {
        let mut request = signed_request();
        request.validation_hash = request.validation_hash.to_uppercase();

        assert!(application().validate(&request).is_ok());
    }

    #[test]
    fn rejects_any_single_character_change() {
        let original = signed_request().validation_hash;

        for position in 0..original.len() {
            let mut chars: Vec<char> = original.chars().collect();
            chars[position] = if chars[position] == '0' { '1' } else { '0' };

            let mut request = signed_request();
            request.validation_hash = chars.into_iter().collect();

            let result = application().validate(&request);
            assert!(matches!(result, Err(CoworkError::Auth(_))), "position {position}");
        }
    }

    #[test]
    fn rejects_foreign_application_key_before_hashing() {
        let mut request = signed_request();
        request.application_key = "OTHER".into();
        // Also valid for "OTHER", so only the key check can fail it.
        request.validation_hash = md5_hex(&format!(
            "{}|OTHER|{}{SECRET_KEY}",
            request.request_time, request.token
        ));

        let err = application().validate(&request).unwrap_err();
        assert_eq!(err, CoworkError::Auth("Request parameters are not correct.".into()));
    }

    #[test]
    fn parameters_are_sorted_not_positional() {
        let mut request = signed_request();
        request.validation_hash = md5_hex(&format!(
            "{}|{}|{}{SECRET_KEY}",
            request.token, request.application_key, request.request_time
        ));

        assert!(application().validate(&request).is_err());
    }

    #[test]
    fn auth_token_encodes_public_key_and_password() {
        let mut request = signed_request();
        request.token = "a".into();
        let app = Application::new(PUBLIC_KEY, "bc");

        let token = app.create_auth_token(&request);
        let decoded = String::from_utf8(STANDARD.decode(token).unwrap()).unwrap();

        assert_eq!(decoded, format!("{PUBLIC_KEY}:900150983cd24fb0d6963f7d28e17f72"));
    }

    #[test]
    fn parses_callback_query() {
        let request = InstallationRequest::from_query(
            "?a=APPKEY-42&t=tok&d=2017-06-01T12%3A00%3A00Z&h=ABCDEF&b=downtown&e=owner%40example.com",
        )
        .unwrap();

        assert_eq!(request.application_key, "APPKEY-42");
        assert_eq!(request.token, "tok");
        assert_eq!(request.request_time, "2017-06-01T12:00:00Z");
        assert_eq!(request.validation_hash, "ABCDEF");
        assert_eq!(request.subdomain, "downtown");
        assert_eq!(request.email, "owner@example.com");
    }

    #[test]
    fn missing_parameter_is_reported() {
        let err = InstallationRequest::from_query("a=x&t=y&d=z&b=w&e=v").unwrap_err();
        assert_eq!(
            err,
            CoworkError::InvalidInput("installation callback is missing 'h'".into())
        );
    }

    #[test]
    fn debug_output_hides_secret() {
        let rendered = format!("{:?}", application());
        assert!(!rendered.contains(SECRET_KEY));
        assert!(rendered.contains(PUBLIC_KEY));
    }
}
