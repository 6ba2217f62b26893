//! Request authentication — nonce, signature and EDAN header construction.
//!
//! ## Header contract
//!
//! Every call carries:
//!
//! | Header          | Value                                         |
//! |-----------------|-----------------------------------------------|
//! | `X-AppId`       | application id                                |
//! | `X-RequestDate` | `YYYY-MM-DD HH:MM:SS` in `America/New_York`   |
//! | `X-AppVersion`  | client version string                         |
//!
//! Signed (tier 1, "T2") calls additionally carry `X-Nonce` and
//! `X-AuthContent`, where
//!
//! ```text
//! X-AuthContent = base64( hex( sha1( nonce \n uri \n date \n secret ) ) )
//! ```
//!
//! The SHA-1 digest is hex-encoded *before* base64 encoding. The service
//! validates that exact form.

pub mod nonce;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::{DateTime, TimeZone, Utc};
use sha1::{Digest, Sha1};

use crate::error::EdanError;
use crate::network::{DEFAULT_APP_VERSION, REFERENCE_TIMEZONE};

pub use nonce::{generate_nonce, FixedNonce, NonceSource, RandomNonce, DEFAULT_NONCE_LENGTH};

pub const HEADER_APP_ID: &str = "X-AppId";
pub const HEADER_REQUEST_DATE: &str = "X-RequestDate";
pub const HEADER_APP_VERSION: &str = "X-AppVersion";
pub const HEADER_NONCE: &str = "X-Nonce";
pub const HEADER_AUTH_CONTENT: &str = "X-AuthContent";

/// `strftime` pattern of `X-RequestDate`.
pub const REQUEST_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Ordered `(name, value)` header pairs.
pub type SignedHeaders = Vec<(&'static str, String)>;

// ─── Tier ────────────────────────────────────────────────────────────────────

/// Authentication tier of the application key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tier {
    /// Tier type `1`: nonce + signature headers are sent.
    #[default]
    Signed,
    /// Any other tier type: identification headers only.
    Unsigned,
}

impl Tier {
    pub fn from_tier_type(tier_type: i64) -> Self {
        if tier_type == 1 {
            Self::Signed
        } else {
            Self::Unsigned
        }
    }

    pub fn tier_type(&self) -> i64 {
        match self {
            Self::Signed => 1,
            Self::Unsigned => 0,
        }
    }
}

// ─── Clock ───────────────────────────────────────────────────────────────────

/// Time source for `X-RequestDate`.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock stopped at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

// ─── Signature primitives ────────────────────────────────────────────────────

/// Render an instant as `X-RequestDate` in the reference timezone.
pub fn request_date<Z: TimeZone>(now: &DateTime<Z>) -> String {
    now.with_timezone(&REFERENCE_TIMEZONE)
        .format(REQUEST_DATE_FORMAT)
        .to_string()
}

/// `base64(hex(sha1(nonce \n uri \n date \n secret)))`.
pub fn signature(nonce: &str, uri: &str, date: &str, secret: &str) -> String {
    let auth = format!("{}\n{}\n{}\n{}", nonce, uri, date, secret);
    let digest = hex::encode(Sha1::digest(auth.as_bytes()));
    BASE64.encode(digest)
}

/// Build the EDAN headers for one call.
///
/// `nonce` is only consulted for [`Tier::Signed`]; unsigned calls omit the
/// signature headers entirely.
pub fn sign<Z: TimeZone>(
    app_id: &str,
    secret: &str,
    tier: Tier,
    uri: &str,
    now: &DateTime<Z>,
    app_version: &str,
    nonce: &str,
) -> SignedHeaders {
    let date = request_date(now);

    let mut headers: SignedHeaders = vec![
        (HEADER_APP_ID, app_id.to_string()),
        (HEADER_REQUEST_DATE, date.clone()),
        (HEADER_APP_VERSION, app_version.to_string()),
    ];

    if tier == Tier::Signed {
        headers.push((HEADER_NONCE, nonce.to_string()));
        headers.push((HEADER_AUTH_CONTENT, signature(nonce, uri, &date, secret)));
    }

    headers
}

// ─── RequestSigner ───────────────────────────────────────────────────────────

/// Signs outgoing calls for one application key.
///
/// Clock and nonce source are injectable so signatures can be reproduced.
pub struct RequestSigner {
    app_id: String,
    secret: String,
    tier: Tier,
    app_version: String,
    nonce_length: usize,
    clock: Box<dyn Clock>,
    nonces: Box<dyn NonceSource>,
}

impl RequestSigner {
    pub fn new(app_id: &str, secret: &str, tier: Tier) -> Self {
        Self {
            app_id: app_id.to_string(),
            secret: secret.to_string(),
            tier,
            app_version: DEFAULT_APP_VERSION.to_string(),
            nonce_length: DEFAULT_NONCE_LENGTH,
            clock: Box::new(SystemClock),
            nonces: Box::new(RandomNonce),
        }
    }

    pub fn app_version(mut self, version: &str) -> Self {
        self.app_version = version.to_string();
        self
    }

    pub fn nonce_length(mut self, length: usize) -> Self {
        self.nonce_length = length;
        self
    }

    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn nonce_source(mut self, source: impl NonceSource + 'static) -> Self {
        self.nonces = Box::new(source);
        self
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Headers for a call whose signed content is `uri`.
    pub fn sign(&self, uri: &str) -> Result<SignedHeaders, EdanError> {
        let nonce = match self.tier {
            Tier::Signed => self.nonces.nonce(self.nonce_length)?,
            Tier::Unsigned => String::new(),
        };
        let now = self.clock.now();
        tracing::debug!(tier = ?self.tier, "Signing EDAN request");
        Ok(sign(
            &self.app_id,
            &self.secret,
            self.tier,
            uri,
            &now,
            &self.app_version,
            &nonce,
        ))
    }
}

impl std::fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner")
            .field("app_id", &self.app_id)
            .field("tier", &self.tier)
            .field("app_version", &self.app_version)
            .field("nonce_length", &self.nonce_length)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_instant() -> DateTime<Utc> {
        // 2015-12-17 15:04:05 UTC == 10:04:05 in New York (EST, UTC-5)
        Utc.with_ymd_and_hms(2015, 12, 17, 15, 4, 5).unwrap()
    }

    fn header<'a>(headers: &'a SignedHeaders, name: &str) -> Option<&'a str> {
        headers
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_request_date_uses_reference_timezone() {
        assert_eq!(request_date(&fixed_instant()), "2015-12-17 10:04:05");
        // Daylight saving: UTC-4
        let summer = Utc.with_ymd_and_hms(2016, 7, 1, 12, 0, 0).unwrap();
        assert_eq!(request_date(&summer), "2016-07-01 08:00:00");
    }

    #[test]
    fn test_signature_is_base64_of_hex_sha1() {
        let sig = signature("abc123", "q=cats", "2015-12-17 10:04:05", "secret");
        let decoded = BASE64.decode(&sig).unwrap();
        let expected = hex::encode(Sha1::digest(
            b"abc123\nq=cats\n2015-12-17 10:04:05\nsecret",
        ));
        assert_eq!(decoded, expected.into_bytes());
        assert_eq!(decoded.len(), 40);
    }

    #[test]
    fn test_signature_is_deterministic() {
        let a = signature("n0nce", "uri", "2015-01-01 00:00:00", "k");
        let b = signature("n0nce", "uri", "2015-01-01 00:00:00", "k");
        assert_eq!(a, b);
        let c = signature("n0ncf", "uri", "2015-01-01 00:00:00", "k");
        assert_ne!(a, c);
    }

    #[test]
    fn test_signed_headers_order_and_values() {
        let headers = sign(
            "APP",
            "secret",
            Tier::Signed,
            "q=cats",
            &fixed_instant(),
            DEFAULT_APP_VERSION,
            "0123456789abcde",
        );
        let names: Vec<_> = headers.iter().map(|(n, _)| *n).collect();
        assert_eq!(
            names,
            vec![
                HEADER_APP_ID,
                HEADER_REQUEST_DATE,
                HEADER_APP_VERSION,
                HEADER_NONCE,
                HEADER_AUTH_CONTENT
            ]
        );
        assert_eq!(header(&headers, HEADER_APP_ID), Some("APP"));
        assert_eq!(header(&headers, HEADER_APP_VERSION), Some("EDANInterface-0.10.1"));
        assert_eq!(header(&headers, HEADER_NONCE), Some("0123456789abcde"));
        assert_eq!(
            header(&headers, HEADER_AUTH_CONTENT).map(str::to_string),
            Some(signature(
                "0123456789abcde",
                "q=cats",
                "2015-12-17 10:04:05",
                "secret"
            ))
        );
    }

    #[test]
    fn test_unsigned_tier_omits_signature_headers() {
        let headers = sign(
            "APP",
            "secret",
            Tier::Unsigned,
            "q=cats",
            &fixed_instant(),
            DEFAULT_APP_VERSION,
            "",
        );
        assert_eq!(headers.len(), 3);
        assert!(header(&headers, HEADER_NONCE).is_none());
        assert!(header(&headers, HEADER_AUTH_CONTENT).is_none());
    }

    #[test]
    fn test_tier_from_type() {
        assert_eq!(Tier::from_tier_type(1), Tier::Signed);
        assert_eq!(Tier::from_tier_type(0), Tier::Unsigned);
        assert_eq!(Tier::from_tier_type(2), Tier::Unsigned);
    }

    #[test]
    fn test_request_signer_is_reproducible_with_injected_sources() {
        let signer = RequestSigner::new("APP", "secret", Tier::Signed)
            .clock(FixedClock(fixed_instant()))
            .nonce_source(FixedNonce("zyxwvutsrqponml".to_string()));
        let first = signer.sign("objectGroupId=1").unwrap();
        let second = signer.sign("objectGroupId=1").unwrap();
        assert_eq!(first, second);
        assert_eq!(header(&first, HEADER_NONCE), Some("zyxwvutsrqponml"));
    }

    #[test]
    fn test_request_signer_random_nonce_length() {
        let signer = RequestSigner::new("APP", "secret", Tier::Signed).nonce_length(20);
        let headers = signer.sign("").unwrap();
        assert_eq!(header(&headers, HEADER_NONCE).map(str::len), Some(20));
    }

    #[test]
    fn test_debug_does_not_leak_secret() {
        let signer = RequestSigner::new("APP", "top-secret", Tier::Signed);
        assert!(!format!("{:?}", signer).contains("top-secret"));
    }
}
