// Copyright 2025 RustFS Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use snafu::{ResultExt, Snafu};
use strum::IntoStaticStr;

/// Only algorithm accepted for both issuing and validating tokens.
pub const ALGORITHM: Algorithm = Algorithm::HS256;

/// Lifetime of every issued token.
pub fn token_ttl() -> Duration {
    Duration::hours(24)
}

/// Token claims
///
/// The server never stores these; everything it needs to authorize a
/// request travels inside the signed token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Role flag, always `true` for issued tokens
    pub admin: bool,
    /// Expiry (Unix timestamp, seconds)
    pub exp: i64,
}

impl Claims {
    /// Admin claims expiring [`token_ttl`] after `now`.
    pub fn admin(now: DateTime<Utc>) -> Self {
        Self {
            admin: true,
            exp: (now + token_ttl()).timestamp(),
        }
    }
}

/// Token could not be signed.
#[derive(Debug, Snafu)]
#[snafu(display("failed to sign token: {}", source))]
pub struct IssueError {
    source: jsonwebtoken::errors::Error,
}

/// Reasons a presented token is refused.
///
/// Callers log the kind but answer every variant with the same
/// unauthorized response.
#[derive(Debug, Snafu, IntoStaticStr)]
#[snafu(visibility(pub(crate)))]
#[strum(serialize_all = "snake_case")]
pub enum AuthError {
    #[snafu(display("authorization token not found"))]
    MissingToken,

    #[snafu(display("malformed token: {}", reason))]
    MalformedToken { reason: String },

    #[snafu(display("token signature rejected: {}", reason))]
    BadSignature { reason: String },

    #[snafu(display("token expired at {}", exp))]
    Expired { exp: i64 },
}

impl AuthError {
    /// Stable snake_case name used in logs.
    pub fn kind(&self) -> &'static str {
        self.into()
    }
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        let reason = err.to_string();
        match err.kind() {
            ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                AuthError::BadSignature { reason }
            }
            _ => AuthError::MalformedToken { reason },
        }
    }
}

/// Issues and validates HS256 tokens with a single shared secret.
///
/// The same instance holds both halves of the key, so issuance and
/// verification can never drift apart.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(ALGORITHM);
        // Expiry is checked against the injected clock in `validate`.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Sign a fresh admin token valid for 24 hours from `now`.
    pub fn issue(&self, now: DateTime<Utc>) -> Result<String, IssueError> {
        encode(&Header::new(ALGORITHM), &Claims::admin(now), &self.encoding_key).context(IssueSnafu)
    }

    /// Verify signature and algorithm, then require `exp > now`.
    pub fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, AuthError> {
        if token.is_empty() {
            return MissingTokenSnafu.fail();
        }

        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)?.claims;

        if claims.exp <= now.timestamp() {
            return ExpiredSnafu { exp: claims.exp }.fail();
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn issued_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_issue_then_validate_within_window() {
        let service = TokenService::new(b"secret");
        let token = service.issue(issued_at()).unwrap();

        for offset in [Duration::zero(), Duration::hours(1), Duration::hours(24) - Duration::seconds(1)] {
            let claims = service.validate(&token, issued_at() + offset).unwrap();
            assert!(claims.admin);
            assert_eq!(claims.exp, issued_at().timestamp() + 24 * 3600);
        }
    }

    #[test]
    fn test_token_has_three_parts() {
        let token = TokenService::new(b"secret").issue(issued_at()).unwrap();
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_expired_at_and_after_ttl() {
        let service = TokenService::new(b"secret");
        let token = service.issue(issued_at()).unwrap();

        for offset in [Duration::hours(24), Duration::hours(25), Duration::days(30)] {
            let err = service.validate(&token, issued_at() + offset).unwrap_err();
            assert!(matches!(err, AuthError::Expired { .. }), "got {err:?}");
            assert_eq!(err.kind(), "expired");
        }
    }

    #[test]
    fn test_other_secret_is_bad_signature() {
        let token = TokenService::new(b"another-secret").issue(issued_at()).unwrap();
        let err = TokenService::new(b"secret")
            .validate(&token, issued_at())
            .unwrap_err();
        assert!(matches!(err, AuthError::BadSignature { .. }), "got {err:?}");
        assert_eq!(err.kind(), "bad_signature");
    }

    #[test]
    fn test_other_algorithm_rejected() {
        let token = encode(
            &Header::new(Algorithm::HS384),
            &Claims::admin(issued_at()),
            &EncodingKey::from_secret(b"secret"),
        )
        .unwrap();

        let err = TokenService::new(b"secret")
            .validate(&token, issued_at())
            .unwrap_err();
        assert!(matches!(err, AuthError::BadSignature { .. }), "got {err:?}");
    }

    #[test]
    fn test_none_algorithm_rejected() {
        // {"alg":"none","typ":"JWT"}.{"admin":true,"exp":4102444800}.
        let token = "eyJhbGciOiJub25lIiwidHlwIjoiSldUIn0.eyJhZG1pbiI6dHJ1ZSwiZXhwIjo0MTAyNDQ0ODAwfQ.";
        let result = TokenService::new(b"secret").validate(token, issued_at());
        assert!(result.is_err());
    }

    #[test]
    fn test_garbage_is_malformed() {
        let service = TokenService::new(b"secret");
        for token in ["not-a-token", "a.b.c", "...."] {
            let err = service.validate(token, issued_at()).unwrap_err();
            assert_eq!(err.kind(), "malformed_token", "token {token:?}");
        }
    }

    #[test]
    fn test_empty_token_is_missing() {
        let err = TokenService::new(b"secret")
            .validate("", issued_at())
            .unwrap_err();
        assert_eq!(err.kind(), "missing_token");
    }

    #[test]
    fn test_missing_exp_rejected() {
        #[derive(Serialize)]
        struct NoExpiry {
            admin: bool,
        }

        let token = encode(
            &Header::new(ALGORITHM),
            &NoExpiry { admin: true },
            &EncodingKey::from_secret(b"secret"),
        )
        .unwrap();

        let err = TokenService::new(b"secret")
            .validate(&token, issued_at())
            .unwrap_err();
        assert_eq!(err.kind(), "malformed_token");
    }
}
