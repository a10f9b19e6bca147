use std::time::Duration;

use super::TokenClaims;

/// Extract the token from an `Authorization` header value.
///
/// Only the `Bearer` scheme is accepted and the token must be non-empty.
pub fn bearer_token(header_value: &str) -> Option<&str> {
    header_value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Build the claims for a token issued to `username` at `issued_at`.
///
/// Without a TTL the token carries no `exp` claim.
pub fn claims_for(username: &str, issued_at: u64, ttl: Option<Duration>) -> TokenClaims {
    TokenClaims {
        username: username.to_string(),
        iat: Some(issued_at),
        exp: ttl.map(|ttl| issued_at.saturating_add(ttl.as_secs())),
    }
}

/// Check if a token has expired at `now` (seconds since the Unix epoch).
pub fn is_token_expired(claims: &TokenClaims, now: u64) -> bool {
    claims.exp.is_some_and(|exp| exp <= now)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_token_extracts_token() {
        assert_eq!(bearer_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
    }

    #[test]
    fn bearer_token_rejects_other_schemes() {
        assert_eq!(bearer_token("Basic cmFodWw6cmFodWwxMjM="), None);
        assert_eq!(bearer_token("bearer abc"), None);
        assert_eq!(bearer_token("abc.def.ghi"), None);
    }

    #[test]
    fn bearer_token_rejects_empty_token() {
        assert_eq!(bearer_token("Bearer "), None);
        assert_eq!(bearer_token("Bearer    "), None);
        assert_eq!(bearer_token("Bearer"), None);
    }

    #[test]
    fn claims_without_ttl_have_no_expiry() {
        let claims = claims_for("rahul", 1_700_000_000, None);
        assert_eq!(claims.username, "rahul");
        assert_eq!(claims.iat, Some(1_700_000_000));
        assert_eq!(claims.exp, None);
        assert!(!is_token_expired(&claims, u64::MAX));
    }

    #[test]
    fn claims_with_ttl_expire() {
        let claims = claims_for("rahul", 1_000, Some(Duration::from_secs(60)));
        assert_eq!(claims.exp, Some(1_060));
        assert!(!is_token_expired(&claims, 1_059));
        assert!(is_token_expired(&claims, 1_060));
    }

    #[test]
    fn claims_without_exp_serialize_without_the_field() {
        let json = serde_json::to_value(claims_for("rahul", 5, None)).unwrap();
        assert_eq!(json, serde_json::json!({ "username": "rahul", "iat": 5 }));
    }
}
