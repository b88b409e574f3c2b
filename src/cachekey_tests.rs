// File: cachekey_tests.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

#[cfg(test)]
mod tests {
    use crate::cachekey::{decode, CacheKey, Ttl, TtlUnit};
    use crate::errors::CacheKeyError;
    use rstest::*;
    use std::time::Duration;

    #[test]
    fn test_decode_secure_with_query_string() {
        let key = decode("S/L/1/1/1m/www.mockorig.com/it/donna?test=1").unwrap();

        assert_eq!(key.secure_delivery_indicator(), "S");
        assert!(key.is_secure());
        assert_eq!(key.type_code(), 'L');
        assert_eq!(key.serial(), 1);
        assert_eq!(key.cp_code(), 1);
        assert_eq!(key.ttl().to_string(), "1m");
        assert_eq!(key.ttl().as_duration(), Duration::from_secs(60));
        assert_eq!(key.forward_path(), "www.mockorig.com/it/donna");
        assert_eq!(key.query_string(), Some("?test=1"));
    }

    #[test]
    fn test_decode_without_query_string() {
        let key = decode("S/L/8888/666666/3h/www.mockorig.com/it/donna").unwrap();

        assert_eq!(key.cp_code(), 666666);
        assert_eq!(key.serial(), 8888);
        assert_eq!(key.forward_path(), "www.mockorig.com/it/donna");
        assert_eq!(key.origin(), "www.mockorig.com/it/donna");
        assert_eq!(key.ttl(), "3h");
        assert_eq!(key.ttl().as_duration(), Duration::from_secs(3 * 3600));
        assert_eq!(key.query_string(), None);
    }

    #[test]
    fn test_decode_non_secure() {
        let key = decode("L/1/1/1m/www.mockorig.com/it/donna").unwrap();

        assert_eq!(key.secure_delivery_indicator(), "");
        assert!(!key.is_secure());
        assert_eq!(key.forward_path(), "www.mockorig.com/it/donna");
    }

    #[test]
    fn test_decode_non_secure_with_leading_slash() {
        let key = decode("/L/1/1/1m/www.mockorig.com/it/donna").unwrap();

        assert_eq!(key.secure_delivery_indicator(), "");
        assert!(!key.is_secure());
        assert_eq!(key.type_code(), 'L');
        assert_eq!(key.serial(), 1);
        assert_eq!(key.forward_path(), "www.mockorig.com/it/donna");
        assert_eq!(key.to_string(), "/L/1/1/1m/www.mockorig.com/it/donna");
    }

    #[rstest]
    #[case("//L/1/1/1m/www.mockorig.com")]
    #[case("S//L/1/1/1m/www.mockorig.com")]
    #[case("/S/L/1/1/1m/www.mockorig.com")]
    fn test_decode_rejects_doubled_prefix(#[case] input: &str) {
        assert!(decode(input).is_err());
    }

    #[test]
    fn test_decode_keeps_every_question_mark_in_query_string() {
        let key = decode("S/L/1/1/1m/www.mockorig.com?test=1?test=1").unwrap();

        assert_eq!(key.forward_path(), "www.mockorig.com");
        assert_eq!(key.query_string(), Some("?test=1?test=1"));
        assert!(!key.forward_path().contains('?'));
    }

    #[test]
    fn test_decode_bare_question_mark_is_empty_query() {
        let key = decode("L/2/3/4s/origin.example.com/a?").unwrap();
        assert_eq!(key.query_string(), Some("?"));
    }

    #[test]
    fn test_leading_zeros_are_normalized() {
        let key = decode("S/L/007/0042/010s/www.mockorig.com").unwrap();

        assert_eq!(key.serial(), 7);
        assert_eq!(key.cp_code(), 42);
        assert_eq!(key.ttl().value(), 10);
        assert_eq!(key.ttl().unit(), TtlUnit::Seconds);
        assert_eq!(key.to_string(), "S/L/7/42/10s/www.mockorig.com");
    }

    #[rstest]
    #[case("")]
    #[case("S/L/1/1/1/www.mockorig.com?test=1?test=1")]
    #[case("S/L/1/1/1d/www.mockorig.com")]
    #[case("S/L/1/1/1mm/www.mockorig.com")]
    #[case("S/L/1/1/m/www.mockorig.com")]
    #[case("S/L/a/1/1m/www.mockorig.com")]
    #[case("S/L/1/1x/1m/www.mockorig.com")]
    #[case("S/L/1/1/1m/")]
    #[case("S/L/1/1/1m")]
    #[case("S/L/1/1/1m/?test=1")]
    #[case("SL/1/1/1m/www.mockorig.com")]
    #[case("s/L/1/1/1m/www.mockorig.com")]
    #[case("S/T/1/1/1m/www.mockorig.com")]
    #[case("S/l/1/1/1m/www.mockorig.com")]
    #[case("S/L//1/1m/www.mockorig.com")]
    #[case("S/L/1/1m/www.mockorig.com")]
    #[case(" S/L/1/1/1m/www.mockorig.com")]
    #[case("X S/L/1/1/1m/www.mockorig.com")]
    #[case("S/L/١/1/1m/www.mockorig.com")]
    #[case("S/L/99999999999999999999999/1/1m/www.mockorig.com")]
    fn test_decode_rejects_malformed(#[case] input: &str) {
        assert_eq!(
            decode(input),
            Err(CacheKeyError::InvalidCacheKeyFormat(input.to_string()))
        );
    }

    #[rstest]
    #[case("S/L/1/1/1m/www.mockorig.com/it/donna?test=1")]
    #[case("S/L/8888/666666/3h/www.mockorig.com/it/donna")]
    #[case("L/1/1/1m/www.mockorig.com/it/donna")]
    #[case("/L/1/1/1m/www.mockorig.com")]
    #[case("L/12/345/6s/www.mockorig.com?a=1?b=2")]
    fn test_display_reproduces_input(#[case] input: &str) {
        let key = decode(input).unwrap();
        assert_eq!(key.to_string(), input);
    }

    #[test]
    fn test_decode_is_idempotent() {
        let input = "S/L/8888/666666/3h/www.mockorig.com/it/donna";
        assert_eq!(decode(input).unwrap(), decode(input).unwrap());
    }

    #[test]
    fn test_from_str_matches_decode() {
        let input = "S/L/8888/666666/3h/www.mockorig.com/it/donna";
        let parsed: CacheKey = input.parse().unwrap();
        assert_eq!(parsed, CacheKey::decode(input).unwrap());
    }

    #[rstest]
    #[case("30s", 30)]
    #[case("5m", 300)]
    #[case("3h", 10800)]
    fn test_ttl_resolves_to_duration(#[case] token: &str, #[case] secs: u64) {
        let ttl: Ttl = token.parse().unwrap();
        assert_eq!(ttl.as_duration(), Duration::from_secs(secs));
        assert_eq!(ttl.to_string(), token);
    }

    #[rstest]
    #[case("")]
    #[case("h")]
    #[case("3")]
    #[case("3d")]
    #[case("-3h")]
    fn test_ttl_rejects_malformed(#[case] token: &str) {
        assert!(token.parse::<Ttl>().is_err());
    }

    #[test]
    fn test_ttl_compares_with_raw_token() {
        let ttl = Ttl::new(3, TtlUnit::Hours);
        assert!(ttl == "3h");
        assert!(ttl == "03h");
        assert!(ttl != "3m");
        assert!(ttl != "garbage");
    }

    #[test]
    fn test_cache_key_serializes_ttl_as_token() {
        let key = decode("S/L/8888/666666/3h/www.mockorig.com/it/donna").unwrap();
        let json = serde_json::to_value(&key).unwrap();

        assert_eq!(json["ttl"], "3h");
        assert_eq!(json["cp_code"], 666666);
        assert_eq!(json["secure"], true);
        assert_eq!(json["query_string"], serde_json::Value::Null);
    }

    #[test]
    fn test_decode_from_many_threads() {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                std::thread::spawn(move || {
                    let input = format!("S/L/{}/{}/1m/www.mockorig.com", i, i * 10);
                    decode(&input).map(|key| (key.serial(), key.cp_code()))
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let i = i as u64;
            assert_eq!(handle.join().unwrap(), Ok((i, i * 10)));
        }
    }
}
