//! Utility Test Suite: validation, random ids, buffers, browser detection
//!
//! These tests verify the public API as a signaling layer would use it:
//! 1. Peer id / API key checks
//! 2. Random id shape and token variability
//! 3. Buffer reassembly
//! 4. Browser detection through a HostEnvironment
//! 5. plan-b Safari heuristic and SDP semantics

use rtc_support::{
    detect_browser, is_plan_b_safari, is_secure, join_array_buffers, random_id, random_token,
    sdp_semantics, validate_id, validate_key, BrowserInfo, HostEnvironment, SdpSemantics,
    StaticEnvironment, SupportError, Validation,
};
use serde_json::json;
use std::collections::HashSet;

const SAFARI_12_1: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_14_4) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/12.1 Safari/605.1.15";
const SAFARI_IOS_12: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 12_1 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/12.0 Mobile/15E148 Safari/604.1";
const CHROME_ANDROID: &str = "Mozilla/5.0 (Linux; Android 10; K) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Mobile Safari/537.36";
const FIREFOX: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:109.0) Gecko/20100101 Firefox/115.0";
const CRIOS: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 16_5 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) CriOS/114.0.5735.124 Mobile/15E148 Safari/604.1";

#[test]
fn peer_ids() {
    assert_eq!(validate_id(""), Validation::Empty);
    assert!(validate_id("abc_def-01").is_valid());
    assert!(validate_id("my peer").is_valid());
    assert!(!validate_id("!!!").is_valid());
    assert!(!validate_id("peer@host").is_valid());
}

#[test]
fn api_keys() {
    assert!(validate_key("abcd1234-ab12-ab12-ab12-abcdef123456").is_valid());
    assert!(validate_key("").is_valid());
    assert!(!validate_key("not-a-key").is_valid());
}

#[test]
fn random_ids_are_fixed_width() {
    let ids: HashSet<String> = (0..200).map(|_| random_id()).collect();
    for id in &ids {
        assert_eq!(id.len(), 16);
        assert!(id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }
    assert!(ids.len() > 190);
}

#[test]
fn random_tokens_are_base36() {
    for _ in 0..100 {
        let token = random_token();
        assert!(token.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }
}

#[test]
fn buffers_join_in_order() {
    let chunks: [&[u8]; 2] = [&[1, 2, 3], &[4, 5]];
    assert_eq!(join_array_buffers(&chunks), vec![1, 2, 3, 4, 5]);

    let empty: Vec<Vec<u8>> = Vec::new();
    assert!(join_array_buffers(&empty).is_empty());
}

#[test]
fn detect_safari_and_serialize() {
    let env = StaticEnvironment::new().with_user_agent(SAFARI_12_1);
    let info = detect_browser(&env).expect("safari detected");
    assert_eq!(info, BrowserInfo { name: "safari".into(), major: Some(12), minor: Some(1), patch: Some(0) });
    assert_eq!(
        serde_json::to_value(&info).unwrap(),
        json!({"name": "safari", "major": 12, "minor": 1, "patch": 0})
    );
}

#[test]
fn detect_other_browsers() {
    let cases = [
        (CHROME_ANDROID, "chrome", Some(114)),
        (FIREFOX, "firefox", Some(115)),
        (CRIOS, "crios", Some(114)),
        (SAFARI_IOS_12, "ios", Some(12)),
    ];
    for (ua, name, major) in cases {
        let info = detect_browser(&StaticEnvironment::new().with_user_agent(ua)).expect(name);
        assert_eq!(info.name, name);
        assert_eq!(info.major, major);
    }
}

#[test]
fn detection_failure_is_explicit() {
    let env = StaticEnvironment::new().with_user_agent("Wget/1.21");
    match detect_browser(&env) {
        Err(SupportError::Detection(msg)) => assert!(msg.contains("Wget")),
        other => panic!("expected detection error, got {other:?}"),
    }
}

#[test]
fn plan_b_only_for_legacy_safari() {
    let legacy_mac = StaticEnvironment::new().with_user_agent(SAFARI_12_1);
    let legacy_ios = StaticEnvironment::new().with_user_agent(SAFARI_IOS_12);
    assert!(is_plan_b_safari(&legacy_mac));
    assert!(is_plan_b_safari(&legacy_ios));
    assert_eq!(sdp_semantics(&legacy_mac), SdpSemantics::PlanB);

    let modern = legacy_mac.clone().with_current_direction(true);
    assert!(!is_plan_b_safari(&modern));
    assert_eq!(sdp_semantics(&modern), SdpSemantics::UnifiedPlan);

    for ua in [CHROME_ANDROID, FIREFOX, CRIOS] {
        let env = StaticEnvironment::new().with_user_agent(ua);
        assert!(!is_plan_b_safari(&env), "{ua}");
    }
}

/// Environment that panics if the capability flag is queried.
struct NoFlagQueries(StaticEnvironment);

impl HostEnvironment for NoFlagQueries {
    fn protocol(&self) -> Option<String> {
        self.0.protocol()
    }

    fn user_agent(&self) -> Option<String> {
        self.0.user_agent()
    }

    fn transceiver_has_current_direction(&self) -> bool {
        panic!("capability flag must not be consulted for non-Safari browsers")
    }
}

#[test]
fn plan_b_skips_flag_for_other_browsers() {
    let env = NoFlagQueries(StaticEnvironment::new().with_user_agent(FIREFOX));
    assert!(!is_plan_b_safari(&env));
    let undetected = NoFlagQueries(StaticEnvironment::new());
    assert!(!is_plan_b_safari(&undetected));
}

#[test]
fn secure_origin() {
    assert!(is_secure(&StaticEnvironment::new().with_protocol("https:")));
    assert!(!is_secure(&StaticEnvironment::new().with_protocol("http:")));

    let env = StaticEnvironment::new().with_protocol("https:");
    let by_ref: &dyn HostEnvironment = &env;
    assert!(is_secure(&by_ref));
}
