//! Browser detection and the plan-b Safari heuristic
//!
//! Safari 12.1 may negotiate with either plan-b or unified-plan SDP depending
//! on user settings. Builds whose `RTCRtpTransceiver` lacks `currentDirection`
//! are treated as plan-b; every other browser is unified-plan.

use super::environment::HostEnvironment;
use super::parse::parse_leading_int;
use crate::error::{SupportError, SupportResult};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Names reported for Safari on macOS and iOS.
pub const SAFARI_NAMES: [&str; 2] = ["safari", "ios"];

const VERSION_PARTS: usize = 3;

/// Ordered user-agent rules, first match wins. Capture 1 is the version.
const RULES: &[(&str, &str)] = &[
    ("aol", r"AOLShield/([0-9._]+)"),
    ("edge", r"Edge/([0-9._]+)"),
    ("edge-ios", r"EdgiOS/([0-9._]+)"),
    ("yandexbrowser", r"YaBrowser/([0-9._]+)"),
    ("kakaotalk", r"KAKAOTALK\s([0-9.]+)"),
    ("samsung", r"SamsungBrowser/([0-9.]+)"),
    ("silk", r"\bSilk/([0-9._-]+)\b"),
    ("miui", r"MiuiBrowser/([0-9.]+)$"),
    ("beaker", r"BeakerBrowser/([0-9.]+)"),
    ("edge-chromium", r"EdgA?/([0-9.]+)"),
    // Opera carries a Chrome token too, so it has to be tried first.
    ("opera", r"OPR/([0-9.]+)(?:\s|$)"),
    ("chromium-webview", r"wv\).*Chrom(?:e|ium)/([0-9.]+)(?:\s|$)"),
    ("chrome", r"Chrom(?:e|ium)/([0-9.]+)(?:\s|$)"),
    ("phantomjs", r"PhantomJS/([0-9.]+)(?:\s|$)"),
    ("crios", r"CriOS/([0-9.]+)(?:\s|$)"),
    ("firefox", r"Firefox/([0-9.]+)(?:\s|$)"),
    ("fxios", r"FxiOS/([0-9.]+)"),
    ("opera-mini", r"Opera Mini.*Version/([0-9.]+)"),
    ("opera", r"Opera/([0-9.]+)(?:\s|$)"),
    ("pie", r"^Microsoft Pocket Internet Explorer/(\d+\.\d+)$"),
    (
        "pie",
        r"^Mozilla/\d\.\d+\s\(compatible;\s(?:MSP?IE|MSInternet Explorer) (\d+\.\d+);.*Windows CE.*\)$",
    ),
    ("netfront", r"^Mozilla/\d\.\d+.*NetFront/(\d.\d)"),
    ("ie", r"Trident/7\.0.*rv:([0-9.]+).*\).*Gecko$"),
    ("ie", r"MSIE\s([0-9.]+);.*Trident/[4-7]\.0"),
    ("ie", r"MSIE\s(7\.0)"),
    ("bb10", r"BB10;\sTouch.*Version/([0-9.]+)"),
    ("android", r"Android\s([0-9.]+)"),
    ("ios", r"Version/([0-9._]+).*Mobile.*Safari.*"),
    ("safari", r"Version/([0-9._]+).*Safari"),
    ("facebook", r"FB[AS]V/([0-9.]+)"),
    ("instagram", r"Instagram\s([0-9.]+)"),
    ("ios-webview", r"AppleWebKit/([0-9.]+).*Mobile"),
    ("ios-webview", r"AppleWebKit/([0-9.]+).*Gecko\)$"),
    ("curl", r"^curl/([0-9.]+)$"),
];

/// Crawlers carry no usable version; tried after every browser rule.
pub const SEARCHBOT: &str = "searchbot";

static SEARCHBOT_RULE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"alexa|bot|crawl(?:er|ing)|facebookexternalhit|feedburner|google web preview|nagios|postrank|pingdom|slurp|spider|yahoo!|yandex",
    )
    .expect("searchbot rule")
});

static COMPILED_RULES: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    RULES
        .iter()
        .map(|(name, pattern)| (*name, Regex::new(pattern).expect("user agent rule")))
        .collect()
});

static VERSION_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[._]{1,2}").expect("version separator"));

/// Browser name plus the three leading version components.
///
/// A component that is missing or not numeric is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserInfo {
    pub name: String,
    pub major: Option<u32>,
    pub minor: Option<u32>,
    pub patch: Option<u32>,
}

impl BrowserInfo {
    /// Split a dotted version (`"12.1.0"`) into its components.
    pub fn from_version(name: impl Into<String>, version: &str) -> Self {
        let mut parts = version.split('.').map(|part| {
            parse_leading_int(part).and_then(|n| u32::try_from(n).ok())
        });
        Self {
            name: name.into(),
            major: parts.next().flatten(),
            minor: parts.next().flatten(),
            patch: parts.next().flatten(),
        }
    }

    pub fn is_safari(&self) -> bool {
        SAFARI_NAMES.contains(&self.name.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SdpSemantics {
    PlanB,
    UnifiedPlan,
}

impl SdpSemantics {
    pub fn as_str(&self) -> &'static str {
        match self {
            SdpSemantics::PlanB => "plan-b",
            SdpSemantics::UnifiedPlan => "unified-plan",
        }
    }
}

/// Match `ua` against the rule table. Returns the browser name and a
/// three-part dotted version (short versions are padded with `0`).
/// Search bots come back as [`SEARCHBOT`] with an empty version.
pub fn parse_user_agent(ua: &str) -> Option<(&'static str, String)> {
    COMPILED_RULES
        .iter()
        .find_map(|(name, re)| {
            let raw = re.captures(ua)?.get(1)?.as_str();
            let mut parts: Vec<&str> = VERSION_SEPARATOR.split(raw).take(VERSION_PARTS).collect();
            parts.resize(VERSION_PARTS, "0");
            Some((*name, parts.join(".")))
        })
        .or_else(|| SEARCHBOT_RULE.is_match(ua).then(|| (SEARCHBOT, String::new())))
}

pub fn is_secure_protocol(protocol: &str) -> bool {
    protocol == "https:"
}

/// Whether the current origin is served over https.
pub fn is_secure(env: &impl HostEnvironment) -> bool {
    env.protocol().map(|p| is_secure_protocol(&p)).unwrap_or(false)
}

pub fn detect_browser(env: &impl HostEnvironment) -> SupportResult<BrowserInfo> {
    let ua = env
        .user_agent()
        .ok_or_else(|| SupportError::Detection("no user agent".into()))?;
    let (name, version) = parse_user_agent(&ua)
        .ok_or_else(|| SupportError::Detection(format!("unrecognised user agent: {}", ua)))?;
    let info = BrowserInfo::from_version(name, &version);
    tracing::debug!(name = %info.name, %version, "browser detected");
    Ok(info)
}

/// True only for Safari (macOS or iOS) without per-transceiver direction
/// support. An undetectable browser is not Safari.
pub fn is_plan_b_safari(env: &impl HostEnvironment) -> bool {
    match detect_browser(env) {
        Ok(info) if info.is_safari() => !env.transceiver_has_current_direction(),
        Ok(_) => false,
        Err(e) => {
            tracing::debug!("plan-b check skipped: {}", e);
            false
        }
    }
}

pub fn sdp_semantics(env: &impl HostEnvironment) -> SdpSemantics {
    if is_plan_b_safari(env) {
        SdpSemantics::PlanB
    } else {
        SdpSemantics::UnifiedPlan
    }
}
