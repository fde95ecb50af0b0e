//! View types for the status page template.
//!
//! These carry pre-formatted strings so the template stays simple.

use chrono::{DateTime, TimeZone};
use relsim_core::AppConfig;

const STABLE_COLOR: &str = "#4CAF50";
const CANARY_COLOR: &str = "#FF9800";

pub struct ChannelBanner {
    pub label: &'static str,
    pub background: &'static str,
}

impl ChannelBanner {
    pub fn for_config(config: &AppConfig) -> Self {
        if config.is_canary() {
            Self {
                label: "CANARY",
                background: CANARY_COLOR,
            }
        } else {
            Self {
                label: "STABLE",
                background: STABLE_COLOR,
            }
        }
    }
}

pub struct StatusView {
    pub version: String,
    pub banner: ChannelBanner,
    pub hostname: String,
    pub request_time: String,
}

impl StatusView {
    pub fn new<Tz: TimeZone>(config: &AppConfig, hostname: String, now: DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            version: config.version.clone(),
            banner: ChannelBanner::for_config(config),
            hostname,
            request_time: format_clock(&now),
        }
    }
}

/// `HH:MM:SS` in the timestamp's own zone.
pub fn format_clock<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format("%H:%M:%S").to_string()
}

/// Name of the machine serving the request, or empty if unavailable.
pub fn hostname() -> String {
    #[cfg(unix)]
    {
        let mut buf = [0u8; 256];
        // SAFETY: buf is valid for writes of buf.len() bytes.
        let rc = unsafe { libc::gethostname(buf.as_mut_ptr().cast(), buf.len()) };
        if rc == 0 {
            let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
            return String::from_utf8_lossy(&buf[..end]).into_owned();
        }
    }

    std::env::var("HOSTNAME")
        .or_else(|_| std::env::var("COMPUTERNAME"))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn config(channel: &str) -> AppConfig {
        AppConfig {
            channel: channel.to_string(),
            ..AppConfig::for_version("v1.2.0")
        }
    }

    #[test]
    fn stable_banner() {
        let banner = ChannelBanner::for_config(&config("stable"));
        assert_eq!(banner.label, "STABLE");
        assert_eq!(banner.background, "#4CAF50");
    }

    #[test]
    fn canary_banner() {
        let banner = ChannelBanner::for_config(&config("canary"));
        assert_eq!(banner.label, "CANARY");
        assert_eq!(banner.background, "#FF9800");
    }

    #[test]
    fn unknown_channel_renders_as_stable() {
        let banner = ChannelBanner::for_config(&config("beta"));
        assert_eq!(banner.label, "STABLE");
    }

    #[test]
    fn clock_is_zero_padded() {
        let t = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 3).unwrap();
        assert_eq!(format_clock(&t), "07:05:03");
    }

    #[test]
    fn view_copies_config() {
        let t = Utc.with_ymd_and_hms(2024, 3, 9, 23, 59, 59).unwrap();
        let view = StatusView::new(&config("canary"), "node-a".to_string(), t);
        assert_eq!(view.version, "v1.2.0");
        assert_eq!(view.hostname, "node-a");
        assert_eq!(view.request_time, "23:59:59");
        assert_eq!(view.banner.label, "CANARY");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn hostname_matches_kernel() {
        let kernel = std::fs::read_to_string("/proc/sys/kernel/hostname").unwrap();
        let name = hostname();
        assert!(!name.is_empty());
        assert_eq!(name, kernel.trim_end());
    }
}
