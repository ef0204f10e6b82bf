//! Builds Join API request URLs and per-action query-string payloads.
//!
//! The API takes everything as GET query parameters: a push is one
//! `sendPush` URL carrying the action's parameters plus the device id
//! and API key. Free-text values are percent-encoded with `+` for
//! spaces; the device id and API key are embedded as-is.

use crate::config::NotificationConfig;

/// Fixed Join REST access point.
pub const API_ACCESSPOINT: &str = "https://joinjoaomgcd.appspot.com/_ah/api/";

/// Percent-encode a free-text value for a query parameter, with spaces
/// as `+`.
pub fn encode(value: &str) -> String {
    urlencoding::encode(value).replace("%20", "+")
}

/// Push form: `<endpoint>messaging/v1/sendPush?<message>&deviceId=<id>&apikey=<key>`.
///
/// `message` must already be a fully encoded parameter string.
pub fn push_url(message: &str, device_id: &str, api_key: &str) -> String {
    format!("{API_ACCESSPOINT}messaging/v1/sendPush?{message}&deviceId={device_id}&apikey={api_key}")
}

/// List form: `<endpoint>registration/v1/listDevices?apikey=<key>`.
pub fn list_devices_url(api_key: &str) -> String {
    format!("{API_ACCESSPOINT}registration/v1/listDevices?apikey={api_key}")
}

/// Clipboard sync. `contents` is whatever the system clipboard held at
/// execution time.
pub fn clipboard_message(contents: &str) -> String {
    format!("&clipboard={}", encode(contents))
}

/// Notification payload from the configured appearance fields plus the
/// user's text. Icon, smallicon, priority and sound are passed through
/// unencoded.
pub fn notification_message(notif: &NotificationConfig, text: &str) -> String {
    format!(
        "title={}&text={}&icon={}&smallicon={}&priority={}&sound={}",
        encode(&notif.title),
        encode(text),
        notif.icon,
        notif.smallicon,
        notif.priority,
        notif.sound,
    )
}

/// Download (`&file=`) or open-website (`&url=`) payload. Inputs not
/// starting with `http` get an `https://` prefix first.
pub fn link_message(param: &str, input: &str) -> String {
    let url = if input.starts_with("http") {
        input.to_string()
    } else {
        format!("https://{input}")
    };
    format!("&{param}={}", encode(&url))
}

/// Ring-the-device payload; takes no user input.
pub fn find_message() -> String {
    "&find=true".to_string()
}

/// Text-to-speech payload.
///
/// An input of the form `!xx <text>` overrides the configured language
/// with the two-character code `xx`. The slicing is positional and
/// unvalidated: inputs shorter than four characters that start with
/// `!` produce an empty or truncated code and an empty message.
pub fn speak_message(default_language: &str, input: &str) -> String {
    let (language, text) = if input.starts_with('!') {
        (
            input.chars().skip(1).take(2).collect::<String>(),
            input.chars().skip(4).collect::<String>(),
        )
    } else {
        (default_language.to_string(), input.to_string())
    };
    format!("&language={language}&say={}", encode(&text))
}

/// Remote app launch payload.
pub fn app_message(input: &str) -> String {
    format!("&app={}", encode(input))
}
