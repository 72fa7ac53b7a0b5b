//! # Messages
//!
//! Contains constant strings and format functions for user-facing messages.
//! Includes error messages, usage hints, and confirmation templates.

use std::time::Duration;

use crate::domain::error::RemoteError;

pub const ERROR_PREFIX: &str = "エラー: ";
pub const SCHEDULED_PREFIX: &str = "おすすめソング: ";
pub const SCHEDULED_ERROR_PREFIX: &str = "定期メッセージ: ";
pub const NO_SEARCH_RESULTS: &str = "検索結果が見つかりませんでした";

pub const KEYWORD_USAGE: &str = "キーワードが指定されていません。例: `!setkeyword J-Pop`";
pub const SEND_USAGE: &str = "メッセージが指定されていません。例: `!send 元気が出る曲`";
pub const INTERVAL_USAGE: &str = "フォーマットが正しくありません。例: `!setinterval 10 minutes`";
pub const INVALID_NUMBER: &str = "無効な数値です。1以上の数値を指定してください。";
pub const INVALID_UNIT: &str = "無効な単位です。`minutes`または`hours`を指定してください。";

pub fn channel_set(channel_id: &str) -> String {
    format!("このチャンネルを定期メッセージの送信先に設定しました！(ID: {channel_id})")
}

pub fn keyword_set(keyword: &str) -> String {
    format!("定期メッセージの検索キーワードを「{keyword}」に設定しました。")
}

pub fn interval_set(amount: u64, unit: &str) -> String {
    format!("定期メッセージの頻度を{amount} {unit}に設定しました。")
}

pub fn hello(name: &str) -> String {
    format!("Hello, {name}さん！")
}

pub fn scheduled_recommendation(text: &str) -> String {
    format!("{SCHEDULED_PREFIX}{text}")
}

pub fn scheduled_failure(err: &RemoteError) -> String {
    format!("{SCHEDULED_ERROR_PREFIX}{}", remote_error(err))
}

pub fn remote_error(err: &RemoteError) -> String {
    let body = match err {
        RemoteError::Transport(_) => "サーバーとの通信に失敗しました。".to_string(),
        RemoteError::HttpStatus(code) => {
            format!("サーバーから予期しない応答がありました。(ステータス: {code})")
        }
        RemoteError::Decode(_) => "サーバーからの応答の解析に失敗しました。".to_string(),
        RemoteError::BackendReported(message) => message.clone(),
        RemoteError::Empty => "結果が見つかりませんでした。".to_string(),
    };
    format!("{ERROR_PREFIX}{body}")
}

/// "1 hour", "90 minutes", "45 seconds" for log lines.
pub fn describe_interval(interval: Duration) -> String {
    let secs = interval.as_secs();
    if secs > 0 && secs % 3600 == 0 {
        let hours = secs / 3600;
        format!("{hours} hour{}", if hours == 1 { "" } else { "s" })
    } else if secs > 0 && secs % 60 == 0 {
        let minutes = secs / 60;
        format!("{minutes} minute{}", if minutes == 1 { "" } else { "s" })
    } else {
        format!("{secs} seconds")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_reported_is_relayed_verbatim() {
        let err = RemoteError::BackendReported("model unavailable".into());
        assert_eq!(remote_error(&err), "エラー: model unavailable");
    }

    #[test]
    fn test_every_error_has_prefix() {
        let errors = [
            RemoteError::Transport("refused".into()),
            RemoteError::HttpStatus(502),
            RemoteError::Decode("eof".into()),
            RemoteError::BackendReported("x".into()),
            RemoteError::Empty,
        ];
        for err in &errors {
            assert!(remote_error(err).starts_with(ERROR_PREFIX));
        }
        assert!(remote_error(&RemoteError::HttpStatus(502)).contains("502"));
    }

    #[test]
    fn test_transport_detail_not_shown_to_users() {
        let msg = remote_error(&RemoteError::Transport("tcp connect error 10.0.0.1".into()));
        assert!(!msg.contains("10.0.0.1"));
    }

    #[test]
    fn test_scheduled_wrappers() {
        assert_eq!(scheduled_recommendation("Song X"), "おすすめソング: Song X");
        assert_eq!(
            scheduled_failure(&RemoteError::Empty),
            "定期メッセージ: エラー: 結果が見つかりませんでした。"
        );
    }

    #[test]
    fn test_describe_interval() {
        assert_eq!(describe_interval(Duration::from_secs(60)), "1 minute");
        assert_eq!(describe_interval(Duration::from_secs(600)), "10 minutes");
        assert_eq!(describe_interval(Duration::from_secs(7200)), "2 hours");
        assert_eq!(describe_interval(Duration::from_secs(45)), "45 seconds");
    }
}
