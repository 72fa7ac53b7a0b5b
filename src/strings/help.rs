//! # Help Text
//!
//! Help message for bot commands.
//! Displayed to the user via the `!help` command.

pub const MAIN: &str = concat!(
    "以下に使い方を掲載\n",
    "!setchannel: このチャンネルを定期メッセージの送信先に設定します。\n",
    "!setkeyword <キーワード>: 定期メッセージの検索キーワードを設定します。\n",
    "!setinterval <数値> <単位>: 定期メッセージの頻度を設定します (例: `!setinterval 10 minutes`)\n",
    "!send <メッセージ>: メッセージに合った曲を検索して返信します。\n",
    "!hello: あいさつします。"
);
