//! 時刻ポート
use chrono::{DateTime, Utc};

/// 締め切りの開始・期限切れ判定に使う壁時計
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
