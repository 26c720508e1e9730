use chrono::Duration;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const YEAR: i64 = 365 * DAY;

/// 残り時間を "in 2 hours" のような大まかな表現にする
pub fn format_remaining(remaining: Duration) -> String {
    let secs = remaining.num_seconds().max(0);
    if secs < MINUTE {
        return "in less than a minute".into();
    }
    let minutes = (secs + MINUTE / 2) / MINUTE;
    if minutes < 60 {
        return plural(minutes, "minute");
    }
    if secs < 48 * HOUR {
        return plural((secs + HOUR / 2) / HOUR, "hour");
    }
    if secs < YEAR {
        return plural((secs + DAY / 2) / DAY, "day");
    }
    plural(secs / YEAR, "year")
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("in 1 {unit}")
    } else {
        format!("in {n} {unit}s")
    }
}
