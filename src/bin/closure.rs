//! closure: 予約受付の一時停止を確認・操作する管理用 CLI。
//! サーバーの設定エンドポイント経由で締め切りを読み書きする。

use std::{num::NonZeroU32, sync::Arc};

use adapter::{clock::SystemClock, http::setting::SettingApiClient};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use kernel::{
    model::booking_closure::{ClosureStatus, WriteOutcome},
    service::booking_closure::BookingClosureController,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "closure", about = "Inspect or change the booking closure")]
struct Cli {
    /// API のベース URL
    #[arg(long, env = "CLOSURE_API_BASE_URL", default_value = "http://localhost:8080")]
    base_url: String,
    /// 管理者のアクセストークン
    #[arg(long, env = "CLOSURE_ACCESS_TOKEN")]
    token: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// 現在の受付状態を表示する
    Status,
    /// 指定した時間だけ受付を停止する（1〜720 時間）
    Close {
        #[arg(value_parser = clap::value_parser!(u32).range(1..=720))]
        hours: u32,
    },
    /// 受付を再開する
    Reopen,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let mut client = SettingApiClient::new(cli.base_url);
    if let Some(token) = cli.token {
        client = client.with_access_token(token);
    }
    let controller = BookingClosureController::new(Arc::new(client), Arc::new(SystemClock));
    controller.refresh().await;

    let outcome = match cli.command {
        Command::Status => None,
        Command::Close { hours } => {
            let hours = NonZeroU32::new(hours).context("hours must be positive")?;
            Some(controller.close(hours).await)
        }
        Command::Reopen => Some(controller.reopen().await),
    };
    match outcome {
        Some(WriteOutcome::Other(message)) => bail!("failed to update booking closure: {message}"),
        Some(WriteOutcome::Unauthorized) => {
            eprintln!("warning: the server did not accept this session's write; the change is local only")
        }
        Some(WriteOutcome::Ok) | None => {}
    }

    print_status(&controller.status());
    Ok(())
}

fn print_status(status: &ClosureStatus) {
    match (&status.remaining_time, status.closure_end_time) {
        (Some(remaining), Some(end)) if status.is_closed => {
            println!("closed: bookings reopen {remaining} (at {end})")
        }
        _ => println!("open"),
    }
}
