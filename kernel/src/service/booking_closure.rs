//! 予約受付の締め切りを管理するコントローラ
//!
//! 状態は `OPEN` と `CLOSED(end_time)` の 2 つで、遷移は次のとおり。
//!
//! - `close(hours)` で `CLOSED(now + hours)` へ
//! - `reopen()` で `OPEN` へ
//! - 終了時刻に達すると、設定ストアに問い合わせずに手元で `OPEN` へ
//!
//! 設定ストアが正であり、コントローラはその読み取りキャッシュを持つ。
//! キャッシュは終了時刻で自然に失効する。
use std::{
    num::NonZeroU32,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex, PoisonError, Weak,
    },
    time::Duration,
};

use shared::config::ClosureConfig;
use tokio::{
    sync::watch,
    task::JoinHandle,
    time::{interval_at, Instant, MissedTickBehavior},
};

use crate::{
    clock::Clock,
    model::{
        booking_closure::{
            ClosureRecord, ClosureState, ClosureStatus, WriteOutcome, BOOKING_CLOSURE_KEY,
        },
        setting::event::UpsertSetting,
    },
    repository::setting::SettingRepository,
};

pub struct BookingClosureController {
    settings: Arc<dyn SettingRepository>,
    clock: Arc<dyn Clock>,
    check_interval: Duration,
    state: watch::Sender<ClosureState>,
    refreshing: AtomicBool,
    // shutdown 後に完了した処理の結果を状態へ反映しないためのフラグ
    active: AtomicBool,
    ticker: Mutex<Option<JoinHandle<()>>>,
}

impl BookingClosureController {
    pub fn new(settings: Arc<dyn SettingRepository>, clock: Arc<dyn Clock>) -> Self {
        let (state, _) = watch::channel(ClosureState::default());
        Self {
            settings,
            clock,
            check_interval: ClosureConfig::DEFAULT_CHECK_INTERVAL,
            state,
            refreshing: AtomicBool::new(false),
            active: AtomicBool::new(true),
            ticker: Mutex::new(None),
        }
    }

    pub fn with_check_interval(mut self, check_interval: Duration) -> Self {
        self.check_interval = check_interval;
        self
    }

    /// 状態が変わるたびに通知を受け取る
    pub fn subscribe(&self) -> watch::Receiver<ClosureState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> ClosureState {
        self.state.borrow().clone()
    }

    /// 現在時刻で評価した読み取り用の状態。残り時間は毎回計算し直す
    pub fn status(&self) -> ClosureStatus {
        self.state.borrow().status_at(self.clock.now())
    }

    pub fn is_closed(&self) -> bool {
        self.state.borrow().is_closed_at(self.clock.now())
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// 設定ストアから締め切り状態を読み直す。
    ///
    /// レコードがない、読み取りに失敗した、値が解釈できない場合は受付中とする。
    /// 期限切れのレコードも受付中とみなすが、ストアへの書き戻しはしない。
    /// 実行中に呼ばれた場合は何もせずに戻る。
    pub async fn refresh(&self) {
        let Some(_guard) = RefreshGuard::acquire(self) else {
            tracing::debug!("booking closure refresh already in flight; skipped");
            return;
        };

        self.update(|state| state.is_loading = true);
        let record = self.load_record().await;
        let now = self.clock.now();
        self.update(|state| {
            state.apply_record(record, now);
            state.is_loading = false;
        });
    }

    /// `hours` 時間だけ予約受付を停止する
    pub async fn close(&self, hours: NonZeroU32) -> WriteOutcome {
        // 終了時刻は書き込み前に確定させる
        let Some(end_time) = self
            .clock
            .now()
            .checked_add_signed(chrono::Duration::hours(i64::from(hours.get())))
        else {
            tracing::warn!(hours = hours.get(), "booking closure end time is out of range");
            return WriteOutcome::Other("hours out of range".into());
        };
        self.write(ClosureRecord::closed_until(end_time)).await
    }

    /// 予約受付を再開する
    pub async fn reopen(&self) -> WriteOutcome {
        self.write(ClosureRecord::open()).await
    }

    /// 終了時刻を過ぎた締め切りを手元で解除する。ストアには触れない
    pub fn check_expiry(&self) -> bool {
        if !self.is_active() {
            return false;
        }
        let now = self.clock.now();
        let expired = self.state.send_if_modified(|state| state.expire_at(now));
        if expired {
            tracing::info!("booking closure reached its end time; bookings reopened locally");
        }
        expired
    }

    /// 期限切れ確認のタイマーを開始する
    pub fn start(self: &Arc<Self>) {
        let handle = tokio::spawn(run_expiry_check(
            Arc::downgrade(self),
            self.check_interval,
        ));
        let mut ticker = self.ticker.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = ticker.replace(handle) {
            previous.abort();
        }
    }

    /// タイマーを止め、以降に完了した処理の結果を無視する
    pub fn shutdown(&self) {
        self.active.store(false, Ordering::Release);
        let handle = self
            .ticker
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(handle) = handle {
            handle.abort();
        }
    }

    async fn load_record(&self) -> ClosureRecord {
        match self.settings.find_by_key(BOOKING_CLOSURE_KEY).await {
            Ok(Some(setting)) => ClosureRecord::from_value(&setting.value).unwrap_or_else(|e| {
                tracing::warn!(
                    error.message = %e,
                    "booking closure record is malformed; treating bookings as open"
                );
                ClosureRecord::open()
            }),
            Ok(None) => ClosureRecord::open(),
            Err(e) => {
                tracing::warn!(
                    error.message = %e,
                    "failed to read booking closure; treating bookings as open"
                );
                ClosureRecord::open()
            }
        }
    }

    async fn write(&self, record: ClosureRecord) -> WriteOutcome {
        let event = UpsertSetting::new(BOOKING_CLOSURE_KEY.into(), record.to_value());
        let outcome = WriteOutcome::from(self.settings.upsert(event).await);
        let now = self.clock.now();

        match &outcome {
            WriteOutcome::Ok => self.update(|state| {
                state.apply_record(record, now);
                state.last_error = None;
            }),
            WriteOutcome::Unauthorized => {
                // ストアに拒否されても手元の状態には反映する
                tracing::warn!(
                    is_closed = record.is_closed,
                    "booking closure write was rejected as unauthorized; applied locally only"
                );
                self.update(|state| {
                    state.apply_record(record, now);
                    state.last_error = None;
                });
            }
            WriteOutcome::Other(message) => {
                tracing::error!(error.message = %message, "failed to persist booking closure");
                self.update(|state| state.last_error = Some(message.clone()));
            }
        }

        outcome
    }

    fn update(&self, f: impl FnOnce(&mut ClosureState)) {
        if !self.is_active() {
            return;
        }
        self.state.send_modify(f);
    }
}

impl Drop for BookingClosureController {
    fn drop(&mut self) {
        let ticker = self.ticker.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = ticker.take() {
            handle.abort();
        }
    }
}

async fn run_expiry_check(controller: Weak<BookingClosureController>, period: Duration) {
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        ticker.tick().await;
        let Some(controller) = controller.upgrade() else {
            break;
        };
        controller.check_expiry();
    }
}

struct RefreshGuard<'a>(&'a BookingClosureController);

impl<'a> RefreshGuard<'a> {
    fn acquire(controller: &'a BookingClosureController) -> Option<Self> {
        controller
            .refreshing
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(controller))
    }
}

impl Drop for RefreshGuard<'_> {
    fn drop(&mut self) {
        // 読み込み中の表示は shutdown 後や中断時にも必ず下ろす
        self.0
            .state
            .send_if_modified(|state| std::mem::replace(&mut state.is_loading, false));
        self.0.refreshing.store(false, Ordering::Release);
    }
}
