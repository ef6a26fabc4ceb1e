//! Shared doubles for service tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio_cron_scheduler::JobSchedulerError;

use entity::enums::{Addon, Language};

use crate::server::mailer::{Mailer, MailerError};
use crate::server::scheduler::deletion::DeletionTasks;
use crate::server::wowhead::{FetchedItem, ItemApi, ItemApiError};

/// One message captured by the recording mailer.
pub struct SentMail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Mailer that records every message instead of sending it.
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<SentMail>>,
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), MailerError> {
        self.sent.lock().unwrap().push(SentMail {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}

/// Mailer that rejects every recipient as non-existent.
pub struct RejectingMailer;

#[async_trait]
impl Mailer for RejectingMailer {
    async fn send(&self, _to: &str, _subject: &str, _body: &str) -> Result<(), MailerError> {
        Err(MailerError::NonExistentEmail)
    }
}

/// Scheduler double that records the user ids it was asked to clean up.
#[derive(Default)]
pub struct RecordingScheduler {
    pub scheduled: Mutex<Vec<String>>,
}

#[async_trait]
impl DeletionTasks for RecordingScheduler {
    async fn schedule_user_deletion(
        &self,
        user_id: &str,
        _delay: chrono::Duration,
    ) -> Result<(), JobSchedulerError> {
        self.scheduled.lock().unwrap().push(user_id.to_string());
        Ok(())
    }
}

/// Scheduler double whose scheduling always fails.
pub struct FailingScheduler;

#[async_trait]
impl DeletionTasks for FailingScheduler {
    async fn schedule_user_deletion(
        &self,
        _user_id: &str,
        _delay: chrono::Duration,
    ) -> Result<(), JobSchedulerError> {
        Err(JobSchedulerError::CantAdd)
    }
}

/// Item API double serving one canned item and counting calls.
pub struct StubItemApi {
    item: Option<FetchedItem>,
    pub calls: AtomicUsize,
}

impl StubItemApi {
    /// Stub that answers every lookup with `item`.
    pub fn with_item(item: FetchedItem) -> Self {
        Self {
            item: Some(item),
            calls: AtomicUsize::new(0),
        }
    }

    /// Stub that knows no items at all.
    pub fn empty() -> Self {
        Self {
            item: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ItemApi for StubItemApi {
    async fn get_item(
        &self,
        _wow_id: i32,
        _addon: Addon,
        _lang: Language,
    ) -> Result<Option<FetchedItem>, ItemApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.item.clone())
    }
}

/// A plausible fetched item for the given lookup key.
pub fn fetched_item(wow_id: i32, addon: Addon, lang: Language) -> FetchedItem {
    FetchedItem {
        wow_id,
        addon,
        lang,
        html_tooltip: format!("<table><tr><td>Item {wow_id}</td></tr></table>"),
        icon_url: format!("https://wow.zamimg.com/images/wow/icons/large/inv_{wow_id}.jpg"),
        origin_link: format!("https://www.wowhead.com/item={wow_id}"),
    }
}
