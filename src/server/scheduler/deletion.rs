//! Delayed deletion of users that never verified their email.
//!
//! Registration creates the user row inactive and schedules a one-shot job
//! that removes it again after a grace period. The job re-checks the
//! activation flag at fire time: verification may have happened while the
//! job was pending, and an activated account must never be deleted.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};
use tracing::{error, info};

use crate::server::data::user::UserRepository;
use crate::server::error::AppError;

/// Schedules the deferred cleanup jobs that registration depends on.
///
/// Behind a trait so service tests can substitute a recording or failing
/// double; the failing case exercises the compensating delete.
#[async_trait]
pub trait DeletionTasks: Send + Sync {
    /// Schedules "delete this user if still inactive" after `delay`.
    async fn schedule_user_deletion(
        &self,
        user_id: &str,
        delay: chrono::Duration,
    ) -> Result<(), JobSchedulerError>;
}

/// Production scheduler over `tokio-cron-scheduler` one-shot jobs.
pub struct DeletionScheduler {
    db: DatabaseConnection,
    scheduler: JobScheduler,
}

impl DeletionScheduler {
    /// Creates and starts the underlying job scheduler.
    ///
    /// # Arguments
    /// - `db` - Database connection the fired jobs run against
    ///
    /// # Returns
    /// - `Ok(Arc<DeletionScheduler>)` - Running scheduler ready to accept jobs
    /// - `Err(AppError)` - The scheduler could not be started
    pub async fn start(db: DatabaseConnection) -> Result<Arc<Self>, AppError> {
        let scheduler = JobScheduler::new().await?;
        scheduler.start().await?;

        info!("Deletion scheduler started");

        Ok(Arc::new(Self { db, scheduler }))
    }
}

#[async_trait]
impl DeletionTasks for DeletionScheduler {
    async fn schedule_user_deletion(
        &self,
        user_id: &str,
        delay: chrono::Duration,
    ) -> Result<(), JobSchedulerError> {
        let delay = delay.to_std().unwrap_or(std::time::Duration::ZERO);
        let db = self.db.clone();
        let user_id = user_id.to_string();

        let job = Job::new_one_shot_async(delay, move |_uuid, _lock| {
            let db = db.clone();
            let user_id = user_id.clone();
            Box::pin(async move {
                if let Err(e) = delete_if_inactive(&db, &user_id).await {
                    error!("Inactive-user cleanup failed for {}: {}", user_id, e);
                }
            })
        })?;

        self.scheduler.add(job).await?;

        Ok(())
    }
}

/// Deletes the user only if it is still inactive.
pub async fn delete_if_inactive(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<(), sea_orm::DbErr> {
    let repo = UserRepository::new(db);

    match repo.is_active(user_id).await? {
        Some(false) => {
            repo.delete(user_id).await?;
            info!("Deleted unverified user {}", user_id);
        }
        Some(true) => {}
        // Already gone; nothing to clean up.
        None => {}
    }

    Ok(())
}
