use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        mpsc::Sender,
        Arc,
    },
    thread::{spawn, JoinHandle},
};

use chrono::{DateTime, Local};
use log::warn;

use crate::{
    errors::PushLaterError,
    receiver::PushEvent,
    utils::{remaining, sleep_until},
};

use super::Workload;

fn emit(tx: &Sender<PushEvent>, event: PushEvent) {
    if let Err(err) = tx.send(event) {
        warn!("Failed to send event: {}", err);
    }
}

/// Single-shot task: waits for `target` on a worker thread, then performs
/// its workload exactly once. The outcome is collected with `finalize`.
pub struct ScheduledTask<W: Workload + Send> {
    id: String,
    target: DateTime<Local>,
    work: Option<W>,
    fired: Arc<AtomicBool>,
    worker: Option<JoinHandle<Result<(), PushLaterError>>>,
}

impl<W: Workload + Send + 'static> ScheduledTask<W> {
    pub fn new(work: W, target: DateTime<Local>) -> Self {
        Self {
            id: work.id(),
            target,
            work: Some(work),
            fired: Arc::new(AtomicBool::new(false)),
            worker: None,
        }
    }

    pub fn id(&self) -> String {
        self.id.clone()
    }

    pub fn is_running(&self) -> bool {
        self.worker.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// True once the wait is over and the workload has been handed off.
    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::SeqCst)
    }

    pub fn is_finished(&self) -> bool {
        self.worker.as_ref().is_some_and(|h| h.is_finished())
    }

    pub fn start(&mut self, tx: Sender<PushEvent>) -> Result<(), PushLaterError> {
        let work = self.work.take().ok_or(PushLaterError::AlreadyStarted)?;
        let name = self.id();
        let target = self.target;
        let fired = Arc::clone(&self.fired);
        emit(&tx, PushEvent::Armed(name.clone(), target, remaining(target)));
        self.worker = Some(spawn(move || {
            sleep_until(target);
            fired.store(true, Ordering::SeqCst);
            emit(&tx, PushEvent::Fired(name.clone()));
            match work.perform() {
                Ok(()) => {
                    emit(&tx, PushEvent::Completed(name));
                    Ok(())
                }
                Err(err) => {
                    emit(&tx, PushEvent::Failed(name, err.to_string()));
                    Err(err)
                }
            }
        }));
        Ok(())
    }

    /// Block until the worker is done and return what the workload returned.
    pub fn finalize(&mut self) -> Result<(), PushLaterError> {
        self.worker
            .take()
            .ok_or(PushLaterError::NotStarted)?
            .join()
            .map_err(|_| PushLaterError::WorkerPanicked)?
    }
}
