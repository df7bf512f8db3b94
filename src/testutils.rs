use std::{
    sync::{Arc, Mutex},
    thread::sleep,
    time::{Duration, Instant},
};

use crate::{
    errors::PushLaterError,
    task::{scheduled::ScheduledTask, Workload},
};

impl<W: Workload + Send + 'static> ScheduledTask<W> {
    pub fn await_finished(&self) {
        while !self.is_finished() {
            sleep(Duration::from_millis(2));
        }
    }
}

/// Records when (and how often) it was performed.
#[derive(Clone, Default)]
pub struct TestWorkload {
    pub performed: Arc<Mutex<Vec<Instant>>>,
    errfunc: Option<Arc<Box<dyn Fn() -> PushLaterError + Send + Sync>>>,
}

impl TestWorkload {
    pub fn fail_with(errfunc: impl Fn() -> PushLaterError + Send + Sync + 'static) -> Self {
        Self {
            errfunc: Some(Arc::new(Box::new(errfunc))),
            ..Default::default()
        }
    }

    pub fn performed_at(&self) -> Vec<Instant> {
        self.performed.lock().unwrap().clone()
    }
}

impl Workload for TestWorkload {
    fn id(&self) -> String {
        "test".to_string()
    }

    fn perform(self) -> Result<(), PushLaterError> {
        self.performed.lock().unwrap().push(Instant::now());
        if let Some(errfunc) = self.errfunc {
            return Err(errfunc());
        }
        Ok(())
    }
}
