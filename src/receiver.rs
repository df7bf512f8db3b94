use std::{sync::mpsc::Receiver, time::Duration};

use chrono::{DateTime, Local};
use log::{error, info};

#[derive(Clone, Debug, PartialEq)]
pub enum PushEvent {
    Armed(String, DateTime<Local>, Duration),
    Fired(String),
    Completed(String),
    Failed(String, String),
}

pub fn logging_receiver(events: &Receiver<PushEvent>) {
    while let Ok(event) = events.recv() {
        match event {
            PushEvent::Armed(name, target, wait) => info!(
                "{}: push scheduled for {} (in {})",
                name,
                target.format("%d-%m-%Y %H:%M"),
                humantime::format_duration(Duration::from_secs(wait.as_secs()))
            ),
            PushEvent::Fired(name) => info!("{}: pushing", name),
            PushEvent::Completed(name) => info!("{}: push completed", name),
            PushEvent::Failed(name, reason) => error!("{}: push failed: {}", name, reason),
        }
    }
}
