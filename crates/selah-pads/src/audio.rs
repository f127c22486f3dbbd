//! Engine thread
//!
//! Runs the playback engine in a background thread: drains the UI's
//! command queue at frame boundaries and reports lifecycle events back
//! over a plain mpsc channel that the UI bridges into a subscription.
//!
//! The thread also watches for process suspension (laptop sleep, SIGSTOP)
//! by checking the wall-clock gap between frames. A long gap means the
//! audio session was interrupted; the engine is suspended and an
//! `InterruptionEnded` event asks the UI to reactivate it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use selah_core::engine::{EngineCommand, EngineEvent, PadEngine};

/// Engine frame interval
const FRAME_INTERVAL: Duration = Duration::from_millis(5);

/// Wall-clock gap between frames that counts as an interruption
const SUSPEND_GAP: Duration = Duration::from_secs(2);

/// Handle keeping the engine thread alive
///
/// Dropping the handle stops the thread.
pub struct EngineHandle {
    stop: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl Drop for EngineHandle {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

/// Start the engine thread
///
/// Returns the handle and the receiving end of the engine event channel.
pub fn start_engine(rx: rtrb::Consumer<EngineCommand>) -> (EngineHandle, Receiver<EngineEvent>) {
    let stop = Arc::new(AtomicBool::new(false));
    let stop_flag = stop.clone();
    let (event_tx, event_rx) = channel();

    let thread = std::thread::Builder::new()
        .name("selah-engine".to_string())
        .spawn(move || run_engine(rx, event_tx, stop_flag))
        .expect("Failed to spawn engine thread");

    log::info!("Engine thread started ({}ms frames)", FRAME_INTERVAL.as_millis());

    (
        EngineHandle {
            stop,
            thread: Some(thread),
        },
        event_rx,
    )
}

fn run_engine(
    mut rx: rtrb::Consumer<EngineCommand>,
    events: Sender<EngineEvent>,
    stop: Arc<AtomicBool>,
) {
    let mut engine = PadEngine::new();
    let mut last_frame = Instant::now();

    while !stop.load(Ordering::Relaxed) {
        let now = Instant::now();
        if now.duration_since(last_frame) > SUSPEND_GAP {
            // The process was suspended between frames; by the time we
            // notice, the interruption is already over.
            log::info!(
                "Engine: detected {}s gap between frames, treating as audio interruption",
                now.duration_since(last_frame).as_secs()
            );
            engine.suspend();
            let _ = events.send(EngineEvent::Interrupted);
            let _ = events.send(EngineEvent::InterruptionEnded);
        }
        last_frame = now;

        engine.process_commands(&mut rx);

        std::thread::sleep(FRAME_INTERVAL);
    }

    log::info!("Engine thread stopped");
}
