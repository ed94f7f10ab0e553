//! Tilt sensor backed by an atomic, written from the host side.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;

use invaders_sim::collaborators::MotionSensor;

/// Bit pattern meaning "no sample yet".
const NO_SAMPLE: u32 = u32::MAX;

#[derive(Debug)]
struct Shared {
    sample_bits: AtomicU32,
    stopped: AtomicBool,
}

/// Sensor side, owned by the engine.
#[derive(Debug)]
pub struct TiltSensor {
    shared: Arc<Shared>,
}

/// Writer side. Cloneable; usable from any thread.
#[derive(Debug, Clone)]
pub struct TiltHandle {
    shared: Arc<Shared>,
}

/// Create a connected sensor/handle pair.
pub fn tilt_sensor() -> (TiltSensor, TiltHandle) {
    let shared = Arc::new(Shared {
        sample_bits: AtomicU32::new(NO_SAMPLE),
        stopped: AtomicBool::new(false),
    });
    (
        TiltSensor {
            shared: Arc::clone(&shared),
        },
        TiltHandle { shared },
    )
}

impl TiltHandle {
    /// Publish a new lateral acceleration sample (g). Ignored once stopped.
    pub fn set(&self, sample: f32) {
        if self.is_stopped() || !sample.is_finite() {
            return;
        }
        self.shared.sample_bits.store(sample.to_bits(), Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.shared.stopped.load(Ordering::Acquire)
    }
}

impl MotionSensor for TiltSensor {
    fn latest_sample(&self) -> Option<f32> {
        if self.shared.stopped.load(Ordering::Acquire) {
            return None;
        }
        match self.shared.sample_bits.load(Ordering::Relaxed) {
            NO_SAMPLE => None,
            bits => Some(f32::from_bits(bits)),
        }
    }

    fn stop(&mut self) {
        self.shared.stopped.store(true, Ordering::Release);
        log::debug!("tilt sensor stopped");
    }

    fn restart(&mut self) {
        self.shared.sample_bits.store(NO_SAMPLE, Ordering::Relaxed);
        self.shared.stopped.store(false, Ordering::Release);
        log::debug!("tilt sensor restarted");
    }
}
