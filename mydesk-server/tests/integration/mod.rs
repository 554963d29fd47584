
use std::sync::Arc;
use std::time::Duration;

use tracing::Level;

use mydesk_server::{Coordinator, CoordinatorHandle, SweepConfig};

use crate::utils::MockSignalingOutput;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub fn create_test_coordinator() -> (CoordinatorHandle, MockSignalingOutput) {
    create_test_coordinator_with(SweepConfig::default())
}

/// Coordinator whose timer never fires during a test; sweeps run on demand.
pub fn create_manual_sweep_coordinator(max_age: Duration) -> (CoordinatorHandle, MockSignalingOutput) {
    create_test_coordinator_with(SweepConfig {
        interval: Duration::from_secs(24 * 60 * 60),
        max_age,
    })
}

pub fn create_test_coordinator_with(sweep: SweepConfig) -> (CoordinatorHandle, MockSignalingOutput) {
    let signaling = MockSignalingOutput::new_stored_only();
    let handle = Coordinator::spawn(Arc::new(signaling.clone()), sweep, 100);
    (handle, signaling)
}
