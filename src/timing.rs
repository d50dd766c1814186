//! Frame pacing
//!
//! One simulation tick per rendered frame, targeting a fixed rate.
//! Best-effort real-time: a frame that runs long is not caught up.

use macroquad::time::get_time;

/// Target ticks per second.
pub const TICK_RATE: f64 = 60.0;

/// Block until the frame has consumed its full time slice.
///
/// Native: sleep for the bulk, then spin-wait the last moments for
/// precision. WASM: spin only, the browser paces frames anyway.
pub fn wait_for_tick(frame_start: f64) {
    let target = 1.0 / TICK_RATE;

    #[cfg(not(target_arch = "wasm32"))]
    {
        let spin_margin = 0.002; // 2ms
        while get_time() - frame_start + spin_margin < target {
            std::thread::sleep(std::time::Duration::from_millis(1));
        }
    }

    while get_time() - frame_start < target {
        std::hint::spin_loop();
    }
}
