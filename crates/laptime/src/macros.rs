/// Runs `$block` as a whole session of `$timer`: starts before, stops after,
/// and evaluates to the block's value.
///
/// With a message, the session length is also logged at debug level.
#[macro_export]
macro_rules! timed {
    ($timer:expr, $block:block) => {{
        let timer = &mut $timer;
        timer.start();
        let result = $block;
        timer.stop();
        result
    }};
    ($msg:literal, $timer:expr, $block:block) => {{
        let timer = &mut $timer;
        let result = $crate::timed!(*timer, $block);
        if let Ok(latest) = timer.latest_duration() {
            $crate::tracing::debug!("{}: Took {}", $msg, latest);
        }
        result
    }};
}

/// Evaluates `$block` and records a sample on `$timer` once it is done.
#[macro_export]
macro_rules! lap {
    ($timer:expr, $block:block) => {{
        let result = $block;
        $timer.timestamp();
        result
    }};
}
