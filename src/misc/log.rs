/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information when driving a session, or when inspecting the engine.

Note, no log implementation is provided by the library.
The cli installs [env_logger](https://docs.rs/env_logger/latest/env_logger/) when built with the `log` feature, and so:
- Logs related to [sessions](crate::session) can be filtered with `RUST_LOG=session …` or,
- Logs of reductions without information about propagation can be found with `RUST_LOG=reduction=info …`
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [session](crate::session) state machine.
    pub const SESSION: &str = "session";

    /// Logs related to the [option registry](crate::config::registry).
    pub const OPTIONS: &str = "options";

    /// Logs related to [BCP](crate::procedures::bcp)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to [analysis](crate::procedures::analysis)
    pub const ANALYSIS: &str = "analysis";

    /// Logs related to clause deletion
    pub const REDUCTION: &str = "reduction";

    /// Logs related to [restarts](crate::procedures::schedulers)
    pub const RESTART: &str = "restart";

    /// Logs related to the [C bindings](crate::ipasir)
    pub const IPASIR: &str = "ipasir";
}
