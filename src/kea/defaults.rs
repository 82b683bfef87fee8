//! Default values for the configuration model.
//!
//! Centralized constants to avoid magic numbers scattered across the records.

/// Process name the default logger is registered under.
pub const LOGGER_NAME: &str = "kea-dhcp4";

/// Log file written by the default logger.
pub const LOGGER_OUTPUT: &str = "/var/log/kea/kea-dhcp4.log";

/// Severity of the default logger.
pub const LOGGER_SEVERITY: &str = "INFO";

/// Debug level of any logger that does not set one.
pub const LOGGER_DEBUGLEVEL: u32 = 0;

/// Whether logger output is flushed after every write.
pub const LOGGER_FLUSH: bool = false;

/// Control socket transport.
pub const CONTROL_SOCKET_TYPE: &str = "unix";

/// Control socket path.
pub const CONTROL_SOCKET_NAME: &str = "/tmp/kea4-ctrl-socket";

/// Lease database backend.
pub const LEASE_DATABASE_TYPE: &str = "memfile";

/// Lease file cleanup interval in seconds.
pub const LFC_INTERVAL: u32 = 3600;

/// Seconds between reclaim runs.
pub const RECLAIM_TIMER_WAIT_TIME: u32 = 10;

/// Seconds between flushes of reclaimed leases.
pub const FLUSH_RECLAIMED_TIMER_WAIT_TIME: u32 = 25;

/// Seconds a reclaimed lease is kept.
pub const HOLD_RECLAIMED_TIME: u32 = 3600;

/// Leases reclaimed per run.
pub const MAX_RECLAIM_LEASES: u32 = 100;

/// Milliseconds a reclaim run may take.
pub const MAX_RECLAIM_TIME: u32 = 250;

/// Incomplete reclaim cycles tolerated before warning.
pub const UNWARNED_RECLAIM_CYCLES: u32 = 5;

/// Global valid lifetime in seconds.
pub const VALID_LIFETIME: u32 = 3600;

/// Global renew timer (T1) in seconds.
pub const RENEW_TIMER: u32 = 900;

/// Global rebind timer (T2) in seconds.
pub const REBIND_TIMER: u32 = 1800;

/// Interface used for outbound packets.
pub const OUTBOUND_INTERFACE: &str = "same-as-inbound";

/// Whether interfaces are re-detected on reconfiguration.
pub const RE_DETECT: bool = true;

/// How the daemon treats inconsistent lease data.
pub const LEASE_CHECKS: &str = "fix-del";
