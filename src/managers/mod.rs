// Tabshell state managers
// The registry owns the ordered set of open tabs and the active tab id.

pub mod tab_registry;
