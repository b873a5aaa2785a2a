/// Runtime values.
///
/// Defines `Object`, its type tags, the truthy rule, identity comparison, and
/// the inspect form printed by the REPL.
pub mod core;
/// Lexical scopes.
///
/// A chain of name-to-value maps, shared by reference so that closures keep
/// the scope they were defined in alive.
pub mod environment;
