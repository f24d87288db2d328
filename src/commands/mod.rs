// Register application subcommands.
// Each module corresponds to a specific `neu` command-line action.

// Scaffolds a new app from a template and downloads its runtime pieces.
pub mod create;
// Updates the framework binaries and client library of an existing project.
pub mod update;
// Displays the CLI version and the versions pinned in the project.
pub mod version;
