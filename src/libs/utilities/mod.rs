// This is the main module file for the `utilities` directory.
// It declares the submodules within the `utilities` directory, making them
// accessible from `crate::libs::utilities::*`.

// Declare the `path_helpers` module (path trimming, version tags, directory copy/clear).
pub mod path_helpers;
// Declare the `compression` module (zip extraction).
pub mod compression;
// Declare the `assets` module (HTTP agent construction and streaming downloads).
pub mod assets;
