//! Runs conv-lint over this project as part of `cargo test`.

conv_lint::check!();
