//! Build script: fails the build when diagnostic keys and Fluent bundles
//! drift apart.

use std::error::Error;

#[path = "build_l10n_audit.rs"]
mod build_l10n_audit;

fn main() -> Result<(), Box<dyn Error>> {
    for path in build_l10n_audit::watched_paths() {
        println!("cargo:rerun-if-changed={path}");
    }
    build_l10n_audit::audit_localization_keys()
}
