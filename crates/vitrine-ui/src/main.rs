#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Vitrine UI entry point. Real builds target wasm32 via Trunk; the native
//! binary only prints a pointer at the right build command.

#[cfg(target_arch = "wasm32")]
fn main() {
    vitrine_ui::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), std::io::Error> {
    use std::io::Write;

    writeln!(
        std::io::stderr(),
        "vitrine-ui targets wasm32; build the site with `trunk build` or `cargo build --target wasm32-unknown-unknown`."
    )
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    #[test]
    fn native_stub_reports_the_wasm_target() -> std::io::Result<()> {
        super::main()
    }
}
