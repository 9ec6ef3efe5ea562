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
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! CLI entrypoint for the brand asset sync tool.

use anyhow::Result;

fn main() -> Result<()> {
    let staged = asset_sync::run()?;
    println!("brand assets staged into {}", staged.display());
    Ok(())
}
