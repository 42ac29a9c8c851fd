//! Compiles the C fixture dylibs used by the integration tests.
//!
//! `render.c` exports a counting `render`; `norender.c` is loadable but has
//! no `render` export. Both land in `OUT_DIR`, where the tests pick them up
//! through `env!("OUT_DIR")`.

use std::env;
use std::path::{Path, PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=tests/fixtures/render.c");
    println!("cargo:rerun-if-changed=tests/fixtures/norender.c");

    // Fixtures are dlopen targets; only unix hosts build and run them.
    if env::var_os("CARGO_CFG_UNIX").is_none() {
        return;
    }

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set"));
    build_fixture("tests/fixtures/render.c", &out_dir.join("libvko_fixture.so"));
    build_fixture("tests/fixtures/norender.c", &out_dir.join("libvko_norender.so"));
}

fn build_fixture(source: &str, out: &Path) {
    let compiler = cc::Build::new().get_compiler();
    let mut cmd = compiler.to_command();
    cmd.args(["-shared", "-fPIC", "-o"]).arg(out).arg(source);
    let status = cmd
        .status()
        .unwrap_or_else(|err| panic!("failed to run {:?}: {err}", compiler.path()));
    assert!(status.success(), "fixture build failed for {source}");
}
