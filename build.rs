//! This build script copies the `memory.x` file from the crate root into a directory where
//! the linker can always find it at build time, and records the build time clock.

use std::{env, fs::File, io::Write, path::PathBuf};

use chrono::Local;

fn main() {
    let out = &PathBuf::from(env::var_os("OUT_DIR").unwrap());

    // Put memory layout in the output directory and ensure it's on the linker search path.
    // Host builds (tests) don't link the firmware.
    if env::var("TARGET").map_or(false, |target| target.starts_with("thumb")) {
        File::create(out.join("memory.x"))
            .unwrap()
            .write_all(include_bytes!("memory.x"))
            .unwrap();
        println!("cargo:rustc-link-search={}", out.display());
    }

    // create rs file with current UTC time and local offset
    let now = Local::now();
    File::create(out.join("utc.rs"))
        .unwrap()
        .write_fmt(format_args!(
            "const UTC_EPOCH: i64 = {:?};\nconst UTC_OFFSET: i32 = {:?};\n",
            now.timestamp(),
            now.offset().local_minus_utc()
        ))
        .unwrap();

    // No `rerun-if-changed` on purpose: Cargo then re-runs this script whenever any file in
    // the project changes, which keeps the build time clock fresh.
}
