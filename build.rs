//! Build script: compiles the bundled BLAS-style ddot kernel.

use std::env;

fn main() {
    println!("cargo:rustc-check-cfg=cfg(blas_kernel_active)");

    let build = cc::Build::new();
    let compiler = build.get_compiler();
    let is_gnu_like = compiler.is_like_gnu() || compiler.is_like_clang();
    let is_msvc = compiler.is_like_msvc();

    if !is_gnu_like && !is_msvc {
        println!("cargo:warning=No compatible C compiler found (needs GCC, Clang, or MSVC). BLAS kernel disabled.");
        return;
    }

    let compiler_name = if compiler.is_like_clang() {
        let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
        if target_os == "macos" {
            "Apple Clang"
        } else {
            "Clang"
        }
    } else if compiler.is_like_gnu() {
        "GCC"
    } else {
        "MSVC"
    };

    let rustflags = env::var("RUSTFLAGS").unwrap_or_default();
    let encoded_rustflags = env::var("CARGO_ENCODED_RUSTFLAGS").unwrap_or_default();
    let is_rust_native = rustflags.contains("target-cpu=native")
        || encoded_rustflags.contains("target-cpu=native");

    let mut build = cc::Build::new();

    let c_files = glob::glob("src/**/*.c")
        .expect("Failed to read glob pattern")
        .filter_map(|entry| entry.ok());

    for file in c_files {
        println!("cargo:rerun-if-changed={}", file.display());
        build.file(file);
    }

    build.opt_level(3).flag_if_supported("-ffast-math");

    if is_rust_native {
        // Match the Rust side so the kernel gets the same ISA baseline
        build.flag_if_supported("-march=native");
    }

    build.compile("ddot_kernel");

    println!("cargo:rustc-cfg=blas_kernel_active");
    println!("cargo:rustc-env=BLAS_KERNEL_COMPILER={}", compiler_name);
}
