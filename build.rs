use std::fs;
use std::process::Command;

const WASM_CRATE_PATH: &str = "./wasm/Cargo.toml";
const WASM_FILE_NAME: &str = "wasm_chamber.wasm";

fn main() {
    println!("cargo::rerun-if-changed=wasm/src");
    println!("cargo::rerun-if-changed=wasm/Cargo.toml");
    println!("cargo::rerun-if-changed=dto/src");
    let compilation_path = "target-wasm";
    let pkg_path = "public/static/pkg";
    delete_entity(&format!("{pkg_path}/wasm_chamber.js"));
    delete_entity(&format!("{pkg_path}/wasm_chamber_bg.wasm"));
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "debug".to_owned());
    let profile = profile.as_str();
    let wasm_file_path =
        &format!("{compilation_path}/wasm32-unknown-unknown/{profile}/{WASM_FILE_NAME}");
    if compile_wasm(compilation_path, profile) {
        generate_bindings(wasm_file_path, pkg_path);
    }
}

/// Compile the frontend. Failures are reported as warnings so that the server still builds,
/// e.g. on a machine lacking the `wasm32-unknown-unknown` target.
fn compile_wasm(compilation_path: &str, profile: &str) -> bool {
    let target_dir = format!("--target-dir={compilation_path}");
    let manifest_path = format!("--manifest-path={WASM_CRATE_PATH}");
    let mut build_args = vec![
        "build",
        "--target=wasm32-unknown-unknown",
        target_dir.as_str(),
        manifest_path.as_str(),
    ];
    if profile == "release" {
        build_args.push("--release");
    }
    match Command::new("cargo").args(build_args).output() {
        Ok(output) if output.status.success() => true,
        Ok(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let last_line = stderr.lines().last().unwrap_or_default();
            println!("cargo::warning=Frontend compilation failed: {last_line}");
            false
        }
        Err(error) => {
            println!("cargo::warning=Can't run frontend compilation: {error}");
            false
        }
    }
}

/// Generate JS & TS bindings
fn generate_bindings(wasm_file_path: &str, pkg_path: &str) {
    let out_dir_param = format!("--out-dir={pkg_path}");
    let wasm_bindgen_args = ["--target=web", out_dir_param.as_str(), wasm_file_path];
    match Command::new("wasm-bindgen").args(wasm_bindgen_args).output() {
        Ok(output) if output.status.success() => {}
        Ok(output) => println!(
            "cargo::warning=Bindings generation failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        ),
        Err(error) => println!("cargo::warning=Can't run wasm-bindgen: {error}"),
    }
}

fn delete_entity(path: &str) {
    match fs::metadata(path) {
        Ok(metadata) if metadata.is_dir() => {
            if let Err(error) = fs::remove_dir_all(path) {
                println!("cargo::warning=Couldn't delete {path}: {error}");
            }
        }
        Ok(_) => {
            if let Err(error) = fs::remove_file(path) {
                println!("cargo::warning=Couldn't delete {path}: {error}");
            }
        }
        Err(_) => {}
    }
}
