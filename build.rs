use std::process::Command;

fn main() {
    let rustc_version = Command::new("rustc")
        .arg("--version")
        .output()
        .ok()
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .unwrap_or_else(|| "unknown".to_string());

    println!(
        "cargo:rustc-env=COMPENDIUM_RUSTC_VERSION={}",
        rustc_version.trim()
    );

    // Report the HTTP client version used for upstream calls in `--version` output
    let client_version = read_dep_version("reqwest").unwrap_or_else(|| "unknown".into());
    println!("cargo:rustc-env=COMPENDIUM_HTTP_CLIENT_VERSION={client_version}");

    println!("cargo:rerun-if-changed=Cargo.lock");
}

fn read_dep_version(crate_name: &str) -> Option<String> {
    // Parse the lock file to find the exact resolved version
    let lock_contents = std::fs::read_to_string("Cargo.lock").ok()?;
    let name_line = format!("name = \"{crate_name}\"");
    let mut found = false;
    for line in lock_contents.lines() {
        if line.trim() == name_line {
            found = true;
            continue;
        }
        if found && line.starts_with("version = ") {
            return Some(
                line.trim_start_matches("version = ")
                    .trim_matches('"')
                    .to_string(),
            );
        }
        if found && line.trim().is_empty() {
            break;
        }
    }
    None
}
