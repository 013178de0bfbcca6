use chrono::Utc;
use rustc_version::version_meta;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

const CDN_CONFIG: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/resources/cdn.json");
const SCHEMA_VERSION: u32 = 1;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct VueProbe {
    version: String,
    runtime_dev: String,
    runtime_prod: String,
    server_renderer: String,
}

#[derive(Deserialize)]
struct TailwindProbe {
    script: String,
    animate: String,
}

#[derive(Deserialize)]
struct CdnProbe {
    vue: VueProbe,
    tailwind: TailwindProbe,
    packages: BTreeMap<String, String>,
}

fn require_url(name: &str, url: &str) {
    if !url.starts_with("https://") {
        panic!("CDN entry '{name}' must be an https:// URL, got '{url}'");
    }
}

/// `GIT_COMMIT` when set by CI, otherwise the checked-out HEAD if git is available.
fn source_commit() -> Option<String> {
    if let Ok(commit) = env::var("GIT_COMMIT") {
        return Some(commit);
    }
    let output = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()?;
    output
        .status
        .success()
        .then(|| String::from_utf8_lossy(&output.stdout).trim().to_string())
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=resources/cdn.json");
    println!("cargo:rerun-if-env-changed=GIT_COMMIT");

    let raw = fs::read(CDN_CONFIG).unwrap_or_else(|err| {
        panic!("Failed to read CDN config '{CDN_CONFIG}': {err}");
    });

    let config: CdnProbe = serde_json::from_slice(&raw).unwrap_or_else(|err| {
        panic!("CDN config must match the vue/tailwind/packages layout: {err}");
    });
    if config.vue.version.trim().is_empty() {
        panic!("CDN config must declare a non-empty vue.version");
    }
    require_url("vue.runtimeDev", &config.vue.runtime_dev);
    require_url("vue.runtimeProd", &config.vue.runtime_prod);
    require_url("vue.serverRenderer", &config.vue.server_renderer);
    require_url("tailwind.script", &config.tailwind.script);
    require_url("tailwind.animate", &config.tailwind.animate);
    for (name, url) in &config.packages {
        if name.trim().is_empty() {
            panic!("CDN packages must use non-empty names");
        }
        require_url(&format!("packages.{name}"), url);
    }

    let mut hasher = Sha256::new();
    hasher.update(&raw);
    let digest = format!("{:x}", hasher.finalize());

    let rustc = version_meta().expect("rustc version is needed for build info");
    let git_commit = source_commit();

    let build_info = serde_json::json!({
        "schema_version": SCHEMA_VERSION,
        "package_version": env!("CARGO_PKG_VERSION"),
        "rustc_version": rustc.short_version_string,
        "build_timestamp_utc": Utc::now().to_rfc3339(),
        "vue_version": config.vue.version,
        "cdn_config_sha256": digest,
        "package_count": config.packages.len(),
        "source_commit": git_commit,
    });

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("cargo sets OUT_DIR"));
    let dest = out_dir.join("build_info.rs");
    let mut file = fs::File::create(&dest)
        .unwrap_or_else(|err| panic!("cannot create {}: {err}", dest.display()));
    writeln!(file, "pub const BUILD_INFO_JSON: &str = r#\"{build_info}\"#;")
        .unwrap_or_else(|err| panic!("cannot write {}: {err}", dest.display()));
}
