use chrono::Utc;

/// Stamp build metadata reported by `GET /api/health` / 写入健康检查接口返回的构建信息
fn main() {
    let build_time = Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();
    // "debug" or "release"; cargo always sets PROFILE for build scripts
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string());

    println!("cargo:rustc-env=BUILD_TIME={}", build_time);
    println!("cargo:rustc-env=BUILD_PROFILE={}", profile);
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=PROFILE");
}
