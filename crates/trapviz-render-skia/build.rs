// File: crates/trapviz-render-skia/build.rs
// Summary: Links the Windows system libraries that Skia's font manager and ICU need.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW / RegQueryInfoKeyW used by the DirectWrite font manager
        println!("cargo:rustc-link-lib=advapi32");
    }
}
