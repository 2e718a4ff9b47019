// File: crates/grapher-core/build.rs
// Summary: Links the Windows system libraries the Skia raster backend pulls in.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Skia's font manager calls RegOpenKeyExW and friends.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
