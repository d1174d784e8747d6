use chrono::Datelike;

fn main() {
    // Stamp the build year for the footer
    let year = chrono::Utc::now().year();

    println!("cargo:rustc-env=BUILD_YEAR={}", year);

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=content");
}
