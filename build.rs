use chrono::Datelike;

const CONTACT_VARS: [&str; 5] = [
    "CONTACT_RELAY",
    "CONTACT_ENDPOINT",
    "CONTACT_RECIPIENT",
    "CONTACT_ACCESS_KEY",
    "CONTACT_FALLBACK_EMAIL",
];

fn main() {
    // Footer copyright year
    let build_year = chrono::Utc::now().year();
    println!("cargo:rustc-env=BUILD_YEAR={}", build_year);

    // Contact relay settings are read with option_env!, so a change has to rebuild
    for var in CONTACT_VARS {
        println!("cargo:rerun-if-env-changed={}", var);
    }

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
