// build.rs for breathscan
//
// rust_embed requires the embedded folder to exist at compile time. When the
// crate is built without running `trunk build` first, dist/ is missing; write
// a placeholder page so the server always compiles.

use std::path::Path;

fn main() {
    let dist = Path::new(env!("CARGO_MANIFEST_DIR")).join("dist");

    if !dist.exists() {
        std::fs::create_dir_all(&dist).expect("failed to create placeholder dist");
        std::fs::write(
            dist.join("index.html"),
            "<!-- placeholder: run `trunk build --release` to build the real dashboard -->\n",
        )
        .expect("failed to write placeholder index.html");
    }

    println!("cargo:rerun-if-changed=dist");
    println!("cargo:rerun-if-env-changed=BREATHSCAN_API_URL");
}
