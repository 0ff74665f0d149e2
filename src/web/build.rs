use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::Path;
use std::{env, fs};

const STYLES: &str = "assets/styles.css";

fn main() {
    println!("cargo:rerun-if-changed={}", STYLES);

    let mut hasher = DefaultHasher::new();
    fs::read(STYLES).unwrap_or_default().hash(&mut hasher);

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let source = format!(
        "pub const CSS_VERSION: &str = \"{:08x}\";\n",
        hasher.finish() as u32
    );

    fs::write(Path::new(&out_dir).join("css_hash.rs"), source).expect("write css_hash.rs");
}
