use entities::ENTITIES;
use std::io::Write;
use std::{env, path::PathBuf};

fn main() {
    let out_dir: PathBuf = env::var("OUT_DIR").unwrap().parse().unwrap();

    // entity::unescape looks names up without the leading "&" or the
    // trailing ";", as in "amp" for "&amp;".  entities::ENTITIES lists most
    // names both with and without the ";"; only the terminated forms are
    // recognised, so keep those alone, which also leaves every key unique.
    let mut map = phf_codegen::Map::new();
    let mut max_len = 0;
    for e in ENTITIES
        .iter()
        .filter(|e| e.entity.starts_with('&') && e.entity.ends_with(';'))
    {
        let name = &e.entity[1..e.entity.len() - 1];
        max_len = max_len.max(name.len());
        map.entry(name, &format!("{:?}", e.characters));
    }

    let out = std::fs::File::create(out_dir.join("entitydata.rs")).unwrap();
    let mut bw = std::io::BufWriter::new(out);
    writeln!(
        bw,
        "static ENTITIES: phf::Map<&'static str, &'static str> = {};",
        map.build()
    )
    .unwrap();
    writeln!(bw, "const MAX_NAME_LENGTH: usize = {};", max_len).unwrap();
    println!("cargo:rerun-if-changed=build.rs");
}
