use std::fs;
use std::path::PathBuf;

use pwaicons::rendering::png::encode_solid;
use pwaicons::{IconConfig, Rgb, Strategy};
use sha2::{Digest, Sha256};

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(name);
    p
}

fn digest(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

// Signature plus the full IHDR chunk (length, tag, 192x192 8-bit RGB, CRC)
const ICON_192_HEADER: &str =
    "89504e470d0a1a0a0000000d49484452000000c0000000c00802000000ddbefb50";
const IEND_CHUNK: &str = "0000000049454e44ae426082";

#[test]
fn golden_manual_icon_matches_fixture() {
    let png = encode_solid(192, 192, Rgb::SLATE).unwrap();

    // Every byte outside the zlib stream is fixed.
    assert_eq!(hex::encode(&png[..33]), ICON_192_HEADER);
    assert_eq!(hex::encode(&png[png.len() - 12..]), IEND_CHUNK);

    let idat_len = u32::from_be_bytes(png[33..37].try_into().unwrap()) as usize;
    assert_eq!(&png[37..41], b"IDAT");
    assert_eq!(41 + idat_len + 4 + 12, png.len(), "nothing between IDAT and IEND");

    let idat = &png[41..41 + idat_len];
    let crc = u32::from_be_bytes(png[41 + idat_len..45 + idat_len].try_into().unwrap());
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(b"IDAT");
    hasher.update(idat);
    assert_eq!(crc, hasher.finalize());

    // deflate with a 32K window, inflating to the exact raster
    assert_eq!(idat[0], 0x78);
    let raster = miniz_oxide::inflate::decompress_to_vec_zlib(idat).expect("inflate");
    let mut row = vec![0u8];
    for _ in 0..192 {
        row.extend_from_slice(&[0x2c, 0x3e, 0x50]);
    }
    assert_eq!(raster, row.repeat(192));

    // The compressed stream itself is pinned by digest once recorded.
    let expected_path = golden_path("icon-192.sha256");
    if std::env::var("UPDATE_GOLDENS").is_ok() {
        fs::create_dir_all("tests/goldens/expected").ok();
        fs::write(&expected_path, digest(&png)).expect("write golden");
        println!("Updated golden: {:?}", expected_path);
        return;
    }
    if expected_path.exists() {
        let exp = fs::read_to_string(&expected_path).expect("unable to read golden");
        assert_eq!(digest(&png), exp.trim());
    }
}

fn generate_into(dir: &std::path::Path, strategy: Strategy) -> Vec<String> {
    let cfg = IconConfig {
        out_dir: dir.to_path_buf(),
        ..Default::default()
    };
    let generator = pwaicons::new_generator(strategy, cfg).expect("generator");
    generator
        .generate_all()
        .expect("generate")
        .iter()
        .map(|icon| digest(&fs::read(&icon.path).expect("read icon")))
        .collect()
}

#[test]
fn manual_generation_is_idempotent() {
    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();

    let first = generate_into(a.path(), Strategy::Manual);
    let second = generate_into(b.path(), Strategy::Manual);
    assert_eq!(first.len(), 2);
    assert_eq!(first, second);

    // rerunning over existing files overwrites them with the same bytes
    let again = generate_into(a.path(), Strategy::Manual);
    assert_eq!(first, again);
}

#[cfg(feature = "drawn")]
#[test]
fn drawn_generation_is_idempotent() {
    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();
    assert_eq!(
        generate_into(a.path(), Strategy::Drawn),
        generate_into(b.path(), Strategy::Drawn)
    );
}

#[test]
fn default_set_writes_both_files() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = IconConfig {
        out_dir: dir.path().join("icons"),
        ..Default::default()
    };
    let generator = pwaicons::new_generator(Strategy::Manual, cfg).unwrap();
    let icons = generator.generate_all().unwrap();

    let names: Vec<_> = icons
        .iter()
        .map(|i| i.path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["icon-192.png", "icon-512.png"]);
    for icon in &icons {
        let meta = fs::metadata(&icon.path).unwrap();
        assert_eq!(meta.len() as usize, icon.bytes_written);
    }
}
